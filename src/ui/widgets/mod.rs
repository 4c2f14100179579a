// SPDX-License-Identifier: MPL-2.0
pub mod progress_track;

pub use progress_track::ProgressTrack;
