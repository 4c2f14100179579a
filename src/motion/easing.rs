// SPDX-License-Identifier: MPL-2.0
//! Easing curves.
//!
//! Curves follow the usual tweening-library definitions: `powerN.out` is
//! `1 - (1 - t)^(N + 1)`, `back` overshoots by a configurable amount.

/// Default overshoot of the `back` curves.
pub const DEFAULT_OVERSHOOT: f32 = 1.70158;

/// Easing curve applied to a normalized progress `t ∈ [0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    #[default]
    Linear,
    Power1Out,
    Power2In,
    Power2Out,
    Power3Out,
    /// Pulls back before moving; the value is the overshoot.
    BackIn(f32),
    /// Overshoots the destination before settling.
    BackOut(f32),
}

impl Easing {
    /// Maps linear progress to eased progress.
    ///
    /// Input is clamped to `[0, 1]`; the endpoints are exact for every curve.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Power1Out => 1.0 - (1.0 - t).powi(2),
            Easing::Power2In => t.powi(3),
            Easing::Power2Out => 1.0 - (1.0 - t).powi(3),
            Easing::Power3Out => 1.0 - (1.0 - t).powi(4),
            Easing::BackIn(s) => t * t * ((s + 1.0) * t - s),
            Easing::BackOut(s) => {
                let u = t - 1.0;
                1.0 + (s + 1.0) * u.powi(3) + s * u.powi(2)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    const ALL: [Easing; 7] = [
        Easing::Linear,
        Easing::Power1Out,
        Easing::Power2In,
        Easing::Power2Out,
        Easing::Power3Out,
        Easing::BackIn(2.0),
        Easing::BackOut(1.7),
    ];

    #[test]
    fn endpoints_are_exact() {
        for easing in ALL {
            assert_abs_diff_eq!(easing.apply(0.0), 0.0, epsilon = 1e-6);
            assert_abs_diff_eq!(easing.apply(1.0), 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn input_is_clamped() {
        assert_abs_diff_eq!(Easing::Power2Out.apply(-3.0), 0.0);
        assert_abs_diff_eq!(Easing::Power2Out.apply(7.0), 1.0);
    }

    #[test]
    fn out_curves_lead_linear() {
        assert!(Easing::Power1Out.apply(0.5) > 0.5);
        assert!(Easing::Power2Out.apply(0.5) > Easing::Power1Out.apply(0.5));
        assert!(Easing::Power2In.apply(0.5) < 0.5);
    }

    #[test]
    fn back_curves_overshoot() {
        assert!(Easing::BackIn(2.0).apply(0.2) < 0.0);
        assert!(Easing::BackOut(2.0).apply(0.8) > 1.0);
    }
}
