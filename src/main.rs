// SPDX-License-Identifier: MPL-2.0
use iced_reel::app::{self, Flags};
use iced_reel::config::{self, Config};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: iced_reel [--lang <id>] [--config <path>] [SOURCE [POSTER]]

Options:
  --lang <id>       Interface language (e.g. en-US, fr)
  --config <path>   Read settings from this file
  -h, --help        Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("iced_reel=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{USAGE}");
        return Ok(());
    }

    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        tracing::warn!(error = %err, "ignoring --lang");
        None
    });
    let config_path: Option<PathBuf> = args.opt_value_from_str("--config").unwrap_or_else(|err| {
        tracing::warn!(error = %err, "ignoring --config");
        None
    });
    let mut positional = args
        .finish()
        .into_iter()
        .filter_map(|arg| arg.into_string().ok());

    let flags = Flags {
        lang,
        config: load_config(config_path),
        source: positional.next(),
        poster: positional.next(),
    };

    app::run(flags)
}

fn load_config(path: Option<PathBuf>) -> Config {
    let loaded = match &path {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    };
    loaded.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "using default settings");
        Config::default()
    })
}
