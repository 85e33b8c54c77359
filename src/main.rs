// SPDX-License-Identifier: MPL-2.0
use reel_play::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
ReelPlay - browse and play the videos of a folder

USAGE:
  reel_play [OPTIONS]

OPTIONS:
  --lang <BCP-47>      Interface language (e.g. en-US, fr)
  --library <DIR>      Folder to list instead of the configured one
  --config-dir <DIR>   Folder holding settings.toml
  --i18n-dir <DIR>     Extra translation files (.ftl)
  -h, --help           Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        library: args.opt_value_from_str("--library")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        i18n_dir: args.opt_value_from_str("--i18n-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }
    Ok(Some(flags))
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("reel_play=info")),
        )
        .init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(error) => {
            eprintln!("error: {error}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}
