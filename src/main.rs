// SPDX-License-Identifier: MPL-2.0
use doc_gallery::app::{self, paths, Flags};
use doc_gallery::logging;

const HELP: &str = "\
DocGallery

USAGE:
  doc_gallery [OPTIONS]

OPTIONS:
  --lang <LOCALE>        Interface language (e.g. en-US, fr)
  --config-dir <DIR>     Directory holding settings.toml
  --catalog <FILE>       Catalog manifest (TOML) to display
  -h, --help             Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        catalog: args.opt_value_from_str("--catalog")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    logging::init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}
