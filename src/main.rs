// SPDX-License-Identifier: MPL-2.0
use tracing_subscriber::EnvFilter;
use wrist_notify::app::{self, Flags};

const HELP: &str = "\
wrist_notify - notification screen simulator

USAGE:
  wrist_notify [OPTIONS]

OPTIONS:
  --config <DIR>   Directory holding settings.toml
  -v, --verbose    Log at debug level (RUST_LOG overrides)
  -h, --help       Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let verbose = args.contains(["-v", "--verbose"]);
    let config_dir = match args.opt_value_from_str::<_, String>("--config") {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    app::run(Flags { config_dir })
}
