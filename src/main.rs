// SPDX-License-Identifier: MPL-2.0
use iced_retouch::app::{self, paths, Flags};
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const HELP: &str = "\
IcedRetouch - AI-assisted photo retouching

USAGE:
  iced_retouch [OPTIONS] [IMAGE]

OPTIONS:
  --lang <LOCALE>        UI language (e.g. en-US, es)
  --config-dir <DIR>     Directory holding settings.toml
  --log-level <FILTER>   Log filter (e.g. debug, iced_retouch=trace)
  -h, --help             Print this help

ENVIRONMENT:
  GEMINI_API_KEY           Key for the image service
  ICED_RETOUCH_CONFIG_DIR  Config directory when --config-dir is absent
  RUST_LOG                 Log filter when --log-level is absent
";

const DEFAULT_LOG_FILTER: &str = "iced_retouch=info";

struct Args {
    flags: Flags,
    log_level: Option<String>,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }

    let lang: Option<String> = args.opt_value_from_str("--lang")?;
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir")?;
    let log_level: Option<String> = args.opt_value_from_str("--log-level")?;
    let image_path = args.finish().into_iter().next().map(PathBuf::from);

    Ok(Some(Args {
        flags: Flags {
            lang,
            config_dir,
            image_path,
        },
        log_level,
    }))
}

fn init_tracing(log_level: Option<&str>) {
    let filter = match log_level {
        Some(level) => tracing_subscriber::EnvFilter::try_new(level).ok(),
        None => tracing_subscriber::EnvFilter::try_from_default_env().ok(),
    }
    .unwrap_or_else(|| DEFAULT_LOG_FILTER.into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> iced::Result {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => return Ok(()),
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    init_tracing(args.log_level.as_deref());
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting IcedRetouch");

    paths::init_cli_overrides(args.flags.config_dir.clone());
    app::run(args.flags)
}
