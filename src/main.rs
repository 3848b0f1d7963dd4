// SPDX-License-Identifier: MPL-2.0
use learnreel::app::{self, paths, Flags};
use learnreel::logging::{self, LogConfig};
use learnreel::ui::theming::ThemeMode;

const HELP: &str = "\
LearnReel

USAGE:
  learnreel [OPTIONS]

OPTIONS:
  --lang <bcp47>        Interface language (en-US, fr)
  --config-dir <dir>    Directory holding settings.toml
  --theme <mode>        light, dark or system
  --admin               Expose the admin dashboard
  -v, --verbose         More logging (repeat for trace)
  -h, --help            Print this help
";

struct Args {
    flags: Flags,
    config_dir: Option<String>,
    verbosity: u8,
}

fn parse_args() -> Result<Args, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let mut verbosity = 0u8;
    while args.contains(["-v", "--verbose"]) {
        verbosity = verbosity.saturating_add(1);
    }

    let theme = args
        .opt_value_from_fn("--theme", |raw: &str| {
            ThemeMode::parse(raw).ok_or_else(|| format!("unknown theme '{raw}'"))
        })?;

    let parsed = Args {
        flags: Flags {
            lang: args.opt_value_from_str("--lang")?,
            theme,
            admin: args.contains("--admin"),
        },
        config_dir: args.opt_value_from_str("--config-dir")?,
        verbosity,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        return Err(pico_args::Error::ArgumentParsingFailed {
            cause: format!("unexpected arguments: {rest:?}"),
        });
    }
    Ok(parsed)
}

fn main() -> iced::Result {
    let args = match parse_args() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    logging::init(&LogConfig::from_verbosity(args.verbosity));
    paths::init_cli_overrides(args.config_dir);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting LearnReel");

    app::run(args.flags)
}
