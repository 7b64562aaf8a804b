// SPDX-License-Identifier: MPL-2.0
use scrapbook::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
scrapbook - a diary of flippable pages

USAGE:
  scrapbook [OPTIONS] [LINK]

ARGS:
  <LINK>                Share link (scrapbook://open?diary=<id>) or diary id

OPTIONS:
  -h, --help            Print this help
  --lang <LOCALE>       Interface language (e.g. en-US, fr)
  --i18n-dir <DIR>      Extra directory of .ftl translation files
  --data-dir <DIR>      Where diaries and state are stored
  --config-dir <DIR>    Where settings.toml is read from
  --diary <ID>          Open a diary by id

ENVIRONMENT:
  SCRAPBOOK_DATA_DIR    Same as --data-dir
  SCRAPBOOK_CONFIG_DIR  Same as --config-dir
  RUST_LOG              Log filter (default: info)
";

fn parse_args() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let i18n_dir = args.opt_value_from_str("--i18n-dir")?;
    let data_dir = args.opt_value_from_str("--data-dir")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let diary: Option<String> = args.opt_value_from_str("--diary")?;
    let positional = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    Ok(Some(Flags {
        lang,
        i18n_dir,
        data_dir,
        config_dir,
        link: diary.or(positional),
    }))
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let flags = match parse_args() {
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

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

    app::run(flags)
}
