// SPDX-License-Identifier: MPL-2.0
use iced_image_loader::app::{self, Flags};

const HELP: &str = "\
Usage: iced-image-loader [OPTIONS]

Options:
  --lang <LOCALE>        Interface language (e.g. en-US, fr)
  --config-dir <PATH>    Directory holding settings.toml
  -h, --help             Print this help
";

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("iced_image_loader=info"))
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        log::warn!("ignoring --lang: {err}");
        None
    });
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        log::warn!("ignoring --config-dir: {err}");
        None
    });
    for extra in args.finish() {
        log::warn!("unexpected argument {}", extra.to_string_lossy());
    }

    app::run(Flags { lang, config_dir })
}
