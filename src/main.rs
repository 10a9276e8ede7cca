// SPDX-License-Identifier: MPL-2.0
use step_fade::app::{self, Flags};

const USAGE: &str = "\
Usage: step-fade [OPTIONS] [ITEM]...

Cross-fades between ITEMs (or the cards from settings.toml).

Options:
  --duration <MS>      Full transition duration in milliseconds
  --timing <NAME>      Timing function (e.g. linear, ease-in-out)
  --coalesce           Retarget pending transitions instead of stacking them
  --config-dir <DIR>   Directory holding settings.toml
  -h, --help           Print this help
";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{USAGE}");
        std::process::exit(0);
    }

    Ok(Flags {
        duration_ms: args.opt_value_from_str("--duration")?,
        timing_function: args.opt_value_from_str("--timing")?,
        coalesce: args.contains("--coalesce"),
        config_dir: args.opt_value_from_str("--config-dir")?,
        items: args
            .finish()
            .into_iter()
            .filter_map(|arg| arg.into_string().ok())
            .collect(),
    })
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}
