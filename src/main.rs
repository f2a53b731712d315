// SPDX-License-Identifier: MPL-2.0
use iced_pomodoro::app::{self, Flags};
use std::path::PathBuf;
use std::process::ExitCode;

const HELP: &str = "\
iced_pomodoro

USAGE:
  iced_pomodoro [OPTIONS] [IMAGE]...

OPTIONS:
  --lang <LOCALE>         UI language (e.g. en-US, fr)
  --config-dir <DIR>      Directory containing settings.toml
  --diagnostics <FILE>    Write an activity report to FILE on exit
  -h, --help              Print this help

ARGS:
  [IMAGE]...              Images to use as backgrounds
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let diagnostics_path: Option<PathBuf> = args.opt_value_from_os_str("--diagnostics", |raw| {
        Ok::<_, std::convert::Infallible>(PathBuf::from(raw))
    })?;
    let images = args.finish().into_iter().map(PathBuf::from).collect();

    Ok(Some(Flags {
        lang,
        config_dir,
        diagnostics_path,
        images,
    }))
}

fn main() -> ExitCode {
    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
