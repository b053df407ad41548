// src/cli.rs
use std::{env, path::PathBuf, time::Duration};

use crate::config::options::{AppOptions, SourceKind};
use crate::error::{Error, Result};
use crate::params::Params;
use crate::progress::StdoutProgress;
use crate::prompt::{Console, Preset};
use crate::runner::{self, Outcome};

pub const HELP: &str = include_str!("cli_help.txt");

/// Parse the process arguments, then run against stdin/stdout.
pub fn run() -> Result<Option<Outcome>> {
    let mut params = parse_args(AppOptions::default(), env::args().skip(1))?;
    crate::logging::init(params.verbose);
    params.opts.source.load_api_key();

    if params.help {
        println!("{HELP}");
        return Ok(None);
    }

    let mut progress = StdoutProgress;
    let outcome = match params.answer {
        Some(answer) => runner::run(&params.opts, &mut Preset(answer), &mut progress)?,
        None => runner::run(&params.opts, &mut Console::stdio(), &mut progress)?,
    };
    log::debug!("run finished: {outcome:?}");
    Ok(Some(outcome))
}

/// Apply command-line flags on top of `opts`.
pub fn parse_args<I>(opts: AppOptions, args: I) -> Result<Params>
where
    I: IntoIterator<Item = String>,
{
    let mut params = Params::new(opts);
    let mut explicit_kind: Option<SourceKind> = None;
    let mut skin: Option<String> = None;
    let mut name: Option<String> = None;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        let mut value = |flag: &str| {
            args.next().ok_or_else(|| Error::InvalidArgs(format!("Missing value for {flag}")))
        };
        match a.as_str() {
            "--local" => set_kind(&mut explicit_kind, SourceKind::Local)?,
            "--remote" => set_kind(&mut explicit_kind, SourceKind::Remote)?,
            "--skin" => skin = Some(value("--skin")?),
            "--name" => name = Some(value("--name")?),
            "--data" => params.opts.source.data_path = PathBuf::from(value("--data")?),
            "--template" => params.opts.page.template_path = PathBuf::from(value("--template")?),
            "-o" | "--out" => params.opts.page.out_path = PathBuf::from(value("--out")?),
            "--group-by" => {
                let key = value("--group-by")?;
                if key.trim().is_empty() {
                    return Err(Error::InvalidArgs(s!("--group-by needs a characteristic name")));
                }
                params.opts.page.group_key = key.trim().to_string();
            }
            "--timeout" => {
                let v = value("--timeout")?;
                let secs: u64 = v.parse()
                    .map_err(|_| Error::InvalidArgs(format!("Invalid timeout: {v}")))?;
                if secs == 0 {
                    return Err(Error::InvalidArgs(s!("Timeout must be at least 1 second")));
                }
                params.opts.source.timeout = Duration::from_secs(secs);
            }
            "--api-url" => params.opts.source.api_url = value("--api-url")?,
            "-v" | "--verbose" => params.verbose = true,
            "-h" | "--help" => params.help = true,
            _ => return Err(Error::InvalidArgs(format!("Unknown arg: {a}"))),
        }
    }

    params.opts.source_kind = match (explicit_kind, &skin, &name) {
        (_, Some(_), Some(_)) => {
            return Err(Error::InvalidArgs(s!("--skin and --name cannot be combined")));
        }
        (Some(SourceKind::Remote), Some(_), None) => {
            return Err(Error::InvalidArgs(s!("--skin only applies to --local")));
        }
        (Some(SourceKind::Local), None, Some(_)) => {
            return Err(Error::InvalidArgs(s!("--name only applies to --remote")));
        }
        (_, None, Some(_)) => SourceKind::Remote,
        (Some(kind), _, _) => kind,
        (None, _, None) => SourceKind::Local,
    };
    params.answer = skin.or(name);
    Ok(params)
}

fn set_kind(slot: &mut Option<SourceKind>, kind: SourceKind) -> Result<()> {
    match slot {
        Some(prev) if *prev != kind => {
            Err(Error::InvalidArgs(s!("--local and --remote cannot be combined")))
        }
        _ => {
            *slot = Some(kind);
            Ok(())
        }
    }
}
