// src/cli.rs

use std::env;
use std::path::PathBuf;

use crate::params::{Params, SourceKind};

/// Parse process arguments. A bare invocation is the normal mode: one full
/// fetch-compare-report-save cycle over both sources.
pub fn parse() -> Result<Params, Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1).peekable();
    if args.peek().map(String::as_str) == Some("-h")
        || args.peek().map(String::as_str) == Some("--help")
    {
        eprintln!("{}", include_str!("cli_help.txt"));
        std::process::exit(0);
    }
    parse_args(args)
}

fn parse_args<I>(mut args: I) -> Result<Params, Box<dyn std::error::Error>>
where
    I: Iterator<Item = String>,
{
    let mut params = Params::new();
    while let Some(a) = args.next() {
        match a.as_str() {
            "--data-dir" => {
                let v = args.next().ok_or("Missing value for --data-dir")?;
                params.data_dir = PathBuf::from(v);
            }
            "--source" => {
                let v = args.next().ok_or("Missing value for --source")?;
                params.only = Some(match v.to_ascii_lowercase().as_str() {
                    "cartelera" => SourceKind::Cartelera,
                    "cursadas" => SourceKind::Cursadas,
                    other => return Err(format!("Unknown source: {}", other).into()),
                });
            }
            "--materia" => {
                let v: u32 = args.next().ok_or("Missing value for --materia")?.parse()?;
                params.materia_id = v;
            }
            "--banner" => {
                params.banner = Some(args.next().ok_or("Missing value for --banner")?);
            }
            "--no-banner" => params.banner = None,
            "--clear" => params.clear_screen = true,
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }
    Ok(params)
}
