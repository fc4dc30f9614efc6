//! Simple command that prints one or '-n count' UUIDv7 strings in the '-f format' layout

use guid::Format;
use std::{env, io, io::Write, process::ExitCode};

#[derive(Default)]
struct Options {
    count: Option<usize>,
    format: Option<Format>,
}

fn main() -> io::Result<ExitCode> {
    let opts = {
        let mut args = env::args();
        let program = args.next();
        match parse_args(args) {
            Ok(opts) => opts,
            Err(message) => {
                eprintln!("Error: {}", message);
                eprintln!(
                    "Usage: {} [-n count] [-f N|D|B|P|X]",
                    program.as_deref().unwrap_or("guid")
                );
                return Ok(ExitCode::FAILURE);
            }
        }
    };

    let format = opts.format.unwrap_or_default();
    let mut buf = io::BufWriter::new(io::stdout());
    for _ in 0..opts.count.unwrap_or(1) {
        writeln!(buf, "{}", guid::guid7().encode_as(format))?;
    }

    Ok(ExitCode::SUCCESS)
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut opts = Options::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-n" => {
                if opts.count.is_some() {
                    return Err("option 'n' given more than once".to_owned());
                }
                let Some(n_arg) = args.next() else {
                    return Err("argument to option 'n' missing".to_owned());
                };
                let Ok(c) = n_arg.parse() else {
                    return Err(format!("invalid argument to option 'n': '{}'", n_arg));
                };
                opts.count.replace(c);
            }
            "-f" => {
                if opts.format.is_some() {
                    return Err("option 'f' given more than once".to_owned());
                }
                let Some(f_arg) = args.next() else {
                    return Err("argument to option 'f' missing".to_owned());
                };
                let Ok(f) = f_arg.parse() else {
                    return Err(format!("invalid argument to option 'f': '{}'", f_arg));
                };
                opts.format.replace(f);
            }
            _ => return Err(format!("unrecognized argument '{}'", arg)),
        }
    }
    Ok(opts)
}
