// docso-cli: shared utilities for CLI tools.

use std::io::{self, BufRead};
use std::process;

use docso_vi::handle::DocsoHandle;
use docso_vi::number::Dialect;
use tracing_subscriber::EnvFilter;

/// Environment variable selecting the reading style when `--style` is absent.
const STYLE_ENV: &str = "DOCSO_STYLE";

/// Install the stderr log subscriber.
///
/// The filter comes from `RUST_LOG` and defaults to `warn`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Create a DocsoHandle configured for the requested reading style.
///
/// Style resolution order:
/// 1. `style` argument (if provided)
/// 2. `DOCSO_STYLE` environment variable
/// 3. northern style
pub fn load_handle(style: Option<&str>) -> Result<DocsoHandle, String> {
    let mut handle =
        DocsoHandle::new().map_err(|e| format!("failed to create DocsoHandle: {e}"))?;

    let from_env = std::env::var(STYLE_ENV).ok();
    if let Some(name) = style.or(from_env.as_deref()) {
        let dialect: Dialect = name.parse().map_err(|e| format!("{e}"))?;
        tracing::debug!(?dialect, "reading style selected");
        handle.set_dialect(dialect);
    }
    Ok(handle)
}

/// Parse a `--style=NAME` or `-s NAME` argument from command line args.
///
/// Returns `(style, remaining_args)`.
pub fn parse_style(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut style = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--style=") {
            style = Some(val.to_string());
        } else if arg == "--style" || arg == "-s" {
            if i + 1 < args.len() {
                style = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {} requires a value", arg);
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (style, remaining)
}

/// Positional (non-flag) arguments.
pub fn positional(args: &[String]) -> Vec<String> {
    args.iter()
        .filter(|a| !a.starts_with("--") && !is_short_flag(a))
        .cloned()
        .collect()
}

/// `-x` style flags, excluding negative numbers so they reach the
/// number parser and get a proper error.
fn is_short_flag(arg: &str) -> bool {
    arg.starts_with('-') && !arg[1..].starts_with(|c: char| c.is_ascii_digit())
}

/// Run `f` on every positional argument, or on every non-empty stdin line
/// when there are none.
pub fn for_each_input(inputs: &[String], mut f: impl FnMut(&str)) {
    if !inputs.is_empty() {
        for input in inputs {
            f(input);
        }
        return;
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        f(input);
    }
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_style_forms() {
        let (style, rest) = parse_style(&args(&["--style=south", "12"]));
        assert_eq!(style.as_deref(), Some("south"));
        assert_eq!(rest, args(&["12"]));

        let (style, rest) = parse_style(&args(&["12", "-s", "north", "13"]));
        assert_eq!(style.as_deref(), Some("north"));
        assert_eq!(rest, args(&["12", "13"]));

        let (style, rest) = parse_style(&args(&["7"]));
        assert_eq!(style, None);
        assert_eq!(rest, args(&["7"]));
    }

    #[test]
    fn positional_keeps_negative_numbers() {
        let got = positional(&args(&["--tokens", "-5", "-x", "12"]));
        assert_eq!(got, args(&["-5", "12"]));
    }

    #[test]
    fn help_detection() {
        assert!(wants_help(&args(&["-h"])));
        assert!(wants_help(&args(&["1", "--help"])));
        assert!(!wants_help(&args(&["1"])));
    }

    #[test]
    fn load_handle_with_explicit_style() {
        let handle = load_handle(Some("south")).unwrap();
        assert_eq!(handle.spell_number(1001), "một ngàn không trăm lẻ một");
        assert!(load_handle(Some("west")).is_err());
    }
}
