// docso-time: Spell clock times in English.
//
// Reads times as H:MM from the command line or from stdin (one per line)
// and prints the phrase, e.g. "5:47" -> "thirteen minutes to six".
//
// Usage:
//   docso-time [H:MM...]

use std::io::{self, Write};

fn parse_time(input: &str) -> Result<(u8, u8), String> {
    let (h, m) = input
        .split_once(':')
        .ok_or_else(|| format!("expected H:MM, got {input:?}"))?;
    let hour = h
        .trim()
        .parse::<u8>()
        .map_err(|e| format!("invalid hour {h:?}: {e}"))?;
    let minute = m
        .trim()
        .parse::<u8>()
        .map_err(|e| format!("invalid minute {m:?}: {e}"))?;
    Ok((hour, minute))
}

fn main() {
    docso_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if docso_cli::wants_help(&args) {
        println!("docso-time: Spell clock times in English.");
        println!();
        println!("Usage: docso-time [H:MM...]");
        println!();
        println!("If arguments are given, spells each of them.");
        println!("Otherwise reads times from stdin (one per line).");
        println!("Hours run from 1 to 12, minutes from 0 to 59.");
        return;
    }

    let times = docso_cli::positional(&args);
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut failed = false;

    docso_cli::for_each_input(&times, |input| {
        let phrase = parse_time(input)
            .and_then(|(h, m)| docso_en::time_in_words(h, m).map_err(|e| e.to_string()));
        match phrase {
            Ok(p) => {
                let _ = writeln!(out, "{p}");
            }
            Err(e) => {
                eprintln!("error: {input}: {e}");
                failed = true;
            }
        }
    });

    let _ = out.flush();
    if failed {
        std::process::exit(1);
    }
}
