// docso-spell: Spell numbers in Vietnamese.
//
// Reads numbers from the command line or from stdin (one per line) and
// prints their Vietnamese reading, one per line.
//
// Usage:
//   docso-spell [-s STYLE] [OPTIONS] [NUMBER...]
//
// Options:
//   -s, --style STYLE   Reading style: north (default) or south
//   --tokens            Print one word per line with its role
//   -h, --help          Print help

use std::io::{self, Write};

use docso_core::WordRole;

fn role_name(role: WordRole) -> String {
    match role {
        WordRole::Digit => "digit".to_string(),
        WordRole::ReducedDigit => "reduced".to_string(),
        WordRole::Ten => "ten".to_string(),
        WordRole::TensMarker => "tens".to_string(),
        WordRole::Hundred => "hundred".to_string(),
        WordRole::Tier { power } => format!("tier{power}"),
        WordRole::Filler => "filler".to_string(),
        WordRole::EmptyHundreds => "empty-hundreds".to_string(),
    }
}

fn main() {
    docso_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (style, args) = docso_cli::parse_style(&args);

    if docso_cli::wants_help(&args) {
        println!("docso-spell: Spell numbers in Vietnamese.");
        println!();
        println!("Usage: docso-spell [-s STYLE] [OPTIONS] [NUMBER...]");
        println!();
        println!("If NUMBER arguments are given, spells each of them.");
        println!("Otherwise reads numbers from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -s, --style STYLE   Reading style: north (default) or south");
        println!("                      (also read from DOCSO_STYLE)");
        println!("  --tokens            Print one word per line with its role");
        println!("  -h, --help          Print this help");
        return;
    }

    let show_tokens = args.iter().any(|a| a == "--tokens");
    let numbers = docso_cli::positional(&args);

    let handle = docso_cli::load_handle(style.as_deref()).unwrap_or_else(|e| docso_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut failed = false;

    docso_cli::for_each_input(&numbers, |input| {
        let n = match docso_core::parse_cardinal(input) {
            Ok(n) => n,
            Err(e) => {
                eprintln!("error: {input}: {e}");
                failed = true;
                return;
            }
        };
        if show_tokens {
            for word in &handle.spell_words(n) {
                let _ = writeln!(out, "{}\t{}", word.text, role_name(word.role));
            }
            let _ = writeln!(out);
        } else {
            let _ = writeln!(out, "{}", handle.spell_number(n));
        }
    });

    let _ = out.flush();
    if failed {
        std::process::exit(1);
    }
}
