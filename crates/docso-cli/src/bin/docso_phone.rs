// docso-phone: Check Vietnamese mobile phone numbers.
//
// Reads phone numbers from the command line or from stdin (one per line).
// By default prints the validation result and the carrier:
//   V: 0909111111 MOBIFONE   (valid)
//   I: 0959111111            (invalid prefix)
//   S: 0909111               (too short)
//   L: 09091111111           (too long)
//
// Usage:
//   docso-phone [OPTIONS] [NUMBER...]
//
// Options:
//   --mask      Print the masked number instead
//   --format    Print the grouped number instead
//   -h, --help  Print help

use std::io::{self, Write};

use docso_vi::phone::PhoneValidation;

fn status_letter(v: PhoneValidation) -> char {
    match v {
        PhoneValidation::Valid => 'V',
        PhoneValidation::Invalid => 'I',
        PhoneValidation::TooShort => 'S',
        PhoneValidation::TooLong => 'L',
    }
}

fn main() {
    docso_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if docso_cli::wants_help(&args) {
        println!("docso-phone: Check Vietnamese mobile phone numbers.");
        println!();
        println!("Usage: docso-phone [OPTIONS] [NUMBER...]");
        println!();
        println!("Reads numbers from arguments or stdin (one per line). Prints:");
        println!("  V: number CARRIER   (valid)");
        println!("  I: number           (unknown prefix)");
        println!("  S: number           (too short)");
        println!("  L: number           (too long)");
        println!();
        println!("Options:");
        println!("  --mask      Print the masked number instead");
        println!("  --format    Print the grouped number instead");
        println!("  -h, --help  Print this help");
        return;
    }

    let mask = args.iter().any(|a| a == "--mask");
    let format = args.iter().any(|a| a == "--format");
    if mask && format {
        docso_cli::fatal("--mask and --format cannot be combined");
    }
    let numbers = docso_cli::positional(&args);

    let handle = docso_cli::load_handle(None).unwrap_or_else(|e| docso_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    docso_cli::for_each_input(&numbers, |input| {
        if mask {
            let _ = writeln!(out, "{}", handle.mask_phone(input));
            return;
        }
        if format {
            let _ = writeln!(out, "{}", handle.format_phone(input));
            return;
        }

        let status = handle.validate_phone(input);
        match handle.detect_carrier(input).filter(|_| status.is_valid()) {
            Some(carrier) => {
                let _ = writeln!(out, "{}: {input} {carrier}", status_letter(status));
            }
            None => {
                let _ = writeln!(out, "{}: {input}", status_letter(status));
            }
        }
    });
}
