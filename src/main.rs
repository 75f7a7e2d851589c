//! CLI tool to inspect definition files: dump token streams and
//! parse particle stage declarations.

use std::fs;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        eprintln!("Usage: deffile <command> [files...]");
        eprintln!();
        eprintln!("Commands:");
        eprintln!("  tokens  Print the token sequence of each file");
        eprintln!("  stage   Parse one particle stage declaration per file");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  deffile tokens fire.prt");
        eprintln!("  deffile stage stage.prt");
        return ExitCode::from(2);
    }

    let command = args[1].as_str();
    let files = &args[2..];

    if files.is_empty() {
        eprintln!("Error: no files specified");
        return ExitCode::from(2);
    }

    let mut had_error = false;

    for path in files {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{path}: {e}");
                had_error = true;
                continue;
            }
        };

        match command {
            "tokens" => {
                for tok in deffile_rs::tokenize(&content) {
                    println!("{tok}");
                }
            }
            "stage" => match deffile_rs::parse_stage_str(&content) {
                Ok((stage, warnings)) => {
                    println!("{stage:#?}");
                    if !warnings.is_empty() {
                        eprintln!("{path}: {} field warning(s)", warnings.len());
                        for w in &warnings {
                            eprintln!("  {w}");
                        }
                    }
                }
                Err(e) => {
                    eprintln!("{path}: {e}");
                    had_error = true;
                }
            },
            _ => {
                eprintln!("Unknown command: {command}");
                return ExitCode::from(2);
            }
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
