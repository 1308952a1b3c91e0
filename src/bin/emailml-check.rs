use std::env;
use std::fs;
use std::process;

use emailml::{EmailConfig, EmailError};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: emailml-check <config.yaml> [more.yaml ...]");
        eprintln!();
        eprintln!("Validates emailml configuration override files by parsing");
        eprintln!("them and merging them over the built-in defaults.");
        process::exit(1);
    }

    let mut exit_code = 0;

    for file_path in &args[1..] {
        match check_file(file_path) {
            Ok(()) => {
                println!("✓ {} is valid", file_path);
            }
            Err(e) => {
                eprintln!("✗ {} has errors:", file_path);
                print_error(&e);
                exit_code = 1;
            }
        }
    }

    process::exit(exit_code);
}

fn check_file(path: &str) -> Result<(), EmailError> {
    let content = fs::read_to_string(path)
        .map_err(|e| EmailError::ConfigError(format!("Failed to read file: {}", e)))?;
    EmailConfig::from_yaml(&content)?;
    Ok(())
}

fn print_error(error: &EmailError) {
    match error {
        EmailError::YamlError(msg) => {
            eprintln!("  YAML error:");
            eprintln!("    {}", msg);
        }
        EmailError::ConfigError(msg) => {
            eprintln!("  Configuration error:");
            eprintln!("    {}", msg);
        }
        e => {
            eprintln!("  {}", e);
        }
    }
}
