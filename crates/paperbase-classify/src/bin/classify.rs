//! Paperbase classification runner.
//!
//! Classify a text file (or stdin) with the local pipeline and print
//! the resulting tags as JSON.
//!
//! Usage:
//!   cargo run --bin paperbase-classify -- --file extracted.txt
//!   cat extracted.txt | cargo run --bin paperbase-classify
//!   cargo run --bin paperbase-classify -- --mode threshold --file extracted.txt

use std::env;
use std::io::Read;
use std::path::PathBuf;
use std::process;

use paperbase_classify::{classify_local, ClassifierMode};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default)]
struct Args {
    file: Option<PathBuf>,
    mode: ClassifierMode,
}

fn parse_args() -> Args {
    let args: Vec<String> = env::args().collect();
    let mut result = Args::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--file" | "-f" => {
                i += 1;
                if i < args.len() {
                    result.file = Some(PathBuf::from(&args[i]));
                }
            }
            "--mode" | "-m" => {
                i += 1;
                if i < args.len() {
                    result.mode = match args[i].to_lowercase().as_str() {
                        "weighted" => ClassifierMode::Weighted,
                        "threshold" => ClassifierMode::Threshold,
                        other => {
                            eprintln!("Unknown mode: {} (weighted|threshold)", other);
                            process::exit(2);
                        }
                    };
                }
            }
            "--help" | "-h" => {
                eprintln!("Usage: paperbase-classify [--file PATH] [--mode weighted|threshold]");
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                process::exit(2);
            }
        }
        i += 1;
    }

    result
}

fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = parse_args();

    let text = match &args.file {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("Failed to read {}: {}", path.display(), e);
                process::exit(1);
            }
        },
        None => {
            let mut buf = String::new();
            if let Err(e) = std::io::stdin().read_to_string(&mut buf) {
                eprintln!("Failed to read stdin: {}", e);
                process::exit(1);
            }
            buf
        }
    };

    let tags = classify_local(&text, args.mode);
    let output = serde_json::json!({
        "tags": tags,
        "tag_count": tags.len(),
    });
    println!("{}", output);
}
