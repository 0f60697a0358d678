// Mon Oct 19 2026 - Alex

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "packet-wrapper-generator")]
#[command(author = "Alex")]
#[command(version = "0.1.0")]
#[command(about = "Generates packet wrapper classes from reflected layouts and documentation tables", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true, default_value = "info")]
    pub log_level: String,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate wrapper classes
    Generate(GenerateArgs),
    /// List the records in a catalog
    List(ListArgs),
}

#[derive(Parser, Debug)]
pub struct GenerateArgs {
    #[arg(short, long)]
    pub catalog: PathBuf,

    /// Record id, decimal or 0x-prefixed hex
    #[arg(short, long, value_parser = parse_record_id)]
    pub record: Option<u32>,

    #[arg(long)]
    pub all: bool,

    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory for the generated files; printed to stdout when absent
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(long)]
    pub no_manifest: bool,
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    #[arg(short, long)]
    pub catalog: PathBuf,
}

pub fn parse_record_id(s: &str) -> Result<u32, String> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse::<u32>(),
    };
    parsed.map_err(|e| format!("invalid record id '{}': {}", s, e))
}

impl GenerateArgs {
    pub fn validate(&self) -> Result<(), String> {
        if self.record.is_none() && !self.all {
            return Err("Either --record or --all must be specified".to_string());
        }
        if self.record.is_some() && self.all {
            return Err("Cannot specify both --record and --all".to_string());
        }
        if !self.catalog.exists() {
            return Err(format!("Catalog file does not exist: {:?}", self.catalog));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record_id() {
        assert_eq!(parse_record_id("20"), Ok(20));
        assert_eq!(parse_record_id("0x14"), Ok(20));
        assert_eq!(parse_record_id("0XFF"), Ok(255));
        assert!(parse_record_id("0xZZ").is_err());
        assert!(parse_record_id("-1").is_err());
    }

    #[test]
    fn test_parse_generate() {
        let args = Args::try_parse_from([
            "packet-wrapper-generator",
            "generate",
            "--catalog",
            "packets.json",
            "--record",
            "0x1F",
            "-o",
            "out",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(args.log_level, "debug");
        match args.command {
            Command::Generate(generate) => {
                assert_eq!(generate.record, Some(0x1F));
                assert!(!generate.all);
                assert_eq!(generate.output, Some(PathBuf::from("out")));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_generate_requires_a_selection() {
        let args = GenerateArgs {
            catalog: PathBuf::from("Cargo.toml"),
            record: None,
            all: false,
            config: None,
            output: None,
            no_manifest: false,
        };
        assert!(args.validate().is_err());

        let args = GenerateArgs { record: Some(1), all: true, ..args };
        assert!(args.validate().is_err());
    }
}
