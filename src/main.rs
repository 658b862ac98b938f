use std::io::{self, BufRead};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use zb_installcode::util::hex::{encode_hex_upper, format_hex_compact};
use zb_installcode::{init_logger, log_info, InstallCodeFormat, InstallCodeParser};

#[derive(Parser)]
#[command(name = "zb-installcode")]
#[command(about = "Extract device address and key from Zigbee install codes")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse install codes given as arguments, or one per line on stdin
    Parse {
        codes: Vec<String>,
        /// Print key bytes separated by spaces
        #[arg(short, long)]
        compact: bool,
    },
    /// Report which dialect an install code is written in
    Detect { code: String },
}

fn main() -> anyhow::Result<()> {
    init_logger();

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { codes, compact } => {
            let codes = if codes.is_empty() {
                read_codes(io::stdin().lock())?
            } else {
                codes
            };
            if codes.is_empty() {
                bail!("no install codes given");
            }

            let parser = InstallCodeParser::new();
            for code in &codes {
                let parsed = parser
                    .parse(code)
                    .with_context(|| format!("failed to parse install code {code:?}"))?;
                let key = if compact {
                    format_hex_compact(parsed.key.as_bytes())
                } else {
                    encode_hex_upper(parsed.key.as_bytes())
                };
                println!("format:  {}", parsed.format);
                println!("address: {}", parsed.device_address);
                println!("key:     {key}");
            }
            log_info(&format!("Parsed {} install code(s)", codes.len()));
        }
        Commands::Detect { code } => {
            println!("{}", InstallCodeFormat::classify(&code));
        }
    }

    Ok(())
}

fn read_codes(reader: impl BufRead) -> anyhow::Result<Vec<String>> {
    let mut codes = Vec::new();
    for line in reader.lines() {
        let line = line.context("failed to read install code from stdin")?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            codes.push(trimmed.to_string());
        }
    }
    Ok(codes)
}
