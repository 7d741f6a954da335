use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use mhsum_multihash::Multihash;
use mhsum_verify::{Options, Outcome, Registry, ResolvedOptions};

use crate::input;

/// Print or check multihash checksums.
#[derive(Debug, Parser)]
#[command(
    name = "mhsum",
    version,
    about = "Print or check multihash checksums.",
    after_help = "With no FILE, or when FILE is -, read standard input."
)]
pub struct App {
    /// Hash algorithm, e.g. sha2-256, sha3-512, blake3.
    #[arg(short, long, default_value = "sha2-256", value_name = "NAME")]
    pub algorithm: String,

    /// Textual encoding: hex, base32, base58, base64 or base64url.
    #[arg(short, long, default_value = "base58", value_name = "NAME")]
    pub encoding: String,

    /// Explicit digest length in bytes (variable-length algorithms only).
    #[arg(short, long, value_name = "BYTES")]
    pub length: Option<usize>,

    /// Check that the input's checksum matches this encoded multihash.
    #[arg(short, long, value_name = "HASH")]
    pub check: Option<String>,

    /// Quiet output: no newline after the checksum, no error or match text.
    #[arg(short, long)]
    pub quiet: bool,

    /// File to hash; `-` or nothing reads standard input.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

pub enum Status {
    Success,
    /// The checksum comparison completed and did not match. Not an error,
    /// but still a non-zero exit.
    Mismatch,
}

pub fn run(app: &App) -> Result<Status> {
    let registry = Registry::with_defaults();

    let options = Options {
        algorithm: app.algorithm.clone(),
        encoding: app.encoding.clone(),
        length: app.length,
    }
    .validate(&registry)
    .context("failed to parse flags")?;

    // A malformed reference should fail before any input is consumed.
    let reference = app
        .check
        .as_deref()
        .map(|raw| decode_reference(&options, raw))
        .transpose()?;

    let input = input::open(app.file.as_deref())?;

    match reference {
        Some(reference) => {
            match mhsum_verify::check(&options, input, &reference)
                .context("failed to check the input against the reference")?
            {
                Outcome::Matched => {
                    if !app.quiet {
                        println!("OK checksums match (-q for no output)");
                    }
                    Ok(Status::Success)
                }
                Outcome::Mismatched => {
                    if !app.quiet {
                        println!("checksums do not match");
                    }
                    Ok(Status::Mismatch)
                }
            }
        }
        None => {
            let mh = mhsum_verify::compute(&options, input)
                .context("failed to calculate the multihash")?;
            let text = options.encoding().encode(&mh.to_bytes());
            if app.quiet {
                print!("{text}");
            } else {
                println!("{text}");
            }
            Ok(Status::Success)
        }
    }
}

fn decode_reference(options: &ResolvedOptions<'_>, raw: &str) -> Result<Multihash> {
    let bytes = options
        .encoding()
        .decode(raw.trim())
        .with_context(|| format!("failed to decode multihash '{}'", raw.trim()))?;
    Multihash::from_bytes(&bytes)
        .with_context(|| format!("failed to decode multihash '{}'", raw.trim()))
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use mhsum_encode::Encoding;

    use super::*;

    fn resolved<'a>(registry: &'a Registry, encoding: &str) -> ResolvedOptions<'a> {
        Options {
            algorithm: "sha2-256".to_owned(),
            encoding: encoding.to_owned(),
            length: None,
        }
        .validate(registry)
        .unwrap()
    }

    #[test]
    fn reference_decodes_with_surrounding_whitespace() {
        let registry = Registry::with_defaults();
        let options = resolved(&registry, "base58");

        let mh =
            decode_reference(&options, "QmRfP2G7Nb6SiPZqQxMxtZ1f4hBjY2JGkWvuxvUhkWm6ca\n").unwrap();
        assert_eq!(mh.code(), 0x12);
        assert_eq!(mh.length(), 32);
    }

    #[test]
    fn reference_in_wrong_alphabet_fails() {
        let registry = Registry::with_defaults();
        let options = resolved(&registry, "hex");

        let err =
            decode_reference(&options, "QmRfP2G7Nb6SiPZqQxMxtZ1f4hBjY2JGkWvuxvUhkWm6ca").unwrap_err();
        assert!(err.to_string().contains("failed to decode multihash"));
    }

    #[test]
    fn reference_encoding_follows_the_selected_scheme() {
        let registry = Registry::with_defaults();
        let options = resolved(&registry, "hex");

        let hex = Encoding::from_str("base58")
            .unwrap()
            .decode("QmRfP2G7Nb6SiPZqQxMxtZ1f4hBjY2JGkWvuxvUhkWm6ca")
            .map(|bytes| Encoding::Hex.encode(&bytes))
            .unwrap();
        let mh = decode_reference(&options, &hex).unwrap();
        assert_eq!(mh.code(), 0x12);
    }
}
