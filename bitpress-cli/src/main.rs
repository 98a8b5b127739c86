//! Bitpress CLI - dense-code compression utility
//!
//! A Pure Rust compressor that assigns dense fixed-width codes to byte
//! values in order of first occurrence.

use bitpress::Method;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "bitpress")]
#[command(author, version, about = "Dense-code compression utility")]
#[command(long_about = "
Bitpress compresses a byte stream by assigning each distinct byte value a
dense fixed-width code, in order of first occurrence. Streams are
self-describing: the substitution table travels in the header.

Examples:
  bitpress compress input.bin output.bpz
  bitpress compress --method dense input.bin output.bpz
  bitpress decompress output.bpz restored.bin
  bitpress info output.bpz
  bitpress info --json output.bpz
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file
    #[command(alias = "c")]
    Compress {
        /// Input file to compress
        input: PathBuf,

        /// Output file
        output: PathBuf,

        /// Compression method
        #[arg(short, long, value_enum, default_value = "dense")]
        method: MethodArg,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Decompress a file
    #[command(alias = "x")]
    Decompress {
        /// Input file to decompress
        input: PathBuf,

        /// Output file
        output: PathBuf,
    },

    /// Show information about a compressed file
    #[command(alias = "i")]
    Info {
        /// Compressed file to inspect
        file: PathBuf,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },
}

/// Compression method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
enum MethodArg {
    /// Dense fixed-width substitution coding
    #[default]
    Dense,
}

impl From<MethodArg> for Method {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Dense => Method::Dense,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            method,
            verbose,
        } => cmd_compress(&input, &output, method.into(), verbose),
        Commands::Decompress { input, output } => cmd_decompress(&input, &output),
        Commands::Info { file, json } => cmd_info(&file, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_compress(
    input: &Path,
    output: &Path,
    method: Method,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = std::fs::read(input)?;

    println!("Compressing {} ({} bytes)", input.display(), data.len());

    let coded = bitpress::compress(&data, method);
    let Some(bytes) = coded.data() else {
        return Err(format!("compression failed ({}), no output written", method).into());
    };
    std::fs::write(output, bytes)?;

    println!("  Method: {}", method);
    println!("  Input size: {} bytes", data.len());
    println!("  Output size: {} bytes", bytes.len());
    if !data.is_empty() {
        println!(
            "  Compression ratio: {:.1}%",
            (1.0 - bytes.len() as f64 / data.len() as f64) * 100.0
        );
    }

    if verbose {
        let info = bitpress::inspect(bytes)?;
        println!("  Table entries: {}", info.entries);
        println!("  Bits per entry: {}", info.bits_per_entry);
        println!("  Header: {} bytes", info.header_bytes);
        println!("  Packed data: {} bytes", info.data_bytes);
    }

    println!("Wrote {}", output.display());
    Ok(())
}

fn cmd_decompress(input: &Path, output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let data = std::fs::read(input)?;

    println!("Decompressing {} ({} bytes)", input.display(), data.len());

    let decoded = bitpress::decompress(&data);
    let Some(bytes) = decoded.data() else {
        let what = decoded
            .method()
            .map_or_else(|| "empty input".to_string(), |m| m.to_string());
        return Err(format!("decompression failed ({}), no output written", what).into());
    };
    std::fs::write(output, bytes)?;

    if let Some(method) = decoded.method() {
        println!("  Method: {}", method);
    }
    println!("  Output size: {} bytes", bytes.len());

    println!("Wrote {}", output.display());
    Ok(())
}

/// Machine-readable `info` output.
#[derive(Serialize)]
struct InfoReport {
    file: String,
    method: String,
    size: u64,
    entries: u16,
    bits_per_entry: u8,
    header_bytes: usize,
    data_bytes: u64,
    original_len: u64,
}

fn cmd_info(file: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let data = std::fs::read(file)?;
    let info = bitpress::inspect(&data)?;

    if json {
        let report = InfoReport {
            file: file.display().to_string(),
            method: info.method.to_string(),
            size: data.len() as u64,
            entries: info.entries,
            bits_per_entry: info.bits_per_entry,
            header_bytes: info.header_bytes,
            data_bytes: info.data_bytes,
            original_len: info.original_len,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Stream Information");
    println!("==================");
    println!("File: {}", file.display());
    println!("Method: {}", info.method);
    println!("Size: {} bytes", data.len());
    println!();
    println!("Contents:");
    println!("  Table entries: {}", info.entries);
    println!("  Bits per entry: {}", info.bits_per_entry);
    println!("  Header: {} bytes", info.header_bytes);
    println!("  Packed data: {} bytes", info.data_bytes);
    println!("  Original size: {} bytes", info.original_len);
    if info.original_len > 0 {
        println!(
            "  Compression ratio: {:.1}%",
            (1.0 - data.len() as f64 / info.original_len as f64) * 100.0
        );
    }

    Ok(())
}
