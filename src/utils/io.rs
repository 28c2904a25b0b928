use std::io;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::types::Cost;

#[derive(Parser)]
pub struct Args {
    /// Path to a directory containing case files, or a base path for case files
    #[arg(short, long)]
    prefix: Option<String>,

    /// Path to one or more case files
    #[arg(short, long)]
    file: Option<Vec<String>>,

    /// File holding one expected total per case, in processing order
    #[arg(short, long)]
    pub expected: Option<String>,

    /// Cruise speed in distance units per time unit
    #[arg(short, long, default_value_t = 2.0)]
    pub speed: f64,

    /// Dwell time charged for every visited waypoint
    #[arg(short, long, default_value_t = 10.0)]
    pub dwell: f64,

    /// X coordinate of the destination appended to every case
    #[arg(long, default_value_t = 100.0)]
    pub dest_x: f64,

    /// Y coordinate of the destination appended to every case
    #[arg(long, default_value_t = 100.0)]
    pub dest_y: f64,

    /// Write per-case solver metrics to this parquet file
    #[arg(short, long)]
    pub metrics: Option<String>,
}

/// Resolves the input selection to concrete paths. Explicit files keep
/// their given order (joined onto the prefix when both are set); a bare
/// prefix enumerates the directory in natural filename order.
pub fn enumerate_input_files(args: &Args) -> io::Result<Vec<PathBuf>> {
    if let Some(files) = &args.file {
        if let Some(prefix) = &args.prefix {
            Ok(files.iter().map(|f| Path::new(prefix).join(f)).collect())
        } else {
            Ok(files.iter().map(PathBuf::from).collect())
        }
    } else if let Some(prefix) = &args.prefix {
        let mut files = Vec::new();
        for entry in std::fs::read_dir(prefix)? {
            let path = entry?.path();
            if path.is_file() {
                files.push(path);
            }
        }

        files.sort_by_cached_key(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .map(natural_key)
                .unwrap_or_default()
        });

        Ok(files)
    } else {
        Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "Either --file and/or --prefix must be provided",
        ))
    }
}

/// Reads an expected-output stream: whitespace-separated totals, one per
/// test case.
pub fn read_expected_totals<R: BufRead>(reader: R) -> io::Result<Vec<Cost>> {
    let mut totals = Vec::new();
    for line in reader.lines() {
        for token in line?.split_whitespace() {
            let value = token.parse::<Cost>().map_err(|e| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("bad expected total {:?}: {}", token, e),
                )
            })?;
            totals.push(value);
        }
    }
    Ok(totals)
}

/// Digit runs compare numerically and before text, so `case_2` sorts ahead
/// of `case_10`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum NamePart {
    Number(u64),
    Text(String),
}

fn natural_key(name: &str) -> Vec<NamePart> {
    let mut parts: Vec<NamePart> = Vec::new();
    for c in name.chars() {
        let c = if c == '_' { ' ' } else { c.to_ascii_lowercase() };
        if let Some(digit) = c.to_digit(10) {
            match parts.last_mut() {
                Some(NamePart::Number(value)) => *value = *value * 10 + digit as u64,
                _ => parts.push(NamePart::Number(digit as u64)),
            }
        } else {
            match parts.last_mut() {
                Some(NamePart::Text(text)) => text.push(c),
                _ => parts.push(NamePart::Text(c.to_string())),
            }
        }
    }
    parts
}
