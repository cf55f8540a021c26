//
// Copyright 2025 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Command-line driver: reads `begin end value` triples, accumulates them and prints the
//! resulting segments.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{LevelFilter, info};
use num_traits::Zero;
use rangesum::{RangeAccumulator, load};
use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::ops::Add;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "rangesum")]
#[command(about = "Accumulate values over integer ranges and print the resulting segments")]
#[command(version)]
struct Cli {
    /// File of `begin end value` lines (reads stdin when absent or `-`)
    input: Option<PathBuf>,

    /// Write the segment dump here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Numeric type of the accumulated values
    #[arg(short = 't', long, value_enum, default_value_t = ValueType::Int)]
    value_type: ValueType,

    /// Print `max=<value>` after the dump
    #[arg(long)]
    max: bool,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum ValueType {
    /// 64-bit signed integers
    Int,
    /// 64-bit floating point
    Float,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    });
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();

    match cli.value_type {
        ValueType::Int => run::<i64>(&cli),
        ValueType::Float => run::<f64>(&cli),
    }
}

fn run<T>(cli: &Cli) -> Result<()>
where
    T: FromStr + Copy + Add<Output = T> + PartialOrd + Zero + Display,
{
    let reader: Box<dyn BufRead> = match &cli.input {
        Some(path) if path.as_os_str() != "-" => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?,
        )),
        _ => Box::new(io::stdin().lock()),
    };

    let mut acc = RangeAccumulator::<T>::new();
    let applied = load(reader, &mut acc).context("Failed to read input")?;
    info!("Applied {applied} triple(s), {} segment(s) stored", acc.len());

    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    if !acc.is_empty() {
        writeln!(out, "{acc}")?;
    }
    if cli.max {
        writeln!(out, "max={}", acc.max_value())?;
    }
    out.flush()?;
    Ok(())
}
