// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{
    fmt,
    io::{stdout, BufWriter, Write},
    path::PathBuf,
};

use log::info;

use clap::{Parser, ValueEnum};

use crate::errors::FastaError;
use crate::output::{write_headers, write_info, write_json, write_records};
use crate::seq::fasta::{read_fasta_file, read_fasta_map, read_text, records};
use crate::seq::fastq::read_fastq_file;
use crate::seq::file::{total_length, SeqFile};
use crate::seq::map::SeqMap;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None) ]
struct Cli {
    /// Sequence file
    seq_fname: PathBuf,

    /// What to list
    #[arg(short, long = "mode", default_value_t = OutputMode::Records,
        help = "What to list [records|headers] (or just r|h); default: records",
        hide_default_value = true,
        hide_possible_values = true,
    )]
    mode: OutputMode,

    /// Sequence file format
    #[arg(short, long = "format", default_value_t = SeqFileFormat::FastA,
        help = "Sequence file format [fasta|fastq] (or just f|q); default: fasta",
        hide_default_value = true,
        hide_possible_values = true,
    )]
    format: SeqFileFormat,

    /// Write JSON instead of plain text
    #[arg(short, long)]
    json: bool,

    /// Info mode (summary only)
    #[arg(short, long)]
    info: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutputMode {
    // "> header" and sequence for every record; spaces and newlines removed
    #[clap(name = "records")]
    #[clap(alias = "r")]
    Records,
    // one line per distinct header; newlines removed, last duplicate wins
    #[clap(name = "headers")]
    #[clap(alias = "h")]
    Headers,
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutputMode::Records => "records",
            OutputMode::Headers => "headers",
        };
        write!(f, "{}", s)
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum SeqFileFormat {
    #[clap(name = "fasta")]
    #[clap(alias = "f")]
    FastA,
    #[clap(name = "fastq")]
    #[clap(alias = "q")]
    FastQ,
}

impl fmt::Display for SeqFileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SeqFileFormat::FastA => "fasta",
            SeqFileFormat::FastQ => "fastq",
        };
        write!(f, "{}", s)
    }
}

fn list_seq_file<W: Write>(
    cli: &Cli,
    name: &str,
    out: &mut W,
    seq_file: SeqFile,
) -> Result<(), FastaError> {
    if cli.info {
        write_info(out, name, seq_file.len(), total_length(&seq_file))?;
    } else if cli.json {
        write_json(out, &seq_file)?;
    } else {
        let n = write_records(out, seq_file)?;
        info!("Wrote {} records", n);
    }
    Ok(())
}

fn list_map<W: Write>(
    cli: &Cli,
    name: &str,
    out: &mut W,
    map: &SeqMap,
) -> Result<(), FastaError> {
    if cli.info {
        write_info(out, name, map.len(), map.total_length())?;
    } else if cli.json {
        write_json(out, map)?;
    } else {
        write_headers(out, map)?;
    }
    Ok(())
}

fn execute<W: Write>(cli: &Cli, out: &mut W) -> Result<(), FastaError> {
    let name = cli.seq_fname.display().to_string();
    info!("Listing {} of {} ({})", cli.mode, name, cli.format);
    match (cli.format, cli.mode) {
        (SeqFileFormat::FastA, OutputMode::Records) => {
            if cli.info || cli.json {
                list_seq_file(cli, &name, out, read_fasta_file(&cli.seq_fname)?)?;
            } else {
                // plain listing stays lazy
                let text = read_text(&cli.seq_fname)?;
                let n = write_records(out, records(&text))?;
                info!("Wrote {} records", n);
            }
        }
        (SeqFileFormat::FastA, OutputMode::Headers) => {
            list_map(cli, &name, out, &read_fasta_map(&cli.seq_fname)?)?;
        }
        (SeqFileFormat::FastQ, OutputMode::Records) => {
            list_seq_file(cli, &name, out, read_fastq_file(&cli.seq_fname)?)?;
        }
        (SeqFileFormat::FastQ, OutputMode::Headers) => {
            let map: SeqMap = read_fastq_file(&cli.seq_fname)?.into_iter().collect();
            list_map(cli, &name, out, &map)?;
        }
    }
    Ok(())
}

pub fn run() -> Result<(), FastaError> {
    env_logger::init();
    info!("Starting log");

    let cli = Cli::parse();
    let mut out = BufWriter::new(stdout().lock());
    execute(&cli, &mut out)?;
    out.flush()?;
    Ok(())
}
