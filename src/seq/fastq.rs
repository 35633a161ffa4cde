// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::path::Path;

use log::info;

use crate::errors::FastaError;
use crate::seq::fasta::read_text;
use crate::seq::file::SeqFile;
use crate::seq::record::SeqRecord;

const PHRED_OFFSET: u8 = 33;

// Four lines per entry: "@name", sequence, "+[comment]", quality. Blank lines between entries are
// skipped; "\r\n" line endings are accepted.
pub fn fastq_records(text: &str) -> Result<SeqFile, FastaError> {
    let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l));
    let mut result: SeqFile = Vec::new();

    loop {
        let Some((linenum, header_line)) = lines.by_ref().find(|(_, l)| !l.is_empty()) else {
            break;
        };
        let name = header_line.strip_prefix('@').ok_or_else(|| {
            FastaError::Format(format!(
                "Contents before header at line {}: \"{}\"",
                linenum, header_line
            ))
        })?;
        if name.is_empty() {
            return Err(FastaError::Format(format!(
                "Missing sequence name at line {}",
                linenum
            )));
        }

        let sequence = match lines.next() {
            Some((_, seq)) if !seq.is_empty() => seq,
            _ => {
                return Err(FastaError::Format(format!(
                    "Missing sequence for \"{}\"",
                    name
                )))
            }
        };
        match lines.next() {
            Some((_, sep)) if sep.starts_with('+') => {}
            Some((n, sep)) => {
                return Err(FastaError::Format(format!(
                    "Expected '+' line at line {}, found: \"{}\"",
                    n, sep
                )))
            }
            None => {
                return Err(FastaError::Format(format!(
                    "Missing '+' line for \"{}\"",
                    name
                )))
            }
        }
        let (qual_linenum, quality) = lines.next().ok_or_else(|| {
            FastaError::Format(format!("Missing quality line for \"{}\"", name))
        })?;
        if quality.len() != sequence.len() {
            return Err(FastaError::Format(format!(
                "Sequence and quality lengths differ for \"{}\" ({} vs {})",
                name,
                sequence.len(),
                quality.len()
            )));
        }
        let scores = phred_scores(quality).ok_or_else(|| {
            FastaError::Format(format!(
                "Invalid quality character at line {}",
                qual_linenum
            ))
        })?;

        result.push(SeqRecord::with_scores(name, sequence, scores));
    }

    Ok(result)
}

fn phred_scores(quality: &str) -> Option<Vec<u8>> {
    quality
        .bytes()
        .map(|b| b.checked_sub(PHRED_OFFSET))
        .collect()
}

pub fn read_fastq_file<P: AsRef<Path>>(path: P) -> Result<SeqFile, FastaError> {
    let path = path.as_ref();
    let text = read_text(path)?;
    let result = fastq_records(&text)?;
    info!("Parsed {} FastQ records from {}", result.len(), path.display());
    Ok(result)
}
