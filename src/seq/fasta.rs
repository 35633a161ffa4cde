// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use log::{debug, info};
use regex::{CaptureMatches, Regex};

use crate::errors::FastaError;
use crate::seq::file::SeqFile;
use crate::seq::map::SeqMap;
use crate::seq::record::SeqRecord;

// One entry: '>', the rest of the line as header, then everything up to the next '>' (or EOF) as
// the raw sequence block. The newline after the header may be missing at EOF.
static FASTA_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">([^\n]*)\n?([^>]*)").expect("FastA entry pattern is valid"));

/// How whitespace is removed from a raw sequence block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cleanup {
    /// Drop every ' ' and '\n'. Used for record listings.
    SpacesAndNewlines,
    /// Drop every '\n', keep spaces. Used for header maps.
    NewlinesOnly,
}

impl Cleanup {
    pub fn apply(self, block: &str) -> String {
        match self {
            Cleanup::SpacesAndNewlines => block.chars().filter(|&c| c != ' ' && c != '\n').collect(),
            Cleanup::NewlinesOnly => block.replace('\n', ""),
        }
    }
}

/// Lazy iterator over the records of an in-memory FastA text. Call [`records`] again to restart.
pub struct FastaRecords<'t> {
    captures: CaptureMatches<'static, 't>,
    cleanup: Cleanup,
}

impl Iterator for FastaRecords<'_> {
    type Item = SeqRecord;

    fn next(&mut self) -> Option<SeqRecord> {
        let caps = self.captures.next()?;
        let header = caps.get(1).map_or("", |m| m.as_str());
        let block = caps.get(2).map_or("", |m| m.as_str());
        Some(SeqRecord::new(header, self.cleanup.apply(block)))
    }
}

/// Records with spaces and newlines stripped from the sequences.
pub fn records(text: &str) -> FastaRecords<'_> {
    records_with(text, Cleanup::SpacesAndNewlines)
}

pub fn records_with(text: &str, cleanup: Cleanup) -> FastaRecords<'_> {
    FastaRecords {
        captures: FASTA_ENTRY.captures_iter(text),
        cleanup,
    }
}

/// Header -> sequence map, newlines stripped from the sequences. Later duplicates win.
pub fn header_map(text: &str) -> SeqMap {
    records_with(text, Cleanup::NewlinesOnly).collect()
}

/// Reads the whole file and decodes it as UTF-8.
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String, FastaError> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(String::from_utf8(bytes)?)
}

pub fn read_fasta_file<P: AsRef<Path>>(path: P) -> Result<SeqFile, FastaError> {
    let path = path.as_ref();
    let text = read_text(path)?;
    let result: SeqFile = records(&text).collect();
    info!("Parsed {} records from {}", result.len(), path.display());
    Ok(result)
}

pub fn read_fasta_map<P: AsRef<Path>>(path: P) -> Result<SeqMap, FastaError> {
    let path = path.as_ref();
    let text = read_text(path)?;
    let result = header_map(&text);
    info!("Mapped {} distinct headers from {}", result.len(), path.display());
    Ok(result)
}
