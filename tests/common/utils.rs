// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::io::{BufRead, BufReader};
use std::fs::File;

use fastascan::seq::fasta::read_text;

pub fn data_file(name: &str) -> String {
    format!("data/{}", name)
}

pub fn read_data(name: &str) -> String {
    read_text(data_file(name)).expect("test data file")
}

// Number of lines that start with the record delimiter.
pub fn count_header_lines(name: &str) -> usize {
    let file = File::open(data_file(name)).expect("test data file");
    BufReader::new(file)
        .lines()
        .map(|l| l.expect("line"))
        .filter(|l| l.starts_with('>'))
        .count()
}
