// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use crate::seq::record::SeqRecord;

// For our purposes, a sequence file is just a Vec of sequence records.
//

pub type SeqFile = Vec<SeqRecord>;

pub fn total_length(seq_file: &SeqFile) -> usize {
    seq_file.iter().map(SeqRecord::len).sum()
}
