// A record for sequences, consisting of a header and a whitespace-free sequence, as extracted from
// one '>' block of a FastA file or one '@' entry of a FastQ file. Only FastQ records carry
// scores.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeqRecord {
    pub header: String,
    pub sequence: String,
    // Phred scores (quality char - 33), one per sequence position; empty if the format has none
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub scores: Vec<u8>,
}

impl SeqRecord {
    pub fn new<H: Into<String>, S: Into<String>>(header: H, sequence: S) -> Self {
        Self::with_scores(header, sequence, Vec::new())
    }

    pub fn with_scores<H: Into<String>, S: Into<String>>(
        header: H,
        sequence: S,
        scores: Vec<u8>,
    ) -> Self {
        SeqRecord {
            header: header.into(),
            sequence: sequence.into(),
            scores,
        }
    }

    /// Number of characters (not bytes) in the sequence.
    pub fn len(&self) -> usize {
        self.sequence.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn has_scores(&self) -> bool {
        !self.scores.is_empty()
    }

    /// Returns a record with the same header and `len` characters of the sequence (and scores, if
    /// any), starting at `start`. The range is clamped to the end of the sequence.
    pub fn subseq(&self, start: usize, len: usize) -> SeqRecord {
        SeqRecord {
            header: self.header.clone(),
            sequence: self.sequence.chars().skip(start).take(len).collect(),
            scores: self.scores.iter().skip(start).take(len).copied().collect(),
        }
    }

    /// Reverses the sequence and the scores.
    pub fn reverse(&mut self) {
        self.sequence = self.sequence.chars().rev().collect();
        self.scores.reverse();
    }
}

// Same layout as the record listing: "> header", then the sequence on the next line.
impl fmt::Display for SeqRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "> {}\n{}", self.header, self.sequence)
    }
}
