// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

// Text renderings of parse results. Everything writes to an io::Write so that the same code
// serves stdout and the tests.

use std::io::{self, Write};

use serde::Serialize;

use crate::seq::map::SeqMap;
use crate::seq::record::SeqRecord;

/// Writes each record as "> header" followed by its sequence. Returns the number of records
/// written.
pub fn write_records<W, I>(out: &mut W, records: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = SeqRecord>,
{
    let mut count = 0;
    for rec in records {
        writeln!(out, "{}", rec)?;
        count += 1;
    }
    Ok(count)
}

/// One header per line, in map order.
pub fn write_headers<W: Write>(out: &mut W, map: &SeqMap) -> io::Result<()> {
    for header in map.headers() {
        writeln!(out, "{}", header)?;
    }
    Ok(())
}

pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(io::Error::from)?;
    writeln!(out)
}

pub fn write_info<W: Write>(
    out: &mut W,
    name: &str,
    nb_records: usize,
    total_length: usize,
) -> io::Result<()> {
    writeln!(out, "name: {}", name)?;
    writeln!(out, "nb_records: {}", nb_records)?;
    writeln!(out, "total_length: {}", total_length)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq::fasta::{header_map, records};

    fn to_string(buf: Vec<u8>) -> String {
        String::from_utf8(buf).expect("output is UTF-8")
    }

    #[test]
    fn test_write_records() {
        let mut buf = Vec::new();
        let n = write_records(&mut buf, records(">a\nAC GT\n>b\nTTTT\n")).expect("write");
        assert_eq!(n, 2);
        assert_eq!(to_string(buf), "> a\nACGT\n> b\nTTTT\n");
    }

    #[test]
    fn test_write_headers_dedup() {
        let mut buf = Vec::new();
        write_headers(&mut buf, &header_map(">dup\nAAA\n>dup\nCCC\n")).expect("write");
        assert_eq!(to_string(buf), "dup\n");
    }

    #[test]
    fn test_write_nothing() {
        let mut buf = Vec::new();
        assert_eq!(write_records(&mut buf, records("no records")).expect("write"), 0);
        write_headers(&mut buf, &header_map("no records")).expect("write");
        assert!(buf.is_empty());
    }

    #[test]
    fn test_write_json_map() {
        let mut buf = Vec::new();
        write_json(&mut buf, &header_map(">b\nTT\n>a\nA C\n")).expect("write");
        let value: serde_json::Value = serde_json::from_slice(&buf).expect("valid JSON");
        assert_eq!(value["b"], "TT");
        assert_eq!(value["a"], "A C");
        // Keys follow map order, not alphabetical order.
        let text = to_string(buf);
        assert!(text.find("\"b\"").expect("b key") < text.find("\"a\"").expect("a key"));
    }

    #[test]
    fn test_write_info() {
        let mut buf = Vec::new();
        write_info(&mut buf, "x.fas", 3, 30).expect("write");
        assert_eq!(to_string(buf), "name: x.fas\nnb_records: 3\ntotal_length: 30\n\n");
    }
}
