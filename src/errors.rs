// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{error, fmt, io, string::FromUtf8Error};

#[derive(Debug)]
pub enum FastaError {
    Io(io::Error),
    Decode(FromUtf8Error),
    Format(String),
}

// These allow conversion to FastaError, required for '?' to work.

impl From<io::Error> for FastaError {
    fn from(e: io::Error) -> Self {
        FastaError::Io(e)
    }
}

impl From<FromUtf8Error> for FastaError {
    fn from(e: FromUtf8Error) -> Self {
        FastaError::Decode(e)
    }
}

impl From<String> for FastaError {
    fn from(s: String) -> Self {
        FastaError::Format(s)
    }
}

impl fmt::Display for FastaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FastaError::Io(e) => write!(f, "I/O error: {}", e),
            FastaError::Decode(e) => write!(f, "Decode error: {}", e),
            FastaError::Format(msg) => write!(f, "Format error: {}", msg),
        }
    }
}

impl error::Error for FastaError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            FastaError::Io(e) => Some(e),
            FastaError::Decode(e) => Some(e),
            FastaError::Format(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_io() {
        let err = FastaError::from(io::Error::new(io::ErrorKind::NotFound, "no such file"));
        assert_eq!(err.to_string(), "I/O error: no such file");
    }

    #[test]
    fn test_display_decode() {
        let bad = String::from_utf8(vec![b'>', 0xff]).unwrap_err();
        let err = FastaError::from(bad);
        assert!(err.to_string().starts_with("Decode error: "));
        assert!(error::Error::source(&err).is_some());
    }

    #[test]
    fn test_display_format() {
        let err = FastaError::from(String::from("Missing sequence name at line 1"));
        assert_eq!(err.to_string(), "Format error: Missing sequence name at line 1");
        assert!(error::Error::source(&err).is_none());
    }
}
