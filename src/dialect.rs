use std::fmt;

/// The (delimiter, quote character) pair describing how to tokenize delimited text.
///
/// A dialect is a plain immutable value passed by parameter; there is no
/// process-wide dialect registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dialect {
    /// Field delimiter character.
    pub delimiter: u8,
    /// Quote character.
    pub quote: u8,
}

impl Default for Dialect {
    /// The fallback dialect: comma delimited, double-quoted.
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
        }
    }
}

impl Dialect {
    /// Create a new dialect.
    pub const fn new(delimiter: u8, quote: u8) -> Self {
        Self { delimiter, quote }
    }

    /// Build a CSV reader over `content` configured for this dialect.
    ///
    /// The reader is flexible (rows may have varying field counts) and treats
    /// every row as data; header handling is up to the caller.
    pub fn reader<'a>(&self, content: &'a str) -> csv::Reader<&'a [u8]> {
        csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .quote(self.quote)
            .has_headers(false)
            .flexible(true)
            .from_reader(content.as_bytes())
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "delimiter={:?} quote={:?}",
            self.delimiter as char, self.quote as char
        )
    }
}

/// Candidate delimiters, ordered by frequency in real-world data.
pub const DELIMITERS: &[u8] = &[b',', b';', b'\t', b'|'];

/// Candidate quote characters.
pub const QUOTES: &[u8] = &[b'"', b'\''];

/// Generate the candidate dialect space: the cartesian product of
/// [`DELIMITERS`] and [`QUOTES`], delimiter-major.
///
/// Iteration order matters: score ties during detection keep the
/// earliest-generated candidate.
pub fn candidate_dialects() -> Vec<Dialect> {
    let mut dialects = Vec::with_capacity(DELIMITERS.len() * QUOTES.len());

    for &delimiter in DELIMITERS {
        for &quote in QUOTES {
            dialects.push(Dialect::new(delimiter, quote));
        }
    }

    dialects
}
