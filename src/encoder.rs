use std::fmt;

use log::debug;

use crate::codes::CodeTable;
use crate::document::Document;
use crate::symbol::{LINE_TERMINATOR, Symbol};

/// Concatenated codes written as `'0'` and `'1'` characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedStream(String);

impl EncodedStream {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for EncodedStream {
    fn from(bits: String) -> Self {
        Self(bits)
    }
}

impl From<&str> for EncodedStream {
    fn from(bits: &str) -> Self {
        Self(bits.to_owned())
    }
}

impl fmt::Display for EncodedStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn code_for<'a>(code_table: &'a CodeTable, symbol: Symbol) -> &'a str {
    code_table
        .get(&symbol)
        .map(String::as_str)
        .expect("code table is built from the document being encoded")
}

/// Encodes the document line by line, writing the terminator's code between
/// two lines but not after the last one.
pub fn encode_document(document: &Document, code_table: &CodeTable) -> EncodedStream {
    debug!("Starting data encoding...");
    let mut bits = String::with_capacity(document.symbol_count() * 4);

    for (i, line) in document.lines().iter().enumerate() {
        if i > 0 {
            bits.push_str(code_for(code_table, LINE_TERMINATOR));
        }
        for &symbol in line {
            bits.push_str(code_for(code_table, symbol));
        }
    }

    debug!(
        "Encoded {} symbols into {} bits",
        document.symbol_count(),
        bits.len()
    );
    EncodedStream(bits)
}
