use log::debug;

use crate::codes::{CodeTable, build_code_table};
use crate::decoder::decode_stream;
use crate::document::Document;
use crate::encoder::{EncodedStream, encode_document};
use crate::error::Result;
use crate::frequency::{FreqTable, count_frequencies, entropy_from_freq};
use crate::huffman::{HuffmanTree, build_huffman_tree};
use crate::report::{CodeEntry, render_tree};
use crate::symbol::Symbol;

/// A document together with the Huffman code built from its symbols.
///
/// Everything is computed once in [`HuffmanCoder::build`] and read-only after.
#[derive(Debug, Clone)]
pub struct HuffmanCoder {
    document: Document,
    frequencies: FreqTable,
    tree: HuffmanTree,
    code_table: CodeTable,
}

impl HuffmanCoder {
    pub fn build(document: Document) -> Result<Self> {
        let frequencies = count_frequencies(&document)?;
        let tree = build_huffman_tree(&frequencies)?;
        let code_table = build_code_table(&tree);
        debug!("Code table built with {} entries.", code_table.len());

        Ok(Self {
            document,
            frequencies,
            tree,
            code_table,
        })
    }

    pub fn from_text(text: &str) -> Result<Self> {
        Self::build(Document::from_text(text))
    }

    pub fn encode(&self) -> EncodedStream {
        encode_document(&self.document, &self.code_table)
    }

    pub fn decode(&self, stream: &EncodedStream) -> Result<Document> {
        let symbols = decode_stream(&self.tree, stream.as_str())?;
        Ok(Document::from_symbols(&symbols))
    }

    /// Every symbol with its frequency and code, least frequent first.
    /// Equal frequencies are listed in symbol order.
    pub fn code_table_report(&self) -> Vec<CodeEntry> {
        let mut entries: Vec<CodeEntry> = self
            .frequencies
            .iter()
            .map(|(&symbol, &frequency)| CodeEntry {
                symbol,
                frequency,
                code: self.code_table[&symbol].clone(),
            })
            .collect();
        entries.sort_by(|a, b| a.frequency.cmp(&b.frequency).then(a.symbol.cmp(&b.symbol)));
        entries
    }

    pub fn tree_report(&self) -> String {
        render_tree(&self.tree)
    }

    pub fn average_bits_per_symbol(&self) -> f64 {
        // decoding reproduces the document, so its symbol count is the decoded count
        self.encode().len() as f64 / self.document.symbol_count() as f64
    }

    pub fn entropy(&self) -> f64 {
        entropy_from_freq(&self.frequencies)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn frequencies(&self) -> &FreqTable {
        &self.frequencies
    }

    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    pub fn code_table(&self) -> &CodeTable {
        &self.code_table
    }

    pub fn code(&self, symbol: Symbol) -> Option<&str> {
        self.code_table.get(&symbol).map(String::as_str)
    }
}
