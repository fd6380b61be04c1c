//! Text renderings of a built coder for console output.

use std::fmt;

use crate::coder::HuffmanCoder;
use crate::encoder::EncodedStream;
use crate::error::Result;
use crate::huffman::Node;
use crate::symbol::{Symbol, display_symbol};

const INDENT: &str = "    ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeEntry {
    pub symbol: Symbol,
    pub frequency: u64,
    pub code: String,
}

impl fmt::Display for CodeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Value: {} Frequency: {} Encoding Value: {}",
            display_symbol(self.symbol),
            self.frequency,
            self.code
        )
    }
}

pub fn render_code_table(entries: &[CodeEntry]) -> String {
    entries
        .iter()
        .map(|entry| format!("{}\n", entry))
        .collect()
}

/// Draws the tree sideways: the right subtree above its parent, the left
/// subtree below, each level indented one step further.
pub fn render_tree(root: &Node) -> String {
    fn print_sideways(node: &Node, indent: &str, out: &mut Vec<String>) {
        match node {
            Node::Leaf { symbol, weight } => {
                out.push(format!("{}[{}]:{}", indent, display_symbol(*symbol), weight));
            }
            Node::Internal {
                weight,
                left,
                right,
            } => {
                let deeper = format!("{}{}", indent, INDENT);
                print_sideways(right, &deeper, out);
                out.push(format!("{}[]:{}", indent, weight));
                print_sideways(left, &deeper, out);
            }
        }
    }

    let mut lines = Vec::new();
    print_sideways(root, "", &mut lines);
    lines.join("\n")
}

/// Everything the console front end prints about one document.
#[derive(Debug, Clone)]
pub struct Summary {
    pub original: String,
    pub code_table: Vec<CodeEntry>,
    pub tree: String,
    pub encoded: EncodedStream,
    pub decoded: String,
    pub average_bits: f64,
    pub entropy: f64,
}

impl Summary {
    /// Runs the coder end to end: encodes its document and decodes the result.
    pub fn collect(coder: &HuffmanCoder) -> Result<Self> {
        let encoded = coder.encode();
        let decoded = coder.decode(&encoded)?;

        Ok(Self {
            original: coder.document().to_string(),
            code_table: coder.code_table_report(),
            tree: coder.tree_report(),
            average_bits: coder.average_bits_per_symbol(),
            entropy: coder.entropy(),
            decoded: decoded.to_string(),
            encoded,
        })
    }

    pub fn round_trip_ok(&self) -> bool {
        self.original == self.decoded
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Original Message:\n{}", self.original)?;
        writeln!(
            f,
            "Symbol Frequency Table:\n{}",
            render_code_table(&self.code_table)
        )?;
        writeln!(f, "Huffman Tree:\n{}", self.tree)?;
        writeln!(f, "Encoded Message:\n{}", self.encoded)?;
        writeln!(f, "Decoded Message:\n{}", self.decoded)?;
        writeln!(
            f,
            "Average number of bits per symbol used to encode message: {}",
            self.average_bits
        )?;
        write!(f, "Entropy: {:.4} bits/symbol", self.entropy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_tree_rendering() {
        let coder = HuffmanCoder::from_text("ab\nab").unwrap();
        let expected = [
            "        [a]:2",
            "    []:3",
            "        [\\n]:1",
            "[]:5",
            "    [b]:2",
        ]
        .join("\n");
        assert_eq!(coder.tree_report(), expected);
    }

    #[test]
    fn lone_leaf_rendering() {
        let coder = HuffmanCoder::from_text("zz").unwrap();
        assert_eq!(coder.tree_report(), "[z]:2");
    }

    #[test]
    fn code_table_rendering() {
        let coder = HuffmanCoder::from_text("ab\nab").unwrap();
        assert_eq!(
            render_code_table(&coder.code_table_report()),
            "Value: \\n Frequency: 1 Encoding Value: 10\n\
             Value: a Frequency: 2 Encoding Value: 11\n\
             Value: b Frequency: 2 Encoding Value: 0\n"
        );
    }

    #[test]
    fn summary_of_fixture() {
        let coder = HuffmanCoder::from_text("ab\nab").unwrap();
        let summary = Summary::collect(&coder).unwrap();

        assert!(summary.round_trip_ok());
        assert_eq!(summary.encoded.as_str(), "11010110");
        assert!((summary.average_bits - 1.6).abs() < 1e-12);
        assert!(summary.entropy <= summary.average_bits);

        let text = summary.to_string();
        assert!(text.starts_with("Original Message:\nab\nab\n"));
        assert!(text.contains("Encoded Message:\n11010110\n"));
        assert!(text.contains("Average number of bits per symbol used to encode message: 1.6"));
    }
}
