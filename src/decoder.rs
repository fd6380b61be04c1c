use log::{debug, trace};

use crate::error::{HuffmanError, Result};
use crate::huffman::Node;
use crate::symbol::Symbol;

/// Walks the tree from the root, `'0'` left and anything else right,
/// emitting a symbol whenever the pointer rests on a leaf.
pub fn decode_stream(root: &Node, bits: &str) -> Result<Vec<Symbol>> {
    debug!("Starting bitstream decoding of {} bits...", bits.len());

    if bits.is_empty() {
        return Ok(Vec::new());
    }

    if let Node::Leaf { symbol, .. } = root {
        trace!("Single leaf tree, one symbol per bit");
        return Ok(vec![*symbol; bits.chars().count()]);
    }

    let mut result = Vec::new();
    let mut current = root;

    for bit in bits.chars() {
        if let Node::Leaf { symbol, .. } = current {
            result.push(*symbol);
            current = root;
        }

        current = match current {
            Node::Internal { left, right, .. } => {
                if bit == '0' {
                    left.as_ref()
                } else {
                    right.as_ref()
                }
            }
            Node::Leaf { .. } => unreachable!("pointer is reset to the internal root after a leaf"),
        };
    }

    match current {
        Node::Leaf { symbol, .. } => result.push(*symbol),
        Node::Internal { .. } => {
            return Err(HuffmanError::IncompleteCode {
                consumed: bits.chars().count(),
            });
        }
    }

    debug!("Final decoded data size: {} symbols.", result.len());
    Ok(result)
}
