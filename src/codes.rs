use std::collections::HashMap;

use log::trace;

use crate::huffman::Node;
use crate::symbol::{Symbol, display_symbol};

pub type CodeTable = HashMap<Symbol, String>;

// a lone leaf has an empty path and gets "0" instead
pub fn leaf_codes(root: &Node) -> Vec<(Symbol, String)> {
    let mut codes = Vec::new();
    let mut stack = vec![(root, String::new())];

    while let Some((node, prefix)) = stack.pop() {
        match node {
            Node::Leaf { symbol, .. } => {
                let code = if prefix.is_empty() {
                    String::from("0")
                } else {
                    prefix
                };
                trace!("Assigning code to '{}' : '{}'", display_symbol(*symbol), code);
                codes.push((*symbol, code));
            }
            Node::Internal { left, right, .. } => {
                stack.push((right.as_ref(), format!("{}1", prefix)));
                stack.push((left.as_ref(), format!("{}0", prefix)));
            }
        }
    }

    codes
}

pub fn build_code_table(root: &Node) -> CodeTable {
    leaf_codes(root).into_iter().collect()
}
