use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::debug;

use crate::error::{HuffmanError, Result};
use crate::frequency::FreqTable;
use crate::symbol::Symbol;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Node {
    Leaf {
        symbol: Symbol,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
        }
    }

    pub fn symbol(&self) -> Option<Symbol> {
        match self {
            Node::Leaf { symbol, .. } => Some(*symbol),
            Node::Internal { .. } => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    fn merge(left: Node, right: Node) -> Node {
        Node::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

pub type HuffmanTree = Node;

#[derive(Eq, PartialEq)]
struct HeapNode {
    weight: u64,
    seq: usize,
    node: Node,
}

impl Ord for HeapNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for Min-Heap behavior in BinaryHeap (which is max-heap by default)
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for HeapNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Leaves are numbered in symbol order and merged nodes after them, so equal
// weights pop leaves first, smaller symbols first, older merges first.
pub fn build_huffman_tree(frequencies: &FreqTable) -> Result<HuffmanTree> {
    debug!(
        "Building Huffman Tree from {} unique symbols",
        frequencies.len()
    );

    let mut leaves: Vec<_> = frequencies.iter().collect();
    leaves.sort_by_key(|&(&symbol, _)| symbol);

    let mut heap: BinaryHeap<HeapNode> = leaves
        .into_iter()
        .enumerate()
        .map(|(seq, (&symbol, &weight))| HeapNode {
            weight,
            seq,
            node: Node::Leaf { symbol, weight },
        })
        .collect();
    let mut next_seq = heap.len();

    while heap.len() > 1 {
        let (Some(left), Some(right)) = (heap.pop(), heap.pop()) else {
            break;
        };

        let node = Node::merge(left.node, right.node);
        heap.push(HeapNode {
            weight: node.weight(),
            seq: next_seq,
            node,
        });
        next_seq += 1;
    }

    let root = heap.pop().map(|n| n.node).ok_or(HuffmanError::EmptyInput)?;
    debug!("Tree construction complete, root weight {}", root.weight());
    Ok(root)
}
