use std::collections::HashMap;

use log::debug;

use crate::document::Document;
use crate::error::{HuffmanError, Result};
use crate::symbol::Symbol;

pub type FreqTable = HashMap<Symbol, u64>;

/// Counts how often each symbol occurs, line terminators included.
pub fn count_frequencies(document: &Document) -> Result<FreqTable> {
    let mut freq = FreqTable::new();
    for symbol in document.symbols() {
        *freq.entry(symbol).or_insert(0) += 1;
    }

    if freq.is_empty() {
        return Err(HuffmanError::EmptyInput);
    }

    debug!(
        "Counted {} symbols, {} distinct",
        freq.values().sum::<u64>(),
        freq.len()
    );
    Ok(freq)
}

pub fn entropy_from_freq(freq: &FreqTable) -> f64 {
    let total: u64 = freq.values().sum();
    if total == 0 {
        return 0.0;
    }
    let total_f = total as f64;

    let entropy: f64 = freq
        .values()
        .map(|&count| {
            let p = count as f64 / total_f;
            -p * p.log2()
        })
        .sum();

    debug!(
        "Calculated entropy: {:.4} bits/symbol (Total samples: {})",
        entropy, total
    );
    entropy
}
