//! # text_huffman
//!
//! Builds a Huffman code from the characters of a text document and uses it
//! to turn the document into a string of `'0'`/`'1'` bits and back.
//!
//! Lines are joined by a reserved line terminator symbol, which takes part in
//! frequency counting and coding like any other character.
//!
//! ```rust
//! use text_huffman::HuffmanCoder;
//!
//! let coder = HuffmanCoder::from_text("ab\nab")?;
//! let encoded = coder.encode();
//! assert_eq!(encoded.as_str(), "11010110");
//! assert_eq!(coder.decode(&encoded)?.to_string(), "ab\nab");
//! # Ok::<(), text_huffman::HuffmanError>(())
//! ```

pub mod coder;
pub mod codes;
pub mod decoder;
pub mod document;
pub mod encoder;
pub mod error;
pub mod frequency;
pub mod huffman;
pub mod report;
pub mod symbol;

pub use coder::HuffmanCoder;
pub use document::Document;
pub use encoder::EncodedStream;
pub use error::{HuffmanError, Result};
pub use report::{CodeEntry, Summary};
pub use symbol::{LINE_TERMINATOR, Symbol};
