//! Markup-to-text extraction.
//!
//! [`tokenizer`] turns a document into tokens without building a tree;
//! [`extract`] walks them and keeps the reader-visible text.

pub mod entities;
pub mod extract;
pub mod tokenizer;

pub use extract::{ExtractOptions, extract_text, extract_text_with};
pub use tokenizer::{StartTag, Token, Tokenizer};
