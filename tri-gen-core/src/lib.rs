//! Triplet-based text generation library.
//!
//! This crate turns a body of text (typically a user's post history) into
//! new, plausible-looking sentences using an order-2 Markov chain over tokens:
//! - Corpus harvesting and symbol cleaning
//! - Sentence segmentation and pluggable tokenization
//! - Triplet frequency tables with sentence sentinels
//! - Weighted chain walks with an injectable random source
//!
//! Everything runs synchronously; each generation request builds its own
//! tables and discards them on return.

/// Core chain model and generation logic.
pub mod model;

/// Tokenizer capability and stock tokenizers.
pub mod tokenizer;

/// Post harvesting and symbol stripping.
pub mod corpus;

/// Error taxonomy of the crate.
pub mod error;

/// I/O utilities (corpus and post archive loading).
pub mod io;

pub use error::{GenError, Result};
pub use model::generation_config::GenerationConfig;
pub use model::generator::Generator;
pub use tokenizer::{ScriptTokenizer, TokenizeError, Tokenizer, WhitespaceTokenizer};
