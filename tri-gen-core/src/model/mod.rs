//! Top-level module for the triplet chain generation system.
//!
//! This module provides an order-2 Markov chain text generator, including:
//! - Sentence segmentation (`segmenter`)
//! - Token and triplet types with BEGIN/END sentinels (`triplet`)
//! - Triplet frequency counting (`FrequencyTable`)
//! - Weighted chain states and the chain walker (`State`, `ChainIndex`)
//! - Generation configuration (`GenerationConfig`)
//! - A high-level generation interface (`Generator`)

/// High-level interface for generating text from a corpus.
///
/// Builds the chain once per request and walks it repeatedly within
/// a sentence count and an output length budget.
pub mod generator;

/// Generation parameters: sentence count, length budget, step limit, separator.
pub mod generation_config;

/// Triplet occurrence counts over a whole corpus.
///
/// Interior triplets accumulate; sentence boundaries are overwritten.
pub mod frequency_table;

/// Chain index compiled from a frequency table, and the chain walk.
pub mod chain;

/// Splits a corpus into sentences on sentence-final punctuation.
pub mod segmenter;

/// Tokens (words and sentinels) and triplets.
pub mod triplet;

/// Weighted choices following one prefix.
///
/// Samples through cumulative weights and a binary search.
mod state;
