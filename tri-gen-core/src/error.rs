use thiserror::Error;

use crate::tokenizer::TokenizeError;

/// Errors raised while building a chain or generating text from it.
///
/// An empty corpus is not an error: generation simply returns an empty string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenError {
	/// The frequency table holds no sentence start (every sentence had fewer than 2 tokens).
	#[error("corpus yields no usable chain: no sentence has at least two tokens")]
	DegenerateChain,

	/// No triplet continues the pair `(prefix1, prefix2)`, or the walk hit its step limit.
	#[error("no continuation after ({prefix1:?}, {prefix2:?})")]
	NoContinuation { prefix1: String, prefix2: String },

	/// Failure reported by the injected tokenizer, forwarded unchanged.
	#[error(transparent)]
	Tokenize(#[from] TokenizeError),

	/// A configuration value was out of range.
	#[error("invalid configuration: {0}")]
	InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, GenError>;
