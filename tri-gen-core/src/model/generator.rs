use log::debug;
use rand::Rng;

use super::chain::ChainIndex;
use super::frequency_table::FrequencyTable;
use super::generation_config::GenerationConfig;
use crate::error::{GenError, Result};
use crate::tokenizer::Tokenizer;

/// High-level generator turning a corpus into new text.
///
/// # Responsibilities
/// - Build a fresh frequency table and chain index for every request
/// - Walk the chain `sentence_count` times
/// - Keep only the sentences that fit in `max_output_length`
///
/// Nothing is cached between calls: a failed request leaves no state behind.
#[derive(Debug, Clone)]
pub struct Generator<T> {
	tokenizer: T,
	config: GenerationConfig,
}

impl<T: Tokenizer> Generator<T> {
	/// Creates a generator with the default configuration.
	pub fn new(tokenizer: T) -> Self {
		Self { tokenizer, config: GenerationConfig::default() }
	}

	/// Creates a generator with a custom configuration.
	///
	/// # Errors
	/// Returns an error if the configuration is invalid.
	pub fn with_config(tokenizer: T, config: GenerationConfig) -> Result<Self> {
		config.validate()?;
		Ok(Self { tokenizer, config })
	}

	pub fn config(&self) -> &GenerationConfig {
		&self.config
	}

	/// Mutable access; the setters keep the configuration valid.
	pub fn config_mut(&mut self) -> &mut GenerationConfig {
		&mut self.config
	}

	pub fn tokenizer(&self) -> &T {
		&self.tokenizer
	}

	/// Segments, tokenizes and indexes the corpus.
	///
	/// # Errors
	/// Forwards tokenizer failures.
	pub fn build_chain(&self, corpus: &str) -> Result<ChainIndex> {
		let table = FrequencyTable::from_corpus(corpus, &self.tokenizer)?;
		Ok(ChainIndex::from_table(&table))
	}

	/// Generates text from `corpus` using the thread-local generator.
	pub fn generate(&self, corpus: &str) -> Result<String> {
		self.generate_with(corpus, &mut rand::rng())
	}

	/// Generates text from `corpus`, drawing every random choice from `rng`.
	///
	/// # Returns
	/// - `Ok("")` if the corpus is empty or whitespace-only (nothing is built)
	/// - `Ok(text)`: the accepted sentences concatenated; sentences that would
	///   push the output past `max_output_length` are dropped, not truncated
	///
	/// # Errors
	/// - `DegenerateChain` if no sentence has at least 2 tokens
	/// - `NoContinuation` if a walk gets stuck or runs past `max_steps`
	/// - `Tokenize` if the tokenizer rejects a sentence
	pub fn generate_with<R: Rng>(&self, corpus: &str, rng: &mut R) -> Result<String> {
		if corpus.trim().is_empty() {
			return Ok(String::new());
		}

		let chain = self.build_chain(corpus)?;
		if chain.is_degenerate() {
			return Err(GenError::DegenerateChain);
		}

		let budget = self.config.max_output_length();
		let mut text = String::new();
		let mut length = 0;

		for _ in 0..self.config.sentence_count() {
			let sentence = chain.walk(rng, self.config.max_steps())?.join(&self.config.separator);
			let sentence_length = sentence.chars().count();
			if length + sentence_length <= budget {
				text.push_str(&sentence);
				length += sentence_length;
			} else {
				debug!("dropped a {sentence_length}-char sentence ({length}/{budget} used)");
			}
		}

		Ok(text)
	}
}
