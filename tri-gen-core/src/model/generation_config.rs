use serde::{Deserialize, Serialize};

use crate::error::{GenError, Result};

/// Parameters of one generation request.
///
/// # Invariants
/// - `sentence_count`, `max_output_length` and `max_steps` are strictly positive
///   (enforced by the setters, and by [`GenerationConfig::validate`] for
///   deserialized values)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct GenerationConfig {
	/// Number of sentences to attempt.
	#[serde(default = "default_sentence_count")]
	sentence_count: usize,

	/// Upper bound on the output length, in characters.
	#[serde(default = "default_max_output_length")]
	max_output_length: usize,

	/// Maximum number of transitions in one sentence before giving up.
	#[serde(default = "default_max_steps")]
	max_steps: usize,

	/// Inserted between the tokens of a generated sentence.
	#[serde(default)]
	pub separator: String,
}

fn default_sentence_count() -> usize {
	5
}
fn default_max_output_length() -> usize {
	110
}
fn default_max_steps() -> usize {
	256
}

impl Default for GenerationConfig {
	fn default() -> Self {
		Self {
			sentence_count: default_sentence_count(),
			max_output_length: default_max_output_length(),
			max_steps: default_max_steps(),
			separator: String::new(),
		}
	}
}

impl GenerationConfig {
	pub fn sentence_count(&self) -> usize {
		self.sentence_count
	}

	pub fn max_output_length(&self) -> usize {
		self.max_output_length
	}

	pub fn max_steps(&self) -> usize {
		self.max_steps
	}

	/// # Errors
	/// Returns an error if `sentence_count` is 0.
	pub fn set_sentence_count(&mut self, sentence_count: usize) -> Result<()> {
		self.sentence_count = positive("sentence_count", sentence_count)?;
		Ok(())
	}

	/// # Errors
	/// Returns an error if `max_output_length` is 0.
	pub fn set_max_output_length(&mut self, max_output_length: usize) -> Result<()> {
		self.max_output_length = positive("max_output_length", max_output_length)?;
		Ok(())
	}

	/// # Errors
	/// Returns an error if `max_steps` is 0.
	pub fn set_max_steps(&mut self, max_steps: usize) -> Result<()> {
		self.max_steps = positive("max_steps", max_steps)?;
		Ok(())
	}

	/// Checks the invariants, for configurations built through serde.
	pub fn validate(&self) -> Result<()> {
		positive("sentence_count", self.sentence_count)?;
		positive("max_output_length", self.max_output_length)?;
		positive("max_steps", self.max_steps)?;
		Ok(())
	}
}

fn positive(name: &str, value: usize) -> Result<usize> {
	if value == 0 {
		return Err(GenError::InvalidConfig(format!("{name} must be > 0")));
	}
	Ok(value)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults() {
		let config = GenerationConfig::default();
		assert_eq!(config.sentence_count(), 5);
		assert_eq!(config.max_output_length(), 110);
		assert_eq!(config.max_steps(), 256);
		assert_eq!(config.separator, "");
	}

	#[test]
	fn setters_reject_zero() {
		let mut config = GenerationConfig::default();
		assert!(config.set_sentence_count(0).is_err());
		assert!(config.set_max_output_length(0).is_err());
		assert!(config.set_max_steps(0).is_err());
		assert_eq!(config, GenerationConfig::default());

		config.set_sentence_count(3).unwrap();
		assert_eq!(config.sentence_count(), 3);
	}

	#[test]
	fn validate_catches_zero_values() {
		let config = GenerationConfig { sentence_count: 0, ..GenerationConfig::default() };
		assert!(matches!(config.validate(), Err(GenError::InvalidConfig(_))));
	}
}
