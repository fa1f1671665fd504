use std::collections::HashMap;

use log::{trace, warn};
use rand::Rng;

use super::frequency_table::FrequencyTable;
use super::state::State;
use super::triplet::Token;
use crate::error::{GenError, Result};

/// Lookup structure compiled once from a [`FrequencyTable`].
///
/// Sentence openings are gathered in a single `start` state whose choices
/// are `(first, second)` pairs. Every other triplet lands in the state of its
/// `(prefix1, prefix2)` pair, so each walk step is one lookup instead of a
/// scan of the whole table.
#[derive(Clone, Debug, Default)]
pub struct ChainIndex {
	start: State<(Token, Token)>,
	states: HashMap<Token, HashMap<Token, State<Token>>>,
}

impl ChainIndex {
	pub fn from_table(table: &FrequencyTable) -> Self {
		let mut index = Self::default();
		for (triplet, count) in table.iter() {
			if triplet.prefix1 == Token::Begin {
				index.start.add_transition((triplet.prefix2.clone(), triplet.suffix.clone()), count);
			} else {
				index
					.states
					.entry(triplet.prefix1.clone())
					.or_default()
					.entry(triplet.prefix2.clone())
					.or_default()
					.add_transition(triplet.suffix.clone(), count);
			}
		}
		index
	}

	/// True if no sentence opening exists: every walk would fail.
	pub fn is_degenerate(&self) -> bool {
		self.start.is_empty()
	}

	fn state(&self, prefix1: &Token, prefix2: &Token) -> Option<&State<Token>> {
		self.states.get(prefix1)?.get(prefix2)
	}

	/// Walks the chain from a weighted-random opening until END is drawn.
	///
	/// Returns the words of the sentence; END itself is not included.
	///
	/// # Errors
	/// - `DegenerateChain` if there is no opening to start from.
	/// - `NoContinuation` if the current pair has no successor, or if
	///   `max_steps` transitions were taken without reaching END.
	pub fn walk<R: Rng>(&self, rng: &mut R, max_steps: usize) -> Result<Vec<String>> {
		let (first, second) = self.start.predict(rng).ok_or(GenError::DegenerateChain)?;
		let mut sentence = vec![first.clone(), second.clone()];

		let mut steps = 0;
		while sentence.last() != Some(&Token::End) {
			let n = sentence.len();
			let (prefix1, prefix2) = (&sentence[n - 2], &sentence[n - 1]);
			if steps == max_steps {
				warn!("walk stopped after {max_steps} steps without reaching END");
				return Err(no_continuation(prefix1, prefix2));
			}

			let next = self
				.state(prefix1, prefix2)
				.and_then(|state| state.predict(rng))
				.ok_or_else(|| no_continuation(prefix1, prefix2))?;
			trace!("({prefix1}, {prefix2}) -> {next}");

			sentence.push(next.clone());
			steps += 1;
		}

		Ok(sentence.into_iter().filter_map(Token::into_word).collect())
	}
}

fn no_continuation(prefix1: &Token, prefix2: &Token) -> GenError {
	GenError::NoContinuation { prefix1: prefix1.to_string(), prefix2: prefix2.to_string() }
}
