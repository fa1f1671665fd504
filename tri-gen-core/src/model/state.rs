use rand::Rng;

/// Represents a state of the chain: the weighted choices that may follow one prefix.
///
/// Conceptually, this is a node in a Markov chain where outgoing edges
/// are weighted by their number of observations.
///
/// ## Responsibilities:
/// - Accumulate weighted choices while the chain index is built
/// - Pick one choice with probability proportional to its weight
///
/// ## Invariants
/// - `cumulative[i]` is the sum of the weights of `choices[0..=i]`
/// - Every weight is strictly positive, so `cumulative` is strictly increasing
#[derive(Clone, Debug)]
pub struct State<T> {
	choices: Vec<T>,
	cumulative: Vec<usize>,
}

impl<T> Default for State<T> {
	fn default() -> Self {
		Self { choices: Vec::new(), cumulative: Vec::new() }
	}
}

impl<T> State<T> {
	pub fn new() -> Self {
		Self::default()
	}

	/// Records a choice observed `weight` times. Zero weights are ignored.
	pub fn add_transition(&mut self, choice: T, weight: usize) {
		if weight == 0 {
			return;
		}
		let total = self.total();
		self.choices.push(choice);
		self.cumulative.push(total + weight);
	}

	/// Sum of all weights.
	pub fn total(&self) -> usize {
		self.cumulative.last().copied().unwrap_or(0)
	}

	pub fn is_empty(&self) -> bool {
		self.choices.is_empty()
	}

	pub fn len(&self) -> usize {
		self.choices.len()
	}

	/// Picks a choice using weighted random sampling.
	///
	/// Draws one integer in `[0, total)` and binary-searches the cumulative
	/// weights, which selects each choice exactly as often as a list holding
	/// `weight` copies of it would.
	///
	/// Returns `None` if the state has no choices.
	pub fn predict<R: Rng>(&self, rng: &mut R) -> Option<&T> {
		let total = self.total();
		if total == 0 {
			return None;
		}

		let r = rng.random_range(0..total);
		let index = self.cumulative.partition_point(|&bound| bound <= r);
		self.choices.get(index)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn empty_state_predicts_nothing() {
		let state: State<&str> = State::new();
		assert_eq!(state.predict(&mut StdRng::seed_from_u64(0)), None);
	}

	#[test]
	fn zero_weight_is_ignored() {
		let mut state = State::new();
		state.add_transition("never", 0);
		state.add_transition("always", 2);
		assert_eq!(state.len(), 1);
		let mut rng = StdRng::seed_from_u64(1);
		for _ in 0..100 {
			assert_eq!(state.predict(&mut rng), Some(&"always"));
		}
	}

	#[test]
	fn weights_are_respected() {
		let mut state = State::new();
		state.add_transition('a', 3);
		state.add_transition('b', 1);
		assert_eq!(state.total(), 4);

		let mut rng = StdRng::seed_from_u64(42);
		let draws = 20_000;
		let a = (0..draws).filter(|_| state.predict(&mut rng) == Some(&'a')).count();
		let b = draws - a;
		let ratio = a as f64 / b as f64;
		assert!((2.7..=3.3).contains(&ratio), "ratio was {ratio}");
	}
}
