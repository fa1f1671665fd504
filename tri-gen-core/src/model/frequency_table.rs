use std::collections::BTreeMap;

use log::debug;

use super::segmenter::split_sentences;
use super::triplet::Triplet;
use crate::error::Result;
use crate::tokenizer::Tokenizer;

/// Occurrence counts of token triplets over a whole corpus.
///
/// # Responsibilities
/// - Accumulate interior triplets of every tokenized sentence
/// - Record the `(BEGIN, t0, t1)` and `(t[n-2], t[n-1], END)` boundaries
///
/// # Invariants
/// - Every stored count is strictly positive
/// - Boundary triplets are set to 1, never incremented: a sentence opening
///   (or closing) shared by several sentences still counts once
/// - Iteration order is stable (ordered map), so a seeded walk is reproducible
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyTable {
	counts: BTreeMap<Triplet, usize>,
}

impl FrequencyTable {
	pub fn new() -> Self {
		Self::default()
	}

	/// Segments the corpus, tokenizes each sentence and counts its triplets.
	///
	/// # Errors
	/// Forwards the first tokenizer failure unchanged.
	pub fn from_corpus<T: Tokenizer>(corpus: &str, tokenizer: &T) -> Result<Self> {
		let mut table = Self::new();
		let sentences = split_sentences(corpus);
		for sentence in &sentences {
			let tokens = tokenizer.tokenize(sentence)?;
			table.add_sentence(&tokens);
		}
		debug!("{} sentences -> {} triplets ({} openings)", sentences.len(), table.len(), table.begin_count());
		Ok(table)
	}

	/// Adds the triplets of one tokenized sentence.
	///
	/// # Notes
	/// - Tokens are trimmed of surrounding whitespace.
	/// - Sentences with fewer than 2 tokens contribute nothing.
	pub fn add_sentence<S: AsRef<str>>(&mut self, tokens: &[S]) {
		let tokens: Vec<&str> = tokens.iter().map(|t| t.as_ref().trim()).collect();
		let n = tokens.len();
		if n < 2 {
			return;
		}

		for window in tokens.windows(3) {
			self.increment(Triplet::words(window[0], window[1], window[2]));
		}

		self.set(Triplet::begin(tokens[0], tokens[1]), 1);
		self.set(Triplet::end(tokens[n - 2], tokens[n - 1]), 1);
	}

	/// Increments the count of `triplet`, inserting it at 1 if absent.
	///
	/// Returns the new count.
	pub fn increment(&mut self, triplet: Triplet) -> usize {
		let count = self.counts.entry(triplet).or_insert(0);
		*count += 1;
		*count
	}

	/// Overwrites the count of `triplet`. A count of 0 removes it.
	pub fn set(&mut self, triplet: Triplet, count: usize) {
		if count == 0 {
			self.counts.remove(&triplet);
		} else {
			self.counts.insert(triplet, count);
		}
	}

	/// Count of `triplet`, 0 if never seen.
	pub fn get(&self, triplet: &Triplet) -> usize {
		self.counts.get(triplet).copied().unwrap_or(0)
	}

	pub fn len(&self) -> usize {
		self.counts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	/// Number of distinct sentence openings.
	pub fn begin_count(&self) -> usize {
		self.counts.keys().filter(|t| t.is_begin()).count()
	}

	/// Number of distinct sentence endings.
	pub fn end_count(&self) -> usize {
		self.counts.keys().filter(|t| t.is_end()).count()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&Triplet, usize)> {
		self.counts.iter().map(|(triplet, count)| (triplet, *count))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tokenizer::WhitespaceTokenizer;

	#[test]
	fn short_sentences_contribute_nothing() {
		let mut table = FrequencyTable::new();
		table.add_sentence::<&str>(&[]);
		table.add_sentence(&["OK"]);
		assert!(table.is_empty());
	}

	#[test]
	fn two_tokens_give_only_boundaries() {
		let mut table = FrequencyTable::new();
		table.add_sentence(&["猫が", "walked"]);
		assert_eq!(table.len(), 2);
		assert_eq!(table.get(&Triplet::begin("猫が", "walked")), 1);
		assert_eq!(table.get(&Triplet::end("猫が", "walked")), 1);
	}

	#[test]
	fn interior_windows_count_length_minus_two() {
		let mut table = FrequencyTable::new();
		let tokens = ["a", "b", "c", "d", "e"];
		table.add_sentence(&tokens);
		let interior: usize = table.iter().filter(|(t, _)| !t.is_begin() && !t.is_end()).map(|(_, n)| n).sum();
		assert_eq!(interior, tokens.len() - 2);
	}

	#[test]
	fn interior_accumulates_but_boundaries_overwrite() {
		let mut table = FrequencyTable::new();
		table.add_sentence(&["a", "b", "c"]);
		table.add_sentence(&["a", "b", "c"]);
		assert_eq!(table.get(&Triplet::words("a", "b", "c")), 2);
		assert_eq!(table.get(&Triplet::begin("a", "b")), 1);
		assert_eq!(table.get(&Triplet::end("b", "c")), 1);
	}

	#[test]
	fn tokens_are_trimmed() {
		let mut table = FrequencyTable::new();
		table.add_sentence(&[" a", "b\t"]);
		assert_eq!(table.get(&Triplet::begin("a", "b")), 1);
	}

	#[test]
	fn increment_and_set() {
		let mut table = FrequencyTable::new();
		let t = Triplet::words("x", "y", "z");
		assert_eq!(table.increment(t.clone()), 1);
		assert_eq!(table.increment(t.clone()), 2);
		table.set(t.clone(), 7);
		assert_eq!(table.get(&t), 7);
		table.set(t.clone(), 0);
		assert_eq!(table.get(&t), 0);
		assert!(table.is_empty());
	}

	#[test]
	fn corpus_gets_boundaries_for_each_sentence() {
		let table = FrequencyTable::from_corpus("猫が walked。犬が walked。", &WhitespaceTokenizer).unwrap();
		assert_eq!(table.get(&Triplet::begin("猫が", "walked")), 1);
		assert_eq!(table.get(&Triplet::begin("犬が", "walked")), 1);
		assert_eq!(table.get(&Triplet::end("猫が", "walked")), 1);
		assert_eq!(table.get(&Triplet::end("犬が", "walked")), 1);
		assert_eq!(table.begin_count(), 2);
		assert_eq!(table.end_count(), 2);
	}

	#[test]
	fn single_token_sentences_leave_table_empty() {
		let table = FrequencyTable::from_corpus("OK。Fine。", &WhitespaceTokenizer).unwrap();
		assert!(table.is_empty());
	}
}
