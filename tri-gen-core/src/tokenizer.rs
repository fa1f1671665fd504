//! Tokenizer capability injected into the generator.
//!
//! The engine only relies on the contract "sentence → ordered tokens".
//! Two dictionary-free implementations are provided; anything smarter
//! (a morphological analyzer, for instance) plugs in through the trait.

use thiserror::Error;

/// Failure reported by a tokenizer for malformed input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("tokenizer rejected {sentence:?}: {reason}")]
pub struct TokenizeError {
	pub sentence: String,
	pub reason: String,
}

impl TokenizeError {
	pub fn new(sentence: &str, reason: impl Into<String>) -> Self {
		Self { sentence: sentence.to_owned(), reason: reason.into() }
	}
}

/// Splits one sentence into an ordered sequence of tokens.
pub trait Tokenizer {
	fn tokenize(&self, sentence: &str) -> Result<Vec<String>, TokenizeError>;
}

impl<T: Tokenizer + ?Sized> Tokenizer for &T {
	fn tokenize(&self, sentence: &str) -> Result<Vec<String>, TokenizeError> {
		(**self).tokenize(sentence)
	}
}

impl<T: Tokenizer + ?Sized> Tokenizer for Box<T> {
	fn tokenize(&self, sentence: &str) -> Result<Vec<String>, TokenizeError> {
		(**self).tokenize(sentence)
	}
}

/// Splits on Unicode whitespace.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
	fn tokenize(&self, sentence: &str) -> Result<Vec<String>, TokenizeError> {
		Ok(sentence.split_whitespace().map(str::to_owned).collect())
	}
}

/// Character classes used by [`ScriptTokenizer`] to guess token boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Script {
	Kanji,
	Hiragana,
	Katakana,
	Alnum,
	Other,
}

impl Script {
	fn of(c: char) -> Self {
		match c {
			'\u{3041}'..='\u{309F}' => Script::Hiragana,
			// The prolonged sound mark belongs to the katakana run it extends
			'\u{30A0}'..='\u{30FF}' | '\u{31F0}'..='\u{31FF}' | '\u{FF66}'..='\u{FF9F}' => Script::Katakana,
			'\u{3400}'..='\u{4DBF}' | '\u{4E00}'..='\u{9FFF}' | '\u{F900}'..='\u{FAFF}' | '々' => Script::Kanji,
			c if c.is_alphanumeric() => Script::Alnum,
			_ => Script::Other,
		}
	}
}

/// Splits at whitespace and at every change of script.
///
/// A rough stand-in for morphological analysis on Japanese text:
/// `"猫が好きです"` becomes `["猫", "が", "好", "きです"]`.
/// Each non-alphanumeric symbol is emitted as its own token.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScriptTokenizer;

impl Tokenizer for ScriptTokenizer {
	fn tokenize(&self, sentence: &str) -> Result<Vec<String>, TokenizeError> {
		let mut tokens = Vec::new();
		let mut current = String::new();
		let mut current_script: Option<Script> = None;

		for c in sentence.chars() {
			if c.is_whitespace() {
				if !current.is_empty() {
					tokens.push(std::mem::take(&mut current));
				}
				current_script = None;
				continue;
			}

			let script = Script::of(c);
			if current_script != Some(script) || script == Script::Other {
				if !current.is_empty() {
					tokens.push(std::mem::take(&mut current));
				}
				current_script = Some(script);
			}
			current.push(c);
		}

		if !current.is_empty() {
			tokens.push(current);
		}

		Ok(tokens)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn whitespace_splits_on_any_space() {
		let tokens = WhitespaceTokenizer.tokenize(" 猫が  walked\tfar ").unwrap();
		assert_eq!(tokens, vec!["猫が", "walked", "far"]);
	}

	#[test]
	fn whitespace_on_empty_sentence_yields_nothing() {
		assert!(WhitespaceTokenizer.tokenize("").unwrap().is_empty());
	}

	#[test]
	fn script_splits_on_class_change() {
		let tokens = ScriptTokenizer.tokenize("今日はラーメンを食べたabc").unwrap();
		assert_eq!(tokens, vec!["今日", "は", "ラーメン", "を", "食", "べた", "abc"]);
	}

	#[test]
	fn script_emits_each_symbol_alone() {
		let tokens = ScriptTokenizer.tokenize("すごい！！ok").unwrap();
		assert_eq!(tokens, vec!["すごい", "！", "！", "ok"]);
	}

	#[test]
	fn boxed_tokenizer_delegates() {
		let boxed: Box<dyn Tokenizer> = Box::new(WhitespaceTokenizer);
		assert_eq!(boxed.tokenize("a b").unwrap(), vec!["a", "b"]);
	}
}
