use std::fmt;

/// A unit of the chain: a real token or one of the two sentence sentinels.
///
/// Sentinels are separate variants, so no string produced by a tokenizer
/// can ever be mistaken for a sentence boundary.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Token {
	Begin,
	End,
	Word(String),
}

impl Token {
	pub fn word(s: impl Into<String>) -> Self {
		Token::Word(s.into())
	}

	/// Consumes the token, keeping only real words.
	pub fn into_word(self) -> Option<String> {
		match self {
			Token::Word(s) => Some(s),
			Token::Begin | Token::End => None,
		}
	}
}

impl fmt::Display for Token {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Token::Begin => f.write_str("__BEGIN_SENTENCE__"),
			Token::End => f.write_str("__END_SENTENCE__"),
			Token::Word(s) => f.write_str(s),
		}
	}
}

/// An ordered 3-token window: two prefix tokens and the suffix that followed them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Triplet {
	pub prefix1: Token,
	pub prefix2: Token,
	pub suffix: Token,
}

impl Triplet {
	pub fn new(prefix1: Token, prefix2: Token, suffix: Token) -> Self {
		Self { prefix1, prefix2, suffix }
	}

	/// `(BEGIN, first, second)`
	pub fn begin(first: &str, second: &str) -> Self {
		Self::new(Token::Begin, Token::word(first), Token::word(second))
	}

	/// `(second_to_last, last, END)`
	pub fn end(second_to_last: &str, last: &str) -> Self {
		Self::new(Token::word(second_to_last), Token::word(last), Token::End)
	}

	/// Three consecutive real tokens.
	pub fn words(a: &str, b: &str, c: &str) -> Self {
		Self::new(Token::word(a), Token::word(b), Token::word(c))
	}

	pub fn is_begin(&self) -> bool {
		self.prefix1 == Token::Begin
	}

	pub fn is_end(&self) -> bool {
		self.suffix == Token::End
	}
}

impl fmt::Display for Triplet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}|{}|{}", self.prefix1, self.prefix2, self.suffix)
	}
}
