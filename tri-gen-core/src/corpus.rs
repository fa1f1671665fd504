//! Turns a raw post history into a corpus the generator can consume.
//!
//! Posts are cleaned one by one (reposts dropped, hashtags, links and
//! mentions removed, a sentence terminator guaranteed) and concatenated.
//! Half-width symbols are then stripped from the whole corpus.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use serde::Deserialize;

/// Full-width period appended to posts that do not already end with one.
pub const SENTENCE_TERMINATOR: char = '。';

/// Marker identifying a repost.
const REPOST_MARKER: &str = "RT";

static HASHTAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#.*").unwrap());
static URL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"http.*").unwrap());
static MENTION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@.*\s").unwrap());
static HALF_WIDTH_SYMBOL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[!-/:-@\[-`{-~]").unwrap());
// Line breaks are kept, the segmenter splits on them.
static CONTROL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\p{Cc}&&[^\n]]").unwrap());

/// Which cleaning steps `harvest` and `strip_symbols` apply.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct CleaningRules {
	pub skip_reposts: bool,
	pub strip_hashtags: bool,
	pub strip_urls: bool,
	pub strip_mentions: bool,
	pub terminate_posts: bool,
	pub strip_control: bool,
	pub strip_half_width_symbols: bool,
}

impl Default for CleaningRules {
	fn default() -> Self {
		Self {
			skip_reposts: true,
			strip_hashtags: true,
			strip_urls: true,
			strip_mentions: true,
			terminate_posts: true,
			strip_control: true,
			strip_half_width_symbols: true,
		}
	}
}

impl CleaningRules {
	/// Cleans a single post.
	///
	/// Returns `None` if the post is a repost (and reposts are skipped)
	/// or if nothing is left after cleaning.
	pub fn clean_post(&self, post: &str) -> Option<String> {
		let mut text = post.to_owned();
		if self.strip_hashtags {
			text = HASHTAG.replace_all(&text, "").into_owned();
		}
		if self.strip_urls {
			text = URL.replace_all(&text, "").into_owned();
		}
		if self.strip_mentions {
			text = MENTION.replace_all(&text, "").into_owned();
		}

		// Only the text left after stripping counts as a repost marker
		if self.skip_reposts && text.contains(REPOST_MARKER) {
			return None;
		}

		let trimmed = text.trim();
		if trimmed.is_empty() {
			return None;
		}

		let mut text = trimmed.to_owned();
		if self.terminate_posts && !text.ends_with(SENTENCE_TERMINATOR) {
			text.push(SENTENCE_TERMINATOR);
		}
		Some(text)
	}

	/// Concatenates the cleaned posts and strips symbols from the result.
	pub fn harvest<I, S>(&self, posts: I) -> String
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut kept = 0;
		let mut skipped = 0;
		let mut corpus = String::new();

		for post in posts {
			match self.clean_post(post.as_ref()) {
				Some(text) => {
					corpus.push_str(&text);
					kept += 1;
				}
				None => skipped += 1,
			}
		}

		debug!("harvested {kept} posts ({skipped} skipped)");
		self.strip_symbols(&corpus)
	}

	/// Removes control characters (line breaks excepted) and half-width ASCII symbols.
	pub fn strip_symbols(&self, text: &str) -> String {
		let mut text = text.to_owned();
		if self.strip_control {
			text = CONTROL.replace_all(&text, "").into_owned();
		}
		if self.strip_half_width_symbols {
			text = HALF_WIDTH_SYMBOL.replace_all(&text, "").into_owned();
		}
		text
	}
}

/// Harvests posts with the default rules.
pub fn harvest<I, S>(posts: I) -> String
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	CleaningRules::default().harvest(posts)
}

/// Strips symbols with the default rules.
pub fn strip_symbols(text: &str) -> String {
	CleaningRules::default().strip_symbols(text)
}
