/// Characters ending a sentence: full-width period, full-width full stop, ASCII period,
/// and the Unicode line and paragraph separators.
pub const SENTENCE_DELIMITERS: [char; 5] = ['。', '．', '.', '\u{2028}', '\u{2029}'];

/// Splits a cleaned corpus into sentences.
///
/// Every delimiter is turned into a line break and the text is split into
/// lines, so line breaks already present also end a sentence. Each sentence
/// is trimmed; the delimiter itself is not kept.
///
/// # Notes
/// - Empty sentences (consecutive delimiters, blank lines) are dropped here
///   rather than tokenized into nothing later on.
pub fn split_sentences(corpus: &str) -> Vec<String> {
	corpus
		.replace(&SENTENCE_DELIMITERS[..], "\n")
		.lines()
		.map(str::trim)
		.filter(|sentence| !sentence.is_empty())
		.map(str::to_owned)
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn all_delimiters_are_synonyms() {
		assert_eq!(split_sentences("一つ。二つ．three.four"), vec!["一つ", "二つ", "three", "four"]);
	}

	#[test]
	fn line_breaks_end_sentences() {
		assert_eq!(split_sentences("朝だ\n 昼だ \r\n夜だ"), vec!["朝だ", "昼だ", "夜だ"]);
	}

	#[test]
	fn unicode_separators_end_sentences() {
		assert_eq!(split_sentences("上\u{2028}中\u{2029}下"), vec!["上", "中", "下"]);
	}

	#[test]
	fn empty_sentences_are_dropped() {
		assert_eq!(split_sentences("。。 。\n\nはい。"), vec!["はい"]);
		assert!(split_sentences("").is_empty());
	}

	#[test]
	fn rejoining_restores_the_input() {
		let corpus = "猫が walked。犬が walked。";
		let rejoined: String = split_sentences(corpus).iter().map(|s| format!("{s}。")).collect();
		assert_eq!(rejoined, corpus);
	}
}
