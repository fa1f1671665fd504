use std::fs::File;
use std::io;
use std::io::Read;
use std::path::Path;

/// Reads a whole text file as a single corpus string.
pub fn read_corpus<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents)
}

/// Reads a post archive, one post per line.
///
/// - Splits on `\n` / `\r\n`
/// - Blank lines are skipped
pub fn read_posts<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let contents = read_corpus(filename)?;
	Ok(contents
		.lines()
		.filter(|line| !line.trim().is_empty())
		.map(str::to_owned)
		.collect())
}
