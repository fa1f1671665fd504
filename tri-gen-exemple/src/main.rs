use tri_gen_core::corpus;
use tri_gen_core::io::read_posts;
use tri_gen_core::{GenError, GenerationConfig, Generator, ScriptTokenizer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Post archive, one post per line
    let path = std::env::args().nth(1).unwrap_or_else(|| "./data/posts.txt".to_owned());
    let posts = read_posts(&path)?;

    // Drop reposts, hashtags, links and mentions, then strip half-width symbols
    let text = corpus::harvest(&posts);
    println!("{} posts, {} characters of corpus", posts.len(), text.chars().count());

    // Number of sentences tried per generation, and the output length budget
    // (sentences that would not fit are dropped, not truncated)
    let mut config = GenerationConfig::default();
    config.set_sentence_count(5)?;
    config.set_max_output_length(110)?;

    // A walk giving up after this many tokens counts as a dead end
    config.set_max_steps(200)?;

    // Invalid values are rejected
    match config.set_sentence_count(0) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Rejected: {e}"),
    }

    let generator = Generator::with_config(ScriptTokenizer, config)?;

    // A corpus of one-word sentences cannot start a chain
    match generator.generate("OK。Fine。") {
        Err(GenError::DegenerateChain) => println!("'OK。Fine。' is too short to build a chain"),
        other => println!("Should not happen: {other:?}"),
    }

    // Generate 10 texts from the archive
    for i in 0..10 {
        println!("Generated text {}: {}", i + 1, generator.generate(&text)?);
    }

    Ok(())
}
