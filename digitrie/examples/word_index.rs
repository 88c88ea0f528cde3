//! Builds a small index of words with their frequencies and walks it in order.
//!
//! ```text
//! cargo run --example word_index -- "the quick brown fox jumps over the lazy dog"
//! ```

use anyhow::{bail, Context, Result};

use digitrie::{Trie, TrieError};

fn main() -> Result<()> {
    let text = std::env::args().nth(1).unwrap_or_else(|| {
        "the quick brown fox jumps over the lazy dog then the fox sleeps".to_string()
    });

    let mut index = Trie::<usize>::new();
    for word in text.split_whitespace() {
        let word = word.to_ascii_lowercase();
        match index.add_entry((word.as_str(), 1).into()) {
            Ok(()) => {}
            Err(TrieError::DuplicateKey(_)) => {
                let count = index
                    .get_mut(&word)
                    .context("duplicate key vanished from the index")?;
                *count += 1;
            }
            Err(e) => return Err(e).with_context(|| format!("indexing {word:?}")),
        }
    }
    if index.is_empty() {
        bail!("no words to index");
    }

    println!("{} distinct words, from {:?} to {:?}", index.len(), index.min()?, index.max()?);
    for entry in &index {
        println!("{:>12} {}", entry.key(), entry.data());
    }

    for prefix in ["th", "f", "z"] {
        println!("completions of {prefix:?}: {:?}", index.completions(prefix)?);
    }
    match index.successor("m") {
        Ok(word) => println!("first word after \"m\": {word}"),
        Err(TrieError::NotFound) => println!("no word after \"m\""),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
