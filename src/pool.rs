use include_dir::{include_dir, Dir};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;
use serde_json::from_str;
use std::error::Error;

static VOCAB_DIR: Dir = include_dir!("src/vocab");

/// A fixed word list. Duplicates are allowed and meaningful: a word that
/// appears k times in the list appears k times in every round.
#[derive(Deserialize, Clone, Debug)]
pub struct Vocabulary {
    pub name: String,
    pub size: u32,
    pub words: Vec<String>,
}

impl Vocabulary {
    pub fn new(file_name: &str) -> Self {
        read_vocabulary_from_file(format!("{file_name}.json")).unwrap()
    }

    /// Draws a round: an unbiased random permutation of the word list.
    /// Operates on a copy; the vocabulary itself is never reordered.
    pub fn draw_round(&self) -> Vec<String> {
        self.draw_round_with(&mut rand::thread_rng())
    }

    pub fn draw_round_with<R: Rng>(&self, rng: &mut R) -> Vec<String> {
        let mut round = self.words.clone();
        round.shuffle(rng);
        round
    }
}

fn read_vocabulary_from_file(file_name: String) -> Result<Vocabulary, Box<dyn Error>> {
    let file = VOCAB_DIR
        .get_file(file_name)
        .expect("Vocabulary file not found");

    let file_as_str = file
        .contents_utf8()
        .expect("Unable to interpret file as a string");

    let vocab = from_str(file_as_str).expect("Unable to deserialize vocabulary json");

    Ok(vocab)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_vocabulary_new() {
        let vocab = Vocabulary::new("buzzwords");

        assert_eq!(vocab.name, "buzzwords");
        assert_eq!(vocab.size as usize, vocab.words.len());
        assert!(!vocab.words.is_empty());
    }

    #[test]
    fn test_vocabulary_weights_frequency() {
        let vocab = Vocabulary::new("buzzwords");

        // "ai" is intentionally repeated to dominate the round
        let ai_count = vocab.words.iter().filter(|w| *w == "ai").count();
        assert!(ai_count >= 10);
    }

    #[test]
    fn test_draw_round_is_permutation() {
        let vocab = Vocabulary::new("buzzwords");
        let round = vocab.draw_round();

        let mut expected = vocab.words.clone();
        let mut got = round.clone();
        expected.sort();
        got.sort();

        // same multiset of words, duplicates included
        assert_eq!(got, expected);
    }

    #[test]
    fn test_draw_round_leaves_vocabulary_untouched() {
        let vocab = Vocabulary::new("buzzwords");
        let before = vocab.words.clone();

        let _ = vocab.draw_round();

        assert_eq!(vocab.words, before);
    }

    #[test]
    fn test_draw_round_with_seeded_rng_is_deterministic() {
        let vocab = Vocabulary::new("buzzwords");

        let a = vocab.draw_round_with(&mut StdRng::seed_from_u64(7));
        let b = vocab.draw_round_with(&mut StdRng::seed_from_u64(7));

        assert_eq!(a, b);
    }

    #[test]
    fn test_vocabulary_deserialization() {
        let json_data = r#"
        {
            "name": "test",
            "size": 3,
            "words": ["hello", "world", "hello"]
        }
        "#;

        let vocab: Vocabulary = from_str(json_data).expect("Failed to deserialize test vocabulary");

        assert_eq!(vocab.name, "test");
        assert_eq!(vocab.size, 3);
        assert_eq!(vocab.words, vec!["hello", "world", "hello"]);
    }

    #[test]
    #[should_panic(expected = "Vocabulary file not found")]
    fn test_read_nonexistent_vocabulary_file() {
        let _result = read_vocabulary_from_file("nonexistent.json".to_string());
    }
}
