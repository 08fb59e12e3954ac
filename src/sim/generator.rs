//! Puzzle generation by rejection sampling
//!
//! Words are picked in an order where every constraint only looks at words
//! already chosen (top, left, middle, bottom, center, right). An empty
//! candidate pool abandons the attempt and the next one starts over from a
//! fresh top word.

use rand::Rng;
use rand::seq::IndexedRandom;
use thiserror::Error;

use super::puzzle::Puzzle;
use crate::words::{Word, WordList};

/// Generation failed; no partial puzzle is ever returned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("word list is empty")]
    EmptyWordList,
    #[error("no puzzle found after {attempts} attempts")]
    Exhausted { attempts: u32 },
}

/// Search `words` for a cross, giving up after `max_attempts` attempts
pub fn generate<W, R>(words: &W, max_attempts: u32, rng: &mut R) -> Result<Puzzle, GenerateError>
where
    W: WordList + ?Sized,
    R: Rng + ?Sized,
{
    let all = words.all();
    if all.is_empty() {
        return Err(GenerateError::EmptyWordList);
    }

    for attempt in 1..=max_attempts {
        if let Some(puzzle) = attempt_once(all, rng) {
            log::debug!(
                "Generated in {} attempts: {} {} {} / {} {} {}",
                attempt,
                puzzle.top(),
                puzzle.middle(),
                puzzle.bottom(),
                puzzle.left(),
                puzzle.center(),
                puzzle.right()
            );
            return Ok(puzzle);
        }
    }

    log::warn!(
        "No puzzle after {} attempts over {} words",
        max_attempts,
        all.len()
    );
    Err(GenerateError::Exhausted {
        attempts: max_attempts,
    })
}

/// One pass through the six picks
fn attempt_once<R: Rng + ?Sized>(words: &[Word], rng: &mut R) -> Option<Puzzle> {
    let top = *words.choose(rng)?;
    let left = pick(words, rng, |w| w.at(0) == top.at(0))?;
    let middle = pick(words, rng, |w| w.at(0) == left.at(2))?;
    let bottom = pick(words, rng, |w| w.at(0) == left.at(4))?;
    let center = pick(words, rng, |w| {
        w.at(0) == top.at(2) && w.at(2) == middle.at(2) && w.at(4) == bottom.at(2)
    })?;
    let right = pick(words, rng, |w| {
        w.at(0) == top.at(4) && w.at(2) == middle.at(4) && w.at(4) == bottom.at(4)
    })?;

    // Always consistent given the filters above
    Puzzle::new(top, middle, bottom, left, center, right).ok()
}

/// Uniform choice among the words accepted by `accept`
fn pick<R, F>(words: &[Word], rng: &mut R, accept: F) -> Option<Word>
where
    R: Rng + ?Sized,
    F: Fn(&Word) -> bool,
{
    let pool: Vec<&Word> = words.iter().filter(|w| accept(w)).collect();
    pool.choose(rng).map(|w| **w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::words::Dictionary;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn dict(words: &[&str]) -> Dictionary {
        Dictionary::from_text(&words.join("\n"))
    }

    fn assert_cross(p: &Puzzle) {
        let (top, middle, bottom) = (p.top(), p.middle(), p.bottom());
        let (left, center, right) = (p.left(), p.center(), p.right());
        assert_eq!(center.at(0), top.at(2));
        assert_eq!(center.at(2), middle.at(2));
        assert_eq!(center.at(4), bottom.at(2));
        assert_eq!(right.at(0), top.at(4));
        assert_eq!(right.at(2), middle.at(4));
        assert_eq!(right.at(4), bottom.at(4));
        assert_eq!(left.at(0), top.at(0));
        assert_eq!(middle.at(0), left.at(2));
        assert_eq!(bottom.at(0), left.at(4));
    }

    #[test]
    fn test_generates_cross_for_house() {
        // "house" is the only top word with a complete cross here
        let words = dict(&["house", "sunny", "usage", "every", "enemy"]);
        let mut rng = Pcg32::seed_from_u64(7);
        let puzzle = generate(&words, 1000, &mut rng).unwrap();

        assert_eq!(puzzle.top().as_str(), "house");
        assert_eq!(puzzle.center().at(0), b'u');
        assert_cross(&puzzle);
        for word in puzzle.rows().iter().chain(puzzle.columns().iter()) {
            assert!(words.contains(word.as_str()));
        }
    }

    #[test]
    fn test_bundled_dictionary_generates() {
        let words = Dictionary::bundled();
        for seed in 0..10 {
            let mut rng = Pcg32::seed_from_u64(seed);
            let puzzle = generate(&words, 1000, &mut rng).unwrap();
            assert_cross(&puzzle);
        }
    }

    #[test]
    fn test_exhausted() {
        let words = dict(&["abcde", "fghij"]);
        let mut rng = Pcg32::seed_from_u64(1);
        assert_eq!(
            generate(&words, 50, &mut rng),
            Err(GenerateError::Exhausted { attempts: 50 })
        );
        assert_eq!(
            generate(&words, 0, &mut rng),
            Err(GenerateError::Exhausted { attempts: 0 })
        );
    }

    #[test]
    fn test_empty_word_list() {
        let words = Dictionary::default();
        let mut rng = Pcg32::seed_from_u64(1);
        assert_eq!(
            generate(&words, 1000, &mut rng),
            Err(GenerateError::EmptyWordList)
        );
    }

    #[test]
    fn test_determinism() {
        let words = Dictionary::bundled();
        let a = generate(&words, 1000, &mut Pcg32::seed_from_u64(99999));
        let b = generate(&words, 1000, &mut Pcg32::seed_from_u64(99999));
        assert_eq!(a, b);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn generated_puzzles_hold_every_crossing(seed in any::<u64>()) {
            let words = Dictionary::bundled();
            let mut rng = Pcg32::seed_from_u64(seed);
            let result = generate(&words, 1000, &mut rng);
            prop_assert!(result.is_ok(), "seed {} failed: {:?}", seed, result);
            let puzzle = result.unwrap();
            assert_cross(&puzzle);
            for word in puzzle.rows().iter().chain(puzzle.columns().iter()) {
                prop_assert!(words.contains(word.as_str()));
            }
        }
    }
}
