//! Letter scrambling
//!
//! Produces the shuffled presentation of a target word.

use super::Word;
use rand::Rng;
use rand::seq::SliceRandom;

/// Shuffle the letters of `word` until the result differs from the word
///
/// Returns `None` for words with a single possible arrangement (see
/// [`Word::can_scramble`]), which would otherwise never terminate. For every
/// other word the retry loop ends with probability 1.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use unscramble::core::{Word, scramble};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let word = Word::new("rocket").unwrap();
/// let shuffled = scramble(&word, &mut rng).unwrap();
///
/// assert_ne!(shuffled, "rocket");
/// assert_eq!(shuffled.len(), 6);
///
/// assert!(scramble(&Word::new("aaa").unwrap(), &mut rng).is_none());
/// ```
pub fn scramble<R: Rng + ?Sized>(word: &Word, rng: &mut R) -> Option<String> {
    if !word.can_scramble() {
        return None;
    }

    let mut letters: Vec<u8> = word.text().as_bytes().to_vec();
    loop {
        letters.shuffle(rng);
        if letters != word.text().as_bytes() {
            break;
        }
    }

    // Word guarantees ASCII, so any byte permutation is valid UTF-8
    Some(letters.into_iter().map(char::from).collect())
}

/// Whether `candidate` uses exactly the letters of `word`
#[must_use]
pub fn is_permutation_of(candidate: &str, word: &str) -> bool {
    let mut a: Vec<char> = candidate.chars().collect();
    let mut b: Vec<char> = word.chars().collect();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn scramble_differs_from_original() {
        let mut rng = StdRng::seed_from_u64(42);
        let word = Word::new("elephant").unwrap();

        for _ in 0..200 {
            let shuffled = scramble(&word, &mut rng).unwrap();
            assert_ne!(shuffled, "elephant");
            assert!(is_permutation_of(&shuffled, "elephant"));
        }
    }

    #[test]
    fn scramble_two_letter_word_swaps() {
        let mut rng = StdRng::seed_from_u64(1);
        let word = Word::new("ox").unwrap();

        for _ in 0..20 {
            assert_eq!(scramble(&word, &mut rng).as_deref(), Some("xo"));
        }
    }

    #[test]
    fn scramble_repeated_letters() {
        // "zoo" has three arrangements, two of which differ from the word
        let mut rng = StdRng::seed_from_u64(3);
        let word = Word::new("zoo").unwrap();

        for _ in 0..50 {
            let shuffled = scramble(&word, &mut rng).unwrap();
            assert!(shuffled == "ozo" || shuffled == "ooz", "got {shuffled}");
        }
    }

    #[test]
    fn scramble_single_arrangement_is_none() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(scramble(&Word::new("a").unwrap(), &mut rng).is_none());
        assert!(scramble(&Word::new("eeee").unwrap(), &mut rng).is_none());
    }

    #[test]
    fn scramble_is_deterministic_for_a_seed() {
        let word = Word::new("xylophone").unwrap();
        let first = scramble(&word, &mut StdRng::seed_from_u64(99));
        let second = scramble(&word, &mut StdRng::seed_from_u64(99));
        assert_eq!(first, second);
    }

    #[test]
    fn permutation_check() {
        assert!(is_permutation_of("tca", "cat"));
        assert!(is_permutation_of("cat", "cat"));
        assert!(!is_permutation_of("caat", "cat"));
        assert!(!is_permutation_of("dog", "cat"));
    }
}
