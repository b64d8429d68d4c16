use rand::Rng;

/// Letters used to fill word-search cells that no word covers
pub const FILL_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Pick a uniformly random fill letter
pub fn random_letter(rng: &mut impl Rng) -> char {
    let idx = rng.random_range(0..FILL_ALPHABET.len());
    FILL_ALPHABET[idx] as char
}

/// Uppercase a word for word-search placement. Whitespace is kept.
pub fn normalize_word(word: &str) -> Vec<char> {
    word.to_uppercase().chars().collect()
}

/// Uppercase a word and strip all whitespace, so phrases become one crossword entry
pub fn compact_word(word: &str) -> Vec<char> {
    word.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
        .chars()
        .collect()
}

/// Whether a character may occupy a grid cell
pub fn is_placeable(letter: char) -> bool {
    !letter.is_whitespace() && !letter.is_control()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_random_letter_in_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let letter = random_letter(&mut rng);
            assert!(letter.is_ascii_uppercase());
        }
    }

    #[test]
    fn test_normalize_keeps_spaces() {
        assert_eq!(normalize_word("new york"), "NEW YORK".chars().collect::<Vec<_>>());
    }

    #[test]
    fn test_compact_strips_whitespace() {
        assert_eq!(compact_word(" new\tyork "), "NEWYORK".chars().collect::<Vec<_>>());
        assert_eq!(compact_word("año"), "AÑO".chars().collect::<Vec<_>>());
    }

    #[test]
    fn test_placeable() {
        assert!(is_placeable('A'));
        assert!(is_placeable('Ñ'));
        assert!(!is_placeable(' '));
        assert!(!is_placeable('\n'));
    }
}
