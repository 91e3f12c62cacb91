use crate::types::Viseme;

/// Approximate single-character to viseme mapping, used for WhisperX
/// character-level timing where no phonetic transcription exists.
///
/// Less accurate than the phoneme table but better than word-level
/// estimation; letters are grouped by articulatory class. Spaces,
/// punctuation, and digits map to `X`.
pub fn char_to_viseme(c: char) -> Viseme {
    match c.to_ascii_lowercase() {
        // Bilabials - closed lips
        'm' | 'b' | 'p' => Viseme::A,

        // Labiodentals - teeth on lip
        'f' | 'v' => Viseme::G,

        // Lateral approximant - tongue up
        'l' => Viseme::H,

        // Rounded vowels - puckered lips
        'o' | 'u' | 'w' => Viseme::F,

        // Open vowel - wide open
        'a' => Viseme::D,

        // Front vowels and the remaining consonants - clenched teeth
        'e' | 'i' | 'y' | 'c' | 'd' | 'g' | 'h' | 'j' | 'k' | 'n' | 'q' | 'r' | 's' | 't' | 'x'
        | 'z' => Viseme::B,

        _ => Viseme::X,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_ascii_letter_maps_to_a_non_rest_viseme() {
        for c in 'a'..='z' {
            assert_ne!(char_to_viseme(c), Viseme::X, "letter {c} should speak");
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        for c in 'a'..='z' {
            assert_eq!(
                char_to_viseme(c),
                char_to_viseme(c.to_ascii_uppercase()),
                "case mismatch for {c}"
            );
        }
    }

    #[test]
    fn articulatory_classes() {
        assert_eq!(char_to_viseme('m'), Viseme::A);
        assert_eq!(char_to_viseme('b'), Viseme::A);
        assert_eq!(char_to_viseme('v'), Viseme::G);
        assert_eq!(char_to_viseme('l'), Viseme::H);
        assert_eq!(char_to_viseme('o'), Viseme::F);
        assert_eq!(char_to_viseme('w'), Viseme::F);
        assert_eq!(char_to_viseme('a'), Viseme::D);
        assert_eq!(char_to_viseme('s'), Viseme::B);
    }

    #[test]
    fn non_letters_map_to_rest() {
        assert_eq!(char_to_viseme(' '), Viseme::X);
        assert_eq!(char_to_viseme('.'), Viseme::X);
        assert_eq!(char_to_viseme('7'), Viseme::X);
        assert_eq!(char_to_viseme('é'), Viseme::X);
    }
}
