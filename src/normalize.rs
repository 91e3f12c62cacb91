//! Cleans raw backend labels and resolves them to visemes.
//!
//! Three source domains feed the tables: ARPAbet phone labels (which may
//! carry stress digits and aligner positional suffixes), single orthographic
//! characters, and vendor numeric viseme IDs. Unknown labels resolve to rest
//! and are logged, never raised.

use crate::mapping;
use crate::types::Viseme;

/// Positional suffixes Gentle appends to mark word-boundary position.
const POSITIONAL_SUFFIXES: [&str; 4] = ["_B", "_I", "_E", "_S"];

/// Resolves a raw ARPAbet label (e.g. `"AH1_I"`) to a viseme.
///
/// Cleanup order: strip one trailing stress digit (0/1/2), strip one
/// trailing positional suffix (`_B`/`_I`/`_E`/`_S`), uppercase. Labels
/// starting with `OOV` are out-of-vocabulary interjections from Gentle;
/// they approximate a sibilant/plosive shape (`B`) rather than silence.
pub fn viseme_for_phoneme(raw: &str) -> Viseme {
    if raw.is_empty() {
        return Viseme::X;
    }

    // Suffix first: stress digits sit before the positional marker in
    // labels like "AH1_I".
    let mut cleaned = raw;
    for suffix in POSITIONAL_SUFFIXES {
        if let Some(stripped) = strip_suffix_ignore_case(cleaned, suffix) {
            cleaned = stripped;
            break;
        }
    }
    if let Some(stripped) = cleaned.strip_suffix(['0', '1', '2']) {
        cleaned = stripped;
    }
    let cleaned = cleaned.to_uppercase();

    if cleaned.starts_with("OOV") {
        return Viseme::B;
    }

    let viseme = mapping::phoneme_to_viseme(&cleaned);
    if viseme == Viseme::X && cleaned != "SIL" && cleaned != "SP" && !cleaned.is_empty() {
        tracing::warn!(raw, cleaned = cleaned.as_str(), "unknown phoneme label, defaulting to X");
    }
    viseme
}

/// Resolves a single orthographic character to a viseme.
pub fn viseme_for_char(c: char) -> Viseme {
    mapping::char_to_viseme(c)
}

/// Resolves a vendor numeric viseme ID to a viseme.
pub fn viseme_for_vendor_id(id: u32) -> Viseme {
    let viseme = mapping::vendor_id_to_viseme(id);
    if viseme == Viseme::X && id != 0 {
        tracing::warn!(id, "vendor viseme ID outside documented domain, defaulting to X");
    }
    viseme
}

fn strip_suffix_ignore_case<'a>(s: &'a str, suffix: &str) -> Option<&'a str> {
    let split = s.len().checked_sub(suffix.len())?;
    if !s.is_char_boundary(split) {
        return None;
    }
    let (head, tail) = s.split_at(split);
    tail.eq_ignore_ascii_case(suffix).then_some(head)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_stress_digit() {
        assert_eq!(viseme_for_phoneme("AH1"), Viseme::C);
        assert_eq!(viseme_for_phoneme("IY0"), Viseme::B);
        assert_eq!(viseme_for_phoneme("AO2"), Viseme::E);
    }

    #[test]
    fn strips_positional_suffix() {
        assert_eq!(viseme_for_phoneme("M_B"), Viseme::A);
        assert_eq!(viseme_for_phoneme("L_E"), Viseme::H);
        assert_eq!(viseme_for_phoneme("W_S"), Viseme::F);
    }

    #[test]
    fn strips_stress_then_positional_suffix() {
        // Gentle emits e.g. "ah_I" / "AH1_I": stress digit first, then suffix.
        assert_eq!(viseme_for_phoneme("AH1_I"), Viseme::C);
        assert_eq!(viseme_for_phoneme("uw1_e"), Viseme::F);
    }

    #[test]
    fn lowercase_labels_are_uppercased() {
        assert_eq!(viseme_for_phoneme("ah"), Viseme::C);
        assert_eq!(viseme_for_phoneme("sil"), Viseme::X);
    }

    #[test]
    fn oov_short_circuits_to_clenched_teeth() {
        assert_eq!(viseme_for_phoneme("OOV"), Viseme::B);
        assert_eq!(viseme_for_phoneme("oov_B"), Viseme::B);
    }

    #[test]
    fn unknown_label_defaults_to_rest() {
        assert_eq!(viseme_for_phoneme("QX9Z"), Viseme::X);
        assert_eq!(viseme_for_phoneme(""), Viseme::X);
    }

    #[test]
    fn char_and_vendor_delegates() {
        assert_eq!(viseme_for_char('m'), Viseme::A);
        assert_eq!(viseme_for_char(' '), Viseme::X);
        assert_eq!(viseme_for_vendor_id(21), Viseme::A);
        assert_eq!(viseme_for_vendor_id(99), Viseme::X);
    }
}
