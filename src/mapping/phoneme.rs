use crate::types::Viseme;

/// ARPAbet phoneme to viseme mapping, after stress/positional cleanup.
///
/// This table is the single source of phonetic truth for the forced-aligner
/// backends (Gentle, CMU Sphinx vocabulary). Input must already be
/// uppercased with stress digits and positional suffixes stripped; see
/// [`crate::normalize::viseme_for_phoneme`] for the cleanup path.
///
/// Unknown phones map to `X`.
pub fn phoneme_to_viseme(phoneme: &str) -> Viseme {
    // `match` keeps the table immutable and lock-free by construction.
    match phoneme.as_bytes() {
        // Vowels
        b"AA" => Viseme::D, // odd     - wide open
        b"AE" => Viseme::C, // at      - open medium
        b"AH" => Viseme::C, // hut     - open medium
        b"AO" => Viseme::E, // ought   - slightly rounded
        b"AW" => Viseme::D, // cow     - wide open to rounded
        b"AY" => Viseme::D, // hide    - wide open
        b"EH" => Viseme::C, // Ed      - open medium
        b"ER" => Viseme::E, // hurt    - slightly rounded
        b"EY" => Viseme::B, // ate     - clenched teeth
        b"IH" => Viseme::B, // it      - clenched teeth
        b"IY" => Viseme::B, // eat     - clenched teeth
        b"OW" => Viseme::F, // oat     - puckered
        b"OY" => Viseme::E, // toy     - slightly rounded
        b"UH" => Viseme::E, // hood    - slightly rounded
        b"UW" => Viseme::F, // two     - puckered

        // Stops
        b"B" => Viseme::A, // be      - closed lips
        b"D" => Viseme::B, // dee     - tongue/teeth
        b"G" => Viseme::B, // green   - back of mouth
        b"K" => Viseme::B, // key     - back of mouth
        b"P" => Viseme::A, // pee     - closed lips
        b"T" => Viseme::B, // tea     - tongue/teeth

        // Affricates
        b"CH" => Viseme::B, // cheese  - clenched teeth
        b"JH" => Viseme::B, // gee     - clenched teeth

        // Fricatives
        b"DH" => Viseme::B, // thee    - tongue between teeth
        b"F" => Viseme::G,  // fee     - teeth on lip
        b"HH" => Viseme::C, // he      - open medium
        b"S" => Viseme::B,  // sea     - clenched teeth
        b"SH" => Viseme::B, // she     - clenched teeth
        b"TH" => Viseme::B, // theta   - tongue between teeth
        b"V" => Viseme::G,  // vee     - teeth on lip
        b"Z" => Viseme::B,  // zee     - clenched teeth
        b"ZH" => Viseme::B, // seizure - clenched teeth

        // Nasals
        b"M" => Viseme::A,  // me      - closed lips
        b"N" => Viseme::B,  // knee    - tongue behind teeth
        b"NG" => Viseme::B, // ping    - back of mouth

        // Liquids
        b"L" => Viseme::H, // lee     - tongue up
        b"R" => Viseme::E, // read    - slightly rounded

        // Semivowels
        b"W" => Viseme::F, // we      - puckered
        b"Y" => Viseme::B, // yield   - clenched teeth

        // Silence markers
        b"SIL" | b"SP" => Viseme::X,

        _ => Viseme::X,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOMAIN: &[&str] = &[
        "AA", "AE", "AH", "AO", "AW", "AY", "EH", "ER", "EY", "IH", "IY", "OW", "OY", "UH", "UW",
        "B", "D", "G", "K", "P", "T", "CH", "JH", "DH", "F", "HH", "S", "SH", "TH", "V", "Z",
        "ZH", "M", "N", "NG", "L", "R", "W", "Y", "SIL", "SP",
    ];

    #[test]
    fn every_domain_key_maps_to_a_viseme() {
        for phone in DOMAIN {
            // Totality: the lookup itself cannot fail; just exercise it.
            let _ = phoneme_to_viseme(phone);
        }
    }

    #[test]
    fn silence_markers_map_to_rest() {
        assert_eq!(phoneme_to_viseme("SIL"), Viseme::X);
        assert_eq!(phoneme_to_viseme("SP"), Viseme::X);
    }

    #[test]
    fn articulatory_spot_checks() {
        assert_eq!(phoneme_to_viseme("M"), Viseme::A);
        assert_eq!(phoneme_to_viseme("AH"), Viseme::C);
        assert_eq!(phoneme_to_viseme("AA"), Viseme::D);
        assert_eq!(phoneme_to_viseme("UW"), Viseme::F);
        assert_eq!(phoneme_to_viseme("F"), Viseme::G);
        assert_eq!(phoneme_to_viseme("L"), Viseme::H);
        assert_eq!(phoneme_to_viseme("R"), Viseme::E);
        assert_eq!(phoneme_to_viseme("S"), Viseme::B);
    }

    #[test]
    fn out_of_domain_key_maps_to_rest() {
        assert_eq!(phoneme_to_viseme("QQ"), Viseme::X);
        assert_eq!(phoneme_to_viseme(""), Viseme::X);
        assert_eq!(phoneme_to_viseme("ah"), Viseme::X); // lookup is case-exact
    }
}
