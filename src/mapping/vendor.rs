use crate::types::Viseme;

/// Azure Speech Service viseme IDs (0-21, IPA-based phoneme classes) to the
/// nine-viseme target set.
///
/// Reproduced from Microsoft's viseme documentation and mouth-position
/// images; the assignments are a fixed contract with the playback demo.
/// IDs outside 0..=21 map to `X`.
pub const fn vendor_id_to_viseme(id: u32) -> Viseme {
    match id {
        0 => Viseme::X,  // silence - rest position
        1 => Viseme::C,  // æ, ə, ʌ (cat, about, strut) - open medium
        2 => Viseme::D,  // ɑ (father) - wide open
        3 => Viseme::E,  // ɔ (thought) - slightly rounded
        4 => Viseme::C,  // ɛ, ʊ (bed, foot) - open medium
        5 => Viseme::E,  // ɝ (bird) - rounded with slight opening
        6 => Viseme::B,  // j, i, ɪ (yes, see, sit) - clenched teeth/smile
        7 => Viseme::F,  // w, u (we, boot) - puckered/rounded
        8 => Viseme::F,  // o (go) - puckered/rounded
        9 => Viseme::D,  // aʊ (how) - starts wide open
        10 => Viseme::E, // ɔɪ (boy) - rounded to front
        11 => Viseme::D, // aɪ (ice) - wide open to closed
        12 => Viseme::C, // h (house) - open/aspirated
        13 => Viseme::E, // ɹ (red) - slightly rounded
        14 => Viseme::H, // l (lee) - tongue up behind teeth
        15 => Viseme::B, // s, z (see, zoo) - clenched teeth
        16 => Viseme::B, // ʃ, tʃ, dʒ, ʒ (she, church, judge) - clenched/pursed
        17 => Viseme::B, // ð (the) - tongue between teeth
        18 => Viseme::G, // f, v (fee, vee) - teeth on lower lip
        19 => Viseme::B, // d, t, n, θ (dee, tea, no, thin) - tongue/teeth
        20 => Viseme::B, // k, g, ŋ (key, go, king) - back of mouth/teeth
        21 => Viseme::A, // p, b, m (pee, bee, me) - closed lips
        _ => Viseme::X,
    }
}
