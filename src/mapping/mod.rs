//! Static many-to-one symbol tables onto the nine-viseme target set.
//!
//! Each table is a pure, total lookup: keys outside the documented domain
//! map to [`Viseme::X`](crate::types::Viseme) rather than failing. The
//! tables are fixed reference data reproduced from backend documentation;
//! downstream consumers depend on the exact symbol assignments, so they
//! must not be re-derived.

mod character;
mod phoneme;
mod vendor;

pub use character::char_to_viseme;
pub use phoneme::phoneme_to_viseme;
pub use vendor::vendor_id_to_viseme;
