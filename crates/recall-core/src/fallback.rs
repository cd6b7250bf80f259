//! Canned responses for queries that match nothing well enough

use rand::Rng;

/// Returned when no document clears the similarity threshold.
pub const FALLBACK_PHRASES: [&str; 5] = [
    "Maaf, gue belum nangkep maksudnya. Coba jelasin lagi.",
    "Kayaknya kurang jelas, coba detailin.",
    "Aku AI offline, tolong kasih konteks.",
    "Belum nemu jawabannya. Jelasin ulang?",
    "Sepertinya konteks kurang lengkap.",
];

/// Draw one fallback phrase. The RNG is injected so callers can pin the
/// draw in tests.
pub fn pick_fallback<R: Rng>(rng: &mut R) -> &'static str {
    FALLBACK_PHRASES[rng.gen_range(0..FALLBACK_PHRASES.len())]
}
