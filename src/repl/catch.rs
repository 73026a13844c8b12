//! Catch roll
//!
//! A Pokemon is caught when a roll in `0..MAX_ROLL` lands below its catch
//! score. The score falls as base experience rises and is clamped so that
//! every catch stays possible and none is certain.

use rand::Rng;

pub const MAX_ROLL: u32 = 500;
pub const MIN_CATCH_SCORE: u32 = 50;
pub const MAX_CATCH_SCORE: u32 = MAX_ROLL - 50;

/// Number of winning rolls out of [`MAX_ROLL`] for a given base experience.
pub fn catch_score(base_experience: u32) -> u32 {
    MAX_ROLL
        .saturating_sub(base_experience)
        .clamp(MIN_CATCH_SCORE, MAX_CATCH_SCORE)
}

/// Rolls once; true if the Pokemon is caught.
pub fn attempt_catch<R: Rng + ?Sized>(rng: &mut R, base_experience: u32) -> bool {
    rng.gen_range(0..MAX_ROLL) < catch_score(base_experience)
}
