//! Fisher-Yates shuffle

use rand::Rng;

/// Return a uniformly shuffled copy of `items`.
///
/// Walks from the last index down to 1, swapping each slot with a uniformly
/// chosen slot at or below it. The input slice is left untouched.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.random_range(0..=i);
        out.swap(i, j);
    }
    log::debug!("Shuffled {} items", out.len());
    out
}
