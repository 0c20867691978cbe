//! Fisher-Yates shuffling for card sequences.

use rand::Rng;

/// Shuffle `items` in place with the Fisher-Yates algorithm.
///
/// Walks from the last index down to 1, swapping each element with a
/// uniformly chosen index in `[0, i]`. Given a uniform RNG every permutation
/// is equally likely, and the output is always a permutation of the input.
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
