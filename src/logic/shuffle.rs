//! Unbiased random permutation (Fisher–Yates).

use rand::seq::SliceRandom;
use rand::Rng;

/// Return a uniformly shuffled copy of `items`; the input is left untouched.
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    out.shuffle(rng);
    out
}
