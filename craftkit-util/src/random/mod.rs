pub mod legacy_rand;

pub use legacy_rand::LegacyRand;

/// A seedable pseudo random generator producing Java-compatible sequences.
pub trait RandomImpl {
    fn next_i32(&mut self) -> i32;

    /// Uniform value in `0..bound`. `bound` must be positive.
    fn next_bounded_i32(&mut self, bound: i32) -> i32;
}
