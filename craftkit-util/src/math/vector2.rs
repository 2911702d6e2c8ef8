use serde::{Deserialize, Serialize};

use super::vector3::Math;

#[derive(Clone, Copy, Debug, PartialEq, Hash, Eq, Default, Serialize, Deserialize)]
pub struct Vector2<T> {
    pub x: T,
    pub z: T,
}

impl<T: Math + Copy> Vector2<T> {
    pub const fn new(x: T, z: T) -> Self {
        Vector2 { x, z }
    }
}

impl Vector2<i32> {
    /// Largest per-axis distance between two points; the metric of square areas.
    pub fn chebyshev_distance(&self, other: &Self) -> i32 {
        (self.x - other.x).abs().max((self.z - other.z).abs())
    }
}

#[cfg(test)]
mod tests {
    use super::Vector2;

    #[test]
    fn chebyshev() {
        let origin = Vector2::new(0, 0);
        assert_eq!(origin.chebyshev_distance(&Vector2::new(3, -7)), 7);
        assert_eq!(Vector2::new(-2, 5).chebyshev_distance(&Vector2::new(4, 5)), 6);
        assert_eq!(origin.chebyshev_distance(&origin), 0);
    }
}
