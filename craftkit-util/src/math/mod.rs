use num_traits::{Float, One, PrimInt, Zero};

pub mod position;
pub mod vector2;
pub mod vector3;

/// Blocks along one horizontal edge of a chunk.
pub const CHUNK_SIZE: i32 = 16;

/// Converts a world coordinate to the corresponding chunk coordinate.
pub const fn get_chunk_cord(coord: i32) -> i32 {
    coord >> 4
}

/// Position of a world coordinate inside its chunk, always in `0..16`.
pub const fn get_local_cord(coord: i32) -> i32 {
    coord & 15
}

/// Division rounding towards negative infinity, so `-1 / 16 == -1`.
#[inline]
pub fn floor_div<T>(x: T, y: T) -> T
where
    T: PrimInt + Zero + One,
{
    let div = x / y;
    if (x ^ y) < T::zero() && div * y != x {
        div - T::one()
    } else {
        div
    }
}

/// Remainder with the sign of the divisor, so `floor_mod(-1, 16) == 15`.
#[inline]
pub fn floor_mod<T>(x: T, y: T) -> T
where
    T: PrimInt + Zero,
{
    let rem = x % y;
    if (x ^ y) < T::zero() && rem != T::zero() {
        rem + y
    } else {
        rem
    }
}

#[inline]
pub fn fractional_part<T>(value: T) -> T
where
    T: Float,
{
    value - value.floor()
}
