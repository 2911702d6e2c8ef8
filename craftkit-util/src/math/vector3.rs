use std::ops::{Add, Div, Mul, Sub};

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Hash, Eq, Default, Serialize, Deserialize)]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Math + PartialOrd + Copy> Vector3<T> {
    pub const fn new(x: T, y: T, z: T) -> Self {
        Vector3 { x, y, z }
    }
}

pub trait Math:
    Mul<Output = Self> + Add<Output = Self> + Div<Output = Self> + Sub<Output = Self> + Sized
{
}
impl Math for f64 {}
impl Math for i32 {}
impl Math for i64 {}
