//! Block, chunk and region coordinate transforms.
//!
//! Every transform floors towards negative infinity, so block `-1` lives in
//! chunk `-1` at offset `15`.

use std::fmt;

use craftkit_util::math::{
    floor_div, floor_mod, get_chunk_cord, get_local_cord, position::BlockPos, vector2::Vector2,
    CHUNK_SIZE,
};
use serde::Serialize;

/// Chunks along one horizontal edge of a region file.
pub const REGION_SIZE: i32 = 32;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
pub struct ChunkPos(pub Vector2<i32>);

impl ChunkPos {
    pub const fn new(x: i32, z: i32) -> Self {
        Self(Vector2::new(x, z))
    }

    pub fn region(&self) -> RegionPos {
        RegionPos::new(
            floor_div(self.0.x, REGION_SIZE),
            floor_div(self.0.z, REGION_SIZE),
        )
    }

    /// Index of this chunk inside its region file, each axis in `0..32`.
    pub fn offset_in_region(&self) -> (u8, u8) {
        (
            floor_mod(self.0.x, REGION_SIZE) as u8,
            floor_mod(self.0.z, REGION_SIZE) as u8,
        )
    }

    /// The block with the lowest x and z in this chunk, at y 0.
    pub fn min_block(&self) -> BlockPos {
        BlockPos::new(self.0.x << 4, 0, self.0.z << 4)
    }

    pub fn block_range(&self) -> ChunkBlockRange {
        let min = Vector2::new(self.0.x << 4, self.0.z << 4);
        ChunkBlockRange {
            min,
            max: Vector2::new(
                min.x.wrapping_add(CHUNK_SIZE - 1),
                min.z.wrapping_add(CHUNK_SIZE - 1),
            ),
        }
    }
}

impl fmt::Display for ChunkPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.0.x, self.0.z)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
pub struct RegionPos(pub Vector2<i32>);

impl RegionPos {
    pub const fn new(x: i32, z: i32) -> Self {
        Self(Vector2::new(x, z))
    }

    /// Name of the Anvil file holding this region, e.g. `r.-1.0.mca`.
    pub fn file_name(&self) -> String {
        format!("r.{}.{}.mca", self.0.x, self.0.z)
    }

    /// First and last chunk stored in this region.
    pub fn chunk_range(&self) -> (ChunkPos, ChunkPos) {
        let min = ChunkPos::new(self.0.x << 5, self.0.z << 5);
        let max = ChunkPos::new(
            min.0.x.wrapping_add(REGION_SIZE - 1),
            min.0.z.wrapping_add(REGION_SIZE - 1),
        );
        (min, max)
    }
}

impl fmt::Display for RegionPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.0.x, self.0.z)
    }
}

/// Inclusive horizontal block bounds of a chunk.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct ChunkBlockRange {
    pub min: Vector2<i32>,
    pub max: Vector2<i32>,
}

impl ChunkBlockRange {
    pub fn contains(&self, x: i32, z: i32) -> bool {
        (self.min.x..=self.max.x).contains(&x) && (self.min.z..=self.max.z).contains(&z)
    }
}

/// Position of a block inside its chunk, each axis in `0..16`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
pub struct ChunkOffset {
    pub x: u8,
    pub z: u8,
}

#[inline]
pub fn block_to_chunk(x: i32, z: i32) -> ChunkPos {
    ChunkPos::new(get_chunk_cord(x), get_chunk_cord(z))
}

#[inline]
pub fn chunk_to_block(chunk_x: i32, chunk_z: i32) -> BlockPos {
    ChunkPos::new(chunk_x, chunk_z).min_block()
}

#[inline]
pub fn chunk_block_range(chunk_x: i32, chunk_z: i32) -> ChunkBlockRange {
    ChunkPos::new(chunk_x, chunk_z).block_range()
}

pub fn get_region_coordinates(x: i32, z: i32) -> RegionPos {
    block_to_chunk(x, z).region()
}

pub fn get_block_in_chunk_coordinates(x: i32, z: i32) -> ChunkOffset {
    ChunkOffset {
        x: get_local_cord(x) as u8,
        z: get_local_cord(z) as u8,
    }
}
