use crate::coordinates::{block_to_chunk, ChunkPos};

/// Chebyshev radius, in chunks, of the always-loaded area around the world spawn.
pub const SPAWN_CHUNK_RADIUS: i32 = 11;

/// Whether the block column at `x`, `z` lies in the spawn chunks of a world
/// spawning at `spawn_x`, `spawn_z`.
///
/// The area is the square of chunks within [`SPAWN_CHUNK_RADIUS`] of the
/// spawn chunk, not a circle.
pub fn is_in_spawn_chunks(x: i32, z: i32, spawn_x: i32, spawn_z: i32) -> bool {
    is_in_spawn_chunks_with_radius(x, z, spawn_x, spawn_z, SPAWN_CHUNK_RADIUS)
}

pub fn is_in_spawn_chunks_with_radius(
    x: i32,
    z: i32,
    spawn_x: i32,
    spawn_z: i32,
    radius: i32,
) -> bool {
    let chunk = block_to_chunk(x, z);
    let spawn_chunk = block_to_chunk(spawn_x, spawn_z);
    chunk.0.chebyshev_distance(&spawn_chunk.0) <= radius
}

/// All chunks of the spawn area, row by row along x.
#[must_use]
pub fn spawn_chunks(spawn_x: i32, spawn_z: i32, radius: u8) -> Box<[ChunkPos]> {
    let center = block_to_chunk(spawn_x, spawn_z);
    let radius = i32::from(radius);
    (-radius..=radius)
        .flat_map(|x| (-radius..=radius).map(move |z| ChunkPos::new(center.0.x + x, center.0.z + z)))
        .collect()
}
