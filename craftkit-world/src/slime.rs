use craftkit_util::random::{LegacyRand, RandomImpl};
use rayon::prelude::*;

use crate::{
    coordinates::{block_to_chunk, ChunkPos},
    seed::Seed,
};

const SLIME_CHUNK_SALT: i64 = 0x3ad8025f;

/// Seed of the per-chunk generator Minecraft consults for slime spawning.
///
/// The chunk products are evaluated as Java `int`s and wrap at 32 bits
/// before joining the 64 bit sum.
pub fn slime_chunk_seed(chunk_x: i32, chunk_z: i32, seed: Seed) -> i64 {
    let x_squared = i64::from(chunk_x.wrapping_mul(chunk_x).wrapping_mul(0x4c1906));
    let x_linear = i64::from(chunk_x.wrapping_mul(0x5ac0db));
    let z_squared = i64::from(chunk_z.wrapping_mul(chunk_z)).wrapping_mul(0x4307a7);
    let z_linear = i64::from(chunk_z.wrapping_mul(0x5f24f));

    seed.0
        .wrapping_add(x_squared)
        .wrapping_add(x_linear)
        .wrapping_add(z_squared)
        .wrapping_add(z_linear)
        ^ SLIME_CHUNK_SALT
}

/// Whether slimes may spawn below y 40 in the given chunk, in any biome.
pub fn is_slime_chunk(chunk_x: i32, chunk_z: i32, seed: Seed) -> bool {
    let mut random = LegacyRand::from_seed(slime_chunk_seed(chunk_x, chunk_z, seed) as u64);
    random.next_bounded_i32(10) == 0
}

pub fn is_slime_chunk_at_block(x: i32, z: i32, seed: Seed) -> bool {
    let chunk = block_to_chunk(x, z);
    is_slime_chunk(chunk.0.x, chunk.0.z, seed)
}

/// All slime chunks in the square of `radius` chunks around `center`, ordered by x then z.
///
/// Coordinates wrap at the `i32` limits, as chunk positions do in the game.
pub fn slime_chunks_around(center: ChunkPos, radius: i32, seed: Seed) -> Vec<ChunkPos> {
    let chunks: Vec<ChunkPos> = (-radius..=radius)
        .into_par_iter()
        .flat_map_iter(|x| {
            (-radius..=radius)
                .map(move |z| {
                    ChunkPos::new(center.0.x.wrapping_add(x), center.0.z.wrapping_add(z))
                })
                .filter(move |chunk| is_slime_chunk(chunk.0.x, chunk.0.z, seed))
        })
        .collect();
    log::trace!(
        "found {} slime chunks within {radius} of {center}",
        chunks.len()
    );
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_chunks() {
        let values: [((i32, i32, i64), bool); 10] = [
            ((0, 0, 0), false),
            ((-2, 0, 0), true),
            ((2, 2, 0), true),
            ((1, -3, 0), true),
            ((0, 0, 12345), false),
            ((3, 0, 12345), true),
            ((-4, 0, 12345), true),
            ((1, 0, -4172144997902289642), true),
            ((0, 0, -4172144997902289642), false),
            ((-3, -4, 1), true),
        ];

        for ((chunk_x, chunk_z, seed), expected) in values {
            assert_eq!(
                is_slime_chunk(chunk_x, chunk_z, Seed(seed)),
                expected,
                "chunk ({chunk_x}, {chunk_z}) seed {seed}"
            );
        }
    }

    #[test]
    fn int_overflow_in_chunk_products() {
        // 100 * 100 * 0x4c1906 overflows a Java int
        assert!(is_slime_chunk(100, 0, Seed(0)));
        assert!(!is_slime_chunk(100, 50, Seed(0)));
        assert!(is_slime_chunk(-300, 50, Seed(0)));
    }

    #[test]
    fn seed_origin() {
        assert_eq!(slime_chunk_seed(0, 0, Seed(0)), 0x3ad8025f);
        assert_eq!(slime_chunk_seed(0, 0, Seed(0x3ad8025f)), 0);
    }

    #[test]
    fn block_lookup_uses_chunk() {
        let seed = Seed(0);
        assert!(is_slime_chunk_at_block(-32, 0, seed));
        assert!(is_slime_chunk_at_block(-17, 15, seed));
        assert!(!is_slime_chunk_at_block(0, 0, seed));
    }

    #[test]
    fn area_scan() {
        let chunks = slime_chunks_around(ChunkPos::new(0, 0), 6, Seed(0));
        let expected = [
            (-5, 5),
            (-2, 0),
            (-1, 6),
            (1, -3),
            (2, -3),
            (2, 2),
            (2, 4),
            (4, 2),
            (5, -3),
            (6, -1),
        ]
        .map(|(x, z)| ChunkPos::new(x, z));
        assert_eq!(chunks, expected);
    }

    #[test]
    fn area_scan_at_the_i32_limit() {
        let seed = Seed(0);
        let chunks = slime_chunks_around(ChunkPos::new(i32::MAX, i32::MIN), 1, seed);
        let expected: Vec<ChunkPos> = [i32::MAX - 1, i32::MAX, i32::MIN]
            .into_iter()
            .flat_map(|x| [i32::MAX, i32::MIN, i32::MIN + 1].map(|z| ChunkPos::new(x, z)))
            .filter(|chunk| is_slime_chunk(chunk.0.x, chunk.0.z, seed))
            .collect();
        assert_eq!(chunks, expected);
    }

    #[test]
    fn repeated_calls_agree() {
        for seed in [0, 1, 12345, i64::MIN, i64::MAX] {
            for (x, z) in [(0, 0), (-7, 13), (1000, -1000)] {
                assert_eq!(
                    is_slime_chunk(x, z, Seed(seed)),
                    is_slime_chunk(x, z, Seed(seed))
                );
            }
        }
    }
}
