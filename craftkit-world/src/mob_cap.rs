use std::{fmt, str::FromStr};

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::coordinates::ChunkPos;

/// Chunks counted per player: the 17x17 square within 8 chunks of them.
pub const MOB_CAP_BASE_CHUNKS: u32 = 17 * 17;
pub const MOB_SPAWN_CHUNK_RADIUS: i32 = 8;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MobCategory {
    Hostile,
    Passive,
    Water,
    Ambient,
}

impl MobCategory {
    pub const ALL: [Self; 4] = [Self::Hostile, Self::Passive, Self::Water, Self::Ambient];

    /// Mob cap of the category for a single player's [`MOB_CAP_BASE_CHUNKS`].
    pub const fn base_cap(&self) -> u32 {
        match self {
            Self::Hostile => 70,
            Self::Passive => 10,
            Self::Water => 5,
            Self::Ambient => 15,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Hostile => "hostile",
            Self::Passive => "passive",
            Self::Water => "water",
            Self::Ambient => "ambient",
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown mob category \"{0}\", expected one of hostile, passive, water, ambient")]
pub struct ParseMobCategoryError(String);

impl FromStr for MobCategory {
    type Err = ParseMobCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hostile" | "monster" => Ok(Self::Hostile),
            "passive" | "creature" => Ok(Self::Passive),
            "water" | "water_creature" => Ok(Self::Water),
            "ambient" => Ok(Self::Ambient),
            _ => Err(ParseMobCategoryError(s.to_string())),
        }
    }
}

impl fmt::Display for MobCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `floor(base_cap * chunks_in_range / 289)`.
pub fn calculate_mob_cap(chunks_in_range: u32, category: MobCategory) -> u32 {
    let cap = u64::from(category.base_cap()) * u64::from(chunks_in_range)
        / u64::from(MOB_CAP_BASE_CHUNKS);
    // base_cap < 289, so the quotient fits in u32
    cap as u32
}

/// Number of distinct chunks within [`MOB_SPAWN_CHUNK_RADIUS`] of any of the players.
pub fn spawnable_chunk_count(player_chunks: &[ChunkPos]) -> u32 {
    let mut chunks = FxHashSet::default();
    for player in player_chunks {
        for x in -MOB_SPAWN_CHUNK_RADIUS..=MOB_SPAWN_CHUNK_RADIUS {
            for z in -MOB_SPAWN_CHUNK_RADIUS..=MOB_SPAWN_CHUNK_RADIUS {
                chunks.insert(ChunkPos::new(
                    player.0.x.wrapping_add(x),
                    player.0.z.wrapping_add(z),
                ));
            }
        }
    }
    chunks.len() as u32
}
