use std::{fmt, str::FromStr};

use craftkit_util::math::{floor_div, position::BlockPos, vector3::Vector3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Horizontal blocks of overworld travel per block of nether travel.
pub const NETHER_SCALE: i32 = 8;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Overworld,
    Nether,
}

impl Dimension {
    pub const fn other(&self) -> Self {
        match self {
            Self::Overworld => Self::Nether,
            Self::Nether => Self::Overworld,
        }
    }

    /// Maps a position in `self` to the matching position in `target`.
    pub fn convert(&self, pos: BlockPos, target: Dimension) -> BlockPos {
        match (self, target) {
            (Self::Overworld, Self::Nether) => overworld_to_nether(pos),
            (Self::Nether, Self::Overworld) => nether_to_overworld(pos),
            _ => pos,
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown dimension \"{0}\", expected overworld or nether")]
pub struct ParseDimensionError(String);

impl FromStr for Dimension {
    type Err = ParseDimensionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.to_ascii_lowercase();
        match name.strip_prefix("minecraft:").unwrap_or(&name) {
            "overworld" => Ok(Self::Overworld),
            "nether" | "the_nether" => Ok(Self::Nether),
            _ => Err(ParseDimensionError(s.to_string())),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overworld => f.write_str("overworld"),
            Self::Nether => f.write_str("nether"),
        }
    }
}

/// Y is kept; portals are searched for around the same height.
pub fn overworld_to_nether(pos: BlockPos) -> BlockPos {
    BlockPos::new(
        floor_div(pos.0.x, NETHER_SCALE),
        pos.0.y,
        floor_div(pos.0.z, NETHER_SCALE),
    )
}

/// Wraps like Java `int` arithmetic beyond `i32::MAX / 8`, far outside the world border.
pub fn nether_to_overworld(pos: BlockPos) -> BlockPos {
    BlockPos::new(
        pos.0.x.wrapping_mul(NETHER_SCALE),
        pos.0.y,
        pos.0.z.wrapping_mul(NETHER_SCALE),
    )
}

/// Maps an entity position rather than a block, flooring only after scaling.
pub fn overworld_to_nether_exact(position: Vector3<f64>) -> BlockPos {
    let scale = f64::from(NETHER_SCALE);
    BlockPos::floored(position.x / scale, position.y, position.z / scale)
}
