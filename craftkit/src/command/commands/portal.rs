use std::fmt;

use craftkit_util::math::{position::BlockPos, vector3::Vector3};
use craftkit_world::{
    coordinates::{block_to_chunk, ChunkPos},
    portal::{nether_to_overworld, overworld_to_nether_exact, Dimension},
};
use serde::Serialize;

use crate::command::{CommandContext, CommandError, CommandExecutor, Output};

/// Distance of the world border from the origin.
const MAX_COORDINATE: f64 = 30_000_000.0;

#[derive(clap::Args, Debug)]
pub struct Args {
    x: f64,
    y: f64,
    z: f64,
    /// Dimension the position is in
    #[arg(long, default_value = "overworld")]
    from: Dimension,
}

#[derive(Serialize)]
struct PortalReport {
    from: Dimension,
    to: Dimension,
    source: BlockPos,
    target: BlockPos,
    target_chunk: ChunkPos,
}

impl fmt::Display for PortalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.from, self.source)?;
        writeln!(
            f,
            "{} {} (chunk {})",
            self.to, self.target, self.target_chunk
        )
    }
}

impl CommandExecutor for Args {
    fn execute(&self, _context: &CommandContext) -> Result<Output, CommandError> {
        let in_world = |value: f64| value.is_finite() && value.abs() <= MAX_COORDINATE;
        if !(in_world(self.x) && in_world(self.y) && in_world(self.z)) {
            return Err(CommandError::InvalidArgument(format!(
                "coordinates must be within {MAX_COORDINATE} blocks of the origin"
            )));
        }

        let source = BlockPos::floored(self.x, self.y, self.z);
        let to = self.from.other();
        let target = match self.from {
            Dimension::Overworld => overworld_to_nether_exact(Vector3::new(self.x, self.y, self.z)),
            Dimension::Nether => nether_to_overworld(source),
        };
        Output::new(&PortalReport {
            from: self.from,
            to,
            source,
            target,
            target_chunk: block_to_chunk(target.0.x, target.0.z),
        })
    }
}
