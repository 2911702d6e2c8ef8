use std::fmt;

use craftkit_config::MAX_SPAWN_CHUNK_RADIUS;
use craftkit_world::{
    coordinates::{block_to_chunk, ChunkPos},
    spawn::is_in_spawn_chunks_with_radius,
};
use serde::Serialize;

use crate::command::{CommandContext, CommandError, CommandExecutor, Output};

#[derive(clap::Args, Debug)]
pub struct Args {
    /// Block x
    x: i32,
    /// Block z
    z: i32,
    /// World spawn x, defaults to the configured spawn
    #[arg(long)]
    spawn_x: Option<i32>,
    /// World spawn z, defaults to the configured spawn
    #[arg(long)]
    spawn_z: Option<i32>,
    /// Spawn chunk radius, defaults to the configured radius
    #[arg(long)]
    radius: Option<i32>,
}

#[derive(Serialize)]
struct SpawnReport {
    in_spawn_chunks: bool,
    chunk: ChunkPos,
    spawn_chunk: ChunkPos,
    distance: i32,
    radius: i32,
}

impl fmt::Display for SpawnReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Chunk {} is {}in the spawn chunks",
            self.chunk,
            if self.in_spawn_chunks { "" } else { "not " }
        )?;
        writeln!(f, "Spawn chunk: {}", self.spawn_chunk)?;
        writeln!(
            f,
            "Distance: {} chunks (radius {})",
            self.distance, self.radius
        )
    }
}

impl CommandExecutor for Args {
    fn execute(&self, context: &CommandContext) -> Result<Output, CommandError> {
        let spawn_x = self.spawn_x.unwrap_or(context.config.spawn_x);
        let spawn_z = self.spawn_z.unwrap_or(context.config.spawn_z);
        let radius = self.radius.unwrap_or(context.config.spawn_chunk_radius);
        if !(0..=MAX_SPAWN_CHUNK_RADIUS).contains(&radius) {
            return Err(CommandError::InvalidArgument(format!(
                "radius must be between 0 and {MAX_SPAWN_CHUNK_RADIUS}"
            )));
        }

        let chunk = block_to_chunk(self.x, self.z);
        let spawn_chunk = block_to_chunk(spawn_x, spawn_z);
        Output::new(&SpawnReport {
            in_spawn_chunks: is_in_spawn_chunks_with_radius(
                self.x, self.z, spawn_x, spawn_z, radius,
            ),
            chunk,
            spawn_chunk,
            distance: chunk.0.chebyshev_distance(&spawn_chunk.0),
            radius,
        })
    }
}
