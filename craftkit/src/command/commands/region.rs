use std::fmt;

use craftkit_world::coordinates::{get_region_coordinates, ChunkPos, RegionPos};
use serde::Serialize;

use crate::command::{CommandContext, CommandError, CommandExecutor, Output};

#[derive(clap::Args, Debug)]
pub struct Args {
    x: i32,
    z: i32,
    /// Treat the coordinates as chunk rather than block coordinates
    #[arg(long)]
    chunk: bool,
}

#[derive(Serialize)]
struct RegionReport {
    region: RegionPos,
    file: String,
    first_chunk: ChunkPos,
    last_chunk: ChunkPos,
}

impl fmt::Display for RegionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Region: {}", self.region)?;
        writeln!(f, "File: {}", self.file)?;
        writeln!(f, "Chunks: {} to {}", self.first_chunk, self.last_chunk)
    }
}

impl CommandExecutor for Args {
    fn execute(&self, _context: &CommandContext) -> Result<Output, CommandError> {
        let region = if self.chunk {
            ChunkPos::new(self.x, self.z).region()
        } else {
            get_region_coordinates(self.x, self.z)
        };
        let (first_chunk, last_chunk) = region.chunk_range();
        Output::new(&RegionReport {
            region,
            file: region.file_name(),
            first_chunk,
            last_chunk,
        })
    }
}
