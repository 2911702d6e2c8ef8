use std::fmt;

use craftkit_world::coordinates::{
    block_to_chunk, get_block_in_chunk_coordinates, ChunkBlockRange, ChunkOffset, ChunkPos,
    RegionPos,
};
use serde::Serialize;

use crate::command::{CommandContext, CommandError, CommandExecutor, Output};

#[derive(clap::Args, Debug)]
pub struct Args {
    /// Block x
    x: i32,
    /// Block z
    z: i32,
}

#[derive(Serialize)]
struct ChunkReport {
    chunk: ChunkPos,
    offset: ChunkOffset,
    blocks: ChunkBlockRange,
    region: RegionPos,
    region_file: String,
    chunk_in_region: (u8, u8),
}

impl fmt::Display for ChunkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Chunk: {}", self.chunk)?;
        writeln!(f, "Offset in chunk: {}, {}", self.offset.x, self.offset.z)?;
        writeln!(
            f,
            "Chunk blocks: {}, {} to {}, {}",
            self.blocks.min.x, self.blocks.min.z, self.blocks.max.x, self.blocks.max.z
        )?;
        writeln!(f, "Region: {} ({})", self.region, self.region_file)?;
        writeln!(
            f,
            "Chunk in region: {}, {}",
            self.chunk_in_region.0, self.chunk_in_region.1
        )
    }
}

impl CommandExecutor for Args {
    fn execute(&self, _context: &CommandContext) -> Result<Output, CommandError> {
        let chunk = block_to_chunk(self.x, self.z);
        let region = chunk.region();
        Output::new(&ChunkReport {
            chunk,
            offset: get_block_in_chunk_coordinates(self.x, self.z),
            blocks: chunk.block_range(),
            region,
            region_file: region.file_name(),
            chunk_in_region: chunk.offset_in_region(),
        })
    }
}
