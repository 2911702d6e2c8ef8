use std::fmt;

use craftkit_world::{
    coordinates::ChunkPos,
    mob_cap::{calculate_mob_cap, spawnable_chunk_count, MobCategory, MOB_CAP_BASE_CHUNKS},
};
use serde::Serialize;

use crate::command::{ColumnArg, CommandContext, CommandError, CommandExecutor, Output};

#[derive(clap::Args, Debug)]
pub struct Args {
    /// Chunks within spawning range of any player, defaults to one player's worth
    #[arg(conflicts_with = "players")]
    chunks: Option<u32>,
    /// Only show this category
    #[arg(long)]
    category: Option<MobCategory>,
    /// Block position `x,z` of a player, repeat for every player
    #[arg(long = "player", allow_hyphen_values = true)]
    players: Vec<ColumnArg>,
}

#[derive(Serialize)]
struct MobCapReport {
    chunks: u32,
    caps: Vec<CategoryCap>,
}

#[derive(Serialize)]
struct CategoryCap {
    category: MobCategory,
    cap: u32,
}

impl fmt::Display for MobCapReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Chunks in range: {}", self.chunks)?;
        for cap in &self.caps {
            writeln!(f, "{:<8} {}", cap.category.name(), cap.cap)?;
        }
        Ok(())
    }
}

impl CommandExecutor for Args {
    fn execute(&self, _context: &CommandContext) -> Result<Output, CommandError> {
        let chunks = if self.players.is_empty() {
            self.chunks.unwrap_or(MOB_CAP_BASE_CHUNKS)
        } else {
            let player_chunks: Vec<ChunkPos> =
                self.players.iter().map(ColumnArg::chunk).collect();
            let chunks = spawnable_chunk_count(&player_chunks);
            log::debug!(
                "{} players cover {chunks} spawnable chunks",
                player_chunks.len()
            );
            chunks
        };

        let categories = match self.category {
            Some(category) => vec![category],
            None => MobCategory::ALL.to_vec(),
        };
        Output::new(&MobCapReport {
            chunks,
            caps: categories
                .into_iter()
                .map(|category| CategoryCap {
                    category,
                    cap: calculate_mob_cap(chunks, category),
                })
                .collect(),
        })
    }
}
