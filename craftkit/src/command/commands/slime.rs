use std::fmt;

use craftkit_world::{
    coordinates::{block_to_chunk, ChunkPos},
    seed::Seed,
    slime::{is_slime_chunk, slime_chunks_around},
};
use serde::Serialize;

use crate::command::{CommandContext, CommandError, CommandExecutor, Output};

const MAX_RADIUS: u8 = 64;

#[derive(clap::Args, Debug)]
pub struct Args {
    x: i32,
    z: i32,
    /// Treat the coordinates as chunk rather than block coordinates
    #[arg(long)]
    chunk: bool,
    /// World seed, a number or any text. Defaults to the configured seed
    #[arg(long, allow_hyphen_values = true)]
    seed: Option<Seed>,
    /// Chunks to scan around the position, defaults to the configured radius
    #[arg(long)]
    radius: Option<u8>,
}

#[derive(Serialize)]
struct SlimeReport {
    seed: Seed,
    chunk: ChunkPos,
    is_slime_chunk: bool,
    radius: i32,
    nearby: Vec<ChunkPos>,
}

impl fmt::Display for SlimeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Seed: {}", self.seed)?;
        writeln!(
            f,
            "Chunk {} is {}a slime chunk",
            self.chunk,
            if self.is_slime_chunk { "" } else { "not " }
        )?;
        writeln!(
            f,
            "{} slime chunks within {} chunks (north is up, # slime, @ here):",
            self.nearby.len(),
            self.radius
        )?;
        for z in -self.radius..=self.radius {
            let row: String = (-self.radius..=self.radius)
                .map(|x| {
                    let chunk = ChunkPos::new(
                        self.chunk.0.x.wrapping_add(x),
                        self.chunk.0.z.wrapping_add(z),
                    );
                    if x == 0 && z == 0 {
                        '@'
                    } else if self.nearby.contains(&chunk) {
                        '#'
                    } else {
                        '.'
                    }
                })
                .collect();
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

impl CommandExecutor for Args {
    fn execute(&self, context: &CommandContext) -> Result<Output, CommandError> {
        let seed = match self.seed {
            Some(seed) => seed,
            None => {
                let seed = context
                    .config
                    .seed
                    .parse::<Seed>()
                    .unwrap_or_else(|never| match never {});
                if context.config.seed.trim().is_empty() {
                    log::warn!("No seed configured or given, using random seed {seed}");
                }
                seed
            }
        };
        let radius = self
            .radius
            .unwrap_or(context.config.slime_scan_radius.get());
        if radius > MAX_RADIUS {
            return Err(CommandError::InvalidArgument(format!(
                "radius must be at most {MAX_RADIUS}"
            )));
        }
        let radius = i32::from(radius);

        let chunk = if self.chunk {
            ChunkPos::new(self.x, self.z)
        } else {
            block_to_chunk(self.x, self.z)
        };
        log::debug!("checking slime chunks around {chunk} for seed {seed}");

        Output::new(&SlimeReport {
            seed,
            chunk,
            is_slime_chunk: is_slime_chunk(chunk.0.x, chunk.0.z, seed),
            radius,
            nearby: slime_chunks_around(chunk, radius, seed),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU8;

    use craftkit_config::BasicConfiguration;

    use super::*;

    #[test]
    fn scans_around_chunk() {
        let config = BasicConfiguration {
            seed: "0".to_string(),
            slime_scan_radius: NonZeroU8::new(2).unwrap(),
            ..Default::default()
        };
        let output = Args {
            x: -2,
            z: 0,
            chunk: true,
            seed: None,
            radius: None,
        }
        .execute(&CommandContext { config: &config })
        .unwrap();

        assert_eq!(output.json["seed"], 0);
        assert_eq!(output.json["is_slime_chunk"], true);
        assert!(output.text.contains("Chunk -2, 0 is a slime chunk"));
        // 5x5 grid with the position in the middle
        let grid: Vec<&str> = output.text.lines().skip(3).collect();
        assert_eq!(grid.len(), 5);
        assert_eq!(grid[2].chars().nth(2), Some('@'));
    }

    #[test]
    fn seed_argument_overrides_config() {
        let config = BasicConfiguration {
            seed: "0".to_string(),
            ..Default::default()
        };
        let output = Args {
            x: 48,
            z: 0,
            chunk: false,
            seed: Some("12345".parse().unwrap()),
            radius: Some(0),
        }
        .execute(&CommandContext { config: &config })
        .unwrap();

        assert_eq!(output.json["seed"], 12345);
        assert_eq!(output.json["chunk"]["x"], 3);
        assert_eq!(output.json["is_slime_chunk"], true);
    }

    #[test]
    fn scans_across_the_i32_limit() {
        let config = BasicConfiguration::default();
        let output = Args {
            x: i32::MAX,
            z: 0,
            chunk: true,
            seed: Some(Seed(0)),
            radius: Some(1),
        }
        .execute(&CommandContext { config: &config })
        .unwrap();

        assert_eq!(output.json["chunk"]["x"], i32::MAX);
        let grid: Vec<&str> = output.text.lines().skip(3).collect();
        assert_eq!(grid.len(), 3);
        assert_eq!(grid[1].chars().nth(1), Some('@'));
    }

    #[test]
    fn rejects_huge_radius() {
        let config = BasicConfiguration::default();
        let err = Args {
            x: 0,
            z: 0,
            chunk: true,
            seed: Some(Seed(1)),
            radius: Some(65),
        }
        .execute(&CommandContext { config: &config })
        .unwrap_err();
        assert!(matches!(err, CommandError::InvalidArgument(_)));
    }
}
