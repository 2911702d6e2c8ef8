use std::{fmt, io, path::PathBuf, str::FromStr};

use clap::{Parser, Subcommand};
use craftkit_config::BasicConfiguration;
use craftkit_world::coordinates::{block_to_chunk, ChunkPos};
use serde::Serialize;
use thiserror::Error;

mod commands;

use commands::{chunk, light, mob_cap, portal, region, slime, spawn};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory holding the `config/` folder
    #[arg(long, global = true, default_value = ".")]
    pub config_dir: PathBuf,

    /// Log more; repeat for even more
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Chunk, offset and region of a block
    #[command(allow_negative_numbers = true)]
    Chunk(chunk::Args),
    /// Region file holding a block or chunk
    #[command(allow_negative_numbers = true)]
    Region(region::Args),
    /// Whether a block lies in the spawn chunks
    #[command(allow_negative_numbers = true)]
    Spawn(spawn::Args),
    /// Slime chunks at and around a position
    #[command(allow_negative_numbers = true)]
    Slime(slime::Args),
    /// Effective light level and which mobs can spawn at it
    #[command(allow_negative_numbers = true)]
    Light(light::Args),
    /// Mob caps for a number of loaded chunks or a set of players
    #[command(allow_negative_numbers = true)]
    MobCap(mob_cap::Args),
    /// Matching position in the other dimension
    #[command(allow_negative_numbers = true)]
    Portal(portal::Args),
}

impl Command {
    pub fn executor(&self) -> &dyn CommandExecutor {
        match self {
            Self::Chunk(args) => args,
            Self::Region(args) => args,
            Self::Spawn(args) => args,
            Self::Slime(args) => args,
            Self::Light(args) => args,
            Self::MobCap(args) => args,
            Self::Portal(args) => args,
        }
    }
}

/// Defaults the commands fall back to when a value is not given.
pub struct CommandContext<'a> {
    pub config: &'a BasicConfiguration,
}

pub trait CommandExecutor {
    fn execute(&self, context: &CommandContext) -> Result<Output, CommandError>;
}

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("couldn't encode result: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("couldn't write result: {0}")]
    Write(#[from] io::Error),
}

/// A command result, rendered both for humans and as JSON.
#[derive(Debug)]
pub struct Output {
    pub text: String,
    pub json: serde_json::Value,
}

impl Output {
    pub fn new<R>(report: &R) -> Result<Self, CommandError>
    where
        R: Serialize + fmt::Display,
    {
        Ok(Self {
            text: report.to_string(),
            json: serde_json::to_value(report)?,
        })
    }

    pub fn write(&self, json: bool, out: &mut impl io::Write) -> Result<(), CommandError> {
        if json {
            serde_json::to_writer_pretty(&mut *out, &self.json)?;
            writeln!(out)?;
        } else {
            write!(out, "{}", self.text)?;
        }
        Ok(())
    }
}

/// A horizontal `x,z` pair from the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnArg {
    pub x: i32,
    pub z: i32,
}

impl ColumnArg {
    pub fn chunk(&self) -> ChunkPos {
        block_to_chunk(self.x, self.z)
    }
}

impl FromStr for ColumnArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, z) = s
            .split_once(',')
            .ok_or_else(|| format!("expected x,z but got \"{s}\""))?;
        let parse = |value: &str| {
            value
                .trim()
                .parse::<i32>()
                .map_err(|err| format!("\"{}\" is not a coordinate: {err}", value.trim()))
        };
        Ok(Self {
            x: parse(x)?,
            z: parse(z)?,
        })
    }
}
