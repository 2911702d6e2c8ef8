use std::fmt;

use craftkit_world::light::{
    ambient_darkness, can_mob_spawn_at_light, LightSample, Mob, Weather, HOSTILE_MAX_LIGHT,
    MAX_LIGHT_LEVEL, PASSIVE_MIN_LIGHT,
};
use serde::Serialize;

use crate::command::{CommandContext, CommandError, CommandExecutor, Output};

#[derive(clap::Args, Debug)]
pub struct Args {
    /// Block light level, 0-15
    #[arg(value_parser = clap::value_parser!(u8).range(0..=i64::from(MAX_LIGHT_LEVEL)))]
    block_light: u8,
    /// Sky light level, 0-15
    #[arg(value_parser = clap::value_parser!(u8).range(0..=i64::from(MAX_LIGHT_LEVEL)))]
    sky_light: u8,
    /// Time of day in ticks
    time: i64,
    #[arg(long, default_value = "clear")]
    weather: Weather,
    /// Check a single mob instead of listing all of them
    #[arg(long)]
    mob: Option<Mob>,
}

#[derive(Serialize)]
struct LightReport {
    sample: LightSample,
    weather: Weather,
    ambient_darkness: u8,
    effective_light: u8,
    hostile_can_spawn: bool,
    passive_can_spawn: bool,
    spawnable_mobs: Vec<Mob>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mob: Option<MobVerdict>,
}

#[derive(Serialize)]
struct MobVerdict {
    mob: Mob,
    can_spawn: bool,
}

impl fmt::Display for LightReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Effective light: {} (ambient darkness {}, {})",
            self.effective_light, self.ambient_darkness, self.weather
        )?;
        writeln!(f, "Hostile mobs can spawn: {}", self.hostile_can_spawn)?;
        writeln!(f, "Passive mobs can spawn: {}", self.passive_can_spawn)?;
        match &self.mob {
            Some(verdict) => writeln!(
                f,
                "{} {} spawn here",
                verdict.mob,
                if verdict.can_spawn { "can" } else { "cannot" }
            ),
            None => {
                let names: Vec<&str> = self.spawnable_mobs.iter().map(Mob::name).collect();
                writeln!(f, "Spawnable mobs: {}", names.join(", "))
            }
        }
    }
}

impl CommandExecutor for Args {
    fn execute(&self, _context: &CommandContext) -> Result<Output, CommandError> {
        let sample = LightSample {
            block_light: self.block_light,
            sky_light: self.sky_light,
            time_of_day: self.time,
        };
        let effective_light = sample.effective_light(self.weather);

        Output::new(&LightReport {
            sample,
            weather: self.weather,
            ambient_darkness: ambient_darkness(self.time, self.weather),
            effective_light,
            hostile_can_spawn: effective_light <= HOSTILE_MAX_LIGHT,
            passive_can_spawn: effective_light >= PASSIVE_MIN_LIGHT,
            spawnable_mobs: Mob::ALL
                .into_iter()
                .filter(|mob| can_mob_spawn_at_light(*mob, effective_light))
                .collect(),
            mob: self.mob.map(|mob| MobVerdict {
                mob,
                can_spawn: can_mob_spawn_at_light(mob, effective_light),
            }),
        })
    }
}
