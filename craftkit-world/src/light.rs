//! Effective light levels and the light rules of mob spawning.
//!
//! Sky light is dimmed by the ambient darkness of the world, which follows
//! the sun over the day. The darkness reaches its maximum of 11 at night, so
//! a fully exposed block drops from 15 at noon to 4 at midnight.

use std::{
    f64::consts::{PI, TAU},
    fmt,
    str::FromStr,
};

use craftkit_util::math::fractional_part;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::mob_cap::MobCategory;

pub const MAX_LIGHT_LEVEL: u8 = 15;
/// Ticks in one day/night cycle.
pub const DAY_LENGTH: i64 = 24000;
const MAX_AMBIENT_DARKNESS: f64 = 11.0;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weather {
    #[default]
    Clear,
    Rain,
    Thunder,
}

impl Weather {
    const fn rain_gradient(&self) -> f64 {
        match self {
            Self::Clear => 0.0,
            Self::Rain | Self::Thunder => 1.0,
        }
    }

    const fn thunder_gradient(&self) -> f64 {
        match self {
            Self::Thunder => 1.0,
            Self::Clear | Self::Rain => 0.0,
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown weather \"{0}\", expected clear, rain or thunder")]
pub struct ParseWeatherError(String);

impl FromStr for Weather {
    type Err = ParseWeatherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "clear" => Ok(Self::Clear),
            "rain" => Ok(Self::Rain),
            "thunder" => Ok(Self::Thunder),
            _ => Err(ParseWeatherError(s.to_string())),
        }
    }
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clear => f.write_str("clear"),
            Self::Rain => f.write_str("rain"),
            Self::Thunder => f.write_str("thunder"),
        }
    }
}

/// Position of the sun as a fraction of a full turn. 0 at noon, 0.5 at midnight.
pub fn sky_angle(time_of_day: i64) -> f64 {
    let day_fraction = fractional_part(time_of_day as f64 / DAY_LENGTH as f64 - 0.25);
    let smoothed = 0.5 - (day_fraction * PI).cos() / 2.0;
    (day_fraction * 2.0 + smoothed) / 3.0
}

/// How many levels the sky light is reduced by, in `0..=11`.
pub fn ambient_darkness(time_of_day: i64, weather: Weather) -> u8 {
    let rain = 1.0 - weather.rain_gradient() * 5.0 / 16.0;
    let thunder = 1.0 - weather.thunder_gradient() * 5.0 / 16.0;
    let daylight = 0.5 + 2.0 * (sky_angle(time_of_day) * TAU).cos().clamp(-0.25, 0.25);
    ((1.0 - daylight * rain * thunder) * MAX_AMBIENT_DARKNESS) as u8
}

pub fn calculate_effective_light_level(block_light: u8, sky_light: u8, time_of_day: i64) -> u8 {
    calculate_effective_light_level_in_weather(block_light, sky_light, time_of_day, Weather::Clear)
}

pub fn calculate_effective_light_level_in_weather(
    block_light: u8,
    sky_light: u8,
    time_of_day: i64,
    weather: Weather,
) -> u8 {
    let sky = sky_light
        .min(MAX_LIGHT_LEVEL)
        .saturating_sub(ambient_darkness(time_of_day, weather));
    block_light.min(MAX_LIGHT_LEVEL).max(sky)
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
pub struct LightSample {
    pub block_light: u8,
    pub sky_light: u8,
    pub time_of_day: i64,
}

impl LightSample {
    pub fn effective_light(&self, weather: Weather) -> u8 {
        calculate_effective_light_level_in_weather(
            self.block_light,
            self.sky_light,
            self.time_of_day,
            weather,
        )
    }
}

/// Inclusive light bounds; a missing bound is unbounded on that side.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize)]
pub struct LightRange {
    pub min: Option<u8>,
    pub max: Option<u8>,
}

impl LightRange {
    pub const fn new(min: Option<u8>, max: Option<u8>) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, light: u8) -> bool {
        self.min.is_none_or(|min| light >= min) && self.max.is_none_or(|max| light <= max)
    }
}

/// Highest light level hostile mobs spawn at.
pub const HOSTILE_MAX_LIGHT: u8 = 7;
/// Lowest light level passive mobs spawn at.
pub const PASSIVE_MIN_LIGHT: u8 = 9;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mob {
    Zombie,
    Skeleton,
    Creeper,
    Spider,
    Enderman,
    Witch,
    Blaze,
    Slime,
    Cow,
    Pig,
    Sheep,
    Chicken,
    Rabbit,
    Squid,
    Bat,
}

impl Mob {
    pub const ALL: [Self; 15] = [
        Self::Zombie,
        Self::Skeleton,
        Self::Creeper,
        Self::Spider,
        Self::Enderman,
        Self::Witch,
        Self::Blaze,
        Self::Slime,
        Self::Cow,
        Self::Pig,
        Self::Sheep,
        Self::Chicken,
        Self::Rabbit,
        Self::Squid,
        Self::Bat,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Zombie => "zombie",
            Self::Skeleton => "skeleton",
            Self::Creeper => "creeper",
            Self::Spider => "spider",
            Self::Enderman => "enderman",
            Self::Witch => "witch",
            Self::Blaze => "blaze",
            Self::Slime => "slime",
            Self::Cow => "cow",
            Self::Pig => "pig",
            Self::Sheep => "sheep",
            Self::Chicken => "chicken",
            Self::Rabbit => "rabbit",
            Self::Squid => "squid",
            Self::Bat => "bat",
        }
    }

    pub const fn category(&self) -> MobCategory {
        match self {
            Self::Zombie
            | Self::Skeleton
            | Self::Creeper
            | Self::Spider
            | Self::Enderman
            | Self::Witch
            | Self::Blaze
            | Self::Slime => MobCategory::Hostile,
            Self::Cow | Self::Pig | Self::Sheep | Self::Chicken | Self::Rabbit => {
                MobCategory::Passive
            }
            Self::Squid => MobCategory::Water,
            Self::Bat => MobCategory::Ambient,
        }
    }

    pub const fn light_range(&self) -> LightRange {
        match self {
            // Slime chunk slimes and squid ignore light
            Self::Slime | Self::Squid => LightRange::new(None, None),
            Self::Blaze => LightRange::new(None, Some(11)),
            Self::Bat => LightRange::new(None, Some(3)),
            _ => match self.category() {
                MobCategory::Hostile => LightRange::new(None, Some(HOSTILE_MAX_LIGHT)),
                _ => LightRange::new(Some(PASSIVE_MIN_LIGHT), None),
            },
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown mob \"{0}\"")]
pub struct ParseMobError(String);

impl FromStr for Mob {
    type Err = ParseMobError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.to_ascii_lowercase();
        let name = name.strip_prefix("minecraft:").unwrap_or(&name);
        Self::ALL
            .into_iter()
            .find(|mob| mob.name() == name)
            .ok_or_else(|| ParseMobError(s.to_string()))
    }
}

impl fmt::Display for Mob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn can_mob_spawn_at_light(mob: Mob, effective_light: u8) -> bool {
    mob.light_range().contains(effective_light)
}

#[cfg(test)]
mod tests {
    use craftkit_util::assert_eq_delta;

    use super::*;

    #[test]
    fn sky_angle_landmarks() {
        assert_eq_delta!(sky_angle(6000), 0.0, 1e-12);
        assert_eq_delta!(sky_angle(18000), 0.5, 1e-12);
        assert_eq_delta!(sky_angle(30000), sky_angle(6000), 1e-12);
        assert_eq_delta!(sky_angle(-6000), sky_angle(18000), 1e-12);
    }

    #[test]
    fn darkness_over_the_day() {
        let values: [(i64, u8); 12] = [
            (0, 0),
            (1000, 0),
            (6000, 0),
            (12000, 0),
            (12500, 3),
            (13000, 6),
            (13500, 9),
            (14000, 11),
            (18000, 11),
            (22000, 11),
            (23000, 6),
            (23500, 3),
        ];

        for (time, darkness) in values {
            assert_eq!(ambient_darkness(time, Weather::Clear), darkness, "time {time}");
        }
    }

    #[test]
    fn darkness_in_weather() {
        assert_eq!(ambient_darkness(6000, Weather::Rain), 3);
        assert_eq!(ambient_darkness(6000, Weather::Thunder), 5);
        assert_eq!(ambient_darkness(13000, Weather::Rain), 8);
        assert_eq!(ambient_darkness(18000, Weather::Thunder), 11);
    }

    #[test]
    fn darkening_is_monotonic_towards_midnight() {
        let mut previous = 0;
        for time in (6000..=18000).step_by(100) {
            let darkness = ambient_darkness(time, Weather::Clear);
            assert!(darkness >= previous, "time {time}");
            previous = darkness;
        }
    }

    #[test]
    fn noon_and_midnight() {
        let noon = calculate_effective_light_level(0, 15, 6000);
        assert_eq!(noon, 15);
        assert!(noon >= PASSIVE_MIN_LIGHT);

        let midnight = calculate_effective_light_level(0, 15, 18000);
        assert_eq!(midnight, 4);
        assert!(midnight <= HOSTILE_MAX_LIGHT);
    }

    #[test]
    fn block_light_wins_at_night() {
        assert_eq!(calculate_effective_light_level(14, 15, 18000), 14);
        assert_eq!(calculate_effective_light_level(3, 0, 6000), 3);
        assert_eq!(calculate_effective_light_level(0, 2, 18000), 0);
    }

    #[test]
    fn clamps_inputs() {
        assert_eq!(calculate_effective_light_level(200, 0, 0), 15);
        assert_eq!(calculate_effective_light_level(0, 255, 6000), 15);
    }

    #[test]
    fn storm_allows_hostiles_by_day() {
        let light = LightSample {
            block_light: 0,
            sky_light: 12,
            time_of_day: 6000,
        }
        .effective_light(Weather::Thunder);
        assert_eq!(light, 7);
        assert!(can_mob_spawn_at_light(Mob::Zombie, light));
    }

    #[test]
    fn light_ranges() {
        assert!(can_mob_spawn_at_light(Mob::Zombie, 0));
        assert!(can_mob_spawn_at_light(Mob::Zombie, 7));
        assert!(!can_mob_spawn_at_light(Mob::Zombie, 8));
        assert!(!can_mob_spawn_at_light(Mob::Cow, 8));
        assert!(can_mob_spawn_at_light(Mob::Cow, 9));
        assert!(can_mob_spawn_at_light(Mob::Cow, 15));
        assert!(can_mob_spawn_at_light(Mob::Blaze, 11));
        assert!(!can_mob_spawn_at_light(Mob::Blaze, 12));
        assert!(!can_mob_spawn_at_light(Mob::Bat, 4));
        for light in 0..=MAX_LIGHT_LEVEL {
            assert!(can_mob_spawn_at_light(Mob::Slime, light));
        }
    }

    #[test]
    fn unbounded_range() {
        let range = LightRange::default();
        assert!(range.contains(0));
        assert!(range.contains(u8::MAX));
        assert!(LightRange::new(Some(4), Some(4)).contains(4));
        assert!(!LightRange::new(Some(5), Some(4)).contains(4));
    }

    #[test]
    fn parse_mob() {
        assert_eq!("zombie".parse::<Mob>(), Ok(Mob::Zombie));
        assert_eq!("minecraft:Cow".parse::<Mob>(), Ok(Mob::Cow));
        assert_eq!("ghast".parse::<Mob>(), Err(ParseMobError("ghast".to_string())));
        for mob in Mob::ALL {
            assert_eq!(mob.to_string().parse::<Mob>(), Ok(mob));
        }
    }

    #[test]
    fn parse_weather() {
        assert_eq!("Thunder".parse::<Weather>(), Ok(Weather::Thunder));
        assert!("snow".parse::<Weather>().is_err());
    }
}
