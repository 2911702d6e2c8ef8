use std::{convert::Infallible, fmt, str::FromStr};

use craftkit_util::java_string_hash;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seed(pub i64);

impl Seed {
    pub fn random() -> Self {
        Self(rand::random())
    }
}

impl From<i64> for Seed {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Parses seed text the way the world creation screen does: blank text
/// picks a random seed, numbers are taken as is and any other text is
/// hashed.
impl FromStr for Seed {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            let seed = Self::random();
            log::debug!("no seed given, using random seed {seed}");
            return Ok(seed);
        }

        Ok(match trimmed.parse::<i64>() {
            Ok(value) => Self(value),
            Err(_) => Self(i64::from(java_string_hash(trimmed))),
        })
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
