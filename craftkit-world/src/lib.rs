pub mod coordinates;
pub mod light;
pub mod mob_cap;
pub mod portal;
pub mod seed;
pub mod slime;
pub mod spawn;

pub use coordinates::{ChunkOffset, ChunkPos, RegionPos};
pub use light::{LightSample, Mob, Weather};
pub use mob_cap::MobCategory;
pub use portal::Dimension;
pub use seed::Seed;
