pub mod chunk;
pub mod light;
pub mod mob_cap;
pub mod portal;
pub mod region;
pub mod slime;
pub mod spawn;
