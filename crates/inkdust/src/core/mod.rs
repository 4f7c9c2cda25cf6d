pub mod rng;
pub mod schedule;
pub mod time;
pub mod vector;
