pub mod analysis;
pub mod categories;
pub mod export;
pub mod players;
pub mod tags;
