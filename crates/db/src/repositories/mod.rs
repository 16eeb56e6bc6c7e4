//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that take any Postgres executor (a pool or an open transaction) as the
//! first argument. They return raw rows and `sqlx::Error`; validation and
//! error classification live in [`crate::store`].

pub mod category_repo;
pub mod player_repo;
pub mod tag_repo;

pub use category_repo::CategoryRepo;
pub use player_repo::PlayerRepo;
pub use tag_repo::TagRepo;
