//! Domain core for video tagging: entities, validation, the storage
//! contract, the in-memory store, id-to-name joins and the export pipeline.
//!
//! Nothing in this crate logs; failures are returned as [`error::CoreError`].

pub mod category;
pub mod defaults;
pub mod error;
pub mod export;
pub mod lookup;
pub mod memory;
pub mod pattern;
pub mod player;
pub mod player_ids;
pub mod repository;
pub mod tag;
pub mod types;

#[cfg(any(test, feature = "conformance"))]
pub mod conformance;
