//! Row structs for the three tagging tables.
//!
//! Each row converts into its `matchtag_core` entity; the tag conversion is
//! where stored player-id encodings are normalized.

pub mod category;
pub mod player;
pub mod tag;
