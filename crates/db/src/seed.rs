//! One-time seeding of the default categories and players.

use matchtag_core::category::Category;
use matchtag_core::defaults::{DEFAULT_CATEGORIES, DEFAULT_PLAYERS};
use matchtag_core::player::Player;
use matchtag_core::types::new_id;

use crate::repositories::{CategoryRepo, PlayerRepo};
use crate::DbPool;

/// Advisory lock key serializing concurrent seeders across processes.
const SEED_LOCK_KEY: i64 = 0x6d61_7463_6874_6167;

/// What [`seed_defaults`] inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub categories: usize,
    pub players: usize,
}

/// Insert the defaults into each table that is still empty.
///
/// Safe to call on every startup: tables that already have rows are left
/// alone, and concurrent callers are serialized by an advisory lock.
pub async fn seed_defaults(pool: &DbPool) -> Result<SeedReport, sqlx::Error> {
    let mut tx = pool.begin().await?;
    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(SEED_LOCK_KEY)
        .execute(&mut *tx)
        .await?;

    let mut report = SeedReport::default();

    if CategoryRepo::count(&mut *tx).await? == 0 {
        for name in DEFAULT_CATEGORIES {
            let category = Category {
                id: new_id(),
                name: (*name).to_string(),
            };
            CategoryRepo::insert(&mut *tx, &category).await?;
            report.categories += 1;
        }
    }

    if PlayerRepo::count(&mut *tx).await? == 0 {
        for (name, number) in DEFAULT_PLAYERS {
            let player = Player {
                id: new_id(),
                name: (*name).to_string(),
                number: *number,
            };
            PlayerRepo::insert(&mut *tx, &player).await?;
            report.players += 1;
        }
    }

    tx.commit().await?;

    if report != SeedReport::default() {
        tracing::info!(
            categories = report.categories,
            players = report.players,
            "Seeded default categories and players",
        );
    } else {
        tracing::debug!("Default data already present, skipping seed");
    }

    Ok(report)
}
