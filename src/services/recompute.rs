use anyhow::Result;
use log::info;

use crate::config::settings::AppConfig;
use crate::database::{self, DbConn};
use crate::stats;

/// Re-derives every round's `total_score` from its hole scores and repairs
/// stored totals that drifted (older app versions wrote edits without
/// updating the round row).
pub struct RecomputeService {
    config: AppConfig,
}

impl RecomputeService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<()> {
        info!("=== Recomputing round totals ===");

        let pool = database::create_pool(&self.config.database_path())?;
        let mut conn = database::get_connection(&pool)?;

        let rounds = database::rounds::list_all(&mut conn)?;
        info!("  → {} rounds to check", rounds.len());

        let mut repaired = 0;
        for round in rounds {
            if self.recompute_round(&mut conn, round.id, round.total_score)? {
                repaired += 1;
            }
        }

        info!("  → Repaired {repaired} drifted totals");
        info!("=== Recompute Complete ===");
        Ok(())
    }

    fn recompute_round(&self, conn: &mut DbConn, round_id: i64, stored: i64) -> Result<bool> {
        let holes: Vec<_> = database::hole_scores::list_for_round(conn, round_id)?
            .into_iter()
            .map(|h| h.into_record())
            .collect();

        let derived = stats::recompute_total_score(&holes);
        if stored == derived as i64 {
            return Ok(false);
        }

        info!("  Round {round_id}: stored total {stored} != derived {derived}, repairing");
        database::rounds::update_total_score(conn, round_id, derived)?;
        Ok(true)
    }
}
