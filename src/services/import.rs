use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};

use crate::config::settings::AppConfig;
use crate::database::{self, DbConn};
use crate::domain::{HoleRecord, RoundExport, ScorecardExport, Visibility};
use crate::stats;

/// Loads a JSON scorecard export into the database: players, follow
/// relationships, rounds with their hole records, and the shot pool
/// extracted from advanced-mode holes.
pub struct ImportService {
    config: AppConfig,
}

impl ImportService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn run(&self, file: &Path) -> Result<()> {
        info!("=== Importing scorecard export: {} ===", file.display());

        let export = self.load_export(file)?;
        info!(
            "  → {} players, {} rounds in export",
            export.players.len(),
            export.rounds.len()
        );

        let pool = database::create_pool(&self.config.database_path())?;
        let mut conn = database::get_connection(&pool)?;

        let player_ids = self.import_players(&mut conn, &export)?;
        self.import_follows(&mut conn, &export, &player_ids)?;

        let mut imported = 0;
        for round in export.rounds {
            match self.import_round(&mut conn, &round, &player_ids) {
                Ok(()) => imported += 1,
                Err(e) => warn!("  Skipped round on {}: {e:#}", round.date_played),
            }
        }
        info!("  → Imported {imported} rounds");

        info!("=== Import Complete ===");
        Ok(())
    }

    fn load_export(&self, file: &Path) -> Result<ScorecardExport> {
        let raw = std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read export file {}", file.display()))?;
        serde_json::from_str(&raw).context("Failed to parse scorecard export JSON")
    }

    fn import_players(
        &self,
        conn: &mut DbConn,
        export: &ScorecardExport,
    ) -> Result<HashMap<String, i64>> {
        let mut ids = HashMap::new();

        for player in &export.players {
            let row = database::players::upsert_player(conn, &player.name)?;
            ids.insert(player.name.clone(), row.id);
        }
        // Round owners may not appear in the players section
        for round in &export.rounds {
            if !ids.contains_key(&round.player) {
                let row = database::players::upsert_player(conn, &round.player)?;
                ids.insert(round.player.clone(), row.id);
            }
        }

        Ok(ids)
    }

    fn import_follows(
        &self,
        conn: &mut DbConn,
        export: &ScorecardExport,
        player_ids: &HashMap<String, i64>,
    ) -> Result<()> {
        for player in &export.players {
            let Some(&follower_id) = player_ids.get(&player.name) else {
                continue;
            };
            for follow in &player.follows {
                let followed_id = match player_ids.get(&follow.followed) {
                    Some(id) => *id,
                    None => database::players::upsert_player(conn, &follow.followed)?.id,
                };
                database::follows::upsert_follow(conn, follower_id, followed_id, &follow.status)?;
            }
        }
        Ok(())
    }

    fn import_round(
        &self,
        conn: &mut DbConn,
        round: &RoundExport,
        player_ids: &HashMap<String, i64>,
    ) -> Result<()> {
        let player_id = *player_ids
            .get(&round.player)
            .ok_or_else(|| anyhow::anyhow!("Unknown player {}", round.player))?;
        let course = database::courses::upsert_course(conn, &round.course)?;

        let holes: Vec<HoleRecord> = round
            .holes
            .iter()
            .cloned()
            .map(|h| h.into_record())
            .collect();

        // Store the derived total, not whatever the export carried
        let total_score = stats::recompute_total_score(&holes);
        let visibility = round
            .visibility
            .as_deref()
            .map(Visibility::parse)
            .unwrap_or(Visibility::Private);

        let round_row = database::rounds::insert_round(
            conn,
            player_id,
            course.id,
            round.date_played,
            total_score,
            visibility.as_str(),
            round.wedge_tracking,
        )?;

        for hole in &holes {
            database::hole_scores::insert_hole_score(conn, round_row.id, hole)?;
            self.import_shots(conn, player_id, round_row.id, hole)?;
        }

        Ok(())
    }

    /// Advanced-mode holes feed the player's pooled shot history.
    fn import_shots(
        &self,
        conn: &mut DbConn,
        player_id: i64,
        round_id: i64,
        hole: &HoleRecord,
    ) -> Result<()> {
        for shot in hole.mode_detail.shots() {
            database::shots::insert_shot(
                conn,
                player_id,
                Some(round_id),
                Some(hole.hole_number),
                &shot.club,
                shot.distance_yards,
            )?;
        }
        Ok(())
    }
}
