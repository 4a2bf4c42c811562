#[derive(Debug, Clone)]
pub struct StatsSettings {
    /// Cap on the recent-rounds list returned with player statistics.
    pub recent_rounds_limit: usize,
    /// Recency windows the stats screen offers besides "all".
    pub stats_windows: &'static [usize],
}

impl Default for StatsSettings {
    fn default() -> Self {
        Self {
            recent_rounds_limit: 10,
            stats_windows: &[3, 5, 10, 25],
        }
    }
}

impl StatsSettings {
    pub fn window_allowed(&self, n: usize) -> bool {
        self.stats_windows.contains(&n)
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub default_path: &'static str,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            default_path: "fairway_tracker.db",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub stats: StatsSettings,
    pub database: DatabaseSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// DATABASE_PATH overrides the default next to the binary.
    pub fn database_path(&self) -> String {
        std::env::var("DATABASE_PATH").unwrap_or_else(|_| self.database.default_path.to_string())
    }
}
