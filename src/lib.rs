pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod services;
pub mod stats;

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::services::import::ImportService;
use crate::services::recompute::RecomputeService;
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_setup() -> Result<()> {
    let config = AppConfig::new();
    let pool = database::create_pool(&config.database_path())?;
    let mut conn = database::get_connection(&pool)?;
    database::setup::reset_database(&mut conn)
}

pub fn handle_import(file: &Path) -> Result<()> {
    let config = AppConfig::new();
    let service = ImportService::new(config);
    service.run(file)
}

pub fn handle_recompute() -> Result<()> {
    let config = AppConfig::new();
    let service = RecomputeService::new(config);
    service.run()
}
