pub mod import;
pub mod recompute;
pub mod server;
