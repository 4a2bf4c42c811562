pub mod connection;
pub mod courses;
pub mod follows;
pub mod hole_scores;
pub mod models;
pub mod players;
pub mod rounds;
pub mod setup;
pub mod shots;

pub use connection::{create_pool, get_connection, DbConn, DbPool};
pub use models::*;
