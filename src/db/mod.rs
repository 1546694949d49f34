pub mod connection;
pub mod rosters;

pub use connection::Database;
