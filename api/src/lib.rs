//! Shelter JSON API – breeds and dogs served from SQLite.
//!
//! Used both by the standalone `shelter-api` binary and by the web site,
//! which mounts [`server::router`] on its own origin.

pub mod db;
pub mod seed;
pub mod server;
