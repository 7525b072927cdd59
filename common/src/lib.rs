//! Types and configuration shared by the shelter API server and the web site.

pub mod config;
pub mod model;
pub mod protocol;
