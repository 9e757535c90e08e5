pub mod config;
pub mod hotspot;
