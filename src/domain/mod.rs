pub mod hotspot;
pub mod types;
