pub mod hotspots;
