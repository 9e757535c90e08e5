//! Core library exports for the Hotspots service.
//!
//! This crate exposes the domain model, forms, repositories, routes and
//! service layers used by the hotspots directory web application.

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "server")]
pub mod services;
