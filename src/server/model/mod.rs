//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.

pub mod chat_bot;
pub mod log;
pub mod paging;
pub mod permission;
pub mod post;
pub mod series;
pub mod topic;
pub mod user;
