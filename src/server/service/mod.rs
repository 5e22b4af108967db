//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls and external services
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Audit Trail**: Writing deletions and message dispatch to the application log

pub mod admin;
pub mod auth;
pub mod chat_bot;
pub mod log;
pub mod messenger;
pub mod post;
pub mod series;
pub mod topic;
pub mod user;

#[cfg(test)]
mod test;
