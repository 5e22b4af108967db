//! Cron jobs running alongside the HTTP server.

pub mod log_retention;
