//! Persisted log entry models.

use chrono::{DateTime, Utc};

use crate::{
    model::log::LogDto,
    server::error::{internal::InternalError, AppError},
};

/// Severity of a persisted log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub id: i32,
    pub level: LogLevel,
    /// Subsystem that wrote the entry, e.g. `post` or `messenger`.
    pub context: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl LogEntry {
    pub fn into_dto(self) -> LogDto {
        LogDto {
            id: self.id,
            level: self.level.as_str().to_string(),
            context: self.context,
            message: self.message,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a log entry.
    ///
    /// # Returns
    /// - `Ok(LogEntry)` - Converted entry
    /// - `Err(AppError::InternalErr(UnknownStoredValue))` - Stored level is unknown
    pub fn from_entity(entity: entity::log::Model) -> Result<Self, AppError> {
        let level = LogLevel::parse(&entity.level).ok_or(InternalError::UnknownStoredValue {
            field: "log level",
            value: entity.level,
        })?;

        Ok(Self {
            id: entity.id,
            level,
            context: entity.context,
            message: entity.message,
            created_at: entity.created_at,
        })
    }
}
