//! Permission strings and permission sets.
//!
//! Users hold a flat set of permission strings. `admin` is a wildcard that satisfies every
//! other permission; the rest each guard one area of the API.

use std::collections::BTreeSet;

use crate::server::error::{internal::InternalError, AppError};

/// A single grantable permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Permission {
    Admin,
    PostWrite,
    TopicWrite,
    SeriesWrite,
    UserRead,
    UserWrite,
    ChatbotWrite,
    ChatbotSend,
    LogRead,
}

impl Permission {
    /// Every known permission, in display order.
    pub const ALL: [Permission; 9] = [
        Permission::Admin,
        Permission::PostWrite,
        Permission::TopicWrite,
        Permission::SeriesWrite,
        Permission::UserRead,
        Permission::UserWrite,
        Permission::ChatbotWrite,
        Permission::ChatbotSend,
        Permission::LogRead,
    ];

    /// Stored and serialized form of the permission.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::PostWrite => "post:write",
            Self::TopicWrite => "topic:write",
            Self::SeriesWrite => "series:write",
            Self::UserRead => "user:read",
            Self::UserWrite => "user:write",
            Self::ChatbotWrite => "chatbot:write",
            Self::ChatbotSend => "chatbot:send",
            Self::LogRead => "log:read",
        }
    }

    /// Parses a permission string, returning `None` for unknown values.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }

    /// Parses a permission string read from the database.
    ///
    /// # Returns
    /// - `Ok(Permission)` - Known permission
    /// - `Err(AppError::InternalErr(UnknownStoredValue))` - Row holds an unknown string
    pub fn from_stored(value: String) -> Result<Self, AppError> {
        Self::parse(&value).ok_or_else(|| {
            InternalError::UnknownStoredValue {
                field: "permission",
                value,
            }
            .into()
        })
    }

    /// Parses caller-supplied permission strings.
    ///
    /// # Returns
    /// - `Ok(Vec<Permission>)` - All strings were known permissions
    /// - `Err(AppError::BadRequest)` - At least one string is not a known permission
    pub fn parse_all(values: &[String]) -> Result<Vec<Self>, AppError> {
        values
            .iter()
            .map(|value| {
                Self::parse(value)
                    .ok_or_else(|| AppError::BadRequest(format!("Unknown permission '{}'", value)))
            })
            .collect()
    }
}

/// Permissions held by one user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionSet(BTreeSet<Permission>);

impl PermissionSet {
    pub fn new(permissions: impl IntoIterator<Item = Permission>) -> Self {
        Self(permissions.into_iter().collect())
    }

    /// Whether the set satisfies `permission`, either directly or through `admin`.
    pub fn grants(&self, permission: Permission) -> bool {
        self.0.contains(&Permission::Admin) || self.0.contains(&permission)
    }

    pub fn contains(&self, permission: Permission) -> bool {
        self.0.contains(&permission)
    }

    pub fn iter(&self) -> impl Iterator<Item = Permission> + '_ {
        self.0.iter().copied()
    }

    /// Permission strings in a stable order.
    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(|p| p.as_str().to_string()).collect()
    }
}
