use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LogDto {
    pub id: i32,
    pub level: String,
    pub context: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}
