use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Uniform envelope returned by every list endpoint.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PageDto<T> {
    pub data: Vec<T>,
    pub info: PageInfoDto,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
pub struct PageInfoDto {
    /// Requested page number, echoed back even when past the last page.
    pub current: u64,
    /// Last page number, 0 when nothing matched.
    pub last: u64,
    /// Total number of matching rows.
    pub total: u64,
    /// Page size.
    pub take: u64,
}
