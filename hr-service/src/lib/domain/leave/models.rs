use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::leave::errors::LeaveError;

/// Status of a leave request.
///
/// Stored rows may carry any spelling the clients ever sent; parsing is
/// case-insensitive and canonicalizes the legacy "DENIED" spelling to
/// `Rejected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

impl FromStr for LeaveStatus {
    type Err = LeaveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PENDING" => Ok(LeaveStatus::Pending),
            "APPROVED" => Ok(LeaveStatus::Approved),
            "REJECTED" | "DENIED" => Ok(LeaveStatus::Rejected),
            "CANCELLED" => Ok(LeaveStatus::Cancelled),
            _ => Err(LeaveError::InvalidStatus(s.to_string())),
        }
    }
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LeaveStatus::Pending => "PENDING",
            LeaveStatus::Approved => "APPROVED",
            LeaveStatus::Rejected => "REJECTED",
            LeaveStatus::Cancelled => "CANCELLED",
        };
        f.write_str(s)
    }
}

/// A single leave request as supplied by the persistence collaborator.
#[derive(Debug, Clone)]
pub struct LeaveRequest {
    pub id: i64,
    pub employee_id: i64,
    pub leave_days: u32,
    pub status: LeaveStatus,
    pub created_at: DateTime<Utc>,
}

/// Per-employee, per-year leave usage summary.
///
/// Serialized as-is into the API response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaveSummary {
    pub pending: u32,
    pub approved: u32,
    pub canceled: u32,
    pub denied: u32,
    pub total: u32,
    pub remaining: u32,
}

/// Per-employee leave balance against the annual allowance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaveBalance {
    pub total_allowed: u32,
    pub used: u32,
    pub remaining: u32,
    pub year: i32,
}
