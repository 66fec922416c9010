//! Leave-day accounting over request snapshots.
//!
//! Summaries and balances are pure reads over the snapshot they are given.
//! Racing approvals against the allowance ceiling must be serialized by the
//! persistence collaborator, not here.

use crate::leave::errors::LeaveError;
use crate::leave::models::LeaveBalance;
use crate::leave::models::LeaveRequest;
use crate::leave::models::LeaveStatus;
use crate::leave::models::LeaveSummary;

/// Annual leave allowance in days, shared by every employee.
pub const DEFAULT_ANNUAL_ALLOWANCE: u32 = 30;

/// Summarize one employee's leave requests for a calendar year.
///
/// Requests of other employees or other years are ignored. Only approved
/// days consume the allowance; pending, rejected, and cancelled requests
/// never reduce the balance.
pub fn summarize(
    requests: &[LeaveRequest],
    employee_id: i64,
    year: i32,
    annual_allowance: u32,
) -> LeaveSummary {
    let mut summary = LeaveSummary {
        pending: 0,
        approved: 0,
        canceled: 0,
        denied: 0,
        total: 0,
        remaining: 0,
    };
    let mut used_days: u32 = 0;

    for request in filter(requests, employee_id, year) {
        summary.total += 1;
        match request.status {
            LeaveStatus::Pending => summary.pending += 1,
            LeaveStatus::Approved => {
                summary.approved += 1;
                used_days += request.leave_days;
            }
            LeaveStatus::Cancelled => summary.canceled += 1,
            LeaveStatus::Rejected => summary.denied += 1,
        }
    }

    summary.remaining = annual_allowance.saturating_sub(used_days);
    summary
}

/// Compute one employee's remaining balance for a calendar year.
pub fn balance(
    requests: &[LeaveRequest],
    employee_id: i64,
    year: i32,
    annual_allowance: u32,
) -> LeaveBalance {
    let used: u32 = filter(requests, employee_id, year)
        .filter(|r| r.status == LeaveStatus::Approved)
        .map(|r| r.leave_days)
        .sum();

    LeaveBalance {
        total_allowed: annual_allowance,
        used,
        remaining: annual_allowance.saturating_sub(used),
        year,
    }
}

/// Apply a client-supplied status to a request.
///
/// The raw value is canonicalized (case-insensitive, "DENIED" folds into
/// REJECTED) and validated against the allowed set before anything is
/// mutated. There is deliberately no transition table: any status may follow
/// any other.
///
/// # Errors
/// * `InvalidStatus` - The value is not in the allowed set
pub fn set_status(request: &mut LeaveRequest, raw_status: &str) -> Result<LeaveStatus, LeaveError> {
    let status: LeaveStatus = raw_status.parse()?;
    request.status = status;
    Ok(status)
}

fn filter(
    requests: &[LeaveRequest],
    employee_id: i64,
    year: i32,
) -> impl Iterator<Item = &LeaveRequest> {
    use chrono::Datelike;
    requests
        .iter()
        .filter(move |r| r.employee_id == employee_id && r.created_at.year() == year)
}
