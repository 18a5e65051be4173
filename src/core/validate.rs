//! Entry validation: every insertion passes through here before it may
//! reach the store. Checks run in a fixed order and stop at the first
//! failure; nothing is coerced beyond what the CLI already parsed.

use crate::errors::{AppError, AppResult};
use crate::models::entry::{EntryDraft, NewEntry};
use crate::utils::time;

/// Validate a candidate entry and compute its derived `pending` count.
///
/// Check order (first failure wins):
/// 1. employee, task, time non-empty after trimming
/// 2. time in 12-hour "HH:MM AM/PM" form
/// 3. completed set and > 0
/// 4. completed ≤ total
/// 5. tally set and ≥ 0
pub fn validate(draft: EntryDraft) -> AppResult<NewEntry> {
    let employee = draft.employee.trim();
    if employee.is_empty() {
        return Err(AppError::MissingRequiredField("employee"));
    }

    let task = draft.task.trim();
    if task.is_empty() {
        return Err(AppError::MissingRequiredField("task"));
    }

    let time_str = draft.time.trim();
    if time_str.is_empty() {
        return Err(AppError::MissingRequiredField("time"));
    }

    if !time::is_valid_12_hour(time_str) {
        return Err(AppError::InvalidTimeFormat(time_str.to_string()));
    }

    let completed = draft.completed.ok_or(AppError::NonPositiveCompleted)?;
    if completed <= 0 {
        return Err(AppError::NonPositiveCompleted);
    }

    if completed > draft.total {
        return Err(AppError::CompletedExceedsTotal {
            completed,
            total: draft.total,
        });
    }

    let tally = draft.tally.ok_or(AppError::NegativeCount)?;
    if tally < 0 {
        return Err(AppError::NegativeCount);
    }

    // Pending is derived, never authored.
    let pending = (draft.total - completed).max(0);

    Ok(NewEntry {
        employee: employee.to_string(),
        task: task.to_string(),
        auxiliary: draft.auxiliary,
        time: time_str.to_string(),
        total: draft.total,
        completed,
        pending,
        tally,
        date: draft.date,
    })
}
