//! Lookup tables fed by the external tabular feed: which tasks an employee
//! may log against, and the employee's allotment count. The engine only
//! consumes the mappings; ingestion is a plain CSV import.

use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use rusqlite::{OptionalExtension, params};
use std::path::Path;

/// Row counts written by one import run.
#[derive(Debug, Default)]
pub struct ImportStats {
    pub tasks: usize,
    pub allotments: usize,
}

/// Ingest the employee→task and employee→allotment mappings from a CSV
/// feed with headers `employee,task,allotment`. The allotment column may
/// be empty on task-only rows; the last non-empty allotment per employee
/// wins.
pub fn import_csv(pool: &mut DbPool, path: &str) -> AppResult<ImportStats> {
    if !Path::new(path).exists() {
        return Err(AppError::Import(format!("file not found: {}", path)));
    }

    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| AppError::Import(e.to_string()))?;

    let headers = reader
        .headers()
        .map_err(|e| AppError::Import(e.to_string()))?
        .clone();

    let col = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));
    let employee_col = col("employee")
        .ok_or_else(|| AppError::Import("missing 'employee' column".into()))?;
    let task_col = col("task");
    let allotment_col = col("allotment");

    let mut stats = ImportStats::default();
    let tx = pool.conn.transaction()?;

    for record in reader.records() {
        let record = record.map_err(|e| AppError::Import(e.to_string()))?;

        let employee = record.get(employee_col).unwrap_or("").trim();
        if employee.is_empty() {
            continue;
        }

        if let Some(i) = task_col {
            let task = record.get(i).unwrap_or("").trim();
            if !task.is_empty() {
                tx.execute(
                    "INSERT OR IGNORE INTO employee_tasks (employee, task) VALUES (?1, ?2)",
                    params![employee, task],
                )?;
                stats.tasks += 1;
            }
        }

        if let Some(i) = allotment_col {
            let raw = record.get(i).unwrap_or("").trim();
            if !raw.is_empty() {
                let allotment: i64 = raw.parse().map_err(|_| {
                    AppError::Import(format!("invalid allotment '{}' for {}", raw, employee))
                })?;
                tx.execute(
                    "INSERT INTO employee_allotments (employee, allotment) VALUES (?1, ?2)
                     ON CONFLICT(employee) DO UPDATE SET allotment = excluded.allotment",
                    params![employee, allotment],
                )?;
                stats.allotments += 1;
            }
        }
    }

    tx.commit()?;
    Ok(stats)
}

/// Task categories the employee may log against, alphabetical.
pub fn tasks_for(pool: &mut DbPool, employee: &str) -> AppResult<Vec<String>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT task FROM employee_tasks WHERE employee = ?1 ORDER BY task ASC")?;
    let rows = stmt.query_map([employee], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn allotment_for(pool: &mut DbPool, employee: &str) -> AppResult<Option<i64>> {
    let allotment = pool
        .conn
        .query_row(
            "SELECT allotment FROM employee_allotments WHERE employee = ?1",
            [employee],
            |row| row.get(0),
        )
        .optional()?;
    Ok(allotment)
}
