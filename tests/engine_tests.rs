//! Library-level tests for the pure engine: time normalization, validation,
//! filtering, aggregation and sorting.

use chrono::NaiveDate;
use tasktally::core::filter::{self, FilterSpec};
use tasktally::core::logic::Core;
use tasktally::core::{aggregate, sort, validate};
use tasktally::errors::AppError;
use tasktally::models::auxiliary::Auxiliary;
use tasktally::models::entry::{Entry, EntryDraft};
use tasktally::utils::time;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[allow(clippy::too_many_arguments)]
fn entry(
    id: i64,
    employee: &str,
    task: &str,
    time_str: &str,
    total: i64,
    completed: i64,
    tally: i64,
    date_str: &str,
    created_at: &str,
) -> Entry {
    Entry {
        id,
        employee: employee.to_string(),
        task: task.to_string(),
        auxiliary: Auxiliary::Domain(String::new()),
        time: time_str.to_string(),
        total,
        completed,
        pending: (total - completed).max(0),
        tally,
        date: date(date_str),
        created_at: created_at.to_string(),
    }
}

fn draft(employee: &str, task: &str, time_str: &str, total: i64) -> EntryDraft {
    EntryDraft {
        employee: employee.to_string(),
        task: task.to_string(),
        auxiliary: Auxiliary::default(),
        time: time_str.to_string(),
        total,
        completed: Some(1),
        tally: Some(0),
        date: date("2024-01-01"),
    }
}

// ---------------------------------------------------------------
// Time normalizer
// ---------------------------------------------------------------

#[test]
fn parse_to_minutes_twelve_hour_anchors() {
    assert_eq!(time::parse_to_minutes("12:00 AM").unwrap(), 0);
    assert_eq!(time::parse_to_minutes("12:00 PM").unwrap(), 720);
    assert_eq!(time::parse_to_minutes("01:05 PM").unwrap(), 785);
}

#[test]
fn parse_to_minutes_accepts_both_notations() {
    assert_eq!(time::parse_to_minutes("09:30").unwrap(), 570);
    assert_eq!(time::parse_to_minutes("9:30 am").unwrap(), 570);
    assert_eq!(time::parse_to_minutes("09:30PM").unwrap(), 1290);
    assert_eq!(time::parse_to_minutes("23:59").unwrap(), 1439);
}

#[test]
fn parse_to_minutes_rejects_malformed_values() {
    assert!(matches!(
        time::parse_to_minutes("13:00 PM"),
        Err(AppError::MalformedTime(_))
    ));
    assert!(matches!(
        time::parse_to_minutes("not a time"),
        Err(AppError::MalformedTime(_))
    ));
    assert!(matches!(
        time::parse_to_minutes(""),
        Err(AppError::MalformedTime(_))
    ));
}

#[test]
fn is_valid_12_hour_matches_creation_format() {
    assert!(time::is_valid_12_hour("12:08 AM"));
    assert!(time::is_valid_12_hour("9:05 pm"));
    assert!(time::is_valid_12_hour("09:05PM"));
    assert!(!time::is_valid_12_hour("13:00 PM"));
    assert!(!time::is_valid_12_hour("09:5 PM"));
    assert!(!time::is_valid_12_hour("09:00"));
}

#[test]
fn to_display_12_hour_converts_and_is_idempotent() {
    assert_eq!(time::to_display_12_hour("14:08"), "02:08 PM");
    assert_eq!(time::to_display_12_hour("00:15"), "12:15 AM");
    assert_eq!(time::to_display_12_hour("09:00 AM"), "09:00 AM");

    for v in ["14:08", "09:00 AM", "garbage"] {
        let once = time::to_display_12_hour(v);
        assert_eq!(time::to_display_12_hour(&once), once);
    }
}

// ---------------------------------------------------------------
// Entry validator
// ---------------------------------------------------------------

#[test]
fn validator_computes_pending() {
    let mut d = draft("Alice", "Bio Profiling", "09:00 AM", 10);
    d.completed = Some(4);
    let entry = validate::validate(d).unwrap();
    assert_eq!(entry.pending, 6);
    assert_eq!(entry.completed, 4);
}

#[test]
fn validator_accepts_completed_equal_to_total() {
    let mut d = draft("Alice", "Guidelines", "09:00 AM", 8);
    d.completed = Some(8);
    let entry = validate::validate(d).unwrap();
    assert_eq!(entry.pending, 0);
}

#[test]
fn validator_rejects_missing_fields_first() {
    let d = draft("   ", "Guidelines", "09:00 AM", 10);
    assert!(matches!(
        validate::validate(d),
        Err(AppError::MissingRequiredField("employee"))
    ));

    let d = draft("Alice", "", "09:00 AM", 10);
    assert!(matches!(
        validate::validate(d),
        Err(AppError::MissingRequiredField("task"))
    ));

    let d = draft("Alice", "Guidelines", "  ", 10);
    assert!(matches!(
        validate::validate(d),
        Err(AppError::MissingRequiredField("time"))
    ));
}

#[test]
fn validator_rejects_24_hour_time_at_creation() {
    let d = draft("Alice", "Guidelines", "14:30", 10);
    assert!(matches!(
        validate::validate(d),
        Err(AppError::InvalidTimeFormat(_))
    ));
}

#[test]
fn validator_rejects_zero_and_unset_completed() {
    let mut d = draft("Alice", "Guidelines", "09:00 AM", 10);
    d.completed = Some(0);
    assert!(matches!(
        validate::validate(d),
        Err(AppError::NonPositiveCompleted)
    ));

    let mut d = draft("Alice", "Guidelines", "09:00 AM", 10);
    d.completed = None;
    assert!(matches!(
        validate::validate(d),
        Err(AppError::NonPositiveCompleted)
    ));
}

#[test]
fn validator_rejects_completed_exceeding_total() {
    let mut d = draft("Alice", "Guidelines", "09:00 AM", 10);
    d.completed = Some(11);
    assert!(matches!(
        validate::validate(d),
        Err(AppError::CompletedExceedsTotal {
            completed: 11,
            total: 10
        })
    ));
}

#[test]
fn validator_rejects_negative_and_unset_tally() {
    let mut d = draft("Alice", "Guidelines", "09:00 AM", 10);
    d.tally = Some(-1);
    assert!(matches!(
        validate::validate(d),
        Err(AppError::NegativeCount)
    ));

    let mut d = draft("Alice", "Guidelines", "09:00 AM", 10);
    d.tally = None;
    assert!(matches!(
        validate::validate(d),
        Err(AppError::NegativeCount)
    ));
}

#[test]
fn validator_trims_text_fields() {
    let d = draft("  Alice  ", "Guidelines", " 09:00 AM ", 10);
    let entry = validate::validate(d).unwrap();
    assert_eq!(entry.employee, "Alice");
    assert_eq!(entry.time, "09:00 AM");
}

// ---------------------------------------------------------------
// Filter pipeline
// ---------------------------------------------------------------

fn sample_set() -> Vec<Entry> {
    vec![
        entry(
            1,
            "Alice",
            "Bio Profiling",
            "09:00 AM",
            10,
            4,
            2,
            "2024-01-01",
            "2024-01-01T09:00:00+00:00",
        ),
        entry(
            2,
            "Bob",
            "Bio Profiling",
            "10:00 AM",
            8,
            8,
            1,
            "2024-01-02",
            "2024-01-02T10:00:00+00:00",
        ),
        entry(
            3,
            "Alice",
            "Guidelines",
            "14:30",
            12,
            6,
            0,
            "2024-01-03",
            "2024-01-03T14:30:00+00:00",
        ),
        entry(
            4,
            "Carol",
            "Guidelines",
            "broken",
            5,
            5,
            3,
            "2024-01-04",
            "2024-01-04T08:00:00+00:00",
        ),
    ]
}

#[test]
fn empty_spec_is_identity() {
    let entries = sample_set();
    let out = filter::apply(&entries, &FilterSpec::default());
    assert_eq!(out.len(), entries.len());
    let ids: Vec<i64> = out.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn predicates_combine_with_and() {
    let entries = sample_set();
    let spec = FilterSpec {
        from_date: Some(date("2024-01-01")),
        to_date: Some(date("2024-01-03")),
        employee: Some("Alice".to_string()),
        ..FilterSpec::default()
    };
    let out = filter::apply(&entries, &spec);
    let ids: Vec<i64> = out.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn removing_a_filter_never_shrinks_the_result() {
    let entries = sample_set();
    let full = FilterSpec {
        from_date: Some(date("2024-01-02")),
        employee: Some("Bob".to_string()),
        ..FilterSpec::default()
    };
    let narrowed = filter::apply(&entries, &full).len();

    let without_employee = FilterSpec {
        from_date: Some(date("2024-01-02")),
        ..FilterSpec::default()
    };
    let without_date = FilterSpec {
        employee: Some("Bob".to_string()),
        ..FilterSpec::default()
    };

    assert!(filter::apply(&entries, &without_employee).len() >= narrowed);
    assert!(filter::apply(&entries, &without_date).len() >= narrowed);
}

#[test]
fn search_matches_employee_or_task_case_insensitively() {
    let entries = sample_set();
    let spec = FilterSpec {
        search: Some("  GUIDE ".to_string()),
        ..FilterSpec::default()
    };
    let ids: Vec<i64> = filter::apply(&entries, &spec).iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![3, 4]);

    let spec = FilterSpec {
        search: Some("bob".to_string()),
        ..FilterSpec::default()
    };
    let ids: Vec<i64> = filter::apply(&entries, &spec).iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![2]);
}

#[test]
fn empty_search_is_a_no_op() {
    let entries = sample_set();
    let spec = FilterSpec {
        search: Some("   ".to_string()),
        employee: Some(String::new()),
        ..FilterSpec::default()
    };
    assert_eq!(filter::apply(&entries, &spec).len(), entries.len());
}

#[test]
fn time_bounds_compare_normalized_minutes_across_notations() {
    let entries = sample_set();
    // 09:30 AM..15:00 — catches Bob (10:00 AM) and the 24-hour row (14:30).
    let spec = FilterSpec {
        from_minute: Some(570),
        to_minute: Some(900),
        ..FilterSpec::default()
    };
    let ids: Vec<i64> = filter::apply(&entries, &spec).iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![2, 3]);
}

#[test]
fn active_time_bound_excludes_unnormalizable_rows() {
    let entries = sample_set();
    let spec = FilterSpec {
        from_minute: Some(0),
        ..FilterSpec::default()
    };
    let out = filter::apply(&entries, &spec);
    assert!(out.iter().all(|e| e.id != 4));
    assert_eq!(out.len(), 3);
}

#[test]
fn date_bounds_are_inclusive() {
    let entries = sample_set();
    let spec = FilterSpec {
        from_date: Some(date("2024-01-02")),
        to_date: Some(date("2024-01-02")),
        ..FilterSpec::default()
    };
    let ids: Vec<i64> = filter::apply(&entries, &spec).iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![2]);
}

// ---------------------------------------------------------------
// Aggregator
// ---------------------------------------------------------------

#[test]
fn grand_totals_sum_every_column() {
    let entries = sample_set();
    let t = aggregate::grand_totals(&entries);
    assert_eq!(t.total, 35);
    assert_eq!(t.completed, 23);
    assert_eq!(t.pending, 12);
    assert_eq!(t.tally, 6);
}

#[test]
fn grand_totals_add_up_across_partitions() {
    let entries = sample_set();
    let whole = aggregate::grand_totals(&entries);
    let left = aggregate::grand_totals(&entries[..2]);
    let right = aggregate::grand_totals(&entries[2..]);
    assert_eq!(whole.completed, left.completed + right.completed);
    assert_eq!(whole.total, left.total + right.total);
    assert_eq!(whole.tally, left.tally + right.tally);
}

#[test]
fn per_task_total_keeps_the_last_seen_row() {
    // Two rows for the same task with different totals: the group total
    // tracks the later row, so pending can go negative.
    let entries = vec![
        entry(
            1,
            "A",
            "X",
            "09:00 AM",
            10,
            4,
            0,
            "2024-01-01",
            "2024-01-01T09:00:00+00:00",
        ),
        entry(
            2,
            "B",
            "X",
            "10:00 AM",
            8,
            8,
            0,
            "2024-01-02",
            "2024-01-02T10:00:00+00:00",
        ),
    ];

    let summary = aggregate::per_task_summary(&entries);
    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].task, "X");
    assert_eq!(summary[0].completed_sum, 12);
    assert_eq!(summary[0].total, 8);
    assert_eq!(summary[0].pending, -4);
}

#[test]
fn per_task_groups_in_first_seen_order() {
    let entries = sample_set();
    let summary = aggregate::per_task_summary(&entries);
    let tasks: Vec<&str> = summary.iter().map(|s| s.task.as_str()).collect();
    assert_eq!(tasks, vec!["Bio Profiling", "Guidelines"]);

    let guidelines = &summary[1];
    assert_eq!(guidelines.completed_sum, 11);
    assert_eq!(guidelines.tally_sum, 3);
    // last-seen total for Guidelines is row 4's.
    assert_eq!(guidelines.total, 5);
    assert_eq!(guidelines.pending, -6);
}

// ---------------------------------------------------------------
// Recency sorter
// ---------------------------------------------------------------

#[test]
fn by_created_desc_orders_most_recent_first() {
    let mut entries = sample_set();
    sort::by_created_desc(&mut entries);
    let ids: Vec<i64> = entries.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![4, 3, 2, 1]);
}

#[test]
fn sort_is_stable_for_identical_timestamps() {
    let mut entries = vec![
        entry(
            1,
            "A",
            "X",
            "09:00 AM",
            1,
            1,
            0,
            "2024-01-01",
            "2024-01-01T09:00:00+00:00",
        ),
        entry(
            2,
            "B",
            "X",
            "09:00 AM",
            1,
            1,
            0,
            "2024-01-01",
            "2024-01-01T09:00:00+00:00",
        ),
        entry(
            3,
            "C",
            "X",
            "09:00 AM",
            1,
            1,
            0,
            "2024-01-01",
            "2024-01-01T09:00:00+00:00",
        ),
    ];
    sort::by_created_desc(&mut entries);
    let ids: Vec<i64> = entries.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn most_recent_truncates_after_sorting() {
    let mut entries = Vec::new();
    for i in 0..15 {
        entries.push(entry(
            i,
            "A",
            "X",
            "09:00 AM",
            1,
            1,
            0,
            "2024-01-01",
            &format!("2024-01-01T09:{:02}:00+00:00", i),
        ));
    }
    let recent = sort::most_recent(&entries, sort::RECENT_LIMIT);
    assert_eq!(recent.len(), 10);
    assert_eq!(recent[0].id, 14);
    assert_eq!(recent[9].id, 5);
}

#[test]
fn by_time_of_day_sorts_ascending_with_malformed_last() {
    let mut entries = sample_set();
    sort::by_time_of_day(&mut entries);
    let ids: Vec<i64> = entries.iter().map(|e| e.id).collect();
    // 09:00 AM, 10:00 AM, 14:30, then the unnormalizable row.
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

// ---------------------------------------------------------------
// Authentication seam
// ---------------------------------------------------------------

#[test]
fn config_authenticator_checks_the_credential_pair() {
    use tasktally::config::Config;
    use tasktally::core::auth::{Authenticator, ConfigAuthenticator};

    let cfg = Config {
        admin_user: "admin".to_string(),
        admin_password: "secret".to_string(),
        ..Config::default()
    };
    let auth = ConfigAuthenticator::new(&cfg);

    let session = auth.authenticate("admin", "secret").unwrap();
    assert_eq!(session.username, "admin");

    assert!(matches!(
        auth.authenticate("admin", "wrong"),
        Err(AppError::AuthFailed)
    ));
    assert!(matches!(
        auth.authenticate("nobody", "secret"),
        Err(AppError::AuthFailed)
    ));
}

// ---------------------------------------------------------------
// End to end through the facade
// ---------------------------------------------------------------

#[test]
fn report_reproduces_the_shared_task_scenario() {
    let entries = vec![
        entry(
            1,
            "A",
            "X",
            "09:00 AM",
            10,
            4,
            0,
            "2024-01-01",
            "2024-01-01T09:00:00+00:00",
        ),
        entry(
            2,
            "B",
            "X",
            "10:00 AM",
            8,
            8,
            0,
            "2024-01-02",
            "2024-01-02T10:00:00+00:00",
        ),
    ];

    let spec = FilterSpec {
        task: Some("X".to_string()),
        from_date: Some(date("2024-01-01")),
        to_date: Some(date("2024-01-02")),
        ..FilterSpec::default()
    };

    let report = Core::build_report(&entries, &spec);

    assert_eq!(report.rows.len(), 2);
    assert_eq!(report.totals.completed, 12);

    // Aggregation follows snapshot order even though the rows are
    // displayed most-recent-first.
    assert_eq!(report.rows[0].id, 2);
    assert_eq!(report.per_task[0].total, 8);
    assert_eq!(report.per_task[0].pending, -4);
}
