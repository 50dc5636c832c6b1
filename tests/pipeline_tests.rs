//! Library-level tests for the normalize → filter → aggregate pipeline.

use chrono::NaiveDate;
use wodash::core::charts::{status_by_type, status_distribution, top_entities, weekly_volume};
use wodash::core::filters::{apply_filters, search};
use wodash::core::kpi::{compute_delta, compute_kpis, previous_window};
use wodash::core::normalize::normalize;
use wodash::models::filter::{DimFilter, FilterSelection};
use wodash::models::kpi::KpiSet;
use wodash::models::record::{Dataset, RawRecord};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("test date")
}

fn raw(id: &str, date: Option<&str>, status: Option<&str>) -> RawRecord {
    RawRecord {
        id: Some(id.to_string()),
        notification_date: date.map(str::to_string),
        status: status.map(str::to_string),
        ..RawRecord::default()
    }
}

fn sample_dataset() -> Dataset {
    normalize(vec![
        RawRecord {
            station: Some("ST-01".into()),
            machine: Some("M-100".into()),
            notification_type: Some("Breakdown".into()),
            activity_by: Some("Alice".into()),
            mttr: Some("2.0".into()),
            ..raw("1", Some("01/15/2024 08:30"), Some("Completed"))
        },
        RawRecord {
            station: Some("ST-02".into()),
            machine: Some("M-200".into()),
            notification_type: Some("Preventive".into()),
            activity_by: Some("Bob".into()),
            mttr: Some("4.0".into()),
            ..raw("2", Some("01/20/2024 10:00"), Some("Open"))
        },
        RawRecord {
            station: Some("ST-01".into()),
            machine: Some("M-100".into()),
            notification_type: Some("Breakdown".into()),
            activity_by: Some("Alice".into()),
            mttr: Some("6.0".into()),
            ..raw("3", Some("02/01/2024 09:15"), Some("Completed"))
        },
    ])
}

// ---------------------------------------------------------------------
// Normalizer
// ---------------------------------------------------------------------

#[test]
fn normalize_parses_primary_and_lenient_date_formats() {
    let ds = normalize(vec![
        raw("1", Some("01/15/2024 08:30"), None),
        raw("2", Some("2024-01-15 08:30:00"), None),
        raw("3", Some("2024-01-15"), None),
        raw("4", Some("not a date"), None),
        raw("5", None, None),
    ]);

    assert_eq!(ds.records[0].notification_day(), Some(d("2024-01-15")));
    assert_eq!(ds.records[1].notification_day(), Some(d("2024-01-15")));
    assert_eq!(ds.records[2].notification_day(), Some(d("2024-01-15")));
    assert_eq!(ds.records[3].notification_date, None);
    assert_eq!(ds.records[4].notification_date, None);
}

#[test]
fn normalize_fills_unknown_and_coerces_numerics() {
    let ds = normalize(vec![RawRecord {
        mttr: Some("abc".into()),
        activity_duration: None,
        breakdown_hour: Some("1.5".into()),
        message: Some("  ".into()),
        ..RawRecord::default()
    }]);

    let r = &ds.records[0];
    assert_eq!(r.station, "Unknown");
    assert_eq!(r.machine, "Unknown");
    assert_eq!(r.equipment_part, "Unknown");
    assert_eq!(r.problem_type, "Unknown");
    assert_eq!(r.activity_by, "Unknown");
    assert_eq!(r.mttr, 0.0);
    assert_eq!(r.activity_duration, 0.0);
    assert_eq!(r.breakdown_hour, 1.5);
    // blank text cells count as missing
    assert_eq!(r.message, None);
    assert_eq!(r.id, 0);
}

#[test]
fn normalize_is_idempotent() {
    let first = normalize(vec![
        raw("7", Some("01/15/2024 08:30"), Some("Completed")),
        raw("x", Some("junk"), None),
        RawRecord {
            mttr: Some("2.5".into()),
            ..RawRecord::default()
        },
    ]);

    let second = normalize(first.to_raw());
    assert_eq!(second, first);
}

#[test]
fn normalize_empty_input_yields_empty_dataset() {
    assert!(normalize(Vec::new()).is_empty());
}

// ---------------------------------------------------------------------
// Filter set
// ---------------------------------------------------------------------

#[test]
fn identity_filter_returns_dataset_unchanged() {
    let ds = sample_dataset();
    let selection = FilterSelection {
        date_range: None,
        status: DimFilter::new(vec!["All".into()]),
        station: DimFilter::new(vec!["All".into()]),
        notification_type: DimFilter::new(vec!["All".into()]),
        staff: DimFilter::new(vec!["All".into()]),
    };

    assert_eq!(apply_filters(&ds, &selection), ds);
}

#[test]
fn wildcard_dominates_mixed_selection() {
    let ds = sample_dataset();
    let selection = FilterSelection {
        status: DimFilter::new(vec!["All".into(), "Open".into()]),
        ..FilterSelection::default()
    };

    assert_eq!(apply_filters(&ds, &selection).len(), 3);
}

#[test]
fn date_range_is_inclusive_of_both_endpoints() {
    let ds = sample_dataset();
    let selection = FilterSelection {
        date_range: Some((d("2024-01-01"), d("2024-01-31"))),
        ..FilterSelection::default()
    };

    let out = apply_filters(&ds, &selection);
    let ids: Vec<i64> = out.iter().map(|r| r.id).collect();
    // 2024-01-15 and 2024-01-20 pass, 2024-02-01 does not
    assert_eq!(ids, vec![1, 2]);

    let boundary = FilterSelection {
        date_range: Some((d("2024-01-15"), d("2024-02-01"))),
        ..FilterSelection::default()
    };
    assert_eq!(apply_filters(&ds, &boundary).len(), 3);
}

#[test]
fn date_range_drops_records_without_notification_date() {
    let ds = normalize(vec![
        raw("1", Some("01/15/2024 08:30"), Some("Open")),
        raw("2", None, Some("Open")),
    ]);
    let selection = FilterSelection {
        date_range: Some((d("2024-01-01"), d("2024-12-31"))),
        ..FilterSelection::default()
    };

    let out = apply_filters(&ds, &selection);
    assert_eq!(out.len(), 1);
    assert_eq!(out.records[0].id, 1);

    // without a range the dateless record stays visible
    assert_eq!(apply_filters(&ds, &FilterSelection::default()).len(), 2);
}

#[test]
fn categorical_filters_combine_with_and() {
    let ds = sample_dataset();
    let selection = FilterSelection {
        station: DimFilter::new(vec!["ST-01".into()]),
        staff: DimFilter::new(vec!["Alice".into()]),
        ..FilterSelection::default()
    };

    let out = apply_filters(&ds, &selection);
    assert_eq!(out.len(), 2);
    assert!(out.iter().all(|r| r.station == "ST-01"));
}

#[test]
fn empty_dataset_filters_to_empty() {
    let selection = FilterSelection {
        date_range: Some((d("2024-01-01"), d("2024-12-31"))),
        ..FilterSelection::default()
    };
    assert!(apply_filters(&Dataset::default(), &selection).is_empty());
}

#[test]
fn search_is_case_insensitive_and_literal() {
    let ds = sample_dataset();

    assert_eq!(search(&ds, "st-01").len(), 2);
    assert_eq!(search(&ds, "ALICE").len(), 2);
    assert_eq!(search(&ds, "preventive").len(), 1);
    // non-regex: '.' is a literal character, not a wildcard
    assert_eq!(search(&ds, "M.100").len(), 0);
    // empty term returns the view unchanged
    assert_eq!(search(&ds, "  "), ds);
}

// ---------------------------------------------------------------------
// KPIs and deltas
// ---------------------------------------------------------------------

#[test]
fn kpis_over_three_records() {
    let kpis = compute_kpis(&sample_dataset());

    assert_eq!(kpis.total_orders, 3);
    assert_eq!(kpis.completed_orders, 2);
    assert!((kpis.completion_rate - 200.0 / 3.0).abs() < 1e-9);
    assert!((kpis.avg_mttr - 4.0).abs() < 1e-9);
    assert_eq!(kpis.avg_duration, 0.0);
}

#[test]
fn kpis_of_empty_dataset_are_zero() {
    let kpis = compute_kpis(&Dataset::default());
    assert_eq!(kpis, KpiSet::default());
    assert_eq!(kpis.completion_rate, 0.0);
}

#[test]
fn completion_rate_stays_within_bounds() {
    let all_done = normalize(vec![
        raw("1", None, Some("Completed")),
        raw("2", None, Some("Completed")),
    ]);
    assert_eq!(compute_kpis(&all_done).completion_rate, 100.0);

    let none_done = normalize(vec![raw("1", None, Some("Open"))]);
    assert_eq!(compute_kpis(&none_done).completion_rate, 0.0);

    // status match is exact and case-sensitive
    let shouting = normalize(vec![raw("1", None, Some("COMPLETED"))]);
    assert_eq!(compute_kpis(&shouting).completed_orders, 0);
}

#[test]
fn delta_of_identical_kpi_sets_is_zero() {
    let a = compute_kpis(&sample_dataset());
    let delta = compute_delta(&a, Some(&a), true);

    assert_eq!(delta.total_orders, 0.0);
    assert_eq!(delta.completed_orders, 0.0);
    assert_eq!(delta.completion_rate, 0.0);
    assert_eq!(delta.avg_mttr, 0.0);
}

#[test]
fn delta_handles_zero_previous_and_absent_previous() {
    let current = compute_kpis(&sample_dataset());
    let empty = KpiSet::default();

    let delta = compute_delta(&current, Some(&empty), true);
    assert!(delta.total_orders.is_infinite());
    // 0 → 0 stays 0 rather than infinite
    assert_eq!(delta.avg_duration, 0.0);

    // absent previous period reports no change at all
    let none = compute_delta(&current, None, true);
    assert_eq!(none.total_orders, 0.0);

    // absolute mode is a plain difference
    let abs = compute_delta(&current, Some(&empty), false);
    assert_eq!(abs.total_orders, 3.0);
}

// ---------------------------------------------------------------------
// Previous window
// ---------------------------------------------------------------------

#[test]
fn previous_window_shifts_explicit_range_back_30_days() {
    let ds = normalize(vec![
        raw("1", Some("2024-01-10"), Some("Open")),
        raw("2", Some("2024-02-10"), Some("Open")),
    ]);
    let selection = FilterSelection {
        date_range: Some((d("2024-02-01"), d("2024-02-28"))),
        ..FilterSelection::default()
    };

    // previous window is [2024-01-02, 2024-01-29]
    let prev = previous_window(&ds, &selection);
    assert_eq!(prev.len(), 1);
    assert_eq!(prev.records[0].id, 1);
}

#[test]
fn previous_window_derived_from_max_notification_date() {
    // max date 2024-03-01 → window ends 2024-01-31 and spans the
    // preceding 30 days, i.e. [2024-01-01, 2024-01-31] inclusive
    let ds = normalize(vec![
        raw("1", Some("2024-03-01"), Some("Open")),
        raw("2", Some("2024-01-31"), Some("Open")),
        raw("3", Some("2024-01-01"), Some("Open")),
        raw("4", Some("2023-12-31"), Some("Open")),
        raw("5", Some("2024-02-15"), Some("Open")),
    ]);

    let prev = previous_window(&ds, &FilterSelection::default());
    let ids: Vec<i64> = prev.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 3]);
}

#[test]
fn previous_window_without_valid_dates_is_empty() {
    let ds = normalize(vec![raw("1", None, Some("Open")), raw("2", Some("junk"), None)]);
    assert!(previous_window(&ds, &FilterSelection::default()).is_empty());
}

#[test]
fn previous_window_carries_categorical_dimensions() {
    let ds = normalize(vec![
        raw("1", Some("2024-03-01"), Some("Open")),
        raw("2", Some("2024-01-15"), Some("Open")),
        raw("3", Some("2024-01-15"), Some("Completed")),
    ]);
    let selection = FilterSelection {
        status: DimFilter::new(vec!["Completed".into()]),
        ..FilterSelection::default()
    };

    let prev = previous_window(&ds, &selection);
    assert_eq!(prev.len(), 1);
    assert_eq!(prev.records[0].id, 3);
}

// ---------------------------------------------------------------------
// Chart aggregates
// ---------------------------------------------------------------------

#[test]
fn status_distribution_counts_descending_and_skips_missing() {
    let ds = normalize(vec![
        raw("1", None, Some("Open")),
        raw("2", None, Some("Completed")),
        raw("3", None, Some("Completed")),
        raw("4", None, None),
    ]);

    let dist = status_distribution(&ds);
    assert_eq!(dist.len(), 2);
    assert_eq!(dist[0].status, "Completed");
    assert_eq!(dist[0].count, 2);
    assert_eq!(dist[1].status, "Open");
    assert_eq!(dist[1].count, 1);
}

#[test]
fn status_by_type_emits_observed_combinations() {
    let ds = sample_dataset();
    let rows = status_by_type(&ds);

    assert_eq!(rows.len(), 2);
    assert!(
        rows.iter().any(|r| r.notification_type == "Breakdown"
            && r.status == "Completed"
            && r.count == 2)
    );
    assert!(
        rows.iter()
            .any(|r| r.notification_type == "Preventive" && r.status == "Open" && r.count == 1)
    );
}

#[test]
fn weekly_volume_buckets_by_iso_week_monday() {
    let ds = normalize(vec![
        RawRecord {
            notification_type: Some("Breakdown".into()),
            ..raw("1", Some("2024-01-17"), Some("Open"))
        },
        RawRecord {
            notification_type: Some("Breakdown".into()),
            ..raw("2", Some("2024-01-19"), Some("Open"))
        },
        RawRecord {
            notification_type: Some("Breakdown".into()),
            ..raw("3", Some("2024-01-22"), Some("Open"))
        },
        RawRecord {
            notification_type: Some("Breakdown".into()),
            ..raw("4", None, Some("Open"))
        },
    ]);

    let weeks = weekly_volume(&ds);
    assert_eq!(weeks.len(), 2);
    // Wed 2024-01-17 and Fri 2024-01-19 share the Monday 2024-01-15 bucket
    assert_eq!(weeks[0].week, d("2024-01-15"));
    assert_eq!(weeks[0].count, 2);
    assert_eq!(weeks[1].week, d("2024-01-22"));
    assert_eq!(weeks[1].count, 1);
}

#[test]
fn top_entities_caps_at_ten_with_stable_ties() {
    let mut rows = Vec::new();
    // one pair seen three times, one twice, twelve singletons
    for _ in 0..3 {
        rows.push(RawRecord {
            station: Some("ST-A".into()),
            machine: Some("M-1".into()),
            ..RawRecord::default()
        });
    }
    for _ in 0..2 {
        rows.push(RawRecord {
            station: Some("ST-B".into()),
            machine: Some("M-2".into()),
            ..RawRecord::default()
        });
    }
    for i in 0..12 {
        rows.push(RawRecord {
            station: Some(format!("ST-{:02}", i)),
            machine: Some("M-9".into()),
            ..RawRecord::default()
        });
    }

    let top = top_entities(&normalize(rows));
    assert_eq!(top.len(), 10);
    assert_eq!(top[0].entity, "ST-A - M-1");
    assert_eq!(top[0].count, 3);
    assert_eq!(top[1].entity, "ST-B - M-2");
    // ties resolved by first appearance in the input
    assert_eq!(top[2].entity, "ST-00 - M-9");
    assert!(top.windows(2).all(|w| w[0].count >= w[1].count));
}

#[test]
fn top_entities_uses_unknown_placeholder() {
    let ds = normalize(vec![RawRecord::default()]);
    let top = top_entities(&ds);
    assert_eq!(top[0].entity, "Unknown - Unknown");
}
