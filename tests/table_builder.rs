mod common;

use common::{StubSource, dp};
use kep_dash::{SeriesTable, build_table};

fn sample_source() -> StubSource {
    StubSource::default().with_points(vec![
        dp("2020-03-31", "q", "GDP_yoy", 1.1),
        dp("2020-03-31", "q", "CPI_rog", 2.2),
    ])
}

#[test]
fn single_shared_date_gives_one_row() {
    let source = sample_source();
    let table = build_table(&source, "q", "GDP_yoy", "CPI_rog").unwrap();

    assert_eq!(table.len(), 1);
    let row = table.rows()[0];
    assert_eq!(row.date.to_string(), "2020-03-31");
    assert_eq!(row.line1, Some(1.1));
    assert_eq!(row.line2, Some(2.2));
    assert_eq!(table.names(), ("GDP_yoy", "CPI_rog"));
    assert_eq!(table.title(), "GDP_yoy, CPI_rog");
}

#[test]
fn issues_one_request_per_series() {
    let source = sample_source();
    build_table(&source, "q", "GDP_yoy", "CPI_rog").unwrap();
    assert_eq!(
        source.calls(),
        vec!["datapoints/q/GDP_yoy", "datapoints/q/CPI_rog"]
    );
}

#[test]
fn date_in_one_series_only_leaves_other_cell_missing() {
    let source = StubSource::default().with_points(vec![
        dp("2020-06-30", "q", "GDP_yoy", 1.3),
        dp("2020-03-31", "q", "GDP_yoy", 1.1),
        dp("2020-03-31", "q", "CPI_rog", 2.2),
        dp("2019-12-31", "q", "CPI_rog", 2.0),
    ]);
    let table = build_table(&source, "q", "GDP_yoy", "CPI_rog").unwrap();

    let dates: Vec<String> = table.rows().iter().map(|r| r.date.to_string()).collect();
    assert_eq!(dates, vec!["2019-12-31", "2020-03-31", "2020-06-30"]);

    assert_eq!(table.rows()[0].line1, None);
    assert_eq!(table.rows()[0].line2, Some(2.0));
    assert_eq!(table.rows()[2].line1, Some(1.3));
    assert_eq!(table.rows()[2].line2, None);

    assert_eq!(table.line1().len(), 2);
    assert_eq!(table.line2().len(), 2);
}

#[test]
fn identical_arguments_give_identical_tables() {
    let source = sample_source();
    let a = build_table(&source, "q", "GDP_yoy", "CPI_rog").unwrap();
    let b = build_table(&source, "q", "GDP_yoy", "CPI_rog").unwrap();
    assert_eq!(a, b);
}

#[test]
fn same_name_twice_duplicates_the_column() {
    let source = sample_source();
    let table = build_table(&source, "q", "GDP_yoy", "GDP_yoy").unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.rows()[0].line1, Some(1.1));
    assert_eq!(table.rows()[0].line2, Some(1.1));
}

#[test]
fn series_without_data_yields_empty_column() {
    let source = sample_source();
    let table = build_table(&source, "q", "GDP_yoy", "NO_SUCH_SERIES").unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.rows()[0].line2, None);

    let empty = build_table(&source, "a", "GDP_yoy", "CPI_rog").unwrap();
    assert!(empty.is_empty());
    assert_eq!(empty.title(), "GDP_yoy, CPI_rog");
}

#[test]
fn fetch_failure_propagates() {
    let mut source = sample_source();
    source.failing.push("CPI_rog".into());
    assert!(build_table(&source, "q", "GDP_yoy", "CPI_rog").is_err());
}

#[test]
fn ranges_cover_both_columns() {
    let table = SeriesTable::pivot(
        vec![
            dp("2020-03-31", "q", "A", -1.5),
            dp("2020-09-30", "q", "B", 4.0),
        ],
        "A",
        "B",
    );
    let (first, last) = table.date_range().unwrap();
    assert_eq!(first.to_string(), "2020-03-31");
    assert_eq!(last.to_string(), "2020-09-30");
    assert_eq!(table.value_range(), Some((-1.5, 4.0)));
}
