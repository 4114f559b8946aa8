//! Integration tests for the listing cleaner.
//!
//! These tests run the public API end to end over CSV fixtures and check the
//! properties every cleaned dataset must hold.

use listing_cleaner::{CleanerConfig, CleaningError, ListingCleaner, OTHER_BRAND, clean};
use polars::io::csv::read::CsvReadOptions;
use polars::prelude::*;
use pretty_assertions::assert_eq;
use std::collections::HashSet;
use std::path::PathBuf;

// ============================================================================
// Helper Functions
// ============================================================================

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn load_csv(filename: &str) -> DataFrame {
    let path = fixtures_path().join(filename);
    CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path))
        .expect("Failed to create CSV reader")
        .finish()
        .expect("Failed to read CSV file")
}

fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .into_iter()
        .map(|s| s.to_string())
        .collect()
}

fn str_col(df: &DataFrame, name: &str) -> Vec<String> {
    df.column(name)
        .unwrap()
        .as_materialized_series()
        .str()
        .unwrap()
        .into_iter()
        .map(|v| v.expect("unexpected null").to_string())
        .collect()
}

fn f64_col(df: &DataFrame, name: &str) -> Vec<f64> {
    df.column(name)
        .unwrap()
        .as_materialized_series()
        .f64()
        .unwrap()
        .into_iter()
        .map(|v| v.expect("unexpected null"))
        .collect()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

/// Check every invariant a cleaned listing dataset must satisfy.
///
/// Row uniqueness is not among them: dedup compares full input rows, so rows
/// that only differed in a link column or a rare brand can end up equal.
fn assert_clean_invariants(input: &DataFrame, output: &DataFrame, top_n: usize) {
    // no nulls
    for col in output.get_columns() {
        assert_eq!(col.null_count(), 0, "column '{}' has nulls", col.name());
    }

    // column set
    let expected: Vec<String> = column_names(input)
        .into_iter()
        .filter(|c| c != "image_url" && c != "product_url")
        .collect();
    assert_eq!(column_names(output), expected);

    // brand cardinality
    let brands: HashSet<String> = str_col(output, "brand").into_iter().collect();
    assert!(
        brands.len() <= top_n + 1,
        "{} distinct brands for top {}",
        brands.len(),
        top_n
    );

    // sorted by title
    let titles = str_col(output, "title");
    assert!(
        titles.windows(2).all(|w| w[0] <= w[1]),
        "titles not sorted: {:?}",
        titles
    );
}

// ============================================================================
// Fixture Tests
// ============================================================================

#[test]
fn test_clean_listings_fixture() {
    let df = load_csv("listings.csv");

    let result = ListingCleaner::new(CleanerConfig::new(2))
        .clean(&df)
        .expect("cleaning should succeed");
    let out = &result.data;

    assert_clean_invariants(&df, out, 2);
    assert_eq!(
        str_col(out, "title"),
        vec![
            "Backpack",
            "Charger",
            "Keyboard",
            "Phone Case",
            "Screen Protector",
            "USB Cable",
            "Water Bottle",
            "Webcam",
            "Wireless Mouse",
        ]
    );
    // Logi (3) then Anker (2) which ties with Spigen but appears first
    assert_eq!(
        str_col(out, "brand"),
        vec![
            "Other", "Anker", "Logi", "Other", "Other", "Anker", "Other", "Logi", "Logi"
        ]
    );
}

#[test]
fn test_clean_listings_fixture_imputes_with_medians() {
    let df = load_csv("listings.csv");

    let result = ListingCleaner::default().clean(&df).unwrap();
    let summary = &result.summary;

    // price: 10 observed, middle values 22.0 and 25.99
    assert_close(summary.price_median.unwrap(), 23.995);
    // rating: 10 observed, middle values 4.4 and 4.5
    assert_close(summary.rating_median.unwrap(), 4.45);
    assert_eq!(summary.prices_imputed, 2);
    assert_eq!(summary.ratings_imputed, 2);

    let titles = str_col(&result.data, "title");
    let prices = f64_col(&result.data, "price");
    let ratings = f64_col(&result.data, "rating");
    let webcam = titles.iter().position(|t| t == "Webcam").unwrap();
    assert_close(prices[webcam], 23.995);
    assert_close(ratings[webcam], 4.45);
}

#[test]
fn test_clean_listings_fixture_summary_counts() {
    let df = load_csv("listings.csv");

    let summary = ListingCleaner::new(CleanerConfig::new(2))
        .clean(&df)
        .unwrap()
        .summary;

    assert_eq!(summary.rows_before, 12);
    assert_eq!(summary.rows_after, 9);
    assert_eq!(summary.rows_removed, 3);
    // Desk Lamp (no brand) and Yoga Mat (no category)
    assert_eq!(summary.incomplete_rows_removed, 2);
    assert_eq!(summary.duplicate_rows_removed, 1);
    assert_eq!(summary.columns_before, 7);
    assert_eq!(summary.columns_after, 5);
    assert_eq!(summary.kept_brands, vec!["Logi", "Anker"]);
    assert_eq!(summary.brands_collapsed, 4);
}

#[test]
fn test_clean_invariants_hold_for_any_brand_count() {
    let df = load_csv("listings.csv");

    for top_n in [0, 1, 2, 3, 5, 25] {
        let out = clean(&df, top_n).unwrap();
        assert_clean_invariants(&df, &out, top_n);
    }
}

#[test]
fn test_clean_with_zero_brands_labels_everything_other() {
    let df = load_csv("listings.csv");

    let out = clean(&df, 0).unwrap();

    assert!(str_col(&out, "brand").iter().all(|b| b == OTHER_BRAND));
}

#[test]
fn test_clean_all_null_price_fixture_fails() {
    let df = load_csv("all_null_price.csv");

    let err = clean(&df, 25).unwrap_err();

    assert_eq!(err.error_code(), "EMPTY_COLUMN");
    assert!(err.is_data_contract_violation());
}

#[test]
fn test_clean_missing_link_columns_fails_up_front() {
    let df = load_csv("missing_links.csv");

    match clean(&df, 25) {
        Err(CleaningError::MissingColumns(cols)) => {
            assert_eq!(cols, vec!["image_url", "product_url"]);
        }
        other => panic!("expected MissingColumns, got {:?}", other),
    }
}

// ============================================================================
// In-Memory Scenarios
// ============================================================================

#[test]
fn test_already_clean_dataset_is_only_sorted() {
    let df = df![
        "title" => ["mug", "lamp", "chair"],
        "brand" => ["Ikea", "Muji", "Ikea"],
        "price" => [5.0, 20.0, 45.0],
        "rating" => [4.1, 3.9, 4.4],
        "image_url" => ["i1", "i2", "i3"],
        "product_url" => ["p1", "p2", "p3"],
    ]
    .unwrap();

    let out = clean(&df, 25).unwrap();

    assert_eq!(str_col(&out, "title"), vec!["chair", "lamp", "mug"]);
    assert_eq!(str_col(&out, "brand"), vec!["Ikea", "Muji", "Ikea"]);
    assert_eq!(f64_col(&out, "price"), vec![45.0, 20.0, 5.0]);
    assert_eq!(column_names(&out), vec!["title", "brand", "price", "rating"]);
}

#[test]
fn test_two_row_scenario() {
    let df = df![
        "price" => [Some(10.0), None],
        "rating" => [None, Some(4.0)],
        "brand" => ["A", "B"],
        "title" => ["b", "a"],
        "image_url" => ["x", "x2"],
        "product_url" => ["y", "y2"],
    ]
    .unwrap();

    let out = clean(&df, 1).unwrap();

    assert_eq!(str_col(&out, "title"), vec!["a", "b"]);
    assert_eq!(str_col(&out, "brand"), vec!["Other", "A"]);
    assert_eq!(f64_col(&out, "price"), vec![10.0, 10.0]);
    assert_eq!(f64_col(&out, "rating"), vec![4.0, 4.0]);
    assert_clean_invariants(&df, &out, 1);
}

#[test]
fn test_rows_equal_after_brand_collapse_are_kept() {
    let df = df![
        "title" => ["t", "t", "t", "t"],
        "brand" => ["A", "A", "B", "C"],
        "price" => [1.0, 1.0, 1.0, 1.0],
        "rating" => [5.0, 5.0, 5.0, 5.0],
        "image_url" => ["i", "i", "i", "i"],
        "product_url" => ["p", "p", "p", "p"],
    ]
    .unwrap();

    let result = ListingCleaner::new(CleanerConfig::new(1)).clean(&df).unwrap();
    let out = &result.data;

    // Only the second "A" row is a duplicate of a full input row
    assert_eq!(result.summary.duplicate_rows_removed, 1);
    assert_eq!(str_col(out, "brand"), vec!["A", "Other", "Other"]);
    let unique = out
        .unique_stable(None, UniqueKeepStrategy::First, None)
        .unwrap();
    assert_eq!(unique.height(), 2);
    assert_clean_invariants(&df, out, 1);
}

#[test]
fn test_listings_fixture_output_has_no_duplicate_rows() {
    let df = load_csv("listings.csv");

    let out = clean(&df, 25).unwrap();
    let unique = out
        .unique_stable(None, UniqueKeepStrategy::First, None)
        .unwrap();

    assert_eq!(unique.height(), out.height());
}

#[test]
fn test_input_is_not_modified() {
    let df = load_csv("listings.csv");
    let before = df.clone();

    let _ = clean(&df, 2).unwrap();

    assert!(df.equals_missing(&before));
}

#[test]
fn test_summary_serializes_for_reports() {
    let df = load_csv("listings.csv");

    let summary = ListingCleaner::default().clean(&df).unwrap().summary;
    let json = serde_json::to_value(&summary).unwrap();

    assert_eq!(json["rows_after"], 9);
    assert_eq!(json["dropped_columns"][0], "image_url");
    assert_eq!(json["actions"][0]["action_type"], "value_imputed");
}
