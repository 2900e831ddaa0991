// UNRaf Academy - tests/e2e_filtering.rs
//
// End-to-end tests for the catalogue filtering pipeline.
//
// These tests exercise the embedded sample catalogue, real JSON catalogue
// files written to disk, real chrono date parsing, and the exporters. The
// path covered runs from raw catalogue JSON to rendered, filtered output.

use chrono::NaiveDate;
use unraf_academy::app::actions::{self, ActionContext};
use unraf_academy::app::browse::{self, BrowseOptions};
use unraf_academy::app::state::ListingState;
use unraf_academy::core::catalog::{self, Catalog, Listing};
use unraf_academy::core::export::ExportFormat;
use unraf_academy::core::filter::{apply_filters, filter_records, Query};
use unraf_academy::core::model::Record;
use unraf_academy::util::error::CatalogError;

// =============================================================================
// Helpers
// =============================================================================

fn sample() -> Catalog {
    Catalog::builtin().expect("built-in catalogue must parse")
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn ids<R: Record>(records: &[&R]) -> Vec<u32> {
    records.iter().map(|r| r.id()).collect()
}

fn render(catalog: &Catalog, listing: Listing, query: &Query, format: ExportFormat) -> String {
    let mut out = Vec::new();
    let options = BrowseOptions {
        format,
        limit: 0,
        target: "test buffer",
    };
    browse::browse(catalog, listing, query, options, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn write_catalog(dir: &tempfile::TempDir, json: &str) -> std::path::PathBuf {
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, json).unwrap();
    path
}

// =============================================================================
// Built-in catalogue
// =============================================================================

#[test]
fn e2e_builtin_catalogue_has_every_listing() {
    let catalog = sample();
    for listing in Listing::all() {
        assert!(
            catalog.len_of(*listing) > 0,
            "listing {listing} is empty in the sample catalogue"
        );
    }
    assert_eq!(catalog.len_of(Listing::Users), 6);
    assert_eq!(catalog.len_of(Listing::Resources), 5);
}

#[test]
fn e2e_empty_query_returns_every_record_in_order() {
    let catalog = sample();
    let query = Query::default();
    assert!(query.is_empty());

    let indices = apply_filters(&catalog.articles, &query);
    assert_eq!(indices, (0..catalog.articles.len()).collect::<Vec<_>>());
}

// =============================================================================
// Filtering semantics
// =============================================================================

#[test]
fn e2e_text_search_is_case_insensitive() {
    let catalog = sample();
    let query = Query::default().with_text("maría");

    let users = filter_records(&catalog.users, &query);
    assert_eq!(ids(&users), vec![1]);
    assert_eq!(users[0].name, "María González");

    let upper = Query::default().with_text("MARÍA GONZÁLEZ");
    assert_eq!(ids(&filter_records(&catalog.users, &upper)), vec![1]);
}

#[test]
fn e2e_resource_type_equality_and_match_all() {
    let catalog = sample();

    let datasets = filter_records(&catalog.resources, &Query::default().with_category("Dataset"));
    assert_eq!(ids(&datasets), vec![2]);
    assert!(datasets.iter().all(|r| r.kind.label() == "Dataset"));

    let everything = filter_records(&catalog.resources, &Query::default().with_category("all"));
    assert_eq!(everything.len(), catalog.resources.len());

    // Equality is exact: no case folding on facets.
    let lowercase = filter_records(&catalog.resources, &Query::default().with_category("dataset"));
    assert!(lowercase.is_empty());

    let papers = filter_records(&catalog.downloads, &Query::default().with_category("Paper"));
    assert_eq!(ids(&papers), vec![1, 4]);

    // The second dropdown agrees with the first on single-facet listings.
    let both = Query::default().with_category("Algorithm").with_kind("Algorithm");
    assert_eq!(ids(&filter_records(&catalog.favorites, &both)), vec![7]);
}

#[test]
fn e2e_blank_cli_facets_mean_no_constraint() {
    let catalog = sample();
    let query = Query::default()
        .with_text("")
        .with_category("")
        .with_kind("  ")
        .with_date_from_str("")
        .with_date_to_str("");
    assert!(query.is_empty());
    assert_eq!(
        filter_records(&catalog.uploads, &query).len(),
        catalog.uploads.len()
    );

    let sentinel = Query::default().with_category("all").with_kind("all");
    assert!(sentinel.is_empty());
}

#[test]
fn e2e_date_range_is_inclusive_on_both_ends() {
    let catalog = sample();
    let query = Query::default()
        .with_date_from(day(2024, 1, 10))
        .with_date_to(day(2024, 1, 15));

    let matched = filter_records(&catalog.resources, &query);
    assert_eq!(ids(&matched), vec![3, 4]);
}

#[test]
fn e2e_combined_predicates_are_conjunctive() {
    let catalog = sample();
    let query = Query::default()
        .with_text("Carlos")
        .with_category("Estudiante")
        .with_date_from_str("2024-01-01");

    let matched = filter_records(&catalog.users, &query);
    assert_eq!(ids(&matched), vec![2]);

    // Pedro is a student but neither named Carlos nor registered in 2024.
    let students = filter_records(&catalog.users, &Query::default().with_category("Estudiante"));
    assert_eq!(ids(&students), vec![2, 5]);
}

#[test]
fn e2e_month_precision_dates_compare_as_first_of_month() {
    let catalog = sample();
    let query = Query::default().with_date_from_str("2024-01-01");
    assert_eq!(ids(&filter_records(&catalog.papers, &query)), vec![1]);

    let november = Query::default()
        .with_date_from_str("2023-11-01")
        .with_date_to_str("2023-11-30");
    assert_eq!(ids(&filter_records(&catalog.papers, &november)), vec![2]);
}

#[test]
fn e2e_unparseable_bound_is_ignored() {
    let catalog = sample();
    let query = Query::default().with_date_from_str("not a date");
    assert!(query.is_empty());
    assert_eq!(
        filter_records(&catalog.logs, &query).len(),
        catalog.logs.len()
    );
}

#[test]
fn e2e_listing_without_a_facet_ignores_that_constraint() {
    let catalog = sample();
    // Algorithms carry no category and datasets carry no date.
    let category = Query::default().with_category("Clima");
    assert_eq!(
        filter_records(&catalog.algorithms, &category).len(),
        catalog.algorithms.len()
    );

    let range = Query::default().with_date_to(day(2000, 1, 1));
    assert_eq!(
        filter_records(&catalog.datasets, &range).len(),
        catalog.datasets.len()
    );
}

#[test]
fn e2e_filtering_is_idempotent_and_monotonic() {
    let catalog = sample();
    let broad = Query::default().with_text("a");
    let narrow = broad.clone().with_category("Institucional");

    let once: Vec<_> = filter_records(&catalog.articles, &broad)
        .into_iter()
        .cloned()
        .collect();
    let twice: Vec<_> = filter_records(&once, &broad).into_iter().cloned().collect();
    assert_eq!(once, twice);

    let narrowed = filter_records(&catalog.articles, &narrow);
    assert!(narrowed.len() <= once.len());
    assert!(narrowed.iter().all(|a| once.contains(a)));
}

#[test]
fn e2e_regex_pattern_narrows_text_matches() {
    let catalog = sample();
    let mut query = Query::default();
    query.set_pattern(r"(?i)^milkcast").unwrap();

    let models = filter_records(&catalog.forecast_models, &query);
    assert_eq!(ids(&models), vec![1]);

    let mut bad = Query::default();
    assert!(bad.set_pattern("(unclosed").is_err());
}

// =============================================================================
// Catalogue files on disk
// =============================================================================

#[test]
fn e2e_catalogue_from_disk_fails_closed_on_bad_dates() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(
        &dir,
        r#"{
            "articles": [
                {"id": 1, "title": "Jornada abierta", "excerpt": "", "date": "2024-02-01",
                 "author": "Extensión", "category": "Eventos"},
                {"id": 2, "title": "Próximamente", "excerpt": "", "date": "pronto",
                 "author": "Extensión", "category": "Eventos"}
            ]
        }"#,
    );

    let catalog = catalog::load_catalog(&path).unwrap();
    assert_eq!(catalog.len_of(Listing::Articles), 2);
    assert_eq!(catalog.len_of(Listing::Users), 0);

    // Without a range the undated article is still listed.
    assert_eq!(filter_records(&catalog.articles, &Query::default()).len(), 2);

    let ranged = Query::default().with_date_from_str("2024-01-01");
    assert_eq!(ids(&filter_records(&catalog.articles, &ranged)), vec![1]);
}

#[test]
fn e2e_malformed_catalogue_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(&dir, "{ \"users\": [ ");
    match catalog::load_catalog(&path) {
        Err(CatalogError::JsonParse { .. }) => {}
        other => panic!("expected JsonParse error, got {other:?}"),
    }

    let missing = dir.path().join("missing.json");
    assert!(matches!(
        catalog::load_catalog(&missing),
        Err(CatalogError::Io { .. })
    ));
}

// =============================================================================
// Rendering and admin flow
// =============================================================================

#[test]
fn e2e_browse_renders_filtered_csv() {
    let catalog = sample();
    let query = Query::default().with_kind("Paper");
    let csv = render(&catalog, Listing::Downloads, &query, ExportFormat::Csv);

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "id,name,date,kind");
    assert_eq!(lines.len(), 3, "csv output: {csv}");
    assert!(lines[1].starts_with("1,"));
    assert!(lines[2].starts_with("4,"));
}

#[test]
fn e2e_blocking_a_user_shows_in_state_and_audit_log() {
    let mut catalog = sample();
    let ctx = ActionContext {
        actor: "Admin".to_string(),
        at: day(2024, 2, 1).and_hms_opt(9, 30, 0).unwrap(),
    };

    let notice = actions::block_user(&mut catalog, &ctx, 2);
    assert!(!notice.is_error(), "unexpected notice: {notice}");

    let mut state = ListingState::new(catalog.users.clone());
    state.set_query(Query::default().with_kind("Bloqueado"));
    let blocked: Vec<u32> = state.visible().map(|u| u.id).collect();
    assert_eq!(blocked, vec![2, 5]);

    let audit = Query::default()
        .with_kind("Block")
        .with_date_from(day(2024, 2, 1));
    let entries = filter_records(&catalog.logs, &audit);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].user, "Admin");
    assert_eq!(entries[0].date, "2024-02-01 09:30");
}
