// UNRaf Academy - app/browse.rs
//
// Runs one query against one listing of the catalogue and hands the
// matching records to the exporter.

use crate::core::catalog::{Catalog, Listing};
use crate::core::export::{self, ExportFormat};
use crate::core::filter::{self, Query};
use crate::core::model::Record;
use crate::util::error::ExportError;
use serde::Serialize;
use std::fmt::Display;
use std::io::Write;

/// Counts reported after a listing has been rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowseSummary {
    /// Records in the listing before filtering.
    pub total: usize,
    /// Records passing the query.
    pub matched: usize,
    /// Records actually written (after the result limit).
    pub written: usize,
}

/// Options controlling how a filtered listing is written.
#[derive(Debug, Clone, Copy)]
pub struct BrowseOptions<'a> {
    pub format: ExportFormat,
    /// Maximum records to write; 0 = unlimited.
    pub limit: usize,
    /// Destination name used in error messages.
    pub target: &'a str,
}

/// Filter `listing` with `query` and write the result to `writer`.
pub fn browse<W: Write>(
    catalog: &Catalog,
    listing: Listing,
    query: &Query,
    options: BrowseOptions<'_>,
    writer: W,
) -> Result<BrowseSummary, ExportError> {
    let summary = match listing {
        Listing::Users => write_filtered(&catalog.users, query, options, writer),
        Listing::Resources => write_filtered(&catalog.resources, query, options, writer),
        Listing::Logs => write_filtered(&catalog.logs, query, options, writer),
        Listing::Papers => write_filtered(&catalog.papers, query, options, writer),
        Listing::Datasets => write_filtered(&catalog.datasets, query, options, writer),
        Listing::Algorithms => write_filtered(&catalog.algorithms, query, options, writer),
        Listing::ForecastModels => {
            write_filtered(&catalog.forecast_models, query, options, writer)
        }
        Listing::Articles => write_filtered(&catalog.articles, query, options, writer),
        Listing::Downloads => write_filtered(&catalog.downloads, query, options, writer),
        Listing::Favorites => write_filtered(&catalog.favorites, query, options, writer),
        Listing::Uploads => write_filtered(&catalog.uploads, query, options, writer),
    }?;

    tracing::info!(
        listing = listing.name(),
        total = summary.total,
        matched = summary.matched,
        written = summary.written,
        "Listing rendered"
    );
    Ok(summary)
}

fn write_filtered<R, W>(
    records: &[R],
    query: &Query,
    options: BrowseOptions<'_>,
    writer: W,
) -> Result<BrowseSummary, ExportError>
where
    R: Record + Serialize + Display,
    W: Write,
{
    let mut matched = filter::filter_records(records, query);
    let matched_count = matched.len();
    if options.limit > 0 {
        matched.truncate(options.limit);
    }
    let written = export::export(&matched, options.format, writer, options.target)?;
    Ok(BrowseSummary {
        total: records.len(),
        matched: matched_count,
        written,
    })
}
