// UNRaf Academy - core/filter.rs
//
// Composable record filter shared by every listing.
// All active constraints are AND-combined.
// Core layer: pure logic, no I/O dependencies.

use crate::core::date::parse_date;
use crate::core::model::Record;
use crate::util::constants;
use crate::util::error::FilterError;
use chrono::NaiveDate;
use regex::Regex;

/// Complete query state. All fields are AND-combined when applied.
#[derive(Debug, Clone, Default)]
pub struct Query {
    /// Substring text search (case-insensitive). Empty = no filter.
    pub text: String,

    /// Exact match on the record's category facet. None = all.
    pub category: Option<String>,

    /// Exact match on the record's kind facet. None = all.
    pub kind: Option<String>,

    /// Start of date range (inclusive). None = no lower bound.
    pub date_from: Option<NaiveDate>,

    /// End of date range (inclusive). None = no upper bound.
    pub date_to: Option<NaiveDate>,

    /// Compiled regex search. None = no regex filter.
    pub pattern: Option<Regex>,
}

impl Query {
    /// Returns true if no filters are active.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
            && self.category.is_none()
            && self.kind.is_none()
            && self.date_from.is_none()
            && self.date_to.is_none()
            && self.pattern.is_none()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the category constraint. `"all"` and `""` clear it.
    pub fn with_category(mut self, category: &str) -> Self {
        self.category = facet_constraint(category);
        self
    }

    /// Set the kind constraint. `"all"` and `""` clear it.
    pub fn with_kind(mut self, kind: &str) -> Self {
        self.kind = facet_constraint(kind);
        self
    }

    pub fn with_date_from(mut self, date: NaiveDate) -> Self {
        self.date_from = Some(date);
        self
    }

    pub fn with_date_to(mut self, date: NaiveDate) -> Self {
        self.date_to = Some(date);
        self
    }

    /// Set the lower date bound from user input.
    /// An unparseable bound cannot order anything, so it is dropped.
    pub fn with_date_from_str(mut self, raw: &str) -> Self {
        self.date_from = bound_from_str("date_from", raw);
        self
    }

    /// Set the upper date bound from user input.
    /// An unparseable bound cannot order anything, so it is dropped.
    pub fn with_date_to_str(mut self, raw: &str) -> Self {
        self.date_to = bound_from_str("date_to", raw);
        self
    }

    /// Set the regex search pattern, compiling it.
    /// Returns an error if the pattern is invalid or too long.
    pub fn set_pattern(&mut self, pattern: &str) -> Result<(), FilterError> {
        if pattern.is_empty() {
            self.pattern = None;
            return Ok(());
        }
        if pattern.len() > constants::MAX_REGEX_PATTERN_LENGTH {
            return Err(FilterError::RegexTooLong {
                length: pattern.len(),
                max_length: constants::MAX_REGEX_PATTERN_LENGTH,
            });
        }
        let regex = Regex::new(pattern).map_err(|e| FilterError::InvalidRegex {
            pattern: pattern.to_string(),
            source: e,
        })?;
        self.pattern = Some(regex);
        Ok(())
    }
}

fn facet_constraint(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() || value == constants::MATCH_ALL {
        None
    } else {
        Some(value.to_string())
    }
}

fn bound_from_str(field: &'static str, raw: &str) -> Option<NaiveDate> {
    if raw.trim().is_empty() {
        return None;
    }
    let parsed = parse_date(raw);
    if parsed.is_none() {
        tracing::warn!(field, input = raw, "Ignoring unparseable date bound");
    }
    parsed
}

/// Apply the query to a slice of records, returning indices of matching records.
///
/// Returns a Vec of indices into the original slice, in input order. This
/// avoids copying records and lets view state keep a filtered view.
pub fn apply_filters<R: Record>(records: &[R], query: &Query) -> Vec<usize> {
    if query.is_empty() {
        return (0..records.len()).collect();
    }

    let text_lower = query.text.to_lowercase();

    records
        .iter()
        .enumerate()
        .filter(|(_, record)| matches_all(*record, query, &text_lower))
        .map(|(idx, _)| idx)
        .collect()
}

/// Apply the query and return borrowed references to the matching records.
pub fn filter_records<'a, R: Record>(records: &'a [R], query: &Query) -> Vec<&'a R> {
    apply_filters(records, query)
        .into_iter()
        .map(|idx| &records[idx])
        .collect()
}

/// Check if a single record matches all active constraints.
///
/// Cheapest checks first: facet equality, then dates, then text scans.
fn matches_all<R: Record>(record: &R, query: &Query, text_lower: &str) -> bool {
    // Category facet. Listings without the facet are unconstrained.
    if let (Some(wanted), Some(actual)) = (query.category.as_deref(), record.category()) {
        if actual != wanted {
            return false;
        }
    }

    // Kind facet
    if let (Some(wanted), Some(actual)) = (query.kind.as_deref(), record.kind()) {
        if actual != wanted {
            return false;
        }
    }

    // Date range. A dated record whose date cannot be parsed fails closed.
    if query.date_from.is_some() || query.date_to.is_some() {
        if let Some(raw) = record.date() {
            let Some(date) = parse_date(raw) else {
                tracing::trace!(id = record.id(), date = raw, "Unparseable record date");
                return false;
            };
            if query.date_from.is_some_and(|from| date < from) {
                return false;
            }
            if query.date_to.is_some_and(|to| date > to) {
                return false;
            }
        }
    }

    // Text search (case-insensitive substring on any searchable field)
    if !text_lower.is_empty()
        && !record
            .search_fields()
            .any(|field| field.to_lowercase().contains(text_lower))
    {
        return false;
    }

    // Regex search
    if let Some(ref regex) = query.pattern {
        if !record.search_fields().any(|field| regex.is_match(field)) {
            return false;
        }
    }

    true
}
