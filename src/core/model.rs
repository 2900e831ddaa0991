// UNRaf Academy - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no
// platform dependencies.
//
// Every listing shown by the portal has a concrete record type here, and
// each implements `Record` so the single filter in `core::filter` can
// serve all of them.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Record accessor contract
// =============================================================================

/// Field accessors the filter needs from a listing's record type.
///
/// A facet accessor returning `None` means the listing has no such field at
/// all, so a query constraint on that facet does not apply to it. A record
/// that *does* carry a date but whose value cannot be parsed is a different
/// case and fails closed (see `core::filter`).
pub trait Record {
    /// Opaque identifier, unique within its listing.
    fn id(&self) -> u32;

    /// Free-text fields searched by the query text and regex pattern.
    fn search_fields(&self) -> impl Iterator<Item = &str>;

    /// Primary categorical field (subject category, role, result).
    fn category(&self) -> Option<&str> {
        None
    }

    /// Secondary categorical field (resource type, log type, account status).
    fn kind(&self) -> Option<&str> {
        None
    }

    /// Raw ISO-like date string.
    fn date(&self) -> Option<&str> {
        None
    }
}

// =============================================================================
// Controlled vocabularies
// =============================================================================

/// Type of an academic resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Paper,
    Dataset,
    Algorithm,
}

impl ResourceKind {
    /// Returns all variants in display order.
    pub fn all() -> &'static [ResourceKind] {
        &[
            ResourceKind::Paper,
            ResourceKind::Dataset,
            ResourceKind::Algorithm,
        ]
    }

    /// Label used both for display and for exact-match filtering.
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Paper => "Paper",
            ResourceKind::Dataset => "Dataset",
            ResourceKind::Algorithm => "Algorithm",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Kind of audited action in the admin system log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogKind {
    Download,
    Upload,
    Edit,
    Block,
    System,
}

impl LogKind {
    pub fn label(&self) -> &'static str {
        match self {
            LogKind::Download => "Download",
            LogKind::Upload => "Upload",
            LogKind::Edit => "Edit",
            LogKind::Block => "Block",
            LogKind::System => "System",
        }
    }
}

impl fmt::Display for LogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Admin dashboard listings
// =============================================================================

/// A registered portal user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: u32,
    pub name: String,
    pub email: String,
    /// Role label, e.g. "Investigadora", "Estudiante", "Docente".
    pub role: String,
    /// Account status label, e.g. "Activo", "Pendiente", "Bloqueado".
    pub status: String,
    /// Registration date.
    pub date: String,
}

impl Record for UserAccount {
    fn id(&self) -> u32 {
        self.id
    }

    fn search_fields(&self) -> impl Iterator<Item = &str> {
        [self.name.as_str(), self.email.as_str()].into_iter()
    }

    fn category(&self) -> Option<&str> {
        Some(&self.role)
    }

    fn kind(&self) -> Option<&str> {
        Some(&self.status)
    }

    fn date(&self) -> Option<&str> {
        Some(&self.date)
    }
}

impl fmt::Display for UserAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} <{}> [{}, {}] {}",
            self.id, self.name, self.email, self.role, self.status, self.date
        )
    }
}

/// A published resource as seen from the admin resources tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogResource {
    pub id: u32,
    pub title: String,
    pub kind: ResourceKind,
    pub author: String,
    pub date: String,
    pub downloads: u32,
    pub status: String,
}

impl Record for CatalogResource {
    fn id(&self) -> u32 {
        self.id
    }

    fn search_fields(&self) -> impl Iterator<Item = &str> {
        [self.title.as_str(), self.author.as_str()].into_iter()
    }

    /// The resource type is this listing's only categorical field.
    fn category(&self) -> Option<&str> {
        Some(self.kind.label())
    }

    fn kind(&self) -> Option<&str> {
        Some(self.kind.label())
    }

    fn date(&self) -> Option<&str> {
        Some(&self.date)
    }
}

impl fmt::Display for CatalogResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} [{}] {} ({}) {} downloads={} {}",
            self.id, self.kind, self.title, self.author, self.date, self.downloads, self.status
        )
    }
}

/// One audited action in the admin system log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemLog {
    pub id: u32,
    pub user: String,
    pub action: String,
    pub kind: LogKind,
    /// Timestamp, `YYYY-MM-DD HH:MM`.
    pub date: String,
    /// Outcome label, e.g. "Exitoso", "Error".
    pub result: String,
}

impl Record for SystemLog {
    fn id(&self) -> u32 {
        self.id
    }

    fn search_fields(&self) -> impl Iterator<Item = &str> {
        [self.user.as_str(), self.action.as_str()].into_iter()
    }

    fn category(&self) -> Option<&str> {
        Some(&self.result)
    }

    fn kind(&self) -> Option<&str> {
        Some(self.kind.label())
    }

    fn date(&self) -> Option<&str> {
        Some(&self.date)
    }
}

impl fmt::Display for SystemLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} [{}] {}: {} ({})",
            self.id, self.date, self.kind, self.user, self.action, self.result
        )
    }
}

// =============================================================================
// Resources page listings
// =============================================================================

/// A research paper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paper {
    pub id: u32,
    pub title: String,
    /// Comma-separated author list as displayed.
    pub authors: String,
    /// Publication month, `YYYY-MM`.
    pub date: String,
    pub category: String,
    pub downloads: u32,
}

impl Record for Paper {
    fn id(&self) -> u32 {
        self.id
    }

    fn search_fields(&self) -> impl Iterator<Item = &str> {
        [self.title.as_str(), self.authors.as_str()].into_iter()
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn kind(&self) -> Option<&str> {
        Some(ResourceKind::Paper.label())
    }

    fn date(&self) -> Option<&str> {
        Some(&self.date)
    }
}

impl fmt::Display for Paper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} - {} ({}, {}) downloads={}",
            self.id, self.title, self.authors, self.category, self.date, self.downloads
        )
    }
}

/// An open dataset. Datasets carry no date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub id: u32,
    pub title: String,
    pub size: String,
    pub format: String,
    pub records: String,
    pub category: String,
}

impl Record for Dataset {
    fn id(&self) -> u32 {
        self.id
    }

    fn search_fields(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.title.as_str())
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn kind(&self) -> Option<&str> {
        Some(ResourceKind::Dataset.label())
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} ({}, {} {}, {} records)",
            self.id, self.title, self.category, self.size, self.format, self.records
        )
    }
}

/// A published ML algorithm. Algorithms carry neither category nor date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Algorithm {
    pub id: u32,
    pub title: String,
    /// Model family, e.g. "Random Forest".
    pub model_type: String,
    pub accuracy: String,
    pub language: String,
}

impl Record for Algorithm {
    fn id(&self) -> u32 {
        self.id
    }

    fn search_fields(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.title.as_str())
    }

    fn kind(&self) -> Option<&str> {
        Some(ResourceKind::Algorithm.label())
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} ({}, {}, accuracy {})",
            self.id, self.title, self.model_type, self.language, self.accuracy
        )
    }
}

// =============================================================================
// UNRafCast listing
// =============================================================================

/// A forecasting model offered by the UNRafCast playground.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastModel {
    pub id: u32,
    /// Short name, e.g. "MilkCast".
    pub name: String,
    pub full_name: String,
    pub description: String,
    pub model_type: String,
    pub accuracy: String,
    pub category: String,
    pub language: String,
}

impl Record for ForecastModel {
    fn id(&self) -> u32 {
        self.id
    }

    fn search_fields(&self) -> impl Iterator<Item = &str> {
        [self.name.as_str(), self.description.as_str()].into_iter()
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }
}

impl fmt::Display for ForecastModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} [{}] {} ({}, accuracy {})",
            self.id, self.full_name, self.category, self.description, self.model_type, self.accuracy
        )
    }
}

// =============================================================================
// News listing
// =============================================================================

/// A news or blog article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub date: String,
    pub author: String,
    pub category: String,
    #[serde(default)]
    pub image: String,
}

impl Record for Article {
    fn id(&self) -> u32 {
        self.id
    }

    fn search_fields(&self) -> impl Iterator<Item = &str> {
        [
            self.title.as_str(),
            self.excerpt.as_str(),
            self.author.as_str(),
        ]
        .into_iter()
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn date(&self) -> Option<&str> {
        Some(&self.date)
    }
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} [{}] {} - {}",
            self.id, self.date, self.category, self.title, self.author
        )
    }
}

// =============================================================================
// Profile listings
// =============================================================================

/// An entry in the user's download history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadRecord {
    pub id: u32,
    pub name: String,
    pub date: String,
    pub kind: ResourceKind,
}

impl Record for DownloadRecord {
    fn id(&self) -> u32 {
        self.id
    }

    fn search_fields(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str())
    }

    fn category(&self) -> Option<&str> {
        Some(self.kind.label())
    }

    fn kind(&self) -> Option<&str> {
        Some(self.kind.label())
    }

    fn date(&self) -> Option<&str> {
        Some(&self.date)
    }
}

impl fmt::Display for DownloadRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} [{}] {}", self.id, self.date, self.kind, self.name)
    }
}

/// A resource the user marked as favourite. Favourites carry no date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: u32,
    pub name: String,
    pub author: String,
    pub kind: ResourceKind,
}

impl Record for Favorite {
    fn id(&self) -> u32 {
        self.id
    }

    fn search_fields(&self) -> impl Iterator<Item = &str> {
        [self.name.as_str(), self.author.as_str()].into_iter()
    }

    fn category(&self) -> Option<&str> {
        Some(self.kind.label())
    }

    fn kind(&self) -> Option<&str> {
        Some(self.kind.label())
    }
}

impl fmt::Display for Favorite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} [{}] {} ({})", self.id, self.kind, self.name, self.author)
    }
}

/// A resource the user uploaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Upload {
    pub id: u32,
    pub name: String,
    pub date: String,
    pub kind: ResourceKind,
    /// Review status label, e.g. "Publicado", "En Revisión".
    pub status: String,
}

impl Record for Upload {
    fn id(&self) -> u32 {
        self.id
    }

    fn search_fields(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str())
    }

    fn category(&self) -> Option<&str> {
        Some(self.kind.label())
    }

    fn kind(&self) -> Option<&str> {
        Some(self.kind.label())
    }

    fn date(&self) -> Option<&str> {
        Some(&self.date)
    }
}

impl fmt::Display for Upload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} [{}] {} ({})",
            self.id, self.date, self.kind, self.name, self.status
        )
    }
}
