// UNRaf Academy - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "UNRaf Academy";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "UNRafAcademy";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Filtering
// =============================================================================

/// Sentinel category value meaning "no constraint" (the "Todos" / "Todas las
/// categorías" option in every dropdown).
pub const MATCH_ALL: &str = "all";

/// Maximum length of a user-supplied regex search pattern.
pub const MAX_REGEX_PATTERN_LENGTH: usize = 1_024;

// =============================================================================
// Catalogue limits
// =============================================================================

/// Maximum size of a catalogue JSON file accepted from disk.
pub const MAX_CATALOG_FILE_SIZE: u64 = 16 * 1024 * 1024; // 16 MB

// =============================================================================
// Output
// =============================================================================

/// Default number of records printed by the CLI (0 = unlimited).
pub const DEFAULT_MAX_RESULTS: usize = 0;

/// Hard upper bound on a configured result limit.
pub const ABSOLUTE_MAX_RESULTS: usize = 100_000;

/// Maximum number of records written by a single export.
pub const MAX_EXPORT_RECORDS: usize = 1_000_000;

// =============================================================================
// Logging
// =============================================================================

/// Default log level when neither RUST_LOG, --debug, nor config set one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// File names
// =============================================================================

/// Configuration file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Catalogue file picked up from the platform data directory when present.
pub const USER_CATALOG_FILE_NAME: &str = "catalog.json";
