//! Data model for the song catalog normalizer.
//!
//! # Module Organization
//!
//! - [`record`]: raw source rows and cleaned, typed song records
//! - [`ids`]: prefixed surrogate identifiers and their sequences
//! - [`table`]: rows of the five normalized tables and the table bundle
//! - [`platform`]: the fixed set of reporting platforms
//! - [`options`]: knobs for a normalization run

pub mod error;
pub mod ids;
pub mod options;
pub mod platform;
pub mod record;
pub mod table;

pub use error::{ModelError, Result};
pub use ids::{
    ArtistId, DEFAULT_ID_OFFSET, IdSequence, MetricId, PlatformId, SurrogateId, TrackId,
};
pub use options::{MISSING_COVER_URL, NON_ASCII_PLACEHOLDER, NormalizeOptions};
pub use platform::Platform;
pub use record::{
    AudioFeatures, Mode, PlatformCounts, ReleaseDate, SongRecord, SourceColumn, SourceRecord,
};
pub use table::{
    Artist, ArtistTrack, Metric, NormalizedTables, PlatformEntry, TableKind, TableParts, Track,
    TrackKey,
};
