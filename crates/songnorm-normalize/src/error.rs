//! Error types for table building.

use thiserror::Error;

/// Errors that abort a normalization run.
///
/// There is no partial-success path: any of these ends the run before
/// anything is written.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormalizeError {
    /// A record's artist field holds no names.
    #[error("track '{track}' has no artist names")]
    MissingArtists { track: String },

    /// An exploded artist name is not in the artist table.
    #[error("artist '{name}' not found in artist table")]
    UnresolvedArtist { name: String },

    /// A track could not be found in the track table.
    #[error("track '{name}' not found in track table")]
    UnresolvedTrack { name: String },

    /// An identifier occurs more than once in its own table.
    #[error("duplicate identifier {id} in {table} table")]
    DuplicateIdentifier { table: &'static str, id: String },

    /// A row references an identifier missing from the referenced table.
    #[error("{table} table references unknown {column} {id}")]
    DanglingReference {
        table: &'static str,
        column: &'static str,
        id: String,
    },
}

/// Result type for normalization operations.
pub type Result<T> = std::result::Result<T, NormalizeError>;
