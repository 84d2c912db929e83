//! Normalization of flat song records into relational tables.
//!
//! The entry point is [`normalize`]; the stage functions are public so
//! callers and tests can run them one at a time.
//!
//! # Example
//!
//! ```ignore
//! use songnorm_model::NormalizeOptions;
//! use songnorm_normalize::normalize;
//!
//! let tables = normalize(records, &NormalizeOptions::default())?;
//! println!("{} artists", tables.artists().len());
//! ```

mod clean;
mod dimensions;
mod error;
mod explode;
mod integrity;
mod join;
mod lookup;
mod metrics;
mod pipeline;
mod platforms;

// === Error Types ===
pub use error::{NormalizeError, Result};

// === Stages ===
pub use clean::{clean_record, clean_records, dedupe_by_track_name, replace_non_ascii};
pub use dimensions::{build_artist_table, build_track_table};
pub use explode::{ArtistCredit, explode_artists, split_artists, track_key};
pub use integrity::verify_references;
pub use join::build_artist_track_table;
pub use lookup::{ArtistIndex, TrackIndex};
pub use metrics::build_metric_table;
pub use platforms::build_platform_table;

// === Pipeline ===
pub use pipeline::normalize;
