//! Output generation for normalized song tables.
//!
//! - [`frames`]: each table as a polars `DataFrame`
//! - [`csv`]: one CSV file per table

pub mod csv;
pub mod frames;

pub use csv::{WrittenTable, ensure_output_dir, write_table_csv, write_tables};
pub use frames::{
    TableFrame, artist_frame, artist_track_frame, metric_frame, platform_frame, to_frames,
    track_frame,
};
