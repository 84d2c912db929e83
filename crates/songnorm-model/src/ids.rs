//! Surrogate identifiers.
//!
//! Every normalized table keys its rows by a prefix plus a sequential
//! offset (`Ar1000`, `Tr1000`, ...). Identifiers are minted in first-seen
//! order and are only stable within a single run.

use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Offset of the first identifier minted by a fresh [`IdSequence`].
pub const DEFAULT_ID_OFFSET: u32 = 1000;

/// A prefixed, sequential surrogate identifier.
pub trait SurrogateId: Sized {
    /// Fixed prefix carried by every identifier of this kind.
    const PREFIX: &'static str;
    /// Human-readable kind used in error messages.
    const KIND: &'static str;

    /// Builds the identifier for a sequence offset.
    fn from_offset(offset: u32) -> Self;

    /// Returns the rendered identifier.
    fn as_str(&self) -> &str;
}

macro_rules! surrogate_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal, $kind:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        pub struct $name(String);

        impl $name {
            /// Parses a rendered identifier, checking prefix and digits.
            pub fn parse(value: impl Into<String>) -> Result<Self> {
                let value = value.into();
                let digits = value.strip_prefix($prefix).unwrap_or("");
                if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(ModelError::InvalidIdentifier {
                        kind: $kind,
                        value,
                    });
                }
                Ok(Self(value))
            }
        }

        impl SurrogateId for $name {
            const PREFIX: &'static str = $prefix;
            const KIND: &'static str = $kind;

            fn from_offset(offset: u32) -> Self {
                Self(format!("{}{offset}", $prefix))
            }

            fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

surrogate_id!(
    /// Identifier of a row in the artist table (`Ar1000`).
    ArtistId,
    "Ar",
    "artist"
);
surrogate_id!(
    /// Identifier of a row in the track table (`Tr1000`).
    TrackId,
    "Tr",
    "track"
);
surrogate_id!(
    /// Identifier of a row in the metric table (`Mt1000`).
    MetricId,
    "Mt",
    "metric"
);
surrogate_id!(
    /// Identifier of a row in the platform table (`Pl1000`).
    PlatformId,
    "Pl",
    "platform"
);

/// Mints identifiers of one kind in sequence.
///
/// Each builder owns its own sequence, so counters never leak between
/// tables or between runs.
#[derive(Debug, Clone)]
pub struct IdSequence<T> {
    next: u32,
    _kind: PhantomData<fn() -> T>,
}

impl<T: SurrogateId> IdSequence<T> {
    /// Creates a sequence whose first identifier uses `offset`.
    pub fn starting_at(offset: u32) -> Self {
        Self {
            next: offset,
            _kind: PhantomData,
        }
    }

    /// Returns the next identifier and advances the sequence.
    pub fn mint(&mut self) -> T {
        let id = T::from_offset(self.next);
        self.next += 1;
        id
    }
}

impl<T: SurrogateId> Default for IdSequence<T> {
    fn default() -> Self {
        Self::starting_at(DEFAULT_ID_OFFSET)
    }
}
