//! Type-safe identifiers for subway entities.
//!
//! All identifiers wrap the `i64` row id generated by the store, so a line id
//! can never be passed where a station id is expected.

use std::fmt;

macro_rules! impl_identifier {
    ($name:ident) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[derive(serde::Serialize, serde::Deserialize, sqlx::Type)]
        #[serde(transparent)]
        #[sqlx(transparent)]
        pub struct $name(i64);

        impl $name {
            pub fn new(raw: i64) -> Self {
                Self(raw)
            }

            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self::new(raw)
            }
        }
    };
}

impl_identifier!(LineId);
impl_identifier!(StationId);
impl_identifier!(SectionId);
