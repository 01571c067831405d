//! Translation placement.
//!
//! A stored translation document plays one or both of two roles:
//!
//! - **regular**: candidate for prioritized-language matching, stored in the
//!   endpoint its language maps to;
//! - **main**: candidate for main-language and always-available matching,
//!   stored in the dedicated main-languages endpoint.
//!
//! On the wire the roles are two boolean fields, `meta_indexed_translation`
//! and `meta_indexed_main_translation`. A document with neither role would
//! never match any core filter yet still be stored, so `Placement` only has
//! the three valid combinations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::fields::{Field, INDEXED_MAIN_TRANSLATION, INDEXED_TRANSLATION};

/// Role(s) a stored document instance serves for translation matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// Regular language candidate only (`regular=true, main=false`).
    Regular,
    /// Dedicated main-translation copy only (`regular=false, main=true`).
    Main,
    /// Both roles on the same stored document (`regular=true, main=true`).
    Shared,
}

impl Placement {
    /// Build from the two wire flags.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for `(false, false)`.
    pub fn from_flags(regular: bool, main: bool) -> Result<Self> {
        match (regular, main) {
            (true, false) => Ok(Placement::Regular),
            (false, true) => Ok(Placement::Main),
            (true, true) => Ok(Placement::Shared),
            (false, false) => Err(Error::invalid_argument(
                "placement must be regular, main or both",
            )),
        }
    }

    /// Value of the regular placement flag.
    pub fn is_regular(&self) -> bool {
        matches!(self, Placement::Regular | Placement::Shared)
    }

    /// Value of the main placement flag.
    pub fn is_main(&self) -> bool {
        matches!(self, Placement::Main | Placement::Shared)
    }

    /// The two boolean fields attached to stored documents.
    pub fn fields(&self) -> [Field; 2] {
        [
            Field::boolean(INDEXED_TRANSLATION, self.is_regular()),
            Field::boolean(INDEXED_MAIN_TRANSLATION, self.is_main()),
        ]
    }

    /// Placement of a translation stored on an endpoint.
    ///
    /// On the main-languages endpoint a main translation is shared; every
    /// other combination is regular.
    pub fn for_endpoint(on_main_languages_endpoint: bool, is_main_translation: bool) -> Self {
        if on_main_languages_endpoint && is_main_translation {
            Placement::Shared
        } else {
            Placement::Regular
        }
    }

    /// Lower-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Placement::Regular => "regular",
            Placement::Main => "main",
            Placement::Shared => "shared",
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Placement {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "regular" => Ok(Placement::Regular),
            "main" => Ok(Placement::Main),
            "shared" => Ok(Placement::Shared),
            other => Err(Error::invalid_argument(format!(
                "unknown placement '{other}'"
            ))),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
