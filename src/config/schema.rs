//! Configuration schema.

use std::borrow::Cow;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::registry::{builtin, Generation, VersionFilter};
use crate::table::{IdentityTable, TableSource};

/// Contents of `.rtpkit.yml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RtpkitConfig {
    /// Default generation filter for detection and reverse lookups.
    #[serde(default)]
    pub generation: Option<Generation>,

    /// Extra authoring tables merged into the built-in one.
    #[serde(default)]
    pub tables: Vec<PathBuf>,
}

impl RtpkitConfig {
    /// Apply command-line overrides.
    ///
    /// A generation given on the command line replaces the configured one;
    /// extra tables are appended after the configured ones.
    pub fn with_overrides(mut self, generation: Option<Generation>, tables: &[PathBuf]) -> Self {
        if generation.is_some() {
            self.generation = generation;
        }
        self.tables.extend(tables.iter().cloned());
        self
    }

    /// The filter implied by the configured generation.
    pub fn version_filter(&self) -> VersionFilter {
        self.generation.into()
    }

    /// The identity table to resolve against.
    ///
    /// Without extra tables this is the shared built-in table; otherwise a
    /// new table holding the built-in rows plus every configured table.
    pub fn identity_table(&self) -> Result<Cow<'static, IdentityTable>> {
        if self.tables.is_empty() {
            return Ok(Cow::Borrowed(builtin::table()));
        }

        let mut builder = builtin::builder()?;
        for path in &self.tables {
            let source = TableSource::load(path)?;
            builder.add_source(&path.display().to_string(), &source)?;
        }
        Ok(Cow::Owned(builder.build()))
    }
}
