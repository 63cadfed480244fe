//! Authoring schema for identity tables.
//!
//! A table source covers one generation. Its header names the variants
//! that own a column; every row then lists one cell per column:
//!
//! ```yaml
//! generation: 2000
//! variants: [rpg2000_official_english, rpg2000_don_miguel_english]
//! categories:
//!   Music:
//!     - ["Battle1", "Battle1_DM"]
//!     - ["Town1", ~]
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RtpError, Result};
use crate::registry::{Generation, RtpType};

/// One authored identity table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSource {
    /// Generation every header variant must belong to.
    pub generation: Generation,

    /// Column order of every row.
    pub variants: Vec<RtpType>,

    /// Rows per category. `None` or an empty string marks a missing asset.
    #[serde(default)]
    pub categories: BTreeMap<String, Vec<Vec<Option<String>>>>,
}

impl TableSource {
    /// Parse a table from YAML text. `source_name` is only used in errors.
    pub fn from_yaml(source_name: &str, content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| RtpError::TableParse {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })
    }

    /// Read and parse a table file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&path.display().to_string(), &content)
    }

    /// Total number of rows across categories.
    pub fn row_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_table_source() {
        let yaml = r#"
generation: 2000
variants: [rpg2000_official_english, rpg2000_don_miguel_english]
categories:
  Music:
    - ["Battle1", "Battle1_DM"]
    - ["Town1", ~]
  Sound:
    - [~, "decide"]
"#;
        let source = TableSource::from_yaml("inline", yaml).unwrap();
        assert_eq!(source.generation, Generation::Rpg2000);
        assert_eq!(source.variants.len(), 2);
        assert_eq!(source.row_count(), 3);
        assert_eq!(source.categories["Music"][1], vec![Some("Town1".to_string()), None]);
    }

    #[test]
    fn categories_default_to_empty() {
        let source =
            TableSource::from_yaml("inline", "generation: 2003\nvariants: []\n").unwrap();
        assert!(source.categories.is_empty());
    }

    #[test]
    fn unknown_variant_is_a_parse_error() {
        let yaml = "generation: 2000\nvariants: [rpg2000_bootleg]\n";
        let err = TableSource::from_yaml("bad.yml", yaml).unwrap_err();
        match err {
            RtpError::TableParse { source_name, .. } => assert_eq!(source_name, "bad.yml"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_generation_is_a_parse_error() {
        let yaml = "generation: 1995\nvariants: []\n";
        assert!(matches!(
            TableSource::from_yaml("bad.yml", yaml),
            Err(RtpError::TableParse { .. })
        ));
    }

    #[test]
    fn load_reads_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("table.yml");
        fs::write(
            &path,
            "generation: 2003\nvariants: [rpg2003_korean]\ncategories:\n  Music:\n    - [\"전투1\"]\n",
        )
        .unwrap();

        let source = TableSource::load(&path).unwrap();
        assert_eq!(source.row_count(), 1);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = TableSource::load(Path::new("/nonexistent/table.yml")).unwrap_err();
        assert!(matches!(err, RtpError::Io(_)));
    }
}
