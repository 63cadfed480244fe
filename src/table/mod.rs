//! Identity table: which file name each runtime package uses for the same asset.
//!
//! A row is one logical asset (for example "the first battle theme") and
//! holds up to one name per [`RtpType`]. Rows are grouped by asset category
//! (the sub-folder the file lives in, such as `Music` or `CharSet`).
//!
//! Category and name comparisons are case-insensitive; the table keeps the
//! authored spelling for output.
//!
//! # Example
//!
//! ```
//! use rtpkit::registry::RtpType;
//! use rtpkit::table::IdentityTable;
//!
//! let table = IdentityTable::from_yaml(
//!     "inline",
//!     r#"
//! generation: 2000
//! variants: [rpg2000_official_english, rpg2000_don_miguel_english]
//! categories:
//!   Music:
//!     - ["Battle1", "Battle1_DM"]
//! "#,
//! )
//! .unwrap();
//!
//! let row = table
//!     .find_row(RtpType::Rpg2000OfficialEnglish, "music", "battle1")
//!     .unwrap();
//! assert_eq!(row.name_for(RtpType::Rpg2000DonMiguelEnglish), Some("Battle1_DM"));
//! ```

pub mod builder;
pub mod source;

pub use builder::TableBuilder;
pub use source::TableSource;

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::error::Result;
use crate::registry::RtpType;

/// Case folding applied to categories and names before comparison.
pub(crate) fn fold_case(s: &str) -> String {
    s.to_lowercase()
}

/// One logical asset: its name in every variant that ships it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetRow {
    names: BTreeMap<RtpType, String>,
}

impl AssetRow {
    /// Name of this asset in `rtp`, if that package ships it.
    pub fn name_for(&self, rtp: RtpType) -> Option<&str> {
        self.names.get(&rtp).map(String::as_str)
    }

    /// Every (variant, name) pair, in variant declaration order.
    pub fn names(&self) -> impl Iterator<Item = (RtpType, &str)> {
        self.names.iter().map(|(rtp, name)| (*rtp, name.as_str()))
    }

    /// Variants that ship this asset.
    pub fn variants(&self) -> impl Iterator<Item = RtpType> + '_ {
        self.names.keys().copied()
    }
}

/// A (category, name) pair probed when detecting a package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Probe<'a> {
    pub category: &'a str,
    pub name: &'a str,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct Category {
    pub(crate) name: String,
    pub(crate) rows: Vec<AssetRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct NameKey {
    rtp: RtpType,
    category: String,
    name: String,
}

impl NameKey {
    /// `folded_category` must already be case-folded.
    pub(crate) fn new(rtp: RtpType, folded_category: &str, name: &str) -> Self {
        Self {
            rtp,
            category: folded_category.to_string(),
            name: fold_case(name),
        }
    }
}

/// Read-only mapping between the per-package names of logical assets.
///
/// Built once through [`TableBuilder`]; every lookup borrows it immutably,
/// so a table can be shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct IdentityTable {
    pub(crate) categories: Vec<Category>,
    pub(crate) category_index: HashMap<String, usize>,
    /// Row index inside its category, keyed by folded (variant, category, name).
    pub(crate) name_index: HashMap<NameKey, usize>,
}

impl IdentityTable {
    /// Start building a table.
    pub fn builder() -> TableBuilder {
        TableBuilder::new()
    }

    /// Build a table from a single YAML authoring document.
    pub fn from_yaml(source_name: &str, content: &str) -> Result<Self> {
        let mut builder = TableBuilder::new();
        builder.add_yaml(source_name, content)?;
        Ok(builder.build())
    }

    /// Category names in the order they were first added.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    /// Rows of a category; empty when the category is unknown.
    pub fn rows(&self, category: &str) -> &[AssetRow] {
        self.category(category)
            .map(|c| c.rows.as_slice())
            .unwrap_or(&[])
    }

    /// Total number of rows across categories.
    pub fn row_count(&self) -> usize {
        self.categories.iter().map(|c| c.rows.len()).sum()
    }

    /// Find the logical asset `name` refers to under `rtp`.
    ///
    /// Exact match after case folding; no partial matching.
    pub fn find_row(&self, rtp: RtpType, category: &str, name: &str) -> Option<&AssetRow> {
        let folded_category = fold_case(category);
        let category_idx = *self.category_index.get(&folded_category)?;
        let row_idx = *self
            .name_index
            .get(&NameKey::new(rtp, &folded_category, name))?;
        self.categories[category_idx].rows.get(row_idx)
    }

    /// Whether `name` is a stock asset of `rtp` in `category`.
    pub fn contains(&self, rtp: RtpType, category: &str, name: &str) -> bool {
        self.find_row(rtp, category, name).is_some()
    }

    /// Every asset `rtp` ships, as detection probes in table order.
    pub fn probes(&self, rtp: RtpType) -> Vec<Probe<'_>> {
        self.categories
            .iter()
            .flat_map(|category| {
                category.rows.iter().filter_map(move |row| {
                    row.name_for(rtp).map(|name| Probe {
                        category: category.name.as_str(),
                        name,
                    })
                })
            })
            .collect()
    }

    /// Number of probes for `rtp`.
    pub fn probe_count(&self, rtp: RtpType) -> usize {
        self.categories
            .iter()
            .flat_map(|c| c.rows.iter())
            .filter(|row| row.name_for(rtp).is_some())
            .count()
    }

    fn category(&self, category: &str) -> Option<&Category> {
        self.category_index
            .get(&fold_case(category))
            .map(|idx| &self.categories[*idx])
    }
}
