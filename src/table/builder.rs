//! Validated construction of identity tables.

use std::collections::{BTreeMap, HashSet};

use tracing::debug;

use crate::error::{RtpError, Result};
use crate::registry::RtpType;

use super::source::TableSource;
use super::{fold_case, AssetRow, Category, IdentityTable, NameKey};

/// Accumulates rows and rejects ambiguous authoring data.
///
/// A (variant, category, name) triple may belong to at most one row,
/// compared case-insensitively across everything added to the builder.
#[derive(Debug, Default)]
pub struct TableBuilder {
    table: IdentityTable,
}

impl TableBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one logical asset.
    ///
    /// Cells with an empty name are treated as absent. A row without any
    /// name is ignored. On error the builder is left unchanged.
    pub fn add_row<I, S>(&mut self, category: &str, cells: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = (RtpType, S)>,
        S: Into<String>,
    {
        let mut names = BTreeMap::new();
        for (rtp, name) in cells {
            let name = name.into();
            if name.is_empty() {
                continue;
            }
            if names.insert(rtp, name).is_some() {
                return Err(RtpError::RepeatedCell {
                    category: category.to_string(),
                    variant: rtp.id().to_string(),
                });
            }
        }
        if names.is_empty() {
            return Ok(self);
        }

        let folded_category = fold_case(category);
        for (rtp, name) in &names {
            let key = NameKey::new(*rtp, &folded_category, name);
            if self.table.name_index.contains_key(&key) {
                return Err(RtpError::AmbiguousName {
                    variant: rtp.id().to_string(),
                    category: category.to_string(),
                    name: name.clone(),
                });
            }
        }

        let category_idx = match self.table.category_index.get(&folded_category) {
            Some(idx) => *idx,
            None => {
                self.table.categories.push(Category {
                    name: category.to_string(),
                    rows: Vec::new(),
                });
                let idx = self.table.categories.len() - 1;
                self.table
                    .category_index
                    .insert(folded_category.clone(), idx);
                idx
            }
        };

        let rows = &mut self.table.categories[category_idx].rows;
        let row_idx = rows.len();
        for (rtp, name) in &names {
            self.table
                .name_index
                .insert(NameKey::new(*rtp, &folded_category, name), row_idx);
        }
        rows.push(AssetRow { names });

        Ok(self)
    }

    /// Add every row of an authored table.
    ///
    /// The source is added as a whole: if any row is rejected, none of
    /// its rows are kept.
    pub fn add_source(&mut self, source_name: &str, source: &TableSource) -> Result<&mut Self> {
        let mut seen = HashSet::new();
        for rtp in &source.variants {
            if rtp.generation() != source.generation {
                return Err(RtpError::GenerationMismatch {
                    source_name: source_name.to_string(),
                    variant: rtp.id().to_string(),
                    generation: source.generation.year(),
                });
            }
            if !seen.insert(*rtp) {
                return Err(RtpError::DuplicateVariant {
                    source_name: source_name.to_string(),
                    variant: rtp.id().to_string(),
                });
            }
        }

        let mut staged = TableBuilder {
            table: self.table.clone(),
        };
        for (category, rows) in &source.categories {
            for (idx, cells) in rows.iter().enumerate() {
                if cells.len() != source.variants.len() {
                    return Err(RtpError::TableShape {
                        source_name: source_name.to_string(),
                        category: category.clone(),
                        row: idx + 1,
                        expected: source.variants.len(),
                        found: cells.len(),
                    });
                }
                let present = source
                    .variants
                    .iter()
                    .zip(cells)
                    .filter_map(|(rtp, cell)| cell.as_deref().map(|name| (*rtp, name)));
                staged.add_row(category, present)?;
            }
        }
        self.table = staged.table;

        debug!(
            source = source_name,
            generation = source.generation.year(),
            rows = source.row_count(),
            "Loaded RTP table"
        );
        Ok(self)
    }

    /// Parse YAML authoring data and add it.
    pub fn add_yaml(&mut self, source_name: &str, content: &str) -> Result<&mut Self> {
        let source = TableSource::from_yaml(source_name, content)?;
        self.add_source(source_name, &source)
    }

    /// Finish building.
    pub fn build(self) -> IdentityTable {
        self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Generation;

    #[test]
    fn add_row_creates_category() {
        let mut builder = TableBuilder::new();
        builder
            .add_row(
                "Music",
                [
                    (RtpType::Rpg2000OfficialEnglish, "Battle1"),
                    (RtpType::Rpg2000DonMiguelEnglish, "Battle1_DM"),
                ],
            )
            .unwrap();
        let table = builder.build();
        assert_eq!(table.categories().collect::<Vec<_>>(), vec!["Music"]);
        assert_eq!(table.rows("music").len(), 1);
    }

    #[test]
    fn empty_cells_are_absent() {
        let mut builder = TableBuilder::new();
        builder
            .add_row(
                "Music",
                [
                    (RtpType::Rpg2000OfficialEnglish, "Town1"),
                    (RtpType::Rpg2000DonMiguelEnglish, ""),
                ],
            )
            .unwrap();
        let table = builder.build();
        let row = &table.rows("Music")[0];
        assert_eq!(row.name_for(RtpType::Rpg2000DonMiguelEnglish), None);
    }

    #[test]
    fn empty_row_is_ignored() {
        let mut builder = TableBuilder::new();
        builder
            .add_row("Music", Vec::<(RtpType, String)>::new())
            .unwrap();
        assert_eq!(builder.build().row_count(), 0);
    }

    #[test]
    fn same_name_in_two_rows_is_ambiguous() {
        let mut builder = TableBuilder::new();
        builder
            .add_row("Music", [(RtpType::Rpg2000OfficialEnglish, "Battle1")])
            .unwrap();
        let err = builder
            .add_row("music", [(RtpType::Rpg2000OfficialEnglish, "BATTLE1")])
            .unwrap_err();
        assert!(matches!(err, RtpError::AmbiguousName { .. }));
    }

    #[test]
    fn failed_row_leaves_builder_unchanged() {
        let mut builder = TableBuilder::new();
        builder
            .add_row("Music", [(RtpType::Rpg2000OfficialEnglish, "Battle1")])
            .unwrap();
        let result = builder.add_row(
            "Music",
            [
                (RtpType::Rpg2000DonMiguelEnglish, "Battle1_DM"),
                (RtpType::Rpg2000OfficialEnglish, "Battle1"),
            ],
        );
        assert!(result.is_err());

        let table = builder.build();
        assert_eq!(table.row_count(), 1);
        assert!(!table.contains(RtpType::Rpg2000DonMiguelEnglish, "Music", "Battle1_DM"));
    }

    #[test]
    fn same_name_in_other_category_is_allowed() {
        let mut builder = TableBuilder::new();
        builder
            .add_row("FaceSet", [(RtpType::Rpg2000OfficialEnglish, "Hero1")])
            .unwrap()
            .add_row("CharSet", [(RtpType::Rpg2000OfficialEnglish, "Hero1")])
            .unwrap();
        assert_eq!(builder.build().row_count(), 2);
    }

    #[test]
    fn same_name_for_other_variant_is_allowed() {
        let mut builder = TableBuilder::new();
        builder
            .add_row("Music", [(RtpType::Rpg2003OfficialEnglish, "Battle1")])
            .unwrap()
            .add_row("Music", [(RtpType::Rpg2000OfficialEnglish, "Battle1")])
            .unwrap();
        assert_eq!(builder.build().row_count(), 2);
    }

    #[test]
    fn repeated_variant_in_row_is_rejected() {
        let mut builder = TableBuilder::new();
        let err = builder
            .add_row(
                "Music",
                [
                    (RtpType::Rpg2000OfficialEnglish, "Battle1"),
                    (RtpType::Rpg2000OfficialEnglish, "Battle2"),
                ],
            )
            .unwrap_err();
        assert!(matches!(err, RtpError::RepeatedCell { .. }));
        assert!(err.to_string().contains("'Music'"));
        assert!(err.to_string().contains("rpg2000_official_english"));
    }

    #[test]
    fn rejected_source_adds_no_rows() {
        let yaml = r#"
generation: 2000
variants: [rpg2000_official_english]
categories:
  Music:
    - ["Battle1"]
    - ["battle1"]
"#;
        let mut builder = TableBuilder::new();
        builder
            .add_row("Sound", [(RtpType::Rpg2000OfficialEnglish, "Decision1")])
            .unwrap();
        let err = builder.add_yaml("clash.yml", yaml).unwrap_err();
        assert!(matches!(err, RtpError::AmbiguousName { .. }));

        let table = builder.build();
        assert_eq!(table.row_count(), 1);
        assert!(!table.contains(RtpType::Rpg2000OfficialEnglish, "Music", "Battle1"));
        assert!(table.contains(RtpType::Rpg2000OfficialEnglish, "Sound", "Decision1"));
    }

    #[test]
    fn source_with_wrong_row_width_is_rejected() {
        let yaml = r#"
generation: 2000
variants: [rpg2000_official_english, rpg2000_don_miguel_english]
categories:
  Music:
    - ["Battle1"]
"#;
        let err = TableBuilder::new().add_yaml("short.yml", yaml).unwrap_err();
        match err {
            RtpError::TableShape {
                row,
                expected,
                found,
                ..
            } => {
                assert_eq!(row, 1);
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn source_with_foreign_generation_variant_is_rejected() {
        let source = TableSource {
            generation: Generation::Rpg2000,
            variants: vec![RtpType::Rpg2003Korean],
            categories: Default::default(),
        };
        let err = TableBuilder::new()
            .add_source("mixed.yml", &source)
            .unwrap_err();
        assert!(matches!(err, RtpError::GenerationMismatch { .. }));
    }

    #[test]
    fn source_with_repeated_header_is_rejected() {
        let yaml = "generation: 2003\nvariants: [rpg2003_korean, rpg2003_korean]\n";
        let err = TableBuilder::new().add_yaml("dup.yml", yaml).unwrap_err();
        assert!(matches!(err, RtpError::DuplicateVariant { .. }));
    }

    #[test]
    fn sources_merge_and_check_across_each_other() {
        let first = "generation: 2000\nvariants: [rpg2000_official_english]\ncategories:\n  Music:\n    - [\"Battle1\"]\n";
        let second = "generation: 2000\nvariants: [rpg2000_official_english]\ncategories:\n  Music:\n    - [\"battle1\"]\n";

        let mut builder = TableBuilder::new();
        builder.add_yaml("first.yml", first).unwrap();
        let err = builder.add_yaml("second.yml", second).unwrap_err();
        assert!(matches!(err, RtpError::AmbiguousName { .. }));
    }
}
