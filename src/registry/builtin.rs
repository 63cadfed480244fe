//! Built-in identity tables embedded at compile time.

use std::sync::LazyLock;

use include_dir::{include_dir, Dir};

use crate::error::{RtpError, Result};
use crate::table::{IdentityTable, TableBuilder};

/// Embedded authoring data, one YAML document per generation.
static DATA_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/data/rtp");

static BUILTIN: LazyLock<IdentityTable> = LazyLock::new(|| {
    load_table().unwrap_or_else(|e| panic!("Built-in RTP tables should always load: {e}"))
});

/// The process-wide table built from the embedded data.
///
/// Parsed on first use and never mutated afterwards.
pub fn table() -> &'static IdentityTable {
    &BUILTIN
}

/// Parse the embedded data into a fresh builder.
///
/// Callers extend the returned builder with their own tables; the
/// ambiguity check then spans built-in and custom rows alike.
pub fn builder() -> Result<TableBuilder> {
    let mut builder = TableBuilder::new();
    let mut files: Vec<_> = DATA_DIR
        .files()
        .filter(|f| {
            f.path()
                .extension()
                .is_some_and(|ext| ext == "yml" || ext == "yaml")
        })
        .collect();
    files.sort_by(|a, b| a.path().cmp(b.path()));

    for file in files {
        let source_name = file.path().display().to_string();
        let content = file
            .contents_utf8()
            .ok_or_else(|| RtpError::TableParse {
                source_name: source_name.clone(),
                message: "Invalid UTF-8".to_string(),
            })?;
        builder.add_yaml(&source_name, content)?;
    }

    Ok(builder)
}

/// Load the embedded data into a new table.
pub fn load_table() -> Result<IdentityTable> {
    Ok(builder()?.build())
}

/// Names of the embedded data files.
pub fn source_names() -> Vec<String> {
    let mut names: Vec<_> = DATA_DIR
        .files()
        .map(|f| f.path().display().to_string())
        .collect();
    names.sort();
    names
}
