pub mod locator;

pub use locator::locate_annotations;

use anyhow::Result;
use rustpython_parser::{ast, Parse};
use std::path::{Path, PathBuf};

/// A parsed Python module together with the source it came from.
///
/// The source is kept alongside the suite because the parser discards
/// comments and byte ranges only become line/column pairs with the text
/// at hand.
#[derive(Debug)]
pub struct PythonModule {
    pub suite: ast::Suite,
    pub source: String,
    pub path: PathBuf,
}

pub fn parse_python(content: &str, path: &Path) -> Result<PythonModule> {
    let suite = ast::Suite::parse(content, &path.display().to_string())
        .map_err(|e| anyhow::anyhow!("Python parse error in {}: {e}", path.display()))?;
    Ok(PythonModule {
        suite,
        source: content.to_string(),
        path: path.to_path_buf(),
    })
}
