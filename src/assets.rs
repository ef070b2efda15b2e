use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{AssetError, Result};

pub const OUTPUT_DIR: &str = "assets";

pub const ASSET_NAMES: [&str; 4] = ["icon.png", "splash.png", "adaptive-icon.png", "favicon.png"];

pub const DONE_MESSAGE: &str = "All placeholder assets created successfully!";

/// Where the placeholders go and what they are called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetSet {
    pub output_dir: PathBuf,
    pub names: Vec<String>,
}

impl Default for AssetSet {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(OUTPUT_DIR),
            names: ASSET_NAMES.iter().map(|n| n.to_string()).collect(),
        }
    }
}

impl AssetSet {
    /// Same names, rooted somewhere else.
    pub fn under(base: &Path) -> Self {
        Self {
            output_dir: base.join(OUTPUT_DIR),
            ..Self::default()
        }
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        self.names.iter().map(|n| self.output_dir.join(n)).collect()
    }
}

/// Create `path` and any missing parents. An existing directory is fine.
pub fn ensure_output_directory(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| AssetError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `payload` to `dir/name`, replacing whatever was there.
pub fn write_asset(dir: &Path, name: &str, payload: &[u8]) -> Result<PathBuf> {
    let path = dir.join(name);
    let wrap = |source| AssetError::Write {
        path: path.clone(),
        source,
    };
    let mut f = fs::File::create(&path).map_err(wrap)?;
    f.write_all(payload).map_err(wrap)?;
    f.flush().map_err(wrap)?;
    debug!(path = %path.display(), bytes = payload.len(), "asset written");
    Ok(path)
}

/// Write every asset in order, printing `Created <name>` to `report` after each
/// one and the completion line at the end. Stops at the first failure; files
/// already written stay.
pub fn generate_all<W: Write>(
    dir: &Path,
    names: &[String],
    payload: &[u8],
    report: &mut W,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(names.len());
    for name in names {
        written.push(write_asset(dir, name, payload)?);
        writeln!(report, "Created {}", name).map_err(AssetError::Report)?;
    }
    writeln!(report, "{}", DONE_MESSAGE).map_err(AssetError::Report)?;
    info!(dir = %dir.display(), count = written.len(), "placeholder assets generated");
    Ok(written)
}
