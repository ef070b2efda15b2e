pub mod assets;
pub mod error;
pub mod logger;
pub mod payload;

pub use assets::{
    ASSET_NAMES, AssetSet, DONE_MESSAGE, OUTPUT_DIR, ensure_output_directory, generate_all,
    write_asset,
};
pub use error::{AssetError, Result};
pub use payload::{PayloadInfo, decode_payload, embedded_payload, inspect};

use std::io::Write;
use std::path::PathBuf;

/// The whole job: make the directory, decode the payload, write every asset.
pub fn run<W: Write>(set: &AssetSet, report: &mut W) -> Result<Vec<PathBuf>> {
    ensure_output_directory(&set.output_dir)?;
    let payload = embedded_payload()?;
    match inspect(&payload) {
        Ok(info) => tracing::debug!(
            format = ?info.format,
            width = info.width,
            height = info.height,
            bytes = info.len,
            "payload decoded"
        ),
        Err(e) => logger::log_error("payload inspection", &e),
    }
    generate_all(&set.output_dir, &set.names, &payload, report)
}
