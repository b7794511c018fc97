//! PNG export and the "save file" step.

use crate::error::CircleResult;
use crate::render::RenderedCircle;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Download name for a circle of `diameter` px exported at `epoch_millis`.
pub fn suggested_filename(diameter: u32, epoch_millis: i64) -> String {
    format!("circle-png-{diameter}px-{epoch_millis}.png")
}

/// An encoded PNG and the name it should be saved under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedPng {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Encode `rendered`, naming it with the current wall-clock time.
pub fn export_png(rendered: &RenderedCircle) -> CircleResult<ExportedPng> {
    export_png_at(rendered, chrono::Utc::now().timestamp_millis())
}

/// Encode `rendered`, naming it with the given timestamp.
pub fn export_png_at(rendered: &RenderedCircle, epoch_millis: i64) -> CircleResult<ExportedPng> {
    let bytes = rendered.to_png()?;
    let filename = suggested_filename(rendered.diameter(), epoch_millis);
    log::info!("exported {} ({} bytes)", filename, bytes.len());
    Ok(ExportedPng { filename, bytes })
}

impl ExportedPng {
    /// Write the PNG into `dir` under its suggested name.
    ///
    /// The bytes go to a temporary file in `dir` that is then renamed into
    /// place, so a failed save leaves no partial file behind.
    pub fn save_to(&self, dir: &Path) -> CircleResult<PathBuf> {
        let target = dir.join(&self.filename);
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(&self.bytes)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&target).map_err(|e| e.error)?;
        log::debug!("saved {}", target.display());
        Ok(target)
    }
}
