//! Native import/export of `.txt` stitch maps. Dialog selection and disk
//! access live here so the engine itself never touches the filesystem; a
//! successful import comes back as a ready-to-dispatch intent.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::error::EditorError;
use crate::reducer::{ExportArtifact, Intent};
use crate::text_codec;

/// Errors from the import/export boundary. Parse failures wrap the engine
/// taxonomy; disk failures stay separate so the UI can word them apart.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("could not access file: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] EditorError),
}

/// Ask the user for a stitch map to open.
pub fn pick_import_path() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter("stitch map", &["txt"])
        .pick_file()
}

/// Ask the user where to save the current design.
pub fn pick_export_path() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter("stitch map", &["txt"])
        .set_file_name("punchcard.txt")
        .save_file()
}

/// Read and decode a stitch map into a load intent. The caller dispatches
/// it; a failure here leaves the current design untouched.
pub fn import_design(path: &Path) -> Result<Intent, FileError> {
    let text = fs::read_to_string(path)?;
    let design = text_codec::decode(&text)?;
    log::info!(
        "imported {}x{} design from {}",
        design.columns(),
        design.rows(),
        path.display()
    );
    Ok(Intent::LoadDesign {
        columns: design.columns(),
        rows: design.rows(),
        stitches: design.stitches().to_vec(),
    })
}

/// Write the cached export artifact to disk.
pub fn export_artifact(path: &Path, artifact: &ExportArtifact) -> Result<(), FileError> {
    fs::write(path, artifact.text())?;
    log::info!("exported design to {}", path.display());
    Ok(())
}
