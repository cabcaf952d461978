use std::path::{Path, PathBuf};

use log::info;

use crate::error::Result;

/// Default directory for [`run`].
pub const OUTPUT_DIR: &str = "target/demo_reports";

/// Renders every demo report into `output_dir` and returns the written paths.
pub fn run(output_dir: &Path) -> Result<Vec<PathBuf>> {
    let written = vec![
        super::occupational::run(output_dir)?,
        super::psychosocial::run(output_dir)?,
    ];
    info!(
        "rendered {} demo report(s) into {}",
        written.len(),
        output_dir.display()
    );
    Ok(written)
}
