use std::path::{Path, PathBuf};

use super::shared;
use crate::delivery::{download, DirectoryDelivery};
use crate::error::Result;
use crate::reports;

/// Renders the sample psychosocial triage report into `output_dir`.
///
/// The report is built without personal data, so every collaborator field
/// shows its fallback.
pub fn run(output_dir: &Path) -> Result<PathBuf> {
    let (result, responses) = shared::sample_psychosocial();
    let report = reports::psychosocial_report(None, &result, &responses);

    let delivery = DirectoryDelivery::new(output_dir);
    download(&delivery, report.filename, &report.builder())
}
