use std::path::{Path, PathBuf};

use super::shared;
use crate::delivery::{download, DirectoryDelivery};
use crate::error::Result;
use crate::reports;

/// Renders the sample occupational triage report into `output_dir`.
pub fn run(output_dir: &Path) -> Result<PathBuf> {
    let info = shared::sample_personal_info();
    let (result, responses) = shared::sample_occupational();
    let report = reports::occupational_report(Some(&info), &result, &responses);

    let delivery = DirectoryDelivery::new(output_dir);
    download(&delivery, report.filename, &report.builder())
}
