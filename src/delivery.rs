//! Handing rendered documents to the host environment.
//!
//! A [`Delivery`] receives a suggested file name together with the blob. The
//! bundled [`DirectoryDelivery`] saves into a directory; embedders with other
//! save mechanisms implement the trait themselves.

use std::fs;
use std::path::{Component, Path, PathBuf};

use log::{info, warn};

use crate::builder::{PdfBlob, PdfBuilder};
use crate::error::{Error, Result};

/// Destination for rendered documents.
pub trait Delivery {
    /// Stores `blob` under `filename` and returns where it ended up.
    fn deliver(&self, filename: &str, blob: &PdfBlob) -> Result<PathBuf>;
}

/// Saves documents as files inside a directory.
#[derive(Clone, Debug)]
pub struct DirectoryDelivery {
    directory: PathBuf,
}

impl DirectoryDelivery {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl Delivery for DirectoryDelivery {
    fn deliver(&self, filename: &str, blob: &PdfBlob) -> Result<PathBuf> {
        let name = validate_filename(filename)?;
        fs::create_dir_all(&self.directory)?;

        let path = self.directory.join(name);
        if path.exists() {
            warn!("overwriting existing file {}", path.display());
        }
        fs::write(&path, blob.as_bytes())?;
        info!("saved {} ({} bytes)", path.display(), blob.len());
        Ok(path)
    }
}

/// Renders `builder` and passes the result to `delivery` under `filename`.
pub fn download(delivery: &dyn Delivery, filename: &str, builder: &PdfBuilder) -> Result<PathBuf> {
    validate_filename(filename)?;
    let blob = builder.render();
    delivery.deliver(filename, &blob)
}

/// Accepts only a single, normal path component.
pub fn validate_filename(filename: &str) -> Result<&str> {
    let mut components = Path::new(filename).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(filename),
        _ => Err(Error::InvalidFilename(filename.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::model::Section;

    #[derive(Default)]
    struct RecordingDelivery {
        received: RefCell<Vec<(String, usize)>>,
    }

    impl Delivery for RecordingDelivery {
        fn deliver(&self, filename: &str, blob: &PdfBlob) -> Result<PathBuf> {
            self.received
                .borrow_mut()
                .push((filename.to_string(), blob.len()));
            Ok(PathBuf::from(filename))
        }
    }

    #[test]
    fn filenames_must_be_single_components() {
        assert!(validate_filename("relatorio.pdf").is_ok());
        for rejected in ["", "..", "/tmp/x.pdf", "dir/x.pdf", "."] {
            assert!(
                matches!(validate_filename(rejected), Err(Error::InvalidFilename(_))),
                "{rejected:?} should be rejected"
            );
        }
    }

    #[test]
    fn download_renders_and_delivers() {
        let delivery = RecordingDelivery::default();
        let builder = PdfBuilder::new()
            .with_title("Relatório")
            .add_section(Section::new("Resumo").with_item("ok"));

        let path = download(&delivery, "r.pdf", &builder).expect("delivered");

        assert_eq!(path, PathBuf::from("r.pdf"));
        let received = delivery.received.borrow();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0], ("r.pdf".to_string(), builder.render().len()));
    }

    #[test]
    fn download_rejects_bad_names_before_delivering() {
        let delivery = RecordingDelivery::default();
        let result = download(&delivery, "../escape.pdf", &PdfBuilder::new());
        assert!(result.is_err());
        assert!(delivery.received.borrow().is_empty());
    }

    #[test]
    fn directory_delivery_writes_the_bytes() {
        let dir = tempfile::tempdir().expect("temp dir");
        let delivery = DirectoryDelivery::new(dir.path().join("nested"));
        let blob = PdfBuilder::new().with_title("T").render();

        let path = delivery.deliver("t.pdf", &blob).expect("written");

        assert_eq!(path, dir.path().join("nested").join("t.pdf"));
        assert_eq!(fs::read(&path).expect("readable"), blob.bytes);
    }
}
