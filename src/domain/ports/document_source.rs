use std::path::Path;

use crate::domain::models::ConfigDocument;
use crate::domain::MaterializeResult;

/// Port for reading the structured config document.
///
/// A missing document is `ConfigNotFound`; unreadable or malformed input
/// is `ConfigParse`.
pub trait DocumentSource {
    fn load(&self, path: &Path) -> MaterializeResult<ConfigDocument>;
}

impl<T: DocumentSource + ?Sized> DocumentSource for &T {
    fn load(&self, path: &Path) -> MaterializeResult<ConfigDocument> {
        (**self).load(path)
    }
}
