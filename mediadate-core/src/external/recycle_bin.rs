//! Recoverable deletion through the platform trash / recycle bin.

use super::Trash;
use crate::error::TrashError;
use std::path::Path;

/// Sends files to the desktop trash using the `trash` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTrash;

impl Trash for SystemTrash {
    fn move_to_trash(&self, path: &Path) -> Result<(), TrashError> {
        ::trash::delete(path).map_err(|e| TrashError(e.to_string()))
    }
}
