pub mod stores;

use crate::prelude::{AppError, Contact};
use std::fs::{self, OpenOptions};
use std::io::{BufReader, Write};
use std::path::Path;

pub use stores::{CsvStorage, TxtStorage};

/// A persisted snapshot of the contact sequence.
pub trait ContactStorage {
    /// Reads the snapshot, or `None` when nothing has been saved at the
    /// storage location yet.
    fn load(&self) -> Result<Option<Vec<Contact>>, AppError>;

    /// Overwrites the snapshot with `contacts`, in order.
    fn save(&self, contacts: &[Contact]) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;

    fn get_path(&self) -> &Path;
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
