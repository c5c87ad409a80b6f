use super::*;

use crate::helper;
use csv::{Reader, Writer};
use std::{io::ErrorKind, path::PathBuf};
use tracing::debug;

pub const DEFAULT_TXT_PATH: &str = "contacts.txt";
pub const DEFAULT_CSV_NAME: &str = "exported.csv";

/// The delimited `first,last,phone,email` data file.
pub struct TxtStorage {
    pub medium: String,
    pub path: PathBuf,
}

impl TxtStorage {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            medium: "txt".to_string(),
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl Default for TxtStorage {
    fn default() -> Self {
        Self::new(DEFAULT_TXT_PATH)
    }
}

/// Quoted CSV with a header row, used for import and export.
pub struct CsvStorage {
    pub medium: String,
    pub path: PathBuf,
}

impl CsvStorage {
    /// A directory resolves to `exported.csv` inside it; any other path must
    /// carry a `.csv` extension.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let mut file_path = path.as_ref().to_path_buf();

        if file_path.is_dir() {
            file_path = file_path.join(DEFAULT_CSV_NAME);
        } else if file_path.extension().is_none_or(|ext| ext != "csv") {
            return Err(AppError::Validation(
                "Import/export file must be a .csv file".to_string(),
            ));
        }

        Ok(Self {
            medium: "csv".to_string(),
            path: file_path,
        })
    }
}

impl ContactStorage for TxtStorage {
    fn load(&self) -> Result<Option<Vec<Contact>>, AppError> {
        let file = match OpenOptions::new().read(true).open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let reader = BufReader::new(file);
        let contacts = helper::deserialize_contacts_from_txt_buffer(reader)?;
        debug!(path = %self.path.display(), records = contacts.len(), "read txt data file");
        Ok(Some(contacts))
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;

        let data = helper::serialize_contacts(contacts);
        file.write_all(data.as_bytes())?;
        file.flush()?;

        debug!(path = %self.path.display(), records = contacts.len(), "wrote txt data file");
        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }

    fn get_path(&self) -> &Path {
        &self.path
    }
}

impl ContactStorage for CsvStorage {
    fn load(&self) -> Result<Option<Vec<Contact>>, AppError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let mut reader = Reader::from_path(&self.path)?;

        let mut contacts = Vec::new();
        for result in reader.deserialize() {
            let record: Contact = result?;
            contacts.push(record);
        }

        debug!(path = %self.path.display(), records = contacts.len(), "read csv file");
        Ok(Some(contacts))
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let mut writer = Writer::from_path(&self.path)?;

        for contact in contacts {
            writer.serialize(contact)?;
        }

        writer.flush()?;

        debug!(path = %self.path.display(), records = contacts.len(), "wrote csv file");
        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }

    fn get_path(&self) -> &Path {
        &self.path
    }
}
