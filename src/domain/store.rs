use super::*;

use std::path::{Path, PathBuf};
use crate::storage::TxtStorage;
use tracing::{debug, info, warn};

/// Field a listing is ordered by.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SortKey {
    None,
    FirstName,
    LastName,
}

/// Outcome of replacing the store with a persisted snapshot.
#[derive(Debug, PartialEq, Eq)]
pub enum LoadReport {
    /// No file at the path; the store was reset to empty.
    NotFound(PathBuf),
    /// `skipped` counts records dropped for breaking a store invariant.
    Loaded { loaded: usize, skipped: usize },
}

/// Outcome of a confirmed or declined removal.
#[derive(Debug, PartialEq, Eq)]
pub enum Removal {
    Removed(Contact),
    Cancelled(Contact),
}

/// Ordered, in-memory contact directory.
///
/// Every stored contact has a first name and a phone, no two share a phone,
/// and no two share the exact first and last name. Mutations only touch
/// memory; nothing is written until [`ContactStore::save_to_file`].
#[derive(Debug, Default)]
pub struct ContactStore {
    mem: Vec<Contact>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self { mem: Vec::new() }
    }

    pub fn contact_list(&self) -> &[Contact] {
        &self.mem
    }

    pub fn len(&self) -> usize {
        self.mem.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mem.is_empty()
    }

    /// Appends `contact` after checking required fields and duplicates.
    pub fn add_contact(&mut self, contact: Contact) -> Result<(), AppError> {
        contact.validate()?;

        if let Some(existing) = self.mem.iter().find(|c| contact.is_duplicate_of(c)) {
            let reason = if existing.phone == contact.phone {
                format!("phone {} already belongs to {}", contact.phone, existing)
            } else {
                format!(
                    "{} {} already exists",
                    contact.first_name, contact.last_name
                )
            };
            return Err(AppError::Duplicate(reason));
        }

        debug!(first_name = %contact.first_name, phone = %contact.phone, "adding contact");
        self.mem.push(contact);
        Ok(())
    }

    /// Index of the first contact, in store order, whose phone or first name
    /// equals `key`.
    pub fn find_for_removal(&self, key: &str) -> Result<usize, AppError> {
        self.mem
            .iter()
            .position(|c| c.phone == key || c.first_name == key)
            .ok_or_else(|| AppError::NotFound(format!("Contact '{}'", key)))
    }

    /// Looks up `key`, hands the match to `confirm`, and removes it only when
    /// `confirm` returns true. Remaining contacts keep their relative order.
    pub fn remove<F>(&mut self, key: &str, confirm: F) -> Result<Removal, AppError>
    where
        F: FnOnce(&Contact) -> Result<bool, AppError>,
    {
        let index = self.find_for_removal(key)?;

        if !confirm(&self.mem[index])? {
            debug!(key, "removal cancelled");
            return Ok(Removal::Cancelled(self.mem[index].clone()));
        }

        let removed = self.mem.remove(index);
        debug!(first_name = %removed.first_name, phone = %removed.phone, "removed contact");
        Ok(Removal::Removed(removed))
    }

    /// Contacts where `term` is a case-insensitive substring of the first
    /// name, last name or phone, in store order.
    pub fn search<'a>(&'a self, term: &'a str) -> impl Iterator<Item = &'a Contact> + 'a {
        self.mem.iter().filter(move |c| c.matches_term(term))
    }

    /// Reorders the store itself by `key` (stable, raw string ordering) and
    /// returns the result. [`SortKey::None`] leaves the order untouched.
    pub fn list(&mut self, key: SortKey) -> &[Contact] {
        match key {
            SortKey::None => {}
            SortKey::FirstName => self.mem.sort_by(|a, b| a.first_name.cmp(&b.first_name)),
            SortKey::LastName => self.mem.sort_by(|a, b| a.last_name.cmp(&b.last_name)),
        }
        &self.mem
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), AppError> {
        self.save(&TxtStorage::new(path))
    }

    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<LoadReport, AppError> {
        self.load(&TxtStorage::new(path))
    }

    /// Writes the current sequence to `storage`, overwriting it.
    pub fn save(&self, storage: &dyn ContactStorage) -> Result<(), AppError> {
        storage.save(&self.mem)?;
        info!(
            medium = storage.get_medium(),
            path = %storage.get_path().display(),
            count = self.mem.len(),
            "saved contacts"
        );
        Ok(())
    }

    /// Replaces the whole sequence with the snapshot in `storage`.
    ///
    /// A missing snapshot empties the store. Any other failure leaves the
    /// store as it was.
    pub fn load(&mut self, storage: &dyn ContactStorage) -> Result<LoadReport, AppError> {
        let Some(records) = storage.load()? else {
            self.mem.clear();
            info!(path = %storage.get_path().display(), "no saved contacts found");
            return Ok(LoadReport::NotFound(storage.get_path().to_path_buf()));
        };

        let mut fresh = ContactStore::new();
        let mut skipped = 0;

        for record in records {
            if let Err(e) = fresh.add_contact(record.truncated()) {
                warn!(error = %e, "skipping stored record");
                skipped += 1;
            }
        }

        self.mem = fresh.mem;
        info!(
            medium = storage.get_medium(),
            path = %storage.get_path().display(),
            loaded = self.mem.len(),
            skipped,
            "loaded contacts"
        );
        Ok(LoadReport::Loaded {
            loaded: self.mem.len(),
            skipped,
        })
    }

    /// Adds every contact from `storage`, keeping what is already stored.
    /// Returns how many were added and how many were rejected.
    pub fn import(&mut self, storage: &dyn ContactStorage) -> Result<(usize, usize), AppError> {
        let records = storage.load()?.ok_or_else(|| {
            AppError::NotFound(format!("{}", storage.get_path().display()))
        })?;

        let mut added = 0;
        let mut rejected = 0;
        for record in records {
            match self.add_contact(record) {
                Ok(()) => added += 1,
                Err(e) => {
                    warn!(error = %e, "skipping imported record");
                    rejected += 1;
                }
            }
        }

        Ok((added, rejected))
    }
}

/// True for an answer starting with `y` or `Y`.
pub fn is_affirmative(answer: &str) -> bool {
    answer
        .trim()
        .chars()
        .next()
        .is_some_and(|c| c.eq_ignore_ascii_case(&'y'))
}
