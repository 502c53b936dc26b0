use std::path::{Path, PathBuf};

use crate::clock::{Clock, SystemClock};
use crate::db::contact_file;
use crate::error::{BookError, BookResult};
use crate::model::{Contact, Id};
use crate::ops::contact_ops::{self, ContactUpdate};
use crate::queries::{contact_queries, stats_queries, ContactStats};

/// The contact book: an in-memory collection kept in sync with one JSON file.
///
/// Every mutation rewrites the whole file. When that write fails the
/// mutation stays in memory and the error is returned; the next successful
/// save brings the file back in line.
pub struct ContactStore<C: Clock = SystemClock> {
    path: PathBuf,
    contacts: Vec<Contact>,
    /// None once every id has been issued.
    next_id: Option<Id<Contact>>,
    clock: C,
    load_error: Option<BookError>,
    /// Set while the file lags behind memory after a failed save.
    unsaved_changes: bool,
}

impl ContactStore<SystemClock> {
    /// Opens the store at `path`, starting empty if the file is missing or
    /// cannot be loaded. See [`ContactStore::load_error`].
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::open_with_clock(path, SystemClock)
    }

    /// Opens the store at `path`, failing if an existing file cannot be loaded.
    pub fn open_strict(path: impl Into<PathBuf>) -> BookResult<Self> {
        Self::open_strict_with_clock(path, SystemClock)
    }
}

impl<C: Clock> ContactStore<C> {
    pub fn open_with_clock(path: impl Into<PathBuf>, clock: C) -> Self {
        let path = path.into();
        match contact_file::load(&path) {
            Ok(contacts) => Self::from_loaded(path, contacts, clock, None),
            Err(e) => {
                log::warn!(
                    "Could not load contacts from {}, starting empty: {}",
                    path.display(),
                    e
                );
                Self::from_loaded(path, Vec::new(), clock, Some(e))
            }
        }
    }

    pub fn open_strict_with_clock(path: impl Into<PathBuf>, clock: C) -> BookResult<Self> {
        let path = path.into();
        let contacts = contact_file::load(&path)?;
        Ok(Self::from_loaded(path, contacts, clock, None))
    }

    fn from_loaded(
        path: PathBuf,
        contacts: Vec<Contact>,
        clock: C,
        load_error: Option<BookError>,
    ) -> Self {
        let next_id = contacts
            .iter()
            .map(|c| c.id)
            .max()
            .map_or(Some(Id::new(1)), Id::next);
        log::info!("Loaded {} contact(s) from {}", contacts.len(), path.display());
        Self {
            path,
            contacts,
            next_id,
            clock,
            load_error,
            unsaved_changes: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The error swallowed by a fail-soft open, if the file could not be loaded.
    pub fn load_error(&self) -> Option<&BookError> {
        self.load_error.as_ref()
    }

    /// True when a mutation could not be written and memory differs from disk.
    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved_changes
    }

    /// Contacts in store order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn add(
        &mut self,
        name: &str,
        phone: &str,
        email: &str,
        address: &str,
    ) -> BookResult<Contact> {
        let id = self.next_id.ok_or(BookError::IdsExhausted)?;
        let now = self.clock.now();
        let contact = contact_ops::add_contact(
            &mut self.contacts,
            id,
            name,
            phone,
            email,
            address,
            now,
        )?;
        self.next_id = id.next();
        log::debug!("Added contact {} ({})", contact.id, contact.name);

        self.save()?;
        Ok(contact)
    }

    pub fn get_by_id(&self, id: Id<Contact>) -> Option<&Contact> {
        contact_queries::find_by_id(&self.contacts, id)
    }

    pub fn get_by_phone(&self, phone: &str) -> Option<&Contact> {
        contact_queries::find_by_phone(&self.contacts, phone)
    }

    /// Case-insensitive search in store order. A blank query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&Contact> {
        contact_queries::search(&self.contacts, query)
    }

    /// Returns `Ok(false)` if no contact has `id`.
    pub fn update(&mut self, id: Id<Contact>, changes: ContactUpdate<'_>) -> BookResult<bool> {
        let now = self.clock.now();
        if !contact_ops::update_contact(&mut self.contacts, id, changes, now)? {
            return Ok(false);
        }
        log::debug!("Updated contact {}", id);

        self.save()?;
        Ok(true)
    }

    /// Returns `Ok(false)` if no contact has `id`.
    pub fn delete(&mut self, id: Id<Contact>) -> BookResult<bool> {
        if !contact_ops::delete_contact(&mut self.contacts, id) {
            return Ok(false);
        }
        log::debug!("Deleted contact {}", id);

        self.save()?;
        Ok(true)
    }

    /// All contacts sorted by name, ignoring case.
    pub fn list_all(&self) -> Vec<&Contact> {
        contact_queries::sorted_by_name(&self.contacts)
    }

    pub fn count(&self) -> usize {
        self.contacts.len()
    }

    pub fn statistics(&self, recent_limit: usize) -> ContactStats {
        stats_queries::stats(&self.contacts, recent_limit)
    }

    /// Rewrites the backing file with the current collection.
    pub fn save(&mut self) -> BookResult<()> {
        match contact_file::save(&self.path, &self.contacts) {
            Ok(()) => {
                self.unsaved_changes = false;
                log::info!(
                    "Saved {} contact(s) to {}",
                    self.contacts.len(),
                    self.path.display()
                );
                Ok(())
            }
            Err(e) => {
                self.unsaved_changes = true;
                log::error!("Error saving contacts to {}: {}", self.path.display(), e);
                Err(BookError::PersistenceFailure {
                    path: self.path.clone(),
                    source: Box::new(e),
                })
            }
        }
    }
}
