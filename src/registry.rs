//! Class registry: independently named rosters behind a shared handle.

use crate::roster::Roster;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, instrument, warn};

/// Errors that can occur when operating on the registry.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum RegistryError {
    /// No class is registered under the requested name.
    #[display("Class not found")]
    ClassNotFound,
    /// A class with the requested name already exists.
    #[display("Class already exists")]
    ClassExists,
    /// The class name was empty.
    #[display("Class name cannot be empty")]
    EmptyClassName,
}

/// Manages all class rosters.
///
/// Cloning the registry yields another handle to the same underlying state,
/// so the web shell can share one registry across handlers. The registry
/// starts empty and may become empty again: deleting the last remaining
/// class is allowed.
#[derive(Debug, Clone, Default)]
pub struct ClassRegistry {
    classes: Arc<Mutex<BTreeMap<String, Roster>>>,
}

impl ClassRegistry {
    /// Creates an empty registry.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating class registry");
        Self::default()
    }

    /// Creates a new empty class.
    ///
    /// # Errors
    ///
    /// [`RegistryError::EmptyClassName`] for an empty name,
    /// [`RegistryError::ClassExists`] when the name is taken.
    #[instrument(skip(self))]
    pub fn create_class(&self, name: &str) -> Result<(), RegistryError> {
        if name.is_empty() {
            warn!("Refusing to create class with empty name");
            return Err(RegistryError::EmptyClassName);
        }
        let mut classes = self.classes.lock().unwrap();
        if classes.contains_key(name) {
            warn!(class = name, "Class already exists");
            return Err(RegistryError::ClassExists);
        }
        classes.insert(name.to_string(), Roster::new());
        info!(class = name, total = classes.len(), "Class created");
        Ok(())
    }

    /// Deletes a class and discards its roster.
    ///
    /// # Errors
    ///
    /// [`RegistryError::ClassNotFound`] when no such class exists.
    #[instrument(skip(self))]
    pub fn delete_class(&self, name: &str) -> Result<(), RegistryError> {
        let mut classes = self.classes.lock().unwrap();
        if classes.remove(name).is_none() {
            warn!(class = name, "Delete of unknown class");
            return Err(RegistryError::ClassNotFound);
        }
        info!(class = name, remaining = classes.len(), "Class deleted");
        Ok(())
    }

    /// Moves a roster from one class name to another.
    ///
    /// The roster's names, history, and counts are untouched; only the key
    /// changes. A failed rename mutates nothing.
    ///
    /// # Errors
    ///
    /// [`RegistryError::ClassNotFound`] when `old` is absent,
    /// [`RegistryError::EmptyClassName`] when `new` is empty,
    /// [`RegistryError::ClassExists`] when `new` is taken.
    #[instrument(skip(self))]
    pub fn rename_class(&self, old: &str, new: &str) -> Result<(), RegistryError> {
        if new.is_empty() {
            warn!("Refusing to rename class to empty name");
            return Err(RegistryError::EmptyClassName);
        }
        let mut classes = self.classes.lock().unwrap();
        if !classes.contains_key(old) {
            warn!(class = old, "Rename of unknown class");
            return Err(RegistryError::ClassNotFound);
        }
        if classes.contains_key(new) {
            warn!(from = old, to = new, "Rename target already exists");
            return Err(RegistryError::ClassExists);
        }
        let roster = classes.remove(old).expect("presence checked above");
        classes.insert(new.to_string(), roster);
        info!(from = old, to = new, "Class renamed");
        Ok(())
    }

    /// Lists all class names in sorted order.
    #[instrument(skip(self))]
    pub fn list_classes(&self) -> Vec<String> {
        let classes = self.classes.lock().unwrap();
        let names: Vec<_> = classes.keys().cloned().collect();
        debug!(count = names.len(), "Listed classes");
        names
    }

    /// Runs `f` on the named roster while holding the registry lock.
    ///
    /// This is the single access path for roster mutation, so a full
    /// read-modify-write happens under one lock acquisition.
    ///
    /// # Errors
    ///
    /// [`RegistryError::ClassNotFound`] when no such class exists; `f` is
    /// not called and nothing is mutated.
    #[instrument(skip(self, f))]
    pub fn with_roster<T>(
        &self,
        class_name: &str,
        f: impl FnOnce(&mut Roster) -> T,
    ) -> Result<T, RegistryError> {
        let mut classes = self.classes.lock().unwrap();
        let roster = classes.get_mut(class_name).ok_or_else(|| {
            debug!(class = class_name, "Class not found");
            RegistryError::ClassNotFound
        })?;
        Ok(f(roster))
    }

    /// Returns a snapshot of every class and its roster, in sorted order.
    pub fn snapshot(&self) -> Vec<(String, Roster)> {
        let classes = self.classes.lock().unwrap();
        classes.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}
