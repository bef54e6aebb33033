//! Cold Call library - recency-weighted random name selection
//!
//! A small web service for picking a name from a class roster, biased
//! toward names that have not been chosen recently.
//!
//! # Architecture
//!
//! - **Roster**: names, selection history, and counts for one class
//! - **Registry**: independent rosters keyed by class name
//! - **Server**: axum routes exposing the registry as a JSON web API
//!
//! # Example
//!
//! ```
//! use cold_call::ClassRegistry;
//!
//! let registry = ClassRegistry::new();
//! registry.create_class("period 1").unwrap();
//! registry
//!     .with_roster("period 1", |roster| {
//!         roster.add_name("Ada");
//!         roster.add_name("Grace");
//!     })
//!     .unwrap();
//! let picked = registry
//!     .with_roster("period 1", |roster| roster.select_name())
//!     .unwrap()
//!     .unwrap();
//! assert!(picked == "Ada" || picked == "Grace");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod registry;
mod roster;
mod server;

// Crate-level exports - registry
pub use registry::{ClassRegistry, RegistryError};

// Crate-level exports - roster
pub use roster::{Roster, SelectError};

// Crate-level exports - web shell
pub use server::{
    AppState, ClassForm, ClassesResponse, FailureResponse, NameForm, NamesResponse, RenameForm,
    SelectionResponse, router,
};
