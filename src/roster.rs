//! Recency-weighted name selection for a single class roster.
//!
//! A roster owns three pieces of state that are kept in sync by every
//! mutation: the list of names (in add order), the selection order (each
//! name at most once, most recent last), and the per-name selection counts.

use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};
use std::collections::BTreeMap;
use tracing::{debug, info, instrument, warn};

/// Errors that can occur when selecting a name.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SelectError {
    /// The roster has no names to draw from.
    #[display("No names available to select.")]
    EmptyRoster,
}

/// A class roster with recency-weighted random selection.
///
/// Names that have never been selected carry the maximum weight of 1.0.
/// Selected names are weighted by their position in the selection order,
/// so the draw is biased away from recent picks.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    names: Vec<String>,
    selection_order: Vec<String>,
    selection_counts: BTreeMap<String, u32>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a name to the roster.
    ///
    /// Empty names and exact duplicates (case-sensitive) are silently
    /// ignored; a fresh name starts with a selection count of zero.
    #[instrument(skip(self))]
    pub fn add_name(&mut self, name: &str) {
        if name.is_empty() {
            debug!("Ignoring empty name");
            return;
        }
        if self.names.iter().any(|n| n == name) {
            debug!(name, "Name already on roster");
            return;
        }
        self.names.push(name.to_string());
        self.selection_counts.insert(name.to_string(), 0);
        info!(name, total = self.names.len(), "Name added to roster");
    }

    /// Removes a name from the roster, its count, and the selection order.
    ///
    /// Absent names are silently ignored.
    #[instrument(skip(self))]
    pub fn delete_name(&mut self, name: &str) {
        let Some(pos) = self.names.iter().position(|n| n == name) else {
            debug!(name, "Name not on roster, nothing to delete");
            return;
        };
        self.names.remove(pos);
        self.selection_counts.remove(name);
        if let Some(order_pos) = self.selection_order.iter().position(|n| n == name) {
            self.selection_order.remove(order_pos);
        }
        info!(name, remaining = self.names.len(), "Name deleted from roster");
    }

    /// Draws one name using the thread RNG.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::EmptyRoster`] when the roster holds no names.
    pub fn select_name(&mut self) -> Result<String, SelectError> {
        self.select_name_with(&mut rand::thread_rng())
    }

    /// Draws one name using the provided RNG.
    ///
    /// Weights are computed per name (1.0 when never selected, otherwise
    /// inverse recency), normalized into a probability distribution, and a
    /// single weighted draw picks the winner. The drawn name moves to the
    /// end of the selection order and its count increments by one.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::EmptyRoster`] when the roster holds no names;
    /// nothing is mutated in that case.
    #[instrument(skip_all)]
    pub fn select_name_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<String, SelectError> {
        if self.names.is_empty() {
            warn!("Selection attempted on empty roster");
            return Err(SelectError::EmptyRoster);
        }

        let weights = self.weights();
        debug!(?weights, "Computed selection weights");

        // Every weight is in (0, 1], so the distribution is always valid.
        let distribution = WeightedIndex::new(&weights).expect("roster weights are positive");
        let selected = self.names[distribution.sample(rng)].clone();

        // Re-selection moves the name to the end rather than duplicating it.
        if let Some(pos) = self.selection_order.iter().position(|n| *n == selected) {
            self.selection_order.remove(pos);
        }
        self.selection_order.push(selected.clone());

        let entry = self.selection_counts.entry(selected.clone()).or_insert(0);
        *entry += 1;
        let count = *entry;

        info!(name = %selected, count, "Name selected");
        Ok(selected)
    }

    /// Returns the current selection weight for each name, in roster order.
    ///
    /// A name absent from the selection order weighs 1.0. Otherwise its
    /// weight is `1 / recency` where `recency` is the order length minus the
    /// name's 0-based index counted from the end. Weight is intentionally
    /// not monotonic in selection history; the formula is kept as-is.
    pub fn weights(&self) -> Vec<f64> {
        self.names
            .iter()
            .map(|name| {
                match self.selection_order.iter().rev().position(|n| n == name) {
                    None => 1.0,
                    Some(reverse_index) => {
                        let recency = self.selection_order.len() - reverse_index;
                        1.0 / recency as f64
                    }
                }
            })
            .collect()
    }

    /// Wipes the roster: names, selection order, and counts.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.names.clear();
        self.selection_order.clear();
        self.selection_counts.clear();
        info!("Roster reset");
    }

    /// Returns the names in add order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns the selection order, most recent last.
    pub fn selection_order(&self) -> &[String] {
        &self.selection_order
    }

    /// Returns the per-name selection counts.
    pub fn counts(&self) -> &BTreeMap<String, u32> {
        &self.selection_counts
    }

    /// Checks whether the roster holds no names.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
