//! Change-notification fan-out.
//!
//! Observers register per dataset under a typed `(category, role)` key
//! and opt into the notification classes they care about by overriding
//! the matching capability method. Delivery is synchronous and in
//! registration order: a mutating store call does not return until every
//! interested observer has finished refreshing. Callbacks receive the
//! store and pull the post-commit rows themselves — nothing is pushed, so
//! two observers can never see different truths for the same event.

use std::cell::RefCell;
use std::rc::Rc;

use roster_types::Category;

use crate::store::DatasetStore;

/// Which kind of change a commit made to a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// Rows were added or removed.
    Structural,
    /// An existing row's fields changed without rows moving.
    Content,
}

/// The surface role an observer plays for a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObserverRole {
    /// Identity-listing selection surfaces.
    Picker,
    /// Note-editing surfaces.
    NoteEditor,
    /// The editable tabular grid.
    Grid,
}

/// Registration key: at most one handle per `(category, role)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObserverKey {
    pub category: Category,
    pub role: ObserverRole,
}

impl ObserverKey {
    pub fn new(category: Category, role: ObserverRole) -> Self {
        Self { category, role }
    }
}

/// A surface interested in dataset changes.
///
/// Both methods default to no-ops; an observer overrides the classes it
/// cares about (identity-listing pickers, for instance, ignore content
/// changes by simply not implementing that capability). Implementations
/// must stay read-only with respect to the store during a refresh —
/// re-query via [`DatasetStore::read`], never mutate, which would
/// re-enter the bus mid-delivery.
pub trait DatasetObserver {
    /// Rows were added to or removed from `category`.
    fn on_structural_change(&self, store: &DatasetStore, category: Category) {
        let _ = (store, category);
    }

    /// An existing row of `category` changed.
    fn on_content_change(&self, store: &DatasetStore, category: Category) {
        let _ = (store, category);
    }
}

/// Registry of observer handles.
///
/// Registration is process-lifetime: handles are never unregistered, and
/// re-registering a key replaces the previous handle in place (last
/// registration wins, original delivery position kept).
#[derive(Default)]
pub struct NotificationBus {
    entries: RefCell<Vec<(ObserverKey, Rc<dyn DatasetObserver>)>>,
}

impl NotificationBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handle` under `key`.
    pub fn register(&self, key: ObserverKey, handle: Rc<dyn DatasetObserver>) {
        let mut entries = self.entries.borrow_mut();
        if let Some(entry) = entries.iter_mut().find(|(existing, _)| *existing == key) {
            entry.1 = handle;
        } else {
            entries.push((key, handle));
        }
    }

    /// Fans `change` out to every observer of `category` except the
    /// originating role, in registration order.
    ///
    /// Handles are cloned out of the registry before dispatch so a
    /// refresh can re-enter [`DatasetStore::read`] freely.
    pub(crate) fn notify(
        &self,
        store: &DatasetStore,
        category: Category,
        change: Change,
        exclude: Option<ObserverRole>,
    ) {
        let recipients: Vec<Rc<dyn DatasetObserver>> = self
            .entries
            .borrow()
            .iter()
            .filter(|(key, _)| key.category == category && Some(key.role) != exclude)
            .map(|(_, handle)| Rc::clone(handle))
            .collect();

        tracing::debug!(
            category = %category,
            change = ?change,
            recipients = recipients.len(),
            "notifying dataset observers"
        );

        for handle in recipients {
            match change {
                Change::Structural => handle.on_structural_change(store, category),
                Change::Content => handle.on_content_change(store, category),
            }
        }
    }
}
