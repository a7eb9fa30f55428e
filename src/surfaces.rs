//! Terminal observer surfaces.
//!
//! Each panel mirrors one view of the roster application: the picker
//! lists identities for selection, the note panel tracks a selected
//! patient and pre-fills its stored note, and the grid renders the
//! editable table. All three refresh by re-reading through the store
//! when notified — none of them caches rows past a notification cycle.

use std::cell::RefCell;

use roster_core::{Category, DatasetObserver, DatasetStore, Record};

/// Identity-listing selection panel. Structural changes only: a note
/// edit never moves rows, so the selection list is unaffected by it.
pub struct PickerPanel {
    category: Category,
    items: RefCell<Vec<String>>,
}

impl PickerPanel {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            items: RefCell::new(Vec::new()),
        }
    }

    /// The current selection labels, `"<identity> <first> <last>"`.
    pub fn items(&self) -> Vec<String> {
        self.items.borrow().clone()
    }

    pub fn refresh(&self, store: &DatasetStore) {
        match store.read(self.category) {
            Ok(records) => {
                *self.items.borrow_mut() = records.iter().map(Record::picker_label).collect();
            }
            Err(err) => {
                tracing::warn!(category = %self.category, error = %err, "picker refresh failed");
            }
        }
    }
}

impl DatasetObserver for PickerPanel {
    fn on_structural_change(&self, store: &DatasetStore, _category: Category) {
        self.refresh(store);
    }
}

/// Note-editing panel: tracks a selected identity and shows its stored
/// note as the editing default. Refreshes on both notification classes —
/// a structural change can invalidate the selection, a content change
/// can rewrite the note under it.
pub struct NotePanel {
    category: Category,
    selected: RefCell<Option<String>>,
    note: RefCell<String>,
}

impl NotePanel {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            selected: RefCell::new(None),
            note: RefCell::new(String::new()),
        }
    }

    pub fn selected(&self) -> Option<String> {
        self.selected.borrow().clone()
    }

    /// The stored note of the selected patient, pre-filled for editing.
    pub fn note(&self) -> String {
        self.note.borrow().clone()
    }

    /// Selects `identity` and loads its stored note as the default.
    pub fn select(&self, store: &DatasetStore, identity: &str) {
        *self.selected.borrow_mut() = Some(identity.to_owned());
        self.refresh(store);
    }

    pub fn refresh(&self, store: &DatasetStore) {
        let records = match store.read(self.category) {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(category = %self.category, error = %err, "note refresh failed");
                return;
            }
        };

        // Fall back to the first row when nothing is selected or the
        // selection no longer exists, like a combo box snapping back to
        // its first item.
        let selected = self.selected.borrow().clone();
        let record = selected
            .as_deref()
            .and_then(|identity| records.iter().find(|r| r.identity.as_str() == identity))
            .or_else(|| records.first());

        match record {
            Some(record) => {
                *self.selected.borrow_mut() = Some(record.identity.as_str().to_owned());
                *self.note.borrow_mut() = record.note.clone();
            }
            None => {
                *self.selected.borrow_mut() = None;
                self.note.borrow_mut().clear();
            }
        }
    }
}

impl DatasetObserver for NotePanel {
    fn on_structural_change(&self, store: &DatasetStore, _category: Category) {
        self.refresh(store);
    }

    fn on_content_change(&self, store: &DatasetStore, _category: Category) {
        self.refresh(store);
    }
}

/// Editable table panel.
///
/// Refreshes on structural changes unless it originated the edit — the
/// store's skip-self delivery keeps the panel from being re-rendered
/// underneath the user mid-edit. Sort results are repopulated directly
/// from the returned rows, outside any notification cycle, so a
/// repopulation can never re-trigger validation or persistence.
pub struct GridPanel {
    category: Category,
    rows: RefCell<Vec<Record>>,
}

impl GridPanel {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            rows: RefCell::new(Vec::new()),
        }
    }

    /// Replaces the rendered rows without going through the store.
    pub fn repopulate(&self, rows: Vec<Record>) {
        *self.rows.borrow_mut() = rows;
    }

    pub fn refresh(&self, store: &DatasetStore) {
        match store.read(self.category) {
            Ok(records) => *self.rows.borrow_mut() = records,
            Err(err) => {
                tracing::warn!(category = %self.category, error = %err, "grid refresh failed");
            }
        }
    }

    /// Fixed-width rendering of the current rows.
    pub fn render(&self) -> String {
        let rows = self.rows.borrow();
        let mut out = format!(
            "{:<13} {:<12} {:<12} {:<18} {:<9} {}\n",
            "Personnummer", "Förnamn", "Efternamn", "Område", "Inskriven", "Anteckning"
        );
        if rows.is_empty() {
            out.push_str("(no records)\n");
            return out;
        }
        for (index, record) in rows.iter().enumerate() {
            out.push_str(&format!(
                "{index:<2} {:<11} {:<12} {:<12} {:<18} {:<9} {}\n",
                record.identity.as_str(),
                record.first_name,
                record.last_name,
                record.area,
                record.enrolled,
                record.note
            ));
        }
        out
    }
}

impl DatasetObserver for GridPanel {
    fn on_structural_change(&self, store: &DatasetStore, _category: Category) {
        self.refresh(store);
    }
}
