//! The dataset store: the single shared owner of the three datasets.
//!
//! Every mutating operation follows the same synchronous protocol:
//! validate, read the current on-disk rows, apply the change, persist the
//! full rewrite, refresh the in-memory mirror and fan out to observers.
//! From a caller's point of view the commit is atomic — there is no
//! observable state between "unchanged" and "persisted and observed".
//!
//! Expected bad input is rejected silently (`Ok(false)`, prior state
//! kept, no notification): malformed field values, identities that do not
//! resolve to exactly one record, out-of-range row positions. Only
//! genuine I/O failure propagates, since swallowing a lost write would
//! break the memory/disk consistency invariant.

use std::cell::RefCell;
use std::rc::Rc;

use roster_types::{Category, Identity};

use crate::bus::{Change, DatasetObserver, NotificationBus, ObserverKey, ObserverRole};
use crate::codec;
use crate::config::CoreConfig;
use crate::error::{RosterError, RosterResult};
use crate::record::{or_placeholder, Column, Draft, Record};
use crate::reconcile::{self, ReconcileOutcome};
use crate::sort::{self, SortKey};
use crate::validation;

/// Owner of the three in-memory datasets and their notification bus.
///
/// The store is single-threaded: observer handles are `Rc` and the
/// datasets live behind a `RefCell`. A dataset starts unloaded (empty
/// mirror) and mirrors its backing resource from the first read onwards.
pub struct DatasetStore {
    cfg: CoreConfig,
    datasets: RefCell<[Vec<Record>; 3]>,
    bus: NotificationBus,
}

impl DatasetStore {
    pub fn new(cfg: CoreConfig) -> Self {
        Self {
            cfg,
            datasets: RefCell::new([Vec::new(), Vec::new(), Vec::new()]),
            bus: NotificationBus::new(),
        }
    }

    pub fn config(&self) -> &CoreConfig {
        &self.cfg
    }

    /// Registers an observer surface for a dataset. Handles live for the
    /// rest of the process; there is no unregistration.
    pub fn register_observer(&self, key: ObserverKey, handle: Rc<dyn DatasetObserver>) {
        self.bus.register(key, handle);
    }

    /// Reads the current rows of `c` from the backing resource and
    /// refreshes the in-memory mirror.
    ///
    /// A header-only or fully empty resource is a dataset with zero rows,
    /// not an error. This is also the pull side of the notification
    /// protocol: observers call it to see post-commit truth.
    pub fn read(&self, c: Category) -> RosterResult<Vec<Record>> {
        let records = match codec::decode_all(&self.cfg.resource_path(c)) {
            Ok(records) => records,
            Err(RosterError::EmptyResource) => Vec::new(),
            Err(err) => return Err(err),
        };
        self.datasets.borrow_mut()[c.index()] = records.clone();
        Ok(records)
    }

    /// Appends a new record built from `draft` to dataset `c`.
    ///
    /// The draft identity must be well-formed; a malformed identity makes
    /// the whole operation a silent no-op. Empty optional text is stored
    /// as `"-"` — creation never rejects on emptiness. Fires a structural
    /// change on commit.
    pub fn append(&self, c: Category, draft: Draft) -> RosterResult<bool> {
        let Ok(identity) = Identity::parse(&draft.identity) else {
            tracing::debug!(category = %c, "append rejected: malformed identity");
            return Ok(false);
        };

        let mut records = self.read(c)?;
        records.push(Record::from_draft(identity, draft));
        self.commit(c, records, Change::Structural, None)?;
        Ok(true)
    }

    /// Deletes the unique record of `c` whose identity equals `identity`.
    ///
    /// Absence and ambiguity are both silent no-ops; repeating a delete
    /// is therefore idempotent. Fires a structural change on commit.
    pub fn delete(&self, c: Category, identity: &str) -> RosterResult<bool> {
        let mut records = self.read(c)?;
        let index = match locate(&records, identity) {
            Ok(index) => index,
            Err(miss) => {
                log_locate_miss(c, &miss);
                return Ok(false);
            }
        };

        records.remove(index);
        self.commit(c, records, Change::Structural, None)?;
        Ok(true)
    }

    /// Replaces the note of the unique record matching `identity`.
    ///
    /// An empty note is stored as `"-"`. Locate failures are silent
    /// no-ops. Fires a content change on commit — identity-listing
    /// surfaces are unaffected.
    pub fn edit_note(&self, c: Category, identity: &str, new_note: &str) -> RosterResult<bool> {
        let mut records = self.read(c)?;
        let index = match locate(&records, identity) {
            Ok(index) => index,
            Err(miss) => {
                log_locate_miss(c, &miss);
                return Ok(false);
            }
        };

        records[index].note = or_placeholder(new_note);
        self.commit(c, records, Change::Content, None)?;
        Ok(true)
    }

    /// Writes one cell in place at `row_index` of the current row order.
    ///
    /// Values that fail validation and out-of-range rows are silent
    /// no-ops. On commit, fires a structural change that skips
    /// `originator`: the grid a user is typing in is not re-rendered
    /// underneath them, while the dependent selection surfaces still
    /// refresh.
    pub fn edit_cell(
        &self,
        c: Category,
        row_index: usize,
        column: Column,
        raw_text: &str,
        originator: Option<ObserverRole>,
    ) -> RosterResult<bool> {
        if !validation::is_valid(column, raw_text) {
            tracing::debug!(
                category = %c,
                row_index,
                column = ?column,
                "cell edit rejected by validator"
            );
            return Ok(false);
        }

        let mut records = self.read(c)?;
        let Some(record) = records.get_mut(row_index) else {
            tracing::debug!(category = %c, row_index, "cell edit outside current rows");
            return Ok(false);
        };

        match column {
            Column::Identity => match Identity::parse(raw_text) {
                Ok(identity) => record.identity = identity,
                Err(_) => return Ok(false),
            },
            Column::FirstName => record.first_name = raw_text.to_owned(),
            Column::LastName => record.last_name = raw_text.to_owned(),
            Column::Area => record.area = raw_text.to_owned(),
            Column::Enrolled => record.enrolled = raw_text.to_owned(),
            Column::Note => record.note = raw_text.to_owned(),
        }

        self.commit(c, records, Change::Structural, originator)?;
        Ok(true)
    }

    /// Reconciles dataset `c` against a user-supplied identity list.
    ///
    /// If any element of `raw_list` fails format validation the entire
    /// operation is a no-op (`Ok(None)`). Otherwise identities missing
    /// from the list are removed and unknown identities are added as
    /// placeholder rows; removals and additions are each persisted as one
    /// full rewrite, each firing a structural change. Returns the
    /// removed/added summary for the surface to display.
    pub fn reconcile(&self, c: Category, raw_list: &str) -> RosterResult<Option<ReconcileOutcome>> {
        let Some(target) = reconcile::parse_identity_list(raw_list) else {
            tracing::debug!(category = %c, "reconcile rejected: malformed identity list");
            return Ok(None);
        };

        let records = self.read(c)?;
        let (removed, added) = reconcile::diff(&records, &target);

        let kept: Vec<Record> = records
            .into_iter()
            .filter(|record| !removed.contains(&record.identity))
            .collect();
        self.commit(c, kept, Change::Structural, None)?;

        let mut records = self.read(c)?;
        records.extend(added.iter().cloned().map(Record::placeholder));
        self.commit(c, records, Change::Structural, None)?;

        tracing::info!(
            category = %c,
            removed = removed.len(),
            added = added.len(),
            "reconciled dataset"
        );
        Ok(Some(ReconcileOutcome { removed, added }))
    }

    /// Stable reorder of `c` by `key`, re-synchronised against the
    /// backing resource first.
    ///
    /// Republishes the in-memory order only: the on-disk row order is
    /// untouched and no notification fires, so repopulating a grid from
    /// the returned rows cannot trigger another validate-and-persist
    /// cycle.
    pub fn sort(&self, c: Category, key: SortKey) -> RosterResult<Vec<Record>> {
        let mut records = self.read(c)?;
        sort::apply(&mut records, key);
        self.datasets.borrow_mut()[c.index()] = records.clone();
        Ok(records)
    }

    /// The single commit point: persist the full rewrite, refresh the
    /// in-memory mirror, then notify.
    ///
    /// If persisting fails the mirror still matches the last committed
    /// state and the error propagates — memory never runs ahead of disk.
    fn commit(
        &self,
        c: Category,
        records: Vec<Record>,
        change: Change,
        exclude: Option<ObserverRole>,
    ) -> RosterResult<()> {
        codec::encode_all(&records, &self.cfg.resource_path(c))?;
        self.datasets.borrow_mut()[c.index()] = records;
        self.bus.notify(self, c, change, exclude);
        Ok(())
    }
}

/// Index of the unique record matching `identity`.
fn locate(records: &[Record], identity: &str) -> RosterResult<usize> {
    let mut matches = records
        .iter()
        .enumerate()
        .filter(|(_, record)| record.identity.as_str() == identity);

    match (matches.next(), matches.next()) {
        (Some((index, _)), None) => Ok(index),
        (None, _) => Err(RosterError::NotFound(identity.to_owned())),
        (Some(_), Some(_)) => {
            let count = records
                .iter()
                .filter(|record| record.identity.as_str() == identity)
                .count();
            Err(RosterError::AmbiguousIdentity {
                identity: identity.to_owned(),
                count,
            })
        }
    }
}

/// Ambiguity marks a data-integrity violation and is logged louder than
/// plain absence, even though both recover as no-ops.
fn log_locate_miss(c: Category, miss: &RosterError) {
    match miss {
        RosterError::AmbiguousIdentity { identity, count } => {
            tracing::warn!(
                category = %c,
                identity = %identity,
                count,
                "identity matches multiple records; ignoring edit"
            );
        }
        _ => tracing::debug!(category = %c, "no matching record; ignoring edit"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_types::{Area, Enrollment};
    use std::cell::Cell;
    use tempfile::TempDir;

    fn test_store(dir: &TempDir) -> DatasetStore {
        let cfg = CoreConfig::new(dir.path().to_path_buf());
        for category in Category::ALL {
            codec::write_header_only(&cfg.resource_path(category))
                .expect("bootstrap backing resource");
        }
        DatasetStore::new(cfg)
    }

    fn draft(identity: &str, first: &str) -> Draft {
        Draft {
            identity: identity.to_owned(),
            first_name: first.to_owned(),
            last_name: "Svensson".to_owned(),
            area: Area::Centrum,
            enrolled: Enrollment::Yes,
            note: String::new(),
        }
    }

    #[derive(Default)]
    struct CountingObserver {
        structural: Cell<usize>,
        content: Cell<usize>,
    }

    impl DatasetObserver for CountingObserver {
        fn on_structural_change(&self, _store: &DatasetStore, _category: Category) {
            self.structural.set(self.structural.get() + 1);
        }

        fn on_content_change(&self, _store: &DatasetStore, _category: Category) {
            self.content.set(self.content.get() + 1);
        }
    }

    fn identities(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.identity.as_str()).collect()
    }

    #[test]
    fn append_then_fresh_read_yields_the_record() {
        let dir = TempDir::new().expect("temp dir");
        let store = test_store(&dir);

        assert!(store
            .append(Category::Samsa, draft("010101-1234", "Anna"))
            .expect("append should commit"));

        // Fresh decode straight off the backing resource.
        let records = codec::decode_all(&store.config().resource_path(Category::Samsa))
            .expect("resource should decode");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].identity.as_str(), "010101-1234");
        assert_eq!(records[0].first_name, "Anna");
        assert_eq!(records[0].area, "Centrum");
        assert_eq!(records[0].enrolled, "Ja");
        assert_eq!(records[0].note, "-");
    }

    #[test]
    fn append_coerces_empty_first_name_to_placeholder() {
        let dir = TempDir::new().expect("temp dir");
        let store = test_store(&dir);

        assert!(store
            .append(Category::Samsa, draft("010101-1234", ""))
            .expect("append should commit"));

        let records = store.read(Category::Samsa).expect("read");
        assert_eq!(records[0].first_name, "-");
    }

    #[test]
    fn append_rejects_malformed_identity_silently() {
        let dir = TempDir::new().expect("temp dir");
        let store = test_store(&dir);
        let observer = Rc::new(CountingObserver::default());
        store.register_observer(
            ObserverKey::new(Category::Samsa, ObserverRole::Picker),
            observer.clone(),
        );

        assert!(!store
            .append(Category::Samsa, draft("abc", "Anna"))
            .expect("rejection is not an error"));

        assert!(store.read(Category::Samsa).expect("read").is_empty());
        assert_eq!(observer.structural.get(), 0);
    }

    #[test]
    fn delete_is_idempotent() {
        let dir = TempDir::new().expect("temp dir");
        let store = test_store(&dir);
        store
            .append(Category::Tes, draft("010101-1234", "Anna"))
            .expect("append");
        store
            .append(Category::Tes, draft("020202-2345", "Bo"))
            .expect("append");

        assert!(store.delete(Category::Tes, "010101-1234").expect("delete"));
        assert!(!store
            .delete(Category::Tes, "010101-1234")
            .expect("second delete is a no-op"));

        let records = store.read(Category::Tes).expect("read");
        assert_eq!(identities(&records), vec!["020202-2345"]);
    }

    #[test]
    fn delete_ignores_ambiguous_identities() {
        let dir = TempDir::new().expect("temp dir");
        let store = test_store(&dir);
        let duplicated = vec![
            Record::placeholder(Identity::parse("010101-1234").expect("identity")),
            Record::placeholder(Identity::parse("010101-1234").expect("identity")),
        ];
        codec::encode_all(&duplicated, &store.config().resource_path(Category::Samsa))
            .expect("seed duplicate rows");

        assert!(!store
            .delete(Category::Samsa, "010101-1234")
            .expect("ambiguity is a no-op"));
        assert_eq!(store.read(Category::Samsa).expect("read").len(), 2);
    }

    #[test]
    fn edit_note_fires_content_class_only() {
        let dir = TempDir::new().expect("temp dir");
        let store = test_store(&dir);
        store
            .append(Category::Samsa, draft("010101-1234", "Anna"))
            .expect("append");

        let observer = Rc::new(CountingObserver::default());
        store.register_observer(
            ObserverKey::new(Category::Samsa, ObserverRole::NoteEditor),
            observer.clone(),
        );

        assert!(store
            .edit_note(Category::Samsa, "010101-1234", "ring anhörig")
            .expect("edit note"));

        assert_eq!(observer.content.get(), 1);
        assert_eq!(observer.structural.get(), 0);
        let records = store.read(Category::Samsa).expect("read");
        assert_eq!(records[0].note, "ring anhörig");
    }

    #[test]
    fn edit_note_empty_becomes_placeholder_and_missing_identity_is_noop() {
        let dir = TempDir::new().expect("temp dir");
        let store = test_store(&dir);
        store
            .append(Category::Korttid, draft("010101-1234", "Anna"))
            .expect("append");

        assert!(store
            .edit_note(Category::Korttid, "010101-1234", "")
            .expect("edit note"));
        assert_eq!(store.read(Category::Korttid).expect("read")[0].note, "-");

        assert!(!store
            .edit_note(Category::Korttid, "090909-9999", "x")
            .expect("unknown identity is a no-op"));
    }

    #[test]
    fn edit_cell_with_invalid_area_changes_nothing_and_stays_silent() {
        let dir = TempDir::new().expect("temp dir");
        let store = test_store(&dir);
        store
            .append(Category::Samsa, draft("010101-1234", "Anna"))
            .expect("append");

        let observer = Rc::new(CountingObserver::default());
        store.register_observer(
            ObserverKey::new(Category::Samsa, ObserverRole::Picker),
            observer.clone(),
        );

        assert!(!store
            .edit_cell(Category::Samsa, 0, Column::Area, "Nowhere", None)
            .expect("invalid edit is not an error"));

        assert_eq!(observer.structural.get(), 0);
        assert_eq!(observer.content.get(), 0);
        let records = codec::decode_all(&store.config().resource_path(Category::Samsa))
            .expect("decode");
        assert_eq!(records[0].area, "Centrum");
    }

    #[test]
    fn edit_cell_with_malformed_identity_never_persists() {
        let dir = TempDir::new().expect("temp dir");
        let store = test_store(&dir);
        store
            .append(Category::Samsa, draft("010101-1234", "Anna"))
            .expect("append");
        let before = std::fs::read_to_string(store.config().resource_path(Category::Samsa))
            .expect("read raw resource");

        assert!(!store
            .edit_cell(Category::Samsa, 0, Column::Identity, "abc", None)
            .expect("invalid edit is not an error"));

        let after = std::fs::read_to_string(store.config().resource_path(Category::Samsa))
            .expect("read raw resource");
        assert_eq!(before, after);
    }

    #[test]
    fn edit_cell_skips_the_originating_grid() {
        let dir = TempDir::new().expect("temp dir");
        let store = test_store(&dir);
        store
            .append(Category::Samsa, draft("010101-1234", "Anna"))
            .expect("append");

        let picker = Rc::new(CountingObserver::default());
        let grid = Rc::new(CountingObserver::default());
        store.register_observer(
            ObserverKey::new(Category::Samsa, ObserverRole::Picker),
            picker.clone(),
        );
        store.register_observer(
            ObserverKey::new(Category::Samsa, ObserverRole::Grid),
            grid.clone(),
        );

        assert!(store
            .edit_cell(
                Category::Samsa,
                0,
                Column::FirstName,
                "Annika",
                Some(ObserverRole::Grid),
            )
            .expect("edit cell"));

        assert_eq!(picker.structural.get(), 1);
        assert_eq!(grid.structural.get(), 0);
        assert_eq!(store.read(Category::Samsa).expect("read")[0].first_name, "Annika");
    }

    #[test]
    fn edit_cell_outside_current_rows_is_a_noop() {
        let dir = TempDir::new().expect("temp dir");
        let store = test_store(&dir);

        assert!(!store
            .edit_cell(Category::Samsa, 3, Column::Note, "x", None)
            .expect("out-of-range edit is not an error"));
    }

    #[test]
    fn notifications_stay_within_the_mutated_dataset() {
        let dir = TempDir::new().expect("temp dir");
        let store = test_store(&dir);

        let samsa = Rc::new(CountingObserver::default());
        let tes = Rc::new(CountingObserver::default());
        store.register_observer(
            ObserverKey::new(Category::Samsa, ObserverRole::Picker),
            samsa.clone(),
        );
        store.register_observer(
            ObserverKey::new(Category::Tes, ObserverRole::Picker),
            tes.clone(),
        );

        store
            .append(Category::Samsa, draft("010101-1234", "Anna"))
            .expect("append");

        assert_eq!(samsa.structural.get(), 1);
        assert_eq!(tes.structural.get(), 0);
    }

    #[test]
    fn last_registration_wins_for_a_key() {
        let dir = TempDir::new().expect("temp dir");
        let store = test_store(&dir);

        let first = Rc::new(CountingObserver::default());
        let second = Rc::new(CountingObserver::default());
        let key = ObserverKey::new(Category::Samsa, ObserverRole::Picker);
        store.register_observer(key, first.clone());
        store.register_observer(key, second.clone());

        store
            .append(Category::Samsa, draft("010101-1234", "Anna"))
            .expect("append");

        assert_eq!(first.structural.get(), 0);
        assert_eq!(second.structural.get(), 1);
    }

    #[test]
    fn delivery_follows_registration_order() {
        struct TaggingObserver {
            tag: &'static str,
            log: Rc<RefCell<Vec<&'static str>>>,
        }

        impl DatasetObserver for TaggingObserver {
            fn on_structural_change(&self, _store: &DatasetStore, _category: Category) {
                self.log.borrow_mut().push(self.tag);
            }
        }

        let dir = TempDir::new().expect("temp dir");
        let store = test_store(&dir);
        let log = Rc::new(RefCell::new(Vec::new()));

        store.register_observer(
            ObserverKey::new(Category::Samsa, ObserverRole::Picker),
            Rc::new(TaggingObserver { tag: "picker", log: log.clone() }),
        );
        store.register_observer(
            ObserverKey::new(Category::Samsa, ObserverRole::NoteEditor),
            Rc::new(TaggingObserver { tag: "notes", log: log.clone() }),
        );
        store.register_observer(
            ObserverKey::new(Category::Samsa, ObserverRole::Grid),
            Rc::new(TaggingObserver { tag: "grid", log: log.clone() }),
        );

        store
            .append(Category::Samsa, draft("010101-1234", "Anna"))
            .expect("append");

        assert_eq!(*log.borrow(), vec!["picker", "notes", "grid"]);
    }

    #[test]
    fn observers_can_read_post_commit_truth_during_refresh() {
        struct SnapshotObserver {
            seen: RefCell<Vec<String>>,
        }

        impl DatasetObserver for SnapshotObserver {
            fn on_structural_change(&self, store: &DatasetStore, category: Category) {
                let records = store.read(category).expect("refresh read");
                *self.seen.borrow_mut() = records
                    .iter()
                    .map(|r| r.identity.as_str().to_owned())
                    .collect();
            }
        }

        let dir = TempDir::new().expect("temp dir");
        let store = test_store(&dir);
        let observer = Rc::new(SnapshotObserver { seen: RefCell::new(Vec::new()) });
        store.register_observer(
            ObserverKey::new(Category::Samsa, ObserverRole::Picker),
            observer.clone(),
        );

        store
            .append(Category::Samsa, draft("010101-1234", "Anna"))
            .expect("append");

        assert_eq!(*observer.seen.borrow(), vec!["010101-1234".to_owned()]);
    }

    #[test]
    fn reconcile_applies_the_set_differences() {
        let dir = TempDir::new().expect("temp dir");
        let store = test_store(&dir);
        store
            .append(Category::Samsa, draft("010101-1234", "Anna"))
            .expect("append");
        store
            .append(Category::Samsa, draft("020202-2345", "Bo"))
            .expect("append");

        let outcome = store
            .reconcile(Category::Samsa, "020202-2345,030303-3456")
            .expect("reconcile")
            .expect("well-formed list");

        assert_eq!(identities_of(&outcome.removed), vec!["010101-1234"]);
        assert_eq!(identities_of(&outcome.added), vec!["030303-3456"]);

        let records = store.read(Category::Samsa).expect("read");
        let mut current = identities(&records);
        current.sort_unstable();
        assert_eq!(current, vec!["020202-2345", "030303-3456"]);

        // Added rows are placeholders.
        let added = records
            .iter()
            .find(|r| r.identity.as_str() == "030303-3456")
            .expect("added row present");
        assert_eq!(added.first_name, "-");
        assert_eq!(added.area, "-");
        assert_eq!(added.note, "-");
    }

    fn identities_of(list: &[Identity]) -> Vec<&str> {
        list.iter().map(Identity::as_str).collect()
    }

    #[test]
    fn reconcile_is_idempotent() {
        let dir = TempDir::new().expect("temp dir");
        let store = test_store(&dir);
        store
            .append(Category::Samsa, draft("010101-1234", "Anna"))
            .expect("append");

        let first = store
            .reconcile(Category::Samsa, "020202-2345")
            .expect("reconcile")
            .expect("well-formed list");
        assert!(!first.is_noop());

        let second = store
            .reconcile(Category::Samsa, "020202-2345")
            .expect("reconcile")
            .expect("well-formed list");
        assert!(second.is_noop());
    }

    #[test]
    fn reconcile_rejects_the_list_on_one_malformed_element() {
        let dir = TempDir::new().expect("temp dir");
        let store = test_store(&dir);
        store
            .append(Category::Samsa, draft("010101-1234", "Anna"))
            .expect("append");

        let outcome = store
            .reconcile(Category::Samsa, "020202-2345,abc")
            .expect("rejection is not an error");
        assert!(outcome.is_none());

        let records = store.read(Category::Samsa).expect("read");
        assert_eq!(identities(&records), vec!["010101-1234"]);
    }

    #[test]
    fn sort_reorders_memory_but_not_the_backing_resource() {
        let dir = TempDir::new().expect("temp dir");
        let store = test_store(&dir);
        store
            .append(Category::Samsa, draft("010101-1234", "Cilla"))
            .expect("append");
        store
            .append(Category::Samsa, draft("020202-2345", "Anna"))
            .expect("append");

        let sorted = store
            .sort(Category::Samsa, SortKey::FirstName)
            .expect("sort");
        assert_eq!(sorted[0].first_name, "Anna");

        // On-disk order is the append order, untouched by the sort.
        let on_disk = codec::decode_all(&store.config().resource_path(Category::Samsa))
            .expect("decode");
        assert_eq!(on_disk[0].first_name, "Cilla");
    }

    #[test]
    fn sort_fires_no_notification() {
        let dir = TempDir::new().expect("temp dir");
        let store = test_store(&dir);
        store
            .append(Category::Samsa, draft("010101-1234", "Anna"))
            .expect("append");

        let observer = Rc::new(CountingObserver::default());
        store.register_observer(
            ObserverKey::new(Category::Samsa, ObserverRole::Grid),
            observer.clone(),
        );

        store
            .sort(Category::Samsa, SortKey::LastName)
            .expect("sort");

        assert_eq!(observer.structural.get(), 0);
        assert_eq!(observer.content.get(), 0);
    }

    #[test]
    fn missing_backing_resource_propagates_as_an_io_error() {
        let dir = TempDir::new().expect("temp dir");
        // No bootstrap: the resources do not exist.
        let store = DatasetStore::new(CoreConfig::new(dir.path().to_path_buf()));

        let err = store
            .read(Category::Samsa)
            .expect_err("missing resource must not be swallowed");
        assert!(matches!(err, RosterError::FileRead(_)));
    }
}
