//! # Roster Core
//!
//! The dataset coordination layer for the care roster register.
//!
//! Three named patient-record datasets (`SAMSA`, `TES`, `KORTTID`) are
//! each mirrored 1:1 by a flat CSV resource. This crate owns the shared
//! in-memory copies, the validation rules gating every mutation, the
//! load/sort/save protocol against the backing files and the
//! change-notification fan-out that keeps every registered surface
//! consistent after any surface mutates a dataset.
//!
//! Control flow for a mutation: validate → read current on-disk rows →
//! apply → persist (full atomic rewrite) → refresh the in-memory mirror →
//! notify observers, all as one synchronous unit. Expected bad input
//! (malformed fields, unknown identities) is rejected silently by leaving
//! prior state intact; only genuine I/O failure propagates to the caller.
//!
//! The model is single-threaded and event-driven: one logical thread runs
//! each operation to completion, including every observer refresh, before
//! the next external event. Observer handles are therefore `Rc`, and the
//! store uses plain interior mutability instead of locks.
//!
//! **No surface concerns**: form layout, window chrome and file-existence
//! bootstrapping belong to the binaries (`roster-run`, `roster-cli`), not
//! here. The core requires the backing resources to exist and be
//! readable.

pub mod bus;
pub mod codec;
pub mod config;
mod error;
pub mod record;
pub mod reconcile;
pub mod sort;
pub mod store;
pub mod validation;

pub use bus::{Change, DatasetObserver, NotificationBus, ObserverKey, ObserverRole};
pub use config::CoreConfig;
pub use error::{RosterError, RosterResult};
pub use record::{Column, Draft, Record, PLACEHOLDER};
pub use reconcile::ReconcileOutcome;
pub use sort::SortKey;
pub use store::DatasetStore;

pub use roster_types::{Area, Category, Enrollment, FieldError, Identity};
