//! # cardbox-store
//!
//! Local persistence for loyalty cards, backed by SQLite used as a plain
//! key-value medium.  Every record lives under a `storecard_`-prefixed key
//! with the JSON-serialized [`CardRecord`] as its value, so the store can
//! enumerate its own records even when the medium is shared with unrelated
//! data.
//!
//! Error strategy is split per operation: reads (`list_all`, `get`,
//! `search`) are best-effort and degrade to empty results with a log line,
//! while writes (`save`, `update`, `delete`, `clear_all`) propagate
//! [`StoreError`] — silently losing a write is unacceptable.

pub mod cards;
pub mod database;
pub mod migrations;
pub mod models;

mod error;

pub use database::CardStore;
pub use error::StoreError;
pub use models::{CardDraft, CardPatch, CardRecord};
