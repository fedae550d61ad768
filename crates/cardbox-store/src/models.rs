//! Persisted card model plus the partial-input shapes fed to `save` and
//! `update`.
//!
//! [`CardRecord`] serializes with camelCase field names; that spelling is
//! the on-disk record format and must stay stable.

use cardbox_shared::PayloadKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored loyalty card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    /// Unique within the store; assigned at creation.
    pub id: String,
    /// User-supplied label.  May be empty right after creation.
    pub store_name: String,
    /// The code content; source of truth for re-display and re-rendering.
    pub payload: String,
    pub payload_kind: PayloadKind,
    /// Set once at creation, immutable afterwards.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every mutation.  Always >= `created_at`.
    pub updated_at: DateTime<Utc>,
}

/// Partial input for creating a card.  The payload is the one field a card
/// can never exist without, so it is required here.
#[derive(Debug, Clone, Default)]
pub struct CardDraft {
    /// Explicit id; a time-ordered UUID v7 is generated when absent.
    pub id: Option<String>,
    pub store_name: Option<String>,
    pub payload: String,
    /// Defaults to [`PayloadKind::Manual`].
    pub payload_kind: Option<PayloadKind>,
    /// Defaults to now.
    pub created_at: Option<DateTime<Utc>>,
}

impl CardDraft {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
            ..Self::default()
        }
    }
}

/// Partial update merged onto an existing card by `update`.
#[derive(Debug, Clone, Default)]
pub struct CardPatch {
    pub store_name: Option<String>,
    pub payload: Option<String>,
    pub payload_kind: Option<PayloadKind>,
}

impl CardRecord {
    /// Build a full record from partial input, filling defaults.
    pub(crate) fn from_draft(draft: CardDraft) -> Self {
        let now = Utc::now();
        let created_at = draft.created_at.unwrap_or(now);
        Self {
            id: draft
                .id
                .unwrap_or_else(|| Uuid::now_v7().to_string()),
            store_name: draft.store_name.unwrap_or_default(),
            payload: draft.payload,
            payload_kind: draft.payload_kind.unwrap_or(PayloadKind::Manual),
            created_at,
            // Clamped so `updated_at >= created_at` holds even for a
            // caller-supplied creation time ahead of the local clock.
            updated_at: now.max(created_at),
        }
    }

    /// Merge a patch onto this record.  The caller stamps `updated_at`.
    pub(crate) fn apply(&mut self, patch: CardPatch) {
        if let Some(store_name) = patch.store_name {
            self.store_name = store_name;
        }
        if let Some(payload) = patch.payload {
            self.payload = payload;
        }
        if let Some(payload_kind) = patch.payload_kind {
            self.payload_kind = payload_kind;
        }
    }
}
