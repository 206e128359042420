//! Edit session: committed values plus a per-field pending buffer.
//!
//! There is a single source of truth per field: the committed
//! [`TextFieldStore`] plus an explicit pending-edit buffer. The renderer
//! reads through [`EditSession::resolve`], which applies the four-level
//! display-value rule.

use std::collections::BTreeMap;

use crate::schema::{FieldKind, TemplateSchema};
use crate::store::TextFieldStore;

/// Display-value resolution: the rule every presentation surface applies to
/// decide what text to show for a field. First match wins:
///
/// 1. pending (uncommitted) edit, edit mode only;
/// 2. non-empty committed value;
/// 3. schema default;
/// 4. the caller's hardcoded fallback literal.
pub fn resolve_display_value<'a>(
    pending: Option<&'a str>,
    committed: Option<&'a str>,
    schema_default: Option<&'a str>,
    fallback: &'a str,
) -> &'a str {
    if let Some(p) = pending {
        return p;
    }
    if let Some(c) = committed {
        if !c.is_empty() {
            return c;
        }
    }
    if let Some(d) = schema_default {
        return d;
    }
    fallback
}

/// One template instance's edit state.
///
/// Owned exclusively by the page that created it; dropped (with any pending
/// edits) when the user navigates away or switches template slug.
#[derive(Debug, Clone)]
pub struct EditSession {
    store: TextFieldStore,
    pending: BTreeMap<String, String>,
    editable: bool,
}

impl EditSession {
    /// Session seeded from a schema's defaults.
    pub fn for_schema(schema: &TemplateSchema, editable: bool) -> Self {
        Self::with_store(
            TextFieldStore::from_defaults(schema.default_text_fields()),
            editable,
        )
    }

    pub fn with_store(store: TextFieldStore, editable: bool) -> Self {
        Self {
            store,
            pending: BTreeMap::new(),
            editable,
        }
    }

    pub fn is_editable(&self) -> bool {
        self.editable
    }

    pub fn store(&self) -> &TextFieldStore {
        &self.store
    }

    /// Feed a user edit into the session.
    ///
    /// Single-line fields commit immediately (every keystroke of a structured
    /// input). Multi-line fields stage the value as pending until
    /// [`blur`](Self::blur); free-form editable text blocks only commit when
    /// they lose focus.
    pub fn input(&mut self, kind: FieldKind, key: &str, value: &str) {
        if !self.editable {
            return;
        }
        match kind {
            FieldKind::SingleLine => {
                self.pending.remove(key);
                self.store.set(key, value);
            }
            FieldKind::MultiLine => {
                self.pending.insert(key.to_string(), value.to_string());
            }
        }
    }

    /// Commit the pending value for `key`, if any.
    pub fn blur(&mut self, key: &str) {
        if let Some(value) = self.pending.remove(key) {
            self.store.set(key, &value);
        }
    }

    /// Commit all pending values (e.g. just before submitting an order).
    pub fn commit_all(&mut self) {
        let pending = std::mem::take(&mut self.pending);
        for (key, value) in pending {
            self.store.set(&key, &value);
        }
    }

    /// True if `key` has a staged, uncommitted edit.
    pub fn has_pending(&self, key: &str) -> bool {
        self.pending.contains_key(key)
    }

    /// Resolve the display text for `key` against a schema and a hardcoded
    /// fallback literal.
    pub fn resolve<'a>(
        &'a self,
        schema: Option<&'a TemplateSchema>,
        key: &str,
        fallback: &'a str,
    ) -> &'a str {
        let pending = if self.editable {
            self.pending.get(key).map(String::as_str)
        } else {
            None
        };
        let schema_default = schema
            .and_then(|s| s.field(key))
            .and_then(|f| f.default_value.as_deref());
        resolve_display_value(pending, self.store.get(key), schema_default, fallback)
    }

    /// Consume the session, committing pending edits, and return the store.
    pub fn into_store(mut self) -> TextFieldStore {
        self.commit_all();
        self.store
    }
}
