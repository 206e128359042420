//! Template field-schema model and registry.
//!
//! Every greeting-card template is described by an ordered list of
//! [`FieldDescriptor`]s. The form layer renders inputs from the descriptors,
//! the preview layer resolves display text from them, and the order payload
//! serializes the user's values as a flat string map keyed by descriptor key.

use std::collections::BTreeMap;
use std::collections::HashMap;

use serde::Serialize;

/// Input widget for a field.
///
/// The kind also fixes the commit granularity of edits: single-line inputs
/// commit on every change event, multi-line blocks (contenteditable in the
/// front end) commit on blur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    SingleLine,
    MultiLine,
}

/// One of the four visual variants every template can be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DesignStyle {
    Modern,
    Classic,
    Minimalist,
    Eglenceli,
}

impl DesignStyle {
    /// All styles, in presentation order.
    pub const ALL: [DesignStyle; 4] = [
        DesignStyle::Modern,
        DesignStyle::Classic,
        DesignStyle::Minimalist,
        DesignStyle::Eglenceli,
    ];

    /// Parse a style name. Unknown or garbage values fall back to `Modern`;
    /// an unrecognized style must still render something.
    pub fn parse_or_modern(s: &str) -> Self {
        match s {
            "modern" => DesignStyle::Modern,
            "classic" => DesignStyle::Classic,
            "minimalist" => DesignStyle::Minimalist,
            "eglenceli" => DesignStyle::Eglenceli,
            _ => DesignStyle::Modern,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DesignStyle::Modern => "modern",
            DesignStyle::Classic => "classic",
            DesignStyle::Minimalist => "minimalist",
            DesignStyle::Eglenceli => "eglenceli",
        }
    }
}

/// Static metadata for one editable text slot of a template.
#[derive(Debug, Clone, Serialize)]
pub struct FieldDescriptor {
    /// Stable identifier, unique within the template's schema. Reused verbatim
    /// for form rendering, edit callbacks, and order serialization.
    pub key: String,
    /// Human-readable caption for the edit form.
    pub label: String,
    /// Hint text shown while the field is empty.
    pub placeholder: String,
    pub kind: FieldKind,
    /// Enforced at order submission only, not during editing.
    pub required: bool,
    /// Advisory upper bound on character count.
    pub max_length: Option<usize>,
    /// Seed value applied when the store has no entry for this key.
    pub default_value: Option<String>,
    /// Styles this field is visible for. `None` means the field is common to
    /// all styles.
    pub styles: Option<Vec<DesignStyle>>,
}

impl FieldDescriptor {
    /// A single-line text field.
    pub fn text(key: &str, label: &str, placeholder: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            kind: FieldKind::SingleLine,
            required: false,
            max_length: None,
            default_value: None,
            styles: None,
        }
    }

    /// A multi-line text field.
    pub fn textarea(key: &str, label: &str, placeholder: &str) -> Self {
        Self {
            kind: FieldKind::MultiLine,
            ..Self::text(key, label, placeholder)
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn default_value(mut self, value: &str) -> Self {
        self.default_value = Some(value.to_string());
        self
    }

    /// Restrict visibility to the given styles.
    pub fn styles(mut self, styles: &[DesignStyle]) -> Self {
        self.styles = Some(styles.to_vec());
        self
    }

    /// Whether this field is shown when `style` is selected.
    pub fn visible_for(&self, style: DesignStyle) -> bool {
        match &self.styles {
            None => true,
            Some(styles) => styles.contains(&style),
        }
    }
}

/// Ordered field schema for one template slug.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateSchema {
    pub slug: String,
    pub fields: Vec<FieldDescriptor>,
}

impl TemplateSchema {
    /// Build a schema, folding duplicate keys.
    ///
    /// If the descriptor list defines a key more than once, the last
    /// descriptor for that key wins and takes the position of the first
    /// occurrence, so field order stays stable.
    pub fn new(slug: &str, fields: Vec<FieldDescriptor>) -> Self {
        let mut order: Vec<String> = Vec::with_capacity(fields.len());
        let mut by_key: HashMap<String, FieldDescriptor> = HashMap::with_capacity(fields.len());
        for field in fields {
            if !by_key.contains_key(&field.key) {
                order.push(field.key.clone());
            }
            by_key.insert(field.key.clone(), field);
        }
        let fields = order
            .into_iter()
            .map(|key| by_key.remove(&key).expect("key recorded in order"))
            .collect();
        Self {
            slug: slug.to_string(),
            fields,
        }
    }

    /// Look up a descriptor by key.
    pub fn field(&self, key: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// The subset of fields visible for `style`, in schema order.
    ///
    /// Common fields (no style restriction) are always included. Fields that
    /// are filtered out here keep any values already entered for them; the
    /// store is never pruned on a style switch.
    pub fn visible_fields(&self, style: DesignStyle) -> Vec<&FieldDescriptor> {
        self.fields.iter().filter(|f| f.visible_for(style)).collect()
    }

    /// Initial text-field values: one entry per descriptor with a non-empty
    /// default. Descriptors without a default are omitted entirely, which
    /// keeps "no opinion" distinct from "explicitly empty".
    pub fn default_text_fields(&self) -> BTreeMap<String, String> {
        self.fields
            .iter()
            .filter_map(|f| {
                f.default_value
                    .as_deref()
                    .filter(|v| !v.is_empty())
                    .map(|v| (f.key.clone(), v.to_string()))
            })
            .collect()
    }
}

/// Read-only registry mapping template slugs to their schemas.
///
/// Built once at startup from the built-in catalog and injected wherever
/// schemas are needed (`Arc<SchemaRegistry>` in the API state). Lookups for
/// unknown slugs return `None` rather than an error: a page for a slug with
/// no registered schema still renders, with freeform fallback text.
#[derive(Debug)]
pub struct SchemaRegistry {
    schemas: HashMap<String, TemplateSchema>,
}

impl SchemaRegistry {
    pub fn from_schemas(schemas: Vec<TemplateSchema>) -> Self {
        let schemas = schemas
            .into_iter()
            .map(|s| (s.slug.clone(), s))
            .collect();
        Self { schemas }
    }

    /// Registry seeded with the built-in template catalog.
    pub fn built_in() -> Self {
        Self::from_schemas(crate::catalog::built_in_schemas())
    }

    pub fn get(&self, slug: &str) -> Option<&TemplateSchema> {
        self.schemas.get(slug)
    }

    /// Default text fields for a slug. Empty map for unknown slugs.
    pub fn default_text_fields(&self, slug: &str) -> BTreeMap<String, String> {
        self.get(slug)
            .map(|s| s.default_text_fields())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Registered slugs, sorted for stable output.
    pub fn slugs(&self) -> Vec<&str> {
        let mut slugs: Vec<&str> = self.schemas.keys().map(String::as_str).collect();
        slugs.sort_unstable();
        slugs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema_with_duplicate() -> TemplateSchema {
        TemplateSchema::new(
            "test-card",
            vec![
                FieldDescriptor::text("recipientName", "Alıcı", "Adını girin").required(),
                FieldDescriptor::textarea("mainMessage", "Mesaj", "Mesajınızı yazın")
                    .default_value("first definition"),
                FieldDescriptor::text("footerMessage", "Alt Mesaj", "Kısa mesaj"),
                FieldDescriptor::textarea("mainMessage", "Mesaj", "Mesajınızı yazın")
                    .default_value("last definition"),
            ],
        )
    }

    // --- Duplicate key folding ---

    #[test]
    fn duplicate_keys_fold_last_definition_wins() {
        let schema = schema_with_duplicate();
        assert_eq!(schema.fields.len(), 3);
        assert_eq!(
            schema.field("mainMessage").unwrap().default_value.as_deref(),
            Some("last definition")
        );
    }

    #[test]
    fn duplicate_keys_keep_first_position() {
        let schema = schema_with_duplicate();
        let keys: Vec<&str> = schema.fields.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, vec!["recipientName", "mainMessage", "footerMessage"]);
    }

    // --- Defaults ---

    #[test]
    fn default_text_fields_only_includes_defaulted_keys() {
        let schema = schema_with_duplicate();
        let defaults = schema.default_text_fields();
        assert_eq!(defaults.len(), 1);
        assert_eq!(defaults.get("mainMessage").unwrap(), "last definition");
        assert!(!defaults.contains_key("recipientName"));
    }

    #[test]
    fn empty_string_default_is_omitted() {
        let schema = TemplateSchema::new(
            "t",
            vec![FieldDescriptor::text("a", "A", "a").default_value("")],
        );
        assert!(schema.default_text_fields().is_empty());
    }

    // --- Style visibility ---

    #[test]
    fn visible_fields_is_identity_without_style_restrictions() {
        let schema = schema_with_duplicate();
        for style in DesignStyle::ALL {
            assert_eq!(schema.visible_fields(style).len(), schema.fields.len());
        }
    }

    #[test]
    fn visible_fields_filters_by_style_preserving_order() {
        let schema = TemplateSchema::new(
            "t",
            vec![
                FieldDescriptor::text("common", "C", "c"),
                FieldDescriptor::text("m1", "M1", "m").styles(&[DesignStyle::Modern]),
                FieldDescriptor::text("e1", "E1", "e").styles(&[DesignStyle::Eglenceli]),
                FieldDescriptor::text("m2", "M2", "m").styles(&[DesignStyle::Modern]),
            ],
        );
        let modern: Vec<&str> = schema
            .visible_fields(DesignStyle::Modern)
            .iter()
            .map(|f| f.key.as_str())
            .collect();
        assert_eq!(modern, vec!["common", "m1", "m2"]);

        let fun: Vec<&str> = schema
            .visible_fields(DesignStyle::Eglenceli)
            .iter()
            .map(|f| f.key.as_str())
            .collect();
        assert_eq!(fun, vec!["common", "e1"]);
    }

    // --- Registry ---

    #[test]
    fn unknown_slug_returns_none_and_empty_defaults() {
        let registry = SchemaRegistry::built_in();
        assert!(registry.get("does-not-exist").is_none());
        assert!(registry.default_text_fields("does-not-exist").is_empty());
    }

    #[test]
    fn style_parsing_falls_back_to_modern() {
        assert_eq!(DesignStyle::parse_or_modern("classic"), DesignStyle::Classic);
        assert_eq!(DesignStyle::parse_or_modern("garbage"), DesignStyle::Modern);
        assert_eq!(DesignStyle::parse_or_modern(""), DesignStyle::Modern);
    }
}
