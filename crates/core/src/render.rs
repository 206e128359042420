//! Renderer dispatch: route a (template slug, design style) pair to resolved
//! card content under the uniform prop contract.
//!
//! Visual output belongs to the presentation layer; this module produces the
//! text it renders. Dispatch fails closed: an unknown style falls back to
//! `modern`, and an unknown slug still yields a card built from the hardcoded
//! fallback literals, never nothing.

use serde::{Deserialize, Serialize};

use crate::schema::{DesignStyle, SchemaRegistry};
use crate::session::{resolve_display_value, EditSession};
use crate::store::TextFieldStore;

/// Fallback recipient shown when no recipient name has been provided.
pub const FALLBACK_RECIPIENT: &str = "Örnek Alıcı";

/// Fallback body text shown when no main message has been provided.
pub const FALLBACK_MESSAGE: &str =
    "Bu bir örnek mesajdır. Kendi mesajınızı yazarak nasıl görüneceğini görebilirsiniz.";

/// The uniform contract every presentation surface receives.
///
/// `style` is accepted as a raw string and parsed leniently; garbage values
/// render the modern variant.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderRequest {
    /// Template slug. Callers that carry the slug out of band (URL path) may
    /// omit it from the payload and fill it in afterwards.
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub recipient_name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub creator_name: Option<String>,
    #[serde(default)]
    pub text_fields: TextFieldStore,
    #[serde(default)]
    pub is_editable: bool,
}

/// One resolved field: the key and the text the presentation layer shows.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResolvedField {
    pub key: String,
    pub value: String,
}

/// Resolved card content for one (slug, style) pair.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedCard {
    pub slug: String,
    pub style: DesignStyle,
    pub recipient_name: String,
    pub message: String,
    pub creator_name: Option<String>,
    /// Visible fields in schema order with their display values.
    pub fields: Vec<ResolvedField>,
}

/// Resolve card content for a render request.
///
/// For slugs with a registered schema, the visible fields for the selected
/// style are resolved through the display-value rule. For unknown slugs the
/// card degrades to the recipient/message pair with hardcoded fallbacks.
pub fn resolve_card(registry: &SchemaRegistry, request: &RenderRequest) -> ResolvedCard {
    let style = DesignStyle::parse_or_modern(request.style.as_deref().unwrap_or(""));
    let schema = registry.get(&request.slug);

    let session = EditSession::with_store(request.text_fields.clone(), request.is_editable);

    let recipient_name = resolve_display_value(
        None,
        request
            .recipient_name
            .as_deref()
            .or_else(|| request.text_fields.get("recipientName")),
        schema
            .and_then(|s| s.field("recipientName"))
            .and_then(|f| f.default_value.as_deref()),
        FALLBACK_RECIPIENT,
    )
    .to_string();

    let message = resolve_display_value(
        None,
        request
            .message
            .as_deref()
            .or_else(|| request.text_fields.get("mainMessage")),
        schema
            .and_then(|s| s.field("mainMessage"))
            .and_then(|f| f.default_value.as_deref()),
        FALLBACK_MESSAGE,
    )
    .to_string();

    let fields = match schema {
        Some(schema) => schema
            .visible_fields(style)
            .into_iter()
            .map(|f| ResolvedField {
                key: f.key.clone(),
                value: session.resolve(Some(schema), &f.key, "").to_string(),
            })
            .collect(),
        None => Vec::new(),
    };

    ResolvedCard {
        slug: request.slug.clone(),
        style,
        recipient_name,
        message,
        creator_name: request.creator_name.clone(),
        fields,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(slug: &str, style: Option<&str>) -> RenderRequest {
        RenderRequest {
            slug: slug.to_string(),
            style: style.map(String::from),
            recipient_name: None,
            message: None,
            creator_name: None,
            text_fields: TextFieldStore::new(),
            is_editable: false,
        }
    }

    #[test]
    fn unknown_style_renders_modern() {
        let registry = SchemaRegistry::built_in();
        let card = resolve_card(&registry, &request("seni-seviyorum", Some("vapor-wave")));
        assert_eq!(card.style, DesignStyle::Modern);
    }

    #[test]
    fn unknown_slug_degrades_to_fallback_card() {
        let registry = SchemaRegistry::built_in();
        let card = resolve_card(&registry, &request("does-not-exist", None));
        assert_eq!(card.recipient_name, FALLBACK_RECIPIENT);
        assert_eq!(card.message, FALLBACK_MESSAGE);
        assert!(card.fields.is_empty());
    }

    #[test]
    fn user_values_override_schema_defaults() {
        let registry = SchemaRegistry::built_in();
        let mut req = request("seni-seviyorum", Some("classic"));
        req.text_fields.set("footerMessage", "Bize özel mesaj");
        req.recipient_name = Some("Ayşe".to_string());

        let card = resolve_card(&registry, &req);
        assert_eq!(card.recipient_name, "Ayşe");
        let footer = card.fields.iter().find(|f| f.key == "footerMessage").unwrap();
        assert_eq!(footer.value, "Bize özel mesaj");
        // Untouched field still shows its schema default.
        let main = card.fields.iter().find(|f| f.key == "mainMessage").unwrap();
        assert!(main.value.starts_with("Sen benim hayatımın"));
    }

    #[test]
    fn style_partitioned_template_resolves_only_visible_fields() {
        let registry = SchemaRegistry::built_in();
        let card = resolve_card(&registry, &request("yil-donumu", Some("eglenceli")));
        let keys: Vec<&str> = card.fields.iter().map(|f| f.key.as_str()).collect();
        assert!(keys.contains(&"quizHeadline"));
        assert!(!keys.contains(&"headlineMessage"));
    }

    #[test]
    fn message_falls_back_to_text_fields_main_message() {
        let registry = SchemaRegistry::built_in();
        let mut req = request("tesekkur-adult", None);
        req.text_fields.set("mainMessage", "Teşekkürler dostum");
        let card = resolve_card(&registry, &req);
        assert_eq!(card.message, "Teşekkürler dostum");
    }
}
