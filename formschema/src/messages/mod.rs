//! Default error messages.
//!
//! Rules and `required` may bind their own message payloads. Everything else
//! falls back to a default identified by a [`MessageKey`] and produced by the
//! payload type through [`ErrorMessage::from_key`]. `String` payloads are
//! rendered from the process-wide [`MessageCatalog`] at check time.

mod catalog;
mod key;

pub use catalog::MessageCatalog;
pub use key::MessageKey;

use parking_lot::RwLock;
use std::sync::Arc;
use tracing::info;

/// A payload type usable as an error message.
///
/// Implement this for structured or localized message types so defaults
/// can be produced without a string catalog.
pub trait ErrorMessage: Clone + Send + Sync + 'static {
    /// Produces the default message for a key.
    fn from_key(key: &MessageKey) -> Self;
}

impl ErrorMessage for String {
    fn from_key(key: &MessageKey) -> Self {
        message_catalog().render(key)
    }
}

/// Keeps the structured key as the message.
///
/// Keys compare with `PartialEq` only; group or count them by
/// [`MessageKey::code`] rather than using them as map keys.
impl ErrorMessage for MessageKey {
    fn from_key(key: &MessageKey) -> Self {
        key.clone()
    }
}

// Process-wide catalog used when rendering `String` messages
static GLOBAL_CATALOG: RwLock<Option<Arc<MessageCatalog>>> = RwLock::new(None);

/// Installs the catalog used for default `String` messages.
pub fn set_message_catalog(catalog: MessageCatalog) {
    info!(
        locale = %catalog.locale,
        templates = catalog.templates.len(),
        "Installed message catalog"
    );
    *GLOBAL_CATALOG.write() = Some(Arc::new(catalog));
}

/// Restores the built-in English messages.
pub fn clear_message_catalog() {
    *GLOBAL_CATALOG.write() = None;
}

/// Returns the active catalog.
///
/// Returns an empty catalog (built-in English text) if none is installed.
pub fn message_catalog() -> Arc<MessageCatalog> {
    GLOBAL_CATALOG
        .read()
        .clone()
        .unwrap_or_else(|| Arc::new(MessageCatalog::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_catalog_install_and_clear() {
        // Only overrides a code no other test asserts on.
        set_message_catalog(
            MessageCatalog::new()
                .with_template("string.contains_uppercase_letter", "Needs a capital"),
        );
        assert_eq!(
            String::from_key(&MessageKey::ContainsUppercaseLetter),
            "Needs a capital"
        );
        assert_eq!(String::from_key(&MessageKey::Required), "This field is required");

        clear_message_catalog();
        assert_eq!(
            String::from_key(&MessageKey::ContainsUppercaseLetter),
            "Must contain at least one uppercase letter"
        );
    }

    #[test]
    fn test_message_key_payload() {
        let key = MessageKey::MinLength { min: 4 };
        assert_eq!(MessageKey::from_key(&key), key);
    }

    #[test]
    fn test_message_keys_grouped_by_code() {
        use std::collections::HashMap;

        let keys = [
            MessageKey::Min { min: 1.5 },
            MessageKey::Min { min: 18.0 },
            MessageKey::Max { max: f64::NAN },
        ];
        let mut counts: HashMap<&'static str, usize> = HashMap::new();
        for key in &keys {
            *counts.entry(key.code()).or_default() += 1;
        }

        assert_eq!(counts.get("number.min"), Some(&2));
        assert_eq!(counts.get("number.max"), Some(&1));
        assert_ne!(keys[2], keys[2].clone());
        assert_eq!(keys[0], MessageKey::Min { min: 1.5 });
    }
}
