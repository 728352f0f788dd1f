//! Text values.

use super::{typed_builder, Type, TypeKind};
use crate::messages::{ErrorMessage, MessageKey};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i:https?|ftp)://[^\s/$.?#][^\s]*$").expect("url pattern is valid")
});

/// A type accepting text.
#[derive(Clone)]
pub struct StringType<M = String> {
    inner: Type<M>,
}

typed_builder!(StringType);

impl<M: ErrorMessage> Default for StringType<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: ErrorMessage> StringType<M> {
    /// Creates a string type.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Type::new(TypeKind::String),
        }
    }

    fn text_rule<F>(mut self, key: MessageKey, predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.inner
            .push_fn_rule(key, move |value, _| value.as_str().is_some_and(&predicate));
        self
    }

    /// Requires at least `min` characters.
    #[must_use]
    pub fn min_length(self, min: usize) -> Self {
        self.text_rule(MessageKey::MinLength { min }, move |text| {
            text.chars().count() >= min
        })
    }

    /// Allows at most `max` characters.
    #[must_use]
    pub fn max_length(self, max: usize) -> Self {
        self.text_rule(MessageKey::MaxLength { max }, move |text| {
            text.chars().count() <= max
        })
    }

    /// Requires between `min` and `max` characters, inclusive.
    #[must_use]
    pub fn range_length(self, min: usize, max: usize) -> Self {
        self.text_rule(MessageKey::RangeLength { min, max }, move |text| {
            (min..=max).contains(&text.chars().count())
        })
    }

    /// Requires the text to match a pattern.
    #[must_use]
    pub fn pattern(self, pattern: Regex) -> Self {
        self.text_rule(MessageKey::Pattern, move |text| pattern.is_match(text))
    }

    /// Requires an email address.
    #[must_use]
    pub fn is_email(self) -> Self {
        self.text_rule(MessageKey::Email, |text| EMAIL.is_match(text))
    }

    /// Requires an http, https or ftp URL.
    #[must_use]
    pub fn is_url(self) -> Self {
        self.text_rule(MessageKey::Url, |text| URL.is_match(text))
    }

    /// Requires at least one letter.
    #[must_use]
    pub fn contains_letter(self) -> Self {
        self.text_rule(MessageKey::ContainsLetter, |text| {
            text.chars().any(char::is_alphabetic)
        })
    }

    /// Requires at least one uppercase letter.
    #[must_use]
    pub fn contains_uppercase_letter(self) -> Self {
        self.text_rule(MessageKey::ContainsUppercaseLetter, |text| {
            text.chars().any(char::is_uppercase)
        })
    }

    /// Requires at least one lowercase letter.
    #[must_use]
    pub fn contains_lowercase_letter(self) -> Self {
        self.text_rule(MessageKey::ContainsLowercaseLetter, |text| {
            text.chars().any(char::is_lowercase)
        })
    }

    /// Requires at least one ASCII digit.
    #[must_use]
    pub fn contains_number(self) -> Self {
        self.text_rule(MessageKey::ContainsNumber, |text| {
            text.chars().any(|c| c.is_ascii_digit())
        })
    }

    /// Requires the text to be one of `values`.
    #[must_use]
    pub fn is_one_of<I, S>(self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        let key = MessageKey::OneOf {
            values: values.join(", "),
        };
        self.text_rule(key, move |text| values.iter().any(|allowed| allowed == text))
    }
}
