//! Internationalization (i18n) support for Customer Desk
//! Supports multiple languages with easy extensibility
//!
//! Structure:
//! - i18n.rs: Core types (Language, Key, Locale) and translation lookup
//! - en.rs: English translations
//! - zh.rs: Chinese translations

mod en;
mod zh;

use std::collections::HashMap;

use crate::api::CustomerField;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Chinese,
}

impl Language {
    /// Get language display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Chinese => "中文",
        }
    }

    /// Get language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Chinese => "zh",
        }
    }

    /// Parse a settings code, falling back to English
    pub fn from_code(code: &str) -> Self {
        match code {
            "zh" => Language::Chinese,
            _ => Language::English,
        }
    }

    /// The other language, for the header toggle
    pub fn next(self) -> Self {
        match self {
            Language::English => Language::Chinese,
            Language::Chinese => Language::English,
        }
    }
}

/// Translation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // App
    AppName,

    // Header bar
    HeaderTitle,
    HeaderSubtitle,
    AddCustomerButton,
    Refresh,
    ThemeDark,
    ThemeLight,

    // Customers table
    TableName,
    TableEmail,
    TableEdit,
    TableDelete,
    TableEmpty,
    TableLoading,
    TableLoadFailed,

    // Customer form
    AddCustomerTitle,
    EditCustomerTitle,
    FieldFirstName,
    FieldLastName,
    FieldEmail,
    FieldTitle,
    FieldCountry,
    SelectPlaceholder,
    SelectLoading,
    SelectFailed,
    Submit,
    Submitting,
    Cancel,
    FormSubmitFailed,

    // Delete dialog
    DeleteCustomerTitle,
    DeleteCustomerMessage,
    Delete,
    Deleting,

    // Toasts
    CustomerSaved,
    CustomerDeleted,
    DeleteFailed,
}

impl Key {
    /// Label key for a form field
    pub fn field_label(field: CustomerField) -> Key {
        match field {
            CustomerField::FirstName => Key::FieldFirstName,
            CustomerField::LastName => Key::FieldLastName,
            CustomerField::Email => Key::FieldEmail,
            CustomerField::Title => Key::FieldTitle,
            CustomerField::Country => Key::FieldCountry,
        }
    }
}

/// Get translation for a key in the specified language
pub fn t(lang: Language, key: Key) -> &'static str {
    let translations: &HashMap<Key, &'static str> = match lang {
        Language::English => en::translations(),
        Language::Chinese => zh::translations(),
    };

    translations.get(&key).copied().unwrap_or("???")
}

/// Localization context that can be passed around
#[derive(Debug, Clone, Copy, Default)]
pub struct Locale {
    pub language: Language,
}

impl Locale {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Get translation for a key
    pub fn get(&self, key: Key) -> &'static str {
        t(self.language, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KEYS: &[Key] = &[
        Key::AppName,
        Key::HeaderTitle,
        Key::HeaderSubtitle,
        Key::AddCustomerButton,
        Key::Refresh,
        Key::ThemeDark,
        Key::ThemeLight,
        Key::TableName,
        Key::TableEmail,
        Key::TableEdit,
        Key::TableDelete,
        Key::TableEmpty,
        Key::TableLoading,
        Key::TableLoadFailed,
        Key::AddCustomerTitle,
        Key::EditCustomerTitle,
        Key::FieldFirstName,
        Key::FieldLastName,
        Key::FieldEmail,
        Key::FieldTitle,
        Key::FieldCountry,
        Key::SelectPlaceholder,
        Key::SelectLoading,
        Key::SelectFailed,
        Key::Submit,
        Key::Submitting,
        Key::Cancel,
        Key::FormSubmitFailed,
        Key::DeleteCustomerTitle,
        Key::DeleteCustomerMessage,
        Key::Delete,
        Key::Deleting,
        Key::CustomerSaved,
        Key::CustomerDeleted,
        Key::DeleteFailed,
    ];

    #[test]
    fn every_key_is_translated() {
        for lang in [Language::English, Language::Chinese] {
            for key in ALL_KEYS {
                assert_ne!(t(lang, *key), "???", "{:?} missing for {:?}", key, lang);
            }
        }
    }

    #[test]
    fn form_labels_match_english_copy() {
        let locale = Locale::new(Language::English);
        let labels: Vec<&str> = CustomerField::ALL
            .iter()
            .map(|f| locale.get(Key::field_label(*f)))
            .collect();
        assert_eq!(
            labels,
            ["First name", "Last name", "Email address", "Title", "Country"]
        );
        assert_eq!(locale.get(Key::Submit), "Submit");
    }

    #[test]
    fn language_codes_round_trip() {
        assert_eq!(Language::from_code(Language::Chinese.code()), Language::Chinese);
        assert_eq!(Language::from_code("fr"), Language::English);
        assert_eq!(Language::English.next(), Language::Chinese);
    }
}
