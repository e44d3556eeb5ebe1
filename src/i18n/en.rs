//! English translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "Customer Desk");

    // Header bar
    m.insert(Key::HeaderTitle, "Customers");
    m.insert(
        Key::HeaderSubtitle,
        "A list of all customers including their name, title, email and country.",
    );
    m.insert(Key::AddCustomerButton, "Add customer");
    m.insert(Key::Refresh, "Refresh");
    m.insert(Key::ThemeDark, "Dark");
    m.insert(Key::ThemeLight, "Light");

    // Customers table
    m.insert(Key::TableName, "Name");
    m.insert(Key::TableEmail, "Email");
    m.insert(Key::TableEdit, "Edit");
    m.insert(Key::TableDelete, "Delete");
    m.insert(Key::TableEmpty, "No customers yet.");
    m.insert(Key::TableLoading, "Loading customers...");
    m.insert(Key::TableLoadFailed, "Could not load customers.");

    // Customer form
    m.insert(Key::AddCustomerTitle, "Add Customer");
    m.insert(Key::EditCustomerTitle, "Edit Customer");
    m.insert(Key::FieldFirstName, "First name");
    m.insert(Key::FieldLastName, "Last name");
    m.insert(Key::FieldEmail, "Email address");
    m.insert(Key::FieldTitle, "Title");
    m.insert(Key::FieldCountry, "Country");
    m.insert(Key::SelectPlaceholder, "Select...");
    m.insert(Key::SelectLoading, "Loading...");
    m.insert(Key::SelectFailed, "Failed to load");
    m.insert(Key::Submit, "Submit");
    m.insert(Key::Submitting, "Submitting...");
    m.insert(Key::Cancel, "Cancel");
    m.insert(Key::FormSubmitFailed, "Failed to submit the form");

    // Delete dialog
    m.insert(Key::DeleteCustomerTitle, "Delete");
    m.insert(
        Key::DeleteCustomerMessage,
        "This customer will be removed permanently.",
    );
    m.insert(Key::Delete, "Delete");
    m.insert(Key::Deleting, "Deleting...");

    // Toasts
    m.insert(Key::CustomerSaved, "Customer saved");
    m.insert(Key::CustomerDeleted, "Customer deleted");
    m.insert(Key::DeleteFailed, "Failed to delete the customer");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
