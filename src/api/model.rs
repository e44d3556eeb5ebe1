//! Customer API model types

use serde::{Deserialize, Deserializer, Serialize};

/// A persisted customer record as returned by `GET /customers`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Server-assigned identifier (json-server may hand out numbers)
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub country: String,
}

impl Customer {
    /// "First Last", trimmed when either half is missing
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Body of `POST /customers`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub title: String,
    pub country: String,
}

impl NewCustomer {
    /// Seed a draft from an existing record
    pub fn from_customer(customer: &Customer) -> Self {
        Self {
            first_name: customer.first_name.clone(),
            last_name: customer.last_name.clone(),
            email: customer.email.clone(),
            title: customer.title.clone(),
            country: customer.country.clone(),
        }
    }

    pub fn get(&self, field: CustomerField) -> &str {
        match field {
            CustomerField::FirstName => &self.first_name,
            CustomerField::LastName => &self.last_name,
            CustomerField::Email => &self.email,
            CustomerField::Title => &self.title,
            CustomerField::Country => &self.country,
        }
    }

    pub fn set(&mut self, field: CustomerField, value: String) {
        match field {
            CustomerField::FirstName => self.first_name = value,
            CustomerField::LastName => self.last_name = value,
            CustomerField::Email => self.email = value,
            CustomerField::Title => self.title = value,
            CustomerField::Country => self.country = value,
        }
    }

    /// True when every field holds something other than whitespace
    pub fn is_complete(&self) -> bool {
        CustomerField::ALL
            .iter()
            .all(|field| !self.get(*field).trim().is_empty())
    }
}

/// Body of `PATCH /customers/{id}` - absent fields are left untouched server-side
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl CustomerPatch {
    /// Copy only the listed fields out of a draft
    pub fn from_fields(draft: &NewCustomer, fields: impl IntoIterator<Item = CustomerField>) -> Self {
        let mut patch = Self::default();
        for field in fields {
            let value = Some(draft.get(field).to_string());
            match field {
                CustomerField::FirstName => patch.first_name = value,
                CustomerField::LastName => patch.last_name = value,
                CustomerField::Email => patch.email = value,
                CustomerField::Title => patch.title = value,
                CustomerField::Country => patch.country = value,
            }
        }
        patch
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.title.is_none()
            && self.country.is_none()
    }
}

/// The closed set of editable customer fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CustomerField {
    FirstName,
    LastName,
    Email,
    Title,
    Country,
}

impl CustomerField {
    pub const ALL: [CustomerField; 5] = [
        CustomerField::FirstName,
        CustomerField::LastName,
        CustomerField::Email,
        CustomerField::Title,
        CustomerField::Country,
    ];

    /// Wire name used in JSON bodies
    #[cfg(test)]
    pub fn json_name(&self) -> &'static str {
        match self {
            CustomerField::FirstName => "firstName",
            CustomerField::LastName => "lastName",
            CustomerField::Email => "email",
            CustomerField::Title => "title",
            CustomerField::Country => "country",
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}
