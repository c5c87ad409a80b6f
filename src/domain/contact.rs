use std::fmt;

use super::*;
use serde::{Deserialize, Serialize};

/// Longest value (in characters) any contact field may hold.
pub const MAX_FIELD_LEN: usize = 50;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
pub struct Contact {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

pub enum ValidationReq {
    __,
}

impl ValidationReq {
    pub fn required_fields() -> String {
        "First name and phone are required".to_string()
    }

    pub fn field_len(field: &str) -> String {
        format!("{field} must not exceed {MAX_FIELD_LEN} characters")
    }
}

impl Contact {
    pub fn new(first_name: String, last_name: String, phone: String, email: String) -> Self {
        Contact {
            first_name,
            last_name,
            phone,
            email,
        }
    }

    /// Checks the fields a stored contact must satisfy on its own:
    /// first name and phone present, every field within [`MAX_FIELD_LEN`].
    pub fn validate(&self) -> Result<(), AppError> {
        if self.first_name.is_empty() || self.phone.is_empty() {
            return Err(AppError::Validation(ValidationReq::required_fields()));
        }

        for (field, value) in self.fields() {
            if value.chars().count() > MAX_FIELD_LEN {
                return Err(AppError::Validation(ValidationReq::field_len(field)));
            }
        }

        Ok(())
    }

    /// Same phone, or same exact first and last name.
    pub fn is_duplicate_of(&self, other: &Contact) -> bool {
        self.phone == other.phone
            || (self.first_name == other.first_name && self.last_name == other.last_name)
    }

    /// Case-insensitive substring match against first name, last name or phone.
    pub fn matches_term(&self, term: &str) -> bool {
        let term = term.to_lowercase();

        [&self.first_name, &self.last_name, &self.phone]
            .iter()
            .any(|field| field.to_lowercase().contains(&term))
    }

    /// Clips every field to [`MAX_FIELD_LEN`] characters.
    pub fn truncated(mut self) -> Self {
        for field in [
            &mut self.first_name,
            &mut self.last_name,
            &mut self.phone,
            &mut self.email,
        ] {
            if let Some((idx, _)) = field.char_indices().nth(MAX_FIELD_LEN) {
                field.truncate(idx);
            }
        }
        self
    }

    fn fields(&self) -> [(&'static str, &str); 4] {
        [
            ("First name", self.first_name.as_str()),
            ("Last name", self.last_name.as_str()),
            ("Phone", self.phone.as_str()),
            ("Email", self.email.as_str()),
        ]
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} | {} | {}",
            self.first_name, self.last_name, self.phone, self.email
        )
    }
}
