use std::str::FromStr;

use super::student::{Student, StudentPayload};

/// Which form input an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Age,
    Email,
    City,
}

impl FormField {
    /// Fields in display order.
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Age,
        FormField::Email,
        FormField::City,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Full Name",
            FormField::Age => "Age",
            FormField::Email => "Email Address",
            FormField::City => "City",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Name => "Enter full name",
            FormField::Age => "Enter age",
            FormField::Email => "Enter email",
            FormField::City => "Enter city",
        }
    }

    /// Key used on the command line (`set name ...`).
    pub fn key(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Age => "age",
            FormField::Email => "email",
            FormField::City => "city",
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(FormField::Name),
            "age" => Ok(FormField::Age),
            "email" => Ok(FormField::Email),
            "city" => Ok(FormField::City),
            other => Err(format!(
                "Unknown field '{}'. Valid fields: name, age, email, city",
                other
            )),
        }
    }
}

/// Why a form buffer could not become a payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please fill in all fields.")]
    MissingFields,

    #[error("Please enter a valid age.")]
    InvalidAge { value: String },
}

/// Shared draft for the add and edit dialogs.
///
/// Age is kept as typed text and only parsed by [`FormBuffer::to_payload`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormBuffer {
    pub name: String,
    pub age: String,
    pub email: String,
    pub city: String,
}

impl FormBuffer {
    /// Prefill from an existing record (edit flow). An unreadable stored
    /// age leaves the age field blank.
    pub fn from_student(student: &Student) -> Self {
        Self {
            name: student.name.clone(),
            age: student.age.map(|age| age.to_string()).unwrap_or_default(),
            email: student.email.clone(),
            city: student.city.clone(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Age => &self.age,
            FormField::Email => &self.email,
            FormField::City => &self.city,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Age => self.age = value,
            FormField::Email => self.email = value,
            FormField::City => self.city = value,
        }
    }

    /// True when every field has non-whitespace content.
    pub fn is_complete(&self) -> bool {
        FormField::ALL
            .iter()
            .all(|&field| !self.get(field).trim().is_empty())
    }

    /// Validate and convert into a write payload.
    ///
    /// Blank checks run before the age is parsed, so a buffer with a blank
    /// field always reports `MissingFields`.
    pub fn to_payload(&self) -> Result<StudentPayload, FormError> {
        if !self.is_complete() {
            return Err(FormError::MissingFields);
        }

        let age = self
            .age
            .trim()
            .parse::<u32>()
            .map_err(|_| FormError::InvalidAge {
                value: self.age.clone(),
            })?;

        Ok(StudentPayload {
            name: self.name.clone(),
            age,
            email: self.email.clone(),
            city: self.city.clone(),
        })
    }
}
