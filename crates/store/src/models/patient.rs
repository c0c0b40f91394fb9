//! Patient models.

use serde::{Deserialize, Serialize};

/// A patient record, keyed by national ID.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    /// National ID (cedula) - the unique natural key.
    pub national_id: String,
    /// Display name.
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Incoming patient data for an upsert. Blank optional fields never
/// overwrite values already on file.
#[derive(Debug, Clone, Default)]
pub struct PatientInput {
    pub national_id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl PatientInput {
    pub fn new(national_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            national_id: national_id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Trim all fields and drop empty optionals.
    pub fn normalized(mut self) -> Self {
        self.national_id = self.national_id.trim().to_string();
        self.name = self.name.trim().to_string();
        let clean = |v: Option<String>| {
            v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
        };
        self.email = clean(self.email);
        self.phone = clean(self.phone);
        self.address = clean(self.address);
        self
    }
}
