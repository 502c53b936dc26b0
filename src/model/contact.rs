use std::fmt;

use chrono::{NaiveDateTime, SubsecRound};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ids::Id;
use crate::error::{BookError, BookResult};

/// On-disk format of `created_date` and `updated_date`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single contact as stored in the contact book.
///
/// `email` and `address` are optional; an empty string means "not provided".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: Id<Contact>,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    #[serde(rename = "created_date", with = "timestamp")]
    pub created_at: NaiveDateTime,
    #[serde(rename = "updated_date", with = "timestamp")]
    pub updated_at: NaiveDateTime,
}

impl Contact {
    /// Builds a fresh record. Callers are expected to have trimmed and
    /// validated the text fields already.
    pub fn create(
        id: Id<Contact>,
        name: String,
        phone: String,
        email: String,
        address: String,
        now: NaiveDateTime,
    ) -> Self {
        let now = now.trunc_subsecs(0);
        Self {
            id,
            name,
            phone,
            email,
            address,
            created_at: now,
            updated_at: now,
        }
    }

    /// Refreshes `updated_at`, never moving it before `created_at`.
    pub fn touch(&mut self, now: NaiveDateTime) {
        self.updated_at = now.trunc_subsecs(0).max(self.created_at);
    }

    pub fn has_email(&self) -> bool {
        !self.email.is_empty()
    }

    pub fn has_address(&self) -> bool {
        !self.address.is_empty()
    }

    /// Case-insensitive substring match over every text field.
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        [&self.name, &self.phone, &self.email, &self.address]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }

    pub fn to_value(&self) -> BookResult<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Rebuilds a record from its stored form, keeping the stored id and
    /// timestamps. `index` is the record's position in the file and only
    /// feeds the error message.
    pub fn from_value(index: usize, value: Value) -> BookResult<Self> {
        let malformed = |reason: String| BookError::MalformedRecord { index, reason };

        let mut contact: Contact =
            serde_json::from_value(value).map_err(|e| malformed(e.to_string()))?;

        contact.name = contact.name.trim().to_string();
        contact.phone = contact.phone.trim().to_string();
        contact.email = contact.email.trim().to_string();
        contact.address = contact.address.trim().to_string();

        if contact.name.is_empty() {
            return Err(malformed("name is blank".into()));
        }
        if contact.phone.is_empty() {
            return Err(malformed("phone is blank".into()));
        }
        if contact.updated_at < contact.created_at {
            return Err(malformed("updated_date precedes created_date".into()));
        }

        Ok(contact)
    }
}

fn or_not_provided(value: &str) -> &str {
    if value.is_empty() {
        "Not provided"
    } else {
        value
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Phone: {}", self.phone)?;
        writeln!(f, "Email: {}", or_not_provided(&self.email))?;
        writeln!(f, "Address: {}", or_not_provided(&self.address))?;
        writeln!(f, "Created: {}", self.created_at.format(TIMESTAMP_FORMAT))?;
        writeln!(f, "Updated: {}", self.updated_at.format(TIMESTAMP_FORMAT))?;
        write!(f, "{}", "-".repeat(50))
    }
}

mod timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S: Serializer>(ts: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&ts.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}
