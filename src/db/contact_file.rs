use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{BookError, BookResult};
use crate::model::Contact;

/// Reads every contact from the backing file. A missing file is an empty
/// contact book; anything unreadable or malformed fails the whole load.
pub fn load(path: &Path) -> BookResult<Vec<Contact>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let raw = fs::read_to_string(path)?;
    let values: Vec<Value> = serde_json::from_str(&raw)?;

    let mut ids = HashSet::new();
    let mut phones = HashSet::new();
    let mut contacts = Vec::with_capacity(values.len());

    for (index, value) in values.into_iter().enumerate() {
        let contact = Contact::from_value(index, value)?;
        if contact.id.next().is_none() {
            return Err(BookError::MalformedRecord {
                index,
                reason: format!("id {} leaves no room for new contacts", contact.id),
            });
        }
        if !ids.insert(contact.id) {
            return Err(BookError::MalformedRecord {
                index,
                reason: format!("duplicate id {}", contact.id),
            });
        }
        if !phones.insert(contact.phone.clone()) {
            return Err(BookError::MalformedRecord {
                index,
                reason: format!("duplicate phone {}", contact.phone),
            });
        }
        contacts.push(contact);
    }

    Ok(contacts)
}

/// Overwrites the backing file with the full collection, in order,
/// as an indented JSON array.
pub fn save(path: &Path, contacts: &[Contact]) -> BookResult<()> {
    let values = contacts
        .iter()
        .map(Contact::to_value)
        .collect::<BookResult<Vec<Value>>>()?;
    let json = serde_json::to_string_pretty(&values)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Id;
    use chrono::NaiveDate;

    fn sample(id: u64, phone: &str) -> Contact {
        let at = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        Contact::create(Id::new(id), "Alice".into(), phone.into(), String::new(), String::new(), at)
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let contacts = load(&dir.path().join("nope.json")).unwrap();
        assert!(contacts.is_empty());
    }

    #[test]
    fn save_writes_indented_array_with_stored_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.json");
        save(&path, &[sample(1, "1234567890")]).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("[\n"));
        assert!(text.contains("\"created_date\": \"2024-03-01 09:30:00\""));
        assert!(text.contains("\"updated_date\": \"2024-03-01 09:30:00\""));
        assert!(text.contains("\"id\": 1"));
    }

    #[test]
    fn saved_records_load_back_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.json");
        let mut bob = sample(7, "2222222222");
        bob.email = "bob@y.org".into();
        bob.address = "5 Elm St".into();
        let contacts = vec![sample(3, "1111111111"), bob];

        save(&path, &contacts).unwrap();
        assert_eq!(load(&path).unwrap(), contacts);
    }

    #[test]
    fn largest_possible_id_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.json");
        save(&path, &[sample(u64::MAX, "1111111111")]).unwrap();

        assert!(matches!(load(&path), Err(BookError::MalformedRecord { index: 0, .. })));
    }

    #[test]
    fn duplicate_ids_are_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.json");
        save(&path, &[sample(1, "1111111111"), sample(1, "2222222222")]).unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, BookError::MalformedRecord { index: 1, .. }));
    }

    #[test]
    fn duplicate_phones_are_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.json");
        save(&path, &[sample(1, "1111111111"), sample(2, "1111111111")]).unwrap();

        assert!(matches!(load(&path), Err(BookError::MalformedRecord { index: 1, .. })));
    }

    #[test]
    fn non_array_document_is_a_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.json");
        fs::write(&path, "{\"id\": 1}").unwrap();

        assert!(matches!(load(&path), Err(BookError::Json(_))));
    }
}
