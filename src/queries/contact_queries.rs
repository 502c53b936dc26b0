use crate::model::{Contact, Id};

pub fn find_by_id(contacts: &[Contact], id: Id<Contact>) -> Option<&Contact> {
    contacts.iter().find(|c| c.id == id)
}

/// Looks a contact up by phone. The query is trimmed; the comparison is exact.
pub fn find_by_phone<'a>(contacts: &'a [Contact], phone: &str) -> Option<&'a Contact> {
    let phone = phone.trim();
    contacts.iter().find(|c| c.phone == phone)
}

/// Case-insensitive substring search over name, phone, email and address.
/// Results keep store order. A blank query matches nothing.
pub fn search<'a>(contacts: &'a [Contact], query: &str) -> Vec<&'a Contact> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    contacts.iter().filter(|c| c.matches(&needle)).collect()
}

/// All contacts ordered by name, ignoring case. Equal names keep store order.
pub fn sorted_by_name(contacts: &[Contact]) -> Vec<&Contact> {
    let mut sorted: Vec<&Contact> = contacts.iter().collect();
    sorted.sort_by_cached_key(|c| c.name.to_lowercase());
    sorted
}
