use chrono::NaiveDateTime;

use crate::error::{BookError, BookResult};
use crate::model::{Contact, Id};
use crate::queries::contact_queries;
use crate::validation::{self, trim_optional};

/// Fields to change on an existing contact. `None` leaves a field as it is;
/// `Some("")` clears an optional field.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactUpdate<'a> {
    pub name: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub email: Option<&'a str>,
    pub address: Option<&'a str>,
}

impl<'a> ContactUpdate<'a> {
    pub fn name(mut self, name: &'a str) -> Self {
        self.name = Some(name);
        self
    }

    pub fn phone(mut self, phone: &'a str) -> Self {
        self.phone = Some(phone);
        self
    }

    pub fn email(mut self, email: &'a str) -> Self {
        self.email = Some(email);
        self
    }

    pub fn address(mut self, address: &'a str) -> Self {
        self.address = Some(address);
        self
    }
}

pub fn add_contact(
    contacts: &mut Vec<Contact>,
    id: Id<Contact>,
    name: &str,
    phone: &str,
    email: &str,
    address: &str,
    now: NaiveDateTime,
) -> BookResult<Contact> {
    let valid_name = validation::non_blank(name, "Name")?;
    let valid_phone = validation::non_blank(phone, "Phone number")?;
    ensure_phone_free(contacts, &valid_phone, None)?;

    let contact = Contact::create(
        id,
        valid_name,
        valid_phone,
        trim_optional(email),
        trim_optional(address),
        now,
    );
    contacts.push(contact.clone());
    Ok(contact)
}

/// Applies `changes` to the contact with `id`. Returns `Ok(false)` when no
/// such contact exists. Nothing is modified when validation fails.
pub fn update_contact(
    contacts: &mut [Contact],
    id: Id<Contact>,
    changes: ContactUpdate<'_>,
    now: NaiveDateTime,
) -> BookResult<bool> {
    let Some(pos) = contacts.iter().position(|c| c.id == id) else {
        return Ok(false);
    };

    let name = changes
        .name
        .map(|n| validation::non_blank(n, "Name"))
        .transpose()?;
    let phone = changes
        .phone
        .map(|p| validation::non_blank(p, "Phone number"))
        .transpose()?;

    if let Some(p) = &phone {
        if *p != contacts[pos].phone {
            ensure_phone_free(contacts, p, Some(id))?;
        }
    }

    let contact = &mut contacts[pos];
    if let Some(n) = name {
        contact.name = n;
    }
    if let Some(p) = phone {
        contact.phone = p;
    }
    if let Some(e) = changes.email {
        contact.email = trim_optional(e);
    }
    if let Some(a) = changes.address {
        contact.address = trim_optional(a);
    }
    contact.touch(now);

    Ok(true)
}

pub fn delete_contact(contacts: &mut Vec<Contact>, id: Id<Contact>) -> bool {
    match contacts.iter().position(|c| c.id == id) {
        Some(pos) => {
            contacts.remove(pos);
            true
        }
        None => false,
    }
}

fn ensure_phone_free(
    contacts: &[Contact],
    phone: &str,
    except: Option<Id<Contact>>,
) -> BookResult<()> {
    match contact_queries::find_by_phone(contacts, phone) {
        Some(existing) if Some(existing.id) != except => Err(BookError::DuplicatePhone {
            phone: phone.to_string(),
        }),
        _ => Ok(()),
    }
}
