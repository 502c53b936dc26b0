use crate::model::Contact;

#[derive(Debug, Clone)]
pub struct ContactStats {
    pub total: usize,
    pub with_email: usize,
    pub with_address: usize,
    /// Most recently created contacts, newest first.
    pub recent: Vec<Contact>,
}

impl ContactStats {
    pub fn email_percent(&self) -> f64 {
        percent(self.with_email, self.total)
    }

    pub fn address_percent(&self) -> f64 {
        percent(self.with_address, self.total)
    }
}

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

pub fn stats(contacts: &[Contact], recent_limit: usize) -> ContactStats {
    let with_email = contacts.iter().filter(|c| c.has_email()).count();
    let with_address = contacts.iter().filter(|c| c.has_address()).count();

    // Creation time ties fall back to id so the newest insert wins.
    let mut by_recency: Vec<&Contact> = contacts.iter().collect();
    by_recency.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

    ContactStats {
        total: contacts.len(),
        with_email,
        with_address,
        recent: by_recency.into_iter().take(recent_limit).cloned().collect(),
    }
}
