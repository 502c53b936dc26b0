use std::io::{self, Write};

use crate::error::BookError;
use crate::model::{Contact, Id};
use crate::store::ContactStore;

pub struct CLIContext {
    pub store: ContactStore,
}

impl CLIContext {
    pub fn new(store: ContactStore) -> Self {
        Self { store }
    }

    /// Prompt and read a line from stdin. Returns None on EOF.
    pub fn read_line(&self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok();
        let mut buf = String::new();
        match io::stdin().read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
            Err(_) => None,
        }
    }

    /// Read a line, trimmed.
    pub fn prompt(&self, prompt: &str) -> Option<String> {
        self.read_line(prompt).map(|s| s.trim().to_string())
    }

    /// Prompt until `accept` returns true. Prints `complaint` on each rejection.
    pub fn prompt_until(
        &self,
        prompt: &str,
        complaint: &str,
        accept: impl Fn(&str) -> bool,
    ) -> Option<String> {
        loop {
            let value = self.prompt(prompt)?;
            if accept(&value) {
                return Some(value);
            }
            println!("{}", complaint);
        }
    }

    /// Ask for a contact id and look it up. Prints an error and returns None
    /// when the input is not a number or no contact has that id.
    pub fn find_contact(&self, prompt: &str) -> Option<Contact> {
        let raw = self.prompt(prompt)?;
        let id: Id<Contact> = match raw.parse() {
            Ok(id) => id,
            Err(_) => {
                println!("Invalid contact ID!");
                return None;
            }
        };

        match self.store.get_by_id(id) {
            Some(c) => Some(c.clone()),
            None => {
                println!("Contact not found!");
                None
            }
        }
    }

    pub fn print_error(&self, e: &BookError) {
        println!("Error: {}", e);
    }
}
