use crate::cli::context::CLIContext;
use crate::model::{Contact, TIMESTAMP_FORMAT};
use crate::ops::ContactUpdate;
use crate::validation::{valid_email, valid_phone};

const RECENT_LIMIT: usize = 3;
const EMAIL_COLUMN: usize = 25;

/// Values collected by the add and "all details" prompts, already trimmed
/// and format-checked.
struct ContactInput {
    name: String,
    phone: String,
    email: String,
    address: String,
}

fn read_contact_input(ctx: &CLIContext) -> Option<ContactInput> {
    println!("Contact information");
    println!("{}", "-".repeat(30));

    let name = ctx.prompt_until("Enter contact name: ", "Name cannot be empty!", |s| {
        !s.is_empty()
    })?;
    let phone = read_phone(ctx, "Enter phone number: ")?;
    let email = read_email(ctx, "Enter email address (optional): ")?;
    let address = ctx.prompt("Enter address (optional): ")?;

    Some(ContactInput {
        name,
        phone,
        email,
        address,
    })
}

fn read_phone(ctx: &CLIContext, prompt: &str) -> Option<String> {
    ctx.prompt_until(
        prompt,
        "Please enter a valid phone number (at least 10 digits)!",
        |s| !s.is_empty() && valid_phone(s),
    )
}

fn read_email(ctx: &CLIContext, prompt: &str) -> Option<String> {
    ctx.prompt_until(prompt, "Please enter a valid email address!", valid_email)
}

pub fn add(ctx: &mut CLIContext) {
    println!();
    println!("Add new contact");

    let Some(input) = read_contact_input(ctx) else {
        return;
    };

    match ctx
        .store
        .add(&input.name, &input.phone, &input.email, &input.address)
    {
        Ok(contact) => {
            println!();
            println!("Contact added successfully!");
            println!("Contact ID: {}", contact.id);
            println!("Name: {}", contact.name);
            println!("Phone: {}", contact.phone);
        }
        Err(e) => ctx.print_error(&e),
    }
}

pub fn list(ctx: &CLIContext) {
    let contacts = ctx.store.list_all();
    if contacts.is_empty() {
        println!();
        println!("No contacts found!");
        return;
    }

    println!();
    println!("All contacts ({} total)", contacts.len());
    println!("{}", "=".repeat(60));
    println!("{:<6} {:<20} {:<15} {:<25}", "ID", "Name", "Phone", "Email");
    println!("{}", "-".repeat(70));

    for contact in contacts {
        println!(
            "{:<6} {:<20} {:<15} {:<25}",
            contact.id.to_string(),
            contact.name,
            contact.phone,
            truncate_email(&contact.email)
        );
    }

    println!();
    println!("Use 'search' to view detailed information.");
}

/// Shortens long emails to fit the list column.
pub fn truncate_email(email: &str) -> String {
    if email.chars().count() > EMAIL_COLUMN {
        let head: String = email.chars().take(EMAIL_COLUMN - 3).collect();
        format!("{}...", head)
    } else {
        email.to_string()
    }
}

pub fn search(ctx: &CLIContext, args: &str) {
    println!();
    println!("Search contacts");

    let query = if args.is_empty() {
        match ctx.prompt("Enter search term (name, phone, email, or address): ") {
            Some(q) => q,
            None => return,
        }
    } else {
        args.trim().to_string()
    };

    if query.is_empty() {
        println!("Search term cannot be empty!");
        return;
    }

    let results = ctx.store.search(&query);
    if results.is_empty() {
        println!();
        println!("No contacts found matching '{}'", query);
        return;
    }

    println!();
    println!("Search results ({} found)", results.len());
    println!("{}", "=".repeat(60));
    for contact in results {
        println!("{}", contact);
    }
}

pub fn update(ctx: &mut CLIContext) {
    println!();
    println!("Update contact");

    let Some(contact) = ctx.find_contact("Enter contact ID to update: ") else {
        return;
    };

    println!();
    println!("Current contact details:");
    println!("{}", contact);
    println!();
    println!("What would you like to update?");
    println!("  1. Name");
    println!("  2. Phone");
    println!("  3. Email");
    println!("  4. Address");
    println!("  5. All details");

    let Some(choice) = ctx.prompt("Select option (1-5): ") else {
        return;
    };

    let (result, what) = match choice.as_str() {
        "1" => {
            let Some(name) = ctx.prompt("Enter new name: ") else {
                return;
            };
            if name.is_empty() {
                println!("Name cannot be empty!");
                return;
            }
            (apply(ctx, &contact, ContactUpdate::default().name(&name)), "name")
        }
        "2" => {
            let Some(phone) = read_phone(ctx, "Enter new phone number: ") else {
                return;
            };
            (apply(ctx, &contact, ContactUpdate::default().phone(&phone)), "phone")
        }
        "3" => {
            let Some(email) = read_email(ctx, "Enter new email address: ") else {
                return;
            };
            (apply(ctx, &contact, ContactUpdate::default().email(&email)), "email")
        }
        "4" => {
            let Some(address) = ctx.prompt("Enter new address: ") else {
                return;
            };
            (apply(ctx, &contact, ContactUpdate::default().address(&address)), "address")
        }
        "5" => {
            let Some(input) = read_contact_input(ctx) else {
                return;
            };
            let changes = ContactUpdate::default()
                .name(&input.name)
                .phone(&input.phone)
                .email(&input.email)
                .address(&input.address);
            (apply(ctx, &contact, changes), "details")
        }
        _ => {
            println!("Invalid choice!");
            return;
        }
    };

    match result {
        Some(true) => println!("Contact {} updated successfully!", what),
        Some(false) => println!("Failed to update contact {}!", what),
        None => {}
    }
}

/// Runs the update, printing any error. None means an error was shown.
fn apply(ctx: &mut CLIContext, contact: &Contact, changes: ContactUpdate<'_>) -> Option<bool> {
    match ctx.store.update(contact.id, changes) {
        Ok(updated) => Some(updated),
        Err(e) => {
            ctx.print_error(&e);
            None
        }
    }
}

pub fn delete(ctx: &mut CLIContext) {
    println!();
    println!("Delete contact");

    let Some(contact) = ctx.find_contact("Enter contact ID to delete: ") else {
        return;
    };

    println!();
    println!("Contact to delete:");
    println!("{}", contact);

    let confirm = ctx
        .prompt("Are you sure you want to delete this contact? (y/n): ")
        .unwrap_or_default()
        .to_lowercase();
    if confirm != "y" && confirm != "yes" {
        println!("Contact deletion cancelled.");
        return;
    }

    match ctx.store.delete(contact.id) {
        Ok(true) => println!("Contact deleted successfully!"),
        Ok(false) => println!("Failed to delete contact!"),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn print_stats(ctx: &CLIContext) {
    let stats = ctx.store.statistics(RECENT_LIMIT);

    println!();
    println!("Contact statistics");
    println!("{}", "=".repeat(40));
    println!("Total contacts: {}", stats.total);

    if stats.total == 0 {
        return;
    }

    println!(
        "Contacts with email: {} ({:.1}%)",
        stats.with_email,
        stats.email_percent()
    );
    println!(
        "Contacts with address: {} ({:.1}%)",
        stats.with_address,
        stats.address_percent()
    );

    println!();
    println!("Recent contacts:");
    for contact in &stats.recent {
        println!(
            "  - {} ({})",
            contact.name,
            contact.created_at.format(TIMESTAMP_FORMAT)
        );
    }
}

pub fn save(ctx: &mut CLIContext) {
    match ctx.store.save() {
        Ok(()) => println!("Contacts saved successfully!"),
        Err(e) => ctx.print_error(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_email_keeps_short_addresses() {
        assert_eq!(truncate_email("a@x.com"), "a@x.com");
        let exactly = "abcdefghijklmnopqrs@x.com";
        assert_eq!(exactly.len(), 25);
        assert_eq!(truncate_email(exactly), exactly);
    }

    #[test]
    fn truncate_email_shortens_long_addresses() {
        let long = "someone.with.a.long.name@example.com";
        let shown = truncate_email(long);
        assert_eq!(shown, "someone.with.a.long.na...");
        assert_eq!(shown.chars().count(), 25);
    }
}
