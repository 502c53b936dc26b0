pub mod context;
pub mod contact_commands;

use crate::store::ContactStore;
use context::CLIContext;

/// Run the interactive REPL.
pub fn run(store: ContactStore) {
    println!("Welcome to the Contact Management System!");
    if let Some(e) = store.load_error() {
        println!("Error loading contacts: {}", e);
        println!("Starting with an empty contact book.");
    }
    println!("Type 'help' for commands, 'exit' to quit.");

    let mut ctx = CLIContext::new(store);
    repl_loop(&mut ctx);
}

fn repl_loop(ctx: &mut CLIContext) {
    loop {
        println!();
        let input = match ctx.read_line("> ") {
            Some(s) => s,
            None => break,
        };

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let (command, args) = parse_command(input);

        match command {
            "help" | "?" | "menu" => print_help(),
            "1" | "add" => contact_commands::add(ctx),
            "2" | "list" | "ls" => contact_commands::list(ctx),
            "3" | "search" | "find" => contact_commands::search(ctx, args),
            "4" | "update" | "edit" => contact_commands::update(ctx),
            "5" | "delete" | "rm" => contact_commands::delete(ctx),
            "6" | "stats" => contact_commands::print_stats(ctx),
            "7" | "save" => contact_commands::save(ctx),
            "8" | "quit" | "exit" | "q" => break,
            _ => println!("Unknown command: {}. Type 'help' for commands.", command),
        }
    }

    println!("{}", exit_message(&mut ctx.store));
}

/// Retries a failed save, if any, and reports whether the file is current.
fn exit_message(store: &mut ContactStore) -> String {
    if !store.has_unsaved_changes() {
        return "Goodbye! Your contacts have been saved.".to_string();
    }
    match store.save() {
        Ok(()) => "Goodbye! Your contacts have been saved.".to_string(),
        Err(e) => format!("Goodbye! Your latest changes may be lost. Error: {}", e),
    }
}

/// Split input into command and the rest of the line.
fn parse_command(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.find([' ', '\t']) {
        Some(pos) => (&input[..pos], input[pos..].trim()),
        None => (input, ""),
    }
}

fn print_help() {
    println!(r#"
COMMANDS:

  1, add                  Add a new contact
  2, list                 View all contacts
  3, search [term]        Search by name, phone, email, or address
  4, update               Update a contact by ID
  5, delete               Delete a contact by ID
  6, stats                Show contact statistics
  7, save                 Save contacts now
  8, exit / quit / q      Exit

  Every change is saved as soon as it is made."#);
}
