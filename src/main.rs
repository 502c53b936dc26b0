use std::path::PathBuf;

use contact_book::store::ContactStore;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let mut file_path: Option<PathBuf> = None;
    let mut strict = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--file" | "-f" => {
                file_path = args.next().map(PathBuf::from);
                if file_path.is_none() {
                    eprintln!("Error: --file requires a path argument");
                    std::process::exit(1);
                }
            }
            "--strict" => strict = true,
            "--help" | "-h" => {
                println!("Contact Book - manage contacts stored in a JSON file");
                println!();
                println!("Usage: contact-book [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -f, --file <PATH>   Contacts file path (default: contacts.json)");
                println!("  --strict            Refuse to start if the contacts file cannot be loaded");
                println!("  -h, --help          Show this help");
                println!();
                println!("Set RUST_LOG=debug for diagnostic logging.");
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Use --help for usage information.");
                std::process::exit(1);
            }
        }
    }

    let file_path = file_path.unwrap_or_else(|| PathBuf::from("contacts.json"));

    let store = if strict {
        match ContactStore::open_strict(&file_path) {
            Ok(store) => store,
            Err(e) => {
                eprintln!("Error loading {}: {}", file_path.display(), e);
                eprintln!("Fix or move the file, or run without --strict to start empty.");
                std::process::exit(1);
            }
        }
    } else {
        ContactStore::open(&file_path)
    };

    contact_book::cli::run(store);
}
