use crate::{
    cli::{
        Console, init_tracing,
        command::{Cli, Commands, MenuCommand, parse_menu_command, parse_sort_choice},
    },
    config::{Config, load_env},
    prelude::{AppError, Contact, ContactStore, CsvStorage, LoadReport, Removal, is_affirmative},
};
use clap::Parser;
use std::{
    io::{self, BufRead, Write},
    path::Path,
};
use tracing::{error, info};

pub fn run_app() -> Result<(), AppError> {
    load_env();
    let cli = Cli::parse();
    let config = Config::from_cli(&cli);
    init_tracing(config.verbosity);

    info!(path = %config.data_path.display(), "using data file");

    match cli.command {
        None => {
            let mut store = ContactStore::new();
            let stdin = io::stdin();
            let console = Console::new(stdin.lock(), io::stdout());
            run_menu(&mut store, &config.data_path, console)?;
            Ok(())
        }

        // Import contacts into the data file from a .csv file
        Some(Commands::Import { src }) => {
            let mut store = ContactStore::new();
            store.load_from_file(&config.data_path)?;

            let (added, rejected) = store.import(&CsvStorage::new(&src)?)?;
            store.save_to_file(&config.data_path)?;

            println!(
                "Successfully imported {} contacts from {:?} ({} skipped).",
                added, src, rejected
            );
            Ok(())
        }

        // Export saved contacts to a .csv file
        Some(Commands::Export { des }) => {
            let mut store = ContactStore::new();
            store.load_from_file(&config.data_path)?;

            let storage = CsvStorage::new(&des)?;
            store.save(&storage)?;

            println!(
                "Successfully exported {} contacts to {:?}.",
                store.len(),
                storage.path
            );
            Ok(())
        }
    }
}

/// Interactive loop: loads `data_path` once, then maps each menu choice to a
/// single store call until `0` or end of input. Store errors are printed and
/// the loop carries on.
pub fn run_menu<R, W>(
    store: &mut ContactStore,
    data_path: &Path,
    mut console: Console<R, W>,
) -> Result<Console<R, W>, AppError>
where
    R: BufRead,
    W: Write,
{
    load(store, data_path, &mut console)?;

    loop {
        let Some(action) = console.show_menu()? else {
            break;
        };

        let command = match parse_menu_command(&action) {
            Ok(command) => command,
            Err(e) => {
                console.say(&e.to_string())?;
                continue;
            }
        };

        let finished = match command {
            MenuCommand::Add => add(store, &mut console)?,
            MenuCommand::Remove => remove(store, &mut console)?,
            MenuCommand::Search => search(store, &mut console)?,
            MenuCommand::List => list(store, &mut console)?,
            MenuCommand::Save => {
                save(store, data_path, &mut console)?;
                false
            }
            MenuCommand::Load => {
                load(store, data_path, &mut console)?;
                false
            }
            MenuCommand::Exit => {
                console.say("Goodbye.")?;
                break;
            }
        };

        if finished {
            break;
        }
    }

    Ok(console)
}

// Each handler returns true once input has run out.

/// Prompts for the four fields in order and hands them to the store as typed.
fn add<R: BufRead, W: Write>(
    store: &mut ContactStore,
    console: &mut Console<R, W>,
) -> Result<bool, AppError> {
    let mut fields = Vec::with_capacity(4);
    for prompt in [
        "Enter first name: ",
        "Enter last name: ",
        "Enter phone: ",
        "Enter email: ",
    ] {
        match console.prompt(prompt)? {
            Some(value) => fields.push(value),
            None => return Ok(true),
        }
    }

    let mut fields = fields.into_iter();
    let mut next = || fields.next().unwrap_or_default();
    let new_contact = Contact::new(next(), next(), next(), next());

    match store.add_contact(new_contact) {
        Ok(()) => console.say("Contact added successfully!")?,
        Err(e) => console.say(&e.to_string())?,
    }
    Ok(false)
}

/// Asks for a phone or first name, shows the match and removes it only on a
/// `y` answer. An unknown key is reported, not returned as an error.
fn remove<R: BufRead, W: Write>(
    store: &mut ContactStore,
    console: &mut Console<R, W>,
) -> Result<bool, AppError> {
    let Some(key) = console.prompt("Enter first name or phone of contact to remove: ")? else {
        return Ok(true);
    };

    let outcome = store.remove(&key, |contact| {
        console.say(&format!("Found contact: {}", contact))?;
        let answer = console.prompt("Are you sure you want to delete this contact? (y/N): ")?;
        Ok(answer.is_some_and(|a| is_affirmative(&a)))
    });

    match outcome {
        Ok(Removal::Removed(_)) => console.say("Contact deleted.")?,
        Ok(Removal::Cancelled(_)) => console.say("Deletion canceled.")?,
        Err(e @ AppError::NotFound(_)) => console.say(&e.to_string())?,
        Err(e) => return Err(e),
    }
    Ok(false)
}

fn search<R: BufRead, W: Write>(
    store: &ContactStore,
    console: &mut Console<R, W>,
) -> Result<bool, AppError> {
    let Some(term) =
        console.prompt("Enter search term (first name, last name, or part of phone): ")?
    else {
        return Ok(true);
    };

    let mut found = 0;
    for (i, contact) in store.search(&term).enumerate() {
        console.say(&format!("[{}] {}", i + 1, contact))?;
        found += 1;
    }

    if found == 0 {
        console.say("No matching contacts.")?;
    }
    Ok(false)
}

/// Sorting here reorders the store, so a following save keeps that order.
fn list<R: BufRead, W: Write>(
    store: &mut ContactStore,
    console: &mut Console<R, W>,
) -> Result<bool, AppError> {
    if store.is_empty() {
        console.say("No contacts.")?;
        return Ok(false);
    }

    let Some(choice) =
        console.prompt("Sort by: 1) First name  2) Last name  (other -> no sort): ")?
    else {
        return Ok(true);
    };

    let contacts = store.list(parse_sort_choice(&choice));

    console.say(&format!("Contacts ({}):", contacts.len()))?;
    for (i, contact) in contacts.iter().enumerate() {
        console.say(&format!("{}) {}", i + 1, contact))?;
    }
    Ok(false)
}

fn save<R: BufRead, W: Write>(
    store: &ContactStore,
    data_path: &Path,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    match store.save_to_file(data_path) {
        Ok(()) => console.say(&format!("Contacts saved to {}", data_path.display())),
        Err(e) => {
            error!(error = %e, "save failed");
            console.say(&format!("Failed to save contacts: {}", e))
        }
    }
}

/// Used at startup and for menu entry 6.
fn load<R: BufRead, W: Write>(
    store: &mut ContactStore,
    data_path: &Path,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    match store.load_from_file(data_path) {
        Ok(LoadReport::NotFound(path)) => {
            console.say(&format!("No saved contacts found ({}).", path.display()))
        }
        Ok(LoadReport::Loaded { loaded, skipped: 0 }) => console.say(&format!(
            "Loaded {} contacts from {}",
            loaded,
            data_path.display()
        )),
        Ok(LoadReport::Loaded { loaded, skipped }) => console.say(&format!(
            "Loaded {} contacts from {} ({} invalid records skipped)",
            loaded,
            data_path.display(),
            skipped
        )),
        Err(e) => {
            error!(error = %e, "load failed");
            console.say(&format!("Failed to load contacts: {}", e))
        }
    }
}
