use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::SortKey;
use crate::errors::AppError;
use crate::storage::stores::DEFAULT_TXT_PATH;

#[derive(Parser, Debug)]
#[command(name = "phonebook", version, about = "Simple console phone book")]
pub struct Cli {
    /// Data file holding the saved contacts
    #[arg(long, env = "PHONEBOOK_FILE", default_value = DEFAULT_TXT_PATH)]
    pub file: PathBuf,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Runs the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// One-shot subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Import contacts from a .csv file into the data file
    Import {
        /// File path to the source .csv file
        #[arg(short, long)]
        src: PathBuf,
    },

    /// Export saved contacts to a .csv file
    Export {
        /// Destination .csv file, or a directory to write exported.csv into
        #[arg(short, long)]
        des: PathBuf,
    },
}

/// Menu entries of the interactive console.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuCommand {
    Add,
    Remove,
    Search,
    List,
    Save,
    Load,
    Exit,
}

/// Only the first character of `action` selects the entry.
pub fn parse_menu_command(action: &str) -> Result<MenuCommand, AppError> {
    match action.chars().next() {
        Some('1') => Ok(MenuCommand::Add),
        Some('2') => Ok(MenuCommand::Remove),
        Some('3') => Ok(MenuCommand::Search),
        Some('4') => Ok(MenuCommand::List),
        Some('5') => Ok(MenuCommand::Save),
        Some('6') => Ok(MenuCommand::Load),
        Some('0') => Ok(MenuCommand::Exit),
        _ => Err(AppError::ParseCommand(action.to_string())),
    }
}

/// A leading `1` sorts by first name, `2` by last name, anything else leaves
/// the order.
pub fn parse_sort_choice(choice: &str) -> SortKey {
    match choice.chars().next() {
        Some('1') => SortKey::FirstName,
        Some('2') => SortKey::LastName,
        _ => SortKey::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_choices() {
        assert_eq!(parse_menu_command("1").ok(), Some(MenuCommand::Add));
        assert_eq!(parse_menu_command("0").ok(), Some(MenuCommand::Exit));
        assert_eq!(parse_menu_command("1abc").ok(), Some(MenuCommand::Add));
        assert_eq!(parse_menu_command("4\r").ok(), Some(MenuCommand::List));
        assert!(parse_menu_command("").is_err());
        assert!(parse_menu_command(" 1").is_err());

        let err = parse_menu_command("9").unwrap_err();
        assert_eq!(format!("{}", err), "Unrecognized command: '9'");
    }

    #[test]
    fn sort_choices() {
        assert_eq!(parse_sort_choice("1"), SortKey::FirstName);
        assert_eq!(parse_sort_choice("2"), SortKey::LastName);
        assert_eq!(parse_sort_choice(""), SortKey::None);
        assert_eq!(parse_sort_choice("first"), SortKey::None);
        assert_eq!(parse_sort_choice("2 please"), SortKey::LastName);
    }

    #[test]
    fn cli_defaults_to_menu() {
        let cli = Cli::parse_from(["phonebook", "--file", "book.txt", "-vv"]);

        assert!(cli.command.is_none());
        assert_eq!(cli.file, PathBuf::from("book.txt"));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn cli_export_subcommand() {
        let cli = Cli::parse_from(["phonebook", "export", "--des", "out.csv"]);

        assert!(matches!(cli.command, Some(Commands::Export { ref des }) if des.ends_with("out.csv")));
    }
}
