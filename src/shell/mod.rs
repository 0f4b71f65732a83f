//! Interactive menu shell for the roster.
//!
//! A refresh-style console loop in the spirit of a classic menu program:
//! print the menu, read a selection, run the matching flow, pause and clear
//! the screen. Output goes straight to stdout; input is read from any line
//! source so scripted sessions can drive the loop in tests.

use crate::cli::Cli;
use crate::error::Result;
use crate::registry::{AccountId, Registry, RemovalResult, SearchResult};
use crate::session::Session;
use crate::validate::{MAX_INPUT_LEN, ValidationOutcome};
use std::io::{self, BufRead, Write};


/// Presentation options for the shell loop.
#[derive(Debug, Clone)]
pub struct ShellOptions {
    /// Pause and clear the screen between actions.
    pub clear: bool,
}

impl From<&Cli> for ShellOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            clear: !cli.no_clear,
        }
    }
}

/// One entry in the numbered menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Add,
    Remove,
    List,
    Find,
    Exit,
}

impl MenuChoice {
    /// Parse a menu selection, ignoring surrounding whitespace.
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::Remove),
            "3" => Some(Self::List),
            "4" => Some(Self::Find),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Run the interactive shell over stdin until the user exits.
///
/// Registers the console defect reporter on the session's validator, then
/// drives the menu loop. Returns when the user picks the exit entry or
/// stdin reaches end of input.
pub fn run(session: &mut Session, opts: &ShellOptions) -> Result<()> {
    session.validator.register_reporter(Box::new(report_defect));

    let stdin = io::stdin();
    let mut input = stdin.lock();
    run_loop(session, &mut input, opts)
}

/// Drive the menu loop over an arbitrary line source.
pub(crate) fn run_loop<R: BufRead>(
    session: &mut Session,
    input: &mut R,
    opts: &ShellOptions,
) -> Result<()> {
    loop {
        print_menu();

        let Some(line) = prompt_line(input, "Select an option: ")? else {
            // End of input: leave as if the user chose to exit.
            break;
        };

        let Some(choice) = MenuChoice::parse(&line) else {
            println!();
            println!("Invalid selection. Please choose 1-5.");
            pause(input, opts)?;
            continue;
        };

        match choice {
            MenuChoice::Add => add_flow(session, input)?,
            MenuChoice::Remove => remove_flow(session, input)?,
            MenuChoice::List => list_accounts(&session.registry),
            MenuChoice::Find => find_flow(session, input)?,
            MenuChoice::Exit => {
                println!();
                println!("Exiting.");
                return Ok(());
            }
        }

        pause(input, opts)?;
    }

    Ok(())
}

/// Console reporter for validation defects, registered at shell startup.
///
/// Prints the diagnostic for the defect; the add flow re-prompts after.
fn report_defect(outcome: ValidationOutcome) {
    match outcome {
        ValidationOutcome::Valid => {}
        ValidationOutcome::InvalidLength => {
            println!();
            println!(
                "Error: account is longer than {} characters.",
                MAX_INPUT_LEN
            );
            println!("Please enter again.");
        }
        ValidationOutcome::InvalidCharacter => {
            println!();
            println!("Error: account contains invalid characters.");
            println!("Please enter again.");
        }
    }
}

/// Prompt for an account until it validates, then insert it unless it
/// already exists.
fn add_flow<R: BufRead>(session: &mut Session, input: &mut R) -> Result<()> {
    let id = loop {
        let Some(line) = prompt_line(input, "\nEnter account to add: ")? else {
            return Ok(());
        };

        // Blank input: prompt again without classifying.
        if line.is_empty() {
            continue;
        }

        // The reporter prints the diagnostic for a defect; just re-prompt.
        if session.validator.validate(&line) == ValidationOutcome::Valid {
            break AccountId::new(line);
        }
    };

    println!();
    if session.registry.exists(&id) {
        println!("Error: account '{}' already exists. Please enter another account.", id);
    } else {
        println!("Added account '{}' to the roster.", id);
        session.registry.insert(id);
    }

    Ok(())
}

/// Prompt for an account and remove it from the roster.
fn remove_flow<R: BufRead>(session: &mut Session, input: &mut R) -> Result<()> {
    let Some(line) = prompt_line(input, "\nEnter account to remove: ")? else {
        return Ok(());
    };
    let id = AccountId::new(line);

    println!();
    match session.registry.remove(&id) {
        RemovalResult::Removed => println!("Deleted account '{}' from the roster.", id),
        RemovalResult::NotFound => println!("Error: account '{}' not found in the roster.", id),
        RemovalResult::EmptyRegistry => print_no_accounts_yet(),
    }

    Ok(())
}

/// Print the roster, most recently added account first.
fn list_accounts(registry: &Registry) {
    println!();

    if registry.is_empty() {
        println!("No accounts to show.");
        return;
    }

    println!("Accounts ({}):", registry.len());
    for (position, id) in registry.iter().enumerate() {
        println!("  {}. {}", position + 1, id);
    }
}

/// Prompt for an account and report whether it is in the roster.
fn find_flow<R: BufRead>(session: &mut Session, input: &mut R) -> Result<()> {
    let Some(line) = prompt_line(input, "\nEnter account to search for: ")? else {
        return Ok(());
    };
    let id = AccountId::new(line);

    println!();
    match session.registry.find(&id) {
        SearchResult::Found => println!("Account '{}' is in the roster.", id),
        SearchResult::NotFound => println!("Account '{}' is not in the roster.", id),
        SearchResult::EmptyRegistry => print_no_accounts_yet(),
    }

    Ok(())
}

fn print_no_accounts_yet() {
    println!("No accounts have been created yet.");
    println!("Please add an account first.");
}

fn print_menu() {
    println!();
    println!("*---------- STUDENT ACCOUNT ROSTER ----------*");
    println!("|                                            |");
    println!("| 1. Add an account                          |");
    println!("| 2. Remove an account                       |");
    println!("| 3. List all accounts                       |");
    println!("| 4. Find an account                         |");
    println!("| 5. Exit                                    |");
    println!("|____________________________________________|");
    println!();
}

/// Print `prompt` and read one trimmed line; `None` at end of input.
fn prompt_line<R: BufRead>(input: &mut R, prompt: &str) -> Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

/// Wait for Enter, then clear the screen. Skipped when clearing is off.
fn pause<R: BufRead>(input: &mut R, opts: &ShellOptions) -> Result<()> {
    if !opts.clear {
        return Ok(());
    }

    println!();
    println!("---------------------------------------------");
    print!("Press Enter to continue . . . ");
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    clear_screen();
    Ok(())
}

fn clear_screen() {
    print!("\x1b[2J\x1b[H");
    let _ = io::stdout().flush();
}
