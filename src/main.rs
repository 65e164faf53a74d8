//! Account Manager - Entry Point
//!
//! Interactive menu front end over the account service. All prompting and
//! rendering happens here; the library only sees already-collected strings
//! and reports structured results back.

use std::io::{self, BufRead, Write};
use std::process;

use env_logger;
use log::error;

use account_manager::{AccountError, AccountService, ManagerConfig, Session, Store};

fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    let config = match ManagerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    let service = AccountService::new(config);
    if let Err(e) = main_menu(&service) {
        error!("Unrecoverable error: {}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Top-level menu for users who are not logged in
fn main_menu(service: &AccountService) -> Result<(), AccountError> {
    let mut store = service.load()?;

    loop {
        println!();
        println!("Welcome to the Account Manager!");
        println!("1. Create a new account");
        println!("2. Login to an existing account");
        println!("3. Exit");

        let Some(choice) = prompt("Enter your choice (1-3): ") else {
            println!("Exiting the program.");
            return Ok(());
        };

        match choice.as_str() {
            "1" => {
                create_account_menu(service, &mut store);
                // Refresh in case durable state changed underneath us
                store = service.load()?;
            }
            "2" => {
                if let Some(username) = login_menu(service, &store) {
                    let mut session = Session::new();
                    session.login(username);
                    user_menu(service, &mut store, &mut session)?;
                }
                store = service.load()?;
            }
            "3" => {
                println!("Exiting the program.");
                return Ok(());
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

/// Collects credentials for a new account and reports the outcome
fn create_account_menu(service: &AccountService, store: &mut Store) {
    let Some(username) = prompt("Enter the new username: ") else {
        return;
    };
    let Some(password) = prompt("Enter the new password: ") else {
        return;
    };

    match service.create_account(store, &username, &password) {
        Ok(_) => println!("New account created successfully."),
        Err(e) => println!("{}", e),
    }
}

/// Collects credentials and returns the logged-in username on success
fn login_menu(service: &AccountService, store: &Store) -> Option<String> {
    let username = prompt("Enter your username: ")?;
    let password = prompt("Enter your password: ")?;

    match service.authenticate(store, &username, &password) {
        Ok(username) => {
            println!("Login successful!");
            Some(username)
        }
        Err(e) => {
            println!("{}", e);
            None
        }
    }
}

/// Menu for a logged-in user; runs until logout, account deletion, or
/// end of input
///
/// After a failed mutation the store is re-loaded, since the in-memory copy
/// can no longer be trusted to match the backing file.
fn user_menu(
    service: &AccountService,
    store: &mut Store,
    session: &mut Session,
) -> Result<(), AccountError> {
    while let Some(user) = session.current_user().map(str::to_string) {
        println!();
        println!("Welcome, {}!", user);
        println!("1. Change Password");
        println!("2. Change Username");
        println!("3. Delete Account");
        println!("4. Logout");

        let Some(choice) = prompt("Choose an option: ") else {
            session.logout();
            return Ok(());
        };

        match choice.as_str() {
            "1" => {
                let Some(old) = prompt(&format!("Enter your old password for user ({}): ", user))
                else {
                    session.logout();
                    return Ok(());
                };
                let Some(new) = prompt("Enter your new password: ") else {
                    session.logout();
                    return Ok(());
                };
                let Some(confirm) = prompt("Re-enter your new password: ") else {
                    session.logout();
                    return Ok(());
                };
                match service.change_password(store, &user, &old, &new, &confirm) {
                    Ok(()) => println!("Password updated successfully."),
                    Err(e) => {
                        println!("{}", e);
                        *store = service.load()?;
                    }
                }
            }
            "2" => {
                let Some(new_username) = prompt("Enter your new username: ") else {
                    session.logout();
                    return Ok(());
                };
                match service.change_username(store, &user, &new_username) {
                    Ok(new_username) => {
                        println!("Username changed from {} to {}", user, new_username);
                        session.login(new_username);
                    }
                    Err(e) => {
                        println!("{}", e);
                        *store = service.load()?;
                    }
                }
            }
            "3" => {
                let Some(answer) = prompt(&format!(
                    "Are you sure you want to delete your account '{}'? (yes/no): ",
                    user
                )) else {
                    session.logout();
                    return Ok(());
                };
                let confirmed = answer.trim().eq_ignore_ascii_case("yes");
                match service.delete_account(store, &user, confirmed) {
                    Ok(true) => {
                        println!("Account deleted successfully.");
                        session.logout();
                    }
                    Ok(false) => println!("Account deletion cancelled."),
                    Err(e) => {
                        println!("{}", e);
                        *store = service.load()?;
                    }
                }
            }
            "4" => {
                println!("Logged out.");
                session.logout();
            }
            _ => println!("Invalid choice."),
        }
    }
    Ok(())
}

/// Prints a prompt and reads one line from stdin
///
/// Returns `None` once stdin is exhausted or unreadable so the menus wind
/// down instead of spinning on empty input.
fn prompt(label: &str) -> Option<String> {
    print!("{}", label);
    let _ = io::stdout().flush();
    read_prompt_line(&mut io::stdin().lock())
}

/// Reads one line, distinguishing end of input from an empty line
///
/// Only the line terminator is stripped; the library decides what else to
/// trim (usernames yes, passwords never).
fn read_prompt_line(input: &mut impl BufRead) -> Option<String> {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_prompt_line_strips_terminator() {
        let mut input = Cursor::new(b"alice\r\n".to_vec());
        assert_eq!(read_prompt_line(&mut input), Some("alice".to_string()));
    }

    #[test]
    fn test_read_prompt_line_keeps_surrounding_whitespace() {
        let mut input = Cursor::new(b" spaced pass \n".to_vec());
        assert_eq!(
            read_prompt_line(&mut input),
            Some(" spaced pass ".to_string())
        );
    }

    #[test]
    fn test_read_prompt_line_none_at_end_of_input() {
        let mut input = Cursor::new(Vec::new());
        assert_eq!(read_prompt_line(&mut input), None);
    }

    #[test]
    fn test_read_prompt_line_none_after_last_line() {
        let mut input = Cursor::new(b"4\n".to_vec());
        assert_eq!(read_prompt_line(&mut input), Some("4".to_string()));
        assert_eq!(read_prompt_line(&mut input), None);
    }

    #[test]
    fn test_read_prompt_line_empty_line_is_not_end_of_input() {
        let mut input = Cursor::new(b"\n".to_vec());
        assert_eq!(read_prompt_line(&mut input), Some(String::new()));
    }
}
