use std::io::{self, IsTerminal, Write};

use crate::commands::common::{build_roster, failure_from_status, normalize_user_id, print_status};
use crate::error::CliError;

pub async fn run_delete(id: &str, yes: bool, api_url: Option<String>) -> Result<(), CliError> {
    let id = normalize_user_id(id)?;

    if !yes && !confirm_delete(&id.to_string())? {
        println!("Aborted.");
        return Ok(());
    }

    let mut roster = build_roster(api_url)?;
    if roster.request_delete(id).await {
        print_status(&roster);
        Ok(())
    } else {
        Err(failure_from_status(&roster))
    }
}

/// Ask for confirmation on an interactive terminal; non-interactive runs
/// must pass `--yes` explicitly.
fn confirm_delete(id: &str) -> Result<bool, CliError> {
    if !io::stdin().is_terminal() {
        return Ok(false);
    }

    print!("Delete user {id}? [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
