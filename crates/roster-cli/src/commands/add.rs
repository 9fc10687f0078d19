use roster_core::UserDraft;

use crate::commands::common::{build_roster, failure_from_status, print_status};
use crate::error::CliError;

pub async fn run_add(
    full_name: &str,
    email: &str,
    phone: &str,
    api_url: Option<String>,
) -> Result<(), CliError> {
    let mut roster = build_roster(api_url)?;
    let draft = UserDraft {
        full_name: full_name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        editing_id: None,
    };

    if roster.submit_create(&draft).await {
        print_status(&roster);
        Ok(())
    } else {
        Err(failure_from_status(&roster))
    }
}
