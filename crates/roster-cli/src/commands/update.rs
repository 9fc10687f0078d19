use crate::commands::common::{build_roster, failure_from_status, normalize_user_id, print_status};
use crate::error::CliError;

pub async fn run_update(
    id: &str,
    full_name: Option<&str>,
    email: Option<&str>,
    phone: Option<&str>,
    api_url: Option<String>,
) -> Result<(), CliError> {
    if full_name.is_none() && email.is_none() && phone.is_none() {
        return Err(CliError::NothingToUpdate);
    }
    let id = normalize_user_id(id)?;

    let mut roster = build_roster(api_url)?;
    if !roster.refresh().await {
        return Err(failure_from_status(&roster));
    }
    if !roster.begin_edit(id) {
        return Err(CliError::UserNotFound(id.to_string()));
    }

    let draft = roster.draft_mut();
    if let Some(full_name) = full_name {
        draft.full_name = full_name.to_string();
    }
    if let Some(email) = email {
        draft.email = email.to_string();
    }
    if let Some(phone) = phone {
        draft.phone = phone.to_string();
    }

    if roster.submit().await {
        print_status(&roster);
        Ok(())
    } else {
        Err(failure_from_status(&roster))
    }
}
