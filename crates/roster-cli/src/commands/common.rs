use roster_core::{ApiConfig, HttpUserDirectory, Roster, StatusMessage, UserId, UserRecord};
use serde::Serialize;

use crate::error::CliError;

#[derive(Debug, Serialize)]
pub struct UserListItem {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone: String,
}

pub fn user_to_list_item(record: &UserRecord) -> UserListItem {
    UserListItem {
        id: record.id.as_i64(),
        full_name: record.full_name.clone(),
        email: record.email.clone(),
        phone: record.phone.clone(),
    }
}

/// Resolve the directory endpoint, preferring an explicit `--api-url` flag
/// over the environment.
pub fn resolve_config(api_url: Option<String>) -> Result<ApiConfig, CliError> {
    let config = match api_url {
        Some(url) => ApiConfig::from_base_url(url)?,
        None => ApiConfig::from_env()?,
    };
    tracing::debug!(url = config.collection_url(), "resolved directory endpoint");
    Ok(config)
}

pub fn build_directory(api_url: Option<String>) -> Result<HttpUserDirectory, CliError> {
    Ok(HttpUserDirectory::new(resolve_config(api_url)?)?)
}

pub fn build_roster(api_url: Option<String>) -> Result<Roster<HttpUserDirectory>, CliError> {
    Ok(Roster::new(build_directory(api_url)?))
}

pub fn normalize_user_id(raw: &str) -> Result<UserId, CliError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CliError::EmptyUserId);
    }
    trimmed
        .parse()
        .map_err(|_| CliError::InvalidUserId(trimmed.to_string()))
}

/// Render the roster as aligned table lines, header first.
pub fn format_user_lines(records: &[UserRecord]) -> Vec<String> {
    let id_width = records
        .iter()
        .map(|r| r.id.to_string().len())
        .chain(std::iter::once(2))
        .max()
        .unwrap_or(2);
    let name_width = records
        .iter()
        .map(|r| r.full_name.chars().count())
        .chain(std::iter::once(4))
        .max()
        .unwrap_or(4);
    let email_width = records
        .iter()
        .map(|r| r.email.chars().count())
        .chain(std::iter::once(5))
        .max()
        .unwrap_or(5);

    let mut lines = vec![format!(
        "{:<id_width$}  {:<name_width$}  {:<email_width$}  PHONE",
        "ID", "NAME", "EMAIL"
    )];
    for record in records {
        lines.push(format!(
            "{:<id_width$}  {:<name_width$}  {:<email_width$}  {}",
            record.id.to_string(),
            record.full_name,
            record.email,
            record.phone
        ));
    }
    lines
}

/// Convert the roster's latest status into a CLI failure.
pub fn failure_from_status(
    roster: &Roster<HttpUserDirectory>,
) -> CliError {
    let message = roster
        .last_message()
        .map_or("Operation failed.", StatusMessage::text);
    CliError::OperationFailed(message.to_string())
}

/// Print the roster's latest status message, if any.
pub fn print_status(roster: &Roster<HttpUserDirectory>) {
    if let Some(message) = roster.last_message() {
        println!("{}", message.text());
    }
}
