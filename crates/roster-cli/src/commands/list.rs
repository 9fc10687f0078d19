use crate::commands::common::{
    build_roster, failure_from_status, format_user_lines, user_to_list_item, UserListItem,
};
use crate::error::CliError;

pub async fn run_list(as_json: bool, api_url: Option<String>) -> Result<(), CliError> {
    let mut roster = build_roster(api_url)?;
    if !roster.refresh().await {
        return Err(failure_from_status(&roster));
    }

    if as_json {
        let items = roster
            .records()
            .iter()
            .map(user_to_list_item)
            .collect::<Vec<UserListItem>>();
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        for line in format_user_lines(roster.records()) {
            println!("{line}");
        }
    }

    Ok(())
}
