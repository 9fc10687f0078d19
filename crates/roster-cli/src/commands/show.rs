use roster_core::UserDirectory;

use crate::commands::common::{build_directory, normalize_user_id};
use crate::error::CliError;

pub async fn run_show(id: &str, api_url: Option<String>) -> Result<(), CliError> {
    let id = normalize_user_id(id)?;
    let directory = build_directory(api_url)?;
    let user = directory.get(id).await?;

    println!("ID:    {}", user.id);
    println!("Name:  {}", user.full_name);
    println!("Email: {}", user.email);
    println!("Phone: {}", user.phone);
    Ok(())
}
