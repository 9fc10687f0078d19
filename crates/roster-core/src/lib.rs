//! roster-core - Core library for roster
//!
//! This crate contains the user models, the remote directory client, and the
//! roster synchronizer shared by all roster front-ends.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod sync;
pub mod util;

pub use api::{HttpUserDirectory, UserDirectory};
pub use config::ApiConfig;
pub use error::{Error, Result};
pub use models::{NewUser, UserDraft, UserId, UserRecord};
pub use sync::{Roster, StatusMessage};
