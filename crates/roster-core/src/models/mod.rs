//! Data models for roster

mod user;

pub use user::{NewUser, UserDraft, UserId, UserRecord, MAX_FULL_NAME_LEN, MAX_PHONE_LEN};
