//! Roster synchronizer.
//!
//! `Roster` owns the authoritative local copy of the remote user collection
//! and the transient draft being edited. Every successful mutation is followed
//! by exactly one wholesale refresh; local state is never patched
//! optimistically. Remote failures are caught here and converted to a status
//! message; the previous collection stays authoritative.

use tracing::{debug, warn};

use crate::api::UserDirectory;
use crate::models::{UserDraft, UserId, UserRecord};

const MSG_LOAD_FAILED: &str = "Could not load users. Check your connection.";
const MSG_OPERATION_FAILED: &str = "Operation failed. Nothing was changed.";
const MSG_CREATED: &str = "User created.";
const MSG_UPDATED: &str = "User updated.";
const MSG_DELETED: &str = "User deleted.";

/// Most recent outcome of a synchronizer operation, for user display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Success(String),
    Failure(String),
}

impl StatusMessage {
    /// The display text of this message
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Success(text) | Self::Failure(text) => text,
        }
    }

    /// True when this message reports a failure
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }
}

/// The collection synchronizer: mirrors the remote user collection in memory.
///
/// Single logical owner of `records` and `pending`; all operations take
/// `&mut self`, so no synchronization primitives are needed. Overlapping
/// refreshes issued by an outer driver are not coalesced; the last response
/// to arrive determines the displayed state.
pub struct Roster<D> {
    directory: D,
    records: Vec<UserRecord>,
    pending: bool,
    last_message: Option<StatusMessage>,
    draft: UserDraft,
}

impl<D: UserDirectory> Roster<D> {
    /// Create a synchronizer over the given directory, with an empty
    /// collection and an empty draft.
    pub fn new(directory: D) -> Self {
        Self {
            directory,
            records: Vec::new(),
            pending: false,
            last_message: None,
            draft: UserDraft::new(),
        }
    }

    /// The mirrored collection, in server order.
    #[must_use]
    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    /// True while a remote call is in flight.
    #[must_use]
    pub const fn pending(&self) -> bool {
        self.pending
    }

    /// Most recent success or failure message, if any.
    #[must_use]
    pub const fn last_message(&self) -> Option<&StatusMessage> {
        self.last_message.as_ref()
    }

    /// The draft currently being edited.
    #[must_use]
    pub const fn draft(&self) -> &UserDraft {
        &self.draft
    }

    /// Mutable access to the draft, for field-by-field edits.
    pub fn draft_mut(&mut self) -> &mut UserDraft {
        &mut self.draft
    }

    /// Fetch the full collection and replace the local copy wholesale.
    ///
    /// On failure the previous collection is left untouched and a generic
    /// connectivity message is set. Idempotent and safe to call repeatedly.
    /// Returns whether the fetch succeeded.
    pub async fn refresh(&mut self) -> bool {
        self.pending = true;
        let outcome = self.directory.list().await;
        self.pending = false;

        match outcome {
            Ok(records) => {
                debug!(count = records.len(), "collection refreshed");
                self.records = records;
                if self.last_message.as_ref().is_some_and(StatusMessage::is_failure) {
                    self.last_message = None;
                }
                true
            }
            Err(error) => {
                warn!(%error, "collection refresh failed");
                self.last_message = Some(StatusMessage::Failure(MSG_LOAD_FAILED.to_string()));
                false
            }
        }
    }

    /// Submit a draft as a new record.
    ///
    /// Validates locally first; an invalid draft never reaches the wire. On
    /// success, sets a success message and performs exactly one refresh. On
    /// failure, the collection is untouched and no refresh happens. Returns
    /// whether the creation succeeded.
    pub async fn submit_create(&mut self, draft: &UserDraft) -> bool {
        let body = match draft.validate() {
            Ok(body) => body,
            Err(error) => {
                self.last_message = Some(StatusMessage::Failure(error.to_string()));
                return false;
            }
        };

        self.pending = true;
        let outcome = self.directory.create(&body).await;
        self.pending = false;

        match outcome {
            Ok(created) => {
                debug!(id = %created.id, "user created");
                self.last_message = Some(StatusMessage::Success(MSG_CREATED.to_string()));
                self.refresh().await;
                true
            }
            Err(error) => {
                warn!(%error, "create failed");
                self.last_message = Some(StatusMessage::Failure(MSG_OPERATION_FAILED.to_string()));
                false
            }
        }
    }

    /// Submit a draft as a replacement for record `id`.
    ///
    /// Whether `id` exists is enforced by the directory, not locally. Same
    /// contract as [`Roster::submit_create`].
    pub async fn submit_update(&mut self, id: UserId, draft: &UserDraft) -> bool {
        let body = match draft.validate() {
            Ok(body) => body,
            Err(error) => {
                self.last_message = Some(StatusMessage::Failure(error.to_string()));
                return false;
            }
        };

        self.pending = true;
        let outcome = self.directory.update(id, &body).await;
        self.pending = false;

        match outcome {
            Ok(_) => {
                debug!(%id, "user updated");
                self.last_message = Some(StatusMessage::Success(MSG_UPDATED.to_string()));
                self.refresh().await;
                true
            }
            Err(error) => {
                warn!(%error, %id, "update failed");
                self.last_message = Some(StatusMessage::Failure(MSG_OPERATION_FAILED.to_string()));
                false
            }
        }
    }

    /// Delete record `id`.
    ///
    /// Confirmation is the caller's concern. Same contract as
    /// [`Roster::submit_create`]: one refresh on success, none on failure.
    pub async fn request_delete(&mut self, id: UserId) -> bool {
        self.pending = true;
        let outcome = self.directory.delete(id).await;
        self.pending = false;

        match outcome {
            Ok(()) => {
                debug!(%id, "user deleted");
                self.last_message = Some(StatusMessage::Success(MSG_DELETED.to_string()));
                self.refresh().await;
                true
            }
            Err(error) => {
                warn!(%error, %id, "delete failed");
                self.last_message = Some(StatusMessage::Failure(MSG_OPERATION_FAILED.to_string()));
                false
            }
        }
    }

    /// Load an existing record's fields into the draft for editing.
    ///
    /// Looks the record up in the mirrored collection; returns false when no
    /// record with that id is present locally.
    pub fn begin_edit(&mut self, id: UserId) -> bool {
        match self.records.iter().find(|record| record.id == id) {
            Some(record) => {
                self.draft = UserDraft::from_record(record);
                true
            }
            None => false,
        }
    }

    /// Reset the draft to empty, dropping any editing target.
    pub fn cancel_edit(&mut self) {
        self.draft.clear();
    }

    /// Submit the owned draft, dispatching to create or update based on its
    /// editing target. The draft is reset only after a successful submit.
    pub async fn submit(&mut self) -> bool {
        let draft = self.draft.clone();
        let succeeded = match draft.editing_id {
            Some(id) => self.submit_update(id, &draft).await,
            None => self.submit_create(&draft).await,
        };
        if succeeded {
            self.draft.clear();
        }
        succeeded
    }
}
