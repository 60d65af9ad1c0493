use chrono::Utc;

pub use uuid::{uuid, Uuid};
pub type Time = chrono::DateTime<Utc>;

pub const STUB_UUID: Uuid = uuid!("ffffffff-ffff-ffff-ffff-ffffffffffff");

/// Local storage key the comment list lives under unless configured otherwise
pub const DEFAULT_STORAGE_KEY: &str = "comments";

mod action;
pub use action::Action;

mod comment;
pub use comment::{Comment, CommentId, Reply, ReplyId};

mod error;
pub use error::Error;

mod order;
pub use order::OrderType;

/// Checks the fields of a new comment or reply before it gets dispatched.
///
/// The store itself accepts anything, so this is the only place blank input
/// gets rejected. Whitespace-only counts as blank.
pub fn validate_input(name: &str, text: &str) -> Result<(), Error> {
    if name.trim().is_empty() {
        return Err(Error::EmptyName);
    }
    if text.trim().is_empty() {
        return Err(Error::EmptyText);
    }
    Ok(())
}
