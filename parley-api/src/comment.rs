use chrono::Utc;
use uuid::Uuid;

use crate::{Time, STUB_UUID};

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct CommentId(pub Uuid);

impl CommentId {
    pub fn stub() -> CommentId {
        CommentId(STUB_UUID)
    }
}

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct ReplyId(pub Uuid);

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Comment {
    pub id: CommentId,

    /// Author display name, never changes after creation
    pub name: String,

    pub text: String,

    /// Creation date
    pub date: Time,

    /// Replies in the order they were posted
    pub replies: Vec<Reply>,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Reply {
    pub id: ReplyId,
    pub name: String,
    pub text: String,
    pub date: Time,
}

impl Comment {
    /// Builds a fresh comment with a new random id, dated now
    pub fn now(name: String, text: String) -> Comment {
        Comment {
            id: CommentId(Uuid::new_v4()),
            name,
            text,
            date: Utc::now(),
            replies: Vec::new(),
        }
    }

    pub fn reply(&self, id: ReplyId) -> Option<&Reply> {
        self.replies.iter().find(|r| r.id == id)
    }
}

impl Reply {
    pub fn now(name: String, text: String) -> Reply {
        Reply {
            id: ReplyId(Uuid::new_v4()),
            name,
            text,
            date: Utc::now(),
        }
    }
}
