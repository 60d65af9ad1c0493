use crate::{Comment, CommentId, Reply};

/// A request to mutate the comment list.
///
/// Ids and dates are assigned when the action is built, so applying an action
/// is deterministic.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Action {
    AddComment(Comment),
    EditComment {
        comment_id: CommentId,
        text: String,
    },
    DeleteComment(CommentId),
    AddReply {
        comment_id: CommentId,
        reply: Reply,
    },
}

impl Action {
    pub fn add_comment(name: String, text: String) -> Action {
        Action::AddComment(Comment::now(name, text))
    }

    pub fn edit_comment(comment_id: CommentId, text: String) -> Action {
        Action::EditComment { comment_id, text }
    }

    pub fn delete_comment(comment_id: CommentId) -> Action {
        Action::DeleteComment(comment_id)
    }

    pub fn add_reply(comment_id: CommentId, name: String, text: String) -> Action {
        Action::AddReply {
            comment_id,
            reply: Reply::now(name, text),
        }
    }

    /// Id of the comment this action creates or targets
    pub fn comment_id(&self) -> CommentId {
        match self {
            Action::AddComment(c) => c.id,
            Action::EditComment { comment_id, .. } => *comment_id,
            Action::DeleteComment(comment_id) => *comment_id,
            Action::AddReply { comment_id, .. } => *comment_id,
        }
    }
}
