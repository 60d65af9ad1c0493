use crate::api::{Action, Comment, CommentId};

fn find_comment<'a>(comments: &'a mut [Comment], id: &CommentId) -> Option<&'a mut Comment> {
    comments.iter_mut().find(|c| c.id == *id)
}

/// Applies `action` to `comments`, returning whether anything changed.
///
/// Actions targeting a comment that does not exist change nothing. So do
/// actions re-creating an id that is already in use.
pub fn reduce(comments: &mut Vec<Comment>, action: Action) -> bool {
    match action {
        Action::AddComment(comment) => {
            if comments.iter().any(|c| c.id == comment.id) {
                tracing::warn!(id = ?comment.id, "ignoring comment with an already-used id");
                return false;
            }
            comments.push(comment);
            true
        }
        Action::EditComment { comment_id, text } => match find_comment(comments, &comment_id) {
            Some(comment) => {
                comment.text = text;
                true
            }
            None => false,
        },
        Action::DeleteComment(comment_id) => {
            match comments.iter().position(|c| c.id == comment_id) {
                Some(idx) => {
                    comments.remove(idx);
                    true
                }
                None => false,
            }
        }
        Action::AddReply { comment_id, reply } => match find_comment(comments, &comment_id) {
            Some(comment) => {
                if comment.reply(reply.id).is_some() {
                    tracing::warn!(id = ?reply.id, "ignoring reply with an already-used id");
                    return false;
                }
                comment.replies.push(reply);
                true
            }
            None => false,
        },
    }
}
