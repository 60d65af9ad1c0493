use crate::{
    api::{Action, Comment, CommentId, Error, Reply, ReplyId},
    reduce, Storage,
};

/// Owns the comment list and writes it through to its storage after every
/// change.
#[derive(Debug)]
pub struct CommentStore<S> {
    comments: Vec<Comment>,
    storage: S,
}

impl<S: Storage> CommentStore<S> {
    pub fn load(storage: S) -> Result<CommentStore<S>, Error> {
        let comments = storage.load()?;
        tracing::debug!(num_comments = comments.len(), "loaded comments");
        Ok(CommentStore { comments, storage })
    }

    /// All comments, in insertion order
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn comment(&self, id: CommentId) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id == id)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Applies `action` and persists the result if it changed anything.
    ///
    /// The only error is a persistence failure, in which case the in-memory
    /// list is left as it was before the action. Actions targeting unknown
    /// comments are silently dropped.
    pub fn dispatch(&mut self, action: Action) -> Result<(), Error> {
        tracing::trace!(?action, "dispatching action");
        let comment_id = action.comment_id();
        let mut next = self.comments.clone();
        if !reduce(&mut next, action) {
            return Ok(());
        }
        self.storage.save(&next)?;
        self.comments = next;
        tracing::debug!(
            ?comment_id,
            num_comments = self.comments.len(),
            "applied and saved action"
        );
        Ok(())
    }

    pub fn add_comment(&mut self, name: String, text: String) -> Result<CommentId, Error> {
        let action = Action::add_comment(name, text);
        let id = action.comment_id();
        self.dispatch(action)?;
        Ok(id)
    }

    pub fn edit_comment(&mut self, id: CommentId, text: String) -> Result<(), Error> {
        self.dispatch(Action::edit_comment(id, text))
    }

    pub fn delete_comment(&mut self, id: CommentId) -> Result<(), Error> {
        self.dispatch(Action::delete_comment(id))
    }

    /// Returns the new reply's id, or `None` if there is no comment `comment_id`
    pub fn add_reply(
        &mut self,
        comment_id: CommentId,
        name: String,
        text: String,
    ) -> Result<Option<ReplyId>, Error> {
        let reply = Reply::now(name, text);
        let reply_id = reply.id;
        self.dispatch(Action::AddReply { comment_id, reply })?;
        Ok(self
            .comment(comment_id)
            .and_then(|c| c.reply(reply_id))
            .map(|r| r.id))
    }
}
