mod app;
pub use app::{App, AppMsg, AppProps};

mod comment_item;
pub use comment_item::CommentItem;

mod post_form;
pub use post_form::PostForm;

mod reply_item;
pub use reply_item::ReplyItem;
