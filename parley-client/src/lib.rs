mod order;
pub use order::{display_order, OrderExt};

mod reducer;
pub use reducer::reduce;

pub mod storage;
pub use storage::{MemoryStorage, Storage};

mod store;
pub use store::CommentStore;

pub mod api {
    pub use parley_api::*;
}

pub mod prelude {
    pub use crate::{OrderExt, Storage};
}
