use std::cmp::Reverse;

use crate::api::{Comment, OrderType};

pub trait OrderExt {
    fn sort(&self, comments: &mut [&Comment]);
}

impl OrderExt for OrderType {
    /// Sorts by creation date. The sort is stable: comments with the same
    /// date keep their relative order.
    fn sort(&self, comments: &mut [&Comment]) {
        match self {
            OrderType::Asc => comments.sort_by_key(|c| c.date),
            OrderType::Desc => comments.sort_by_key(|c| Reverse(c.date)),
        }
    }
}

/// The order comments are rendered in, most recent first
pub fn display_order(comments: &[Comment]) -> Vec<&Comment> {
    let mut res = comments.iter().collect::<Vec<_>>();
    OrderType::Desc.sort(&mut res);
    res
}
