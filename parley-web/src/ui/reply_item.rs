use parley_client::api::Reply;
use yew::prelude::*;

use crate::util;

#[derive(Clone, PartialEq, Properties)]
pub struct ReplyItemProps {
    pub reply: Reply,
}

#[function_component(ReplyItem)]
pub fn reply_item(p: &ReplyItemProps) -> Html {
    html! {
        <div class="bg-light rounded p-3 mt-2">
            <h4 class="h6 fw-bold">{ &p.reply.name }</h4>
            <p class="mb-1">{ &p.reply.text }</p>
            <small class="d-block text-muted">{ util::format_day(&p.reply.date) }</small>
            // replies cannot be edited, this button does nothing
            <button type="button" class="btn btn-link btn-sm p-0 mt-2">{ "Edit" }</button>
        </div>
    }
}
