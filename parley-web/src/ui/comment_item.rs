use parley_client::api::{Action, Comment};
use yew::prelude::*;

use crate::{ui, util};

#[derive(Clone, PartialEq, Properties)]
pub struct CommentItemProps {
    pub comment: Comment,
    pub on_action: Callback<Action>,
}

#[function_component(CommentItem)]
pub fn comment_item(p: &CommentItemProps) -> Html {
    // Some(draft) while the text is being edited
    let edit = use_state(|| None::<String>);
    let replying = use_state(|| false);

    let on_delete = {
        let id = p.comment.id;
        p.on_action.reform(move |_: MouseEvent| Action::delete_comment(id))
    };
    let on_delete = Callback::from(move |e: MouseEvent| {
        if util::confirm("Are you sure you want to delete this comment?") {
            on_delete.emit(e);
        }
    });

    let on_reply_post = {
        let id = p.comment.id;
        let on_action = p.on_action.clone();
        let replying = replying.clone();
        Callback::from(move |(name, text): (String, String)| {
            on_action.emit(Action::add_reply(id, name, text));
            replying.set(false);
        })
    };

    html! {
        <div class="card mb-3">
            <div class="card-body position-relative">
                <button
                    type="button"
                    class="btn btn-light btn-sm position-absolute top-0 end-0"
                    aria-label="Delete"
                    onclick={ on_delete }
                >
                    { "⋮" }
                </button>
                <h3 class="h6 fw-bold">{ &p.comment.name }</h3>
                { body(p, edit, replying.clone()) }
                <small class="d-block text-muted mt-2">{ util::format_day(&p.comment.date) }</small>
                if *replying {
                    <div class="bg-light rounded p-3 mt-3">
                        <ui::PostForm
                            text_placeholder="Reply"
                            missing_message="Please enter both name and reply"
                            on_submit={ on_reply_post }
                        />
                    </div>
                }
                { for p.comment.replies.iter().map(|r| html! {
                    <ui::ReplyItem key={ r.id.0.to_string() } reply={ r.clone() } />
                }) }
            </div>
        </div>
    }
}

fn body(
    p: &CommentItemProps,
    edit: UseStateHandle<Option<String>>,
    replying: UseStateHandle<bool>,
) -> Html {
    match (*edit).clone() {
        None => {
            let on_edit = {
                let current_text = p.comment.text.clone();
                let edit = edit.clone();
                Callback::from(move |_: MouseEvent| edit.set(Some(current_text.clone())))
            };
            html! {
                <>
                    <p class="mb-1">{ &p.comment.text }</p>
                    <div class="mt-2">
                        <button
                            type="button"
                            class="btn btn-link btn-sm p-0 me-2"
                            onclick={ Callback::from(move |_: MouseEvent| replying.set(true)) }
                        >
                            { "Reply" }
                        </button>
                        <button type="button" class="btn btn-link btn-sm p-0" onclick={ on_edit }>
                            { "Edit" }
                        </button>
                    </div>
                </>
            }
        }
        Some(draft) => {
            let on_input = {
                let edit = edit.clone();
                Callback::from(move |e: InputEvent| {
                    let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
                    edit.set(Some(input.value()))
                })
            };
            let on_save = {
                let id = p.comment.id;
                let edit = edit.clone();
                let draft = draft.clone();
                p.on_action.reform(move |_: MouseEvent| {
                    edit.set(None);
                    Action::edit_comment(id, draft.clone())
                })
            };
            html! {
                <>
                    <textarea
                        class="form-control mb-2"
                        aria-label="Comment"
                        value={ draft }
                        oninput={ on_input }
                    />
                    <button type="button" class="btn btn-link btn-sm p-0 me-2" onclick={ on_save }>
                        { "Save" }
                    </button>
                    <button
                        type="button"
                        class="btn btn-link btn-sm p-0 text-secondary"
                        onclick={ Callback::from(move |_: MouseEvent| edit.set(None)) }
                    >
                        { "Cancel" }
                    </button>
                </>
            }
        }
    }
}
