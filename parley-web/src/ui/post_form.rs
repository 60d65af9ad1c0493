use parley_client::api;
use yew::prelude::*;

use crate::util;

#[derive(Clone, PartialEq, Properties)]
pub struct PostFormProps {
    pub text_placeholder: AttrValue,

    /// Alert shown when either field is blank
    pub missing_message: AttrValue,

    /// Receives (name, text), only once both are filled
    pub on_submit: Callback<(String, String)>,
}

/// Name + text form shared by new comments and replies
#[function_component(PostForm)]
pub fn post_form(p: &PostFormProps) -> Html {
    let name = use_state(String::new);
    let text = use_state(String::new);

    let on_name_input = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_text_input = {
        let text = text.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            text.set(input.value());
        })
    };
    let on_post = {
        let name = name.clone();
        let text = text.clone();
        let missing_message = p.missing_message.clone();
        let on_submit = p.on_submit.clone();
        Callback::from(move |_: MouseEvent| {
            if api::validate_input(&name, &text).is_err() {
                util::alert(&missing_message);
                return;
            }
            on_submit.emit(((*name).clone(), (*text).clone()));
            name.set(String::new());
            text.set(String::new());
        })
    };

    html! {
        <div>
            <input
                type="text"
                class="form-control mb-2"
                placeholder="Name"
                aria-label="Name"
                value={ (*name).clone() }
                oninput={ on_name_input }
            />
            <textarea
                class="form-control mb-2"
                placeholder={ p.text_placeholder.clone() }
                aria-label={ p.text_placeholder.clone() }
                value={ (*text).clone() }
                oninput={ on_text_input }
            />
            <div class="d-flex justify-content-end">
                <button type="button" class="btn btn-primary" onclick={ on_post }>
                    { "POST" }
                </button>
            </div>
        </div>
    }
}
