use parley_client::{
    api::{Action, OrderType},
    prelude::*,
    CommentStore,
};
use yew::prelude::*;

use crate::{storage::BrowserStorage, ui};

#[derive(Clone, PartialEq, Properties)]
pub struct AppProps {
    /// Local storage key holding the comment list
    pub storage_key: String,
}

pub enum AppMsg {
    NewUserAction(Action),
    ToggleOrder,
}

pub struct App {
    store: CommentStore<BrowserStorage>,
    order: OrderType,
}

impl Component for App {
    type Message = AppMsg;
    type Properties = AppProps;

    fn create(ctx: &Context<Self>) -> Self {
        let storage = BrowserStorage::new(ctx.props().storage_key.clone());
        let store =
            CommentStore::load(storage).expect("failed loading comments from local storage");
        App {
            store,
            order: OrderType::Desc,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::NewUserAction(a) => {
                tracing::debug!("got new user action {a:?}");
                self.store
                    .dispatch(a)
                    .expect("failed saving comments to local storage");
            }
            AppMsg::ToggleOrder => self.order = self.order.reversed(),
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let mut comments = self.store.comments().iter().collect::<Vec<_>>();
        self.order.sort(&mut comments);

        let on_action = ctx.link().callback(AppMsg::NewUserAction);
        let on_post = ctx.link().callback(|(name, text): (String, String)| {
            AppMsg::NewUserAction(Action::add_comment(name, text))
        });
        let arrow = match self.order {
            OrderType::Asc => "↑",
            OrderType::Desc => "↓",
        };

        html! {
            <div class="container p-4" style="max-width: 42rem">
                <div class="d-flex justify-content-between align-items-center mb-4">
                    <h2 class="h4 fw-bold m-0">{ "Comment" }</h2>
                    <button
                        type="button"
                        class="btn btn-link btn-sm text-dark"
                        onclick={ ctx.link().callback(|_| AppMsg::ToggleOrder) }
                    >
                        { "Sort By: Date and Time " }{ arrow }
                    </button>
                </div>
                <div class="card mb-4">
                    <div class="card-body">
                        <ui::PostForm
                            text_placeholder="Comment"
                            missing_message="Please enter both name and comment"
                            on_submit={ on_post }
                        />
                    </div>
                </div>
                { for comments.into_iter().map(|c| html! {
                    <ui::CommentItem
                        key={ c.id.0.to_string() }
                        comment={ c.clone() }
                        on_action={ on_action.clone() }
                    />
                }) }
            </div>
        }
    }
}
