use parley_client::api::DEFAULT_STORAGE_KEY;

mod storage;
mod ui;
mod util;

fn main() {
    tracing_wasm::set_as_global_default();
    yew::Renderer::<ui::App>::with_props(ui::AppProps {
        storage_key: String::from(DEFAULT_STORAGE_KEY),
    })
    .render();
}
