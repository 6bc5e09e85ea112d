use crate::app::App;

mod api;
mod app;
mod components;
mod editor;
mod storage;

fn main() {
    yew::Renderer::<App>::new().render();
}
