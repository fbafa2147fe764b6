use crate::app::App;

mod app;
mod components;
mod helpers;
mod repository;

fn main() {
    yew::Renderer::<App>::new().render();
}
