mod components;
mod content;
mod model;
mod state;
mod util;

use components::app::App;

fn main() {
    let _ = console_log::init_with_level(log::Level::Info);
    yew::Renderer::<App>::new().render();
}
