use yew::prelude::*;
use log::info;

mod config;
mod accessibility {
    pub mod settings;
    pub mod document;
    pub mod reading_guide;
    pub mod effects;
    pub mod drawer;
    #[cfg(test)]
    pub mod testing;
}
mod chat {
    pub mod history;
    pub mod client;
    pub mod widget;
}
mod pages {
    pub mod home;
    pub mod stats;
    pub mod contact;
}

use pages::home::UpperFloor;


#[function_component]
fn App() -> Html {
    html! {
        <UpperFloor />
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
