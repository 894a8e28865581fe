use log::info;

mod bootstrap;
mod config;
mod dom;
mod error;
mod events;
mod timers;
mod toast;
mod components {
    pub mod counter;
    pub mod form;
    pub mod hover;
    pub mod loading;
    pub mod nav;
    pub mod notification;
    pub mod particles;
    pub mod pulse;
    pub mod reveal;
    pub mod scroll;
    pub mod smooth_scroll;
    pub mod year;
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting page effects");
    if let Err(e) = bootstrap::run() {
        gloo_console::error!(format!("page effects disabled: {}", e));
    }
}
