use dbwebsites_frontend::{check_content, App};
use log::{info, Level};

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    check_content();
    yew::Renderer::<App>::new().render();
}
