use dioxus_desktop::{Config, WindowBuilder};
use hostelhub::ui::App;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let window = WindowBuilder::new().with_title("HostelHub");
    dioxus_desktop::launch::launch(App, vec![], Config::new().with_window(window));
}
