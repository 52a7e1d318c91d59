use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::session::Session;
use crate::ui::views::{Login, Register, StudentDashboard, WardenDashboard, WorkerDashboard};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[layout(AppShell)]
    #[route("/")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/student")]
    StudentDashboard {},
    #[route("/warden")]
    WardenDashboard {},
    #[route("/worker")]
    WorkerDashboard {},
}

#[component]
pub fn App() -> Element {
    // Shared services live in context: one API client for the whole app and
    // one session object, injected rather than reached for globally.
    use_context_provider(ApiClient::from_env);
    use_context_provider(|| Signal::new(Session::default()));

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn AppShell() -> Element {
    let mut session = use_context::<Signal<Session>>();
    let navigator = use_navigator();
    let signed_in = session.read().current().cloned();

    rsx! {
        div { class: "app-container",
            nav { class: "navbar",
                div { class: "nav-brand", "HostelHub" }
                if let Some(user) = signed_in {
                    div { class: "nav-user",
                        span { class: "small", "{user.name} · {user.role.label()}" }
                        button {
                            class: "btn",
                            onclick: move |_| {
                                session.write().log_out();
                                navigator.push(Route::Login {});
                            },
                            "Sign out"
                        }
                    }
                }
            }
            main { class: "main-content",
                Outlet::<Route> {}
            }
        }
    }
}
