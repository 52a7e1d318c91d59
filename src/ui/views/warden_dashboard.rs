use dioxus::prelude::*;

use crate::session::Session;

/// Landing page for the warden role. Triage tooling lives outside this
/// client; the route exists so a warden login has somewhere to go.
#[component]
pub fn WardenDashboard() -> Element {
    let session = use_context::<Signal<Session>>();
    let name = session
        .read()
        .current()
        .map(|u| u.name.clone())
        .unwrap_or_default();

    rsx! {
        div { class: "warden-wrap",
            div { class: "card",
                h2 { "Warden Dashboard" }
                p { "Signed in as {name}." }
                p { class: "small", "Complaint triage is not available in this client yet." }
            }
        }
    }
}
