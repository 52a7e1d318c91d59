use dioxus::prelude::*;

/// Dismissable inline error banner. Failures shown through this never block
/// the view; the user closes it and retries.
#[component]
pub fn ErrorNotice(message: String, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "error",
            style: "display: flex; justify-content: space-between; align-items: center;",
            span { "{message}" }
            button {
                style: "background: none; border: none; color: inherit; cursor: pointer;
                       font-size: 16px; line-height: 1; padding: 0;",
                onclick: move |_| on_dismiss.call(()),
                "×"
            }
        }
    }
}
