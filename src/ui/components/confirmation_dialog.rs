use dioxus::prelude::*;

/// Modal confirm/cancel prompt for destructive actions. Clicking the
/// backdrop cancels.
#[component]
pub fn ConfirmationDialog(
    title: &'static str,
    message: &'static str,
    confirm_text: &'static str,
    cancel_text: &'static str,
    danger: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let confirm_class = if danger { "btn danger" } else { "btn" };

    rsx! {
        div {
            style: "position: fixed; top: 0; left: 0; right: 0; bottom: 0;
                   background: rgba(0, 0, 0, 0.5); z-index: 1000;
                   display: flex; align-items: center; justify-content: center;",
            onclick: move |_| on_cancel.call(()),

            div {
                class: "card",
                style: "width: 90%; max-width: 400px;",
                onclick: move |e| e.stop_propagation(),

                h3 { "{title}" }
                p { "{message}" }

                div {
                    style: "display: flex; justify-content: flex-end; gap: 10px;",
                    button {
                        class: "btn",
                        onclick: move |_| on_cancel.call(()),
                        "{cancel_text}"
                    }
                    button {
                        class: confirm_class,
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_text}"
                    }
                }
            }
        }
    }
}
