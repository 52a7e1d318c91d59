use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::domain::Role;
use crate::session::Session;
use crate::ui::app::Route;

#[component]
pub fn Login() -> Element {
    let api = use_context::<ApiClient>();
    let mut session = use_context::<Signal<Session>>();
    let navigator = use_navigator();

    let mut role = use_signal(|| Role::Student);
    let mut login_id = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut message = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |_| {
        let api = api.clone();
        let id = login_id.read().trim().to_string();
        let pw = password.read().clone();
        let selected_role = *role.read();
        spawn(async move {
            submitting.set(true);
            message.set(None);
            match api.login(selected_role, &id, &pw).await {
                Ok(response) => {
                    let destination = match response.user.role {
                        Role::Student => Route::StudentDashboard {},
                        Role::Warden => Route::WardenDashboard {},
                        Role::Worker => Route::WorkerDashboard {},
                    };
                    session.write().log_in(response.user);
                    navigator.push(destination);
                }
                // Form contents stay put so the user can correct and retry.
                Err(err) => message.set(Some(err.to_string())),
            }
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "login-page",
            h2 { "Login" }

            div { class: "card",
                div { class: "form-row",
                    label { "Role" }
                    select {
                        class: "input",
                        value: "{role.read().wire()}",
                        onchange: move |e| {
                            let selected = match e.value().as_str() {
                                "warden" => Role::Warden,
                                "worker" => Role::Worker,
                                _ => Role::Student,
                            };
                            role.set(selected);
                        },
                        option { value: "student", "Student" }
                        option { value: "warden", "Warden" }
                        option { value: "worker", "Worker" }
                    }
                }

                div { class: "form-row",
                    label { "{role.read().id_label()}" }
                    input {
                        class: "input",
                        value: "{login_id}",
                        oninput: move |e| login_id.set(e.value()),
                    }
                }

                div { class: "form-row",
                    label { "Password" }
                    input {
                        class: "input",
                        r#type: "password",
                        value: "{password}",
                        oninput: move |e| password.set(e.value()),
                    }
                }

                div { class: "form-row",
                    button {
                        class: "btn",
                        onclick: handle_submit,
                        disabled: *submitting.read(),
                        if *submitting.read() { "Signing in..." } else { "Login" }
                    }
                }

                if let Some(msg) = message.read().as_ref() {
                    div { class: "small error", "{msg}" }
                }

                div { class: "small",
                    Link { to: Route::Register {}, "Need an account? Register" }
                }
            }
        }
    }
}
