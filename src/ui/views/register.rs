use std::time::Duration;

use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::domain::{RegisterForm, Role};
use crate::ui::app::Route;

/// How long the confirmation stays on screen before the redirect to Login.
const REDIRECT_DELAY: Duration = Duration::from_millis(1500);

#[component]
pub fn Register() -> Element {
    let api = use_context::<ApiClient>();
    let navigator = use_navigator();

    let mut role = use_signal(|| Role::Student);
    let mut form = use_signal(RegisterForm::default);
    let mut message = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |_| {
        let api = api.clone();
        let selected_role = *role.read();
        let fields = form.read().clone();
        spawn(async move {
            submitting.set(true);
            message.set(None);
            match api.register(selected_role, &fields).await {
                Ok(()) => {
                    message.set(Some(
                        "Registered successfully. Redirecting to login...".to_string(),
                    ));
                    // Leave the confirmation visible before moving on.
                    tokio::time::sleep(REDIRECT_DELAY).await;
                    navigator.push(Route::Login {});
                }
                Err(err) => {
                    message.set(Some(err.to_string()));
                    submitting.set(false);
                }
            }
        });
    };

    rsx! {
        div { class: "register-page",
            h2 { "Register" }

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
                    label { "Name" }
                    input {
                        class: "input",
                        value: "{form.read().name}",
                        oninput: move |e| form.with_mut(|f| f.name = e.value()),
                    }
                }

                div { class: "form-row",
                    label { "Email" }
                    input {
                        class: "input",
                        r#type: "email",
                        value: "{form.read().email}",
                        oninput: move |e| form.with_mut(|f| f.email = e.value()),
                    }
                }

                if *role.read() == Role::Student {
                    div { class: "form-row",
                        label { "Student ID" }
                        input {
                            class: "input",
                            value: "{form.read().student_id}",
                            oninput: move |e| form.with_mut(|f| f.student_id = e.value()),
                        }
                    }

                    div { class: "form-row",
                        label { "Room Number" }
                        input {
                            class: "input",
                            value: "{form.read().room_number}",
                            oninput: move |e| form.with_mut(|f| f.room_number = e.value()),
                        }
                    }

                    div { class: "form-row",
                        label { "Department" }
                        select {
                            class: "input",
                            value: "{form.read().department}",
                            onchange: move |e| form.with_mut(|f| f.department = e.value()),
                            option { value: "", "Select" }
                            option { value: "CSE", "CSE" }
                            option { value: "AIML", "AIML" }
                            option { value: "CCE", "CCE" }
                            option { value: "EEE", "EEE" }
                            option { value: "IT", "IT" }
                        }
                    }

                    div { class: "form-row",
                        label { "Hostel Block" }
                        select {
                            class: "input",
                            value: "{form.read().hostel_block}",
                            onchange: move |e| form.with_mut(|f| f.hostel_block = e.value()),
                            option { value: "", "Select" }
                            option { value: "A", "A" }
                            option { value: "B", "B" }
                            option { value: "C", "C" }
                            option { value: "D", "D" }
                            option { value: "E", "E" }
                        }
                    }
                }

                if *role.read() == Role::Warden {
                    div { class: "form-row",
                        label { "Warden ID" }
                        input {
                            class: "input",
                            value: "{form.read().warden_id}",
                            oninput: move |e| form.with_mut(|f| f.warden_id = e.value()),
                        }
                    }

                    div { class: "form-row",
                        label { "Hostel Block" }
                        select {
                            class: "input",
                            value: "{form.read().hostel_block}",
                            onchange: move |e| form.with_mut(|f| f.hostel_block = e.value()),
                            option { value: "", "Select" }
                            option { value: "A", "A" }
                            option { value: "B", "B" }
                            option { value: "C", "C" }
                            option { value: "D", "D" }
                            option { value: "E", "E" }
                        }
                    }
                }

                if *role.read() == Role::Worker {
                    div { class: "form-row",
                        label { "Worker ID" }
                        input {
                            class: "input",
                            value: "{form.read().worker_id}",
                            oninput: move |e| form.with_mut(|f| f.worker_id = e.value()),
                        }
                    }

                    div { class: "form-row",
                        label { "Contact" }
                        input {
                            class: "input",
                            value: "{form.read().contact}",
                            oninput: move |e| form.with_mut(|f| f.contact = e.value()),
                        }
                    }

                    div { class: "form-row",
                        label { "Category" }
                        select {
                            class: "input",
                            value: "{form.read().category}",
                            onchange: move |e| form.with_mut(|f| f.category = e.value()),
                            option { value: "", "Select" }
                            option { value: "electricity", "Electricity" }
                            option { value: "plumbing", "Plumbing" }
                            option { value: "carpentry", "Carpentry" }
                        }
                    }
                }

                div { class: "form-row",
                    label { "Password" }
                    input {
                        class: "input",
                        r#type: "password",
                        value: "{form.read().password}",
                        oninput: move |e| form.with_mut(|f| f.password = e.value()),
                    }
                }

                div { class: "form-row",
                    button {
                        class: "btn",
                        onclick: handle_submit,
                        disabled: *submitting.read(),
                        "Register"
                    }
                }

                if let Some(msg) = message.read().as_ref() {
                    div { class: "small", "{msg}" }
                }

                div { class: "small",
                    Link { to: Route::Login {}, "Already registered? Login" }
                }
            }
        }
    }
}
