use dioxus::prelude::*;
use tracing::warn;

use crate::api::ApiClient;
use crate::domain::{Complaint, StatusUpdate};
use crate::session::Session;
use crate::state::{self, WorkerQueues};
use crate::ui::components::ErrorNotice;

#[component]
pub fn WorkerDashboard() -> Element {
    let api = use_context::<ApiClient>();
    let session = use_context::<Signal<Session>>();
    let worker_id = session
        .read()
        .current()
        .map(|u| u.id.clone())
        .unwrap_or_default();

    let mut complaints = use_signal(Vec::<Complaint>::new);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let load = {
        let api = api.clone();
        let worker_id = worker_id.clone();
        move || {
            if worker_id.is_empty() {
                return;
            }
            let api = api.clone();
            spawn(async move {
                loading.set(true);
                // The backend exposes no worker-scoped query; the full set
                // comes down and the board partitions it locally.
                match api.all_complaints().await {
                    Ok(list) => complaints.set(list),
                    Err(err) => {
                        warn!(error = %err, "failed to load complaint board");
                        complaints.set(Vec::new());
                    }
                }
                loading.set(false);
            });
        }
    };

    use_hook({
        let load = load.clone();
        move || load()
    });

    let update_status = {
        let api = api.clone();
        move |id: String, update: StatusUpdate| {
            let api = api.clone();
            spawn(async move {
                match api.update_status(&id, &update).await {
                    Ok(updated) => complaints.with_mut(|list| state::replace_by_id(list, updated)),
                    Err(err) => {
                        warn!(error = %err, complaint = %id, "status update failed");
                        error.set(Some("Failed to update complaint status".to_string()));
                    }
                }
            });
        }
    };

    let claim = {
        let update_status = update_status.clone();
        let worker_id = worker_id.clone();
        move |target: Complaint| {
            update_status(target.id.clone(), state::claim_update(&target, &worker_id));
        }
    };

    let complete = {
        let update_status = update_status.clone();
        move |id: String| update_status(id, state::complete_update())
    };

    // Derived fresh every render; never stored.
    let queues = WorkerQueues::partition(&complaints.read(), &worker_id);
    let available_count = queues.available.len();
    let in_progress_count = queues.in_progress.len();
    let completed_count = queues.completed.len();

    rsx! {
        div { class: "worker-wrap",
            div { class: "card",
                h2 { "Worker Dashboard" }
                p { "Manage your assigned complaints" }
                button {
                    class: "btn",
                    onclick: move |_| load(),
                    if *loading.read() { "Loading..." } else { "Refresh" }
                }
            }

            if let Some(msg) = error.read().clone() {
                ErrorNotice {
                    message: msg,
                    on_dismiss: move |_| error.set(None),
                }
            }

            div { class: "dashboard-grid",
                div { class: "complaints-section card",
                    h3 { "Available Work ({available_count})" }

                    for complaint in queues.available.clone() {
                        {
                            let claim = claim.clone();
                            let target = complaint.clone();
                            rsx! {
                                div { key: "{complaint.id}", class: "complaint-card",
                                    div { class: "complaint-info",
                                        h4 { "{complaint.category.label()} Issue" }
                                        p { strong { "Student: " } "{complaint.student_name}" }
                                        p { strong { "Room: " } "{complaint.room_number}" }
                                        p { strong { "Description: " } "{complaint.description}" }
                                        if let Some(data) = complaint.image_data() {
                                            img { class: "complaint-image", src: "{data}" }
                                        }
                                        if let Some(notes) = complaint.warden_notes() {
                                            p { strong { "Warden Notes: " } "{notes}" }
                                        }
                                    }
                                    button {
                                        class: "btn",
                                        onclick: move |_| claim(target.clone()),
                                        "Take This Job"
                                    }
                                }
                            }
                        }
                    }

                    if available_count == 0 {
                        p { "No available work" }
                    }
                }

                div { class: "complaints-section card",
                    h3 { "My Work In Progress ({in_progress_count})" }

                    for complaint in queues.in_progress.clone() {
                        {
                            let complete = complete.clone();
                            let complaint_id = complaint.id.clone();
                            rsx! {
                                div { key: "{complaint.id}", class: "complaint-card",
                                    h4 { "{complaint.category.label()} Issue" }
                                    p { strong { "Student: " } "{complaint.student_name}" }
                                    p { strong { "Room: " } "{complaint.room_number}" }
                                    p { "{complaint.description}" }
                                    button {
                                        class: "btn success",
                                        onclick: move |_| complete(complaint_id.clone()),
                                        "Mark Complete"
                                    }
                                }
                            }
                        }
                    }

                    if in_progress_count == 0 {
                        p { "No work in progress" }
                    }
                }
            }

            div { class: "complaints-section card",
                h3 { "My Completed Work ({completed_count})" }

                for complaint in queues.completed.clone() {
                    div { key: "{complaint.id}", class: "complaint-card",
                        h4 { "{complaint.category.label()} Issue" }
                        p { strong { "Student: " } "{complaint.student_name}" }
                        p { strong { "Room: " } "{complaint.room_number}" }
                        span { class: "status-badge status-completed", "Completed" }
                    }
                }

                if completed_count == 0 {
                    p { "No completed work yet" }
                }
            }
        }
    }
}
