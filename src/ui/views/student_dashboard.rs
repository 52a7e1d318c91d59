use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use dioxus::prelude::*;
use tracing::warn;

use crate::api::ApiClient;
use crate::domain::complaint::description_is_valid;
use crate::domain::{Category, Complaint, ComplaintEdit, NewComplaint};
use crate::session::Session;
use crate::state;
use crate::ui::components::ConfirmationDialog;

#[component]
pub fn StudentDashboard() -> Element {
    let api = use_context::<ApiClient>();
    let session = use_context::<Signal<Session>>();
    let student_id = session.read().current().map(|u| u.id.clone());

    let mut complaints = use_signal(Vec::<Complaint>::new);
    let mut description = use_signal(String::new);
    let mut category = use_signal(Category::default);
    let mut image = use_signal(String::new);
    // Id of the complaint being edited; None while the form creates.
    let mut editing = use_signal(|| None::<String>);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut confirm_delete = use_signal(|| None::<String>);

    let load = {
        let api = api.clone();
        let student_id = student_id.clone();
        move || {
            let Some(student_id) = student_id.clone() else {
                return;
            };
            let api = api.clone();
            spawn(async move {
                loading.set(true);
                match api.student_complaints(&student_id).await {
                    Ok(list) => complaints.set(list),
                    Err(err) => {
                        // A failed load must not block the create form, so
                        // the user sees an empty list rather than an error.
                        warn!(error = %err, "failed to load student complaints");
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

    let reset_form = move || {
        description.set(String::new());
        category.set(Category::default());
        image.set(String::new());
        editing.set(None);
    };

    // One handler serves both create and update; `editing` decides which.
    let handle_submit = {
        let api = api.clone();
        let student_id = student_id.clone();
        move |_| {
            error.set(None);
            if !description_is_valid(&description.read()) {
                error.set(Some("Description is required".to_string()));
                return;
            }
            let api = api.clone();
            if let Some(id) = editing.read().clone() {
                let edit = ComplaintEdit {
                    description: description.read().clone(),
                    category: *category.read(),
                    image: image.read().clone(),
                };
                spawn(async move {
                    match api.update_complaint(&id, &edit).await {
                        Ok(updated) => {
                            complaints.with_mut(|list| state::replace_by_id(list, updated));
                            reset_form();
                        }
                        Err(err) => {
                            warn!(error = %err, complaint = %id, "update failed");
                            error.set(Some("Failed to update complaint".to_string()));
                        }
                    }
                });
            } else {
                let Some(student_id) = student_id.clone() else {
                    return;
                };
                let new = NewComplaint {
                    student_id,
                    description: description.read().clone(),
                    category: *category.read(),
                    image: image.read().clone(),
                };
                spawn(async move {
                    match api.create_complaint(&new).await {
                        Ok(created) => {
                            complaints.with_mut(|list| state::prepend_created(list, created));
                            reset_form();
                        }
                        Err(err) => {
                            warn!(error = %err, "create failed");
                            error.set(Some("Failed to submit complaint".to_string()));
                        }
                    }
                });
            }
        }
    };

    let start_edit = move |target: Complaint| {
        description.set(target.description.clone());
        category.set(target.category);
        image.set(target.image.unwrap_or_default());
        editing.set(Some(target.id));
        // The form card sits at the top of the page.
        let _ = eval("window.scrollTo(0, 0);");
    };

    let delete_confirmed = {
        let api = api.clone();
        move |id: String| {
            let api = api.clone();
            spawn(async move {
                match api.delete_complaint(&id).await {
                    Ok(()) => complaints.with_mut(|list| state::remove_by_id(list, &id)),
                    Err(err) => {
                        warn!(error = %err, complaint = %id, "delete failed");
                        error.set(Some("Failed to delete complaint".to_string()));
                    }
                }
            });
        }
    };

    let handle_image = move |evt: FormEvent| {
        if let Some(file_engine) = evt.files() {
            spawn(async move {
                let Some(name) = file_engine.files().first().cloned() else {
                    return;
                };
                if let Some(bytes) = file_engine.read_file(&name).await {
                    image.set(encode_data_url(&name, &bytes));
                }
            });
        }
    };

    let is_editing = editing.read().is_some();

    rsx! {
        div { class: "student-dashboard",
            div { class: "dashboard-grid",
                div { class: "card",
                    h3 {
                        if is_editing { "Edit Complaint" } else { "Create New Complaint" }
                    }

                    div { class: "form-row",
                        label { "Category" }
                        select {
                            class: "input",
                            value: "{category.read().wire()}",
                            onchange: move |e| category.set(Category::parse(&e.value())),
                            for option_category in Category::ALL {
                                option {
                                    value: "{option_category.wire()}",
                                    "{option_category.label()}"
                                }
                            }
                        }
                    }

                    div { class: "form-row",
                        label { "Description" }
                        textarea {
                            class: "input",
                            value: "{description}",
                            oninput: move |e| description.set(e.value()),
                        }
                    }

                    div { class: "form-row",
                        label { "Upload Image (Optional)" }
                        input {
                            r#type: "file",
                            accept: "image/*",
                            onchange: handle_image,
                        }
                    }

                    if !image.read().is_empty() {
                        img { src: "{image}", alt: "preview", width: "200" }
                    }

                    button {
                        class: "btn",
                        onclick: handle_submit,
                        if is_editing { "Update" } else { "Submit" }
                    }

                    if is_editing {
                        button {
                            class: "btn danger",
                            onclick: move |_| reset_form(),
                            "Cancel"
                        }
                    }

                    if let Some(msg) = error.read().as_ref() {
                        div { class: "error", "{msg}" }
                    }
                }

                div { class: "card",
                    h3 { "My Complaints" }
                    button {
                        class: "btn",
                        onclick: move |_| load(),
                        if *loading.read() { "Loading..." } else { "Refresh" }
                    }

                    if complaints.read().is_empty() && !*loading.read() {
                        p { class: "small", "No complaints filed yet." }
                    }

                    for complaint in complaints.read().iter().cloned() {
                        {
                            let item = complaint.clone();
                            rsx! {
                                ComplaintItem {
                                    key: "{complaint.id}",
                                    complaint: item,
                                    on_edit: move |target| start_edit(target),
                                    on_delete: move |id| confirm_delete.set(Some(id)),
                                }
                            }
                        }
                    }
                }
            }

            if let Some(pending_id) = confirm_delete.read().clone() {
                {
                    let delete_confirmed = delete_confirmed.clone();
                    rsx! {
                        ConfirmationDialog {
                            title: "Delete complaint",
                            message: "Delete this complaint? This cannot be undone.",
                            confirm_text: "Delete",
                            cancel_text: "Keep it",
                            danger: true,
                            on_confirm: move |_| {
                                delete_confirmed(pending_id.clone());
                                confirm_delete.set(None);
                            },
                            on_cancel: move |_| confirm_delete.set(None),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ComplaintItem(
    complaint: Complaint,
    on_edit: EventHandler<Complaint>,
    on_delete: EventHandler<String>,
) -> Element {
    let edit_target = complaint.clone();
    let delete_id = complaint.id.clone();

    rsx! {
        div { class: "complaint-item",
            h4 { "{complaint.category.label()}" }
            p { "{complaint.description}" }

            if let Some(data) = complaint.image_data() {
                img { class: "complaint-image", src: "{data}", width: "200" }
            }

            div { class: "complaint-meta",
                span { class: "status-badge status-{complaint.status}", "{complaint.status}" }
                if let Some(created) = complaint.created_at {
                    span { class: "small", {created.format("Filed %b %e, %Y").to_string()} }
                }
            }

            // Once a warden picks the complaint up it is out of the
            // student's hands.
            if complaint.status.student_may_modify() {
                div { class: "complaint-actions",
                    button {
                        class: "btn",
                        onclick: move |_| on_edit.call(edit_target.clone()),
                        "Edit"
                    }
                    button {
                        class: "btn danger",
                        onclick: move |_| on_delete.call(delete_id.clone()),
                        "Delete"
                    }
                }
            }
        }
    }
}

/// Encode a selected file as an embeddable `data:` URL, the form the
/// backend stores and later serves back inside complaint records.
fn encode_data_url(file_name: &str, bytes: &[u8]) -> String {
    let mime = match file_name
        .rsplit('.')
        .next()
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    };
    format!("data:{mime};base64,{}", BASE64.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::encode_data_url;

    #[test]
    fn data_url_carries_mime_from_extension() {
        let url = encode_data_url("leak.PNG", &[1, 2, 3]);
        assert!(url.starts_with("data:image/png;base64,"));

        let url = encode_data_url("photo.jpeg", &[1, 2, 3]);
        assert!(url.starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn unknown_extension_falls_back_to_octet_stream() {
        let url = encode_data_url("note", &[1]);
        assert!(url.starts_with("data:application/octet-stream;base64,"));
    }

    #[test]
    fn payload_is_standard_base64() {
        let url = encode_data_url("a.png", b"hello");
        assert_eq!(url, "data:image/png;base64,aGVsbG8=");
    }
}
