use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Plumbing,
    Electricity,
    Carpentry,
    Other,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Plumbing,
        Category::Electricity,
        Category::Carpentry,
        Category::Other,
    ];

    pub fn wire(self) -> &'static str {
        match self {
            Category::Plumbing => "plumbing",
            Category::Electricity => "electricity",
            Category::Carpentry => "carpentry",
            Category::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Plumbing => "Plumbing",
            Category::Electricity => "Electricity",
            Category::Carpentry => "Carpentry",
            Category::Other => "Other",
        }
    }

    /// Lenient parse for select inputs; anything unrecognized falls back to
    /// the form default.
    pub fn parse(value: &str) -> Category {
        match value {
            "electricity" => Category::Electricity,
            "carpentry" => Category::Carpentry,
            "other" => Category::Other,
            _ => Category::Plumbing,
        }
    }
}

/// Workflow state of a complaint. Wire form is kebab-case
/// (`pending`, `accepted`, `in-progress`, `completed`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComplaintStatus {
    Pending,
    Accepted,
    InProgress,
    Completed,
}

impl ComplaintStatus {
    pub fn wire(self) -> &'static str {
        match self {
            ComplaintStatus::Pending => "pending",
            ComplaintStatus::Accepted => "accepted",
            ComplaintStatus::InProgress => "in-progress",
            ComplaintStatus::Completed => "completed",
        }
    }

    /// Students may edit or delete only before the warden picks the
    /// complaint up.
    pub fn student_may_modify(self) -> bool {
        matches!(self, ComplaintStatus::Pending)
    }

    /// A worker can claim a complaint only once a warden has accepted it.
    pub fn worker_may_claim(self) -> bool {
        matches!(self, ComplaintStatus::Accepted)
    }

    pub fn worker_may_complete(self) -> bool {
        matches!(self, ComplaintStatus::InProgress)
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire())
    }
}

/// A maintenance request as the backend returns it. Ids are opaque
/// server-assigned strings; the client never mints one. `student_name` and
/// `room_number` are denormalized by the backend for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Complaint {
    pub id: String,
    pub student_id: String,
    pub category: Category,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    pub status: ComplaintStatus,
    #[serde(default)]
    pub assigned_worker_id: Option<String>,
    #[serde(default)]
    pub warden_comments: Option<String>,
    #[serde(default)]
    pub student_name: String,
    #[serde(default)]
    pub room_number: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Complaint {
    /// The attached image, if one was actually uploaded. The backend stores
    /// an empty string for "no image".
    pub fn image_data(&self) -> Option<&str> {
        self.image.as_deref().filter(|data| !data.is_empty())
    }

    pub fn is_assigned(&self) -> bool {
        self.assigned_worker_id
            .as_deref()
            .is_some_and(|id| !id.is_empty())
    }

    pub fn assigned_to(&self, worker_id: &str) -> bool {
        self.assigned_worker_id.as_deref() == Some(worker_id)
    }

    pub fn warden_notes(&self) -> Option<&str> {
        self.warden_comments.as_deref().filter(|c| !c.is_empty())
    }
}

/// Body for `POST /api/complaints`. `image` is an empty string when nothing
/// was attached, matching what the backend stores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewComplaint {
    pub student_id: String,
    pub description: String,
    pub category: Category,
    pub image: String,
}

/// Body for `PUT /api/complaints/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplaintEdit {
    pub description: String,
    pub category: Category,
    pub image: String,
}

/// Body for `PATCH /api/complaints/{id}/status`. The assignment field is
/// omitted entirely when the claim must not overwrite an existing worker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusUpdate {
    pub status: ComplaintStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_worker_id: Option<String>,
}

/// A complaint description must contain something other than whitespace
/// before any request is issued.
pub fn description_is_valid(raw: &str) -> bool {
    !raw.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_wire_forms_are_kebab_case() {
        assert_eq!(
            serde_json::to_string(&ComplaintStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
        let decoded: ComplaintStatus = serde_json::from_str("\"in-progress\"").unwrap();
        assert_eq!(decoded, ComplaintStatus::InProgress);
        assert_eq!(ComplaintStatus::Completed.to_string(), "completed");
    }

    #[test]
    fn only_pending_is_student_modifiable() {
        assert!(ComplaintStatus::Pending.student_may_modify());
        assert!(!ComplaintStatus::Accepted.student_may_modify());
        assert!(!ComplaintStatus::InProgress.student_may_modify());
        assert!(!ComplaintStatus::Completed.student_may_modify());
    }

    #[test]
    fn worker_transitions_follow_the_workflow() {
        assert!(ComplaintStatus::Accepted.worker_may_claim());
        assert!(!ComplaintStatus::Pending.worker_may_claim());
        assert!(ComplaintStatus::InProgress.worker_may_complete());
        assert!(!ComplaintStatus::Accepted.worker_may_complete());
    }

    #[test]
    fn empty_assignment_counts_as_unassigned() {
        let mut complaint = sample();
        assert!(!complaint.is_assigned());
        complaint.assigned_worker_id = Some(String::new());
        assert!(!complaint.is_assigned());
        complaint.assigned_worker_id = Some("W1".to_string());
        assert!(complaint.is_assigned());
        assert!(complaint.assigned_to("W1"));
        assert!(!complaint.assigned_to("W2"));
    }

    #[test]
    fn empty_image_reads_as_no_image() {
        let mut complaint = sample();
        assert!(complaint.image_data().is_none());
        complaint.image = Some(String::new());
        assert!(complaint.image_data().is_none());
        complaint.image = Some("data:image/png;base64,AAAA".to_string());
        assert_eq!(complaint.image_data(), Some("data:image/png;base64,AAAA"));
    }

    #[test]
    fn status_update_omits_absent_assignment() {
        let update = StatusUpdate {
            status: ComplaintStatus::Completed,
            assigned_worker_id: None,
        };
        let body = serde_json::to_value(&update).unwrap();
        assert_eq!(body, serde_json::json!({ "status": "completed" }));
    }

    #[test]
    fn description_validation_rejects_whitespace() {
        assert!(!description_is_valid(""));
        assert!(!description_is_valid("   \n\t"));
        assert!(description_is_valid("tap is leaking"));
    }

    #[test]
    fn complaint_deserializes_with_minimal_fields() {
        let raw = serde_json::json!({
            "id": "c1",
            "student_id": "S1",
            "category": "plumbing",
            "description": "leak",
            "status": "pending"
        });
        let complaint: Complaint = serde_json::from_value(raw).unwrap();
        assert_eq!(complaint.id, "c1");
        assert!(complaint.created_at.is_none());
        assert_eq!(complaint.student_name, "");
    }

    fn sample() -> Complaint {
        Complaint {
            id: "c1".to_string(),
            student_id: "S1".to_string(),
            category: Category::Plumbing,
            description: "leak".to_string(),
            image: None,
            status: ComplaintStatus::Pending,
            assigned_worker_id: None,
            warden_comments: None,
            student_name: "Ann".to_string(),
            room_number: "204".to_string(),
            created_at: None,
        }
    }
}
