use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Warden,
    Worker,
}

impl Role {
    /// Wire key of the id credential for this role.
    pub fn id_field(self) -> &'static str {
        match self {
            Role::Student => "student_id",
            Role::Warden => "warden_id",
            Role::Worker => "worker_id",
        }
    }

    pub fn id_label(self) -> &'static str {
        match self {
            Role::Student => "Student ID",
            Role::Warden => "Warden ID",
            Role::Worker => "Worker ID",
        }
    }

    pub fn wire(self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Warden => "warden",
            Role::Worker => "worker",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Warden => "Warden",
            Role::Worker => "Worker",
        }
    }
}

/// The authenticated identity as the backend returns it. Role-specific
/// fields are absent for other roles, so everything past the core triple
/// is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub role: Role,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub student_id: Option<String>,
    #[serde(default)]
    pub warden_id: Option<String>,
    #[serde(default)]
    pub worker_id: Option<String>,
    #[serde(default)]
    pub room_number: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub hostel_block: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Body for `POST /api/auth/login`. The id key changes with the role, so
/// the payload is assembled dynamically rather than through a fixed struct.
pub fn login_payload(role: Role, id: &str, password: &str) -> Value {
    let mut body = Map::new();
    body.insert("role".to_string(), json!(role.wire()));
    body.insert(role.id_field().to_string(), json!(id));
    body.insert("password".to_string(), json!(password));
    Value::Object(body)
}

/// Everything the registration form can hold across all three roles. Only
/// the selected role's fields make it onto the wire.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub student_id: String,
    pub room_number: String,
    pub department: String,
    pub hostel_block: String,
    pub warden_id: String,
    pub worker_id: String,
    pub contact: String,
    pub category: String,
}

/// Body for `POST /api/auth/register`.
pub fn register_payload(role: Role, form: &RegisterForm) -> Value {
    let mut body = Map::new();
    body.insert("role".to_string(), json!(role.wire()));
    body.insert("name".to_string(), json!(form.name));
    body.insert("email".to_string(), json!(form.email));
    body.insert("password".to_string(), json!(form.password));
    match role {
        Role::Student => {
            body.insert("student_id".to_string(), json!(form.student_id));
            body.insert("room_number".to_string(), json!(form.room_number));
            body.insert("department".to_string(), json!(form.department));
            body.insert("hostel_block".to_string(), json!(form.hostel_block));
        }
        Role::Warden => {
            body.insert("warden_id".to_string(), json!(form.warden_id));
            body.insert("hostel_block".to_string(), json!(form.hostel_block));
        }
        Role::Worker => {
            body.insert("worker_id".to_string(), json!(form.worker_id));
            body.insert("contact".to_string(), json!(form.contact));
            body.insert("category".to_string(), json!(form.category));
        }
    }
    Value::Object(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_payload_keys_id_by_role() {
        let body = login_payload(Role::Worker, "W1", "x");
        assert_eq!(body["role"], "worker");
        assert_eq!(body["worker_id"], "W1");
        assert_eq!(body["password"], "x");
        assert!(body.get("student_id").is_none());

        let body = login_payload(Role::Student, "S1", "pw");
        assert_eq!(body["student_id"], "S1");
        assert!(body.get("worker_id").is_none());
    }

    #[test]
    fn register_payload_carries_only_selected_role_fields() {
        let form = RegisterForm {
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            password: "pw".to_string(),
            student_id: "S1".to_string(),
            room_number: "204".to_string(),
            department: "CSE".to_string(),
            hostel_block: "B".to_string(),
            warden_id: "WD9".to_string(),
            worker_id: "W1".to_string(),
            contact: "555".to_string(),
            category: "plumbing".to_string(),
        };

        let body = register_payload(Role::Student, &form);
        assert_eq!(body["role"], "student");
        assert_eq!(body["student_id"], "S1");
        assert_eq!(body["room_number"], "204");
        assert!(body.get("worker_id").is_none());
        assert!(body.get("warden_id").is_none());

        let body = register_payload(Role::Worker, &form);
        assert_eq!(body["worker_id"], "W1");
        assert_eq!(body["contact"], "555");
        assert_eq!(body["category"], "plumbing");
        assert!(body.get("student_id").is_none());
        assert!(body.get("hostel_block").is_none());
    }

    #[test]
    fn role_round_trips_through_wire_form() {
        for role in [Role::Student, Role::Warden, Role::Worker] {
            let encoded = serde_json::to_string(&role).unwrap();
            assert_eq!(encoded, format!("\"{}\"", role.wire()));
            let decoded: Role = serde_json::from_str(&encoded).unwrap();
            assert_eq!(decoded, role);
        }
    }

    #[test]
    fn unknown_role_fails_to_deserialize() {
        let result: Result<Role, _> = serde_json::from_str("\"admin\"");
        assert!(result.is_err());
    }
}
