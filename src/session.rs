use crate::domain::User;

/// The client-held record of who is signed in. The app root owns one
/// inside a `Signal` and provides it through context, so views receive it
/// by injection rather than through a module-level global and tests can
/// construct one directly. No expiry, no refresh, no server validation:
/// purely a cache of the last successful login.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    pub fn log_in(&mut self, user: User) {
        self.user = Some(user);
    }

    pub fn log_out(&mut self) {
        self.user = None;
    }

    pub fn current(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;

    fn user() -> User {
        User {
            id: "S1".to_string(),
            role: Role::Student,
            name: "Ann".to_string(),
            email: None,
            student_id: Some("S1".to_string()),
            warden_id: None,
            worker_id: None,
            room_number: Some("204".to_string()),
            department: None,
            hostel_block: None,
            contact: None,
            category: None,
        }
    }

    #[test]
    fn starts_empty() {
        let session = Session::default();
        assert!(session.current().is_none());
        assert!(!session.is_signed_in());
    }

    #[test]
    fn login_then_logout() {
        let mut session = Session::default();
        session.log_in(user());
        assert!(session.is_signed_in());
        assert_eq!(session.current().map(|u| u.id.as_str()), Some("S1"));

        session.log_out();
        assert!(session.current().is_none());
    }

    #[test]
    fn second_login_replaces_the_first() {
        let mut session = Session::default();
        session.log_in(user());
        let mut other = user();
        other.id = "S2".to_string();
        session.log_in(other);
        assert_eq!(session.current().map(|u| u.id.as_str()), Some("S2"));
    }
}
