//! Pure list-synchronization logic shared by the dashboards.
//!
//! Every mutation round trip ends by patching the view's local list with the
//! server's canonical record. The patches live here as plain functions over
//! `Vec<Complaint>` so the synchronization rules are testable without a
//! network or a UI runtime.

use crate::domain::{Complaint, ComplaintStatus, StatusUpdate};

/// A freshly created record goes to the head of the list.
pub fn prepend_created(list: &mut Vec<Complaint>, created: Complaint) {
    list.insert(0, created);
}

/// Swap in the server's record for the entry with the same id, leaving
/// order and every other entry untouched. No match, no change.
pub fn replace_by_id(list: &mut [Complaint], record: Complaint) {
    if let Some(entry) = list.iter_mut().find(|c| c.id == record.id) {
        *entry = record;
    }
}

/// Drop the entry with the given id, preserving the order of the rest.
pub fn remove_by_id(list: &mut Vec<Complaint>, id: &str) {
    list.retain(|c| c.id != id);
}

/// The worker board's three sections, derived fresh from the loaded list on
/// every render and never cached.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkerQueues {
    pub available: Vec<Complaint>,
    pub in_progress: Vec<Complaint>,
    pub completed: Vec<Complaint>,
}

impl WorkerQueues {
    pub fn partition(complaints: &[Complaint], worker_id: &str) -> Self {
        let mut queues = Self::default();
        for complaint in complaints {
            match complaint.status {
                ComplaintStatus::Accepted if !complaint.is_assigned() => {
                    queues.available.push(complaint.clone());
                }
                ComplaintStatus::InProgress if complaint.assigned_to(worker_id) => {
                    queues.in_progress.push(complaint.clone());
                }
                ComplaintStatus::Completed if complaint.assigned_to(worker_id) => {
                    queues.completed.push(complaint.clone());
                }
                _ => {}
            }
        }
        queues
    }
}

/// Build the claim request. The assignment rides along only when nobody
/// holds the job yet; an existing `assigned_worker_id` must never be
/// overwritten.
pub fn claim_update(target: &Complaint, worker_id: &str) -> StatusUpdate {
    StatusUpdate {
        status: ComplaintStatus::InProgress,
        assigned_worker_id: (!target.is_assigned()).then(|| worker_id.to_string()),
    }
}

pub fn complete_update() -> StatusUpdate {
    StatusUpdate {
        status: ComplaintStatus::Completed,
        assigned_worker_id: None,
    }
}
