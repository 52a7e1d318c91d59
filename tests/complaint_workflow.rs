//! Walks a complaint through the full workflow (filed by a student,
//! accepted by a warden, claimed and completed by a worker), exercising the
//! list-synchronization reducers and the worker partition the way the
//! dashboards drive them. Server round trips are simulated by constructing
//! the records the backend would return.

use hostelhub::domain::{Category, Complaint, ComplaintStatus};
use hostelhub::state::{self, WorkerQueues};

fn server_record(id: &str, status: ComplaintStatus) -> Complaint {
    Complaint {
        id: id.to_string(),
        student_id: "S1".to_string(),
        category: Category::Electricity,
        description: "socket sparks when plugged in".to_string(),
        image: Some(String::new()),
        status,
        assigned_worker_id: None,
        warden_comments: None,
        student_name: "Ann".to_string(),
        room_number: "204".to_string(),
        created_at: None,
    }
}

#[test]
fn complaint_travels_from_creation_to_completion() {
    // Student view: list starts empty, server responds to the create with
    // the canonical record.
    let mut student_list: Vec<Complaint> = Vec::new();
    state::prepend_created(&mut student_list, server_record("c1", ComplaintStatus::Pending));
    assert_eq!(student_list.len(), 1);
    assert!(student_list[0].status.student_may_modify());

    // Warden accepts (outside this client); the student's next refresh and
    // the worker's board both see the accepted record.
    let accepted = server_record("c1", ComplaintStatus::Accepted);
    state::replace_by_id(&mut student_list, accepted.clone());
    assert!(!student_list[0].status.student_may_modify());

    let mut board = vec![accepted];
    let queues = WorkerQueues::partition(&board, "W1");
    assert_eq!(queues.available.len(), 1);
    assert!(queues.in_progress.is_empty());

    // Worker W1 claims it. The claim body must assign W1 because nobody
    // holds the job yet.
    let update = state::claim_update(&queues.available[0], "W1");
    assert_eq!(update.status, ComplaintStatus::InProgress);
    assert_eq!(update.assigned_worker_id.as_deref(), Some("W1"));

    let mut claimed = server_record("c1", ComplaintStatus::InProgress);
    claimed.assigned_worker_id = Some("W1".to_string());
    state::replace_by_id(&mut board, claimed);

    let queues = WorkerQueues::partition(&board, "W1");
    assert!(queues.available.is_empty());
    assert_eq!(queues.in_progress.len(), 1);

    // Another worker's board must not list W1's job as theirs.
    let other = WorkerQueues::partition(&board, "W2");
    assert!(other.available.is_empty());
    assert!(other.in_progress.is_empty());

    // W1 finishes the job.
    let update = state::complete_update();
    assert_eq!(update.status, ComplaintStatus::Completed);

    let mut completed = server_record("c1", ComplaintStatus::Completed);
    completed.assigned_worker_id = Some("W1".to_string());
    state::replace_by_id(&mut board, completed);

    let queues = WorkerQueues::partition(&board, "W1");
    assert!(queues.in_progress.is_empty());
    assert_eq!(queues.completed.len(), 1);
}

#[test]
fn claiming_someone_elses_job_keeps_their_assignment() {
    let mut target = server_record("c2", ComplaintStatus::Accepted);
    target.assigned_worker_id = Some("W2".to_string());

    let update = state::claim_update(&target, "W1");
    assert!(update.assigned_worker_id.is_none());

    // On the wire the assignment key is absent entirely, so the backend
    // cannot interpret the claim as a reassignment.
    let body = serde_json::to_value(&update).unwrap();
    assert!(body.get("assigned_worker_id").is_none());
}

#[test]
fn student_deletion_only_touches_the_deleted_entry() {
    let mut list = vec![
        server_record("c1", ComplaintStatus::Pending),
        server_record("c2", ComplaintStatus::Pending),
        server_record("c3", ComplaintStatus::Accepted),
    ];
    state::remove_by_id(&mut list, "c1");

    let ids: Vec<&str> = list.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["c2", "c3"]);
}
