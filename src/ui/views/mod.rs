pub mod login;
pub mod register;
pub mod student_dashboard;
pub mod warden_dashboard;
pub mod worker_dashboard;

pub use login::Login;
pub use register::Register;
pub use student_dashboard::StudentDashboard;
pub use warden_dashboard::WardenDashboard;
pub use worker_dashboard::WorkerDashboard;
