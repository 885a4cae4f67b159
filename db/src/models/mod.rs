pub mod admin_role;
pub mod mark;
pub mod report_task;
pub mod report_task_mark;
pub mod student;
pub mod user;
pub mod user_admin_role;

pub use admin_role::Entity as AdminRole;
pub use mark::Entity as Mark;
pub use report_task::Entity as ReportTask;
pub use report_task_mark::Entity as ReportTaskMark;
pub use student::Entity as Student;
pub use user::Entity as User;
pub use user_admin_role::Entity as UserAdminRole;
