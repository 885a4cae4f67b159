pub mod m202502100001_create_users;
pub mod m202502100002_create_admin_roles;
pub mod m202502100003_create_students;
pub mod m202502100004_create_marks;
pub mod m202502100005_create_report_tasks;
