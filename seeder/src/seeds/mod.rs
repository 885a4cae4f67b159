pub mod mark;
pub mod student;
pub mod user;
