mod health_test;
mod reports;
mod students;
