mod marks_test;
mod students_test;
