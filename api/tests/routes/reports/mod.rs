mod generate_test;
mod get_test;
mod post_test;
