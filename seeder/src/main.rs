use crate::seed::{Seeder, run_seeder};
use crate::seeds::{mark::MarkSeeder, student::StudentSeeder, user::UserSeeder};

mod seed;
mod seeds;

#[tokio::main]
async fn main() {
    let db = db::connect().await;

    for (seeder, name) in [
        (Box::new(UserSeeder) as Box<dyn Seeder>, "User"),
        (Box::new(StudentSeeder), "Student"),
        (Box::new(MarkSeeder), "Mark"),
    ] {
        run_seeder(&*seeder, name, &db).await;
    }
}
