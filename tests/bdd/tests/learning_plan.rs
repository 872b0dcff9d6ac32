use brightsteps_bdd::LearningWorld;
use cucumber::World;

#[tokio::main]
async fn main() {
    LearningWorld::cucumber()
        .fail_on_skipped()
        .max_concurrent_scenarios(1)
        .run_and_exit("tests/features")
        .await;
}
