#[tokio::main]
async fn main() {
    quizfeed::start_server().await;
}
