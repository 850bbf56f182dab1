#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shophub_shell::run().await
}
