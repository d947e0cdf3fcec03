#[tokio::main]
async fn main() {
    if let Err(err) = famulor_mcp::mcp::server::run_stdio().await {
        eprintln!("famulor-mcp: {}", err);
        std::process::exit(1);
    }
}
