use boj_cli::cmd::GlobalArgs;
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    boj_cli::logger::init();
    let app = GlobalArgs::parse();
    app.exec_subcmd().await.unwrap_or_else(|e| {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    });
}
