use clap::Parser;

use keypanel_server::cli::{run, ServerArgs};

#[tokio::main]
async fn main() {
    let args = ServerArgs::parse();
    if let Err(e) = run(args).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
