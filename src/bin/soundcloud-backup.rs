use clap::Parser;
use soundcloud_backup::commands::{execute_command, Commands};
use soundcloud_backup::SoundCloudClient;
use std::sync::Arc;

/// SoundCloud liked-tracks backup tool
#[derive(Parser)]
#[command(
    name = "soundcloud-backup",
    about = "Back up a SoundCloud user's liked tracks",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Process-wide setup happens once, here: .env loading and the logger
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = Cli::parse();

    let http_client = http_client::native::NativeClient::new();
    let client = SoundCloudClient::new(Arc::new(http_client));

    if let Err(e) = execute_command(args.command, &client).await {
        eprintln!("❌ Command failed: {e}");
        std::process::exit(1);
    }

    Ok(())
}
