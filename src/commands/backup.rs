use crate::{Downloader, SoundCloudClient};
use std::fs;

/// Handle the backup command: collect the likes listing, then run the
/// download engine over each track sequentially.
pub async fn handle_backup_command(
    client: &SoundCloudClient,
    username: &str,
    output_dir: &str,
    limit: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("🎵 Backing up liked tracks for '{username}'...");

    let tracks = super::utils::collect_likes(client, username, limit).await?;
    if tracks.is_empty() {
        println!("No liked tracks found for '{username}'");
        return Ok(());
    }
    println!("Found {} liked tracks", tracks.len());

    fs::create_dir_all(output_dir)?;
    let downloader = Downloader::with_default_resolvers(output_dir, client);
    let summary = downloader.download_all(&tracks).await;

    println!();
    println!("✅ Downloaded: {}", summary.downloaded);
    println!("⏭️  Skipped (already present): {}", summary.skipped);
    if summary.failed > 0 {
        println!("❌ Failed: {}", summary.failed);
        println!("   (failed tracks are retried on the next run)");
    }

    Ok(())
}
