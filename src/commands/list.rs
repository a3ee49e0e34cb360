use crate::SoundCloudClient;

/// Handle the list command: print a user's liked tracks without downloading.
pub async fn handle_list_command(
    client: &SoundCloudClient,
    username: &str,
    limit: usize,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let tracks = super::utils::collect_likes(client, username, limit).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tracks)?);
        return Ok(());
    }

    if tracks.is_empty() {
        println!("No liked tracks found for '{username}'");
        return Ok(());
    }

    for (i, track) in tracks.iter().enumerate() {
        println!("{:4}. {} - {}", i + 1, track.artist, track.title);
    }
    println!();
    println!("{} liked tracks", tracks.len());

    Ok(())
}
