pub mod backup;
pub mod list;
pub mod utils;

use crate::SoundCloudClient;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Back up a user's liked tracks
    ///
    /// This command collects the user's liked tracks from their public likes
    /// listing and downloads each one through the configured conversion
    /// services, writing files under `{output-dir}/{artist}/{title}.mp3`.
    /// Tracks whose destination file already exists are skipped, so re-running
    /// resumes where the previous run left off.
    ///
    /// Usage examples:
    /// # Back up all liked tracks
    /// soundcloud-backup backup --username some-user
    ///
    /// # Back up into a custom directory, at most 50 tracks
    /// soundcloud-backup backup --username some-user --output-dir ~/music --limit 50
    Backup {
        /// SoundCloud username (can also be set via SOUNDCLOUD_USERNAME)
        #[arg(long)]
        username: Option<String>,

        /// Directory to save downloaded tracks into
        #[arg(long, default_value = "downloads")]
        output_dir: String,

        /// Maximum number of liked tracks to process (0 for no limit)
        #[arg(long, default_value = "0")]
        limit: usize,
    },

    /// List a user's liked tracks without downloading anything
    ///
    /// Usage examples:
    /// # Print liked tracks as "artist - title" lines
    /// soundcloud-backup list --username some-user
    ///
    /// # Print the first 20 liked tracks as JSON
    /// soundcloud-backup list --username some-user --limit 20 --json
    List {
        /// SoundCloud username (can also be set via SOUNDCLOUD_USERNAME)
        #[arg(long)]
        username: Option<String>,

        /// Maximum number of liked tracks to list (0 for no limit)
        #[arg(long, default_value = "0")]
        limit: usize,

        /// Print tracks as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Execute the appropriate command handler based on the parsed command
pub async fn execute_command(
    command: Commands,
    client: &SoundCloudClient,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Backup {
            username,
            output_dir,
            limit,
        } => {
            let username = utils::resolve_username(username.as_deref())?;
            backup::handle_backup_command(client, &username, &output_dir, limit).await
        }

        Commands::List {
            username,
            limit,
            json,
        } => {
            let username = utils::resolve_username(username.as_deref())?;
            list::handle_list_command(client, &username, limit, json).await
        }
    }
}
