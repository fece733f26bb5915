use clap::Subcommand;

use crate::client::ShowroomClient;
use crate::output::{self, OutputConfig};

/// Photo wall commands
#[derive(Subcommand, Debug)]
pub enum PhotoCommands {
    /// List the newest photos across the catalog
    Wall {
        /// Maximum number of photos to show
        #[clap(long)]
        limit: Option<i64>,
    },
    /// Get a photo with its project and items
    Get {
        /// The photo id
        id: String,
    },
}

/// Executes a photo command
pub async fn execute(
    client: &ShowroomClient,
    cmd: PhotoCommands,
    config: &OutputConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        PhotoCommands::Wall { limit } => {
            let photos = client.list_photos(limit).await?;
            output::print_photos(&photos, config);
        }
        PhotoCommands::Get { id } => {
            let page = client.get_photo(&id).await?;
            match page {
                Some(page) => output::print_photo_page(&page, config),
                None => {
                    eprintln!("Photo not found: {}", id);
                    std::process::exit(1);
                }
            }
        }
    }
    Ok(())
}
