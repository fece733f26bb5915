use clap::Subcommand;

use crate::client::ShowroomClient;
use crate::commands::project::filter_from_flags;
use crate::output::{self, OutputConfig};

/// Item browsing commands
#[derive(Subcommand, Debug)]
pub enum ItemCommands {
    /// List items, optionally filtered
    List {
        /// Free-text search over name, description and tag names
        #[clap(long, short)]
        query: Option<String>,
        /// Restrict to items carrying any of these tag names
        #[clap(long)]
        category: Vec<String>,
        /// Restrict to items carrying any of these tag IDs
        #[clap(long)]
        tag: Vec<String>,
        /// Restrict to items of any of these brand IDs
        #[clap(long)]
        brand: Vec<String>,
    },
    /// Get an item page by slug
    Get {
        /// The item slug
        slug: String,
    },
    /// List the photos an item appears in
    Photos {
        /// The item slug
        slug: String,
    },
}

/// Executes an item command
pub async fn execute(
    client: &ShowroomClient,
    cmd: ItemCommands,
    config: &OutputConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        ItemCommands::List {
            query,
            category,
            tag,
            brand,
        } => {
            let filter = filter_from_flags(query, category, tag, brand, vec![]);
            let items = client.list_items(&filter).await?;
            output::print_items(&items, config);
        }
        ItemCommands::Get { slug } => {
            let page = client.get_item(&slug).await?;
            match page {
                Some(page) => output::print_item_page(&page, config),
                None => {
                    eprintln!("Item not found: {}", slug);
                    std::process::exit(1);
                }
            }
        }
        ItemCommands::Photos { slug } => {
            let photos = client.list_item_photos(&slug).await?;
            output::print_item_photos(&photos, config);
        }
    }
    Ok(())
}
