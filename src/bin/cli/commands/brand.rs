use clap::Subcommand;

use crate::client::ShowroomClient;
use crate::output::{self, OutputConfig};

/// Brand browsing commands
#[derive(Subcommand, Debug)]
pub enum BrandCommands {
    /// List all brands with their project counts
    List,
    /// Get a brand catalog by slug
    Get {
        /// The brand slug
        slug: String,
    },
}

/// Executes a brand command
pub async fn execute(
    client: &ShowroomClient,
    cmd: BrandCommands,
    config: &OutputConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        BrandCommands::List => {
            let brands = client.list_brands().await?;
            output::print_brands(&brands, config);
        }
        BrandCommands::Get { slug } => {
            let catalog = client.get_brand(&slug).await?;
            match catalog {
                Some(catalog) => output::print_brand_catalog(&catalog, config),
                None => {
                    eprintln!("Brand not found: {}", slug);
                    std::process::exit(1);
                }
            }
        }
    }
    Ok(())
}
