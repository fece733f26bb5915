use clap::Subcommand;
use showroom::models::TagKind;

use crate::client::ShowroomClient;
use crate::output::{self, OutputConfig};

/// Tag browsing commands
#[derive(Subcommand, Debug)]
pub enum TagCommands {
    /// List tags, optionally restricted to one kind
    List {
        /// Show only tags of this kind ("project" or "item")
        #[clap(long, value_parser = parse_kind)]
        kind: Option<TagKind>,
    },
}

fn parse_kind(raw: &str) -> Result<TagKind, String> {
    TagKind::from_db_str(raw)
        .ok_or_else(|| format!("unknown tag kind '{}', expected 'project' or 'item'", raw))
}

/// Executes a tag command
pub async fn execute(
    client: &ShowroomClient,
    cmd: TagCommands,
    config: &OutputConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        TagCommands::List { kind } => {
            let tags = client.list_tags(kind).await?;
            output::print_tags(&tags, config);
        }
    }
    Ok(())
}
