use clap::Subcommand;
use showroom::filter::{FilterState, FilterStore};

use crate::client::ShowroomClient;
use crate::output::{self, OutputConfig};

/// Project browsing commands
#[derive(Subcommand, Debug)]
pub enum ProjectCommands {
    /// List visible projects, optionally filtered
    List {
        /// Free-text search over title, description and tag names
        #[clap(long, short)]
        query: Option<String>,
        /// Restrict to projects carrying any of these tag names
        #[clap(long)]
        category: Vec<String>,
        /// Restrict to projects carrying any of these tag IDs
        #[clap(long)]
        tag: Vec<String>,
        /// Restrict to projects featuring any of these brand IDs
        #[clap(long)]
        brand: Vec<String>,
        /// Restrict to projects completed in any of these years
        #[clap(long)]
        year: Vec<i32>,
    },
    /// Get a project page by slug
    Get {
        /// The project slug
        slug: String,
    },
    /// List a project's gallery photos
    Photos {
        /// The project slug
        slug: String,
    },
}

/// Commits the repeated CLI flags into a filter store and snapshots it
///
/// Each invocation owns one store; the flags funnel through the same
/// toggle operations a browsing host uses, so the resulting state and
/// its query-string mirror match what the server-side parser accepts.
pub(crate) fn filter_from_flags(
    query: Option<String>,
    category: Vec<String>,
    tag: Vec<String>,
    brand: Vec<String>,
    year: Vec<i32>,
) -> FilterState {
    let store = FilterStore::new();
    if let Some(q) = query {
        store.set_search(&q);
    }
    for name in category {
        store.toggle_category(&name);
    }
    for id in tag {
        store.toggle_tag(&id);
    }
    for id in brand {
        store.toggle_brand(&id);
    }
    for year in year {
        store.toggle_year(year);
    }
    store.state()
}

/// Executes a project command
pub async fn execute(
    client: &ShowroomClient,
    cmd: ProjectCommands,
    config: &OutputConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        ProjectCommands::List {
            query,
            category,
            tag,
            brand,
            year,
        } => {
            let filter = filter_from_flags(query, category, tag, brand, year);
            let projects = client.list_projects(&filter).await?;
            output::print_projects(&projects, config);
        }
        ProjectCommands::Get { slug } => {
            let page = client.get_project(&slug).await?;
            match page {
                Some(page) => output::print_project_page(&page, config),
                None => {
                    eprintln!("Project not found: {}", slug);
                    std::process::exit(1);
                }
            }
        }
        ProjectCommands::Photos { slug } => {
            let photos = client.list_project_photos(&slug).await?;
            output::print_photos(&photos, config);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_from_flags_commits_every_dimension() {
        let filter = filter_from_flags(
            Some("library".to_string()),
            vec!["public-space".to_string()],
            vec!["tag-1".to_string()],
            vec!["brand-1".to_string()],
            vec![2022, 2024],
        );

        assert_eq!(filter.q, "library");
        assert!(filter.categories.contains("public-space"));
        assert!(filter.tags.contains("tag-1"));
        assert!(filter.brands.contains("brand-1"));
        assert!(filter.years.contains(&2022) && filter.years.contains(&2024));

        // The mirror the client sends is re-parseable
        assert_eq!(FilterState::parse(&filter.to_query_string()), filter);
    }

    #[test]
    fn test_filter_from_flags_without_flags_is_empty() {
        let filter = filter_from_flags(None, vec![], vec![], vec![], vec![]);
        assert!(filter.is_empty());
    }
}
