use clap::ValueEnum;
use showroom::models::Tag;
use showroom::views::{
    BrandCatalog, BrandWithCount, ItemPage, ItemPhoto, ItemWithRelations, PhotoPage,
    PhotoWithItems, ProjectPage, ProjectWithRelations, TagLink,
};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

/// Bundled output configuration passed to all print functions
#[derive(Debug, Clone, Copy)]
pub struct OutputConfig {
    /// The output format
    pub format: OutputFormat,
    /// When true, print minimal output (just slugs or counts)
    pub quiet: bool,
}

fn joined_tag_names(tags: &[TagLink]) -> String {
    if tags.is_empty() {
        "-".to_string()
    } else {
        tags.iter().map(|t| t.name.clone()).collect::<Vec<_>>().join(", ")
    }
}

/// Prints a project listing in the specified format
pub fn print_projects(projects: &[ProjectWithRelations], config: &OutputConfig) {
    match config.format {
        OutputFormat::Human => {
            if projects.is_empty() {
                if !config.quiet {
                    println!("No projects found.");
                }
                return;
            }
            if config.quiet {
                for project in projects {
                    println!("{}", project.project.get_slug());
                }
                return;
            }
            let max_slug = projects
                .iter()
                .map(|p| p.project.get_slug().len())
                .max()
                .unwrap_or(4);
            let max_title = projects
                .iter()
                .map(|p| p.project.get_title().len())
                .max()
                .unwrap_or(5);
            println!(
                "{:<slug_w$}  {:<title_w$}  {:>4}  TAGS",
                "SLUG",
                "TITLE",
                "YEAR",
                slug_w = max_slug,
                title_w = max_title,
            );
            for project in projects {
                let year = project
                    .project
                    .get_year()
                    .map(|y| y.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{:<slug_w$}  {:<title_w$}  {:>4}  {}",
                    project.project.get_slug(),
                    project.project.get_title(),
                    year,
                    joined_tag_names(&project.tags),
                    slug_w = max_slug,
                    title_w = max_title,
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(projects).unwrap());
        }
    }
}

/// Prints a single project page in the specified format
pub fn print_project_page(page: &ProjectPage, config: &OutputConfig) {
    match config.format {
        OutputFormat::Human => {
            if config.quiet {
                println!("{}", page.project.get_slug());
                return;
            }
            println!("Slug:     {}", page.project.get_slug());
            println!("Title:    {}", page.project.get_title());
            match page.project.get_year() {
                Some(year) => println!("Year:     {}", year),
                None => println!("Year:     -"),
            }
            match page.project.get_location() {
                Some(location) => println!("Location: {}", location),
                None => println!("Location: -"),
            }
            match &page.cover_image_url {
                Some(url) => println!("Cover:    {}", url),
                None => println!("Cover:    -"),
            }
            println!("Tags:     {}", joined_tag_names(&page.tags));
            if let Some(description) = page.project.get_description() {
                println!();
                println!("{}", description);
            }
            if !page.items.is_empty() {
                println!();
                println!("Items:");
                for item in &page.items {
                    let brand = item
                        .brand
                        .as_ref()
                        .map(|b| format!(" ({})", b.name_ko))
                        .unwrap_or_default();
                    println!("  {}{}", item.name, brand);
                }
            }
            if !page.gallery.is_empty() {
                println!();
                println!("Gallery: {} photos", page.gallery.len());
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(page).unwrap());
        }
    }
}

/// Prints a brand listing in the specified format
pub fn print_brands(brands: &[BrandWithCount], config: &OutputConfig) {
    match config.format {
        OutputFormat::Human => {
            if brands.is_empty() {
                if !config.quiet {
                    println!("No brands found.");
                }
                return;
            }
            if config.quiet {
                for entry in brands {
                    println!("{}", entry.brand.get_slug());
                }
                return;
            }
            let max_slug = brands
                .iter()
                .map(|b| b.brand.get_slug().len())
                .max()
                .unwrap_or(4);
            let max_name = brands
                .iter()
                .map(|b| b.brand.get_name_ko().len())
                .max()
                .unwrap_or(4);
            println!(
                "{:<slug_w$}  {:<name_w$}  PROJECTS",
                "SLUG",
                "NAME",
                slug_w = max_slug,
                name_w = max_name,
            );
            for entry in brands {
                println!(
                    "{:<slug_w$}  {:<name_w$}  {:>8}",
                    entry.brand.get_slug(),
                    entry.brand.get_name_ko(),
                    entry.project_count,
                    slug_w = max_slug,
                    name_w = max_name,
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(brands).unwrap());
        }
    }
}

/// Prints a brand catalog in the specified format
pub fn print_brand_catalog(catalog: &BrandCatalog, config: &OutputConfig) {
    match config.format {
        OutputFormat::Human => {
            if config.quiet {
                println!("{}", catalog.brand.get_slug());
                return;
            }
            println!("Slug:    {}", catalog.brand.get_slug());
            println!("Name:    {}", catalog.brand.get_name_ko());
            if let Some(name_en) = catalog.brand.get_name_en() {
                println!("Name EN: {}", name_en);
            }
            match catalog.brand.get_website_url() {
                Some(url) => println!("Website: {}", url),
                None => println!("Website: -"),
            }
            if let Some(description) = catalog.brand.get_description() {
                println!();
                println!("{}", description);
            }
            println!();
            if catalog.items.is_empty() {
                println!("No items.");
            } else {
                println!("Items:");
                for item in &catalog.items {
                    println!("  {}  ({})", item.get_name(), item.get_slug());
                }
            }
            if !catalog.projects.is_empty() {
                println!();
                println!("Featured in:");
                for project in &catalog.projects {
                    let year = project
                        .year
                        .map(|y| format!(", {}", y))
                        .unwrap_or_default();
                    println!("  {}  ({}{})", project.title, project.slug, year);
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(catalog).unwrap());
        }
    }
}

/// Prints an item listing in the specified format
pub fn print_items(items: &[ItemWithRelations], config: &OutputConfig) {
    match config.format {
        OutputFormat::Human => {
            if items.is_empty() {
                if !config.quiet {
                    println!("No items found.");
                }
                return;
            }
            if config.quiet {
                for entry in items {
                    println!("{}", entry.item.get_slug());
                }
                return;
            }
            let max_slug = items
                .iter()
                .map(|i| i.item.get_slug().len())
                .max()
                .unwrap_or(4);
            let max_name = items
                .iter()
                .map(|i| i.item.get_name().len())
                .max()
                .unwrap_or(4);
            println!(
                "{:<slug_w$}  {:<name_w$}  BRAND",
                "SLUG",
                "NAME",
                slug_w = max_slug,
                name_w = max_name,
            );
            for entry in items {
                let brand = entry
                    .brand
                    .as_ref()
                    .map(|b| b.name_ko.clone())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{:<slug_w$}  {:<name_w$}  {}",
                    entry.item.get_slug(),
                    entry.item.get_name(),
                    brand,
                    slug_w = max_slug,
                    name_w = max_name,
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(items).unwrap());
        }
    }
}

/// Prints a single item page in the specified format
pub fn print_item_page(page: &ItemPage, config: &OutputConfig) {
    match config.format {
        OutputFormat::Human => {
            if config.quiet {
                println!("{}", page.item.get_slug());
                return;
            }
            println!("Slug:   {}", page.item.get_slug());
            println!("Name:   {}", page.item.get_name());
            match &page.brand {
                Some(brand) => println!("Brand:  {}", brand.name_ko),
                None => println!("Brand:  -"),
            }
            match page.item.get_market_url() {
                Some(url) => println!("Market: {}", url),
                None => println!("Market: -"),
            }
            println!("Tags:   {}", joined_tag_names(&page.tags));
            if let Some(description) = page.item.get_description() {
                println!();
                println!("{}", description);
            }
            if !page.projects.is_empty() {
                println!();
                println!("Used in:");
                for project in &page.projects {
                    let year = project
                        .year
                        .map(|y| format!(", {}", y))
                        .unwrap_or_default();
                    println!("  {}  ({}{})", project.title, project.slug, year);
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(page).unwrap());
        }
    }
}

/// Prints gallery photos in the specified format
pub fn print_photos(photos: &[PhotoWithItems], config: &OutputConfig) {
    match config.format {
        OutputFormat::Human => {
            if photos.is_empty() {
                if !config.quiet {
                    println!("No photos found.");
                }
                return;
            }
            if config.quiet {
                for entry in photos {
                    println!("{}", entry.photo.get_image_url());
                }
                return;
            }
            for entry in photos {
                println!("{}", entry.photo.get_image_url());
                if let Some(alt) = entry.photo.get_alt_text() {
                    println!("  {}", alt);
                }
                for item in &entry.items {
                    println!("  - {}  ({})", item.name, item.slug);
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(photos).unwrap());
        }
    }
}

/// Prints a single photo page in the specified format
pub fn print_photo_page(page: &PhotoPage, config: &OutputConfig) {
    match config.format {
        OutputFormat::Human => {
            if config.quiet {
                println!("{}", page.photo.get_id());
                return;
            }
            println!("Image:   {}", page.photo.get_image_url());
            if let Some(alt) = page.photo.get_alt_text() {
                println!("Alt:     {}", alt);
            }
            println!("Project: {}  ({})", page.project.title, page.project.slug);
            if !page.items.is_empty() {
                println!();
                println!("Items:");
                for item in &page.items {
                    let brand = item
                        .brand
                        .as_ref()
                        .map(|b| format!(" ({})", b.name_ko))
                        .unwrap_or_default();
                    println!("  {}{}", item.name, brand);
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(page).unwrap());
        }
    }
}

/// Prints the photos an item appears in
pub fn print_item_photos(photos: &[ItemPhoto], config: &OutputConfig) {
    match config.format {
        OutputFormat::Human => {
            if photos.is_empty() {
                if !config.quiet {
                    println!("No photos found.");
                }
                return;
            }
            if config.quiet {
                for entry in photos {
                    println!("{}", entry.photo.get_image_url());
                }
                return;
            }
            for entry in photos {
                println!(
                    "{}  (in {})",
                    entry.photo.get_image_url(),
                    entry.project.title
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(photos).unwrap());
        }
    }
}

/// Prints a list of tags in the specified format
pub fn print_tags(tags: &[Tag], config: &OutputConfig) {
    match config.format {
        OutputFormat::Human => {
            if tags.is_empty() {
                if !config.quiet {
                    println!("No tags found.");
                }
                return;
            }
            if config.quiet {
                for tag in tags {
                    println!("{}", tag.get_id());
                }
                return;
            }
            let max_id = tags.iter().map(|t| t.get_id().len()).max().unwrap_or(2);
            let max_name = tags.iter().map(|t| t.get_name().len()).max().unwrap_or(4);
            println!(
                "{:<id_w$}  {:<name_w$}  KIND",
                "ID",
                "NAME",
                id_w = max_id,
                name_w = max_name,
            );
            for tag in tags {
                let kind = tag.get_kind().map(|k| k.as_db_str()).unwrap_or("?");
                println!(
                    "{:<id_w$}  {:<name_w$}  {}",
                    tag.get_id(),
                    tag.get_name(),
                    kind,
                    id_w = max_id,
                    name_w = max_name,
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(tags).unwrap());
        }
    }
}

/// Prints a simple success message (for operations that don't return data)
pub fn print_success(message: &str, config: &OutputConfig) {
    match config.format {
        OutputFormat::Human => {
            if !config.quiet {
                println!("{}", message);
            }
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({"status": "ok", "message": message}))
                    .unwrap()
            );
        }
    }
}
