/// View types module
///
/// One explicit result shape per query operation. The repository
/// functions assemble these from raw join rows; handlers and the CLI
/// serialize them as-is. Derived display values (effective cover,
/// gallery, kind-scoped tags) are computed here rather than at call
/// sites so every surface agrees on them.
use serde::{Deserialize, Serialize};

use crate::models::{Brand, Item, Photo, Project, Tag, TagKind};

/// One image in a project gallery, with its position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub id: String,
    pub image_url: String,
    pub alt_text: Option<String>,
    pub sort_order: Option<i32>,
}

impl ImageRef {
    pub fn new(photo: &Photo, sort_order: Option<i32>) -> Self {
        Self {
            id: photo.get_id(),
            image_url: photo.get_image_url(),
            alt_text: photo.get_alt_text(),
            sort_order,
        }
    }
}

/// A resolved tag reference with its parsed kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagLink {
    pub id: String,
    pub name: String,
    pub kind: TagKind,
}

impl TagLink {
    /// Builds a link from a stored tag, dropping rows whose kind column
    /// holds an unrecognized value.
    pub fn from_tag(tag: &Tag) -> Option<Self> {
        Some(Self {
            id: tag.get_id(),
            name: tag.get_name(),
            kind: tag.get_kind()?,
        })
    }
}

/// A compact brand reference embedded in item shapes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandRef {
    pub id: String,
    pub slug: String,
    pub name_ko: String,
    pub name_en: Option<String>,
}

impl BrandRef {
    pub fn from_brand(brand: &Brand) -> Self {
        Self {
            id: brand.get_id(),
            slug: brand.get_slug(),
            name_ko: brand.get_name_ko(),
            name_en: brand.get_name_en(),
        }
    }
}

/// A compact item reference with its brand, embedded in project and
/// photo shapes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemLink {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub image_url: Option<String>,
    pub brand: Option<BrandRef>,
}

impl ItemLink {
    pub fn new(item: &Item, brand: Option<&Brand>) -> Self {
        Self {
            id: item.get_id(),
            slug: item.get_slug(),
            name: item.get_name(),
            image_url: item.get_image_url(),
            brand: brand.map(BrandRef::from_brand),
        }
    }
}

/// A minimal project reference embedded in photo shapes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRef {
    pub id: String,
    pub slug: String,
    pub title: String,
}

impl ProjectRef {
    pub fn from_project(project: &Project) -> Self {
        Self {
            id: project.get_id(),
            slug: project.get_slug(),
            title: project.get_title(),
        }
    }
}

/// A project summary card for related-project lists
///
/// `cover_image_url` is already the effective cover, with the gallery
/// fallback applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCard {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub year: Option<i32>,
    pub cover_image_url: Option<String>,
}

/// A project with every relation a listing needs: ordered gallery
/// images, tag links, and item links
///
/// This is the shape the in-memory filter runs over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectWithRelations {
    pub project: Project,
    pub images: Vec<ImageRef>,
    pub tags: Vec<TagLink>,
    pub items: Vec<ItemLink>,
}

impl ProjectWithRelations {
    /// The cover shown on cards and page headers: the explicit cover
    /// image when set, else the first gallery image in order.
    pub fn effective_cover(&self) -> Option<String> {
        self.project
            .get_cover_image_url()
            .or_else(|| self.images.first().map(|image| image.image_url.clone()))
    }

    /// The gallery images, minus the first one when it serves as cover.
    ///
    /// Exclusion is by position, not URL, so a duplicated image URL in
    /// the gallery only loses the entry that actually became the cover.
    pub fn gallery(&self) -> Vec<ImageRef> {
        if self.project.get_cover_image_url().is_some() || self.images.is_empty() {
            self.images.clone()
        } else {
            self.images[1..].to_vec()
        }
    }

    /// Summarizes this project for a related-project card.
    pub fn to_card(&self) -> ProjectCard {
        ProjectCard {
            id: self.project.get_id(),
            slug: self.project.get_slug(),
            title: self.project.get_title(),
            year: self.project.get_year(),
            cover_image_url: self.effective_cover(),
        }
    }
}

/// The assembled project detail page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectPage {
    pub project: Project,
    /// Effective cover, fallback already applied
    pub cover_image_url: Option<String>,
    pub gallery: Vec<ImageRef>,
    /// Project-kind tags only
    pub tags: Vec<TagLink>,
    /// Item links deduplicated by id
    pub items: Vec<ItemLink>,
}

impl ProjectPage {
    /// Assembles the detail page from a fully hydrated project.
    ///
    /// Tags of the wrong kind are dropped, item links are deduplicated
    /// by id in first-seen order, and the cover fallback is applied.
    pub fn from_relations(relations: ProjectWithRelations) -> Self {
        let cover_image_url = relations.effective_cover();
        let gallery = relations.gallery();

        let tags = relations
            .tags
            .into_iter()
            .filter(|tag| tag.kind == TagKind::Project)
            .collect();

        let mut seen = std::collections::HashSet::new();
        let items = relations
            .items
            .into_iter()
            .filter(|link| seen.insert(link.id.clone()))
            .collect();

        Self {
            project: relations.project,
            cover_image_url,
            gallery,
            tags,
            items,
        }
    }
}

/// An item with its brand summary and tag links, the item listing shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemWithRelations {
    pub item: Item,
    pub brand: Option<BrandRef>,
    pub tags: Vec<TagLink>,
}

/// The assembled item detail page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPage {
    pub item: Item,
    pub brand: Option<BrandRef>,
    /// Item-kind tags only
    pub tags: Vec<TagLink>,
    /// Visible projects using this item, deduplicated, newest year first
    pub projects: Vec<ProjectCard>,
}

/// A brand with its items and, transitively, the projects those items
/// appear in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandCatalog {
    pub brand: Brand,
    pub items: Vec<Item>,
    pub projects: Vec<ProjectCard>,
}

/// A brand tile for the brand listing, carrying how many visible
/// projects feature the brand's items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandWithCount {
    pub brand: Brand,
    pub project_count: usize,
}

/// A gallery photo hydrated with the items that appear in it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoWithItems {
    pub photo: Photo,
    pub sort_order: Option<i32>,
    pub items: Vec<ItemLink>,
}

/// A photo featuring some item, with the owning project's summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPhoto {
    pub photo: Photo,
    pub project: ProjectRef,
}

/// The photo detail page: one photo, the visible project it belongs
/// to, and the items shown in it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoPage {
    pub photo: Photo,
    pub project: ProjectRef,
    pub items: Vec<ItemLink>,
}
