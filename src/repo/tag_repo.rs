use crate::db::DbPool;
use crate::models::{Tag, TagKind};
use crate::schema::tags;
use anyhow::{Context, Result};
use diesel::prelude::*;

/// Lists tags, optionally restricted to one kind
///
/// ### Arguments
///
/// * `pool` - A reference to the database connection pool
/// * `kind` - When set, only tags of this kind are returned
///
/// ### Returns
///
/// A Result containing the matching tags ordered by name
///
/// ### Errors
///
/// Returns an error if:
/// - Unable to get a connection from the pool
/// - The database query fails
pub fn list_tags(pool: &DbPool, kind: Option<TagKind>) -> Result<Vec<Tag>> {
    let conn = &mut pool.get()?;

    let mut query = tags::table.select(Tag::as_select()).into_boxed();
    if let Some(kind) = kind {
        query = query.filter(tags::kind.eq(kind.as_db_str()));
    }

    let listed = query
        .order(tags::name.asc())
        .load(conn)
        .context("Failed to load tags")?;

    Ok(listed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::tests::{seed_tag, setup_test_db};

    #[test]
    fn test_list_tags_ordered_by_name() {
        let pool = setup_test_db();

        seed_tag(&pool, &Tag::new("사무공간".to_string(), TagKind::Project));
        seed_tag(&pool, &Tag::new("도서관".to_string(), TagKind::Project));
        seed_tag(&pool, &Tag::new("의자".to_string(), TagKind::Item));

        let listed = list_tags(&pool, None).unwrap();
        let names: Vec<String> = listed.iter().map(|t| t.get_name()).collect();

        assert_eq!(names, vec!["도서관", "사무공간", "의자"]);
    }

    #[test]
    fn test_list_tags_by_kind() {
        let pool = setup_test_db();

        seed_tag(&pool, &Tag::new("도서관".to_string(), TagKind::Project));
        seed_tag(&pool, &Tag::new("의자".to_string(), TagKind::Item));

        let listed = list_tags(&pool, Some(TagKind::Item)).unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].get_name(), "의자");
        assert_eq!(listed[0].get_kind(), Some(TagKind::Item));
    }

    #[test]
    fn test_list_tags_empty() {
        let pool = setup_test_db();
        let listed = list_tags(&pool, None).unwrap();
        assert!(listed.is_empty());
    }
}
