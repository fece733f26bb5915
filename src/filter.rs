/// Filter module
///
/// This module owns the catalog filter contract end to end: the
/// `FilterState` value type, its URL query-string round-tripping, the
/// pure matching semantics applied to listings, and the observable
/// `FilterStore` that URL-owning hosts embed.
///
/// The matching rules combine with AND across dimensions and OR within
/// one: a candidate is visible when it passes every active dimension,
/// and an empty dimension excludes nothing.
use std::collections::BTreeSet;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::debug;

use crate::models::TagKind;
use crate::views::{ItemWithRelations, ProjectWithRelations};

/// The active filter dimensions of a catalog listing
///
/// `categories` holds tag names (the fixed per-listing chip sets),
/// `tags` and `brands` hold ids, `years` completion years. Sets are
/// ordered so serialization is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub q: String,
    pub categories: BTreeSet<String>,
    pub tags: BTreeSet<String>,
    pub brands: BTreeSet<String>,
    pub years: BTreeSet<i32>,
}

/// Wire shape of the filter contract: the URL query parameters
///
/// List dimensions travel as one comma-separated parameter each; an
/// absent parameter means "no constraint".
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(default)]
pub struct FilterQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brands: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years: Option<String>,
}

/// Splits a comma-separated parameter, dropping empty segments.
fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|part| !part.is_empty())
}

fn join_set(set: &BTreeSet<String>) -> Option<String> {
    if set.is_empty() {
        None
    } else {
        Some(set.iter().cloned().collect::<Vec<_>>().join(","))
    }
}

impl FilterQuery {
    /// Resolves the wire shape into a `FilterState`.
    ///
    /// Empty list segments are dropped; non-numeric `years` segments
    /// are dropped as well.
    pub fn into_state(self) -> FilterState {
        FilterState {
            q: self.q.unwrap_or_default(),
            categories: self
                .categories
                .as_deref()
                .map(|raw| split_list(raw).map(str::to_string).collect())
                .unwrap_or_default(),
            tags: self
                .tags
                .as_deref()
                .map(|raw| split_list(raw).map(str::to_string).collect())
                .unwrap_or_default(),
            brands: self
                .brands
                .as_deref()
                .map(|raw| split_list(raw).map(str::to_string).collect())
                .unwrap_or_default(),
            years: self
                .years
                .as_deref()
                .map(|raw| {
                    split_list(raw)
                        .filter_map(|part| part.parse::<i32>().ok())
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}

impl From<&FilterState> for FilterQuery {
    fn from(state: &FilterState) -> Self {
        Self {
            q: if state.q.is_empty() {
                None
            } else {
                Some(state.q.clone())
            },
            categories: join_set(&state.categories),
            tags: join_set(&state.tags),
            brands: join_set(&state.brands),
            years: if state.years.is_empty() {
                None
            } else {
                Some(
                    state
                        .years
                        .iter()
                        .map(|year| year.to_string())
                        .collect::<Vec<_>>()
                        .join(","),
                )
            },
        }
    }
}

impl FilterState {
    /// Parses a URL query string, tolerating anything a browser could
    /// put there; unparseable input yields the empty state.
    pub fn parse(query: &str) -> Self {
        serde_html_form::from_str::<FilterQuery>(query)
            .map(FilterQuery::into_state)
            .unwrap_or_default()
    }

    /// Serializes the state back into the query-string mirror.
    ///
    /// Inactive dimensions are omitted and set members are written in
    /// sorted order, so `parse` and `to_query_string` round-trip.
    pub fn to_query_string(&self) -> String {
        serde_html_form::to_string(&FilterQuery::from(self)).unwrap_or_default()
    }

    /// Whether no dimension is active.
    pub fn is_empty(&self) -> bool {
        self.q.is_empty()
            && self.categories.is_empty()
            && self.tags.is_empty()
            && self.brands.is_empty()
            && self.years.is_empty()
    }

    /// Whether the candidate passes every active dimension.
    pub fn matches(&self, candidate: &impl Cataloged) -> bool {
        if !self.q.is_empty() {
            let keyword = self.q.to_lowercase();
            if !candidate.search_text().contains(&keyword) {
                return false;
            }
        }

        if !self.categories.is_empty()
            && !candidate
                .tag_names()
                .iter()
                .any(|name| self.categories.contains(name))
        {
            return false;
        }

        if !self.tags.is_empty()
            && !candidate.tag_ids().iter().any(|id| self.tags.contains(id))
        {
            return false;
        }

        if !self.brands.is_empty()
            && !candidate
                .brand_ids()
                .iter()
                .any(|id| self.brands.contains(id))
        {
            return false;
        }

        if !self.years.is_empty() {
            match candidate.year() {
                Some(year) if self.years.contains(&year) => {}
                _ => return false,
            }
        }

        true
    }
}

/// A listing entry the filter can be applied to
pub trait Cataloged {
    /// Lower-cased haystack for text search: title or name, the
    /// description, and every resolved tag name.
    fn search_text(&self) -> String;

    /// Names of the tags matching this entity's own kind, for the
    /// category dimension.
    fn tag_names(&self) -> Vec<String>;

    /// All linked tag ids.
    fn tag_ids(&self) -> Vec<String>;

    /// Ids of the brands reachable from this entry.
    fn brand_ids(&self) -> Vec<String>;

    /// Completion year, where the entity has one.
    fn year(&self) -> Option<i32>;
}

impl Cataloged for ProjectWithRelations {
    fn search_text(&self) -> String {
        let mut parts = vec![self.project.get_title()];
        if let Some(description) = self.project.get_description() {
            parts.push(description);
        }
        parts.extend(self.tags.iter().map(|tag| tag.name.clone()));
        parts.join(" ").to_lowercase()
    }

    fn tag_names(&self) -> Vec<String> {
        self.tags
            .iter()
            .filter(|tag| tag.kind == TagKind::Project)
            .map(|tag| tag.name.clone())
            .collect()
    }

    fn tag_ids(&self) -> Vec<String> {
        self.tags.iter().map(|tag| tag.id.clone()).collect()
    }

    fn brand_ids(&self) -> Vec<String> {
        self.items
            .iter()
            .filter_map(|link| link.brand.as_ref().map(|brand| brand.id.clone()))
            .collect()
    }

    fn year(&self) -> Option<i32> {
        self.project.get_year()
    }
}

impl Cataloged for ItemWithRelations {
    fn search_text(&self) -> String {
        let mut parts = vec![self.item.get_name()];
        if let Some(description) = self.item.get_description() {
            parts.push(description);
        }
        parts.extend(self.tags.iter().map(|tag| tag.name.clone()));
        parts.join(" ").to_lowercase()
    }

    fn tag_names(&self) -> Vec<String> {
        self.tags
            .iter()
            .filter(|tag| tag.kind == TagKind::Item)
            .map(|tag| tag.name.clone())
            .collect()
    }

    fn tag_ids(&self) -> Vec<String> {
        self.tags.iter().map(|tag| tag.id.clone()).collect()
    }

    fn brand_ids(&self) -> Vec<String> {
        self.brand.iter().map(|brand| brand.id.clone()).collect()
    }

    fn year(&self) -> Option<i32> {
        None
    }
}

/// Observable filter store
///
/// Owns the authoritative `FilterState` together with its serialized
/// query-string mirror (what a host writes into the URL bar, replacing
/// the current entry rather than pushing one). Every mutation funnels
/// through one commit step: build the next state, refresh the mirror,
/// notify subscribers.
pub struct FilterStore {
    state: RwLock<FilterState>,
    query: RwLock<String>,
    changes: broadcast::Sender<FilterState>,
}

impl FilterStore {
    /// Creates a store with no active dimensions.
    pub fn new() -> Self {
        Self::from_query("")
    }

    /// Creates a store from the query string present at mount time.
    pub fn from_query(query: &str) -> Self {
        let state = FilterState::parse(query);
        let (changes, _) = broadcast::channel(16);
        Self {
            query: RwLock::new(state.to_query_string()),
            state: RwLock::new(state),
            changes,
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> FilterState {
        self.state.read().expect("filter state lock poisoned").clone()
    }

    /// The serialized mirror of the current state.
    pub fn query_string(&self) -> String {
        self.query.read().expect("filter query lock poisoned").clone()
    }

    /// Subscribes to committed state changes.
    pub fn subscribe(&self) -> broadcast::Receiver<FilterState> {
        self.changes.subscribe()
    }

    /// Replaces the search text.
    pub fn set_search(&self, q: &str) {
        let mut next = self.state();
        next.q = q.to_string();
        self.commit(next);
    }

    /// Adds the category to the filter, or removes it when present.
    pub fn toggle_category(&self, name: &str) {
        let mut next = self.state();
        if !next.categories.remove(name) {
            next.categories.insert(name.to_string());
        }
        self.commit(next);
    }

    /// Adds the tag id to the filter, or removes it when present.
    pub fn toggle_tag(&self, id: &str) {
        let mut next = self.state();
        if !next.tags.remove(id) {
            next.tags.insert(id.to_string());
        }
        self.commit(next);
    }

    /// Adds the brand id to the filter, or removes it when present.
    pub fn toggle_brand(&self, id: &str) {
        let mut next = self.state();
        if !next.brands.remove(id) {
            next.brands.insert(id.to_string());
        }
        self.commit(next);
    }

    /// Adds the year to the filter, or removes it when present.
    pub fn toggle_year(&self, year: i32) {
        let mut next = self.state();
        if !next.years.remove(&year) {
            next.years.insert(year);
        }
        self.commit(next);
    }

    /// Clears every dimension at once, leaving the mirror empty.
    pub fn reset(&self) {
        self.commit(FilterState::default());
    }

    /// Converges on an externally changed query string.
    ///
    /// Every URL change not initiated through this store (back/forward
    /// gestures, another component rewriting the location) funnels
    /// through here. Re-parsing a query the store itself produced is a
    /// no-op and notifies nobody, which is what breaks the write/observe
    /// feedback loop.
    pub fn sync_from_query(&self, query: &str) {
        let next = FilterState::parse(query);
        if next == self.state() {
            return;
        }
        self.commit(next);
    }

    fn commit(&self, next: FilterState) {
        let serialized = next.to_query_string();
        debug!(query = %serialized, "Committing filter state");
        {
            // Both halves swap under the same critical section so a
            // reader never sees a mirror that disagrees with the state.
            let mut state = self.state.write().expect("filter state lock poisoned");
            let mut query = self.query.write().expect("filter query lock poisoned");
            *state = next.clone();
            *query = serialized;
        }
        // Nobody listening is fine; the mirror alone is enough for hosts
        // that poll.
        let _ = self.changes.send(next);
    }
}

impl Default for FilterStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
