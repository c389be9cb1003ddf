//! Business filtering: builds the set of identifiers of businesses in a given category.
use std::collections::HashSet;
use std::path::Path;

use log::info;

use crate::error::Error;
use crate::filtering::{CategoryFilter, Filter};
use crate::io::{JsonlReader, OnMalformed};
use crate::records::Business;

/// Immutable set of business identifiers.
///
/// Built once, then only queried for membership.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdSet {
    ids: HashSet<String>,
}

impl IdSet {
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for IdSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Identifiers of businesses whose categories contain `Restaurants`.
///
/// Aborts on the first malformed line.
pub fn get_restaurant_ids(src: &Path) -> Result<IdSet, Error> {
    get_ids_by_category(src, &CategoryFilter::default(), OnMalformed::Abort)
}

/// Identifiers of businesses kept by `filter`.
pub fn get_ids_by_category(
    src: &Path,
    filter: &CategoryFilter,
    policy: OnMalformed,
) -> Result<IdSet, Error> {
    info!("collecting {} ids from {:?}", filter.category(), src);
    let mut ids = HashSet::new();
    for business in JsonlReader::<Business>::from_path(src, policy)? {
        let business = business?;
        if filter.detect(&business) {
            ids.insert(business.business_id);
        }
    }

    info!("found {} {} ids", ids.len(), filter.category());
    Ok(IdSet { ids })
}
