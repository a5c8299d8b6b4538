//! In-memory database of NEOs and their close approaches.
//!
//! The database owns both collections. Each close approach is linked to the
//! NEO with the same designation by storing a [`NeoId`] handle, and each NEO
//! records the [`ApproachId`]s of its approaches. Handles are resolved through
//! the database, so there are no reference cycles between records.

use std::collections::HashMap;

use crate::error::Result;
use crate::filters::FilterSet;
use crate::models::{ApproachId, ApproachView, CloseApproach, NearEarthObject, NeoId};
use crate::query::query;
use crate::trie::NameTrie;

/// Linked collection of NEOs and close approaches.
#[derive(Debug)]
pub struct NeoDatabase {
    neos: Vec<NearEarthObject>,
    approaches: Vec<CloseApproach>,
    by_designation: HashMap<String, NeoId>,
    by_name: NameTrie,
}

impl NeoDatabase {
    /// Build a database and link approaches to their NEOs.
    ///
    /// Approaches whose designation matches no NEO stay unlinked; filters on
    /// NEO attributes report an error for them.
    #[must_use]
    pub fn new(mut neos: Vec<NearEarthObject>, mut approaches: Vec<CloseApproach>) -> Self {
        let by_designation: HashMap<String, NeoId> = neos
            .iter()
            .enumerate()
            .map(|(i, neo)| (neo.designation.clone(), NeoId(i)))
            .collect();

        for neo in &mut neos {
            neo.approaches.clear();
        }

        let mut unlinked = 0usize;
        for (i, approach) in approaches.iter_mut().enumerate() {
            approach.neo = by_designation.get(&approach.designation).copied();
            match approach.neo {
                Some(id) => neos[id.0].approaches.push(ApproachId(i)),
                None => unlinked += 1,
            }
        }
        if unlinked > 0 {
            tracing::warn!(unlinked, "close approaches without a matching NEO");
        }

        let by_name = neos
            .iter()
            .enumerate()
            .filter_map(|(i, neo)| neo.name.as_deref().map(|name| (name, NeoId(i))))
            .collect();

        tracing::debug!(
            neos = neos.len(),
            approaches = approaches.len(),
            "linked database"
        );

        Self {
            neos,
            approaches,
            by_designation,
            by_name,
        }
    }

    /// All NEOs, in load order.
    #[must_use]
    pub fn neos(&self) -> &[NearEarthObject] {
        &self.neos
    }

    /// All close approaches, in load order.
    #[must_use]
    pub fn approaches(&self) -> &[CloseApproach] {
        &self.approaches
    }

    /// Resolve a NEO handle.
    #[must_use]
    pub fn neo(&self, id: NeoId) -> Option<&NearEarthObject> {
        self.neos.get(id.0)
    }

    /// Resolve an approach handle.
    #[must_use]
    pub fn approach(&self, id: ApproachId) -> Option<&CloseApproach> {
        self.approaches.get(id.0)
    }

    /// The NEO an approach belongs to, if linked.
    #[must_use]
    pub fn neo_of(&self, approach: &CloseApproach) -> Option<&NearEarthObject> {
        approach.neo.and_then(|id| self.neo(id))
    }

    /// The approaches of a NEO, in load order.
    pub fn approaches_of<'a>(
        &'a self,
        neo: &'a NearEarthObject,
    ) -> impl Iterator<Item = &'a CloseApproach> + 'a {
        neo.approaches.iter().filter_map(|&id| self.approach(id))
    }

    /// Find a NEO by its primary designation.
    #[must_use]
    pub fn get_neo_by_designation(&self, designation: &str) -> Option<&NearEarthObject> {
        let found = self
            .by_designation
            .get(designation)
            .and_then(|&id| self.neo(id));
        tracing::debug!(designation, found = found.is_some(), "designation lookup");
        found
    }

    /// Find a NEO by its exact IAU name.
    #[must_use]
    pub fn get_neo_by_name(&self, name: &str) -> Option<&NearEarthObject> {
        let found = self.by_name.get(name).and_then(|id| self.neo(id));
        tracing::debug!(name, found = found.is_some(), "name lookup");
        found
    }

    /// Names of NEOs starting with `prefix`, in lexicographic order.
    #[must_use]
    pub fn names_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.by_name
            .names_with_prefix(prefix)
            .into_iter()
            .map(|(name, _)| name)
            .collect()
    }

    /// Every approach paired with its NEO, in load order.
    pub fn views(&self) -> impl Iterator<Item = ApproachView<'_>> {
        self.approaches
            .iter()
            .map(|approach| ApproachView::new(approach, self.neo_of(approach)))
    }

    /// Lazily yield the approaches matching every filter, in load order.
    ///
    /// Combine with [`crate::limit`] to cap the number of results.
    pub fn query<'a, 'f>(
        &'a self,
        filters: &'f FilterSet,
    ) -> impl Iterator<Item = Result<&'a CloseApproach>> + use<'a, 'f> {
        tracing::debug!(filters = filters.len(), "querying close approaches");
        query(self.views(), filters).map(|view| view.map(|v| v.approach))
    }
}
