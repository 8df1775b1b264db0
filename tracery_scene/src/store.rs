// Copyright 2025 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::Rect;

use crate::Entity;

/// Ordered entity collection with a replacement version counter.
///
/// Order is z-order: later entities paint on top of earlier ones and win
/// picking ties. The collection is replaced wholesale rather than edited;
/// each replacement bumps [`version`](EntityStore::version), invalidating
/// any indices computed against the previous contents. Per-entity display
/// colors may change in place without affecting the version.
#[derive(Clone, Debug, Default)]
pub struct EntityStore {
    entities: Vec<Entity>,
    version: u64,
}

impl EntityStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole collection, bumping the version.
    pub fn set_entities(&mut self, entities: Vec<Entity>) {
        self.entities = entities;
        self.version = self.version.wrapping_add(1);
    }

    /// Removes all entities, bumping the version.
    pub fn clear(&mut self) {
        self.set_entities(Vec::new());
    }

    /// Returns the entities in z-order.
    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Returns the entities in z-order, mutably.
    ///
    /// Geometry and identity are immutable per entity, so this only exposes
    /// color changes and pick-outline recomputation.
    pub fn entities_mut(&mut self) -> &mut [Entity] {
        &mut self.entities
    }

    /// Returns the entity at `index`, or `None` when out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Entity> {
        self.entities.get(index)
    }

    /// Returns the entity at `index` mutably, or `None` when out of range.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Entity> {
        self.entities.get_mut(index)
    }

    /// Returns the number of entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns whether the store holds no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Returns the collection version, bumped on every replacement.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Returns the union of all cached entity bounds, or `None` when empty.
    #[must_use]
    pub fn union_bounds(&self) -> Option<Rect> {
        let mut iter = self.entities.iter();
        let first = iter.next()?.bounds();
        Some(iter.fold(first, |acc, entity| acc.union(entity.bounds())))
    }
}
