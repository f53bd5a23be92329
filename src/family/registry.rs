//! The family registry: every person and every accepted household.

use std::collections::HashMap;

use crate::error::{FamilyError, Result};
use crate::family::types::{Household, HouseholdId, Person};

/// Owns the deduplicated set of persons and the list of households.
///
/// Built once by the ingestion pass, then read-only for generation
/// walking and emission. Person iteration follows insertion order so the
/// emitted descriptor is reproducible across runs on identical input.
#[derive(Debug, Default)]
pub struct Family {
    everybody: HashMap<String, Person>,
    order: Vec<String>,
    households: Vec<Household>,
}

impl Family {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a person, or merge the attribute bag into the existing
    /// person with the same id — the last value for a key wins, which is
    /// what lets later lines correct or extend earlier ones. Returns the
    /// registered id.
    pub fn add_person(&mut self, person: Person) -> String {
        let id = person.id.clone();
        match self.everybody.get_mut(&id) {
            Some(existing) => existing.attrs.extend(person.attrs),
            None => {
                self.order.push(id.clone());
                self.everybody.insert(id.clone(), person);
            }
        }
        id
    }

    /// Register a finalized household.
    ///
    /// Rejects any parent count other than two. On success the household
    /// gets the next sequential id, each parent's household list gains it
    /// (guarded against duplicates, e.g. the same person listed twice as
    /// parent), and each kid's back-reference is set.
    pub fn add_household(&mut self, parents: Vec<String>, kids: Vec<String>) -> Result<HouseholdId> {
        if parents.len() != 2 {
            return Err(FamilyError::MalformedHousehold {
                found: parents.len(),
                parents,
            });
        }

        let id = self.households.len();
        for parent in &parents {
            if let Some(person) = self.everybody.get_mut(parent) {
                if !person.households.contains(&id) {
                    person.households.push(id);
                }
            }
        }
        for kid in &kids {
            if let Some(person) = self.everybody.get_mut(kid) {
                person.parents = Some(id);
            }
        }
        self.households.push(Household { id, parents, kids });
        Ok(id)
    }

    /// Look up by id first, then by display name.
    pub fn find_person(&self, name: &str) -> Option<&Person> {
        if let Some(person) = self.everybody.get(name) {
            return Some(person);
        }
        self.persons().find(|p| p.name == name)
    }

    /// First person, in insertion order, with no recorded parent
    /// household.
    pub fn find_first_ancestor(&self) -> Option<&Person> {
        self.persons().find(|p| p.parents.is_none())
    }

    pub fn person(&self, id: &str) -> Option<&Person> {
        self.everybody.get(id)
    }

    /// Persons in insertion order.
    pub fn persons(&self) -> impl Iterator<Item = &Person> {
        self.order.iter().map(|id| &self.everybody[id])
    }

    pub fn household(&self, id: HouseholdId) -> &Household {
        &self.households[id]
    }

    pub fn households(&self) -> &[Household] {
        &self.households
    }

    /// Number of registered persons.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Mutable access to one person, for callers adjusting traversal
    /// flags such as [`Person::follow_kids`].
    pub fn person_mut(&mut self, id: &str) -> Option<&mut Person> {
        self.everybody.get_mut(id)
    }
}
