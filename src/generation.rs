//! Breadth-first traversal of the family graph by generation.

use crate::error::{FamilyError, Result};
use crate::family::{Family, Person};

/// One generation: person ids at the same depth below the root ancestor.
pub type Generation = Vec<String>;

/// Walks households breadth-first from a starting person.
///
/// Households act as hyperedges linking two parents to their children:
/// generation k+1 is every kid of every household of generation k, in
/// (person order, household order, kid order). All three orders are fixed
/// at ingestion time, so two walks over the same registry are identical.
pub struct GenerationWalker<'f> {
    family: &'f Family,
}

impl<'f> GenerationWalker<'f> {
    pub fn new(family: &'f Family) -> Self {
        Self { family }
    }

    /// All generations from `start` until one comes up empty.
    ///
    /// An acyclic graph can never be deeper than the number of persons
    /// registered; a walk exceeding that bound means a parent/child cycle
    /// and aborts instead of growing forever.
    pub fn walk(&self, start: &Person) -> Result<Vec<Generation>> {
        let mut generations: Vec<Generation> = Vec::new();
        let mut gen: Generation = vec![start.id.clone()];

        while !gen.is_empty() {
            if generations.len() >= self.family.len() {
                return Err(FamilyError::CyclicFamily {
                    persons: self.family.len(),
                });
            }
            let next = self.next_generation(&gen);
            generations.push(gen);
            gen = next;
        }
        Ok(generations)
    }

    /// The children of every household of `gen`, in order.
    fn next_generation(&self, gen: &[String]) -> Generation {
        let mut next = Vec::new();
        for id in gen {
            let person = match self.family.person(id) {
                Some(person) => person,
                None => continue,
            };
            if !person.follow_kids {
                continue;
            }
            for &household in &person.households {
                next.extend(self.family.household(household).kids.iter().cloned());
            }
        }
        next
    }
}
