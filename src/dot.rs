//! DOT descriptor emission.
//!
//! Each generation becomes two `rank=same` blocks: the persons of the
//! generation with their spouse chains and household junction nodes,
//! then the invisible child-centering slots the next generation hangs
//! from. Every placed node is chained to its predecessor with an
//! invisible ordering edge so the downstream layout engine keeps the
//! left-to-right order instead of applying its own heuristics.

use std::io::Write;

use crate::error::{FamilyError, Result};
use crate::family::{Family, Person};
use crate::generation::GenerationWalker;

/// Style of junction nodes: they route edges without taking visual space.
const INVISIBLE: &str = "[shape=circle,label=\"\",height=0.01,width=0.01]";

/// Writes the layered descriptor for a descending family tree.
pub struct DotEmitter<'f, W: Write> {
    family: &'f Family,
    out: W,
}

impl<'f, W: Write> DotEmitter<'f, W> {
    pub fn new(family: &'f Family, out: W) -> Self {
        Self { family, out }
    }

    /// Emit the whole tree from `ancestor`: header, one node declaration
    /// per registered person, then the per-generation rank blocks.
    pub fn emit_tree(&mut self, ancestor: &Person) -> Result<()> {
        writeln!(self.out, "digraph {{")?;
        writeln!(self.out, "\tnode [shape=box];")?;
        writeln!(self.out, "\tedge [dir=none];")?;
        writeln!(self.out)?;

        for person in self.family.persons() {
            writeln!(
                self.out,
                "\t{}[label=\"{}\",style=filled,fillcolor={}];",
                person.id,
                person.label(),
                person.fill_color()
            )?;
        }
        writeln!(self.out)?;

        let generations = GenerationWalker::new(self.family).walk(ancestor)?;
        for gen in &generations {
            self.emit_generation(gen)?;
        }

        writeln!(self.out, "}}")?;
        Ok(())
    }

    fn emit_generation(&mut self, gen: &[String]) -> Result<()> {
        self.emit_person_rank(gen)?;
        self.emit_slot_rank(gen)?;
        self.emit_fan_edges(gen)
    }

    /// First rank: the persons, their spouses and household junctions.
    fn emit_person_rank(&mut self, gen: &[String]) -> Result<()> {
        writeln!(self.out, "\t{{ rank=same;")?;

        let mut prev: Option<String> = None;
        for id in gen {
            let person = self.person(id)?;
            let count = person.households.len();

            // Chain to the predecessor: for a person with two unions the
            // leftmost placed node is the first household's spouse.
            if let Some(prev_id) = &prev {
                let anchor = if count <= 1 {
                    person.id.as_str()
                } else {
                    self.family
                        .household(person.households[0])
                        .spouse_of(&person.id)
                };
                writeln!(self.out, "\t\t{prev_id} -> {anchor} [style=invis];")?;
            }

            if count == 0 {
                prev = Some(person.id.clone());
                continue;
            }
            if count > 2 {
                return Err(FamilyError::UnsupportedSpouseCount {
                    name: person.name.clone(),
                    count,
                });
            }

            // Unions on the left: spouse, junction, then the person.
            for &hid in &person.households[..count / 2] {
                let household = self.family.household(hid);
                let spouse = household.spouse_of(&person.id);
                writeln!(self.out, "\t\t{} -> h{} -> {};", spouse, household.id, person.id)?;
                writeln!(self.out, "\t\th{}{INVISIBLE};", household.id)?;
            }

            // Unions on the right (at least one): the person first.
            for &hid in &person.households[count / 2..] {
                let household = self.family.household(hid);
                let spouse = household.spouse_of(&person.id);
                writeln!(self.out, "\t\t{} -> h{} -> {};", person.id, household.id, spouse)?;
                writeln!(self.out, "\t\th{}{INVISIBLE};", household.id)?;
                prev = Some(spouse.to_string());
            }
        }
        writeln!(self.out, "\t}}")?;
        Ok(())
    }

    /// Second rank: one invisible slot per kid, plus a padding slot on
    /// even counts so the downward edge can land dead center.
    fn emit_slot_rank(&mut self, gen: &[String]) -> Result<()> {
        writeln!(self.out, "\t{{ rank=same;")?;

        let mut prev: Option<String> = None;
        for id in gen {
            let person = self.person(id)?;
            for &hid in &person.households {
                let household = self.family.household(hid);
                if household.kids.is_empty() {
                    continue;
                }
                if let Some(prev_id) = &prev {
                    writeln!(self.out, "\t\t{prev_id} -> h{}_0 [style=invis];", household.id)?;
                }

                let slots = slot_count(household.kids.len());
                let chain = (0..slots)
                    .map(|slot| format!("h{}_{}", household.id, slot))
                    .collect::<Vec<_>>()
                    .join(" -> ");
                writeln!(self.out, "\t\t{chain};")?;
                for slot in 0..slots {
                    writeln!(self.out, "\t\th{}_{}{INVISIBLE};", household.id, slot)?;
                }
                prev = Some(format!("h{}_{}", household.id, slots - 1));
            }
        }
        writeln!(self.out, "\t}}")?;
        Ok(())
    }

    /// Downward edges: household junction to the center slot, then each
    /// kid from its slot in original order, skipping the reserved center
    /// slot when a padding slot was added.
    fn emit_fan_edges(&mut self, gen: &[String]) -> Result<()> {
        for id in gen {
            let person = self.person(id)?;
            for &hid in &person.households {
                let household = self.family.household(hid);
                let kids = household.kids.len();
                if kids == 0 {
                    continue;
                }
                writeln!(self.out, "\t\th{} -> h{}_{};", household.id, household.id, kids / 2)?;

                let mut slot = 0;
                for kid in &household.kids {
                    writeln!(self.out, "\t\th{}_{} -> {};", household.id, slot, kid)?;
                    slot += 1;
                    if kids % 2 == 0 && slot == kids / 2 {
                        slot += 1;
                    }
                }
            }
        }
        Ok(())
    }

    fn person(&self, id: &str) -> Result<&'f Person> {
        self.family
            .person(id)
            .ok_or_else(|| FamilyError::PersonNotFound { name: id.to_string() })
    }
}

/// Kids plus one padding slot when the count is even, so the fan keeps a
/// true center slot at `kids / 2`.
fn slot_count(kids: usize) -> usize {
    if kids % 2 == 0 {
        kids + 1
    } else {
        kids
    }
}
