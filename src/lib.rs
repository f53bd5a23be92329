//! familytree — family tree graphs from simple text files.
//!
//! Turns a line-oriented genealogical description into a Graphviz DOT
//! descriptor: persons and households are assembled into a registry, a
//! breadth-first walk groups descendants into generations, and the
//! emitter places every generation on its own rank with invisible
//! junction nodes keeping spouses adjacent and children centered under
//! their household. Rendering is left to a downstream layout engine
//! (`dot -Tpng`).
//!
//! # Input format
//!
//! One person per line, `Name` or `Name(attr, key=value, ...)`. Children
//! carry a leading tab and belong to the household opened by the
//! preceding parent lines; a blank line closes the current household;
//! `#` starts a comment. Recognized attribute keys: `id`, `unique`,
//! `surname`, `birthday`, `deathday`, `notes`, `F`, `M`.
//!
//! # Example
//!
//! ```
//! use familytree::{populate, DotEmitter, Family, RecordParser};
//!
//! let text = "Abraham (M)\nMona (F)\n\tHomer (M)\n";
//! let mut family = Family::new();
//! let mut parser = RecordParser::with_seed(0)?;
//! populate(&mut family, text.as_bytes(), &mut parser)?;
//!
//! let ancestor = family.find_first_ancestor().expect("a parent-less person");
//! let mut descriptor = Vec::new();
//! DotEmitter::new(&family, &mut descriptor).emit_tree(ancestor)?;
//! assert!(String::from_utf8(descriptor).unwrap().starts_with("digraph {"));
//! # Ok::<(), familytree::FamilyError>(())
//! ```

pub mod dot;
pub mod error;
pub mod family;
pub mod generation;
pub mod record;

pub use dot::DotEmitter;
pub use error::{FamilyError, Result};
pub use family::{populate, AttrValue, Family, Household, HouseholdId, IngestReport, Person};
pub use generation::{Generation, GenerationWalker};
pub use record::RecordParser;
