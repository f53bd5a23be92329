//! Ingestion: a single pass over the input text populating the registry.
//!
//! The builder is an accumulator with a finalize rule: parent lines and
//! tab-marked child lines collect into the current household, a blank
//! line (or end of input) finalizes it. Lines starting with `#` are
//! comments. Rejected households are reported and skipped; the rest of
//! the input is still consumed.

use std::io::BufRead;

use tracing::{info, warn};

use crate::error::Result;
use crate::family::registry::Family;
use crate::record::RecordParser;

/// The household currently being collected.
#[derive(Debug, Default)]
struct PendingHousehold {
    parents: Vec<String>,
    kids: Vec<String>,
}

impl PendingHousehold {
    fn is_empty(&self) -> bool {
        self.parents.is_empty() && self.kids.is_empty()
    }
}

/// Counters summarizing one ingestion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// Distinct persons registered.
    pub persons: usize,
    /// Households accepted into the registry.
    pub households: usize,
    /// Households rejected for a wrong parent count.
    pub rejected: usize,
}

/// Read the whole input and populate `family`.
///
/// An empty person record aborts with the offending line number; every
/// other structural problem is per-household and recoverable.
pub fn populate<R: BufRead>(
    family: &mut Family,
    reader: R,
    parser: &mut RecordParser,
) -> Result<IngestReport> {
    let mut pending = PendingHousehold::default();
    let mut report = IngestReport::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end();
        let line_no = idx + 1;

        if line.is_empty() {
            finalize(family, &mut pending, &mut report);
        } else if line.starts_with('#') {
            continue;
        } else if let Some(record) = line.strip_prefix('\t') {
            let person = parser.parse(record, line_no)?;
            let id = family.add_person(person);
            pending.kids.push(id);
        } else {
            let person = parser.parse(line, line_no)?;
            let id = family.add_person(person);
            pending.parents.push(id);
        }
    }
    finalize(family, &mut pending, &mut report);

    report.persons = family.len();
    info!(
        persons = report.persons,
        households = report.households,
        rejected = report.rejected,
        "family registry populated"
    );
    Ok(report)
}

fn finalize(family: &mut Family, pending: &mut PendingHousehold, report: &mut IngestReport) {
    if pending.is_empty() {
        return;
    }
    let done = std::mem::take(pending);
    match family.add_household(done.parents, done.kids) {
        Ok(_) => report.households += 1,
        Err(err) => {
            warn!("skipping household: {err}");
            report.rejected += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingest(text: &str) -> (Family, IngestReport) {
        let mut family = Family::new();
        let mut parser = RecordParser::with_seed(7).expect("parser");
        let report = populate(&mut family, text.as_bytes(), &mut parser).expect("populate");
        (family, report)
    }

    #[test]
    fn test_single_household_finalized_at_eof() {
        let (family, report) = ingest("Adam\nEve\n\tCain\n\tAbel");

        assert_eq!(report, IngestReport { persons: 4, households: 1, rejected: 0 });
        let household = family.household(0);
        assert_eq!(household.parents, vec!["Adam", "Eve"]);
        assert_eq!(household.kids, vec!["Cain", "Abel"]);
        assert_eq!(family.person("Cain").unwrap().parents, Some(0));
    }

    #[test]
    fn test_consecutive_blank_lines_are_idempotent() {
        let (family, report) = ingest("Adam\nEve\n\tCain\n\n\n\n\nSeth\nAzura\n");

        assert_eq!(report, IngestReport { persons: 5, households: 2, rejected: 0 });
        assert_eq!(family.household(1).parents, vec!["Seth", "Azura"]);
    }

    #[test]
    fn test_comment_lines_ignored() {
        let (family, report) = ingest("# a family\nAdam\n# mid-block comment\nEve\n\tCain\n");

        assert_eq!(report.households, 1);
        assert_eq!(family.household(0).parents, vec!["Adam", "Eve"]);
    }

    #[test]
    fn test_single_parent_blocks_rejected() {
        // Two blocks both claiming sole-parent custody of C: neither has
        // two parents, so both are discarded and C belongs nowhere.
        let (family, report) = ingest("A\n\tC\n\nB\n\tC\n");

        assert_eq!(report.rejected, 2);
        assert_eq!(report.households, 0);
        assert!(family.households().is_empty());
        let c = family.person("C").unwrap();
        assert_eq!(c.parents, None);
        assert!(c.households.is_empty());
        assert_eq!(family.find_first_ancestor().unwrap().id, "A");
    }

    #[test]
    fn test_forward_reference_merges_attributes() {
        let text = "Adam (M)\nEve\n\tSeth\n\nSeth (M, birthday=130)\nAzura (F)\n\tEnos\n";
        let (family, report) = ingest(text);

        assert_eq!(report.households, 2);
        let seth = family.person("Seth").unwrap();
        assert_eq!(seth.parents, Some(0));
        assert_eq!(seth.households, vec![1]);
        assert!(seth.attrs.contains_key("M"));
        assert!(seth.attrs.contains_key("birthday"));
    }

    #[test]
    fn test_lone_tab_line_acts_as_blank() {
        // Trailing-whitespace stripping reduces a bare tab to a blank
        // line, so it finalizes the pending household.
        let (family, report) = ingest("Adam\nEve\n\t\nSeth\nAzura\n");

        assert_eq!(report.households, 2);
        assert!(family.household(0).kids.is_empty());
        assert_eq!(family.household(1).parents, vec!["Seth", "Azura"]);
    }
}
