//! Core data types for the family graph.
//!
//! Persons and households reference each other by id, never by shared
//! ownership: person ids key the registry map, household ids index the
//! registry's household list.

use std::collections::HashMap;

/// Index of a household in the registry's insertion-ordered list. Also
/// names the layout junction nodes (`h3`, `h3_0`, ...).
pub type HouseholdId = usize;

/// One attribute of a person record: a bare flag or a `key=value` text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    Flag,
    Text(String),
}

impl AttrValue {
    /// Text content, `None` for bare flags.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s.as_str()),
            AttrValue::Flag => None,
        }
    }
}

/// A person in the family graph.
#[derive(Debug, Clone)]
pub struct Person {
    /// Unique registry key, derived from the name or an explicit `id=`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Open attribute bag. Keys consumed downstream: `surname`,
    /// `birthday`, `deathday`, `notes`, `F`, `M`.
    pub attrs: HashMap<String, AttrValue>,
    /// Household this person was born into, assigned when that household
    /// is successfully finalized. `None` marks an ancestor.
    pub parents: Option<HouseholdId>,
    /// Households where this person is a parent, in order of appearance.
    /// The order decides left/right spouse placement.
    pub households: Vec<HouseholdId>,
    /// When false the walker does not expand this person's descendants.
    pub follow_kids: bool,
}

impl Person {
    pub fn new(id: String, name: String, attrs: HashMap<String, AttrValue>) -> Self {
        Self {
            id,
            name,
            attrs,
            parents: None,
            households: Vec::new(),
            follow_kids: true,
        }
    }

    fn attr_text(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).and_then(AttrValue::as_text)
    }

    /// Multi-line node label: name, surname, life dates, notes. The
    /// `\n` separators are literal DOT escapes.
    pub fn label(&self) -> String {
        let mut label = self.name.clone();
        if let Some(surname) = self.attr_text("surname") {
            label.push_str(&format!("\\n« {surname}»"));
        }
        match (self.attr_text("birthday"), self.attr_text("deathday")) {
            (Some(birth), Some(death)) => label.push_str(&format!("\\n{birth} † {death}")),
            (Some(birth), None) => label.push_str(&format!("\\n{birth}")),
            (None, Some(death)) => label.push_str(&format!("\\n† {death}")),
            (None, None) => {}
        }
        if let Some(notes) = self.attr_text("notes") {
            label.push_str(&format!("\\n{notes}"));
        }
        label
    }

    /// Fill hint from the `F`/`M` gender flags.
    pub fn fill_color(&self) -> &'static str {
        if self.attrs.contains_key("F") {
            "bisque"
        } else if self.attrs.contains_key("M") {
            "azure2"
        } else {
            "white"
        }
    }
}

/// A union of exactly two parents with zero or more children.
#[derive(Debug, Clone, Default)]
pub struct Household {
    /// Insertion index in the registry.
    pub id: HouseholdId,
    /// Exactly two person ids once registered, order-significant.
    pub parents: Vec<String>,
    /// Children in order of appearance.
    pub kids: Vec<String>,
}

impl Household {
    /// The other parent of the union. Registered households always hold
    /// exactly two parents.
    pub fn spouse_of(&self, person: &str) -> &str {
        if self.parents[0] == person {
            &self.parents[1]
        } else {
            &self.parents[0]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_person(desc: &[(&str, Option<&str>)]) -> Person {
        let attrs = desc
            .iter()
            .map(|(k, v)| {
                let value = match v {
                    Some(text) => AttrValue::Text(text.to_string()),
                    None => AttrValue::Flag,
                };
                (k.to_string(), value)
            })
            .collect();
        Person::new("p".to_string(), "Jeanne".to_string(), attrs)
    }

    #[test]
    fn test_label_name_only() {
        assert_eq!(make_person(&[]).label(), "Jeanne");
    }

    #[test]
    fn test_label_full() {
        let person = make_person(&[
            ("surname", Some("Dupont")),
            ("birthday", Some("1901")),
            ("deathday", Some("1999")),
            ("notes", Some("centenarian")),
        ]);
        assert_eq!(
            person.label(),
            "Jeanne\\n« Dupont»\\n1901 † 1999\\ncentenarian"
        );
    }

    #[test]
    fn test_label_deathday_without_birthday() {
        let person = make_person(&[("deathday", Some("1999"))]);
        assert_eq!(person.label(), "Jeanne\\n† 1999");
    }

    #[test]
    fn test_fill_color() {
        assert_eq!(make_person(&[("F", None)]).fill_color(), "bisque");
        assert_eq!(make_person(&[("M", None)]).fill_color(), "azure2");
        assert_eq!(make_person(&[]).fill_color(), "white");
    }

    #[test]
    fn test_spouse_of() {
        let household = Household {
            id: 0,
            parents: vec!["a".to_string(), "b".to_string()],
            kids: Vec::new(),
        };
        assert_eq!(household.spouse_of("a"), "b");
        assert_eq!(household.spouse_of("b"), "a");
    }
}
