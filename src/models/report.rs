use super::field_path::FieldPath;
use super::violation::Violation;
use std::collections::BTreeMap;
use std::fmt;

/// Field-scoped error aggregation: every leaf field carries at most one
/// violation, and all four leaves can report in the same run.
///
/// Backed by a BTreeMap so iteration follows FieldPath order and the
/// rendered output is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: BTreeMap<FieldPath, Violation>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation for a leaf field. The first violation wins; a leaf
    /// never carries more than one message.
    pub fn insert(&mut self, path: FieldPath, violation: Violation) {
        self.errors.entry(path).or_insert(violation);
    }

    pub fn get(&self, path: FieldPath) -> Option<Violation> {
        self.errors.get(&path).copied()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldPath, Violation)> + '_ {
        self.errors.iter().map(|(p, v)| (*p, *v))
    }

    /// Dotted-path → message map, the shape emitted on the JSON boundary.
    pub fn to_message_map(&self) -> BTreeMap<String, String> {
        self.errors
            .iter()
            .map(|(p, v)| (p.as_str().to_string(), v.message().to_string()))
            .collect()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (path, violation) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", path, violation)?;
            first = false;
        }
        Ok(())
    }
}
