//! Attribute predicates
//!
//! Boolean combinators over attribute names, used to decide which fields of
//! a payload participate in state serialization.

use std::collections::HashSet;
use std::sync::Arc;

use crate::schema::Schema;

/// Predicate over a state attribute name
#[derive(Clone)]
pub struct AttributePredicate(Arc<dyn Fn(&str) -> bool + Send + Sync>);

impl AttributePredicate {
    pub fn new(predicate: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        Self(Arc::new(predicate))
    }

    pub fn test(&self, attribute: &str) -> bool {
        (self.0)(attribute)
    }

    pub fn always() -> Self {
        Self::new(|_| true)
    }

    /// True only when every predicate passes
    pub fn all(predicates: Vec<AttributePredicate>) -> Self {
        Self::new(move |attribute| predicates.iter().all(|p| p.test(attribute)))
    }

    /// True when at least one predicate passes
    pub fn any(predicates: Vec<AttributePredicate>) -> Self {
        Self::new(move |attribute| predicates.iter().any(|p| p.test(attribute)))
    }

    pub fn ignore(names: &[&str]) -> Self {
        let excluded: HashSet<String> = names.iter().map(|n| n.to_string()).collect();
        Self::new(move |attribute| !excluded.contains(attribute))
    }

    pub fn no_class() -> Self {
        Self::ignore(&["class", "rclass"])
    }

    pub fn no_password() -> Self {
        Self::ignore(&["class", "rclass", "password"])
    }

    /// Pass only attributes the schema declares
    pub fn schema_has_key(schema: &Schema) -> Self {
        let keys: HashSet<String> = schema.keys().map(str::to_string).collect();
        Self::new(move |attribute| keys.contains(attribute))
    }
}
