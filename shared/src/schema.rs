//! Schema model for resources and providers
//!
//! Attributes carry the type, the required/optional/computed/sensitive
//! flags, and the validators run during plan. Build schemas through the
//! fluent builders.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::types::Dynamic;
use crate::validator::Validator;

/// The configuration language's type system
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeType {
    String,
    Number, // Always f64
    Bool,
    List(Box<AttributeType>),
    Set(Box<AttributeType>),
    Map(Box<AttributeType>),
    Object(HashMap<String, AttributeType>),
}

impl AttributeType {
    /// Whether a value is acceptable for this type. Null and unknown are
    /// acceptable for every type.
    pub fn matches(&self, value: &Dynamic) -> bool {
        match (self, value) {
            (_, Dynamic::Null | Dynamic::Unknown) => true,
            (AttributeType::String, Dynamic::String(_)) => true,
            (AttributeType::Number, Dynamic::Number(_)) => true,
            (AttributeType::Bool, Dynamic::Bool(_)) => true,
            (AttributeType::List(element) | AttributeType::Set(element), Dynamic::List(items)) => {
                items.iter().all(|item| element.matches(item))
            }
            (AttributeType::Map(element), Dynamic::Map(entries)) => {
                entries.values().all(|item| element.matches(item))
            }
            (AttributeType::Object(fields), Dynamic::Map(entries)) => entries
                .iter()
                .all(|(key, item)| fields.get(key).is_some_and(|t| t.matches(item))),
            // Nested blocks are stored as single-element lists
            (AttributeType::Object(_), Dynamic::List(items)) if items.len() == 1 => {
                self.matches(&items[0])
            }
            _ => false,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AttributeType::String => "string",
            AttributeType::Number => "number",
            AttributeType::Bool => "bool",
            AttributeType::List(_) => "list",
            AttributeType::Set(_) => "set",
            AttributeType::Map(_) => "map",
            AttributeType::Object(_) => "object",
        }
    }
}

/// A single configuration attribute
#[derive(Clone)]
pub struct Attribute {
    pub name: String,
    pub attr_type: AttributeType,
    pub description: String,
    pub required: bool,
    pub optional: bool,
    pub computed: bool,
    pub sensitive: bool,
    pub validators: Vec<Arc<dyn Validator>>,
}

impl fmt::Debug for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attribute")
            .field("name", &self.name)
            .field("type", &self.attr_type)
            .field("description", &self.description)
            .field("required", &self.required)
            .field("optional", &self.optional)
            .field("computed", &self.computed)
            .field("sensitive", &self.sensitive)
            .field("validators", &format!("{} validators", self.validators.len()))
            .finish()
    }
}

/// Schema of a resource, data source, or provider block
#[derive(Debug, Clone, Default)]
pub struct Schema {
    pub version: i64,
    pub attributes: Vec<Attribute>,
}

impl Schema {
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn has_key(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(|a| a.name.as_str())
    }

    /// Merge another schema into this one; attributes from `other` replace
    /// same-named attributes here.
    pub fn merge(mut self, other: Schema) -> Schema {
        for attribute in other.attributes {
            self.attributes.retain(|a| a.name != attribute.name);
            self.attributes.push(attribute);
        }
        self
    }
}

/// Merge any number of schemas, later entries winning on name clashes.
pub fn merge_schemas(schemas: Vec<Schema>) -> Schema {
    schemas
        .into_iter()
        .fold(Schema::default(), |merged, next| merged.merge(next))
}

/// Fluent builder for attributes
pub struct AttributeBuilder {
    attribute: Attribute,
}

impl AttributeBuilder {
    pub fn new(name: &str, attr_type: AttributeType) -> Self {
        Self {
            attribute: Attribute {
                name: name.to_string(),
                attr_type,
                description: String::new(),
                required: false,
                optional: false,
                computed: false,
                sensitive: false,
                validators: Vec::new(),
            },
        }
    }

    pub fn description(mut self, desc: &str) -> Self {
        self.attribute.description = desc.to_string();
        self
    }

    pub fn required(mut self) -> Self {
        self.attribute.required = true;
        self.attribute.optional = false;
        self
    }

    pub fn optional(mut self) -> Self {
        self.attribute.optional = true;
        self.attribute.required = false;
        self
    }

    pub fn computed(mut self) -> Self {
        self.attribute.computed = true;
        self
    }

    pub fn sensitive(mut self) -> Self {
        self.attribute.sensitive = true;
        self
    }

    pub fn validator(mut self, validator: Arc<dyn Validator>) -> Self {
        self.attribute.validators.push(validator);
        self
    }

    pub fn build(self) -> Attribute {
        self.attribute
    }
}

/// Fluent builder for schemas
pub struct SchemaBuilder {
    schema: Schema,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self {
            schema: Schema::default(),
        }
    }

    pub fn version(mut self, version: i64) -> Self {
        self.schema.version = version;
        self
    }

    pub fn attribute(mut self, attribute: Attribute) -> Self {
        self.schema.attributes.push(attribute);
        self
    }

    pub fn build(self) -> Schema {
        self.schema
    }
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_builder_creates_required_string() {
        let attr = AttributeBuilder::new("key", AttributeType::String)
            .description("The repository identifier")
            .required()
            .build();

        assert_eq!(attr.name, "key");
        assert!(matches!(attr.attr_type, AttributeType::String));
        assert!(attr.required);
        assert!(!attr.optional);
    }

    #[test]
    fn schema_lookup_by_name() {
        let schema = SchemaBuilder::new()
            .version(1)
            .attribute(AttributeBuilder::new("key", AttributeType::String).required().build())
            .attribute(
                AttributeBuilder::new("description", AttributeType::String)
                    .optional()
                    .build(),
            )
            .build();

        assert!(schema.has_key("key"));
        assert!(!schema.has_key("password"));
        assert_eq!(schema.keys().count(), 2);
    }

    #[test]
    fn type_matching_accepts_null_and_unknown() {
        assert!(AttributeType::String.matches(&Dynamic::Null));
        assert!(AttributeType::Number.matches(&Dynamic::Unknown));
        assert!(!AttributeType::Number.matches(&Dynamic::from("seven")));
    }

    #[test]
    fn list_type_checks_elements() {
        let list = AttributeType::List(Box::new(AttributeType::String));
        assert!(list.matches(&Dynamic::List(vec![Dynamic::from("a"), Dynamic::from("b")])));
        assert!(!list.matches(&Dynamic::List(vec![Dynamic::from("a"), Dynamic::from(1i64)])));
    }

    #[test]
    fn object_type_accepts_single_element_block_list() {
        let object = AttributeType::Object(HashMap::from([
            ("enabled".to_string(), AttributeType::Bool),
            ("statistics_enabled".to_string(), AttributeType::Bool),
        ]));

        let block = Dynamic::List(vec![Dynamic::Map(HashMap::from([
            ("enabled".to_string(), Dynamic::from(true)),
        ]))]);

        assert!(object.matches(&block));
    }

    #[test]
    fn merge_schemas_later_wins() {
        let base = SchemaBuilder::new()
            .attribute(AttributeBuilder::new("key", AttributeType::String).required().build())
            .attribute(
                AttributeBuilder::new("priority", AttributeType::Number)
                    .optional()
                    .build(),
            )
            .build();
        let overlay = SchemaBuilder::new()
            .attribute(
                AttributeBuilder::new("priority", AttributeType::Number)
                    .computed()
                    .build(),
            )
            .build();

        let merged = merge_schemas(vec![base, overlay]);
        assert_eq!(merged.attributes.len(), 2);
        assert!(merged.attribute("priority").unwrap().computed);
    }
}
