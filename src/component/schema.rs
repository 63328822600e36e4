//! Property schemas and property bags

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

use crate::template::Value;

use super::ComponentError;

/// Declared type of a component property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    String,
    Number,
    Boolean,
}

impl PropertyType {
    /// Whether a value may be assigned to a property of this type
    pub fn accepts(self, value: &Value) -> bool {
        matches!(
            (self, value),
            (PropertyType::String, Value::String(_))
                | (PropertyType::Number, Value::Number(_))
                | (PropertyType::Boolean, Value::Bool(_))
        )
    }

    /// Value used when a declaration omits its default
    pub fn zero(self) -> Value {
        match self {
            PropertyType::String => Value::String(String::new()),
            PropertyType::Number => Value::Number(0.0),
            PropertyType::Boolean => Value::Bool(false),
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PropertyType::String => "string",
            PropertyType::Number => "number",
            PropertyType::Boolean => "boolean",
        })
    }
}

/// A declared property: its type and default value
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PropertyDecl {
    #[serde(rename = "type")]
    pub ty: PropertyType,
    #[serde(default)]
    pub default: Option<Value>,
}

impl PropertyDecl {
    pub fn new(ty: PropertyType, default: impl Into<Value>) -> Self {
        Self {
            ty,
            default: Some(default.into()),
        }
    }

    pub fn default_value(&self) -> Value {
        self.default.clone().unwrap_or_else(|| self.ty.zero())
    }
}

/// Mapping from property name to declaration
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(transparent)]
pub struct PropertySchema {
    properties: BTreeMap<String, PropertyDecl>,
}

impl PropertySchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a declaration (builder style)
    pub fn with(mut self, name: impl Into<String>, decl: PropertyDecl) -> Self {
        self.properties.insert(name.into(), decl);
        self
    }

    pub fn get(&self, name: &str) -> Option<&PropertyDecl> {
        self.properties.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Check that every declared default matches its declared type
    pub(crate) fn check_defaults(&self, tag: &str) -> Result<(), ComponentError> {
        for (name, decl) in &self.properties {
            if let Some(default) = &decl.default {
                if !decl.ty.accepts(default) {
                    return Err(ComponentError::invalid_render(
                        tag,
                        format!(
                            "default of property '{}' is a {}, expected {}",
                            name,
                            default.type_name(),
                            decl.ty
                        ),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Resolve supplied values against the schema
    ///
    /// Missing (or null) properties fall back to their defaults and undeclared
    /// ones are dropped. A value of the wrong type is a render error.
    pub fn resolve(&self, tag: &str, supplied: &Properties) -> Result<Properties, ComponentError> {
        for name in supplied.names() {
            if !self.contains(name) {
                tracing::warn!(tag, property = name, "ignoring undeclared property");
            }
        }

        let mut resolved = Properties::new();
        for (name, decl) in &self.properties {
            let value = match supplied.get(name) {
                None | Some(Value::Null) => decl.default_value(),
                Some(value) if decl.ty.accepts(value) => value.clone(),
                Some(value) => {
                    return Err(ComponentError::render(
                        tag,
                        format!(
                            "property '{}' expects {}, got {}",
                            name,
                            decl.ty,
                            value.type_name()
                        ),
                    ))
                }
            };
            resolved.insert(name.clone(), value);
        }
        Ok(resolved)
    }
}

/// A bag of property values passed to a render function
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(transparent)]
pub struct Properties {
    values: BTreeMap<String, Value>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML table of property values
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Add a value (builder style)
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(|s| s.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}
