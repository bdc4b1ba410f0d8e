/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

pub const PROPERTY_NAME: &str = "name";

/// Value of one entity property, in the form returned by the inventory API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PropertyValue {
    /// Integer like value which is not parsed yet.
    Integer(String),
    /// Plain text, also used for references to other entities.
    Text(String),
    /// An xml encoded list of sub records.
    Document { type_name: String, xml: String },
}

impl PropertyValue {
    /// Classify a raw value by the type discriminator sent along with it.
    pub fn from_wire(type_tag: &str, inner: String) -> Self {
        match type_tag {
            "xsd:long" | "xsd:int" | "xsd:short" | "xsd:byte" => PropertyValue::Integer(inner),
            t if t.starts_with("xsd:") => PropertyValue::Text(inner),
            t if t.starts_with("ArrayOf") || inner.trim_start().starts_with('<') => {
                PropertyValue::Document {
                    type_name: t.to_string(),
                    xml: inner,
                }
            }
            // managed object references carry the plain entity id
            _ => PropertyValue::Text(inner),
        }
    }

    pub fn raw(&self) -> &str {
        match self {
            PropertyValue::Integer(s) => s,
            PropertyValue::Text(s) => s,
            PropertyValue::Document { xml, .. } => xml,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub value: PropertyValue,
}

/// One inventory object with its properties, in the order sent by the API.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntityRecord {
    pub id: String,
    pub props: Vec<Property>,
}

impl EntityRecord {
    pub fn new(id: impl Into<String>) -> Self {
        EntityRecord {
            id: id.into(),
            props: Vec::new(),
        }
    }

    pub fn with_property(mut self, name: impl Into<String>, value: PropertyValue) -> Self {
        self.props.push(Property {
            name: name.into(),
            value,
        });
        self
    }

    pub fn with_integer(self, name: impl Into<String>, value: impl ToString) -> Self {
        self.with_property(name, PropertyValue::Integer(value.to_string()))
    }

    pub fn with_text(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.with_property(name, PropertyValue::Text(value.into()))
    }

    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.props.iter().find(|p| p.name == name).map(|p| &p.value)
    }
}
