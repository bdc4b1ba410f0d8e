/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::str::FromStr;

use quick_xml::DeError;
use quick_xml::Reader;
use quick_xml::events::Event;
use serde::de::DeserializeOwned;

use g3_datapoint::clean;

use super::{EntityRecord, PROPERTY_NAME, PropertyValue};
use crate::EntityError;

/// A property value converted to the type family it was declared with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field<'a> {
    Integer(i64),
    Text(&'a str),
    Document { type_name: &'a str, xml: &'a str },
}

/// Get the cleaned display name of the entity.
pub fn entity_name(kind: &'static str, record: &EntityRecord) -> Result<String, EntityError> {
    let name = record
        .get(PROPERTY_NAME)
        .map(|v| clean(v.raw()))
        .unwrap_or_default();
    if name.is_empty() {
        Err(EntityError::EmptyName {
            kind,
            id: record.id.clone(),
        })
    } else {
        Ok(name)
    }
}

/// Iterate over all properties other than the name, converted by type family.
///
/// An integer which can not be parsed yields an error for that property
/// only, and the iteration goes on.
pub fn fields<'a>(
    kind: &'static str,
    record: &'a EntityRecord,
    entity: &'a str,
) -> impl Iterator<Item = Result<(&'a str, Field<'a>), EntityError>> + 'a {
    record
        .props
        .iter()
        .filter(|p| p.name != PROPERTY_NAME)
        .map(move |p| {
            let field = match &p.value {
                PropertyValue::Integer(s) => match i64::from_str(s) {
                    Ok(i) => Field::Integer(i),
                    Err(_) => {
                        return Err(EntityError::BadInteger {
                            kind,
                            entity: entity.to_string(),
                            property: p.name.clone(),
                            value: s.clone(),
                        });
                    }
                },
                PropertyValue::Text(s) => Field::Text(s),
                PropertyValue::Document { type_name, xml } => Field::Document { type_name, xml },
            };
            Ok((p.name.as_str(), field))
        })
}

/// Decode the sequence of sub records in a structured property value.
///
/// Each top level element is decoded as one `T`, whatever its element name.
/// Decoding stops at the end of the input.
pub fn decode_list<T: DeserializeOwned>(xml: &str) -> Result<Vec<T>, DeError> {
    let mut reader = Reader::from_str(xml);
    let mut items = Vec::new();
    loop {
        let start = reader.buffer_position() as usize;
        match reader.read_event()? {
            Event::Start(e) => {
                reader.read_to_end(e.name())?;
                let end = reader.buffer_position() as usize;
                items.push(quick_xml::de::from_str(&xml[start..end])?);
            }
            Event::Empty(_) => {
                let end = reader.buffer_position() as usize;
                items.push(quick_xml::de::from_str(&xml[start..end])?);
            }
            Event::End(e) => {
                return Err(DeError::Custom(format!(
                    "unexpected end tag {}",
                    String::from_utf8_lossy(e.name().as_ref())
                )));
            }
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(items)
}
