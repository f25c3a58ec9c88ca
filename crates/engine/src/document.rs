//! Schema-driven document building and decoding
//!
//! Turns a domain object into an index [`Document`] by walking the
//! declared schema: each field's value is read from the object, coerced
//! to its storage primitive, and (for text fields with a strategy)
//! expanded into tokens. The document id is always `str(pk)`.
//! [`decode_document`] walks the same schema in the other direction,
//! inverting each field's storage encoding.

use crate::schema::{DocumentSchema, FieldKind, FieldSpec, TokenStrategy, ValueShape};
use bridgewalk_core::{Document, Error, FieldValue, Indexable, Result};
use bridgewalk_index::indexers;
use std::collections::{BTreeMap, BTreeSet};

/// Build an index document from a domain object
///
/// Fields the object does not expose are skipped. `None`-valued fields
/// are stored as [`FieldValue::Null`]. When the schema names a rank
/// field, its non-negative integer value becomes the document's
/// explicit rank.
pub fn build_document<T: Indexable>(obj: &T, schema: &DocumentSchema) -> Result<Document> {
    let mut doc = Document::new(obj.identifier());
    for (name, spec) in schema.fields() {
        if let Some(value) = obj.field_value(name) {
            doc.set_field(name, encode_field(&value, spec)?);
        }
    }
    if let Some(rank_field) = schema.rank_field() {
        if let Some(value) = obj.field_value(rank_field) {
            doc.rank = Some(rank_from(&value)?);
        }
    }
    Ok(doc)
}

/// Decode a document's stored fields back into domain-side values
///
/// The inverse of [`build_document`] for fields that keep their value:
/// `|`-joined lists split, JSON payloads parse, scalars pass through.
/// Token-expanded fields are one-way and are left out of the result.
pub fn decode_document(
    doc: &Document,
    schema: &DocumentSchema,
) -> Result<BTreeMap<String, FieldValue>> {
    let mut fields = BTreeMap::new();
    for (name, spec) in schema.fields() {
        if spec.strategy.is_some() {
            continue;
        }
        if let Some(stored) = doc.field(name) {
            fields.insert(name.to_string(), decode_field(stored, spec)?);
        }
    }
    Ok(fields)
}

/// Encode one field value per its declaration
fn encode_field(value: &FieldValue, spec: &FieldSpec) -> Result<FieldValue> {
    if matches!(value, FieldValue::Null) {
        return Ok(FieldValue::Null);
    }

    let encoded = match spec.kind {
        FieldKind::Text => {
            let text = string_form(value)?;
            match spec.strategy {
                Some(strategy) => FieldValue::Text(expand_tokens(&text, spec, strategy)),
                None => FieldValue::Text(text),
            }
        }
        FieldKind::Atom => FieldValue::Atom(string_form(value)?),
        FieldKind::Date => FieldValue::Date(string_form(value)?),
        FieldKind::Int | FieldKind::Float | FieldKind::Bool => match value {
            FieldValue::Int(_) | FieldValue::Float(_) | FieldValue::Bool(_) => value.clone(),
            other => {
                return Err(Error::Encoding(format!(
                    "cannot store {:?} in a {:?} field",
                    other, spec.kind
                )))
            }
        },
    };
    Ok(encoded)
}

/// Decode one stored value per its declaration
fn decode_field(stored: &FieldValue, spec: &FieldSpec) -> Result<FieldValue> {
    match spec.shape {
        ValueShape::List => {
            let text = decoded_text(stored, spec)?;
            if text.is_empty() {
                Ok(FieldValue::List(Vec::new()))
            } else {
                Ok(FieldValue::List(text.split('|').map(String::from).collect()))
            }
        }
        ValueShape::Json => {
            let text = decoded_text(stored, spec)?;
            if text.is_empty() {
                Ok(FieldValue::Null)
            } else {
                serde_json::from_str(&text)
                    .map(FieldValue::Json)
                    .map_err(|e| Error::Encoding(e.to_string()))
            }
        }
        ValueShape::Scalar => match (spec.kind, stored) {
            (_, FieldValue::Null) => Ok(FieldValue::Null),
            (FieldKind::Text, FieldValue::Text(s)) => Ok(FieldValue::Text(s.clone())),
            (FieldKind::Atom, FieldValue::Atom(s)) => Ok(FieldValue::Atom(s.clone())),
            (FieldKind::Date, FieldValue::Date(s)) => Ok(FieldValue::Date(s.clone())),
            (FieldKind::Int, FieldValue::Int(_))
            | (FieldKind::Float, FieldValue::Float(_))
            | (FieldKind::Bool, FieldValue::Bool(_)) => Ok(stored.clone()),
            (kind, other) => Err(Error::Encoding(format!(
                "stored {:?} does not decode as a {:?} field",
                other, kind
            ))),
        },
    }
}

/// The stored text behind a shaped (list or JSON) field
fn decoded_text<'a>(stored: &'a FieldValue, spec: &FieldSpec) -> Result<&'a str> {
    match stored {
        FieldValue::Text(s) | FieldValue::Atom(s) => Ok(s.as_str()),
        FieldValue::Null => Ok(""),
        other => Err(Error::Encoding(format!(
            "stored {:?} does not decode as a {:?} field",
            other, spec.shape
        ))),
    }
}

/// The document rank contributed by an object field
fn rank_from(value: &FieldValue) -> Result<u64> {
    match value {
        FieldValue::Int(i) if *i >= 0 => Ok(*i as u64),
        other => Err(Error::Encoding(format!(
            "rank field must be a non-negative integer, got {:?}",
            other
        ))),
    }
}

/// The string a value contributes to a string-like field
///
/// Lists join with `|`, JSON payloads serialize; both survive a round
/// trip through the index as plain text.
fn string_form(value: &FieldValue) -> Result<String> {
    match value {
        FieldValue::Text(s) | FieldValue::Atom(s) | FieldValue::Date(s) => Ok(s.clone()),
        FieldValue::Int(i) => Ok(i.to_string()),
        FieldValue::Float(x) => Ok(x.to_string()),
        FieldValue::Bool(b) => Ok(b.to_string()),
        FieldValue::List(items) => Ok(items.join("|")),
        FieldValue::Json(v) => {
            serde_json::to_string(v).map_err(|e| Error::Encoding(e.to_string()))
        }
        FieldValue::Null => Ok(String::new()),
    }
}

fn expand_tokens(text: &str, spec: &FieldSpec, strategy: TokenStrategy) -> String {
    let tokens: BTreeSet<String> = match strategy {
        TokenStrategy::Prefix => indexers::startswith(text, spec.min_size, spec.max_size),
        TokenStrategy::Substring => indexers::contains(text, spec.min_size, spec.max_size),
        TokenStrategy::FirstLetter => {
            let stopwords: Vec<&str> = spec.stopwords.iter().map(String::as_str).collect();
            indexers::firstletter(text, &stopwords)
        }
    };
    tokens.into_iter().collect::<Vec<_>>().join(" ")
}
