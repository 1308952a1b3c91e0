use std::fmt;

use serde::de::{Deserializer, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;

use crate::error::{EmailError, EmailResult};

/// A single HTML attribute value.
///
/// Scalars cover the usual `target="_blank"` / `border="0"` cases;
/// `List` holds class tokens or style declarations before they are
/// flattened into the final attribute string.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Bool(bool),
    Int(i64),
    Text(String),
    List(Vec<String>),
}

impl AttrValue {
    /// True for the values the merge treats as "caller left this blank":
    /// an empty string or an empty list. Booleans and numbers are never
    /// blank — `false` in particular means "explicitly suppressed".
    fn is_blank(&self) -> bool {
        match self {
            AttrValue::Text(s) => s.is_empty(),
            AttrValue::List(items) => items.is_empty(),
            AttrValue::Bool(_) | AttrValue::Int(_) => false,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Text(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Text(s)
    }
}

impl From<i64> for AttrValue {
    fn from(n: i64) -> Self {
        AttrValue::Int(n)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Bool(b)
    }
}

impl From<Vec<String>> for AttrValue {
    fn from(items: Vec<String>) -> Self {
        AttrValue::List(items)
    }
}

impl From<&[&str]> for AttrValue {
    fn from(items: &[&str]) -> Self {
        AttrValue::List(items.iter().map(|s| s.to_string()).collect())
    }
}

/// An insertion-ordered attribute name → value mapping with unique keys.
///
/// Order follows first insertion; re-setting a key keeps its position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeMap {
    entries: Vec<(String, AttrValue)>,
}

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
        let pos = self.entries.iter().position(|(k, _)| k == name)?;
        Some(self.entries.remove(pos).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for AttributeMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = AttributeMap::new();
        for (k, v) in iter {
            map.set(k, v);
        }
        map
    }
}

/// How a default value combines with a caller-supplied value for a
/// given attribute name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePolicy {
    /// Default applies only when the caller omitted the attribute or
    /// left it blank; otherwise the caller value wins unchanged.
    Replace,
    /// Space-joined token set union (`class`).
    AppendUniqueToken,
    /// Semicolon-separated declaration union keyed by property name (`style`).
    AppendUniqueDeclaration,
}

impl MergePolicy {
    pub fn for_attribute(name: &str) -> MergePolicy {
        match name {
            "class" => MergePolicy::AppendUniqueToken,
            "style" => MergePolicy::AppendUniqueDeclaration,
            _ => MergePolicy::Replace,
        }
    }
}

/// Combine caller-supplied attributes with a set of defaults.
///
/// For every default key: a missing or blank caller value takes the
/// default verbatim (unless the caller set the literal `false`, which
/// suppresses the attribute); `class` values union as token sets with
/// caller tokens first; `style` values union as declaration sets where
/// a caller declaration beats a same-named default. Any other key the
/// caller set wins unchanged. Caller-only keys pass through. Neither
/// input is mutated.
pub fn merge(caller: &AttributeMap, defaults: &AttributeMap) -> EmailResult<AttributeMap> {
    let mut out = caller.clone();

    for (name, default_value) in defaults.iter() {
        let take_default = match out.get(name) {
            None => true,
            Some(value) => value.is_blank(),
        };
        if take_default {
            out.set(name, default_value.clone());
            continue;
        }

        match MergePolicy::for_attribute(name) {
            MergePolicy::Replace => {}
            MergePolicy::AppendUniqueToken => {
                let mut merged = tokens(name, out.get(name).unwrap_or(default_value))?;
                for token in tokens(name, default_value)? {
                    if !merged.contains(&token) {
                        merged.push(token);
                    }
                }
                out.set(name, AttrValue::Text(merged.join(" ")));
            }
            MergePolicy::AppendUniqueDeclaration => {
                let mut merged = declarations(name, out.get(name).unwrap_or(default_value))?;
                for (property, value) in declarations(name, default_value)? {
                    if !merged.iter().any(|(p, _)| *p == property) {
                        merged.push((property, value));
                    }
                }
                let rendered: Vec<String> = merged
                    .iter()
                    .map(|(p, v)| format!("{}:{};", p, v))
                    .collect();
                out.set(name, AttrValue::Text(rendered.join(" ")));
            }
        }
    }

    Ok(out)
}

/// Normalize a `class`-like value into whitespace-separated tokens.
fn tokens(attribute: &str, value: &AttrValue) -> EmailResult<Vec<String>> {
    match value {
        AttrValue::Text(s) => Ok(s.split_whitespace().map(str::to_string).collect()),
        AttrValue::List(items) => Ok(items
            .iter()
            .flat_map(|item| item.split_whitespace())
            .map(str::to_string)
            .collect()),
        other => Err(EmailError::InvalidAttributeValue {
            attribute: attribute.to_string(),
            reason: format!("expected a string or list of tokens, got {:?}", other),
        }),
    }
}

/// Parse a `style`-like value into `(property, value)` declarations.
///
/// Accepts `"a:1; b:2"` strings or lists whose items are themselves one
/// or more declarations. A declaration without a `:` is rejected.
fn declarations(attribute: &str, value: &AttrValue) -> EmailResult<Vec<(String, String)>> {
    let raw: Vec<&str> = match value {
        AttrValue::Text(s) => vec![s.as_str()],
        AttrValue::List(items) => items.iter().map(String::as_str).collect(),
        other => {
            return Err(EmailError::InvalidAttributeValue {
                attribute: attribute.to_string(),
                reason: format!("expected a string or list of declarations, got {:?}", other),
            })
        }
    };

    let mut decls = Vec::new();
    for chunk in raw {
        for entry in chunk.split(';') {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }
            let colon = entry
                .find(':')
                .ok_or_else(|| EmailError::InvalidAttributeValue {
                    attribute: attribute.to_string(),
                    reason: format!("declaration '{}' is not 'property:value'", entry),
                })?;
            let property = entry[..colon].trim().to_string();
            let val = entry[colon + 1..].trim().to_string();
            // Later duplicates within the same source lose; first wins.
            if !decls.iter().any(|(p, _): &(String, String)| *p == property) {
                decls.push((property, val));
            }
        }
    }
    Ok(decls)
}

// --- serde: attribute maps come out of YAML config files ---

impl<'de> Deserialize<'de> for AttrValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = AttrValue;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a string, number, boolean, or list of strings")
            }

            fn visit_bool<E: serde::de::Error>(self, v: bool) -> Result<AttrValue, E> {
                Ok(AttrValue::Bool(v))
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<AttrValue, E> {
                Ok(AttrValue::Int(v))
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<AttrValue, E> {
                Ok(AttrValue::Int(v as i64))
            }

            fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<AttrValue, E> {
                Ok(AttrValue::Text(v.to_string()))
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<AttrValue, E> {
                Ok(AttrValue::Text(v.to_string()))
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<AttrValue, A::Error> {
                let mut items = Vec::new();
                while let Some(item) = seq.next_element::<String>()? {
                    items.push(item);
                }
                Ok(AttrValue::List(items))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl<'de> Deserialize<'de> for AttributeMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MapVisitor;

        impl<'de> Visitor<'de> for MapVisitor {
            type Value = AttributeMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a mapping of attribute names to values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<AttributeMap, A::Error> {
                let mut map = AttributeMap::new();
                while let Some((key, value)) = access.next_entry::<String, AttrValue>()? {
                    map.set(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(MapVisitor)
    }
}
