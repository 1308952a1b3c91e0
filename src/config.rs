use serde::Deserialize;

use crate::attrs::{AttrValue, AttributeMap};
use crate::error::EmailResult;
use crate::template::Templates;

/// Built-in default attributes per tag kind.
///
/// These are the email-client-safe settings applied on every HTML-mode
/// operation: explicit table resets, block-level images, margin resets
/// on paragraphs, and `target="_blank"` on links.
#[derive(Debug, Clone, PartialEq)]
pub struct TagAttributes {
    pub link: AttributeMap,
    pub image: AttributeMap,
    pub media: AttributeMap,
    pub para: AttributeMap,
    pub table: AttributeMap,
}

impl Default for TagAttributes {
    fn default() -> Self {
        let mut link = AttributeMap::new();
        link.set("target", "_blank");

        let mut image = AttributeMap::new();
        image.set("style", AttrValue::from(&["display:block"][..]));

        let mut para = AttributeMap::new();
        para.set(
            "style",
            AttrValue::from(&["margin-left:0", "margin-right:0", "margin-bottom:1em"][..]),
        );

        let mut table = AttributeMap::new();
        table.set("border", 0i64);
        table.set("cellpadding", 0i64);
        table.set("cellspacing", 0i64);
        table.set(
            "style",
            AttrValue::from(
                &[
                    "border-collapse:collapse",
                    "mso-table-lspace:0pt",
                    "mso-table-rspace:0pt",
                ][..],
            ),
        );

        TagAttributes {
            link,
            image,
            media: AttributeMap::new(),
            para,
            table,
        }
    }
}

/// Per-tag-kind attribute overrides as they appear in a config file.
/// Each block deep-unions over the built-in block: override keys win,
/// untouched built-in keys are kept.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AttributeOverrides {
    pub link: Option<AttributeMap>,
    pub image: Option<AttributeMap>,
    pub media: Option<AttributeMap>,
    pub para: Option<AttributeMap>,
    pub table: Option<AttributeMap>,
}

/// Caller-supplied configuration, deserialized from YAML and merged
/// over the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConfigOverrides {
    pub attributes: AttributeOverrides,
    pub templates: Option<Templates>,
}

/// The immutable process-wide configuration of an email markup generator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmailConfig {
    pub attributes: TagAttributes,
    pub templates: Templates,
}

impl EmailConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in defaults with `overrides` merged on top.
    pub fn with_overrides(overrides: ConfigOverrides) -> Self {
        let mut config = EmailConfig::default();
        union_into(&mut config.attributes.link, overrides.attributes.link);
        union_into(&mut config.attributes.image, overrides.attributes.image);
        union_into(&mut config.attributes.media, overrides.attributes.media);
        union_into(&mut config.attributes.para, overrides.attributes.para);
        union_into(&mut config.attributes.table, overrides.attributes.table);
        if let Some(templates) = overrides.templates {
            config.templates = templates;
        }
        config
    }

    /// Parse a YAML override document and merge it over the defaults.
    pub fn from_yaml(yaml: &str) -> EmailResult<Self> {
        let overrides: ConfigOverrides = serde_yaml::from_str(yaml)?;
        Ok(Self::with_overrides(overrides))
    }
}

fn union_into(base: &mut AttributeMap, overrides: Option<AttributeMap>) {
    if let Some(map) = overrides {
        for (name, value) in map.iter() {
            base.set(name, value.clone());
        }
    }
}
