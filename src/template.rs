use serde::Deserialize;

use crate::error::{EmailError, EmailResult};

/// Platform line ending, used for text-mode paragraphs and line breaks.
#[cfg(windows)]
pub const EOL: &str = "\r\n";
#[cfg(not(windows))]
pub const EOL: &str = "\n";

/// The named format strings the markup operations render through.
///
/// Placeholders use `{{name}}` syntax. Any template may be overridden
/// from configuration; omitted entries keep their built-in value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Templates {
    /// Line break emitted in HTML mode.
    pub eolhtml: String,
    /// Line break emitted in text mode.
    pub eoltext: String,
    /// Full table: open tag, content, close tag.
    pub table: String,
    /// Opening table tag only, for tables with deferred content.
    pub tablestart: String,
    /// Closing table tag only.
    pub tableend: String,
    /// Text-mode rendering of a link.
    pub link: String,
}

impl Default for Templates {
    fn default() -> Self {
        Templates {
            eolhtml: "<br>".to_string(),
            eoltext: EOL.to_string(),
            table: "<table{{attrs}}>{{content}}</table>".to_string(),
            tablestart: "<table{{attrs}}>".to_string(),
            tableend: "</table>".to_string(),
            link: "{{title}}: {{url}}".to_string(),
        }
    }
}

impl Templates {
    /// Fetch a template by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        match name {
            "eolhtml" => Some(&self.eolhtml),
            "eoltext" => Some(&self.eoltext),
            "table" => Some(&self.table),
            "tablestart" => Some(&self.tablestart),
            "tableend" => Some(&self.tableend),
            "link" => Some(&self.link),
            _ => None,
        }
    }

    /// Render the named template, substituting every `{{placeholder}}`
    /// with its value from `values`. A placeholder with no value is an
    /// error; unused values are ignored.
    pub fn format(&self, name: &str, values: &[(&str, &str)]) -> EmailResult<String> {
        let template = self.get(name).ok_or_else(|| EmailError::MissingTemplate {
            name: name.to_string(),
        })?;
        fill(name, template, values)
    }
}

fn fill(name: &str, template: &str, values: &[(&str, &str)]) -> EmailResult<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let end = after
            .find("}}")
            .ok_or_else(|| EmailError::UnterminatedPlaceholder {
                name: name.to_string(),
            })?;
        let key = &after[..end];
        let value = values
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .ok_or_else(|| EmailError::MissingPlaceholder {
                template: name.to_string(),
                placeholder: key.to_string(),
            })?;
        out.push_str(value);
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    Ok(out)
}
