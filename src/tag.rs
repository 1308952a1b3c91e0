use crate::attrs::{AttrValue, AttributeMap};

/// Elements that render without content or a closing tag.
const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "link", "meta", "source"];

/// The generic tag-building capability the email generator delegates to.
///
/// Held by composition so hosts can swap in their own builder (e.g. one
/// that emits XHTML-style self-closing tags).
pub trait TagBuilder {
    /// Build a complete tag. `content` is raw markup and is not escaped;
    /// it is ignored for void elements.
    fn build_tag(&self, tag: &str, attrs: &AttributeMap, content: Option<&str>) -> String;

    /// Render an attribute map as the ` name="value"` string that follows
    /// a tag name. Empty maps render as an empty string.
    fn format_attributes(&self, attrs: &AttributeMap) -> String;
}

/// Default HTML5-flavored tag builder.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlTagBuilder;

impl TagBuilder for HtmlTagBuilder {
    fn build_tag(&self, tag: &str, attrs: &AttributeMap, content: Option<&str>) -> String {
        let attrs = self.format_attributes(attrs);
        if VOID_TAGS.contains(&tag) {
            format!("<{}{}>", tag, attrs)
        } else {
            format!("<{}{}>{}</{}>", tag, attrs, content.unwrap_or(""), tag)
        }
    }

    fn format_attributes(&self, attrs: &AttributeMap) -> String {
        let mut out = String::new();
        for (name, value) in attrs.iter() {
            match value {
                // `false` suppresses the attribute entirely.
                AttrValue::Bool(false) => {}
                AttrValue::Bool(true) => {
                    out.push(' ');
                    out.push_str(name);
                }
                AttrValue::Int(n) => {
                    push_pair(&mut out, name, &n.to_string());
                }
                AttrValue::Text(s) => {
                    push_pair(&mut out, name, s);
                }
                AttrValue::List(items) => {
                    push_pair(&mut out, name, &join_list(name, items));
                }
            }
        }
        out
    }
}

fn push_pair(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_attr(value));
    out.push('"');
}

/// Flatten a list value: style declarations each get a terminating `;`,
/// everything else is space-joined as-is.
fn join_list(name: &str, items: &[String]) -> String {
    if name == "style" {
        items
            .iter()
            .map(|item| {
                let item = item.trim();
                if item.ends_with(';') {
                    item.to_string()
                } else {
                    format!("{};", item)
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        items.join(" ")
    }
}

/// Minimal escaping for attribute values.
fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn map(pairs: &[(&str, AttrValue)]) -> AttributeMap {
        pairs.iter().cloned().collect()
    }

    #[test]
    fn builds_tag_with_content() {
        let builder = HtmlTagBuilder;
        let attrs = map(&[("href", "https://x.test/".into())]);
        assert_eq!(
            builder.build_tag("a", &attrs, Some("Click")),
            "<a href=\"https://x.test/\">Click</a>"
        );
    }

    #[test]
    fn void_tags_have_no_closing_tag() {
        let builder = HtmlTagBuilder;
        let attrs = map(&[("src", "logo.png".into())]);
        assert_eq!(builder.build_tag("img", &attrs, None), "<img src=\"logo.png\">");
    }

    #[test]
    fn bool_true_renders_bare_and_false_is_omitted() {
        let builder = HtmlTagBuilder;
        let attrs = map(&[
            ("controls", AttrValue::Bool(true)),
            ("border", AttrValue::Bool(false)),
        ]);
        assert_eq!(builder.format_attributes(&attrs), " controls");
    }

    #[test]
    fn int_values_render_quoted() {
        let builder = HtmlTagBuilder;
        let attrs = map(&[("border", AttrValue::Int(0))]);
        assert_eq!(builder.format_attributes(&attrs), " border=\"0\"");
    }

    #[test]
    fn style_lists_terminate_each_declaration() {
        let builder = HtmlTagBuilder;
        let attrs = map(&[(
            "style",
            AttrValue::from(&["margin-left:0", "margin-right:0;"][..]),
        )]);
        assert_eq!(
            builder.format_attributes(&attrs),
            " style=\"margin-left:0; margin-right:0;\""
        );
    }

    #[test]
    fn class_lists_join_with_spaces() {
        let builder = HtmlTagBuilder;
        let attrs = map(&[("class", AttrValue::from(&["btn", "primary"][..]))]);
        assert_eq!(builder.format_attributes(&attrs), " class=\"btn primary\"");
    }

    #[test]
    fn attribute_values_are_escaped() {
        let builder = HtmlTagBuilder;
        let attrs = map(&[("alt", "Tom & \"Jerry\" <3".into())]);
        assert_eq!(
            builder.format_attributes(&attrs),
            " alt=\"Tom &amp; &quot;Jerry&quot; &lt;3\""
        );
    }

    #[test]
    fn empty_map_renders_nothing() {
        let builder = HtmlTagBuilder;
        assert_eq!(builder.format_attributes(&AttributeMap::new()), "");
    }
}
