use emailml::{
    doc_type, AttrValue, AttributeMap, EmailConfig, EmailError, EmailMarkup, ModeFallback,
    RenderMode,
};
use pretty_assertions::assert_eq;

const EOL: &str = emailml::template::EOL;

fn html_markup() -> EmailMarkup {
    let mut email = EmailMarkup::with_base_url("https://example.com");
    email.on_before_render_file("templates/email/html/body.tpl");
    email
}

fn text_markup() -> EmailMarkup {
    let mut email = EmailMarkup::with_base_url("https://example.com");
    email.on_before_render_file("templates/email/text/body.tpl");
    email
}

fn attrs(pairs: &[(&str, AttrValue)]) -> AttributeMap {
    pairs.iter().cloned().collect()
}

// Mode detection

#[test]
fn mode_follows_the_rendered_file() {
    let mut email = EmailMarkup::with_base_url("https://example.com");
    email.on_before_render_file("app/templates/email/text/welcome.tpl");
    assert_eq!(email.mode().unwrap(), RenderMode::Text);
    email.on_before_render_file("app/templates/email/html/welcome.tpl");
    assert_eq!(email.mode().unwrap(), RenderMode::Html);
}

#[test]
fn operations_fail_before_any_file_notification() {
    let email = EmailMarkup::with_base_url("https://example.com");
    let result = email.link("Click", "/x", &AttributeMap::new());
    assert!(matches!(result, Err(EmailError::ModeNotDetermined { .. })));
}

#[test]
fn html_fallback_renders_unmatched_paths_as_html() {
    let mut email =
        EmailMarkup::with_base_url("https://example.com").with_mode_fallback(ModeFallback::Html);
    email.on_before_render_file("templates/pages/home.tpl");
    assert_eq!(email.mode().unwrap(), RenderMode::Html);
    let out = email.image("logo.png", &AttributeMap::new()).unwrap();
    assert!(out.starts_with("<img"));
}

// Doctype

#[test]
fn doc_type_lookup() {
    assert_eq!(doc_type("html5"), Some("<!DOCTYPE html>"));
    assert_eq!(doc_type("unknown-key"), None);

    let email = html_markup();
    assert_eq!(email.doc_type("html5"), Some("<!DOCTYPE html>"));
    assert!(email.default_doc_type().contains("XHTML 1.0 Strict"));
}

// Links

#[test]
fn html_link_gets_target_blank() {
    let email = html_markup();
    let out = email.link("Click", "/x", &AttributeMap::new()).unwrap();
    assert_eq!(
        out,
        "<a href=\"https://example.com/x\" target=\"_blank\">Click</a>"
    );
}

#[test]
fn html_link_caller_target_wins() {
    let email = html_markup();
    let out = email
        .link("Click", "/x", &attrs(&[("target", "_self".into())]))
        .unwrap();
    assert!(out.contains("target=\"_self\""));
    assert!(!out.contains("_blank"));
}

#[test]
fn text_link_uses_the_link_template() {
    let email = text_markup();
    let out = email.link("Click", "/x", &AttributeMap::new()).unwrap();
    assert_eq!(out, "Click: https://example.com/x");
}

#[test]
fn text_link_with_empty_url_is_just_the_title() {
    let email = text_markup();
    let out = email.link("Click", "", &AttributeMap::new()).unwrap();
    assert_eq!(out, "Click");
}

// Images

#[test]
fn text_mode_suppresses_images() {
    let email = text_markup();
    assert_eq!(email.image("logo.png", &AttributeMap::new()).unwrap(), "");
}

#[test]
fn html_image_is_block_by_default() {
    let email = html_markup();
    let out = email.image("logo.png", &AttributeMap::new()).unwrap();
    assert_eq!(
        out,
        "<img src=\"https://example.com/logo.png\" style=\"display:block;\" alt=\"\">"
    );
}

#[test]
fn html_image_caller_style_overrides_display() {
    let email = html_markup();
    let out = email
        .image(
            "logo.png",
            &attrs(&[("style", "display:inline".into()), ("alt", "Logo".into())]),
        )
        .unwrap();
    assert!(out.contains("display:inline;"));
    assert!(!out.contains("display:block"));
    assert!(out.contains("alt=\"Logo\""));
}

// Media

#[test]
fn media_is_empty_in_text_mode() {
    let email = text_markup();
    assert_eq!(email.media("clip.mp4", &AttributeMap::new()).unwrap(), "");
}

#[test]
fn media_element_follows_extension() {
    let email = html_markup();
    let video = email.media("clip.mp4", &AttributeMap::new()).unwrap();
    assert!(video.starts_with("<video"));
    let audio = email.media("episode.mp3", &AttributeMap::new()).unwrap();
    assert!(audio.starts_with("<audio"));
}

// Paragraphs

#[test]
fn text_para_is_blank_line_separated() {
    let email = text_markup();
    let out = email.para(Some("x"), "Hello", &AttributeMap::new()).unwrap();
    assert_eq!(out, format!("{EOL}{EOL}Hello{EOL}{EOL}"));
}

#[test]
fn html_para_gets_margin_resets() {
    let email = html_markup();
    let out = email.para(None, "Hello", &AttributeMap::new()).unwrap();
    assert_eq!(
        out,
        "<p style=\"margin-left:0; margin-right:0; margin-bottom:1em;\">Hello</p>"
    );
}

#[test]
fn html_para_with_class_and_caller_style() {
    let email = html_markup();
    let out = email
        .para(
            Some("lead"),
            "Hello",
            &attrs(&[("style", "margin-bottom:2em".into())]),
        )
        .unwrap();
    assert!(out.starts_with("<p class=\"lead\""));
    assert!(out.contains("margin-bottom:2em;"));
    assert!(!out.contains("margin-bottom:1em"));
    assert!(out.contains("margin-left:0;"));
}

// Tables

#[test]
fn text_table_passes_content_through() {
    let email = text_markup();
    let out = email.table(Some("row one\nrow two"), &AttributeMap::new()).unwrap();
    assert_eq!(out, "row one\nrow two");
    assert_eq!(email.table(None, &AttributeMap::new()).unwrap(), "");
}

#[test]
fn html_table_carries_the_reset_attributes() {
    let email = html_markup();
    let out = email.table(Some("<tr></tr>"), &AttributeMap::new()).unwrap();
    assert_eq!(
        out,
        "<table border=\"0\" cellpadding=\"0\" cellspacing=\"0\" \
         style=\"border-collapse:collapse; mso-table-lspace:0pt; mso-table-rspace:0pt;\">\
         <tr></tr></table>"
    );
}

#[test]
fn table_with_deferred_content_is_only_the_opening_tag() {
    let email = html_markup();
    let out = email.table(None, &AttributeMap::new()).unwrap();
    assert!(out.starts_with("<table"));
    assert!(out.ends_with(">"));
    assert!(!out.contains("</table>"));
    assert_eq!(email.table_end().unwrap(), "</table>");
}

#[test]
fn explicit_false_border_is_suppressed() {
    let email = html_markup();
    let out = email
        .table(Some(""), &attrs(&[("border", AttrValue::Bool(false))]))
        .unwrap();
    assert!(!out.contains("border="));
    assert!(out.contains("cellpadding=\"0\""));
}

// Viewport

#[test]
fn viewport_defaults_when_empty() {
    let email = html_markup();
    let out = email.viewport::<&str>(&[]);
    assert_eq!(
        out,
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
    );
}

#[test]
fn viewport_joins_list_entries() {
    let email = html_markup();
    let out = email.viewport(&["a", "b"]);
    assert_eq!(out, "<meta name=\"viewport\" content=\"a, b\">");
}

#[test]
fn viewport_is_mode_independent() {
    let email = text_markup();
    assert!(email.viewport(&["width=600"]).starts_with("<meta"));
}

// Configuration overrides

#[test]
fn yaml_overrides_reach_the_operations() {
    let config = EmailConfig::from_yaml(
        "attributes:\n  link:\n    class: email-link\ntemplates:\n  link: \"{{title}} -> {{url}}\"\n",
    )
    .unwrap();

    let mut email = EmailMarkup::new(
        config.clone(),
        Box::new(emailml::BaseUrlResolver::new("https://example.com")),
    );
    email.on_before_render_file("email/html/a.tpl");
    let out = email.link("Click", "/x", &AttributeMap::new()).unwrap();
    assert!(out.contains("class=\"email-link\""));
    assert!(out.contains("target=\"_blank\""));

    let mut email = EmailMarkup::new(
        config,
        Box::new(emailml::BaseUrlResolver::new("https://example.com")),
    );
    email.on_before_render_file("email/text/a.tpl");
    let out = email.link("Click", "/x", &AttributeMap::new()).unwrap();
    assert_eq!(out, "Click -> https://example.com/x");
}

#[test]
fn eol_follows_mode_and_templates() {
    let email = html_markup();
    assert_eq!(email.eol().unwrap(), "<br>");
    let email = text_markup();
    assert_eq!(email.eol().unwrap(), EOL);
}
