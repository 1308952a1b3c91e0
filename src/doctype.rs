/// Document type definitions, keyed the way templates name them.
const DOC_TYPES: &[(&str, &str)] = &[
    (
        "html4-strict",
        "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01//EN\" \"http://www.w3.org/TR/html4/strict.dtd\">",
    ),
    (
        "html4-trans",
        "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01 Transitional//EN\" \"http://www.w3.org/TR/html4/loose.dtd\">",
    ),
    (
        "html4-frame",
        "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01 Frameset//EN\" \"http://www.w3.org/TR/html4/frameset.dtd\">",
    ),
    ("html5", "<!DOCTYPE html>"),
    (
        "xhtml-strict",
        "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Strict//EN\" \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd\">",
    ),
    (
        "xhtml-trans",
        "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Transitional//EN\" \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd\">",
    ),
    (
        "xhtml-frame",
        "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Frameset//EN\" \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-frameset.dtd\">",
    ),
    (
        "xhtml11",
        "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.1//EN\" \"http://www.w3.org/TR/xhtml11/DTD/xhtml11.dtd\">",
    ),
];

/// Doctype key used when callers do not name one. XHTML 1.0 Strict is the
/// conservative choice for legacy email clients.
pub const DEFAULT_DOC_TYPE: &str = "xhtml-strict";

/// Look up the literal doctype string for `key`.
///
/// Unknown keys return `None`, never an error.
pub fn doc_type(key: &str) -> Option<&'static str> {
    DOC_TYPES.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}
