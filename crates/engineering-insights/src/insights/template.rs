use regex::{Captures, Regex};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;

static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();

fn placeholder_pattern() -> &'static Regex {
    PLACEHOLDER.get_or_init(|| {
        Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}")
            .expect("placeholder pattern is valid")
    })
}

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("failed to read report template {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// An HTML document with `{{ name }}` insertion points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTemplate {
    source: String,
}

impl ReportTemplate {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, TemplateError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| TemplateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(source))
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Placeholder names in order of first appearance.
    pub fn placeholders(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for captures in placeholder_pattern().captures_iter(&self.source) {
            if let Some(name) = captures.get(1).map(|m| m.as_str()) {
                if !seen.contains(&name) {
                    seen.push(name);
                }
            }
        }
        seen
    }

    /// Inserts bound values verbatim. Unbound placeholders stay as written.
    pub fn render(&self, bindings: &BTreeMap<&str, String>) -> String {
        placeholder_pattern()
            .replace_all(&self.source, |captures: &Captures<'_>| {
                match bindings.get(&captures[1]) {
                    Some(value) => value.clone(),
                    None => captures[0].to_string(),
                }
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_bound_names_with_flexible_spacing() {
        let template = ReportTemplate::new("<p>{{first}}</p><p>{{  second }}</p>");
        let bindings = BTreeMap::from([
            ("first", "<b>1</b>".to_string()),
            ("second", "2".to_string()),
        ]);

        assert_eq!(template.render(&bindings), "<p><b>1</b></p><p>2</p>");
    }

    #[test]
    fn unbound_placeholders_remain_literal() {
        let template = ReportTemplate::new("{{ known }} {{ unknown }} {{ not a name }}");
        let bindings = BTreeMap::from([("known", "ok".to_string())]);

        assert_eq!(
            template.render(&bindings),
            "ok {{ unknown }} {{ not a name }}"
        );
    }

    #[test]
    fn repeated_placeholders_are_all_filled() {
        let template = ReportTemplate::new("{{ a }}-{{ a }}");
        let bindings = BTreeMap::from([("a", "x".to_string())]);

        assert_eq!(template.render(&bindings), "x-x");
        assert_eq!(template.placeholders(), vec!["a"]);
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let template = ReportTemplate::new("{{ a }}");
        let bindings = BTreeMap::from([("a", "{{ b }}".to_string()), ("b", "no".to_string())]);

        assert_eq!(template.render(&bindings), "{{ b }}");
    }

    #[test]
    fn from_path_reports_missing_file() {
        let error = ReportTemplate::from_path("./missing-template.html").expect_err("missing");

        match error {
            TemplateError::Io { path, source } => {
                assert_eq!(path, PathBuf::from("./missing-template.html"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
        }
    }
}
