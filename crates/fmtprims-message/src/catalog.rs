use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use crate::code::ErrorCode;
use crate::error::{MessageError, Result};
use crate::message::Message;

const PLACEHOLDER: &str = "{}";

static BUILTIN: OnceLock<TemplateCatalog> = OnceLock::new();

/// An error code bound to a template whose placeholder count was checked
/// against the code's arity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    code: ErrorCode,
    text: &'static str,
}

impl Template {
    /// Bind `text` to `code`, rejecting a placeholder count that differs
    /// from `code.arity()`.
    pub fn new(code: ErrorCode, text: &'static str) -> Result<Self> {
        let found = text.matches(PLACEHOLDER).count();
        if found != code.arity() {
            return Err(MessageError::TemplateArity {
                code,
                declared: code.arity(),
                found,
            });
        }
        Ok(Self { code, text })
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn text(&self) -> &'static str {
        self.text
    }

    pub fn arity(&self) -> usize {
        self.code.arity()
    }

    /// Render with positional arguments.
    pub fn render(&self, args: &[&dyn fmt::Display]) -> Result<Message> {
        if args.len() != self.arity() {
            return Err(MessageError::ArityMismatch {
                code: self.code,
                expected: self.arity(),
                got: args.len(),
            });
        }
        Ok(Message::new(self.code, interpolate(self.text, args)))
    }
}

/// Every error code with its validated template.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    templates: HashMap<ErrorCode, Template>,
}

impl TemplateCatalog {
    /// Build and validate the English catalog.
    pub fn new() -> Result<Self> {
        let templates = ErrorCode::ALL
            .iter()
            .map(|code| Template::new(*code, code.template()).map(|t| (*code, t)))
            .collect::<Result<HashMap<_, _>>>()?;
        Ok(Self { templates })
    }

    /// The shared English catalog.
    pub fn builtin() -> &'static TemplateCatalog {
        BUILTIN.get_or_init(|| {
            TemplateCatalog::new().expect("built-in templates must match their declared arity")
        })
    }

    pub fn get(&self, code: ErrorCode) -> Option<&Template> {
        self.templates.get(&code)
    }

    pub fn render(&self, code: ErrorCode, args: &[&dyn fmt::Display]) -> Result<Message> {
        match self.get(code) {
            Some(template) => template.render(args),
            None => Err(MessageError::UnknownCode(code.to_string())),
        }
    }

    /// Templates ordered by code.
    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        let mut templates: Vec<&Template> = self.templates.values().collect();
        templates.sort_unstable_by_key(|t| t.code);
        templates.into_iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

// Callers guarantee `args.len()` equals the number of placeholders.
pub(crate) fn interpolate(text: &str, args: &[&dyn fmt::Display]) -> String {
    let mut out = String::with_capacity(text.len() + args.len() * 8);
    let mut pieces = text.split(PLACEHOLDER);
    if let Some(first) = pieces.next() {
        out.push_str(first);
    }
    for (piece, arg) in pieces.zip(args) {
        out.push_str(&arg.to_string());
        out.push_str(piece);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_template_matches_its_arity() {
        let catalog = TemplateCatalog::new().unwrap();
        assert_eq!(catalog.len(), ErrorCode::ALL.len());
        for template in catalog.iter() {
            assert_eq!(
                template.text().matches(PLACEHOLDER).count(),
                template.arity(),
                "{}",
                template.code()
            );
        }
    }

    #[test]
    fn mismatched_template_is_rejected_at_construction() {
        assert_eq!(
            Template::new(ErrorCode::XMustBeOfTypeY, "{} must be a thing"),
            Err(MessageError::TemplateArity {
                code: ErrorCode::XMustBeOfTypeY,
                declared: 2,
                found: 1,
            })
        );
        assert!(Template::new(ErrorCode::Internal, "boom: {}").is_ok());
    }

    #[test]
    fn render_checks_argument_count() {
        let catalog = TemplateCatalog::builtin();
        assert_eq!(
            catalog
                .render(ErrorCode::XCannotBeGreaterThanY, &[&"minimum"])
                .unwrap_err(),
            MessageError::ArityMismatch {
                code: ErrorCode::XCannotBeGreaterThanY,
                expected: 2,
                got: 1,
            }
        );
        assert!(catalog
            .render(ErrorCode::ArrayNoAdditionalItem, &[&"extra"])
            .is_err());
    }

    #[test]
    fn render_fills_placeholders_in_order() {
        let message = TemplateCatalog::builtin()
            .render(ErrorCode::InvalidPatternProperty, &[&"id", &"^[a-z]+$"])
            .unwrap();
        assert_eq!(message.description(), "property \"id\" does not match pattern ^[a-z]+$");

        let message = TemplateCatalog::builtin()
            .render(ErrorCode::ArrayMinItems, &[&3])
            .unwrap();
        assert_eq!(message.description(), "array must have at least 3 items");
    }

    #[test]
    fn zero_arity_templates_render_verbatim() {
        let message = TemplateCatalog::builtin()
            .render(ErrorCode::NumberMustValidateOneOf, &[])
            .unwrap();
        assert_eq!(
            message.description(),
            "must validate one and only one schema (oneOf)"
        );
    }

    #[test]
    fn arguments_containing_placeholders_are_not_reexpanded() {
        let message = TemplateCatalog::builtin()
            .render(ErrorCode::XMustBeOfTypeY, &[&"{}", &"string"])
            .unwrap();
        assert_eq!(message.description(), "{} must be of type string");
    }
}
