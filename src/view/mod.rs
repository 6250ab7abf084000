//! View-rendering context
//!
//! The generator reaches the surrounding web framework only through the
//! [`ViewContext`] trait: URL resolution and template rendering.

mod tag;

pub use tag::{javascript_tag, ScriptTagOptions};

use crate::utils::ContextError;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Route parameters resolved into a URL by the context, e.g.
/// `controller: account, action: signup`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlOptions {
    params: BTreeMap<String, String>,
}

impl UrlOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a route parameter
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn params(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// A template render request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderOptions {
    /// Template or partial name
    pub template: String,
    /// Local variables made available to the template
    pub locals: Map<String, Value>,
    /// Formats the template lookup is restricted to
    pub formats: Vec<String>,
}

impl RenderOptions {
    /// Render the named partial
    pub fn partial(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            ..Self::default()
        }
    }

    /// Add a local variable
    pub fn local(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.locals.insert(name.into(), value.into());
        self
    }
}

/// Services the surrounding framework provides to the generator
#[cfg_attr(test, mockall::automock)]
pub trait ViewContext {
    /// Resolve route parameters into a URL
    fn url_for(&self, options: &UrlOptions) -> Result<String, ContextError>;

    /// Render a template to a string
    fn render(&self, options: &RenderOptions) -> Result<String, ContextError>;
}

/// Context with no routes and no templates
#[derive(Debug, Clone, Copy, Default)]
pub struct NullContext;

impl ViewContext for NullContext {
    fn url_for(&self, options: &UrlOptions) -> Result<String, ContextError> {
        Err(format!("no route matches {:?}", options).into())
    }

    fn render(&self, options: &RenderOptions) -> Result<String, ContextError> {
        Err(format!("missing template {}", options.template).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_options_sorted() {
        let options = UrlOptions::new()
            .with("controller", "account")
            .with("action", "signup");
        let params: Vec<_> = options.params().collect();
        assert_eq!(params, vec![("action", "signup"), ("controller", "account")]);
        assert_eq!(options.get("controller"), Some("account"));
        assert!(!options.is_empty());
    }

    #[test]
    fn test_render_options_locals() {
        let options = RenderOptions::partial("items/item").local("name", "Widget");
        assert_eq!(options.template, "items/item");
        assert_eq!(options.locals.get("name"), Some(&Value::from("Widget")));
        assert!(options.formats.is_empty());
    }

    #[test]
    fn test_null_context_fails() {
        let context = NullContext;
        assert!(context.url_for(&UrlOptions::new()).is_err());
        let err = context.render(&RenderOptions::partial("list")).unwrap_err();
        assert_eq!(err.to_string(), "missing template list");
    }
}
