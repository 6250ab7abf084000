//! Chained calls recorded as one expression

use super::{block_to_function, normalize_statement, PageGenerator};
use crate::config::RenderConfig;
use crate::encoding::{encode_chain_arguments, Argument};
use crate::utils::Result;
use crate::view::ViewContext;
use std::fmt;

/// A chain of method calls rendered as `m1(a).m2(b)...;`
///
/// Created by [`PageGenerator::chain`]. Every further call is appended and
/// never resolved on its own.
pub struct CallChain<'ctx> {
    context: &'ctx dyn ViewContext,
    config: RenderConfig,
    methods: Vec<(String, Vec<Argument>)>,
}

impl<'ctx> CallChain<'ctx> {
    pub(super) fn new(
        context: &'ctx dyn ViewContext,
        config: RenderConfig,
        method: String,
        arguments: Vec<Argument>,
    ) -> Self {
        Self {
            context,
            config,
            methods: vec![(method, arguments)],
        }
    }

    /// Append a call to the chain
    pub fn call(&mut self, method: impl Into<String>, arguments: Vec<Argument>) -> &mut Self {
        self.methods.push((method.into(), arguments));
        self
    }

    /// Append a call whose final argument is a function literal built from
    /// the statements `block` records
    pub fn call_with_function<F>(
        &mut self,
        method: impl Into<String>,
        mut arguments: Vec<Argument>,
        block: F,
    ) -> Result<&mut Self>
    where
        F: FnOnce(&mut PageGenerator<'ctx>) -> Result<()>,
    {
        arguments.push(block_to_function(self.context, self.config, block)?);
        Ok(self.call(method, arguments))
    }

    /// The recorded `(method, arguments)` pairs
    pub fn segments(&self) -> impl Iterator<Item = (&str, &[Argument])> {
        self.methods
            .iter()
            .map(|(method, arguments)| (method.as_str(), arguments.as_slice()))
    }

    /// Number of calls in the chain, never zero
    pub fn segment_count(&self) -> usize {
        self.methods.len()
    }

    /// The chained expression without statement termination
    pub fn expression(&self) -> String {
        self.methods
            .iter()
            .map(|(method, arguments)| {
                format!(
                    "{}({})",
                    method,
                    encode_chain_arguments(arguments, &self.config.encoder)
                )
            })
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl fmt::Display for CallChain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&normalize_statement(&self.expression()))
    }
}

impl fmt::Debug for CallChain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallChain")
            .field("methods", &self.methods)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::NullContext;
    use serde_json::json;

    fn chain(method: &str, arguments: Vec<Argument>) -> CallChain<'static> {
        CallChain::new(&NullContext, RenderConfig::default(), method.into(), arguments)
    }

    #[test]
    fn test_single_segment() {
        let chain = chain("foo", vec![]);
        assert_eq!(chain.segment_count(), 1);
        assert_eq!(chain.to_string(), "foo();");
    }

    #[test]
    fn test_fluent_chaining() {
        let mut chain = chain("foo", vec![]);
        chain
            .call("bar", vec![1.into(), 2.into()])
            .call("baz", vec![json!({"a": true}).into()]);
        assert_eq!(chain.expression(), "foo().bar(1, 2).baz({\"a\":true})");
        assert_eq!(chain.to_string(), "foo().bar(1, 2).baz({\"a\":true});");
        let names: Vec<_> = chain.segments().map(|(method, _)| method).collect();
        assert_eq!(names, vec!["foo", "bar", "baz"]);
    }

    #[test]
    fn test_inspect_argument_uses_debug_form() {
        let mut chain = chain("timer", vec![]);
        chain.call("wait", vec![Argument::inspect(&std::time::Duration::from_secs(2))]);
        assert_eq!(chain.to_string(), "timer().wait(2s);");
    }

    #[test]
    fn test_literal_argument_is_raw() {
        let mut chain = chain("$", vec!["list".into()]);
        chain.call("insert", vec![Argument::literal("Element.ROW")]);
        assert_eq!(chain.to_string(), "$(\"list\").insert(Element.ROW);");
    }

    #[test]
    fn test_call_with_function() {
        let mut chain = chain("event", vec![]);
        chain
            .call_with_function("observe", vec!["one".into(), "click".into()], |p| {
                p.element("two").call("show", vec![]);
                Ok(())
            })
            .unwrap();
        assert_eq!(
            chain.to_string(),
            "event().observe(\"one\", \"click\", function() { $(\"two\").show(); });"
        );
    }

    #[test]
    fn test_call_with_function_body_not_wrapped_in_debug() {
        let config = RenderConfig::new().with_debug(true);
        let mut chain = CallChain::new(&NullContext, config, "event".into(), vec![]);
        chain
            .call_with_function("observe", vec!["one".into()], |p| {
                p.reload();
                Ok(())
            })
            .unwrap();
        assert_eq!(
            chain.to_string(),
            "event().observe(\"one\", function() { window.location.reload(); });"
        );
    }
}
