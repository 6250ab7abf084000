//! `<script>` tag markup

/// Attributes for a generated `<script>` element, kept in caller order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptTagOptions {
    attributes: Vec<(String, String)>,
}

impl ScriptTagOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an attribute
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(existing) => existing.1 = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    fn to_attribute_string(&self) -> String {
        self.attributes
            .iter()
            .map(|(name, value)| format!(" {}=\"{}\"", name, escape_attribute(value)))
            .collect()
    }
}

/// Wrap JavaScript in a `<script>` element with a commented CDATA section
pub fn javascript_tag(content: &str, options: &ScriptTagOptions) -> String {
    format!(
        "<script{}>\n//<![CDATA[\n{}\n//]]>\n</script>",
        options.to_attribute_string(),
        content
    )
}

fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_tag() {
        assert_eq!(
            javascript_tag("alert(\"hi\");", &ScriptTagOptions::new()),
            "<script>\n//<![CDATA[\nalert(\"hi\");\n//]]>\n</script>"
        );
    }

    #[test]
    fn test_attributes_in_order_and_escaped() {
        let options = ScriptTagOptions::new()
            .attr("id", "update")
            .attr("data-note", "a \"b\" & c")
            .attr("id", "page-update");
        assert_eq!(
            javascript_tag("", &options),
            "<script id=\"page-update\" data-note=\"a &quot;b&quot; &amp; c\">\n\
             //<![CDATA[\n\n//]]>\n</script>"
        );
    }
}
