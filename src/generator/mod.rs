//! Page-update generator
//!
//! A [`PageGenerator`] records JavaScript statements for one page update and
//! renders them, in call order, into a single script. Calls the generator has
//! no operation for go through [`PageGenerator::chain`], which returns a
//! [`CallChain`] that keeps collecting chained method calls.
//!
//! ```
//! use rjs::{NullContext, PageGenerator, RenderConfig};
//!
//! let context = NullContext;
//! let mut page = PageGenerator::new(&context, RenderConfig::default());
//! page.assign("record_count", 33).unwrap();
//! page.chain("foo", vec![]).call("init", vec![]);
//! assert_eq!(page.to_script(), "record_count = 33;\nfoo().init();");
//! ```

mod chain;

pub use chain::CallChain;

use crate::config::RenderConfig;
use crate::encoding::{self, escape_single_quoted, Argument};
use crate::utils::Result;
use crate::view::{RenderOptions, UrlOptions, ViewContext};
use serde_json::Value;
use std::fmt;

/// One emitted item of a page update
#[derive(Debug)]
pub enum Item<'ctx> {
    /// A finished statement, already normalized or pushed raw
    Statement(String),
    /// A chain of calls, stringified only when the page is rendered
    Chain(CallChain<'ctx>),
}

impl fmt::Display for Item<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Statement(text) => f.write_str(text),
            Self::Chain(chain) => fmt::Display::fmt(chain, f),
        }
    }
}

/// Target of a `redirect_to`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// A ready URL or path
    Path(String),
    /// Route parameters resolved by the view context
    Route(UrlOptions),
}

impl From<&str> for Location {
    fn from(path: &str) -> Self {
        Self::Path(path.to_string())
    }
}

impl From<String> for Location {
    fn from(path: String) -> Self {
        Self::Path(path)
    }
}

impl From<UrlOptions> for Location {
    fn from(options: UrlOptions) -> Self {
        Self::Route(options)
    }
}

/// What `render` produces markup from
#[derive(Debug, Clone, PartialEq)]
pub enum RenderTarget {
    /// A template rendered by the view context
    Template(RenderOptions),
    /// Text used as is
    Text(String),
}

impl From<RenderOptions> for RenderTarget {
    fn from(options: RenderOptions) -> Self {
        Self::Template(options)
    }
}

impl From<&str> for RenderTarget {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for RenderTarget {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Records JavaScript statements for one page update
pub struct PageGenerator<'ctx> {
    context: &'ctx dyn ViewContext,
    config: RenderConfig,
    items: Vec<Item<'ctx>>,
}

impl<'ctx> PageGenerator<'ctx> {
    /// Create an empty generator
    pub fn new(context: &'ctx dyn ViewContext, config: RenderConfig) -> Self {
        Self {
            context,
            config,
            items: Vec::new(),
        }
    }

    /// Create a generator and run `block` against it
    pub fn generate<F>(
        context: &'ctx dyn ViewContext,
        config: RenderConfig,
        block: F,
    ) -> Result<Self>
    where
        F: FnOnce(&mut PageGenerator<'ctx>) -> Result<()>,
    {
        let mut page = Self::new(context, config);
        block(&mut page)?;
        Ok(page)
    }

    /// The view context, for helpers written against the generator
    pub fn context(&self) -> &'ctx dyn ViewContext {
        self.context
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Emitted items in call order
    pub fn items(&self) -> &[Item<'ctx>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Render every item, newline-separated, wrapped in the debug envelope
    /// when the config asks for it
    pub fn to_script(&self) -> String {
        let source = self
            .items
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");

        log::debug!(
            "rendered page update: {} items, debug envelope {}",
            self.items.len(),
            self.config.debug
        );

        if self.config.debug {
            debug_envelope(&source)
        } else {
            source
        }
    }

    /// Normalize `line` into one statement and append it
    pub fn record(&mut self, line: impl AsRef<str>) -> String {
        let line = normalize_statement(line.as_ref());
        log::trace!("record: {}", line);
        self.items.push(Item::Statement(line.clone()));
        line
    }

    /// Append JavaScript verbatim
    pub fn push_raw(&mut self, javascript: impl Into<String>) {
        self.items.push(Item::Statement(javascript.into()));
    }

    /// Wrap `code` so it is passed as raw JavaScript instead of JSON
    pub fn literal(&self, code: impl Into<String>) -> Argument {
        Argument::literal(code)
    }

    /// Start a chain for a call the generator has no operation for
    pub fn chain(
        &mut self,
        method: impl Into<String>,
        arguments: Vec<Argument>,
    ) -> &mut CallChain<'ctx> {
        let method = method.into();
        log::trace!("chain: {}", method);
        let chain = CallChain::new(self.context, self.config, method, arguments);
        self.items.push(Item::Chain(chain));
        let Some(Item::Chain(chain)) = self.items.last_mut() else {
            unreachable!("chain was just pushed");
        };
        chain
    }

    /// Chain on the element with the given id: `$("id")`
    pub fn element(&mut self, id: &str) -> &mut CallChain<'ctx> {
        self.chain("$", vec![id.into()])
    }

    /// Display an alert dialog
    pub fn alert(&mut self, message: impl Into<Argument>) -> Result<String> {
        self.call("alert", vec![message.into()])
    }

    /// Send the browser to `location`
    pub fn redirect_to(&mut self, location: impl Into<Location>) -> Result<String> {
        let url = match location.into() {
            Location::Path(path) => path,
            Location::Route(options) => self.context.url_for(&options)?,
        };
        Ok(self.record(format!("window.location.href = {}", encoding::quote(&url))))
    }

    /// Reload the current location
    pub fn reload(&mut self) -> String {
        self.record("window.location.reload()")
    }

    /// Call `function` with the given arguments
    pub fn call(&mut self, function: &str, arguments: Vec<Argument>) -> Result<String> {
        let arguments = encoding::encode_arguments(&arguments, &self.config.encoder)?;
        Ok(self.record(format!("{}({})", function, arguments)))
    }

    /// Call `function`, passing the statements `block` records as a final
    /// `function() { ... }` argument.
    ///
    /// The block runs against a separate generator sharing this context.
    pub fn call_with_function<F>(
        &mut self,
        function: &str,
        mut arguments: Vec<Argument>,
        block: F,
    ) -> Result<String>
    where
        F: FnOnce(&mut PageGenerator<'ctx>) -> Result<()>,
    {
        arguments.push(block_to_function(self.context, self.config, block)?);
        self.call(function, arguments)
    }

    /// Assign `value` to the JavaScript `variable`
    pub fn assign(&mut self, variable: &str, value: impl Into<Argument>) -> Result<String> {
        let value = encoding::encode(&value.into(), &self.config.encoder)?;
        Ok(self.record(format!("{} = {}", variable, value)))
    }

    /// Run the statements `block` records after `seconds`.
    ///
    /// Unlike [`call_with_function`](Self::call_with_function), the block
    /// records into this same generator, between the `setTimeout` opening
    /// and closing lines. If the block fails, everything from the opening
    /// line on is discarded.
    pub fn delay<F>(&mut self, seconds: f64, block: F) -> Result<String>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        let start = self.items.len();
        self.push_raw("setTimeout(function() {");
        if let Err(e) = block(self) {
            self.items.truncate(start);
            return Err(e);
        }
        Ok(self.record(format!("}}, {})", (seconds * 1000.0) as i64)))
    }

    /// Show the given elements
    pub fn show(&mut self, ids: &[&str]) -> Result<String> {
        self.loop_on_multiple_args("Element.show", ids)
    }

    /// Hide the given elements
    pub fn hide(&mut self, ids: &[&str]) -> Result<String> {
        self.loop_on_multiple_args("Element.hide", ids)
    }

    /// Toggle the visibility of the given elements
    pub fn toggle(&mut self, ids: &[&str]) -> Result<String> {
        self.loop_on_multiple_args("Element.toggle", ids)
    }

    /// Remove the given elements from the page
    pub fn remove(&mut self, ids: &[&str]) -> Result<String> {
        self.loop_on_multiple_args("Element.remove", ids)
    }

    /// Produce markup, e.g. to pass into an `assign` or `call`.
    ///
    /// Templates are looked up in the html format only.
    pub fn render(&self, target: impl Into<RenderTarget>) -> Result<String> {
        match target.into() {
            RenderTarget::Template(mut options) => {
                options.formats = vec!["html".to_string()];
                Ok(self.context.render(&options)?)
            }
            RenderTarget::Text(text) => Ok(text),
        }
    }

    fn loop_on_multiple_args(&mut self, method: &str, ids: &[&str]) -> Result<String> {
        let options = &self.config.encoder;
        let line = match ids {
            [] => format!("{}({})", method, encoding::encode_value(&Value::Null, options)?),
            [id] => format!("{}({})", method, encoding::encode(&Argument::from(*id), options)?),
            _ => {
                let ids = Value::from(ids.to_vec());
                format!("{}.each({})", encoding::encode_value(&ids, options)?, method)
            }
        };
        Ok(self.record(line))
    }
}

impl fmt::Display for PageGenerator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_script())
    }
}

impl fmt::Debug for PageGenerator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageGenerator")
            .field("config", &self.config)
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

/// Trim trailing whitespace and semicolons, then terminate with exactly one `;`
pub fn normalize_statement(line: &str) -> String {
    let trimmed = line.trim_end_matches(|c: char| c.is_whitespace() || c == ';');
    format!("{};", trimmed)
}

/// Wrap `source` so runtime errors alert both the error and the source
pub fn debug_envelope(source: &str) -> String {
    format!(
        "try {{\n{}\n}} catch (e) {{ alert('RJS error:\\n\\n' + e.toString()); \
         alert('{}'); throw e }}",
        source,
        escape_single_quoted(source)
    )
}

/// Run `block` against a fresh generator and wrap its script as a function
/// literal argument.
///
/// The debug envelope only applies to the top-level script, so the nested
/// body is always rendered plain.
fn block_to_function<'ctx, F>(
    context: &'ctx dyn ViewContext,
    config: RenderConfig,
    block: F,
) -> Result<Argument>
where
    F: FnOnce(&mut PageGenerator<'ctx>) -> Result<()>,
{
    let nested = PageGenerator::generate(context, config.with_debug(false), block)?;
    Ok(Argument::literal(format!("function() {{ {} }}", nested.to_script())))
}
