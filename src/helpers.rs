//! Entry points used from view code

use crate::config::RenderConfig;
use crate::generator::PageGenerator;
use crate::utils::Result;
use crate::view::{javascript_tag, ScriptTagOptions, ViewContext};

/// Run `block` against a new generator and return the generated JavaScript.
///
/// ```
/// use rjs::{update_page, NullContext, RenderConfig};
///
/// let js = update_page(&NullContext, RenderConfig::default(), |page| {
///     page.hide(&["spinner"])?;
///     Ok(())
/// })
/// .unwrap();
/// assert_eq!(js, "Element.hide(\"spinner\");");
/// ```
pub fn update_page<'ctx, F>(
    context: &'ctx dyn ViewContext,
    config: RenderConfig,
    block: F,
) -> Result<String>
where
    F: FnOnce(&mut PageGenerator<'ctx>) -> Result<()>,
{
    Ok(PageGenerator::generate(context, config, block)?.to_script())
}

/// Like [`update_page`], wrapped in a `<script>` tag with the given attributes
pub fn update_page_tag<'ctx, F>(
    context: &'ctx dyn ViewContext,
    config: RenderConfig,
    options: &ScriptTagOptions,
    block: F,
) -> Result<String>
where
    F: FnOnce(&mut PageGenerator<'ctx>) -> Result<()>,
{
    let javascript = update_page(context, config, block)?;
    Ok(javascript_tag(&javascript, options))
}
