//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use comrak::{Options, markdown_to_html};

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Returns the content hash for main.css.
///
/// The hash is computed at build time from the CSS file content.
///
/// Usage in templates: `{{ ""|css_hash }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn css_hash(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<&'static str> {
    Ok(env!("CSS_HASH"))
}

/// Renders assistant Markdown to HTML. Raw HTML in the input is dropped.
///
/// Usage in templates: `{{ message.text|markdown|safe }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn markdown(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(render_markdown(&value.to_string()))
}

/// Render Markdown with GFM extensions and raw HTML suppressed.
#[must_use]
pub fn render_markdown(content: &str) -> String {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.render.r#unsafe = false;

    markdown_to_html(content, &options)
}
