//! HTML sanitization applied to every user-supplied text field on the way out.

use ammonia::Builder;
use std::sync::LazyLock;

/// Ammonia defaults, except `<script>`/`<style>` are unwrapped instead of dropped
/// wholesale: the tag goes away, its text stays as inert, escaped text.
static CLEANER: LazyLock<Builder<'static>> = LazyLock::new(|| {
    let mut builder = Builder::default();
    builder.rm_clean_content_tags(&["script", "style"]);
    builder
});

/// Neutralizes markup in `text`. Re-sanitizing the output yields the same string.
pub fn sanitize(text: &str) -> String {
    CLEANER.clean(text).to_string()
}
