//! HTML helper functions

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generate an image tag with extra attributes appended verbatim
///
/// # Examples
/// ```ignore
/// image_tag("img/a.png", "Cover", "post-image", "") // -> <img src="img/a.png" alt="Cover" class="post-image">
/// ```
pub fn image_tag(src: &str, alt: &str, class: &str, extra: &str) -> String {
    format!(
        r#"<img src="{}" alt="{}" class="{}"{}>"#,
        html_escape(src),
        html_escape(alt),
        class,
        extra
    )
}

/// Count elements in `html` carrying the given class
#[cfg(test)]
pub(crate) fn count_class(html: &str, class: &str) -> usize {
    html.matches(&format!(r#"class="{}""#, class)).count()
}
