//! Page document - the title and the replaceable containers of a page

use indexmap::IndexMap;

use crate::helpers::html_escape;

/// A page with a title and named containers whose markup can be replaced
///
/// Layouts reference containers with `{{ <id> }}` and the title with
/// `{{ title }}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    title: String,
    containers: IndexMap<String, String>,
}

impl Document {
    /// Create a document with no containers
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            containers: IndexMap::new(),
        }
    }

    /// Add an empty container
    pub fn with_container(mut self, id: &str) -> Self {
        self.containers.insert(id.to_string(), String::new());
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn has_container(&self, id: &str) -> bool {
        self.containers.contains_key(id)
    }

    /// Current inner markup of a container
    pub fn inner_html(&self, id: &str) -> Option<&str> {
        self.containers.get(id).map(String::as_str)
    }

    /// Replace the inner markup of a container
    ///
    /// Returns `false` when the document has no such container.
    pub fn set_inner_html(&mut self, id: &str, html: String) -> bool {
        match self.containers.get_mut(id) {
            Some(slot) => {
                *slot = html;
                true
            }
            None => false,
        }
    }

    /// Fill a layout with the title and container markup
    ///
    /// Slots are substituted in a single pass over the layout, so text
    /// inserted into one slot is never scanned for further slots. Unknown
    /// slots are kept as written.
    pub fn render(&self, layout: &str) -> String {
        let mut html = String::with_capacity(layout.len());
        let mut rest = layout;

        while let Some(start) = rest.find("{{ ") {
            html.push_str(&rest[..start]);
            let after = &rest[start + 3..];
            let Some(end) = after.find(" }}") else {
                rest = &rest[start..];
                break;
            };
            let name = &after[..end];
            match self.slot(name) {
                Some(value) => html.push_str(&value),
                None => html.push_str(&rest[start..start + 3 + end + 3]),
            }
            rest = &after[end + 3..];
        }

        html.push_str(rest);
        html
    }

    fn slot(&self, name: &str) -> Option<String> {
        if name == "title" {
            return Some(html_escape(&self.title));
        }
        self.containers.get(name).cloned()
    }
}
