//! Post model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category label for posts that don't declare one
pub const DEFAULT_CATEGORY: &str = "General";

/// Role label for authors that don't declare one
pub const DEFAULT_AUTHOR_ROLE: &str = "Colaborador";

/// A blog post as stored in `data/posts.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Identifier, unique within the source
    pub id: PostId,

    /// Post title
    pub title: String,

    /// Optional subtitle shown under the title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    /// Short excerpt for the listing
    #[serde(default)]
    pub description: String,

    /// Article body markup, rendered verbatim
    #[serde(default)]
    pub content: String,

    /// Cover image URL or path
    #[serde(default)]
    pub image: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Author display name
    #[serde(default)]
    pub author: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_role: Option<String>,

    /// Publication date, displayed as written
    #[serde(default)]
    pub date: String,
}

impl Post {
    /// Create a new post with minimal required fields
    pub fn new(id: impl Into<PostId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subtitle: None,
            description: String::new(),
            content: String::new(),
            image: String::new(),
            category: None,
            author: String::new(),
            author_image: None,
            author_role: None,
            date: String::new(),
        }
    }

    /// Category label, defaulted when absent
    pub fn category_label(&self) -> &str {
        present(&self.category).unwrap_or(DEFAULT_CATEGORY)
    }

    /// Author role label, defaulted when absent
    pub fn author_role_label(&self) -> &str {
        present(&self.author_role).unwrap_or(DEFAULT_AUTHOR_ROLE)
    }

    /// Subtitle, if set to something non-empty
    pub fn subtitle_text(&self) -> Option<&str> {
        present(&self.subtitle)
    }

    /// Author image, if set to something non-empty
    pub fn author_image_src(&self) -> Option<&str> {
        present(&self.author_image)
    }

    /// Find a post by identifier using loose matching
    pub fn find<'a>(posts: &'a [Post], id: &PostId) -> Option<&'a Post> {
        posts.iter().find(|p| p.id.loosely_matches(id))
    }
}

/// Empty strings in the data file count as missing
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Post identifier: data files use both numbers and strings
///
/// Matching is loose so that the numeric id `3` and the query string `"3"`
/// select the same post. A single declared id type per data file would make
/// this unnecessary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostId {
    Number(serde_json::Number),
    Text(String),
}

impl PostId {
    /// Compare two identifiers after coercing them to a common form
    ///
    /// Number vs. text compares numerically when the text parses as a number,
    /// otherwise both sides are compared by their canonical string form.
    /// Empty or blank text never matches a number, so `""` does not select
    /// the post with id `0`.
    pub fn loosely_matches(&self, other: &PostId) -> bool {
        match (self, other) {
            (PostId::Number(a), PostId::Number(b)) => number_value(a) == number_value(b),
            (PostId::Text(a), PostId::Text(b)) => a == b,
            (PostId::Number(n), PostId::Text(s)) | (PostId::Text(s), PostId::Number(n)) => {
                match s.trim().parse::<f64>() {
                    Ok(parsed) if !s.trim().is_empty() => number_value(n) == parsed,
                    _ => self.to_string() == other.to_string(),
                }
            }
        }
    }
}

fn number_value(n: &serde_json::Number) -> f64 {
    n.as_f64().unwrap_or(f64::NAN)
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostId::Text(s) => f.write_str(s),
            PostId::Number(n) => {
                if n.is_i64() || n.is_u64() {
                    write!(f, "{}", n)
                } else {
                    let v = number_value(n);
                    if v.is_finite() && v.fract() == 0.0 {
                        write!(f, "{:.0}", v)
                    } else {
                        write!(f, "{}", v)
                    }
                }
            }
        }
    }
}

impl From<&str> for PostId {
    fn from(s: &str) -> Self {
        PostId::Text(s.to_string())
    }
}

impl From<String> for PostId {
    fn from(s: String) -> Self {
        PostId::Text(s)
    }
}

impl From<i32> for PostId {
    fn from(n: i32) -> Self {
        PostId::Number(n.into())
    }
}

impl From<i64> for PostId {
    fn from(n: i64) -> Self {
        PostId::Number(n.into())
    }
}
