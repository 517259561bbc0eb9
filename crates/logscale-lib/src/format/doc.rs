//! Document IR for the layout engine.
//!
//! A [`Doc`] describes text together with the places where it may break.
//! Breaks inside a [`Doc::Group`] are decided together: either the whole group
//! is printed flat or every `Line`/`SoftLine` directly in it becomes a newline.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Doc {
    Text(String),
    /// A single space. Dropped at the start of a line and after another space.
    Space,
    /// Space when flat, newline when broken.
    Line,
    /// Nothing when flat, newline when broken.
    SoftLine,
    /// Always a newline; forces every enclosing group to break.
    HardLine,
    /// `// ...` comment. Ends the line it is on.
    LineComment(String),
    Concat(Vec<Doc>),
    Group(Box<Doc>),
    Indent(Box<Doc>),
}

impl Doc {
    pub fn nil() -> Doc {
        Doc::Concat(Vec::new())
    }

    pub fn text(text: impl Into<String>) -> Doc {
        Doc::Text(text.into())
    }

    pub fn space() -> Doc {
        Doc::Space
    }

    pub fn line() -> Doc {
        Doc::Line
    }

    pub fn softline() -> Doc {
        Doc::SoftLine
    }

    pub fn hardline() -> Doc {
        Doc::HardLine
    }

    pub fn line_comment(text: impl Into<String>) -> Doc {
        Doc::LineComment(text.into())
    }

    pub fn concat(docs: impl IntoIterator<Item = Doc>) -> Doc {
        Doc::Concat(docs.into_iter().collect())
    }

    pub fn group(doc: Doc) -> Doc {
        Doc::Group(Box::new(doc))
    }

    pub fn indent(doc: Doc) -> Doc {
        Doc::Indent(Box::new(doc))
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Doc::Concat(docs) if docs.iter().all(Doc::is_nil))
    }
}
