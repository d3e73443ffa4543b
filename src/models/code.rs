//! Code pane content.

use super::listing::extension_of;

/// Highlighting grammar identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grammar(String);

impl Grammar {
    /// Grammar for a filename: `tex` maps to `latex`, every other extension
    /// maps to itself. Names without an extension use the whole name.
    pub fn for_file(name: &str) -> Self {
        let ext = extension_of(name).unwrap_or_else(|| name.to_lowercase());
        match ext.as_str() {
            "tex" => Self("latex".to_string()),
            _ => Self(ext),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// CSS class carried by the `<code>` element.
    pub fn class_name(&self) -> String {
        format!("language-{}", self.0)
    }
}

/// What the code area currently shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CodeContent {
    /// Nothing loaded yet
    Empty,
    /// A fetched source file
    Source {
        name: String,
        text: String,
        grammar: Grammar,
    },
    /// Inline message in place of a file (errors, empty listing)
    Message(String),
}

impl CodeContent {
    pub fn source(name: &str, text: String) -> Self {
        Self::Source {
            name: name.to_string(),
            grammar: Grammar::for_file(name),
            text,
        }
    }

    /// Raw text as it would appear in the code element.
    pub fn text(&self) -> &str {
        match self {
            Self::Empty => "",
            Self::Source { text, .. } => text,
            Self::Message(msg) => msg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grammar_mapping() {
        assert_eq!(Grammar::for_file("report.tex").as_str(), "latex");
        assert_eq!(Grammar::for_file("refs.bib").as_str(), "bib");
        assert_eq!(Grammar::for_file("notes.txt").as_str(), "txt");
        assert_eq!(Grammar::for_file("STYLE.STY").as_str(), "sty");
        assert_eq!(Grammar::for_file("Main.TEX").as_str(), "latex");
    }

    #[test]
    fn test_grammar_class_name() {
        assert_eq!(Grammar::for_file("a.tex").class_name(), "language-latex");
        assert_eq!(Grammar::for_file("a.cls").class_name(), "language-cls");
    }

    #[test]
    fn test_content_text() {
        let content = CodeContent::source("a.tex", "\\section{A}".to_string());
        assert_eq!(content.text(), "\\section{A}");
        assert_eq!(CodeContent::Message("// oops".to_string()).text(), "// oops");
        assert_eq!(CodeContent::Empty.text(), "");
    }
}
