//! Directory listing types.

/// A filename taken from a hyperlink target in the directory index.
///
/// The name is kept exactly as the listing wrote it (no percent-decoding),
/// so it can be appended to the project base path unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectoryEntry(String);

impl DirectoryEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// `../` and any name ending in `/` refer to directories.
    pub fn is_directory(&self) -> bool {
        self.0 == "../" || self.0.ends_with('/')
    }

    /// Lowercased text after the last `.`, if any.
    pub fn extension(&self) -> Option<String> {
        extension_of(&self.0)
    }

    pub fn into_name(self) -> String {
        self.0
    }
}

/// Lowercased extension of a filename (text after the last `.`).
pub fn extension_of(name: &str) -> Option<String> {
    name.rsplit_once('.').map(|(_, ext)| ext.to_lowercase())
}

/// Kind of a listed file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    /// Text shown in the code pane (tex, bib, cls, sty, txt)
    Source,
    /// Compiled output shown in the preview pane
    Pdf,
}

/// Source and PDF files of a project, each in listing order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassifiedFiles {
    pub sources: Vec<String>,
    pub pdfs: Vec<String>,
}

impl ClassifiedFiles {
    /// Pick the PDF to preview.
    ///
    /// Each name in `preference` is tried in order (case-insensitive), then
    /// the first PDF in listing order. Returns `None` when there are no PDFs.
    pub fn select_pdf(&self, preference: &[String]) -> Option<&str> {
        preference
            .iter()
            .find_map(|wanted| {
                self.pdfs
                    .iter()
                    .find(|name| name.eq_ignore_ascii_case(wanted))
            })
            .or_else(|| self.pdfs.first())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preference() -> Vec<String> {
        vec!["output.pdf".to_string(), "main.pdf".to_string()]
    }

    fn pdfs(names: &[&str]) -> ClassifiedFiles {
        ClassifiedFiles {
            sources: Vec::new(),
            pdfs: names.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_directory_entries() {
        assert!(DirectoryEntry::new("../").is_directory());
        assert!(DirectoryEntry::new("figures/").is_directory());
        assert!(!DirectoryEntry::new("main.tex").is_directory());
    }

    #[test]
    fn test_extension() {
        assert_eq!(
            DirectoryEntry::new("REPORT.TEX").extension().as_deref(),
            Some("tex")
        );
        assert_eq!(
            DirectoryEntry::new("archive.tar.gz").extension().as_deref(),
            Some("gz")
        );
        assert_eq!(DirectoryEntry::new("Makefile").extension(), None);
    }

    #[test]
    fn test_pdf_fallback_order() {
        let pref = preference();
        assert_eq!(
            pdfs(&["a.pdf", "output.pdf", "main.pdf"]).select_pdf(&pref),
            Some("output.pdf")
        );
        assert_eq!(pdfs(&["a.pdf", "main.pdf"]).select_pdf(&pref), Some("main.pdf"));
        assert_eq!(pdfs(&["a.pdf"]).select_pdf(&pref), Some("a.pdf"));
        assert_eq!(pdfs(&[]).select_pdf(&pref), None);
    }

    #[test]
    fn test_pdf_preference_is_case_insensitive() {
        let pref = preference();
        assert_eq!(
            pdfs(&["a.pdf", "Main.PDF", "OUTPUT.pdf"]).select_pdf(&pref),
            Some("OUTPUT.pdf")
        );
    }
}
