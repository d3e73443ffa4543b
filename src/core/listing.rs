//! Directory index parsing and file classification.
//!
//! The listing endpoint returns an HTML index (as produced by Python's
//! `http.server`, nginx `autoindex`, ...). Every hyperlink target is a
//! candidate filename relative to the project base path.

use std::sync::OnceLock;

use regex::Regex;

use crate::models::{ClassifiedFiles, DirectoryEntry, FileKind};

/// Matches `<a ... href=...>` and captures the target in one of three
/// groups: double-quoted, single-quoted or unquoted.
///
/// `href` must start an attribute name, so `data-href` is not taken for it.
fn anchor_regex() -> &'static Regex {
    static ANCHOR: OnceLock<Regex> = OnceLock::new();
    ANCHOR.get_or_init(|| {
        Regex::new(r#"(?is)<a\s(?:[^>]*?[\s"'])?href\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#)
            .expect("anchor pattern is valid")
    })
}

/// Decode the few entities a directory index escapes in attributes.
fn decode_entities(raw: &str) -> String {
    if !raw.contains('&') {
        return raw.to_string();
    }
    raw.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&amp;", "&")
}

/// Extract hyperlink targets from a directory index, in document order.
///
/// Anchors without a target, or with an empty one, are skipped.
pub fn parse_listing(html: &str) -> Vec<DirectoryEntry> {
    anchor_regex()
        .captures_iter(html)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3)))
        .map(|m| decode_entities(m.as_str()))
        .filter(|href| !href.is_empty())
        .map(DirectoryEntry::new)
        .collect()
}

/// Classify a single entry by its extension (case-insensitive).
///
/// Directories and unrecognized extensions yield `None`.
pub fn classify_entry(entry: &DirectoryEntry, source_extensions: &[String]) -> Option<FileKind> {
    if entry.is_directory() {
        return None;
    }
    let ext = entry.extension()?;
    if source_extensions.iter().any(|s| s.eq_ignore_ascii_case(&ext)) {
        Some(FileKind::Source)
    } else if ext == "pdf" {
        Some(FileKind::Pdf)
    } else {
        None
    }
}

/// Split listing entries into source and PDF files, preserving order.
pub fn classify(
    entries: impl IntoIterator<Item = DirectoryEntry>,
    source_extensions: &[String],
) -> ClassifiedFiles {
    let mut files = ClassifiedFiles::default();
    for entry in entries {
        match classify_entry(&entry, source_extensions) {
            Some(FileKind::Source) => files.sources.push(entry.into_name()),
            Some(FileKind::Pdf) => files.pdfs.push(entry.into_name()),
            None => {}
        }
    }
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extensions() -> Vec<String> {
        ["tex", "bib", "cls", "sty", "txt"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    fn names(entries: &[DirectoryEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name()).collect()
    }

    const PY_INDEX: &str = r#"<!DOCTYPE HTML>
<html lang="en">
<head><title>Directory listing for /projects/abc/</title></head>
<body>
<h1>Directory listing for /projects/abc/</h1>
<hr>
<ul>
<li><a href="../">../</a></li>
<li><a href="figures/">figures/</a></li>
<li><a href="main.tex">main.tex</a></li>
<li><a href="refs.bib">refs.bib</a></li>
<li><a href="output.pdf">output.pdf</a></li>
<li><a href="notes.md">notes.md</a></li>
</ul>
<hr>
</body>
</html>"#;

    #[test]
    fn test_parse_listing_preserves_order() {
        let entries = parse_listing(PY_INDEX);
        assert_eq!(
            names(&entries),
            vec!["../", "figures/", "main.tex", "refs.bib", "output.pdf", "notes.md"]
        );
    }

    #[test]
    fn test_parse_listing_quoting_styles() {
        let html = r#"<A HREF='a.tex'>a</A> <a class="x" href=b.bib>b</a> <a name="top">t</a> <a href="">e</a>"#;
        assert_eq!(names(&parse_listing(html)), vec!["a.tex", "b.bib"]);
    }

    #[test]
    fn test_parse_listing_ignores_prefixed_href_attributes() {
        let html = r#"<a data-href="ignored.txt" href="main.tex">main.tex</a>
<a class="file"href='refs.bib'>refs.bib</a>
<a data-href="only.txt">no target</a>"#;
        assert_eq!(names(&parse_listing(html)), vec!["main.tex", "refs.bib"]);
    }

    #[test]
    fn test_parse_listing_decodes_entities() {
        let html = r#"<a href="a&amp;b.tex">a&amp;b.tex</a>"#;
        assert_eq!(names(&parse_listing(html)), vec!["a&b.tex"]);
    }

    #[test]
    fn test_classify_skips_directories() {
        let files = classify(parse_listing(PY_INDEX), &extensions());
        assert_eq!(files.sources, vec!["main.tex", "refs.bib"]);
        assert_eq!(files.pdfs, vec!["output.pdf"]);
        assert!(!files.sources.iter().any(|f| f.ends_with('/')));
        assert!(!files.pdfs.iter().any(|f| f.ends_with('/')));
    }

    #[test]
    fn test_classify_case_insensitive() {
        let entries = ["REPORT.TEX", "report.tex", "Main.PDF", "style.Sty"]
            .into_iter()
            .map(DirectoryEntry::new);
        let files = classify(entries, &extensions());
        assert_eq!(files.sources, vec!["REPORT.TEX", "report.tex", "style.Sty"]);
        assert_eq!(files.pdfs, vec!["Main.PDF"]);
    }

    #[test]
    fn test_classify_drops_unknown() {
        let exts = extensions();
        assert_eq!(classify_entry(&DirectoryEntry::new("notes.md"), &exts), None);
        assert_eq!(classify_entry(&DirectoryEntry::new("Makefile"), &exts), None);
        assert_eq!(classify_entry(&DirectoryEntry::new("tex/"), &exts), None);
        assert_eq!(classify_entry(&DirectoryEntry::new("pdf.pdf/"), &exts), None);
        assert_eq!(
            classify_entry(&DirectoryEntry::new("a.txt"), &exts),
            Some(FileKind::Source)
        );
    }
}
