//! Directory index pages.
//!
//! Same shape as the index written by Python's `http.server`: entries sorted
//! case-insensitively, directories suffixed with `/`, link targets
//! percent-encoded and labels HTML-escaped.

use std::fs;
use std::io;
use std::path::Path;

/// One row of a directory index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub name: String,
    pub is_dir: bool,
}

impl IndexEntry {
    fn href(&self) -> String {
        let encoded = urlencoding::encode(&self.name);
        if self.is_dir {
            format!("{}/", encoded)
        } else {
            encoded.into_owned()
        }
    }

    fn label(&self) -> String {
        if self.is_dir {
            format!("{}/", self.name)
        } else {
            self.name.clone()
        }
    }
}

/// Read the entries of `dir`, sorted case-insensitively.
pub fn read_entries(dir: &Path) -> io::Result<Vec<IndexEntry>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        entries.push(IndexEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            is_dir: entry.file_type()?.is_dir(),
        });
    }
    entries.sort_by_key(|e| e.name.to_lowercase());
    Ok(entries)
}

/// Render the index page for `url_path`.
pub fn render_index(url_path: &str, entries: &[IndexEntry]) -> String {
    let title = escape_html(url_path);
    let mut html = format!(
        "<!DOCTYPE HTML>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Directory listing for {title}</title>\n</head>\n<body>\n\
         <h1>Directory listing for {title}</h1>\n<hr>\n<ul>\n"
    );
    for entry in entries {
        html.push_str(&format!(
            "<li><a href=\"{}\">{}</a></li>\n",
            escape_html(&entry.href()),
            escape_html(&entry.label())
        ));
    }
    html.push_str("</ul>\n<hr>\n</body>\n</html>\n");
    html
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn entry(name: &str, is_dir: bool) -> IndexEntry {
        IndexEntry {
            name: name.to_string(),
            is_dir,
        }
    }

    #[test]
    fn test_read_entries_sorted_case_insensitive() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("refs.bib"), "").unwrap();
        fs::write(temp.path().join("Main.tex"), "").unwrap();
        fs::create_dir(temp.path().join("figures")).unwrap();

        let entries = read_entries(temp.path()).unwrap();
        assert_eq!(
            entries,
            vec![
                entry("figures", true),
                entry("Main.tex", false),
                entry("refs.bib", false),
            ]
        );
    }

    #[test]
    fn test_render_index_links() {
        let html = render_index(
            "/projects/abc/",
            &[
                entry("figures", true),
                entry("main.tex", false),
                entry("my notes.txt", false),
            ],
        );
        assert!(html.contains("<title>Directory listing for /projects/abc/</title>"));
        assert!(html.contains("<li><a href=\"figures/\">figures/</a></li>"));
        assert!(html.contains("<li><a href=\"main.tex\">main.tex</a></li>"));
        assert!(html.contains("<li><a href=\"my%20notes.txt\">my notes.txt</a></li>"));
        assert!(!html.contains("../"));
    }

    #[test]
    fn test_render_index_escapes_labels() {
        let html = render_index("/projects/<x>/", &[entry("a&b.tex", false)]);
        assert!(html.contains("Directory listing for /projects/&lt;x&gt;/"));
        assert!(html.contains("<a href=\"a%26b.tex\">a&amp;b.tex</a>"));
    }
}
