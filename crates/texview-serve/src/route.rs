//! Request path resolution.
//!
//! Every path under `/project/` answers with the built viewer page. Other
//! paths are looked up in the public root first (where `projects/<id>/`
//! lives), then in the viewer's build output.

use std::path::{Path, PathBuf};

/// Path prefix of viewer pages (`/project/<id>`).
pub const VIEWER_PREFIX: &str = "/project/";

/// What a request path resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The viewer page.
    Viewer(PathBuf),
    /// A regular file.
    File(PathBuf),
    /// A generated index of `dir`, requested as `url_path` (ends with `/`).
    Index { dir: PathBuf, url_path: String },
    /// A directory requested without its trailing slash.
    Redirect(String),
    NotFound,
}

/// Directories the server answers from.
#[derive(Debug, Clone)]
pub struct Roots {
    /// Public root holding `projects/<id>/`.
    pub public: PathBuf,
    /// Trunk build output holding `index.html` and the wasm bundle.
    pub dist: PathBuf,
}

impl Roots {
    pub fn new(public: impl Into<PathBuf>, dist: impl Into<PathBuf>) -> Self {
        Self {
            public: public.into(),
            dist: dist.into(),
        }
    }

    /// Resolve the raw request target (path plus optional query).
    pub fn resolve(&self, raw_url: &str) -> Route {
        let raw_path = raw_url
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let Ok(path) = urlencoding::decode(raw_path) else {
            return Route::NotFound;
        };

        if path.starts_with(VIEWER_PREFIX) {
            return Route::Viewer(self.dist.join("index.html"));
        }

        let Some(relative) = relative_path(&path) else {
            return Route::NotFound;
        };

        [&self.public, &self.dist]
            .into_iter()
            .map(|root| root.join(&relative))
            .find(|candidate| candidate.exists())
            .map(|found| resolve_existing(found, &path, raw_path))
            .unwrap_or(Route::NotFound)
    }
}

/// Turn a decoded URL path into a relative filesystem path.
///
/// Parent (`..`) segments are refused.
fn relative_path(path: &str) -> Option<PathBuf> {
    let mut relative = PathBuf::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => return None,
            _ if segment.contains('\\') => return None,
            _ => relative.push(segment),
        }
    }
    Some(relative)
}

fn resolve_existing(found: PathBuf, url_path: &str, raw_path: &str) -> Route {
    if !found.is_dir() {
        return Route::File(found);
    }
    if !url_path.ends_with('/') {
        return Route::Redirect(format!("{}/", raw_path));
    }
    let index = found.join("index.html");
    if index.is_file() {
        Route::File(index)
    } else {
        Route::Index {
            dir: found,
            url_path: url_path.to_string(),
        }
    }
}

/// Content type by file extension.
pub fn content_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "html" | "htm" => "text/html; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "js" => "application/javascript",
        "wasm" => "application/wasm",
        "json" => "application/json",
        "pdf" => "application/pdf",
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "tex" | "bib" | "cls" | "sty" | "txt" | "log" | "md" => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn fixture() -> (TempDir, Roots) {
        let temp = TempDir::new().unwrap();
        let public = temp.path().join("public");
        let dist = temp.path().join("dist");
        fs::create_dir_all(public.join("projects/abc/figures")).unwrap();
        fs::create_dir_all(&dist).unwrap();
        fs::write(public.join("projects/abc/main.tex"), "\\documentclass{article}").unwrap();
        fs::write(public.join("projects/abc/my notes.txt"), "notes").unwrap();
        fs::write(dist.join("index.html"), "<div id=\"app\"></div>").unwrap();
        fs::write(dist.join("texview-1a2b.wasm"), [0u8, 97, 115, 109]).unwrap();
        let roots = Roots::new(public, dist);
        (temp, roots)
    }

    #[test]
    fn test_project_paths_serve_viewer() {
        let (_temp, roots) = fixture();
        let viewer = Route::Viewer(roots.dist.join("index.html"));
        assert_eq!(roots.resolve("/project/abc"), viewer);
        assert_eq!(roots.resolve("/project/abc/"), viewer);
        assert_eq!(roots.resolve("/project/abc/main.tex?x=1"), viewer);
    }

    #[test]
    fn test_project_directory_is_indexed() {
        let (_temp, roots) = fixture();
        assert_eq!(
            roots.resolve("/projects/abc/"),
            Route::Index {
                dir: roots.public.join("projects/abc"),
                url_path: "/projects/abc/".to_string(),
            }
        );
    }

    #[test]
    fn test_directory_without_slash_redirects() {
        let (_temp, roots) = fixture();
        assert_eq!(
            roots.resolve("/projects/abc"),
            Route::Redirect("/projects/abc/".to_string())
        );
    }

    #[test]
    fn test_files_and_decoding() {
        let (_temp, roots) = fixture();
        assert_eq!(
            roots.resolve("/projects/abc/main.tex"),
            Route::File(roots.public.join("projects/abc/main.tex"))
        );
        assert_eq!(
            roots.resolve("/projects/abc/my%20notes.txt"),
            Route::File(roots.public.join("projects/abc/my notes.txt"))
        );
        assert_eq!(
            roots.resolve("/texview-1a2b.wasm"),
            Route::File(roots.dist.join("texview-1a2b.wasm"))
        );
    }

    #[test]
    fn test_missing_and_parent_paths() {
        let (_temp, roots) = fixture();
        assert_eq!(roots.resolve("/projects/abc/missing.tex"), Route::NotFound);
        assert_eq!(roots.resolve("/projects/../dist/index.html"), Route::NotFound);
        assert_eq!(roots.resolve("/projects/%2e%2e/dist/index.html"), Route::NotFound);
    }

    #[test]
    fn test_content_types() {
        assert_eq!(content_type(Path::new("a.wasm")), "application/wasm");
        assert_eq!(content_type(Path::new("Main.PDF")), "application/pdf");
        assert_eq!(
            content_type(Path::new("refs.bib")),
            "text/plain; charset=utf-8"
        );
        assert_eq!(
            content_type(Path::new("Makefile")),
            "application/octet-stream"
        );
    }
}
