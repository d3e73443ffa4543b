//! Project identity derived from the page location.

/// The project being viewed.
///
/// The identifier is taken verbatim from the page path; no validation is
/// performed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
    id: String,
    base_path: String,
}

impl Project {
    /// Create a project whose files live under `{projects_base}/{id}`.
    pub fn new(id: impl Into<String>, projects_base: &str) -> Self {
        let id = id.into();
        let base_path = format!("{}/{}", projects_base.trim_end_matches('/'), id);
        Self { id, base_path }
    }

    /// Build a project from a page path such as `/project/{id}/...`.
    ///
    /// The identifier is the third `/`-separated segment; an absent segment
    /// yields an empty identifier.
    pub fn from_pathname(pathname: &str, projects_base: &str) -> Self {
        let id = pathname.split('/').nth(2).unwrap_or_default();
        Self::new(id, projects_base)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// URL of the directory listing endpoint.
    pub fn listing_url(&self) -> String {
        format!("{}/", self.base_path)
    }

    /// URL of a file inside the project.
    pub fn file_url(&self, filename: &str) -> String {
        format!("{}/{}", self.base_path, filename)
    }

    /// External editor URL; every `{id}` in the template is substituted.
    pub fn editor_url(&self, template: &str) -> String {
        template.replace("{id}", &self.id)
    }
}
