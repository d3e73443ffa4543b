//! Sidebar selection state.

/// Ordered source files with at most one active entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sidebar {
    files: Vec<String>,
    active: Option<usize>,
}

impl Sidebar {
    /// Replace the file list. The first file (if any) becomes active.
    pub fn new(files: Vec<String>) -> Self {
        let active = (!files.is_empty()).then_some(0);
        Self { files, active }
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    #[cfg(test)]
    fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Name of the active file.
    pub fn active(&self) -> Option<&str> {
        self.active.map(|i| self.files[i].as_str())
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Mark `index` as the only active entry and return its filename.
    ///
    /// Re-activating the current entry is allowed and returns it again.
    /// Out-of-range indices leave the selection unchanged.
    pub fn activate(&mut self, index: usize) -> Option<&str> {
        let name = self.files.get(index)?;
        self.active = Some(index);
        Some(name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sidebar() -> Sidebar {
        Sidebar::new(vec![
            "main.tex".to_string(),
            "refs.bib".to_string(),
            "style.sty".to_string(),
        ])
    }

    fn active_count(sidebar: &Sidebar) -> usize {
        (0..sidebar.files().len())
            .filter(|&i| sidebar.is_active(i))
            .count()
    }

    #[test]
    fn test_first_entry_active_by_default() {
        let sidebar = sidebar();
        assert_eq!(sidebar.active(), Some("main.tex"));
        assert_eq!(active_count(&sidebar), 1);
    }

    #[test]
    fn test_empty_sidebar_has_no_active() {
        let sidebar = Sidebar::new(Vec::new());
        assert_eq!(sidebar.active(), None);
        assert_eq!(active_count(&sidebar), 0);
    }

    #[test]
    fn test_single_active_after_clicks() {
        let mut sidebar = sidebar();
        for index in [2, 1, 1, 0, 2, 2] {
            sidebar.activate(index);
            assert_eq!(active_count(&sidebar), 1);
            assert_eq!(sidebar.active_index(), Some(index));
        }
    }

    #[test]
    fn test_reactivate_returns_same_file() {
        let mut sidebar = sidebar();
        assert_eq!(sidebar.activate(0), Some("main.tex"));
        assert_eq!(sidebar.activate(0), Some("main.tex"));
        assert_eq!(active_count(&sidebar), 1);
    }

    #[test]
    fn test_out_of_range_keeps_selection() {
        let mut sidebar = sidebar();
        sidebar.activate(1);
        assert_eq!(sidebar.activate(9), None);
        assert_eq!(sidebar.active(), Some("refs.bib"));
    }
}
