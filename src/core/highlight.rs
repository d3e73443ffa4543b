//! Syntax highlighting using syntect.
//!
//! Grammars are resolved from the identifier chosen by [`Grammar::for_file`]
//! (`latex`, `bib`, `sty`, ...). Output is HTML with inline styles, ready to
//! be placed inside the code pane.

use std::sync::OnceLock;

use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::{SyntaxReference, SyntaxSet};

use crate::config::viewer_config;
use crate::models::Grammar;

/// Global syntax highlighting resources (loaded once).
static SYNTECT: OnceLock<(SyntaxSet, Theme)> = OnceLock::new();

/// Syntax highlighter for the code pane.
pub struct Highlighter;

impl Highlighter {
    /// Initialize and get the global syntax/theme resources.
    fn init() -> (&'static SyntaxSet, &'static Theme) {
        let (syntaxes, theme) = SYNTECT.get_or_init(|| {
            let syntaxes = SyntaxSet::load_defaults_newlines();
            let theme_set = ThemeSet::load_defaults();
            let theme = theme_set
                .themes
                .get(&viewer_config().highlight.theme)
                .or_else(|| theme_set.themes.values().next())
                .cloned()
                .unwrap_or_default();
            (syntaxes, theme)
        });
        (syntaxes, theme)
    }

    /// Find the syntax for a grammar identifier, falling back to plain text.
    pub fn find_syntax(grammar: &Grammar) -> &'static SyntaxReference {
        let (syntaxes, _) = Self::init();
        syntaxes
            .find_syntax_by_token(grammar.as_str())
            .unwrap_or_else(|| syntaxes.find_syntax_plain_text())
    }

    /// Highlight `text` as HTML.
    ///
    /// Returns `None` when the highlighter fails; callers then show the raw
    /// text instead.
    pub fn highlight_html(text: &str, grammar: &Grammar) -> Option<String> {
        let (syntaxes, theme) = Self::init();
        let syntax = Self::find_syntax(grammar);
        match highlighted_html_for_string(text, syntaxes, syntax, theme) {
            Ok(html) => Some(html),
            Err(_err) => {
                #[cfg(target_arch = "wasm32")]
                web_sys::console::warn_1(
                    &format!("Highlighting as '{}' failed: {}", grammar.as_str(), _err).into(),
                );
                None
            }
        }
    }
}
