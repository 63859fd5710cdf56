//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode` - safe characters that work in all terminals
//! - `IconMode::NerdFonts` - Nerd Font glyphs (requires a Nerd Font)

use formview_app::config::IconMode;

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Caret of a collapsed group
    pub fn caret_right(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0da}", // nf-fa-caret_right
            IconMode::Unicode => "\u{25b8}",   // ▸
        }
    }

    /// Caret of an expanded group
    pub fn caret_down(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0d7}", // nf-fa-caret_down
            IconMode::Unicode => "\u{25be}",   // ▾
        }
    }

    pub fn document(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f15c}", // nf-fa-file_text
            IconMode::Unicode => "\u{2261}",   // ≡
        }
    }

    pub fn refresh(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f021}", // nf-fa-refresh
            IconMode::Unicode => "\u{21bb}",   // ↻
        }
    }

    pub fn alert(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f071}", // nf-fa-warning
            IconMode::Unicode => "\u{26a0}",   // ⚠
        }
    }
}
