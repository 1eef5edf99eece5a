//! Fixed lookup tables shared by the passes and the metadata injector.
//!
//! Build one [`Tables`] at startup and hand it out by reference. Nothing
//! mutates it afterwards, so it can be shared across threads converting
//! different files.

use std::collections::HashMap;

/// Home page title. A document titled this way gets [`HOME_TITLE`] and the root slug.
pub const HOME_SENTINEL: &str = "Stylelint";

/// Title given to the home page in place of [`HOME_SENTINEL`].
pub const HOME_TITLE: &str = "A mighty CSS linter that helps you avoid errors and enforce conventions";

pub const HOME_SLUG: &str = "/";

#[derive(Debug, Clone)]
pub struct Tables {
    admonitions: HashMap<&'static str, &'static str>,
    symbols: HashMap<&'static str, &'static str>,
    sidebar_labels: HashMap<&'static str, &'static str>,
}

impl Tables {
    pub fn standard() -> Self {
        Tables {
            admonitions: HashMap::from([("Note", "note"), ("Warning", "caution")]),
            symbols: HashMap::from([("✅", "Standard"), ("🔧", "Autofixable")]),
            sidebar_labels: HashMap::from([(HOME_SENTINEL, "Home")]),
        }
    }

    /// Admonition kind for a bold label such as `Note`.
    pub fn admonition_kind(&self, label: &str) -> Option<&'static str> {
        self.admonitions.get(label).copied()
    }

    /// Readable label for a status symbol.
    pub fn symbol_label(&self, symbol: &str) -> Option<&'static str> {
        self.symbols.get(symbol).copied()
    }

    pub fn sidebar_label(&self, title: &str) -> Option<&'static str> {
        self.sidebar_labels.get(title).copied()
    }
}

impl Default for Tables {
    fn default() -> Self {
        Self::standard()
    }
}
