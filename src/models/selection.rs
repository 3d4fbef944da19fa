//! The currently selected document.

use docshelf_core::ViewKind;

/// A document chosen from the sidebar, ready for the viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Display name from the manifest.
    pub title: String,
    /// Content address handed to the viewer (relative path or remote URL).
    pub address: String,
    /// Which side of a dual-view entry this is.
    pub view: ViewKind,
    /// True when the entry also offers the other view.
    pub dual: bool,
}

impl Selection {
    pub fn new(title: impl Into<String>, address: impl Into<String>, view: ViewKind) -> Self {
        Self {
            title: title.into(),
            address: address.into(),
            view,
            dual: false,
        }
    }

    pub fn with_dual(mut self, dual: bool) -> Self {
        self.dual = dual;
        self
    }

    /// Title as shown in the viewer header. Dual-view entries get a
    /// suffix so the reader knows which rendition is on screen.
    pub fn display_title(&self) -> String {
        if !self.dual {
            return self.title.clone();
        }
        match self.view {
            ViewKind::Rendered => format!("{} (HTML)", self.title),
            ViewKind::Original => format!("{} (Raw)", self.title),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_view_title_is_unadorned() {
        let sel = Selection::new("Thiền định", "docs_raw/Talks/Thiền định.pdf", ViewKind::Original);
        assert_eq!(sel.display_title(), "Thiền định");
    }

    #[test]
    fn dual_view_titles_name_the_rendition() {
        let rendered = Selection::new("Notes", "docs_html/Notes.html", ViewKind::Rendered)
            .with_dual(true);
        assert_eq!(rendered.display_title(), "Notes (HTML)");

        let original = Selection::new("Notes", "docs_raw/Notes.pdf", ViewKind::Original)
            .with_dual(true);
        assert_eq!(original.display_title(), "Notes (Raw)");
    }
}
