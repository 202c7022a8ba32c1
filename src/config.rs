use log::Level;

/// Id of the element in `index.html` the app is rendered into.
pub const MOUNT_ID: &str = "root";

/// Vertical offset (px) past which the nav bar turns opaque.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Below this viewport width the nav collapses into the burger menu.
pub const MOBILE_BREAKPOINT_PX: u32 = 768;

pub const BOOKSTORE_URL: &str = "https://www.amazon.com/dp/B0FTXMPLJL";

pub const SITE_TITLE: &str = "Code of Survival : Startup Surge";

// Anchor ids of the landing page sections, top to bottom.
pub const STORY_ID: &str = "the-story";
pub const CHARACTERS_ID: &str = "characters";
pub const INNOVATION_ID: &str = "innovation";
pub const BOOK_CLUB_ID: &str = "book-club";
pub const AUTHOR_ID: &str = "author";

/// In-page link to the section with the given id.
pub fn anchor_href(id: &str) -> String {
    format!("#{}", id)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavSection {
    pub label: &'static str,
    pub anchor: &'static str,
}

impl NavSection {
    pub fn href(&self) -> String {
        anchor_href(self.anchor)
    }
}

pub const NAV_SECTIONS: &[NavSection] = &[
    NavSection { label: "The Story", anchor: STORY_ID },
    NavSection { label: "Characters", anchor: CHARACTERS_ID },
    NavSection { label: "Innovation", anchor: INNOVATION_ID },
    NavSection { label: "Book Club", anchor: BOOK_CLUB_ID },
    NavSection { label: "Author", anchor: AUTHOR_ID },
];

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while developing with `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_follow_labels() {
        for section in NAV_SECTIONS {
            let expected = section.label.to_lowercase().replace(' ', "-");
            assert_eq!(section.anchor, expected);
        }
        assert_eq!(NAV_SECTIONS[3].href(), "#book-club");
    }

    #[test]
    fn section_ids_are_distinct() {
        for (i, a) in NAV_SECTIONS.iter().enumerate() {
            for b in &NAV_SECTIONS[i + 1..] {
                assert_ne!(a.anchor, b.anchor);
            }
        }
    }
}
