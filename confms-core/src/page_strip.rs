//! Render model for the pagination control.
//!
//! The control is pure: the same inputs always produce the same
//! [`ControlModel`]. Front-ends turn the model into widgets or text and map
//! button presses back to page numbers through [`NavButton::press`].

use crate::pagination::PageSlice;
use itertools::Itertools;
use std::fmt;

/// Pages always shown on each side of the current page
pub const WINDOW_RADIUS: usize = 2;

const DEFAULT_ITEM_NAME: &str = "items";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationControl {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub items_per_page: usize,
    pub item_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlModel {
    pub info: InfoLine,
    pub first: NavButton,
    pub prev: NavButton,
    pub next: NavButton,
    pub last: NavButton,
    pub strip: Vec<StripEntry>,
}

/// "Showing X-Y of Z items"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoLine {
    pub first_shown: usize,
    pub last_shown: usize,
    pub total_items: usize,
    pub item_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavButton {
    pub target: usize,
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripEntry {
    Page { number: usize, active: bool },
    Ellipsis,
}

impl PaginationControl {
    pub fn new(
        current_page: usize,
        total_pages: usize,
        total_items: usize,
        items_per_page: usize,
    ) -> Self {
        Self {
            current_page,
            total_pages,
            total_items,
            items_per_page,
            item_name: DEFAULT_ITEM_NAME.to_string(),
        }
    }

    pub fn for_page<T>(page: &PageSlice<'_, T>, item_name: impl Into<String>) -> Self {
        Self {
            current_page: page.current_page,
            total_pages: page.total_pages,
            total_items: page.total_items,
            items_per_page: page.items_per_page,
            item_name: item_name.into(),
        }
    }

    pub fn with_item_name(mut self, item_name: impl Into<String>) -> Self {
        self.item_name = item_name.into();
        self
    }

    /// Returns `None` when there is nothing to paginate
    pub fn render(&self) -> Option<ControlModel> {
        if self.total_items == 0 {
            return None;
        }

        let current = self.current_page;
        let on_first = current == 1;
        let on_last = current == self.total_pages;

        let start_index = current.saturating_sub(1).saturating_mul(self.items_per_page);
        let info = InfoLine {
            first_shown: start_index + 1,
            last_shown: start_index
                .saturating_add(self.items_per_page)
                .min(self.total_items),
            total_items: self.total_items,
            item_name: self.item_name.clone(),
        };

        Some(ControlModel {
            info,
            first: NavButton::new(1, !on_first),
            prev: NavButton::new(current.saturating_sub(1), !on_first),
            next: NavButton::new(current + 1, !on_last),
            last: NavButton::new(self.total_pages, !on_last),
            strip: build_strip(current, self.total_pages),
        })
    }
}

impl NavButton {
    fn new(target: usize, enabled: bool) -> Self {
        Self { target, enabled }
    }

    /// The page to switch to, if the button can be pressed
    pub fn press(&self) -> Option<usize> {
        self.enabled.then_some(self.target)
    }
}

impl StripEntry {
    fn page(number: usize, current_page: usize) -> Self {
        StripEntry::Page {
            number,
            active: number == current_page,
        }
    }

    pub fn press(&self) -> Option<usize> {
        match self {
            StripEntry::Page { number, .. } => Some(*number),
            StripEntry::Ellipsis => None,
        }
    }
}

impl fmt::Display for InfoLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Showing {}-{} of {} {}",
            self.first_shown, self.last_shown, self.total_items, self.item_name
        )
    }
}

/// First page, last page, and the window around the current page, ascending
pub fn page_numbers(current_page: usize, total_pages: usize) -> Vec<usize> {
    (1..=total_pages)
        .filter(|&page| {
            page == 1 || page == total_pages || page.abs_diff(current_page) <= WINDOW_RADIUS
        })
        .collect()
}

/// Page buttons with a single ellipsis wherever consecutive kept pages skip numbers
pub fn build_strip(current_page: usize, total_pages: usize) -> Vec<StripEntry> {
    let pages = page_numbers(current_page, total_pages);
    let mut strip = Vec::with_capacity(pages.len() + 2);

    if let Some(&first) = pages.first() {
        strip.push(StripEntry::page(first, current_page));
    }
    for (prev, page) in pages.iter().copied().tuple_windows() {
        if page - prev > 1 {
            strip.push(StripEntry::Ellipsis);
        }
        strip.push(StripEntry::page(page, current_page));
    }

    strip
}

/// Page numbers separated by spaces, the active page in brackets
pub fn strip_text(strip: &[StripEntry]) -> String {
    strip
        .iter()
        .map(|entry| match entry {
            StripEntry::Page { number, active: true } => format!("[{}]", number),
            StripEntry::Page { number, .. } => number.to_string(),
            StripEntry::Ellipsis => "…".to_string(),
        })
        .join(" ")
}

/// One-line rendering for terminals: `« ‹ 1 … 3 4 [5] 6 7 … 10 › »`
pub fn render_text(model: &ControlModel) -> String {
    let nav = |button: &NavButton, label: &str| {
        if button.enabled {
            label.to_string()
        } else {
            "-".to_string()
        }
    };

    format!(
        "{} {} {} {} {}",
        nav(&model.first, "«"),
        nav(&model.prev, "‹"),
        strip_text(&model.strip),
        nav(&model.next, "›"),
        nav(&model.last, "»")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages_in(strip: &[StripEntry]) -> Vec<usize> {
        strip.iter().filter_map(StripEntry::press).collect()
    }

    #[test]
    fn test_no_items_renders_nothing() {
        let control = PaginationControl::new(1, 0, 0, 20);
        assert_eq!(control.render(), None);
    }

    #[test]
    fn test_compressed_strip_around_middle_page() {
        let strip = build_strip(5, 10);
        assert_eq!(
            strip,
            vec![
                StripEntry::Page { number: 1, active: false },
                StripEntry::Ellipsis,
                StripEntry::Page { number: 3, active: false },
                StripEntry::Page { number: 4, active: false },
                StripEntry::Page { number: 5, active: true },
                StripEntry::Page { number: 6, active: false },
                StripEntry::Page { number: 7, active: false },
                StripEntry::Ellipsis,
                StripEntry::Page { number: 10, active: false },
            ]
        );
    }

    #[test]
    fn test_no_ellipsis_when_window_touches_edges() {
        assert_eq!(page_numbers(3, 6), vec![1, 2, 3, 4, 5, 6]);
        assert!(!build_strip(3, 6).contains(&StripEntry::Ellipsis));
        assert_eq!(page_numbers(1, 10), vec![1, 2, 3, 10]);
        assert_eq!(page_numbers(10, 10), vec![1, 8, 9, 10]);
    }

    #[test]
    fn test_small_page_counts_have_well_formed_strips() {
        for total_pages in 1..=6 {
            for current in 1..=total_pages {
                let strip = build_strip(current, total_pages);
                let pages = pages_in(&strip);

                assert_eq!(pages.first(), Some(&1));
                assert_eq!(pages.last(), Some(&total_pages));
                assert!(pages.windows(2).all(|pair| pair[0] < pair[1]));
                assert!(pages.contains(&current));

                assert_ne!(strip.first(), Some(&StripEntry::Ellipsis));
                assert_ne!(strip.last(), Some(&StripEntry::Ellipsis));
                for pair in strip.windows(2) {
                    assert!(
                        !(pair[0] == StripEntry::Ellipsis && pair[1] == StripEntry::Ellipsis),
                        "adjacent ellipses for current={current} total={total_pages}"
                    );
                }

                let active: Vec<_> = strip
                    .iter()
                    .filter(|entry| matches!(entry, StripEntry::Page { active: true, .. }))
                    .collect();
                assert_eq!(active.len(), 1);
            }
        }
    }

    #[test]
    fn test_ellipsis_marks_every_gap() {
        for total_pages in 1..=15 {
            for current in 1..=total_pages {
                let strip = build_strip(current, total_pages);
                let mut previous_page: Option<usize> = None;
                let mut saw_ellipsis = false;
                for entry in &strip {
                    match entry {
                        StripEntry::Ellipsis => saw_ellipsis = true,
                        StripEntry::Page { number, .. } => {
                            if let Some(previous) = previous_page {
                                assert_eq!(number - previous > 1, saw_ellipsis);
                            }
                            previous_page = Some(*number);
                            saw_ellipsis = false;
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_boundary_buttons_on_first_page() {
        let model = PaginationControl::new(1, 3, 47, 20).render().unwrap();
        assert_eq!(model.first.press(), None);
        assert_eq!(model.prev.press(), None);
        assert_eq!(model.next.press(), Some(2));
        assert_eq!(model.last.press(), Some(3));
    }

    #[test]
    fn test_boundary_buttons_on_last_page() {
        let model = PaginationControl::new(3, 3, 47, 20).render().unwrap();
        assert_eq!(model.first.press(), Some(1));
        assert_eq!(model.prev.press(), Some(2));
        assert_eq!(model.next.press(), None);
        assert_eq!(model.last.press(), None);
    }

    #[test]
    fn test_info_line_clamps_last_shown() {
        let model = PaginationControl::new(3, 3, 47, 20)
            .with_item_name("audit log entries")
            .render()
            .unwrap();
        assert_eq!(model.info.to_string(), "Showing 41-47 of 47 audit log entries");

        let model = PaginationControl::new(1, 3, 47, 20).render().unwrap();
        assert_eq!(model.info.to_string(), "Showing 1-20 of 47 items");
    }

    #[test]
    fn test_single_page_disables_all_nav() {
        let model = PaginationControl::new(1, 1, 5, 20).render().unwrap();
        assert!(!model.first.enabled && !model.prev.enabled);
        assert!(!model.next.enabled && !model.last.enabled);
        assert_eq!(pages_in(&model.strip), vec![1]);
    }

    #[test]
    fn test_render_is_pure() {
        let control = PaginationControl::new(4, 9, 170, 20);
        assert_eq!(control.render(), control.render());
    }

    #[test]
    fn test_text_rendering() {
        let model = PaginationControl::new(5, 10, 200, 20).render().unwrap();
        assert_eq!(render_text(&model), "« ‹ 1 … 3 4 [5] 6 7 … 10 › »");

        let model = PaginationControl::new(1, 2, 21, 20).render().unwrap();
        assert_eq!(render_text(&model), "- - [1] 2 › »");
    }
}
