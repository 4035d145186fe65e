//! Page window builder used by the dashboard tables.
//!
//! The widget always shows the first and last page, a window of pages around
//! the current one and an ellipsis placeholder for every gap in between.

use serde::Serialize;

/// Default number of pages shown on each side of the current page.
pub const DEFAULT_WINDOW_SIZE: usize = 2;

/// Current position in a paginated listing plus the filters that must survive
/// navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageQuery {
    pub current_page: usize,
    pub total_pages: usize,
    pub filters: Vec<(String, String)>,
}

impl PageQuery {
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        Self {
            current_page,
            total_pages,
            filters: Vec::new(),
        }
    }

    /// Appends a filter. Empty values are dropped so links stay minimal.
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.is_empty() {
            self.filters.push((key.into(), value));
        }
        self
    }

    /// Appends the filter only when a value is present.
    pub fn filter_opt<V: ToString>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.filter(key, value.to_string()),
            None => self,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageLabel {
    First,
    Last,
    Ellipsis,
    Number(usize),
}

/// One entry of the pagination widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageButton {
    pub label: PageLabel,
    /// Target page, `None` for ellipsis placeholders.
    pub page: Option<usize>,
    pub is_current: bool,
    pub is_interactive: bool,
    /// Link for interactive buttons.
    pub href: Option<String>,
}

impl PageButton {
    fn page(
        label: PageLabel,
        page: usize,
        current_page: usize,
        link: &impl Fn(usize) -> String,
    ) -> Self {
        let is_current = page == current_page;
        Self {
            label,
            page: Some(page),
            is_current,
            is_interactive: !is_current,
            href: (!is_current).then(|| link(page)),
        }
    }

    fn ellipsis() -> Self {
        Self {
            label: PageLabel::Ellipsis,
            page: None,
            is_current: false,
            is_interactive: false,
            href: None,
        }
    }

    pub fn text(&self) -> String {
        match self.label {
            PageLabel::First => "First".to_string(),
            PageLabel::Last => "Last".to_string(),
            PageLabel::Ellipsis => "...".to_string(),
            PageLabel::Number(page) => page.to_string(),
        }
    }

    pub fn aria_label(&self) -> String {
        match (self.label, self.page) {
            (PageLabel::First, _) => "Go to first page".to_string(),
            (PageLabel::Last, Some(page)) => format!("Go to last page, page {page}"),
            (PageLabel::Last, None) => "Go to last page".to_string(),
            (PageLabel::Ellipsis, _) => "Skipped pages".to_string(),
            (PageLabel::Number(page), _) => format!("Go to page {page}"),
        }
    }

    pub fn css_class(&self) -> String {
        let mut class = String::from("join-item btn");
        if self.is_current {
            class.push_str(" btn-active");
        }
        if !self.is_interactive {
            class.push_str(" btn-disabled");
        }
        class
    }

    /// Flattens the button into the shape consumed by templates.
    pub fn to_view(&self) -> PageButtonView {
        PageButtonView {
            text: self.text(),
            aria_label: self.aria_label(),
            class: self.css_class(),
            is_current: self.is_current,
            is_interactive: self.is_interactive,
            href: self.href.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageButtonView {
    pub text: String,
    pub aria_label: String,
    pub class: String,
    pub is_current: bool,
    pub is_interactive: bool,
    pub href: Option<String>,
}

/// Builds `base_path?page=N&key=value...` keeping the filter order.
pub fn page_link(base_path: &str, page: usize, filters: &[(String, String)]) -> String {
    let page = page.to_string();
    let mut pairs: Vec<(&str, &str)> = Vec::with_capacity(filters.len() + 1);
    pairs.push(("page", page.as_str()));
    pairs.extend(
        filters
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, value)| (key.as_str(), value.as_str())),
    );

    match serde_html_form::to_string(&pairs) {
        Ok(query) => format!("{base_path}?{query}"),
        Err(err) => {
            log::warn!("Failed to encode pagination link: {err}");
            format!("{base_path}?page={page}")
        }
    }
}

/// Computes the buttons of the pagination widget.
///
/// A current page outside `1..=total_pages` is clamped so the result keeps
/// exactly one current button.
pub fn build_page_buttons(
    query: &PageQuery,
    window_size: usize,
    base_path: &str,
) -> Vec<PageButton> {
    let total_pages = query.total_pages;
    if total_pages <= 1 {
        return vec![];
    }

    let current_page = query.current_page.clamp(1, total_pages);
    let link = |page: usize| page_link(base_path, page, &query.filters);

    let mut buttons = Vec::new();
    buttons.push(PageButton::page(PageLabel::First, 1, current_page, &link));

    let left = current_page.saturating_sub(window_size);
    let right = current_page.saturating_add(window_size);

    if left > 2 {
        buttons.push(PageButton::ellipsis());
    }

    // First and last are never part of the window.
    for page in left.max(2)..=right.min(total_pages - 1) {
        buttons.push(PageButton::page(PageLabel::Number(page), page, current_page, &link));
    }

    if right < total_pages - 1 {
        buttons.push(PageButton::ellipsis());
    }

    buttons.push(PageButton::page(PageLabel::Last, total_pages, current_page, &link));

    buttons
}

/// Page of items together with the rendered pagination widget.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub buttons: Vec<PageButtonView>,
    pub page: usize,
    pub total_pages: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, query: &PageQuery, window_size: usize, base_path: &str) -> Self {
        let buttons = build_page_buttons(query, window_size, base_path)
            .iter()
            .map(PageButton::to_view)
            .collect();

        Self {
            items,
            buttons,
            page: query.current_page.max(1),
            total_pages: query.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    const BASE: &str = "/dashboard/executions/list";

    fn labels(buttons: &[PageButton]) -> Vec<String> {
        buttons
            .iter()
            .map(|b| {
                if b.is_current {
                    format!("{}*", b.text())
                } else {
                    b.text()
                }
            })
            .collect()
    }

    fn build(current: usize, total: usize) -> Vec<PageButton> {
        build_page_buttons(&PageQuery::new(current, total), DEFAULT_WINDOW_SIZE, BASE)
    }

    #[test]
    fn no_buttons_for_zero_or_one_page() {
        assert!(build(1, 0).is_empty());
        assert!(build(1, 1).is_empty());
        assert!(build(3, 1).is_empty());
    }

    #[test]
    fn middle_page_has_both_ellipses() {
        assert_eq!(
            labels(&build(10, 20)),
            vec!["First", "...", "8", "9", "10*", "11", "12", "...", "Last"]
        );
    }

    #[test]
    fn window_touching_both_edges_has_no_ellipsis() {
        assert_eq!(labels(&build(3, 5)), vec!["First", "2", "3*", "4", "Last"]);
    }

    #[test]
    fn first_page_is_current() {
        assert_eq!(
            labels(&build(1, 20)),
            vec!["First*", "2", "3", "...", "Last"]
        );
        assert_eq!(labels(&build(1, 7)), vec!["First*", "2", "3", "...", "Last"]);
    }

    #[test]
    fn last_page_is_current() {
        assert_eq!(
            labels(&build(20, 20)),
            vec!["First", "...", "18", "19", "Last*"]
        );
    }

    #[test]
    fn few_pages() {
        assert_eq!(labels(&build(1, 3)), vec!["First*", "2", "Last"]);
        assert_eq!(labels(&build(2, 3)), vec!["First", "2*", "Last"]);
        assert_eq!(labels(&build(3, 3)), vec!["First", "2", "Last*"]);
        assert_eq!(labels(&build(1, 2)), vec!["First*", "Last"]);
        assert_eq!(labels(&build(2, 2)), vec!["First", "Last*"]);
    }

    #[test]
    fn ellipsis_is_suppressed_when_gap_is_empty() {
        // Window 2..=6 is contiguous with first and with last (7).
        assert_eq!(
            labels(&build(4, 7)),
            vec!["First", "2", "3", "4*", "5", "6", "Last"]
        );
        // Window 3..=7 hides only page 2.
        assert_eq!(
            labels(&build(5, 8)),
            vec!["First", "...", "3", "4", "5*", "6", "7", "Last"]
        );
    }

    #[test]
    fn out_of_range_current_page_is_clamped() {
        assert_eq!(labels(&build(50, 5)), labels(&build(5, 5)));
        assert_eq!(labels(&build(0, 5)), labels(&build(1, 5)));
    }

    #[test]
    fn structural_invariants_hold_for_all_small_inputs() {
        for window in 0..4 {
            for total in 2..30 {
                for current in 1..=total {
                    let buttons = build_page_buttons(&PageQuery::new(current, total), window, BASE);

                    let firsts = buttons.iter().filter(|b| b.label == PageLabel::First).count();
                    let lasts = buttons.iter().filter(|b| b.label == PageLabel::Last).count();
                    assert_eq!(firsts, 1);
                    assert_eq!(lasts, 1);

                    let current_buttons: Vec<_> = buttons.iter().filter(|b| b.is_current).collect();
                    assert_eq!(current_buttons.len(), 1);
                    assert_eq!(current_buttons[0].page, Some(current));

                    let mut seen = HashSet::new();
                    for page in buttons.iter().filter_map(|b| b.page) {
                        assert!(seen.insert(page), "page {page} repeated");
                    }

                    for ellipsis in buttons.iter().filter(|b| b.label == PageLabel::Ellipsis) {
                        assert!(!ellipsis.is_current);
                        assert!(!ellipsis.is_interactive);
                        assert!(ellipsis.href.is_none());
                    }

                    let left = current as isize - window as isize;
                    let right = current as isize + window as isize;
                    let current_idx = buttons
                        .iter()
                        .position(|b| b.is_current)
                        .expect("one current button");
                    let ellipses: Vec<usize> = buttons
                        .iter()
                        .enumerate()
                        .filter(|(_, b)| b.label == PageLabel::Ellipsis)
                        .map(|(idx, _)| idx)
                        .collect();
                    let has_left = ellipses.iter().any(|&idx| idx < current_idx);
                    let has_right = ellipses.iter().any(|&idx| idx > current_idx);
                    assert_eq!(has_left, left > 2);
                    assert_eq!(has_right, right < total as isize - 1);
                }
            }
        }
    }

    #[test]
    fn interactive_buttons_link_to_their_page() {
        let buttons = build(3, 5);
        for button in &buttons {
            match button.page {
                Some(page) if !button.is_current => {
                    assert_eq!(button.href.as_deref(), Some(format!("{BASE}?page={page}").as_str()));
                }
                _ => assert!(button.href.is_none()),
            }
        }
    }

    #[test]
    fn links_preserve_filters_in_order() {
        let query = PageQuery::new(2, 5)
            .filter("database", "")
            .filter("backup", "b7a2d0c4-2b8e-4c35-9f4c-33d4c1f0a111");
        let buttons = build_page_buttons(&query, DEFAULT_WINDOW_SIZE, BASE);

        for button in buttons.iter().filter(|b| b.is_interactive) {
            let page = button.page.expect("interactive button has a page");
            let href = button.href.as_deref().expect("interactive button has a link");
            assert!(href.ends_with(&format!(
                "page={page}&backup=b7a2d0c4-2b8e-4c35-9f4c-33d4c1f0a111"
            )));
        }
    }

    #[test]
    fn page_link_encodes_values() {
        let filters = vec![("q".to_string(), "a b&c".to_string())];
        assert_eq!(page_link("/x", 4, &filters), "/x?page=4&q=a+b%26c");
    }

    #[test]
    fn views_carry_accessibility_attributes() {
        let views: Vec<_> = build(3, 5).iter().map(PageButton::to_view).collect();

        assert_eq!(views[0].aria_label, "Go to first page");
        assert_eq!(views[0].class, "join-item btn");
        assert_eq!(views[2].aria_label, "Go to page 3");
        assert_eq!(views[2].class, "join-item btn btn-active btn-disabled");
        assert_eq!(views[4].aria_label, "Go to last page, page 5");

        let ellipsis = build(10, 20)[1].to_view();
        assert_eq!(ellipsis.text, "...");
        assert_eq!(ellipsis.aria_label, "Skipped pages");
        assert_eq!(ellipsis.class, "join-item btn btn-disabled");
    }

    #[test]
    fn paginated_wraps_items_with_buttons() {
        let paginated = Paginated::new(vec![1, 2, 3], &PageQuery::new(2, 3), 2, BASE);
        assert_eq!(paginated.items, vec![1, 2, 3]);
        assert_eq!(paginated.page, 2);
        assert_eq!(paginated.buttons.len(), 3);

        let single = Paginated::new(vec![1], &PageQuery::new(1, 1), 2, BASE);
        assert!(single.buttons.is_empty());
    }
}
