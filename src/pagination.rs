use serde::Serialize;

/// Page-number buttons to show for `current_page` out of `total_pages`.
///
/// `None` marks a gap rendered as an ellipsis.
fn page_links(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// Pagination control state derived from the server's page count.
#[derive(Debug, Serialize, PartialEq)]
pub struct Pager {
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub previous: Option<usize>,
    pub next: Option<usize>,
}

impl Pager {
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        let current_page = if current_page == 0 { 1 } else { current_page };

        let pages = page_links(total_pages, current_page, 2, 2, 4, 2);

        Self {
            pages,
            page: current_page,
            previous: (current_page > 1).then(|| current_page - 1),
            next: (current_page < total_pages).then(|| current_page + 1),
        }
    }
}
