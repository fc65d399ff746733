use dioxus::prelude::*;

use crate::domain::table::{PageSize, SortDirection, SortSpec};
use crate::ui::format::format_change;

pub const TABLE_STYLE: &str = "border-collapse: collapse; width: 100%; border: 1px solid #bbb;";
pub const TH_STYLE: &str =
    "border: 1px solid #bbb; padding: 6px; background: #f2f2f2; text-align: left; cursor: pointer;";
pub const TD_STYLE: &str = "border: 1px solid #bbb; padding: 6px;";
pub const FILTER_ROW_STYLE: &str =
    "display: flex; gap: 12px; align-items: center; flex-wrap: wrap; padding: 8px 0;";

pub const ALL_OPTION_VALUE: &str = "__all__";

/// Header arrow for the column the table is currently sorted by.
pub fn sort_marker<F: Copy + Eq>(sort: Option<SortSpec<F>>, field: F) -> &'static str {
    match sort {
        Some(spec) if spec.field == field => match spec.direction {
            SortDirection::Asc => " ▲",
            SortDirection::Desc => " ▼",
        },
        _ => "",
    }
}

/// Clicking a sorted column flips its direction; clicking a new column sorts
/// ascending.
pub fn toggle_sort<F: Copy + Eq>(current: Option<SortSpec<F>>, field: F) -> Option<SortSpec<F>> {
    match current {
        Some(spec) if spec.field == field => Some(SortSpec {
            field,
            direction: spec.direction.toggled(),
        }),
        _ => Some(SortSpec {
            field,
            direction: SortDirection::Asc,
        }),
    }
}

/// Page-size select plus prev/next controls, shared by every table page.
#[component]
pub fn PaginationFooter(
    page: usize,
    total_pages: usize,
    total_rows: usize,
    size: PageSize,
    on_page: EventHandler<usize>,
    on_size: EventHandler<PageSize>,
) -> Element {
    rsx! {
        div {
            style: "display: flex; gap: 12px; align-items: center; padding: 8px 0;",
            span { "{total_rows} rows" }
            label { "Rows per page " }
            select {
                value: "{size.rows()}",
                onchange: move |event| {
                    if let Some(next) = event
                        .value()
                        .parse::<usize>()
                        .ok()
                        .and_then(PageSize::from_rows)
                    {
                        on_size.call(next);
                    }
                },
                for option_size in PageSize::ALL {
                    option { value: "{option_size.rows()}", "{option_size.rows()}" }
                }
            }
            button {
                disabled: page <= 1,
                onclick: move |_| {
                    if page > 1 {
                        on_page.call(page - 1);
                    }
                },
                "Prev"
            }
            span { "Page {page} of {total_pages}" }
            button {
                disabled: page >= total_pages,
                onclick: move |_| {
                    if page < total_pages {
                        on_page.call(page + 1);
                    }
                },
                "Next"
            }
        }
    }
}

/// One headline number on the dashboard, with its change versus the
/// previous period.
#[component]
pub fn StatCard(title: String, value: String, change: f64) -> Element {
    let change_color = if change >= 0.0 { "#1a7f37" } else { "#b42318" };
    rsx! {
        div {
            style: "border: 1px solid #bbb; border-radius: 6px; padding: 12px; min-width: 180px;",
            div { style: "color: #555; font-size: 13px;", "{title}" }
            div { style: "font-size: 22px; font-weight: 600; margin: 4px 0;", "{value}" }
            div { style: "color: {change_color}; font-size: 13px;",
                "{format_change(change)} vs last period"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Col {
        Name,
        Amount,
    }

    #[test]
    fn clicking_a_new_column_sorts_ascending() {
        let next = toggle_sort(None, Col::Name).expect("should set a sort");
        assert_eq!(next.field, Col::Name);
        assert_eq!(next.direction, SortDirection::Asc);

        let other = toggle_sort(Some(next), Col::Amount).expect("should switch columns");
        assert_eq!(other.field, Col::Amount);
        assert_eq!(other.direction, SortDirection::Asc);
    }

    #[test]
    fn clicking_the_sorted_column_flips_direction() {
        let asc = toggle_sort(None, Col::Name).expect("should set a sort");
        let desc = toggle_sort(Some(asc), Col::Name).expect("should flip");
        assert_eq!(desc.direction, SortDirection::Desc);

        let asc_again = toggle_sort(Some(desc), Col::Name).expect("should flip back");
        assert_eq!(asc_again.direction, SortDirection::Asc);
    }

    #[test]
    fn sort_marker_points_at_the_active_column_only() {
        let sort = toggle_sort(None, Col::Amount);
        assert_eq!(sort_marker(sort, Col::Amount), " ▲");
        assert_eq!(sort_marker(sort, Col::Name), "");
        assert_eq!(sort_marker(None::<SortSpec<Col>>, Col::Name), "");
    }
}
