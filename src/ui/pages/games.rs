use std::rc::Rc;

use dioxus::prelude::*;

use crate::domain::entities::game::{GameCategory, GameField, GameStatus};
use crate::domain::table::{PageSize, PageView, PageWindow, Predicate, SortSpec, TableQuery};
use crate::ui::format::{format_count, format_currency, format_date, format_percent};
use crate::ui::widgets::{
    sort_marker, toggle_sort, PaginationFooter, ALL_OPTION_VALUE, FILTER_ROW_STYLE, TABLE_STYLE,
    TD_STYLE, TH_STYLE,
};
use crate::usecase::ports::source::DataSource;
use crate::usecase::services::reports::distinct_values;

#[component]
pub fn GamesPage() -> Element {
    let data = use_context::<Rc<dyn DataSource>>();
    let mut search = use_signal(String::new);
    let mut category_filter = use_signal(|| None::<GameCategory>);
    let mut status_filter = use_signal(|| None::<GameStatus>);
    let mut provider_filter = use_signal(String::new);
    let mut sort = use_signal(|| None::<SortSpec<GameField>>);
    let mut page = use_signal(|| 1_usize);
    let mut size = use_signal(PageSize::default);

    let providers = distinct_values(data.games(), |game| game.provider.as_str());

    let query = TableQuery {
        predicates: vec![
            Predicate::TextAnyContains {
                fields: vec![GameField::Name, GameField::Provider],
                term: search(),
            },
            Predicate::OneOf {
                field: GameField::Category,
                values: category_filter()
                    .map(|category| vec![category.as_str().to_string()])
                    .unwrap_or_default(),
            },
            Predicate::OneOf {
                field: GameField::Status,
                values: status_filter()
                    .map(|status| vec![status.as_str().to_string()])
                    .unwrap_or_default(),
            },
            Predicate::OneOf {
                field: GameField::Provider,
                values: if provider_filter().is_empty() {
                    Vec::new()
                } else {
                    vec![provider_filter()]
                },
            },
        ],
        sort: sort(),
        window: PageWindow {
            page: page(),
            size: size(),
        },
    };
    let PageView {
        rows,
        page: current_page,
        total_pages,
        total_rows,
    } = query.run(data.games());

    rsx! {
        div {
            h2 { "Games" }
            div { style: FILTER_ROW_STYLE,
                input {
                    value: search(),
                    placeholder: "Search game or provider",
                    oninput: move |event| {
                        *search.write() = event.value();
                        *page.write() = 1;
                    },
                }
                select {
                    value: category_filter()
                        .map(|category| category.as_str().to_string())
                        .unwrap_or_else(|| ALL_OPTION_VALUE.to_string()),
                    onchange: move |event| {
                        let value = event.value();
                        let next = GameCategory::ALL.into_iter().find(|c| c.as_str() == value);
                        *category_filter.write() = next;
                        *page.write() = 1;
                    },
                    option { value: ALL_OPTION_VALUE, "All categories" }
                    for category in GameCategory::ALL {
                        option { value: category.as_str(), "{category}" }
                    }
                }
                select {
                    value: status_filter()
                        .map(|status| status.as_str().to_string())
                        .unwrap_or_else(|| ALL_OPTION_VALUE.to_string()),
                    onchange: move |event| {
                        let value = event.value();
                        let next = GameStatus::ALL.into_iter().find(|s| s.as_str() == value);
                        *status_filter.write() = next;
                        *page.write() = 1;
                    },
                    option { value: ALL_OPTION_VALUE, "All statuses" }
                    for status in GameStatus::ALL {
                        option { value: status.as_str(), "{status}" }
                    }
                }
                select {
                    value: if provider_filter().is_empty() {
                        ALL_OPTION_VALUE.to_string()
                    } else {
                        provider_filter()
                    },
                    onchange: move |event| {
                        let value = event.value();
                        *provider_filter.write() = if value == ALL_OPTION_VALUE {
                            String::new()
                        } else {
                            value
                        };
                        *page.write() = 1;
                    },
                    option { value: ALL_OPTION_VALUE, "All providers" }
                    for provider in providers {
                        option { value: "{provider}", "{provider}" }
                    }
                }
            }
            table { style: TABLE_STYLE,
                thead {
                    tr {
                        th {
                            style: TH_STYLE,
                            onclick: move |_| {
                                let next = toggle_sort(sort(), GameField::Name);
                                *sort.write() = next;
                                *page.write() = 1;
                            },
                            "Game{sort_marker(sort(), GameField::Name)}"
                        }
                        th { style: TH_STYLE, "Category" }
                        th { style: TH_STYLE, "Provider" }
                        th { style: TH_STYLE, "Status" }
                        th {
                            style: TH_STYLE,
                            onclick: move |_| {
                                let next = toggle_sort(sort(), GameField::Rtp);
                                *sort.write() = next;
                                *page.write() = 1;
                            },
                            "RTP{sort_marker(sort(), GameField::Rtp)}"
                        }
                        th { style: TH_STYLE, "Volatility" }
                        th { style: TH_STYLE, "Bet range" }
                        th {
                            style: TH_STYLE,
                            onclick: move |_| {
                                let next = toggle_sort(sort(), GameField::TotalPlays);
                                *sort.write() = next;
                                *page.write() = 1;
                            },
                            "Plays{sort_marker(sort(), GameField::TotalPlays)}"
                        }
                        th {
                            style: TH_STYLE,
                            onclick: move |_| {
                                let next = toggle_sort(sort(), GameField::TotalRevenue);
                                *sort.write() = next;
                                *page.write() = 1;
                            },
                            "Revenue{sort_marker(sort(), GameField::TotalRevenue)}"
                        }
                        th {
                            style: TH_STYLE,
                            onclick: move |_| {
                                let next = toggle_sort(sort(), GameField::LastUpdated);
                                *sort.write() = next;
                                *page.write() = 1;
                            },
                            "Updated{sort_marker(sort(), GameField::LastUpdated)}"
                        }
                    }
                }
                tbody {
                    if rows.is_empty() {
                        tr {
                            td { style: TD_STYLE, colspan: 10, "No matching games" }
                        }
                    } else {
                        for game in rows {
                            tr {
                                td { style: TD_STYLE, "{game.name}" }
                                td { style: TD_STYLE, "{game.category}" }
                                td { style: TD_STYLE, "{game.provider}" }
                                td { style: TD_STYLE, "{game.status}" }
                                td { style: TD_STYLE, "{format_percent(game.rtp)}" }
                                td { style: TD_STYLE, "{game.volatility}" }
                                td { style: TD_STYLE,
                                    "{format_currency(game.min_bet)} - {format_currency(game.max_bet)}"
                                }
                                td { style: TD_STYLE, "{format_count(game.total_plays)}" }
                                td { style: TD_STYLE, "{format_currency(game.total_revenue)}" }
                                td { style: TD_STYLE, "{format_date(game.last_updated)}" }
                            }
                        }
                    }
                }
            }
            PaginationFooter {
                page: current_page,
                total_pages,
                total_rows,
                size: size(),
                on_page: move |next| *page.write() = next,
                on_size: move |next| {
                    *size.write() = next;
                    *page.write() = 1;
                },
            }
        }
    }
}
