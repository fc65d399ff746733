use std::rc::Rc;

use dioxus::prelude::*;

use crate::domain::entities::account::{PlayerField, RiskLevel, UserStatus, VipLevel};
use crate::domain::table::{PageSize, PageView, PageWindow, Predicate, SortSpec, TableQuery};
use crate::ui::format::{format_count, format_currency, format_date_time, format_percent};
use crate::ui::widgets::{
    sort_marker, toggle_sort, PaginationFooter, ALL_OPTION_VALUE, FILTER_ROW_STYLE, TABLE_STYLE,
    TD_STYLE, TH_STYLE,
};
use crate::usecase::ports::source::DataSource;

#[component]
pub fn PlayersPage() -> Element {
    let data = use_context::<Rc<dyn DataSource>>();
    let mut search = use_signal(String::new);
    let mut status_filter = use_signal(|| None::<UserStatus>);
    let mut vip_filter = use_signal(|| None::<VipLevel>);
    let mut risk_filter = use_signal(|| None::<RiskLevel>);
    let mut sort = use_signal(|| None::<SortSpec<PlayerField>>);
    let mut page = use_signal(|| 1_usize);
    let mut size = use_signal(PageSize::default);

    let query = TableQuery {
        predicates: vec![
            Predicate::TextAnyContains {
                fields: vec![
                    PlayerField::Username,
                    PlayerField::FullName,
                    PlayerField::Email,
                ],
                term: search(),
            },
            Predicate::OneOf {
                field: PlayerField::Status,
                values: status_filter()
                    .map(|status| vec![status.as_str().to_string()])
                    .unwrap_or_default(),
            },
            Predicate::OneOf {
                field: PlayerField::VipLevel,
                values: vip_filter()
                    .map(|level| vec![level.as_str().to_string()])
                    .unwrap_or_default(),
            },
            Predicate::OneOf {
                field: PlayerField::RiskLevel,
                values: risk_filter()
                    .map(|level| vec![level.as_str().to_string()])
                    .unwrap_or_default(),
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
    } = query.run(data.players());

    rsx! {
        div {
            h2 { "Player Management" }
            div { style: FILTER_ROW_STYLE,
                input {
                    value: search(),
                    placeholder: "Search username, name or email",
                    oninput: move |event| {
                        *search.write() = event.value();
                        *page.write() = 1;
                    },
                }
                select {
                    value: status_filter()
                        .map(|status| status.as_str().to_string())
                        .unwrap_or_else(|| ALL_OPTION_VALUE.to_string()),
                    onchange: move |event| {
                        let value = event.value();
                        let next = UserStatus::ALL.into_iter().find(|s| s.as_str() == value);
                        *status_filter.write() = next;
                        *page.write() = 1;
                    },
                    option { value: ALL_OPTION_VALUE, "All statuses" }
                    for status in UserStatus::ALL {
                        option { value: status.as_str(), "{status}" }
                    }
                }
                select {
                    value: vip_filter()
                        .map(|level| level.as_str().to_string())
                        .unwrap_or_else(|| ALL_OPTION_VALUE.to_string()),
                    onchange: move |event| {
                        let value = event.value();
                        let next = VipLevel::ALL.into_iter().find(|l| l.as_str() == value);
                        *vip_filter.write() = next;
                        *page.write() = 1;
                    },
                    option { value: ALL_OPTION_VALUE, "All VIP levels" }
                    for level in VipLevel::ALL {
                        option { value: level.as_str(), "{level}" }
                    }
                }
                select {
                    value: risk_filter()
                        .map(|level| level.as_str().to_string())
                        .unwrap_or_else(|| ALL_OPTION_VALUE.to_string()),
                    onchange: move |event| {
                        let value = event.value();
                        let next = RiskLevel::ALL.into_iter().find(|l| l.as_str() == value);
                        *risk_filter.write() = next;
                        *page.write() = 1;
                    },
                    option { value: ALL_OPTION_VALUE, "All risk levels" }
                    for level in RiskLevel::ALL {
                        option { value: level.as_str(), "{level}" }
                    }
                }
            }
            table { style: TABLE_STYLE,
                thead {
                    tr {
                        th {
                            style: TH_STYLE,
                            onclick: move |_| {
                                let next = toggle_sort(sort(), PlayerField::Username);
                                *sort.write() = next;
                                *page.write() = 1;
                            },
                            "Player{sort_marker(sort(), PlayerField::Username)}"
                        }
                        th { style: TH_STYLE, "Status" }
                        th { style: TH_STYLE, "VIP" }
                        th {
                            style: TH_STYLE,
                            onclick: move |_| {
                                let next = toggle_sort(sort(), PlayerField::TotalBets);
                                *sort.write() = next;
                                *page.write() = 1;
                            },
                            "Bets{sort_marker(sort(), PlayerField::TotalBets)}"
                        }
                        th {
                            style: TH_STYLE,
                            onclick: move |_| {
                                let next = toggle_sort(sort(), PlayerField::WinRate);
                                *sort.write() = next;
                                *page.write() = 1;
                            },
                            "Win rate{sort_marker(sort(), PlayerField::WinRate)}"
                        }
                        th {
                            style: TH_STYLE,
                            onclick: move |_| {
                                let next = toggle_sort(sort(), PlayerField::AverageBet);
                                *sort.write() = next;
                                *page.write() = 1;
                            },
                            "Avg bet{sort_marker(sort(), PlayerField::AverageBet)}"
                        }
                        th {
                            style: TH_STYLE,
                            onclick: move |_| {
                                let next = toggle_sort(sort(), PlayerField::Balance);
                                *sort.write() = next;
                                *page.write() = 1;
                            },
                            "Balance{sort_marker(sort(), PlayerField::Balance)}"
                        }
                        th { style: TH_STYLE, "Risk" }
                        th {
                            style: TH_STYLE,
                            onclick: move |_| {
                                let next = toggle_sort(sort(), PlayerField::LastActivity);
                                *sort.write() = next;
                                *page.write() = 1;
                            },
                            "Last activity{sort_marker(sort(), PlayerField::LastActivity)}"
                        }
                    }
                }
                tbody {
                    if rows.is_empty() {
                        tr {
                            td { style: TD_STYLE, colspan: 9, "No matching players" }
                        }
                    } else {
                        for player in rows {
                            tr {
                                td { style: TD_STYLE, "{player.username} ({player.full_name})" }
                                td { style: TD_STYLE, "{player.status}" }
                                td { style: TD_STYLE, "{player.vip_level}" }
                                td { style: TD_STYLE, "{format_count(player.total_bets)}" }
                                td { style: TD_STYLE, "{format_percent(player.win_rate)}" }
                                td { style: TD_STYLE, "{format_currency(player.average_bet)}" }
                                td { style: TD_STYLE, "{format_currency(player.balance)}" }
                                td { style: TD_STYLE, "{player.risk_level}" }
                                td { style: TD_STYLE, "{format_date_time(player.last_activity)}" }
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
