use std::rc::Rc;

use dioxus::prelude::*;

use crate::domain::entities::account::{KycStatus, UserField, UserStatus};
use crate::domain::table::{PageSize, PageView, PageWindow, Predicate, SortSpec, TableQuery};
use crate::ui::format::{format_currency, format_date_time};
use crate::ui::widgets::{
    sort_marker, toggle_sort, PaginationFooter, ALL_OPTION_VALUE, FILTER_ROW_STYLE, TABLE_STYLE,
    TD_STYLE, TH_STYLE,
};
use crate::usecase::ports::source::DataSource;

#[component]
pub fn UsersPage() -> Element {
    let data = use_context::<Rc<dyn DataSource>>();
    let mut search = use_signal(String::new);
    let mut status_filter = use_signal(|| None::<UserStatus>);
    let mut kyc_filter = use_signal(|| None::<KycStatus>);
    let mut sort = use_signal(|| None::<SortSpec<UserField>>);
    let mut page = use_signal(|| 1_usize);
    let mut size = use_signal(PageSize::default);

    let query = TableQuery {
        predicates: vec![
            Predicate::TextAnyContains {
                fields: vec![UserField::Username, UserField::Email, UserField::FullName],
                term: search(),
            },
            Predicate::OneOf {
                field: UserField::Status,
                values: status_filter()
                    .map(|status| vec![status.as_str().to_string()])
                    .unwrap_or_default(),
            },
            Predicate::OneOf {
                field: UserField::KycStatus,
                values: kyc_filter()
                    .map(|status| vec![status.as_str().to_string()])
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
    } = query.run(data.users());

    rsx! {
        div {
            h2 { "Users" }
            div { style: FILTER_ROW_STYLE,
                input {
                    value: search(),
                    placeholder: "Search username, email or name",
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
                    value: kyc_filter()
                        .map(|status| status.as_str().to_string())
                        .unwrap_or_else(|| ALL_OPTION_VALUE.to_string()),
                    onchange: move |event| {
                        let value = event.value();
                        let next = KycStatus::ALL.into_iter().find(|s| s.as_str() == value);
                        *kyc_filter.write() = next;
                        *page.write() = 1;
                    },
                    option { value: ALL_OPTION_VALUE, "All KYC states" }
                    for status in KycStatus::ALL {
                        option { value: status.as_str(), "{status}" }
                    }
                }
            }
            table { style: TABLE_STYLE,
                thead {
                    tr {
                        th {
                            style: TH_STYLE,
                            onclick: move |_| {
                                let next = toggle_sort(sort(), UserField::Username);
                                *sort.write() = next;
                                *page.write() = 1;
                            },
                            "Username{sort_marker(sort(), UserField::Username)}"
                        }
                        th {
                            style: TH_STYLE,
                            onclick: move |_| {
                                let next = toggle_sort(sort(), UserField::FullName);
                                *sort.write() = next;
                                *page.write() = 1;
                            },
                            "Name{sort_marker(sort(), UserField::FullName)}"
                        }
                        th {
                            style: TH_STYLE,
                            onclick: move |_| {
                                let next = toggle_sort(sort(), UserField::Email);
                                *sort.write() = next;
                                *page.write() = 1;
                            },
                            "Email{sort_marker(sort(), UserField::Email)}"
                        }
                        th { style: TH_STYLE, "Status" }
                        th { style: TH_STYLE, "KYC" }
                        th {
                            style: TH_STYLE,
                            onclick: move |_| {
                                let next = toggle_sort(sort(), UserField::Balance);
                                *sort.write() = next;
                                *page.write() = 1;
                            },
                            "Balance{sort_marker(sort(), UserField::Balance)}"
                        }
                        th { style: TH_STYLE, "Country" }
                        th {
                            style: TH_STYLE,
                            onclick: move |_| {
                                let next = toggle_sort(sort(), UserField::LastLogin);
                                *sort.write() = next;
                                *page.write() = 1;
                            },
                            "Last login{sort_marker(sort(), UserField::LastLogin)}"
                        }
                    }
                }
                tbody {
                    if rows.is_empty() {
                        tr {
                            td { style: TD_STYLE, colspan: 8, "No matching users" }
                        }
                    } else {
                        for user in rows {
                            tr {
                                td { style: TD_STYLE,
                                    "{user.username}"
                                    if user.vip { " ★" }
                                }
                                td { style: TD_STYLE, "{user.full_name}" }
                                td { style: TD_STYLE, "{user.email}" }
                                td { style: TD_STYLE, "{user.status}" }
                                td { style: TD_STYLE, "{user.kyc_status}" }
                                td { style: TD_STYLE, "{format_currency(user.balance)}" }
                                td { style: TD_STYLE, "{user.country}" }
                                td { style: TD_STYLE, "{format_date_time(user.last_login)}" }
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
