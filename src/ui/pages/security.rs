use std::rc::Rc;

use dioxus::prelude::*;

use crate::domain::entities::security::{AlertField, AlertKind, AlertSeverity, AlertStatus};
use crate::domain::table::{
    PageSize, PageView, PageWindow, Predicate, SortDirection, SortSpec, TableQuery,
};
use crate::ui::format::format_date_time;
use crate::ui::widgets::{
    sort_marker, toggle_sort, PaginationFooter, ALL_OPTION_VALUE, FILTER_ROW_STYLE, TABLE_STYLE,
    TD_STYLE, TH_STYLE,
};
use crate::usecase::ports::source::DataSource;
use crate::usecase::services::reports::alert_counts;

#[component]
pub fn SecurityPage() -> Element {
    let data = use_context::<Rc<dyn DataSource>>();
    let mut severity_filter = use_signal(|| None::<AlertSeverity>);
    let mut status_filter = use_signal(|| None::<AlertStatus>);
    let mut kind_filter = use_signal(|| None::<AlertKind>);
    let mut sort = use_signal(|| {
        Some(SortSpec {
            field: AlertField::At,
            direction: SortDirection::Desc,
        })
    });
    let mut page = use_signal(|| 1_usize);
    let mut size = use_signal(PageSize::default);

    let counts = alert_counts(data.security_alerts());

    let query = TableQuery {
        predicates: vec![
            Predicate::OneOf {
                field: AlertField::Severity,
                values: severity_filter()
                    .map(|severity| vec![severity.as_str().to_string()])
                    .unwrap_or_default(),
            },
            Predicate::OneOf {
                field: AlertField::Status,
                values: status_filter()
                    .map(|status| vec![status.as_str().to_string()])
                    .unwrap_or_default(),
            },
            Predicate::OneOf {
                field: AlertField::Kind,
                values: kind_filter()
                    .map(|kind| vec![kind.as_str().to_string()])
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
    } = query.run(data.security_alerts());

    rsx! {
        div {
            h2 { "Security" }
            div { style: FILTER_ROW_STYLE,
                span { "Critical: {counts.critical}" }
                span { "High: {counts.high}" }
                span { "Medium: {counts.medium}" }
                span { "Low: {counts.low}" }
                span { "Resolved: {counts.resolved}" }
            }
            div { style: FILTER_ROW_STYLE,
                select {
                    value: severity_filter()
                        .map(|severity| severity.as_str().to_string())
                        .unwrap_or_else(|| ALL_OPTION_VALUE.to_string()),
                    onchange: move |event| {
                        let value = event.value();
                        let next = AlertSeverity::ALL.into_iter().find(|s| s.as_str() == value);
                        *severity_filter.write() = next;
                        *page.write() = 1;
                    },
                    option { value: ALL_OPTION_VALUE, "All severities" }
                    for severity in AlertSeverity::ALL {
                        option { value: severity.as_str(), "{severity}" }
                    }
                }
                select {
                    value: status_filter()
                        .map(|status| status.as_str().to_string())
                        .unwrap_or_else(|| ALL_OPTION_VALUE.to_string()),
                    onchange: move |event| {
                        let value = event.value();
                        let next = AlertStatus::ALL.into_iter().find(|s| s.as_str() == value);
                        *status_filter.write() = next;
                        *page.write() = 1;
                    },
                    option { value: ALL_OPTION_VALUE, "All statuses" }
                    for status in AlertStatus::ALL {
                        option { value: status.as_str(), "{status}" }
                    }
                }
                select {
                    value: kind_filter()
                        .map(|kind| kind.as_str().to_string())
                        .unwrap_or_else(|| ALL_OPTION_VALUE.to_string()),
                    onchange: move |event| {
                        let value = event.value();
                        let next = AlertKind::ALL.into_iter().find(|k| k.as_str() == value);
                        *kind_filter.write() = next;
                        *page.write() = 1;
                    },
                    option { value: ALL_OPTION_VALUE, "All kinds" }
                    for kind in AlertKind::ALL {
                        option { value: kind.as_str(), "{kind}" }
                    }
                }
            }
            table { style: TABLE_STYLE,
                thead {
                    tr {
                        th { style: TH_STYLE, "Kind" }
                        th { style: TH_STYLE, "Severity" }
                        th { style: TH_STYLE, "User" }
                        th { style: TH_STYLE, "Description" }
                        th { style: TH_STYLE, "Status" }
                        th {
                            style: TH_STYLE,
                            onclick: move |_| {
                                let next = toggle_sort(sort(), AlertField::At);
                                *sort.write() = next;
                                *page.write() = 1;
                            },
                            "Raised{sort_marker(sort(), AlertField::At)}"
                        }
                    }
                }
                tbody {
                    if rows.is_empty() {
                        tr {
                            td { style: TD_STYLE, colspan: 6, "No matching alerts" }
                        }
                    } else {
                        for alert in rows {
                            tr {
                                td { style: TD_STYLE, "{alert.kind}" }
                                td { style: TD_STYLE, "{alert.severity}" }
                                td { style: TD_STYLE, "{alert.user_id}" }
                                td { style: TD_STYLE, "{alert.description}" }
                                td { style: TD_STYLE, "{alert.status}" }
                                td { style: TD_STYLE, "{format_date_time(alert.at)}" }
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
