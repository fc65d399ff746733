use std::rc::Rc;

use chrono::NaiveDate;
use dioxus::prelude::*;
use rfd::FileDialog;

use crate::domain::entities::finance::{TransactionField, TransactionKind, TransactionStatus};
use crate::domain::table::{
    apply_filters, sort_rows, PageSize, PageView, PageWindow, Predicate, SortDirection, SortSpec,
    TableQuery,
};
use crate::infra::export::{default_export_dir, write_table_csv};
use crate::ui::format::{format_currency, format_date_time, parse_input_date};
use crate::ui::widgets::{
    sort_marker, toggle_sort, PaginationFooter, ALL_OPTION_VALUE, FILTER_ROW_STYLE, TABLE_STYLE,
    TD_STYLE, TH_STYLE,
};
use crate::usecase::ports::source::DataSource;
use crate::usecase::services::reports::{monthly_flows, volume_by_kind};

fn transaction_predicates(
    kind: Option<TransactionKind>,
    status: Option<TransactionStatus>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Vec<Predicate<TransactionField>> {
    vec![
        Predicate::OneOf {
            field: TransactionField::Kind,
            values: kind.map(|k| vec![k.as_str().to_string()]).unwrap_or_default(),
        },
        Predicate::OneOf {
            field: TransactionField::Status,
            values: status
                .map(|s| vec![s.as_str().to_string()])
                .unwrap_or_default(),
        },
        Predicate::DateRange {
            field: TransactionField::At,
            start: from,
            end: to,
        },
    ]
}

#[component]
pub fn FinancialPage() -> Element {
    let data = use_context::<Rc<dyn DataSource>>();
    let mut kind_filter = use_signal(|| None::<TransactionKind>);
    let mut status_filter = use_signal(|| None::<TransactionStatus>);
    let mut from_text = use_signal(String::new);
    let mut to_text = use_signal(String::new);
    let mut sort = use_signal(|| {
        Some(SortSpec {
            field: TransactionField::At,
            direction: SortDirection::Desc,
        })
    });
    let mut page = use_signal(|| 1_usize);
    let mut size = use_signal(PageSize::default);
    let mut status_line = use_signal(String::new);

    let volume = volume_by_kind(data.transactions());
    let flows = monthly_flows(data.transactions());

    let query = TableQuery {
        predicates: transaction_predicates(
            kind_filter(),
            status_filter(),
            parse_input_date(&from_text()),
            parse_input_date(&to_text()),
        ),
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
    } = query.run(data.transactions());

    let data_for_export = data.clone();

    rsx! {
        div {
            h2 { "Financial Reports" }
            div { style: FILTER_ROW_STYLE,
                for (kind, total) in volume {
                    span { style: "border: 1px solid #bbb; border-radius: 6px; padding: 6px 10px;",
                        "{kind}: {format_currency(total)}"
                    }
                }
            }
            table { style: "border-collapse: collapse; border: 1px solid #bbb; margin-bottom: 12px;",
                thead {
                    tr {
                        th { style: TH_STYLE, "Month" }
                        th { style: TH_STYLE, "Deposits" }
                        th { style: TH_STYLE, "Withdrawals" }
                        th { style: TH_STYLE, "Net" }
                    }
                }
                tbody {
                    for flow in flows {
                        tr {
                            td { style: TD_STYLE, "{flow.label()}" }
                            td { style: TD_STYLE, "{format_currency(flow.deposits)}" }
                            td { style: TD_STYLE, "{format_currency(flow.withdrawals)}" }
                            td { style: TD_STYLE, "{format_currency(flow.net())}" }
                        }
                    }
                }
            }
            div { style: FILTER_ROW_STYLE,
                select {
                    value: kind_filter()
                        .map(|kind| kind.as_str().to_string())
                        .unwrap_or_else(|| ALL_OPTION_VALUE.to_string()),
                    onchange: move |event| {
                        let value = event.value();
                        let next = TransactionKind::ALL.into_iter().find(|k| k.as_str() == value);
                        *kind_filter.write() = next;
                        *page.write() = 1;
                    },
                    option { value: ALL_OPTION_VALUE, "All kinds" }
                    for kind in TransactionKind::ALL {
                        option { value: kind.as_str(), "{kind}" }
                    }
                }
                select {
                    value: status_filter()
                        .map(|status| status.as_str().to_string())
                        .unwrap_or_else(|| ALL_OPTION_VALUE.to_string()),
                    onchange: move |event| {
                        let value = event.value();
                        let next = TransactionStatus::ALL.into_iter().find(|s| s.as_str() == value);
                        *status_filter.write() = next;
                        *page.write() = 1;
                    },
                    option { value: ALL_OPTION_VALUE, "All statuses" }
                    for status in TransactionStatus::ALL {
                        option { value: status.as_str(), "{status}" }
                    }
                }
                label { "From " }
                input {
                    r#type: "date",
                    value: from_text(),
                    onchange: move |event| {
                        *from_text.write() = event.value();
                        *page.write() = 1;
                    },
                }
                label { "To " }
                input {
                    r#type: "date",
                    value: to_text(),
                    onchange: move |event| {
                        *to_text.write() = event.value();
                        *page.write() = 1;
                    },
                }
                button {
                    onclick: move |_| {
                        let Some(path) = FileDialog::new()
                            .set_directory(default_export_dir())
                            .set_file_name("financial-report.csv")
                            .save_file()
                        else {
                            *status_line.write() = "Export cancelled".to_string();
                            return;
                        };

                        let mut filtered = apply_filters(
                            data_for_export.transactions(),
                            &transaction_predicates(
                                kind_filter(),
                                status_filter(),
                                parse_input_date(&from_text()),
                                parse_input_date(&to_text()),
                            ),
                        );
                        if let Some(spec) = sort() {
                            sort_rows(&mut filtered, spec);
                        }
                        let export_rows: Vec<Vec<String>> = filtered
                            .iter()
                            .map(|tx| {
                                vec![
                                    tx.id.clone(),
                                    tx.user_id.clone(),
                                    tx.kind.to_string(),
                                    format_currency(tx.amount),
                                    tx.status.to_string(),
                                    tx.method.clone(),
                                    format_date_time(tx.at),
                                    tx.description.clone(),
                                ]
                            })
                            .collect();

                        match write_table_csv(
                            &path,
                            &["ID", "User", "Kind", "Amount", "Status", "Method", "Date", "Description"],
                            &export_rows,
                        ) {
                            Ok(()) => {
                                *status_line.write() =
                                    format!("Exported {} rows to {}", export_rows.len(), path.display());
                            }
                            Err(err) => {
                                *status_line.write() = format!("Export failed: {err}");
                            }
                        }
                    },
                    "Export Report"
                }
                span { " {status_line}" }
            }
            table { style: TABLE_STYLE,
                thead {
                    tr {
                        th { style: TH_STYLE, "ID" }
                        th { style: TH_STYLE, "User" }
                        th { style: TH_STYLE, "Kind" }
                        th {
                            style: TH_STYLE,
                            onclick: move |_| {
                                let next = toggle_sort(sort(), TransactionField::Amount);
                                *sort.write() = next;
                                *page.write() = 1;
                            },
                            "Amount{sort_marker(sort(), TransactionField::Amount)}"
                        }
                        th { style: TH_STYLE, "Status" }
                        th { style: TH_STYLE, "Method" }
                        th {
                            style: TH_STYLE,
                            onclick: move |_| {
                                let next = toggle_sort(sort(), TransactionField::At);
                                *sort.write() = next;
                                *page.write() = 1;
                            },
                            "Date{sort_marker(sort(), TransactionField::At)}"
                        }
                        th { style: TH_STYLE, "Description" }
                    }
                }
                tbody {
                    if rows.is_empty() {
                        tr {
                            td { style: TD_STYLE, colspan: 8, "No matching transactions" }
                        }
                    } else {
                        for tx in rows {
                            tr {
                                td { style: TD_STYLE, "{tx.id}" }
                                td { style: TD_STYLE, "{tx.user_id}" }
                                td { style: TD_STYLE, "{tx.kind}" }
                                td { style: TD_STYLE, "{format_currency(tx.amount)}" }
                                td { style: TD_STYLE, "{tx.status}" }
                                td { style: TD_STYLE, "{tx.method}" }
                                td { style: TD_STYLE, "{format_date_time(tx.at)}" }
                                td { style: TD_STYLE, "{tx.description}" }
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
