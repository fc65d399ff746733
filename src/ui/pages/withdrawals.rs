use std::rc::Rc;

use chrono::NaiveDate;
use dioxus::prelude::*;
use rfd::FileDialog;

use crate::domain::entities::finance::{WithdrawField, WithdrawMethod, WithdrawStatus};
use crate::domain::table::{
    apply_filters, sort_rows, PageSize, PageView, PageWindow, Predicate, SortDirection, SortSpec,
    TableQuery,
};
use crate::infra::export::{default_export_dir, write_table_csv};
use crate::ui::format::{format_currency, format_date_time, parse_input_date};
use crate::ui::widgets::{
    sort_marker, toggle_sort, PaginationFooter, FILTER_ROW_STYLE, TABLE_STYLE, TD_STYLE, TH_STYLE,
};
use crate::usecase::ports::source::DataSource;

fn withdraw_predicates(
    search: String,
    statuses: Vec<WithdrawStatus>,
    methods: Vec<WithdrawMethod>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Vec<Predicate<WithdrawField>> {
    vec![
        Predicate::TextAnyContains {
            fields: vec![WithdrawField::Username, WithdrawField::TransactionId],
            term: search,
        },
        Predicate::OneOf {
            field: WithdrawField::Status,
            values: statuses.iter().map(|s| s.as_str().to_string()).collect(),
        },
        Predicate::OneOf {
            field: WithdrawField::Method,
            values: methods.iter().map(|m| m.as_str().to_string()).collect(),
        },
        Predicate::DateRange {
            field: WithdrawField::RequestedAt,
            start: from,
            end: to,
        },
    ]
}

#[component]
pub fn WithdrawHistoryPage() -> Element {
    let data = use_context::<Rc<dyn DataSource>>();
    let mut search = use_signal(String::new);
    let mut status_filter = use_signal(Vec::<WithdrawStatus>::new);
    let mut method_filter = use_signal(Vec::<WithdrawMethod>::new);
    let mut from_text = use_signal(String::new);
    let mut to_text = use_signal(String::new);
    let mut sort = use_signal(|| {
        Some(SortSpec {
            field: WithdrawField::RequestedAt,
            direction: SortDirection::Desc,
        })
    });
    let mut page = use_signal(|| 1_usize);
    let mut size = use_signal(PageSize::default);
    let mut status_line = use_signal(String::new);

    let query = TableQuery {
        predicates: withdraw_predicates(
            search(),
            status_filter(),
            method_filter(),
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
    } = query.run(data.withdrawals());

    let data_for_export = data.clone();

    rsx! {
        div {
            h2 { "Withdraw History" }
            div { style: FILTER_ROW_STYLE,
                input {
                    value: search(),
                    placeholder: "Search player or transaction ID",
                    oninput: move |event| {
                        *search.write() = event.value();
                        *page.write() = 1;
                    },
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
                            .set_file_name("withdraw-history.csv")
                            .save_file()
                        else {
                            *status_line.write() = "Export cancelled".to_string();
                            return;
                        };

                        let mut filtered = apply_filters(
                            data_for_export.withdrawals(),
                            &withdraw_predicates(
                                search(),
                                status_filter(),
                                method_filter(),
                                parse_input_date(&from_text()),
                                parse_input_date(&to_text()),
                            ),
                        );
                        if let Some(spec) = sort() {
                            sort_rows(&mut filtered, spec);
                        }
                        let export_rows: Vec<Vec<String>> = filtered
                            .iter()
                            .map(|record| {
                                vec![
                                    record.id.clone(),
                                    record.username.clone(),
                                    format_currency(record.amount),
                                    record.method.to_string(),
                                    record.status.to_string(),
                                    format_date_time(record.requested_at),
                                    record.transaction_id.clone(),
                                    record
                                        .processed_at
                                        .map(format_date_time)
                                        .unwrap_or_default(),
                                ]
                            })
                            .collect();

                        match write_table_csv(
                            &path,
                            &[
                                "ID", "Player", "Amount", "Method", "Status", "Requested",
                                "Transaction ID", "Processed",
                            ],
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
                    "Export CSV"
                }
                span { " {status_line}" }
            }
            div { style: FILTER_ROW_STYLE,
                span { "Status:" }
                for status in WithdrawStatus::ALL {
                    label {
                        input {
                            r#type: "checkbox",
                            checked: status_filter().contains(&status),
                            onchange: move |_| {
                                let mut selected = status_filter();
                                if let Some(idx) = selected.iter().position(|s| *s == status) {
                                    selected.remove(idx);
                                } else {
                                    selected.push(status);
                                }
                                *status_filter.write() = selected;
                                *page.write() = 1;
                            },
                        }
                        "{status}"
                    }
                }
                span { "Method:" }
                for method in WithdrawMethod::ALL {
                    label {
                        input {
                            r#type: "checkbox",
                            checked: method_filter().contains(&method),
                            onchange: move |_| {
                                let mut selected = method_filter();
                                if let Some(idx) = selected.iter().position(|m| *m == method) {
                                    selected.remove(idx);
                                } else {
                                    selected.push(method);
                                }
                                *method_filter.write() = selected;
                                *page.write() = 1;
                            },
                        }
                        "{method}"
                    }
                }
            }
            table { style: TABLE_STYLE,
                thead {
                    tr {
                        th {
                            style: TH_STYLE,
                            onclick: move |_| {
                                let next = toggle_sort(sort(), WithdrawField::Username);
                                *sort.write() = next;
                                *page.write() = 1;
                            },
                            "Player{sort_marker(sort(), WithdrawField::Username)}"
                        }
                        th {
                            style: TH_STYLE,
                            onclick: move |_| {
                                let next = toggle_sort(sort(), WithdrawField::Amount);
                                *sort.write() = next;
                                *page.write() = 1;
                            },
                            "Amount{sort_marker(sort(), WithdrawField::Amount)}"
                        }
                        th { style: TH_STYLE, "Method" }
                        th { style: TH_STYLE, "Status" }
                        th {
                            style: TH_STYLE,
                            onclick: move |_| {
                                let next = toggle_sort(sort(), WithdrawField::RequestedAt);
                                *sort.write() = next;
                                *page.write() = 1;
                            },
                            "Requested{sort_marker(sort(), WithdrawField::RequestedAt)}"
                        }
                        th { style: TH_STYLE, "Transaction ID" }
                        th {
                            style: TH_STYLE,
                            onclick: move |_| {
                                let next = toggle_sort(sort(), WithdrawField::ProcessedAt);
                                *sort.write() = next;
                                *page.write() = 1;
                            },
                            "Processed{sort_marker(sort(), WithdrawField::ProcessedAt)}"
                        }
                    }
                }
                tbody {
                    if rows.is_empty() {
                        tr {
                            td { style: TD_STYLE, colspan: 7, "No matching withdrawals" }
                        }
                    } else {
                        for record in rows {
                            tr {
                                td { style: TD_STYLE, "{record.username}" }
                                td { style: TD_STYLE, "{format_currency(record.amount)}" }
                                td { style: TD_STYLE, "{record.method}" }
                                td { style: TD_STYLE, "{record.status}" }
                                td { style: TD_STYLE, "{format_date_time(record.requested_at)}" }
                                td { style: TD_STYLE, "{record.transaction_id}" }
                                td { style: TD_STYLE,
                                    {record.processed_at.map(format_date_time).unwrap_or_else(|| "n/a".to_string())}
                                }
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
