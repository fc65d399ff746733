use std::rc::Rc;

use chrono::NaiveDate;
use dioxus::prelude::*;
use rfd::FileDialog;

use crate::domain::entities::betting::{BetField, BetOutcome, GameType};
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
use crate::usecase::services::reports::distinct_values;

fn bet_predicates(
    search: String,
    game_type: Option<GameType>,
    outcome: Option<BetOutcome>,
    provider: String,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Vec<Predicate<BetField>> {
    vec![
        Predicate::TextAnyContains {
            fields: vec![BetField::Username, BetField::GameName],
            term: search,
        },
        Predicate::OneOf {
            field: BetField::GameType,
            values: game_type
                .map(|t| vec![t.as_str().to_string()])
                .unwrap_or_default(),
        },
        Predicate::OneOf {
            field: BetField::Outcome,
            values: outcome
                .map(|o| vec![o.as_str().to_string()])
                .unwrap_or_default(),
        },
        Predicate::OneOf {
            field: BetField::Provider,
            values: if provider.is_empty() {
                Vec::new()
            } else {
                vec![provider]
            },
        },
        Predicate::DateRange {
            field: BetField::PlacedAt,
            start: from,
            end: to,
        },
    ]
}

#[component]
pub fn BettingHistoryPage() -> Element {
    let data = use_context::<Rc<dyn DataSource>>();
    let mut search = use_signal(String::new);
    let mut type_filter = use_signal(|| None::<GameType>);
    let mut outcome_filter = use_signal(|| None::<BetOutcome>);
    let mut provider_filter = use_signal(String::new);
    let mut from_text = use_signal(String::new);
    let mut to_text = use_signal(String::new);
    let mut sort = use_signal(|| {
        Some(SortSpec {
            field: BetField::PlacedAt,
            direction: SortDirection::Desc,
        })
    });
    let mut page = use_signal(|| 1_usize);
    let mut size = use_signal(PageSize::default);
    let mut status_line = use_signal(String::new);

    let providers = distinct_values(data.bets(), |bet| bet.provider.as_str());

    let query = TableQuery {
        predicates: bet_predicates(
            search(),
            type_filter(),
            outcome_filter(),
            provider_filter(),
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
    } = query.run(data.bets());

    let data_for_export = data.clone();

    rsx! {
        div {
            h2 { "Betting History" }
            div { style: FILTER_ROW_STYLE,
                input {
                    value: search(),
                    placeholder: "Search player or game",
                    oninput: move |event| {
                        *search.write() = event.value();
                        *page.write() = 1;
                    },
                }
                select {
                    value: type_filter()
                        .map(|t| t.as_str().to_string())
                        .unwrap_or_else(|| ALL_OPTION_VALUE.to_string()),
                    onchange: move |event| {
                        let value = event.value();
                        let next = GameType::ALL.into_iter().find(|t| t.as_str() == value);
                        *type_filter.write() = next;
                        *page.write() = 1;
                    },
                    option { value: ALL_OPTION_VALUE, "All game types" }
                    for game_type in GameType::ALL {
                        option { value: game_type.as_str(), "{game_type}" }
                    }
                }
                select {
                    value: outcome_filter()
                        .map(|o| o.as_str().to_string())
                        .unwrap_or_else(|| ALL_OPTION_VALUE.to_string()),
                    onchange: move |event| {
                        let value = event.value();
                        let next = BetOutcome::ALL.into_iter().find(|o| o.as_str() == value);
                        *outcome_filter.write() = next;
                        *page.write() = 1;
                    },
                    option { value: ALL_OPTION_VALUE, "All outcomes" }
                    for outcome in BetOutcome::ALL {
                        option { value: outcome.as_str(), "{outcome}" }
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
                            .set_file_name("betting-history.csv")
                            .save_file()
                        else {
                            *status_line.write() = "Export cancelled".to_string();
                            return;
                        };

                        let mut filtered = apply_filters(
                            data_for_export.bets(),
                            &bet_predicates(
                                search(),
                                type_filter(),
                                outcome_filter(),
                                provider_filter(),
                                parse_input_date(&from_text()),
                                parse_input_date(&to_text()),
                            ),
                        );
                        if let Some(spec) = sort() {
                            sort_rows(&mut filtered, spec);
                        }
                        let export_rows: Vec<Vec<String>> = filtered
                            .iter()
                            .map(|bet| {
                                vec![
                                    bet.id.clone(),
                                    bet.username.clone(),
                                    bet.game_name.clone(),
                                    bet.game_type.to_string(),
                                    bet.provider.clone(),
                                    format_currency(bet.bet_amount),
                                    format_currency(bet.payout),
                                    bet.outcome.to_string(),
                                    format_date_time(bet.placed_at),
                                    format_currency(bet.balance_before),
                                    format_currency(bet.balance_after),
                                ]
                            })
                            .collect();

                        match write_table_csv(
                            &path,
                            &[
                                "ID", "Player", "Game", "Type", "Provider", "Bet", "Payout",
                                "Outcome", "Placed", "Balance before", "Balance after",
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
            table { style: TABLE_STYLE,
                thead {
                    tr {
                        th {
                            style: TH_STYLE,
                            onclick: move |_| {
                                let next = toggle_sort(sort(), BetField::Username);
                                *sort.write() = next;
                                *page.write() = 1;
                            },
                            "Player{sort_marker(sort(), BetField::Username)}"
                        }
                        th { style: TH_STYLE, "Game" }
                        th { style: TH_STYLE, "Type" }
                        th { style: TH_STYLE, "Provider" }
                        th {
                            style: TH_STYLE,
                            onclick: move |_| {
                                let next = toggle_sort(sort(), BetField::BetAmount);
                                *sort.write() = next;
                                *page.write() = 1;
                            },
                            "Bet{sort_marker(sort(), BetField::BetAmount)}"
                        }
                        th {
                            style: TH_STYLE,
                            onclick: move |_| {
                                let next = toggle_sort(sort(), BetField::Payout);
                                *sort.write() = next;
                                *page.write() = 1;
                            },
                            "Payout{sort_marker(sort(), BetField::Payout)}"
                        }
                        th { style: TH_STYLE, "Outcome" }
                        th {
                            style: TH_STYLE,
                            onclick: move |_| {
                                let next = toggle_sort(sort(), BetField::PlacedAt);
                                *sort.write() = next;
                                *page.write() = 1;
                            },
                            "Placed{sort_marker(sort(), BetField::PlacedAt)}"
                        }
                        th { style: TH_STYLE, "Balance before" }
                        th { style: TH_STYLE, "Balance after" }
                    }
                }
                tbody {
                    if rows.is_empty() {
                        tr {
                            td { style: TD_STYLE, colspan: 10, "No matching bets" }
                        }
                    } else {
                        for bet in rows {
                            tr {
                                td { style: TD_STYLE, "{bet.username}" }
                                td { style: TD_STYLE, "{bet.game_name}" }
                                td { style: TD_STYLE, "{bet.game_type}" }
                                td { style: TD_STYLE, "{bet.provider}" }
                                td { style: TD_STYLE, "{format_currency(bet.bet_amount)}" }
                                td { style: TD_STYLE, "{format_currency(bet.payout)}" }
                                td { style: TD_STYLE, "{bet.outcome}" }
                                td { style: TD_STYLE, "{format_date_time(bet.placed_at)}" }
                                td { style: TD_STYLE, "{format_currency(bet.balance_before)}" }
                                td { style: TD_STYLE, "{format_currency(bet.balance_after)}" }
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
