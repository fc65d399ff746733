use std::rc::Rc;

use dioxus::prelude::*;

use crate::ui::format::{format_count, format_currency, format_date_time};
use crate::ui::widgets::{StatCard, TABLE_STYLE, TD_STYLE, TH_STYLE};
use crate::usecase::ports::source::DataSource;
use crate::usecase::services::reports::{
    alert_counts, monthly_flows, recent_transactions, top_games,
};

#[component]
pub fn DashboardPage() -> Element {
    let data = use_context::<Rc<dyn DataSource>>();
    let analytics = data.analytics();
    let flows = monthly_flows(data.transactions());
    let alerts = alert_counts(data.security_alerts());
    let recent = recent_transactions(data.transactions(), 5);
    let top = top_games(data.games(), 5);
    let users_title = format!("Users ({} active)", format_count(analytics.active_users));

    rsx! {
        div {
            h2 { "Dashboard" }
            div { style: "display: flex; gap: 12px; flex-wrap: wrap; padding: 8px 0;",
                StatCard {
                    title: "Total revenue",
                    value: format_currency(analytics.total_revenue),
                    change: analytics.revenue_change,
                }
                StatCard {
                    title: users_title,
                    value: format_count(analytics.total_users),
                    change: analytics.user_change,
                }
                StatCard {
                    title: "Games",
                    value: format_count(analytics.total_games),
                    change: analytics.game_change,
                }
                StatCard {
                    title: "Transactions",
                    value: format_count(analytics.total_transactions),
                    change: analytics.transaction_change,
                }
            }
            h3 { "Revenue by month" }
            table { style: TABLE_STYLE,
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
            h3 { "Security alerts" }
            div { style: "display: flex; gap: 12px; padding: 4px 0 8px 0;",
                span { "Critical: {alerts.critical}" }
                span { "High: {alerts.high}" }
                span { "Medium: {alerts.medium}" }
                span { "Low: {alerts.low}" }
                span { "Resolved: {alerts.resolved}" }
            }
            h3 { "Recent transactions" }
            table { style: TABLE_STYLE,
                thead {
                    tr {
                        th { style: TH_STYLE, "User" }
                        th { style: TH_STYLE, "Kind" }
                        th { style: TH_STYLE, "Amount" }
                        th { style: TH_STYLE, "Status" }
                        th { style: TH_STYLE, "Date" }
                    }
                }
                tbody {
                    for tx in recent {
                        tr {
                            td { style: TD_STYLE, "{tx.user_id}" }
                            td { style: TD_STYLE, "{tx.kind}" }
                            td { style: TD_STYLE, "{format_currency(tx.amount)}" }
                            td { style: TD_STYLE, "{tx.status}" }
                            td { style: TD_STYLE, "{format_date_time(tx.at)}" }
                        }
                    }
                }
            }
            h3 { "Top games by revenue" }
            table { style: TABLE_STYLE,
                thead {
                    tr {
                        th { style: TH_STYLE, "Game" }
                        th { style: TH_STYLE, "Provider" }
                        th { style: TH_STYLE, "Plays" }
                        th { style: TH_STYLE, "Revenue" }
                    }
                }
                tbody {
                    for game in top {
                        tr {
                            td { style: TD_STYLE, "{game.name}" }
                            td { style: TD_STYLE, "{game.provider}" }
                            td { style: TD_STYLE, "{format_count(game.total_plays)}" }
                            td { style: TD_STYLE, "{format_currency(game.total_revenue)}" }
                        }
                    }
                }
            }
        }
    }
}
