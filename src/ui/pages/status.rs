use std::rc::Rc;

use dioxus::prelude::*;

use crate::domain::entities::monitor::ServiceState;
use crate::ui::format::{format_date_time, format_percent};
use crate::ui::widgets::{TABLE_STYLE, TD_STYLE, TH_STYLE};
use crate::usecase::ports::source::DataSource;
use crate::usecase::services::reports::overall_status;

fn state_color(state: ServiceState) -> &'static str {
    match state {
        ServiceState::Operational => "#1a7f37",
        ServiceState::Degraded | ServiceState::Maintenance => "#b54708",
        ServiceState::Down => "#b42318",
    }
}

#[component]
pub fn SystemStatusPage() -> Element {
    let data = use_context::<Rc<dyn DataSource>>();
    let services = data.services().to_vec();
    let incidents = data.incidents().to_vec();
    let overall = overall_status(&services);

    rsx! {
        div {
            h2 { "System Status" }
            div {
                style: "border: 1px solid {state_color(overall)}; color: {state_color(overall)}; border-radius: 6px; padding: 10px; margin: 8px 0;",
                "All systems: {overall}"
            }
            table { style: TABLE_STYLE,
                thead {
                    tr {
                        th { style: TH_STYLE, "Service" }
                        th { style: TH_STYLE, "State" }
                        th { style: TH_STYLE, "Uptime" }
                        th { style: TH_STYLE, "Response time" }
                        th { style: TH_STYLE, "Last checked" }
                    }
                }
                tbody {
                    for service in services {
                        tr {
                            td { style: TD_STYLE, "{service.name}" }
                            td { style: TD_STYLE,
                                span { style: "color: {state_color(service.state)};", "{service.state}" }
                            }
                            td { style: TD_STYLE, "{format_percent(service.uptime_percent)}" }
                            td { style: TD_STYLE, "{service.response_time_ms} ms" }
                            td { style: TD_STYLE, "{format_date_time(service.last_checked)}" }
                        }
                    }
                }
            }
            h3 { "Incidents" }
            if incidents.is_empty() {
                p { "No incidents reported." }
            } else {
                for incident in incidents {
                    div { style: "border: 1px solid #bbb; border-radius: 6px; padding: 10px; margin: 6px 0;",
                        div { style: "font-weight: 600;", "{incident.title}" }
                        div { style: "color: #555; font-size: 13px;",
                            "{incident.severity} · {incident.status} · started {format_date_time(incident.started_at)}"
                            if let Some(resolved) = incident.resolved_at {
                                " · resolved {format_date_time(resolved)}"
                            }
                        }
                        div { style: "font-size: 13px;",
                            "Affected: "
                            {incident.affected_services.join(", ")}
                        }
                    }
                }
            }
        }
    }
}
