use std::rc::Rc;

use dioxus::prelude::*;

use crate::infra::mock::MockData;
use crate::ui::pages::betting::BettingHistoryPage;
use crate::ui::pages::dashboard::DashboardPage;
use crate::ui::pages::financial::FinancialPage;
use crate::ui::pages::games::GamesPage;
use crate::ui::pages::players::PlayersPage;
use crate::ui::pages::security::SecurityPage;
use crate::ui::pages::status::SystemStatusPage;
use crate::ui::pages::users::UsersPage;
use crate::ui::pages::withdrawals::WithdrawHistoryPage;
use crate::usecase::ports::source::DataSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Dashboard,
    Users,
    Games,
    Players,
    Financial,
    Security,
    Betting,
    Withdrawals,
    Status,
}

impl Page {
    const ALL: [Page; 9] = [
        Page::Dashboard,
        Page::Users,
        Page::Games,
        Page::Players,
        Page::Financial,
        Page::Security,
        Page::Betting,
        Page::Withdrawals,
        Page::Status,
    ];

    fn title(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Users => "Users",
            Page::Games => "Games",
            Page::Players => "Player Management",
            Page::Financial => "Financial Reports",
            Page::Security => "Security",
            Page::Betting => "Betting History",
            Page::Withdrawals => "Withdraw History",
            Page::Status => "System Status",
        }
    }
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| Rc::new(MockData::sample()) as Rc<dyn DataSource>);
    let mut active = use_signal(|| Page::Dashboard);

    rsx! {
        div { style: "display: flex; font-family: sans-serif; min-height: 100vh;",
            nav { style: "display: flex; flex-direction: column; gap: 4px; padding: 12px; min-width: 180px; border-right: 1px solid #bbb;",
                h1 { style: "font-size: 18px;", "Casino Console" }
                for page in Page::ALL {
                    button {
                        style: if page == active() {
                            "font-weight: 600; text-align: left;"
                        } else {
                            "text-align: left;"
                        },
                        onclick: move |_| *active.write() = page,
                        "{page.title()}"
                    }
                }
            }
            main { style: "flex: 1; padding: 12px; overflow-x: auto;",
                {
                    match active() {
                        Page::Dashboard => rsx! { DashboardPage {} },
                        Page::Users => rsx! { UsersPage {} },
                        Page::Games => rsx! { GamesPage {} },
                        Page::Players => rsx! { PlayersPage {} },
                        Page::Financial => rsx! { FinancialPage {} },
                        Page::Security => rsx! { SecurityPage {} },
                        Page::Betting => rsx! { BettingHistoryPage {} },
                        Page::Withdrawals => rsx! { WithdrawHistoryPage {} },
                        Page::Status => rsx! { SystemStatusPage {} },
                    }
                }
            }
        }
    }
}
