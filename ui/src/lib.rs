// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod app_state_mut;
pub mod compat;
mod components;
pub mod hooks;
mod screens;

use api::history::abbreviate_hash;
use api::prefs::user_prefs::UserPrefs;
use app_state::AppState;
use app_state_mut::AppStateMut;
use components::pico::Container;
use components::token_chooser::TokenChooser;
use hooks::use_connection_checker::ConnectionStatus;
use screens::faq::FaqScreen;
use screens::history::HistoryScreen;
use screens::stake::StakeScreen;
use screens::unstake::UnstakeScreen;

/// Enum to represent the different screens in our application.
#[derive(Clone, Copy, PartialEq, Default)]
enum Screen {
    #[default]
    Stake,
    Unstake,
    History,
    Faq,
}

impl Screen {
    /// Helper to get the display name for each screen.
    fn name(&self) -> &'static str {
        match self {
            Screen::Stake => "Stake",
            Screen::Unstake => "Unstake",
            Screen::History => "History",
            Screen::Faq => "FAQ",
        }
    }
}

/// A list of all available screens for easy iteration.
const ALL_SCREENS: [Screen; 4] = [Screen::Stake, Screen::Unstake, Screen::History, Screen::Faq];

/// The navigation tabs component.
#[component]
fn Tabs(active_screen: Signal<Screen>) -> Element {
    rsx! {
        nav {
            class: "tab-menu",
            ul {
                for screen in ALL_SCREENS {
                    li {
                        a {
                            href: "#",
                            class: if active_screen() == screen { "active-tab" } else { "" },
                            "aria-current": if active_screen() == screen { "page" } else { "false" },
                            onclick: move |event| {
                                event.prevent_default();
                                active_screen.set(screen);
                            },
                            "{screen.name()}"
                        }
                    }
                }
            }
        }
    }
}

#[allow(non_snake_case)]
pub fn App() -> Element {
    let responsive_css = r#"
    * { box-sizing: border-box; }

    .tab-menu a.active-tab {
        color: var(--pico-primary) !important;
        text-decoration: none;
        border-bottom: 3px solid var(--pico-primary);
    }

    .tab-menu a:not(.active-tab) {
        color: var(--pico-muted-color);
        border-bottom: 3px solid transparent;
    }

    .content {
        padding: 0 1rem;
    }

    .wallet-address {
        font-family: var(--pico-font-family-monospace, monospace);
        font-size: 0.85rem;
        color: var(--pico-muted-color);
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css",
        }
        style {
            "{responsive_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // Processed on the server before the initial page is delivered.
    let initial_data_future = use_server_future(move || async move {
        let (prefs_result, account_result) =
            tokio::join!(api::get_user_prefs(), api::connected_account());

        let user_prefs = prefs_result?;
        // A signer that is down at startup is not fatal; the connect button
        // retries on demand.
        let account = account_result.unwrap_or_default();

        dioxus_logger::tracing::info!("prefs: {:?}, account: {:?}", user_prefs, account);

        Ok::<_, api::ApiError>((user_prefs, account))
    })?;

    // Read from the single future to ensure it's polled during SSR.
    let body = match &*initial_data_future.read() {
        Some(Ok((prefs, account))) => {
            rsx! {
                LoadedApp {
                    user_prefs: *prefs,
                    initial_account: account.clone(),
                }
            }
        }
        Some(Err(e)) => rsx! {
            p {
                "An error occurred: {e}"
            }
        },
        _ => rsx! {
            p {
                "Loading..."
            }
        },
    };
    body
}

/// This component holds the main app logic and only runs when data is ready.
#[component]
fn LoadedApp(user_prefs: UserPrefs, initial_account: Option<String>) -> Element {
    // Provide the stable, non-reactive AppState.
    use_context_provider(|| AppState::new(user_prefs));

    // Create signals for mutable state at the top level of the component.
    let token_signal = use_signal(|| user_prefs.default_token());
    let account_signal = use_signal(|| initial_account.clone());
    let balances_signal = use_signal(|| None);
    let staking_history_signal = use_signal(|| None);
    let transfers_signal = use_signal(|| None);
    let balances_refreshing_signal = use_signal(|| false);
    let history_refreshing_signal = use_signal(|| false);
    let connection_signal = use_signal(|| ConnectionStatus::Connected);

    use_context_provider(|| connection_signal);
    use_context_provider(|| AppStateMut {
        token: token_signal,
        account: account_signal,
        balances: balances_signal,
        staking_history: staking_history_signal,
        transfers: transfers_signal,
        balances_refreshing: balances_refreshing_signal,
        history_refreshing: history_refreshing_signal,
        connection: connection_signal,
    });
    let app = use_context::<AppStateMut>();

    // Populate balances and history once if an account was already connected.
    use_effect(move || {
        if app.account.peek().is_some() && app.balances.peek().is_none() {
            spawn(async move {
                app.refresh_balances().await;
                app.refresh_history().await;
            });
        }
    });

    // Keep the balance figures reasonably fresh while the tab stays open.
    use_coroutine(move |_rx: UnboundedReceiver<()>| async move {
        loop {
            compat::sleep(std::time::Duration::from_secs(60)).await;
            app.refresh_balances().await;
        }
    });

    let active_screen = use_signal(Screen::default);
    let theme = use_context::<AppState>().user_prefs.theme();
    let connected_address = app.account.read().clone();

    rsx! {
        div {
            "data-theme": theme.html_attribute(),
            Container {
                header {
                    nav {
                        ul {
                            li {
                                h1 {
                                    style: "margin: 0; font-size: 1.5rem;",
                                    "Staking Hub"
                                }
                            }
                        }
                        ul {
                            li {
                                Tabs {
                                    active_screen,
                                }
                            }
                            li {
                                TokenChooser {}
                            }
                            if let Some(address) = connected_address {
                                li {
                                    span {
                                        class: "wallet-address",
                                        title: "{address}",
                                        "{abbreviate_hash(&address)}"
                                    }
                                }
                            }
                        }
                    }
                    if connection_signal.read().is_disconnected() {
                        p {
                            style: "color: var(--pico-del-color); margin: 0;",
                            "Backend unreachable. Retrying in the background."
                        }
                    }
                }
                div {
                    class: "content",
                    match active_screen() {
                        Screen::Stake => rsx! {
                            StakeScreen {}
                        },
                        Screen::Unstake => rsx! {
                            UnstakeScreen {}
                        },
                        Screen::History => rsx! {
                            HistoryScreen {}
                        },
                        Screen::Faq => rsx! {
                            FaqScreen {}
                        },
                    }
                }
            }
        }
    }
}
