//! Main application component.

use leptos::prelude::*;
use leptos::task::spawn_local;

use jokebox_core::{ApiConfig, HttpJokeFetcher, JokeDisplay, JokeFetcher};

use crate::components::{
    ConfigErrorPanel, Header, JokeCard, NotificationProvider, use_notifications,
};
use crate::theme::generate_css_variables;

/// Main application component.
#[component]

pub fn App() -> impl IntoView {
    // CSS variables
    let css_vars = generate_css_variables();

    view! {
        <style>{css_vars}</style>
        <style>{include_str!("../styles/main.css")}</style>
        <NotificationProvider>
            <AppContent />
        </NotificationProvider>
    }
}

/// Inner application content with access to the notification context.
#[component]
fn AppContent() -> impl IntoView {
    let notifications = use_notifications();

    // Display state; the view derives its text from this signal
    let display = RwSignal::new(JokeDisplay::new());
    let joke_text = Signal::derive(move || display.with(|d| d.text().to_string()));

    // Resolve the endpoint once at startup. Without a usable API_URL the
    // page renders a configuration error and never issues a request.
    let (config, config_error) = match ApiConfig::from_build_env() {
        Ok(config) => (Some(config), None),
        Err(e) => {
            leptos::logging::error!("Joke endpoint not configured: {}", e);
            (None, Some(e.to_string()))
        }
    };

    // One fetch-and-apply cycle, shared by the initial load and the button.
    // Overlapping cycles are allowed; the last outcome to resolve wins.
    let load_joke = {
        let config = config.clone();
        move || {
            let Some(config) = config.clone() else {
                return;
            };
            spawn_local(async move {
                leptos::logging::log!("Fetching a new joke...");
                let fetcher = HttpJokeFetcher::new(config);
                let outcome = fetcher.fetch_joke().await;
                display.update(|d| {
                    if let Some(e) = d.apply(outcome) {
                        leptos::logging::error!("Failed to fetch joke: {}", e);
                        notifications.error(format!("Failed to fetch joke: {e}"));
                    }
                });
            });
        }
    };

    // Initial load
    Effect::new({
        let load_joke = load_joke.clone();
        move || {
            load_joke();
        }
    });

    // Fetch a new joke on button click
    let on_refresh = Callback::new(move |()| load_joke());

    view! {
        <Header />
        <main class="app-main">
            {if let Some(message) = config_error {
                view! { <ConfigErrorPanel message=message /> }.into_any()
            } else {
                view! { <JokeCard joke=joke_text on_refresh=on_refresh /> }.into_any()
            }}
        </main>
    }
}
