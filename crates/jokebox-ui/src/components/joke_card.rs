//! Joke card: the display node, the laughing-face image, and the trigger
//! button.

use leptos::prelude::*;

/// Bundled laughing-face asset path, emitted next to the page by the
/// bundler.
pub const LAUGHING_ICON_SRC: &str = "assets/laughing.svg";

/// Card showing the current joke with a button to fetch another one.
///
/// The image source is a static attribute: it is set once when the card
/// first renders and never reassigned.
#[component]

pub fn JokeCard(
    /// The joke text currently shown.
    joke: Signal<String>,
    /// Callback when the button is clicked.
    on_refresh: Callback<()>,
) -> impl IntoView {
    view! {
        <section class="joke-card">
            <img
                id="laughImg"
                class="joke-card-icon"
                src=LAUGHING_ICON_SRC
                alt="Laughing face"
            />
            <p id="joke" class="joke-card-text" data-testid="joke-text">
                {move || joke.get()}
            </p>
            <button
                id="jokeBtn"
                class="btn btn-primary"
                data-testid="joke-refresh"
                on:click=move |_| on_refresh.run(())
            >
                "Get Another Joke"
            </button>
        </section>
    }
}

/// Panel shown instead of the card when the endpoint is not configured.
#[component]

pub fn ConfigErrorPanel(
    /// The configuration error message.
    message: String,
) -> impl IntoView {
    view! {
        <section class="config-error" data-testid="config-error">
            <h3 class="config-error-title">"Jokebox is not configured"</h3>
            <p class="config-error-message">{message}</p>
            <p class="config-error-hint">
                "Set API_URL when building, e.g. "
                <code>"API_URL=https://icanhazdadjoke.com trunk serve"</code>
            </p>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_source_is_the_bundled_asset_path() {
        assert_eq!(LAUGHING_ICON_SRC, "assets/laughing.svg");
    }
}
