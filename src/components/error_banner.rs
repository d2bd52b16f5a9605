//! Dismissible error banner shown above the login and register forms.

use leptos::prelude::*;

/// Inline error banner with a dismiss button. Hidden while `message` is
/// `None`.
#[component]
pub fn ErrorBanner(
    /// Message to display, usually derived from the session's `last_error`.
    #[prop(into)]
    message: Signal<Option<String>>,
    /// Invoked when the user dismisses the banner.
    on_dismiss: Callback<()>,
) -> impl IntoView {
    move || {
        message.get().map(|msg| {
            view! {
                <div class="error-banner" role="alert">
                    <span class="error-banner__message">{msg}</span>
                    <button
                        type="button"
                        class="error-banner__dismiss"
                        on:click=move |_| on_dismiss.run(())
                    >
                        "\u{d7}"
                    </button>
                </div>
            }
        })
    }
}
