//! Header button that flips the light/dark theme.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::dark_mode;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_click = move |_| {
        let current = ui.get().dark_mode;
        let next = dark_mode::toggle(current);
        ui.update(|u| u.dark_mode = next);
    };

    view! {
        <button class="theme-toggle" title="Tema değiştir" on:click=on_click>
            {move || if ui.get().dark_mode { "☀️" } else { "🌙" }}
        </button>
    }
}
