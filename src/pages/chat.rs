//! The single page of the app: header plus chat panel.
//!
//! DESIGN
//! ======
//! Schedules the welcome message once, about a second after hydration, so
//! the transcript opens with the assistant speaking first. Everything else
//! lives in the chat panel.

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;
use crate::components::theme_toggle::ThemeToggle;
use crate::state::chat::ChatState;

#[component]
pub fn ChatPage() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    Effect::new(move || schedule_welcome(chat));

    view! {
        <div class="chat-page">
            <header class="chat-page__header">
                <h1 class="chat-page__title">"🤖 Patent AI Asistanı"</h1>
                <ThemeToggle/>
            </header>
            <main class="chat-page__body">
                <ChatPanel/>
            </main>
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn schedule_welcome(chat: RwSignal<ChatState>) {
    use crate::state::chat::ChatMessage;

    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(1_000)).await;
        chat.update(|c| c.push(ChatMessage::welcome()));
    });
}

#[cfg(not(feature = "hydrate"))]
fn schedule_welcome(_chat: RwSignal<ChatState>) {}
