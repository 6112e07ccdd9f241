//! Chat panel: transcript, input row, and the submission flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the optimistic-append submit path (user message first, then the
//! analysis request) and the health-check action reachable from the welcome
//! message. While a request is in flight the input row is disabled, so
//! submissions cannot overlap.
//!
//! ERROR HANDLING
//! ==============
//! HTTP and parse failures are indistinguishable to the user: both append
//! the same fixed bot message. Detail goes to the console log only.

#[cfg(test)]
#[path = "chat_panel_test.rs"]
mod chat_panel_test;

use leptos::prelude::*;

use crate::components::analysis_panel::AnalysisPanel;
use crate::net::types::HealthResponse;
use crate::state::chat::{ChatMessage, ChatState, MessageBody};

/// Fixed transcript message for any failed analysis request.
const ANALYZE_FAILED_TEXT: &str = "❌ Sunucuya bağlanırken bir hata oluştu. Backend çalışıyor mu?";

/// Fixed notice title and detail for a failed health check.
const HEALTH_FAILED_TITLE: &str = "❌ Sistem Kontrolü Hatası";
const HEALTH_FAILED_DETAIL: &str = "Backend çalışmıyor olabilir.";

const WELCOME_TITLE: &str = "👋 Patent AI Asistanına Hoş Geldiniz!";
const WELCOME_PROMPT: &str = "Bir patent fikri yazın, ben benzer patentleri bulup analiz edeyim.";
const HEALTH_BUTTON_LABEL: &str = "Sistem Durumunu Kontrol Et";
const HEALTH_HEADER: &str = "✅ Sistem Durumu";

/// Chat panel showing the transcript and an input for new submissions.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let state = chat.get();
        let _ = state.messages.len();
        let _ = state.pending;

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let raw = input.get();
        let Some(message) = validate_submission(&raw) else {
            return;
        };

        let message = message.to_owned();
        let mut accepted = false;
        chat.update(|c| accepted = c.begin_submission(message.clone()));
        if !accepted {
            return;
        }
        input.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::analyze(&message).await {
                Ok(response) => {
                    let report = crate::net::types::AnalysisReport::resolve(response);
                    chat.update(|c| c.complete_submission(ChatMessage::analysis(report)));
                }
                Err(err) => {
                    log::error!("analysis request failed: {err}");
                    chat.update(|c| {
                        c.complete_submission(ChatMessage::bot_text(ANALYZE_FAILED_TEXT.to_owned()));
                    });
                }
            }
        });
    };

    let do_health = move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_health().await {
                Ok(health) => {
                    chat.update(|c| c.push(ChatMessage::health(health)));
                }
                Err(err) => {
                    log::error!("health check failed: {err}");
                    chat.update(|c| {
                        c.push(ChatMessage::notice(
                            HEALTH_FAILED_TITLE.to_owned(),
                            HEALTH_FAILED_DETAIL.to_owned(),
                        ));
                    });
                }
            }
        });
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || !input.get().trim().is_empty() && !chat.get().pending;

    view! {
        <div class="chat-panel">
            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || {
                    let messages = chat.get().messages;
                    messages
                        .into_iter()
                        .map(|msg| message_view(msg, do_health))
                        .collect::<Vec<_>>()
                }}

                {move || {
                    chat.get()
                        .pending
                        .then(|| view! { <div class="chat-panel__loading">"Analiz ediliyor..."</div> })
                }}
            </div>

            <div class="chat-panel__input-row">
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="Patent fikrinizi yazın..."
                    disabled=move || chat.get().pending
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button
                    class="btn btn--primary chat-panel__send"
                    on:click=on_click
                    disabled=move || !can_send()
                >
                    "Gönder"
                </button>
            </div>
        </div>
    }
}

fn message_view(msg: ChatMessage, do_health: impl Fn() + Copy + 'static) -> impl IntoView {
    let row_class = format!(
        "chat-panel__message chat-panel__message--{}",
        msg.sender.css_modifier()
    );
    let body = match msg.body {
        MessageBody::Text(text) => {
            view! { <div class="chat-panel__bubble">{text}</div> }.into_any()
        }
        MessageBody::Welcome => view! {
            <div class="chat-panel__bubble">
                <strong>{WELCOME_TITLE}</strong>
                <p>{WELCOME_PROMPT}</p>
                <button class="btn chat-panel__health-button" on:click=move |_| do_health()>
                    {HEALTH_BUTTON_LABEL}
                </button>
            </div>
        }
        .into_any(),
        MessageBody::Notice { title, detail } => view! {
            <div class="chat-panel__bubble">
                <strong>{title}</strong>
                <p>{detail}</p>
            </div>
        }
        .into_any(),
        MessageBody::Health(health) => {
            let lines = health_lines(&health);
            view! {
                <div class="chat-panel__bubble">
                    <strong>{HEALTH_HEADER}</strong>
                    {lines
                        .into_iter()
                        .map(|(label, value)| {
                            view! { <div class="chat-panel__health-line">{format!("{label}: {value}")}</div> }
                        })
                        .collect::<Vec<_>>()}
                </div>
            }
            .into_any()
        }
        MessageBody::Analysis(report) => view! { <AnalysisPanel report=report/> }.into_any(),
    };

    view! { <div class=row_class>{body}</div> }
}

/// Trim the raw input; whitespace-only submissions are rejected.
fn validate_submission(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}

/// The four subsystem lines of a health message, in display order.
fn health_lines(health: &HealthResponse) -> [(&'static str, String); 4] {
    [
        ("📊 Database", health.services.database.clone()),
        ("🤖 LLM", health.services.llm_service.clone()),
        ("🔍 Patent Analiz", health.services.patent_analysis_service.clone()),
        ("📁 CSV Data", health.services.csv_data.clone()),
    ]
}
