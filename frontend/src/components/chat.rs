use leptos::ev;
use leptos::prelude::*;

use crate::models::Role;
use crate::session::SUGGESTIONS;
use crate::state::AppState;

/// Main chat area with message history, suggestions, and input.
#[component]
pub fn ChatArea() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <main class="chat-area">
            // Error banner
            {move || {
                state.session.with(|s| s.error().map(str::to_string)).map(|err| {
                    view! { <div class="error-banner">{err}</div> }
                })
            }}

            <header class="chat-header">
                <h1>"Ask our AI anything"</h1>
            </header>

            // Messages
            <div class="messages-container">
                <For
                    each=move || state.session.with(|s| s.messages().to_vec())
                    key=|m| m.id
                    let:msg
                >
                    <MessageBubble role=msg.role content=msg.content />
                </For>
                <Show when=move || state.session.with(|s| s.is_typing())>
                    <TypingIndicator />
                </Show>
            </div>

            <Suggestions />
            <ChatInput />
        </main>
    }
}

/// A single chat message bubble.
#[component]
fn MessageBubble(role: Role, content: String) -> impl IntoView {
    let (row_class, bubble_class) = match role {
        Role::User => ("message-row user", "bubble bubble-user"),
        Role::Assistant => ("message-row assistant", "bubble bubble-assistant"),
    };

    view! {
        <div class=row_class>
            <div class=bubble_class>{content}</div>
        </div>
    }
}

#[component]
fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="typing">
            <span class="dot" />
            <span class="dot" />
            <span class="dot" />
        </div>
    }
}

/// Canned prompts; clicking one only fills the input.
#[component]
fn Suggestions() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <div class="suggestions">
            <h2>"Suggestions on what to ask Our AI"</h2>
            <div class="suggestion-row">
                {SUGGESTIONS
                    .iter()
                    .map(|&suggestion| {
                        view! {
                            <button
                                type="button"
                                class="suggestion"
                                on:click=move |_| state.apply_suggestion(suggestion)
                            >
                                {suggestion}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Chat input form. Disabled while a reply is pending.
#[component]
fn ChatInput() -> impl IntoView {
    let state = expect_context::<AppState>();

    let is_sending = move || state.session.with(|s| s.is_submitting());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        state.submit();
    };

    view! {
        <form class="input-row" aria-label="Chat input form" on:submit=on_submit>
            <label for="chat-input" class="sr-only">
                "Ask me anything about your projects"
            </label>
            <input
                id="chat-input"
                placeholder="Ask me anything about your projects"
                prop:value=move || state.session.with(|s| s.input().to_string())
                on:input=move |ev| state.set_input(event_target_value(&ev))
                disabled=is_sending
            />
            <button type="submit" class="send-btn" aria-label="Send" disabled=is_sending>
                {move || if is_sending() { "Sending…" } else { "Send" }}
            </button>
        </form>
    }
}
