use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::session::ChatSession;

/// Shared application state, provided via Leptos context.
#[derive(Clone, Copy)]
pub struct AppState {
    pub session: ReadSignal<ChatSession>,
    pub set_session: WriteSignal<ChatSession>,
}

impl AppState {
    /// Create a new `AppState` and provide it in the current Leptos context.
    pub fn provide() -> Self {
        let (session, set_session) = signal(ChatSession::new());
        let state = Self { session, set_session };
        provide_context(state);
        state
    }

    pub fn set_input(&self, text: String) {
        self.set_session.update(|s| s.set_input(text));
    }

    pub fn apply_suggestion(&self, suggestion: &'static str) {
        self.set_session.update(|s| s.apply_suggestion(suggestion));
    }

    /// Send the current input to the relay. No-op while a reply is pending.
    pub fn submit(&self) {
        let mut request = None;
        self.set_session.update(|s| request = s.begin_submit());
        let Some(request) = request else {
            return;
        };

        let set_session = self.set_session;
        spawn_local(async move {
            let outcome = api::send_chat(&request).await;
            if let Err(e) = &outcome {
                log::error!("chat error: {e}");
            }
            set_session.update(|s| s.finish(outcome));
        });
    }
}
