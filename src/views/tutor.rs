use crate::ai::{self, chat_reply_stream_poll, chat_reply_stream_start};
use crate::types::{ChatMessage, Role};
use crate::views::shared::{current_time, format_message_timestamp, markdown_to_html};
use dioxus::events::Key;
use dioxus::prelude::*;
use tracing::error;

const WELCOME_MESSAGE: &str = "Olá! Sou o teu Tutor Inteligente. Posso ajudar-te a resolver exercícios de exames passados, explicar conceitos difíceis ou criar planos de estudo. O que queres aprender hoje?";

const CHAT_FALLBACK_MESSAGE: &str =
    "Desculpa, tive um problema de conexão. Verifica a tua chave API ou tenta novamente mais tarde.";

const POLL_INTERVAL: std::time::Duration = std::time::Duration::from_millis(80);

fn welcome_transcript() -> Vec<ChatMessage> {
    vec![ChatMessage {
        role: Role::Assistant,
        content: WELCOME_MESSAGE.to_string(),
        created_at: Some(current_time()),
    }]
}

fn is_streaming_message(stream: Option<usize>, index: usize) -> bool {
    matches!(stream, Some(idx) if idx == index)
}

fn is_pending_assistant(msg: &ChatMessage, stream: Option<usize>, index: usize) -> bool {
    matches!(msg.role, Role::Assistant)
        && is_streaming_message(stream, index)
        && msg.content.is_empty()
}

#[component]
pub fn TutorView() -> Element {
    if !ai::tutor_configured() {
        return rsx! {
            div { class: "main-container",
                div { class: "config-notice",
                    h3 { "Configuração Necessária" }
                    p { class: "text-muted",
                        "Para usar o Tutor IA, é necessário configurar a chave API do Gemini no ambiente (GEMINI_API_KEY)."
                    }
                }
            }
        };
    }

    let messages = use_signal(welcome_transcript);
    let mut input = use_signal(String::new);
    let sending = use_signal(|| false);
    let streaming_index = use_signal(|| Option::<usize>::None);

    let mut send_message = {
        let mut messages = messages;
        let mut streaming_index = streaming_index;
        let mut sending_signal = sending;
        let mut input_signal = input;
        move |text: String| {
            let trimmed = text.trim();
            if trimmed.is_empty() || sending_signal() {
                return;
            }

            messages.with_mut(|msgs| {
                msgs.push(ChatMessage {
                    role: Role::User,
                    content: trimmed.to_string(),
                    created_at: Some(current_time()),
                });
            });
            input_signal.set(String::new());

            let conversation_snapshot = messages();

            sending_signal.set(true);
            let mut inserted_index = 0;
            messages.with_mut(|msgs| {
                inserted_index = msgs.len();
                msgs.push(ChatMessage {
                    role: Role::Assistant,
                    content: String::new(),
                    created_at: Some(current_time()),
                });
            });
            streaming_index.set(Some(inserted_index));

            spawn(async move {
                let mut failed = false;
                match chat_reply_stream_start(conversation_snapshot).await {
                    Ok(stream_id) => loop {
                        match chat_reply_stream_poll(stream_id).await {
                            Ok((content, done)) => {
                                messages.with_mut(|msgs| {
                                    if let Some(msg) = msgs.get_mut(inserted_index) {
                                        msg.content = content.clone();
                                    }
                                });
                                if done {
                                    break;
                                }
                            }
                            Err(err) => {
                                error!("tutor stream poll error: {}", err);
                                failed = true;
                                break;
                            }
                        }
                        tokio::time::sleep(POLL_INTERVAL).await;
                    },
                    Err(err) => {
                        error!("tutor chat start error: {}", err);
                        failed = true;
                    }
                }
                if failed {
                    // One fallback message per failed turn; partial output is
                    // replaced rather than left dangling.
                    messages.with_mut(|msgs| {
                        if let Some(msg) = msgs.get_mut(inserted_index) {
                            msg.content = CHAT_FALLBACK_MESSAGE.to_string();
                        }
                    });
                }
                streaming_index.set(None);
                sending_signal.set(false);
            });
        }
    };

    let messages_snapshot = messages();
    let current_stream = streaming_index();

    rsx! {
        div { class: "main-container",
            div { class: "chat-wrap",
                div { class: "chat-header",
                    div {
                        h2 { "Tutor Inteligente STP" }
                        p { class: "text-muted", "Baseado no modelo Gemini 2.5" }
                    }
                }
                div { id: "chat-list", class: "chat-list",
                    for (i, msg) in messages_snapshot.iter().enumerate() {
                        div { class: format_args!("message-row {}", match msg.role { Role::User => "user", Role::Assistant => "assistant" }),
                            if matches!(msg.role, Role::Assistant) { div { class: "avatar assistant", "T" } }
                            div { class: "message-stack",
                                if is_pending_assistant(msg, current_stream, i) {
                                    div { class: "shimmer-line",
                                        span { class: "shimmer-text", "A pensar…" }
                                    }
                                } else {
                                    div { class: format_args!(
                                            "bubble {}",
                                            match msg.role { Role::User => "user", Role::Assistant => "assistant" },
                                        ),
                                        if matches!(msg.role, Role::Assistant) {
                                            AssistantBubble {
                                                content: msg.content.clone(),
                                                show_copy: match current_stream { Some(idx) => idx != i, None => true },
                                            }
                                        } else { "{msg.content}" }
                                    }
                                }
                                if let Some(ts) = format_message_timestamp(msg.created_at) {
                                    div { class: format_args!(
                                            "message-meta {}",
                                            match msg.role { Role::User => "align-end", Role::Assistant => "align-start" }
                                        ),
                                        span { class: "message-timestamp", "{ts}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            form { class: "composer",
                div { class: "composer-inner",
                    textarea {
                        rows: "1",
                        placeholder: "Faz uma pergunta sobre os exames...",
                        value: "{input}",
                        oninput: move |ev| input.set(ev.value()),
                        onkeydown: move |ev| {
                            if ev.key() == Key::Enter && !ev.modifiers().shift() {
                                ev.prevent_default();
                                let text = input();
                                send_message(text);
                            }
                        },
                        disabled: sending(),
                        autofocus: true,
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: sending() || input().trim().is_empty(),
                        onclick: move |_| {
                            let text = input();
                            send_message(text);
                        },
                        "Enviar"
                    }
                }
                p { class: "composer-hint text-muted",
                    "O Tutor pode cometer erros. Verifica sempre as informações importantes."
                }
            }
        }
    }
}

#[component]
fn AssistantBubble(content: String, show_copy: bool) -> Element {
    let content_html = markdown_to_html(&content);
    let copy_payload = content.clone();
    let on_copy = move |_| {
        let raw = copy_payload.clone();
        spawn(async move {
            #[cfg(any(feature = "desktop", feature = "mobile"))]
            {
                if let Ok(mut cb) = arboard::Clipboard::new() {
                    let _ = cb.set_text(raw);
                }
            }
            #[cfg(not(any(feature = "desktop", feature = "mobile")))]
            let _ = raw;
        });
    };

    rsx! {
        if show_copy {
            div { class: "bubble-controls",
                button { class: "action-btn", title: "Copiar resposta", onclick: on_copy, "Copiar" }
            }
        }
        div { class: "md", dangerous_inner_html: "{content_html}" }
    }
}
