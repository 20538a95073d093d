//! Gemini integration: streaming tutor chat and one-shot study-plan
//! generation.
//!
//! Streaming uses a global stream table: `chat_reply_stream_start` spawns a
//! background task that appends SSE text chunks to an entry, and the view
//! polls `chat_reply_stream_poll` for the accumulated text until done.

use crate::types::{ChatMessage, GradeLevel, Role, Subject};
use futures::StreamExt;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    env,
    sync::{Mutex, atomic::AtomicU64},
};
use tracing::error;

const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

pub const TUTOR_SYSTEM_PROMPT: &str = "Você é um tutor inteligente e amigável para estudantes de São Tomé e Príncipe. Ajude-os a entender matérias escolares, resolver exercícios de exames passados e preparar-se para exames nacionais. Seja encorajador e claro. Use português de Portugal (padrão em STP).";

#[derive(Clone, Debug, thiserror::Error)]
pub enum AiError {
    #[error("GEMINI_API_KEY não configurada")]
    MissingApiKey,
    #[error("pedido ao Gemini falhou: {0}")]
    Request(String),
    #[error("Gemini devolveu {status}: {body}")]
    Api { status: u16, body: String },
    #[error("resposta do Gemini sem texto")]
    EmptyResponse,
    #[error("stream id inválido")]
    UnknownStream,
}

impl From<reqwest::Error> for AiError {
    fn from(err: reqwest::Error) -> Self {
        AiError::Request(err.to_string())
    }
}

pub type AiResult<T> = Result<T, AiError>;

/// The tutor feature is disabled entirely when no key is present.
pub fn tutor_configured() -> bool {
    env::var("GEMINI_API_KEY").is_ok_and(|key| !key.trim().is_empty())
}

fn api_key() -> AiResult<String> {
    env::var("GEMINI_API_KEY")
        .ok()
        .filter(|key| !key.trim().is_empty())
        .ok_or(AiError::MissingApiKey)
}

fn model_name() -> String {
    env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string())
}

fn endpoint_base() -> String {
    let base = env::var("GEMINI_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
    base.trim_end_matches('/').to_string()
}

// ---------------
// Wire format (generativelanguage v1beta)
// ---------------

#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(rename = "systemInstruction", skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent>,
}

#[derive(Serialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<GeminiPart>,
}

#[derive(Serialize)]
struct GeminiPart {
    text: String,
}

#[derive(Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

#[derive(Deserialize)]
pub struct GeminiCandidate {
    pub content: Option<GeminiResponseContent>,
    #[serde(rename = "finishReason")]
    pub finish_reason: Option<String>,
}

#[derive(Deserialize)]
pub struct GeminiResponseContent {
    #[serde(default)]
    pub parts: Vec<GeminiResponsePart>,
}

#[derive(Deserialize)]
pub struct GeminiResponsePart {
    pub text: Option<String>,
}

fn content_from_text(role: Option<&str>, text: &str) -> GeminiContent {
    GeminiContent {
        role: role.map(|r| r.to_string()),
        parts: vec![GeminiPart {
            text: text.to_string(),
        }],
    }
}

/// Gemini names the assistant role "model" and requires the history to
/// open with a user turn, so leading assistant messages (the local
/// welcome bubble) are not forwarded.
fn contents_from_messages(messages: &[ChatMessage]) -> Vec<GeminiContent> {
    let first_user = messages
        .iter()
        .position(|msg| matches!(msg.role, Role::User))
        .unwrap_or(messages.len());
    messages[first_user..]
        .iter()
        .map(|msg| {
            let role = match msg.role {
                Role::User => "user",
                Role::Assistant => "model",
            };
            content_from_text(Some(role), &msg.content)
        })
        .collect()
}

pub fn response_text(response: &GeminiResponse) -> String {
    let mut text = String::new();
    for candidate in &response.candidates {
        if let Some(content) = &candidate.content {
            for part in &content.parts {
                if let Some(piece) = &part.text {
                    text.push_str(piece);
                }
            }
        }
    }
    text
}

// ---------------
// Streaming tutor chat
// ---------------

static STREAMS: Lazy<Mutex<HashMap<u64, StreamEntry>>> = Lazy::new(|| Mutex::new(HashMap::new()));
static STREAM_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Default)]
struct StreamEntry {
    buffer: String,
    done: bool,
    failed: Option<String>,
}

fn register_stream() -> u64 {
    let id = STREAM_COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
    let mut map = STREAMS.lock().unwrap();
    map.insert(id, StreamEntry::default());
    id
}

fn append_stream(id: u64, piece: &str) {
    let mut map = STREAMS.lock().unwrap();
    if let Some(entry) = map.get_mut(&id) {
        entry.buffer.push_str(piece);
    }
}

fn mark_stream_done(id: u64) {
    let mut map = STREAMS.lock().unwrap();
    if let Some(entry) = map.get_mut(&id) {
        entry.done = true;
    }
}

fn fail_stream(id: u64, message: &str) {
    let mut map = STREAMS.lock().unwrap();
    if let Some(entry) = map.get_mut(&id) {
        entry.done = true;
        entry.failed = Some(message.to_string());
    }
}

/// Opens a tutor turn. The conversation snapshot is forwarded from its
/// first user turn onward; the tutor persona rides along as the system
/// instruction.
pub async fn chat_reply_stream_start(messages: Vec<ChatMessage>) -> AiResult<u64> {
    let key = api_key()?;
    let id = register_stream();

    tokio::spawn(async move {
        if let Err(err) = stream_from_gemini(id, key, messages).await {
            error!("gemini stream error: {}", err);
            fail_stream(id, &err.to_string());
        }
    });

    Ok(id)
}

/// Returns the accumulated text so far and whether the turn finished. A turn
/// that failed remotely surfaces the error here instead. Finished turns are
/// removed from the table on observation, so the final state is reported
/// exactly once and the table does not grow for the life of the process.
pub async fn chat_reply_stream_poll(id: u64) -> AiResult<(String, bool)> {
    let mut map = STREAMS.lock().unwrap();
    {
        let entry = map.get(&id).ok_or(AiError::UnknownStream)?;
        if !entry.done {
            return Ok((entry.buffer.clone(), false));
        }
    }
    let entry = map.remove(&id).ok_or(AiError::UnknownStream)?;
    match entry.failed {
        Some(message) => Err(AiError::Request(message)),
        None => Ok((entry.buffer, true)),
    }
}

async fn stream_from_gemini(id: u64, key: String, messages: Vec<ChatMessage>) -> AiResult<()> {
    let url = format!(
        "{}/models/{}:streamGenerateContent?alt=sse",
        endpoint_base(),
        model_name()
    );
    let request = GeminiRequest {
        contents: contents_from_messages(&messages),
        system_instruction: Some(content_from_text(None, TUTOR_SYSTEM_PROMPT)),
    };

    let client = reqwest::Client::new();
    let res = client
        .post(url)
        .header("x-goog-api-key", key)
        .header("accept", "text/event-stream")
        .json(&request)
        .send()
        .await?;

    let status = res.status();
    if !status.is_success() {
        let body = res.text().await.unwrap_or_default();
        return Err(AiError::Api {
            status: status.as_u16(),
            body,
        });
    }

    // Parse SSE by lines. Collect consecutive data: lines until a blank
    // line, then process the event.
    let mut buffer = String::new();
    let mut data_acc: Option<String> = None;
    let mut stream = res.bytes_stream();
    while let Some(item) = stream.next().await {
        match item {
            Ok(bytes) => {
                let chunk = String::from_utf8_lossy(&bytes);
                buffer.push_str(&chunk);
                while let Some(pos) = buffer.find('\n') {
                    let mut line = buffer[..pos].to_string();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                    buffer = buffer[pos + 1..].to_string();

                    if line.is_empty() {
                        // End of event
                        if let Some(data) = data_acc.take()
                            && let Some((piece, done)) = parse_gemini_sse_data(&data)
                        {
                            if !piece.is_empty() {
                                append_stream(id, &piece);
                            }
                            if done {
                                mark_stream_done(id);
                                return Ok(());
                            }
                        }
                        continue;
                    }

                    if let Some(rest) = line.strip_prefix("data:") {
                        let s = rest.trim_start();
                        match &mut data_acc {
                            Some(acc) => acc.push_str(s),
                            None => data_acc = Some(s.to_string()),
                        }
                    }
                }
            }
            Err(e) => return Err(AiError::from(e)),
        }
    }

    // Trailing event without a final blank line
    if let Some(data) = data_acc.take()
        && let Some((piece, _)) = parse_gemini_sse_data(&data)
        && !piece.is_empty()
    {
        append_stream(id, &piece);
    }

    mark_stream_done(id);
    Ok(())
}

/// Extracts the text piece from one SSE data payload. The turn is done on
/// `[DONE]` or when a candidate carries a finish reason.
pub fn parse_gemini_sse_data(data: &str) -> Option<(String, bool)> {
    let trimmed = data.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed == "[DONE]" {
        return Some((String::new(), true));
    }

    let parsed = serde_json::from_str::<GeminiResponse>(trimmed).ok()?;
    let done = parsed
        .candidates
        .iter()
        .any(|candidate| candidate.finish_reason.is_some());
    Some((response_text(&parsed), done))
}

// ---------------
// Study-plan generation (single request/response)
// ---------------

pub fn build_study_plan_prompt(subject: Subject, grade: GradeLevel, focus_area: &str) -> String {
    format!(
        "Aja como um professor experiente do sistema de ensino de São Tomé e Príncipe (baseado no currículo português).\n\
         Crie um plano de estudos resumido para um aluno da {} na disciplina de {}.\n\
         O foco específico do aluno é: \"{}\".\n\n\
         O plano deve incluir:\n\
         1. Principais tópicos a revisar.\n\
         2. Uma sugestão de exercício prático ou pergunta de reflexão.\n\
         3. Dica de gestão de tempo para o exame.\n\n\
         Responda em Markdown limpo e formatado.",
        grade.label(),
        subject.label(),
        focus_area.trim()
    )
}

pub async fn create_study_plan(
    subject: Subject,
    grade: GradeLevel,
    focus_area: &str,
) -> AiResult<String> {
    let key = api_key()?;
    let url = format!("{}/models/{}:generateContent", endpoint_base(), model_name());
    let prompt = build_study_plan_prompt(subject, grade, focus_area);
    let request = GeminiRequest {
        contents: vec![content_from_text(Some("user"), &prompt)],
        system_instruction: None,
    };

    let client = reqwest::Client::new();
    let res = client
        .post(url)
        .header("x-goog-api-key", key)
        .json(&request)
        .send()
        .await?;

    let status = res.status();
    let body = res.text().await?;
    if !status.is_success() {
        return Err(AiError::Api {
            status: status.as_u16(),
            body,
        });
    }

    let parsed: GeminiResponse =
        serde_json::from_str(&body).map_err(|e| AiError::Request(e.to_string()))?;
    let text = response_text(&parsed);
    if text.is_empty() {
        return Err(AiError::EmptyResponse);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_gemini_sse_chunks() {
        let lines = vec![
            r#"{"candidates":[{"content":{"parts":[{"text":"Olá"}],"role":"model"}}]}"#,
            r#"{"candidates":[{"content":{"parts":[{"text":", estudante!"}],"role":"model"},"finishReason":"STOP"}]}"#,
        ];
        let mut acc = String::new();
        let mut finished = false;
        for l in lines {
            if let Some((piece, done)) = parse_gemini_sse_data(l) {
                acc.push_str(&piece);
                finished = done;
            }
        }
        assert_eq!(acc, "Olá, estudante!");
        assert!(finished);
    }

    #[test]
    fn test_parse_done_marker() {
        assert_eq!(parse_gemini_sse_data("[DONE]"), Some((String::new(), true)));
        assert_eq!(parse_gemini_sse_data("   "), None);
        assert_eq!(parse_gemini_sse_data("not json"), None);
    }

    #[test]
    fn test_chunk_without_finish_reason_is_not_done() {
        let chunk = r#"{"candidates":[{"content":{"parts":[{"text":"parcial"}]}}]}"#;
        assert_eq!(
            parse_gemini_sse_data(chunk),
            Some(("parcial".to_string(), false))
        );
    }

    #[test]
    fn test_assistant_role_maps_to_model() {
        let messages = vec![
            ChatMessage {
                role: Role::User,
                content: "pergunta".to_string(),
                created_at: None,
            },
            ChatMessage {
                role: Role::Assistant,
                content: "resposta".to_string(),
                created_at: None,
            },
        ];
        let contents = contents_from_messages(&messages);
        assert_eq!(contents[0].role.as_deref(), Some("user"));
        assert_eq!(contents[1].role.as_deref(), Some("model"));
    }

    #[test]
    fn test_study_plan_prompt_interpolation() {
        let prompt = build_study_plan_prompt(
            Subject::Matematica,
            GradeLevel::DecimaSegunda,
            "Geometria no espaço",
        );
        assert!(prompt.contains("Matemática"));
        assert!(prompt.contains("12ª Classe"));
        assert!(prompt.contains("Geometria no espaço"));
        assert!(prompt.contains("Markdown"));
    }

    #[test]
    fn test_leading_assistant_messages_are_not_forwarded() {
        let welcome = ChatMessage {
            role: Role::Assistant,
            content: "bem-vindo".to_string(),
            created_at: None,
        };
        let messages = vec![
            welcome.clone(),
            ChatMessage {
                role: Role::User,
                content: "pergunta".to_string(),
                created_at: None,
            },
            ChatMessage {
                role: Role::Assistant,
                content: "resposta".to_string(),
                created_at: None,
            },
        ];
        let contents = contents_from_messages(&messages);
        assert_eq!(contents.len(), 2);
        assert_eq!(contents[0].role.as_deref(), Some("user"));

        // A transcript with no user turn yet sends nothing.
        assert!(contents_from_messages(&[welcome]).is_empty());
    }

    #[tokio::test]
    async fn test_stream_poll_reports_partial_then_final() {
        let id = register_stream();
        append_stream(id, "primeiro ");
        let (partial, done) = chat_reply_stream_poll(id).await.expect("partial poll");
        assert_eq!(partial, "primeiro ");
        assert!(!done);

        append_stream(id, "segundo");
        mark_stream_done(id);
        let (full, done) = chat_reply_stream_poll(id).await.expect("final poll");
        assert_eq!(full, "primeiro segundo");
        assert!(done);

        // Observing the finished turn removes it from the table.
        assert!(matches!(
            chat_reply_stream_poll(id).await,
            Err(AiError::UnknownStream)
        ));
    }

    #[tokio::test]
    async fn test_failed_stream_polls_as_error() {
        let id = register_stream();
        append_stream(id, "parcial");
        fail_stream(id, "ligação recusada");

        let err = chat_reply_stream_poll(id).await.expect_err("failed turn");
        assert!(matches!(err, AiError::Request(ref msg) if msg == "ligação recusada"));
    }

    #[tokio::test]
    async fn test_poll_with_unknown_stream_id() {
        assert!(matches!(
            chat_reply_stream_poll(u64::MAX).await,
            Err(AiError::UnknownStream)
        ));
    }
}
