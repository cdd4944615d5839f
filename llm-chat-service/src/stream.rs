//! Incremental response decoding.
//!
//! The two supported backends frame streamed text differently:
//! - Ollama emits newline-delimited JSON objects with a `response` field
//!   and optional `thought`/`thinking` fields.
//! - Groq/OpenAI emit SSE-style `data: ` lines carrying chat-completion
//!   chunks, terminated by a literal `data: [DONE]`.
//!
//! [`StreamAssembler`] depends only on the [`StreamFrameParser`] seam and
//! owns the per-request state: the carry buffer for frames split across
//! reads, the text accumulator, and the last surfaced thinking fragment.
//! Malformed lines are dropped silently; the stream continues.

use serde::Deserialize;

use crate::config::llm_provider::LlmProvider;

/// What one complete frame line contributed.
#[derive(Debug, Default, PartialEq)]
pub struct Frame {
    /// Text appended to the reply.
    pub content: Option<String>,
    /// Chain-of-thought fragment, surfaced as a status update only.
    pub thinking: Option<String>,
}

/// Parses one complete line of decoded stream text into a [`Frame`].
pub trait StreamFrameParser: Send {
    fn parse_line(&mut self, line: &str) -> Frame;
}

/// Newline-delimited JSON framing (Ollama `/api/generate`).
#[derive(Debug, Default)]
pub struct NdjsonParser;

#[derive(Debug, Deserialize)]
struct NdjsonLine {
    response: Option<String>,
    thought: Option<String>,
    thinking: Option<String>,
}

impl StreamFrameParser for NdjsonParser {
    fn parse_line(&mut self, line: &str) -> Frame {
        match serde_json::from_str::<NdjsonLine>(line) {
            Ok(parsed) => Frame {
                content: parsed.response,
                thinking: parsed.thought.or(parsed.thinking),
            },
            // Malformed lines are skipped, not fatal.
            Err(_) => Frame::default(),
        }
    }
}

/// SSE `data:` framing (Groq/OpenAI chat completions).
#[derive(Debug, Default)]
pub struct SseParser;

#[derive(Debug, Deserialize)]
struct SseChunk {
    #[serde(default)]
    choices: Vec<SseChoice>,
}

#[derive(Debug, Deserialize)]
struct SseChoice {
    delta: Option<SseDelta>,
}

#[derive(Debug, Deserialize)]
struct SseDelta {
    content: Option<String>,
}

impl StreamFrameParser for SseParser {
    fn parse_line(&mut self, line: &str) -> Frame {
        let Some(payload) = line.strip_prefix("data: ") else {
            return Frame::default();
        };
        // `[DONE]` ends this line's payload, not the stream.
        if payload.trim() == "[DONE]" {
            return Frame::default();
        }
        match serde_json::from_str::<SseChunk>(payload) {
            Ok(chunk) => Frame {
                content: chunk
                    .choices
                    .into_iter()
                    .next()
                    .and_then(|c| c.delta)
                    .and_then(|d| d.content),
                thinking: None,
            },
            Err(_) => Frame::default(),
        }
    }
}

/// Picks the frame parser for a backend.
pub fn parser_for(provider: LlmProvider) -> Box<dyn StreamFrameParser> {
    if provider.is_openai_compatible() {
        Box::new(SseParser)
    } else {
        Box::new(NdjsonParser)
    }
}

/// Interim progress surfaced while a response streams in.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamUpdate {
    /// The full reply text accumulated so far.
    Text(String),
    /// A new chain-of-thought fragment (only with show-thinking on).
    Thinking(String),
}

/// Accumulates one in-flight streamed response.
///
/// Created per request, dropped when the stream ends or errors; a partial
/// accumulator from a failed request is never committed anywhere.
pub struct StreamAssembler {
    parser: Box<dyn StreamFrameParser>,
    show_thinking: bool,
    carry: String,
    text: String,
    last_thought: Option<String>,
}

impl StreamAssembler {
    pub fn new(provider: LlmProvider, show_thinking: bool) -> Self {
        Self {
            parser: parser_for(provider),
            show_thinking,
            carry: String::new(),
            text: String::new(),
            last_thought: None,
        }
    }

    /// Decode one chunk of the response body and fold complete lines into
    /// the accumulator. Returns the interim updates the chunk produced.
    pub fn push_chunk(&mut self, chunk: &[u8]) -> Vec<StreamUpdate> {
        self.carry.push_str(&String::from_utf8_lossy(chunk));

        let mut updates = Vec::new();
        while let Some(newline) = self.carry.find('\n') {
            let line: String = self.carry.drain(..=newline).collect();
            self.apply_line(line.trim(), &mut updates);
        }
        updates
    }

    /// Flush any trailing unterminated line and return the finished text.
    pub fn finish(mut self) -> String {
        let trailing = std::mem::take(&mut self.carry);
        let mut updates = Vec::new();
        self.apply_line(trailing.trim(), &mut updates);
        self.text
    }

    /// The reply text accumulated so far.
    pub fn text(&self) -> &str {
        &self.text
    }

    fn apply_line(&mut self, line: &str, updates: &mut Vec<StreamUpdate>) {
        if line.is_empty() {
            return;
        }
        let frame = self.parser.parse_line(line);

        if let Some(thought) = frame.thinking {
            // Re-emitting the same thought every frame is just noise.
            if self.show_thinking && self.last_thought.as_deref() != Some(thought.as_str()) {
                updates.push(StreamUpdate::Thinking(thought.clone()));
                self.last_thought = Some(thought);
            }
        }
        if let Some(content) = frame.content {
            self.text.push_str(&content);
            updates.push(StreamUpdate::Text(self.text.clone()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sse_deltas_accumulate_until_done() {
        let mut asm = StreamAssembler::new(LlmProvider::Groq, false);
        asm.push_chunk(b"data: {\"choices\":[{\"delta\":{\"content\":\"Hi\"}}]}\n");
        asm.push_chunk(b"data: {\"choices\":[{\"delta\":{\"content\":\" there\"}}]}\n");
        asm.push_chunk(b"data: [DONE]\n");
        assert_eq!(asm.finish(), "Hi there");
    }

    #[test]
    fn sse_frames_split_across_chunks_still_parse() {
        let mut asm = StreamAssembler::new(LlmProvider::OpenAi, false);
        asm.push_chunk(b"data: {\"choices\":[{\"delta\":");
        asm.push_chunk(b"{\"content\":\"Hello\"}}]}\n");
        assert_eq!(asm.text(), "Hello");
    }

    #[test]
    fn malformed_lines_are_skipped_silently() {
        let mut asm = StreamAssembler::new(LlmProvider::Groq, false);
        asm.push_chunk(b"data: {not json}\n");
        asm.push_chunk(b"noise without prefix\n");
        asm.push_chunk(b"data: {\"choices\":[{\"delta\":{\"content\":\"ok\"}}]}\n");
        assert_eq!(asm.finish(), "ok");
    }

    #[test]
    fn ndjson_appends_response_fields() {
        let mut asm = StreamAssembler::new(LlmProvider::Ollama, false);
        asm.push_chunk(b"{\"response\":\"Good \"}\n{\"response\":\"morning\"}\n");
        assert_eq!(asm.finish(), "Good morning");
    }

    #[test]
    fn ndjson_trailing_line_without_newline_is_flushed_on_finish() {
        let mut asm = StreamAssembler::new(LlmProvider::Ollama, false);
        asm.push_chunk(b"{\"response\":\"partial\"}");
        assert_eq!(asm.text(), "");
        assert_eq!(asm.finish(), "partial");
    }

    #[test]
    fn duplicate_thoughts_surface_once_and_only_when_enabled() {
        let mut asm = StreamAssembler::new(LlmProvider::Ollama, true);
        let first = asm.push_chunk(b"{\"thinking\":\"hmm\"}\n");
        assert_eq!(first, vec![StreamUpdate::Thinking("hmm".into())]);
        let repeat = asm.push_chunk(b"{\"thinking\":\"hmm\"}\n");
        assert!(repeat.is_empty());

        let mut quiet = StreamAssembler::new(LlmProvider::Ollama, false);
        assert!(quiet.push_chunk(b"{\"thought\":\"hmm\"}\n").is_empty());
    }

    #[test]
    fn text_updates_carry_the_running_accumulator() {
        let mut asm = StreamAssembler::new(LlmProvider::Ollama, false);
        let updates = asm.push_chunk(b"{\"response\":\"a\"}\n{\"response\":\"b\"}\n");
        assert_eq!(
            updates,
            vec![StreamUpdate::Text("a".into()), StreamUpdate::Text("ab".into())]
        );
    }
}
