//! Transcript and send-queue state for the chat widget.
//!
//! Sends are serialized: one request in flight, later submissions queue
//! behind it, so assistant replies always land in send order even if the
//! user fires messages rapidly.

use std::collections::VecDeque;

use shared::{ApiError, ChatRequest, ChatResponse};

/// Greeting shown while the transcript is empty.
pub const GREETING: &str =
    "Hello! I'm here to help with beauty tips and salon information. Ask me anything!";

/// Bubble shown when the server answered with an error status.
pub const PROCESSING_FALLBACK: &str =
    "Sorry, I had trouble processing your message. Please try again.";

/// Bubble shown when no response was received at all.
pub const CONNECTING_FALLBACK: &str = "Sorry, I had trouble connecting. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatLine {
    pub text: String,
    pub sender: Sender,
}

impl ChatLine {
    fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
        }
    }

    fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Bot,
        }
    }
}

/// Outcome of submitting input to the log.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// Input was blank after trimming; nothing happened
    Rejected,
    /// A request is already in flight; the message waits its turn
    Queued,
    /// The caller should dispatch this message now
    Dispatch(String),
}

/// Local-only chat state: transcript, session id, pending sends.
///
/// Reset on page reload by construction; nothing here is persisted.
#[derive(Debug, Default)]
pub struct ChatLog {
    lines: Vec<ChatLine>,
    session_id: String,
    queue: VecDeque<String>,
    in_flight: bool,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[ChatLine] {
        &self.lines
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Accept user input. The user's line is appended immediately regardless
    /// of what the request will return; blank input is a strict no-op.
    pub fn submit(&mut self, input: &str) -> Submission {
        let text = input.trim();
        if text.is_empty() {
            return Submission::Rejected;
        }
        self.lines.push(ChatLine::user(text));
        if self.in_flight {
            self.queue.push_back(text.to_string());
            Submission::Queued
        } else {
            self.in_flight = true;
            Submission::Dispatch(text.to_string())
        }
    }

    /// Request body for a message about to be dispatched, threading the last
    /// known-good session id (empty before the first successful exchange).
    pub fn request_for(&self, message: String) -> ChatRequest {
        ChatRequest {
            message,
            session_id: self.session_id.clone(),
        }
    }

    /// Apply the outcome of the in-flight request. On success the reply is
    /// appended and the server's session id adopted; on failure a fixed
    /// apology is appended and the session id left unchanged. Returns the
    /// next queued message to dispatch, if any.
    pub fn settle(&mut self, outcome: Result<ChatResponse, ApiError>) -> Option<String> {
        match outcome {
            Ok(reply) => {
                self.lines.push(ChatLine::bot(reply.response));
                if !reply.session_id.is_empty() {
                    self.session_id = reply.session_id;
                }
            }
            Err(ApiError::Network(_)) => self.lines.push(ChatLine::bot(CONNECTING_FALLBACK)),
            Err(_) => self.lines.push(ChatLine::bot(PROCESSING_FALLBACK)),
        }

        match self.queue.pop_front() {
            next @ Some(_) => next,
            None => {
                self.in_flight = false;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(text: &str, session_id: &str) -> Result<ChatResponse, ApiError> {
        Ok(ChatResponse {
            response: text.to_string(),
            session_id: session_id.to_string(),
        })
    }

    #[test]
    fn blank_input_is_a_no_op() {
        let mut log = ChatLog::new();
        assert_eq!(log.submit("   \t  "), Submission::Rejected);
        assert!(log.lines().is_empty());
    }

    #[test]
    fn first_send_dispatches_with_empty_session() {
        let mut log = ChatLog::new();
        assert_eq!(
            log.submit("  Hello  "),
            Submission::Dispatch("Hello".to_string())
        );
        assert_eq!(log.lines(), &[ChatLine::user("Hello")]);

        let request = log.request_for("Hello".to_string());
        assert_eq!(request.session_id, "");
    }

    #[test]
    fn successful_reply_adopts_session_id() {
        let mut log = ChatLog::new();
        log.submit("Hello");
        assert_eq!(log.settle(reply("Hi there!", "sess-1")), None);

        assert_eq!(log.session_id(), "sess-1");
        assert_eq!(log.lines().last(), Some(&ChatLine::bot("Hi there!")));

        // the adopted id rides along on the next turn
        log.submit("Opening hours?");
        let request = log.request_for("Opening hours?".to_string());
        assert_eq!(request.session_id, "sess-1");
    }

    #[test]
    fn failed_send_keeps_session_id_and_apologizes() {
        let mut log = ChatLog::new();
        log.submit("one");
        log.settle(reply("ack", "sess-1"));

        log.submit("two");
        log.settle(Err(ApiError::Server {
            status: 500,
            message: String::new(),
        }));
        assert_eq!(log.session_id(), "sess-1");
        assert_eq!(log.lines().last(), Some(&ChatLine::bot(PROCESSING_FALLBACK)));

        log.submit("three");
        log.settle(Err(ApiError::Network("offline".to_string())));
        assert_eq!(log.session_id(), "sess-1");
        assert_eq!(log.lines().last(), Some(&ChatLine::bot(CONNECTING_FALLBACK)));
    }

    #[test]
    fn rapid_sends_queue_and_drain_in_order() {
        let mut log = ChatLog::new();
        assert_eq!(log.submit("a"), Submission::Dispatch("a".to_string()));
        assert_eq!(log.submit("b"), Submission::Queued);
        assert_eq!(log.submit("c"), Submission::Queued);

        // both user lines already visible, optimistically
        assert_eq!(log.lines().len(), 3);

        assert_eq!(log.settle(reply("ra", "s")), Some("b".to_string()));
        assert_eq!(log.settle(reply("rb", "s")), Some("c".to_string()));
        assert_eq!(log.settle(reply("rc", "s")), None);

        let texts: Vec<&str> = log.lines().iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b", "c", "ra", "rb", "rc"]);

        // queue drained, a new submission dispatches immediately again
        assert_eq!(log.submit("d"), Submission::Dispatch("d".to_string()));
    }

    #[test]
    fn empty_session_id_in_reply_is_not_adopted() {
        let mut log = ChatLog::new();
        log.submit("one");
        log.settle(reply("ack", "sess-1"));

        log.submit("two");
        log.settle(reply("ack again", ""));
        assert_eq!(log.session_id(), "sess-1");
    }
}
