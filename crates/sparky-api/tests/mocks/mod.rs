//! Fake port implementations for endpoint tests.
//!
//! Both mocks record their inputs behind an `Arc<Mutex<..>>` so tests keep a
//! clone and inspect calls after the request completes. The session store is
//! not mocked; tests run against the real `InMemorySessionStore`.

use std::sync::{Arc, Mutex};

use sparky_core::llm::generator::ContentGenerator;
use sparky_core::transcript::fetcher::TranscriptFetcher;
use sparky_types::llm::LlmError;
use sparky_types::transcript::TranscriptError;

#[derive(Clone)]
pub struct MockTranscripts {
    pub transcript: String,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl MockTranscripts {
    pub fn new(transcript: &str) -> Self {
        Self {
            transcript: transcript.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            transcript: String::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

impl TranscriptFetcher for MockTranscripts {
    async fn fetch(&self, url: &str) -> Result<String, TranscriptError> {
        self.calls.lock().unwrap().push(url.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(TranscriptError::Unavailable(msg.clone()));
        }
        Ok(self.transcript.clone())
    }
}

#[derive(Clone)]
pub struct MockGenerator {
    pub reply: String,
    /// Recorded `(prompt, input)` pairs, in call order.
    pub calls: Arc<Mutex<Vec<(String, String)>>>,
    pub fail_with: Option<String>,
}

impl MockGenerator {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            reply: String::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }

    pub fn last_input(&self) -> String {
        self.calls.lock().unwrap().last().unwrap().1.clone()
    }
}

impl ContentGenerator for MockGenerator {
    async fn generate(&self, prompt: &str, input: &str) -> Result<String, LlmError> {
        self.calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), input.to_string()));
        if let Some(ref msg) = self.fail_with {
            return Err(LlmError::Provider {
                message: msg.clone(),
            });
        }
        Ok(self.reply.clone())
    }
}
