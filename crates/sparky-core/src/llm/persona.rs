//! Persona prompt templates.
//!
//! Two fixed instructional templates steer generation: the summarizer turns
//! a video transcript into a structured lesson outline, and the guidance
//! persona answers follow-up questions in character as 'Sparky'. The texts
//! live next to this module as plain files so they can be edited without
//! touching code.

use std::fmt;

const SUMMARIZER_PROMPT: &str = include_str!("prompts/summarizer.txt");
const GUIDANCE_PROMPT: &str = include_str!("prompts/guidance.txt");

/// Which instructional template a generation call uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persona {
    /// Structured lesson summary of a video transcript.
    Summarizer,
    /// Conversational auto-electrician instructor.
    Guidance,
}

impl Persona {
    /// The fixed prompt template for this persona.
    pub fn prompt(&self) -> &'static str {
        match self {
            Persona::Summarizer => SUMMARIZER_PROMPT,
            Persona::Guidance => GUIDANCE_PROMPT,
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Persona::Summarizer => write!(f, "summarizer"),
            Persona::Guidance => write!(f, "guidance"),
        }
    }
}
