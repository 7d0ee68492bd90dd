//! Prompt templates for every endpoint. Each builder is a pure function
//! of its validated inputs and always yields a non-empty string.

use serde::{Deserialize, Serialize};

/// Persona instruction prepended to every website chat prompt.
pub const CHAT_SYSTEM_PROMPT: &str = "\
You are Hanstrix AI Assistant. Help website visitors understand Hanstrix Technologies' services.
Be concise, friendly, and practical. Avoid hallucinations.
Prefer structured answers: short paragraphs, bullet points, and **bold** for key phrases.
When unsure, say so briefly. When appropriate, suggest visiting the Contact page.";

/// Only the most recent turns are rendered into the chat prompt; older
/// history is dropped by the caller on every request anyway.
pub const MAX_HISTORY_TURNS: usize = 8;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Bot,
}

impl ChatRole {
    fn speaker(self) -> &'static str {
        match self {
            ChatRole::User => "User",
            ChatRole::Bot => "Assistant",
        }
    }
}

pub fn chat(message: &str, context: Option<&str>, history: &[ChatTurn]) -> String {
    let mut prompt = String::from(CHAT_SYSTEM_PROMPT);

    if let Some(context) = context {
        prompt.push_str("\n\nPage Context: ");
        prompt.push_str(context);
    }

    if !history.is_empty() {
        prompt.push_str("\n\nConversation so far:");
        let start = history.len().saturating_sub(MAX_HISTORY_TURNS);
        for turn in &history[start..] {
            prompt.push('\n');
            prompt.push_str(turn.role.speaker());
            prompt.push_str(": ");
            prompt.push_str(&turn.text);
        }
    }

    prompt.push_str(&format!("\n\nCurrent user message: \"{}\"\n", message));
    prompt
}

/// Sub-task selector for the interaction endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    Chat,
    Sentiment,
}

impl Task {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "chat" => Some(Task::Chat),
            "sentiment" => Some(Task::Sentiment),
            _ => None,
        }
    }

    pub fn prompt(self, input: &str) -> String {
        match self {
            Task::Chat => format!(
                "You are a concise, friendly AI assistant for Hanstrix Technologies (AI/ML consultancy). Keep answers tight and helpful.\n\nUser: {}",
                input
            ),
            Task::Sentiment => format!(
                "Analyze the sentiment of this text and respond with ONLY one of:\n- Positive 🙂\n- Negative 🙁\n- Neutral 😐\n\nText: \"\"\"{}\"\"\"",
                input
            ),
        }
    }
}

/// Drafting action selector for the generate endpoint. Each action pairs
/// its directive with a tuned sampling temperature: drafting runs warm,
/// classification runs cold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    GenerateMessage,
    SuggestSubject,
    AnalyzeTone,
    DetectIntent,
}

impl Action {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "generateMessage" => Some(Action::GenerateMessage),
            "suggestSubject" => Some(Action::SuggestSubject),
            "analyzeTone" => Some(Action::AnalyzeTone),
            "detectIntent" => Some(Action::DetectIntent),
            _ => None,
        }
    }

    pub fn temperature(self) -> f32 {
        match self {
            Action::GenerateMessage => 0.7,
            Action::SuggestSubject => 0.3,
            Action::AnalyzeTone => 0.2,
            Action::DetectIntent => 0.1,
        }
    }

    pub fn prompt(self, prompt: &str) -> String {
        match self {
            Action::GenerateMessage => format!(
                "Based on the user's brief requirement: \"{}\", draft a professional, structured, and friendly contact message. Be concise but capture the key details.",
                prompt
            ),
            Action::SuggestSubject => format!(
                "Based on the user's message: \"{}\", suggest a clear and concise subject line. Provide only the subject line text, without any prefixes like \"Subject:\".",
                prompt
            ),
            Action::AnalyzeTone => format!(
                "Analyze the tone and clarity of this message: \"{}\". Provide a single sentence of encouraging, positive feedback. For example: \"Your message is clear and professional!\"",
                prompt
            ),
            Action::DetectIntent => format!(
                "Classify the following user inquiry into one of these categories: Sales, Support, Partnership, General. Inquiry: \"{}\". Respond with only the category name.",
                prompt
            ),
        }
    }
}

pub fn summarize(content: &str, service_name: &str) -> String {
    format!(
        r##"You are formatting a page summary for a client-facing website section.
DO NOT invent new facts. Use only what is in "Page Content".

Produce clean, skimmable **Markdown** with these rules:

- Start with: "# Hanstrix Technologies: {}"
- Insert a horizontal rule "---" between major sections
- Use short paragraphs (2–3 lines max)
- Use **bold** to highlight key phrases
- Lists MUST be real Markdown lists (bullets or numbers)
- No marketing fluff beyond the given content

Sections & order (use exactly these headings):

## Overview
- 2–3 lines that restate the mission from Page Content (no new claims).

---

## Core Services
- Bullet list. For each service: "**Service Name** — one concise line from content."

---

## Unique Selling Points
- Bullet list (each item a crisp one-liner from content).

---

## Process
1) Strategy & Discovery — one line
2) Build & Train — one line
3) Deploy & Integrate — one line
4) Optimize & Support — one line

---

## Client Benefits
- Bullet list taken from Page Content (e.g., chatbots, forecasting, workflow automation).

---

Page Content:
{}"##,
        service_name, content
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn(role: ChatRole, text: &str) -> ChatTurn {
        ChatTurn {
            role,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_chat_prompt_includes_message_and_persona() {
        let prompt = chat("What do you offer?", None, &[]);
        assert!(prompt.starts_with(CHAT_SYSTEM_PROMPT));
        assert!(prompt.contains("Current user message: \"What do you offer?\""));
        assert!(!prompt.contains("Conversation so far:"));
        assert!(!prompt.contains("Page Context:"));
    }

    #[test]
    fn test_chat_prompt_includes_context_line() {
        let prompt = chat("hi", Some("AI & ML service page"), &[]);
        assert!(prompt.contains("Page Context: AI & ML service page"));
    }

    #[test]
    fn test_chat_prompt_renders_roles() {
        let history = vec![turn(ChatRole::User, "hello"), turn(ChatRole::Bot, "hi there")];
        let prompt = chat("next", None, &history);
        assert!(prompt.contains("User: hello"));
        assert!(prompt.contains("Assistant: hi there"));
    }

    #[test]
    fn test_chat_prompt_keeps_last_eight_turns_in_order() {
        let history: Vec<ChatTurn> = (0..12)
            .map(|i| turn(ChatRole::User, &format!("turn-{}", i)))
            .collect();

        let prompt = chat("latest", None, &history);

        for i in 0..4 {
            assert!(!prompt.contains(&format!("turn-{}\n", i)), "turn-{} should be dropped", i);
        }
        let positions: Vec<usize> = (4..12)
            .map(|i| prompt.find(&format!("turn-{}", i)).expect("turn present"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "relative order preserved");
    }

    #[test]
    fn test_task_parse() {
        assert_eq!(Task::parse("chat"), Some(Task::Chat));
        assert_eq!(Task::parse("sentiment"), Some(Task::Sentiment));
        assert_eq!(Task::parse("translate"), None);
        assert_eq!(Task::parse("Chat"), None);
    }

    #[test]
    fn test_sentiment_prompt_lists_all_labels() {
        let prompt = Task::Sentiment.prompt("I love this");
        assert!(prompt.contains("Positive 🙂"));
        assert!(prompt.contains("Negative 🙁"));
        assert!(prompt.contains("Neutral 😐"));
        assert!(prompt.contains("\"\"\"I love this\"\"\""));
    }

    #[test]
    fn test_action_parse_and_temperature() {
        assert_eq!(Action::parse("generateMessage"), Some(Action::GenerateMessage));
        assert_eq!(Action::parse("suggestSubject"), Some(Action::SuggestSubject));
        assert_eq!(Action::parse("analyzeTone"), Some(Action::AnalyzeTone));
        assert_eq!(Action::parse("detectIntent"), Some(Action::DetectIntent));
        assert_eq!(Action::parse("summarize"), None);

        assert_eq!(Action::GenerateMessage.temperature(), 0.7);
        assert_eq!(Action::SuggestSubject.temperature(), 0.3);
        assert_eq!(Action::AnalyzeTone.temperature(), 0.2);
        assert_eq!(Action::DetectIntent.temperature(), 0.1);
    }

    #[test]
    fn test_action_prompts_embed_input() {
        for action in [
            Action::GenerateMessage,
            Action::SuggestSubject,
            Action::AnalyzeTone,
            Action::DetectIntent,
        ] {
            let prompt = action.prompt("need a chatbot quote");
            assert!(prompt.contains("need a chatbot quote"));
        }
    }

    #[test]
    fn test_summarize_prompt_title_and_section_order() {
        let prompt = summarize("We build AI chatbots.", "AI & ML");
        assert!(prompt.contains("# Hanstrix Technologies: AI & ML"));
        assert!(prompt.ends_with("We build AI chatbots."));

        let sections = [
            "## Overview",
            "## Core Services",
            "## Unique Selling Points",
            "## Process",
            "## Client Benefits",
        ];
        let positions: Vec<usize> = sections
            .iter()
            .map(|s| prompt.find(s).expect("section present"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "sections in mandated order");
    }
}
