//! Implements InputPort. Inquire-based interactive chat loop.
//!
//! One question in flight at a time: the loop blocks on the assistant's
//! reply (spinner visible) before prompting again.

use crate::adapters::ui::progress;
use crate::domain::{ChatTurn, DomainError, Role};
use crate::ports::InputPort;
use crate::usecases::AssistantService;
use async_trait::async_trait;
use inquire::ui::{Color, RenderConfig, StyleSheet, Styled};
use inquire::{InquireError, Text};
use std::sync::{Arc, Mutex};

/// Applies the neon render config to all subsequent inquire prompts.
pub fn apply_theme() {
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new(">").with_fg(Color::Rgb {
            r: 0xbc,
            g: 0x13,
            b: 0xfe,
        }))
        .with_answer(StyleSheet::new().with_fg(Color::Rgb {
            r: 0x0f,
            g: 0xf0,
            b: 0xfc,
        }));
    inquire::set_global_render_config(config);
}

fn role_label(role: Role) -> &'static str {
    match role {
        Role::User => "You",
        Role::Assistant => "Assistant",
    }
}

/// TUI adapter. Inquire prompts around the assistant pipeline.
pub struct TuiInputPort {
    assistant: Arc<AssistantService>,
    /// Session transcript, display only. Dropped on exit.
    transcript: Mutex<Vec<ChatTurn>>,
}

impl TuiInputPort {
    pub fn new(assistant: Arc<AssistantService>) -> Self {
        Self {
            assistant,
            transcript: Mutex::new(Vec::new()),
        }
    }

    fn print_history(&self) {
        let transcript = self.transcript.lock().unwrap_or_else(|e| e.into_inner());
        if transcript.is_empty() {
            println!("(no messages yet)\n");
            return;
        }
        for turn in transcript.iter() {
            println!(
                "[{}] {}: {}",
                turn.at.format("%H:%M:%S"),
                role_label(turn.role),
                turn.text
            );
        }
        println!();
    }

    fn record_exchange(&self, question: &str, reply: &str) {
        let mut transcript = self.transcript.lock().unwrap_or_else(|e| e.into_inner());
        transcript.push(ChatTurn::user(question));
        transcript.push(ChatTurn::assistant(reply));
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        println!("Ask me anything about cybersecurity. /history shows this session, /quit exits.\n");

        loop {
            let line = match Text::new("You:").prompt() {
                Ok(line) => line,
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                    break;
                }
                Err(e) => return Err(DomainError::Input(e.to_string())),
            };

            let question = line.trim();
            if question.is_empty() {
                continue;
            }
            match question {
                "/quit" | "/exit" => break,
                "/history" => {
                    self.print_history();
                    continue;
                }
                _ => {}
            }

            let spinner = progress::thinking_spinner();
            let reply = self.assistant.ask(question).await;
            spinner.finish_and_clear();

            println!("Assistant: {}\n", reply);
            self.record_exchange(question, &reply);
        }

        println!("Goodbye, stay safe out there.");
        Ok(())
    }
}
