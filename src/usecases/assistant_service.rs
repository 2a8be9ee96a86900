//! Assistant service. Orchestrates the classify-then-answer pipeline.
//!
//! Each submitted question triggers two sequential remote calls: topic
//! classification first, answer generation only if the question is in
//! scope. Every failure path resolves to a displayable string.

use crate::domain::{DomainError, OFF_TOPIC_REPLY, UNAVAILABLE_REPLY};
use crate::ports::TextGenPort;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Service for topic-filtered question answering.
///
/// Flow per question:
/// 1. Ask the model whether the question is cybersecurity-related
/// 2. Off-topic: return the fixed refusal, the generator is never invoked
/// 3. In scope: ask the model for an expert answer, returned verbatim
///
/// Stateless between calls: no conversation context is sent to the model,
/// and nothing of a question outlives its own `ask`.
pub struct AssistantService {
    text_gen: Arc<dyn TextGenPort>,
}

impl AssistantService {
    /// Create a new assistant service.
    ///
    /// # Arguments
    /// * `text_gen` - Text-generation port implementation (OpenAI, Mock, etc.)
    pub fn new(text_gen: Arc<dyn TextGenPort>) -> Self {
        Self { text_gen }
    }

    /// Answer a question, or return one of the fixed fallback replies.
    ///
    /// Never fails: a remote error from either step is logged and mapped
    /// to [`UNAVAILABLE_REPLY`]. No retries, no partial results.
    pub async fn ask(&self, question: &str) -> String {
        info!(question_len = question.len(), "question submitted");

        match self.answer(question).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(error = %e, "remote call failed, returning fallback reply");
                UNAVAILABLE_REPLY.to_string()
            }
        }
    }

    async fn answer(&self, question: &str) -> Result<String, DomainError> {
        if !self.classify(question).await? {
            info!("question classified off-topic");
            return Ok(OFF_TOPIC_REPLY.to_string());
        }
        self.generate(question).await
    }

    /// First remote call: topic classification.
    async fn classify(&self, question: &str) -> Result<bool, DomainError> {
        let response = self
            .text_gen
            .complete(&classification_prompt(question))
            .await?;
        debug!(raw = %response, "classifier response");
        Ok(response_affirms(&response))
    }

    /// Second remote call: expert answer. Returned without post-processing.
    async fn generate(&self, question: &str) -> Result<String, DomainError> {
        let answer = self.text_gen.complete(&answer_prompt(question)).await?;
        info!(answer_len = answer.len(), "answer generated");
        Ok(answer)
    }
}

fn classification_prompt(question: &str) -> String {
    format!(
        "Respond with exactly one word, true or false, and nothing else: \
         is the following question related to cybersecurity?\n\nQuestion: {question}"
    )
}

fn answer_prompt(question: &str) -> String {
    format!(
        "You are a cybersecurity expert AI assistant. Provide a detailed, \
         accurate answer to the following question.\n\nQuestion: {question}"
    )
}

/// Decide in-domain from the classifier's raw text.
///
/// Case-insensitive substring search for "true". Anything else, including
/// empty or malformed output, fails closed to off-topic. The match is
/// deliberately loose: a response like "that's not true" still counts as
/// affirmative.
fn response_affirms(raw: &str) -> bool {
    raw.to_lowercase().contains("true")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Scripted gateway: pops pre-loaded responses in order and records
    /// every prompt it receives.
    struct ScriptedTextGen {
        responses: Mutex<VecDeque<Result<String, DomainError>>>,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedTextGen {
        fn new(responses: Vec<Result<String, DomainError>>) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(responses.into_iter().collect()),
                prompts: Mutex::new(Vec::new()),
            })
        }

        fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl TextGenPort for ScriptedTextGen {
        async fn complete(&self, prompt: &str) -> Result<String, DomainError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(DomainError::TextGen("script exhausted".into())))
        }
    }

    #[test]
    fn test_response_affirms() {
        assert!(response_affirms("true"));
        assert!(response_affirms("True."));
        assert!(response_affirms("Well, TRUE enough"));
        // Documented false positive of the substring contract
        assert!(response_affirms("that's not true"));
        assert!(!response_affirms("false"));
        assert!(!response_affirms(""));
        assert!(!response_affirms("yes"));
    }

    #[tokio::test]
    async fn test_off_topic_refusal_skips_generator() {
        let gateway = ScriptedTextGen::new(vec![Ok("false".to_string())]);
        let service = AssistantService::new(gateway.clone());

        let answer = service.ask("What's the best pizza topping?").await;

        assert_eq!(answer, OFF_TOPIC_REPLY);
        assert_eq!(gateway.prompts().len(), 1);
    }

    #[tokio::test]
    async fn test_in_scope_question_answered() {
        let question = "How do I set up a firewall rule to block inbound SSH?";
        let gateway = ScriptedTextGen::new(vec![
            Ok("True.".to_string()),
            Ok("Step 1: ...".to_string()),
        ]);
        let service = AssistantService::new(gateway.clone());

        let answer = service.ask(question).await;

        assert_eq!(answer, "Step 1: ...");
        let prompts = gateway.prompts();
        assert_eq!(prompts.len(), 2);
        // The generator must see the original, unmodified question text
        assert!(prompts[1].contains(question));
    }

    #[tokio::test]
    async fn test_literal_true_in_negative_phrase_still_dispatches() {
        let gateway = ScriptedTextGen::new(vec![
            Ok("that's not true".to_string()),
            Ok("answer".to_string()),
        ]);
        let service = AssistantService::new(gateway.clone());

        let answer = service.ask("is water wet?").await;

        assert_eq!(answer, "answer");
        assert_eq!(gateway.prompts().len(), 2);
    }

    #[tokio::test]
    async fn test_empty_classifier_response_fails_closed() {
        let gateway = ScriptedTextGen::new(vec![Ok(String::new())]);
        let service = AssistantService::new(gateway.clone());

        let answer = service.ask("anything").await;

        assert_eq!(answer, OFF_TOPIC_REPLY);
        assert_eq!(gateway.prompts().len(), 1);
    }

    #[tokio::test]
    async fn test_classifier_error_maps_to_unavailable() {
        let gateway = ScriptedTextGen::new(vec![Err(DomainError::TextGen(
            "connection reset".to_string(),
        ))]);
        let service = AssistantService::new(gateway.clone());

        let answer = service.ask("How do I rotate SSH keys?").await;

        assert_eq!(answer, UNAVAILABLE_REPLY);
        // Generator never called after a failed classification
        assert_eq!(gateway.prompts().len(), 1);
    }

    #[tokio::test]
    async fn test_generator_error_maps_to_unavailable() {
        let gateway = ScriptedTextGen::new(vec![
            Ok("true".to_string()),
            Err(DomainError::TextGen("quota exceeded".to_string())),
        ]);
        let service = AssistantService::new(gateway.clone());

        let answer = service.ask("How do I rotate SSH keys?").await;

        assert_eq!(answer, UNAVAILABLE_REPLY);
        assert_eq!(gateway.prompts().len(), 2);
    }

    #[tokio::test]
    async fn test_generator_output_returned_unmodified() {
        let raw = "  leading and trailing whitespace kept \n\nexactly\n";
        let gateway = ScriptedTextGen::new(vec![
            Ok("true".to_string()),
            Ok(raw.to_string()),
        ]);
        let service = AssistantService::new(gateway);

        assert_eq!(service.ask("What is a honeypot?").await, raw);
    }

    #[tokio::test]
    async fn test_deterministic_script_is_idempotent() {
        let question = "What is defense in depth?";
        let script = || {
            ScriptedTextGen::new(vec![
                Ok("true".to_string()),
                Ok("Layered controls.".to_string()),
            ])
        };

        let first = AssistantService::new(script()).ask(question).await;
        let second = AssistantService::new(script()).ask(question).await;

        assert_eq!(first, second);
    }
}
