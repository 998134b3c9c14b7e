//! Answer synthesizer
//!
//! Asks the model to pick an option from the round's summaries, then holds
//! the pick to the exact-match policy:
//!
//! - a label that is not one of the question's options is a synthesis
//!   validation failure (no answer, `SynthesisError`)
//! - a valid label whose fact text appears in no summary is withheld
//!   (no answer, not clear)
//! - a pick is withheld when summaries also literally state another option
//!   (conflicting evidence)
//! - malformed model output is a synthesis validation failure
//!
//! Only transport failures of the model call escape as errors.

use crate::config::AnswerParams;
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::use_cases::shared::ask_model;
use scout_domain::answer::{contains_fact, supporting_summaries};
use scout_domain::{
    AnswerErrorKind, AnswerResult, ContentSummary, Model, PromptTemplate, Question,
    SynthesisDraft, parse_structured,
};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that abort synthesis
#[derive(Error, Debug)]
pub enum SynthesisError {
    #[error("Gateway error: {0}")]
    GatewayError(#[from] GatewayError),
}

/// Chooses an answer from the collected summaries
pub struct AnswerSynthesizer<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    model: Model,
    timeout: Option<Duration>,
}

impl<G: LlmGateway + 'static> AnswerSynthesizer<G> {
    pub fn new(gateway: Arc<G>, params: &AnswerParams) -> Self {
        Self {
            gateway,
            model: params.model.clone(),
            timeout: params.model_timeout,
        }
    }

    /// Decide on an answer for request `id`.
    ///
    /// Without a single usable summary the model is not consulted and the
    /// result is a retrieval failure.
    pub async fn synthesize(
        &self,
        id: i64,
        question: &Question,
        summaries: &[ContentSummary],
    ) -> Result<AnswerResult, SynthesisError> {
        let usable = summaries.iter().filter(|s| !s.is_placeholder).count();
        if usable == 0 {
            info!(
                "No usable summaries ({} placeholders), skipping synthesis",
                summaries.len()
            );
            return Ok(AnswerResult::failure(
                id,
                AnswerErrorKind::RetrievalError,
                "Insufficient evidence: no source could be retrieved and summarized in this round",
            ));
        }

        let prompt = PromptTemplate::synthesis(question, summaries);
        let response = ask_model(
            self.gateway.as_ref(),
            &self.model,
            PromptTemplate::synthesis_system(),
            &prompt,
            self.timeout,
        )
        .await?;

        let draft: SynthesisDraft = match parse_structured(&response) {
            Ok(draft) => draft,
            Err(e) => {
                warn!("Synthesis output rejected: {}", e);
                return Ok(AnswerResult::failure(
                    id,
                    AnswerErrorKind::SynthesisError,
                    format!("Answer validation failed: {}", e),
                ));
            }
        };

        Ok(Self::apply_policy(id, question, summaries, draft))
    }

    fn apply_policy(
        id: i64,
        question: &Question,
        summaries: &[ContentSummary],
        draft: SynthesisDraft,
    ) -> AnswerResult {
        let Some(raw_label) = draft.answer else {
            return AnswerResult::new(
                id,
                None,
                draft.reasoning,
                draft.is_answer_clear,
                draft.sources,
            );
        };

        let option = u32::try_from(raw_label)
            .ok()
            .and_then(|label| question.option(label));
        let Some(option) = option else {
            warn!(
                "Model chose option {} outside {:?}",
                raw_label,
                question.labels()
            );
            return AnswerResult::failure(
                id,
                AnswerErrorKind::SynthesisError,
                format!(
                    "Answer validation failed: option {} is not one of {:?}",
                    raw_label,
                    question.labels()
                ),
            );
        };

        if supporting_summaries(&option.text, summaries).is_empty() {
            info!(
                "Withholding option {}: \"{}\" not found verbatim in any source",
                option.label, option.text
            );
            return AnswerResult::new(
                id,
                None,
                format!(
                    "{}\nEvidence check: option {} (\"{}\") does not appear verbatim in any source, answer withheld.",
                    draft.reasoning, option.label, option.text
                ),
                false,
                Vec::new(),
            );
        }

        // A rival whose fact lies inside the chosen one (`2025` in
        // `Jan 2 2025`) is backed by the same words and is no conflict.
        let rivals: Vec<u32> = question
            .options()
            .iter()
            .filter(|o| o.label != option.label && !contains_fact(&option.text, &o.text))
            .filter(|o| !supporting_summaries(&o.text, summaries).is_empty())
            .map(|o| o.label)
            .collect();
        if !rivals.is_empty() {
            info!(
                "Withholding option {}: sources also state option(s) {:?}",
                option.label, rivals
            );
            return AnswerResult::new(
                id,
                None,
                format!(
                    "{}\nEvidence check: sources support option {} and also option(s) {:?}, conflicting evidence, answer withheld.",
                    draft.reasoning, option.label, rivals
                ),
                false,
                Vec::new(),
            );
        }

        AnswerResult::new(
            id,
            Some(option.label),
            draft.reasoning,
            draft.is_answer_clear,
            draft.sources,
        )
    }
}
