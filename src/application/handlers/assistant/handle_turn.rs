//! HandleTurnHandler - Command handler for one conversational turn.
//!
//! Wraps a single request/response cycle: counts the turn against the
//! quota, classifies the utterance, runs the planned assistant actions,
//! and persists the transcript.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::assistant::{ActionPolicy, DialogueEngine, Utterance};
use crate::domain::foundation::{SenderId, Timestamp};
use crate::domain::session::{QuotaPolicy, QuotaVerdict};
use crate::ports::{
    NluClassifier, NluError, SessionStore, SessionStoreError, TranscriptError, TranscriptWriter,
    PROGRAM_ENTITY,
};

/// System line appended when the quota is reached.
pub const LIMIT_REACHED_NOTE: &str = "Message limit reached";

/// Default fixed message sent at and beyond the quota.
pub const DEFAULT_FEEDBACK_MESSAGE: &str = "❌ You've reached the message limit. Thank you for testing our chatbot. Your participation in our study is crucial and would be greatly appreciated. <a href='https://2ly.link/26ajD'>Please continue here to provide your feedback</a>";

/// Default reply when no action produced a message.
pub const DEFAULT_FALLBACK_MESSAGE: &str = "I'm sorry, I didn't quite understand that. You can ask me about colleges, programs, requirements, facilities, or campus locations.";

/// Gateway behaviour that does not depend on any adapter.
#[derive(Debug, Clone)]
pub struct GatewaySettings {
    pub quota: QuotaPolicy,
    pub feedback_message: String,
    pub fallback_message: String,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            quota: QuotaPolicy::default(),
            feedback_message: DEFAULT_FEEDBACK_MESSAGE.to_string(),
            fallback_message: DEFAULT_FALLBACK_MESSAGE.to_string(),
        }
    }
}

/// Command carrying one user utterance.
#[derive(Debug, Clone)]
pub struct HandleTurnCommand {
    pub sender: SenderId,
    pub message: String,
}

/// Result of a handled turn.
#[derive(Debug, Clone, PartialEq)]
pub struct HandleTurnResult {
    pub sender: SenderId,
    /// 1-based turn number for this sender.
    pub turn: u32,
    pub verdict: QuotaVerdict,
    /// Replies in dispatch order.
    pub replies: Vec<String>,
    /// Intent recognized for this turn; `None` when the quota was exhausted.
    pub intent: Option<String>,
}

/// Errors that can occur while handling a turn.
#[derive(Debug, Error)]
pub enum HandleTurnError {
    #[error("Session store error: {0}")]
    SessionStore(#[from] SessionStoreError),

    #[error("NLU error: {0}")]
    Nlu(#[from] NluError),

    #[error("Transcript error: {0}")]
    Transcript(#[from] TranscriptError),
}

/// Handler for conversational turns.
pub struct HandleTurnHandler {
    sessions: Arc<dyn SessionStore>,
    nlu: Arc<dyn NluClassifier>,
    transcripts: Arc<dyn TranscriptWriter>,
    policy: ActionPolicy,
    engine: DialogueEngine,
    settings: GatewaySettings,
}

impl HandleTurnHandler {
    pub fn new(
        sessions: Arc<dyn SessionStore>,
        nlu: Arc<dyn NluClassifier>,
        transcripts: Arc<dyn TranscriptWriter>,
        settings: GatewaySettings,
    ) -> Self {
        Self {
            sessions,
            nlu,
            transcripts,
            policy: ActionPolicy::new(),
            engine: DialogueEngine::new(),
            settings,
        }
    }

    pub fn settings(&self) -> &GatewaySettings {
        &self.settings
    }

    pub async fn handle(&self, cmd: HandleTurnCommand) -> Result<HandleTurnResult, HandleTurnError> {
        // 1. Acquire the session for the whole turn and record the user line
        let mut session = self.sessions.acquire(&cmd.sender).await?;
        let at = Timestamp::now();
        let turn = session.begin_turn(&cmd.message, &at);
        let verdict = self.settings.quota.evaluate(turn);

        info!(sender = %cmd.sender, turn, verdict = verdict.as_str(), "Handling turn");
        if turn == 1 {
            let active_sessions = self.sessions.session_count().await;
            debug!(
                sender = %cmd.sender,
                active_sessions,
                "Session opened"
            );
        }

        // 2. Past the quota: feedback only, state untouched
        if verdict == QuotaVerdict::Exhausted {
            warn!(sender = %cmd.sender, turn, "Message limit exceeded");
            session.record_system(LIMIT_REACHED_NOTE, &at);
            self.transcripts
                .write(session.sender(), session.transcript())
                .await?;

            return Ok(HandleTurnResult {
                sender: cmd.sender,
                turn,
                verdict,
                replies: vec![self.settings.feedback_message.clone()],
                intent: None,
            });
        }

        // 3. Classify
        let parse = self
            .nlu
            .parse(&cmd.message, &cmd.sender)
            .await
            .map_err(|e| {
                warn!(sender = %cmd.sender, provider = self.nlu.provider_name(), error = %e, "NLU failed");
                e
            })?;

        // 4. Plan, fill slots, and run actions
        let plan = self.policy.plan(&parse.intent.name);
        let predicted = match plan.first() {
            Some(action) => format!(
                "Predicted Action: {} with confidence {}",
                action.name(),
                parse.intent.confidence
            ),
            None => "Predicted Action: none with confidence 0".to_string(),
        };
        session.record_system(&predicted, &at);

        if let Some(program) = parse.entity(PROGRAM_ENTITY) {
            self.engine.fill_program(program, session.state_mut());
        }

        let utterance = Utterance::new(&cmd.message);
        let mut replies = self.engine.run(plan, &utterance, session.state_mut());
        if replies.is_empty() {
            replies.push(self.settings.fallback_message.clone());
        }

        // 5. Record replies; the final turn gets the feedback message appended
        for reply in &replies {
            session.record_bot(reply, &at);
        }

        if verdict == QuotaVerdict::Final {
            let feedback = self.settings.feedback_message.clone();
            session.record_bot(&feedback, &at);
            session.record_system(LIMIT_REACHED_NOTE, &at);
            replies.push(feedback);
        }

        // 6. Persist
        self.transcripts
            .write(session.sender(), session.transcript())
            .await?;

        info!(
            sender = %cmd.sender,
            turn,
            intent = %parse.intent.name,
            replies = replies.len(),
            "Turn handled"
        );

        Ok(HandleTurnResult {
            sender: cmd.sender,
            turn,
            verdict,
            replies,
            intent: Some(parse.intent.name),
        })
    }
}
