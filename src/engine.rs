//! Conversation engine: the coaching state machine.
//!
//! ```text
//!  1 Greeting ──► 2 LanguageSelection ──► 3 Principles ──► 4 ExperienceInput
//!  ▲                  │ invalid: stay                          │ ▲
//!  │                                                           ▼ │ pass, below mastery
//!  └── "no" ── 7 ContinueDecision ◄── pass, mastery ── 5 AtsRewrite
//!                    │ "yes" ──► 4                          fail: stay
//! ```
//!
//! Every call to [`ConversationEngine::advance`] consumes one inbound
//! message, appends one user and one assistant turn to the history, and
//! returns the updated session. Bad input never surfaces as an error; it is
//! answered with corrective feedback and the step is kept.

use crate::i18n::{Language, LanguageRegistry};
use crate::validator::{passes_basic_check, ValidationMetrics, Validator};
use chrono::{DateTime, Utc};
use tracing::debug;

/// Passed rewrites needed before the coach offers to stop
pub const MASTERY_THRESHOLD: u32 = 3;

/// Conversation steps. Numbers match the coaching script; there is no 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Greeting,
    LanguageSelection,
    Principles,
    ExperienceInput,
    AtsRewrite,
    ContinueDecision,
}

impl Step {
    pub const ALL: [Step; 6] = [
        Step::Greeting,
        Step::LanguageSelection,
        Step::Principles,
        Step::ExperienceInput,
        Step::AtsRewrite,
        Step::ContinueDecision,
    ];

    pub fn number(self) -> u8 {
        match self {
            Step::Greeting => 1,
            Step::LanguageSelection => 2,
            Step::Principles => 3,
            Step::ExperienceInput => 4,
            Step::AtsRewrite => 5,
            Step::ContinueDecision => 7,
        }
    }

    /// Steps 1 and 3 run on their own; the host advances them without
    /// waiting for the user.
    pub fn expects_input(self) -> bool {
        !matches!(self, Step::Greeting | Step::Principles)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// One history entry
#[derive(Debug, Clone)]
pub struct Turn {
    pub role: Role,
    pub text: String,
    pub at: DateTime<Utc>,
}

/// In-memory state of one coaching conversation.
///
/// Only the engine mutates a session, which keeps the step/language/count
/// invariants in one place.
#[derive(Debug, Clone)]
pub struct Session {
    language: Option<Language>,
    step: Step,
    exercise_count: u32,
    last_user_input: String,
    history: Vec<Turn>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            language: None,
            step: Step::Greeting,
            exercise_count: 0,
            last_user_input: String::new(),
            history: Vec::new(),
        }
    }

    pub fn language(&self) -> Option<Language> {
        self.language
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn exercise_count(&self) -> u32 {
        self.exercise_count
    }

    /// The most recent raw experience sentence (step 4 input)
    pub fn last_user_input(&self) -> &str {
        &self.last_user_input
    }

    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    // Set from step 3 onwards; canonical only as a fallback for an
    // impossible state.
    fn active_language(&self) -> Language {
        self.language.unwrap_or_else(Language::canonical)
    }

    fn push(&mut self, role: Role, text: &str) {
        self.history.push(Turn {
            role,
            text: text.to_string(),
            at: Utc::now(),
        });
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Assistant output for one turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub message: String,
    /// Whether the host should present `options` as a constrained choice
    pub expects_options: bool,
    pub options: Vec<String>,
}

impl Reply {
    fn text(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            expects_options: false,
            options: Vec::new(),
        }
    }

    fn choice(message: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            message: message.into(),
            expects_options: true,
            options,
        }
    }
}

pub struct ConversationEngine {
    validator: Box<dyn Validator>,
}

impl ConversationEngine {
    pub fn new(validator: Box<dyn Validator>) -> Self {
        Self { validator }
    }

    /// Process one inbound message and produce the next assistant reply.
    pub async fn advance(&self, mut session: Session, input: &str) -> (Session, Reply) {
        let from = session.step;
        session.push(Role::User, input);

        let reply = match from {
            Step::Greeting => Self::greet(&mut session),
            Step::LanguageSelection => Self::select_language(&mut session, input),
            Step::Principles => Self::explain_principles(&mut session),
            Step::ExperienceInput => Self::collect_experience(&mut session, input),
            Step::AtsRewrite => self.check_rewrite(&mut session, input).await,
            Step::ContinueDecision => Self::decide(&mut session, input),
        };

        session.push(Role::Assistant, &reply.message);
        debug!(
            from = from.number(),
            to = session.step.number(),
            exercise_count = session.exercise_count,
            "Advanced conversation"
        );

        (session, reply)
    }

    fn greet(session: &mut Session) -> Reply {
        session.step = Step::LanguageSelection;
        let registry = LanguageRegistry::get();
        Reply::choice(registry.canonical().pack.greeting, registry.option_labels())
    }

    fn select_language(session: &mut Session, input: &str) -> Reply {
        match Language::from_selection(input) {
            Some(language) => {
                session.language = Some(language);
                session.step = Step::Principles;
                Reply::text(language.pack().language_confirmed)
            }
            None => {
                let registry = LanguageRegistry::get();
                Reply::choice(
                    registry.canonical().pack.language_invalid,
                    registry.option_labels(),
                )
            }
        }
    }

    fn explain_principles(session: &mut Session) -> Reply {
        session.step = Step::ExperienceInput;
        Reply::text(session.active_language().pack().principles_text())
    }

    fn collect_experience(session: &mut Session, input: &str) -> Reply {
        let pack = session.active_language().pack();
        if !passes_basic_check(input) {
            return Reply::text(pack.invalid_input);
        }

        session.last_user_input = input.trim().to_string();
        session.step = Step::AtsRewrite;
        Reply::text(pack.rewrite_prompt)
    }

    async fn check_rewrite(&self, session: &mut Session, input: &str) -> Reply {
        let language = session.active_language();
        let result = self.validator.validate(input, language).await;
        ValidationMetrics::global().record_verdict(result.verdict);

        if !result.passed() {
            return Reply::text(result.feedback);
        }

        let pack = language.pack();
        session.exercise_count += 1;
        if session.exercise_count >= MASTERY_THRESHOLD {
            session.step = Step::ContinueDecision;
            Reply::choice(
                format!("{}\n\n{}", result.feedback, pack.continue_prompt),
                pack.decision_options(),
            )
        } else {
            session.step = Step::ExperienceInput;
            Reply::text(format!("{}\n\n{}", result.feedback, pack.practice_cue()))
        }
    }

    fn decide(session: &mut Session, input: &str) -> Reply {
        let language = session.active_language();
        let pack = language.pack();

        match language.parse_decision(input) {
            Some(true) => {
                session.exercise_count += 1;
                session.step = Step::ExperienceInput;
                Reply::text(pack.practice_cue())
            }
            Some(false) => {
                session.exercise_count = 0;
                session.language = None;
                session.step = Step::Greeting;
                Reply::text(pack.farewell)
            }
            None => Reply::choice(pack.decision_invalid, pack.decision_options()),
        }
    }
}
