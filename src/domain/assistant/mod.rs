//! Assistant domain - keyword classification, conversation state, and the
//! rule-driven actions that answer university questions.
//!
//! # Module Organization
//!
//! - `catalog` - Static keyword, program, facility, and suggestion tables
//! - `classifier` - First-match keyword classification over utterances
//! - `state` / `mutation` - Per-session slots and atomic mutation batches
//! - `resolver` - Context Resolver actions
//! - `follow_up` - Follow-up Generator
//! - `dispatcher` - Ordered outbound message sink
//! - `action` / `engine` - Intent policy and sequential action execution

pub mod catalog;

mod action;
mod classifier;
mod dispatcher;
mod engine;
mod follow_up;
mod mutation;
mod resolver;
mod stage;
mod state;
mod unit;

pub use action::{ActionPolicy, AssistantAction};
pub use classifier::{all_matches, first_match, KeywordClassifier, KeywordEntry, Utterance};
pub use dispatcher::ResponseDispatcher;
pub use engine::DialogueEngine;
pub use follow_up::{FollowUp, FollowUpGenerator};
pub use mutation::{StateBatch, StateMutation};
pub use resolver::ContextResolver;
pub use stage::Stage;
pub use state::ConversationState;
pub use unit::Unit;
