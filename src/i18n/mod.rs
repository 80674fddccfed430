//! Internationalization (i18n) module for the coach's two languages.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their metadata
//! - `language`: Type-safe Language type validated against the registry
//! - `strings`: Per-language content packs (greeting, principles, feedback, labels)
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::i18n::Language;
//!
//! let language = Language::from_selection("Indonesia").unwrap();
//! let cue = language.pack().practice_cue();
//! ```

mod language;
mod registry;
mod strings;

pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use strings::{ContentPack, ENGLISH_PACK, INDONESIAN_PACK};
