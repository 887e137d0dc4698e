//! # Quill
//!
//! Deterministic prompt assembly from a flat options record. One fully
//! populated [`PromptOptions`] goes in, one finished prompt string comes out;
//! the assembler is pure, synchronous, and infallible by construction.
//!
//! ## Design principles
//!
//! - **One record, read wholesale**: every user-facing field lives on
//!   [`PromptOptions`]; every field has a default, so the builder reads any
//!   field unconditionally. Load, reset, and presets replace the record as a
//!   whole, never piecemeal.
//! - **Fragments are data**: the fixed sentence catalog is a lookup struct
//!   ([`FragmentCatalog`]) with auditable const defaults and optional YAML
//!   overrides, not inline branching.
//! - **Safe defaults everywhere**: unknown delimiter styles resolve to
//!   backtick fences, unknown enum names fall through to their "not set"
//!   branch, unbound `{PLACEHOLDER}` tokens pass through verbatim.
//! - **Errors only at the boundary**: settings parse and file I/O failures
//!   are descriptive, recoverable [`SettingsError`] / [`ExportError`] values;
//!   nothing in this crate panics or corrupts in-memory state.
//!
//! ## Main modules
//!
//! - [`options`]: [`PromptOptions`] plus the small string-named enums
//!   ([`DelimiterStyle`], [`OutputFormat`], [`Eagerness`],
//!   [`ReasoningEffort`], [`Verbosity`]).
//! - [`builder`]: [`PromptBuilder`] / [`build_prompt`] — the assembly itself.
//! - [`text`]: [`clamp`] normalization and single-pass [`substitute`].
//! - [`fragments`]: [`FragmentCatalog`], const default texts, YAML override
//!   loading ([`fragments::load_or_default`]).
//! - [`preset`]: the fixed [`Preset`] catalog of complete records.
//! - [`settings`]: JSON settings document round-trip ([`settings::save`],
//!   [`settings::load`]).
//! - [`export`]: verbatim plain-text export ([`export::write_prompt`]).

pub mod builder;
pub mod export;
pub mod fragments;
pub mod options;
pub mod preset;
pub mod settings;
pub mod text;

pub use builder::{build_prompt, PromptBuilder};
pub use export::ExportError;
pub use fragments::FragmentCatalog;
pub use options::{
    DelimiterStyle, Eagerness, OutputFormat, PromptOptions, ReasoningEffort, Verbosity,
};
pub use preset::Preset;
pub use settings::SettingsError;
pub use text::{clamp, substitute};
