//! The Options Record: one flat value struct holding every user-configurable
//! field the assembler reads.
//!
//! A fresh record comes from [`PromptOptions::default`]; load/reset/preset
//! replace it wholesale, never field-by-field. Every field has a default, so
//! [`crate::builder::PromptBuilder`] can read any field unconditionally.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Sentinel value of [`PromptOptions::role`] that selects `custom_role` instead.
pub const ROLE_CUSTOM: &str = "Custom";

/// Fallback role when both the selector and the custom text are empty.
pub const ROLE_FALLBACK: &str = "General assistant";

/// Delimiter style used to wrap quoted text (task, context, examples, meta prompt).
///
/// Resolution is total: [`DelimiterStyle::from_name`] maps any unrecognized
/// name to [`DelimiterStyle::Backticks`] and never errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DelimiterStyle {
    #[default]
    Backticks,
    TripleQuotes,
    XmlTags,
}

impl DelimiterStyle {
    /// Parses the human-readable style name. Unknown names fall back to backticks.
    pub fn from_name(name: &str) -> Self {
        match name {
            "triple quotes" => Self::TripleQuotes,
            "XML tags" => Self::XmlTags,
            _ => Self::Backticks,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Backticks => "triple backticks",
            Self::TripleQuotes => "triple quotes",
            Self::XmlTags => "XML tags",
        }
    }

    /// Returns the (open, close) pair for this style.
    pub fn pair(&self) -> (&'static str, &'static str) {
        match self {
            Self::Backticks => ("```", "```"),
            Self::TripleQuotes => ("\"\"\"", "\"\"\""),
            Self::XmlTags => ("<content>", "</content>"),
        }
    }
}

/// Requested shape of the final answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OutputFormat {
    #[default]
    PlainText,
    Markdown,
    Json,
}

impl OutputFormat {
    /// Unknown names fall back to plain text (the "not set" branch).
    pub fn from_name(name: &str) -> Self {
        match name {
            "Markdown" => Self::Markdown,
            "JSON" => Self::Json,
            _ => Self::PlainText,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::PlainText => "Plain text",
            Self::Markdown => "Markdown",
            Self::Json => "JSON",
        }
    }
}

/// Three-way agentic eagerness selection. There is no "not set" branch:
/// unknown names map to [`Eagerness::Medium`], so the agentic block always
/// has exactly one eagerness sentence to choose.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Eagerness {
    Low,
    #[default]
    Medium,
    High,
}

impl Eagerness {
    pub fn from_name(name: &str) -> Self {
        match name {
            "Low" => Self::Low,
            "High" => Self::High,
            _ => Self::Medium,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Reasoning-effort directive level. `Default` is the sentinel that emits nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReasoningEffort {
    #[default]
    Default,
    Minimal,
    Medium,
    High,
}

impl ReasoningEffort {
    pub fn from_name(name: &str) -> Self {
        match name {
            "Minimal" => Self::Minimal,
            "Medium" => Self::Medium,
            "High" => Self::High,
            _ => Self::Default,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Minimal => "Minimal",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Lowercase level name as it appears inside the directive sentence.
    pub fn sentence_name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Minimal => "minimal",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Verbosity directive level. `Default` is the sentinel: only the free-text
/// override (if any) is emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Verbosity {
    #[default]
    Default,
    Low,
    Medium,
    High,
}

impl Verbosity {
    pub fn from_name(name: &str) -> Self {
        match name {
            "Low" => Self::Low,
            "Medium" => Self::Medium,
            "High" => Self::High,
            _ => Self::Default,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    pub fn sentence_name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

macro_rules! string_bridge {
    ($($ty:ty),+) => {
        $(
            impl From<String> for $ty {
                fn from(s: String) -> Self {
                    Self::from_name(&s)
                }
            }
            impl From<$ty> for String {
                fn from(v: $ty) -> String {
                    v.name().to_string()
                }
            }
        )+
    };
}

string_bridge!(DelimiterStyle, OutputFormat, Eagerness, ReasoningEffort, Verbosity);

/// The full Options Record.
///
/// `#[serde(default)]` on the struct means a settings document may omit any
/// field and the load still yields a fully-populated record; unknown keys in
/// the document are ignored. See [`crate::settings`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptOptions {
    // Basics
    pub role: String,
    pub custom_role: String,
    pub task: String,
    pub audience: String,
    pub constraints: String,
    pub delimiters: DelimiterStyle,
    pub output_format: OutputFormat,
    pub json_schema: String,
    pub additional_context: String,

    // Agentic
    pub eagerness: Eagerness,
    pub reasoning_effort: ReasoningEffort,
    pub include_tool_preamble: bool,
    pub include_persistence: bool,
    pub include_progress_narration: bool,
    pub include_tool_disambiguation: bool,
    pub tool_context: String,

    // Coding
    pub coding_mode: bool,
    pub include_planning: bool,
    pub planning_snippet: String,
    pub include_apply_patch_instr: bool,
    pub include_tool_defs: bool,
    pub coding_notes: String,

    // Intelligence
    pub verbosity: Verbosity,
    pub verbosity_override: String,
    pub markdown_guidance: bool,
    pub ask_brief_rationale: bool,

    // Metaprompting
    pub meta_mode: bool,
    pub meta_prompt: String,
    pub meta_desired: String,
    pub meta_undesired: String,

    // Few-shot (user, assistant) pairs, in order
    pub examples: Vec<(String, String)>,

    // Placeholder name -> replacement text
    pub variables: BTreeMap<String, String>,

    // Appendices
    pub include_swe_bench: bool,
    pub include_retail_min_reason: bool,
}

impl Default for PromptOptions {
    fn default() -> Self {
        Self {
            role: ROLE_FALLBACK.to_string(),
            custom_role: String::new(),
            task: String::new(),
            audience: String::new(),
            constraints: String::new(),
            delimiters: DelimiterStyle::default(),
            output_format: OutputFormat::default(),
            json_schema: String::new(),
            additional_context: String::new(),
            eagerness: Eagerness::default(),
            reasoning_effort: ReasoningEffort::default(),
            include_tool_preamble: false,
            include_persistence: false,
            include_progress_narration: false,
            include_tool_disambiguation: false,
            tool_context: String::new(),
            coding_mode: false,
            include_planning: false,
            planning_snippet: String::new(),
            include_apply_patch_instr: false,
            include_tool_defs: false,
            coding_notes: String::new(),
            verbosity: Verbosity::default(),
            verbosity_override: String::new(),
            markdown_guidance: false,
            ask_brief_rationale: false,
            meta_mode: false,
            meta_prompt: String::new(),
            meta_desired: String::new(),
            meta_undesired: String::new(),
            examples: Vec::new(),
            variables: BTreeMap::new(),
            include_swe_bench: false,
            include_retail_min_reason: false,
        }
    }
}

impl PromptOptions {
    /// Effective role text: custom text when the selector is [`ROLE_CUSTOM`],
    /// else the selected name; [`ROLE_FALLBACK`] when both are empty.
    pub fn effective_role(&self) -> &str {
        let role = if self.role == ROLE_CUSTOM {
            self.custom_role.trim()
        } else {
            self.role.trim()
        };
        if role.is_empty() {
            ROLE_FALLBACK
        } else {
            role
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Unknown delimiter names resolve to the backtick pair (never an error).
    #[test]
    fn delimiter_unknown_name_falls_back_to_backticks() {
        let d = DelimiterStyle::from_name("curly braces");
        assert_eq!(d, DelimiterStyle::Backticks);
        assert_eq!(d.pair(), ("```", "```"));
    }

    #[test]
    fn delimiter_names_round_trip() {
        for d in [
            DelimiterStyle::Backticks,
            DelimiterStyle::TripleQuotes,
            DelimiterStyle::XmlTags,
        ] {
            assert_eq!(DelimiterStyle::from_name(d.name()), d);
        }
    }

    /// Unknown enum values fall through to the "not set" branch.
    #[test]
    fn enum_unknown_names_use_defaults() {
        assert_eq!(OutputFormat::from_name("HTML"), OutputFormat::PlainText);
        assert_eq!(Eagerness::from_name("Frantic"), Eagerness::Medium);
        assert_eq!(ReasoningEffort::from_name("Max"), ReasoningEffort::Default);
        assert_eq!(Verbosity::from_name("Chatty"), Verbosity::Default);
    }

    #[test]
    fn effective_role_prefers_custom_when_selected() {
        let mut o = PromptOptions::default();
        o.role = ROLE_CUSTOM.to_string();
        o.custom_role = "a patient tutor".to_string();
        assert_eq!(o.effective_role(), "a patient tutor");
    }

    #[test]
    fn effective_role_falls_back_when_empty() {
        let mut o = PromptOptions::default();
        o.role = ROLE_CUSTOM.to_string();
        o.custom_role = "   ".to_string();
        assert_eq!(o.effective_role(), ROLE_FALLBACK);

        o.role = String::new();
        o.custom_role = String::new();
        assert_eq!(o.effective_role(), ROLE_FALLBACK);
    }

    /// Fresh record is fully populated with the documented defaults.
    #[test]
    fn default_record_values() {
        let o = PromptOptions::default();
        assert_eq!(o.role, ROLE_FALLBACK);
        assert_eq!(o.delimiters, DelimiterStyle::Backticks);
        assert_eq!(o.output_format, OutputFormat::PlainText);
        assert_eq!(o.eagerness, Eagerness::Medium);
        assert_eq!(o.reasoning_effort, ReasoningEffort::Default);
        assert_eq!(o.verbosity, Verbosity::Default);
        assert!(!o.meta_mode);
        assert!(o.examples.is_empty());
        assert!(o.variables.is_empty());
    }
}
