//! Fixed sentence and paragraph catalog used by the assembler.
//!
//! Default texts live as Rust consts so the catalog stays auditable and the
//! small enum domains can be tested exhaustively. A `fragments.yaml` in an
//! override directory may replace individual texts; see [`load`],
//! [`load_or_default`], and [`LoadError`].

mod load;

pub use load::{load, load_or_default, LoadError};

use crate::options::Eagerness;

pub const EAGERNESS_LOW: &str = "Agentic eagerness: low. Avoid tangential tool calls. Ask at most one clarifying question only if blocking.";
pub const EAGERNESS_MEDIUM: &str =
    "Agentic eagerness: medium. Balance proactivity with directness.";
pub const EAGERNESS_HIGH: &str = "Agentic eagerness: high. Be proactive. Decompose the task and use available tools when helpful.";

pub const TOOL_PREAMBLE: &str = "Before tools: emit a short tool preamble that restates the goal, the plan, and the next action.";
pub const PROGRESS_NARRATION: &str =
    "During long tasks: include brief progress updates and what remains.";
pub const PERSISTENCE: &str =
    "Agentic persistence: continue until the user's goal is fully achieved. Do not stop early.";
pub const TOOL_RULES_HEADER: &str = "Tool instructions: follow these disambiguated tool rules:";

pub const PLANNING_DEFAULT: &str = "Plan the steps before producing the final answer. Verify each step. Do not yield until all sub-tasks are complete.";

pub const CODING_ENABLED: &str =
    "Coding mode: enabled. Prefer small, verifiable steps and runnable outputs.";
pub const APPLY_PATCH: &str = "For code edits, prefer unified diffs in an apply_patch block: begin with '*** Begin Patch' and end with '*** End Patch'.";
pub const TOOL_DEFS: &str = "Assume standard code tools are available as defined by the host environment. Use them when appropriate.";

pub const MARKDOWN_FORMAT: &str = "Format the final answer in Markdown where semantically correct. Use inline code, fenced code blocks, lists, and tables appropriately.";
pub const MARKDOWN_NAMING: &str = r"When naming files or code elements, use backticks; use \( \) for inline math and \[ \] for block math.";

pub const JSON_SCHEMA_INSTRUCTION: &str =
    "Return a single JSON object that exactly follows this JSON Schema:";
pub const JSON_GENERIC_INSTRUCTION: &str =
    "Return a single valid JSON object with keys appropriate to the task. No extra commentary.";

pub const EXAMPLES_HEADER: &str = "Few-shot examples:";

pub const APPENDIX_SWE_BENCH: &str = "Appendix: When editing code, use an apply_patch block with a unified diff. Verify changes thoroughly and consider hidden tests.";
pub const APPENDIX_RETAIL: &str = "Appendix: Retail domain guardrails. Authenticate the user first. Only act for the authenticated user. Before database changes, summarize the action and get explicit confirmation.";

/// Requests a short summary, never private chain-of-thought.
pub const BRIEF_RATIONALE: &str = "Begin the final answer with 1-3 concise bullets summarizing key factors. Do not include private chain-of-thought.";

pub const META_INSTRUCTION: &str = "Optimize the following prompt. Explain what minimal edits or additions would encourage the desired behavior and reduce undesired behavior.";
pub const META_NOT_PROVIDED: &str = "(not provided)";

/// Resolved fragment catalog handed to the assembler.
///
/// Values default to the consts above; [`load`] may override individual
/// entries from `fragments.yaml`.
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentCatalog {
    pub eagerness_low: String,
    pub eagerness_medium: String,
    pub eagerness_high: String,
    pub tool_preamble: String,
    pub progress_narration: String,
    pub persistence: String,
    pub tool_rules_header: String,
    pub planning_default: String,
    pub coding_enabled: String,
    pub apply_patch: String,
    pub tool_defs: String,
    pub markdown_format: String,
    pub markdown_naming: String,
    pub json_schema_instruction: String,
    pub json_generic_instruction: String,
    pub examples_header: String,
    pub appendix_swe_bench: String,
    pub appendix_retail: String,
    pub brief_rationale: String,
    pub meta_instruction: String,
    pub meta_not_provided: String,
}

impl Default for FragmentCatalog {
    fn default() -> Self {
        Self {
            eagerness_low: EAGERNESS_LOW.to_string(),
            eagerness_medium: EAGERNESS_MEDIUM.to_string(),
            eagerness_high: EAGERNESS_HIGH.to_string(),
            tool_preamble: TOOL_PREAMBLE.to_string(),
            progress_narration: PROGRESS_NARRATION.to_string(),
            persistence: PERSISTENCE.to_string(),
            tool_rules_header: TOOL_RULES_HEADER.to_string(),
            planning_default: PLANNING_DEFAULT.to_string(),
            coding_enabled: CODING_ENABLED.to_string(),
            apply_patch: APPLY_PATCH.to_string(),
            tool_defs: TOOL_DEFS.to_string(),
            markdown_format: MARKDOWN_FORMAT.to_string(),
            markdown_naming: MARKDOWN_NAMING.to_string(),
            json_schema_instruction: JSON_SCHEMA_INSTRUCTION.to_string(),
            json_generic_instruction: JSON_GENERIC_INSTRUCTION.to_string(),
            examples_header: EXAMPLES_HEADER.to_string(),
            appendix_swe_bench: APPENDIX_SWE_BENCH.to_string(),
            appendix_retail: APPENDIX_RETAIL.to_string(),
            brief_rationale: BRIEF_RATIONALE.to_string(),
            meta_instruction: META_INSTRUCTION.to_string(),
            meta_not_provided: META_NOT_PROVIDED.to_string(),
        }
    }
}

impl FragmentCatalog {
    /// The single eagerness sentence for the given three-way selection.
    pub fn eagerness(&self, level: Eagerness) -> &str {
        match level {
            Eagerness::Low => &self.eagerness_low,
            Eagerness::Medium => &self.eagerness_medium,
            Eagerness::High => &self.eagerness_high,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every eagerness level maps to its own sentence (exhaustive over the domain).
    #[test]
    fn eagerness_table_is_total() {
        let c = FragmentCatalog::default();
        assert_eq!(c.eagerness(Eagerness::Low), EAGERNESS_LOW);
        assert_eq!(c.eagerness(Eagerness::Medium), EAGERNESS_MEDIUM);
        assert_eq!(c.eagerness(Eagerness::High), EAGERNESS_HIGH);
    }

    #[test]
    fn default_catalog_uses_consts() {
        let c = FragmentCatalog::default();
        assert_eq!(c.brief_rationale, BRIEF_RATIONALE);
        assert_eq!(c.meta_not_provided, META_NOT_PROVIDED);
    }
}
