//! Fixed preset catalog. Presets are data, not behavior: each one maps to a
//! complete hardcoded Options Record that replaces the current record when
//! applied.

use crate::options::{Eagerness, PromptOptions, ReasoningEffort, Verbosity};

/// Named entries of the preset catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    GeneralTask,
    AgenticLowEagerness,
    AgenticHighEagerness,
    CodingWorkflow,
    MetapromptOptimizer,
}

/// All presets, in menu order.
pub const ALL: &[Preset] = &[
    Preset::GeneralTask,
    Preset::AgenticLowEagerness,
    Preset::AgenticHighEagerness,
    Preset::CodingWorkflow,
    Preset::MetapromptOptimizer,
];

impl Preset {
    /// Display name, as shown in listings.
    pub fn name(&self) -> &'static str {
        match self {
            Self::GeneralTask => "General task",
            Self::AgenticLowEagerness => "Agentic low-eagerness",
            Self::AgenticHighEagerness => "Agentic high-eagerness",
            Self::CodingWorkflow => "Coding workflow",
            Self::MetapromptOptimizer => "Metaprompt optimizer",
        }
    }

    /// Stable kebab-case identifier for CLI use.
    pub fn id(&self) -> &'static str {
        match self {
            Self::GeneralTask => "general-task",
            Self::AgenticLowEagerness => "agentic-low-eagerness",
            Self::AgenticHighEagerness => "agentic-high-eagerness",
            Self::CodingWorkflow => "coding-workflow",
            Self::MetapromptOptimizer => "metaprompt-optimizer",
        }
    }

    /// Looks a preset up by display name or id, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = name.trim().to_ascii_lowercase();
        ALL.iter()
            .copied()
            .find(|p| p.name().to_ascii_lowercase() == wanted || p.id() == wanted)
    }

    /// The full hardcoded record for this preset.
    pub fn options(&self) -> PromptOptions {
        let mut o = PromptOptions::default();
        match self {
            Self::GeneralTask => {
                o.role = "General assistant".to_string();
                o.markdown_guidance = true;
                o.verbosity = Verbosity::Medium;
                o.eagerness = Eagerness::Medium;
            }
            Self::AgenticLowEagerness => {
                o.include_persistence = true;
                o.include_tool_preamble = true;
                o.eagerness = Eagerness::Low;
                o.reasoning_effort = ReasoningEffort::Minimal;
                o.markdown_guidance = true;
                o.verbosity = Verbosity::Low;
            }
            Self::AgenticHighEagerness => {
                o.include_persistence = true;
                o.include_tool_preamble = true;
                o.include_progress_narration = true;
                o.include_tool_disambiguation = true;
                o.eagerness = Eagerness::High;
                o.reasoning_effort = ReasoningEffort::Medium;
                o.markdown_guidance = true;
                o.verbosity = Verbosity::Medium;
            }
            Self::CodingWorkflow => {
                o.role = "Coding assistant".to_string();
                o.coding_mode = true;
                o.include_planning = true;
                o.include_apply_patch_instr = true;
                o.include_tool_defs = true;
                o.markdown_guidance = true;
                o.verbosity = Verbosity::Medium;
                o.reasoning_effort = ReasoningEffort::Medium;
                o.include_persistence = true;
                o.eagerness = Eagerness::Medium;
            }
            Self::MetapromptOptimizer => {
                o.meta_mode = true;
                o.verbosity = Verbosity::Low;
                o.markdown_guidance = false;
                o.eagerness = Eagerness::Low;
            }
        }
        o
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::DelimiterStyle;

    #[test]
    fn lookup_by_display_name_and_id() {
        assert_eq!(Preset::from_name("Coding workflow"), Some(Preset::CodingWorkflow));
        assert_eq!(Preset::from_name("coding-workflow"), Some(Preset::CodingWorkflow));
        assert_eq!(Preset::from_name("GENERAL TASK"), Some(Preset::GeneralTask));
        assert_eq!(Preset::from_name("unknown"), None);
    }

    #[test]
    fn all_lists_every_preset_once() {
        assert_eq!(ALL.len(), 5);
        for p in ALL {
            assert_eq!(Preset::from_name(p.name()), Some(*p));
        }
    }

    /// Spot-check the coding workflow record against the fixed table.
    #[test]
    fn coding_workflow_record() {
        let o = Preset::CodingWorkflow.options();
        assert_eq!(o.role, "Coding assistant");
        assert!(o.coding_mode);
        assert!(o.include_planning);
        assert!(o.include_apply_patch_instr);
        assert!(o.include_tool_defs);
        assert!(o.include_persistence);
        assert_eq!(o.reasoning_effort, ReasoningEffort::Medium);
        assert_eq!(o.verbosity, Verbosity::Medium);
        assert!(!o.meta_mode);
    }

    #[test]
    fn metaprompt_optimizer_record() {
        let o = Preset::MetapromptOptimizer.options();
        assert!(o.meta_mode);
        assert_eq!(o.eagerness, Eagerness::Low);
        assert_eq!(o.verbosity, Verbosity::Low);
        assert!(!o.markdown_guidance);
    }

    #[test]
    fn general_task_keeps_backtick_delimiters() {
        let o = Preset::GeneralTask.options();
        assert_eq!(o.delimiters, DelimiterStyle::Backticks);
        assert!(o.markdown_guidance);
    }

    /// Unset fields of every preset stay at record defaults.
    #[test]
    fn presets_are_full_records() {
        for p in ALL {
            let o = p.options();
            assert!(o.task.is_empty());
            assert!(o.examples.is_empty());
            assert!(o.variables.is_empty());
        }
    }
}
