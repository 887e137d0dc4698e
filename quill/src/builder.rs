//! Prompt assembly: one fully-populated [`PromptOptions`] in, one string out.
//!
//! [`PromptBuilder::build`] is pure and deterministic; identical input yields
//! identical output. Every branch has a safe default, so assembly never
//! errors. Callers snapshot the record first; the builder only borrows it.

use crate::fragments::FragmentCatalog;
use crate::options::{OutputFormat, PromptOptions, ReasoningEffort, Verbosity};
use crate::text::{clamp, substitute};

/// Assembles a prompt from an options record and a fragment catalog.
pub struct PromptBuilder<'a> {
    opts: &'a PromptOptions,
    catalog: &'a FragmentCatalog,
}

/// Convenience wrapper around [`PromptBuilder::build`].
pub fn build_prompt(opts: &PromptOptions, catalog: &FragmentCatalog) -> String {
    PromptBuilder::new(opts, catalog).build()
}

impl<'a> PromptBuilder<'a> {
    pub fn new(opts: &'a PromptOptions, catalog: &'a FragmentCatalog) -> Self {
        Self { opts, catalog }
    }

    /// Builds the final prompt.
    ///
    /// Meta mode short-circuits to the meta-prompt wrapper and ignores the
    /// other fields. Otherwise sections are generated independently, joined
    /// with one blank line (empty sections skipped), clamped once more, and
    /// run through single-pass variable substitution.
    pub fn build(&self) -> String {
        if self.opts.meta_mode {
            let composed = clamp(&self.meta_prompt());
            return substitute(&composed, &self.opts.variables);
        }

        let mut parts: Vec<String> = vec![self.role_line()];
        if !self.opts.task.trim().is_empty() {
            parts.push(self.fenced("Task", &self.opts.task));
        }
        if !self.opts.additional_context.trim().is_empty() {
            parts.push(self.fenced("Context", &self.opts.additional_context));
        }

        for piece in [
            self.audience_line(),
            self.constraints_block(),
            self.verbosity_block(),
            self.reasoning_block(),
            self.agentic_block(),
            self.planning_block(),
            self.coding_block(),
            self.examples_block(),
            self.formatting_block(),
            self.appendix_block(),
        ] {
            if !piece.trim().is_empty() {
                parts.push(piece.trim().to_string());
            }
        }

        if self.opts.ask_brief_rationale {
            parts.push(self.catalog.brief_rationale.clone());
        }

        let composed = clamp(&parts.join("\n\n"));
        substitute(&composed, &self.opts.variables)
    }

    fn role_line(&self) -> String {
        format!("You are {}.", self.opts.effective_role())
    }

    /// Wraps clamped text in the resolved delimiter pair under a header word.
    fn fenced(&self, header: &str, body: &str) -> String {
        let (open, close) = self.opts.delimiters.pair();
        format!("{} {}\n{}\n{}", header, open, clamp(body), close)
    }

    fn audience_line(&self) -> String {
        let aud = self.opts.audience.trim();
        if aud.is_empty() {
            String::new()
        } else {
            format!("Target audience: {}.", aud)
        }
    }

    /// Every line of the clamped constraints text becomes one bullet.
    fn constraints_block(&self) -> String {
        let cons = clamp(&self.opts.constraints);
        if cons.is_empty() {
            String::new()
        } else {
            format!("Constraints:\n- {}", cons.replace('\n', "\n- "))
        }
    }

    fn verbosity_block(&self) -> String {
        let over = self.opts.verbosity_override.trim();
        match self.opts.verbosity {
            Verbosity::Default => over.to_string(),
            level => {
                let mut s = format!("Verbosity: {}.", level.sentence_name());
                if !over.is_empty() {
                    s.push(' ');
                    s.push_str(over);
                }
                s
            }
        }
    }

    fn reasoning_block(&self) -> String {
        match self.opts.reasoning_effort {
            ReasoningEffort::Default => String::new(),
            level => format!("Reasoning effort: {}.", level.sentence_name()),
        }
    }

    /// Agentic controls. When any control is active the block starts with
    /// exactly one eagerness sentence, then the optional instructions in
    /// fixed order. With everything at rest (medium eagerness, no flags) the
    /// block is empty, so a default record builds to the role line alone.
    fn agentic_block(&self) -> String {
        let o = self.opts;
        let tool_rules = if o.include_tool_disambiguation {
            clamp(&o.tool_context)
        } else {
            String::new()
        };
        let active = o.eagerness != crate::options::Eagerness::Medium
            || o.include_tool_preamble
            || o.include_progress_narration
            || o.include_persistence
            || !tool_rules.is_empty();
        if !active {
            return String::new();
        }

        let mut lines = vec![self.catalog.eagerness(o.eagerness).to_string()];
        if o.include_tool_preamble {
            lines.push(self.catalog.tool_preamble.clone());
        }
        if o.include_progress_narration {
            lines.push(self.catalog.progress_narration.clone());
        }
        if o.include_persistence {
            lines.push(self.catalog.persistence.clone());
        }
        if !tool_rules.is_empty() {
            lines.push(self.catalog.tool_rules_header.clone());
            lines.push(tool_rules);
        }
        lines.join("\n")
    }

    fn planning_block(&self) -> String {
        if !self.opts.include_planning {
            return String::new();
        }
        let snippet = clamp(&self.opts.planning_snippet);
        let snippet = if snippet.is_empty() {
            self.catalog.planning_default.as_str()
        } else {
            snippet.as_str()
        };
        format!("Planning:\n{}", snippet)
    }

    fn coding_block(&self) -> String {
        if !self.opts.coding_mode {
            return String::new();
        }
        let mut lines = vec![self.catalog.coding_enabled.clone()];
        if self.opts.include_apply_patch_instr {
            lines.push(self.catalog.apply_patch.clone());
        }
        if self.opts.include_tool_defs {
            lines.push(self.catalog.tool_defs.clone());
        }
        let notes = clamp(&self.opts.coding_notes);
        if !notes.is_empty() {
            lines.push(notes);
        }
        lines.join("\n")
    }

    fn examples_block(&self) -> String {
        if self.opts.examples.is_empty() {
            return String::new();
        }
        let (open, close) = self.opts.delimiters.pair();
        let mut lines = vec![self.catalog.examples_header.clone()];
        for (i, (user, assistant)) in self.opts.examples.iter().enumerate() {
            let n = i + 1;
            lines.push(format!(
                "Example {} - user {}\n{}\n{}",
                n,
                open,
                clamp(user),
                close
            ));
            lines.push(format!(
                "Example {} - assistant {}\n{}\n{}",
                n,
                open,
                clamp(assistant),
                close
            ));
        }
        lines.join("\n")
    }

    /// Markdown guidance and the JSON instruction are independent conditions;
    /// both may fire together.
    fn formatting_block(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if self.opts.output_format == OutputFormat::Markdown || self.opts.markdown_guidance {
            parts.push(self.catalog.markdown_format.clone());
            parts.push(self.catalog.markdown_naming.clone());
        }
        if self.opts.output_format == OutputFormat::Json {
            let schema = clamp(&self.opts.json_schema);
            if schema.is_empty() {
                parts.push(self.catalog.json_generic_instruction.clone());
            } else {
                parts.push(self.catalog.json_schema_instruction.clone());
                parts.push(schema);
            }
        }
        parts.join("\n")
    }

    fn appendix_block(&self) -> String {
        let mut lines: Vec<&str> = Vec::new();
        if self.opts.include_swe_bench {
            lines.push(&self.catalog.appendix_swe_bench);
        }
        if self.opts.include_retail_min_reason {
            lines.push(&self.catalog.appendix_retail);
        }
        lines.join("\n")
    }

    /// Meta-prompt wrapper: instruction, desired/undesired lines (with a
    /// placeholder when empty), and the original prompt in the delimiter pair.
    fn meta_prompt(&self) -> String {
        let (open, close) = self.opts.delimiters.pair();
        let base = clamp(&self.opts.meta_prompt);
        let desired = clamp(&self.opts.meta_desired);
        let undesired = clamp(&self.opts.meta_undesired);
        let not_provided = &self.catalog.meta_not_provided;
        [
            self.catalog.meta_instruction.clone(),
            format!(
                "Desired behavior: {}",
                if desired.is_empty() { not_provided } else { &desired }
            ),
            format!(
                "Undesired behavior: {}",
                if undesired.is_empty() { not_provided } else { &undesired }
            ),
            format!("Prompt {}\n{}\n{}", open, base, close),
        ]
        .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragments;
    use crate::options::{DelimiterStyle, Eagerness};

    fn catalog() -> FragmentCatalog {
        FragmentCatalog::default()
    }

    fn build(opts: &PromptOptions) -> String {
        build_prompt(opts, &catalog())
    }

    /// A record with every optional field empty/false builds to the role line alone.
    #[test]
    fn default_record_builds_role_line_only() {
        let opts = PromptOptions::default();
        assert_eq!(build(&opts), "You are General assistant.");
    }

    #[test]
    fn identical_input_yields_identical_output() {
        let mut opts = PromptOptions::default();
        opts.task = "Summarize the report".to_string();
        opts.coding_mode = true;
        assert_eq!(build(&opts), build(&opts));
    }

    /// Task text is wrapped in the resolved delimiter pair under its header.
    #[test]
    fn task_block_wraps_in_delimiters() {
        let mut opts = PromptOptions::default();
        opts.task = "Fix the failing test".to_string();
        let out = build(&opts);
        assert!(out.contains("Task ```\nFix the failing test\n```"));
    }

    /// Coding scenario: task fence, then coding sentence, then patch instruction, in order.
    #[test]
    fn coding_scenario_ordering() {
        let mut opts = PromptOptions::default();
        opts.role = "Coding assistant".to_string();
        opts.task = "Fix the failing test".to_string();
        opts.delimiters = DelimiterStyle::Backticks;
        opts.coding_mode = true;
        opts.include_apply_patch_instr = true;
        let out = build(&opts);

        let task_at = out
            .find("Task ```\nFix the failing test\n```")
            .expect("task fence present");
        let coding_at = out
            .find(fragments::CODING_ENABLED)
            .expect("coding sentence present");
        let patch_at = out
            .find(fragments::APPLY_PATCH)
            .expect("patch instruction present");
        assert!(task_at < coding_at && coding_at < patch_at);
        assert!(out.starts_with("You are Coding assistant."));
    }

    /// JSON output format with an empty schema yields the generic instruction.
    #[test]
    fn json_format_without_schema_uses_generic_instruction() {
        let mut opts = PromptOptions::default();
        opts.output_format = OutputFormat::Json;
        let out = build(&opts);
        assert!(out.contains(fragments::JSON_GENERIC_INSTRUCTION));
        assert!(!out.contains(fragments::JSON_SCHEMA_INSTRUCTION));
    }

    #[test]
    fn json_format_with_schema_includes_schema_text() {
        let mut opts = PromptOptions::default();
        opts.output_format = OutputFormat::Json;
        opts.json_schema = "{\"type\": \"object\"}".to_string();
        let out = build(&opts);
        assert!(out.contains(fragments::JSON_SCHEMA_INSTRUCTION));
        assert!(out.contains("{\"type\": \"object\"}"));
    }

    /// Markdown guidance and the JSON instruction are not mutually exclusive.
    #[test]
    fn markdown_guidance_and_json_both_fire() {
        let mut opts = PromptOptions::default();
        opts.output_format = OutputFormat::Json;
        opts.markdown_guidance = true;
        let out = build(&opts);
        assert!(out.contains(fragments::MARKDOWN_FORMAT));
        assert!(out.contains(fragments::JSON_GENERIC_INSTRUCTION));
    }

    /// Every line of the constraints text becomes one bullet.
    #[test]
    fn constraints_render_as_bullets() {
        let mut opts = PromptOptions::default();
        opts.constraints = "no jargon\ncite sources\n\n\nstay concise".to_string();
        let out = build(&opts);
        assert!(out.contains("Constraints:\n- no jargon\n- cite sources\n- \n- stay concise"));
    }

    #[test]
    fn audience_line_only_when_nonempty() {
        let mut opts = PromptOptions::default();
        assert!(!build(&opts).contains("Target audience"));
        opts.audience = "junior engineers".to_string();
        assert!(build(&opts).contains("Target audience: junior engineers."));
    }

    /// Default verbosity emits only the override text; a set level emits the sentence.
    #[test]
    fn verbosity_directive() {
        let mut opts = PromptOptions::default();
        opts.verbosity_override = "Keep code output verbose.".to_string();
        let out = build(&opts);
        assert!(out.contains("Keep code output verbose."));
        assert!(!out.contains("Verbosity:"));

        opts.verbosity = Verbosity::High;
        let out = build(&opts);
        assert!(out.contains("Verbosity: high. Keep code output verbose."));
    }

    #[test]
    fn reasoning_directive_only_when_set() {
        let mut opts = PromptOptions::default();
        assert!(!build(&opts).contains("Reasoning effort"));
        opts.reasoning_effort = ReasoningEffort::Minimal;
        assert!(build(&opts).contains("Reasoning effort: minimal."));
    }

    /// Non-medium eagerness activates the agentic block with exactly one eagerness sentence.
    #[test]
    fn agentic_block_eagerness_sentence() {
        let mut opts = PromptOptions::default();
        opts.eagerness = Eagerness::High;
        let out = build(&opts);
        assert!(out.contains(fragments::EAGERNESS_HIGH));
        assert!(!out.contains(fragments::EAGERNESS_MEDIUM));
    }

    /// Agentic instructions appear in fixed order after the eagerness sentence.
    #[test]
    fn agentic_block_fixed_order() {
        let mut opts = PromptOptions::default();
        opts.include_tool_preamble = true;
        opts.include_progress_narration = true;
        opts.include_persistence = true;
        let out = build(&opts);
        let e = out.find(fragments::EAGERNESS_MEDIUM).unwrap();
        let p = out.find(fragments::TOOL_PREAMBLE).unwrap();
        let n = out.find(fragments::PROGRESS_NARRATION).unwrap();
        let s = out.find(fragments::PERSISTENCE).unwrap();
        assert!(e < p && p < n && n < s);
    }

    /// Disambiguation needs both the flag and nonempty tool context.
    #[test]
    fn tool_disambiguation_requires_flag_and_text() {
        let mut opts = PromptOptions::default();
        opts.tool_context = "search before write".to_string();
        assert!(!build(&opts).contains(fragments::TOOL_RULES_HEADER));

        opts.include_tool_disambiguation = true;
        opts.tool_context = String::new();
        assert!(!build(&opts).contains(fragments::TOOL_RULES_HEADER));

        opts.tool_context = "search before write".to_string();
        let out = build(&opts);
        assert!(out.contains(fragments::TOOL_RULES_HEADER));
        assert!(out.contains("search before write"));
    }

    #[test]
    fn planning_block_uses_default_snippet_when_empty() {
        let mut opts = PromptOptions::default();
        opts.include_planning = true;
        let out = build(&opts);
        assert!(out.contains(&format!("Planning:\n{}", fragments::PLANNING_DEFAULT)));

        opts.planning_snippet = "Sketch, then verify.".to_string();
        assert!(build(&opts).contains("Planning:\nSketch, then verify."));
    }

    /// Example pairs are numbered from 1 and wrapped in the selected delimiters.
    #[test]
    fn examples_numbered_and_wrapped() {
        let mut opts = PromptOptions::default();
        opts.delimiters = DelimiterStyle::XmlTags;
        opts.examples = vec![
            ("first question".to_string(), "first answer".to_string()),
            ("second question".to_string(), "second answer".to_string()),
        ];
        let out = build(&opts);
        assert!(out.contains(fragments::EXAMPLES_HEADER));
        assert!(out.contains("Example 1 - user <content>\nfirst question\n</content>"));
        assert!(out.contains("Example 1 - assistant <content>\nfirst answer\n</content>"));
        assert!(out.contains("Example 2 - user <content>\nsecond question\n</content>"));
    }

    /// SWE-bench then retail, in that fixed order when both toggles are set.
    #[test]
    fn appendices_in_fixed_order() {
        let mut opts = PromptOptions::default();
        opts.include_swe_bench = true;
        opts.include_retail_min_reason = true;
        let out = build(&opts);
        let swe = out.find(fragments::APPENDIX_SWE_BENCH).unwrap();
        let retail = out.find(fragments::APPENDIX_RETAIL).unwrap();
        assert!(swe < retail);
    }

    #[test]
    fn rationale_directive_when_flag_set() {
        let mut opts = PromptOptions::default();
        opts.ask_brief_rationale = true;
        let out = build(&opts);
        assert!(out.ends_with(fragments::BRIEF_RATIONALE));
    }

    /// Meta mode ignores non-meta fields: toggling them produces no difference.
    #[test]
    fn meta_mode_short_circuits() {
        let mut opts = PromptOptions::default();
        opts.meta_mode = true;
        opts.meta_prompt = "Write a haiku".to_string();
        let baseline = build(&opts);

        opts.coding_mode = true;
        opts.include_swe_bench = true;
        opts.examples = vec![("u".to_string(), "a".to_string())];
        opts.task = "ignored".to_string();
        assert_eq!(build(&opts), baseline);
    }

    #[test]
    fn meta_mode_output_shape() {
        let mut opts = PromptOptions::default();
        opts.meta_mode = true;
        opts.meta_prompt = "Write a haiku".to_string();
        opts.meta_desired = "vivid imagery".to_string();
        let out = build(&opts);
        assert!(out.starts_with(fragments::META_INSTRUCTION));
        assert!(out.contains("Desired behavior: vivid imagery"));
        assert!(out.contains("Undesired behavior: (not provided)"));
        assert!(out.contains("Prompt ```\nWrite a haiku\n```"));
    }

    /// Substitution runs after the final clamp, so newline runs inside a
    /// variable value reach the output verbatim. Holds in meta mode too.
    #[test]
    fn substituted_values_are_not_reclamped() {
        let mut opts = PromptOptions::default();
        opts.meta_mode = true;
        opts.meta_prompt = "{BODY}".to_string();
        opts.variables
            .insert("BODY".to_string(), "first\n\n\n\nlast".to_string());
        let out = build(&opts);
        assert!(out.contains("first\n\n\n\nlast"));
    }

    /// Variables substitute in the joined output; unbound tokens survive.
    #[test]
    fn variables_substituted_in_final_output() {
        let mut opts = PromptOptions::default();
        opts.task = "Port {PROJECT} to {LANG}; keep {UNBOUND}".to_string();
        opts.variables
            .insert("PROJECT".to_string(), "quill".to_string());
        opts.variables.insert("LANG".to_string(), "Rust".to_string());
        let out = build(&opts);
        assert!(out.contains("Port quill to Rust; keep {UNBOUND}"));
    }

    /// Unrecognized delimiter names wrap the same way as backtick fences.
    #[test]
    fn delimiter_fallback_matches_backticks() {
        let mut a = PromptOptions::default();
        a.task = "compare".to_string();
        a.delimiters = DelimiterStyle::from_name("no such style");
        let mut b = a.clone();
        b.delimiters = DelimiterStyle::Backticks;
        assert_eq!(build(&a), build(&b));
    }

    /// Sections are separated by exactly one blank line.
    #[test]
    fn sections_joined_with_blank_line() {
        let mut opts = PromptOptions::default();
        opts.audience = "students".to_string();
        opts.constraints = "be kind".to_string();
        let out = build(&opts);
        assert_eq!(
            out,
            "You are General assistant.\n\nTarget audience: students.\n\nConstraints:\n- be kind"
        );
    }
}
