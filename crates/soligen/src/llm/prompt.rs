//! Prompt layout helpers.
//!
//! Prompts are a sequence of markdown-style sections, each introduced by a
//! `# Title` line derived from a snake_case key.

/// Render sections in order, titling each from its key
/// (`tag_examples` becomes `# Tag Examples`).
///
/// ```
/// use soligen::llm::prompt::format_prompt;
///
/// let prompt = format_prompt(&[("tag_examples", "x".to_string()), ("tags", "y".to_string())]);
/// assert_eq!(prompt, "# Tag Examples\nx\n\n# Tags\ny\n");
/// ```
pub fn format_prompt(sections: &[(&str, String)]) -> String {
    sections
        .iter()
        .map(|(key, body)| format!("# {}\n{}\n", section_title(key), body.trim_end()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render instructions as a numbered list, one per line.
pub fn format_instructions<S: AsRef<str>>(lines: &[S]) -> String {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{}. {}\n", i + 1, line.as_ref()))
        .collect()
}

fn section_title(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
