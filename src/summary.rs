//! Prompt construction and response cleanup for note summaries.

/// Closing tag of the reasoning block some models emit before their answer
const THINK_END_MARKER: &str = "</think>";

const PROMPT_HEADER: &str = r#"You are summarizing a single daily note for a Senior Software Engineer.

TASKS:
- Review daily notes and extract information from the bullet points and checked tasks. Present it as a concise list of bullet points containing what happened today.

RULES:
- Output ONLY a single bullet list
- Each bullet must describe one concrete event, task, or decision
- Use past tense
- Be factual and neutral
- Be sure to include points related to commit messages if available
- Do NOT add explanations, headings, or commentary
- Do NOT infer or invent events
- Do NOT include goals, plans, or future work unless explicitly stated in the text
- Do NOT repeat information across bullets

FORMAT:
- One markdown bullet list
- Each bullet starts with "- "
- No blank lines before or after the list
- For commit message bullets, group them per repo using this format:
"""- (repo):
	- <commit message summary>
	- <commit message summary>"""

INPUT:
<<<
"#;

const PROMPT_FOOTER: &str = "\n>>>\n";

/// Wrap the note text in the summarization instructions.
pub fn build_summary_prompt(note: &str) -> String {
    let mut prompt = String::with_capacity(PROMPT_HEADER.len() + note.len() + PROMPT_FOOTER.len());
    prompt.push_str(PROMPT_HEADER);
    prompt.push_str(note);
    prompt.push_str(PROMPT_FOOTER);
    prompt
}

/// Drop everything up to and including the first `</think>` marker and trim
/// the rest. Without a marker the whole response is trimmed and kept.
pub fn strip_think_block(response: &str) -> &str {
    match response.find(THINK_END_MARKER) {
        Some(idx) => response[idx + THINK_END_MARKER.len()..].trim(),
        None => response.trim(),
    }
}
