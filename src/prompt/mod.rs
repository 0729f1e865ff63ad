//! Prompt construction for the clue-generation model.
//!
//! The model is fine-tuned on the Llama-3 chat format, so every prompt is
//! framed with its role-turn markers: a system turn carrying the fixed
//! persona, a user turn carrying the task instruction and the row fields,
//! and an opened assistant turn left for the model to fill.

pub mod template;

use crate::error::{ClueForgeError, Result};
use crate::table::InputRow;
use template::render;

/// Marks the start of a tokenized conversation.
pub const BEGIN_OF_TEXT: &str = "<|begin_of_text|>";
/// Opens a role header.
pub const START_HEADER: &str = "<|start_header_id|>";
/// Closes a role header.
pub const END_HEADER: &str = "<|end_header_id|>";
/// Ends a single turn.
pub const EOT: &str = "<|eot_id|>";
/// Ends the whole decoded sequence.
pub const END_OF_TEXT: &str = "<|end_of_text|>";

/// Fixed persona for the system turn.
const SYSTEM_PERSONA: &str = "You are an invaluable assistant who creates \
Arabic crossword clues based on the provided Arabic text, keyword, and \
specific category.";

/// Task instruction prefixed to every user turn.
const TASK_INSTRUCTION: &str = "Create Arabic crossword clues for a \
specified keyword in Arabic, using the provided text and focusing on the \
indicated category.";

/// Body of the user turn. Fields are embedded verbatim; a field containing
/// role markers will corrupt the turn structure.
const USER_TEMPLATE: &str =
    "{instruction}\n\nTEXT: {text}\n\nKEYWORD: {keyword}\n\nCATEGORY: {category}";

/// Build the full chat-framed prompt for one input row.
///
/// Pure function of the row and the fixed instruction constants. The
/// assistant header at the end is left open for the completion service.
pub fn build_prompt(row: &InputRow) -> Result<String> {
    let user_message = render(
        USER_TEMPLATE,
        &[
            ("instruction", TASK_INSTRUCTION),
            ("text", row.text.as_str()),
            ("keyword", row.keyword.as_str()),
            ("category", row.category.as_str()),
        ],
    )
    .map_err(|e| ClueForgeError::UserError(format!("failed to render prompt: {}", e)))?;

    Ok(format!(
        "{begin}{start}system{end}\n{persona}\n{eot}{start}user{end}\n\n{message} {eot}{start}assistant{end}",
        begin = BEGIN_OF_TEXT,
        start = START_HEADER,
        end = END_HEADER,
        eot = EOT,
        persona = SYSTEM_PERSONA,
        message = user_message,
    ))
}
