//! Parsing of raw model output into clue sets.
//!
//! Generation is unconstrained free text: the model may wrap its answer in
//! commentary, re-emit role markers, or get truncated mid-sequence. Both
//! stages tolerate malformed input instead of assuming a well-formed
//! conversation.

use crate::error::{ClueForgeError, Result};
use crate::prompt::END_OF_TEXT;
use regex::Regex;

/// A closed role header followed by the blank line that precedes turn
/// content. The prompt produces one occurrence (the user turn); the model
/// produces the second when it opens its own turn.
const TURN_OPEN: &str = "<|end_header_id|>\n\n";

/// Residue the model sometimes re-emits inside its own turn.
const ASSISTANT_REOPEN: &str = "<|eot_id|><|start_header_id|>assistant";

/// Number of clue lines kept per row.
pub const CLUE_LIMIT: usize = 3;

/// Matches one clue line from `CLUE` through end-of-line.
const CLUE_PATTERN: &str = r"CLUE\d+:.*";

/// Isolate the assistant's turn from the raw decoded sequence.
///
/// Returns `None` when the text holds fewer than three role segments, i.e.
/// the model never opened an assistant turn. Output truncated before the
/// end-of-sequence marker is kept as-is. Total function, never fails.
pub fn assistant_turn(raw: &str) -> Option<String> {
    let turn = raw.split(TURN_OPEN).nth(2)?;
    let turn = match turn.split_once(END_OF_TEXT) {
        Some((before_marker, _)) => before_marker,
        None => turn,
    };
    let turn = turn.replace(ASSISTANT_REOPEN, "");
    Some(turn.trim().to_string())
}

/// Compiled clue-line matcher, built once per run.
pub struct ClueExtractor {
    pattern: Regex,
}

impl ClueExtractor {
    /// Compile the clue pattern.
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(CLUE_PATTERN)
            .map_err(|e| ClueForgeError::UserError(format!("invalid clue pattern: {}", e)))?;
        Ok(Self { pattern })
    }

    /// Collect up to the first [`CLUE_LIMIT`] clue lines, newline-joined.
    ///
    /// Zero matches yield an empty string, not an error.
    pub fn first_clues(&self, text: &str) -> String {
        self.pattern
            .find_iter(text)
            .take(CLUE_LIMIT)
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A well-formed decoded sequence: system turn, user turn, assistant
    /// turn with `answer` as content.
    fn raw_sequence(answer: &str) -> String {
        format!(
            "<|begin_of_text|><|start_header_id|>system<|end_header_id|>\n\
             persona\n\
             <|eot_id|><|start_header_id|>user<|end_header_id|>\n\n\
             task fields <|eot_id|><|start_header_id|>assistant<|end_header_id|>\n\n\
             {}<|end_of_text|>",
            answer
        )
    }

    #[test]
    fn isolates_assistant_turn_from_well_formed_output() {
        let raw = raw_sequence("CLUE1: أول\nCLUE2: ثان");
        assert_eq!(
            assistant_turn(&raw).unwrap(),
            "CLUE1: أول\nCLUE2: ثان"
        );
    }

    #[test]
    fn zero_delimiters_yield_none() {
        assert_eq!(assistant_turn("plain text without any markers"), None);
    }

    #[test]
    fn one_delimiter_yields_none() {
        // Only the user turn opened; the model produced nothing.
        let raw = "<|start_header_id|>user<|end_header_id|>\n\nfields <|eot_id|>";
        assert_eq!(assistant_turn(raw), None);
    }

    #[test]
    fn truncated_output_without_end_marker_is_kept() {
        let raw = "a<|end_header_id|>\n\nb<|end_header_id|>\n\ntruncated answer";
        assert_eq!(assistant_turn(raw).unwrap(), "truncated answer");
    }

    #[test]
    fn reemitted_assistant_header_is_stripped() {
        let raw = format!(
            "a<|end_header_id|>\n\nb<|end_header_id|>\n\n\
             CLUE1: لمحة{}<|end_header_id|>\n\nCLUE2: أخرى<|end_of_text|>",
            ASSISTANT_REOPEN
        );
        let turn = assistant_turn(&raw).unwrap();
        assert!(!turn.contains("<|eot_id|>"));
        assert!(turn.starts_with("CLUE1: لمحة"));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let raw = "a<|end_header_id|>\n\nb<|end_header_id|>\n\n  \n answer \n<|end_of_text|>";
        assert_eq!(assistant_turn(raw).unwrap(), "answer");
    }

    #[test]
    fn extraction_is_idempotent_on_clean_input() {
        // Step A then Step B equals Step B applied directly to the
        // hand-trimmed assistant segment.
        let answer = "CLUE1: تلميح\nCLUE2: آخر";
        let raw = raw_sequence(answer);
        let extractor = ClueExtractor::new().unwrap();

        let via_step_a = extractor.first_clues(&assistant_turn(&raw).unwrap());
        let direct = extractor.first_clues(answer);
        assert_eq!(via_step_a, direct);
    }

    #[test]
    fn keeps_only_first_three_clues_in_order() {
        let extractor = ClueExtractor::new().unwrap();
        let text = "CLUE1: a\nCLUE2: b\nCLUE3: c\nCLUE4: d\nCLUE5: e";
        assert_eq!(extractor.first_clues(text), "CLUE1: a\nCLUE2: b\nCLUE3: c");
    }

    #[test]
    fn zero_matches_yield_empty_string() {
        let extractor = ClueExtractor::new().unwrap();
        assert_eq!(extractor.first_clues("no clues in here"), "");
    }

    #[test]
    fn clue_match_stops_at_end_of_line() {
        let extractor = ClueExtractor::new().unwrap();
        let text = "CLUE1: سؤال عن نهر\nتعليق لاحق لا يلتقط";
        assert_eq!(extractor.first_clues(text), "CLUE1: سؤال عن نهر");
    }

    #[test]
    fn clues_amid_commentary_are_still_found() {
        let extractor = ClueExtractor::new().unwrap();
        let text = "Here are your clues:\nCLUE1: أول\nsome chatter\nCLUE2: ثان";
        assert_eq!(extractor.first_clues(text), "CLUE1: أول\nCLUE2: ثان");
    }
}
