//! Fixed wording shared by every front-end.

use crate::error::OracleError;

/// Page and card title.
pub const TITLE: &str = "The Literary Oracle";

/// Lines shown under the title.
pub const SUBTITLE: [&str; 2] = [
    "Chance is the miracle God did not sign.",
    "Leave your question in a sentence.",
];

/// Placeholder for the question input.
pub const PROMPT: &str = "Type your question here";

/// Label of the submit action.
pub const SUBMIT: &str = "Consult the oracle";

/// Shown while the cosmetic pause runs.
pub const TURNING_PAGE: &str = "Turning the page...";

/// Gentle warning for an empty question.
pub const EMPTY_QUESTION_WARNING: &str = "Without a question, the door does not open.";

/// Data error for an empty corpus.
pub const EMPTY_CORPUS_ERROR: &str = "The data files are empty.";

/// Reading guide shown under a result.
pub const GUIDE: [&str; 2] = [
    "This sentence is not an answer. It is a mirror.",
    "The feeling that rises as you read it, that is your answer.",
];

/// Footer shown before anything has been asked.
pub const IDLE_FOOTER: &str = "Curated for your serendipity.";

/// What a front-end should tell the user about a failed submission.
pub fn message_for(err: &OracleError) -> String {
    match err {
        OracleError::EmptyQuestion => EMPTY_QUESTION_WARNING.to_string(),
        OracleError::EmptyCorpus => EMPTY_CORPUS_ERROR.to_string(),
        OracleError::Read { .. } => err.to_string(),
    }
}
