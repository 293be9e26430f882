use std::fmt;

/// One row of a tag listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSummary {
    pub title: String,
    pub link: String,
    /// Display text of the vote counter; not guaranteed to be numeric.
    pub vote_count: String,
    pub author: String,
}

/// Which answer region a body was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerKind {
    Accepted,
    Generic,
}

impl fmt::Display for AnswerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerKind::Accepted => write!(f, "accepted"),
            AnswerKind::Generic => write!(f, "generic"),
        }
    }
}

/// Converted answer markdown, already trimmed and sanitized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerBody {
    pub kind: AnswerKind,
    pub markdown: String,
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("no accepted or generic answer with a post body was found")]
    NoAnswerFound,
    #[error("listing page has no question container")]
    MissingListing,
}
