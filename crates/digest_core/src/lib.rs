//! Digest core: pure extraction and markdown rendering over parsed pages.
mod answer;
mod convert;
mod document;
mod filename;
mod listing;
mod sanitize;
mod types;

pub use answer::{extract_answer, find_answer_region, find_post_body};
pub use convert::{Converter, MarkdownConverter, DEFAULT_CODE_LANGUAGE};
pub use document::{document_title, DigestWriter};
pub use filename::document_filename;
pub use listing::{extract_listing, resolve_author};
pub use sanitize::{is_printable, sanitize};
pub use types::{AnswerBody, AnswerKind, ExtractError, QuestionSummary};
