use std::io::{self, Write};

use crate::sanitize::sanitize;
use crate::types::{AnswerBody, QuestionSummary};

/// `"<site> Top <Topic> Questions"`, with the topic's first letter upper-cased.
pub fn document_title(site_name: &str, topic: &str) -> String {
    let mut chars = topic.chars();
    let display_topic: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    format!("{site_name} Top {display_topic} Questions")
}

/// Streams the digest document block by block into `sink`.
///
/// Titles and authors are written without markdown escaping.
pub struct DigestWriter<W: Write> {
    sink: W,
}

impl<W: Write> DigestWriter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    pub fn write_title(&mut self, title: &str) -> io::Result<()> {
        write!(self.sink, "# {title}\n\n")
    }

    pub fn write_heading(
        &mut self,
        title: &str,
        link: &str,
        votes: &str,
        author: &str,
    ) -> io::Result<()> {
        let author = sanitize(author);
        write!(self.sink, "\n## [{title}]({link})\n\n")?;
        write!(self.sink, "**{votes} Votes**, {author}\n\n")
    }

    /// Body text goes out as-is, with no trailing newline.
    pub fn write_body(&mut self, body: &AnswerBody) -> io::Result<()> {
        self.sink.write_all(body.markdown.as_bytes())
    }

    pub fn write_separator(&mut self) -> io::Result<()> {
        self.sink.write_all(b"\n")
    }

    /// Heading, body, then the blank-line separator for one question.
    pub fn write_entry(&mut self, summary: &QuestionSummary, body: &AnswerBody) -> io::Result<()> {
        self.write_heading(
            &summary.title,
            &summary.link,
            &summary.vote_count,
            &summary.author,
        )?;
        self.write_body(body)?;
        self.write_separator()
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.sink.flush()
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::{document_title, DigestWriter};
    use crate::{AnswerBody, AnswerKind, QuestionSummary};
    use pretty_assertions::assert_eq;

    #[test]
    fn title_capitalizes_topic() {
        assert_eq!(
            document_title("StackOverflow", "demo"),
            "StackOverflow Top Demo Questions"
        );
        assert_eq!(
            document_title("StackOverflow", "Javascript"),
            "StackOverflow Top Javascript Questions"
        );
    }

    #[test]
    fn heading_block_layout_is_exact() {
        let mut writer = DigestWriter::new(Vec::new());
        writer
            .write_heading("Why *this*?", "https://x/q/1", "42", "Bob \u{e9}")
            .unwrap();
        let text = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(text, "\n## [Why *this*?](https://x/q/1)\n\n**42 Votes**, Bob \n\n");
    }

    #[test]
    fn entry_is_heading_body_and_separator() {
        let mut writer = DigestWriter::new(Vec::new());
        writer.write_title("T").unwrap();
        let summary = QuestionSummary {
            title: "Q".to_string(),
            link: "L".to_string(),
            vote_count: "7".to_string(),
            author: "A".to_string(),
        };
        let body = AnswerBody {
            kind: AnswerKind::Accepted,
            markdown: "body".to_string(),
        };
        writer.write_entry(&summary, &body).unwrap();
        let text = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(text, "# T\n\n\n## [Q](L)\n\n**7 Votes**, A\n\nbody\n");
    }
}
