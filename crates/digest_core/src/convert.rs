use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::ElementRef;

pub const DEFAULT_CODE_LANGUAGE: &str = "python";

const INLINE_CODE: &str = "`";
const FENCE_CLOSE: &str = "```\n";
const HEADING_OPEN: &str = "\n### ";
const HEADING_CLOSE: &str = "\n";

pub trait Converter: Send + Sync {
    /// Render the text of `fragment`'s descendants with markdown markers.
    fn convert(&self, fragment: ElementRef<'_>) -> String;
}

/// Brackets the text of `<code>` and `<h2>` elements with markdown markers.
///
/// - `<code>` is wrapped in backticks, or in a fenced block when its direct
///   parent is `<pre>`
/// - `<h2>` becomes a `### ` heading line
/// - every other element contributes its text verbatim
///
/// The two rules touch disjoint tags, so applying both in one traversal gives
/// the same text as running the code rule over the whole fragment first and the
/// heading rule second. Nested markup keeps its text between the markers.
#[derive(Debug, Clone)]
pub struct MarkdownConverter {
    code_language: String,
}

impl MarkdownConverter {
    pub fn new(code_language: impl Into<String>) -> Self {
        Self {
            code_language: code_language.into(),
        }
    }

    fn visit_node(&self, node: NodeRef<'_, Node>, out: &mut String) {
        match node.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(_) => {
                if let Some(element) = ElementRef::wrap(node) {
                    self.visit_element(element, out);
                }
            }
            Node::Comment(_) | Node::Doctype(_) | Node::ProcessingInstruction(_) => {}
            _ => {
                for child in node.children() {
                    self.visit_node(child, out);
                }
            }
        }
    }

    fn visit_element(&self, element: ElementRef<'_>, out: &mut String) {
        match element.value().name() {
            "code" => {
                if parent_is_pre(element) {
                    out.push_str("\n```");
                    out.push_str(&self.code_language);
                    out.push('\n');
                    self.visit_children(element, out);
                    out.push_str(FENCE_CLOSE);
                } else {
                    out.push_str(INLINE_CODE);
                    self.visit_children(element, out);
                    out.push_str(INLINE_CODE);
                }
            }
            "h2" => {
                out.push_str(HEADING_OPEN);
                self.visit_children(element, out);
                out.push_str(HEADING_CLOSE);
            }
            _ => self.visit_children(element, out),
        }
    }

    fn visit_children(&self, element: ElementRef<'_>, out: &mut String) {
        for child in element.children() {
            self.visit_node(child, out);
        }
    }
}

impl Default for MarkdownConverter {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LANGUAGE)
    }
}

impl Converter for MarkdownConverter {
    fn convert(&self, fragment: ElementRef<'_>) -> String {
        let mut out = String::new();
        self.visit_children(fragment, &mut out);
        out
    }
}

fn parent_is_pre(element: ElementRef<'_>) -> bool {
    element
        .parent()
        .and_then(ElementRef::wrap)
        .is_some_and(|parent| parent.value().name() == "pre")
}
