use digest_core::{
    extract_answer, extract_listing, AnswerKind, ExtractError, MarkdownConverter, QuestionSummary,
};
use pretty_assertions::assert_eq;
use scraper::Html;

const LISTING: &str = r#"
<html><body>
<div id="mainbar">
  <div id="questions">
    <div class="question-summary" id="question-summary-1">
      <div class="statscontainer">
        <div class="votes"><span class="vote-count-post "><strong>  1024 </strong></span></div>
      </div>
      <div class="summary">
        <h3><a href="/questions/1/how-do-closures-work" class="question-hyperlink">How do closures work…?</a></h3>
        <div class="started">
          <div class="user-info">
            <div class="user-details"><a href="/users/10/alice">Alice</a><br><span class="reputation-score">9k</span></div>
          </div>
        </div>
      </div>
    </div>
    <div class="question-summary" id="question-summary-2">
      <div class="votes"><span class="vote-count-post">77</span></div>
      <div class="summary">
        <h3><a href="/questions/2/what-is-this">What is <code>this</code>?</a></h3>
        <div class="user-details"><span class="community-wiki" title="wiki">community wiki</span></div>
      </div>
    </div>
    <div class="question-summary" id="question-summary-3">
      <div class="summary">
        <h3><a href="/questions/3/broken">No vote counter here</a></h3>
        <div class="user-details">nobody</div>
      </div>
    </div>
    <div class="question-summary" id="question-summary-4">
      <div class="votes"><span class="vote-count-post">-3</span></div>
      <div class="summary">
        <h3><a href="/questions/4/anon">Anonymous</a></h3>
        <div class="user-details">
            user12345
        </div>
      </div>
    </div>
  </div>
</div>
</body></html>
"#;

#[test]
fn listing_rows_keep_document_order_and_author_fallbacks() {
    digest_logging::initialize_for_tests();
    let page = Html::parse_document(LISTING);
    let summaries = extract_listing(&page, "https://stackoverflow.com").unwrap();

    assert_eq!(
        summaries,
        vec![
            QuestionSummary {
                title: "How do closures work?".to_string(),
                link: "https://stackoverflow.com/questions/1/how-do-closures-work".to_string(),
                vote_count: "1024".to_string(),
                author: "Alice".to_string(),
            },
            QuestionSummary {
                title: "What is this?".to_string(),
                link: "https://stackoverflow.com/questions/2/what-is-this".to_string(),
                vote_count: "77".to_string(),
                author: "community-wiki".to_string(),
            },
            QuestionSummary {
                title: "Anonymous".to_string(),
                link: "https://stackoverflow.com/questions/4/anon".to_string(),
                vote_count: "-3".to_string(),
                author: "user12345".to_string(),
            },
        ]
    );
}

#[test]
fn listing_without_container_is_rejected() {
    let page = Html::parse_document("<html><body><p>rate limited</p></body></html>");
    assert_eq!(
        extract_listing(&page, "https://stackoverflow.com"),
        Err(ExtractError::MissingListing)
    );
}

#[test]
fn empty_listing_yields_no_rows() {
    let page = Html::parse_document(r#"<html><body><div id="questions"></div></body></html>"#);
    assert!(extract_listing(&page, "https://stackoverflow.com")
        .unwrap()
        .is_empty());
}

#[test]
fn question_page_renders_accepted_answer_markdown() {
    digest_logging::initialize_for_tests();
    let page = Html::parse_document(
        r#"<html><body>
        <div class="question"><div class="post-text"><p>Question body</p></div></div>
        <div id="answers">
          <div class="answer"><div class="post-text"><p>Not this one</p></div></div>
          <div class="answer accepted-answer" itemprop="acceptedAnswer">
            <div class="post-text" itemprop="text">
              <h2>Short answer</h2>
              <p>Call <code>bind</code> first:</p>
              <pre class="lang-js"><code>fn.bind(obj);
</code></pre>
            </div>
          </div>
        </div>
        </body></html>"#,
    );

    let body = extract_answer(&page, &MarkdownConverter::default()).unwrap();
    assert_eq!(body.kind, AnswerKind::Accepted);
    assert_eq!(
        body.markdown,
        "### Short answer\n\n              Call `bind` first:\n              \n```python\nfn.bind(obj);\n```\n"
            .trim()
    );
}
