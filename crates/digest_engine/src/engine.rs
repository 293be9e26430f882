use std::io::{self, BufWriter};

use digest_core::{
    document_filename, extract_answer, extract_listing, AnswerBody, DigestWriter, ExtractError,
    MarkdownConverter, QuestionSummary,
};
use digest_logging::{engine_debug, engine_info, engine_warn};
use scraper::Html;

use crate::fetch::{Fetcher, ReqwestFetcher};
use crate::persist::{AtomicFileSink, PersistError};
use crate::{
    ConfigError, DigestEvent, EngineConfig, FetchError, FetchOutput, ItemFailurePolicy,
    RunSummary,
};

/// Receives [`DigestEvent`]s as the run advances.
pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: DigestEvent);
}

/// Why a single question could not be turned into a digest entry.
#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Extract(#[from] ExtractError),
}

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("cannot open output file: {0}")]
    SinkOpen(#[source] PersistError),
    #[error("failed to fetch listing {url}: {source}")]
    Listing {
        url: String,
        #[source]
        source: FetchError,
    },
    #[error("unexpected listing layout at {url}: {source}")]
    ListingLayout {
        url: String,
        #[source]
        source: ExtractError,
    },
    #[error("question {index} ({link}) failed: {source}")]
    Item {
        index: usize,
        link: String,
        #[source]
        source: ItemError,
    },
    #[error("write failed: {0}")]
    Write(#[from] io::Error),
    #[error("cannot persist output file: {0}")]
    Persist(#[source] PersistError),
}

/// Sequential digest run: listing, then one question page at a time.
pub struct DigestRunner {
    config: EngineConfig,
    listing_url: String,
    fetcher: Box<dyn Fetcher>,
    converter: MarkdownConverter,
}

impl DigestRunner {
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        let fetcher = Box::new(ReqwestFetcher::new(config.fetch.clone()));
        Self::with_fetcher(config, fetcher)
    }

    pub fn with_fetcher(config: EngineConfig, fetcher: Box<dyn Fetcher>) -> Result<Self, ConfigError> {
        config.validate()?;
        let listing_url = config.listing_url()?.to_string();
        let converter = MarkdownConverter::new(config.code_language.clone());
        Ok(Self {
            config,
            listing_url,
            fetcher,
            converter,
        })
    }

    /// Run to completion, streaming entries into the output file.
    ///
    /// The file only replaces its previous version once every entry has been
    /// written; any error leaves the old file in place.
    pub async fn run(&self, progress: &dyn ProgressSink) -> Result<RunSummary, RunError> {
        let title = self.config.document_title();
        let sink = AtomicFileSink::create(&self.config.output_location, &document_filename(&title))
            .map_err(RunError::SinkOpen)?;
        engine_debug!("Streaming digest to {:?}", sink.target());
        let mut writer = DigestWriter::new(BufWriter::new(sink));

        let listing_url = &self.listing_url;
        engine_info!("Fetching listing {}", listing_url);
        let listing = self
            .fetcher
            .fetch(listing_url)
            .await
            .map_err(|source| RunError::Listing {
                url: listing_url.clone(),
                source,
            })?;
        let summaries = self
            .parse_listing(&listing)
            .map_err(|source| RunError::ListingLayout {
                url: listing_url.clone(),
                source,
            })?;
        engine_info!("Listing returned {} questions", summaries.len());
        progress.emit(DigestEvent::ListingFetched {
            count: summaries.len(),
        });

        writer.write_title(&title)?;

        let mut written = 0;
        let mut skipped = 0;
        for (index, summary) in summaries.iter().enumerate() {
            engine_debug!("Output [{}]: {}", index, summary.title);
            progress.emit(DigestEvent::ItemStarted {
                index,
                title: summary.title.clone(),
            });

            match self.answer_for(summary).await {
                Ok(body) => {
                    writer.write_entry(summary, &body)?;
                    written += 1;
                    progress.emit(DigestEvent::ItemWritten { index });
                }
                Err(err) => match self.config.failure_policy {
                    ItemFailurePolicy::Abort => {
                        return Err(RunError::Item {
                            index,
                            link: summary.link.clone(),
                            source: err,
                        });
                    }
                    ItemFailurePolicy::Skip => {
                        engine_warn!("Skipping question {} ({}): {}", index, summary.link, err);
                        skipped += 1;
                        progress.emit(DigestEvent::ItemSkipped {
                            index,
                            reason: err.to_string(),
                        });
                    }
                },
            }
        }

        writer.flush()?;
        let sink = writer
            .into_inner()
            .into_inner()
            .map_err(|err| RunError::Write(err.into_error()))?;
        let output_path = sink.commit().map_err(RunError::Persist)?;
        engine_info!(
            "Wrote {} questions ({} skipped) to {:?}",
            written,
            skipped,
            output_path
        );

        Ok(RunSummary {
            written,
            skipped,
            output_path,
        })
    }

    async fn answer_for(&self, summary: &QuestionSummary) -> Result<AnswerBody, ItemError> {
        let page = self.fetcher.fetch(&summary.link).await?;
        let html = page_text(&page);
        let document = Html::parse_document(&html);
        Ok(extract_answer(&document, &self.converter)?)
    }

    fn parse_listing(&self, listing: &FetchOutput) -> Result<Vec<QuestionSummary>, ExtractError> {
        let html = page_text(listing);
        let document = Html::parse_document(&html);
        extract_listing(&document, &self.config.base_url)
    }
}

fn page_text(page: &FetchOutput) -> String {
    let decoded = page.decoded();
    engine_debug!(
        "Decoded {} as {}{}",
        page.metadata.final_url,
        decoded.encoding_label,
        if decoded.lossy { " (lossy)" } else { "" }
    );
    decoded.html
}
