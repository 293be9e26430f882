use digest_engine::{DigestEvent, ProgressSink};

/// Prints one `Output [i]: <title>` line per question to stdout.
#[derive(Debug, Default)]
pub struct ConsoleProgress;

impl ProgressSink for ConsoleProgress {
    fn emit(&self, event: DigestEvent) {
        match event {
            DigestEvent::ListingFetched { count } => println!("Found {count} questions"),
            DigestEvent::ItemStarted { index, title } => println!("Output [{index}]: {title}"),
            DigestEvent::ItemSkipped { index, reason } => {
                println!("Skipped [{index}]: {reason}")
            }
            DigestEvent::ItemWritten { .. } => {}
        }
    }
}
