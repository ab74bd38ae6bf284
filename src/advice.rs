use std::thread;

use tracing::{Level, debug, span};

use crate::error::{Error, Result};
use crate::pipeline::FeatureRecord;

pub mod client;
pub mod parse;

mod prompt;

pub use client::{ChatClient, Message, OpenAiClient, Role};
pub use parse::{AdviceLine, strip_color_tags};

/// The three cosmetic-advice requests supported against one feature record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdviceKind {
    GoodPalette,
    BadPalette,
    Blush,
}

impl AdviceKind {
    pub const ALL: [AdviceKind; 3] = [
        AdviceKind::GoodPalette,
        AdviceKind::BadPalette,
        AdviceKind::Blush,
    ];

    /// The user-facing question each request kind answers.
    pub fn question(&self) -> &'static str {
        match self {
            AdviceKind::GoodPalette => "Tell me which colours will look good on me on a sunny day?",
            AdviceKind::BadPalette => "What colours will not complement my skin tone?",
            AdviceKind::Blush => "What are the best blush colours for me?",
        }
    }
}

/// One parsed upstream reply, attributable to the request kind that
/// produced it.
#[derive(Debug, Clone)]
pub struct Advice {
    pub kind: AdviceKind,
    pub raw: String,
    pub lines: Vec<AdviceLine>,
}

/// Results of dispatching all three request kinds against one record.
#[derive(Debug, Clone)]
pub struct AdviceSet {
    pub good: Advice,
    pub bad: Advice,
    pub blush: Advice,
}

/// Turns a feature record into chat prompts and parses the replies.
pub struct AdviceRequester<C> {
    client: C,
}

impl<C: ChatClient> AdviceRequester<C> {
    pub fn new(client: C) -> AdviceRequester<C> {
        AdviceRequester { client }
    }

    pub fn request(&self, record: &FeatureRecord, kind: AdviceKind) -> Result<Advice> {
        let span = span!(Level::DEBUG, "advice_request");
        let _guard = span.enter();
        debug!("requesting {kind:?}");

        let messages = prompt::messages(record, kind);
        let raw = self.client.complete(&messages)?;
        let lines = parse::parse_advice(&raw)?;

        Ok(Advice { kind, raw, lines })
    }

    /// Dispatches the three request kinds concurrently, one worker each, and
    /// joins all before returning. The requests are independent and
    /// order-insensitive; retry and timeout policy stays with the client.
    pub fn request_all(&self, record: &FeatureRecord) -> Result<AdviceSet> {
        thread::scope(|s| {
            let good = s.spawn(|| self.request(record, AdviceKind::GoodPalette));
            let bad = s.spawn(|| self.request(record, AdviceKind::BadPalette));
            let blush = s.spawn(|| self.request(record, AdviceKind::Blush));

            Ok(AdviceSet {
                good: join(good)?,
                bad: join(bad)?,
                blush: join(blush)?,
            })
        })
    }
}

fn join(handle: thread::ScopedJoinHandle<'_, Result<Advice>>) -> Result<Advice> {
    handle
        .join()
        .map_err(|_| Error::UpstreamRequest("advice worker panicked".into()))?
}
