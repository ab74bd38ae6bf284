use tracing::debug;

use crate::advice::{Advice, AdviceKind, AdviceRequester, AdviceSet, ChatClient};
use crate::error::Result;
use crate::pipeline::FeatureRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

#[derive(Debug, Clone)]
pub struct Turn {
    pub speaker: Speaker,
    pub content: String,
}

/// Conversation state for one extracted feature record, passed explicitly to
/// whatever renders it. Advice is memoized per request kind, so asking the
/// same question again replays the cached answer instead of re-hitting the
/// upstream API.
pub struct Session {
    record: FeatureRecord,
    turns: Vec<Turn>,
    cached: [Option<Advice>; 3],
}

impl Session {
    pub fn new(record: FeatureRecord) -> Session {
        Session {
            record,
            turns: Vec::new(),
            cached: [None, None, None],
        }
    }

    pub fn record(&self) -> &FeatureRecord {
        &self.record
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Pre-populates the cache from a fan-out dispatch, without adding
    /// conversation turns.
    pub fn seed(&mut self, set: AdviceSet) {
        self.cached[AdviceKind::GoodPalette as usize] = Some(set.good);
        self.cached[AdviceKind::BadPalette as usize] = Some(set.bad);
        self.cached[AdviceKind::Blush as usize] = Some(set.blush);
    }

    /// Asks one of the three supported questions, recording both sides of
    /// the exchange as turns.
    pub fn ask<C: ChatClient>(
        &mut self,
        requester: &AdviceRequester<C>,
        kind: AdviceKind,
    ) -> Result<&Advice> {
        let idx = kind as usize;

        if self.cached[idx].is_none() {
            self.cached[idx] = Some(requester.request(&self.record, kind)?);
        } else {
            debug!("{kind:?} answered from cache");
        }

        let advice = match &self.cached[idx] {
            Some(a) => a,
            None => unreachable!("advice cache populated above"),
        };

        self.turns.push(Turn {
            speaker: Speaker::User,
            content: kind.question().to_string(),
        });
        self.turns.push(Turn {
            speaker: Speaker::Assistant,
            content: advice.raw.clone(),
        });

        Ok(advice)
    }
}
