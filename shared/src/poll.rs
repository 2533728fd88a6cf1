use time::OffsetDateTime;
use tracing::{debug, info};
use crate::error::Rejection;
use crate::models::*;
use crate::store::VoteStore;
use crate::validation::validate_submission;

/// Inline status line under the poll form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollMessage {
    pub text: String,
    pub is_error: bool,
}

impl PollMessage {
    pub const RECORDED: &'static str = "Thanks! Your vote has been recorded on this device.";
    pub const CLEARED: &'static str = "Votes cleared for this device (demo only).";

    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), is_error: false }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), is_error: true }
    }

    pub fn recorded() -> Self {
        Self::success(Self::RECORDED)
    }

    pub fn cleared() -> Self {
        Self::success(Self::CLEARED)
    }
}

impl From<Rejection> for PollMessage {
    fn from(rejection: Rejection) -> Self {
        Self::error(rejection.to_string())
    }
}

impl From<&Result<Recorded, Rejection>> for PollMessage {
    fn from(outcome: &Result<Recorded, Rejection>) -> Self {
        match outcome {
            Ok(_) => Self::recorded(),
            Err(rejection) => (*rejection).into(),
        }
    }
}

pub fn tally(votes: &[VoteRecord]) -> Tally {
    votes.iter()
        .filter_map(|vote| vote.choice.option())
        .fold(Tally::default(), |mut tally, option| {
            tally.record(option);
            tally
        })
}

pub fn render_results(tally: &Tally, votes: &[VoteRecord]) -> PollResults {
    PollResults {
        options: PollOption::ALL.iter()
            .map(|&option| OptionResult {
                option,
                label: option.label(),
                count: tally.count(option),
                percent: tally.percent(option),
            })
            .collect(),
        voters: votes.iter().map(VoterRow::from).collect(),
        total: tally.total(),
    }
}

pub fn now_millis() -> i64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}

pub struct PollController<S> {
    store: S,
}

impl<S: VoteStore> PollController<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn votes(&self) -> Vec<VoteRecord> {
        self.store.load()
    }

    pub fn submit(&self, form: &SubmitForm) -> Result<Recorded, Rejection> {
        self.submit_at(form, now_millis())
    }

    pub fn submit_at(&self, form: &SubmitForm, timestamp: i64) -> Result<Recorded, Rejection> {
        let form = validate_submission(form)?;

        let mut votes = self.store.load();
        if votes.iter().any(|vote| vote.email == form.email) {
            debug!("Rejected duplicate vote for {}", form.email);
            return Err(Rejection::DuplicateEmail);
        }

        let record = VoteRecord {
            name: form.name,
            email: form.email,
            choice: form.choice,
            timestamp,
        };
        votes.push(record.clone());
        self.store.save(&votes);

        info!("Recorded vote for {} ({} total)", record.choice.as_str(), votes.len());
        Ok(Recorded { record, total_votes: votes.len() })
    }

    pub fn tally(&self) -> Tally {
        tally(&self.store.load())
    }

    pub fn results(&self) -> PollResults {
        let votes = self.store.load();
        render_results(&tally(&votes), &votes)
    }

    /// Drops every stored vote, but only once the user has confirmed.
    pub fn reset(&self, confirmed: bool) -> bool {
        if !confirmed {
            return false;
        }
        self.store.clear();
        info!("Cleared all votes on this device");
        true
    }
}
