use serde::{Serialize, Deserialize};
use std::fmt;
use time::{macros::format_description, OffsetDateTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PollOption {
    MoreDaytime,
    MoreEvening,
    MoreCoverage,
    BetterFrequency,
}

impl PollOption {
    pub const ALL: [PollOption; 4] = [
        PollOption::MoreDaytime,
        PollOption::MoreEvening,
        PollOption::MoreCoverage,
        PollOption::BetterFrequency,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            PollOption::MoreDaytime => "more_daytime",
            PollOption::MoreEvening => "more_evening",
            PollOption::MoreCoverage => "more_coverage",
            PollOption::BetterFrequency => "better_frequency",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            PollOption::MoreDaytime => "More daytime buses",
            PollOption::MoreEvening => "Later evening service",
            PollOption::MoreCoverage => "More coverage on weekends",
            PollOption::BetterFrequency => "Shorter waits (frequency)",
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|opt| opt.key() == key)
    }
}

impl fmt::Display for PollOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The stored value of a ballot. Values written by anything other than this
/// page's form survive a load/save cycle untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Choice {
    Known(PollOption),
    Unrecognized(String),
}

impl Choice {
    pub fn option(&self) -> Option<PollOption> {
        match self {
            Choice::Known(opt) => Some(*opt),
            Choice::Unrecognized(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Choice::Known(opt) => opt.key(),
            Choice::Unrecognized(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Choice::Known(opt) => opt.label(),
            Choice::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for Choice {
    fn from(raw: String) -> Self {
        PollOption::from_key(&raw).map_or(Choice::Unrecognized(raw), Choice::Known)
    }
}

impl From<&str> for Choice {
    fn from(raw: &str) -> Self {
        Choice::from(raw.to_string())
    }
}

impl From<PollOption> for Choice {
    fn from(opt: PollOption) -> Self {
        Choice::Known(opt)
    }
}

impl From<Choice> for String {
    fn from(choice: Choice) -> Self {
        match choice {
            Choice::Known(opt) => opt.key().to_string(),
            Choice::Unrecognized(raw) => raw,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRecord {
    pub name: String,
    pub email: String,
    pub choice: Choice,
    pub timestamp: i64,
}

impl VoteRecord {
    pub fn cast_at(&self) -> String {
        format_timestamp(self.timestamp)
    }
}

/// Raw form input, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitForm {
    pub name: String,
    pub email: String,
    pub choice: String,
}

impl SubmitForm {
    pub fn new(name: impl Into<String>, email: impl Into<String>, choice: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            choice: choice.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recorded {
    pub record: VoteRecord,
    pub total_votes: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    counts: [u32; 4],
    total: u32,
}

impl Tally {
    pub fn from_counts(counts: [u32; 4]) -> Self {
        Self { counts, total: counts.iter().sum() }
    }

    pub fn record(&mut self, option: PollOption) {
        self.counts[option.index()] += 1;
        self.total += 1;
    }

    pub fn count(&self, option: PollOption) -> u32 {
        self.counts[option.index()]
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn percent(&self, option: PollOption) -> u32 {
        percent_of(self.count(option), self.total)
    }
}

pub fn percent_of(count: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (f64::from(count) / f64::from(total) * 100.0).round() as u32
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionResult {
    pub option: PollOption,
    pub label: &'static str,
    pub count: u32,
    pub percent: u32,
}

impl OptionResult {
    pub fn width(&self) -> String {
        format!("{}%", self.percent)
    }

    pub fn votes_title(&self) -> String {
        format!("{} vote(s)", self.count)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoterRow {
    pub name: String,
    pub email: String,
    pub choice_label: String,
    pub cast_at: String,
}

impl From<&VoteRecord> for VoterRow {
    fn from(record: &VoteRecord) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            choice_label: record.choice.label().to_string(),
            cast_at: record.cast_at(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollResults {
    pub options: Vec<OptionResult>,
    pub voters: Vec<VoterRow>,
    pub total: u32,
}

pub fn format_timestamp(millis: i64) -> String {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second] UTC");
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000)
        .ok()
        .and_then(|at| at.format(format).ok())
        .unwrap_or_else(|| millis.to_string())
}
