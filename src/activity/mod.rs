//! Casey's Work tab: what the assistant did and what it needs a human for

pub mod feed;

pub use feed::{
    activity_feed, human_needed, urgent_count, ActivityStatus, ActivitySummary, CaseyActivity,
    HumanNeeded, DAILY_INSIGHT, MONITORED_CASES,
};
