//! Answer resolution: match results, escalation policy and the canonical
//! outcome every request ends in.

pub mod answer;
pub mod category;
pub mod match_result;
pub mod outcome;
pub mod policy;
