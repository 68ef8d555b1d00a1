//! Roster statistics
//!
//! Serializable projection of a roster for recap panels and the CLI's JSON
//! export.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::candidate::{Roster, Stage};

/// Aggregate counts over a roster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterStats {
    pub total: usize,
    /// Candidates not yet in the terminal stage
    pub in_progress: usize,
    pub hired: usize,
    pub interviewing: usize,
    pub by_role: HashMap<String, usize>,
}

impl RosterStats {
    /// Collects stats over the roster in one pass
    pub fn collect(roster: &Roster) -> Self {
        let mut by_role: HashMap<String, usize> = HashMap::new();
        let mut hired = 0;
        let mut interviewing = 0;
        for candidate in roster.iter() {
            *by_role.entry(candidate.role.clone()).or_insert(0) += 1;
            match candidate.stage {
                Stage::Hired => hired += 1,
                Stage::Interview => interviewing += 1,
                _ => {}
            }
        }
        Self {
            total: roster.len(),
            in_progress: roster.len() - hired,
            hired,
            interviewing,
            by_role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_collect_over_seed_roster() {
        let roster = catalog::seed_roster();
        let stats = RosterStats::collect(&roster);

        assert_eq!(stats.total, 8);
        assert_eq!(stats.hired, 1);
        assert_eq!(stats.in_progress, 7);
        assert_eq!(stats.interviewing, 4);
        assert_eq!(stats.by_role.get("Frontend Developer"), Some(&2));
        assert_eq!(stats.by_role.get("Tech Lead"), Some(&1));
    }

    #[test]
    fn test_collect_over_empty_roster() {
        let stats = RosterStats::collect(&Roster::new());
        assert_eq!(stats.total, 0);
        assert_eq!(stats.in_progress, 0);
        assert!(stats.by_role.is_empty());
    }

    #[test]
    fn test_stats_serialize_for_the_recap_export() {
        let stats = RosterStats::collect(&catalog::seed_roster());
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["total"], 8);
        assert_eq!(json["by_role"]["DevOps Engineer"], 2);
    }
}
