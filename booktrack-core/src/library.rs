//! Library aggregation: ownership filtering, shelf partitions, and stats

use crate::types::{BookRecord, ReadingStatus};
use serde::{Deserialize, Serialize};

/// Summary counts over one user's library
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReadingStats {
    /// Books started but not finished
    pub in_progress: usize,

    /// Books finished
    pub finished: usize,
}

/// A view over the saved-book collection restricted to a single owner.
///
/// The ownership filter is applied once at construction; every partition and
/// count is derived from the owned subset only, so records belonging to other
/// users (or to nobody) can never leak into an output.
#[derive(Debug, Clone, Default)]
pub struct LibraryView {
    records: Vec<BookRecord>,
}

impl LibraryView {
    /// Build a view of `records` owned by `user_id`.
    ///
    /// Records with a missing or mismatched owner are silently dropped; an
    /// empty input yields an empty view, not an error.
    pub fn for_user(records: &[BookRecord], user_id: &str) -> Self {
        Self {
            records: records
                .iter()
                .filter(|r| r.owned_by(user_id))
                .cloned()
                .collect(),
        }
    }

    /// All records owned by the target user
    pub fn records(&self) -> &[BookRecord] {
        &self.records
    }

    /// Books currently being read (started, not finished)
    pub fn in_progress(&self) -> Vec<&BookRecord> {
        self.by_status(ReadingStatus::InProgress)
    }

    /// Books saved but not started
    pub fn unstarted(&self) -> Vec<&BookRecord> {
        self.by_status(ReadingStatus::Unstarted)
    }

    /// Books finished
    pub fn finished(&self) -> Vec<&BookRecord> {
        self.by_status(ReadingStatus::Finished)
    }

    /// Summary counts for the stats display
    pub fn stats(&self) -> ReadingStats {
        ReadingStats {
            in_progress: self.in_progress().len(),
            finished: self.finished().len(),
        }
    }

    fn by_status(&self, status: ReadingStatus) -> Vec<&BookRecord> {
        self.records
            .iter()
            .filter(|r| r.status() == status)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use uuid::Uuid;

    fn record(
        title: &str,
        user: Option<&str>,
        started: Option<DateTime<Utc>>,
        finished: Option<DateTime<Utc>>,
    ) -> BookRecord {
        BookRecord {
            id: Uuid::new_v4(),
            catalog_id: format!("cat-{title}"),
            title: title.to_string(),
            authors: String::new(),
            description: String::new(),
            category: String::new(),
            photo_url: String::new(),
            published_date: String::new(),
            page_count: String::new(),
            rating: 0.0,
            user_id: user.map(String::from),
            started_reading: started,
            finished_reading: finished,
        }
    }

    fn ts(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_empty_collection() {
        let view = LibraryView::for_user(&[], "u1");
        assert!(view.records().is_empty());
        assert!(view.in_progress().is_empty());
        assert!(view.unstarted().is_empty());
        assert!(view.finished().is_empty());
        assert_eq!(view.stats(), ReadingStats::default());
    }

    #[test]
    fn test_ownership_filter_excludes_other_users() {
        let records = vec![
            record("mine", Some("u1"), None, None),
            record("theirs", Some("u2"), Some(ts(1)), None),
            record("nobodys", None, Some(ts(1)), Some(ts(2))),
        ];
        let view = LibraryView::for_user(&records, "u1");
        assert_eq!(view.records().len(), 1);
        assert_eq!(view.records()[0].title, "mine");
        assert!(view.in_progress().is_empty());
        assert!(view.finished().is_empty());
    }

    #[test]
    fn test_partitions_and_counts() {
        // A started, B finished, C belongs to someone else
        let records = vec![
            record("A", Some("u1"), Some(ts(100)), None),
            record("B", Some("u1"), Some(ts(100)), Some(ts(200))),
            record("C", Some("u2"), None, None),
        ];
        let view = LibraryView::for_user(&records, "u1");

        let reading: Vec<_> = view.in_progress().iter().map(|r| r.title.as_str()).collect();
        let finished: Vec<_> = view.finished().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(reading, vec!["A"]);
        assert_eq!(finished, vec!["B"]);
        assert!(view.unstarted().is_empty());
        assert_eq!(
            view.stats(),
            ReadingStats {
                in_progress: 1,
                finished: 1
            }
        );

        // C appears in no partition
        for shelf in [view.in_progress(), view.unstarted(), view.finished()] {
            assert!(shelf.iter().all(|r| r.title != "C"));
        }
    }

    #[test]
    fn test_partitions_are_disjoint_and_cover_owned_set() {
        let records = vec![
            record("new", Some("u1"), None, None),
            record("reading", Some("u1"), Some(ts(10)), None),
            record("done", Some("u1"), Some(ts(10)), Some(ts(20))),
        ];
        let view = LibraryView::for_user(&records, "u1");
        let total =
            view.in_progress().len() + view.unstarted().len() + view.finished().len();
        assert_eq!(total, view.records().len());
    }
}
