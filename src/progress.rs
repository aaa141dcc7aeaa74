//! Summary numbers for the student dashboard, derived from the student's
//! progress records and the course catalog for their age group.

use crate::models::{Course, ProgressRecord};

pub const UNKNOWN_COURSE: &str = "Unknown Course";

pub struct ProgressSummary<'a> {
    records: &'a [ProgressRecord],
}

/// One row of the recent activity list.
pub struct ActivityEntry<'a, 'c> {
    pub record: &'a ProgressRecord,
    pub course: Option<&'c Course>,
}

impl<'a, 'c> ActivityEntry<'a, 'c> {
    pub fn title(&self) -> &'c str {
        self.course.map(|c| c.title.as_str()).unwrap_or(UNKNOWN_COURSE)
    }
}

impl<'a> ProgressSummary<'a> {
    pub fn new(records: &'a [ProgressRecord]) -> Self {
        Self { records }
    }

    pub fn enrolled_count(&self) -> usize {
        self.records.len()
    }

    /// Percentage of the first record for `course_id`, 0 when the student has none.
    pub fn progress_for_course(&self, course_id: &str) -> u8 {
        self.records
            .iter()
            .find(|r| r.course_id == course_id)
            .map(|r| r.progress_percentage)
            .unwrap_or(0)
    }

    pub fn is_enrolled(&self, course_id: &str) -> bool {
        self.progress_for_course(course_id) > 0
    }

    pub fn certificate_count(&self) -> usize {
        self.records.iter().map(|r| r.certificates_earned.len()).sum()
    }

    /// Mean completion rounded half up, 0 for an empty list.
    pub fn average_progress(&self) -> u8 {
        let count = self.records.len() as u32;
        if count == 0 {
            return 0;
        }
        let total: u32 = self.records.iter().map(|r| r.progress_percentage as u32).sum();
        ((2 * total + count) / (2 * count)) as u8
    }

    /// The last `limit` records in arrival order, most recent first, joined to
    /// their course.
    pub fn recent_activity<'c>(&self, courses: &'c [Course], limit: usize) -> Vec<ActivityEntry<'a, 'c>> {
        self.records
            .iter()
            .rev()
            .take(limit)
            .map(|record| ActivityEntry {
                record,
                course: courses.iter().find(|c| c.id == record.course_id),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, course_id: &str, progress: u8, certs: &[&str]) -> ProgressRecord {
        ProgressRecord {
            id: id.to_string(),
            course_id: course_id.to_string(),
            progress_percentage: progress,
            certificates_earned: certs.iter().map(|c| c.to_string()).collect(),
            last_accessed: None,
        }
    }

    fn course(id: &str, title: &str) -> Course {
        Course {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            difficulty_level: 2,
            age_group: Some("5-8".to_string()),
            category: None,
        }
    }

    #[test]
    fn empty_progress_is_all_zeros() {
        let summary = ProgressSummary::new(&[]);
        assert_eq!(summary.average_progress(), 0);
        assert_eq!(summary.certificate_count(), 0);
        assert_eq!(summary.enrolled_count(), 0);
        assert_eq!(summary.progress_for_course("1"), 0);
        assert!(summary.recent_activity(&[], 5).is_empty());
    }

    #[test]
    fn average_of_sixty_and_eighty_is_seventy() {
        let records = vec![record("a", "1", 60, &[]), record("b", "2", 80, &[])];
        assert_eq!(ProgressSummary::new(&records).average_progress(), 70);
    }

    #[test]
    fn average_rounds_halves_up() {
        let records = vec![record("a", "1", 50, &[]), record("b", "2", 51, &[])];
        assert_eq!(ProgressSummary::new(&records).average_progress(), 51);

        let records = vec![record("a", "1", 33, &[]), record("b", "2", 33, &[]), record("c", "3", 34, &[])];
        assert_eq!(ProgressSummary::new(&records).average_progress(), 33);
    }

    #[test]
    fn certificates_are_summed_across_records() {
        let records = vec![record("a", "1", 10, &["a", "b"]), record("b", "2", 20, &["c"])];
        assert_eq!(ProgressSummary::new(&records).certificate_count(), 3);
    }

    #[test]
    fn dashboard_scenario() {
        let records = vec![record("a", "1", 100, &["c1"]), record("b", "2", 50, &[])];
        let summary = ProgressSummary::new(&records);
        assert_eq!(summary.average_progress(), 75);
        assert_eq!(summary.certificate_count(), 1);
        assert_eq!(summary.progress_for_course("2"), 50);
        assert_eq!(summary.progress_for_course("3"), 0);
        assert!(summary.is_enrolled("1"));
        assert!(!summary.is_enrolled("3"));
    }

    #[test]
    fn first_matching_record_wins() {
        let records = vec![record("a", "1", 30, &[]), record("b", "1", 90, &[])];
        assert_eq!(ProgressSummary::new(&records).progress_for_course("1"), 30);
    }

    #[test]
    fn recent_activity_takes_last_five_newest_first() {
        let records: Vec<ProgressRecord> = (1..=7)
            .map(|i| record(&format!("r{}", i), &i.to_string(), 10 * i as u8, &[]))
            .collect();
        let summary = ProgressSummary::new(&records);
        let ids: Vec<&str> = summary
            .recent_activity(&[], 5)
            .iter()
            .map(|entry| entry.record.id.as_str())
            .collect();
        assert_eq!(ids, vec!["r7", "r6", "r5", "r4", "r3"]);
    }

    #[test]
    fn activity_without_a_course_uses_fallback_title() {
        let records = vec![record("a", "1", 40, &[]), record("b", "missing", 20, &[])];
        let courses = vec![course("1", "Math Adventures")];
        let summary = ProgressSummary::new(&records);
        let titles: Vec<&str> = summary
            .recent_activity(&courses, 5)
            .iter()
            .map(|entry| entry.title())
            .collect();
        assert_eq!(titles, vec![UNKNOWN_COURSE, "Math Adventures"]);
    }
}
