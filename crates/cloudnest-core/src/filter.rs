//! File browser filter/sort engine
//!
//! Pure functions over a fetched snapshot. The backend returns the full
//! listing and every narrowing step runs client-side, so the browser can
//! re-filter on each keystroke without another round trip.

use chrono::{DateTime, Utc};
use cloudnest_types::{FileRecord, FilterCriteria, SortKey};

/// Apply `criteria` to a listing snapshot, evaluated at the current time.
///
/// The input is never mutated. Filters are conjunctive and the sort runs
/// last so it orders only the surviving records.
pub fn apply(files: &[FileRecord], criteria: &FilterCriteria) -> Vec<FileRecord> {
    apply_at(files, criteria, Utc::now())
}

/// Like [`apply`] with an explicit clock, which is what the date windows
/// are measured against.
pub fn apply_at(
    files: &[FileRecord],
    criteria: &FilterCriteria,
    now: DateTime<Utc>,
) -> Vec<FileRecord> {
    let query = criteria.query.trim().to_lowercase();
    let prefix = criteria.type_filter.prefix();
    let cutoff = criteria.date_filter.window().map(|window| now - window);

    let mut result: Vec<FileRecord> = files
        .iter()
        .filter(|file| query.is_empty() || file.name.to_lowercase().contains(&query))
        .filter(|file| match prefix {
            Some(prefix) => file.mime_type.starts_with(prefix),
            None => true,
        })
        .filter(|file| match cutoff {
            Some(cutoff) => file.modified_at() >= cutoff,
            None => true,
        })
        .cloned()
        .collect();

    // sort_by is stable, so ties and the Unsorted case keep backend order
    match criteria.sort {
        SortKey::Unsorted => {}
        SortKey::NameAsc => result.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::SizeDesc => result.sort_by(|a, b| b.size.cmp(&a.size)),
        SortKey::ModifiedDesc => result.sort_by(|a, b| b.modified_at().cmp(&a.modified_at())),
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use cloudnest_types::{DateFilter, TypeFilter};
    use uuid::Uuid;

    fn record(name: &str, mime: &str, size: u64, modified_hours_ago: i64) -> FileRecord {
        let modified = Utc::now() - Duration::hours(modified_hours_ago);
        FileRecord {
            id: Uuid::new_v4(),
            name: name.into(),
            mime_type: mime.into(),
            size,
            created_at: modified - Duration::days(90),
            updated_at: Some(modified),
            variants: Default::default(),
            share: None,
        }
    }

    fn sample() -> Vec<FileRecord> {
        vec![
            record("beach.png", "image/png", 4096, 1),
            record("Report.pdf", "application/pdf", 1024, 30),
            record("song.mp3", "audio/mpeg", 8192, 24 * 10),
            record("archive.zip", "application/zip", 2048, 24 * 40),
        ]
    }

    fn names(files: &[FileRecord]) -> Vec<&str> {
        files.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn default_criteria_keeps_backend_order() {
        let files = sample();
        let result = apply(&files, &FilterCriteria::default());
        assert_eq!(names(&result), names(&files));
    }

    #[test]
    fn query_is_case_insensitive_substring() {
        let files = sample();
        let criteria = FilterCriteria {
            query: "REPORT".into(),
            ..Default::default()
        };
        assert_eq!(names(&apply(&files, &criteria)), ["Report.pdf"]);
    }

    #[test]
    fn query_matching_nothing_yields_empty() {
        let files = sample();
        let criteria = FilterCriteria {
            query: "does-not-exist".into(),
            ..Default::default()
        };
        assert!(apply(&files, &criteria).is_empty());
    }

    #[test]
    fn type_filter_matches_mime_prefix() {
        let files = sample();
        let criteria = FilterCriteria {
            type_filter: TypeFilter::Application,
            ..Default::default()
        };
        assert_eq!(
            names(&apply(&files, &criteria)),
            ["Report.pdf", "archive.zip"]
        );
    }

    #[test]
    fn today_window_is_24_hours_on_modified_time() {
        let now = Utc::now();
        let files = vec![
            record("fresh.txt", "text/plain", 1, 1),
            record("stale.txt", "text/plain", 1, 48),
        ];
        let criteria = FilterCriteria {
            date_filter: DateFilter::Today,
            ..Default::default()
        };
        assert_eq!(names(&apply_at(&files, &criteria, now)), ["fresh.txt"]);
    }

    #[test]
    fn date_window_falls_back_to_created_at() {
        let mut old = record("untouched.txt", "text/plain", 1, 0);
        old.updated_at = None;
        old.created_at = Utc::now() - Duration::days(2);

        let criteria = FilterCriteria {
            date_filter: DateFilter::Week,
            ..Default::default()
        };
        assert_eq!(apply(&[old.clone()], &criteria).len(), 1);

        let criteria = FilterCriteria {
            date_filter: DateFilter::Today,
            ..Default::default()
        };
        assert!(apply(&[old], &criteria).is_empty());
    }

    #[test]
    fn name_sort_is_idempotent() {
        let files = sample();
        let criteria = FilterCriteria {
            sort: SortKey::NameAsc,
            ..Default::default()
        };
        let once = apply(&files, &criteria);
        let twice = apply(&once, &criteria);
        assert_eq!(names(&once), names(&twice));
        assert_eq!(
            names(&once),
            ["Report.pdf", "archive.zip", "beach.png", "song.mp3"]
        );
    }

    #[test]
    fn size_sort_is_descending() {
        let files = sample();
        let criteria = FilterCriteria {
            sort: SortKey::SizeDesc,
            ..Default::default()
        };
        let sizes: Vec<u64> = apply(&files, &criteria).iter().map(|f| f.size).collect();
        assert_eq!(sizes, [8192, 4096, 2048, 1024]);
    }

    #[test]
    fn modified_sort_is_newest_first() {
        let files = sample();
        let criteria = FilterCriteria {
            sort: SortKey::ModifiedDesc,
            ..Default::default()
        };
        assert_eq!(
            names(&apply(&files, &criteria)),
            ["beach.png", "Report.pdf", "song.mp3", "archive.zip"]
        );
    }

    #[test]
    fn filters_combine_conjunctively() {
        let files = sample();
        let criteria = FilterCriteria {
            query: "r".into(),
            type_filter: TypeFilter::Application,
            date_filter: DateFilter::Month,
            sort: SortKey::NameAsc,
        };
        // "archive.zip" matches query+type but is 40 days old
        assert_eq!(names(&apply(&files, &criteria)), ["Report.pdf"]);
    }

    #[test]
    fn input_is_left_untouched() {
        let files = sample();
        let before = names(&files).join(",");
        let criteria = FilterCriteria {
            sort: SortKey::NameAsc,
            ..Default::default()
        };
        let _ = apply(&files, &criteria);
        assert_eq!(names(&files).join(","), before);
    }
}
