use super::domain::{CareerLevel, JobTrack, ReviewLabels};
use super::table::ReviewTable;
use std::collections::{BTreeMap, HashMap};

/// Category label to mean score. Categories without scored rows are absent.
pub type ScoreMap = BTreeMap<String, f64>;

static EMPTY_SCORES: ScoreMap = BTreeMap::new();

/// Mean score per category for rows matching both `level` and `track` exactly.
pub fn mean_by_category(table: &ReviewTable, level: &str, track: &str) -> ScoreMap {
    let mut totals: BTreeMap<&str, (f64, usize)> = BTreeMap::new();

    for record in table
        .records()
        .iter()
        .filter(|record| record.track == track)
        .filter(|record| record.level == level)
    {
        let (Some(category), Some(score)) = (record.category.as_deref(), record.score) else {
            continue;
        };
        let total = totals.entry(category).or_insert((0.0, 0));
        total.0 += score;
        total.1 += 1;
    }

    totals
        .into_iter()
        .map(|(category, (sum, count))| (category.to_string(), sum / count as f64))
        .collect()
}

/// The six level/track score maps a report compares.
#[derive(Debug, Clone, Default)]
pub struct ScoreGrid {
    maps: HashMap<(CareerLevel, JobTrack), ScoreMap>,
}

impl ScoreGrid {
    pub fn compute(table: &ReviewTable, labels: &ReviewLabels) -> Self {
        warn_on_unmatched_labels(table, labels);

        let mut maps = HashMap::new();
        for track in JobTrack::ordered() {
            for level in CareerLevel::ordered() {
                let scores = mean_by_category(table, labels.level(level), labels.track(track));
                tracing::debug!(
                    level = level.label(),
                    track = track.label(),
                    categories = scores.len(),
                    "aggregated mean scores"
                );
                maps.insert((level, track), scores);
            }
        }

        Self { maps }
    }

    pub fn get(&self, level: CareerLevel, track: JobTrack) -> &ScoreMap {
        self.maps.get(&(level, track)).unwrap_or(&EMPTY_SCORES)
    }
}

// Labels are matched exactly, so casing or spelling drift in the data
// silently empties a series. Surface it instead.
fn warn_on_unmatched_labels(table: &ReviewTable, labels: &ReviewLabels) {
    if table.is_empty() {
        return;
    }

    let levels = table.distinct_levels();
    for level in CareerLevel::ordered() {
        let label = labels.level(level);
        if !levels.contains(label) {
            tracing::warn!(
                label,
                present = ?levels,
                "no rows match the {} level label; its bars will be zero",
                level.label()
            );
        }
    }

    let tracks = table.distinct_tracks();
    for track in JobTrack::ordered() {
        let label = labels.track(track);
        if !tracks.contains(label) {
            tracing::warn!(
                label,
                present = ?tracks,
                "no rows match the {} track label; its bars will be zero",
                track.label()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::ReviewRecord;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    fn table() -> ReviewTable {
        ReviewTable::from_records(vec![
            ReviewRecord::new("entry", "A", "X", 10.0),
            ReviewRecord::new("entry", "A", "X", 20.0),
            ReviewRecord::new("entry", "B", "X", 100.0),
            ReviewRecord::new("senior", "A", "X", 50.0),
            ReviewRecord::new("entry", "A", "Z", 3.0),
        ])
    }

    #[test]
    fn averages_rows_matching_both_filters() {
        let scores = mean_by_category(&table(), "entry", "A");

        assert_eq!(scores.len(), 2);
        assert_eq!(scores["X"], 15.0);
        assert_eq!(scores["Z"], 3.0);
    }

    #[test]
    fn keys_never_include_categories_outside_the_filter() {
        let mut records = table().records().to_vec();
        records.push(ReviewRecord::new("senior", "B", "Y", 8.0));
        let table = ReviewTable::from_records(records);

        let scores = mean_by_category(&table, "entry", "A");
        assert!(!scores.contains_key("Y"));
        assert!(scores.keys().all(|key| {
            table.records().iter().any(|r| {
                r.level == "entry" && r.track == "A" && r.category.as_deref() == Some(key.as_str())
            })
        }));
    }

    #[test]
    fn unscored_rows_do_not_create_keys() {
        let table = ReviewTable::from_records(vec![ReviewRecord {
            level: "entry".to_string(),
            track: "A".to_string(),
            category: Some("X".to_string()),
            score: None,
        }]);

        assert!(mean_by_category(&table, "entry", "A").is_empty());
    }

    #[test]
    fn label_matching_is_exact() {
        assert!(mean_by_category(&table(), "Entry", "A").is_empty());
        assert!(mean_by_category(&table(), "entry", "a").is_empty());
    }

    #[test]
    fn grid_holds_all_six_combinations() {
        let mut labels = ReviewLabels::default();
        labels.set_level(CareerLevel::Entry, "entry");
        labels.set_level(CareerLevel::Senior, "senior");
        labels.set_track(JobTrack::Data, "A");
        labels.set_track(JobTrack::Analytics, "B");

        let grid = ScoreGrid::compute(&table(), &labels);

        assert_eq!(grid.get(CareerLevel::Entry, JobTrack::Data)["X"], 15.0);
        assert_eq!(grid.get(CareerLevel::Entry, JobTrack::Analytics)["X"], 100.0);
        assert_eq!(grid.get(CareerLevel::Senior, JobTrack::Data)["X"], 50.0);
        assert!(grid.get(CareerLevel::Mid, JobTrack::Data).is_empty());
        assert!(grid.get(CareerLevel::Senior, JobTrack::Analytics).is_empty());
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().expect("log buffer").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().expect("log buffer").clone()).expect("utf8 logs")
        }
    }

    fn compute_with_captured_logs(table: &ReviewTable, labels: &ReviewLabels) -> String {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            ScoreGrid::compute(table, labels);
        });
        logs.contents()
    }

    #[test]
    fn unmatched_label_is_warned_with_present_values() {
        let mut labels = ReviewLabels::default();
        labels.set_level(CareerLevel::Entry, "entry");
        labels.set_level(CareerLevel::Mid, "Mid");
        labels.set_level(CareerLevel::Senior, "senior");
        labels.set_track(JobTrack::Data, "A");
        labels.set_track(JobTrack::Analytics, "B");

        let logs = compute_with_captured_logs(&table(), &labels);

        assert!(logs.contains("WARN"));
        assert!(logs.contains("no rows match the Mid-levels level label"));
        assert!(logs.contains(r#"present={"entry", "senior"}"#));
        assert!(!logs.contains("Juniors level label"));
        assert!(!logs.contains("track label"));
    }

    #[test]
    fn matching_labels_log_no_warnings() {
        let table = ReviewTable::from_records(vec![
            ReviewRecord::new("entry", "A", "X", 1.0),
            ReviewRecord::new("mid", "B", "X", 2.0),
            ReviewRecord::new("senior", "A", "X", 3.0),
        ]);
        let mut labels = ReviewLabels::default();
        labels.set_level(CareerLevel::Entry, "entry");
        labels.set_level(CareerLevel::Mid, "mid");
        labels.set_level(CareerLevel::Senior, "senior");
        labels.set_track(JobTrack::Data, "A");
        labels.set_track(JobTrack::Analytics, "B");

        assert!(compute_with_captured_logs(&table, &labels).is_empty());
    }
}
