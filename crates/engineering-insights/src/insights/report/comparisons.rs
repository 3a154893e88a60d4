use crate::insights::domain::{CareerLevel, JobTrack};

pub const Y_AXIS_TITLE: &str = "Average Score";

/// One side of a comparison chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cohort {
    pub level: CareerLevel,
    pub track: JobTrack,
}

impl Cohort {
    const fn new(level: CareerLevel, track: JobTrack) -> Self {
        Self { level, track }
    }
}

/// A chart bound to a named template placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    pub placeholder: &'static str,
    pub left: Cohort,
    pub right: Cohort,
}

impl Comparison {
    pub fn title(&self) -> String {
        if self.left.track == self.right.track {
            format!(
                "Average Score Comparison: {} vs {} ({})",
                self.left.level.label(),
                self.right.level.label(),
                self.left.track.label()
            )
        } else {
            format!(
                "Average Score Comparison: {} ({} vs {})",
                self.left.level.label(),
                self.left.track.label(),
                self.right.track.label()
            )
        }
    }

    pub fn series_name(&self, cohort: Cohort) -> String {
        if self.left.track == self.right.track {
            cohort.level.label().to_string()
        } else {
            format!("{} {}", cohort.track.label(), cohort.level.label())
        }
    }
}

pub const COMPARISONS: [Comparison; 5] = [
    Comparison {
        placeholder: "junior_senior_chart_data",
        left: Cohort::new(CareerLevel::Entry, JobTrack::Data),
        right: Cohort::new(CareerLevel::Senior, JobTrack::Data),
    },
    Comparison {
        placeholder: "pleno_senior_chart_data",
        left: Cohort::new(CareerLevel::Mid, JobTrack::Data),
        right: Cohort::new(CareerLevel::Senior, JobTrack::Data),
    },
    Comparison {
        placeholder: "junior_senior_chart_analytics",
        left: Cohort::new(CareerLevel::Entry, JobTrack::Analytics),
        right: Cohort::new(CareerLevel::Senior, JobTrack::Analytics),
    },
    Comparison {
        placeholder: "pleno_senior_chart_analytics",
        left: Cohort::new(CareerLevel::Mid, JobTrack::Analytics),
        right: Cohort::new(CareerLevel::Senior, JobTrack::Analytics),
    },
    Comparison {
        placeholder: "senior_comparison_chart",
        left: Cohort::new(CareerLevel::Senior, JobTrack::Data),
        right: Cohort::new(CareerLevel::Senior, JobTrack::Analytics),
    },
];
