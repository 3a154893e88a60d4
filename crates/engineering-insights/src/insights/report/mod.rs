mod comparisons;
mod writer;

pub use comparisons::{Cohort, Comparison, COMPARISONS, Y_AXIS_TITLE};

use super::aggregate::ScoreGrid;
use super::chart::{ChartError, GroupedBarChart};
use super::domain::{CareerLevel, JobTrack, ReviewLabels};
use super::table::ReviewTable;
use super::template::{ReportTemplate, TemplateError};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error(transparent)]
    Chart(#[from] ChartError),
    #[error("failed to write report to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct MappingSize {
    pub level: CareerLevel,
    pub track: JobTrack,
    pub categories: usize,
}

/// What went into a rendered report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    pub rows: usize,
    pub categories: Vec<String>,
    pub mappings: Vec<MappingSize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unbound_placeholders: Vec<&'static str>,
}

#[derive(Debug, Clone)]
pub struct RenderedReport {
    pub html: String,
    pub summary: ReportSummary,
}

/// Builds the five comparison charts and binds them into a template.
#[derive(Debug, Clone, Default)]
pub struct ReportAssembler {
    labels: ReviewLabels,
}

impl ReportAssembler {
    pub fn new(labels: ReviewLabels) -> Self {
        Self { labels }
    }

    pub fn labels(&self) -> &ReviewLabels {
        &self.labels
    }

    pub fn generate<P, Q>(
        &self,
        table: &ReviewTable,
        template_path: P,
        output_path: Q,
    ) -> Result<PathBuf, ReportError>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        self.generate_with_summary(table, template_path, output_path)
            .map(|(path, _)| path)
    }

    /// Loads the template before any aggregation so a bad path fails fast.
    pub fn generate_with_summary<P, Q>(
        &self,
        table: &ReviewTable,
        template_path: P,
        output_path: Q,
    ) -> Result<(PathBuf, ReportSummary), ReportError>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let template = ReportTemplate::from_path(template_path)?;
        let rendered = self.render(table, &template)?;

        let output_path = output_path.as_ref();
        writer::write_atomically(output_path, &rendered.html)?;
        tracing::info!(
            path = %output_path.display(),
            rows = rendered.summary.rows,
            categories = rendered.summary.categories.len(),
            "report written"
        );

        Ok((output_path.to_path_buf(), rendered.summary))
    }

    pub fn render(
        &self,
        table: &ReviewTable,
        template: &ReportTemplate,
    ) -> Result<RenderedReport, ReportError> {
        let categories = table.categories();
        let grid = ScoreGrid::compute(table, &self.labels);

        let mut bindings = BTreeMap::new();
        for comparison in &COMPARISONS {
            let chart = build_chart(comparison, &grid, &categories);
            bindings.insert(
                comparison.placeholder,
                chart.to_html_fragment(comparison.placeholder)?,
            );
        }

        let present = template.placeholders();
        let unbound_placeholders: Vec<&'static str> = COMPARISONS
            .iter()
            .map(|comparison| comparison.placeholder)
            .filter(|name| !present.contains(name))
            .collect();
        if !unbound_placeholders.is_empty() {
            tracing::warn!(
                missing = ?unbound_placeholders,
                "template has no slot for some charts"
            );
        }

        let mappings = JobTrack::ordered()
            .into_iter()
            .flat_map(|track| {
                CareerLevel::ordered()
                    .into_iter()
                    .map(move |level| (level, track))
            })
            .map(|(level, track)| MappingSize {
                level,
                track,
                categories: grid.get(level, track).len(),
            })
            .collect();

        Ok(RenderedReport {
            html: template.render(&bindings),
            summary: ReportSummary {
                rows: table.len(),
                categories,
                mappings,
                unbound_placeholders,
            },
        })
    }
}

/// Renders the report with the default level and track labels.
pub fn generate_report<P, Q>(
    table: &ReviewTable,
    template_path: P,
    output_path: Q,
) -> Result<PathBuf, ReportError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    ReportAssembler::default().generate(table, template_path, output_path)
}

fn build_chart(
    comparison: &Comparison,
    grid: &ScoreGrid,
    categories: &[String],
) -> GroupedBarChart {
    let Comparison { left, right, .. } = *comparison;
    GroupedBarChart::build(
        grid.get(left.level, left.track),
        grid.get(right.level, right.track),
        &comparison.series_name(left),
        &comparison.series_name(right),
        categories,
        &comparison.title(),
        Y_AXIS_TITLE,
    )
}
