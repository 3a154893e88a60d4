mod aggregate;
mod chart;
mod domain;
pub mod report;
mod table;
mod template;

pub use aggregate::{mean_by_category, ScoreGrid, ScoreMap};
pub use chart::{BarSeries, ChartError, GroupedBarChart, TICK_ANGLE};
pub use domain::{CareerLevel, ColumnMapping, JobTrack, ReviewLabels};
pub use report::{generate_report, RenderedReport, ReportAssembler, ReportError, ReportSummary};
pub use table::{ReviewRecord, ReviewTable, TableError};
pub use template::{ReportTemplate, TemplateError};
