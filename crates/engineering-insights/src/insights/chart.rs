use super::aggregate::ScoreMap;
use serde::Serialize;
use thiserror::Error;

/// Rotation applied to category tick labels so long names do not overlap.
pub const TICK_ANGLE: i32 = -45;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to serialize chart '{title}': {source}")]
    Serialize {
        title: String,
        source: serde_json::Error,
    },
    #[error("chart element id '{id}' must be non-empty and use only ASCII letters, digits, '-' or '_'")]
    InvalidElementId { id: String },
}

/// One named bar series aligned to the chart's category axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSeries {
    pub name: String,
    pub values: Vec<f64>,
}

/// Two series drawn side by side for every category.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedBarChart {
    title: String,
    y_axis_title: String,
    categories: Vec<String>,
    series: [BarSeries; 2],
}

impl GroupedBarChart {
    /// Categories missing from a series map are drawn as zero-height bars.
    pub fn build(
        series_a: &ScoreMap,
        series_b: &ScoreMap,
        name_a: &str,
        name_b: &str,
        categories: &[String],
        title: &str,
        y_axis_title: &str,
    ) -> Self {
        Self {
            title: title.to_string(),
            y_axis_title: y_axis_title.to_string(),
            categories: categories.to_vec(),
            series: [
                aligned_series(name_a, series_a, categories),
                aligned_series(name_b, series_b, categories),
            ],
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn y_axis_title(&self) -> &str {
        &self.y_axis_title
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn series(&self) -> &[BarSeries; 2] {
        &self.series
    }

    /// Mount point plus a `Plotly.newPlot` call. The page must load Plotly.js itself.
    pub fn to_html_fragment(&self, element_id: &str) -> Result<String, ChartError> {
        if !is_valid_element_id(element_id) {
            return Err(ChartError::InvalidElementId {
                id: element_id.to_string(),
            });
        }

        let data = self
            .series
            .iter()
            .map(|series| BarTrace {
                kind: "bar",
                name: &series.name,
                x: &self.categories,
                y: &series.values,
            })
            .collect::<Vec<_>>();
        let layout = Layout {
            title: Title { text: &self.title },
            barmode: "group",
            xaxis: Axis {
                title: None,
                tickangle: Some(TICK_ANGLE),
            },
            yaxis: Axis {
                title: Some(Title {
                    text: &self.y_axis_title,
                }),
                tickangle: None,
            },
        };

        let data = self.to_script_json(&data)?;
        let layout = self.to_script_json(&layout)?;

        Ok(format!(
            r#"<div id="{element_id}" class="plotly-graph-div" style="height:100%; width:100%;"></div>
<script type="text/javascript">
  window.PLOTLYENV = window.PLOTLYENV || {{}};
  if (document.getElementById("{element_id}")) {{
    Plotly.newPlot("{element_id}", {data}, {layout}, {{"responsive": true}});
  }}
</script>"#
        ))
    }

    // `</` inside a script block would end it early.
    fn to_script_json<T: Serialize>(&self, value: &T) -> Result<String, ChartError> {
        serde_json::to_string(value)
            .map(|json| json.replace("</", "<\\/"))
            .map_err(|source| ChartError::Serialize {
                title: self.title.clone(),
                source,
            })
    }
}

fn aligned_series(name: &str, scores: &ScoreMap, categories: &[String]) -> BarSeries {
    BarSeries {
        name: name.to_string(),
        values: categories
            .iter()
            .map(|category| scores.get(category).copied().unwrap_or(0.0))
            .collect(),
    }
}

fn is_valid_element_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[derive(Serialize)]
struct BarTrace<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    name: &'a str,
    x: &'a [String],
    y: &'a [f64],
}

#[derive(Serialize)]
struct Layout<'a> {
    title: Title<'a>,
    barmode: &'static str,
    xaxis: Axis<'a>,
    yaxis: Axis<'a>,
}

#[derive(Serialize)]
struct Axis<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<Title<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tickangle: Option<i32>,
}

#[derive(Serialize)]
struct Title<'a> {
    text: &'a str,
}
