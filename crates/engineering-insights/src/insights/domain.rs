use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CareerLevel {
    Entry,
    Mid,
    Senior,
}

impl CareerLevel {
    pub const fn ordered() -> [Self; 3] {
        [Self::Entry, Self::Mid, Self::Senior]
    }

    /// Plural form used in chart titles and legends.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Entry => "Juniors",
            Self::Mid => "Mid-levels",
            Self::Senior => "Seniors",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JobTrack {
    Data,
    Analytics,
}

impl JobTrack {
    pub const fn ordered() -> [Self; 2] {
        [Self::Data, Self::Analytics]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Data => "Data Engineers",
            Self::Analytics => "Analytics Engineers",
        }
    }
}

/// Header names of the columns the report reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    pub level: String,
    pub track: String,
    pub category: String,
    pub score: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            level: "NIVEL".to_string(),
            track: "CARGO".to_string(),
            category: "CATEGORIA".to_string(),
            score: "PONTUACAO".to_string(),
        }
    }
}

/// Values that identify each level and track inside the input data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewLabels {
    entry: String,
    mid: String,
    senior: String,
    data: String,
    analytics: String,
}

impl ReviewLabels {
    pub fn level(&self, level: CareerLevel) -> &str {
        match level {
            CareerLevel::Entry => &self.entry,
            CareerLevel::Mid => &self.mid,
            CareerLevel::Senior => &self.senior,
        }
    }

    pub fn track(&self, track: JobTrack) -> &str {
        match track {
            JobTrack::Data => &self.data,
            JobTrack::Analytics => &self.analytics,
        }
    }

    pub fn set_level(&mut self, level: CareerLevel, value: impl Into<String>) {
        let slot = match level {
            CareerLevel::Entry => &mut self.entry,
            CareerLevel::Mid => &mut self.mid,
            CareerLevel::Senior => &mut self.senior,
        };
        *slot = value.into();
    }

    pub fn set_track(&mut self, track: JobTrack, value: impl Into<String>) {
        let slot = match track {
            JobTrack::Data => &mut self.data,
            JobTrack::Analytics => &mut self.analytics,
        };
        *slot = value.into();
    }
}

impl Default for ReviewLabels {
    fn default() -> Self {
        Self {
            entry: "Junior".to_string(),
            mid: "Pleno".to_string(),
            senior: "Sênior".to_string(),
            data: "ENGENHARIA DE DADOS".to_string(),
            analytics: "ENGENHARIA DE ANALYTICS".to_string(),
        }
    }
}
