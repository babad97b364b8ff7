use serde::{Deserialize, Serialize};

/// Which of the two compared subjects a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::First, Side::Second];

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}

/// Display/column names of the two compared subjects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subjects {
    pub first: String,
    pub second: String,
}

impl Default for Subjects {
    fn default() -> Self {
        Self::new("Messi", "Ronaldo")
    }
}

impl Subjects {
    #[must_use]
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    #[must_use]
    pub fn name(&self, side: Side) -> &str {
        match side {
            Side::First => &self.first,
            Side::Second => &self.second,
        }
    }

    #[must_use]
    pub fn names(&self) -> [&str; 2] {
        [&self.first, &self.second]
    }
}

/// One row of the "factors by player" table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatRecord {
    pub factor: String,
    pub values: [Option<f64>; 2],
}

impl StatRecord {
    #[must_use]
    pub fn new(factor: impl Into<String>, first: Option<f64>, second: Option<f64>) -> Self {
        Self {
            factor: factor.into(),
            values: [first, second],
        }
    }

    #[must_use]
    pub fn value(&self, side: Side) -> Option<f64> {
        self.values[side.index()]
    }

    #[must_use]
    pub fn has_any_value(&self) -> bool {
        self.values.iter().any(Option::is_some)
    }

    /// Larger of the present values.
    #[must_use]
    pub fn max_value(&self) -> Option<f64> {
        self.values.iter().flatten().copied().reduce(f64::max)
    }
}

/// Season statistic shown on the scatter chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    Assists,
    Goals,
}

impl Metric {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Assists => "Assists",
            Self::Goals => "Goals",
        }
    }

    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Assists => Self::Goals,
            Self::Goals => Self::Assists,
        }
    }
}

/// One season row of the yearly statistics table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyRecord {
    pub year: i32,
    pub assists: [f64; 2],
    pub goals: [f64; 2],
}

impl YearlyRecord {
    #[must_use]
    pub fn new(year: i32, assists: [f64; 2], goals: [f64; 2]) -> Self {
        Self {
            year,
            assists,
            goals,
        }
    }

    #[must_use]
    pub fn value(&self, side: Side, metric: Metric) -> f64 {
        match metric {
            Metric::Assists => self.assists[side.index()],
            Metric::Goals => self.goals[side.index()],
        }
    }

    pub fn all_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.assists.iter().chain(self.goals.iter()).copied()
    }
}
