//! Navigation domain types.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::{TemporalLevel, TemporalPosition};
use crate::ledger::normalize_label;
use crate::navigation::error::NavigationError;

/// Depth on the category axis, ordered from root to leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryLevel {
    /// No category filter.
    All,
    /// Merchant category (transaction-level).
    Category,
    /// Line-item group.
    Group,
    /// Line-item subcategory.
    Subcategory,
}

impl CategoryLevel {
    /// Returns the string representation of the level.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Category => "category",
            Self::Group => "group",
            Self::Subcategory => "subcategory",
        }
    }

    /// Parses a level from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" => Some(Self::All),
            "category" => Some(Self::Category),
            "group" => Some(Self::Group),
            "subcategory" => Some(Self::Subcategory),
            _ => None,
        }
    }
}

impl fmt::Display for CategoryLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A position on the category axis.
///
/// Each level carries its full parent path, so a `Subcategory` always
/// names a valid `Group` and `Category`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "level", rename_all = "lowercase")]
pub enum CategoryPosition {
    /// Every category.
    #[default]
    All,
    /// One merchant category.
    Category {
        /// Merchant category.
        category: String,
    },
    /// One line-item group within a merchant category.
    Group {
        /// Merchant category.
        category: String,
        /// Line-item group.
        group: String,
    },
    /// One line-item subcategory within a group.
    Subcategory {
        /// Merchant category.
        category: String,
        /// Line-item group.
        group: String,
        /// Line-item subcategory.
        subcategory: String,
    },
}

impl CategoryPosition {
    /// Returns the level of this position.
    #[must_use]
    pub fn level(&self) -> CategoryLevel {
        match self {
            Self::All => CategoryLevel::All,
            Self::Category { .. } => CategoryLevel::Category,
            Self::Group { .. } => CategoryLevel::Group,
            Self::Subcategory { .. } => CategoryLevel::Subcategory,
        }
    }

    /// Returns the leaf name, or `None` for `All`.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Category { category } => Some(category),
            Self::Group { group, .. } => Some(group),
            Self::Subcategory { subcategory, .. } => Some(subcategory),
        }
    }

    /// Returns the position one level down, or `None` from a subcategory.
    ///
    /// The child name is normalized.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<Self> {
        let name = normalize_label(name).to_string();
        match self {
            Self::All => Some(Self::Category { category: name }),
            Self::Category { category } => Some(Self::Group {
                category: category.clone(),
                group: name,
            }),
            Self::Group { category, group } => Some(Self::Subcategory {
                category: category.clone(),
                group: group.clone(),
                subcategory: name,
            }),
            Self::Subcategory { .. } => None,
        }
    }

    /// Returns the position one level up, or `None` for `All`.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        match self {
            Self::All => None,
            Self::Category { .. } => Some(Self::All),
            Self::Group { category, .. } => Some(Self::Category {
                category: category.clone(),
            }),
            Self::Subcategory {
                category, group, ..
            } => Some(Self::Group {
                category: category.clone(),
                group: group.clone(),
            }),
        }
    }

    /// Returns the ancestor at `level`, or a clone of `self` when `level`
    /// is the current level. `None` when `level` is deeper.
    #[must_use]
    pub fn ancestor(&self, level: CategoryLevel) -> Option<Self> {
        let mut current = self.clone();
        while current.level() > level {
            current = current.parent()?;
        }
        (current.level() == level).then_some(current)
    }

    /// Returns the chain of positions from `All` down to `self`.
    #[must_use]
    pub fn lineage(&self) -> Vec<Self> {
        let mut chain = vec![self.clone()];
        let mut current = self.clone();
        while let Some(parent) = current.parent() {
            chain.push(parent.clone());
            current = parent;
        }
        chain.reverse();
        chain
    }

    /// Slash-joined path of names (`""` for `All`).
    #[must_use]
    pub fn path(&self) -> String {
        self.lineage()
            .iter()
            .filter_map(Self::name)
            .collect::<Vec<_>>()
            .join("/")
    }

    fn normalized(self) -> Self {
        let norm = |s: String| normalize_label(&s).to_string();
        match self {
            Self::All => Self::All,
            Self::Category { category } => Self::Category {
                category: norm(category),
            },
            Self::Group { category, group } => Self::Group {
                category: norm(category),
                group: norm(group),
            },
            Self::Subcategory {
                category,
                group,
                subcategory,
            } => Self::Subcategory {
                category: norm(category),
                group: norm(group),
                subcategory: norm(subcategory),
            },
        }
    }
}

/// Chart mode of the current view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartMode {
    /// Breakdown by the next category level.
    #[default]
    Aggregation,
    /// Split across the next temporal level.
    Comparison,
}

impl ChartMode {
    /// Returns the other mode.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Aggregation => Self::Comparison,
            Self::Comparison => Self::Aggregation,
        }
    }
}

/// Where the user is: one position per axis plus the chart mode.
///
/// Any combination of temporal and category level is valid. The chart mode
/// is always `Aggregation` when the temporal position is a `Day`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "NavigationStateRepr")]
pub struct NavigationState {
    temporal: TemporalPosition,
    category: CategoryPosition,
    chart_mode: ChartMode,
}

#[derive(Deserialize)]
struct NavigationStateRepr {
    temporal: TemporalPosition,
    #[serde(default)]
    category: CategoryPosition,
    #[serde(default)]
    chart_mode: ChartMode,
}

impl TryFrom<NavigationStateRepr> for NavigationState {
    type Error = NavigationError;

    fn try_from(repr: NavigationStateRepr) -> Result<Self, Self::Error> {
        Self::new(repr.temporal, repr.category, repr.chart_mode)
    }
}

impl NavigationState {
    /// Creates a state after validating the temporal position.
    ///
    /// Category names are normalized and the chart mode is coerced to
    /// `Aggregation` on a `Day`.
    pub fn new(
        temporal: TemporalPosition,
        category: CategoryPosition,
        chart_mode: ChartMode,
    ) -> Result<Self, NavigationError> {
        temporal.validate()?;
        Ok(Self::coerced(temporal, category.normalized(), chart_mode))
    }

    /// Default state for a fresh session: the year containing `today`,
    /// all categories, aggregation mode.
    #[must_use]
    pub fn initial(today: NaiveDate) -> Self {
        Self::coerced(
            TemporalPosition::Year { year: today.year() },
            CategoryPosition::All,
            ChartMode::Aggregation,
        )
    }

    /// Builds a state from already-valid parts, applying the day coercion.
    pub(crate) fn coerced(
        temporal: TemporalPosition,
        category: CategoryPosition,
        chart_mode: ChartMode,
    ) -> Self {
        let chart_mode = if temporal.level() == TemporalLevel::Day {
            ChartMode::Aggregation
        } else {
            chart_mode
        };
        Self {
            temporal,
            category,
            chart_mode,
        }
    }

    /// Current temporal position.
    #[must_use]
    pub fn temporal(&self) -> &TemporalPosition {
        &self.temporal
    }

    /// Current category position.
    #[must_use]
    pub fn category(&self) -> &CategoryPosition {
        &self.category
    }

    /// Current chart mode.
    #[must_use]
    pub fn chart_mode(&self) -> ChartMode {
        self.chart_mode
    }
}
