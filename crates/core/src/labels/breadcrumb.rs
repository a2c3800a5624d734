//! Breadcrumb trails for both navigation axes.

use serde::Serialize;

use super::format::format_period_label;
use super::locale::Locale;
use crate::navigation::{CategoryPosition, NavigationState};

/// One tappable breadcrumb segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Crumb {
    /// Display label.
    pub label: String,
    /// True for the segment naming the current position.
    pub is_current: bool,
    /// State reached by tapping the segment. The other axis is preserved.
    pub navigate_to: NavigationState,
}

/// Breadcrumb trails for the temporal and category axes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumbs {
    /// Year down to the current period.
    pub temporal: Vec<Crumb>,
    /// `All` root down to the current category.
    pub category: Vec<Crumb>,
}

impl Breadcrumbs {
    /// Returns the temporal trail joined with `sep`.
    #[must_use]
    pub fn temporal_trail(&self, sep: &str) -> String {
        join(&self.temporal, sep)
    }

    /// Returns the category trail joined with `sep`.
    #[must_use]
    pub fn category_trail(&self, sep: &str) -> String {
        join(&self.category, sep)
    }
}

fn join(crumbs: &[Crumb], sep: &str) -> String {
    crumbs
        .iter()
        .map(|crumb| crumb.label.as_str())
        .collect::<Vec<_>>()
        .join(sep)
}

/// Builds both breadcrumb trails for `state`.
///
/// Segments are produced for every ancestor whether or not it has any
/// spending; labels depend only on the position.
#[must_use]
pub fn breadcrumbs(state: &NavigationState, locale: Locale) -> Breadcrumbs {
    let temporal = state
        .temporal()
        .lineage()
        .into_iter()
        .filter_map(|position| {
            let is_current = position == *state.temporal();
            let navigate_to = if is_current {
                state.clone()
            } else {
                state.jump_to_temporal_ancestor(position.level()).ok()?
            };
            Some(Crumb {
                label: format_period_label(&position, locale),
                is_current,
                navigate_to,
            })
        })
        .collect();

    let category = state
        .category()
        .lineage()
        .into_iter()
        .filter_map(|position| {
            let is_current = position == *state.category();
            let navigate_to = if is_current {
                state.clone()
            } else {
                state.jump_to_category_ancestor(position.level()).ok()?
            };
            Some(Crumb {
                label: format_category_label(&position, locale),
                is_current,
                navigate_to,
            })
        })
        .collect();

    Breadcrumbs { temporal, category }
}

/// Label of a category position: its leaf name, or the localized root label.
#[must_use]
pub fn format_category_label(position: &CategoryPosition, locale: Locale) -> String {
    position
        .name()
        .map_or_else(|| locale.all_label().to_string(), str::to_string)
}
