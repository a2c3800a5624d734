//! Shared proptest strategies for navigation states and transaction sets.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use spendscope_shared::types::{Amount, TransactionId};

use crate::calendar::{TemporalLevel, TemporalPosition};
use crate::ledger::{LineItem, Transaction, TransactionSet, normalize_label};
use crate::navigation::{
    CategoryLevel, CategoryPosition, ChartMode, NavigationCommand, NavigationState,
};

pub(crate) const CATEGORIES: [&str; 4] = ["Food", "Transport", "Home", ""];
pub(crate) const GROUPS: [&str; 4] = ["Produce", "Dairy", "General", ""];
pub(crate) const SUBCATEGORIES: [&str; 4] = ["Fruit", "Milk", "General", " "];
const ITEM_NAMES: [&str; 4] = ["Apples", "Milk", "Bread", ""];
const SPAN_DAYS: i64 = 3 * 365;

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
}

pub(crate) fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (0..SPAN_DAYS).prop_map(|offset| epoch() + Duration::days(offset))
}

pub(crate) fn arb_temporal_level() -> impl Strategy<Value = TemporalLevel> {
    prop::sample::select(TemporalLevel::ALL.to_vec())
}

pub(crate) fn arb_temporal() -> impl Strategy<Value = TemporalPosition> {
    (arb_date(), arb_temporal_level())
        .prop_map(|(date, level)| TemporalPosition::containing(date, level))
}

pub(crate) fn arb_category_level() -> impl Strategy<Value = CategoryLevel> {
    prop_oneof![
        Just(CategoryLevel::All),
        Just(CategoryLevel::Category),
        Just(CategoryLevel::Group),
        Just(CategoryLevel::Subcategory),
    ]
}

pub(crate) fn arb_category() -> impl Strategy<Value = CategoryPosition> {
    let label = |names: [&'static str; 4]| {
        prop::sample::select(names.to_vec()).prop_map(|s| normalize_label(s).to_string())
    };
    prop_oneof![
        Just(CategoryPosition::All),
        label(CATEGORIES).prop_map(|category| CategoryPosition::Category { category }),
        (label(CATEGORIES), label(GROUPS))
            .prop_map(|(category, group)| CategoryPosition::Group { category, group }),
        (label(CATEGORIES), label(GROUPS), label(SUBCATEGORIES)).prop_map(
            |(category, group, subcategory)| CategoryPosition::Subcategory {
                category,
                group,
                subcategory,
            }
        ),
    ]
}

pub(crate) fn arb_mode() -> impl Strategy<Value = ChartMode> {
    prop_oneof![Just(ChartMode::Aggregation), Just(ChartMode::Comparison)]
}

pub(crate) fn arb_state() -> impl Strategy<Value = NavigationState> {
    (arb_temporal(), arb_category(), arb_mode()).prop_map(|(temporal, category, mode)| {
        NavigationState::new(temporal, category, mode).unwrap()
    })
}

pub(crate) fn arb_command() -> impl Strategy<Value = NavigationCommand> {
    prop_oneof![
        (0u32..33).prop_map(NavigationCommand::DrillTemporal),
        arb_temporal_level().prop_map(NavigationCommand::UpTemporal),
        prop::sample::select(CATEGORIES.to_vec())
            .prop_map(|name| NavigationCommand::DrillCategory(name.to_string())),
        arb_category_level().prop_map(NavigationCommand::UpCategory),
        Just(NavigationCommand::ClearCategory),
        Just(NavigationCommand::ToggleChartMode),
    ]
}

fn arb_item() -> impl Strategy<Value = LineItem> {
    (0usize..4, 0u64..200, 0usize..4, 0usize..4).prop_map(|(name, price, group, sub)| LineItem {
        name: ITEM_NAMES[name].to_string(),
        price: Amount::new(price),
        group: GROUPS[group].to_string(),
        subcategory: SUBCATEGORIES[sub].to_string(),
    })
}

fn arb_transaction() -> impl Strategy<Value = (NaiveDate, usize, u64, Vec<LineItem>)> {
    (
        arb_date(),
        0usize..CATEGORIES.len(),
        0u64..500,
        prop::collection::vec(arb_item(), 0..4),
    )
}

pub(crate) fn arb_transaction_set() -> impl Strategy<Value = TransactionSet> {
    prop::collection::vec(arb_transaction(), 0..40).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(index, (date, category, total, items))| Transaction {
                id: TransactionId::new(format!("t{index}")),
                date,
                merchant: if index % 3 == 0 { String::new() } else { format!("Shop {index}") },
                merchant_category: CATEGORIES[category].to_string(),
                total: Amount::new(total),
                items,
            })
            .collect()
    })
}
