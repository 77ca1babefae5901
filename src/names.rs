//! Traditional full moon names, one per calendar month.

use std::collections::HashMap;

use chrono::Datelike;
use lazy_static::lazy_static;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FullMoonName {
    pub name: &'static str,
    pub description: &'static str,
}

lazy_static! {
    /// Month number (1..=12) to its traditional full moon name.
    pub static ref FULL_MOON_NAMES: HashMap<u32, FullMoonName> = {
        let entries = [
            (1, "Wolf Moon", "Named after howling wolves in winter"),
            (2, "Snow Moon", "Named for heavy snowfall"),
            (3, "Worm Moon", "When earthworms emerge as soil thaws"),
            (4, "Pink Moon", "Named after early spring flowers"),
            (5, "Flower Moon", "When flowers bloom abundantly"),
            (6, "Strawberry Moon", "When strawberries are harvested"),
            (7, "Buck Moon", "When male deer grow new antlers"),
            (8, "Sturgeon Moon", "When sturgeon fish are caught"),
            (9, "Harvest Moon", "The full moon nearest autumn equinox"),
            (10, "Hunter's Moon", "When hunters prepare for winter"),
            (11, "Beaver Moon", "When beavers build winter dams"),
            (12, "Cold Moon", "The long nights of winter"),
        ];
        entries
            .into_iter()
            .map(|(month, name, description)| (month, FullMoonName { name, description }))
            .collect()
    };
}

/// Full moon name for a month number; `None` outside 1..=12.
pub fn full_moon_name_for_month(month: u32) -> Option<FullMoonName> {
    FULL_MOON_NAMES.get(&month).copied()
}

/// Full moon name for the month `date` falls in.
///
/// The table covers every month, so callers only see `None` if handed a
/// `Datelike` with an out-of-range month.
pub fn get_full_moon_name<D: Datelike>(date: &D) -> Option<FullMoonName> {
    full_moon_name_for_month(date.month())
}
