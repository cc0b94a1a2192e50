//! Change detection between two runs
//!
//! Listings are matched across runs by registration number. Listings without
//! one cannot be matched and are left out of the comparison.

use crate::extract::ListingRecord;
use std::collections::HashMap;

/// Differences between the previous and the current run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeReport {
    /// Listed now, absent before
    pub new: Vec<ListingRecord>,

    /// Listed in both runs with a different price
    pub price: Vec<ListingRecord>,

    /// Listed before, gone now (previous record)
    pub removed: Vec<ListingRecord>,

    /// Same price, but the listing was updated since the previous run
    pub updated: Vec<ListingRecord>,
}

impl ChangeReport {
    /// Returns true if no category holds a listing
    pub fn is_empty(&self) -> bool {
        self.new.is_empty()
            && self.price.is_empty()
            && self.removed.is_empty()
            && self.updated.is_empty()
    }

    /// Total number of reported listings
    pub fn len(&self) -> usize {
        self.new.len() + self.price.len() + self.removed.len() + self.updated.len()
    }
}

/// Listings keyed by registration, in first-seen order
struct RegIndex<'a> {
    order: Vec<&'a str>,
    by_reg: HashMap<&'a str, &'a ListingRecord>,
}

impl<'a> RegIndex<'a> {
    /// Indexes `records` by `reg`; a repeated registration keeps its last record
    fn build(records: &'a [ListingRecord]) -> Self {
        let mut order = Vec::new();
        let mut by_reg = HashMap::new();

        for record in records {
            let Some(reg) = record.reg.as_deref() else {
                tracing::debug!("Skipping listing without registration: {}", record.link);
                continue;
            };
            if by_reg.insert(reg, record).is_none() {
                order.push(reg);
            }
        }

        Self { order, by_reg }
    }

    fn get(&self, reg: &str) -> Option<&'a ListingRecord> {
        self.by_reg.get(reg).copied()
    }

    fn records(&self) -> impl Iterator<Item = (&'a str, &'a ListingRecord)> + '_ {
        self.order.iter().map(|reg| (*reg, self.by_reg[reg]))
    }
}

/// Compares the current run against the previous one
///
/// # Rules
///
/// | category | condition |
/// |----------|-----------|
/// | new | registration only in `current` |
/// | removed | registration only in `previous` |
/// | price | in both, price differs |
/// | updated | in both, same price, non-empty `updatedAt` that differs |
///
/// # Returns
///
/// `None` when nothing changed, otherwise the report.
pub fn diff(current: &[ListingRecord], previous: &[ListingRecord]) -> Option<ChangeReport> {
    let current = RegIndex::build(current);
    let previous = RegIndex::build(previous);
    let mut report = ChangeReport::default();

    for (reg, now) in current.records() {
        match previous.get(reg) {
            Some(before) if now.price != before.price => report.price.push(now.clone()),
            Some(before) if !now.updated_at.is_empty() && now.updated_at != before.updated_at => {
                report.updated.push(now.clone())
            }
            Some(_) => {}
            None => report.new.push(now.clone()),
        }
    }

    for (reg, before) in previous.records() {
        if current.get(reg).is_none() {
            report.removed.push(before.clone());
        }
    }

    tracing::debug!(
        "Change report: {} new, {} price, {} removed, {} updated",
        report.new.len(),
        report.price.len(),
        report.removed.len(),
        report.updated.len()
    );

    if report.is_empty() {
        None
    } else {
        Some(report)
    }
}
