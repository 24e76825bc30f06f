//! Observation Records
//! One sample row per record, kept in input order.

/// A single sample correlating instructions executed with the two
/// address-tracking counters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    /// Instructions executed so far
    pub executed: f64,
    /// Addresses seen holding a memory address value
    pub addr_mem: f64,
    /// All addresses seen
    pub addr_any: f64,
}

/// Ordered, read-only table of observations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObservationTable {
    rows: Vec<Observation>,
}

impl ObservationTable {
    pub fn new(rows: Vec<Observation>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Observation] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `executed` column in row order.
    pub fn executed(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.executed).collect()
    }

    pub fn addr_mem(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.addr_mem).collect()
    }

    pub fn addr_any(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.addr_any).collect()
    }

    /// Min and max of the `executed` column, `None` for an empty table.
    pub fn executed_range(&self) -> Option<(f64, f64)> {
        min_max(self.rows.iter().map(|r| r.executed))
    }

    /// True if `executed` never decreases from one row to the next.
    pub fn is_executed_monotonic(&self) -> bool {
        self.rows()
            .windows(2)
            .all(|w| w[0].executed <= w[1].executed)
    }
}

/// Min and max over an iterator of values, ignoring NaN.
pub fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}
