use std::collections::BTreeSet;

use crate::domain::TowerStatus;
use crate::towers::record::TowerRecord;

/// Operator and status checkboxes of the layer panel. An empty set in either
/// category means no restriction on that category. Values within a category
/// are alternatives, so checking a second operator can show more towers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    operators: BTreeSet<String>,
    statuses: BTreeSet<TowerStatus>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_operators<I, S>(mut self, operators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.operators.extend(operators.into_iter().map(Into::into));
        self
    }

    pub fn with_statuses(mut self, statuses: impl IntoIterator<Item = TowerStatus>) -> Self {
        self.statuses.extend(statuses);
        self
    }

    /// Flips an operator checkbox and returns whether it is now checked.
    pub fn toggle_operator(&mut self, operator: &str) -> bool {
        if self.operators.remove(operator) {
            false
        } else {
            self.operators.insert(operator.to_string());
            true
        }
    }

    pub fn toggle_status(&mut self, status: TowerStatus) -> bool {
        if self.statuses.remove(&status) {
            false
        } else {
            self.statuses.insert(status);
            true
        }
    }

    pub fn has_operator(&self, operator: &str) -> bool {
        self.operators.contains(operator)
    }

    pub fn has_status(&self, status: TowerStatus) -> bool {
        self.statuses.contains(&status)
    }

    pub fn operators(&self) -> impl Iterator<Item = &str> {
        self.operators.iter().map(String::as_str)
    }

    pub fn statuses(&self) -> impl Iterator<Item = TowerStatus> + '_ {
        self.statuses.iter().copied()
    }

    pub fn is_unrestricted(&self) -> bool {
        self.operators.is_empty() && self.statuses.is_empty()
    }

    pub fn matches(&self, tower: &TowerRecord) -> bool {
        (self.operators.is_empty() || self.operators.contains(&tower.operator))
            && (self.statuses.is_empty() || self.statuses.contains(&tower.status))
    }
}

/// Towers passing the selection, in their original order.
pub fn visible_towers<'a>(all: &'a [TowerRecord], selection: &FilterSelection) -> Vec<&'a TowerRecord> {
    all.iter().filter(|tower| selection.matches(tower)).collect()
}
