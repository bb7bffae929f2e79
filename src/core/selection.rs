//! Country selection and row filtering.
//!
//! [`Selection`] is the state behind the sidebar multi-select. Filtering
//! produces a [`FilteredView`]: indices into the table, in table order,
//! which every visualization consumes.

use crate::core::country_record::CountryRecord;
use crate::core::table::PopulationTable;

/// The countries the user has chosen, in the order they were picked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    countries: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from names, as the multi-select hands them over.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selection = Self::new();
        for name in names {
            selection.insert(name);
        }
        selection
    }

    /// Add a country. Returns `false` if it was already selected.
    pub fn insert(&mut self, country: impl Into<String>) -> bool {
        let country = country.into();
        if self.contains(&country) {
            return false;
        }
        self.countries.push(country);
        true
    }

    /// Remove a country. Returns `true` if it was selected.
    pub fn remove(&mut self, country: &str) -> bool {
        let before = self.countries.len();
        self.countries.retain(|c| c != country);
        before != self.countries.len()
    }

    /// Flip a country's membership. Returns the new membership.
    pub fn toggle(&mut self, country: &str) -> bool {
        if self.remove(country) {
            false
        } else {
            self.countries.push(country.to_owned());
            true
        }
    }

    pub fn clear(&mut self) {
        self.countries.clear();
    }

    pub fn contains(&self, country: &str) -> bool {
        self.countries.iter().any(|c| c == country)
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.countries.iter().map(String::as_str)
    }

    /// Drop names the table no longer contains (after loading a different
    /// file). Returns how many were dropped.
    pub fn retain_known(&mut self, table: &PopulationTable) -> usize {
        let before = self.countries.len();
        self.countries.retain(|c| table.find(c).is_some());
        before - self.countries.len()
    }

    /// Rows whose country is selected, in table order.
    pub fn filter(&self, table: &PopulationTable) -> FilteredView {
        if self.is_empty() {
            return FilteredView::default();
        }
        let indices = table
            .rows()
            .iter()
            .enumerate()
            .filter(|(_, row)| self.contains(&row.country))
            .map(|(i, _)| i)
            .collect();
        FilteredView { indices }
    }
}

/// The subset of table rows matching a [`Selection`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredView {
    indices: Vec<usize>,
}

impl FilteredView {
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Resolve the indices against the table they were computed from.
    pub fn rows<'a>(
        &'a self,
        table: &'a PopulationTable,
    ) -> impl Iterator<Item = &'a CountryRecord> + 'a {
        self.indices.iter().filter_map(move |&i| table.get(i))
    }

    /// Cloned rows, for handing to an export thread.
    pub fn to_records(&self, table: &PopulationTable) -> Vec<CountryRecord> {
        self.rows(table).cloned().collect()
    }
}
