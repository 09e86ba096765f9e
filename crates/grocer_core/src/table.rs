use std::collections::BTreeMap;

/// Occurrence counts per item, ordered by item name.
///
/// Every stored count is at least 1; items never recorded read as 0.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrequencyTable {
    counts: BTreeMap<String, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally every whitespace-delimited token in `text`.
    pub fn from_text(text: &str) -> Self {
        let mut table = Self::new();
        for token in text.split_whitespace() {
            table.record(token);
        }
        table
    }

    pub fn record(&mut self, item: &str) {
        if let Some(count) = self.counts.get_mut(item) {
            *count += 1;
        } else {
            self.counts.insert(item.to_owned(), 1);
        }
    }

    pub fn frequency(&self, item: &str) -> u64 {
        self.counts.get(item).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the number of tokens that were recorded.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn list_all(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.counts
            .iter()
            .map(|(item, count)| (item.as_str(), *count))
    }

    /// Width of the longest item name, 0 when empty.
    ///
    /// Counted in characters, not UTF-8 bytes, so bars stay aligned when a
    /// name contains multi-byte characters. For ASCII names the two agree.
    pub fn longest_item_width(&self) -> usize {
        self.counts
            .keys()
            .map(|item| item.chars().count())
            .max()
            .unwrap_or(0)
    }

    /// One bar per item: the name padded to the longest name, a space, then
    /// one `*` per occurrence.
    pub fn histogram(&self) -> impl Iterator<Item = String> + '_ {
        let width = self.longest_item_width();
        self.list_all().map(move |(item, count)| {
            let bar = "*".repeat(usize::try_from(count).unwrap_or(usize::MAX));
            format!("{item:<width$} {bar}")
        })
    }
}
