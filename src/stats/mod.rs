
use crate::rule::Rule;
use comfy_table::{presets, CellAlignment, Table};
use std::collections::{BTreeSet, HashMap};

const HEADERS: [&str; 3] = ["Matching bid(s)", "Count", "Percentage"];

/// Tally of which sets of opening bids dealt hands qualify for
#[derive(Debug, Clone, Default)]
pub struct BidStats {
    counter: HashMap<BTreeSet<String>, usize>,
    deals: usize,
}

impl BidStats {
    /// Create an empty tally
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the rules one hand matched
    ///
    /// Rules are keyed by their [`Display`](core::fmt::Display) text, so the order
    /// of `matches` is irrelevant.
    pub fn record<'a>(&mut self, matches: impl IntoIterator<Item = &'a Rule>) {
        let key = matches.into_iter().map(ToString::to_string).collect();
        *self.counter.entry(key).or_default() += 1;
        self.deals += 1;
    }

    /// Number of recorded hands
    #[must_use]
    pub const fn deals(&self) -> usize {
        self.deals
    }

    /// Number of recorded hands matching exactly these bids
    #[must_use]
    pub fn count<'a>(&self, bids: impl IntoIterator<Item = &'a str>) -> usize {
        let key: BTreeSet<String> = bids.into_iter().map(str::to_owned).collect();
        self.counter.get(&key).copied().unwrap_or(0)
    }

    /// Rows of `(label, count)`, most frequent first
    ///
    /// Ties are broken by label in descending order.
    fn rows(&self) -> Vec<(String, usize)> {
        let mut rows: Vec<_> = self
            .counter
            .iter()
            .map(|(bids, &count)| {
                let label = if bids.is_empty() {
                    String::from("no bid matches")
                } else {
                    bids.iter()
                        .map(String::as_str)
                        .collect::<Vec<_>>()
                        .join(" or ")
                };
                (label, count)
            })
            .collect();

        rows.sort_unstable_by(|(a, m), (b, n)| n.cmp(m).then_with(|| b.cmp(a)));
        rows
    }

    /// Render the distribution as a bordered text table
    ///
    /// Bids are left-aligned, counts and percentages right-aligned.
    #[must_use]
    pub fn table(&self) -> Table {
        let total = self.deals.max(1);
        let mut table = Table::new();
        table
            .load_preset(presets::ASCII_FULL_CONDENSED)
            .set_header(HEADERS);

        for (label, count) in self.rows() {
            #[allow(clippy::cast_precision_loss)]
            let percentage = 100.0 * count as f64 / total as f64;
            table.add_row([label, count.to_string(), format!("{percentage:.2}")]);
        }

        let alignments = [
            CellAlignment::Left,
            CellAlignment::Right,
            CellAlignment::Right,
        ];
        for (index, alignment) in alignments.into_iter().enumerate() {
            if let Some(column) = table.column_mut(index) {
                column.set_cell_alignment(alignment);
            }
        }
        table
    }
}
