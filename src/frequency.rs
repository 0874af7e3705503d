use derivative::Derivative;
use std::collections::HashMap;
use std::hash::Hash;

/// Occurrence counts for every distinct symbol of an input.
///
/// Iteration follows the order in which symbols first appeared, which the
/// tree builder relies on for its tie-break.
#[derive(Debug, Clone, Derivative)]
#[derivative(Default(bound = ""))]
pub struct FrequencyTable<Symbol> {
    slots: HashMap<Symbol, usize>,
    entries: Vec<(Symbol, usize)>,
    total: usize,
}

impl<Symbol> FrequencyTable<Symbol>
where
    Symbol: Hash + Eq + Clone,
{
    pub fn from_symbols(symbols: impl IntoIterator<Item = Symbol>) -> Self {
        symbols.into_iter().collect()
    }

    fn add(&mut self, symbol: Symbol) {
        match self.slots.get(&symbol) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.slots.insert(symbol.clone(), self.entries.len());
                self.entries.push((symbol, 1));
            }
        }
        self.total += 1;
    }

    pub fn get(&self, symbol: &Symbol) -> usize {
        self.slots
            .get(symbol)
            .map_or(0, |&slot| self.entries[slot].1)
    }
}

impl<Symbol> FrequencyTable<Symbol> {
    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of symbols counted, repeats included.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, usize)> + '_ {
        self.entries.iter().map(|(s, count)| (s, *count))
    }

    /// Shannon entropy of the distribution in bits per symbol.
    pub fn entropy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }

        let total = self.total as f64;
        self.entries
            .iter()
            .map(|(_, count)| {
                let p = *count as f64 / total;
                -p * p.log2()
            })
            .sum()
    }
}

impl<Symbol> FromIterator<Symbol> for FrequencyTable<Symbol>
where
    Symbol: Hash + Eq + Clone,
{
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        let mut table = Self::default();
        for s in iter {
            table.add(s);
        }
        table
    }
}
