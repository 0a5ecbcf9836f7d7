//! County filtering and incremental "load more" disclosure.
//!
//! The page keeps the selected county and the number of revealed contact
//! points as explicit state. [`Disclosure`] is that state as a value: every
//! transition returns a new `Disclosure`, and [`Disclosure::view`] computes
//! what is visible for a given directory.

use crate::model::{ContactPoint, County, Directory};

/// Contact points revealed per "load more".
pub const ITEMS_PER_LOAD: usize = 5;

/// Which county the list is filtered to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CountyFilter {
    /// Nothing selected; the list shows no contact points.
    #[default]
    All,
    County(String),
}

/// Selected county plus how many batches of it are revealed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disclosure {
    filter: CountyFilter,
    items_per_load: usize,
    loads: usize,
}

/// The visible slice of the directory for a [`Disclosure`].
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    /// The selected county, if it exists.
    pub county: Option<&'a County>,
    pub points: &'a [ContactPoint],
    /// Contact points of the county still hidden.
    pub remaining: usize,
}

impl View<'_> {
    /// Whether a "load more" would reveal anything.
    pub fn has_more(&self) -> bool {
        self.remaining > 0
    }
}

impl Default for Disclosure {
    fn default() -> Self {
        Disclosure::new(ITEMS_PER_LOAD)
    }
}

impl Disclosure {
    /// A disclosure with nothing selected. `items_per_load` is at least 1.
    pub fn new(items_per_load: usize) -> Self {
        Disclosure {
            filter: CountyFilter::All,
            items_per_load: items_per_load.max(1),
            loads: 1,
        }
    }

    pub fn filter(&self) -> &CountyFilter {
        &self.filter
    }

    pub fn items_per_load(&self) -> usize {
        self.items_per_load
    }

    /// Select a filter. Disclosure starts over at one batch.
    pub fn select(self, filter: CountyFilter) -> Self {
        Disclosure {
            filter,
            loads: 1,
            ..self
        }
    }

    /// Select `key`, or clear the selection if `key` is already selected.
    pub fn toggle(self, key: &str) -> Self {
        let selected = matches!(&self.filter, CountyFilter::County(current) if current == key);
        if selected {
            self.select(CountyFilter::All)
        } else {
            self.select(CountyFilter::County(key.to_string()))
        }
    }

    /// Reveal one more batch of the selected county.
    pub fn load_more(self) -> Self {
        if self.filter == CountyFilter::All {
            return self;
        }
        Disclosure {
            loads: self.loads.saturating_add(1),
            ..self
        }
    }

    /// Reveal `batches` batches in total (at least one).
    pub fn with_loads(self, batches: usize) -> Self {
        Disclosure {
            loads: batches.max(1),
            ..self
        }
    }

    /// Select the directory's first county when nothing is selected, the
    /// way the page does on narrow screens where there is no map to click.
    pub fn or_first_county(self, directory: &Directory) -> Self {
        if self.filter != CountyFilter::All {
            return self;
        }
        match directory.counties().first() {
            Some(first) => self.select(CountyFilter::County(first.key.clone())),
            None => self,
        }
    }

    /// What is visible in `directory` under this disclosure.
    pub fn view<'a>(&self, directory: &'a Directory) -> View<'a> {
        let empty = View {
            county: None,
            points: &[],
            remaining: 0,
        };

        let CountyFilter::County(key) = &self.filter else {
            return empty;
        };
        let Some(county) = directory.county(key) else {
            log::warn!("no county '{}' in directory", key);
            return empty;
        };

        let total = county.contact_points.len();
        let shown = self.items_per_load.saturating_mul(self.loads).min(total);
        View {
            county: Some(county),
            points: &county.contact_points[..shown],
            remaining: total - shown,
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
