//! Filter → materialize → sort → emit.
//!
//! Filtering is evaluated per record and may fan out across the rayon pool
//! for large catalogs. Sorting needs the complete match set, so nothing is
//! emitted until [`QueryPipeline::plan`] returns. The resulting
//! [`Emission`] walks a pre-sorted index list and counts what it yields.

use std::time::Instant;

use rayon::prelude::*;
use thumbinator_model::{ImageRecord, SearchSummary};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::filtering::QueryMatcher;
use super::sorting::sort_indices;
use super::types::ImageQuery;
use crate::catalog::Catalog;
use crate::error::{CatalogError, Result};

/// Catalogs smaller than this are filtered on the calling thread.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 2_048;

#[derive(Debug, Clone, Copy)]
pub struct QueryPipeline<'a> {
    catalog: &'a Catalog,
    parallel_threshold: usize,
}

impl<'a> QueryPipeline<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Filter and sort, returning the final emission order.
    ///
    /// `cancel` is checked for every record; once it fires no further
    /// predicates run and `CatalogError::Cancelled` is returned.
    pub fn plan(
        &self,
        query: &ImageQuery,
        cancel: &CancellationToken,
    ) -> Result<MatchSet> {
        let started = Instant::now();
        let records = self.catalog.all();
        let matcher = QueryMatcher::new(query);

        let keep = |record: &ImageRecord| {
            !cancel.is_cancelled() && matcher.matches(record)
        };

        let mut order: Vec<usize> = if records.len() >= self.parallel_threshold
        {
            // Rayon's Vec collect keeps catalog order, which the stable
            // sort below relies on for ties.
            records
                .par_iter()
                .enumerate()
                .filter(|(_, record)| keep(*record))
                .map(|(index, _)| index)
                .collect()
        } else {
            records
                .iter()
                .enumerate()
                .filter(|(_, record)| keep(*record))
                .map(|(index, _)| index)
                .collect()
        };

        if cancel.is_cancelled() {
            return Err(CatalogError::Cancelled);
        }

        sort_indices(&mut order, records, query.sort);

        debug!(
            matched = order.len(),
            total = records.len(),
            sort = %query.sort,
            elapsed_us = started.elapsed().as_micros() as u64,
            "search planned"
        );

        Ok(MatchSet { order })
    }

    /// Plan without cancellation and start emitting.
    pub fn execute(&self, query: &ImageQuery) -> Emission<'a> {
        let never = CancellationToken::new();
        match self.plan(query, &never) {
            Ok(matches) => matches.emit(self.catalog),
            // A token nobody else holds cannot fire.
            Err(_) => MatchSet::default().emit(self.catalog),
        }
    }
}

/// Sorted catalog indices for one query.
///
/// Owns no catalog borrow, so it can be produced on a blocking worker and
/// handed back to an async task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSet {
    order: Vec<usize>,
}

impl MatchSet {
    /// Number of records that will be emitted.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Catalog positions in emission order.
    pub fn indices(&self) -> &[usize] {
        &self.order
    }

    /// `catalog` must be the catalog this set was planned against.
    pub fn emit(self, catalog: &Catalog) -> Emission<'_> {
        Emission {
            catalog,
            order: self.order.into_iter(),
            matched: 0,
            dropped: 0,
        }
    }
}

/// Single-pass, non-restartable sequence of matched records.
#[derive(Debug)]
pub struct Emission<'a> {
    catalog: &'a Catalog,
    order: std::vec::IntoIter<usize>,
    matched: u64,
    /// Indices discarded after a lookup miss.
    dropped: usize,
}

impl<'a> Emission<'a> {
    /// Records yielded so far.
    pub fn matched(&self) -> u64 {
        self.matched
    }

    pub fn remaining(&self) -> usize {
        self.order.len()
    }

    /// Summary for a fully drained emission.
    ///
    /// Fails with `CatalogError::Incomplete` if records are still pending;
    /// a partial run never produces a summary.
    pub fn finish(self) -> Result<SearchSummary> {
        let remaining = self.order.len() + self.dropped;
        if remaining > 0 {
            return Err(CatalogError::Incomplete {
                emitted: self.matched,
                remaining,
            });
        }
        Ok(SearchSummary::new(self.catalog.size() as u64, self.matched))
    }
}

impl<'a> Iterator for Emission<'a> {
    type Item = &'a ImageRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.order.next()?;
        let Some(record) = self.catalog.all().get(index) else {
            // Planned against another catalog; stop for good.
            self.dropped += 1 + self.order.len();
            self.order = Vec::new().into_iter();
            return None;
        };
        self.matched += 1;
        Some(record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl ExactSizeIterator for Emission<'_> {}

impl std::iter::FusedIterator for Emission<'_> {}
