//! Minimum-ETA candidate search within one pool.

use muster_pool::{PoolHandle, ResourcePool};

/// A pool record selected for one leg of an assignment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Candidate {
    pub handle: PoolHandle,
    pub eta: f64,
}

/// Linear scan for the available, eligible record with the least finite
/// travel time.
///
/// Strict `<` keeps the first-encountered record on ties, which combined
/// with the pool's insertion-order iteration makes the choice
/// deterministic. Records with a non-finite ETA (the unreachable sentinel)
/// are never candidates.
pub(crate) fn best_candidate<R>(
    pool: &ResourcePool<R>,
    mut eligible: impl FnMut(&R) -> bool,
    mut eta: impl FnMut(&R) -> f64,
) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;
    for (handle, record) in pool.available() {
        if !eligible(record) {
            continue;
        }
        let t = eta(record);
        if !t.is_finite() {
            continue;
        }
        if best.map_or(true, |b| t < b.eta) {
            best = Some(Candidate { handle, eta: t });
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_minimum_eta() {
        let pool = ResourcePool::from_records([3.0f64, 1.0, 2.0], |_| 1);
        let best = best_candidate(&pool, |_| true, |&t| t).unwrap();
        assert_eq!(best.eta, 1.0);
        assert_eq!(best.handle.index(), 1);
    }

    #[test]
    fn tie_goes_to_first_in_pool_order() {
        let pool = ResourcePool::from_records([2.0f64, 2.0, 2.0], |_| 1);
        let best = best_candidate(&pool, |_| true, |&t| t).unwrap();
        assert_eq!(best.handle.index(), 0);
    }

    #[test]
    fn ineligible_records_are_skipped() {
        let pool = ResourcePool::from_records([1.0f64, 5.0], |_| 1);
        let best = best_candidate(&pool, |&t| t > 2.0, |&t| t).unwrap();
        assert_eq!(best.handle.index(), 1);
    }

    #[test]
    fn unreachable_records_are_never_candidates() {
        let pool = ResourcePool::from_records([f64::INFINITY, f64::INFINITY], |_| 1);
        assert_eq!(best_candidate(&pool, |_| true, |&t| t), None);
    }

    #[test]
    fn exhausted_pool_yields_none() {
        let pool = ResourcePool::from_records([1.0f64], |_| 0);
        assert_eq!(best_candidate(&pool, |_| true, |&t| t), None);
    }
}
