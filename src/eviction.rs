//! Which member gives way when the whitelist is full.
//!
//! Priority is the live stake, highest first. Members sharing the lowest
//! stake are ordered by admission: the earliest admitted leaves first.
//! Nothing here touches storage or the ledger, so callers snapshot the
//! stakes once per operation and pass them in.

#[derive(Clone, Debug, PartialEq)]
pub struct Candidate<A, S> {
    pub account: A,
    /// Admission sequence number, strictly increasing per admission.
    pub admitted_at: u64,
    pub stake: S,
}

/// Lowest-priority candidate, or `None` for an empty set.
pub fn lowest_priority<A, S, I>(candidates: I) -> Option<Candidate<A, S>>
where
    S: PartialOrd,
    I: IntoIterator<Item = Candidate<A, S>>,
{
    let mut weakest: Option<Candidate<A, S>> = None;
    for candidate in candidates {
        let replaces = match &weakest {
            None => true,
            Some(current) => {
                candidate.stake < current.stake
                    || (candidate.stake == current.stake
                        && candidate.admitted_at < current.admitted_at)
            }
        };
        if replaces {
            weakest = Some(candidate);
        }
    }
    weakest
}

/// A challenger must hold strictly more than the incumbent it displaces.
pub fn outbids<S: PartialOrd>(challenger: &S, incumbent: &S) -> bool {
    challenger > incumbent
}
