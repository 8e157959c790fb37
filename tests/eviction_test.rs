use resolver_registry::eviction::{lowest_priority, outbids, Candidate};

fn candidate(account: &'static str, admitted_at: u64, stake: u64) -> Candidate<&'static str, u64> {
    Candidate {
        account,
        admitted_at,
        stake,
    }
}

#[test]
fn empty_set_has_no_weakest_member() {
    let none: Vec<Candidate<&str, u64>> = Vec::new();
    assert_eq!(lowest_priority(none), None);
}

#[test]
fn lowest_stake_is_weakest() {
    let weakest = lowest_priority(vec![
        candidate("alice", 1, 50),
        candidate("bob", 2, 10),
        candidate("carol", 3, 30),
    ]);
    assert_eq!(weakest.map(|c| c.account), Some("bob"));
}

#[test]
fn equal_stakes_evict_earliest_admitted() {
    // Iteration order differs from admission order, as after a swap-remove.
    let weakest = lowest_priority(vec![
        candidate("dave", 7, 10),
        candidate("erin", 4, 10),
        candidate("frank", 9, 10),
        candidate("grace", 2, 11),
    ]);
    assert_eq!(weakest, Some(candidate("erin", 4, 10)));
}

#[test]
fn challenger_must_strictly_exceed_incumbent() {
    assert!(outbids(&11u64, &10u64));
    assert!(!outbids(&10u64, &10u64));
    assert!(!outbids(&9u64, &10u64));
}
