multiversx_sc::imports!();

use crate::errors::{ERR_BALANCE_LESS_THAN_THRESHOLD, ERR_NOT_ENOUGH_BALANCE};
use crate::eviction::{self, Candidate};
use crate::staking_proxy;

/// Capacity-bounded resolver set, ranked by live stake.
///
/// Stakes live in an external ledger and move without the registry
/// seeing it, so nothing here caches a balance or a ranking: every
/// decision and every `isWhitelisted` answer re-reads the ledger.
#[multiversx_sc::module]
pub trait WhitelistModule {
    // ========================================================
    // ENDPOINT: register
    // Join the set, displacing the weakest member when full.
    // ========================================================

    #[endpoint(register)]
    fn register(&self) {
        let caller = self.blockchain().get_caller();
        let stake = self.stake_of(&caller);
        require!(
            stake >= self.resolver_threshold().get(),
            ERR_BALANCE_LESS_THAN_THRESHOLD
        );

        if self.whitelist().contains(&caller) {
            return;
        }

        if self.whitelist().len() < self.max_whitelisted().get() as usize {
            self.admit(&caller, &stake);
            return;
        }

        let weakest = match self.weakest_member() {
            Some(candidate) => candidate,
            // Zero capacity: there is nobody to outbid.
            None => sc_panic!(ERR_NOT_ENOUGH_BALANCE),
        };
        require!(
            eviction::outbids(&stake, &weakest.stake),
            ERR_NOT_ENOUGH_BALANCE
        );

        self.expel(&weakest.account);
        self.resolver_evicted_event(&weakest.account, &caller, &weakest.stake);
        self.admit(&caller, &stake);
    }

    // ========================================================
    // ENDPOINT: clean
    // Permissionless. Drops every member below the threshold.
    // ========================================================

    #[endpoint(clean)]
    fn clean(&self) {
        let threshold = self.resolver_threshold().get();
        let mut below: ManagedVec<Self::Api, ManagedAddress<Self::Api>> = ManagedVec::new();
        let mut below_stakes: ManagedVec<Self::Api, BigUint<Self::Api>> = ManagedVec::new();

        for member in self.whitelist().iter() {
            let stake = self.stake_of(&member);
            if stake < threshold {
                below.push(member);
                below_stakes.push(stake);
            }
        }

        for (member, stake) in below.iter().zip(below_stakes.iter()) {
            self.expel(&member);
            self.resolver_removed_event(&member, &stake);
        }
    }

    // ========================================================
    // ENDPOINT: setResolverThreshold
    // Applies retroactively to every member.
    // ========================================================

    #[only_owner]
    #[endpoint(setResolverThreshold)]
    fn set_resolver_threshold(&self, threshold: BigUint) {
        self.resolver_threshold().set(&threshold);
        self.resolver_threshold_updated_event(&threshold);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(isWhitelisted)]
    fn is_whitelisted(&self, account: &ManagedAddress) -> bool {
        self.whitelist().contains(account)
            && self.stake_of(account) >= self.resolver_threshold().get()
    }

    /// Structural membership only; a member below threshold still counts.
    #[view(isMember)]
    fn is_member(&self, account: &ManagedAddress) -> bool {
        self.whitelist().contains(account)
    }

    #[view(getWhitelist)]
    fn get_whitelist(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for member in self.whitelist().iter() {
            result.push(member);
        }
        result
    }

    #[view(getWhitelistSize)]
    fn get_whitelist_size(&self) -> u64 {
        self.whitelist().len() as u64
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn stake_of(&self, account: &ManagedAddress) -> BigUint {
        let staking = self.staking().get();
        self.tx()
            .to(&staking)
            .typed(staking_proxy::StakingProxy)
            .balance_of(account.clone())
            .returns(ReturnsResult)
            .sync_call()
    }

    fn weakest_member(
        &self,
    ) -> Option<Candidate<ManagedAddress<Self::Api>, BigUint<Self::Api>>> {
        eviction::lowest_priority(self.whitelist().iter().map(|member| Candidate {
            admitted_at: self.admission_nonce(&member).get(),
            stake: self.stake_of(&member),
            account: member,
        }))
    }

    fn admit(&self, account: &ManagedAddress, stake: &BigUint) {
        let nonce = self.admission_count().update(|count| {
            *count += 1;
            *count
        });
        self.admission_nonce(account).set(nonce);
        self.whitelist().insert(account.clone());
        self.resolver_registered_event(account, stake);
    }

    fn expel(&self, account: &ManagedAddress) {
        self.whitelist().swap_remove(account);
        self.admission_nonce(account).clear();
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("resolverRegistered")]
    fn resolver_registered_event(&self, #[indexed] resolver: &ManagedAddress, stake: &BigUint);

    #[event("resolverEvicted")]
    fn resolver_evicted_event(
        &self,
        #[indexed] evicted: &ManagedAddress,
        #[indexed] challenger: &ManagedAddress,
        evicted_stake: &BigUint,
    );

    #[event("resolverRemoved")]
    fn resolver_removed_event(&self, #[indexed] resolver: &ManagedAddress, stake: &BigUint);

    #[event("resolverThresholdUpdated")]
    fn resolver_threshold_updated_event(&self, #[indexed] threshold: &BigUint);

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[view(staking)]
    #[storage_mapper("staking")]
    fn staking(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(resolverThreshold)]
    #[storage_mapper("resolverThreshold")]
    fn resolver_threshold(&self) -> SingleValueMapper<BigUint>;

    #[view(maxWhitelisted)]
    #[storage_mapper("maxWhitelisted")]
    fn max_whitelisted(&self) -> SingleValueMapper<u32>;

    // ── Membership ──

    #[storage_mapper("whitelist")]
    fn whitelist(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("admissionCount")]
    fn admission_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("admissionNonce")]
    fn admission_nonce(&self, account: &ManagedAddress) -> SingleValueMapper<u64>;
}
