#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod eviction;
pub mod interaction;
pub mod order_protocol_proxy;
pub mod resolver_registry_proxy;
pub mod settlement;
pub mod staking_proxy;
pub mod types;
pub mod whitelist;

// ============================================================
// Contract
// ============================================================

/// Resolver whitelist plus the settlement relay it gates.
///
/// At most `max_whitelisted` resolvers are admitted, ranked by their live
/// balance in the staking ledger. Only resolvers that are currently
/// whitelisted may start a recursive settlement.
#[multiversx_sc::contract]
pub trait ResolverRegistry:
    whitelist::WhitelistModule + settlement::SettlementModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        staking_address: ManagedAddress,
        resolver_threshold: BigUint,
        max_whitelisted: u32,
    ) {
        self.staking().set(&staking_address);
        self.resolver_threshold().set(&resolver_threshold);
        self.max_whitelisted().set(max_whitelisted);
        self.admission_count().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}
}
