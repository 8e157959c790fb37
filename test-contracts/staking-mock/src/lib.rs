#![no_std]

multiversx_sc::imports!();

pub mod staking_mock_proxy;

/// Minimal stake ledger: freely mintable, transferable balances.
#[multiversx_sc::contract]
pub trait StakingMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(mint)]
    fn mint(&self, to: ManagedAddress, amount: BigUint) {
        self.balance(&to).update(|b| *b += &amount);
    }

    #[endpoint(transfer)]
    fn transfer(&self, to: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        let balance = self.balance(&caller).get();
        require!(balance >= amount, "Insufficient balance");

        self.balance(&caller).set(&(balance - &amount));
        self.balance(&to).update(|b| *b += &amount);
    }

    #[view(balanceOf)]
    fn balance_of(&self, account: ManagedAddress) -> BigUint {
        self.balance(&account).get()
    }

    #[storage_mapper("balance")]
    fn balance(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;
}
