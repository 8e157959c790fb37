use multiversx_sc::proxy_imports::*;

use crate::types::PendingCall;

pub struct ResolverRegistryProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for ResolverRegistryProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = ResolverRegistryProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        ResolverRegistryProxyMethods { wrapped_tx: tx }
    }
}

pub struct ResolverRegistryProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> ResolverRegistryProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
        Arg2: ProxyArg<u32>,
    >(
        self,
        staking_address: Arg0,
        resolver_threshold: Arg1,
        max_whitelisted: Arg2,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&staking_address)
            .argument(&resolver_threshold)
            .argument(&max_whitelisted)
            .original_result()
    }
}

impl<Env, From, To, Gas> ResolverRegistryProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn upgrade(self) -> TxTypedUpgrade<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_upgrade()
            .original_result()
    }
}

impl<Env, From, To, Gas> ResolverRegistryProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    // ── Whitelist ──

    pub fn register(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("register")
            .original_result()
    }

    pub fn clean(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("clean")
            .original_result()
    }

    pub fn set_resolver_threshold<Arg0: ProxyArg<BigUint<Env::Api>>>(
        self,
        threshold: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setResolverThreshold")
            .argument(&threshold)
            .original_result()
    }

    pub fn is_whitelisted<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        account: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isWhitelisted")
            .argument(&account)
            .original_result()
    }

    pub fn is_member<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        account: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isMember")
            .argument(&account)
            .original_result()
    }

    pub fn get_whitelist(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>>
    {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getWhitelist")
            .original_result()
    }

    pub fn get_whitelist_size(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getWhitelistSize")
            .original_result()
    }

    pub fn staking(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("staking")
            .original_result()
    }

    pub fn resolver_threshold(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("resolverThreshold")
            .original_result()
    }

    pub fn max_whitelisted(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u32> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("maxWhitelisted")
            .original_result()
    }

    // ── Settlement ──

    #[allow(clippy::too_many_arguments)]
    pub fn match_orders<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg2: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg3: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg4: ProxyArg<BigUint<Env::Api>>,
        Arg5: ProxyArg<BigUint<Env::Api>>,
        Arg6: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        order_protocol: Arg0,
        order: Arg1,
        signature: Arg2,
        interaction: Arg3,
        making_amount: Arg4,
        threshold_amount: Arg5,
        taking_amount: Arg6,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("matchOrders")
            .argument(&order_protocol)
            .argument(&order)
            .argument(&signature)
            .argument(&interaction)
            .argument(&making_amount)
            .argument(&threshold_amount)
            .argument(&taking_amount)
            .original_result()
    }

    pub fn fill_order_interaction<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
        Arg2: ProxyArg<BigUint<Env::Api>>,
        Arg3: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        taker: Arg0,
        making_amount: Arg1,
        taking_amount: Arg2,
        interactive_data: Arg3,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("fillOrderInteraction")
            .argument(&taker)
            .argument(&making_amount)
            .argument(&taking_amount)
            .argument(&interactive_data)
            .original_result()
    }

    pub fn get_fill_interaction<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg2: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg3: ProxyArg<BigUint<Env::Api>>,
        Arg4: ProxyArg<BigUint<Env::Api>>,
        Arg5: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        order: Arg0,
        signature: Arg1,
        interaction: Arg2,
        making_amount: Arg3,
        taking_amount: Arg4,
        threshold_amount: Arg5,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedBuffer<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getFillInteraction")
            .argument(&order)
            .argument(&signature)
            .argument(&interaction)
            .argument(&making_amount)
            .argument(&taking_amount)
            .argument(&threshold_amount)
            .original_result()
    }

    pub fn get_call_batch_interaction<
        Arg0: ProxyArg<ManagedVec<Env::Api, PendingCall<Env::Api>>>,
    >(
        self,
        calls: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedBuffer<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getCallBatchInteraction")
            .argument(&calls)
            .original_result()
    }
}
