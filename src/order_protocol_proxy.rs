use multiversx_sc::proxy_imports::*;

/// Limit order protocol entry point used by the settlement relay.
///
/// Orders and signatures are opaque to the relay: their layout and
/// verification belong to the protocol.
pub struct OrderProtocolProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for OrderProtocolProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = OrderProtocolProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        OrderProtocolProxyMethods { wrapped_tx: tx }
    }
}

pub struct OrderProtocolProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> OrderProtocolProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    /// Returns the actual `(making_amount, taking_amount)` filled.
    pub fn fill_order<
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
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValue2<BigUint<Env::Api>, BigUint<Env::Api>>>
    {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("fillOrder")
            .argument(&order)
            .argument(&signature)
            .argument(&interaction)
            .argument(&making_amount)
            .argument(&taking_amount)
            .argument(&threshold_amount)
            .original_result()
    }
}
