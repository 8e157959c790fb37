multiversx_sc::imports!();

use crate::errors::{
    ERR_ACCESS_DENIED, ERR_INCORRECT_CALLDATA, ERR_RESOLVER_NOT_WHITELISTED,
    ERR_SETTLEMENT_IN_PROGRESS,
};
use crate::interaction;
use crate::order_protocol_proxy;
use crate::types::{FillOrderArgs, InteractionKind, PendingCall};

/// Recursive settlement relay.
///
/// A whitelisted resolver fills an order through an external limit
/// order protocol. When the protocol reaches the order's interaction it
/// calls back `fillOrderInteraction`, which either fills another order
/// (whose own interaction may call back again) or runs a batch of calls
/// that moves the funds the pending fills need. Everything happens in
/// one transaction and reverts as a whole.
#[multiversx_sc::module]
pub trait SettlementModule: crate::whitelist::WhitelistModule {
    // ========================================================
    // ENDPOINT: matchOrders
    // ========================================================

    #[endpoint(matchOrders)]
    fn match_orders(
        &self,
        order_protocol: ManagedAddress,
        order: ManagedBuffer,
        signature: ManagedBuffer,
        interaction: ManagedBuffer,
        making_amount: BigUint,
        threshold_amount: BigUint,
        taking_amount: BigUint,
    ) {
        let caller = self.blockchain().get_caller();
        require!(self.is_whitelisted(&caller), ERR_RESOLVER_NOT_WHITELISTED);
        require!(self.active_protocol().is_empty(), ERR_SETTLEMENT_IN_PROGRESS);

        self.active_protocol().set(&order_protocol);
        self.fill(
            &order_protocol,
            FillOrderArgs {
                order,
                signature,
                interaction,
                making_amount: making_amount.clone(),
                taking_amount: taking_amount.clone(),
                threshold_amount,
            },
        );
        self.active_protocol().clear();

        self.orders_matched_event(&caller, &order_protocol, &making_amount, &taking_amount);
    }

    // ========================================================
    // ENDPOINT: fillOrderInteraction
    // Callback from the protocol while one of our fills is open.
    // ========================================================

    #[endpoint(fillOrderInteraction)]
    fn fill_order_interaction(
        &self,
        taker: ManagedAddress,
        making_amount: BigUint,
        taking_amount: BigUint,
        interactive_data: ManagedBuffer,
    ) {
        require!(!self.active_protocol().is_empty(), ERR_ACCESS_DENIED);
        let protocol = self.active_protocol().get();
        require!(
            self.blockchain().get_caller() == protocol,
            ERR_ACCESS_DENIED
        );
        require!(
            taker == self.blockchain().get_sc_address(),
            ERR_ACCESS_DENIED
        );

        let (kind, body) = match interaction::split(&interactive_data) {
            Some(parts) => parts,
            None => sc_panic!(ERR_INCORRECT_CALLDATA),
        };

        match kind {
            InteractionKind::FillOrder => {
                let args: FillOrderArgs<Self::Api> = match interaction::decode_body(body) {
                    Some(args) => args,
                    None => sc_panic!(ERR_INCORRECT_CALLDATA),
                };
                self.fill(&protocol, args);
            },
            InteractionKind::CallBatch => {
                let calls: ManagedVec<Self::Api, PendingCall<Self::Api>> =
                    match interaction::decode_body(body) {
                        Some(calls) => calls,
                        None => sc_panic!(ERR_INCORRECT_CALLDATA),
                    };
                self.execute_calls(&calls);
            },
        }

        self.interaction_executed_event(kind.tag(), &making_amount, &taking_amount);
    }

    // ========================================================
    // VIEWS: payload builders
    // Both payloads name this contract as their target.
    // ========================================================

    #[view(getFillInteraction)]
    fn get_fill_interaction(
        &self,
        order: ManagedBuffer,
        signature: ManagedBuffer,
        interaction: ManagedBuffer,
        making_amount: BigUint,
        taking_amount: BigUint,
        threshold_amount: BigUint,
    ) -> ManagedBuffer {
        let args = FillOrderArgs {
            order,
            signature,
            interaction,
            making_amount,
            taking_amount,
            threshold_amount,
        };
        let own_address = self.blockchain().get_sc_address();
        match interaction::encode(&own_address, InteractionKind::FillOrder, &args) {
            Ok(payload) => payload,
            Err(_) => sc_panic!(ERR_INCORRECT_CALLDATA),
        }
    }

    #[view(getCallBatchInteraction)]
    fn get_call_batch_interaction(
        &self,
        calls: ManagedVec<Self::Api, PendingCall<Self::Api>>,
    ) -> ManagedBuffer {
        let own_address = self.blockchain().get_sc_address();
        match interaction::encode(&own_address, InteractionKind::CallBatch, &calls) {
            Ok(payload) => payload,
            Err(_) => sc_panic!(ERR_INCORRECT_CALLDATA),
        }
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn fill(&self, protocol: &ManagedAddress, args: FillOrderArgs<Self::Api>) {
        let filled = self
            .tx()
            .to(protocol)
            .typed(order_protocol_proxy::OrderProtocolProxy)
            .fill_order(
                args.order,
                args.signature,
                args.interaction,
                args.making_amount,
                args.taking_amount,
                args.threshold_amount,
            )
            .returns(ReturnsResult)
            .sync_call();
        let (making_filled, taking_filled) = filled.into_tuple();
        self.order_filled_event(protocol, &making_filled, &taking_filled);
    }

    fn execute_calls(&self, calls: &ManagedVec<Self::Api, PendingCall<Self::Api>>) {
        for call in calls.iter() {
            let mut tx = self
                .tx()
                .to(&call.to)
                .payment(call.payments.clone())
                .raw_call(call.endpoint.clone());
            for arg in call.args.iter() {
                tx = tx.argument(&*arg);
            }
            tx.sync_call();
        }
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("ordersMatched")]
    fn orders_matched_event(
        &self,
        #[indexed] resolver: &ManagedAddress,
        #[indexed] protocol: &ManagedAddress,
        #[indexed] making_amount: &BigUint,
        taking_amount: &BigUint,
    );

    #[event("orderFilled")]
    fn order_filled_event(
        &self,
        #[indexed] protocol: &ManagedAddress,
        #[indexed] making_amount: &BigUint,
        taking_amount: &BigUint,
    );

    #[event("interactionExecuted")]
    fn interaction_executed_event(
        &self,
        #[indexed] kind: u8,
        #[indexed] making_amount: &BigUint,
        taking_amount: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    /// Protocol of the settlement in progress; empty between transactions.
    #[storage_mapper("activeProtocol")]
    fn active_protocol(&self) -> SingleValueMapper<ManagedAddress>;
}
