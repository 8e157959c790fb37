#![no_std]

multiversx_sc::imports!();

pub mod order_protocol_mock_proxy;

/// Address prefix of an interaction.
const TARGET_LEN: usize = 32;

/// Stand-in limit order protocol.
///
/// Fills every order in full, records it, and forwards a non-empty
/// interaction (`target ++ data`) to `target.fillOrderInteraction`,
/// naming the filler as taker.
#[multiversx_sc::contract]
pub trait OrderProtocolMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(fillOrder)]
    fn fill_order(
        &self,
        order: ManagedBuffer,
        _signature: ManagedBuffer,
        interaction: ManagedBuffer,
        making_amount: BigUint,
        taking_amount: BigUint,
        _threshold_amount: BigUint,
    ) -> MultiValue2<BigUint, BigUint> {
        let taker = self.blockchain().get_caller();
        self.filled_orders().push(&order);

        if interaction.len() > TARGET_LEN {
            let mut target = [0u8; TARGET_LEN];
            require!(
                interaction.load_slice(0, &mut target).is_ok(),
                "Malformed interaction"
            );
            let data = match interaction.copy_slice(TARGET_LEN, interaction.len() - TARGET_LEN) {
                Some(data) => data,
                None => sc_panic!("Malformed interaction"),
            };

            self.tx()
                .to(ManagedAddress::new_from_bytes(&target))
                .raw_call("fillOrderInteraction")
                .argument(&taker)
                .argument(&making_amount)
                .argument(&taking_amount)
                .argument(&data)
                .sync_call();
        }

        (making_amount, taking_amount).into()
    }

    #[endpoint(ping)]
    fn ping(&self, tag: ManagedBuffer) {
        self.pings().push(&tag);
    }

    #[view(getFilledOrders)]
    fn get_filled_orders(&self) -> MultiValueEncoded<ManagedBuffer> {
        let mut result = MultiValueEncoded::new();
        for order in self.filled_orders().iter() {
            result.push(order);
        }
        result
    }

    #[view(getPings)]
    fn get_pings(&self) -> MultiValueEncoded<ManagedBuffer> {
        let mut result = MultiValueEncoded::new();
        for tag in self.pings().iter() {
            result.push(tag);
        }
        result
    }

    #[storage_mapper("filledOrders")]
    fn filled_orders(&self) -> VecMapper<ManagedBuffer>;

    #[storage_mapper("pings")]
    fn pings(&self) -> VecMapper<ManagedBuffer>;
}
