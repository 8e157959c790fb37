use multiversx_sc::types::{BigUint, ManagedAddress, ManagedBuffer, ManagedVec};
use multiversx_sc_scenario::api::StaticApi;
use resolver_registry::interaction::{self, TARGET_LEN};
use resolver_registry::types::{FillOrderArgs, InteractionKind, PendingCall};

fn relay_address() -> ManagedAddress<StaticApi> {
    ManagedAddress::new_from_bytes(&[7u8; 32])
}

/// What the order protocol does with a payload: route on the address,
/// forward the rest.
fn split_target(
    payload: &ManagedBuffer<StaticApi>,
) -> Option<(ManagedAddress<StaticApi>, ManagedBuffer<StaticApi>)> {
    if payload.len() < TARGET_LEN {
        return None;
    }
    let mut target = [0u8; TARGET_LEN];
    payload.load_slice(0, &mut target).ok()?;
    let rest = payload.copy_slice(TARGET_LEN, payload.len() - TARGET_LEN)?;
    Some((ManagedAddress::new_from_bytes(&target), rest))
}

#[test]
fn fill_payload_names_its_target_and_carries_the_fill() {
    let args = FillOrderArgs::<StaticApi> {
        order: ManagedBuffer::from("back-order"),
        signature: ManagedBuffer::from("signature"),
        interaction: ManagedBuffer::new(),
        making_amount: BigUint::from(100u64),
        taking_amount: BigUint::from(1u64),
        threshold_amount: BigUint::zero(),
    };
    let payload = interaction::encode(&relay_address(), InteractionKind::FillOrder, &args)
        .expect("encodable");

    let (target, forwarded) = split_target(&payload).expect("has target");
    assert_eq!(target, relay_address());

    let (kind, body) = interaction::split(&forwarded).expect("has kind");
    assert_eq!(kind, InteractionKind::FillOrder);

    let decoded: FillOrderArgs<StaticApi> = interaction::decode_body(body).expect("decodable");
    assert_eq!(decoded.order, args.order);
    assert_eq!(decoded.signature, args.signature);
    assert!(decoded.interaction.is_empty());
    assert_eq!(decoded.making_amount, args.making_amount);
    assert_eq!(decoded.taking_amount, args.taking_amount);
    assert_eq!(decoded.threshold_amount, args.threshold_amount);
}

#[test]
fn call_batch_payload_starts_with_its_kind_byte() {
    let mut calls = ManagedVec::<StaticApi, PendingCall<StaticApi>>::new();
    calls.push(PendingCall {
        to: relay_address(),
        endpoint: ManagedBuffer::from("ping"),
        args: ManagedVec::from_single_item(ManagedBuffer::from("approve")),
        payments: ManagedVec::new(),
    });

    let payload = interaction::encode(&relay_address(), InteractionKind::CallBatch, &calls)
        .expect("encodable");
    let (_, forwarded) = split_target(&payload).expect("has target");

    let mut first = [0u8; 1];
    assert!(forwarded.load_slice(0, &mut first).is_ok());
    assert_eq!(first[0], 0x01);

    let (kind, body) = interaction::split(&forwarded).expect("has kind");
    assert_eq!(kind, InteractionKind::CallBatch);
    let decoded: ManagedVec<StaticApi, PendingCall<StaticApi>> =
        interaction::decode_body(body).expect("decodable");
    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded.get(0).endpoint, ManagedBuffer::from("ping"));
}

#[test]
fn empty_or_unknown_data_is_rejected() {
    assert!(interaction::split(&ManagedBuffer::<StaticApi>::new()).is_none());
    assert!(interaction::split(&ManagedBuffer::<StaticApi>::from(&[0x02u8, 0x00][..])).is_none());
}

#[test]
fn payload_shorter_than_an_address_has_no_target() {
    let short = ManagedBuffer::<StaticApi>::from(&[0u8; 31][..]);
    assert!(split_target(&short).is_none());
}

#[test]
fn kind_tags_are_stable() {
    assert_eq!(InteractionKind::FillOrder.tag(), 0x00);
    assert_eq!(InteractionKind::CallBatch.tag(), 0x01);
    assert_eq!(InteractionKind::from_tag(0x01), Some(InteractionKind::CallBatch));
    assert_eq!(InteractionKind::from_tag(0xff), None);
}
