//! Relay payload layout.
//!
//! A full payload is `target address (32 bytes) ++ kind byte ++ body`,
//! where the body is the top-encoding of [`FillOrderArgs`] or of a list
//! of [`PendingCall`]s. The order protocol routes on the address and
//! hands the remainder (`kind ++ body`) to the target's
//! `fillOrderInteraction` endpoint, so this side only ever splits
//! `kind ++ body`.
//!
//! [`FillOrderArgs`]: crate::types::FillOrderArgs
//! [`PendingCall`]: crate::types::PendingCall

use multiversx_sc::api::ManagedTypeApi;
use multiversx_sc::codec::{EncodeError, TopDecode, TopEncode};
use multiversx_sc::types::{ManagedAddress, ManagedBuffer};

use crate::types::InteractionKind;

pub const TARGET_LEN: usize = 32;

pub fn encode<M, T>(
    target: &ManagedAddress<M>,
    kind: InteractionKind,
    body: &T,
) -> Result<ManagedBuffer<M>, EncodeError>
where
    M: ManagedTypeApi,
    T: TopEncode,
{
    let mut encoded_body = ManagedBuffer::<M>::new();
    body.top_encode(&mut encoded_body)?;

    let mut payload = target.as_managed_buffer().clone();
    payload.append_bytes(&[kind.tag()]);
    payload.append(&encoded_body);
    Ok(payload)
}

/// Splits `kind ++ body`. `None` for empty data or an unknown kind.
pub fn split<M: ManagedTypeApi>(
    data: &ManagedBuffer<M>,
) -> Option<(InteractionKind, ManagedBuffer<M>)> {
    if data.is_empty() {
        return None;
    }
    let mut tag = [0u8; 1];
    data.load_slice(0, &mut tag).ok()?;
    let kind = InteractionKind::from_tag(tag[0])?;
    let body = data.copy_slice(1, data.len() - 1)?;
    Some((kind, body))
}

pub fn decode_body<M, T>(body: ManagedBuffer<M>) -> Option<T>
where
    M: ManagedTypeApi,
    T: TopDecode,
{
    T::top_decode(body).ok()
}
