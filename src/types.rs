multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Interaction kind: first byte of every relay payload body
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum InteractionKind {
    /// Fill another order through the same protocol, recursively.
    FillOrder,
    /// Run a list of calls, e.g. moving or approving the funds the
    /// next fill needs.
    CallBatch,
}

impl InteractionKind {
    pub fn tag(self) -> u8 {
        match self {
            InteractionKind::FillOrder => 0x00,
            InteractionKind::CallBatch => 0x01,
        }
    }

    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0x00 => Some(InteractionKind::FillOrder),
            0x01 => Some(InteractionKind::CallBatch),
            _ => None,
        }
    }
}

// ============================================================
// FillOrderArgs: one nested fill, in the order protocol's
// argument order
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct FillOrderArgs<M: ManagedTypeApi> {
    pub order: ManagedBuffer<M>,
    pub signature: ManagedBuffer<M>,
    /// Payload handed to the protocol for this fill; may itself be
    /// another relay interaction.
    pub interaction: ManagedBuffer<M>,
    pub making_amount: BigUint<M>,
    pub taking_amount: BigUint<M>,
    pub threshold_amount: BigUint<M>,
}

// ============================================================
// PendingCall: one step of a call batch
// ============================================================

#[type_abi]
#[derive(
    TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, Debug,
)]
pub struct PendingCall<M: ManagedTypeApi> {
    pub to: ManagedAddress<M>,
    pub endpoint: ManagedBuffer<M>,
    pub args: ManagedVec<M, ManagedBuffer<M>>,
    /// Tokens sent along with the call; empty for a plain call.
    pub payments: ManagedVec<M, EsdtTokenPayment<M>>,
}
