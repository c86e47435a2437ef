use soroban_sdk::{contractevent, Address, BytesN, String, Symbol, Vec};

use crate::types::ItemKind;

/// Event emitted when the platform is initialized
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlatformInitializedEventData {
    #[topic]
    pub admin: Address,
    pub platform_fee_bps: u32,
    pub auth_fee_bps: u32,
    pub total_authenticators: u32,
}

/// Event emitted when fee rates or duration bounds change
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfigUpdatedEventData {
    #[topic]
    pub admin: Address,
    pub fields: Vec<Symbol>,
    pub timestamp: u64,
}

/// Event emitted when a treasury is set for a payment token
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreasurySetEventData {
    #[topic]
    pub token: Address,
    pub treasury: Address,
}

/// Event emitted when the platform is paused/unpaused
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PauseToggledEventData {
    #[topic]
    pub admin: Address,
    pub is_paused: bool,
    pub timestamp: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlatformClosedEventData {
    #[topic]
    pub admin: Address,
    pub timestamp: u64,
}

/// Event emitted when authenticators are added to the registry
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuthsRegisteredEventData {
    #[topic]
    pub admin: Address,
    pub total_added: u32,
    pub next_index: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuthRemovedEventData {
    #[topic]
    pub authenticator: Address,
    pub timestamp: u64,
}

/// Event emitted when a seller vaults an item ahead of listing it
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ItemDepositedEventData {
    #[topic]
    pub seller: Address,
    pub auction_id: BytesN<32>,
    pub item: Address,
    pub amount: i128,
}

/// Event emitted when an unlisted item goes back to its seller
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ItemReclaimedEventData {
    #[topic]
    pub seller: Address,
    pub auction_id: BytesN<32>,
    pub item: Address,
    pub amount: i128,
}

/// Event emitted when an auction is created
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCreatedEventData {
    #[topic]
    pub seller: Address,
    pub auction_id: BytesN<32>,
    pub nonce: u64,
    pub item_kind: ItemKind,
    pub timestamp: u64,
}

/// Event emitted when a bid is placed or topped up
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlacedEventData {
    #[topic]
    pub bidder: Address,
    pub auction_id: BytesN<32>,
    pub amount: i128,
    pub total: i128,
    pub timestamp: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionEndedEventData {
    #[topic]
    pub auction_id: BytesN<32>,
    pub highest_bidder: Option<Address>,
    pub highest_bid: i128,
    pub reserve_met: bool,
}

/// Event emitted when the winner settles
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionSettledEventData {
    #[topic]
    pub auction_id: BytesN<32>,
    #[topic]
    pub winner: Address,
    pub final_price: i128,
    pub platform_fee: i128,
    pub auth_fee: i128,
    pub seller_amount: i128,
}

/// Event emitted when a bidder takes back their escrow
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidWithdrawnEventData {
    #[topic]
    pub bidder: Address,
    pub auction_id: BytesN<32>,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuthReportUploadedEventData {
    #[topic]
    pub authenticator: Address,
    pub auction_id: BytesN<32>,
    pub report_hash: String,
    pub uploaded_at: u64,
}

/// Event emitted when an authenticator approves or rejects an item
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuthResolvedEventData {
    #[topic]
    pub authenticator: Address,
    pub auction_id: BytesN<32>,
    pub approved: bool,
    pub verified_at: u64,
}
