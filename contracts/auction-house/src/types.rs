use soroban_sdk::{contracttype, Address, BytesN, Map, String, Vec};

/// Storage keys for the auction house.
///
/// Entity keys are derived ids (see `keys.rs`), never caller-chosen values.
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    /// Platform configuration singleton
    PlatformConfig,
    /// Authenticators allow-list singleton
    Registry,
    /// Per-seller auction counter
    SellerState(Address),
    /// Auction by auction id
    Auction(BytesN<32>),
    /// Item held for an auction, by auction id
    ItemVault(BytesN<32>),
    /// Bid by bid id
    Bid(BytesN<32>),
    /// Escrowed payment held for a bid, by bid id
    EscrowVault(BytesN<32>),
    /// Authentication record, by auction id
    Authentication(BytesN<32>),
}

/// Auction lifecycle. Only ever moves forward.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AuctionStatus {
    /// Listed, start date not reached or no bid seen yet
    Pending = 0,
    /// At least one bid observed after the start date
    Active = 1,
    /// `end_auction` recorded the close
    Ended = 2,
    /// Item delivered and proceeds distributed
    Settled = 3,
}

/// Third-party authentication state of an auction.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum AuthStatus {
    NotRequired = 0,
    PendingAuth = 1,
    Approved = 2,
    Rejected = 3,
}

/// Kind of item being sold.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ItemKind {
    /// Tokenized digital collectible
    DigitalNft = 0,
    /// Physical item represented on-chain; needs an authenticator
    PhysicalRwa = 1,
}

/// Global platform settings
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlatformConfig {
    /// Admin address with special privileges
    pub admin: Address,
    /// Platform fee in basis points (250 = 2.5%)
    pub platform_fee_bps: u32,
    /// Authenticator fee in basis points
    pub auth_fee_bps: u32,
    /// Shortest allowed auction, in seconds
    pub min_auction_duration: u64,
    /// Longest allowed auction, in seconds
    pub max_auction_duration: u64,
    /// Fee recipient per accepted payment token
    pub treasuries: Map<Address, Address>,
    /// Whether new listings and bids are blocked
    pub is_paused: bool,
    /// Timestamp of last configuration update
    pub updated_at: u64,
}

/// Admin-managed allow-list of authenticators
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuthenticatorsRegistry {
    pub admin: Address,
    pub authenticators: Vec<Address>,
    /// Incremented once per successful registration, never decremented
    pub next_index: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SellerState {
    pub seller: Address,
    /// Nonce of the seller's next auction
    pub auction_count: u64,
}

/// One listing and its bidding state
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    /// Derived from (seller, nonce)
    pub id: BytesN<32>,
    pub seller: Address,
    /// Seller's auction counter at creation time
    pub nonce: u64,
    /// Token contract of the item being sold
    pub item: Address,
    pub item_kind: ItemKind,
    /// Payment token bids must be made in
    pub accepted_token: Address,
    pub starting_bid: i128,
    /// Minimum winning bid for settlement
    pub reserved_price: i128,
    pub start_date: u64,
    pub end_date: u64,
    pub auction_status: AuctionStatus,
    pub auth_status: AuthStatus,
    pub authenticator: Option<Address>,
    /// 0 until the first bid, then the leader's cumulative escrow
    pub highest_bid: i128,
    pub highest_bidder: Option<Address>,
    pub created_at: u64,
}

/// A bidder's cumulative commitment to one auction
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bid {
    /// Derived from (bidder, auction id)
    pub id: BytesN<32>,
    pub bidder: Address,
    pub auction_id: BytesN<32>,
    pub token: Address,
    /// Cumulative escrowed amount
    pub amount: i128,
    /// Time of the last top-up
    pub timestamp: u64,
    pub is_active: bool,
    pub is_winner: bool,
}

/// Item held by the contract on behalf of an auction
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ItemVault {
    pub auction_id: BytesN<32>,
    pub item: Address,
    pub amount: i128,
    pub depositor: Address,
}

/// Payment held by the contract on behalf of a bid
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EscrowVault {
    pub bid_id: BytesN<32>,
    pub token: Address,
    pub balance: i128,
}

/// Authenticator assignment and verdict for an auction
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Authentication {
    pub auction_id: BytesN<32>,
    pub authenticator: Address,
    pub seller: Address,
    pub auth_status: AuthStatus,
    /// Content hash of the verification report, empty until uploaded
    pub report_hash: String,
    pub uploaded_at: u64,
    pub verified_at: u64,
    pub fee_amount: i128,
    pub fee_paid: bool,
}

/// How a winning bid is split at settlement
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SettlementQuote {
    pub winning_bid: i128,
    pub platform_fee: i128,
    pub auth_fee: i128,
    pub seller_amount: i128,
}

/// Basis points denominator; also the ceiling for any fee rate
pub const MAX_FEE_BPS: u32 = 10_000;

/// Registry capacity
pub const MAX_AUTHENTICATORS: u32 = 100;

/// Number of ledgers in a day (assuming ~5 second block time)
pub const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for persistent storage (90 days)
pub const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;

/// TTL threshold for persistent storage
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

/// TTL extension amount for instance storage (30 days)
pub const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// TTL threshold before extending instance storage
pub const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;
