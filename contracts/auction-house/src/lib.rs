#![no_std]

mod auction;
mod authentication;
mod bidding;
mod errors;
mod events;
mod keys;
mod platform;
mod settlement;
mod storage;
mod types;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, Map, String, Vec};

pub use crate::errors::Error;
pub use crate::types::*;

use crate::storage::*;

/// Auction house contract.
///
/// English ascending-bid auctions with a reserve price:
/// - Sellers vault an item and list it against a payment token
/// - Bidders escrow cumulative bids; the highest total leads
/// - The winner settles after the close, splitting proceeds between seller,
///   treasury and an optional authenticator
/// - Everyone else withdraws their escrow
#[contract]
pub struct AuctionHouse;

#[contractimpl]
impl AuctionHouse {
    // ========================================================================
    // PLATFORM ADMINISTRATION
    // ========================================================================

    /// Initialize the platform config and authenticators registry.
    ///
    /// # Arguments
    /// * `admin` - Address that will have admin privileges
    /// * `platform_fee_bps` - Platform fee in basis points (100 = 1%)
    /// * `auth_fee_bps` - Authenticator fee in basis points
    /// * `min_auction_duration` / `max_auction_duration` - Bounds in seconds
    /// * `treasuries` - Fee recipient per accepted payment token
    /// * `authenticators` - Initial allow-list
    ///
    /// # Errors
    /// * `Error::AlreadyInitialized` - If the platform has already been initialized
    /// * `Error::FeeTooHigh` - If a fee, or both together, exceed 10000 bps
    /// * `Error::InvalidDurationBounds` - Unless 0 < min < max
    pub fn initialize(
        e: &Env,
        admin: Address,
        platform_fee_bps: u32,
        auth_fee_bps: u32,
        min_auction_duration: u64,
        max_auction_duration: u64,
        treasuries: Map<Address, Address>,
        authenticators: Vec<Address>,
    ) -> Result<(), Error> {
        platform::initialize(
            e,
            admin,
            platform_fee_bps,
            auth_fee_bps,
            min_auction_duration,
            max_auction_duration,
            treasuries,
            authenticators,
        )
    }

    /// Add authenticators to the registry (admin only)
    pub fn register_authenticators(
        e: &Env,
        admin: Address,
        authenticators: Vec<Address>,
    ) -> Result<(), Error> {
        platform::register_authenticators(e, admin, authenticators)
    }

    /// Remove an authenticator from the registry (admin only)
    pub fn remove_authenticator(
        e: &Env,
        admin: Address,
        authenticator: Address,
    ) -> Result<(), Error> {
        platform::remove_authenticator(e, admin, authenticator)
    }

    /// Update fee rates and duration bounds (admin only). `None` keeps a value.
    pub fn update_platform_config(
        e: &Env,
        admin: Address,
        platform_fee_bps: Option<u32>,
        auth_fee_bps: Option<u32>,
        min_auction_duration: Option<u64>,
        max_auction_duration: Option<u64>,
    ) -> Result<(), Error> {
        platform::update_platform_config(
            e,
            admin,
            platform_fee_bps,
            auth_fee_bps,
            min_auction_duration,
            max_auction_duration,
        )
    }

    /// Set the treasury for a payment token (admin only)
    pub fn set_treasury(
        e: &Env,
        admin: Address,
        token: Address,
        treasury: Address,
    ) -> Result<(), Error> {
        platform::set_treasury(e, admin, token, treasury)
    }

    /// Pause or unpause listings and bidding (admin only).
    /// Returns the new pause flag.
    pub fn toggle_pause(e: &Env, admin: Address) -> Result<bool, Error> {
        platform::toggle_pause(e, admin)
    }

    /// Remove the platform config and registry (admin only).
    /// Only safe once no auction depends on them.
    pub fn close_platform(e: &Env, admin: Address) -> Result<(), Error> {
        platform::close_platform(e, admin)
    }

    // ========================================================================
    // LISTING
    // ========================================================================

    /// Vault an item for the seller's next auction. Returns the nonce it is
    /// reserved under.
    pub fn deposit_item(e: &Env, seller: Address, item: Address, amount: i128) -> Result<u64, Error> {
        auction::deposit_item(e, seller, item, amount)
    }

    /// Hand back an item vaulted for a listing that was never created.
    /// Returns the amount returned.
    pub fn reclaim_item(e: &Env, seller: Address) -> Result<i128, Error> {
        auction::reclaim_item(e, seller)
    }

    /// Create an auction for the item vaulted under the seller's next nonce.
    ///
    /// # Arguments
    /// * `seller` - Seller listing the item
    /// * `item` - Token contract of the vaulted item
    /// * `accepted_token` - Payment token bids must use
    /// * `starting_bid` - The first bid must exceed this
    /// * `reserved_price` - Minimum winning bid for settlement
    /// * `start_date` / `end_date` - Bidding window, unix seconds
    /// * `authenticator` - Registered authenticator gating settlement, if any
    /// * `item_kind` - Kind of item
    ///
    /// # Returns
    /// * The auction's nonce
    pub fn create_auction(
        e: &Env,
        seller: Address,
        item: Address,
        accepted_token: Address,
        starting_bid: i128,
        reserved_price: i128,
        start_date: u64,
        end_date: u64,
        authenticator: Option<Address>,
        item_kind: ItemKind,
    ) -> Result<u64, Error> {
        auction::create_auction(
            e,
            seller,
            item,
            accepted_token,
            starting_bid,
            reserved_price,
            start_date,
            end_date,
            authenticator,
            item_kind,
        )
    }

    /// Close bidding once the end date has passed. Permissionless.
    pub fn end_auction(e: &Env, seller: Address, nonce: u64) -> Result<(), Error> {
        auction::end_auction(e, seller, nonce)
    }

    // ========================================================================
    // BIDDING
    // ========================================================================

    /// Place or top up a bid. Returns the bidder's cumulative total.
    pub fn place_bid(
        e: &Env,
        bidder: Address,
        seller: Address,
        nonce: u64,
        token: Address,
        amount: i128,
    ) -> Result<i128, Error> {
        bidding::place_bid(e, bidder, seller, nonce, token, amount)
    }

    /// Refund a non-winning bid after the auction has ended.
    /// Returns the refunded amount.
    pub fn withdraw_bid(e: &Env, bidder: Address, seller: Address, nonce: u64) -> Result<i128, Error> {
        bidding::withdraw_bid(e, bidder, seller, nonce)
    }

    // ========================================================================
    // SETTLEMENT
    // ========================================================================

    /// Settle an ended auction as its winner
    pub fn settle_auction(
        e: &Env,
        winner: Address,
        seller: Address,
        nonce: u64,
    ) -> Result<SettlementQuote, Error> {
        settlement::settle_auction(e, winner, seller, nonce)
    }

    /// Preview the proceeds split for the current highest bid
    pub fn quote_settlement(e: &Env, seller: Address, nonce: u64) -> Result<SettlementQuote, Error> {
        settlement::quote_settlement(e, seller, nonce)
    }

    // ========================================================================
    // AUTHENTICATION
    // ========================================================================

    /// Attach a verification report hash (assigned authenticator only)
    pub fn upload_auth_report(
        e: &Env,
        authenticator: Address,
        seller: Address,
        nonce: u64,
        report_hash: String,
    ) -> Result<(), Error> {
        authentication::upload_auth_report(e, authenticator, seller, nonce, report_hash)
    }

    /// Approve or reject the item (assigned authenticator only)
    pub fn attest_authentication(
        e: &Env,
        authenticator: Address,
        seller: Address,
        nonce: u64,
        approved: bool,
    ) -> Result<(), Error> {
        authentication::attest_authentication(e, authenticator, seller, nonce, approved)
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    pub fn get_config(e: &Env) -> Result<PlatformConfig, Error> {
        get_config(e).ok_or(Error::NotInitialized)
    }

    pub fn get_registry(e: &Env) -> Result<AuthenticatorsRegistry, Error> {
        get_registry(e).ok_or(Error::NotInitialized)
    }

    pub fn is_authenticator(e: &Env, identity: Address) -> bool {
        get_registry(e)
            .map(|registry| registry.authenticators.contains(&identity))
            .unwrap_or(false)
    }

    pub fn get_seller_state(e: &Env, seller: Address) -> SellerState {
        get_seller_state(e, &seller)
    }

    pub fn get_auction(e: &Env, seller: Address, nonce: u64) -> Result<Auction, Error> {
        auction::load_auction(e, &seller, nonce)
    }

    pub fn get_bid(e: &Env, bidder: Address, seller: Address, nonce: u64) -> Result<Bid, Error> {
        let auction_id = keys::auction_id(e, &seller, nonce);
        get_bid(e, &keys::bid_id(e, &bidder, &auction_id)).ok_or(Error::BidNotFound)
    }

    /// Escrowed balance for a bid; 0 once withdrawn or settled
    pub fn get_escrow_balance(e: &Env, bidder: Address, seller: Address, nonce: u64) -> i128 {
        let auction_id = keys::auction_id(e, &seller, nonce);
        get_escrow_vault(e, &keys::bid_id(e, &bidder, &auction_id))
            .map(|vault| vault.balance)
            .unwrap_or(0)
    }

    pub fn get_item_vault(e: &Env, seller: Address, nonce: u64) -> Result<ItemVault, Error> {
        get_item_vault(e, &keys::auction_id(e, &seller, nonce)).ok_or(Error::ItemNotVaulted)
    }

    pub fn get_authentication(e: &Env, seller: Address, nonce: u64) -> Result<Authentication, Error> {
        get_authentication(e, &keys::auction_id(e, &seller, nonce)).ok_or(Error::AuthNotPending)
    }

    /// Storage id of the auction at (seller, nonce)
    pub fn auction_id(e: &Env, seller: Address, nonce: u64) -> BytesN<32> {
        keys::auction_id(e, &seller, nonce)
    }

    /// Storage id of a bidder's bid on an auction
    pub fn bid_id(e: &Env, bidder: Address, auction_id: BytesN<32>) -> BytesN<32> {
        keys::bid_id(e, &bidder, &auction_id)
    }
}
