use soroban_sdk::{Address, BytesN, Env};

use crate::types::{
    Auction, Authentication, AuthenticatorsRegistry, Bid, EscrowVault, ItemVault, PlatformConfig,
    SellerState, StorageKey, INSTANCE_TTL_AMOUNT, INSTANCE_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT,
    PERSISTENT_TTL_THRESHOLD,
};

/// Extend the TTL of instance storage.
/// Called during state-changing operations.
pub fn extend_instance_ttl(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

fn bump_persistent(e: &Env, key: &StorageKey) {
    e.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ============================================================================
// PLATFORM CONFIG STORAGE
// ============================================================================

pub fn has_config(e: &Env) -> bool {
    e.storage().instance().has(&StorageKey::PlatformConfig)
}

pub fn get_config(e: &Env) -> Option<PlatformConfig> {
    e.storage().instance().get(&StorageKey::PlatformConfig)
}

pub fn set_config(e: &Env, config: &PlatformConfig) {
    e.storage()
        .instance()
        .set(&StorageKey::PlatformConfig, config);
}

pub fn remove_config(e: &Env) {
    e.storage().instance().remove(&StorageKey::PlatformConfig);
}

// ============================================================================
// AUTHENTICATORS REGISTRY STORAGE
// ============================================================================

pub fn get_registry(e: &Env) -> Option<AuthenticatorsRegistry> {
    e.storage().instance().get(&StorageKey::Registry)
}

pub fn set_registry(e: &Env, registry: &AuthenticatorsRegistry) {
    e.storage().instance().set(&StorageKey::Registry, registry);
}

pub fn remove_registry(e: &Env) {
    e.storage().instance().remove(&StorageKey::Registry);
}

// ============================================================================
// SELLER STATE STORAGE
// ============================================================================

/// Seller counter, starting at zero for sellers never seen before
pub fn get_seller_state(e: &Env, seller: &Address) -> SellerState {
    let key = StorageKey::SellerState(seller.clone());
    match e.storage().persistent().get::<_, SellerState>(&key) {
        Some(state) => {
            bump_persistent(e, &key);
            state
        }
        None => SellerState {
            seller: seller.clone(),
            auction_count: 0,
        },
    }
}

pub fn set_seller_state(e: &Env, state: &SellerState) {
    let key = StorageKey::SellerState(state.seller.clone());
    e.storage().persistent().set(&key, state);
    bump_persistent(e, &key);
}

// ============================================================================
// AUCTION STORAGE
// ============================================================================

pub fn get_auction(e: &Env, auction_id: &BytesN<32>) -> Option<Auction> {
    let key = StorageKey::Auction(auction_id.clone());
    let auction = e.storage().persistent().get::<_, Auction>(&key);
    if auction.is_some() {
        bump_persistent(e, &key);
    }
    auction
}

pub fn set_auction(e: &Env, auction: &Auction) {
    let key = StorageKey::Auction(auction.id.clone());
    e.storage().persistent().set(&key, auction);
    bump_persistent(e, &key);
}

// ============================================================================
// ITEM VAULT STORAGE
// ============================================================================

pub fn has_item_vault(e: &Env, auction_id: &BytesN<32>) -> bool {
    e.storage()
        .persistent()
        .has(&StorageKey::ItemVault(auction_id.clone()))
}

pub fn get_item_vault(e: &Env, auction_id: &BytesN<32>) -> Option<ItemVault> {
    let key = StorageKey::ItemVault(auction_id.clone());
    let vault = e.storage().persistent().get::<_, ItemVault>(&key);
    if vault.is_some() {
        bump_persistent(e, &key);
    }
    vault
}

pub fn set_item_vault(e: &Env, vault: &ItemVault) {
    let key = StorageKey::ItemVault(vault.auction_id.clone());
    e.storage().persistent().set(&key, vault);
    bump_persistent(e, &key);
}

pub fn remove_item_vault(e: &Env, auction_id: &BytesN<32>) {
    e.storage()
        .persistent()
        .remove(&StorageKey::ItemVault(auction_id.clone()));
}

// ============================================================================
// BID STORAGE
// ============================================================================

pub fn get_bid(e: &Env, bid_id: &BytesN<32>) -> Option<Bid> {
    let key = StorageKey::Bid(bid_id.clone());
    let bid = e.storage().persistent().get::<_, Bid>(&key);
    if bid.is_some() {
        bump_persistent(e, &key);
    }
    bid
}

pub fn set_bid(e: &Env, bid: &Bid) {
    let key = StorageKey::Bid(bid.id.clone());
    e.storage().persistent().set(&key, bid);
    bump_persistent(e, &key);
}

// ============================================================================
// ESCROW VAULT STORAGE
// ============================================================================

pub fn get_escrow_vault(e: &Env, bid_id: &BytesN<32>) -> Option<EscrowVault> {
    let key = StorageKey::EscrowVault(bid_id.clone());
    let vault = e.storage().persistent().get::<_, EscrowVault>(&key);
    if vault.is_some() {
        bump_persistent(e, &key);
    }
    vault
}

pub fn set_escrow_vault(e: &Env, vault: &EscrowVault) {
    let key = StorageKey::EscrowVault(vault.bid_id.clone());
    e.storage().persistent().set(&key, vault);
    bump_persistent(e, &key);
}

pub fn remove_escrow_vault(e: &Env, bid_id: &BytesN<32>) {
    e.storage()
        .persistent()
        .remove(&StorageKey::EscrowVault(bid_id.clone()));
}

// ============================================================================
// AUTHENTICATION STORAGE
// ============================================================================

pub fn get_authentication(e: &Env, auction_id: &BytesN<32>) -> Option<Authentication> {
    let key = StorageKey::Authentication(auction_id.clone());
    let authentication = e.storage().persistent().get::<_, Authentication>(&key);
    if authentication.is_some() {
        bump_persistent(e, &key);
    }
    authentication
}

pub fn set_authentication(e: &Env, authentication: &Authentication) {
    let key = StorageKey::Authentication(authentication.auction_id.clone());
    e.storage().persistent().set(&key, authentication);
    bump_persistent(e, &key);
}
