use soroban_sdk::{token, Address, Env, String};

use crate::errors::Error;
use crate::events::*;
use crate::keys;
use crate::storage::*;
use crate::types::*;

impl Auction {
    /// Status as of `now`, applying the transitions the stored record has
    /// not caught up with yet. Nothing is written.
    pub fn effective_status(&self, now: u64) -> AuctionStatus {
        match self.auction_status {
            AuctionStatus::Pending | AuctionStatus::Active if now >= self.end_date => {
                AuctionStatus::Ended
            }
            AuctionStatus::Pending if now >= self.start_date => AuctionStatus::Active,
            status => status,
        }
    }

    /// Whether the highest bid could still be settled once the auction has ended.
    /// A pending verdict only counts while its authenticator is still registered.
    pub fn can_settle(&self, registry: Option<&AuthenticatorsRegistry>) -> bool {
        if self.highest_bidder.is_none() || self.highest_bid < self.reserved_price {
            return false;
        }
        match self.auth_status {
            AuthStatus::NotRequired | AuthStatus::Approved => true,
            AuthStatus::Rejected => false,
            AuthStatus::PendingAuth => match (&self.authenticator, registry) {
                (Some(authenticator), Some(registry)) => {
                    registry.authenticators.contains(authenticator)
                }
                _ => false,
            },
        }
    }
}

pub fn load_auction(e: &Env, seller: &Address, nonce: u64) -> Result<Auction, Error> {
    let auction_id = keys::auction_id(e, seller, nonce);
    get_auction(e, &auction_id).ok_or(Error::AuctionNotFound)
}

/// Move the item into custody for the seller's next auction.
///
/// # Returns
/// * The nonce the vault is reserved under
pub fn deposit_item(e: &Env, seller: Address, item: Address, amount: i128) -> Result<u64, Error> {
    seller.require_auth();

    let config = get_config(e).ok_or(Error::NotInitialized)?;
    if config.is_paused {
        return Err(Error::PlatformPaused);
    }

    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }

    let nonce = get_seller_state(e, &seller).auction_count;
    let auction_id = keys::auction_id(e, &seller, nonce);
    if has_item_vault(e, &auction_id) {
        return Err(Error::ItemAlreadyVaulted);
    }

    let item_client = token::TokenClient::new(e, &item);
    item_client.transfer(&seller, &e.current_contract_address(), &amount);

    set_item_vault(
        e,
        &ItemVault {
            auction_id: auction_id.clone(),
            item: item.clone(),
            amount,
            depositor: seller.clone(),
        },
    );

    ItemDepositedEventData {
        seller,
        auction_id,
        item,
        amount,
    }
    .publish(e);

    extend_instance_ttl(e);
    Ok(nonce)
}

/// Return a vaulted item that was never listed. Only the vault under the
/// seller's next nonce can be unlisted, since `create_auction` consumes it.
///
/// # Returns
/// * The amount handed back
pub fn reclaim_item(e: &Env, seller: Address) -> Result<i128, Error> {
    seller.require_auth();

    let nonce = get_seller_state(e, &seller).auction_count;
    let auction_id = keys::auction_id(e, &seller, nonce);
    let vault = get_item_vault(e, &auction_id).ok_or(Error::ItemNotVaulted)?;

    let item_client = token::TokenClient::new(e, &vault.item);
    item_client.transfer(&e.current_contract_address(), &vault.depositor, &vault.amount);
    remove_item_vault(e, &auction_id);

    ItemReclaimedEventData {
        seller,
        auction_id,
        item: vault.item,
        amount: vault.amount,
    }
    .publish(e);

    extend_instance_ttl(e);
    Ok(vault.amount)
}

/// List a vaulted item.
///
/// Checks run in a fixed order so each failure maps to one error:
/// start date, end date, duration bounds, reserve, authenticator.
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
    seller.require_auth();

    let config = get_config(e).ok_or(Error::NotInitialized)?;
    if config.is_paused {
        return Err(Error::PlatformPaused);
    }

    let now = e.ledger().timestamp();

    if start_date <= now {
        return Err(Error::StartDateIsBehind);
    }

    if end_date <= start_date {
        return Err(Error::EndDateIsBehindStartDate);
    }

    let duration = end_date - start_date;
    if duration < config.min_auction_duration || duration > config.max_auction_duration {
        return Err(Error::AuctionDurationOutOfBounds);
    }

    if reserved_price < starting_bid {
        return Err(Error::ReservedPriceTooLow);
    }

    if starting_bid < 0 {
        return Err(Error::InvalidAmount);
    }

    if let Some(candidate) = &authenticator {
        let registry = get_registry(e).ok_or(Error::NotInitialized)?;
        if !registry.authenticators.contains(candidate) {
            return Err(Error::AuthenticatorNotRecognized);
        }
    } else if item_kind == ItemKind::PhysicalRwa {
        return Err(Error::AuthenticatorRequired);
    }

    if !config.treasuries.contains_key(accepted_token.clone()) {
        return Err(Error::InvalidTreasury);
    }

    let mut seller_state = get_seller_state(e, &seller);
    let nonce = seller_state.auction_count;
    let auction_id = keys::auction_id(e, &seller, nonce);

    let vault = get_item_vault(e, &auction_id).ok_or(Error::ItemNotVaulted)?;
    if vault.item != item {
        return Err(Error::ItemMismatch);
    }

    let auth_status = match authenticator {
        Some(_) => AuthStatus::PendingAuth,
        None => AuthStatus::NotRequired,
    };

    let auction = Auction {
        id: auction_id.clone(),
        seller: seller.clone(),
        nonce,
        item,
        item_kind,
        accepted_token,
        starting_bid,
        reserved_price,
        start_date,
        end_date,
        auction_status: AuctionStatus::Pending,
        auth_status,
        authenticator: authenticator.clone(),
        highest_bid: 0,
        highest_bidder: None,
        created_at: now,
    };
    set_auction(e, &auction);

    if let Some(authenticator) = authenticator {
        set_authentication(
            e,
            &Authentication {
                auction_id: auction_id.clone(),
                authenticator,
                seller: seller.clone(),
                auth_status,
                report_hash: String::from_str(e, ""),
                uploaded_at: 0,
                verified_at: 0,
                fee_amount: 0,
                fee_paid: false,
            },
        );
    }

    seller_state.auction_count = nonce.checked_add(1).ok_or(Error::ArithmeticOverflow)?;
    set_seller_state(e, &seller_state);

    AuctionCreatedEventData {
        seller,
        auction_id,
        nonce,
        item_kind,
        timestamp: now,
    }
    .publish(e);

    extend_instance_ttl(e);
    Ok(nonce)
}

/// Record the close of an auction. Anyone may call this once the end date
/// has passed; a second call fails.
pub fn end_auction(e: &Env, seller: Address, nonce: u64) -> Result<(), Error> {
    let mut auction = load_auction(e, &seller, nonce)?;

    if auction.auction_status >= AuctionStatus::Ended {
        return Err(Error::AuctionAlreadyEnded);
    }

    if e.ledger().timestamp() < auction.end_date {
        return Err(Error::AuctionNotEnded);
    }

    auction.auction_status = AuctionStatus::Ended;
    set_auction(e, &auction);

    AuctionEndedEventData {
        auction_id: auction.id.clone(),
        highest_bidder: auction.highest_bidder.clone(),
        highest_bid: auction.highest_bid,
        reserve_met: auction.highest_bidder.is_some()
            && auction.highest_bid >= auction.reserved_price,
    }
    .publish(e);

    extend_instance_ttl(e);
    Ok(())
}
