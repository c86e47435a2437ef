use soroban_sdk::{token, Address, Env};

use crate::auction::load_auction;
use crate::errors::Error;
use crate::events::*;
use crate::keys;
use crate::storage::*;
use crate::types::*;

/// Escrow `amount` more from `bidder` and make their cumulative total the
/// new highest bid.
///
/// The high-bid comparison, the escrow transfer and the auction update all
/// happen in this one invocation, so racing bidders are serialized on the
/// auction record.
///
/// # Returns
/// * The bidder's new cumulative total
pub fn place_bid(
    e: &Env,
    bidder: Address,
    seller: Address,
    nonce: u64,
    token: Address,
    amount: i128,
) -> Result<i128, Error> {
    bidder.require_auth();

    let config = get_config(e).ok_or(Error::NotInitialized)?;
    if config.is_paused {
        return Err(Error::PlatformPaused);
    }

    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }

    let mut auction = load_auction(e, &seller, nonce)?;

    if bidder == auction.seller {
        return Err(Error::SellerCannotBid);
    }

    let now = e.ledger().timestamp();
    if auction.effective_status(now) != AuctionStatus::Active {
        return Err(Error::AuctionNotAvailable);
    }

    if token != auction.accepted_token {
        return Err(Error::WrongToken);
    }

    let bid_id = keys::bid_id(e, &bidder, &auction.id);
    let existing = get_bid(e, &bid_id).filter(|bid| bid.is_active);
    let previous = existing.as_ref().map(|bid| bid.amount).unwrap_or(0);

    let new_total = previous
        .checked_add(amount)
        .ok_or(Error::ArithmeticOverflow)?;

    // First bid has to beat the starting bid, later ones the leader.
    let threshold = auction.highest_bid.max(auction.starting_bid);
    if new_total <= threshold {
        return Err(Error::BidTooLow);
    }

    let token_client = token::TokenClient::new(e, &token);
    token_client.transfer(&bidder, &e.current_contract_address(), &amount);

    let mut vault = get_escrow_vault(e, &bid_id).unwrap_or(EscrowVault {
        bid_id: bid_id.clone(),
        token: token.clone(),
        balance: 0,
    });
    vault.balance = vault
        .balance
        .checked_add(amount)
        .ok_or(Error::ArithmeticOverflow)?;
    set_escrow_vault(e, &vault);

    let bid = match existing {
        Some(mut bid) => {
            bid.amount = new_total;
            bid.timestamp = now;
            bid
        }
        None => Bid {
            id: bid_id,
            bidder: bidder.clone(),
            auction_id: auction.id.clone(),
            token,
            amount: new_total,
            timestamp: now,
            is_active: true,
            is_winner: false,
        },
    };
    set_bid(e, &bid);

    auction.auction_status = AuctionStatus::Active;
    auction.highest_bid = new_total;
    auction.highest_bidder = Some(bidder.clone());
    set_auction(e, &auction);

    BidPlacedEventData {
        bidder,
        auction_id: auction.id,
        amount,
        total: new_total,
        timestamp: now,
    }
    .publish(e);

    extend_instance_ttl(e);
    Ok(new_total)
}

/// Refund a bid's full escrow once the auction has closed.
///
/// # Errors
/// * `Error::StillWinning` - Auction still open, or caller leads an auction
///   that can still settle
/// * `Error::BidNotFound` - Caller never bid on this auction
/// * `Error::BidNotActive` - Bid already withdrawn or settled
pub fn withdraw_bid(e: &Env, bidder: Address, seller: Address, nonce: u64) -> Result<i128, Error> {
    bidder.require_auth();

    let auction = load_auction(e, &seller, nonce)?;

    if auction.auction_status < AuctionStatus::Ended {
        return Err(Error::StillWinning);
    }

    let bid_id = keys::bid_id(e, &bidder, &auction.id);
    let mut bid = get_bid(e, &bid_id).ok_or(Error::BidNotFound)?;
    if !bid.is_active {
        return Err(Error::BidNotActive);
    }

    // Settlement needs the platform config, so a closed platform frees the leader too.
    let is_leader = auction.highest_bidder.as_ref() == Some(&bidder);
    if is_leader
        && auction.auction_status == AuctionStatus::Ended
        && has_config(e)
        && auction.can_settle(get_registry(e).as_ref())
    {
        return Err(Error::StillWinning);
    }

    let vault = get_escrow_vault(e, &bid_id).ok_or(Error::BidNotActive)?;
    let refund = vault.balance;

    if refund > 0 {
        let token_client = token::TokenClient::new(e, &vault.token);
        token_client.transfer(&e.current_contract_address(), &bidder, &refund);
    }
    remove_escrow_vault(e, &bid_id);

    bid.amount = 0;
    bid.is_active = false;
    set_bid(e, &bid);

    BidWithdrawnEventData {
        bidder,
        auction_id: auction.id,
        amount: refund,
    }
    .publish(e);

    extend_instance_ttl(e);
    Ok(refund)
}
