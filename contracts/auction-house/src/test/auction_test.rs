use crate::test::{advance_ledger, setup_test, TestContext, RESERVED_PRICE, STARTING_BID};
use crate::{AuctionStatus, AuthStatus, Error, ItemKind};
use soroban_sdk::{testutils::Address as _, Address};

fn try_create(
    ctx: &TestContext,
    item: &Address,
    starting_bid: i128,
    reserved_price: i128,
    start_date: u64,
    end_date: u64,
) -> Result<u64, Error> {
    match ctx.client.try_create_auction(
        &ctx.seller,
        item,
        &ctx.token,
        &starting_bid,
        &reserved_price,
        &start_date,
        &end_date,
        &None,
        &ItemKind::DigitalNft,
    ) {
        Ok(Ok(nonce)) => Ok(nonce),
        Err(Ok(err)) => Err(err),
        _ => panic!("unexpected host error"),
    }
}

fn deposit(ctx: &TestContext) -> Address {
    let item = ctx.mint_item(&ctx.seller);
    ctx.client.deposit_item(&ctx.seller, &item, &1);
    item
}

#[test]
fn test_create_auction() {
    let ctx = setup_test();
    let listing = ctx.list(None, ItemKind::DigitalNft);
    assert_eq!(listing.nonce, 0);

    let auction = ctx.client.get_auction(&ctx.seller, &0);
    assert_eq!(auction.id, ctx.client.auction_id(&ctx.seller, &0));
    assert_eq!(auction.seller, ctx.seller);
    assert_eq!(auction.item, listing.item);
    assert_eq!(auction.accepted_token, ctx.token);
    assert_eq!(auction.starting_bid, STARTING_BID);
    assert_eq!(auction.reserved_price, RESERVED_PRICE);
    assert_eq!(auction.auction_status, AuctionStatus::Pending);
    assert_eq!(auction.auth_status, AuthStatus::NotRequired);
    assert_eq!(auction.highest_bid, 0);
    assert_eq!(auction.highest_bidder, None);
    assert!(auction.start_date < auction.end_date);
    assert!(auction.reserved_price >= auction.starting_bid);

    assert_eq!(ctx.client.get_seller_state(&ctx.seller).auction_count, 1);
}

#[test]
fn test_nonces_are_sequential_per_seller() {
    let ctx = setup_test();
    let first = ctx.list(None, ItemKind::DigitalNft);
    let second = ctx.list(None, ItemKind::DigitalNft);
    assert_eq!(first.nonce, 0);
    assert_eq!(second.nonce, 1);
    assert_ne!(
        ctx.client.auction_id(&ctx.seller, &0),
        ctx.client.auction_id(&ctx.seller, &1)
    );
    assert_eq!(ctx.client.get_seller_state(&ctx.seller).auction_count, 2);
}

#[test]
fn test_deposit_item_moves_item_into_custody() {
    let ctx = setup_test();
    let item = ctx.mint_item(&ctx.seller);

    let nonce = ctx.client.deposit_item(&ctx.seller, &item, &1);
    assert_eq!(nonce, 0);

    let vault = ctx.client.get_item_vault(&ctx.seller, &0);
    assert_eq!(vault.item, item);
    assert_eq!(vault.amount, 1);
    assert_eq!(vault.depositor, ctx.seller);

    let item_client = soroban_sdk::token::TokenClient::new(&ctx.env, &item);
    assert_eq!(item_client.balance(&ctx.seller), 0);
    assert_eq!(item_client.balance(&ctx.client.address), 1);
}

#[test]
fn test_deposit_item_twice_for_same_nonce_fails() {
    let ctx = setup_test();
    deposit(&ctx);
    let other = ctx.mint_item(&ctx.seller);
    assert_eq!(
        ctx.client.try_deposit_item(&ctx.seller, &other, &1),
        Err(Ok(Error::ItemAlreadyVaulted))
    );
    assert_eq!(
        ctx.client.try_deposit_item(&ctx.seller, &other, &0),
        Err(Ok(Error::InvalidAmount))
    );
}

#[test]
fn test_create_without_vaulted_item_fails() {
    let ctx = setup_test();
    let item = ctx.mint_item(&ctx.seller);
    let now = ctx.env.ledger().timestamp();
    let result = try_create(&ctx, &item, STARTING_BID, RESERVED_PRICE, now + 60, now + 3_660);
    assert_eq!(result, Err(Error::ItemNotVaulted));
}

#[test]
fn test_create_with_different_item_fails() {
    let ctx = setup_test();
    deposit(&ctx);
    let other = ctx.mint_item(&ctx.seller);
    let now = ctx.env.ledger().timestamp();
    let result = try_create(&ctx, &other, STARTING_BID, RESERVED_PRICE, now + 60, now + 3_660);
    assert_eq!(result, Err(Error::ItemMismatch));
}

#[test]
fn test_start_date_must_be_in_future() {
    let ctx = setup_test();
    let item = deposit(&ctx);
    let now = ctx.env.ledger().timestamp();
    let result = try_create(&ctx, &item, STARTING_BID, RESERVED_PRICE, now, now + 3_600);
    assert_eq!(result, Err(Error::StartDateIsBehind));
    assert_eq!(ctx.client.get_seller_state(&ctx.seller).auction_count, 0);
}

#[test]
fn test_end_date_must_follow_start_date() {
    let ctx = setup_test();
    let item = deposit(&ctx);
    let now = ctx.env.ledger().timestamp();
    let result = try_create(&ctx, &item, STARTING_BID, RESERVED_PRICE, now + 3_600, now + 3_600);
    assert_eq!(result, Err(Error::EndDateIsBehindStartDate));
    assert_eq!(
        ctx.client.try_get_auction(&ctx.seller, &0),
        Err(Ok(Error::AuctionNotFound))
    );
}

#[test]
fn test_duration_bounds() {
    let ctx = setup_test();
    let item = deposit(&ctx);
    let now = ctx.env.ledger().timestamp();

    let too_short = try_create(&ctx, &item, STARTING_BID, RESERVED_PRICE, now + 60, now + 90);
    assert_eq!(too_short, Err(Error::AuctionDurationOutOfBounds));

    let too_long = try_create(
        &ctx,
        &item,
        STARTING_BID,
        RESERVED_PRICE,
        now + 60,
        now + 60 + 8 * 86_400,
    );
    assert_eq!(too_long, Err(Error::AuctionDurationOutOfBounds));
}

#[test]
fn test_reserved_price_below_starting_bid_fails() {
    let ctx = setup_test();
    let item = deposit(&ctx);
    let now = ctx.env.ledger().timestamp();
    let result = try_create(&ctx, &item, 5_000_000, 1_000_000, now + 60, now + 3_660);
    assert_eq!(result, Err(Error::ReservedPriceTooLow));
}

#[test]
fn test_reserved_price_equal_to_starting_bid_is_allowed() {
    let ctx = setup_test();
    let item = deposit(&ctx);
    let now = ctx.env.ledger().timestamp();
    let result = try_create(&ctx, &item, 2_000_000, 2_000_000, now + 60, now + 3_660);
    assert_eq!(result, Ok(0));
}

#[test]
fn test_unknown_authenticator_fails() {
    let ctx = setup_test();
    let item = deposit(&ctx);
    let now = ctx.env.ledger().timestamp();
    let stranger = Address::generate(&ctx.env);
    let result = ctx.client.try_create_auction(
        &ctx.seller,
        &item,
        &ctx.token,
        &STARTING_BID,
        &RESERVED_PRICE,
        &(now + 60),
        &(now + 3_660),
        &Some(stranger),
        &ItemKind::DigitalNft,
    );
    assert_eq!(result, Err(Ok(Error::AuthenticatorNotRecognized)));
}

#[test]
fn test_physical_item_requires_authenticator() {
    let ctx = setup_test();
    let item = deposit(&ctx);
    let now = ctx.env.ledger().timestamp();
    let result = ctx.client.try_create_auction(
        &ctx.seller,
        &item,
        &ctx.token,
        &STARTING_BID,
        &RESERVED_PRICE,
        &(now + 60),
        &(now + 3_660),
        &None,
        &ItemKind::PhysicalRwa,
    );
    assert_eq!(result, Err(Ok(Error::AuthenticatorRequired)));
}

#[test]
fn test_token_without_treasury_fails() {
    let ctx = setup_test();
    let item = deposit(&ctx);
    let now = ctx.env.ledger().timestamp();
    let unknown_token = Address::generate(&ctx.env);
    let result = ctx.client.try_create_auction(
        &ctx.seller,
        &item,
        &unknown_token,
        &STARTING_BID,
        &RESERVED_PRICE,
        &(now + 60),
        &(now + 3_660),
        &None,
        &ItemKind::DigitalNft,
    );
    assert_eq!(result, Err(Ok(Error::InvalidTreasury)));
}

#[test]
fn test_create_with_authenticator_opens_authentication() {
    let ctx = setup_test();
    let listing = ctx.list(Some(ctx.authenticator.clone()), ItemKind::PhysicalRwa);

    let auction = ctx.client.get_auction(&ctx.seller, &listing.nonce);
    assert_eq!(auction.auth_status, AuthStatus::PendingAuth);
    assert_eq!(auction.authenticator, Some(ctx.authenticator.clone()));

    let authentication = ctx.client.get_authentication(&ctx.seller, &listing.nonce);
    assert_eq!(authentication.auction_id, auction.id);
    assert_eq!(authentication.authenticator, ctx.authenticator);
    assert_eq!(authentication.auth_status, AuthStatus::PendingAuth);
    assert!(!authentication.fee_paid);
}

#[test]
fn test_end_auction_before_end_date_fails() {
    let ctx = setup_test();
    let listing = ctx.list(None, ItemKind::DigitalNft);
    ctx.open(&listing);
    assert_eq!(
        ctx.client.try_end_auction(&ctx.seller, &listing.nonce),
        Err(Ok(Error::AuctionNotEnded))
    );
}

#[test]
fn test_end_auction_twice_fails() {
    let ctx = setup_test();
    let listing = ctx.list(None, ItemKind::DigitalNft);
    ctx.close(&listing);
    assert_eq!(
        ctx.client.get_auction(&ctx.seller, &listing.nonce).auction_status,
        AuctionStatus::Ended
    );

    advance_ledger(&ctx.env, 10);
    assert_eq!(
        ctx.client.try_end_auction(&ctx.seller, &listing.nonce),
        Err(Ok(Error::AuctionAlreadyEnded))
    );
}

#[test]
fn test_end_unknown_auction_fails() {
    let ctx = setup_test();
    assert_eq!(
        ctx.client.try_end_auction(&ctx.seller, &7),
        Err(Ok(Error::AuctionNotFound))
    );
}

#[test]
fn test_reclaim_unlisted_item() {
    let ctx = setup_test();
    let item = deposit(&ctx);

    assert_eq!(ctx.client.reclaim_item(&ctx.seller), 1);

    let item_client = soroban_sdk::token::TokenClient::new(&ctx.env, &item);
    assert_eq!(item_client.balance(&ctx.seller), 1);
    assert_eq!(item_client.balance(&ctx.client.address), 0);
    assert_eq!(
        ctx.client.try_get_item_vault(&ctx.seller, &0),
        Err(Ok(Error::ItemNotVaulted))
    );

    // The nonce is free for a fresh deposit.
    assert_eq!(ctx.client.deposit_item(&ctx.seller, &item, &1), 0);
}

#[test]
fn test_reclaim_listed_item_fails() {
    let ctx = setup_test();
    let listing = ctx.list(None, ItemKind::DigitalNft);

    assert_eq!(
        ctx.client.try_reclaim_item(&ctx.seller),
        Err(Ok(Error::ItemNotVaulted))
    );
    assert_eq!(ctx.item_balance(&listing, &ctx.client.address), 1);
}
