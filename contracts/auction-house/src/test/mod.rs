pub mod auction_test;

use crate::{AuctionHouse, AuctionHouseClient, ItemKind};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, vec, Address, Env, Map,
};

pub const PLATFORM_FEE_BPS: u32 = 250;
pub const AUTH_FEE_BPS: u32 = 100;
pub const MIN_DURATION: u64 = 60;
pub const MAX_DURATION: u64 = 7 * 86_400;
pub const STARTING_BID: i128 = 1_000_000;
pub const RESERVED_PRICE: i128 = 5_000_000;
pub const GENESIS: u64 = 1_000_000;
pub const BIDDER_FUNDS: i128 = 100_000_000;

pub struct TestContext {
    pub env: Env,
    pub client: AuctionHouseClient<'static>,
    pub admin: Address,
    pub treasury: Address,
    pub seller: Address,
    pub authenticator: Address,
    pub token: Address,
    pub token_client: token::TokenClient<'static>,
    pub token_admin: token::StellarAssetClient<'static>,
}

/// An item listed by `TestContext::list`
pub struct Listing {
    pub nonce: u64,
    pub item: Address,
    pub start_date: u64,
    pub end_date: u64,
}

pub fn set_timestamp(env: &Env, timestamp: u64) {
    env.ledger().set_timestamp(timestamp);
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    let now = env.ledger().timestamp();
    env.ledger().set_timestamp(now + seconds);
}

/// Contract registered, platform not initialized.
pub fn setup_uninitialized() -> TestContext {
    let env = Env::default();
    env.mock_all_auths();
    set_timestamp(&env, GENESIS);

    let contract_id = env.register(AuctionHouse, ());
    let client = AuctionHouseClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let treasury = Address::generate(&env);
    let seller = Address::generate(&env);
    let authenticator = Address::generate(&env);

    let token_issuer = Address::generate(&env);
    let token = env
        .register_stellar_asset_contract_v2(token_issuer)
        .address();
    let token_client = token::TokenClient::new(&env, &token);
    let token_admin = token::StellarAssetClient::new(&env, &token);

    TestContext {
        env,
        client,
        admin,
        treasury,
        seller,
        authenticator,
        token,
        token_client,
        token_admin,
    }
}

/// Initialized platform: one payment token with a treasury and one
/// registered authenticator.
pub fn setup_test() -> TestContext {
    let ctx = setup_uninitialized();

    let mut treasuries = Map::new(&ctx.env);
    treasuries.set(ctx.token.clone(), ctx.treasury.clone());

    ctx.client.initialize(
        &ctx.admin,
        &PLATFORM_FEE_BPS,
        &AUTH_FEE_BPS,
        &MIN_DURATION,
        &MAX_DURATION,
        &treasuries,
        &vec![&ctx.env, ctx.authenticator.clone()],
    );

    ctx
}

impl TestContext {
    /// New single-unit item owned by `owner`.
    pub fn mint_item(&self, owner: &Address) -> Address {
        let issuer = Address::generate(&self.env);
        let item = self
            .env
            .register_stellar_asset_contract_v2(issuer)
            .address();
        token::StellarAssetClient::new(&self.env, &item).mint(owner, &1);
        item
    }

    /// New bidder holding `BIDDER_FUNDS` of the payment token.
    pub fn funded_bidder(&self) -> Address {
        let bidder = Address::generate(&self.env);
        self.token_admin.mint(&bidder, &BIDDER_FUNDS);
        bidder
    }

    /// Vault a fresh item and list it with the default prices, opening a
    /// minute from now for a day.
    pub fn list(&self, authenticator: Option<Address>, item_kind: ItemKind) -> Listing {
        self.list_with_prices(STARTING_BID, RESERVED_PRICE, authenticator, item_kind)
    }

    pub fn list_with_prices(
        &self,
        starting_bid: i128,
        reserved_price: i128,
        authenticator: Option<Address>,
        item_kind: ItemKind,
    ) -> Listing {
        let item = self.mint_item(&self.seller);
        self.client.deposit_item(&self.seller, &item, &1);

        let start_date = self.env.ledger().timestamp() + 60;
        let end_date = start_date + 86_400;
        let nonce = self.client.create_auction(
            &self.seller,
            &item,
            &self.token,
            &starting_bid,
            &reserved_price,
            &start_date,
            &end_date,
            &authenticator,
            &item_kind,
        );

        Listing {
            nonce,
            item,
            start_date,
            end_date,
        }
    }

    /// Move the clock to the listing's start date.
    pub fn open(&self, listing: &Listing) {
        set_timestamp(&self.env, listing.start_date);
    }

    /// Move the clock to the listing's end date and record the close.
    pub fn close(&self, listing: &Listing) {
        set_timestamp(&self.env, listing.end_date);
        self.client.end_auction(&self.seller, &listing.nonce);
    }

    pub fn bid(&self, bidder: &Address, listing: &Listing, amount: i128) -> i128 {
        self.client
            .place_bid(bidder, &self.seller, &listing.nonce, &self.token, &amount)
    }

    pub fn escrow_of(&self, bidder: &Address, listing: &Listing) -> i128 {
        self.client
            .get_escrow_balance(bidder, &self.seller, &listing.nonce)
    }

    pub fn item_balance(&self, listing: &Listing, owner: &Address) -> i128 {
        token::TokenClient::new(&self.env, &listing.item).balance(owner)
    }
}
