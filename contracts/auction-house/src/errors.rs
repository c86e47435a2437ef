use soroban_sdk::contracterror;

/// Error codes for the auction house contract.
///
/// Codes are grouped by hundreds: setup, input/timing, economic validation,
/// state machine, authorization, uniqueness, authentication.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Platform has already been initialized
    AlreadyInitialized = 1,
    /// Platform has not been initialized
    NotInitialized = 2,

    /// Start date is not in the future
    StartDateIsBehind = 100,
    /// End date is not after the start date
    EndDateIsBehindStartDate = 101,
    /// Auction length is outside the configured bounds
    AuctionDurationOutOfBounds = 102,
    /// Configured duration bounds are not 0 < min < max
    InvalidDurationBounds = 103,
    /// Amount must be positive
    InvalidAmount = 104,

    /// Reserve price is lower than the starting bid
    ReservedPriceTooLow = 200,
    /// Bid does not beat the current highest bid
    BidTooLow = 201,
    /// Payment token differs from the auction's accepted token
    WrongToken = 202,
    /// Highest bid is below the reserve price
    ReserveNotMet = 203,
    /// Fee rate above 10000 bps
    FeeTooHigh = 204,
    /// No treasury configured for the payment token
    InvalidTreasury = 205,
    /// Fee or balance arithmetic overflowed
    ArithmeticOverflow = 206,

    /// No auction under the derived id
    AuctionNotFound = 300,
    /// Auction is not accepting bids
    AuctionNotAvailable = 301,
    /// Auction has not ended
    AuctionNotEnded = 302,
    /// Auction already ended or settled
    AuctionAlreadyEnded = 303,
    /// Platform is paused
    PlatformPaused = 304,
    /// No bid under the derived id
    BidNotFound = 305,
    /// Bid was already settled or withdrawn
    BidNotActive = 306,
    /// Item has not been deposited for this auction
    ItemNotVaulted = 307,
    /// An item is already deposited for the seller's next auction
    ItemAlreadyVaulted = 308,
    /// Deposited item differs from the listed one
    ItemMismatch = 309,

    /// Only the platform admin may do this
    ExclusiveToAdmin = 400,
    /// Caller is not the highest bidder
    NotWinner = 401,
    /// Admin may not be an authenticator
    AdminCannotBeAuthenticator = 402,
    /// Seller may not bid on their own auction
    SellerCannotBid = 403,
    /// Authenticator is not in the registry
    AuthenticatorNotRecognized = 404,
    /// Authenticator is not the one assigned to this auction
    UnauthorizedAuthenticator = 405,

    /// Authenticator already registered
    AlreadyRegistered = 500,
    /// Highest bidder cannot withdraw while the auction can still settle
    StillWinning = 501,
    /// Authenticator is not registered
    AuthenticatorNotInRegistry = 502,
    /// Registry is at capacity
    RegistryFull = 503,

    /// Item kind needs an authenticator
    AuthenticatorRequired = 600,
    /// Auction is not awaiting authentication
    AuthNotPending = 601,
    /// Verdict given before a report was uploaded
    ReportNotUploaded = 602,
    /// Report hash is empty
    InvalidReport = 603,
    /// Authentication verdict still outstanding
    AuthenticationPending = 604,
    /// Authenticator rejected the item
    AuthenticationRejected = 605,
}
