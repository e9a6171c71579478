use soroban_sdk::contracterror;

/// Error codes for the dual-pool prediction market contract.
///
/// Codes are grouped by category so that off-chain callers can route them
/// without matching on every variant:
///
/// - **100-199** authorization and initialization
/// - **200-299** prediction state preconditions
/// - **300-399** value errors (amounts, positions, claims, batches)
/// - **400-499** system errors
///
/// Every public entry point returns `Result<T, Error>`. Returning an error
/// aborts the invocation and rolls back all storage writes and token
/// transfers made during it.
///
/// # Example Usage
///
/// ```rust
/// # use dual_pool_market::errors::Error;
/// let error = Error::BelowMinimumBet;
/// assert_eq!(error.description(), "Below minimum bet");
/// assert_eq!(error.code(), "BELOW_MINIMUM_BET");
/// assert_eq!(error as u32, 300);
/// ```
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ===== AUTHORIZATION ERRORS =====
    /// Caller is not the contract owner
    NotOwner = 100,
    /// Caller does not hold the resolver role
    NotResolver = 101,
    /// Caller is not the pending owner
    NotPendingOwner = 102,
    /// Contract has already been initialized
    AlreadyInitialized = 103,
    /// Contract has not been initialized
    NotInitialized = 104,

    // ===== STATE ERRORS =====
    /// Prediction id has never been registered
    NotRegistered = 200,
    /// Prediction id is already registered
    AlreadyRegistered = 201,
    /// Prediction is already resolved
    AlreadyResolved = 202,
    /// Prediction is already cancelled
    AlreadyCancelled = 203,
    /// Prediction is not resolved yet
    NotResolved = 204,
    /// Prediction is not cancelled
    NotCancelled = 205,

    // ===== VALUE ERRORS =====
    /// Bet amount is below the minimum bet
    BelowMinimumBet = 300,
    /// Amount is zero or negative
    InvalidAmount = 301,
    /// Position is smaller than the requested amount
    InsufficientPosition = 302,
    /// Caller holds no stake on the winning side
    NoWinningPosition = 303,
    /// Winnings or refund already claimed
    AlreadyClaimed = 304,
    /// Caller holds no stake to refund
    NothingToRefund = 305,
    /// Exit would pay out nothing at current pool ratios
    ExitValueTooLow = 306,
    /// Batch arrays differ in length
    BatchLengthMismatch = 307,
    /// Batch is empty or larger than the maximum batch size
    InvalidBatchSize = 308,
    /// Platform fee balance is zero
    NoFeesToWithdraw = 309,

    // ===== SYSTEM ERRORS =====
    /// Checked arithmetic overflowed or underflowed
    ArithmeticOverflow = 400,
    /// A guarded call was re-entered while an outbound transfer was in flight
    ReentrantCall = 401,
}

impl Error {
    /// Human-readable revert reason.
    pub fn description(&self) -> &'static str {
        match self {
            Error::NotOwner => "Not owner",
            Error::NotResolver => "Not resolver",
            Error::NotPendingOwner => "Not pending owner",
            Error::AlreadyInitialized => "Already initialized",
            Error::NotInitialized => "Not initialized",
            Error::NotRegistered => "Prediction not registered",
            Error::AlreadyRegistered => "Already registered",
            Error::AlreadyResolved => "Already resolved",
            Error::AlreadyCancelled => "Already cancelled",
            Error::NotResolved => "Not resolved",
            Error::NotCancelled => "Not cancelled",
            Error::BelowMinimumBet => "Below minimum bet",
            Error::InvalidAmount => "Invalid amount",
            Error::InsufficientPosition => "Insufficient position",
            Error::NoWinningPosition => "No winning position",
            Error::AlreadyClaimed => "Already claimed",
            Error::NothingToRefund => "Nothing to refund",
            Error::ExitValueTooLow => "Exit value too low",
            Error::BatchLengthMismatch => "Array length mismatch",
            Error::InvalidBatchSize => "Invalid batch size",
            Error::NoFeesToWithdraw => "No fees to withdraw",
            Error::ArithmeticOverflow => "Arithmetic overflow",
            Error::ReentrantCall => "Reentrant call",
        }
    }

    /// Stable string identifier, suitable for structured logs and API payloads.
    pub fn code(&self) -> &'static str {
        match self {
            Error::NotOwner => "NOT_OWNER",
            Error::NotResolver => "NOT_RESOLVER",
            Error::NotPendingOwner => "NOT_PENDING_OWNER",
            Error::AlreadyInitialized => "ALREADY_INITIALIZED",
            Error::NotInitialized => "NOT_INITIALIZED",
            Error::NotRegistered => "NOT_REGISTERED",
            Error::AlreadyRegistered => "ALREADY_REGISTERED",
            Error::AlreadyResolved => "ALREADY_RESOLVED",
            Error::AlreadyCancelled => "ALREADY_CANCELLED",
            Error::NotResolved => "NOT_RESOLVED",
            Error::NotCancelled => "NOT_CANCELLED",
            Error::BelowMinimumBet => "BELOW_MINIMUM_BET",
            Error::InvalidAmount => "INVALID_AMOUNT",
            Error::InsufficientPosition => "INSUFFICIENT_POSITION",
            Error::NoWinningPosition => "NO_WINNING_POSITION",
            Error::AlreadyClaimed => "ALREADY_CLAIMED",
            Error::NothingToRefund => "NOTHING_TO_REFUND",
            Error::ExitValueTooLow => "EXIT_VALUE_TOO_LOW",
            Error::BatchLengthMismatch => "BATCH_LENGTH_MISMATCH",
            Error::InvalidBatchSize => "INVALID_BATCH_SIZE",
            Error::NoFeesToWithdraw => "NO_FEES_TO_WITHDRAW",
            Error::ArithmeticOverflow => "ARITHMETIC_OVERFLOW",
            Error::ReentrantCall => "REENTRANT_CALL",
        }
    }
}
