use soroban_sdk::{contracttype, Address};

/// Highest step the administrator may select. Steps past the sale window are
/// treated as ended.
pub const MAX_STEP: u32 = 7;

/// Step that opens whitelist reservations.
pub const RESERVATION_STEP: u32 = 1;

/// First and last steps of the proof-gated sale window.
pub const FIRST_SALE_STEP: u32 = 2;
pub const LAST_SALE_STEP: u32 = 6;

/// Sale parameters fixed at initialization.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleConfig {
    /// Receives `mint` calls once all guards pass.
    pub token_ledger: Address,
    /// Answers `verify` for mint proofs.
    pub membership_oracle: Address,
    /// Asset reservation fees are paid in.
    pub payment_token: Address,
    /// Minimum payment for a whitelist slot.
    pub reservation_price: i128,
    pub max_reservations: u32,
    /// Valid ids are `1..=max_token_id`.
    pub max_token_id: u32,
    /// Units of `id` minted per successful call.
    pub mint_amount: i128,
}

/// Coarse classification of a sale step.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum SaleStage {
    NotStarted,
    WhitelistReservation,
    SaleOpen,
    Ended,
}

#[contracttype]
pub enum DataKey {
    Admin,
    Config,
    Step,
    ReservationCount,
    Reservation(Address),
}
