use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    InvalidConfig = 4,
    InvalidStep = 5,
    ReservationClosed = 6,
    InsufficientPayment = 7,
    AlreadyReserved = 8,
    CapacityExceeded = 9,
    SaleClosed = 10,
    NonexistentId = 11,
    ProofInvalid = 12,
}
