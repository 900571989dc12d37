use crate::errors::Error;
use crate::types::{SaleStage, FIRST_SALE_STEP, LAST_SALE_STEP, MAX_STEP, RESERVATION_STEP};

/// Maps a raw step to its stage. Steps 2 through 6 are interchangeable.
pub fn stage_of(step: u32) -> SaleStage {
    match step {
        0 => SaleStage::NotStarted,
        RESERVATION_STEP => SaleStage::WhitelistReservation,
        FIRST_SALE_STEP..=LAST_SALE_STEP => SaleStage::SaleOpen,
        _ => SaleStage::Ended,
    }
}

pub fn validate_step(step: u32) -> Result<(), Error> {
    if step > MAX_STEP {
        return Err(Error::InvalidStep);
    }
    Ok(())
}

pub fn require_reservation_open(step: u32) -> Result<(), Error> {
    match stage_of(step) {
        SaleStage::WhitelistReservation => Ok(()),
        _ => Err(Error::ReservationClosed),
    }
}

pub fn require_sale_open(step: u32) -> Result<(), Error> {
    match stage_of(step) {
        SaleStage::SaleOpen => Ok(()),
        _ => Err(Error::SaleClosed),
    }
}
