use crate::hotel::HotelId;
use crate::night::{DateRangeError, Night, Stay};

/// One reservation row: a hotel plus the half-open stay it occupies.
#[derive(Clone, Debug, PartialEq)]
pub struct Booking {
    pub hotel_id: HotelId,
    pub stay: Stay,
}

impl Booking {
    pub fn new(
        hotel_id: HotelId,
        check_in: Night,
        check_out: Night,
    ) -> Result<Booking, DateRangeError> {
        Ok(Booking {
            hotel_id,
            stay: Stay::new(check_in, check_out)?,
        })
    }
}
