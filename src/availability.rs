use crate::catalog::Catalog;
use crate::hotel::HotelId;
use crate::night::Stay;
use crate::occupancy::Occupancy;

/// Hotels that can take one more booking for the whole stay: every night of
/// the range must have strictly fewer reserved rooms than the hotel has in
/// total. Returned in ascending lexicographic order.
pub fn available(stay: &Stay, catalog: &Catalog, occupancy: &Occupancy) -> Vec<HotelId> {
    let mut free: Vec<HotelId> = catalog
        .hotels()
        .filter(|hotel| {
            stay.nights()
                .all(|night| occupancy.count(&hotel.id, night) < hotel.rooms)
        })
        .map(|hotel| hotel.id.clone())
        .collect();
    free.sort();
    free
}
