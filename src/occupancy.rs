use crate::booking::Booking;
use crate::catalog::Catalog;
use crate::error::{LoadError, RowError};
use crate::hotel::HotelId;
use crate::night::Night;
use crate::rows;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Per-hotel, per-night reserved-room counts, folded from the booking
/// ledger. A hotel absent from the index has zero reservations on every
/// night. Built once and read-only afterwards.
#[derive(Debug, Default, PartialEq)]
pub struct Occupancy {
    reserved: HashMap<HotelId, HashMap<Night, u32>>,
}

impl Occupancy {
    pub fn new() -> Occupancy {
        Occupancy::default()
    }

    pub fn load_from_file(path: &Path, catalog: &Catalog) -> Result<Occupancy, LoadError> {
        let text = rows::read(path)?;
        Occupancy::parse(&path.display().to_string(), &text, catalog)
    }

    /// Parses `hotel,checkin,checkout` rows after the header line and folds
    /// them in. The first bad row aborts the whole load; the partially-built
    /// index is dropped with it, so later stages never see partial state.
    pub fn parse(file: &str, text: &str, catalog: &Catalog) -> Result<Occupancy, LoadError> {
        let mut occupancy = Occupancy::new();
        for (line, row) in rows::data_rows(text) {
            parse_booking(row)
                .and_then(|booking| occupancy.ingest(&booking, catalog))
                .map_err(|source| LoadError::Row {
                    file: file.to_string(),
                    line,
                    source,
                })?;
        }
        Ok(occupancy)
    }

    /// Folds one reservation into the counters: +1 for every night the stay
    /// covers. Duplicate rows accumulate; there is no deduplication. A hotel
    /// missing from the catalog rejects the row.
    pub fn ingest(&mut self, booking: &Booking, catalog: &Catalog) -> Result<(), RowError> {
        if !catalog.contains(&booking.hotel_id) {
            return Err(RowError::UnknownHotel(booking.hotel_id.to_string()));
        }
        let per_night = self.reserved.entry(booking.hotel_id.clone()).or_default();
        for night in booking.stay.nights() {
            *per_night.entry(night).or_insert(0) += 1;
        }
        Ok(())
    }

    /// Reserved rooms for a hotel on a night; unrecorded nights count as 0.
    pub fn count(&self, hotel: &str, night: Night) -> u32 {
        self.reserved
            .get(hotel)
            .and_then(|nights| nights.get(&night))
            .copied()
            .unwrap_or(0)
    }
}

fn parse_booking(row: &str) -> Result<Booking, RowError> {
    let fields = rows::fields(row, 3)?;
    let check_in = parse_night(fields[1])?;
    let check_out = parse_night(fields[2])?;
    Ok(Booking::new(Arc::from(fields[0]), check_in, check_out)?)
}

fn parse_night(value: &str) -> Result<Night, RowError> {
    value.parse().map_err(|_| RowError::Date {
        value: value.to_string(),
    })
}
