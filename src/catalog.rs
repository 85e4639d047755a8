use crate::error::{LoadError, RowError};
use crate::hotel::{Hotel, HotelId};
use crate::rows;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// The hotel catalog: hotel identifier -> total room count. Built once from
/// the hotel file and read-only afterwards.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Catalog {
    hotels: HashMap<HotelId, Hotel>,
}

impl Catalog {
    pub fn load_from_file(path: &Path) -> Result<Catalog, LoadError> {
        let text = rows::read(path)?;
        Catalog::parse(&path.display().to_string(), &text)
    }

    /// Parses `hotel,rooms` rows after the header line. On duplicate hotel
    /// identifiers the first row wins.
    pub fn parse(file: &str, text: &str) -> Result<Catalog, LoadError> {
        let mut hotels = HashMap::new();
        for (line, row) in rows::data_rows(text) {
            let parsed = rows::fields(row, 2).and_then(|fields| {
                let rooms: u32 = fields[1].parse().map_err(|_| RowError::RoomCount {
                    value: fields[1].to_string(),
                })?;
                Ok((Arc::<str>::from(fields[0]), rooms))
            });
            let (id, rooms) = parsed.map_err(|source| LoadError::Row {
                file: file.to_string(),
                line,
                source,
            })?;
            hotels
                .entry(id.clone())
                .or_insert_with(|| Hotel { id, rooms });
        }
        Ok(Catalog { hotels })
    }

    pub fn get(&self, id: &str) -> Option<&Hotel> {
        self.hotels.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.hotels.contains_key(id)
    }

    pub fn hotels(&self) -> impl Iterator<Item = &Hotel> {
        self.hotels.values()
    }

    pub fn len(&self) -> usize {
        self.hotels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hotels.is_empty()
    }
}
