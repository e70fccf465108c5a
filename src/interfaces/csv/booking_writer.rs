use crate::error::Result;
use crate::interfaces::summary::Row;
use std::io::Write;

/// Writes booking summaries or line items as CSV with a header row.
///
/// The header is written even when there are no rows.
pub struct BookingWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> BookingWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(sink),
        }
    }

    pub fn write_rows<T: Row>(&mut self, rows: impl IntoIterator<Item = T>) -> Result<()> {
        self.writer.write_record(T::HEADERS)?;
        for row in rows {
            self.writer.serialize(row)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::booking::{Booking, BookingStatus};
    use crate::domain::money::Money;
    use crate::domain::booking::BookingItem;
    use crate::domain::catalog::{MenuItem, UnitType};
    use crate::interfaces::summary::{BookingItemRow, BookingSummary};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_write_booking_summaries() {
        let booking = Booking {
            id: 3,
            event_time: Some("18:00".to_string()),
            total_cost: Money::new(dec!(17250.00)).unwrap(),
            status: BookingStatus::Confirmed,
            ..Booking::new("Juan", NaiveDate::from_ymd_opt(2026, 10, 30).unwrap(), 45)
        };

        let mut out = Vec::new();
        {
            let mut writer = BookingWriter::new(&mut out);
            writer
                .write_rows([BookingSummary::from(&booking)])
                .unwrap();
        }
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("id,customer,event_date,event_time,package,guests,base,additional,total,status")
        );
        assert_eq!(
            lines.next(),
            Some("3,Juan,2026-10-30,18:00,,45,0,0,17250.00,Confirmed")
        );
    }

    fn written<T: Row>(rows: Vec<T>) -> String {
        let mut out = Vec::new();
        BookingWriter::new(&mut out).write_rows(rows).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_write_header_without_rows() {
        assert_eq!(
            written(Vec::<BookingItemRow>::new()),
            "id,booking,item,unit_type,quantity,cost\n"
        );
        assert_eq!(
            written(Vec::<BookingSummary>::new()),
            "id,customer,event_date,event_time,package,guests,base,additional,total,status\n"
        );
    }

    #[test]
    fn test_write_item_rows() {
        let rice = MenuItem {
            id: 1,
            ..MenuItem::new("Rice", Money::new(dec!(50.00)).unwrap(), UnitType::PerPerson)
        };
        let item = BookingItem {
            id: 7,
            booking_id: 3,
            ..BookingItem::new(&rice, 1, 10)
        };

        let text = written(vec![BookingItemRow::from(&item)]);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("id,booking,item,unit_type,quantity,cost"));
        assert_eq!(lines.next(), Some("7,3,Rice,per_person,1,500.00"));
        assert_eq!(lines.next(), None);
    }
}
