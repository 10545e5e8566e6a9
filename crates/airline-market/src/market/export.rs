use super::trend::PriceTrendPoint;
use chrono::NaiveDate;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

#[derive(Debug)]
pub enum TrendExportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for TrendExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrendExportError::Io(err) => write!(f, "failed to write trend export: {}", err),
            TrendExportError::Csv(err) => write!(f, "failed to encode trend CSV: {}", err),
        }
    }
}

impl std::error::Error for TrendExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TrendExportError::Io(err) => Some(err),
            TrendExportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for TrendExportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for TrendExportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

#[derive(Debug, Serialize)]
struct TrendRow<'a> {
    date: NaiveDate,
    route: &'a str,
    price: f64,
    demand_score: u32,
    bookings: u32,
}

pub fn write_trend_csv<W: Write>(
    writer: W,
    points: &[PriceTrendPoint],
) -> Result<(), TrendExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for point in points {
        csv_writer.serialize(TrendRow {
            date: point.date,
            route: point.route.label(),
            price: point.price,
            demand_score: point.demand_score,
            bookings: point.bookings,
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn export_trend_csv<P: AsRef<Path>>(
    path: P,
    points: &[PriceTrendPoint],
) -> Result<(), TrendExportError> {
    let file = std::fs::File::create(path)?;
    write_trend_csv(file, points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::trend::TrendRoute;

    #[test]
    fn writes_header_and_rows() {
        let points = vec![PriceTrendPoint {
            date: NaiveDate::from_ymd_opt(2025, 9, 1).expect("valid date"),
            route: TrendRoute::SydneyPerth,
            price: 472.35,
            demand_score: 88,
            bookings: 415,
        }];

        let mut buffer = Vec::new();
        write_trend_csv(&mut buffer, &points).expect("csv writes");
        let text = String::from_utf8(buffer).expect("utf8 output");

        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("date,route,price,demand_score,bookings")
        );
        assert_eq!(lines.next(), Some("2025-09-01,Sydney-Perth,472.35,88,415"));
        assert_eq!(lines.next(), None);
    }
}
