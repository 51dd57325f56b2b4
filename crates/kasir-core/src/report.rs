//! # Daily Sales Report
//!
//! The report model and the day-window arithmetic behind it.
//!
//! ## Day Window
//! ```text
//!   2024-05-01 00:00:00                       2024-05-01 23:59:59
//!        │◄──────────────── included ──────────────────►│
//!        start                                          end
//!                                                        │ 2024-05-02 00:00:00
//!                                                        └►│ excluded
//! ```
//!
//! Bounds are naive local time. Storage is queried with
//! `start <= date < next_day_start`, which admits exactly the same whole
//! seconds as the inclusive `[start, end]` range and also keeps sub-second
//! timestamps inside the final second (`23:59:59.500`).

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Day Window
// =============================================================================

/// One calendar day of sales.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    date: NaiveDate,
}

impl DayWindow {
    /// Window for a calendar date.
    pub const fn for_date(date: NaiveDate) -> Self {
        DayWindow { date }
    }

    /// The calendar date this window covers.
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// First instant of the day, `00:00:00`.
    pub fn start(&self) -> NaiveDateTime {
        self.date.and_time(NaiveTime::MIN)
    }

    /// Last whole second of the day, `23:59:59`. Logged for readability;
    /// queries bound on [`DayWindow::next_day_start`].
    pub fn end(&self) -> NaiveDateTime {
        self.next_day_start() - chrono::Duration::seconds(1)
    }

    /// `00:00:00` of the following day, the exclusive upper bound used in
    /// queries.
    pub fn next_day_start(&self) -> NaiveDateTime {
        self.date
            .checked_add_days(Days::new(1))
            .unwrap_or(NaiveDate::MAX)
            .and_time(NaiveTime::MIN)
    }
}

/// Parses a `YYYY-MM-DD` report date.
pub fn parse_report_date(value: &str) -> CoreResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| CoreError::InvalidReportDate {
        value: value.to_string(),
    })
}

// =============================================================================
// Daily Report
// =============================================================================

/// The best-selling product of a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestSeller {
    #[serde(rename = "nama")]
    pub name: String,

    /// Summed quantity over all line items of this product.
    #[serde(rename = "qty_terjual")]
    pub quantity_sold: i64,
}

/// Aggregate sales for one calendar day. Derived on every request, never
/// stored.
///
/// On the wire a missing best seller is the zero object
/// `{"nama": "", "qty_terjual": 0}`, which is what report consumers expect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyReport {
    pub total_revenue: i64,

    #[serde(rename = "total_transaksi")]
    pub total_transactions: i64,

    #[serde(
        rename = "produk_terlaris",
        serialize_with = "serialize_best_seller",
        deserialize_with = "deserialize_best_seller",
        default
    )]
    pub best_seller: Option<BestSeller>,
}

impl DailyReport {
    /// Report for a day without any sales.
    pub fn empty() -> Self {
        DailyReport::default()
    }

    /// Returns the revenue as Money.
    #[inline]
    pub fn revenue(&self) -> Money {
        Money::from_minor(self.total_revenue)
    }
}

fn serialize_best_seller<S>(value: &Option<BestSeller>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let (name, qty) = match value {
        Some(best) => (best.name.as_str(), best.quantity_sold),
        None => ("", 0),
    };
    let mut state = s.serialize_struct("BestSeller", 2)?;
    state.serialize_field("nama", name)?;
    state.serialize_field("qty_terjual", &qty)?;
    state.end()
}

fn deserialize_best_seller<'de, D>(d: D) -> Result<Option<BestSeller>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<BestSeller>::deserialize(d)?;
    Ok(raw.filter(|best| !(best.name.is_empty() && best.quantity_sold == 0)))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_window_bounds() {
        let window = DayWindow::for_date(day(2024, 5, 1));

        assert_eq!(window.start().to_string(), "2024-05-01 00:00:00");
        assert_eq!(window.end().to_string(), "2024-05-01 23:59:59");
        assert_eq!(window.next_day_start().to_string(), "2024-05-02 00:00:00");
    }

    #[test]
    fn test_window_crosses_year_end() {
        let window = DayWindow::for_date(day(2024, 12, 31));

        assert_eq!(window.date(), day(2024, 12, 31));
        assert_eq!(window.end().to_string(), "2024-12-31 23:59:59");
        assert_eq!(window.next_day_start().to_string(), "2025-01-01 00:00:00");
    }

    #[test]
    fn test_parse_report_date() {
        assert_eq!(parse_report_date("2024-05-01").unwrap(), day(2024, 5, 1));
        assert!(matches!(
            parse_report_date("01/05/2024"),
            Err(CoreError::InvalidReportDate { .. })
        ));
    }

    #[test]
    fn test_report_json_shape() {
        let report = DailyReport {
            total_revenue: 3500,
            total_transactions: 2,
            best_seller: Some(BestSeller {
                name: "Vit 1000ml".to_string(),
                quantity_sold: 9,
            }),
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "total_revenue": 3500,
                "total_transaksi": 2,
                "produk_terlaris": {"nama": "Vit 1000ml", "qty_terjual": 9}
            })
        );
    }

    #[test]
    fn test_empty_report_emits_zero_best_seller() {
        let json = serde_json::to_value(DailyReport::empty()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "total_revenue": 0,
                "total_transaksi": 0,
                "produk_terlaris": {"nama": "", "qty_terjual": 0}
            })
        );

        let back: DailyReport = serde_json::from_value(json).unwrap();
        assert_eq!(back.best_seller, None);
    }
}
