use serde::{Deserialize, Serialize};

/// Canonical English day names, in persistence order. These are also the
/// raw-hours column headers of the listings CSV.
pub const DAYS_OF_WEEK: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Map a user-supplied day name to its canonical form, case-insensitively.
pub fn canonical_day(name: &str) -> Option<&'static str> {
    DAYS_OF_WEEK
        .iter()
        .find(|day| day.eq_ignore_ascii_case(name.trim()))
        .copied()
}

/// One contiguous open interval within a day, both ends as 24-hour "HH:MM".
/// Both fields are always populated; a day that is closed (or whose hours
/// could not be parsed) carries the "00:00"/"00:00" sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftPair {
    pub start: String,
    pub end: String,
}

impl ShiftPair {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn closed() -> Self {
        Self::new("00:00", "00:00")
    }

    pub fn open_24h() -> Self {
        Self::new("00:00", "23:59")
    }

    pub fn is_closed(&self) -> bool {
        self.start == "00:00" && self.end == "00:00"
    }

    /// Inclusive containment check. Zero-padded "HH:MM" strings compare
    /// correctly as plain strings.
    pub fn contains(&self, time: &str) -> bool {
        self.start.as_str() <= time && time <= self.end.as_str()
    }
}

/// Up to two shifts for one day. The slots are positional: shift2 is only
/// meaningful when a second range was parsed, and defaults to the closed
/// sentinel otherwise so downstream consumers always see four fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayShifts {
    pub shift1: ShiftPair,
    pub shift2: ShiftPair,
}

impl DayShifts {
    pub fn closed() -> Self {
        Self {
            shift1: ShiftPair::closed(),
            shift2: ShiftPair::closed(),
        }
    }

    /// Assign parsed pairs to the two shift slots. Pairs beyond the second
    /// are discarded; absent slots fall back to the closed sentinel.
    pub fn from_pairs(pairs: &[ShiftPair]) -> Self {
        Self {
            shift1: pairs.first().cloned().unwrap_or_else(ShiftPair::closed),
            shift2: pairs.get(1).cloned().unwrap_or_else(ShiftPair::closed),
        }
    }

    pub fn is_closed(&self) -> bool {
        self.shift1.is_closed() && self.shift2.is_closed()
    }
}

/// Core business fields as persisted per row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    pub id: i64,
    pub timezone: String,
    pub rating: f64,
    pub max_rating: f64,
    pub review_count: i64,
}

/// The day-shift record handed to the persistence sink: one day name plus
/// the four fixed shift slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessHours {
    pub day: String,
    pub shift1_start: String,
    pub shift1_end: String,
    pub shift2_start: String,
    pub shift2_end: String,
}

impl BusinessHours {
    pub fn from_shifts(day: &str, shifts: &DayShifts) -> Self {
        Self {
            day: day.to_string(),
            shift1_start: shifts.shift1.start.clone(),
            shift1_end: shifts.shift1.end.clone(),
            shift2_start: shifts.shift2.start.clone(),
            shift2_end: shifts.shift2.end.clone(),
        }
    }

    pub fn is_closed(&self) -> bool {
        self.shift1_start == "00:00"
            && self.shift1_end == "00:00"
            && self.shift2_start == "00:00"
            && self.shift2_end == "00:00"
    }

    /// True when the given "HH:MM" time falls within either shift,
    /// inclusive of both bounds.
    pub fn covers(&self, time: &str) -> bool {
        (self.shift1_start.as_str() <= time && time <= self.shift1_end.as_str())
            || (self.shift2_start.as_str() <= time && time <= self.shift2_end.as_str())
    }
}

/// One raw row of the listings CSV. Hour cells are free-form text or
/// missing; nothing here is normalized yet.
#[derive(Debug, Clone, Deserialize)]
pub struct RawListingRow {
    #[serde(rename = "ID")]
    pub id: i64,
    pub timezone: String,
    #[serde(rename = "Rating")]
    pub rating: f64,
    #[serde(rename = "Max Rating")]
    pub max_rating: f64,
    #[serde(rename = "Review Count")]
    pub review_count: i64,
    #[serde(rename = "Monday")]
    pub monday: Option<String>,
    #[serde(rename = "Tuesday")]
    pub tuesday: Option<String>,
    #[serde(rename = "Wednesday")]
    pub wednesday: Option<String>,
    #[serde(rename = "Thursday")]
    pub thursday: Option<String>,
    #[serde(rename = "Friday")]
    pub friday: Option<String>,
    #[serde(rename = "Saturday")]
    pub saturday: Option<String>,
    #[serde(rename = "Sunday")]
    pub sunday: Option<String>,
    pub categories: Option<String>,
}

impl RawListingRow {
    /// The raw hours cell for a canonical day name.
    pub fn hours_for(&self, day: &str) -> Option<&str> {
        match day {
            "Monday" => self.monday.as_deref(),
            "Tuesday" => self.tuesday.as_deref(),
            "Wednesday" => self.wednesday.as_deref(),
            "Thursday" => self.thursday.as_deref(),
            "Friday" => self.friday.as_deref(),
            "Saturday" => self.saturday.as_deref(),
            "Sunday" => self.sunday.as_deref(),
            _ => None,
        }
    }

    pub fn business(&self) -> Business {
        Business {
            id: self.id,
            timezone: self.timezone.clone(),
            rating: self.rating,
            max_rating: self.max_rating,
            review_count: self.review_count,
        }
    }
}

/// A persisted business with its hours and categories, as returned by the
/// query surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusinessListing {
    #[serde(flatten)]
    pub business: Business,
    pub hours: Vec<BusinessHours>,
    pub categories: Vec<String>,
}

impl BusinessListing {
    /// A business counts as fully closed only when every persisted day is
    /// the closed sentinel on both shifts.
    pub fn is_fully_closed(&self) -> bool {
        self.hours.iter().all(BusinessHours::is_closed)
    }

    pub fn hours_on(&self, day: &str) -> Option<&BusinessHours> {
        self.hours.iter().find(|h| h.day == day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_day_is_case_insensitive() {
        assert_eq!(canonical_day("monday"), Some("Monday"));
        assert_eq!(canonical_day("SATURDAY"), Some("Saturday"));
        assert_eq!(canonical_day(" sunday "), Some("Sunday"));
        assert_eq!(canonical_day("Someday"), None);
    }

    #[test]
    fn test_shift_pair_contains_is_inclusive() {
        let pair = ShiftPair::new("09:00", "17:00");
        assert!(pair.contains("09:00"));
        assert!(pair.contains("17:00"));
        assert!(pair.contains("12:30"));
        assert!(!pair.contains("08:59"));
        assert!(!pair.contains("17:01"));
    }

    #[test]
    fn test_day_shifts_from_pairs_keeps_first_two() {
        let pairs = vec![
            ShiftPair::new("09:00", "12:00"),
            ShiftPair::new("13:00", "17:00"),
            ShiftPair::new("18:00", "21:00"),
        ];
        let shifts = DayShifts::from_pairs(&pairs);
        assert_eq!(shifts.shift1, ShiftPair::new("09:00", "12:00"));
        assert_eq!(shifts.shift2, ShiftPair::new("13:00", "17:00"));
    }

    #[test]
    fn test_day_shifts_from_pairs_defaults_to_closed() {
        let shifts = DayShifts::from_pairs(&[]);
        assert!(shifts.is_closed());

        let shifts = DayShifts::from_pairs(&[ShiftPair::new("09:00", "17:00")]);
        assert_eq!(shifts.shift2, ShiftPair::closed());
        assert!(!shifts.is_closed());
    }

    #[test]
    fn test_business_hours_covers_both_shifts() {
        let shifts = DayShifts {
            shift1: ShiftPair::new("09:00", "12:00"),
            shift2: ShiftPair::new("13:00", "17:00"),
        };
        let hours = BusinessHours::from_shifts("Monday", &shifts);
        assert!(hours.covers("09:00"));
        assert!(hours.covers("12:00"));
        assert!(hours.covers("13:00"));
        assert!(hours.covers("17:00"));
        assert!(!hours.covers("12:30"));
        assert!(!hours.covers("17:01"));
    }

    #[test]
    fn test_fully_closed_requires_every_day_closed() {
        let closed = BusinessHours::from_shifts("Monday", &DayShifts::closed());
        let open = BusinessHours::from_shifts(
            "Tuesday",
            &DayShifts::from_pairs(&[ShiftPair::new("09:00", "17:00")]),
        );

        let listing = BusinessListing {
            business: Business {
                id: 1,
                timezone: "UTC".to_string(),
                rating: 4.0,
                max_rating: 5.0,
                review_count: 10,
            },
            hours: vec![closed.clone(), open],
            categories: vec![],
        };
        assert!(!listing.is_fully_closed());

        let listing = BusinessListing {
            hours: vec![closed.clone(), closed],
            ..listing
        };
        assert!(listing.is_fully_closed());
    }
}
