use std::fmt;
use std::str::FromStr;

use chrono::Datelike;
use chrono::NaiveDate;

use super::ClientError;

/// Month part of a filter. The server reads `all` as the whole year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Month(u32),
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str("all"),
            MonthFilter::Month(month) => write!(f, "{month}"),
        }
    }
}

impl FromStr for MonthFilter {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(MonthFilter::All);
        }

        match s.parse::<u32>() {
            Ok(month) if (1..=12).contains(&month) => Ok(MonthFilter::Month(month)),
            _ => Err(ClientError::InvalidInput(format!(
                "Invalid month '{s}', expected 1-12 or 'all'"
            ))),
        }
    }
}

/// Year/month pair used by the message and broadcast listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub year: i32,
    pub month: MonthFilter,
}

impl Period {
    pub fn new(year: i32, month: u32) -> Period {
        return Period {
            year,
            month: MonthFilter::Month(month),
        };
    }

    pub fn whole_year(year: i32) -> Period {
        return Period {
            year,
            month: MonthFilter::All,
        };
    }

    /// Calendar year and month containing `date`.
    pub fn containing(date: NaiveDate) -> Period {
        return Period::new(date.year(), date.month());
    }

    pub fn query(&self) -> String {
        format!("year={}&month={}", self.year, self.month)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.month {
            MonthFilter::All => write!(f, "{}", self.year),
            MonthFilter::Month(month) => write!(f, "{}-{:02}", self.year, month),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_filter_parse() {
        assert_eq!("5".parse::<MonthFilter>().unwrap(), MonthFilter::Month(5));
        assert_eq!("ALL".parse::<MonthFilter>().unwrap(), MonthFilter::All);
        assert!("13".parse::<MonthFilter>().is_err());
        assert!("0".parse::<MonthFilter>().is_err());
        assert!("may".parse::<MonthFilter>().is_err());
    }

    #[test]
    fn test_period_query_and_display() {
        let period = Period::new(2024, 5);
        assert_eq!(period.query(), "year=2024&month=5");
        assert_eq!(period.to_string(), "2024-05");

        let period = Period::whole_year(2023);
        assert_eq!(period.query(), "year=2023&month=all");
        assert_eq!(period.to_string(), "2023");
    }

    #[test]
    fn test_period_containing() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(Period::containing(date), Period::new(2024, 12));
    }
}
