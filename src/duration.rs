//! ISO 8601-2 durations.
//!
//! The extended form allows a leading sign, so `-P1D` is one day in the
//! past. Conversions to milliseconds approximate months and years with fixed
//! constants; every other unit is exact.

use std::fmt;

use thiserror::Error;

/// Average month (30.4375 days) in milliseconds.
pub const MILLIS_PER_MONTH: f64 = 2_629_800_000.0;
pub const MILLIS_PER_YEAR: f64 = MILLIS_PER_MONTH * 12.0;
pub const MILLIS_PER_WEEK: f64 = MILLIS_PER_DAY * 7.0;
pub const MILLIS_PER_DAY: f64 = MILLIS_PER_HOUR * 24.0;
pub const MILLIS_PER_HOUR: f64 = MILLIS_PER_MINUTE * 60.0;
pub const MILLIS_PER_MINUTE: f64 = MILLIS_PER_SECOND * 60.0;
pub const MILLIS_PER_SECOND: f64 = 1000.0;

const PERIOD: char = 'P';
const TIME: char = 'T';
const YEAR: char = 'Y';
const MONTH_OR_MINUTE: char = 'M';
const WEEK: char = 'W';
const DAY: char = 'D';
const HOUR: char = 'H';
const SECOND: char = 'S';

/// Errors raised by [`IsoDuration::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    #[error("expected P but got `{0}`")]
    MissingPeriod(char),

    #[error("unexpected token `{0}`")]
    UnexpectedMarker(char),

    #[error("invalid number `{0}`")]
    InvalidNumber(String),

    #[error("unexpected end of duration `{0}`")]
    UnexpectedEnd(String),
}

/// A parsed ISO 8601 duration with its components kept separate.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IsoDuration {
    pub negative: bool,
    pub years: f64,
    pub months: f64,
    pub weeks: f64,
    pub days: f64,
    pub hours: f64,
    pub minutes: f64,
    pub seconds: f64,
    literal: String,
}

impl IsoDuration {
    /// Parses a literal shaped like `[+-]P[nY][nM][nW][nD][T[nH][nM][nS]]`.
    ///
    /// The empty string is the zero duration.
    ///
    /// # Examples
    ///
    /// ```
    /// use fiql_parser::duration::IsoDuration;
    ///
    /// let d = IsoDuration::parse("P3DT4H59M").unwrap();
    /// assert_eq!(d.days, 3.0);
    /// assert_eq!(d.hours, 4.0);
    /// assert_eq!(d.minutes, 59.0);
    /// ```
    pub fn parse(input: &str) -> Result<Self, DurationError> {
        DurationReader::new(input).read()
    }

    /// The literal this duration was parsed from.
    pub fn literal(&self) -> &str {
        &self.literal
    }

    /// Total length in milliseconds, negative for negative durations.
    ///
    /// Months count as 2,629,800,000 ms and years as twelve months.
    pub fn as_milliseconds(&self) -> i64 {
        let total = self.seconds * MILLIS_PER_SECOND
            + self.minutes * MILLIS_PER_MINUTE
            + self.hours * MILLIS_PER_HOUR
            + self.days * MILLIS_PER_DAY
            + self.weeks * MILLIS_PER_WEEK
            + self.months * MILLIS_PER_MONTH
            + self.years * MILLIS_PER_YEAR;
        let millis = total.round() as i64;
        if self.negative { -millis } else { millis }
    }

    pub fn as_seconds(&self) -> i64 {
        self.as_milliseconds() / 1000
    }

    /// The approximated length as a [`chrono::TimeDelta`].
    pub fn to_time_delta(&self) -> chrono::TimeDelta {
        chrono::TimeDelta::milliseconds(self.as_milliseconds())
    }
}

impl fmt::Display for IsoDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal)
    }
}

struct DurationReader<'a> {
    input: &'a str,
    chars: Vec<char>,
    position: usize,
}

impl<'a> DurationReader<'a> {
    fn new(input: &'a str) -> Self {
        DurationReader {
            input,
            chars: input.chars().collect(),
            position: 0,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn read(mut self) -> Result<IsoDuration, DurationError> {
        let mut duration = IsoDuration {
            literal: self.input.to_string(),
            ..IsoDuration::default()
        };
        if self.chars.is_empty() {
            return Ok(duration);
        }

        match self.current_char() {
            Some('-') => {
                duration.negative = true;
                self.advance();
            }
            Some('+') => self.advance(),
            _ => {}
        }

        match self.current_char() {
            Some(PERIOD) => self.advance(),
            Some(ch) => return Err(DurationError::MissingPeriod(ch)),
            None => return Err(DurationError::UnexpectedEnd(self.input.to_string())),
        }

        let mut in_time = false;
        while self.current_char().is_some() {
            if self.current_char() == Some(TIME) {
                in_time = true;
                self.advance();
            }

            let amount = self.read_number()?;
            let marker = self
                .current_char()
                .ok_or_else(|| DurationError::UnexpectedEnd(self.input.to_string()))?;
            self.advance();

            match marker {
                YEAR => duration.years = amount,
                MONTH_OR_MINUTE if in_time => duration.minutes = amount,
                MONTH_OR_MINUTE => duration.months = amount,
                WEEK => duration.weeks = amount,
                DAY => duration.days = amount,
                HOUR => duration.hours = amount,
                SECOND => duration.seconds = amount,
                other => return Err(DurationError::UnexpectedMarker(other)),
            }
        }

        Ok(duration)
    }

    fn read_number(&mut self) -> Result<f64, DurationError> {
        let mut number = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() || ch == '.' {
                number.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        if number.is_empty() {
            return Err(match self.current_char() {
                Some(ch) => DurationError::InvalidNumber(ch.to_string()),
                None => DurationError::UnexpectedEnd(self.input.to_string()),
            });
        }
        number
            .parse::<f64>()
            .map_err(|_| DurationError::InvalidNumber(number))
    }
}
