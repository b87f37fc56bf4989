//! Questionnaire answer sets as submitted by the screening forms.
//!
//! The form layer owns validation. Scorers take these structs as-is and
//! never re-validate, so every field has a well-defined value even when the
//! form sent something odd: unrecognized choice strings land on the
//! catch-all variant and numeric fields follow the zero default policy
//! below.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

// Numeric default policy
//
// Forms submit numbers as text. A numeric answer that is missing, empty,
// `null` or has no leading number contributes zero. Text is read up to the
// first character that cannot continue the number, so "3 (severe)" is 3.

/// Parse the leading integer of `raw`, or zero when there is none.
///
/// A fractional part is dropped rather than rounded: `"4.7"` yields 4.
pub fn parse_whole_or_zero(raw: &str) -> i64 {
    let text = raw.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            break;
        }
        seen_digit = true;
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(byte - b'0'));
    }

    match (seen_digit, negative) {
        (false, _) => 0,
        (true, true) => -value,
        (true, false) => value,
    }
}

/// Parse the leading decimal number of `raw`, or zero when there is none.
pub fn parse_measurement_or_zero(raw: &str) -> f64 {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'-') | Some(b'+')) {
        end += 1;
    }
    let integer_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut mantissa_digits = end - integer_start;

    if bytes.get(end) == Some(&b'.') {
        let fraction_start = end + 1;
        let mut cursor = fraction_start;
        while bytes.get(cursor).is_some_and(u8::is_ascii_digit) {
            cursor += 1;
        }
        mantissa_digits += cursor - fraction_start;
        if mantissa_digits > 0 {
            end = cursor;
        }
    }

    if mantissa_digits == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut cursor = end + 1;
        if matches!(bytes.get(cursor), Some(b'-') | Some(b'+')) {
            cursor += 1;
        }
        let exponent_start = cursor;
        while bytes.get(cursor).is_some_and(u8::is_ascii_digit) {
            cursor += 1;
        }
        if cursor > exponent_start {
            end = cursor;
        }
    }

    text[..end]
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Integer answer (age, years, 0–4 severity) under the zero default policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WholeNumber(pub i64);

impl WholeNumber {
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for WholeNumber {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl Serialize for WholeNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.0)
    }
}

impl<'de> Deserialize<'de> for WholeNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct WholeNumberVisitor;

        impl<'de> Visitor<'de> for WholeNumberVisitor {
            type Value = WholeNumber;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a number, numeric text, or an empty value")
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
                Ok(WholeNumber(value))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
                Ok(WholeNumber(i64::try_from(value).unwrap_or(i64::MAX)))
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
                if value.is_finite() {
                    Ok(WholeNumber(value.trunc() as i64))
                } else {
                    Ok(WholeNumber(0))
                }
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                Ok(WholeNumber(parse_whole_or_zero(value)))
            }

            fn visit_bool<E: de::Error>(self, _value: bool) -> Result<Self::Value, E> {
                Ok(WholeNumber(0))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(WholeNumber(0))
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(WholeNumber(0))
            }
        }

        deserializer.deserialize_any(WholeNumberVisitor)
    }
}

/// Decimal answer (clinical measurement) under the zero default policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Measurement(pub f64);

impl Measurement {
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Measurement {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl Serialize for Measurement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}

impl<'de> Deserialize<'de> for Measurement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MeasurementVisitor;

        impl<'de> Visitor<'de> for MeasurementVisitor {
            type Value = Measurement;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a number, numeric text, or an empty value")
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Measurement(value as f64))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
                Ok(Measurement(value as f64))
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Measurement(if value.is_finite() { value } else { 0.0 }))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Measurement(parse_measurement_or_zero(value)))
            }

            fn visit_bool<E: de::Error>(self, _value: bool) -> Result<Self::Value, E> {
                Ok(Measurement(0.0))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(Measurement(0.0))
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(Measurement(0.0))
            }
        }

        deserializer.deserialize_any(MeasurementVisitor)
    }
}

/// Yes/no question. Only an explicit "yes" triggers a weight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YesNo {
    Yes,
    No,
    #[default]
    #[serde(other, rename = "")]
    Unanswered,
}

impl YesNo {
    pub const fn is_yes(self) -> bool {
        matches!(self, YesNo::Yes)
    }
}

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        if value {
            YesNo::Yes
        } else {
            YesNo::No
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
    Other,
    #[default]
    #[serde(other, rename = "")]
    Unspecified,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmokingStatus {
    Never,
    Former,
    Current,
    #[default]
    #[serde(other, rename = "")]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressionPattern {
    Stable,
    Gradual,
    Rapid,
    Fluctuating,
    #[default]
    #[serde(other, rename = "")]
    Unspecified,
}

/// How long respiratory symptoms have been present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SymptomDuration {
    #[serde(rename = "less_than_month")]
    LessThanMonth,
    #[serde(rename = "1_3_months")]
    OneToThreeMonths,
    #[serde(rename = "3_6_months")]
    ThreeToSixMonths,
    #[serde(rename = "6_12_months")]
    SixToTwelveMonths,
    #[serde(rename = "more_than_year")]
    MoreThanYear,
    #[default]
    #[serde(other, rename = "")]
    Unspecified,
}

/// Unified auto-detection questionnaire covering all three cancer types.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TriageAnswers {
    pub age: WholeNumber,
    pub gender: Gender,
    pub smoking: YesNo,
    pub alcohol: YesNo,
    pub family_history: YesNo,
    pub lumps: YesNo,
    pub chest_pain: YesNo,
    pub shortness_of_breath: YesNo,
    pub fatigue: WholeNumber,
    pub weight_loss: WholeNumber,
    pub pain_level: WholeNumber,
    pub appetite_loss: WholeNumber,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SmokingHistory {
    pub status: SmokingStatus,
    pub years: WholeNumber,
    pub per_day: WholeNumber,
    pub years_since_quit: WholeNumber,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymptomProgression {
    pub duration: SymptomDuration,
    pub pattern: ProgressionPattern,
}

/// Lung questionnaire. Smoking and progression sections serialize flat,
/// matching the combined payload the prediction service expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LungAnswers {
    pub age: WholeNumber,
    pub gender: Gender,
    pub persistent_cough: YesNo,
    pub cough_severity: WholeNumber,
    pub chest_pain: YesNo,
    pub chest_pain_severity: WholeNumber,
    pub shortness_of_breath: YesNo,
    pub breathing_severity: WholeNumber,
    pub wheezing: YesNo,
    pub coughing_blood: YesNo,
    pub fatigue: YesNo,
    pub weight_loss: YesNo,
    pub recurrent_infections: YesNo,
    #[serde(flatten)]
    pub smoking: SmokingHistory,
    #[serde(flatten)]
    pub progression: SymptomProgression,
}

/// Prostate clinical parameters. `dre`, `familyHistory` and
/// `previousBiopsy` are 0/1 indicators.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProstateAnswers {
    pub age: Measurement,
    pub psa: Measurement,
    pub psa_density: Measurement,
    pub gleason: Measurement,
    #[serde(rename = "prostatevolume")]
    pub prostate_volume: Measurement,
    pub dre: Measurement,
    pub family_history: Measurement,
    pub previous_biopsy: Measurement,
}

/// Fine needle aspirate measurements for the breast model. Breast cases are
/// only ever classified by the prediction service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BreastMeasurements {
    pub radius_mean: Measurement,
    pub texture_mean: Measurement,
    pub perimeter_mean: Measurement,
    pub area_mean: Measurement,
    pub smoothness_mean: Measurement,
    pub compactness_mean: Measurement,
    pub concavity_mean: Measurement,
    pub concave_points_mean: Measurement,
    pub symmetry_mean: Measurement,
}
