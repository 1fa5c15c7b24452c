//! Parsing, validation and display formatting of phone numbers.
//!
//! Wraps the `phonenumber` library. Parse failures are never propagated:
//! an input that the library rejects simply yields `None`, and downstream
//! falls back to digit-variant probing.

use phonenumber::{country, Mode, PhoneNumber};
use serde::{Deserialize, Serialize};

/// Parse and validate a raw phone number against a default region.
///
/// Returns `None` for anything the library cannot parse or does not
/// consider a valid number, including an unknown region code.
#[must_use]
pub fn try_parse_phone(raw: &str, region: &str) -> Option<PhoneNumber> {
    let id: country::Id = region.parse().ok()?;
    let number = match phonenumber::parse(Some(id), raw.trim()) {
        Ok(number) => number,
        Err(e) => {
            tracing::debug!(input = raw, "phone parse failed: {e}");
            return None;
        }
    };
    phonenumber::is_valid(&number).then_some(number)
}

/// Display-ready renderings of one validated phone number.
///
/// Produced once per valid input; a number that fails validity parsing
/// never produces this entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedNumber {
    /// E.164 form, e.g. `+966501234567`
    pub e164: String,
    /// International display form
    pub international: String,
    /// National display form
    pub national: String,
    /// Carrier name, or `-` when the library has none on record
    pub carrier: String,
}

impl NormalizedNumber {
    /// Build the display renderings from a parsed, validated number.
    #[must_use]
    pub fn from_parsed(number: &PhoneNumber) -> Self {
        Self {
            e164: number.format().mode(Mode::E164).to_string(),
            international: number.format().mode(Mode::International).to_string(),
            national: number.format().mode(Mode::National).to_string(),
            carrier: number
                .carrier()
                .map_or_else(|| "-".to_string(), |c| c.to_string()),
        }
    }

    /// The numeric calling code of a parsed number, e.g. `966`.
    #[must_use]
    pub fn country_code(number: &PhoneNumber) -> u16 {
        number.code().value()
    }

    /// Render the multi-line display block shown for a valid number.
    #[must_use]
    pub fn display_block(&self) -> String {
        format!(
            "valid number\nE164: {}\nIntl: {}\nLocal: {}\nCarrier: {}",
            self.e164, self.international, self.national, self.carrier
        )
    }
}
