use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};

const DECIMAL_PLACES: usize = 8;
const SCALE: u64 = 10u64.pow(DECIMAL_PLACES as u32);

/// An amount in tinybars, the smallest denomination of the network currency.
///
/// Displayed as the whole-unit value with exactly eight decimal places and
/// thousands separators on the integer part, e.g. `-1,234.56789012`.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd)]
pub struct Tinybar(i64);

impl Tinybar {
    pub fn new(raw: i64) -> Self {
        Tinybar(raw)
    }
}

impl Display for Tinybar {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        //NOTE: unsigned_abs keeps i64::MIN representable
        let abs = self.0.unsigned_abs();
        let integer = group_thousands(abs / SCALE);
        let fraction = abs % SCALE;
        write!(formatter, "{}{}.{:0width$}", sign, integer, fraction, width = DECIMAL_PLACES)
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}

impl<'de> Deserialize<'de> for Tinybar {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        i64::deserialize(deserializer).map(Tinybar)
    }
}

impl Serialize for Tinybar {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
