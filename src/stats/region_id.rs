use std::{fmt, sync::Arc};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifier shared by a topology feature and its statistic record.
///
/// Strings that parse as integers collapse to [`RegionId::Num`], so a FIPS
/// code written as `"01001"` joins with a feature whose id is `1001`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RegionId {
    Num(i64),
    Name(Arc<str>),
}

impl From<i64> for RegionId {
    fn from(value: i64) -> Self { RegionId::Num(value) }
}

impl From<i32> for RegionId {
    fn from(value: i32) -> Self { RegionId::Num(value as i64) }
}

impl From<&str> for RegionId {
    fn from(value: &str) -> Self {
        value.trim().parse::<i64>()
            .map(RegionId::Num)
            .unwrap_or_else(|_| RegionId::Name(Arc::from(value)))
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionId::Num(n) => write!(f, "{n}"),
            RegionId::Name(s) => f.write_str(s),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    Float(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for RegionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Ok(match RawId::deserialize(deserializer)? {
            RawId::Int(n) => RegionId::Num(n),
            RawId::Float(x) if x.is_finite() && x.fract() == 0.0 => RegionId::Num(x as i64),
            RawId::Float(x) => RegionId::Name(Arc::from(x.to_string())),
            RawId::Text(s) => RegionId::from(s.as_str()),
        })
    }
}

impl Serialize for RegionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            RegionId::Num(n) => serializer.serialize_i64(*n),
            RegionId::Name(s) => serializer.serialize_str(s),
        }
    }
}
