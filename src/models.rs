//! Data structures for lookup results.

use std::fmt;

use serde::Deserialize;

/// Network identity reported by the lookup service.
///
/// Every field is optional: the record mirrors whatever subset of fields the
/// service included in its response body. Unknown fields in the body are
/// ignored during deserialization. A record exists only as the product of a
/// successful parse and is never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct IdentityRecord {
    /// Public IP address
    pub ip: Option<String>,
    /// Reverse-resolved hostname
    pub hostname: Option<String>,
    /// City name
    pub city: Option<String>,
    /// Region or state
    pub region: Option<String>,
    /// Country code
    pub country: Option<String>,
    /// IANA time zone identifier
    #[serde(alias = "timeZone")]
    pub timezone: Option<String>,
    /// "latitude,longitude" pair
    pub loc: Option<String>,
}

impl fmt::Display for IdentityRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = |value: &Option<String>| -> String {
            value.clone().unwrap_or_else(|| "-".to_string())
        };
        writeln!(f, "IP:       {}", field(&self.ip))?;
        writeln!(f, "Hostname: {}", field(&self.hostname))?;
        writeln!(f, "City:     {}", field(&self.city))?;
        writeln!(f, "Region:   {}", field(&self.region))?;
        writeln!(f, "Country:  {}", field(&self.country))?;
        writeln!(f, "Timezone: {}", field(&self.timezone))?;
        write!(f, "Loc:      {}", field(&self.loc))
    }
}
