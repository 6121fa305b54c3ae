//! Currency catalogue and selector types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CommonError;

macro_rules! currencies {
    ($($variant:ident => $code:literal, $country:literal, $name:literal;)+) => {
        /// A supported ISO 4217 currency.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "UPPERCASE")]
        pub enum Currency {
            $(
                #[doc = $name]
                $variant,
            )+
        }

        impl Currency {
            /// Every supported currency, in selector order.
            pub const ALL: &'static [Currency] = &[$(Currency::$variant),+];

            /// Get the currency code.
            pub fn code(&self) -> &'static str {
                match self {
                    $(Currency::$variant => $code,)+
                }
            }

            /// ISO 3166 country code used for the flag icon.
            pub fn country_code(&self) -> &'static str {
                match self {
                    $(Currency::$variant => $country,)+
                }
            }

            /// Human readable name.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Currency::$variant => $name,)+
                }
            }
        }
    };
}

currencies! {
    Usd => "USD", "us", "United States Dollar";
    Eur => "EUR", "eu", "Euro";
    Gbp => "GBP", "gb", "British Pound";
    Inr => "INR", "in", "Indian Rupee";
    Npr => "NPR", "np", "Nepalese Rupee";
    Jpy => "JPY", "jp", "Japanese Yen";
    Cny => "CNY", "cn", "Chinese Yuan";
    Aud => "AUD", "au", "Australian Dollar";
    Cad => "CAD", "ca", "Canadian Dollar";
    Chf => "CHF", "ch", "Swiss Franc";
    Sgd => "SGD", "sg", "Singapore Dollar";
    Hkd => "HKD", "hk", "Hong Kong Dollar";
    Nzd => "NZD", "nz", "New Zealand Dollar";
    Krw => "KRW", "kr", "South Korean Won";
    Mxn => "MXN", "mx", "Mexican Peso";
    Brl => "BRL", "br", "Brazilian Real";
    Zar => "ZAR", "za", "South African Rand";
    Aed => "AED", "ae", "UAE Dirham";
    Sar => "SAR", "sa", "Saudi Riyal";
    Thb => "THB", "th", "Thai Baht";
    Myr => "MYR", "my", "Malaysian Ringgit";
    Idr => "IDR", "id", "Indonesian Rupiah";
    Php => "PHP", "ph", "Philippine Peso";
    Vnd => "VND", "vn", "Vietnamese Dong";
    Pkr => "PKR", "pk", "Pakistani Rupee";
    Bdt => "BDT", "bd", "Bangladeshi Taka";
    Lkr => "LKR", "lk", "Sri Lankan Rupee";
    Sek => "SEK", "se", "Swedish Krona";
    Nok => "NOK", "no", "Norwegian Krone";
    Dkk => "DKK", "dk", "Danish Krone";
    Pln => "PLN", "pl", "Polish Zloty";
    Try => "TRY", "tr", "Turkish Lira";
    Rub => "RUB", "ru", "Russian Ruble";
    Twd => "TWD", "tw", "Taiwan Dollar";
}

impl Currency {
    /// The currency every rate multiplier is expressed against.
    pub const BASE: Currency = Currency::Usd;

    /// Check whether this is the base currency.
    pub fn is_base(&self) -> bool {
        *self == Self::BASE
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = CommonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Currency::ALL
            .iter()
            .copied()
            .find(|c| c.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| CommonError::UnsupportedCurrency(code.to_string()))
    }
}

impl TryFrom<&str> for Currency {
    type Error = CommonError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Which of the two currency selectors an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The currency the amount is entered in.
    From,
    /// The currency the amount is converted into.
    To,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::From => f.write_str("from"),
            Side::To => f.write_str("to"),
        }
    }
}

impl FromStr for Side {
    type Err = CommonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "from" | "source" => Ok(Side::From),
            "to" | "target" => Ok(Side::To),
            other => Err(CommonError::UnknownSide(other.to_string())),
        }
    }
}

/// The selected source and target currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyPair {
    /// Currency the amount is entered in.
    pub from: Currency,
    /// Currency the amount is converted into.
    pub to: Currency,
}

impl CurrencyPair {
    /// Create a new currency pair.
    pub fn new(from: Currency, to: Currency) -> Self {
        Self { from, to }
    }

    /// Get the inverse pair.
    pub fn inverse(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }

    /// Get the currency on one side.
    pub fn get(&self, side: Side) -> Currency {
        match side {
            Side::From => self.from,
            Side::To => self.to,
        }
    }

    /// Replace the currency on one side.
    pub fn set(&mut self, side: Side, currency: Currency) {
        match side {
            Side::From => self.from = currency,
            Side::To => self.to = currency,
        }
    }
}

impl Default for CurrencyPair {
    fn default() -> Self {
        Self::new(Currency::Usd, Currency::Npr)
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.from, self.to)
    }
}
