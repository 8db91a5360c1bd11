//! The catalog of fake-value domains.
//!
//! Domains have a textual form `category.item`, optionally followed by
//! `:`-separated numeric arguments:
//!
//! | text                    | domain                                  |
//! |-------------------------|-----------------------------------------|
//! | `name.full`             | `Domain::Name(Name::Full)`              |
//! | `internet.password`     | `Internet::Password { 8, 16 }`          |
//! | `internet.password:4:6` | `Internet::Password { 4, 6 }`           |
//! | `internet.image:64:48`  | `Internet::Image { 64, 48 }`            |
//! | `text.words:3`          | `Text::Words(3)`                        |

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Address(Address),
    Bank(Bank),
    Car(Car),
    Company(Company),
    CreditCard(CreditCard),
    Internet(Internet),
    Name(Name),
    Phone(Phone),
    Text(Text),
    Vehicle(Vehicle),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Address {
    Full,
    Country,
    CountryCode,
    State,
    StateShort,
    County,
    City,
    StreetName,
    StreetAddress,
    BuildingNumber,
    PostCode,
    TimeZone,
    /// `key:value` pairs joined by `|`; state, district and ward are optional.
    Formatted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bank {
    Name,
    Iban,
    Bban,
    SwiftBic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Car {
    Brand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Company {
    Name,
    Suffix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CreditCard {
    Number,
    Type,
    Expiry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Internet {
    Username,
    Email,
    Domain,
    Hashtag,
    Url,
    Password { min_length: usize, max_length: usize },
    Image { width: u32, height: u32 },
}

impl Internet {
    pub const PASSWORD: Internet = Internet::Password {
        min_length: 8,
        max_length: 16,
    };

    pub const IMAGE: Internet = Internet::Image {
        width: 200,
        height: 300,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Name {
    First,
    Last,
    Full,
    Prefix,
    Suffix,
    /// Descriptor, level and job, e.g. "Senior Data Engineer".
    Title,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phone {
    Number,
    Cell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Text {
    Words(usize),
    Sentences(usize),
    Paragraphs(usize),
}

impl Text {
    pub const WORD: Text = Text::Words(1);
    pub const SENTENCE: Text = Text::Sentences(1);
    pub const PARAGRAPH: Text = Text::Paragraphs(1);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vehicle {
    Manufacture,
    Make,
}

impl Domain {
    /// Every domain, with default arguments.
    #[must_use]
    pub fn catalog() -> Vec<Domain> {
        use Domain as D;
        vec![
            D::Address(Address::Full),
            D::Address(Address::Country),
            D::Address(Address::CountryCode),
            D::Address(Address::State),
            D::Address(Address::StateShort),
            D::Address(Address::County),
            D::Address(Address::City),
            D::Address(Address::StreetName),
            D::Address(Address::StreetAddress),
            D::Address(Address::BuildingNumber),
            D::Address(Address::PostCode),
            D::Address(Address::TimeZone),
            D::Address(Address::Formatted),
            D::Bank(Bank::Name),
            D::Bank(Bank::Iban),
            D::Bank(Bank::Bban),
            D::Bank(Bank::SwiftBic),
            D::Car(Car::Brand),
            D::Company(Company::Name),
            D::Company(Company::Suffix),
            D::CreditCard(CreditCard::Number),
            D::CreditCard(CreditCard::Type),
            D::CreditCard(CreditCard::Expiry),
            D::Internet(Internet::Username),
            D::Internet(Internet::Email),
            D::Internet(Internet::Domain),
            D::Internet(Internet::Hashtag),
            D::Internet(Internet::Url),
            D::Internet(Internet::PASSWORD),
            D::Internet(Internet::IMAGE),
            D::Name(Name::First),
            D::Name(Name::Last),
            D::Name(Name::Full),
            D::Name(Name::Prefix),
            D::Name(Name::Suffix),
            D::Name(Name::Title),
            D::Phone(Phone::Number),
            D::Phone(Phone::Cell),
            D::Text(Text::WORD),
            D::Text(Text::SENTENCE),
            D::Text(Text::PARAGRAPH),
            D::Vehicle(Vehicle::Manufacture),
            D::Vehicle(Vehicle::Make),
        ]
    }
}

/// Error parsing a [`Domain`] from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainParseError {
    #[error("Unknown domain: {0}")]
    Unknown(String),

    #[error("Invalid argument {argument:?} for domain {domain}")]
    InvalidArgument { domain: String, argument: String },

    #[error("Wrong number of arguments for domain {domain}: expected {expected}, got {got}")]
    ArgumentCount {
        domain: String,
        expected: usize,
        got: usize,
    },
}

impl FromStr for Domain {
    type Err = DomainParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().split(':');
        let name = parts.next().unwrap_or_default().to_ascii_lowercase();
        let raw_args: Vec<&str> = parts.collect();

        let args = raw_args
            .iter()
            .map(|arg| {
                arg.trim()
                    .parse::<usize>()
                    .map_err(|_| DomainParseError::InvalidArgument {
                        domain: name.clone(),
                        argument: (*arg).to_string(),
                    })
            })
            .collect::<Result<Vec<usize>, _>>()?;

        let arity = |expected: &[usize]| -> Result<(), DomainParseError> {
            if expected.contains(&args.len()) {
                Ok(())
            } else {
                Err(DomainParseError::ArgumentCount {
                    domain: name.clone(),
                    expected: expected.iter().copied().max().unwrap_or(0),
                    got: args.len(),
                })
            }
        };

        let domain = match name.as_str() {
            "internet.password" => {
                arity(&[0, 2])?;
                match args.as_slice() {
                    [min_length, max_length] => Domain::Internet(Internet::Password {
                        min_length: *min_length,
                        max_length: *max_length,
                    }),
                    _ => Domain::Internet(Internet::PASSWORD),
                }
            }
            "internet.image" => {
                arity(&[0, 2])?;
                match args.as_slice() {
                    [width, height] => Domain::Internet(Internet::Image {
                        width: to_u32(&name, *width)?,
                        height: to_u32(&name, *height)?,
                    }),
                    _ => Domain::Internet(Internet::IMAGE),
                }
            }
            "text.words" | "text.sentences" | "text.paragraphs" => {
                arity(&[0, 1])?;
                let count = args.first().copied().unwrap_or(1);
                Domain::Text(match name.as_str() {
                    "text.words" => Text::Words(count),
                    "text.sentences" => Text::Sentences(count),
                    _ => Text::Paragraphs(count),
                })
            }
            _ => {
                arity(&[0])?;
                Domain::catalog()
                    .into_iter()
                    .find(|domain| domain.to_string() == name)
                    .ok_or_else(|| DomainParseError::Unknown(s.to_string()))?
            }
        };
        Ok(domain)
    }
}

fn to_u32(domain: &str, value: usize) -> Result<u32, DomainParseError> {
    u32::try_from(value).map_err(|_| DomainParseError::InvalidArgument {
        domain: domain.to_string(),
        argument: value.to_string(),
    })
}

impl fmt::Display for Domain {
    /// The textual form; arguments are omitted when they equal the defaults.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Domain::Address(address) => match address {
                Address::Full => "address.full",
                Address::Country => "address.country",
                Address::CountryCode => "address.country_code",
                Address::State => "address.state",
                Address::StateShort => "address.state_short",
                Address::County => "address.county",
                Address::City => "address.city",
                Address::StreetName => "address.street_name",
                Address::StreetAddress => "address.street_address",
                Address::BuildingNumber => "address.building_number",
                Address::PostCode => "address.post_code",
                Address::TimeZone => "address.time_zone",
                Address::Formatted => "address.formatted",
            },
            Domain::Bank(bank) => match bank {
                Bank::Name => "bank.name",
                Bank::Iban => "bank.iban",
                Bank::Bban => "bank.bban",
                Bank::SwiftBic => "bank.swift_bic",
            },
            Domain::Car(Car::Brand) => "car.brand",
            Domain::Company(company) => match company {
                Company::Name => "company.name",
                Company::Suffix => "company.suffix",
            },
            Domain::CreditCard(card) => match card {
                CreditCard::Number => "credit_card.number",
                CreditCard::Type => "credit_card.type",
                CreditCard::Expiry => "credit_card.expiry",
            },
            Domain::Internet(internet) => match internet {
                Internet::Username => "internet.username",
                Internet::Email => "internet.email",
                Internet::Domain => "internet.domain",
                Internet::Hashtag => "internet.hashtag",
                Internet::Url => "internet.url",
                Internet::Password {
                    min_length,
                    max_length,
                } => {
                    if *internet == Internet::PASSWORD {
                        "internet.password"
                    } else {
                        return write!(f, "internet.password:{}:{}", min_length, max_length);
                    }
                }
                Internet::Image { width, height } => {
                    if *internet == Internet::IMAGE {
                        "internet.image"
                    } else {
                        return write!(f, "internet.image:{}:{}", width, height);
                    }
                }
            },
            Domain::Name(name) => match name {
                Name::First => "name.first",
                Name::Last => "name.last",
                Name::Full => "name.full",
                Name::Prefix => "name.prefix",
                Name::Suffix => "name.suffix",
                Name::Title => "name.title",
            },
            Domain::Phone(phone) => match phone {
                Phone::Number => "phone.number",
                Phone::Cell => "phone.cell",
            },
            Domain::Text(text) => {
                let (name, count) = match text {
                    Text::Words(count) => ("text.words", count),
                    Text::Sentences(count) => ("text.sentences", count),
                    Text::Paragraphs(count) => ("text.paragraphs", count),
                };
                if *count == 1 {
                    name
                } else {
                    return write!(f, "{}:{}", name, count);
                }
            }
            Domain::Vehicle(vehicle) => match vehicle {
                Vehicle::Manufacture => "vehicle.manufacture",
                Vehicle::Make => "vehicle.make",
            },
        };
        f.write_str(name)
    }
}
