//! The fake-value facade.
//!
//! [`Faker`] is the single recovery point for resolver failures: a key the
//! dataset cannot serve falls back to a short random alphanumeric string
//! and a log line.

use std::collections::HashSet;

use rand::distributions::uniform::SampleRange;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use fx_core::strings::{self, ALPHANUMERIC, LOWERCASE_LETTERS, NUMBERS};
use fx_core::{collections, random_optional};

use crate::config::FakerConfig;
use crate::dataset::Dataset;
use crate::domain::{
    Address, Bank, Car, Company, CreditCard, Domain, Internet, Name, Phone, Text, Vehicle,
};
use crate::pattern::{alpha_numerify, bothify, letterify, numerify};
use crate::resolver::Resolver;

/// Produces fake strings from a dataset.
///
/// # Example
///
/// ```rust
/// use fx_faker::{Dataset, Domain, Faker, Name};
/// use fx_rng::SeededRng;
///
/// let dataset = Dataset::bundled().unwrap();
/// let faker = Faker::new(&dataset);
/// let mut rng = SeededRng::new(42);
///
/// let name = faker.fake(&Domain::Name(Name::Full), &mut rng);
/// assert!(!name.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Faker<'d> {
    resolver: Resolver<'d>,
    config: FakerConfig,
}

impl Faker<'static> {
    /// Facade over the process-wide dataset, configured from the environment.
    #[must_use]
    pub fn global() -> Self {
        Faker::new(Dataset::global()).with_config(FakerConfig::from_env())
    }
}

impl<'d> Faker<'d> {
    #[must_use]
    pub fn new(dataset: &'d Dataset) -> Self {
        Self {
            resolver: Resolver::new(dataset),
            config: FakerConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: FakerConfig) -> Self {
        debug_assert!(config.fallback_length > 0, "Fallback must not be empty");
        self.config = config;
        self
    }

    #[must_use]
    pub fn config(&self) -> &FakerConfig {
        &self.config
    }

    /// The resolver, for callers that want failures instead of fallbacks.
    #[must_use]
    pub fn resolver(&self) -> &Resolver<'d> {
        &self.resolver
    }

    /// Resolve `key`, or `None` (logging the cause) on failure.
    pub fn value<R: RngCore + ?Sized>(&self, key: &str, rng: &mut R) -> Option<String> {
        match self.resolver.resolve(key, rng) {
            Ok(value) => Some(value),
            Err(e) => {
                if self.config.log_failures {
                    tracing::warn!("Faker lookup for {} failed: {}", key, e);
                }
                None
            }
        }
    }

    /// Resolve `key`, or fall back to a random alphanumeric string.
    pub fn generate<R: RngCore + ?Sized>(&self, key: &str, rng: &mut R) -> String {
        match self.value(key, rng) {
            Some(value) => value,
            None => strings::string_of_length(self.config.fallback_length, ALPHANUMERIC, rng),
        }
    }

    /// A fake string for `domain`.
    pub fn fake<R: RngCore + ?Sized>(&self, domain: &Domain, rng: &mut R) -> String {
        match *domain {
            Domain::Address(address) => self.address(address, rng),
            Domain::Bank(bank) => self.bank(bank, rng),
            Domain::Car(car) => self.car(car, rng),
            Domain::Company(company) => self.company(company, rng),
            Domain::CreditCard(card) => self.credit_card(card, rng),
            Domain::Internet(internet) => self.internet(internet, rng),
            Domain::Name(name) => self.name(name, rng),
            Domain::Phone(phone) => self.phone(phone, rng),
            Domain::Text(text) => self.text(text, rng),
            Domain::Vehicle(vehicle) => self.vehicle(vehicle, rng),
        }
    }

    /// `length` fake strings for `domain`.
    pub fn fake_many<R: RngCore + ?Sized>(
        &self,
        domain: &Domain,
        length: usize,
        rng: &mut R,
    ) -> Vec<String> {
        collections::repeat_with(length, rng, |rng| self.fake(domain, rng))
    }

    /// Fake strings for `domain`, with the count drawn from `lengths` first.
    pub fn fake_many_in<Rg, R>(&self, domain: &Domain, lengths: Rg, rng: &mut R) -> Vec<String>
    where
        Rg: SampleRange<usize>,
        R: RngCore + ?Sized,
    {
        let length = collections::length_in(lengths, rng);
        self.fake_many(domain, length, rng)
    }

    /// Up to `length` distinct fake strings from exactly `length` attempts.
    pub fn fake_set_up_to<R: RngCore + ?Sized>(
        &self,
        domain: &Domain,
        length: usize,
        rng: &mut R,
    ) -> HashSet<String> {
        collections::set_up_to_with(length, rng, |rng| self.fake(domain, rng))
    }

    fn address<R: RngCore + ?Sized>(&self, address: Address, rng: &mut R) -> String {
        match address {
            Address::Full => [
                Address::Country,
                Address::City,
                Address::PostCode,
                Address::StreetName,
                Address::BuildingNumber,
            ]
            .iter()
            .map(|part| self.address(*part, rng))
            .collect::<Vec<_>>()
            .join(", "),
            Address::Formatted => {
                let mut parts = vec![
                    format!("country:{}", self.address(Address::Country, rng)),
                    format!("city:{}", self.address(Address::City, rng)),
                    format!("zipCode:{}", self.address(Address::PostCode, rng)),
                    format!("streetName:{}", self.address(Address::StreetName, rng)),
                    format!("streetNumber:{}", self.address(Address::BuildingNumber, rng)),
                ];
                let optional = [
                    ("state", Address::State),
                    ("district", Address::County),
                    ("ward", Address::StateShort),
                ];
                for (label, part) in optional {
                    let entry = format!("{}:{}", label, self.address(part, rng));
                    parts.extend(random_optional(entry, rng));
                }
                parts.join("|")
            }
            Address::Country => self.generate("address.country", rng),
            Address::CountryCode => self.generate("address.country_code", rng),
            Address::State => self.generate("address.state", rng),
            Address::StateShort => self.generate("address.state_abbr", rng),
            Address::County => self.generate("address.county", rng),
            Address::City => self.generate("address.city", rng),
            Address::StreetName => self.generate("address.street_name", rng),
            Address::StreetAddress => {
                let template = self.generate("address.street_address", rng);
                numerify(&template, rng)
            }
            Address::BuildingNumber => {
                let template = self.generate("address.building_number", rng);
                bothify(&template, rng)
            }
            Address::PostCode => {
                let template = self.generate("address.postcode", rng);
                bothify(&template, rng)
            }
            Address::TimeZone => self.generate("address.time_zone", rng),
        }
    }

    fn bank<R: RngCore + ?Sized>(&self, bank: Bank, rng: &mut R) -> String {
        match bank {
            Bank::Name => self.generate("bank.name", rng),
            Bank::Iban => {
                let country = self.generate("bank.ibanDetails.bankCountryCode", rng);
                let check = strings::string_of_length(2, NUMBERS, rng);
                let bban = self.bank(Bank::Bban, rng);
                format!("{}{}{}", country, check, bban)
            }
            Bank::Bban => {
                let letters = self.generate("bank.ibanDetails.ibanLetterCode", rng);
                let letters = letterify(&letters, rng);
                let digits = self.generate("bank.ibanDetails.ibanDigits", rng);
                let digits = numerify(&digits, rng);
                letters + &digits
            }
            Bank::SwiftBic => self.generate("bank.swiftBic", rng),
        }
    }

    fn car<R: RngCore + ?Sized>(&self, car: Car, rng: &mut R) -> String {
        match car {
            Car::Brand => self.generate("car.brand", rng),
        }
    }

    fn company<R: RngCore + ?Sized>(&self, company: Company, rng: &mut R) -> String {
        match company {
            Company::Name => self.generate("company.name", rng),
            Company::Suffix => self.generate("company.suffix", rng),
        }
    }

    fn credit_card<R: RngCore + ?Sized>(&self, card: CreditCard, rng: &mut R) -> String {
        match card {
            CreditCard::Number => self.generate("business.credit_card_numbers", rng),
            CreditCard::Type => self.generate("business.credit_card_types", rng),
            CreditCard::Expiry => self.generate("business.credit_card_expiry_dates", rng),
        }
    }

    fn internet<R: RngCore + ?Sized>(&self, internet: Internet, rng: &mut R) -> String {
        match internet {
            Internet::Username => {
                let mut components = vec![
                    self.generate("name.first_name", rng),
                    self.generate("name.last_name", rng),
                    rng.gen_range(0..10_000).to_string(),
                ];
                components.shuffle(rng);
                components.concat().replace('\'', "").to_lowercase()
            }
            Internet::Email => {
                let username = self.internet(Internet::Username, rng);
                let domain = self.internet(Internet::Domain, rng);
                format!("{}@{}", username, domain)
            }
            Internet::Domain => {
                let company = self.generate("company.name", rng);
                let stem = company
                    .split(' ')
                    .next()
                    .map(|word| alpha_numerify(word).to_lowercase())
                    .unwrap_or_default();
                let stem = if stem.is_empty() {
                    strings::string_of_length(5, LOWERCASE_LETTERS, rng)
                } else {
                    stem
                };
                stem + &self.generate("internet.domain_suffix", rng)
            }
            Internet::Hashtag => self.generate("internet.hashtag", rng),
            Internet::Url => {
                let domain = self.internet(Internet::Domain, rng);
                let username = self.internet(Internet::Username, rng);
                format!("https://{}/{}", domain, username)
            }
            Internet::Password {
                min_length,
                max_length,
            } => {
                let mut password = strings::string_of_length(min_length, ALPHANUMERIC, rng);
                // max below min degrades to exactly min_length characters
                let extra_max = max_length.saturating_sub(min_length);
                if extra_max > 0 {
                    let extra = rng.gen_range(0..=extra_max);
                    password.push_str(&strings::string_of_length(extra, ALPHANUMERIC, rng));
                }
                password
            }
            Internet::Image { width, height } => format!(
                "https://picsum.photos/{}/{}/?image={}",
                width,
                height,
                rng.gen_range(1..=1000)
            ),
        }
    }

    fn name<R: RngCore + ?Sized>(&self, name: Name, rng: &mut R) -> String {
        match name {
            Name::First => self.generate("name.first_name", rng),
            Name::Last => self.generate("name.last_name", rng),
            Name::Full => self.generate("name.name", rng),
            Name::Prefix => self.generate("name.prefix", rng),
            Name::Suffix => self.generate("name.suffix", rng),
            Name::Title => [
                "name.title.descriptor",
                "name.title.level",
                "name.title.job",
            ]
            .iter()
            .map(|key| self.generate(key, rng))
            .collect::<Vec<_>>()
            .join(" "),
        }
    }

    fn phone<R: RngCore + ?Sized>(&self, phone: Phone, rng: &mut R) -> String {
        let key = match phone {
            Phone::Number => "phone_number.formats",
            Phone::Cell => "cell_phone.formats",
        };
        let template = self.generate(key, rng);
        numerify(&template, rng)
    }

    fn text<R: RngCore + ?Sized>(&self, text: Text, rng: &mut R) -> String {
        match text {
            Text::Words(count) => (0..count)
                .map(|_| self.generate("lorem.words", rng))
                .collect::<Vec<_>>()
                .join(" "),
            Text::Sentences(count) => (0..count)
                .map(|_| {
                    let words_count = rng.gen_range(0..10);
                    let sentence = self.text(Text::Words(words_count), rng) + ".";
                    capitalize_first(&sentence)
                })
                .collect::<Vec<_>>()
                .join(" "),
            Text::Paragraphs(count) => (0..count)
                .map(|_| {
                    let sentences_count = rng.gen_range(0..10);
                    self.text(Text::Sentences(sentences_count), rng)
                })
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    fn vehicle<R: RngCore + ?Sized>(&self, vehicle: Vehicle, rng: &mut R) -> String {
        match vehicle {
            Vehicle::Manufacture => self.generate("vehicle.manufacture", rng),
            Vehicle::Make => self.generate("vehicle.makes", rng),
        }
    }
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
