//! Synthetic letter content.
//!
//! [`LetterContent`] is the sole input of the layout step. Its fields are produced by a
//! [`LetterDataSource`], which is injectable so callers can swap the random [`FakeDataSource`] for
//! deterministic fixtures.

use chrono::{Duration, NaiveDate};
use fake::faker::address::en::{BuildingNumber, CityName, SecondaryAddress, StreetName, ZipCode};
use fake::faker::lorem::en::Paragraph;
use fake::faker::name::en::Name;
use fake::Fake;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::LetterVariant;

/// Number of filler paragraphs in every generated letter.
pub const PARAGRAPH_COUNT: usize = 3;

/// Upper bound (in days) for generated past dates.
const MAX_DAYS_IN_PAST: i64 = 365;

/// Format used for the date line, matching an en-US locale date string (`10/19/2026`).
pub const LOCALE_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Capability producing plausible placeholder data for a letter.
pub trait LetterDataSource {
    /// A person name.
    fn name(&mut self) -> String;
    /// First address line, e.g. `"42 Kovacek Road"`.
    fn street_address(&mut self) -> String;
    /// Second address line, e.g. `"Apt. 311"`.
    fn secondary_address(&mut self) -> String;
    /// Postal code followed by the city name.
    fn postal_city(&mut self) -> String;
    /// A date strictly before `today`.
    fn past_date(&mut self, today: NaiveDate) -> NaiveDate;
    /// A paragraph of filler text.
    fn paragraph(&mut self) -> String;
}

/// [`LetterDataSource`] backed by the `fake` crate's English locale.
pub struct FakeDataSource<R = StdRng> {
    rng: R,
}

impl FakeDataSource<StdRng> {
    /// Creates a source seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Creates a reproducible source.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> FakeDataSource<R> {
    /// Wraps an existing random number generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> LetterDataSource for FakeDataSource<R> {
    fn name(&mut self) -> String {
        Name().fake_with_rng(&mut self.rng)
    }

    fn street_address(&mut self) -> String {
        let number: String = BuildingNumber().fake_with_rng(&mut self.rng);
        let street: String = StreetName().fake_with_rng(&mut self.rng);
        format!("{} {}", number, street)
    }

    fn secondary_address(&mut self) -> String {
        SecondaryAddress().fake_with_rng(&mut self.rng)
    }

    fn postal_city(&mut self) -> String {
        let zip: String = ZipCode().fake_with_rng(&mut self.rng);
        let city: String = CityName().fake_with_rng(&mut self.rng);
        format!("{} {}", zip, city)
    }

    fn past_date(&mut self, today: NaiveDate) -> NaiveDate {
        let days = self.rng.gen_range(1..=MAX_DAYS_IN_PAST);
        today - Duration::days(days)
    }

    fn paragraph(&mut self) -> String {
        Paragraph(3..6).fake_with_rng(&mut self.rng)
    }
}

/// Placeholder letter content generated for a single invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LetterContent {
    pub name: String,
    pub address: Vec<String>,
    pub date: Option<NaiveDate>,
    pub opening: String,
    pub paragraphs: Vec<String>,
    pub signature: String,
}

impl LetterContent {
    /// Draws a complete letter from `source`.
    ///
    /// The dated variant replaces the salutation with a past date relative to `today`.
    pub fn generate<S>(source: &mut S, variant: LetterVariant, today: NaiveDate) -> Self
    where
        S: LetterDataSource + ?Sized,
    {
        let name = source.name();
        let address = vec![
            source.street_address(),
            source.secondary_address(),
            source.postal_city(),
        ];

        let (date, opening) = match variant {
            LetterVariant::Greeting => (None, format!("Dear {},", name)),
            LetterVariant::Dated => {
                let date = source.past_date(today);
                (Some(date), format_locale_date(date))
            }
        };

        let paragraphs = (0..PARAGRAPH_COUNT).map(|_| source.paragraph()).collect();
        let signature = source.name();

        Self {
            name,
            address,
            date,
            opening,
            paragraphs,
            signature,
        }
    }
}

/// Formats `date` the way the date line is printed.
pub fn format_locale_date(date: NaiveDate) -> String {
    date.format(LOCALE_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        names: Vec<&'static str>,
        paragraphs: usize,
    }

    impl LetterDataSource for Fixture {
        fn name(&mut self) -> String {
            self.names.remove(0).to_owned()
        }

        fn street_address(&mut self) -> String {
            "1 Main Street".to_owned()
        }

        fn secondary_address(&mut self) -> String {
            "Suite 2".to_owned()
        }

        fn postal_city(&mut self) -> String {
            "12345 Springfield".to_owned()
        }

        fn past_date(&mut self, today: NaiveDate) -> NaiveDate {
            today - Duration::days(10)
        }

        fn paragraph(&mut self) -> String {
            self.paragraphs += 1;
            format!("Paragraph {}.", self.paragraphs)
        }
    }

    fn fixture() -> Fixture {
        Fixture {
            names: vec!["Ada Lovelace", "Charles Babbage"],
            paragraphs: 0,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    #[test]
    fn greeting_variant_addresses_the_recipient() {
        let content = LetterContent::generate(&mut fixture(), LetterVariant::Greeting, today());

        assert_eq!(content.name, "Ada Lovelace");
        assert_eq!(content.opening, "Dear Ada Lovelace,");
        assert_eq!(content.date, None);
        assert_eq!(
            content.address,
            vec!["1 Main Street", "Suite 2", "12345 Springfield"]
        );
        assert_eq!(
            content.paragraphs,
            vec!["Paragraph 1.", "Paragraph 2.", "Paragraph 3."]
        );
        assert_eq!(content.signature, "Charles Babbage");
    }

    #[test]
    fn dated_variant_prints_locale_date() {
        let content = LetterContent::generate(&mut fixture(), LetterVariant::Dated, today());

        assert_eq!(content.date, NaiveDate::from_ymd_opt(2024, 2, 24));
        assert_eq!(content.opening, "2/24/2024");
    }

    #[test]
    fn fake_source_dates_lie_within_the_past_year() {
        let mut source = FakeDataSource::seeded(7);
        for _ in 0..200 {
            let date = source.past_date(today());
            assert!(date < today());
            assert!(date >= today() - Duration::days(MAX_DAYS_IN_PAST));
        }
    }

    #[test]
    fn fake_source_fills_every_field() {
        let content = LetterContent::generate(
            &mut FakeDataSource::seeded(42),
            LetterVariant::Dated,
            today(),
        );

        assert!(!content.name.trim().is_empty());
        assert!(!content.signature.trim().is_empty());
        assert_eq!(content.address.len(), 3);
        assert!(content.address.iter().all(|line| !line.trim().is_empty()));
        assert_eq!(content.paragraphs.len(), PARAGRAPH_COUNT);
        assert!(content.paragraphs.iter().all(|p| !p.trim().is_empty()));

        let parsed = NaiveDate::parse_from_str(&content.opening, LOCALE_DATE_FORMAT).unwrap();
        assert_eq!(Some(parsed), content.date);
    }

    #[test]
    fn seeded_sources_are_reproducible() {
        let a = LetterContent::generate(
            &mut FakeDataSource::seeded(3),
            LetterVariant::Greeting,
            today(),
        );
        let b = LetterContent::generate(
            &mut FakeDataSource::seeded(3),
            LetterVariant::Greeting,
            today(),
        );
        assert_eq!(a, b);
    }
}
