//! Unit prices of commodities, learned from commodity declarations.

use std::collections::BTreeMap;

use merchant_notes::CommodityDeclaration;
use merchant_numerals::Translator;

use crate::config::PricePolicy;
use crate::error::{GuideError, GuideResult};

/// The price of one unit of a commodity.
#[derive(Debug, Clone, PartialEq)]
pub struct Price {
    pub credits: f64,
    /// The whole part of `credits` as an intergalactic numeral, when it can be
    /// written with the words learned so far.
    pub intergal: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Ledger {
    policy: PricePolicy,
    prices: BTreeMap<String, Price>,
}

impl Ledger {
    pub fn new(policy: PricePolicy) -> Self {
        Self {
            policy,
            prices: BTreeMap::new(),
        }
    }

    pub fn policy(&self) -> PricePolicy {
        self.policy
    }

    /// Record a unit price, honouring the ledger's [`PricePolicy`].
    pub fn record_commodity_price(&mut self, name: &str, credits: f64, intergal: Option<String>) {
        match (self.policy, self.prices.get_mut(name)) {
            (PricePolicy::KeepFirst, Some(price)) => {
                if price.intergal.is_none() {
                    price.intergal = intergal;
                }
            }
            _ => {
                self.prices.insert(name.to_string(), Price { credits, intergal });
            }
        }
    }

    /// Work out and record the unit price a commodity declaration implies.
    ///
    /// `glob glob Silver is 34 Credits` with `glob` bound to `I` records
    /// Silver at 17 Credits a unit.
    pub fn record_declaration(
        &mut self,
        translator: &Translator,
        declaration: &CommodityDeclaration,
    ) -> GuideResult<&Price> {
        let amount = translator.intergal_to_arabic(&declaration.intergal.join(" "))?;
        let credits = declaration.credits as f64 / f64::from(amount);
        let intergal = translator.arabic_to_intergal(credits.trunc() as u32).ok();

        self.record_commodity_price(&declaration.commodity, credits, intergal);
        self.unit_price(&declaration.commodity)
    }

    pub fn price_of(&self, name: &str) -> Option<&Price> {
        self.prices.get(name)
    }

    /// Like [`Ledger::price_of`], but failing for unpriced commodities.
    pub fn unit_price(&self, name: &str) -> GuideResult<&Price> {
        self.price_of(name).ok_or_else(|| GuideError::UnknownCommodity {
            name: name.to_string(),
        })
    }

    /// Every priced commodity, by name.
    pub fn prices(&self) -> impl Iterator<Item = (&str, &Price)> + '_ {
        self.prices.iter().map(|(name, price)| (name.as_str(), price))
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use merchant_notes::{Note, classify};
    use pretty_assertions::assert_eq;
    use testresult::TestResult;

    fn merchant_translator() -> TestResult<Translator> {
        let mut translator = Translator::new();
        translator.record_base_mapping("glob", "I")?;
        translator.record_base_mapping("prok", "V")?;
        translator.record_base_mapping("pish", "X")?;
        translator.record_base_mapping("tegj", "L")?;
        Ok(translator)
    }

    fn declaration(note: &str) -> CommodityDeclaration {
        match classify(note) {
            Note::Commodity(declaration) => declaration,
            other => panic!("expected a commodity declaration, got {other:?}"),
        }
    }

    #[test]
    fn test_record_declaration() -> TestResult {
        let translator = merchant_translator()?;
        let mut ledger = Ledger::default();

        let silver = declaration("glob glob Silver is 34 Credits");
        let price = ledger.record_declaration(&translator, &silver)?;
        assert_eq!(
            price,
            &Price {
                credits: 17.0,
                intergal: Some("pish prok glob glob".into()),
            }
        );

        let iron = declaration("pish pish Iron is 3910 Credits");
        let price = ledger.record_declaration(&translator, &iron)?;
        assert_eq!(price.credits, 195.5);
        assert_eq!(price.intergal, None, "195 needs C, which has no word");
        Ok(())
    }

    #[test]
    fn test_fractional_unit_price_below_one() -> TestResult {
        let translator = merchant_translator()?;
        let mut ledger = Ledger::default();

        let dust = declaration("pish Dust is 5 Credits");
        let price = ledger.record_declaration(&translator, &dust)?;
        assert_eq!(price.credits, 0.5);
        assert_eq!(price.intergal, None);
        Ok(())
    }

    #[test]
    fn test_untranslatable_amount_records_nothing() -> TestResult {
        let translator = merchant_translator()?;
        let mut ledger = Ledger::default();

        let gold = declaration("glob blarg Gold is 10 Credits");
        assert!(matches!(
            ledger.record_declaration(&translator, &gold),
            Err(GuideError::Numeral(_))
        ));
        assert!(ledger.is_empty());
        Ok(())
    }

    #[test]
    fn test_overwrite_policy() {
        let mut ledger = Ledger::new(PricePolicy::Overwrite);
        ledger.record_commodity_price("Gold", 10.0, Some("pish".into()));
        ledger.record_commodity_price("Gold", 20.0, None);

        assert_eq!(
            ledger.price_of("Gold"),
            Some(&Price {
                credits: 20.0,
                intergal: None
            })
        );
    }

    #[test]
    fn test_keep_first_policy_only_fills_gaps() {
        let mut ledger = Ledger::new(PricePolicy::KeepFirst);
        assert_eq!(ledger.policy(), PricePolicy::KeepFirst);
        ledger.record_commodity_price("Gold", 10.0, None);
        ledger.record_commodity_price("Gold", 20.0, Some("pish pish".into()));
        ledger.record_commodity_price("Gold", 30.0, Some("tegj".into()));

        assert_eq!(
            ledger.price_of("Gold"),
            Some(&Price {
                credits: 10.0,
                intergal: Some("pish pish".into())
            })
        );
    }

    #[test]
    fn test_unknown_commodity() {
        let ledger = Ledger::default();
        assert_eq!(ledger.price_of("Iron"), None);
        assert!(matches!(
            ledger.unit_price("Iron"),
            Err(GuideError::UnknownCommodity { name }) if name == "Iron"
        ));
    }

    #[test]
    fn test_prices_are_listed_by_name() {
        let mut ledger = Ledger::default();
        ledger.record_commodity_price("Silver", 17.0, None);
        ledger.record_commodity_price("Gold", 14450.0, None);

        let names: Vec<&str> = ledger.prices().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Gold", "Silver"]);
        assert_eq!(ledger.len(), 2);
    }
}
