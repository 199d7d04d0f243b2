//! Arbitrage detection over a best-odds mapping.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::{BestOdds, Rejection};

/// Recommended minimum margin, in percent.
pub const DEFAULT_MIN_MARGIN_PERCENT: Decimal = dec!(2.0);

/// Decimal places the implied probability is settled to before comparing it
/// with 1. Reciprocals are truncated at 28 digits, so a fair book can sum to
/// `0.999...9` without this.
pub const IMPLIED_PRECISION_DP: u32 = 20;

/// A market whose best prices sum to less than certainty by at least the
/// configured margin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    best_odds: BestOdds,
    implied: Decimal,
    margin: Decimal,
}

impl Detection {
    #[must_use]
    pub const fn best_odds(&self) -> &BestOdds {
        &self.best_odds
    }

    /// Total implied probability, strictly between 0 and 1.
    #[must_use]
    pub const fn implied(&self) -> Decimal {
        self.implied
    }

    /// Profit margin in percent.
    #[must_use]
    pub const fn margin(&self) -> Decimal {
        self.margin
    }
}

/// Sum of `1 / price` over every positively priced entry.
///
/// Non-positive prices contribute nothing.
#[must_use]
pub fn implied_probability(best_odds: &BestOdds) -> Decimal {
    best_odds
        .entries()
        .iter()
        .filter(|e| e.price() > Decimal::ZERO)
        .map(|e| Decimal::ONE / e.price())
        .sum()
}

/// Classify a market as arbitrageable or not.
///
/// A margin exactly equal to `min_margin_percent` qualifies.
///
/// # Errors
///
/// - [`Rejection::NoArbitrage`] when implied probability is 1 or more
/// - [`Rejection::OutOfRange`] when prices are so large every reciprocal vanishes
/// - [`Rejection::SubThresholdMargin`] when the margin is below `min_margin_percent`
pub fn detect(best_odds: BestOdds, min_margin_percent: Decimal) -> Result<Detection, Rejection> {
    let implied = implied_probability(&best_odds);

    if implied.round_dp(IMPLIED_PRECISION_DP) >= Decimal::ONE {
        return Err(Rejection::NoArbitrage { implied });
    }
    if implied <= Decimal::ZERO {
        return Err(Rejection::OutOfRange {
            market_key: best_odds.market_key().clone(),
        });
    }

    let margin = (Decimal::ONE - implied) * Decimal::ONE_HUNDRED;

    if margin < min_margin_percent {
        return Err(Rejection::SubThresholdMargin {
            margin,
            min_margin: min_margin_percent,
        });
    }

    Ok(Detection {
        best_odds,
        implied,
        margin,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BestPrice, EventLabel, MarketKey};

    fn odds(prices: &[(&str, Decimal)]) -> BestOdds {
        BestOdds::new(
            EventLabel::new("A vs B", None),
            MarketKey::from("h2h"),
            prices
                .iter()
                .map(|(name, price)| BestPrice::new(*name, *price, "Book"))
                .collect(),
        )
    }

    #[test]
    fn default_threshold_is_two_percent() {
        assert_eq!(DEFAULT_MIN_MARGIN_PERCENT, dec!(2));
    }

    #[test]
    fn detects_two_way_arbitrage() {
        let detection = detect(odds(&[("A", dec!(2.10)), ("B", dec!(2.05))]), dec!(2.0)).unwrap();

        assert_eq!(detection.implied().round_dp(4), dec!(0.9640));
        assert_eq!(detection.margin().round_dp(2), dec!(3.60));
        assert_eq!(detection.best_odds().len(), 2);
    }

    #[test]
    fn rejects_three_way_without_arbitrage() {
        let result = detect(
            odds(&[("Home", dec!(2.6)), ("Draw", dec!(3.4)), ("Away", dec!(3.0))]),
            dec!(2.0),
        );
        match result {
            Err(Rejection::NoArbitrage { implied }) => {
                assert_eq!(implied.round_dp(3), dec!(1.012));
            }
            other => panic!("expected NoArbitrage, got {other:?}"),
        }
    }

    #[test]
    fn implied_of_exactly_one_is_not_arbitrage() {
        let result = detect(odds(&[("A", dec!(2)), ("B", dec!(2))]), Decimal::ZERO);
        assert!(matches!(result, Err(Rejection::NoArbitrage { .. })));
    }

    #[test]
    fn fair_books_are_not_arbitrage_at_zero_margin() {
        for prices in [
            &[("A", dec!(3)), ("B", dec!(3)), ("C", dec!(3))][..],
            &[("A", dec!(1.2)), ("B", dec!(12)), ("C", dec!(12))][..],
            &[("A", dec!(1.2)), ("B", dec!(6))][..],
        ] {
            let result = detect(odds(prices), Decimal::ZERO);
            assert!(
                matches!(result, Err(Rejection::NoArbitrage { .. })),
                "{prices:?} gave {result:?}"
            );
        }
    }

    #[test]
    fn vanishing_reciprocals_are_out_of_range() {
        let huge = dec!(70000000000000000000000000000);
        let result = detect(odds(&[("A", huge), ("B", huge)]), dec!(2.0));
        assert_eq!(
            result.unwrap_err(),
            Rejection::OutOfRange {
                market_key: MarketKey::from("h2h")
            }
        );
    }

    #[test]
    fn one_percent_margin_is_sub_threshold() {
        // 0.5 + 0.25 + 0.16 + 0.08 = 0.99
        let result = detect(
            odds(&[
                ("A", dec!(2)),
                ("B", dec!(4)),
                ("C", dec!(6.25)),
                ("D", dec!(12.5)),
            ]),
            dec!(2.0),
        );
        assert_eq!(
            result.unwrap_err(),
            Rejection::SubThresholdMargin {
                margin: dec!(1.00),
                min_margin: dec!(2.0),
            }
        );
    }

    #[test]
    fn two_and_a_half_percent_margin_is_accepted() {
        // 0.625 + 0.25 + 0.1 = 0.975
        let detection = detect(
            odds(&[("Home", dec!(1.6)), ("Draw", dec!(4)), ("Away", dec!(10))]),
            dec!(2.0),
        )
        .unwrap();
        assert_eq!(detection.implied(), dec!(0.975));
        assert_eq!(detection.margin(), dec!(2.5));
    }

    #[test]
    fn margin_equal_to_threshold_is_accepted() {
        // 0.5 + 0.4 + 0.08 = 0.98
        let detection = detect(
            odds(&[("A", dec!(2)), ("B", dec!(2.5)), ("C", dec!(12.5))]),
            dec!(2.0),
        )
        .unwrap();
        assert_eq!(detection.margin(), dec!(2.0));
    }

    #[test]
    fn non_positive_prices_are_excluded_from_sum() {
        let best = odds(&[("A", dec!(2)), ("B", dec!(4)), ("C", dec!(0))]);
        assert_eq!(implied_probability(&best), dec!(0.75));

        let best = odds(&[("A", dec!(2)), ("B", dec!(-4))]);
        assert_eq!(implied_probability(&best), dec!(0.5));
    }
}
