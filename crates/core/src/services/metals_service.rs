use std::collections::BTreeMap;

use crate::models::analytics::MetalPosition;
use crate::models::bucket::MetalHolding;
use crate::models::spot::SpotPrices;

/// Market value of all holdings: Σ weight × quantity × spot(metal).
pub fn holdings_value(holdings: &[MetalHolding], spot: &SpotPrices) -> f64 {
    holdings
        .iter()
        .map(|h| h.ounces() * spot.price_of(&h.metals))
        .sum()
}

/// Group holdings by (metal, design) and value each group at spot.
///
/// With `filter`, only positions of that metal (case-insensitive) are kept.
/// Positions are ordered by metal, then design.
pub fn positions(
    holdings: &[MetalHolding],
    spot: &SpotPrices,
    filter: Option<&str>,
) -> Vec<MetalPosition> {
    // (ounces, total cost) per group
    let mut groups: BTreeMap<(String, String), (f64, f64)> = BTreeMap::new();
    for holding in holdings {
        let ounces = holding.ounces();
        let entry = groups
            .entry((holding.metals.clone(), holding.design.clone()))
            .or_insert((0.0, 0.0));
        entry.0 += ounces;
        entry.1 += holding.buy_price * ounces;
    }

    groups
        .into_iter()
        .filter(|((metal, _), _)| filter.map_or(true, |f| metal.eq_ignore_ascii_case(f.trim())))
        .map(|((metal, design), (ounces, cost))| {
            let spot_price = spot.price_of(&metal);
            let market_value = ounces * spot_price;
            MetalPosition {
                avg_buy_price: if ounces > 0.0 { cost / ounces } else { 0.0 },
                gain_loss: market_value - cost,
                metal,
                design,
                ounces,
                spot_price,
                market_value,
            }
        })
        .collect()
}
