//! Pure transforms over the three upstream collections. Every endpoint is a
//! projection of one of these; none of them touch the network.

use std::collections::BTreeMap;

use crate::models::{Benefit, BenefitWithCard, Card, RangeFilter, ReportBenefit, YearGroup};

/// Year key of a benefit: the first four characters of `fecha`. Dates are not
/// validated upstream, so a short or malformed date yields whatever prefix it
/// has.
pub fn year_of(benefit: &Benefit) -> String {
    benefit.date.chars().take(4).collect()
}

/// First filter in input order matching the program, if any.
fn filter_for<'a>(filters: &'a [RangeFilter], program_id: i64) -> Option<&'a RangeFilter> {
    filters.iter().find(|f| f.program_id == program_id)
}

/// First card in input order matching the id, if any.
fn card_for(cards: &[Card], card_id: i64) -> Option<&Card> {
    cards.iter().find(|c| c.id == card_id)
}

/// Partition benefits by year. Relative order within a group follows the
/// input; key order is chosen by the caller at serialization time.
pub fn group_by_year(benefits: &[Benefit]) -> BTreeMap<String, Vec<Benefit>> {
    let mut groups: BTreeMap<String, Vec<Benefit>> = BTreeMap::new();
    for benefit in benefits {
        groups
            .entry(year_of(benefit))
            .or_default()
            .push(benefit.clone());
    }
    groups
}

/// Total `monto` per year.
pub fn sum_amount_by_year(benefits: &[Benefit]) -> BTreeMap<String, f64> {
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    for benefit in benefits {
        *totals.entry(year_of(benefit)).or_default() += benefit.amount;
    }
    totals
}

/// Number of benefits per year.
pub fn count_by_year(benefits: &[Benefit]) -> BTreeMap<String, usize> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for benefit in benefits {
        *counts.entry(year_of(benefit)).or_default() += 1;
    }
    counts
}

/// Keep the benefits whose amount falls inside their program's filter range,
/// both bounds inclusive. A benefit without a matching filter is dropped.
pub fn filter_by_range(benefits: &[Benefit], filters: &[RangeFilter]) -> Vec<Benefit> {
    benefits
        .iter()
        .filter(|b| {
            filter_for(filters, b.program_id)
                .map(|f| b.amount >= f.min && b.amount <= f.max)
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

/// Attach each benefit's card, resolved through its program's filter. A
/// missing filter or card leaves the benefit without a `ficha`, not an error.
pub fn join_cards(
    benefits: &[Benefit],
    filters: &[RangeFilter],
    cards: &[Card],
) -> Vec<BenefitWithCard> {
    benefits
        .iter()
        .map(|benefit| BenefitWithCard {
            benefit: benefit.clone(),
            card: filter_for(filters, benefit.program_id)
                .and_then(|f| card_for(cards, f.card_id))
                .cloned(),
        })
        .collect()
}

/// The `/benefits` report: every benefit annotated with its year, a `view`
/// marker and its card, bucketed per year and sorted newest year first.
pub fn build_year_report(
    benefits: &[Benefit],
    filters: &[RangeFilter],
    cards: &[Card],
) -> Vec<YearGroup> {
    let mut groups: BTreeMap<String, Vec<ReportBenefit>> = BTreeMap::new();
    for benefit in benefits {
        let year = year_of(benefit);
        let card = filter_for(filters, benefit.program_id)
            .and_then(|f| card_for(cards, f.card_id))
            .cloned();
        groups.entry(year.clone()).or_default().push(ReportBenefit {
            benefit: benefit.clone(),
            year,
            view: true,
            card,
        });
    }

    let mut report: Vec<YearGroup> = groups
        .into_iter()
        .map(|(year, benefits)| YearGroup {
            // year buckets compare numerically here, not as strings
            year: year.parse().unwrap_or_default(),
            num: benefits.len(),
            benefits,
        })
        .collect();
    report.sort_by(|a, b| b.year.cmp(&a.year));
    report
}
