use crate::models::{ML, NormalizedIngredient, RawDrink, RawIngredientSlot};
use crate::units::parse_measure_ml;

/// Swatch used for ingredients that cannot be charted.
pub const UNSUPPORTED_COLOR: &str = "#cccccc";

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

/// Normalize one slot; `None` when the slot has no ingredient name.
#[must_use]
pub fn normalize_slot(slot: RawIngredientSlot<'_>) -> Option<NormalizedIngredient> {
    let name = non_blank(slot.ingredient)?;
    let original_measure = non_blank(slot.measure);
    let amount = original_measure.and_then(parse_measure_ml);

    Some(NormalizedIngredient {
        name: name.to_string(),
        amount,
        unit: amount.map(|_| ML.to_string()),
        original_measure: original_measure.map(str::to_string),
    })
}

/// Walk the 15 ingredient/measure slots in order.
///
/// Every slot with a name yields exactly one entry, whether or not its
/// measurement could be converted.
#[must_use]
pub fn normalize_ingredients(drink: &RawDrink) -> Vec<NormalizedIngredient> {
    let out: Vec<_> = drink.slots().filter_map(normalize_slot).collect();
    tracing::trace!(
        drink_id = %drink.id,
        total = out.len(),
        supported = out.iter().filter(|i| i.is_supported()).count(),
        "normalized ingredients"
    );
    out
}

/// Split into (chart-eligible, unsupported), both in original order.
#[must_use]
pub fn split_supported(
    ingredients: &[NormalizedIngredient],
) -> (Vec<&NormalizedIngredient>, Vec<&NormalizedIngredient>) {
    ingredients.iter().partition(|i| i.is_supported())
}
