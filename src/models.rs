use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::ingredients::normalize_ingredients;

/// Number of positional `strIngredientN` / `strMeasureN` pairs per drink.
pub const INGREDIENT_SLOTS: usize = 15;

/* ---------- TheCocktailDB payload ---------- */

/// `{ "drinks": [...] | null }` as returned by both search and lookup.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct DrinkResponse {
    #[serde(default, deserialize_with = "drinks_or_none")]
    pub drinks: Option<Vec<RawDrink>>,
}

// the API sometimes sends a sentence ("no data found") instead of null;
// a record that doesn't parse is skipped, the rest of the list is kept
fn drinks_or_none<'de, D>(de: D) -> Result<Option<Vec<RawDrink>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let Some(JsonValue::Array(items)) = Option::<JsonValue>::deserialize(de)? else {
        return Ok(None);
    };

    let drinks = items
        .into_iter()
        .enumerate()
        .filter_map(|(i, item)| {
            serde_json::from_value::<RawDrink>(item)
                .map_err(|e| tracing::warn!(index = i, error = %e, "skipping malformed drink"))
                .ok()
        })
        .collect();
    Ok(Some(drinks))
}

impl DrinkResponse {
    /// `null` and `[]` both mean "no data".
    #[must_use]
    pub fn drinks(&self) -> &[RawDrink] {
        self.drinks.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.drinks().is_empty()
    }
}

/// First drink of a lookup response, if any.
#[must_use]
pub fn first_drink(response: DrinkResponse) -> Option<RawDrink> {
    response.drinks.and_then(|d| d.into_iter().next())
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct RawDrink {
    #[serde(rename = "idDrink")]
    pub id: String,
    #[serde(rename = "strDrink")]
    pub name: String,
    #[serde(rename = "strDrinkThumb", default)]
    pub thumb: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    #[serde(rename = "strGlass", default)]
    pub glass: Option<String>,
    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,
    #[serde(rename = "strAlcoholic", default)]
    pub alcoholic: Option<String>,

    // strIngredient1..15, strMeasure1..15 and every field we do not model
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

/// One positional ingredient/measure pair, borrowed from the payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawIngredientSlot<'a> {
    pub ingredient: Option<&'a str>,
    pub measure: Option<&'a str>,
}

impl RawDrink {
    fn text_field(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(JsonValue::as_str)
    }

    /// Slot `n` (1-based); `None` outside `1..=15`.
    #[must_use]
    pub fn slot(&self, n: usize) -> Option<RawIngredientSlot<'_>> {
        if !(1..=INGREDIENT_SLOTS).contains(&n) {
            return None;
        }
        Some(RawIngredientSlot {
            ingredient: self.text_field(&format!("strIngredient{n}")),
            measure: self.text_field(&format!("strMeasure{n}")),
        })
    }

    /// All 15 slots in positional order.
    pub fn slots(&self) -> impl Iterator<Item = RawIngredientSlot<'_>> {
        (1..=INGREDIENT_SLOTS).filter_map(|n| self.slot(n))
    }
}

/* ---------- App models ---------- */

pub const ML: &str = "ml";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NormalizedIngredient {
    pub name: String,
    pub amount: Option<f64>, // millilitres
    pub unit: Option<String>, // "ml" when amount is set
    pub original_measure: Option<String>,
}

impl NormalizedIngredient {
    /// Chart-eligible: a strictly positive amount in millilitres.
    #[must_use]
    pub fn is_supported(&self) -> bool {
        self.amount.is_some_and(|a| a > 0.0)
    }
}

/// Minimal drink information for list views and the viewed-drinks store.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DrinkListItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl From<&RawDrink> for DrinkListItem {
    fn from(d: &RawDrink) -> Self {
        Self {
            id: d.id.clone(),
            name: d.name.clone(),
            image: d.thumb.clone(),
        }
    }
}

/// Full drink details for the detail view.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Drink {
    pub id: String,
    pub name: String,
    pub image: Option<String>,
    pub instructions: Option<String>,
    pub ingredients: Vec<NormalizedIngredient>,
    pub glass: Option<String>,
    pub category: Option<String>,
    pub alcoholic: Option<String>,
}

impl Drink {
    #[must_use]
    pub fn from_raw(raw: &RawDrink) -> Self {
        Self {
            id: raw.id.clone(),
            name: raw.name.clone(),
            image: raw.thumb.clone(),
            instructions: raw.instructions.clone(),
            ingredients: normalize_ingredients(raw),
            glass: raw.glass.clone(),
            category: raw.category.clone(),
            alcoholic: raw.alcoholic.clone(),
        }
    }

    #[must_use]
    pub fn list_item(&self) -> DrinkListItem {
        DrinkListItem {
            id: self.id.clone(),
            name: self.name.clone(),
            image: self.image.clone(),
        }
    }
}
