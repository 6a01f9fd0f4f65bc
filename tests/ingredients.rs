mod common;

use cocktails::ingredients::{normalize_ingredients, split_supported};
use cocktails::models::{Drink, DrinkResponse, INGREDIENT_SLOTS, first_drink};

use common::{drink_with_slots, margarita, margarita_json};

#[test]
fn margarita_is_normalized_in_slot_order() {
    let out = normalize_ingredients(&margarita());
    let names: Vec<_> = out.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["Tequila", "Triple sec", "Lime juice", "Salt"]);

    let tequila = &out[0];
    assert!((tequila.amount.unwrap() - 44.36025).abs() < 1e-3);
    assert_eq!(tequila.unit.as_deref(), Some("ml"));
    assert_eq!(tequila.original_measure.as_deref(), Some("1 1/2 oz"));

    // no measure at all: kept, but not chartable
    let salt = &out[3];
    assert_eq!(salt.amount, None);
    assert_eq!(salt.unit, None);
    assert_eq!(salt.original_measure, None);
}

#[test]
fn unnamed_slots_are_skipped_and_unparsed_measures_kept() {
    let drink = drink_with_slots(
        "1",
        "Test",
        &[
            (Some("Gin"), Some("2 cl")),
            (Some("   "), Some("1 oz")),
            (None, Some("1 oz")),
            (Some("Bitters"), Some("2 dashes")),
            (Some(" Soda water "), Some(" Top ")),
            (Some("Vermouth"), Some("1/0 oz")),
        ],
    );
    let out = normalize_ingredients(&drink);
    assert_eq!(out.len(), 4);
    assert_eq!(out[0].amount, Some(20.0));

    assert_eq!(out[1].name, "Bitters");
    assert_eq!(out[1].amount, None);
    assert_eq!(out[1].original_measure.as_deref(), Some("2 dashes"));

    assert_eq!(out[2].name, "Soda water");
    assert_eq!(out[2].original_measure.as_deref(), Some("Top"));

    assert_eq!(out[3].name, "Vermouth");
    assert_eq!(out[3].amount, None);
}

#[test]
fn output_never_exceeds_slot_count() {
    let slots: Vec<_> = (0..INGREDIENT_SLOTS)
        .map(|_| (Some("Ice"), Some("1 cup")))
        .collect();
    let drink = drink_with_slots("2", "Ice", &slots);
    let out = normalize_ingredients(&drink);
    assert_eq!(out.len(), INGREDIENT_SLOTS);
    assert!(out.iter().all(|i| i.amount.is_some_and(|a| a > 0.0)));
}

#[test]
fn split_keeps_order_within_groups() {
    let out = normalize_ingredients(&margarita());
    let (charted, uncharted) = split_supported(&out);
    let charted: Vec<_> = charted.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(charted, ["Tequila", "Triple sec", "Lime juice"]);
    assert_eq!(uncharted.len(), 1);
    assert_eq!(uncharted[0].name, "Salt");
}

#[test]
fn drink_view_from_lookup_payload() {
    let resp: DrinkResponse =
        serde_json::from_value(serde_json::json!({ "drinks": [margarita_json()] })).unwrap();
    let drink = Drink::from_raw(&first_drink(resp).unwrap());

    assert_eq!(drink.id, "11007");
    assert_eq!(drink.glass.as_deref(), Some("Cocktail glass"));
    assert_eq!(drink.alcoholic.as_deref(), Some("Alcoholic"));
    assert_eq!(drink.ingredients.len(), 4);
    assert_eq!(drink.list_item().name, "Margarita");
}

#[test]
fn malformed_drink_is_skipped_not_the_whole_list() {
    let body = serde_json::json!({
        "drinks": [
            { "idDrink": "1", "strDrink": null },
            margarita_json(),
            "not a drink",
        ]
    });
    let resp: DrinkResponse = serde_json::from_value(body).unwrap();
    assert_eq!(resp.drinks().len(), 1);
    assert_eq!(resp.drinks()[0].id, "11007");
}

#[test]
fn null_and_odd_drinks_fields_mean_no_data() {
    for body in [
        r#"{"drinks":null}"#,
        r#"{"drinks":[]}"#,
        r#"{"drinks":"no data found"}"#,
        r#"{}"#,
    ] {
        let resp: DrinkResponse = serde_json::from_str(body).unwrap();
        assert!(resp.is_empty(), "{body}");
        assert!(first_drink(resp).is_none());
    }
}
