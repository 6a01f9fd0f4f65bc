#![allow(dead_code)]

pub mod mock_api;

use cocktails::models::{DrinkResponse, RawDrink};
use serde_json::{Value, json};

/// A lookup payload shaped like TheCocktailDB's, trimmed to what we read.
pub fn margarita_json() -> Value {
    json!({
        "idDrink": "11007",
        "strDrink": "Margarita",
        "strDrinkAlternate": null,
        "strCategory": "Ordinary Drink",
        "strAlcoholic": "Alcoholic",
        "strGlass": "Cocktail glass",
        "strInstructions": "Rub the rim of the glass with the lime slice to make the salt stick to it. Take care to moisten only the outer rim and sprinkle the salt on it.\nShake the other ingredients with ice, then carefully pour into the glass.",
        "strInstructionsDE": "Reiben Sie den Rand des Glases mit der Limettenscheibe ein.",
        "strDrinkThumb": "https://www.thecocktaildb.com/images/media/drink/5noda61589575158.jpg",
        "strIngredient1": "Tequila",
        "strIngredient2": "Triple sec",
        "strIngredient3": "Lime juice",
        "strIngredient4": "Salt",
        "strIngredient5": null,
        "strIngredient6": null,
        "strIngredient7": null,
        "strIngredient8": null,
        "strIngredient9": null,
        "strIngredient10": null,
        "strIngredient11": null,
        "strIngredient12": null,
        "strIngredient13": null,
        "strIngredient14": null,
        "strIngredient15": null,
        "strMeasure1": "1 1/2 oz ",
        "strMeasure2": "1/2 oz ",
        "strMeasure3": "1 oz ",
        "strMeasure4": null,
        "strMeasure5": null,
        "strMeasure6": null,
        "strMeasure7": null,
        "strMeasure8": null,
        "strMeasure9": null,
        "strMeasure10": null,
        "strMeasure11": null,
        "strMeasure12": null,
        "strMeasure13": null,
        "strMeasure14": null,
        "strMeasure15": null,
        "strImageSource": null,
        "dateModified": "2015-08-18 14:42:59"
    })
}

pub fn margarita() -> RawDrink {
    serde_json::from_value(margarita_json()).expect("margarita fixture")
}

/// Minimal drink with the given slots (1-based, in order).
pub fn drink_with_slots(id: &str, name: &str, slots: &[(Option<&str>, Option<&str>)]) -> RawDrink {
    let mut v = json!({ "idDrink": id, "strDrink": name, "strDrinkThumb": null });
    for (n, (ingredient, measure)) in slots.iter().enumerate() {
        v[format!("strIngredient{}", n + 1)] = json!(ingredient);
        v[format!("strMeasure{}", n + 1)] = json!(measure);
    }
    serde_json::from_value(v).expect("drink fixture")
}

pub fn list_drink(id: &str, name: &str) -> Value {
    json!({
        "idDrink": id,
        "strDrink": name,
        "strDrinkThumb": format!("https://img.example/{id}.jpg"),
    })
}

pub fn search_payload(names: &[(&str, &str)]) -> DrinkResponse {
    let drinks: Vec<Value> = names.iter().map(|(id, n)| list_drink(id, n)).collect();
    serde_json::from_value(json!({ "drinks": drinks })).expect("search fixture")
}
