//! # Ingredient model
//!
//! An [`Ingredient`] carries its name in three languages, a fixed
//! [`NutritionalValues`] record and three dietary flags. Every field has a
//! default, so a partial payload from the server (or a fresh "add" form)
//! always yields a fully populated value: the nutritional record of a server
//! item is effectively merged over the all-empty default.
//!
//! Nutrient amounts are lenient on input: numbers, numeric strings, empty
//! strings and `null` are all accepted, the last two meaning "not set".

use serde::{Deserialize, Deserializer, Serialize};

use super::ResourceId;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ResourceId>,
    #[serde(default)]
    pub english: String,
    #[serde(default)]
    pub spanish: String,
    #[serde(default)]
    pub catalan: String,
    #[serde(default, rename = "nutritional_values_per_100g")]
    pub nutrition: NutritionalValues,
    #[serde(default)]
    pub is_gluten_free: bool,
    #[serde(default)]
    pub is_vegan: bool,
    #[serde(default)]
    pub is_vegetarian: bool,
}

/// The fixed set of nutrients tracked per 100 g.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nutrient {
    Calories,
    Protein,
    Carbohydrates,
    Fat,
    Fiber,
    VitaminD,
    VitaminB12,
    VitaminC,
    Iron,
    SaturatedFat,
    UnsaturatedFat,
    Magnesium,
    Zinc,
}

impl Nutrient {
    /// Display order used by forms and detail views.
    pub const ALL: [Nutrient; 13] = [
        Nutrient::Calories,
        Nutrient::Protein,
        Nutrient::Carbohydrates,
        Nutrient::Fat,
        Nutrient::Fiber,
        Nutrient::VitaminD,
        Nutrient::VitaminB12,
        Nutrient::VitaminC,
        Nutrient::Iron,
        Nutrient::SaturatedFat,
        Nutrient::UnsaturatedFat,
        Nutrient::Magnesium,
        Nutrient::Zinc,
    ];

    /// Field name in the JSON payload.
    pub fn key(self) -> &'static str {
        match self {
            Nutrient::Calories => "calories",
            Nutrient::Protein => "protein_g",
            Nutrient::Carbohydrates => "carbohydrates_g",
            Nutrient::Fat => "fat_g",
            Nutrient::Fiber => "fiber_g",
            Nutrient::VitaminD => "vitamin_D",
            Nutrient::VitaminB12 => "vitamin_B12",
            Nutrient::VitaminC => "vitamin_C",
            Nutrient::Iron => "iron",
            Nutrient::SaturatedFat => "saturated_fat",
            Nutrient::UnsaturatedFat => "unsaturated_fat",
            Nutrient::Magnesium => "magnesium",
            Nutrient::Zinc => "zinc",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionalValues {
    #[serde(default, deserialize_with = "lenient_amount")]
    pub calories: Option<f64>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub carbohydrates_g: Option<f64>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub protein_g: Option<f64>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub fat_g: Option<f64>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub fiber_g: Option<f64>,
    #[serde(default, rename = "vitamin_D", deserialize_with = "lenient_amount")]
    pub vitamin_d: Option<f64>,
    #[serde(default, rename = "vitamin_B12", deserialize_with = "lenient_amount")]
    pub vitamin_b12: Option<f64>,
    #[serde(default, rename = "vitamin_C", deserialize_with = "lenient_amount")]
    pub vitamin_c: Option<f64>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub iron: Option<f64>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub saturated_fat: Option<f64>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub unsaturated_fat: Option<f64>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub magnesium: Option<f64>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub zinc: Option<f64>,
}

impl NutritionalValues {
    pub fn get(&self, nutrient: Nutrient) -> Option<f64> {
        *self.slot(nutrient)
    }

    pub fn set(&mut self, nutrient: Nutrient, amount: Option<f64>) {
        *self.slot_mut(nutrient) = amount;
    }

    /// Nutrients that have a value, in display order.
    pub fn present(&self) -> Vec<(Nutrient, f64)> {
        Nutrient::ALL
            .iter()
            .filter_map(|&n| self.get(n).map(|v| (n, v)))
            .collect()
    }

    fn slot(&self, nutrient: Nutrient) -> &Option<f64> {
        match nutrient {
            Nutrient::Calories => &self.calories,
            Nutrient::Protein => &self.protein_g,
            Nutrient::Carbohydrates => &self.carbohydrates_g,
            Nutrient::Fat => &self.fat_g,
            Nutrient::Fiber => &self.fiber_g,
            Nutrient::VitaminD => &self.vitamin_d,
            Nutrient::VitaminB12 => &self.vitamin_b12,
            Nutrient::VitaminC => &self.vitamin_c,
            Nutrient::Iron => &self.iron,
            Nutrient::SaturatedFat => &self.saturated_fat,
            Nutrient::UnsaturatedFat => &self.unsaturated_fat,
            Nutrient::Magnesium => &self.magnesium,
            Nutrient::Zinc => &self.zinc,
        }
    }

    fn slot_mut(&mut self, nutrient: Nutrient) -> &mut Option<f64> {
        match nutrient {
            Nutrient::Calories => &mut self.calories,
            Nutrient::Protein => &mut self.protein_g,
            Nutrient::Carbohydrates => &mut self.carbohydrates_g,
            Nutrient::Fat => &mut self.fat_g,
            Nutrient::Fiber => &mut self.fiber_g,
            Nutrient::VitaminD => &mut self.vitamin_d,
            Nutrient::VitaminB12 => &mut self.vitamin_b12,
            Nutrient::VitaminC => &mut self.vitamin_c,
            Nutrient::Iron => &mut self.iron,
            Nutrient::SaturatedFat => &mut self.saturated_fat,
            Nutrient::UnsaturatedFat => &mut self.unsaturated_fat,
            Nutrient::Magnesium => &mut self.magnesium,
            Nutrient::Zinc => &mut self.zinc,
        }
    }
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Number(n)) => Some(n),
        Some(Raw::Text(s)) => s.trim().parse().ok(),
        None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_payload_fills_defaults() {
        let json = r#"{
            "id": 3,
            "english": "Coffee",
            "nutritional_values_per_100g": { "calories": 2, "protein_g": "0.1" }
        }"#;
        let ingredient: Ingredient = serde_json::from_str(json).unwrap();

        assert_eq!(ingredient.id, Some(ResourceId::Number(3)));
        assert_eq!(ingredient.english, "Coffee");
        assert_eq!(ingredient.spanish, "");
        assert!(!ingredient.is_vegan);
        assert_eq!(ingredient.nutrition.get(Nutrient::Calories), Some(2.0));
        assert_eq!(ingredient.nutrition.get(Nutrient::Protein), Some(0.1));
        assert_eq!(ingredient.nutrition.get(Nutrient::Zinc), None);
    }

    #[test]
    fn test_missing_nutrition_record() {
        let ingredient: Ingredient = serde_json::from_str(r#"{"english":"Salt"}"#).unwrap();
        assert_eq!(ingredient.nutrition, NutritionalValues::default());
        assert!(ingredient.nutrition.present().is_empty());
    }

    #[test]
    fn test_empty_and_null_amounts() {
        let values: NutritionalValues =
            serde_json::from_str(r#"{"iron": "", "zinc": null, "vitamin_C": 12.5}"#).unwrap();
        assert_eq!(values.get(Nutrient::Iron), None);
        assert_eq!(values.get(Nutrient::Zinc), None);
        assert_eq!(values.get(Nutrient::VitaminC), Some(12.5));
    }

    #[test]
    fn test_set_and_present_order() {
        let mut values = NutritionalValues::default();
        values.set(Nutrient::Zinc, Some(1.0));
        values.set(Nutrient::Calories, Some(100.0));
        assert_eq!(
            values.present(),
            vec![(Nutrient::Calories, 100.0), (Nutrient::Zinc, 1.0)]
        );
        values.set(Nutrient::Zinc, None);
        assert_eq!(values.present().len(), 1);
    }

    #[test]
    fn test_every_nutrient_has_its_own_slot() {
        let mut values = NutritionalValues::default();
        for (i, nutrient) in Nutrient::ALL.iter().enumerate() {
            values.set(*nutrient, Some(i as f64));
        }
        for (i, nutrient) in Nutrient::ALL.iter().enumerate() {
            assert_eq!(values.get(*nutrient), Some(i as f64), "{}", nutrient.key());
        }
    }

    #[test]
    fn test_serializes_payload_keys() {
        let mut values = NutritionalValues::default();
        values.set(Nutrient::VitaminB12, Some(2.4));
        let json = serde_json::to_value(&values).unwrap();
        assert_eq!(json["vitamin_B12"], 2.4);
        assert!(json.get("vitamin_b12").is_none());
    }
}
