//! Local form validation. Errors here block submission before any request.

use api::{Ingredient, Nutrient};
use thiserror::Error;

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordError {
    #[error("passwords do not match")]
    Mismatch,
    #[error("password must be at least {min} characters")]
    TooShort { min: usize },
}

impl PasswordError {
    /// Catalog key and placeholder values for the message shown to the user.
    pub fn message_key(&self) -> (&'static str, Vec<(&'static str, String)>) {
        match self {
            PasswordError::Mismatch => ("signup.passwordsDoNotMatch", Vec::new()),
            PasswordError::TooShort { min } => {
                ("signup.passwordTooShort", vec![("minLength", min.to_string())])
            }
        }
    }
}

/// Check a new password and its confirmation. Mismatch is reported before
/// length. Length counts characters, not bytes.
pub fn validate_new_password(password: &str, confirmation: &str) -> Result<(), PasswordError> {
    if password != confirmation {
        return Err(PasswordError::Mismatch);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(PasswordError::TooShort {
            min: MIN_PASSWORD_LEN,
        });
    }
    Ok(())
}

/// Parse a nutrient amount typed into a form. Blank means "not set";
/// anything unparsable is treated the same way.
pub fn parse_amount(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.replace(',', ".").parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Integers below this magnitude are exact in an `f64` and fit an `i64`.
const EXACT_INTEGER_LIMIT: f64 = 1e15;

/// Render an amount for an input field, without a trailing `.0`.
pub fn format_amount(amount: Option<f64>) -> String {
    match amount {
        Some(v) if v.fract() == 0.0 && v.abs() < EXACT_INTEGER_LIMIT => format!("{}", v as i64),
        Some(v) => v.to_string(),
        None => String::new(),
    }
}

/// An ingredient being edited. Nutrient amounts are kept as typed so that
/// partial input such as `1.` survives re-rendering; they are parsed on
/// [`finish`](IngredientDraft::finish).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngredientDraft {
    pub ingredient: Ingredient,
    pub amounts: Vec<String>,
}

impl IngredientDraft {
    pub fn new(ingredient: Ingredient) -> Self {
        let amounts = Nutrient::ALL
            .iter()
            .map(|&n| format_amount(ingredient.nutrition.get(n)))
            .collect();
        Self {
            ingredient,
            amounts,
        }
    }

    pub fn amount(&self, nutrient: Nutrient) -> &str {
        Nutrient::ALL
            .iter()
            .position(|&n| n == nutrient)
            .and_then(|i| self.amounts.get(i))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn set_amount(&mut self, nutrient: Nutrient, raw: String) {
        if let Some(i) = Nutrient::ALL.iter().position(|&n| n == nutrient) {
            if self.amounts.len() < Nutrient::ALL.len() {
                self.amounts.resize(Nutrient::ALL.len(), String::new());
            }
            self.amounts[i] = raw;
        }
    }

    pub fn finish(self) -> Ingredient {
        let mut ingredient = self.ingredient;
        for (nutrient, raw) in Nutrient::ALL.iter().zip(&self.amounts) {
            ingredient.nutrition.set(*nutrient, parse_amount(raw));
        }
        ingredient
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_checked_first() {
        assert_eq!(validate_new_password("short", "other"), Err(PasswordError::Mismatch));
    }

    #[test]
    fn test_too_short() {
        assert_eq!(
            validate_new_password("1234567", "1234567"),
            Err(PasswordError::TooShort { min: 8 })
        );
        assert_eq!(validate_new_password("12345678", "12345678"), Ok(()));
    }

    #[test]
    fn test_length_counts_characters() {
        assert_eq!(validate_new_password("ñññññññ", "ñññññññ"), Err(PasswordError::TooShort { min: 8 }));
    }

    #[test]
    fn test_message_key() {
        let (key, args) = PasswordError::TooShort { min: 8 }.message_key();
        assert_eq!(key, "signup.passwordTooShort");
        assert_eq!(args, vec![("minLength", "8".to_string())]);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("  "), None);
        assert_eq!(parse_amount("12.5"), Some(12.5));
        assert_eq!(parse_amount("3,2"), Some(3.2));
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("NaN"), None);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(Some(52.0)), "52");
        assert_eq!(format_amount(Some(0.3)), "0.3");
        assert_eq!(format_amount(None), "");
    }

    #[test]
    fn test_large_amount_survives_untouched_save() {
        assert_eq!(format_amount(Some(1e20)), "100000000000000000000");

        let mut ingredient = Ingredient::default();
        ingredient.nutrition.set(Nutrient::Calories, Some(1e20));
        ingredient.nutrition.set(Nutrient::Fat, Some(-3e18));
        let done = IngredientDraft::new(ingredient).finish();
        assert_eq!(done.nutrition.get(Nutrient::Calories), Some(1e20));
        assert_eq!(done.nutrition.get(Nutrient::Fat), Some(-3e18));
    }

    #[test]
    fn test_ingredient_draft_keeps_raw_input() {
        let mut ingredient = Ingredient::default();
        ingredient.nutrition.set(Nutrient::Calories, Some(52.0));

        let mut draft = IngredientDraft::new(ingredient);
        assert_eq!(draft.amount(Nutrient::Calories), "52");
        assert_eq!(draft.amount(Nutrient::Zinc), "");

        draft.set_amount(Nutrient::Protein, "0.".into());
        assert_eq!(draft.amount(Nutrient::Protein), "0.");
        draft.set_amount(Nutrient::Calories, "".into());
        draft.set_amount(Nutrient::Iron, "1,5".into());

        let done = draft.finish();
        assert_eq!(done.nutrition.get(Nutrient::Calories), None);
        assert_eq!(done.nutrition.get(Nutrient::Protein), Some(0.0));
        assert_eq!(done.nutrition.get(Nutrient::Iron), Some(1.5));
    }

    #[test]
    fn test_default_draft_accepts_amounts() {
        let mut draft = IngredientDraft::default();
        draft.set_amount(Nutrient::Zinc, "2".into());
        assert_eq!(draft.finish().nutrition.get(Nutrient::Zinc), Some(2.0));
    }
}
