//! Accent- and case-insensitive filtering for the resource tables.

use api::{Ingredient, Recipe};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Decompose to NFD, drop combining marks and lowercase.
pub fn fold(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Something that can be found through the search box.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for Ingredient {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.english.as_str(),
            self.spanish.as_str(),
            self.catalan.as_str(),
        ]
    }
}

impl Searchable for Recipe {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

/// Items matching `query` together with their index in `items`.
pub fn filter<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<(usize, &'a T)> {
    let needle = fold(query.trim());
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| {
            needle.is_empty()
                || item
                    .search_fields()
                    .iter()
                    .any(|field| fold(field).contains(&needle))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredient(english: &str, spanish: &str, catalan: &str) -> Ingredient {
        Ingredient {
            english: english.into(),
            spanish: spanish.into(),
            catalan: catalan.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_fold_strips_accents_and_case() {
        assert_eq!(fold("Café"), "cafe");
        assert_eq!(fold("PIÑA"), "pina");
        assert_eq!(fold("Pèsols"), "pesols");
    }

    #[test]
    fn test_accented_query_matches_plain_text() {
        let items = vec![ingredient("Coffee", "Cafe", "Cafe"), ingredient("Tea", "Té", "Te")];
        let hits = filter(&items, "café");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0, 0);
    }

    #[test]
    fn test_filter_ingredients_on_any_name() {
        let items = vec![
            ingredient("Chickpea", "Garbanzo", "Cigró"),
            ingredient("Lemon", "Limón", "Llimona"),
        ];

        let hits = filter(&items, "cigro");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0, 0);

        let hits = filter(&items, "LIMON");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0, 1);

        assert!(filter(&items, "tomato").is_empty());
    }

    #[test]
    fn test_empty_query_keeps_everything() {
        let items = vec![
            ingredient("Salt", "Sal", "Sal"),
            ingredient("Rice", "Arroz", "Arròs"),
        ];
        assert_eq!(filter(&items, "").len(), 2);
        assert_eq!(filter(&items, "   ").len(), 2);
    }

    #[test]
    fn test_filter_recipes_on_name() {
        let recipes = vec![
            Recipe {
                name: "Crème brûlée".into(),
                ..Default::default()
            },
            Recipe {
                name: "Paella".into(),
                ..Default::default()
            },
        ];
        let hits = filter(&recipes, "creme");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].1.name, "Crème brûlée");
    }
}
