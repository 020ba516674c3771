//! Ingredient catalog: searchable table with a view/edit/add modal.
//!
//! Saving a form only changes the list held by this page.

use api::{Ingredient, Nutrient};
use dioxus::prelude::*;
use ui::components::{ModalOverlay, Notice, NoticeKind, SearchInput};
use ui::editor::{commit, draft_for, Panel};
use ui::forms::{format_amount, IngredientDraft};
use ui::i18n::nutrient_label_key;
use ui::{search, use_guarded, use_i18n, Guarded};

use super::use_login_redirect;

#[component]
pub fn Ingredients() -> Element {
    let i18n = use_i18n();
    let outcome = use_guarded(|client, token| async move { client.ingredients(&token).await });
    use_login_redirect(outcome);

    let mut items = use_signal(Vec::<Ingredient>::new);
    let mut query = use_signal(String::new);
    let mut panel = use_signal(Panel::default);
    let mut draft = use_signal(IngredientDraft::default);

    use_effect(move || {
        if let Some(Guarded::Ready(list)) = &*outcome.read() {
            tracing::debug!("Loaded {} ingredients", list.len());
            items.set(list.clone());
        }
    });

    let failure = match &*outcome.read() {
        None => {
            return rsx! {
                p { class: "page-status", {i18n.t("common.loading")} }
            }
        }
        Some(Guarded::Redirect) => return rsx! {},
        Some(Guarded::Failed(err)) => Some(i18n.error(err, "ingredientsPage.fetchError")),
        Some(Guarded::Ready(_)) => None,
    };

    let mut open = move |next: Panel| {
        draft.set(IngredientDraft::new(draft_for(&items.read(), next)));
        panel.set(next);
    };

    let save = move |_| {
        let finished = draft().finish();
        let index = commit(&mut items.write(), panel(), finished);
        tracing::debug!("Saved ingredient at row {}", index);
        panel.set(Panel::Closed);
    };

    let (rows, total) = {
        let list = items.read();
        let rows: Vec<(usize, Ingredient)> = search::filter(&list, &query())
            .into_iter()
            .map(|(index, item)| (index, item.clone()))
            .collect();
        (rows, list.len())
    };
    let empty_key = if total == 0 {
        "ingredientsPage.noIngredients"
    } else {
        "ingredientsPage.noResults"
    };

    let modal_title = match panel() {
        Panel::View(_) => i18n.t("ingredientsPage.viewIngredient"),
        Panel::Edit(_) => i18n.t("ingredientsPage.editIngredient"),
        Panel::Add | Panel::Closed => i18n.t("ingredientsPage.addIngredient"),
    };

    rsx! {
        div {
            class: "page-container",
            div {
                class: "page-header",
                h1 { class: "page-title", {i18n.t("ingredientsPage.title")} }
                button {
                    class: "primary-button primary-button--inline",
                    r#type: "button",
                    onclick: move |_| open(Panel::Add),
                    {i18n.t("ingredientsPage.addIngredient")}
                }
            }

            if let Some(message) = failure {
                Notice { kind: NoticeKind::Error, message }
            }

            SearchInput {
                value: query(),
                placeholder: i18n.t("ingredientsPage.searchPlaceholder"),
                oninput: move |value| query.set(value),
            }

            div {
                class: "table-wrapper",
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { {i18n.t("ingredientsPage.nameEnglish")} }
                            th { {i18n.t("ingredientsPage.nameSpanish")} }
                            th { {i18n.t("ingredientsPage.nameCatalan")} }
                            th { {i18n.t("ingredientsPage.actions")} }
                        }
                    }
                    tbody {
                        if rows.is_empty() {
                            tr {
                                td { class: "table-empty", colspan: "4", {i18n.t(empty_key)} }
                            }
                        }
                        for (index, item) in rows {
                            tr {
                                key: "{index}",
                                class: "table-row",
                                onclick: move |_| open(Panel::View(index)),
                                td { "{item.english}" }
                                td { "{item.spanish}" }
                                td { "{item.catalan}" }
                                td {
                                    button {
                                        class: "link-button",
                                        r#type: "button",
                                        onclick: move |evt: Event<MouseData>| {
                                            evt.stop_propagation();
                                            open(Panel::Edit(index));
                                        },
                                        {i18n.t("common.edit")}
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        if panel().is_open() {
            ModalOverlay {
                title: modal_title,
                on_close: move |_| panel.set(Panel::Closed),
                if let Panel::View(_) = panel() {
                    IngredientDetails { ingredient: draft().ingredient }
                    div {
                        class: "modal-actions",
                        button {
                            class: "secondary-button",
                            r#type: "button",
                            onclick: move |_| panel.set(Panel::Closed),
                            {i18n.t("common.close")}
                        }
                        button {
                            class: "primary-button primary-button--inline",
                            r#type: "button",
                            onclick: move |_| panel.set(panel().to_edit()),
                            {i18n.t("common.edit")}
                        }
                    }
                } else {
                    IngredientForm {
                        draft: draft,
                        on_save: save,
                        on_cancel: move |_| panel.set(Panel::Closed),
                    }
                }
            }
        }
    }
}

/// Read-only view listing only the fields that carry a value.
#[component]
fn IngredientDetails(ingredient: Ingredient) -> Element {
    let i18n = use_i18n();

    let names: Vec<(String, String)> = [
        ("ingredientsPage.nameEnglish", &ingredient.english),
        ("ingredientsPage.nameSpanish", &ingredient.spanish),
        ("ingredientsPage.nameCatalan", &ingredient.catalan),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(key, value)| (i18n.t(key), value.clone()))
    .collect();

    let nutrients: Vec<(String, String)> = ingredient
        .nutrition
        .present()
        .into_iter()
        .map(|(nutrient, amount)| (i18n.t(nutrient_label_key(nutrient)), format_amount(Some(amount))))
        .collect();

    rsx! {
        dl {
            class: "details",
            for (label, value) in names {
                dt { "{label}" }
                dd { "{value}" }
            }
        }

        if !nutrients.is_empty() {
            h4 { class: "details-heading", {i18n.t("ingredientsPage.nutritionalValues")} }
            dl {
                class: "details details--grid",
                for (label, value) in nutrients {
                    dt { "{label}" }
                    dd { "{value}" }
                }
            }
        }

        DietaryBadges { ingredient }
    }
}

#[component]
fn DietaryBadges(ingredient: Ingredient) -> Element {
    let i18n = use_i18n();
    let badges: Vec<(&str, String)> = [
        (ingredient.is_gluten_free, "badge badge--gluten-free", "ingredientsPage.isGlutenFree"),
        (ingredient.is_vegan, "badge badge--vegan", "ingredientsPage.isVegan"),
        (ingredient.is_vegetarian, "badge badge--vegetarian", "ingredientsPage.isVegetarian"),
    ]
    .into_iter()
    .filter(|(set, _, _)| *set)
    .map(|(_, class, key)| (class, i18n.t(key)))
    .collect();

    rsx! {
        if !badges.is_empty() {
            div {
                class: "badges",
                for (class, label) in badges {
                    span { class: "{class}", "{label}" }
                }
            }
        }
    }
}

#[component]
fn IngredientForm(
    draft: Signal<IngredientDraft>,
    on_save: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let i18n = use_i18n();
    let current = draft.read().clone();

    let names = [
        ("ingredient-english", "ingredientsPage.nameEnglish", current.ingredient.english.clone(), NameField::English),
        ("ingredient-spanish", "ingredientsPage.nameSpanish", current.ingredient.spanish.clone(), NameField::Spanish),
        ("ingredient-catalan", "ingredientsPage.nameCatalan", current.ingredient.catalan.clone(), NameField::Catalan),
    ];
    let flags = [
        ("ingredient-gluten-free", "ingredientsPage.isGlutenFree", current.ingredient.is_gluten_free, Flag::GlutenFree),
        ("ingredient-vegan", "ingredientsPage.isVegan", current.ingredient.is_vegan, Flag::Vegan),
        ("ingredient-vegetarian", "ingredientsPage.isVegetarian", current.ingredient.is_vegetarian, Flag::Vegetarian),
    ];

    rsx! {
        form {
            class: "modal-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_save.call(());
            },

            for (id, key, value, field) in names {
                div {
                    key: "{id}",
                    class: "field-stack",
                    label { r#for: id, class: "field-label", {i18n.t(key)} }
                    input {
                        id: id,
                        class: "field",
                        r#type: "text",
                        value: "{value}",
                        oninput: move |evt: FormEvent| field.assign(&mut draft.write().ingredient, evt.value()),
                    }
                }
            }

            h4 { class: "details-heading", {i18n.t("ingredientsPage.nutritionalValues")} }
            div {
                class: "nutrient-grid",
                for nutrient in Nutrient::ALL {
                    div {
                        key: "{nutrient.key()}",
                        class: "field-stack",
                        label { r#for: nutrient.key(), class: "field-label", {i18n.t(nutrient_label_key(nutrient))} }
                        input {
                            id: nutrient.key(),
                            class: "field",
                            r#type: "text",
                            inputmode: "decimal",
                            value: "{current.amount(nutrient)}",
                            oninput: move |evt: FormEvent| draft.write().set_amount(nutrient, evt.value()),
                        }
                    }
                }
            }

            div {
                class: "checkbox-row",
                for (id, key, checked, flag) in flags {
                    label {
                        key: "{id}",
                        class: "checkbox",
                        r#for: id,
                        input {
                            id: id,
                            r#type: "checkbox",
                            checked: checked,
                            onchange: move |evt: FormEvent| flag.assign(&mut draft.write().ingredient, evt.checked()),
                        }
                        {i18n.t(key)}
                    }
                }
            }

            div {
                class: "modal-actions",
                button {
                    class: "secondary-button",
                    r#type: "button",
                    onclick: move |_| on_cancel.call(()),
                    {i18n.t("common.cancel")}
                }
                button {
                    class: "primary-button primary-button--inline",
                    r#type: "submit",
                    {i18n.t("common.save")}
                }
            }
        }
    }
}

#[derive(Clone, Copy)]
enum NameField {
    English,
    Spanish,
    Catalan,
}

impl NameField {
    fn assign(self, ingredient: &mut Ingredient, value: String) {
        match self {
            NameField::English => ingredient.english = value,
            NameField::Spanish => ingredient.spanish = value,
            NameField::Catalan => ingredient.catalan = value,
        }
    }
}

#[derive(Clone, Copy)]
enum Flag {
    GlutenFree,
    Vegan,
    Vegetarian,
}

impl Flag {
    fn assign(self, ingredient: &mut Ingredient, value: bool) {
        match self {
            Flag::GlutenFree => ingredient.is_gluten_free = value,
            Flag::Vegan => ingredient.is_vegan = value,
            Flag::Vegetarian => ingredient.is_vegetarian = value,
        }
    }
}
