//! Recipe list: searchable by name, with the same view/edit/add modal as the
//! ingredient catalog. Edits stay in this page.

use api::Recipe;
use dioxus::prelude::*;
use serde_json::Value;
use ui::components::{ModalOverlay, Notice, NoticeKind, SearchInput};
use ui::editor::{commit, draft_for, Panel};
use ui::{search, use_guarded, use_i18n, Guarded, I18n};

use super::use_login_redirect;

#[component]
pub fn Recipes() -> Element {
    let i18n = use_i18n();
    let outcome = use_guarded(|client, token| async move { client.recipes(&token).await });
    use_login_redirect(outcome);

    let mut items = use_signal(Vec::<Recipe>::new);
    let mut query = use_signal(String::new);
    let mut panel = use_signal(Panel::default);
    let mut draft = use_signal(Recipe::default);

    use_effect(move || {
        if let Some(Guarded::Ready(list)) = &*outcome.read() {
            tracing::debug!("Loaded {} recipes", list.len());
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
        Some(Guarded::Failed(err)) => Some(i18n.error(err, "recipesPage.fetchError")),
        Some(Guarded::Ready(_)) => None,
    };

    let mut open = move |next: Panel| {
        draft.set(draft_for(&items.read(), next));
        panel.set(next);
    };

    let save = move |evt: FormEvent| {
        evt.prevent_default();
        let index = commit(&mut items.write(), panel(), draft());
        tracing::debug!("Saved recipe at row {}", index);
        panel.set(Panel::Closed);
    };

    let (rows, total) = {
        let list = items.read();
        let rows: Vec<(usize, Recipe)> = search::filter(&list, &query())
            .into_iter()
            .map(|(index, item)| (index, item.clone()))
            .collect();
        (rows, list.len())
    };
    let empty_key = if total == 0 {
        "recipesPage.noRecipes"
    } else {
        "recipesPage.noResults"
    };

    let modal_title = match panel() {
        Panel::View(_) => i18n.t("recipesPage.viewRecipe"),
        Panel::Edit(_) => i18n.t("recipesPage.editRecipe"),
        Panel::Add | Panel::Closed => i18n.t("recipesPage.addRecipe"),
    };
    let current = draft();

    rsx! {
        div {
            class: "page-container",
            div {
                class: "page-header",
                h1 { class: "page-title", {i18n.t("recipesPage.title")} }
                button {
                    class: "primary-button primary-button--inline",
                    r#type: "button",
                    onclick: move |_| open(Panel::Add),
                    {i18n.t("recipesPage.addRecipe")}
                }
            }

            if let Some(message) = failure {
                Notice { kind: NoticeKind::Error, message }
            }

            SearchInput {
                value: query(),
                placeholder: i18n.t("recipesPage.searchPlaceholder"),
                oninput: move |value| query.set(value),
            }

            div {
                class: "table-wrapper",
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { {i18n.t("recipesPage.name")} }
                            th { {i18n.t("recipesPage.ingredientCount")} }
                            th { {i18n.t("recipesPage.isDinner")} }
                            th { {i18n.t("recipesPage.actions")} }
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
                                td { "{item.name}" }
                                td { "{item.ingredients.len()}" }
                                td { {yes_no(&i18n, item.is_for_dinner)} }
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
                    dl {
                        class: "details",
                        if !current.name.is_empty() {
                            dt { {i18n.t("recipesPage.name")} }
                            dd { "{current.name}" }
                        }
                        dt { {i18n.t("recipesPage.isDinner")} }
                        dd { {yes_no(&i18n, current.is_for_dinner)} }
                    }
                    if !current.ingredients.is_empty() {
                        h4 { class: "details-heading", {i18n.t("recipesPage.ingredientCount")} }
                        ul {
                            class: "details-list",
                            for (position, entry) in current.ingredients.iter().enumerate() {
                                li { key: "{position}", {ingredient_label(entry)} }
                            }
                        }
                    }
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
                    form {
                        class: "modal-form",
                        onsubmit: save,
                        div {
                            class: "field-stack",
                            label { r#for: "recipe-name", class: "field-label", {i18n.t("recipesPage.name")} }
                            input {
                                id: "recipe-name",
                                class: "field",
                                r#type: "text",
                                value: "{current.name}",
                                oninput: move |evt: FormEvent| draft.write().name = evt.value(),
                            }
                        }
                        label {
                            class: "checkbox",
                            r#for: "recipe-dinner",
                            input {
                                id: "recipe-dinner",
                                r#type: "checkbox",
                                checked: current.is_for_dinner,
                                onchange: move |evt: FormEvent| draft.write().is_for_dinner = evt.checked(),
                            }
                            {i18n.t("recipesPage.isDinner")}
                        }
                        div {
                            class: "modal-actions",
                            button {
                                class: "secondary-button",
                                r#type: "button",
                                onclick: move |_| panel.set(Panel::Closed),
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
        }
    }
}

fn yes_no(i18n: &I18n, value: bool) -> String {
    i18n.t(if value { "common.yes" } else { "common.no" })
}

/// Display text for one entry of a recipe's ingredient list. Entries are
/// kept as the server sent them: plain names, objects carrying a name, or
/// anything else.
fn ingredient_label(entry: &Value) -> String {
    match entry {
        Value::String(name) => name.clone(),
        Value::Object(fields) => ["name", "english", "spanish", "catalan"]
            .iter()
            .find_map(|key| {
                fields
                    .get(*key)
                    .and_then(Value::as_str)
                    .filter(|name| !name.is_empty())
            })
            .map(str::to_string)
            .unwrap_or_else(|| entry.to_string()),
        other => other.to_string(),
    }
}
