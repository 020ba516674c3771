use dioxus::prelude::*;

use crate::icons::FaMagnifyingGlass;
use crate::Icon;

#[component]
pub fn SearchInput(value: String, placeholder: String, oninput: EventHandler<String>) -> Element {
    rsx! {
        label {
            class: "search-input",
            Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
            input {
                r#type: "search",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
        }
    }
}
