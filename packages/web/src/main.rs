use dioxus::prelude::*;

use ui::{use_i18n_provider, SessionContext};
use views::{
    Dashboard, Ingredients, Login, MainLayout, NotFound, Recipes, ResetPassword, Signup, Welcome,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Welcome {},
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[route("/reset-password?:token")]
    ResetPassword { token: String },
    #[layout(MainLayout)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/ingredients")]
        Ingredients {},
        #[route("/recipes")]
        Recipes {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(SessionContext::from_env);
    use_i18n_provider();

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::UI_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}
