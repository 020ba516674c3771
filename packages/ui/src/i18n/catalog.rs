//! Translation tables. Keys are dotted paths grouped by page.

use super::Locale;

type Table = &'static [(&'static str, &'static str)];

/// Look up `key` in `locale`, falling back to Spanish and then to the key.
pub fn translate(locale: Locale, key: &str) -> String {
    lookup(locale, key)
        .or_else(|| lookup(Locale::FALLBACK, key))
        .unwrap_or(key)
        .to_string()
}

/// Replace every `{{name}}` placeholder with its value. Unknown
/// placeholders are left as they are.
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    args.iter().fold(template.to_string(), |acc, (name, value)| {
        acc.replace(&format!("{{{{{}}}}}", name), value)
    })
}

pub fn lookup(locale: Locale, key: &str) -> Option<&'static str> {
    table(locale)
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
}

pub(crate) fn table(locale: Locale) -> Table {
    match locale {
        Locale::En => EN,
        Locale::Es => ES,
        Locale::Ca => CA,
    }
}

const EN: Table = &[
    ("common.loading", "Loading..."),
    ("common.error", "Error"),
    ("common.logout", "Log out"),
    ("common.save", "Save"),
    ("common.cancel", "Cancel"),
    ("common.edit", "Edit"),
    ("common.close", "Close"),
    ("common.yes", "Yes"),
    ("common.no", "No"),
    ("common.backToHome", "Back to home"),
    ("errors.network", "Could not reach the server. Please try again."),
    ("errors.invalidResponse", "The server sent an invalid response."),
    ("errors.request", "Request failed (status {{statusCode}})."),
    ("welcome.title", "Welcome to Shoplist Wiz"),
    ("welcome.subtitle", "Plan your meals and organize your ingredients in one place."),
    ("welcome.loginButton", "Log in"),
    ("welcome.signupButton", "Sign up"),
    ("login.pageTitle", "Sign in to your account"),
    ("login.emailPlaceholder", "Email address"),
    ("login.passwordPlaceholder", "Password"),
    ("login.forgotPassword", "Forgot your password?"),
    ("login.submitButton", "Sign in"),
    ("login.submitButtonLoading", "Loading..."),
    ("login.noAccount", "Don't have an account?"),
    ("login.signupLink", "Sign up here"),
    ("login.genericError", "Login failed"),
    ("signup.pageTitle", "Create your account"),
    ("signup.nameLabel", "Name"),
    ("signup.namePlaceholder", "Your name"),
    ("signup.emailLabel", "Email"),
    ("signup.emailPlaceholder", "Email address"),
    ("signup.passwordLabel", "Password"),
    ("signup.passwordPlaceholder", "Password"),
    ("signup.confirmPasswordLabel", "Confirm password"),
    ("signup.confirmPasswordPlaceholder", "Repeat your password"),
    ("signup.passwordsDoNotMatch", "Passwords do not match."),
    ("signup.passwordTooShort", "Password must be at least {{minLength}} characters long."),
    ("signup.registrationError", "Registration failed (status {{statusCode}})."),
    ("signup.submitButton", "Sign up"),
    ("signup.submitButtonLoading", "Signing up..."),
    ("signup.alreadyHaveAccount", "Already have an account?"),
    ("signup.loginLink", "Log in"),
    ("resetPassword.pageTitle", "Reset your password"),
    ("resetPassword.instructions", "Enter your email and we will send you a link to reset your password."),
    ("resetPassword.emailLabel", "Email"),
    ("resetPassword.emailPlaceholder", "Email address"),
    ("resetPassword.submitButton", "Send link"),
    ("resetPassword.submitButtonLoading", "Sending..."),
    ("resetPassword.successMessage", "If the address is registered you will receive an email with instructions."),
    ("resetPassword.serverError", "Server error (status {{statusCode}})."),
    ("resetPassword.rememberedPassword", "Remembered your password?"),
    ("resetPassword.loginLink", "Log in"),
    ("setNewPassword.pageTitle", "Set a new password"),
    ("setNewPassword.passwordPlaceholder", "New password"),
    ("setNewPassword.confirmPasswordPlaceholder", "Confirm new password"),
    ("setNewPassword.submitButton", "Set new password"),
    ("setNewPassword.submitButtonLoading", "Saving..."),
    ("setNewPassword.successMessage", "Your password has been reset. You can now log in."),
    ("setNewPassword.missingToken", "Invalid or missing reset token."),
    ("setNewPassword.invalidLink", "Invalid or expired link."),
    ("setNewPassword.genericError", "Could not reset the password (status {{statusCode}})."),
    ("setNewPassword.backToLogin", "Back to log in"),
    ("dashboard.pageTitle", "Your profile"),
    ("dashboard.labels.name", "Name"),
    ("dashboard.labels.email", "Email"),
    ("dashboard.fetchUserError", "Could not load your data (status {{statusCode}})."),
    ("navbar.home", "Home"),
    ("navbar.ingredients", "Ingredients"),
    ("navbar.recipes", "Recipes"),
    ("navbar.openMainMenu", "Open main menu"),
    ("navbar.userMenu.open", "Open user menu"),
    ("navbar.userMenu.defaultName", "User"),
    ("navbar.userMenu.defaultEmail", "No email"),
    ("navbar.userMenu.profile", "Profile"),
    ("navbar.userMenu.language", "Language"),
    ("navbar.userMenu.languages.en", "English"),
    ("navbar.userMenu.languages.es", "Español"),
    ("navbar.userMenu.languages.ca", "Català"),
    ("ingredientsPage.title", "Ingredients"),
    ("ingredientsPage.addIngredient", "Add ingredient"),
    ("ingredientsPage.editIngredient", "Edit ingredient"),
    ("ingredientsPage.viewIngredient", "Ingredient details"),
    ("ingredientsPage.nameEnglish", "English name"),
    ("ingredientsPage.nameSpanish", "Spanish name"),
    ("ingredientsPage.nameCatalan", "Catalan name"),
    ("ingredientsPage.nutritionalValues", "Nutritional values per 100 g"),
    ("ingredientsPage.isGlutenFree", "Gluten free"),
    ("ingredientsPage.isVegan", "Vegan"),
    ("ingredientsPage.isVegetarian", "Vegetarian"),
    ("ingredientsPage.actions", "Actions"),
    ("ingredientsPage.noIngredients", "No ingredients yet."),
    ("ingredientsPage.noResults", "No ingredients match your search."),
    ("ingredientsPage.searchPlaceholder", "Search ingredients..."),
    ("ingredientsPage.fetchError", "Could not load ingredients (status {{statusCode}})."),
    ("ingredientsPage.calories", "Calories"),
    ("ingredientsPage.protein", "Protein (g)"),
    ("ingredientsPage.carbohydrates", "Carbohydrates (g)"),
    ("ingredientsPage.fat", "Fat (g)"),
    ("ingredientsPage.fiber", "Fiber (g)"),
    ("ingredientsPage.vitaminD", "Vitamin D"),
    ("ingredientsPage.vitaminB12", "Vitamin B12"),
    ("ingredientsPage.vitaminC", "Vitamin C"),
    ("ingredientsPage.iron", "Iron"),
    ("ingredientsPage.saturatedFat", "Saturated fat"),
    ("ingredientsPage.unsaturatedFat", "Unsaturated fat"),
    ("ingredientsPage.magnesium", "Magnesium"),
    ("ingredientsPage.zinc", "Zinc"),
    ("recipesPage.title", "Recipes"),
    ("recipesPage.name", "Name"),
    ("recipesPage.isDinner", "For dinner"),
    ("recipesPage.ingredientCount", "Ingredients"),
    ("recipesPage.addRecipe", "Add recipe"),
    ("recipesPage.editRecipe", "Edit recipe"),
    ("recipesPage.viewRecipe", "Recipe details"),
    ("recipesPage.actions", "Actions"),
    ("recipesPage.noRecipes", "No recipes yet."),
    ("recipesPage.noResults", "No recipes match your search."),
    ("recipesPage.searchPlaceholder", "Search recipes..."),
    ("recipesPage.fetchError", "Could not load recipes (status {{statusCode}})."),
];

const ES: Table = &[
    ("common.loading", "Cargando..."),
    ("common.error", "Error"),
    ("common.logout", "Cerrar sesión"),
    ("common.save", "Guardar"),
    ("common.cancel", "Cancelar"),
    ("common.edit", "Editar"),
    ("common.close", "Cerrar"),
    ("common.yes", "Sí"),
    ("common.no", "No"),
    ("common.backToHome", "Volver a la página principal"),
    ("errors.network", "No se pudo contactar con el servidor. Inténtalo de nuevo."),
    ("errors.invalidResponse", "Respuesta no válida del servidor."),
    ("errors.request", "La solicitud falló (código {{statusCode}})."),
    ("welcome.title", "Bienvenido a Shoplist Wiz"),
    ("welcome.subtitle", "Planifica tus comidas y organiza tus ingredientes en un solo lugar."),
    ("welcome.loginButton", "Iniciar sesión"),
    ("welcome.signupButton", "Registrarse"),
    ("login.pageTitle", "Inicia sesión en tu cuenta"),
    ("login.emailPlaceholder", "Correo electrónico"),
    ("login.passwordPlaceholder", "Contraseña"),
    ("login.forgotPassword", "¿Olvidaste tu contraseña?"),
    ("login.submitButton", "Iniciar sesión"),
    ("login.submitButtonLoading", "Cargando..."),
    ("login.noAccount", "¿No tienes una cuenta?"),
    ("login.signupLink", "Regístrate aquí"),
    ("login.genericError", "Error al iniciar sesión"),
    ("signup.pageTitle", "Crea tu cuenta"),
    ("signup.nameLabel", "Nombre"),
    ("signup.namePlaceholder", "Tu nombre"),
    ("signup.emailLabel", "Correo electrónico"),
    ("signup.emailPlaceholder", "Correo electrónico"),
    ("signup.passwordLabel", "Contraseña"),
    ("signup.passwordPlaceholder", "Contraseña"),
    ("signup.confirmPasswordLabel", "Confirmar contraseña"),
    ("signup.confirmPasswordPlaceholder", "Repite tu contraseña"),
    ("signup.passwordsDoNotMatch", "Las contraseñas no coinciden."),
    ("signup.passwordTooShort", "La contraseña debe tener al menos {{minLength}} caracteres."),
    ("signup.registrationError", "Error en el registro (código {{statusCode}})."),
    ("signup.submitButton", "Registrarse"),
    ("signup.submitButtonLoading", "Registrando..."),
    ("signup.alreadyHaveAccount", "¿Ya tienes una cuenta?"),
    ("signup.loginLink", "Inicia sesión"),
    ("resetPassword.pageTitle", "Restablece tu contraseña"),
    ("resetPassword.instructions", "Introduce tu correo y te enviaremos un enlace para restablecer tu contraseña."),
    ("resetPassword.emailLabel", "Correo electrónico"),
    ("resetPassword.emailPlaceholder", "Correo electrónico"),
    ("resetPassword.submitButton", "Enviar enlace"),
    ("resetPassword.submitButtonLoading", "Enviando..."),
    ("resetPassword.successMessage", "Si el correo está registrado recibirás un email con instrucciones."),
    ("resetPassword.serverError", "Error del servidor (código {{statusCode}})."),
    ("resetPassword.rememberedPassword", "¿Recordaste tu contraseña?"),
    ("resetPassword.loginLink", "Inicia sesión"),
    ("setNewPassword.pageTitle", "Establecer nueva contraseña"),
    ("setNewPassword.passwordPlaceholder", "Nueva contraseña"),
    ("setNewPassword.confirmPasswordPlaceholder", "Confirmar nueva contraseña"),
    ("setNewPassword.submitButton", "Establecer nueva contraseña"),
    ("setNewPassword.submitButtonLoading", "Estableciendo..."),
    ("setNewPassword.successMessage", "Tu contraseña ha sido restablecida exitosamente. Ahora puedes iniciar sesión."),
    ("setNewPassword.missingToken", "Token de restablecimiento no válido o ausente."),
    ("setNewPassword.invalidLink", "Enlace no válido o expirado."),
    ("setNewPassword.genericError", "No se pudo restablecer la contraseña (código {{statusCode}})."),
    ("setNewPassword.backToLogin", "Volver a iniciar sesión"),
    ("dashboard.pageTitle", "Tu perfil"),
    ("dashboard.labels.name", "Nombre"),
    ("dashboard.labels.email", "Correo electrónico"),
    ("dashboard.fetchUserError", "No se pudieron cargar tus datos (código {{statusCode}})."),
    ("navbar.home", "Inicio"),
    ("navbar.ingredients", "Ingredientes"),
    ("navbar.recipes", "Recetas"),
    ("navbar.openMainMenu", "Abrir menú principal"),
    ("navbar.userMenu.open", "Abrir menú de usuario"),
    ("navbar.userMenu.defaultName", "Usuario"),
    ("navbar.userMenu.defaultEmail", "Sin correo"),
    ("navbar.userMenu.profile", "Perfil"),
    ("navbar.userMenu.language", "Idioma"),
    ("navbar.userMenu.languages.en", "English"),
    ("navbar.userMenu.languages.es", "Español"),
    ("navbar.userMenu.languages.ca", "Català"),
    ("ingredientsPage.title", "Ingredientes"),
    ("ingredientsPage.addIngredient", "Añadir ingrediente"),
    ("ingredientsPage.editIngredient", "Editar ingrediente"),
    ("ingredientsPage.viewIngredient", "Detalles del ingrediente"),
    ("ingredientsPage.nameEnglish", "Nombre en inglés"),
    ("ingredientsPage.nameSpanish", "Nombre en castellano"),
    ("ingredientsPage.nameCatalan", "Nombre en catalán"),
    ("ingredientsPage.nutritionalValues", "Valores nutricionales por 100 g"),
    ("ingredientsPage.isGlutenFree", "Sin gluten"),
    ("ingredientsPage.isVegan", "Vegano"),
    ("ingredientsPage.isVegetarian", "Vegetariano"),
    ("ingredientsPage.actions", "Acciones"),
    ("ingredientsPage.noIngredients", "Todavía no hay ingredientes."),
    ("ingredientsPage.noResults", "Ningún ingrediente coincide con la búsqueda."),
    ("ingredientsPage.searchPlaceholder", "Buscar ingredientes..."),
    ("ingredientsPage.fetchError", "No se pudieron cargar los ingredientes (código {{statusCode}})."),
    ("ingredientsPage.calories", "Calorías"),
    ("ingredientsPage.protein", "Proteínas (g)"),
    ("ingredientsPage.carbohydrates", "Carbohidratos (g)"),
    ("ingredientsPage.fat", "Grasas (g)"),
    ("ingredientsPage.fiber", "Fibra (g)"),
    ("ingredientsPage.vitaminD", "Vitamina D"),
    ("ingredientsPage.vitaminB12", "Vitamina B12"),
    ("ingredientsPage.vitaminC", "Vitamina C"),
    ("ingredientsPage.iron", "Hierro"),
    ("ingredientsPage.saturatedFat", "Grasas saturadas"),
    ("ingredientsPage.unsaturatedFat", "Grasas insaturadas"),
    ("ingredientsPage.magnesium", "Magnesio"),
    ("ingredientsPage.zinc", "Zinc"),
    ("recipesPage.title", "Recetas"),
    ("recipesPage.name", "Nombre"),
    ("recipesPage.isDinner", "Para cenar"),
    ("recipesPage.ingredientCount", "Ingredientes"),
    ("recipesPage.addRecipe", "Añadir receta"),
    ("recipesPage.editRecipe", "Editar receta"),
    ("recipesPage.viewRecipe", "Detalles de la receta"),
    ("recipesPage.actions", "Acciones"),
    ("recipesPage.noRecipes", "Todavía no hay recetas."),
    ("recipesPage.noResults", "Ninguna receta coincide con la búsqueda."),
    ("recipesPage.searchPlaceholder", "Buscar recetas..."),
    ("recipesPage.fetchError", "No se pudieron cargar las recetas (código {{statusCode}})."),
];

const CA: Table = &[
    ("common.loading", "Carregant..."),
    ("common.error", "Error"),
    ("common.logout", "Tanca la sessió"),
    ("common.save", "Desa"),
    ("common.cancel", "Cancel·la"),
    ("common.edit", "Edita"),
    ("common.close", "Tanca"),
    ("common.yes", "Sí"),
    ("common.no", "No"),
    ("common.backToHome", "Torna a la pàgina principal"),
    ("errors.network", "No s'ha pogut contactar amb el servidor. Torna-ho a provar."),
    ("errors.invalidResponse", "Resposta no vàlida del servidor."),
    ("errors.request", "La sol·licitud ha fallat (codi {{statusCode}})."),
    ("welcome.title", "Benvingut a Shoplist Wiz"),
    ("welcome.subtitle", "Planifica els teus àpats i organitza els teus ingredients en un sol lloc."),
    ("welcome.loginButton", "Inicia la sessió"),
    ("welcome.signupButton", "Registra't"),
    ("login.pageTitle", "Inicia la sessió al teu compte"),
    ("login.emailPlaceholder", "Correu electrònic"),
    ("login.passwordPlaceholder", "Contrasenya"),
    ("login.forgotPassword", "Has oblidat la contrasenya?"),
    ("login.submitButton", "Inicia la sessió"),
    ("login.submitButtonLoading", "Carregant..."),
    ("login.noAccount", "No tens compte?"),
    ("login.signupLink", "Registra't aquí"),
    ("login.genericError", "No s'ha pogut iniciar la sessió"),
    ("signup.pageTitle", "Crea el teu compte"),
    ("signup.nameLabel", "Nom"),
    ("signup.namePlaceholder", "El teu nom"),
    ("signup.emailLabel", "Correu electrònic"),
    ("signup.emailPlaceholder", "Correu electrònic"),
    ("signup.passwordLabel", "Contrasenya"),
    ("signup.passwordPlaceholder", "Contrasenya"),
    ("signup.confirmPasswordLabel", "Confirma la contrasenya"),
    ("signup.confirmPasswordPlaceholder", "Repeteix la contrasenya"),
    ("signup.passwordsDoNotMatch", "Les contrasenyes no coincideixen."),
    ("signup.passwordTooShort", "La contrasenya ha de tenir com a mínim {{minLength}} caràcters."),
    ("signup.registrationError", "El registre ha fallat (codi {{statusCode}})."),
    ("signup.submitButton", "Registra't"),
    ("signup.submitButtonLoading", "Registrant..."),
    ("signup.alreadyHaveAccount", "Ja tens un compte?"),
    ("signup.loginLink", "Inicia la sessió"),
    ("resetPassword.pageTitle", "Restableix la contrasenya"),
    ("resetPassword.instructions", "Introdueix el teu correu i t'enviarem un enllaç per restablir la contrasenya."),
    ("resetPassword.emailLabel", "Correu electrònic"),
    ("resetPassword.emailPlaceholder", "Correu electrònic"),
    ("resetPassword.submitButton", "Envia l'enllaç"),
    ("resetPassword.submitButtonLoading", "Enviant..."),
    ("resetPassword.successMessage", "Si el correu està registrat rebràs un missatge amb instruccions."),
    ("resetPassword.serverError", "Error del servidor (codi {{statusCode}})."),
    ("resetPassword.rememberedPassword", "Recordes la contrasenya?"),
    ("resetPassword.loginLink", "Inicia la sessió"),
    ("setNewPassword.pageTitle", "Estableix una contrasenya nova"),
    ("setNewPassword.passwordPlaceholder", "Contrasenya nova"),
    ("setNewPassword.confirmPasswordPlaceholder", "Confirma la contrasenya nova"),
    ("setNewPassword.submitButton", "Estableix la contrasenya"),
    ("setNewPassword.submitButtonLoading", "Establint..."),
    ("setNewPassword.successMessage", "S'ha restablert la contrasenya. Ja pots iniciar la sessió."),
    ("setNewPassword.missingToken", "Testimoni de restabliment no vàlid o absent."),
    ("setNewPassword.invalidLink", "Enllaç no vàlid o caducat."),
    ("setNewPassword.genericError", "No s'ha pogut restablir la contrasenya (codi {{statusCode}})."),
    ("setNewPassword.backToLogin", "Torna a iniciar la sessió"),
    ("dashboard.pageTitle", "El teu perfil"),
    ("dashboard.labels.name", "Nom"),
    ("dashboard.labels.email", "Correu electrònic"),
    ("dashboard.fetchUserError", "No s'han pogut carregar les teves dades (codi {{statusCode}})."),
    ("navbar.home", "Inici"),
    ("navbar.ingredients", "Ingredients"),
    ("navbar.recipes", "Receptes"),
    ("navbar.openMainMenu", "Obre el menú principal"),
    ("navbar.userMenu.open", "Obre el menú d'usuari"),
    ("navbar.userMenu.defaultName", "Usuari"),
    ("navbar.userMenu.defaultEmail", "Sense correu"),
    ("navbar.userMenu.profile", "Perfil"),
    ("navbar.userMenu.language", "Idioma"),
    ("navbar.userMenu.languages.en", "English"),
    ("navbar.userMenu.languages.es", "Español"),
    ("navbar.userMenu.languages.ca", "Català"),
    ("ingredientsPage.title", "Ingredients"),
    ("ingredientsPage.addIngredient", "Afegeix un ingredient"),
    ("ingredientsPage.editIngredient", "Edita l'ingredient"),
    ("ingredientsPage.viewIngredient", "Detalls de l'ingredient"),
    ("ingredientsPage.nameEnglish", "Nom en anglès"),
    ("ingredientsPage.nameSpanish", "Nom en castellà"),
    ("ingredientsPage.nameCatalan", "Nom en català"),
    ("ingredientsPage.nutritionalValues", "Valors nutricionals per 100 g"),
    ("ingredientsPage.isGlutenFree", "Sense gluten"),
    ("ingredientsPage.isVegan", "Vegà"),
    ("ingredientsPage.isVegetarian", "Vegetarià"),
    ("ingredientsPage.actions", "Accions"),
    ("ingredientsPage.noIngredients", "Encara no hi ha ingredients."),
    ("ingredientsPage.noResults", "Cap ingredient coincideix amb la cerca."),
    ("ingredientsPage.searchPlaceholder", "Cerca ingredients..."),
    ("ingredientsPage.fetchError", "No s'han pogut carregar els ingredients (codi {{statusCode}})."),
    ("ingredientsPage.calories", "Calories"),
    ("ingredientsPage.protein", "Proteïnes (g)"),
    ("ingredientsPage.carbohydrates", "Hidrats de carboni (g)"),
    ("ingredientsPage.fat", "Greixos (g)"),
    ("ingredientsPage.fiber", "Fibra (g)"),
    ("ingredientsPage.vitaminD", "Vitamina D"),
    ("ingredientsPage.vitaminB12", "Vitamina B12"),
    ("ingredientsPage.vitaminC", "Vitamina C"),
    ("ingredientsPage.iron", "Ferro"),
    ("ingredientsPage.saturatedFat", "Greixos saturats"),
    ("ingredientsPage.unsaturatedFat", "Greixos insaturats"),
    ("ingredientsPage.magnesium", "Magnesi"),
    ("ingredientsPage.zinc", "Zinc"),
    ("recipesPage.title", "Receptes"),
    ("recipesPage.name", "Nom"),
    ("recipesPage.isDinner", "Per sopar"),
    ("recipesPage.ingredientCount", "Ingredients"),
    ("recipesPage.addRecipe", "Afegeix una recepta"),
    ("recipesPage.editRecipe", "Edita la recepta"),
    ("recipesPage.viewRecipe", "Detalls de la recepta"),
    ("recipesPage.actions", "Accions"),
    ("recipesPage.noRecipes", "Encara no hi ha receptes."),
    ("recipesPage.noResults", "Cap recepta coincideix amb la cerca."),
    ("recipesPage.searchPlaceholder", "Cerca receptes..."),
    ("recipesPage.fetchError", "No s'han pogut carregar les receptes (codi {{statusCode}})."),
];
