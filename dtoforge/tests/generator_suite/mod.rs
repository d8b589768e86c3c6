// FICHIER : dtoforge/tests/generator_suite/mod.rs

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialise l'environnement de la suite : variables d'environnement
/// locales puis traces redirigées vers le harnais de test.
pub fn init_env() {
    INIT.call_once(|| {
        dotenvy::dotenv().ok();
        let _ = tracing_subscriber::fmt()
            .with_env_filter("info")
            .with_test_writer()
            .try_init();
    });
}
