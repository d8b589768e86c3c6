// FICHIER : dtoforge/src/utils/logger.rs

use crate::utils::config::GeneratorConfig;
use std::sync::Once;
use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

// Sécurité pour éviter la double initialisation (crash fréquent en tests)
static INIT: Once = Once::new();

/// Installe le souscripteur global de traces.
/// Les appels suivants sont ignorés : seul le premier gagne.
pub fn init_logging(config: &GeneratorConfig) {
    INIT.call_once(|| {
        // =========================================================================
        // LAYER 1 : FICHIER JSON (outillage, actif seulement si log_dir est fourni)
        // =========================================================================
        let file_layer = config.log_dir.as_ref().map(|log_dir| {
            std::fs::create_dir_all(log_dir).ok();
            let file_appender = rolling::daily(log_dir, "dtoforge.log");

            fmt::layer()
                .json()
                .with_writer(file_appender)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
        });

        // =========================================================================
        // LAYER 2 : CONSOLE (pour l'humain, ou JSON si demandé)
        // =========================================================================
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

        let console_layer = if config.log_json {
            fmt::layer()
                .json()
                .with_target(true)
                .with_filter(env_filter)
                .boxed()
        } else {
            fmt::layer()
                .compact()
                .with_target(false)
                .with_filter(env_filter)
                .boxed()
        };

        // =========================================================================
        // ASSEMBLAGE ET INITIALISATION
        // =========================================================================
        let registry = tracing_subscriber::registry()
            .with(file_layer)
            .with(console_layer);

        if registry.try_init().is_err() {
            tracing::warn!(
                "⚠️ [Logger] Tentative de ré-initialisation ignorée (Global subscriber déjà actif)."
            );
            return;
        }

        tracing::info!(
            "🚀 Logger initialisé (mode : {}, fichiers : {:?})",
            config.env_mode,
            config.log_dir
        );
    });
}
