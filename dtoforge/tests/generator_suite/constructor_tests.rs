// FICHIER : dtoforge/tests/generator_suite/constructor_tests.rs

use crate::common::init_env;
use dtoforge::{ConstructorContext, ConstructorStrategy, JavaConstructorStrategy, Parameter, Process};
use serde_json::json;

#[test]
fn test_java_constructor_snippet_end_to_end() {
    init_env();

    let context = ConstructorContext::new(JavaConstructorStrategy::new());

    // Descripteurs chargés comme depuis une matrice sérialisée
    let parameters: Vec<Parameter> = serde_json::from_value(json!([
        { "name": "task_name", "type": "String" },
        { "name": "created_at", "type": "java.time.LocalDate" }
    ]))
    .expect("Désérialisation échouée");

    let rendered: Vec<String> = parameters
        .iter()
        .map(|parameter| context.to_parameter(parameter))
        .collect::<dtoforge::Result<_>>()
        .expect("Rendu des paramètres échoué");

    assert_eq!(
        rendered.join(", "),
        "final String taskName, final java.time.LocalDate createdAt"
    );

    let steps = [
        Process::new("taskName", "taskName"),
        Process::new("createdAt", "java.time.LocalDate.now()"),
    ];

    let body: Vec<String> = steps
        .iter()
        .map(|process| context.to_process(process))
        .collect::<dtoforge::Result<_>>()
        .expect("Rendu du corps échoué");

    assert_eq!(body[0], "this.taskName = taskName;");
    assert_eq!(body[1], "this.createdAt = java.time.LocalDate.now();");
}

#[test]
fn test_degenerate_descriptors_fail_before_rendering() {
    init_env();

    let context = ConstructorContext::new(JavaConstructorStrategy::new());

    assert!(
        context.to_parameter(&Parameter::new("", "String")).is_err(),
        "Paramètre sans nom refusé"
    );
    assert!(
        context.to_parameter(&Parameter::new("taskName", "   ")).is_err(),
        "Paramètre sans type refusé"
    );
    assert!(
        context.to_process(&Process::new("pas un champ", "x")).is_err(),
        "Cible d'affectation mal formée refusée"
    );
}

#[test]
fn test_strategy_survives_context_construction() {
    init_env();

    // La stratégie est fixée une fois pour toutes et reste consultable
    let context = ConstructorContext::new(JavaConstructorStrategy::new());
    let direct = context
        .strategy()
        .to_parameter(&Parameter::new("task_name", "String"))
        .expect("La stratégie portée doit rester utilisable en direct");

    assert_eq!(direct, "final String taskName");
}
