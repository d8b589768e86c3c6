// FICHIER : dtoforge/tests/generator_suite/formatter_tests.rs

use crate::common::init_env;
use dtoforge::{
    AppError, Command, Component, ContentMatrix, ContentResource, ContentResourceFormatter,
    ResourceFormatter,
};
use serde_json::json;

#[test]
fn test_construction_guards_reject_degenerate_matrices() {
    init_env();

    let err = ContentResourceFormatter::try_new(ContentMatrix::new("  ")).unwrap_err();
    match err {
        AppError::InvalidArgument(msg) => {
            assert!(msg.contains("sans nom"), "Le refus doit être motivé")
        }
        other => panic!("Attendu InvalidArgument, obtenu : {}", other),
    }
}

#[test]
fn test_formatter_holds_the_exact_matrix() {
    init_env();

    // Matrice riche, chargée comme depuis un fichier d'échange
    let matrix: ContentMatrix = serde_json::from_value(json!({
        "id": "m-7",
        "name": "NoteLibre",
        "type": "note",
        "description": "Bloc de texte libre",
        "auteur": "forge",
        "poids": 3
    }))
    .expect("Désérialisation échouée");

    let formatter =
        ContentResourceFormatter::try_new(matrix.clone()).expect("Construction échouée");

    assert_eq!(formatter.matrix(), &matrix, "La matrice relue doit valoir l'originale");
    assert_eq!(
        formatter.matrix().property("auteur"),
        Some(&json!("forge")),
        "Les attributs libres doivent survivre au portage"
    );
}

#[test]
fn test_content_cycle_stops_at_missing_engine() {
    init_env();

    // Marqueur de régression : à remplacer par de vraies attentes le jour
    // où le moteur de rendu sera écrit. S'il casse parce que run() se met
    // à réussir, c'est que ce jour est arrivé.
    let mut formatter = ContentResourceFormatter::try_new(ContentMatrix::new("TaskDto"))
        .expect("Construction échouée");

    match formatter.run().unwrap_err() {
        AppError::Unimplemented(what) => assert_eq!(what, "rendu de matrice de contenu"),
        other => panic!("Attendu Unimplemented, obtenu : {}", other),
    }

    assert!(
        formatter.resource().is_none(),
        "Aucune ressource ne doit être retenue après un échec"
    );
}

#[test]
fn test_format_is_stateless_and_validates_first() {
    init_env();

    let formatter =
        ContentResourceFormatter::try_new(ContentMatrix::new("TaskDto")).expect("Construction");

    // Une autre matrice valide : même constat d'absence de moteur
    let other = ContentMatrix::new("AutreContenu");
    assert!(matches!(
        formatter.format(&other).unwrap_err(),
        AppError::Unimplemented(_)
    ));

    // Une matrice dégénérée échoue AVANT le constat d'absence de moteur
    let degenerate = ContentMatrix::new("");
    assert!(matches!(
        formatter.format(&degenerate).unwrap_err(),
        AppError::InvalidArgument(_)
    ));
}

#[test]
fn test_resource_component_renders_verbatim() {
    init_env();

    let source = "public final class TaskDto {\n    private final String taskName;\n}\n";
    let resource = ContentResource::new("TaskDto.java", source, "m-7");

    assert_eq!(resource.create_resource(), source);

    // La sérialisation d'échange conserve la traçabilité
    let value = serde_json::to_value(&resource).unwrap();
    assert_eq!(value["source_id"], "m-7");
}
