mod common;

use common::{project_with_model, BROKEN_MODEL, NEWSITEMS_MODEL, WIDGETS_MODEL};
use crudgen::analysis::{ModelAnalyzer, ModelParser};
use crudgen::generators::StandardFileSystem;
use crudgen::Error;

#[test]
fn test_reflects_widget_fixture() {
    let model = ModelParser::new().reflect(WIDGETS_MODEL).unwrap();
    assert_eq!(model.singular_name, "widget");
    assert_eq!(model.field_names, vec!["title", "slug"]);
}

#[test]
fn test_reflects_newsitem_fixture() {
    let model = ModelParser::new().reflect(NEWSITEMS_MODEL).unwrap();
    assert_eq!(model.singular_name, "newsitem");
    assert_eq!(model.field_names, vec!["headline", "body", "slug"]);
}

#[test]
fn test_refuses_model_with_computed_defaults() {
    let result = ModelParser::new().reflect(BROKEN_MODEL);
    assert!(matches!(result, Err(Error::Reflection(_))));
}

#[test]
fn test_analyzer_finds_model_in_project() {
    let project = project_with_model("widgets", WIDGETS_MODEL);
    let fsys = StandardFileSystem::new();
    let model = ModelAnalyzer::new(&fsys)
        .analyze(project.path(), "widgets")
        .unwrap();
    assert_eq!(model.singular_name, "widget");
}

#[test]
fn test_analyzer_reports_missing_model() {
    let project = project_with_model("widgets", WIDGETS_MODEL);
    let fsys = StandardFileSystem::new();
    let result = ModelAnalyzer::new(&fsys).analyze(project.path(), "gadgets");
    match result {
        Err(Error::ModelNotFound(path)) => assert!(path.contains("gadgets.inc.php")),
        other => panic!("expected ModelNotFound, got {:?}", other.map(|m| m.singular_name)),
    }
}
