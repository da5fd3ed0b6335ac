//! Public contract of the merge-then-initialize layer.

use pleme_i18n::{
    FsBackend, I18nError, I18nOptions, MergeStrategy, ResourceTable, SupportedLanguage, TOptions,
    Translations, default_common_en_us, default_common_pt_br, display_name_for, init_i18n,
    init_i18n_with_backend, is_language_supported, language_display_name, resolve_resources,
    supported_languages,
};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn table(value: Value) -> ResourceTable {
    serde_json::from_value(value).expect("valid resource table")
}

fn tree(value: Value) -> Translations {
    match value {
        Value::Object(map) => map,
        _ => panic!("expected object"),
    }
}

#[test]
fn test_unshadowed_default_groups_survive() {
    let resources = table(json!({
        "pt-BR": { "common": { "buttons": { "save": "Gravar" }, "errors": { "network": "Sem rede" } } },
        "en-US": { "common": { "status": { "active": "On" } } }
    }));

    let merged = resolve_resources(&resources, MergeStrategy::ReplaceGroup);

    for (language, defaults, overridden) in [
        ("pt-BR", default_common_pt_br(), vec!["buttons", "errors"]),
        ("en-US", default_common_en_us(), vec!["status"]),
    ] {
        let common = merged.namespace(language, "common").unwrap();
        for (group, value) in defaults {
            if !overridden.contains(&group.as_str()) {
                assert_eq!(common.get(group), Some(value), "{language}.common.{group}");
            }
        }
    }
}

#[test]
fn test_caller_group_replaces_default_group_exactly() {
    let i18n = init_i18n(I18nOptions::with_resources(table(json!({
        "pt-BR": { "common": { "buttons": { "save": "Gravar" } } }
    }))));

    let common = i18n.get_resource_bundle("pt-BR", "common").unwrap();
    assert_eq!(common["buttons"], json!({ "save": "Gravar" }));
    assert_eq!(common["validation"], default_common_pt_br()["validation"]);

    assert_eq!(i18n.t("buttons.save"), "Gravar");
    // Dropped from pt-BR; the fallback language is pt-BR too, so the key is missing
    assert_eq!(i18n.t("buttons.cancel"), "buttons.cancel");
}

#[test]
fn test_non_common_namespaces_pass_through() {
    let dashboard = json!({ "title": "Painel", "cards": { "sales": "Vendas" } });
    let i18n = init_i18n(I18nOptions::with_resources(table(json!({
        "pt-BR": { "dashboard": dashboard.clone() }
    }))));

    assert_eq!(
        i18n.get_resource_bundle("pt-BR", "dashboard").cloned().map(Value::Object),
        Some(dashboard)
    );
    assert_eq!(i18n.t("dashboard:cards.sales"), "Vendas");
}

#[test]
fn test_extra_locales_are_verbatim() {
    let spanish = json!({ "common": { "buttons": { "save": "Guardar" } } });
    let resources = table(json!({ "es-ES": spanish.clone() }));

    let merged = resolve_resources(&resources, MergeStrategy::ReplaceGroup);

    assert_eq!(serde_json::to_value(merged.locale("es-ES")).unwrap(), spanish);
    assert!(merged.contains_locale("pt-BR"));
    assert!(merged.contains_locale("en-US"));
}

#[test]
fn test_language_support_is_exact() {
    assert!(is_language_supported("pt-BR"));
    assert!(is_language_supported("en-US"));
    for token in ["pt", "pt-br", "en_US", "es-ES", ""] {
        assert!(!is_language_supported(token), "{token:?}");
    }
}

#[test]
fn test_supported_languages_ignore_configuration() {
    let _i18n = init_i18n(I18nOptions {
        default_language: "es-ES".to_string(),
        resources: table(json!({ "es-ES": { "common": {} } })),
        ..Default::default()
    });

    assert_eq!(
        supported_languages(),
        [SupportedLanguage::PtBr, SupportedLanguage::EnUs]
    );
}

#[test]
fn test_display_names() {
    assert_eq!(language_display_name(SupportedLanguage::EnUs), "English (US)");
    assert_eq!(language_display_name(SupportedLanguage::PtBr), "Português (Brasil)");
    assert_eq!(
        display_name_for("fr-FR"),
        Err(I18nError::UnsupportedLanguage("fr-FR".to_string()))
    );
}

#[test]
fn test_fallback_language_answers_missing_keys() {
    let i18n = init_i18n(I18nOptions {
        default_language: "en-US".to_string(),
        fallback_language: "pt-BR".to_string(),
        resources: table(json!({ "pt-BR": { "common": { "extra": { "only": "Só aqui" } } } })),
        ..Default::default()
    });

    assert_eq!(i18n.t("buttons.save"), "Save");
    assert_eq!(i18n.t("extra.only"), "Só aqui");
}

#[test]
fn test_add_translations_after_init() {
    let mut i18n = init_i18n(I18nOptions::default());
    i18n.add_translations("es-ES", "common", tree(json!({ "buttons": { "save": "Guardar" } })));

    assert_eq!(
        i18n.t_with("buttons.save", &TOptions::new().lng("es-ES")),
        "Guardar"
    );
    // Keys absent in es-ES fall back to pt-BR
    assert_eq!(
        i18n.t_with("buttons.cancel", &TOptions::new().lng("es-ES")),
        "Cancelar"
    );
}

#[tokio::test]
async fn test_change_language_then_translate() {
    let mut i18n = init_i18n(I18nOptions::default());

    i18n.change_language("en-US").await.unwrap();
    assert_eq!(i18n.current_language(), "en-US");
    assert_eq!(i18n.t("loading.default"), "Loading...");

    i18n.change_language("pt-BR").await.unwrap();
    assert_eq!(i18n.t("loading.default"), "Carregando...");
}

#[tokio::test]
async fn test_change_language_loads_through_backend() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("es-ES")).unwrap();
    std::fs::write(
        dir.path().join("es-ES").join("common.json"),
        r#"{ "buttons": { "save": "Guardar" } }"#,
    )
    .unwrap();

    let mut i18n = init_i18n_with_backend(I18nOptions::default(), FsBackend::new(dir.path()));
    assert!(!i18n.has_resource_bundle("es-ES", "common"));

    i18n.change_language("es-ES").await.unwrap();

    assert!(i18n.has_resource_bundle("es-ES", "common"));
    assert_eq!(i18n.t("buttons.save"), "Guardar");
    assert_eq!(i18n.t("buttons.cancel"), "Cancelar");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_handle_moves_across_worker_threads() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("es-ES")).unwrap();
    std::fs::write(
        dir.path().join("es-ES").join("common.json"),
        r#"{ "buttons": { "save": "Guardar" } }"#,
    )
    .unwrap();

    let mut i18n = init_i18n_with_backend(I18nOptions::default(), FsBackend::new(dir.path()));

    let i18n = tokio::spawn(async move {
        i18n.change_language("es-ES").await.map(|()| i18n)
    })
    .await
    .unwrap()
    .unwrap();

    assert_eq!(i18n.current_language(), "es-ES");
    assert_eq!(i18n.t("buttons.save"), "Guardar");
}
