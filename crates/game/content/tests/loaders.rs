//! Loader tests against the bundled data directory and temp files.

use std::fs;
use std::path::PathBuf;

use cultivation_content::{
    CharacterLoader, ConfigLoader, ContentFactory, EffectCatalogLoader, ScriptedAction,
};
use cultivation_core::{
    EffectType, EngineConfig, Realm, Resolver, Timestamp, add_effect, has_effect,
};
use tempfile::TempDir;

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

#[test]
fn bundled_content_loads() {
    let factory = ContentFactory::new(data_dir());

    let config = factory.load_config().expect("config.toml");
    assert_eq!(config, EngineConfig::default());

    let catalog = factory.load_effects().expect("effects.ron");
    assert!(catalog.len() >= 5);
    let deviation = catalog.get("qi_deviation").expect("qi_deviation entry");
    assert_eq!(deviation.kind, EffectType::QiDeviation);
    assert!(catalog.get("heavenly_blessing").unwrap().is_permanent());

    let hero = factory.load_character("lin_feng", &config).expect("lin_feng.ron");
    assert_eq!(hero.name, "Lin Feng");
    assert_eq!(hero.realm(), Realm::Mortal);
    assert_eq!(hero.resources.max_stamina, 150.0);

    let scenario = factory
        .load_scenario("viper_ambush", &catalog)
        .expect("viper_ambush.ron");
    assert!(
        scenario
            .events
            .windows(2)
            .all(|pair| pair[0].at <= pair[1].at)
    );
    assert!(
        scenario
            .events
            .iter()
            .any(|e| e.action == ScriptedAction::Breakthrough)
    );
}

#[test]
fn variants_sharing_a_key_replace_each_other() {
    let catalog = EffectCatalogLoader::load(&data_dir().join("effects.ron")).unwrap();
    let weak = catalog.get("viper_venom").unwrap().clone();
    let strong = catalog.get("viper_venom_concentrated").unwrap().clone();
    assert_eq!(weak.key, strong.key);

    let hero = CharacterLoader::load(
        &data_dir().join("characters/lin_feng.ron"),
        &EngineConfig::default(),
    )
    .unwrap();
    let hero = add_effect(hero, weak, Timestamp::ZERO);
    let hero = add_effect(hero, strong, Timestamp::from_secs(2.0));

    assert_eq!(hero.effects.len(), 1);
    assert!(has_effect(&hero, "poison"));
    let only = hero.effects.iter().next().unwrap();
    assert_eq!(only.name, "Concentrated Viper Venom");
    assert_eq!(only.stacks, 1);
}

#[test]
fn saved_character_round_trips_through_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("save.ron");

    let catalog = EffectCatalogLoader::load(&data_dir().join("effects.ron")).unwrap();
    let config = EngineConfig::default();
    let hero = CharacterLoader::load(&data_dir().join("characters/lin_feng.ron"), &config)
        .unwrap();
    let hero = add_effect(
        hero,
        catalog.get("spirit_gathering_pill").unwrap().clone(),
        Timestamp::ZERO,
    );
    let hero = Resolver::new(config).tick(hero, 1.0, Timestamp::from_secs(1.0));

    CharacterLoader::save(&path, &hero).unwrap();
    let loaded = CharacterLoader::load_saved(&path).unwrap();
    assert_eq!(loaded, hero);
}

#[test]
fn config_file_overrides() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "progress_cap = 400.0\nmax_stamina_per_strength = 8.0\n").unwrap();

    let config = ConfigLoader::load(&path).unwrap();
    assert_eq!(config.progress_cap, 400.0);
    assert_eq!(config.max_stamina_for(10), 180.0);
}

#[test]
fn invalid_catalog_entry_names_file_and_entry() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("effects.ron");
    fs::write(
        &path,
        r#"{ "leech": (name: "Leech", type: "poison", duration: 5.0, damage_over_time: Some((qi_drain: -1.0))) }"#,
    )
    .unwrap();

    let message = EffectCatalogLoader::load(&path).unwrap_err().to_string();
    assert!(message.contains("'leech'"), "{message}");
    assert!(message.contains("qi_drain"), "{message}");
    assert!(message.contains("effects.ron"), "{message}");
}

#[test]
fn missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nobody.ron");
    assert!(CharacterLoader::load(&missing, &EngineConfig::default()).is_err());
}
