use kindling::log::{Category, CategoryRegistry, Level, CORE_ENGINE, LOGGER};

use pretty_assertions::assert_eq;

#[test]
fn test_builtin_categories() {
    assert_eq!(CORE_ENGINE.name(), "CoreEngine");
    assert_eq!(LOGGER.name(), "Logger");
    assert_eq!(CORE_ENGINE.minimum(), Level::Trace);
    assert_eq!(CORE_ENGINE.default_level(), Level::Info);
}

#[test]
fn test_registry_seeds_builtins() {
    let registry = CategoryRegistry::new();
    assert!(registry.get("CoreEngine").is_some());
    assert!(registry.get("Logger").is_some());
    assert!(registry.get("Physics").is_none());
}

#[test]
fn test_registry_user_defined_lookup() {
    let mut registry = CategoryRegistry::new();
    registry.register(Category::new("Audio", Level::Warn, Level::Warn));

    let audio = registry.get("Audio").expect("registered category not found");
    assert_eq!(audio.minimum(), Level::Warn);
    assert_eq!(audio.default_level(), Level::Warn);
}

#[test]
fn test_registry_later_registration_shadows() {
    let mut registry = CategoryRegistry::new();
    registry.register(Category::new("Audio", Level::Trace, Level::Info));
    registry.register(Category::new("Audio", Level::Error, Level::Error));

    let audio = registry.get("Audio").unwrap();
    assert_eq!(audio.minimum(), Level::Error);
}

#[test]
fn test_registry_iter_contains_all() {
    let mut registry = CategoryRegistry::new();
    registry.register(Category::new("Net", Level::Info, Level::Info));
    assert_eq!(registry.iter().count(), 3);
}
