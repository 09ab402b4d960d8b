use std::cell::Cell;
use std::rc::Rc;

use super::*;
use crate::{ConfigBuilder, Position, stripe};

fn config_for(id: &str) -> TeamCustomizationConfig {
    ConfigBuilder::new(id, id.to_uppercase())
        .decoration(stripe(Position::BottomLeft))
        .build()
        .unwrap()
}

fn counting_listener(registry: &mut CustomizationRegistry) -> (ListenerId, Rc<Cell<usize>>) {
    let count = Rc::new(Cell::new(0));
    let count_in_listener = Rc::clone(&count);
    let id = registry.add_listener(move || count_in_listener.set(count_in_listener.get() + 1));
    (id, count)
}

#[test]
fn register_then_get_returns_config() {
    let mut registry = CustomizationRegistry::new();
    registry.register(config_for("doosan"));
    let id = TeamId::from("doosan");
    assert!(registry.has_customization(&id));
    assert_eq!(registry.get(&id).unwrap().team_name, "DOOSAN");
}

#[test]
fn last_register_wins_silently() {
    let mut registry = CustomizationRegistry::new();
    registry.register(config_for("doosan"));
    let mut replacement = config_for("doosan");
    replacement.team_name = "Doosan Bears".to_string();
    registry.register(replacement);
    assert_eq!(registry.len(), 1);
    assert_eq!(
        registry.get(&TeamId::from("doosan")).unwrap().team_name,
        "Doosan Bears"
    );
}

#[test]
fn unregister_is_idempotent_and_always_notifies() {
    let mut registry = CustomizationRegistry::new();
    registry.register(config_for("doosan"));
    let (_, count) = counting_listener(&mut registry);

    let id = TeamId::from("doosan");
    registry.unregister(&id);
    registry.unregister(&id);

    assert!(!registry.has_customization(&id));
    assert_eq!(count.get(), 2);
}

#[test]
fn register_multiple_fires_one_notification() {
    let mut registry = CustomizationRegistry::new();
    let (_, count) = counting_listener(&mut registry);

    registry.register_multiple([config_for("doosan"), config_for("lg")]);
    assert_eq!(count.get(), 1);
    assert_eq!(registry.len(), 2);

    registry.register(config_for("lotte"));
    registry.register(config_for("kia"));
    assert_eq!(count.get(), 3);
}

#[test]
fn listeners_fire_in_registration_order() {
    let mut registry = CustomizationRegistry::new();
    let order = Rc::new(std::cell::RefCell::new(Vec::new()));
    for tag in ["first", "second", "third"] {
        let order = Rc::clone(&order);
        registry.add_listener(move || order.borrow_mut().push(tag));
    }
    registry.register(config_for("doosan"));
    assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
}

#[test]
fn removed_listener_no_longer_fires() {
    let mut registry = CustomizationRegistry::new();
    let (id, count) = counting_listener(&mut registry);

    registry.register(config_for("doosan"));
    assert_eq!(count.get(), 1);

    assert!(registry.remove_listener(id));
    assert!(!registry.remove_listener(id));

    registry.register(config_for("lg"));
    assert_eq!(count.get(), 1);
}

#[test]
fn team_ids_iterates_in_key_order() {
    let mut registry = CustomizationRegistry::new();
    registry.register_multiple([config_for("lotte"), config_for("doosan"), config_for("kia")]);
    let ids: Vec<&str> = registry.team_ids().map(TeamId::as_str).collect();
    assert_eq!(ids, vec!["doosan", "kia", "lotte"]);
}
