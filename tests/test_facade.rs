//! Facade end-to-end behavior.
//!
//! Each test uses its own core key; the instance maps are process-global.

mod fixtures;

use std::sync::{Arc, Mutex};

use fixtures::{AnnouncingProxy, DoublerInput, DoublingCommand, EchoMediator};
use mvckit::{BaseMediator, BaseProxy, Facade, Mediator, Notification, Payload, Proxy};

#[test]
fn test_get_instance_is_multiton() {
    let a = Facade::get_instance("FacadeTestKey1");
    let b = Facade::get_instance("FacadeTestKey1");
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(a.key(), "FacadeTestKey1");
}

#[test]
fn test_has_core_and_remove_core() {
    assert!(!Facade::has_core("FacadeTestKey2"));
    Facade::get_instance("FacadeTestKey2");
    assert!(Facade::has_core("FacadeTestKey2"));

    Facade::remove_core("FacadeTestKey2");
    assert!(!Facade::has_core("FacadeTestKey2"));
    assert!(Facade::instance("FacadeTestKey2").is_none());
}

#[test]
fn test_proxy_round_trip_through_facade() {
    let facade = Facade::get_instance("FacadeTestKey3");
    facade.register_proxy(Arc::new(BaseProxy::with_data(
        "colors",
        Payload::new(vec!["red".to_string(), "green".to_string(), "blue".to_string()]),
    )));

    assert!(facade.has_proxy("colors"));
    let proxy = facade.retrieve_proxy("colors").unwrap();
    assert_eq!(
        proxy.data().unwrap().downcast_ref::<Vec<String>>().unwrap()[0],
        "red"
    );

    let removed = facade.remove_proxy("colors").unwrap();
    assert_eq!(removed.name(), "colors");
    assert!(!facade.has_proxy("colors"));
}

#[test]
fn test_mediator_round_trip_through_facade() {
    let facade = Facade::get_instance("FacadeTestKey4");
    facade.register_mediator(Arc::new(BaseMediator::new("panel")));

    assert!(facade.has_mediator("panel"));
    assert_eq!(facade.retrieve_mediator("panel").unwrap().name(), "panel");

    let removed = facade.remove_mediator("panel").unwrap();
    assert_eq!(removed.name(), "panel");
    assert!(!facade.has_mediator("panel"));
}

#[test]
fn test_command_through_facade() {
    let facade = Facade::get_instance("FacadeTestKey5");
    facade.register_command("math/double", Arc::new(|| Box::new(DoublingCommand::new())));
    assert!(facade.has_command("math/double"));

    let input = Payload::new(DoublerInput::new(16));
    facade.send_notification_with_body("math/double", input.clone());
    assert_eq!(input.downcast_ref::<DoublerInput>().unwrap().result(), 32);

    facade.remove_command("math/double");
    assert!(!facade.has_command("math/double"));

    let stale = Payload::new(DoublerInput::new(16));
    facade.send_notification_with_body("math/double", stale.clone());
    assert_eq!(stale.downcast_ref::<DoublerInput>().unwrap().result(), 0);
}

#[test]
fn test_send_notification_reaches_mediator() {
    let facade = Facade::get_instance("FacadeTestKey6");
    let log = Arc::new(Mutex::new(Vec::new()));

    facade.register_mediator(Arc::new(EchoMediator::new(
        "listener",
        vec!["app/started".to_string()],
        Arc::clone(&log),
    )));

    facade.send_notification("app/started");
    assert_eq!(*log.lock().unwrap(), vec!["listener:app/started"]);
}

#[test]
fn test_notify_observers_with_prebuilt_notification() {
    let facade = Facade::get_instance("FacadeTestKey7");
    let log = Arc::new(Mutex::new(Vec::new()));

    facade.register_mediator(Arc::new(EchoMediator::new(
        "listener",
        vec!["app/event".to_string()],
        Arc::clone(&log),
    )));

    facade.notify_observers(&Notification::new("app/event").with_kind("manual"));
    assert_eq!(*log.lock().unwrap(), vec!["listener:app/event"]);
}

#[test]
fn test_registered_proxy_can_broadcast() {
    // The model attaches the proxy's notifier before on_register runs, so a
    // proxy may announce itself during registration.
    let facade = Facade::get_instance("FacadeTestKey8");
    let log = Arc::new(Mutex::new(Vec::new()));

    facade.register_mediator(Arc::new(EchoMediator::new(
        "greeter",
        vec!["proxy/online".to_string()],
        Arc::clone(&log),
    )));
    facade.register_proxy(Arc::new(AnnouncingProxy::new("herald", "proxy/online")));

    assert_eq!(*log.lock().unwrap(), vec!["greeter:proxy/online"]);
}

#[test]
fn test_proxy_send_after_core_removed_is_noop() {
    let facade = Facade::get_instance("FacadeTestKey9");
    let proxy = Arc::new(AnnouncingProxy::new("orphan", "proxy/online"));
    facade.register_proxy(proxy.clone());

    Facade::remove_core("FacadeTestKey9");

    // The retained handle is detached now; sending must not panic.
    use mvckit::Notifier;
    proxy.send_notification("proxy/online");
}

#[test]
fn test_cores_are_isolated() {
    let left = Facade::get_instance("FacadeTestKey10L");
    let right = Facade::get_instance("FacadeTestKey10R");

    left.register_proxy(Arc::new(BaseProxy::new("only-left")));

    assert!(left.has_proxy("only-left"));
    assert!(!right.has_proxy("only-left"));

    let log = Arc::new(Mutex::new(Vec::new()));
    left.register_mediator(Arc::new(EchoMediator::new(
        "left-listener",
        vec!["shared/name".to_string()],
        Arc::clone(&log),
    )));

    // A broadcast in one core never crosses into another.
    right.send_notification("shared/name");
    assert!(log.lock().unwrap().is_empty());

    left.send_notification("shared/name");
    assert_eq!(log.lock().unwrap().len(), 1);
}
