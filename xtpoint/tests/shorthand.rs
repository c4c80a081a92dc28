//! Dotted-path shorthands on the dispatcher.

use futures::executor::block_on;
use xtpoint::{AddressError, prelude::*, testing};

mod common;
use common::{canada, ready};

#[test]
fn test_invoke_by_path() {
    let (ext, _) = canada();

    let bundle = ext
        .invoke(None, "canada.hockey.slapshot", args!["he shoots..."])
        .unwrap();

    assert_eq!(bundle[0].as_ready(), Some(&Value::from("he shoots...score!")));
}

#[test]
fn test_invoke_by_path_with_context() {
    let (ext, _) = canada();
    let scoped = Object::new().with("propertiesInScope", false);

    let bundle = ext
        .invoke(Some(&scoped), "canada.hockey.slapshot", args!["other unused argument"])
        .unwrap();

    assert_eq!(bundle[0].as_ready(), Some(&Value::Object(scoped.clone())));
    assert_eq!(scoped.get("propertiesInScope"), Some(Value::Bool(true)));
}

#[test]
fn test_invoke_async_by_path_with_context() {
    let (ext, _) = canada();
    let scoped = Object::new().with("propertiesInScope", true);

    let this_arg = block_on(ext.invoke_async(Some(&scoped), "canada.scope.thisArg", args![]))
        .unwrap();

    assert_eq!(this_arg, vec![Value::Object(scoped)]);
}

#[test]
fn test_exec_by_id() {
    let (ext, _) = canada();

    let two = ready(ext.exec(None, "canada.order.exec#two", args![]).unwrap());

    assert_eq!(two, Value::from("two"));
}

#[test]
fn test_exec_by_id_bypasses_ordering() {
    let ext = Dispatcher::new();
    let log = testing::CallLog::new();
    for (index, label) in [(1, "one"), (2, "two"), (3, "three")] {
        ext.point("canada.order")
            .extend(PluginRecord::builder(label).index(index).method("exec", log.record(label)));
    }

    let three = ready(ext.exec(None, "canada.order.exec#three", args![]).unwrap());

    assert_eq!(three, Value::from("three"));
    assert_eq!(log.entries(), vec!["three"]);
}

#[test]
fn test_exec_by_id_returns_raw_result() {
    let (ext, _) = canada();

    let outcome = ext
        .exec(None, "canada.swappable.render#swap", args![])
        .unwrap();

    assert!(outcome.is_pending());
    assert_eq!(block_on(outcome.resolve()).unwrap(), Value::from("swap"));
}

#[test]
fn test_exec_by_disabled_or_unknown_id_is_unset() {
    let (ext, _) = canada();
    ext.point("canada.order").disable("two");

    let disabled = ready(ext.exec(None, "canada.order.exec#two", args![]).unwrap());
    let unknown = ready(ext.exec(None, "canada.order.exec#four", args![]).unwrap());

    assert!(disabled.is_unit());
    assert!(unknown.is_unit());
}

#[test]
fn test_malformed_paths_are_rejected() {
    let ext = Dispatcher::new();

    for path in ["", "canada", "canada.", ".slapshot", "canada.hockey.slapshot#"] {
        let err = ext.exec(None, path, args![]).unwrap_err();
        assert!(matches!(err, XtError::Address(_)), "{path}: {err}");
    }
    assert!(matches!(
        ext.invoke(None, "canada.order.exec#two", args![]),
        Err(XtError::Address(AddressError::UnexpectedId(_)))
    ));
    assert!(matches!(
        ext.invoke(None, "canada.multi.first,second", args![]),
        Err(XtError::Address(AddressError::UnexpectedList(_)))
    ));
    assert!(ext.keys().is_empty());
}

#[test]
fn test_keys_in_first_reference_order() {
    let ext = Dispatcher::new();

    ext.point("b.second");
    ext.point("a.first");
    ext.point("b.second");
    ext.exec(None, "c.third.exec", args![]).unwrap();

    assert_eq!(ext.keys(), vec!["b.second", "a.first", "c.third"]);
}

#[test]
fn test_keys_after_bootstrap() {
    let (ext, _) = canada();

    assert_eq!(
        ext.keys(),
        vec![
            "canada.swappable",
            "canada.eh",
            "canada.hockey",
            "canada.scope",
            "canada.multi",
            "canada.order",
            "canada.chain",
        ]
    );
}

#[test]
fn test_global_dispatcher_is_shared() {
    let first = xtpoint::ext();
    let second = xtpoint::ext();
    assert!(std::ptr::eq(first, second));

    first.point("global.shorthand").extend(
        PluginRecord::builder("only").method("ping", |_: &Object, _: Args| "pong"),
    );
    let pong = ready(second.exec(None, "global.shorthand.ping", args![]).unwrap());

    assert_eq!(pong, Value::from("pong"));
    assert!(second.keys().contains(&"global.shorthand".to_owned()));
}
