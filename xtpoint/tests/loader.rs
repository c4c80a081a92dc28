//! Loading units by name pattern.

use xtpoint::{
    loader::{FnUnit, LoadableUnit},
    prelude::*,
};

mod common;
use common::ready;

fn captain(ext: &Dispatcher, di: &Di) -> Result<(), BoxError> {
    let di = di
        .downcast_ref::<Object>()
        .ok_or("the captain expects an object")?
        .clone();
    ext.point("canada.bootstrap").extend(
        PluginRecord::builder("captain")
            .method("beckonTheDeep", |_: &Object, _: Args| "bill")
            .method("di", move |_: &Object, _: Args| di.clone()),
    );
    Ok(())
}

fn units() -> Vec<Box<dyn LoadableUnit>> {
    vec![
        Box::new(FnUnit::new("canada/bundle", captain)),
        Box::new(FnUnit::new("canada/nested/bundle", |ext: &Dispatcher, _: &Di| {
            ext.point("canada.nested");
            Ok(())
        })),
        Box::new(FnUnit::new("alberta/bundle", |ext: &Dispatcher, _: &Di| {
            ext.point("alberta.rodeo");
            Ok(())
        })),
    ]
}

#[test]
fn test_load_selects_units_by_pattern() {
    let ext = Dispatcher::new();
    let di = common::di();

    let loaded = Loader::matching("canada/*")
        .unwrap()
        .load(&units(), &ext, &di)
        .unwrap();

    assert!(loaded);
    assert_eq!(ext.keys(), vec!["canada.bootstrap"]);
    let bill = ready(ext.exec(None, "canada.bootstrap.beckonTheDeep", args![]).unwrap());
    assert_eq!(bill, Value::from("bill"));
}

#[test]
fn test_load_forwards_the_side_object() {
    let ext = Dispatcher::new();
    let di = common::di();

    Loader::matching("*/bundle")
        .unwrap()
        .load(&units(), &ext, &di)
        .unwrap();

    assert_eq!(ext.keys(), vec!["canada.bootstrap", "alberta.rodeo"]);
    let forwarded = ready(ext.exec(None, "canada.bootstrap.di", args![]).unwrap());
    assert_eq!(forwarded, Value::Object(di));
}

#[test]
fn test_load_everything_without_pattern() {
    let ext = Dispatcher::new();

    assert!(Loader::new().load(&units()[1..], &ext, &()).unwrap());

    assert_eq!(ext.keys(), vec!["canada.nested", "alberta.rodeo"]);
}

#[test]
fn test_failing_unit_stops_the_load() {
    let ext = Dispatcher::new();

    // `captain` rejects a side object that is not an `Object`.
    let err = Loader::new().load(&units(), &ext, &42_u8).unwrap_err();

    assert!(matches!(err, XtError::Load(_)));
    assert!(err.to_string().contains("canada/bundle"));
    assert!(ext.keys().is_empty());
}

#[test]
fn test_nothing_matched() {
    let ext = Dispatcher::new();

    let loaded = Loader::matching("quebec/*")
        .unwrap()
        .load(&units(), &ext, &())
        .unwrap();

    assert!(!loaded);
}

#[cfg(feature = "macros")]
mod collected {
    use super::*;
    use xtpoint::loader::Collected;

    #[xtpoint::bootstrap(name = "collected/zamboni")]
    fn zamboni(ext: &Dispatcher, _di: &Di) {
        ext.point("collected.rink")
            .extend(PluginRecord::builder("zamboni").method("resurface", |_: &Object, _: Args| "smooth"));
    }

    #[test]
    fn test_collected_units_are_loaded() {
        let ext = Dispatcher::new();

        let loaded = Loader::matching("collected/*")
            .unwrap()
            .load(&Collected, &ext, &())
            .unwrap();

        assert!(loaded);
        let ice = ready(ext.exec(None, "collected.rink.resurface", args![]).unwrap());
        assert_eq!(ice, Value::from("smooth"));
    }
}
