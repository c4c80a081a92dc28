#![allow(dead_code)]

use xtpoint::prelude::*;

// ============================================================================
// Fixture
// ============================================================================

/// The side object handed to bootstrap code.
pub fn di() -> Object {
    Object::new().with("agnosticAndOptional", true)
}

/// A dispatcher with every `canada.*` point registered.
pub fn canada() -> (Dispatcher, Object) {
    let ext = Dispatcher::new();
    let di = di();
    bootstrap(&ext, &di);
    (ext, di)
}

/// Scores unless the context still has `propertiesInScope == false`, in
/// which case it flips the flag and returns the context itself.
pub fn slapshot(this: &Object, args: Args) -> Value {
    if this.get("propertiesInScope") == Some(Value::Bool(false)) {
        this.set("propertiesInScope", true);
        return this.into();
    }
    match (args.first(), args.get(1)) {
        (Some(arg1), None) => format!("{arg1}score!").into(),
        (Some(arg1), Some(arg2)) => format!("{arg1}{arg2}scores!").into(),
        _ => "score!".into(),
    }
}

pub fn bootstrap(ext: &Dispatcher, di: &Object) {
    ext.point("canada.swappable")
        .extend(
            PluginRecord::builder("hot").index(-100).method(
                "render",
                AsyncMethod::new(|_: Object, _: Args| async {
                    Ok::<Value, BoxError>(Value::from("hot"))
                }),
            ),
        )
        .extend(
            PluginRecord::builder("swap").index(100).method(
                "render",
                AsyncMethod::new(|_: Object, _: Args| async {
                    Ok::<Value, BoxError>(Value::from("swap"))
                }),
            ),
        );

    for id in ["igloo", "moose"] {
        let di = di.clone();
        ext.point("canada.eh").extend(PluginRecord::builder(id).method(
            "render",
            move |_: &Object, args: Args| -> Object {
                Object::new().with("args", args).with("di", &di)
            },
        ));
    }

    ext.point("canada.hockey")
        .extend(PluginRecord::builder("puck").method("slapshot", slapshot));

    ext.point("canada.scope").extend(
        PluginRecord::builder("scope").method("thisArg", |this: &Object, _: Args| this.clone()),
    );

    ext.point("canada.multi").extend(
        PluginRecord::builder("all")
            .method("first", |_: &Object, _: Args| "first1")
            .method("second", |_: &Object, _: Args| {
                Object::new().with("second", true)
            })
            .method("third", |_: &Object, args: Args| {
                args.into_iter().next().unwrap_or_default()
            })
            .method("fourth", |this: &Object, _: Args| {
                this.set("speed", "0-100");
                this.clone()
            })
            .method("fifth", |_: &Object, args: Args| {
                let arg = args.into_iter().next().unwrap_or_default();
                if let Some(obj) = arg.as_object() {
                    obj.set("wet", true);
                }
                arg
            }),
    );

    for (index, label) in [(1, "one"), (2, "two"), (3, "three")] {
        ext.point("canada.order").extend(
            PluginRecord::builder(label)
                .index(index)
                .method("exec", move |_: &Object, _: Args| label),
        );
    }

    ext.point("canada.chain")
        .extend(
            PluginRecord::builder("one")
                .index(1)
                .method("exec", |_: &Object, _: Args| "one"),
        )
        .extend(
            PluginRecord::builder("two")
                .index(2)
                .method("exec", |_: &Object, args: Args| format!("{} two", args[0])),
        )
        .extend(
            PluginRecord::builder("three")
                .index(3)
                .method("exec", |_: &Object, args: Args| format!("{} three", args[0])),
        );
}

/// Unwrap a ready outcome.
pub fn ready(outcome: Outcome) -> Value {
    outcome
        .into_ready()
        .expect("expected a synchronous result")
}
