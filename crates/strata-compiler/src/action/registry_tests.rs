use serde_json::{Value, json};
use strata_core::ActionError;

use crate::action::{ActionCompiler, ActionParams, ActionRegistry};
use crate::test_utils::RecordingContext;

#[tokio::test]
async fn last_registration_wins() {
    let mut registry = ActionRegistry::new(ActionCompiler::new());
    registry
        .action_with("load", ActionParams::new().commit("first"), |_, _| async {
            Ok(json!(1))
        })
        .action_with("load", ActionParams::new().commit("second"), |_, _| async {
            Ok(json!(2))
        });

    assert_eq!(registry.len(), 1);

    let tree = registry.into_tree();
    let ctx = RecordingContext::new();
    tree["load"].dispatch(ctx.clone(), Value::Null).await;

    assert_eq!(ctx.commits(), vec![("second".to_string(), json!(2))]);
}

#[tokio::test]
async fn registers_each_shape() {
    let compiler = ActionCompiler::new();
    let mut registry = ActionRegistry::new(compiler.clone());
    assert!(registry.is_empty());

    registry
        .action("refresh", |_, _| async { Ok(Value::Null) })
        .typed("resize", Some(ActionParams::new().commit("setSize")), |_, n: u64| async move {
            Ok::<_, ActionError>(n + 1)
        })
        .insert(compiler.compile("reset", None, |_, _| async { Ok(Value::Null) }));

    let tree = registry.into_tree();
    let names: Vec<_> = tree.keys().map(String::as_str).collect();
    assert_eq!(names, ["refresh", "resize", "reset"]);

    let ctx = RecordingContext::new();
    tree["resize"].dispatch(ctx.clone(), json!(9)).await;
    assert_eq!(ctx.commits(), vec![("setSize".to_string(), json!(10))]);
}
