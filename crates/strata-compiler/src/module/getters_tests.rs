use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use strata_core::State;

use crate::module::{GetterRegistry, ModuleCompiler, ModuleDefinition};

#[derive(Default, Serialize, Deserialize)]
struct Cart {
    prices: Vec<u32>,
    discount: u32,
}

impl ModuleDefinition for Cart {
    fn getters(getters: &mut GetterRegistry) {
        getters
            .accessor("total", |cart: &Cart| {
                cart.prices.iter().sum::<u32>().saturating_sub(cart.discount)
            })
            .accessor("empty", |cart: &Cart| cart.prices.is_empty());
    }
}

fn state(value: Value) -> State {
    match value {
        Value::Object(fields) => fields.into_iter().collect(),
        _ => State::new(),
    }
}

#[test]
fn accessor_reads_decoded_module() {
    let mut registry = GetterRegistry::new();
    Cart::getters(&mut registry);
    let tree = registry.into_tree();

    let cart = state(json!({ "prices": [3, 4, 5], "discount": 2 }));

    assert_eq!(tree["total"](&cart), json!(10));
    assert_eq!(tree["empty"](&cart), json!(false));
}

#[test]
fn accessor_yields_null_on_undecodable_state() {
    let mut registry = GetterRegistry::new();
    Cart::getters(&mut registry);
    let tree = registry.into_tree();

    let broken = state(json!({ "prices": "none" }));

    assert_eq!(tree["total"](&broken), Value::Null);
}

#[test]
fn compiled_accessor_sees_default_state() {
    let module = ModuleCompiler::new().compile::<Cart>().unwrap();

    assert_eq!(module.getter("total").unwrap()(&State::new()), json!(0));
    assert_eq!(module.getter("empty").unwrap()(&State::new()), json!(true));
}

#[test]
fn later_registration_replaces_view() {
    let mut registry = GetterRegistry::new();
    assert!(registry.is_empty());

    registry
        .getter("answer", |_| json!(41))
        .getter("answer", |_| json!(42));

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.into_tree()["answer"](&State::new()), json!(42));
}

#[test]
fn accessor_yields_null_on_unencodable_result() {
    let mut registry = GetterRegistry::new();
    registry.accessor("grid", |cart: &Cart| {
        BTreeMap::from([((cart.discount, 0u32), true)])
    });
    let tree = registry.into_tree();

    let cart = state(json!({ "prices": [], "discount": 1 }));

    assert_eq!(tree["grid"](&cart), Value::Null);
}
