//! Boundary validation and merge rules.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use stockpile_core::{InventoryError, Item, ItemPatch, NewItem, QuantityPolicy};

fn stored() -> Item {
    Item {
        name: "widget".into(),
        quantity: 5,
        price: Some(2.5),
        description: Some("blue".into()),
    }
}

#[test]
fn new_item_requires_name_and_quantity() {
    assert!(serde_json::from_str::<NewItem>(r#"{"quantity": 1}"#).is_err());
    assert!(serde_json::from_str::<NewItem>(r#"{"name": "w"}"#).is_err());

    let ok: NewItem = serde_json::from_str(r#"{"name": "w", "quantity": 1, "extra": true}"#).unwrap();
    let item = ok.validate().unwrap();
    assert_eq!(item.price, None);
    assert_eq!(item.description, None);
}

#[test]
fn new_item_validation_rules() {
    let base = || NewItem {
        name: "widget".into(),
        quantity: 1,
        price: None,
        description: None,
    };

    let mut zero = base();
    zero.quantity = 0;
    assert!(matches!(zero.validate(), Err(InventoryError::InvalidQuantity)));

    let mut blank = base();
    blank.name = "   ".into();
    assert!(matches!(blank.validate(), Err(InventoryError::BadRequest(_))));

    let mut negative = base();
    negative.price = Some(-0.01);
    assert!(matches!(negative.validate(), Err(InventoryError::BadRequest(_))));

    let mut free = base();
    free.price = Some(0.0);
    assert_eq!(free.validate().unwrap().price, Some(0.0));
}

#[test]
fn item_serializes_absent_fields_as_null() {
    let item = Item {
        name: "widget".into(),
        quantity: 5,
        price: Some(2.5),
        description: None,
    };
    assert_eq!(
        serde_json::to_string(&item).unwrap(),
        r#"{"name":"widget","quantity":5,"price":2.5,"description":null}"#
    );
}

#[test]
fn patch_only_overwrites_supplied_values() {
    let mut item = stored();
    item.apply(&ItemPatch::default(), QuantityPolicy::Replace).unwrap();
    assert_eq!(item, stored());

    let patch = ItemPatch {
        price: Some(0.0),
        description: Some(String::new()),
        ..Default::default()
    };
    item.apply(&patch, QuantityPolicy::Replace).unwrap();
    assert_eq!(item, stored());

    let patch = ItemPatch {
        price: Some(4.0),
        description: Some("red".into()),
        ..Default::default()
    };
    item.apply(&patch, QuantityPolicy::Replace).unwrap();
    assert_eq!(item.price, Some(4.0));
    assert_eq!(item.description.as_deref(), Some("red"));
    assert_eq!(item.quantity, 5);
}

#[test]
fn patch_name_is_ignored() {
    let mut item = stored();
    let patch: ItemPatch = serde_json::from_str(r#"{"name": "renamed", "quantity": 2}"#).unwrap();
    patch.validate().unwrap();
    item.apply(&patch, QuantityPolicy::Replace).unwrap();
    assert_eq!(item.name, "widget");
    assert_eq!(item.quantity, 2);
}

#[test]
fn patch_validation_rejects_bad_values() {
    let zero = ItemPatch {
        quantity: Some(0),
        ..Default::default()
    };
    assert!(matches!(zero.validate(), Err(InventoryError::InvalidQuantity)));

    let nan = ItemPatch {
        price: Some(f64::NAN),
        ..Default::default()
    };
    assert!(matches!(nan.validate(), Err(InventoryError::BadRequest(_))));
}
