use inventory_core::{Item, UNSET_ITEM_ID};

#[test]
fn item_new_is_unpersisted() {
    let item = Item::new("Widget", 9.99, 5);

    assert_eq!(item.id, UNSET_ITEM_ID);
    assert_eq!(item.name, "Widget");
    assert_eq!(item.price, 9.99);
    assert_eq!(item.quantity, 5);
    assert!(!item.is_persisted());
}

#[test]
fn item_accepts_negative_and_zero_values() {
    let item = Item::with_id(3, "Refund", -4.5, -2);

    assert!(item.is_persisted());
    assert_eq!(item.price, -4.5);
    assert_eq!(item.quantity, -2);
    assert_eq!(Item::new("Free", 0.0, 0).price, 0.0);
}

#[test]
fn item_serialization_uses_expected_wire_fields() {
    let item = Item::with_id(7, "Gadget", 12.5, 3);

    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["id"], 7);
    assert_eq!(json["name"], "Gadget");
    assert_eq!(json["price"], 12.5);
    assert_eq!(json["quantity"], 3);

    let decoded: Item = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, item);
}

#[test]
fn item_without_id_deserializes_as_unset() {
    let decoded: Item =
        serde_json::from_str(r#"{"name":"Bolt","price":0.25,"quantity":100}"#).unwrap();

    assert_eq!(decoded.id, UNSET_ITEM_ID);
    assert_eq!(decoded, Item::new("Bolt", 0.25, 100));
}
