use dogstore_core::Dog;

#[test]
fn dog_new_has_name_breed_and_no_id() {
    let dog = Dog::new("joey", "cocker spaniel");

    assert_eq!(dog.id, None);
    assert_eq!(dog.name.as_deref(), Some("joey"));
    assert_eq!(dog.breed.as_deref(), Some("cocker spaniel"));
    assert!(!dog.is_saved());
}

#[test]
fn from_row_sets_id_in_column_order() {
    let dog = Dog::from_row((7, Some("fanny".to_string()), Some("cockapoo".to_string())));

    assert_eq!(dog.id, Some(7));
    assert_eq!(dog.name.as_deref(), Some("fanny"));
    assert_eq!(dog.breed.as_deref(), Some("cockapoo"));
    assert!(dog.is_saved());
}

#[test]
fn from_row_keeps_null_columns_as_none() {
    let dog = Dog::from_row((2, None, None));

    assert_eq!(dog.id, Some(2));
    assert_eq!(dog.name, None);
    assert_eq!(dog.breed, None);
}

#[test]
fn copies_with_same_id_are_independent() {
    let original = Dog::new("joey", "cocker spaniel");
    let mut copy = original.clone();
    copy.name = Some("joseph".to_string());

    assert_eq!(original.name.as_deref(), Some("joey"));
    assert_eq!(copy.id, original.id);
}

#[test]
fn dog_serialization_uses_expected_fields() {
    let unsaved = serde_json::to_value(Dog::new("joey", "cocker spaniel")).unwrap();
    assert_eq!(unsaved["id"], serde_json::Value::Null);
    assert_eq!(unsaved["name"], "joey");
    assert_eq!(unsaved["breed"], "cocker spaniel");

    let saved = Dog::from_row((3, Some("rex".to_string()), None));
    let json = serde_json::to_value(&saved).unwrap();
    assert_eq!(json["id"], 3);
    assert_eq!(json["breed"], serde_json::Value::Null);

    let decoded: Dog = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, saved);
}
