//! Drives a small field-by-field encoder over resolved field sets, the way a
//! serializer plugged into `fw_meta` would.

use fw_meta::derive::Reflect;
use fw_meta::error::ExtractError;
use fw_meta::info::{FieldFlags, NonSerialized, Typed};
use fw_meta::resolve::FieldCache;
use fw_meta::{FieldValue, Reflect, ReflectRef, extract_value, find_field, resolve_fields};
use serde_json::{Value, json};

// -----------------------------------------------------------------------------
// Encoder

/// Encodes the serializable fields of `instance`, in resolver order.
fn encode(instance: &dyn Reflect) -> Vec<(&'static str, Value)> {
    let fields = FieldCache::global()
        .resolve_type_info(instance.reflect_type_info())
        .unwrap();

    fields
        .iter()
        .map(|field| {
            let value = extract_value(field, instance).unwrap();
            (field.name(), encode_value(value))
        })
        .collect()
}

fn encode_value(value: FieldValue<'_>) -> Value {
    match value.as_reflect() {
        Some(raw) if matches!(raw.reflect_ref(), ReflectRef::Struct(_)) => Value::Object(
            encode(raw)
                .into_iter()
                .map(|(name, value)| (name.to_owned(), value))
                .collect(),
        ),
        _ => serde_json::to_value(value).unwrap(),
    }
}

// -----------------------------------------------------------------------------
// Model

#[derive(Reflect, Clone, Copy, Debug, PartialEq)]
#[repr(i32)]
enum Status {
    Active = 1,
    Suspended = 4,
    Closed = -1,
}

#[derive(Reflect)]
struct Address {
    pub city: String,
    pub zip: Option<u32>,
}

#[derive(Reflect, Default)]
#[reflect(default)]
struct Entity {
    id: u64,
    #[reflect(transient)]
    dirty: bool,
}

#[derive(Reflect)]
#[reflect(include_base, auto_register)]
struct Account {
    #[reflect(base)]
    entity: Entity,
    pub name: String,
    status: Status,
    previous: Option<Status>,
    address: Address,
    tags: Vec<String>,
    #[reflect(skip)]
    password_hash: String,
    #[reflect(ignore)]
    #[allow(dead_code)]
    scratch: std::time::Duration,
}

// Not opted in: the base fields stay out of its field set.
#[derive(Reflect)]
struct AuditRecord {
    #[reflect(base)]
    entity: Entity,
    note: String,
}

fn account() -> Account {
    Account {
        entity: Entity { id: 42, dirty: true },
        name: "ada".to_owned(),
        status: Status::Suspended,
        previous: None,
        address: Address {
            city: "Paris".to_owned(),
            zip: Some(75001),
        },
        tags: vec!["admin".to_owned()],
        password_hash: "secret".to_owned(),
        scratch: std::time::Duration::ZERO,
    }
}

// -----------------------------------------------------------------------------
// Tests

#[test]
fn encodes_in_resolver_order() {
    let encoded = encode(&account());

    let names: Vec<_> = encoded.iter().map(|(name, _)| *name).collect();
    assert_eq!(
        names,
        ["name", "status", "previous", "address", "tags", "id"]
    );

    let values: Vec<_> = encoded.into_iter().map(|(_, value)| value).collect();
    assert_eq!(
        values,
        [
            json!("ada"),
            json!(4),
            Value::Null,
            json!({ "city": "Paris", "zip": 75001 }),
            json!(["admin"]),
            json!(42),
        ]
    );
}

#[test]
fn enums_leave_as_discriminants() {
    let mut value = account();
    value.status = Status::Closed;
    value.previous = Some(Status::Active);

    let encoded = encode(&value);
    assert_eq!(encoded[1], ("status", json!(-1)));
    assert_eq!(encoded[2], ("previous", json!(1)));
}

#[test]
fn skipped_and_ignored_fields() {
    let info = Account::type_info().as_struct().unwrap();

    let hash = info.field("password_hash").unwrap();
    assert!(hash.has_attribute::<NonSerialized>());
    assert!(hash.flags().contains(FieldFlags::PRIVATE));

    assert!(info.field("scratch").is_none());
    assert!(info.field("entity").is_none());
    assert_eq!(info.base().unwrap().field_name(), "entity");
    assert!(!info.field("name").unwrap().flags().contains(FieldFlags::PRIVATE));

    let fields = resolve_fields::<Account>();
    assert!(fields.get("password_hash").is_none());
    assert!(fields.get("dirty").is_none());
}

#[test]
fn bases_stay_out_without_opt_in() {
    let record = AuditRecord {
        entity: Entity::default(),
        note: "created".to_owned(),
    };
    assert_eq!(encode(&record), [("note", json!("created"))]);

    // The base is still readable by name from the declaring type.
    let id = find_field::<Entity>("id").unwrap();
    assert_eq!(extract_value(id, &record).unwrap().downcast_ref::<u64>(), Some(&0));
    assert!(find_field::<AuditRecord>("id").is_err());
}

#[test]
fn ron_sees_the_same_values() {
    let value = account();

    let status = find_field::<Account>("status").unwrap();
    let status = extract_value(status, &value).unwrap();
    assert_eq!(ron::to_string(&status).unwrap(), "4");

    let previous = find_field::<Account>("previous").unwrap();
    let previous = extract_value(previous, &value).unwrap();
    assert_eq!(ron::to_string(&previous).unwrap(), "None");

    let name = find_field::<Account>("name").unwrap();
    let name = extract_value(name, &value).unwrap();
    assert_eq!(ron::to_string(&name).unwrap(), "\"ada\"");
}

#[test]
fn struct_values_do_not_serialize_directly() {
    let value = account();
    let address = find_field::<Account>("address").unwrap();
    let address = extract_value(address, &value).unwrap();
    assert!(serde_json::to_value(address).is_err());
}

#[test]
fn wrong_instance_is_rejected() {
    let name = find_field::<Account>("name").unwrap();
    let err = extract_value(name, &Entity::default()).unwrap_err();
    assert!(matches!(err, ExtractError::InstanceMismatch { .. }));
}

#[test]
fn default_constructor_builds_blank_values() {
    let entity = fw_meta::default_constructor::<Entity>()
        .unwrap()
        .construct()
        .take::<Entity>()
        .unwrap();
    assert_eq!(entity.id, 0);

    assert!(fw_meta::default_constructor::<Account>().is_err());
}

#[cfg(feature = "auto_register")]
#[test]
fn registered_types_are_prewarmed() {
    let cache = FieldCache::new();
    assert!(cache.prewarm() >= 1);
    assert!(cache.contains(core::any::TypeId::of::<Account>()));
}
