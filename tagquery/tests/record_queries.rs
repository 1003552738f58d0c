#![allow(non_snake_case)]

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use tagquery::prelude::*;
use tagquery::{extract_at, Reflected};

#[derive(Record)]
struct User {
    id: i64,
    name: String,
    email: String,
}

fn user() -> User {
    User {
        id: 7,
        name: "Ann".into(),
        email: "ann@example.com".into(),
    }
}

#[derive(Record)]
struct Address {
    city: String,
}

struct Secret;

#[derive(Record)]
struct Account {
    #[record(db = "account_id")]
    id: i64,
    #[record(default = "lower")]
    Login: String,
    #[record(default = "upper")]
    region: String,
    #[record(case = "upper")]
    country: String,
    #[record(case = "lower")]
    email: String,
    #[record(skip)]
    secret: Secret,
    address: Address,
    #[record(date = "now")]
    created_at: Option<chrono::DateTime<Utc>>,
    #[record(date = "CURRENT_TIMESTAMP")]
    updated_at: Option<chrono::DateTime<Utc>>,
}

fn account() -> Account {
    Account {
        id: 1,
        Login: "Admin".into(),
        region: "eu".into(),
        country: "de".into(),
        email: "Ann@Example.COM".into(),
        secret: Secret,
        address: Address {
            city: "Berlin".into(),
        },
        created_at: None,
        updated_at: None,
    }
}

#[test]
fn test_insert_keeps_declaration_order() {
    let query = extract(&user()).unwrap().insert("users").unwrap();

    assert_eq!(
        query.sql(),
        "INSERT INTO users (id, name, email) VALUES ($1, $2, $3)"
    );
    assert_eq!(
        query.params(),
        &[
            Value::I64(7),
            Value::from("Ann"),
            Value::from("ann@example.com")
        ]
    );
    assert_eq!(query.placeholder_count(), 3);
}

#[test]
fn test_view_all_and_delete() {
    let model = extract(&user()).unwrap();

    assert_eq!(
        model.view_all("users").unwrap().sql(),
        "SELECT id, name, email FROM users"
    );
    let delete = model.delete("users").unwrap();
    assert_eq!(delete.sql(), "DELETE FROM users");
    assert!(delete.params().is_empty());
}

#[test]
fn test_field_tags() {
    let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let model = extract_at(&account(), now).unwrap();

    assert_eq!(
        model.columns(),
        &[
            "account_id",
            "login",
            "REGION",
            "country",
            "email",
            "created_at",
            "updated_at"
        ]
    );
    assert_eq!(
        model.values(),
        &[
            Value::I64(1),
            Value::from("Admin"),
            Value::from("eu"),
            Value::from("DE"),
            Value::from("ann@example.com"),
            Value::Timestamp(now),
            Value::from("now"),
        ]
    );
}

#[test]
fn test_nested_record_is_not_a_column() {
    let model = extract(&account()).unwrap();
    assert!(model.columns().iter().all(|column| column != "address"));
    assert!(model.columns().iter().all(|column| column != "secret"));
}

#[test]
fn test_update_keeps_positions() {
    let query = extract(&user()).unwrap().update("users", "id").unwrap();

    assert_eq!(query.sql(), "UPDATE users SET name = $2, email = $3");
    assert_eq!(
        query.params(),
        &[Value::from("Ann"), Value::from("ann@example.com")]
    );
}

#[test]
fn test_update_where_renumbers() {
    let query = extract(&user())
        .unwrap()
        .update_where("users", "id", Value::I64(7))
        .unwrap();

    assert_eq!(
        query.sql(),
        "UPDATE users SET name = $1, email = $2 WHERE id = $3"
    );
    assert_eq!(
        query.params(),
        &[
            Value::from("Ann"),
            Value::from("ann@example.com"),
            Value::I64(7)
        ]
    );
}

#[derive(Record)]
struct Filter {
    a: i32,
    b: String,
}

#[test]
fn test_where_clause() {
    let filter = Filter {
        a: 1,
        b: "x".into(),
    };
    let model = extract(&filter).unwrap();

    let query = model.where_clause(op::EQ, WhereConnector::And).unwrap();
    assert_eq!(query.sql(), " WHERE a = $1 AND b = $2");
    assert_eq!(query.params(), &[Value::I32(1), Value::from("x")]);

    let query = model
        .where_clause(Operator::parse("like").unwrap(), WhereConnector::Or)
        .unwrap();
    assert_eq!(query.sql(), " WHERE a LIKE $1 OR b LIKE $2");
}

#[derive(Record)]
struct JoinUser {
    #[record(db = "u.id")]
    id: i64,
    #[record(db = "u.name")]
    name: String,
}

#[derive(Record)]
struct JoinOrder {
    #[record(db = "o.id")]
    id: i64,
    #[record(db = "o.total")]
    total: f64,
}

#[test]
fn test_join_clause() {
    let join = tagquery::join_clause!(JoinUser, JoinOrder).unwrap();
    let query = join
        .select_all(&["users u", "orders o"], &["u.id = o.user_id"])
        .unwrap();

    assert_eq!(
        query.sql(),
        "SELECT u.id, u.name, o.id, o.total FROM users u, orders o WHERE u.id = o.user_id"
    );
    assert!(query.params().is_empty());
}

#[test]
fn test_join_clause_errors() {
    let err = tagquery::join_clause!(JoinUser, User).unwrap_err();
    assert_eq!(
        err,
        Error::MissingTag {
            model: "User",
            field: "id"
        }
    );

    assert_eq!(tagquery::join_clause!().unwrap_err(), Error::NoModel);
    assert!(matches!(
        tagquery::join_clause!(JoinUser, i64),
        Err(Error::NotAStruct { .. })
    ));
}

#[test]
fn test_conversion_defers_errors() {
    let deferred = conversion(&42i64);
    assert!(matches!(
        deferred.insert("users"),
        Err(Error::NotAStruct { .. })
    ));
    assert!(matches!(
        deferred.update("users", "id"),
        Err(Error::NotAStruct { .. })
    ));

    let deferred = conversion(&user());
    assert_eq!(
        deferred.view_all("users").unwrap().sql(),
        "SELECT id, name, email FROM users"
    );
}

#[test]
fn test_insert_many() {
    let users = vec![
        user(),
        User {
            id: 8,
            name: "Bob".into(),
            email: "bob@example.com".into(),
        },
    ];
    let query = insert_many("users", &users).unwrap();

    assert_eq!(
        query.sql(),
        "INSERT INTO users (id, name, email) VALUES ($1, $2, $3), ($4, $5, $6)"
    );
    assert_eq!(query.params().len(), 6);
    assert_eq!(query.params()[3], Value::I64(8));

    let none: Vec<User> = Vec::new();
    assert_eq!(insert_many("users", &none).unwrap_err(), Error::NoModel);
}

#[derive(Record)]
struct Tagged<T> {
    id: i64,
    r#type: String,
    payload: T,
}

#[test]
fn test_generic_record_with_raw_ident() {
    let tagged = Tagged {
        id: 3,
        r#type: "note".into(),
        payload: Some(5i32),
    };
    let model = extract(&tagged).unwrap();

    assert_eq!(model.columns(), &["id", "type", "payload"]);
    assert_eq!(model.values()[2], Value::I32(5));

    let nested = Tagged {
        id: 4,
        r#type: "user".into(),
        payload: user(),
    };
    assert_eq!(extract(&nested).unwrap().columns(), &["id", "type"]);
}

#[test]
fn test_schema_reflects_tags() {
    let schema = <Account as Reflect>::schema().unwrap();
    assert_eq!(schema.name, "Account");
    assert!(matches!(account().reflect(), Reflected::Struct { .. }));
}

#[derive(Record)]
struct Counter {
    id: u64,
    small: u8,
    level: i8,
    port: u16,
    slot: usize,
    tags: Vec<String>,
    #[record(case = "upper")]
    codes: Vec<String>,
}

#[test]
fn test_wide_integer_and_array_fields() {
    let counter = Counter {
        id: 9,
        small: 1,
        level: -2,
        port: 5432,
        slot: 3,
        tags: vec!["red".into(), "blue".into()],
        codes: vec!["ab".into()],
    };
    let model = extract(&counter).unwrap();

    assert_eq!(
        model.values(),
        &[
            Value::I64(9),
            Value::I32(1),
            Value::I32(-2),
            Value::I32(5432),
            Value::I64(3),
            Value::Array(vec![Value::from("red"), Value::from("blue")]),
            Value::from("{AB}"),
        ]
    );

    let query = model.where_clause(op::IN, WhereConnector::And).unwrap();
    assert!(query.sql().contains("tags = ANY($6)"));
}

#[derive(tagquery::Record)]
#[record(crate = "tagquery")]
struct Renamed {
    #[record(db = "renamed_id")]
    id: i64,
}

#[test]
fn test_explicit_crate_path() {
    let query = extract(&Renamed { id: 5 })
        .unwrap()
        .view_all("renamed")
        .unwrap();
    assert_eq!(query.sql(), "SELECT renamed_id FROM renamed");
}
