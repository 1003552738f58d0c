use tagquery::prelude::*;

#[derive(Record)]
struct Profile {
    bio: String,
}

#[allow(dead_code)]
#[derive(Record)]
struct User {
    id: i64,
    #[record(case = "lower")]
    email: String,
    #[record(db = "display_name")]
    name: String,
    settings: serde_json::Value,
    profile: Profile,
    #[record(skip)]
    password_hash: Vec<u8>,
    #[record(date = "now")]
    created_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Record)]
struct UserRow {
    #[record(db = "u.id")]
    id: i64,
    #[record(db = "u.email")]
    email: String,
}

#[derive(Record)]
struct OrderRow {
    #[record(db = "o.id")]
    id: i64,
    #[record(db = "o.total")]
    total: f64,
}

fn show(title: &str, query: &Query) {
    println!("{title}:");
    println!("   SQL: {}", query.sql());
    println!("   Parameters: {:?}\n", query.params());
}

fn main() -> Result<()> {
    println!("=== tagquery - Basic Usage Examples ===\n");

    let user = User {
        id: 42,
        email: "Ann@Example.com".to_string(),
        name: "Ann".to_string(),
        settings: serde_json::json!({ "theme": "dark" }),
        profile: Profile {
            bio: "not a column".to_string(),
        },
        password_hash: vec![0xde, 0xad],
        created_at: None,
    };

    let model = extract(&user)?;
    println!("Columns: {:?}\n", model.columns());

    show("1. SELECT", &model.view_all("users")?);
    show("2. INSERT", &model.insert("users")?);
    show("3. UPDATE (positional)", &model.update("users", "id")?);
    show(
        "4. UPDATE ... WHERE",
        &model.update_where("users", "id", Value::from(user.id))?,
    );
    show("5. DELETE", &model.delete("users")?);
    show(
        "6. WHERE",
        &model.where_clause(op::EQ, WhereConnector::And)?,
    );

    let join = join_clause!(UserRow, OrderRow)?;
    show(
        "7. JOIN",
        &join.select_all(&["users u", "orders o"], &["u.id = o.user_id"])?,
    );

    let deferred = conversion(&"plain string");
    match deferred.insert("users") {
        Ok(query) => show("8. Deferred", &query),
        Err(err) => println!("8. Deferred error: {err}"),
    }

    Ok(())
}
