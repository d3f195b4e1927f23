use serde_json::{Value as JsonValue, json};
use tessera::{Template, Value};

/// Heading-only template used by the "Hello World" scenarios
pub fn hello_world() -> Template {
    Template::builder()
        .name("hello")
        .heading("Hello {{name}}")
        .data("name", "World")
        .build()
        .expect("valid template")
}

/// `count` row maps of the form `{"id": i, "name": "Item i"}`
pub fn numbered_rows(count: usize) -> Value {
    Value::from(JsonValue::Array(
        (0..count)
            .map(|i| json!({ "id": i, "name": format!("Item {}", i) }))
            .collect(),
    ))
}

/// Two-column table over `rows`
pub fn items_table(rows: Value) -> Template {
    Template::builder()
        .name("items")
        .table(["ID", "Name"], ["{{id}}", "{{name}}"])
        .data("rows", rows)
        .build()
        .expect("valid template")
}

/// JSON definition covering every section type
pub fn report_definition() -> JsonValue {
    json!({
        "name": "users",
        "sections": [
            { "type": "heading", "text": "Users of {{company}}" },
            { "type": "paragraph", "text": "Generated for {{company}}" },
            { "type": "table", "headers": ["Name", "Email"], "columns": ["{{name}}", "{{email}}"] }
        ],
        "data": {
            "company": "Acme & Sons",
            "rows": [
                { "name": "Alice", "email": "alice@example.com" },
                { "name": "Bob, Jr.", "email": "bob@example.com" }
            ]
        }
    })
}
