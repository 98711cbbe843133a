//! Schema generation from `#[derive(Record)]` types.

#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap};
use std::time::SystemTime;

use sqlrecord::prelude::*;
use sqlrecord::{RecordRef, SqlType};

#[derive(Record)]
#[record(name = "shop::Address")]
struct Address {
    street: String,
    zip: Option<String>,
}

#[derive(Record)]
#[record(name = "shop::Item", table = "items")]
struct Item {
    sku: String,
    #[record(column = "unit_price", sql_type = "DECIMAL(10, 2)")]
    price: f64,
    quantity: u32,
}

struct Cache;

#[derive(Record)]
#[record(name = "shop::Customer")]
struct Customer {
    name: String,
    active: bool,
    address: Address,
    billing: Option<Box<Address>>,
    #[record(list = "shop::Order")]
    orders: Vec<Order>,
    #[record(ignore)]
    cache: Cache,
    #[record(ignore)]
    last_address: Address,
    #[record(opaque)]
    session: Cache,
    scores: Vec<i32>,
}

#[derive(Record)]
#[record(name = "shop::Order")]
struct Order {
    placed_at: SystemTime,
    #[record(list = "shop::Item")]
    items: Vec<Item>,
}

#[derive(Record)]
#[record(name = "shop::Audited")]
struct Audited {
    created_by: String,
}

#[derive(Record)]
#[record(name = "shop::Invoice", extends = Audited)]
struct Invoice {
    number: i64,
}

#[derive(Record)]
#[record(name = "shop::Broken")]
struct Broken {
    #[record(list = "shop::Nothing")]
    things: Vec<Cache>,
}

#[derive(Record)]
#[record(name = "shop::Tagged")]
struct Tagged {
    #[record(list = "std::string::String")]
    tags: Vec<String>,
}

#[derive(Record)]
#[record(name = "shop::Settings")]
struct Settings {
    key: String,
    extra: HashMap<String, String>,
    ordered: BTreeMap<u32, String>,
}

#[derive(Record)]
#[record(name = "shop::Node")]
struct Node {
    label: String,
}

#[derive(Record)]
#[record(name = "shop::Tree")]
struct Tree {
    root: Node,
    #[record(list = "shop::Node")]
    children: Vec<Node>,
}

#[derive(Record)]
#[record(name = "shop::Leaf", extends = Tree)]
struct Leaf {
    depth: i32,
    sibling: Option<Node>,
}

fn registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    registry
        .register::<Customer>()
        .register::<Address>()
        .register::<Order>()
        .register::<Item>()
        .register::<Invoice>()
        .register_plain("std::string::String");
    registry
}

#[test]
fn derived_metadata_describes_fields() {
    let info = Customer::record_info();
    assert_eq!(info.name, "shop::Customer");
    assert_eq!(info.short_name(), "Customer");

    let address = &info.fields[2];
    assert_eq!(address.name, "address");
    assert_eq!(
        address.field_type,
        FieldType::Record(RecordRef::of::<Address>())
    );

    let billing = &info.fields[3];
    assert_eq!(billing.field_type.record().unwrap().get().name, "shop::Address");

    assert_eq!(info.fields[4].list_of, Some("shop::Order"));
    assert!(info.fields[5].ignored);
    assert_eq!(info.fields[7].field_type, FieldType::Opaque("Cache"));
    assert_eq!(info.fields[8].field_type, FieldType::Collection);
    assert_eq!(
        Order::record_info().fields[0].field_type,
        FieldType::Scalar(SqlType::Timestamp)
    );
}

#[test]
fn derived_default_name_uses_module_path() {
    #[derive(Record)]
    struct Local {
        value: i32,
    }

    let info = Local::record_info();
    assert!(info.name.ends_with("::Local"));
    assert_eq!(info.short_name(), "Local");
}

#[test]
fn full_schema_sqlite() {
    let stmts = sqlrecord::create_schema(&registry(), SchemaConfig::default()).unwrap();

    // Five tables, then (join, index) for address, billing, orders, items.
    assert_eq!(stmts.len(), 13);

    let customer = &stmts[0];
    assert!(customer.starts_with("CREATE TABLE Customer ("));
    assert!(customer.ends_with(",\nname TEXT,\nactive BOOLEAN\n)"));

    assert!(stmts[1].ends_with(",\nstreet TEXT,\nzip TEXT\n)"));
    assert!(stmts[2].ends_with(",\nplaced_at TIMESTAMP\n)"));
    assert!(stmts[3].starts_with("CREATE TABLE items ("));
    assert!(stmts[3].ends_with(",\nsku TEXT,\nunit_price DECIMAL(10, 2),\nquantity BIGINT\n)"));
    assert!(stmts[4].starts_with("CREATE TABLE Invoice ("));
    assert!(stmts[4].ends_with(",\ncreated_by TEXT,\nnumber BIGINT\n)"));

    let join_tables: Vec<&str> = stmts[5..]
        .iter()
        .step_by(2)
        .map(|s| s.lines().next().unwrap())
        .collect();
    assert_eq!(
        join_tables,
        vec![
            "CREATE TABLE Customer_Address_address (",
            "CREATE TABLE Customer_Address_billing (",
            "CREATE TABLE Customer_Order_orders (",
            "CREATE TABLE Order_items_items (",
        ]
    );
    assert_eq!(
        stmts[12],
        "CREATE INDEX Order_items_items_idx ON Order_items_items(parent_id)"
    );
    assert!(stmts.iter().all(|s| !s.contains("last_address")));
}

#[test]
fn full_schema_mysql() {
    let config = SchemaConfig::default().dialect(Dialect::Mysql);
    let stmts = sqlrecord::create_schema(&registry(), config).unwrap();

    assert_eq!(stmts.len(), 9);
    assert!(stmts[0].ends_with(",\nname TEXT,\nactive TINYINT(1)\n)"));
    assert!(stmts[3].ends_with(",\nquantity BIGINT\n)"));
    assert!(stmts.iter().all(|s| !s.starts_with("CREATE INDEX")));
    assert!(stmts[8].contains("REFERENCES items(record_id)"));
}

#[test]
fn unknown_list_element_fails() {
    let registry = registry();
    let err = SchemaCompiler::new(&registry)
        .compile_to_vec(&[Broken::record_info()])
        .unwrap_err();

    assert!(err.to_string().contains("shop::Nothing"));
}

#[test]
fn plain_list_element_fails() {
    let registry = registry();
    let err = SchemaCompiler::new(&registry)
        .compile_to_vec(&[Tagged::record_info()])
        .unwrap_err();

    assert!(matches!(err, SchemaError::RelationAnnotationMismatch { .. }));
}

#[test]
fn closure_sink_sees_tables_before_joins() {
    let registry = registry();
    let mut kinds = Vec::new();
    SchemaCompiler::new(&registry)
        .compile(
            &[Order::record_info(), Item::record_info()],
            &mut FnSink(|sql: &str| kinds.push(sql.contains("parent_id"))),
        )
        .unwrap();

    assert_eq!(kinds, vec![false, false, true, true]);
}

#[test]
fn config_round_trips_through_json() {
    let config = SchemaConfig::default().dialect(Dialect::Mysql).table_prefix("shop_");
    let json = serde_json::to_string(&config).unwrap();
    let parsed = SchemaConfig::from_json(&json).unwrap();
    assert_eq!(parsed, config);

    let stmts = sqlrecord::create_schema(&registry(), parsed).unwrap();
    assert!(stmts[0].starts_with("CREATE TABLE shop_Customer ("));
    assert!(stmts[3].starts_with("CREATE TABLE items ("));
    assert!(stmts[5].starts_with("CREATE TABLE shop_Customer_Address_address ("));
    assert!(stmts[8].starts_with("CREATE TABLE shop_Order_items_items ("));
}

#[test]
fn map_fields_are_skipped() {
    let mut registry = TypeRegistry::new();
    registry.register::<Settings>();
    let stmts = sqlrecord::create_schema(&registry, SchemaConfig::default()).unwrap();

    assert_eq!(stmts.len(), 1);
    assert!(stmts[0].ends_with(",\nkey TEXT\n)"));
    assert!(!stmts[0].contains("extra"));
    assert!(!stmts[0].contains("ordered"));
}

#[test]
fn inherited_relations_join_from_derived_record() {
    let mut registry = TypeRegistry::new();
    registry.register::<Leaf>().register::<Node>();
    let stmts = SchemaCompiler::new(&registry)
        .compile_to_vec(&[Leaf::record_info()])
        .unwrap();

    // Leaf table, then (join, index) for root, children, sibling.
    assert_eq!(stmts.len(), 7);
    assert!(stmts[0].starts_with("CREATE TABLE Leaf ("));
    assert!(stmts[0].ends_with(",\ndepth INTEGER\n)"));

    let join_tables: Vec<&str> = stmts[1..]
        .iter()
        .step_by(2)
        .map(|s| s.lines().next().unwrap())
        .collect();
    assert_eq!(
        join_tables,
        vec![
            "CREATE TABLE Leaf_Node_root (",
            "CREATE TABLE Leaf_Node_children (",
            "CREATE TABLE Leaf_Node_sibling (",
        ]
    );
    assert!(stmts[1].contains("REFERENCES Leaf(record_id)"));
    assert!(stmts.iter().all(|s| !s.contains("Tree")));
}
