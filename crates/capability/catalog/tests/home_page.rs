use serde_json::Value;
use shop_catalog::{ICON_BASE_URL, home_page};

fn home_value() -> Value {
    serde_json::to_value(home_page()).expect("serialize")
}

#[test]
fn home_page_has_all_sections() {
    let value = home_value();
    let sections = [
        ("banner_one", 2),
        ("category", 4),
        ("products", 4),
        ("banner_two", 1),
        ("new_arrivals", 2),
        ("banner_three", 2),
        ("categories_listing", 2),
        ("top_brands", 1),
        ("brand_listing", 2),
        ("top_selling_products", 4),
        ("featured_laptop", 2),
        ("upcoming_laptops", 3),
        ("unboxed_deals", 2),
        ("my_browsing_history", 2),
    ];
    let object = value.as_object().expect("object");
    assert_eq!(object.len(), sections.len());
    for (key, len) in sections {
        let items = value[key].as_array().unwrap_or_else(|| panic!("{key} array"));
        assert_eq!(items.len(), len, "{key}");
    }
}

#[test]
fn product_sublabel_spelling_preserved() {
    let value = home_value();
    let products = value["products"].as_array().expect("products");
    assert_eq!(products[0]["SubLabel"], "Wireless HD IP Security");
    assert!(products[0].get("Sublabel").is_none());
    for product in &products[1..] {
        assert!(product.get("Sublabel").is_some());
        assert!(product.get("SubLabel").is_none());
    }
}

#[test]
fn tiles_use_camel_case_brand_icon() {
    let value = home_value();
    let arrival = &value["new_arrivals"][0];
    assert_eq!(arrival["label"], "Realme 2 Pro(Black,Sea,64 GB)");
    assert_eq!(
        arrival["brandIcon"],
        format!("{ICON_BASE_URL}Image -107.png").as_str()
    );
    assert_eq!(value["featured_laptop"][1]["price"], "284,999");
}

#[test]
fn home_page_is_deterministic() {
    assert_eq!(home_value(), home_value());
    let banner = value_str(&home_value()["banner_two"][0]["banner"]);
    assert_eq!(banner, format!("{ICON_BASE_URL}discount_banner.png"));
}

fn value_str(value: &Value) -> String {
    value.as_str().expect("string").to_string()
}

#[test]
fn every_icon_uses_base_url() {
    let value = home_value();
    let mut urls = Vec::new();
    collect_urls(&value, &mut urls);
    assert!(!urls.is_empty());
    for url in urls {
        assert!(url.starts_with(ICON_BASE_URL), "{url}");
    }
}

fn collect_urls<'a>(value: &'a Value, out: &mut Vec<&'a str>) {
    match value {
        Value::String(text) if text.starts_with("http") => out.push(text),
        Value::Array(items) => items.iter().for_each(|item| collect_urls(item, out)),
        Value::Object(map) => map.values().for_each(|item| collect_urls(item, out)),
        _ => {}
    }
}
