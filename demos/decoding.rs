//! Decoding records, maps and nested records, and reading decode errors.
//!
//! Run with: cargo run --example decoding

use serde::Deserialize;
use serde_jsonkit::from_str;
use std::collections::HashMap;
use std::error::Error;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Book {
    title: String,
    author: String,
    year: i32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct Seller {
    #[serde(rename = "sellerId")]
    id: i32,
    name: String,
    country_code: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Product {
    #[serde(rename = "productId")]
    id: i32,
    name: String,
    price: i32,
    seller: Option<Seller>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let book: Book = from_str(
        r#"{
            "title": "My Book",
            "author": "Hossien",
            "year": 2023
        }"#,
    )?;
    println!("{:#?}\n", book);

    let fruits: HashMap<String, i32> = from_str(
        r#"{
            "apples": 10,
            "mangos": 20,
            "grapes": 20
        }"#,
    )?;
    println!("{:?}\n", fruits);

    // "rating" is not a field of Product and is skipped
    let products: Vec<Product> = from_str(
        r#"[
            {
                "productId": 50,
                "name": "Writing Book",
                "seller": {"sellerId": 1, "name": "ABC Company", "countryCode": "US"},
                "price": 100,
                "rating": 4.5
            },
            {"productId": 52, "name": "Laptop", "price": 6790}
        ]"#,
    )?;
    println!("{:#?}\n", products);

    let bad_inputs = [
        r#"{"year": "2023"}"#,
        r#"{"year": 99999999999}"#,
        "{\n    \"title\": \"x\",\n}",
        r#"{'title': "x"}"#,
    ];
    for input in bad_inputs {
        if let Err(e) = from_str::<Book>(input) {
            println!("{:?} error:\n{}\n", e.category(), e);
        }
    }

    Ok(())
}
