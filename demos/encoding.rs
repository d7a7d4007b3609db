//! Encoding maps, records and nested optional records.
//!
//! Run with: cargo run --example encoding

use serde::Serialize;
use serde_jsonkit::to_string;
use std::collections::HashMap;
use std::error::Error;

#[derive(Debug, Serialize)]
struct Book {
    title: String,
    author: String,
    year: i32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Seller {
    #[serde(rename = "sellerId")]
    id: i32,
    name: String,
    country_code: String,
}

#[derive(Debug, Serialize)]
struct Product {
    #[serde(rename = "productId")]
    id: i32,
    name: String,
    price: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    seller: Option<Seller>,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Map keys come out sorted
    let file_counter = HashMap::from([("cpp", 10), ("go", 3), ("python", 11), ("javascript", 5)]);
    println!("{}\n", to_string(&file_counter)?);

    let book = Book {
        title: "Data Structure".to_string(),
        author: "Ashiq Hussain".to_string(),
        year: 2022,
    };
    println!("{}\n", to_string(&book)?);

    // The laptop has no seller, so its "seller" label is left out
    let products = vec![
        Product {
            id: 50,
            name: "Writing Book".to_string(),
            price: 100,
            seller: Some(Seller {
                id: 1,
                name: "ABC Company".to_string(),
                country_code: "US".to_string(),
            }),
        },
        Product {
            id: 51,
            name: "Kettle".to_string(),
            price: 500,
            seller: Some(Seller {
                id: 20,
                name: "John Store".to_string(),
                country_code: "DE".to_string(),
            }),
        },
        Product {
            id: 52,
            name: "Laptop".to_string(),
            price: 6790,
            seller: None,
        },
    ];
    println!("{}\n", to_string(&products)?);

    // Values JSON cannot represent are rejected
    match to_string(&f64::NAN) {
        Ok(json) => println!("unexpected: {}", json),
        Err(e) => println!("NaN: {}", e),
    }

    Ok(())
}
