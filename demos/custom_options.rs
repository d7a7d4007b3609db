//! Customizing output with JsonOptions.
//!
//! Run with: cargo run --example custom_options

use serde::Serialize;
use serde_jsonkit::{to_string_compact, to_string_with_options, JsonOptions};
use std::collections::HashMap;
use std::error::Error;

#[derive(Debug, Serialize)]
struct Page {
    title: String,
    body: String,
    counters: HashMap<String, u32>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let page = Page {
        title: "Fish & Chips".to_string(),
        body: "<p>Fresh daily</p>".to_string(),
        counters: HashMap::from([("views".to_string(), 120), ("likes".to_string(), 7)]),
    };

    println!("Default (4 spaces, sorted map keys):");
    println!("{}\n", serde_jsonkit::to_string(&page)?);

    println!("Two spaces:");
    println!("{}\n", to_string_with_options(&page, JsonOptions::new().with_indent(2))?);

    println!("Tabs:");
    println!("{}\n", to_string_with_options(&page, JsonOptions::new().with_tabs())?);

    println!("Compact:");
    println!("{}\n", to_string_compact(&page)?);

    // Safe to embed in an HTML <script> block
    println!("HTML-escaped:");
    let options = JsonOptions::compact().with_escape_html(true);
    println!("{}\n", to_string_with_options(&page, options)?);

    // Map entries in iteration order; struct fields keep declared order either way
    println!("Unsorted map keys:");
    let options = JsonOptions::new().with_sort_map_keys(false);
    println!("{}", to_string_with_options(&page, options)?);

    Ok(())
}
