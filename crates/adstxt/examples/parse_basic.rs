//! Basic ads.txt parsing example
//!
//! This example demonstrates how to parse ads.txt content from a string.

use adstxt::{AdsTxtRecord, AdsTxtWriter};

fn main() {
    println!("=== Basic ads.txt Parsing Example ===\n");

    // Example content similar to what a publisher domain serves
    let content = r"# Ads.txt for example.com
openx.com, 343560932, DIRECT, 38f6ae102b
kargo.com, 105, DIRECT # top banner
appnexus.com, 7177, RESELLER, f5ab79cb980f11d1
subdomain=divisionone.example.com
subdomain=divisiontwo.example.com
contact=adops@example.com";

    // Parsing never fails; malformed lines degrade instead of erroring
    println!("1. Parsing ads.txt content...");
    let record = AdsTxtRecord::parse(content);

    println!("   Entries: {}", record.entry_count());
    println!("   Variables: {}", record.variables().len());

    println!("\n2. Declared sellers:");
    for entry in record.entries() {
        println!(
            "   • {} / {} ({})",
            entry.domain,
            entry.publisher_account_id.as_deref().unwrap_or("-"),
            entry.account_type.as_deref().unwrap_or("-"),
        );
        if let Some(comment) = &entry.comment {
            println!("     comment: {comment}");
        }
    }

    println!("\n3. Variables:");
    for (name, value) in record.variables() {
        for item in value.values() {
            println!("   • {name} = {item}");
        }
    }

    println!("\n4. Round-trip:");
    let written = AdsTxtWriter::to_string(&record, Some("Ads.txt for example.com"));
    let reparsed = AdsTxtRecord::parse(&written);
    println!("   Reparsed entries: {}", reparsed.entry_count());
    println!("   Round-trip equal: {}", record == reparsed);

    println!("\nDone.");
}
