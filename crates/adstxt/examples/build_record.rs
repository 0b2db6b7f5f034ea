//! Building an ads.txt record programmatically
//!
//! This example constructs a record from scratch and writes it out, first to
//! a string and then to an output stream.

use adstxt::{AdsTxtEntry, AdsTxtRecord, Error};

fn main() -> Result<(), Error> {
    println!("=== Building an ads.txt Record ===\n");

    let mut record = AdsTxtRecord::new();

    record.push_entry(
        AdsTxtEntry::new("openx.com")
            .with_publisher_account_id("343560932")
            .with_account_type("DIRECT")
            .with_certificate_authority_id("38f6ae102b"),
    );
    record.push_entry(
        AdsTxtEntry::new("kargo.com")
            .with_publisher_account_id("105")
            .with_account_type("DIRECT")
            .with_comment("top banner"),
    );

    record.append_variable("subdomain", "divisionone.example.com");
    record.append_variable("subdomain", "divisiontwo.example.com");
    record.append_variable("contact", "adops@example.com");

    println!("1. As a string with a header banner:\n");
    println!(
        "{}",
        record.to_adstxt_string_with_header("Authorized sellers for example.com")
    );

    println!("2. Streamed to a sink:");
    let mut buffer = Vec::new();
    record.write_to(&mut buffer)?;
    println!("   wrote {} bytes", buffer.len());

    Ok(())
}
