use payform::infrastructure::in_memory::MapFieldSource;
use std::io::Write;
use tempfile::NamedTempFile;

/// A complete snapshot of the mandatory form fields.
pub fn base_fields() -> MapFieldSource {
    MapFieldSource::from_pairs([
        ("merchant_id", "MERCH-12345"),
        ("order_id", "ORDER123"),
        ("amount", "100.00"),
        ("currency", "THB"),
        ("description", "Payment for order ORDER123"),
    ])
}

/// Writes a JSON field file for CLI tests and returns its handle.
pub fn write_field_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp field file");
    file.write_all(json.as_bytes()).expect("write field file");
    file.flush().expect("flush field file");
    file
}
