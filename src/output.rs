use std::io::Write;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Serializes `value` as JSON indented with four spaces, followed by a
/// newline.  serde_json leaves non-ASCII characters unescaped, so CJK titles
/// and tags stay readable.
pub fn write_pretty_json<W: Write, T: Serialize>(mut writer: W, value: &T) -> anyhow::Result<()> {
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    value.serialize(&mut serializer)?;
    writeln!(writer)?;
    Ok(())
}
