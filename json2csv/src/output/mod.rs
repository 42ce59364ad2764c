//! CSV serialization of a [`Table`]
//!
//! CRLF line endings and RFC 4180 quoting: fields containing the
//! separator, quotes or line breaks are quoted, quotes are doubled.

use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::io::Write;

use crate::error::OutputResult;
use crate::transform::Table;

/// Write every row of `table` to `writer` and flush it.
pub fn write_table<W: Write>(writer: W, table: &Table) -> OutputResult<()> {
    let mut csv_writer = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .quote_style(QuoteStyle::Necessary)
        .has_headers(false)
        .flexible(false)
        .from_writer(writer);

    for row in table.rows() {
        csv_writer.write_record(row)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Render `table` as a CSV string
pub fn table_to_string(table: &Table) -> OutputResult<String> {
    let mut buffer = Vec::new();
    write_table(&mut buffer, table)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Rule;
    use crate::transform::assemble;

    #[test]
    fn test_crlf_line_endings() {
        let rule = Rule::new("r").with_mapping("id", "ID").with_mapping("name", "Name");
        let table = assemble(br#"[{"id":1,"name":"Alice"},{"id":2,"name":null}]"#, &rule).unwrap();

        assert_eq!(
            table_to_string(&table).unwrap(),
            "ID,Name\r\n1,Alice\r\n2,\r\n"
        );
    }

    #[test]
    fn test_quoting() {
        let rule = Rule::new("r").with_mapping("v", "Value, quoted");
        let input = br#"[{"v":"a,b"},{"v":"say \"hi\""},{"v":"two\nlines"},{"v":"plain"}]"#;
        let table = assemble(input, &rule).unwrap();

        assert_eq!(
            table_to_string(&table).unwrap(),
            "\"Value, quoted\"\r\n\"a,b\"\r\n\"say \"\"hi\"\"\"\r\n\"two\nlines\"\r\nplain\r\n"
        );
    }

    #[test]
    fn test_empty_table_writes_nothing() {
        let table = assemble(b"[]", &Rule::new("raw")).unwrap();
        assert_eq!(table_to_string(&table).unwrap(), "");
    }

    #[test]
    fn test_empty_first_record_inferred() {
        let table = assemble(br#"[{},{"a":1}]"#, &Rule::new("raw")).unwrap();
        assert_eq!(table_to_string(&table).unwrap(), "");
    }

    #[test]
    fn test_nested_value_is_quoted_json() {
        let rule = Rule::new("r").with_mapping("tags", "Tags");
        let table = assemble(br#"[{"tags":["a","b"]}]"#, &rule).unwrap();

        assert_eq!(
            table_to_string(&table).unwrap(),
            "Tags\r\n\"[\"\"a\"\",\"\"b\"\"]\"\r\n"
        );
    }
}
