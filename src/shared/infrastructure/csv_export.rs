use csv::{ReaderBuilder, WriterBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// A row type with a fixed header. The header is written even when there
/// are no records, and its names must match the serialized field names.
pub trait CsvRecord: Serialize {
    const HEADER: &'static [&'static str];
}

pub fn write_csv<T: CsvRecord>(records: &[T]) -> anyhow::Result<String> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    wtr.write_record(T::HEADER)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    let bytes = wtr
        .into_inner()
        .map_err(|e| anyhow::anyhow!("csv writer: {}", e.error()))?;
    Ok(String::from_utf8(bytes)?)
}

pub fn read_csv<T: DeserializeOwned>(data: &str) -> anyhow::Result<Vec<T>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(data.as_bytes());
    let mut records = Vec::new();
    for record in rdr.deserialize() {
        records.push(record?);
    }
    Ok(records)
}

#[cfg(test)]
mod csv_export_tests {
    use super::*;
    use rstest::{fixture, rstest};
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Entry {
        id: String,
        hours: String,
        note: Option<String>,
    }

    impl CsvRecord for Entry {
        const HEADER: &'static [&'static str] = &["id", "hours", "note"];
    }

    #[fixture]
    fn entries() -> Vec<Entry> {
        vec![
            Entry {
                id: "te-1".into(),
                hours: "08:30".into(),
                note: Some("Wartung, Aufzug 3".into()),
            },
            Entry {
                id: "te-2".into(),
                hours: "09:00".into(),
                note: None,
            },
            Entry {
                id: "te-3".into(),
                hours: "00:45".into(),
                note: Some("\"Notdienst\" Nacht".into()),
            },
        ]
    }

    #[rstest]
    fn it_should_write_the_header_first(entries: Vec<Entry>) {
        let csv = write_csv(&entries).unwrap();
        assert_eq!(csv.lines().next(), Some("id,hours,note"));
        assert_eq!(csv.lines().count(), 4);
    }

    #[rstest]
    fn it_should_write_only_the_header_when_empty() {
        let csv = write_csv::<Entry>(&[]).unwrap();
        assert_eq!(csv, "id,hours,note\n");
    }

    #[rstest]
    fn it_should_read_back_what_it_wrote(entries: Vec<Entry>) {
        let csv = write_csv(&entries).unwrap();
        let read: Vec<Entry> = read_csv(&csv).unwrap();
        assert_eq!(read, entries);
    }
}
