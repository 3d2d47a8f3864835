//! Publish dates exactly as the feed wrote them.
//!
//! `feed-rs` normalizes every date to UTC, which drops the source offset. This
//! pass walks the raw XML once and keeps the text of each entry's date element,
//! indexed by entry position.

use quick_xml::events::Event;
use quick_xml::Reader;

#[derive(Debug, Default)]
struct EntryDates {
    /// `<pubDate>`, `<published>` or `<dc:date>`.
    published: Option<String>,
    /// Atom `<updated>`, used only when nothing better is present.
    updated: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateField {
    Published,
    Updated,
}

fn date_field(local_name: &[u8]) -> Option<DateField> {
    match local_name {
        b"pubDate" | b"published" | b"date" => Some(DateField::Published),
        b"updated" => Some(DateField::Updated),
        _ => None,
    }
}

/// Raw date text of every `<item>` / `<entry>` in document order.
///
/// Entries without a date element yield `None`. Malformed XML stops the scan
/// and returns what was collected so far; validity is decided by the feed parser.
pub(crate) fn native_dates(body: &[u8]) -> Vec<Option<String>> {
    let Ok(xml) = std::str::from_utf8(body) else {
        return Vec::new();
    };
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut dates: Vec<EntryDates> = Vec::new();
    let mut in_entry = false;
    // Atom `<source>` carries its own `<updated>` for the origin feed.
    let mut source_depth = 0usize;
    let mut field: Option<DateField> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"item" | b"entry" if source_depth == 0 => {
                    in_entry = true;
                    dates.push(EntryDates::default());
                }
                b"source" if in_entry => source_depth += 1,
                name if in_entry && source_depth == 0 => field = date_field(name),
                _ => {}
            },
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"item" | b"entry" if source_depth == 0 => in_entry = false,
                b"source" if source_depth > 0 => source_depth -= 1,
                _ => field = None,
            },
            Ok(Event::Text(e)) => {
                if let (Some(kind), Some(entry)) = (field, dates.last_mut()) {
                    let text = e.unescape().unwrap_or_default().trim().to_string();
                    record(entry, kind, text);
                }
            }
            Ok(Event::CData(e)) => {
                if let (Some(kind), Some(entry)) = (field, dates.last_mut()) {
                    let text = String::from_utf8_lossy(e.as_ref()).trim().to_string();
                    record(entry, kind, text);
                }
            }
            Ok(Event::Eof) | Err(_) => break,
            _ => {}
        }
    }

    dates
        .into_iter()
        .map(|d| d.published.or(d.updated))
        .collect()
}

fn record(entry: &mut EntryDates, kind: DateField, text: String) {
    if text.is_empty() {
        return;
    }
    let slot = match kind {
        DateField::Published => &mut entry.published,
        DateField::Updated => &mut entry.updated,
    };
    slot.get_or_insert(text);
}
