//! Generate XML text for combined rooms.
//!
//! The output includes the XML declaration and uses 2-space indentation with
//! a newline after each element, so the document stays human-readable.

use camino::Utf8Path;

use super::Exporter;
use crate::error::{Error, Result};
use crate::model::CombinedRoom;

/// Writes the combined rooms as a pretty-printed `<rooms>` document.
pub struct XmlExporter;

impl Exporter for XmlExporter {
    fn export(&self, rooms: &[CombinedRoom], path: &Utf8Path) -> Result<()> {
        let xml = generate_rooms_xml(rooms);
        std::fs::write(path.as_std_path(), xml).map_err(|source| Error::FileAccess {
            path: path.to_owned(),
            source,
        })
    }
}

/// Generate the XML text for a sequence of combined rooms.
///
/// Room and student `id` attributes carry the string form of the id
/// (decimal text for integer ids, the raw text otherwise).
pub fn generate_rooms_xml(rooms: &[CombinedRoom]) -> String {
    let mut out = String::with_capacity(1024);
    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    if rooms.is_empty() {
        out.push_str("<rooms/>\n");
        return out;
    }
    out.push_str("<rooms>\n");
    for room in rooms {
        write_room(&mut out, room, 1);
    }
    out.push_str("</rooms>\n");
    out
}

fn write_room(out: &mut String, room: &CombinedRoom, level: usize) {
    indent(out, level);
    out.push_str(&format!(
        "<room id=\"{}\">\n",
        xml_escape_attr(&room.id.to_string())
    ));

    indent(out, level + 1);
    out.push_str(&format!("<name>{}</name>\n", xml_escape(&room.name)));

    if room.students.is_empty() {
        // Empty element: self-closing form
        indent(out, level + 1);
        out.push_str("<students/>\n");
    } else {
        indent(out, level + 1);
        out.push_str("<students>\n");
        for student in &room.students {
            indent(out, level + 2);
            out.push_str(&format!(
                "<student id=\"{}\">{}</student>\n",
                xml_escape_attr(&student.id.to_string()),
                xml_escape(&student.name)
            ));
        }
        indent(out, level + 1);
        out.push_str("</students>\n");
    }

    indent(out, level);
    out.push_str("</room>\n");
}

fn indent(out: &mut String, level: usize) {
    for _ in 0..level {
        out.push_str("  ");
    }
}

/// Escape text content for XML. Encodes `&`, `<`, `>`, `"`, and `'` even in
/// text content.
fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape an attribute value for XML. Like [`xml_escape`] but also encodes
/// newlines as `&#xA;` and carriage returns as `&#xD;`.
fn xml_escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\n' => out.push_str("&#xA;"),
            '\r' => out.push_str("&#xD;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RecordId, RoomStudent};

    #[test]
    fn test_single_room_with_student() {
        let rooms = vec![CombinedRoom {
            id: RecordId::Int(1),
            name: "Room A".into(),
            students: vec![RoomStudent {
                id: RecordId::Int(10),
                name: "Alice".into(),
            }],
        }];
        let xml = generate_rooms_xml(&rooms);
        let expected = concat!(
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n",
            "<rooms>\n",
            "  <room id=\"1\">\n",
            "    <name>Room A</name>\n",
            "    <students>\n",
            "      <student id=\"10\">Alice</student>\n",
            "    </students>\n",
            "  </room>\n",
            "</rooms>\n",
        );
        assert_eq!(xml, expected);
    }

    #[test]
    fn test_empty_student_list_self_closes() {
        let rooms = vec![CombinedRoom {
            id: RecordId::Int(2),
            name: "Room B".into(),
            students: vec![],
        }];
        let xml = generate_rooms_xml(&rooms);
        assert!(xml.contains("<students/>"));
        assert!(!xml.contains("</students>"));
    }

    #[test]
    fn test_no_rooms_yields_self_closing_root() {
        let xml = generate_rooms_xml(&[]);
        assert_eq!(xml, "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<rooms/>\n");
    }

    #[test]
    fn test_escapes_special_characters() {
        let rooms = vec![CombinedRoom {
            id: RecordId::Text("a&b".into()),
            name: "Lab <3>".into(),
            students: vec![RoomStudent {
                id: RecordId::Int(1),
                name: "O'Hara \"Quinn\"".into(),
            }],
        }];
        let xml = generate_rooms_xml(&rooms);
        assert!(xml.contains("<room id=\"a&amp;b\">"));
        assert!(xml.contains("<name>Lab &lt;3&gt;</name>"));
        assert!(xml.contains("O&apos;Hara &quot;Quinn&quot;"));
    }

    #[test]
    fn test_string_ids_render_verbatim() {
        let rooms = vec![CombinedRoom {
            id: RecordId::Text("007".into()),
            name: "Bond".into(),
            students: vec![],
        }];
        let xml = generate_rooms_xml(&rooms);
        // No leading-zero normalization on string ids
        assert!(xml.contains("<room id=\"007\">"));
    }
}
