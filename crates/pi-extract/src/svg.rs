//! Per-file SVG validation and draw-command extraction.
//!
//! An icon definition is accepted only when its root `<svg>` element declares
//! the fixed 16x16 canvas with a `0 0 16 16` viewBox and contains nothing but
//! `<path>` children. The `d` attribute of every path is collected in
//! document order; surrounding whitespace is trimmed and empty values are
//! discarded. Everything else rejects the icon with a reason.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use thiserror::Error;

/// Required root `width` attribute value.
pub const EXPECTED_WIDTH: &str = "16";
/// Required root `height` attribute value.
pub const EXPECTED_HEIGHT: &str = "16";
/// Required root `viewBox` attribute value, matched exactly.
pub const EXPECTED_VIEW_BOX: &str = "0 0 16 16";

/// Why a single icon definition was rejected.
///
/// Rejections are recorded per icon and never abort the surrounding scan.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SvgRejection {
    /// Document has no `<svg>` root element.
    #[error("no <svg> root element")]
    MissingRoot,

    /// Root canvas attributes differ from the expected fixed frame.
    #[error(
        "expected width=\"{EXPECTED_WIDTH}\" height=\"{EXPECTED_HEIGHT}\" \
         viewBox=\"{EXPECTED_VIEW_BOX}\", found width={width:?} height={height:?} \
         viewBox={view_box:?}"
    )]
    CanvasMismatch {
        width: Option<String>,
        height: Option<String>,
        view_box: Option<String>,
    },

    /// Root contains a child that is not a `<path>` element.
    #[error("contains disallowed element type: <{name}>")]
    DisallowedChild { name: String },

    /// No `<path>` child carried a non-empty `d` attribute.
    #[error("no valid <path d=\"...\"> found")]
    NoPaths,

    /// The markup could not be parsed at all.
    #[error("malformed markup: {message}")]
    Malformed { message: String },
}

impl SvgRejection {
    fn malformed(error: impl std::fmt::Display) -> Self {
        SvgRejection::Malformed {
            message: error.to_string(),
        }
    }
}

/// Validates one icon definition and extracts its draw-commands.
pub fn extract_icon(content: &str) -> Result<Vec<String>, SvgRejection> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    // Find the root element, skipping the prolog.
    let root = loop {
        match reader.read_event().map_err(SvgRejection::malformed)? {
            Event::Decl(_) | Event::Comment(_) | Event::DocType(_) | Event::PI(_) => {}
            Event::Start(start) => break (start.to_owned(), false),
            Event::Empty(start) => break (start.to_owned(), true),
            Event::Eof => return Err(SvgRejection::MissingRoot),
            _ => return Err(SvgRejection::MissingRoot),
        }
    };
    let (root, root_is_empty) = root;
    if root.name().as_ref() != b"svg" {
        return Err(SvgRejection::MissingRoot);
    }
    validate_canvas(&root)?;

    if root_is_empty {
        return Err(SvgRejection::NoPaths);
    }

    let mut paths = Vec::new();
    loop {
        match reader.read_event().map_err(SvgRejection::malformed)? {
            Event::Empty(element) => {
                collect_path(&element, &mut paths)?;
            }
            Event::Start(element) => {
                collect_path(&element, &mut paths)?;
                // Content nested inside a path carries no draw-commands we use.
                reader
                    .read_to_end(element.name())
                    .map_err(SvgRejection::malformed)?;
            }
            Event::Text(_) | Event::CData(_) | Event::GeneralRef(_) => {
                return Err(SvgRejection::DisallowedChild {
                    name: "#text".to_string(),
                });
            }
            Event::Comment(_) | Event::PI(_) => {}
            Event::End(_) => break,
            Event::Eof => {
                return Err(SvgRejection::malformed("unexpected end of document"));
            }
            Event::Decl(_) | Event::DocType(_) => {
                return Err(SvgRejection::malformed("unexpected markup after root"));
            }
        }
    }

    if paths.is_empty() {
        return Err(SvgRejection::NoPaths);
    }
    Ok(paths)
}

/// Checks the fixed canvas contract on the root element.
fn validate_canvas(root: &BytesStart<'_>) -> Result<(), SvgRejection> {
    let mut width = None;
    let mut height = None;
    let mut view_box = None;
    for attr in root.attributes() {
        let attr = attr.map_err(SvgRejection::malformed)?;
        let value = String::from_utf8_lossy(&attr.value).into_owned();
        match attr.key.as_ref() {
            b"width" => width = Some(value),
            b"height" => height = Some(value),
            b"viewBox" => view_box = Some(value),
            _ => {}
        }
    }
    let valid = width.as_deref() == Some(EXPECTED_WIDTH)
        && height.as_deref() == Some(EXPECTED_HEIGHT)
        && view_box.as_deref() == Some(EXPECTED_VIEW_BOX);
    if valid {
        Ok(())
    } else {
        Err(SvgRejection::CanvasMismatch {
            width,
            height,
            view_box,
        })
    }
}

/// Records the trimmed `d` attribute of a `<path>` child, rejecting any other
/// element kind.
fn collect_path(element: &BytesStart<'_>, paths: &mut Vec<String>) -> Result<(), SvgRejection> {
    if element.name().as_ref() != b"path" {
        return Err(SvgRejection::DisallowedChild {
            name: String::from_utf8_lossy(element.name().as_ref()).into_owned(),
        });
    }
    for attr in element.attributes() {
        let attr = attr.map_err(SvgRejection::malformed)?;
        if attr.key.as_ref() == b"d" {
            let value = String::from_utf8_lossy(&attr.value);
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                paths.push(trimmed.to_string());
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 16 16"><path d="M8 1a1 1 0 0 1 1 1"/></svg>"#;

    #[test]
    fn accepts_single_path_icon() {
        let paths = extract_icon(VALID).unwrap();
        assert_eq!(paths, vec!["M8 1a1 1 0 0 1 1 1".to_string()]);
    }

    #[test]
    fn keeps_document_order_for_multiple_paths() {
        let svg = r#"<svg width="16" height="16" viewBox="0 0 16 16">
            <path d=" M1 "/>
            <path d="M2"/>
            <path d="M3"/>
        </svg>"#;
        let paths = extract_icon(svg).unwrap();
        assert_eq!(paths, vec!["M1", "M2", "M3"]);
    }

    #[test]
    fn rejects_wrong_canvas_size() {
        let svg = r#"<svg width="24" height="16" viewBox="0 0 16 16"><path d="M1"/></svg>"#;
        let rejection = extract_icon(svg).unwrap_err();
        assert!(matches!(rejection, SvgRejection::CanvasMismatch { .. }));
    }

    #[test]
    fn rejects_wrong_view_box() {
        let svg = r#"<svg width="16" height="16" viewBox="0 0 24 24"><path d="M1"/></svg>"#;
        assert!(matches!(
            extract_icon(svg).unwrap_err(),
            SvgRejection::CanvasMismatch { .. }
        ));
    }

    #[test]
    fn rejects_missing_canvas_attributes() {
        let svg = r#"<svg viewBox="0 0 16 16"><path d="M1"/></svg>"#;
        let rejection = extract_icon(svg).unwrap_err();
        let SvgRejection::CanvasMismatch { width, height, .. } = rejection else {
            panic!("expected canvas mismatch");
        };
        assert_eq!(width, None);
        assert_eq!(height, None);
    }

    #[test]
    fn rejects_disallowed_child_despite_valid_canvas() {
        let svg = r#"<svg width="16" height="16" viewBox="0 0 16 16">
            <path d="M1"/>
            <circle cx="8" cy="8" r="4"/>
        </svg>"#;
        assert_eq!(
            extract_icon(svg).unwrap_err(),
            SvgRejection::DisallowedChild {
                name: "circle".to_string()
            }
        );
    }

    #[test]
    fn rejects_text_content() {
        let svg = r#"<svg width="16" height="16" viewBox="0 0 16 16">hello<path d="M1"/></svg>"#;
        assert_eq!(
            extract_icon(svg).unwrap_err(),
            SvgRejection::DisallowedChild {
                name: "#text".to_string()
            }
        );
    }

    #[test]
    fn discards_empty_draw_commands() {
        let svg = r#"<svg width="16" height="16" viewBox="0 0 16 16"><path d="   "/><path/></svg>"#;
        assert_eq!(extract_icon(svg).unwrap_err(), SvgRejection::NoPaths);
    }

    #[test]
    fn rejects_empty_root() {
        let svg = r#"<svg width="16" height="16" viewBox="0 0 16 16"/>"#;
        assert_eq!(extract_icon(svg).unwrap_err(), SvgRejection::NoPaths);
    }

    #[test]
    fn rejects_non_svg_root() {
        let svg = r#"<icon width="16" height="16" viewBox="0 0 16 16"/>"#;
        assert_eq!(extract_icon(svg).unwrap_err(), SvgRejection::MissingRoot);
    }

    #[test]
    fn rejects_malformed_markup() {
        let rejection = extract_icon("<svg width=\"16\"").unwrap_err();
        assert!(matches!(rejection, SvgRejection::Malformed { .. }));
    }
}
