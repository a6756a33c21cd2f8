use crate::icon::ConvertError;
use serde::Serialize;

/// Path data extracted from a single normalized icon SVG.
///
/// Field order matters: the serialized form of this struct is emitted
/// verbatim into the generated icons file, so reordering fields changes
/// the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconRecord {
    /// Combined `d` attribute of all path elements, in document order.
    pub path: String,

    /// The group element's transform attribute, if it had one.
    pub transform: Option<String>,

    /// The icon's base file name, without extension.
    pub title: String,

    /// Canvas size the icon was normalized to, always 24.
    pub size: u32,
}

/// Extracts the icon record from a normalized SVG document.
///
/// The interesting content lives under the first `g` child of the root
/// element, in the root's namespace (potrace output and hand-drawn icons
/// alike use this shape). Every `path` child of that group contributes
/// its `d` attribute; the values are joined with single spaces.
pub fn extract_record(svg: &str, title: &str) -> Result<IconRecord, ConvertError> {
    let doc = roxmltree::Document::parse(svg)?;
    let root = doc.root_element();
    let ns = root.tag_name().namespace();

    let group = root
        .children()
        .find(|node| {
            node.is_element() && node.tag_name().name() == "g" && node.tag_name().namespace() == ns
        })
        .ok_or_else(|| ConvertError::MissingGroup(title.to_owned()))?;

    let mut segments = Vec::new();
    for path in group
        .children()
        .filter(|node| {
            node.is_element()
                && node.tag_name().name() == "path"
                && node.tag_name().namespace() == ns
        })
    {
        let d = path
            .attribute("d")
            .ok_or_else(|| ConvertError::MissingPathData(title.to_owned()))?;
        segments.push(d);
    }

    Ok(IconRecord {
        path: segments.join(" "),
        transform: group.attribute("transform").map(str::to_owned),
        title: title.to_owned(),
        size: 24,
    })
}
