//! Rendering of the GB-specific `<ext>` content.
//!
//! Elements are appended in fixed order: the `<gbtype>` block, one `<ccs>`
//! block per classification code, then `<gbplannumber>`. When the item has no
//! classification codes nothing follows `<gbtype>`, including the plan number.

use std::io::Write;

use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;

use crate::error::Result;
use crate::gb_bibliographic_item::GbBibliographicItem;
use crate::xml::write_text_element;

/// Append the GB-specific elements of `item` to an open writer.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn render_gbxml<W: Write>(item: &GbBibliographicItem, writer: &mut Writer<W>) -> Result<()> {
    item.gbtype().write_xml(writer)?;
    if item.ccs().is_empty() {
        return Ok(());
    }

    for ccs in item.ccs() {
        writer.write_event(Event::Start(BytesStart::new("ccs")))?;
        write_text_element(writer, "code", &ccs.code)?;
        write_text_element(writer, "text", &ccs.description)?;
        writer.write_event(Event::End(BytesEnd::new("ccs")))?;
    }

    if let Some(plannumber) = item.gbplannumber() {
        write_text_element(writer, "gbplannumber", plannumber)?;
    }
    Ok(())
}
