//! DITA concept serializer — builds the fixed topic skeleton with quick-xml.
//!
//! Element order matches the Heretto concept layout: title, shortdesc,
//! prolog (author, metadata/keywords), then a conbody holding one intro
//! section and one section + codeblock per stanza.

use crate::model::Topic;
use anyhow::Result;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Write;

/// Serialize a topic as pretty-printed UTF-8 XML with an XML declaration.
pub fn serialize(topic: &Topic) -> Result<Vec<u8>> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut concept = BytesStart::new("concept");
    concept.push_attribute(("id", topic.id.as_str()));
    // xml:lang lives in the reserved XML namespace; the prefix is bound
    // implicitly to http://www.w3.org/XML/1998/namespace and written as-is.
    concept.push_attribute(("xml:lang", topic.lang.as_str()));
    writer.write_event(Event::Start(concept))?;

    text_element(&mut writer, BytesStart::new("title"), &topic.title)?;
    text_element(&mut writer, BytesStart::new("shortdesc"), &topic.shortdesc)?;

    writer.write_event(Event::Start(BytesStart::new("prolog")))?;
    let mut author = BytesStart::new("author");
    author.push_attribute(("translate", "no"));
    author.push_attribute(("type", "creator"));
    text_element(&mut writer, author, "SpeXML did this")?;
    writer.write_event(Event::Start(BytesStart::new("metadata")))?;
    writer.write_event(Event::Empty(BytesStart::new("keywords")))?;
    writer.write_event(Event::End(BytesEnd::new("metadata")))?;
    writer.write_event(Event::End(BytesEnd::new("prolog")))?;

    writer.write_event(Event::Start(BytesStart::new("conbody")))?;

    // Intro section: a second-level heading labelling the spec file, no
    // codeblock.
    writer.write_event(Event::Start(BytesStart::new("section")))?;
    let mut intro_title = BytesStart::new("title");
    intro_title.push_attribute(("outputclass", "h2"));
    text_element(&mut writer, intro_title, &format!("{}.spec", topic.id))?;
    writer.write_event(Event::End(BytesEnd::new("section")))?;

    for stanza in &topic.stanzas {
        writer.write_event(Event::Start(BytesStart::new("section")))?;
        text_element(&mut writer, BytesStart::new("title"), &stanza.name)?;
        let body = stanza.body();
        if body.is_empty() {
            writer.write_event(Event::Empty(BytesStart::new("codeblock")))?;
        } else {
            text_element(&mut writer, BytesStart::new("codeblock"), &body)?;
        }
        writer.write_event(Event::End(BytesEnd::new("section")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("conbody")))?;
    writer.write_event(Event::End(BytesEnd::new("concept")))?;

    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    Ok(bytes)
}

/// Write `<tag>text</tag>` with the text escaped. The start tag may carry
/// attributes.
fn text_element<W: Write>(writer: &mut Writer<W>, start: BytesStart, text: &str) -> Result<()> {
    let end = start.to_end().into_owned();
    writer.write_event(Event::Start(start))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(end))?;
    Ok(())
}
