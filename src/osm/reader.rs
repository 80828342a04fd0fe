use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

use super::model::{ElementKind, RawElement};
use crate::error::{CleanerError, Result};

/// Streams `node` and `way` elements out of an OSM XML document.
///
/// Only one element is held in memory at a time. `relation` elements and any
/// children outside a node or way are skipped.
pub struct OsmReader<R: BufRead> {
    reader: Reader<R>,
    buf: Vec<u8>,
    current: Option<RawElement>,
    limit: Option<usize>,
    emitted: usize,
    finished: bool,
}

impl OsmReader<BufReader<File>> {
    /// Open an OSM file from disk
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        debug!("Opened OSM file {}", path.as_ref().display());
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> OsmReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            reader: Reader::from_reader(source),
            buf: Vec::new(),
            current: None,
            limit: None,
            emitted: 0,
            finished: false,
        }
    }

    /// Stop after `limit` elements have been produced
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Number of elements produced so far
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Read the next node or way, or `None` at end of document (or limit)
    pub fn next_element(&mut self) -> Result<Option<RawElement>> {
        if self.finished || self.limit.is_some_and(|limit| self.emitted >= limit) {
            return Ok(None);
        }

        loop {
            self.buf.clear();
            let event = match self.reader.read_event_into(&mut self.buf) {
                Ok(event) => event,
                Err(e) => {
                    self.finished = true;
                    return Err(e.into());
                }
            };

            match event {
                Event::Start(e) => match ElementKind::from_tag_name(e.name().as_ref()) {
                    Some(kind) => {
                        let mut element = RawElement::new(kind);
                        element.attributes = read_attributes(&e)?;
                        self.current = Some(element);
                    }
                    None => collect_child(self.current.as_mut(), &e)?,
                },
                Event::Empty(e) => match ElementKind::from_tag_name(e.name().as_ref()) {
                    Some(kind) => {
                        let mut element = RawElement::new(kind);
                        element.attributes = read_attributes(&e)?;
                        self.emitted += 1;
                        return Ok(Some(element));
                    }
                    None => collect_child(self.current.as_mut(), &e)?,
                },
                Event::End(e) => {
                    if ElementKind::from_tag_name(e.name().as_ref()).is_some() {
                        if let Some(element) = self.current.take() {
                            self.emitted += 1;
                            return Ok(Some(element));
                        }
                    }
                }
                Event::Eof => {
                    self.finished = true;
                    return Ok(None);
                }
                _ => {}
            }
        }
    }
}

impl<R: BufRead> Iterator for OsmReader<R> {
    type Item = Result<RawElement>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_element().transpose()
    }
}

fn read_attributes(e: &BytesStart<'_>) -> Result<HashMap<String, String>> {
    let mut attributes = HashMap::new();
    for attr in e.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        attributes.insert(key, value);
    }
    Ok(attributes)
}

/// Attach a `tag` or `nd` child to the element being read, if any
fn collect_child(current: Option<&mut RawElement>, e: &BytesStart<'_>) -> Result<()> {
    let Some(element) = current else {
        return Ok(());
    };

    match e.name().as_ref() {
        b"tag" => {
            let mut attributes = read_attributes(e)?;
            let key = take_required(&mut attributes, "tag", "k")?;
            let value = take_required(&mut attributes, "tag", "v")?;
            element.tags.push((key, value));
        }
        b"nd" => {
            let mut attributes = read_attributes(e)?;
            element.node_refs.push(take_required(&mut attributes, "nd", "ref")?);
        }
        _ => {}
    }
    Ok(())
}

fn take_required(
    attributes: &mut HashMap<String, String>,
    element: &str,
    field: &str,
) -> Result<String> {
    attributes
        .remove(field)
        .ok_or_else(|| CleanerError::MissingField {
            element: element.to_string(),
            field: field.to_string(),
        })
}
