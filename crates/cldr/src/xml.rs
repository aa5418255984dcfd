//! Thin loading layer over `roxmltree` for CLDR documents.

use std::{fs::read_to_string, io::ErrorKind, path::Path};

use roxmltree::{Document, Node, ParsingOptions};

use crate::error::{Error, Result};

/// CLDR files carry a `<!DOCTYPE ldml SYSTEM ...>` declaration.
fn options() -> ParsingOptions {
    ParsingOptions { allow_dtd: true, ..ParsingOptions::default() }
}

/// Parse the document at `path` and hand it to `f`.
pub(crate) fn with_document<T>(path: &Path, f: impl FnOnce(&Document) -> Result<T>) -> Result<T> {
    let text =
        read_to_string(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
    let doc = Document::parse_with_options(&text, options())
        .map_err(|source| Error::Xml { path: path.to_path_buf(), source })?;
    f(&doc)
}

/// Like [`with_document`], but a missing file yields `Ok(None)`.
pub(crate) fn with_optional_document<T>(
    path: &Path,
    f: impl FnOnce(&Document) -> Result<T>,
) -> Result<Option<T>> {
    match read_to_string(path) {
        Ok(text) => {
            let doc = Document::parse_with_options(&text, options())
                .map_err(|source| Error::Xml { path: path.to_path_buf(), source })?;
            f(&doc).map(Some)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(Error::Io { path: path.to_path_buf(), source }),
    }
}

/// Element children of `node` named `name`.
pub(crate) fn children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children().filter(move |child| child.is_element() && child.has_tag_name(name))
}

/// First descendant element of `node` named `name`.
pub(crate) fn find<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.descendants().find(|child| child.is_element() && child.has_tag_name(name))
}

/// Element descendants of `node` named `name`.
pub(crate) fn descendants<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.descendants().filter(move |child| child.is_element() && child.has_tag_name(name))
}
