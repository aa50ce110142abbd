// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF editor — merge, page deletion, page rotation, and range splitting over
// existing PDF documents using the `lopdf` crate.
//
// Every operation decodes its input(s), builds a fresh output page sequence,
// and serialises exactly once; an output file is either written completely or
// not created at all.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use lopdf::{Dictionary, Document, Object, ObjectId};
use tracing::{debug, info, instrument, warn};

use papierwerk_core::error::{PapierwerkError, Result};
use papierwerk_core::types::{PageRangeSpec, RotationMap};

/// Keys a page may inherit from ancestor `Pages` nodes (PDF 32000-1 §7.7.3.4).
/// They are copied down onto each kept page before the page tree is rebuilt
/// flat, so pruning the old intermediate nodes cannot lose them.
const INHERITABLE_PAGE_KEYS: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Edits a single loaded PDF document.
///
/// Wraps `lopdf::Document` and provides the page-level operations exposed by
/// the service: deletion, rotation, and splitting. Multi-document merging
/// lives in the free function [`merge_pdfs`].
#[derive(Debug)]
pub struct PdfEditor {
    /// The underlying lopdf document.
    document: Document,
}

impl PdfEditor {
    // -- Construction ---------------------------------------------------------

    /// Open a PDF from the filesystem.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path_ref = path.as_ref();
        let document = Document::load(path_ref).map_err(|err| {
            PapierwerkError::PdfError(format!("failed to open {}: {}", path_ref.display(), err))
        })?;
        debug!(pages = document.get_pages().len(), "PDF loaded");
        Ok(Self { document })
    }

    /// Create an editor from raw PDF bytes already in memory.
    #[instrument(skip_all, fields(bytes_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let document = Document::load_mem(data).map_err(|err| {
            PapierwerkError::PdfError(format!("failed to load PDF from memory: {}", err))
        })?;
        Ok(Self { document })
    }

    // -- Inspection -----------------------------------------------------------

    /// Number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.document.get_pages().len()
    }

    // -- Operations -----------------------------------------------------------

    /// Remove the given 1-indexed pages and write the result to `output_path`.
    ///
    /// Duplicates in `pages_to_delete` collapse; entries outside the valid
    /// range are ignored. Deleting every page yields a valid zero-page
    /// document.
    #[instrument(skip_all, fields(deletions = pages_to_delete.len()))]
    pub fn delete_pages(mut self, pages_to_delete: &[u32], output_path: &Path) -> Result<PathBuf> {
        let pages = self.document.get_pages();
        let total = pages.len() as u32;

        let delete_set: BTreeSet<u32> = pages_to_delete
            .iter()
            .copied()
            .filter(|&p| p >= 1 && p <= total)
            .collect();

        let kept: Vec<ObjectId> = pages
            .iter()
            .filter(|&(number, _)| !delete_set.contains(number))
            .map(|(_, &id)| id)
            .collect();

        info!(total, deleted = delete_set.len(), kept = kept.len(), "deleting pages");

        rebuild_page_tree(&mut self.document, &kept)?;
        self.document.prune_objects();
        self.document.compress();
        write_document(self.document, output_path)
    }

    /// Apply additive rotations from `rotations` (0-based page index to
    /// degrees) and write the result to `output_path`.
    ///
    /// Each mapped angle must be a multiple of 90 and is added onto the
    /// page's existing `/Rotate`, normalised mod 360. Unmapped pages and
    /// indices outside the document pass through untouched; all pages are
    /// kept.
    #[instrument(skip_all, fields(rotations = rotations.len()))]
    pub fn rotate_pages(mut self, rotations: &RotationMap, output_path: &Path) -> Result<PathBuf> {
        for (&index, &degrees) in rotations {
            if degrees % 90 != 0 {
                return Err(PapierwerkError::PdfError(format!(
                    "rotation for page {} must be a multiple of 90, got {}",
                    index, degrees
                )));
            }
        }

        let pages = self.document.get_pages();
        for (&index, &degrees) in rotations {
            // Map keys are 0-based; lopdf page numbers are 1-based.
            let Some(&page_id) = pages.get(&(index + 1)) else {
                debug!(index, "rotation index outside document, ignoring");
                continue;
            };

            let existing = self
                .document
                .get_object(page_id)
                .ok()
                .and_then(|obj| obj.as_dict().ok())
                .and_then(|dict| dict.get(b"Rotate").ok())
                .and_then(|rotate| rotate.as_i64().ok())
                .unwrap_or(0) as i32;

            let new_rotation = (existing + degrees).rem_euclid(360);
            if let Ok(Object::Dictionary(dict)) = self.document.get_object_mut(page_id) {
                dict.set("Rotate", Object::Integer(new_rotation as i64));
            }
            debug!(index, existing, new_rotation, "page rotated");
        }

        write_document(self.document, output_path)
    }

    /// Extract one output document per range spec into `output_dir`, named
    /// `split_part_{n}.pdf` by 1-based spec position.
    ///
    /// Ranges clamp silently to the document bounds; a single page outside
    /// them produces an empty part. Returns the output paths in spec order.
    #[instrument(skip_all, fields(ranges = ranges.len(), output_dir = %output_dir.display()))]
    pub fn split_by_ranges(
        &self,
        ranges: &[PageRangeSpec],
        output_dir: &Path,
    ) -> Result<Vec<PathBuf>> {
        let pages = self.document.get_pages();
        let total = pages.len() as u32;

        let mut outputs = Vec::with_capacity(ranges.len());
        for (index, spec) in ranges.iter().enumerate() {
            let kept: Vec<ObjectId> = spec
                .resolve(total)
                .iter()
                .filter_map(|number| pages.get(number).copied())
                .collect();

            let mut part = self.document.clone();
            rebuild_page_tree(&mut part, &kept)?;
            part.prune_objects();
            part.compress();

            let output_path = output_dir.join(format!("split_part_{}.pdf", index + 1));
            write_document(part, &output_path)?;
            debug!(part = index + 1, pages = kept.len(), "split part written");
            outputs.push(output_path);
        }

        info!(parts = outputs.len(), "document split");
        Ok(outputs)
    }
}

// -- Merge --------------------------------------------------------------------

/// Merge the given PDF files into one document at `output_path`.
///
/// Pages appear in input order. Missing input files are skipped with a
/// warning; a file that exists but fails to parse aborts the whole operation.
/// When no input exists at all the output is a valid empty document.
#[instrument(skip_all, fields(inputs = input_paths.len(), output = %output_path.as_ref().display()))]
pub fn merge_pdfs(input_paths: &[PathBuf], output_path: impl AsRef<Path>) -> Result<PathBuf> {
    let mut sources: Vec<Document> = Vec::new();
    for path in input_paths {
        if !path.exists() {
            warn!(path = %path.display(), "merge input missing, skipping");
            continue;
        }
        let document = Document::load(path).map_err(|err| {
            PapierwerkError::PdfError(format!("failed to load {}: {}", path.display(), err))
        })?;
        sources.push(document);
    }

    let merged = if sources.is_empty() {
        warn!("no merge inputs exist, producing an empty document");
        empty_document()
    } else {
        combine(sources)?
    };

    let total_pages = merged.get_pages().len();
    let written = write_document(merged, output_path.as_ref())?;
    info!(pages = total_pages, "merge complete");
    Ok(written)
}

/// Combine loaded documents into one by offsetting every object ID from each
/// subsequent source past the destination's current maximum, then rebuilding
/// the destination page tree with the full page sequence.
fn combine(mut sources: Vec<Document>) -> Result<Document> {
    let mut dest = sources.remove(0);
    let mut dest_max_id = dest.max_id;
    let mut page_refs = page_references(&dest);

    for source in sources {
        let source_pages = page_references(&source);
        let id_offset = dest_max_id;

        for (old_id, object) in source.objects.into_iter() {
            let new_id = (old_id.0 + id_offset, old_id.1);
            dest.objects.insert(new_id, remap_object_refs(object, id_offset));
        }

        for old_ref in source_pages {
            page_refs.push((old_ref.0 + id_offset, old_ref.1));
        }

        dest_max_id = (source.max_id + id_offset).max(dest_max_id);
    }

    dest.max_id = dest_max_id;
    rebuild_page_tree(&mut dest, &page_refs)?;
    dest.prune_objects();
    dest.compress();
    Ok(dest)
}

/// All page object references of a document, in page order.
fn page_references(doc: &Document) -> Vec<ObjectId> {
    doc.get_pages().values().copied().collect()
}

/// Recursively remap object references by `offset`.
fn remap_object_refs(object: Object, offset: u32) -> Object {
    match object {
        Object::Reference(id) => Object::Reference((id.0 + offset, id.1)),
        Object::Array(array) => Object::Array(
            array
                .into_iter()
                .map(|item| remap_object_refs(item, offset))
                .collect(),
        ),
        Object::Dictionary(mut dict) => {
            for (_, value) in dict.iter_mut() {
                *value = remap_object_refs(value.clone(), offset);
            }
            Object::Dictionary(dict)
        }
        Object::Stream(mut stream) => {
            for (_, value) in stream.dict.iter_mut() {
                *value = remap_object_refs(value.clone(), offset);
            }
            Object::Stream(stream)
        }
        other => other,
    }
}

// -- Page tree maintenance ----------------------------------------------------

/// Rebuild the document's root page tree to contain exactly `page_refs`, in
/// order. Inheritable attributes are pulled down onto each page first, and
/// every kept page is re-parented onto the root `Pages` node.
fn rebuild_page_tree(doc: &mut Document, page_refs: &[ObjectId]) -> Result<()> {
    for &page_id in page_refs {
        flatten_inherited(doc, page_id);
    }

    let pages_id = root_pages_id(doc)?;

    match doc.objects.get_mut(&pages_id) {
        Some(Object::Dictionary(pages_dict)) => {
            let kids: Vec<Object> = page_refs.iter().map(|&id| Object::Reference(id)).collect();
            pages_dict.set("Kids", Object::Array(kids));
            pages_dict.set("Count", Object::Integer(page_refs.len() as i64));
        }
        _ => {
            return Err(PapierwerkError::PdfError(
                "invalid pages dictionary".to_string(),
            ));
        }
    }

    for &page_id in page_refs {
        if let Some(Object::Dictionary(page_dict)) = doc.objects.get_mut(&page_id) {
            page_dict.set("Parent", Object::Reference(pages_id));
        }
    }

    Ok(())
}

/// Copy inheritable attributes missing from the page dictionary down from its
/// ancestor `Pages` nodes.
fn flatten_inherited(doc: &mut Document, page_id: ObjectId) {
    let mut pulled: Vec<(Vec<u8>, Object)> = Vec::new();
    {
        let Ok(page_dict) = doc.get_object(page_id).and_then(|obj| obj.as_dict()) else {
            return;
        };
        for key in INHERITABLE_PAGE_KEYS {
            if page_dict.get(key).is_ok() {
                continue;
            }
            let mut ancestor = page_dict
                .get(b"Parent")
                .ok()
                .and_then(|parent| parent.as_reference().ok());
            while let Some(ancestor_id) = ancestor {
                let Ok(ancestor_dict) = doc.get_object(ancestor_id).and_then(|obj| obj.as_dict())
                else {
                    break;
                };
                if let Ok(value) = ancestor_dict.get(key) {
                    pulled.push((key.to_vec(), value.clone()));
                    break;
                }
                ancestor = ancestor_dict
                    .get(b"Parent")
                    .ok()
                    .and_then(|parent| parent.as_reference().ok());
            }
        }
    }

    if pulled.is_empty() {
        return;
    }
    if let Ok(Object::Dictionary(page_dict)) = doc.get_object_mut(page_id) {
        for (key, value) in pulled {
            page_dict.set(key, value);
        }
    }
}

/// Find the root `Pages` node via the trailer and catalog.
fn root_pages_id(doc: &Document) -> Result<ObjectId> {
    let catalog_id = doc
        .trailer
        .get(b"Root")
        .map_err(|_| PapierwerkError::PdfError("no Root in trailer".to_string()))?
        .as_reference()
        .map_err(|_| PapierwerkError::PdfError("Root is not a reference".to_string()))?;

    let catalog = doc
        .objects
        .get(&catalog_id)
        .ok_or_else(|| PapierwerkError::PdfError("catalog not found".to_string()))?
        .as_dict()
        .map_err(|_| PapierwerkError::PdfError("invalid catalog".to_string()))?;

    catalog
        .get(b"Pages")
        .map_err(|_| PapierwerkError::PdfError("no Pages in catalog".to_string()))?
        .as_reference()
        .map_err(|_| PapierwerkError::PdfError("Pages is not a reference".to_string()))
}

/// A minimal zero-page document: an empty page tree plus catalog.
fn empty_document() -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let mut pages_dict = Dictionary::new();
    pages_dict.set("Type", Object::Name(b"Pages".to_vec()));
    pages_dict.set("Kids", Object::Array(Vec::new()));
    pages_dict.set("Count", Object::Integer(0));
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    doc.trailer.set("Root", Object::Reference(catalog_id));
    doc
}

/// Serialise a document to memory, then write it to `output_path` in one go.
fn write_document(mut doc: Document, output_path: &Path) -> Result<PathBuf> {
    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).map_err(|err| {
        PapierwerkError::PdfError(format!(
            "failed to serialise {}: {}",
            output_path.display(),
            err
        ))
    })?;
    std::fs::write(output_path, &buffer)?;
    debug!(output = %output_path.display(), bytes = buffer.len(), "document written");
    Ok(output_path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{Stream, StringFormat};

    /// Build an n-page PDF on disk with per-page content and MediaBox.
    fn create_test_pdf(path: &Path, num_pages: u32) {
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();

        let mut page_ids = Vec::new();
        for i in 0..num_pages {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new(
                        "Tf",
                        vec![Object::Name(b"F1".to_vec()), Object::Integer(12)],
                    ),
                    Operation::new("Td", vec![Object::Integer(100), Object::Integer(700)]),
                    Operation::new(
                        "Tj",
                        vec![Object::String(
                            format!("Page {}", i + 1).into_bytes(),
                            StringFormat::Literal,
                        )],
                    ),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id =
                doc.add_object(Stream::new(Dictionary::new(), content.encode().unwrap()));

            let page = Dictionary::from_iter(vec![
                ("Type", Object::Name(b"Page".to_vec())),
                ("Parent", Object::Reference(pages_id)),
                (
                    "MediaBox",
                    Object::Array(vec![
                        Object::Integer(0),
                        Object::Integer(0),
                        Object::Integer(612),
                        Object::Integer(792),
                    ]),
                ),
                ("Contents", Object::Reference(content_id)),
            ]);
            page_ids.push(doc.add_object(page));
        }

        let pages = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Count", Object::Integer(num_pages as i64)),
            (
                "Kids",
                Object::Array(page_ids.iter().map(|id| Object::Reference(*id)).collect()),
            ),
        ]);
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(pages_id)),
        ]);
        let catalog_id = doc.add_object(catalog);
        doc.trailer.set("Root", Object::Reference(catalog_id));

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer).unwrap();
        std::fs::write(path, buffer).unwrap();
    }

    fn page_count(path: &Path) -> usize {
        Document::load(path).unwrap().get_pages().len()
    }

    fn page_rotation(path: &Path, page_number: u32) -> i64 {
        let doc = Document::load(path).unwrap();
        let page_id = doc.get_pages()[&page_number];
        doc.get_object(page_id)
            .unwrap()
            .as_dict()
            .unwrap()
            .get(b"Rotate")
            .ok()
            .and_then(|rotate| rotate.as_i64().ok())
            .unwrap_or(0)
    }

    // -- Merge ----------------------------------------------------------------

    #[test]
    fn merge_combines_pages_in_input_order() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.pdf");
        let b = dir.path().join("b.pdf");
        create_test_pdf(&a, 2);
        create_test_pdf(&b, 3);

        let output = dir.path().join("merged.pdf");
        merge_pdfs(&[a, b], &output).unwrap();
        assert_eq!(page_count(&output), 5);
    }

    #[test]
    fn merge_skips_missing_inputs() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.pdf");
        let b = dir.path().join("b.pdf");
        create_test_pdf(&a, 2);
        create_test_pdf(&b, 1);

        let output = dir.path().join("merged.pdf");
        merge_pdfs(&[a, dir.path().join("gone.pdf"), b], &output).unwrap();
        assert_eq!(page_count(&output), 3);
    }

    #[test]
    fn merge_without_any_existing_input_yields_empty_document() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("merged.pdf");
        merge_pdfs(
            &[dir.path().join("x.pdf"), dir.path().join("y.pdf")],
            &output,
        )
        .unwrap();
        assert_eq!(page_count(&output), 0);
    }

    #[test]
    fn merge_fails_on_corrupt_input() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.pdf");
        create_test_pdf(&a, 1);
        let corrupt = dir.path().join("corrupt.pdf");
        std::fs::write(&corrupt, b"this is not a pdf").unwrap();

        let output = dir.path().join("merged.pdf");
        let err = merge_pdfs(&[a, corrupt], &output).unwrap_err();
        assert!(matches!(err, PapierwerkError::PdfError(_)));
        assert!(!output.exists());
    }

    #[test]
    fn merged_output_reloads_as_valid_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.pdf");
        let b = dir.path().join("b.pdf");
        create_test_pdf(&a, 10);
        create_test_pdf(&b, 5);

        let output = dir.path().join("merged.pdf");
        merge_pdfs(&[a, b], &output).unwrap();

        let reloaded = Document::load(&output).unwrap();
        assert_eq!(reloaded.get_pages().len(), 15);
    }

    // -- Delete ---------------------------------------------------------------

    #[test]
    fn delete_collapses_duplicates_and_ignores_out_of_range() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.pdf");
        create_test_pdf(&input, 5);

        let output = dir.path().join("edited.pdf");
        PdfEditor::open(&input)
            .unwrap()
            .delete_pages(&[2, 4, 2, 99], &output)
            .unwrap();
        assert_eq!(page_count(&output), 3);
    }

    #[test]
    fn delete_out_of_range_only_keeps_everything() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.pdf");
        create_test_pdf(&input, 5);

        let output = dir.path().join("edited.pdf");
        PdfEditor::open(&input)
            .unwrap()
            .delete_pages(&[99, 0], &output)
            .unwrap();
        assert_eq!(page_count(&output), 5);
    }

    #[test]
    fn delete_every_page_is_legal() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.pdf");
        create_test_pdf(&input, 3);

        let output = dir.path().join("edited.pdf");
        PdfEditor::open(&input)
            .unwrap()
            .delete_pages(&[1, 2, 3], &output)
            .unwrap();
        assert_eq!(page_count(&output), 0);
    }

    // -- Rotate ---------------------------------------------------------------

    #[test]
    fn rotate_touches_only_mapped_pages() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.pdf");
        create_test_pdf(&input, 3);

        let rotations = RotationMap::from([(0, 90), (2, 270)]);
        let output = dir.path().join("rotated.pdf");
        PdfEditor::open(&input)
            .unwrap()
            .rotate_pages(&rotations, &output)
            .unwrap();

        assert_eq!(page_count(&output), 3);
        assert_eq!(page_rotation(&output, 1), 90);
        assert_eq!(page_rotation(&output, 2), 0);
        assert_eq!(page_rotation(&output, 3), 270);
    }

    #[test]
    fn rotate_is_additive_and_normalised() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.pdf");
        create_test_pdf(&input, 1);

        let first = dir.path().join("first.pdf");
        PdfEditor::open(&input)
            .unwrap()
            .rotate_pages(&RotationMap::from([(0, 270)]), &first)
            .unwrap();
        assert_eq!(page_rotation(&first, 1), 270);

        let second = dir.path().join("second.pdf");
        PdfEditor::open(&first)
            .unwrap()
            .rotate_pages(&RotationMap::from([(0, 180)]), &second)
            .unwrap();
        assert_eq!(page_rotation(&second, 1), 90);
    }

    #[test]
    fn negative_right_angles_normalise_into_range() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.pdf");
        create_test_pdf(&input, 1);

        let output = dir.path().join("rotated.pdf");
        PdfEditor::open(&input)
            .unwrap()
            .rotate_pages(&RotationMap::from([(0, -90)]), &output)
            .unwrap();
        assert_eq!(page_rotation(&output, 1), 270);
    }

    #[test]
    fn rotate_rejects_non_right_angles() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.pdf");
        create_test_pdf(&input, 2);

        let output = dir.path().join("rotated.pdf");
        let err = PdfEditor::open(&input)
            .unwrap()
            .rotate_pages(&RotationMap::from([(0, 45)]), &output)
            .unwrap_err();
        assert!(matches!(err, PapierwerkError::PdfError(_)));
        assert!(!output.exists());
    }

    #[test]
    fn rotate_ignores_indices_outside_document() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.pdf");
        create_test_pdf(&input, 2);

        let output = dir.path().join("rotated.pdf");
        PdfEditor::open(&input)
            .unwrap()
            .rotate_pages(&RotationMap::from([(99, 90)]), &output)
            .unwrap();

        assert_eq!(page_count(&output), 2);
        assert_eq!(page_rotation(&output, 1), 0);
        assert_eq!(page_rotation(&output, 2), 0);
    }

    // -- Split ----------------------------------------------------------------

    #[test]
    fn split_clamps_ranges_to_document_bounds() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.pdf");
        create_test_pdf(&input, 10);

        let ranges = [
            "1-2".parse::<PageRangeSpec>().unwrap(),
            "5".parse::<PageRangeSpec>().unwrap(),
            "8-12".parse::<PageRangeSpec>().unwrap(),
        ];
        let parts = PdfEditor::open(&input)
            .unwrap()
            .split_by_ranges(&ranges, dir.path())
            .unwrap();

        assert_eq!(parts.len(), 3);
        assert!(parts[0].ends_with("split_part_1.pdf"));
        assert!(parts[2].ends_with("split_part_3.pdf"));
        assert_eq!(page_count(&parts[0]), 2);
        assert_eq!(page_count(&parts[1]), 1);
        assert_eq!(page_count(&parts[2]), 3);
    }

    #[test]
    fn split_out_of_range_single_page_yields_empty_part() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.pdf");
        create_test_pdf(&input, 4);

        let ranges = ["99".parse::<PageRangeSpec>().unwrap()];
        let parts = PdfEditor::open(&input)
            .unwrap()
            .split_by_ranges(&ranges, dir.path())
            .unwrap();

        assert_eq!(parts.len(), 1);
        assert_eq!(page_count(&parts[0]), 0);
    }

    // -- Construction ---------------------------------------------------------

    #[test]
    fn open_missing_file_fails_with_pdf_error() {
        let err = PdfEditor::open("/nonexistent/file.pdf").unwrap_err();
        assert!(matches!(err, PapierwerkError::PdfError(_)));
    }

    #[test]
    fn page_count_reflects_document() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.pdf");
        create_test_pdf(&input, 7);
        assert_eq!(PdfEditor::open(&input).unwrap().page_count(), 7);
    }
}
