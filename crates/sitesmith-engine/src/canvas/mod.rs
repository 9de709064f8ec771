/*!
 * # Builder Canvas
 *
 * The canvas is the list editor behind the page/post builder. It owns one
 * [`ContentDocument`] for the length of an editing session plus the transient
 * selection, and changes them only through [`CanvasCmd`]s:
 *
 * - **Add** appends a block seeded from the template defaults and selects it
 * - **Remove** filters a block out and drops the selection if it pointed there
 * - **Move** swaps a block with its immediate neighbour
 * - **UpdateProps** replaces a block's props wholesale
 * - **Select / Deselect** change which block's editor is shown
 *
 * Every command returns a [`Patch`]. Front ends hand the whole updated document
 * to their host whenever `patch.changed` is set; nothing is persisted here.
 *
 * ```rust
 * use sitesmith_engine::{BlockType, Canvas, CanvasCmd, ContentDocument, SequentialIds};
 *
 * let mut canvas = Canvas::new(ContentDocument::empty());
 * let mut ids = SequentialIds::new("b");
 *
 * let patch = canvas.apply(CanvasCmd::Add { kind: BlockType::Text }, None, &mut ids);
 * assert!(patch.changed);
 * assert_eq!(canvas.document().len(), 1);
 * assert_eq!(canvas.selection().map(|id| id.as_str()), Some("b1"));
 * ```
 */

mod ids;

pub use ids::{IdSource, RandomIds, SequentialIds};

use crate::content::{Block, BlockId, BlockType, ContentDocument, Props};
use crate::template::Template;

/// Direction of a single-step reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// `-1` is up, `+1` is down; any other offset is not a single step.
    pub fn from_offset(offset: i32) -> Option<Self> {
        match offset {
            -1 => Some(Direction::Up),
            1 => Some(Direction::Down),
            _ => None,
        }
    }
}

/// Commands that can be applied to the canvas
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasCmd {
    Add { kind: BlockType },
    Remove { id: BlockId },
    Move { id: BlockId, direction: Direction },
    UpdateProps { id: BlockId, props: Props },
    Select { id: BlockId },
    Deselect,
}

/// Result of applying a command
#[derive(Debug, Clone, PartialEq)]
pub struct Patch {
    /// Whether the document itself changed (selection changes do not count).
    pub changed: bool,
    pub selection: Option<BlockId>,
    pub version: u64,
}

/// One entry of the block palette.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteEntry {
    pub kind: BlockType,
    pub label: String,
}

/// Palette buttons for the template's allowed types, in configured order.
pub fn palette(template: Option<&Template>) -> Vec<PaletteEntry> {
    template
        .map(|t| t.allowed())
        .unwrap_or_default()
        .iter()
        .map(|kind| PaletteEntry {
            kind: kind.clone(),
            label: kind.label().to_string(),
        })
        .collect()
}

/// Copy of the template's first default props for `kind`, or `{}`.
pub fn default_props(template: Option<&Template>, kind: &BlockType) -> Props {
    template
        .and_then(|t| t.default_props(kind))
        .cloned()
        .unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    document: ContentDocument,
    selection: Option<BlockId>,
    version: u64,
}

impl Canvas {
    pub fn new(document: ContentDocument) -> Self {
        Self {
            document,
            selection: None,
            version: 0,
        }
    }

    /// Canvas over `document` with a previously held selection. A selection that
    /// no longer names a block is dropped.
    pub fn with_selection(document: ContentDocument, selection: Option<BlockId>) -> Self {
        let selection = selection.filter(|id| document.contains(id));
        Self {
            document,
            selection,
            version: 0,
        }
    }

    pub fn document(&self) -> &ContentDocument {
        &self.document
    }

    pub fn into_document(self) -> ContentDocument {
        self.document
    }

    pub fn selection(&self) -> Option<&BlockId> {
        self.selection.as_ref()
    }

    pub fn selected_block(&self) -> Option<&Block> {
        self.selection
            .as_ref()
            .and_then(|id| self.document.block(id))
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Apply a command.
    ///
    /// `template` supplies default props for `Add`; `ids` supplies the new block id.
    /// Callers are trusted to only add types the template allows (the palette is
    /// built from that list).
    pub fn apply(
        &mut self,
        cmd: CanvasCmd,
        template: Option<&Template>,
        ids: &mut dyn IdSource,
    ) -> Patch {
        log::debug!("canvas command: {cmd:?}");
        let changed = match cmd {
            CanvasCmd::Add { kind } => {
                self.add(kind, template, ids);
                true
            }
            CanvasCmd::Remove { id } => self.remove(&id),
            CanvasCmd::Move { id, direction } => self.move_block(&id, direction),
            CanvasCmd::UpdateProps { id, props } => self.update_props(&id, props),
            CanvasCmd::Select { id } => {
                if self.document.contains(&id) {
                    self.selection = Some(id);
                }
                false
            }
            CanvasCmd::Deselect => {
                self.selection = None;
                false
            }
        };

        if changed {
            self.version += 1;
        }

        Patch {
            changed,
            selection: self.selection.clone(),
            version: self.version,
        }
    }

    fn add(&mut self, kind: BlockType, template: Option<&Template>, ids: &mut dyn IdSource) {
        let props = default_props(template, &kind);
        let id = self.document.fresh_id(ids);
        self.document.blocks.push(Block::new(id.clone(), kind, props));
        self.selection = Some(id);
    }

    fn remove(&mut self, id: &BlockId) -> bool {
        let before = self.document.len();
        self.document.blocks.retain(|b| &b.id != id);
        if self.selection.as_ref() == Some(id) {
            self.selection = None;
        }
        self.document.len() != before
    }

    fn move_block(&mut self, id: &BlockId, direction: Direction) -> bool {
        let Some(index) = self.document.position(id) else {
            return false;
        };
        let target = match direction {
            Direction::Up => index.checked_sub(1),
            Direction::Down => Some(index + 1).filter(|&i| i < self.document.len()),
        };
        match target {
            Some(target) => {
                self.document.blocks.swap(index, target);
                true
            }
            None => false,
        }
    }

    fn update_props(&mut self, id: &BlockId, props: Props) -> bool {
        match self.document.blocks.iter_mut().find(|b| &b.id == id) {
            Some(block) if block.props != props => {
                block.props = props;
                true
            }
            _ => false,
        }
    }
}
