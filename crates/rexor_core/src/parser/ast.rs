//! RegExp Abstract Syntax Tree definitions.
//!
//! Nodes live in a single index arena owned by [`Ast`]; every reference
//! between nodes — children, parents, quantified elements, resolved
//! backreference targets — is a [`NodeId`]. This keeps the parent/child
//! cycle trivially representable and makes a [`Clone`] of the arena a deep
//! copy with consistent links, which is exactly what the parse-cache
//! contract requires.
//!
//! # Structure
//!
//! - [`Ast`] — arena + root id + the source text (as UTF-16 code units).
//! - [`Node`] — span, parent link, and a [`NodeKind`] payload.
//! - [`RegExpFlags`] / [`ModifierFlags`] — flag bitsets.
//! - Semantic enums: [`EdgeKind`], [`LookaroundKind`], [`EscapeSetKind`],
//!   [`BackrefKey`].

use bitflags::bitflags;
use smallvec::SmallVec;

// ─────────────────────────────────────────────────────────────────────────────
// Ids and child lists
// ─────────────────────────────────────────────────────────────────────────────

/// Opaque identifier for a [`Node`] in an [`Ast`] arena.
pub type NodeId = usize;

/// Child-id list. Most real-world nodes have a handful of children, so the
/// first few ids live inline.
pub type NodeList = SmallVec<[NodeId; 4]>;

// ─────────────────────────────────────────────────────────────────────────────
// Flag bitsets
// ─────────────────────────────────────────────────────────────────────────────

bitflags! {
    /// The flags of a RegExp literal (`/…/gimsuyvd`).
    ///
    /// At most one of [`RegExpFlags::UNICODE`] and
    /// [`RegExpFlags::UNICODE_SETS`] can be set on a validated literal.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
    pub struct RegExpFlags: u16 {
        /// `g`
        const GLOBAL       = 1 << 0;
        /// `i`
        const IGNORE_CASE  = 1 << 1;
        /// `m`
        const MULTILINE    = 1 << 2;
        /// `u`
        const UNICODE      = 1 << 3;
        /// `y`
        const STICKY       = 1 << 4;
        /// `s`
        const DOT_ALL      = 1 << 5;
        /// `d`
        const HAS_INDICES  = 1 << 6;
        /// `v`
        const UNICODE_SETS = 1 << 7;
    }
}

bitflags! {
    /// The flag subset an inline modifier group (`(?ims-ims:…)`) may add
    /// or remove.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
    pub struct ModifierFlags: u8 {
        /// `i`
        const IGNORE_CASE = 1 << 0;
        /// `m`
        const MULTILINE   = 1 << 1;
        /// `s`
        const DOT_ALL     = 1 << 2;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Semantic enums
// ─────────────────────────────────────────────────────────────────────────────

/// Which input edge an edge assertion anchors to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    /// `^`
    Start,
    /// `$`
    End,
}

/// The direction of a lookaround assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookaroundKind {
    /// `(?=…)` / `(?!…)`
    Lookahead,
    /// `(?<=…)` / `(?<!…)`
    Lookbehind,
}

/// Which shorthand class an escape character set denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeSetKind {
    /// `\d` / `\D`
    Digit,
    /// `\s` / `\S`
    Space,
    /// `\w` / `\W`
    Word,
}

/// How a backreference names its target group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackrefKey {
    /// `\1`, `\2`, … — 1-based emission-order index.
    Index(u32),
    /// `\k<name>`
    Name(String),
}

// ─────────────────────────────────────────────────────────────────────────────
// Node
// ─────────────────────────────────────────────────────────────────────────────

/// A single AST node.
///
/// `start`/`end` are UTF-16 code-unit offsets into the original input
/// (half-open). The raw text of the node is [`Ast::raw`].
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// The containing node, or `None` at the root.
    pub parent: Option<NodeId>,
    /// Inclusive start offset.
    pub start: usize,
    /// Exclusive end offset.
    pub end: usize,
    /// Variant payload.
    pub kind: NodeKind,
}

/// The variant payload of a [`Node`].
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Root of a parsed literal (`/pattern/flags`).
    RegExpLiteral {
        /// The pattern between the slashes.
        pattern: NodeId,
        /// The trailing flags.
        flags: NodeId,
    },
    /// The flags of a literal.
    Flags {
        /// The validated flag set.
        flags: RegExpFlags,
    },
    /// Top-level disjunction: one or more alternatives.
    Pattern {
        /// Alternatives in source order.
        alternatives: NodeList,
    },
    /// One branch of a disjunction; an ordered list of elements.
    Alternative {
        /// Elements in source order.
        elements: NodeList,
    },
    /// Non-capturing group `(?:…)`, possibly with inline modifiers.
    Group {
        /// The `(?ims-ims:` modifier record, if present.
        modifiers: Option<NodeId>,
        /// Alternatives in source order.
        alternatives: NodeList,
    },
    /// The modifier record of a `(?ims-ims:…)` group.
    Modifiers {
        /// Flags switched on for the group body.
        add: ModifierFlags,
        /// Flags switched off for the group body; `None` when the hyphen
        /// side is absent.
        remove: Option<ModifierFlags>,
    },
    /// Capturing group `(…)` or `(?<name>…)`.
    CapturingGroup {
        /// The group name, when declared with `(?<name>…)`.
        name: Option<String>,
        /// Alternatives in source order.
        alternatives: NodeList,
        /// Backreferences that resolved to this group.
        references: NodeList,
    },
    /// Repetition wrapper (`*`, `+`, `?`, `{n,m}`).
    Quantifier {
        /// Minimum repetitions.
        min: u32,
        /// Maximum repetitions; `None` is +∞.
        max: Option<u32>,
        /// `false` when suffixed with `?`.
        greedy: bool,
        /// The wrapped element.
        element: NodeId,
    },
    /// `(?=…)`, `(?!…)`, `(?<=…)`, `(?<!…)`.
    LookaroundAssertion {
        /// Direction.
        kind: LookaroundKind,
        /// `true` for `!` forms.
        negate: bool,
        /// Alternatives in source order.
        alternatives: NodeList,
    },
    /// `^` or `$`.
    EdgeAssertion {
        /// Which edge.
        kind: EdgeKind,
    },
    /// `\b` or `\B`.
    WordBoundaryAssertion {
        /// `true` for `\B`.
        negate: bool,
    },
    /// `.`
    AnyCharacterSet,
    /// `\d`, `\D`, `\s`, `\S`, `\w`, `\W`.
    EscapeCharacterSet {
        /// The shorthand class.
        kind: EscapeSetKind,
        /// `true` for the uppercase forms.
        negate: bool,
    },
    /// `\p{…}` / `\P{…}`.
    UnicodePropertyCharacterSet {
        /// Property key (e.g. `General_Category`, `Script`, or a lone
        /// binary-property name).
        key: String,
        /// Property value for `key=value` expressions.
        value: Option<String>,
        /// `true` for `\P{…}`.
        negate: bool,
        /// `true` for properties of strings (`v`-mode only).
        strings: bool,
    },
    /// A single code point, however it was written in the source.
    Character {
        /// The code point value.
        value: u32,
    },
    /// `[…]` / `[^…]`.
    CharacterClass {
        /// `true` for `[^…]`.
        negate: bool,
        /// `true` when parsed under the `v` flag.
        unicode_sets: bool,
        /// Class elements in source order.
        elements: NodeList,
    },
    /// `a-z` inside a class.
    CharacterClassRange {
        /// Lower endpoint (a `Character`).
        min: NodeId,
        /// Upper endpoint (a `Character`).
        max: NodeId,
    },
    /// A `v`-mode class whose body is a `&&`/`--` operator chain.
    ExpressionCharacterClass {
        /// `true` for `[^…]`.
        negate: bool,
        /// The top `ClassIntersection` or `ClassSubtraction`.
        expression: NodeId,
    },
    /// `left && right` inside a `v`-mode class.
    ClassIntersection {
        /// Left operand (possibly another intersection).
        left: NodeId,
        /// Right operand.
        right: NodeId,
    },
    /// `left -- right` inside a `v`-mode class.
    ClassSubtraction {
        /// Left operand (possibly another subtraction).
        left: NodeId,
        /// Right operand.
        right: NodeId,
    },
    /// `\q{…|…}` inside a `v`-mode class.
    ClassStringDisjunction {
        /// String alternatives in source order.
        alternatives: NodeList,
    },
    /// One branch of a `\q{…}`; zero or more characters.
    StringAlternative {
        /// `Character` elements in source order.
        elements: NodeList,
    },
    /// `\1` or `\k<name>`.
    Backreference {
        /// How the reference names its group.
        key: BackrefKey,
        /// The capturing group(s) this reference resolved to. More than
        /// one only for duplicate names across branches (ES2025).
        resolved: NodeList,
        /// `true` when `resolved` holds more than one group.
        ambiguous: bool,
    },
}

impl NodeKind {
    /// A short stable name for the variant, for diagnostics and tests.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::RegExpLiteral { .. } => "RegExpLiteral",
            NodeKind::Flags { .. } => "Flags",
            NodeKind::Pattern { .. } => "Pattern",
            NodeKind::Alternative { .. } => "Alternative",
            NodeKind::Group { .. } => "Group",
            NodeKind::Modifiers { .. } => "Modifiers",
            NodeKind::CapturingGroup { .. } => "CapturingGroup",
            NodeKind::Quantifier { .. } => "Quantifier",
            NodeKind::LookaroundAssertion { .. } => "LookaroundAssertion",
            NodeKind::EdgeAssertion { .. } => "EdgeAssertion",
            NodeKind::WordBoundaryAssertion { .. } => "WordBoundaryAssertion",
            NodeKind::AnyCharacterSet => "AnyCharacterSet",
            NodeKind::EscapeCharacterSet { .. } => "EscapeCharacterSet",
            NodeKind::UnicodePropertyCharacterSet { .. } => "UnicodePropertyCharacterSet",
            NodeKind::Character { .. } => "Character",
            NodeKind::CharacterClass { .. } => "CharacterClass",
            NodeKind::CharacterClassRange { .. } => "CharacterClassRange",
            NodeKind::ExpressionCharacterClass { .. } => "ExpressionCharacterClass",
            NodeKind::ClassIntersection { .. } => "ClassIntersection",
            NodeKind::ClassSubtraction { .. } => "ClassSubtraction",
            NodeKind::ClassStringDisjunction { .. } => "ClassStringDisjunction",
            NodeKind::StringAlternative { .. } => "StringAlternative",
            NodeKind::Backreference { .. } => "Backreference",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Ast
// ─────────────────────────────────────────────────────────────────────────────

/// A parsed RegExp tree: node arena, root id, and the source text.
///
/// The tree is self-contained — it owns a copy of the input (as UTF-16
/// code units, the span index space) and every node. Cloning an `Ast`
/// yields a fully isolated tree: all ids are arena-relative, so no link
/// fixup is needed.
#[derive(Debug, Clone, PartialEq)]
pub struct Ast {
    nodes: Vec<Node>,
    root: NodeId,
    units: Vec<u16>,
}

impl Ast {
    /// Creates an empty arena over `source`. The root id is patched by the
    /// assembler once the root node exists.
    pub(crate) fn new(source: &str) -> Self {
        Self {
            nodes: Vec::new(),
            root: 0,
            units: source.encode_utf16().collect(),
        }
    }

    /// Appends `node` and returns its id.
    pub(crate) fn push(&mut self, node: Node) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(node);
        id
    }

    /// Mutable access for the assembler.
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id]
    }

    /// Marks `id` as the tree root.
    pub(crate) fn set_root(&mut self, id: NodeId) {
        self.root = id;
    }

    /// The root node id.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the node with the given `id`.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` when the arena holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over all node ids in arena (emission) order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        0..self.nodes.len()
    }

    /// The source text the offsets index into.
    pub fn source(&self) -> String {
        String::from_utf16_lossy(&self.units)
    }

    /// Length of the source in code units.
    pub fn source_len(&self) -> usize {
        self.units.len()
    }

    /// The raw source text of `id` over `[start, end)`.
    pub fn raw(&self, id: NodeId) -> String {
        let node = &self.nodes[id];
        String::from_utf16_lossy(&self.units[node.start..node.end])
    }

    /// The ids of `id`'s children in source order, across every variant.
    ///
    /// "Children" here means the nodes whose spans nest directly inside
    /// `id`: list members, the quantified element, range endpoints, the
    /// operator subtree of an expression class, and so on. Resolved
    /// backreference targets and group back-links are cross-references,
    /// not children, and are excluded.
    pub fn children(&self, id: NodeId) -> NodeList {
        match &self.nodes[id].kind {
            NodeKind::RegExpLiteral { pattern, flags } => {
                let mut out = NodeList::new();
                out.push(*pattern);
                out.push(*flags);
                out
            }
            NodeKind::Pattern { alternatives }
            | NodeKind::LookaroundAssertion { alternatives, .. }
            | NodeKind::ClassStringDisjunction { alternatives } => alternatives.clone(),
            NodeKind::Group {
                modifiers,
                alternatives,
            } => {
                let mut out = NodeList::new();
                if let Some(m) = modifiers {
                    out.push(*m);
                }
                out.extend(alternatives.iter().copied());
                out
            }
            NodeKind::CapturingGroup { alternatives, .. } => alternatives.clone(),
            NodeKind::Alternative { elements }
            | NodeKind::CharacterClass { elements, .. }
            | NodeKind::StringAlternative { elements } => elements.clone(),
            NodeKind::Quantifier { element, .. } => {
                let mut out = NodeList::new();
                out.push(*element);
                out
            }
            NodeKind::CharacterClassRange { min, max } => {
                let mut out = NodeList::new();
                out.push(*min);
                out.push(*max);
                out
            }
            NodeKind::ExpressionCharacterClass { expression, .. } => {
                let mut out = NodeList::new();
                out.push(*expression);
                out
            }
            NodeKind::ClassIntersection { left, right }
            | NodeKind::ClassSubtraction { left, right } => {
                let mut out = NodeList::new();
                out.push(*left);
                out.push(*right);
                out
            }
            NodeKind::Flags { .. }
            | NodeKind::Modifiers { .. }
            | NodeKind::EdgeAssertion { .. }
            | NodeKind::WordBoundaryAssertion { .. }
            | NodeKind::AnyCharacterSet
            | NodeKind::EscapeCharacterSet { .. }
            | NodeKind::UnicodePropertyCharacterSet { .. }
            | NodeKind::Character { .. }
            | NodeKind::Backreference { .. } => NodeList::new(),
        }
    }

    /// All capturing-group ids in emission (source) order.
    pub fn capturing_groups(&self) -> Vec<NodeId> {
        self.ids()
            .filter(|&id| matches!(&self.nodes[id].kind, NodeKind::CapturingGroup { .. }))
            .collect()
    }

    /// All backreference ids in emission (source) order.
    pub fn backreferences(&self) -> Vec<NodeId> {
        self.ids()
            .filter(|&id| matches!(&self.nodes[id].kind, NodeKind::Backreference { .. }))
            .collect()
    }
}
