//! Event-driven AST construction.
//!
//! [`AstAssembler`] implements [`EventSink`] and materializes the arena
//! tree while the validator walks the pattern. It keeps a cursor stack of
//! open container nodes: enter events push, leave events finalize the span
//! and pop, leaf events append to the top of the stack.
//!
//! Three events restructure what was already built:
//!
//! - a quantifier wraps the element appended immediately before it;
//! - a class range collapses its endpoint characters (and, outside `v`
//!   mode, the literal hyphen between them);
//! - `&&`/`--` fold class elements into an operator subtree held in a side
//!   buffer, and the class is re-typed into an expression character class
//!   at its leave event.
//!
//! The validator only emits well-formed streams, so every "impossible"
//! state here is recorded as an internal error and surfaced after the
//! walk instead of panicking.

use crate::error::{ErrorKind, ParseResult, RegExpSyntaxError};
use crate::parser::ast::{
    Ast, BackrefKey, EdgeKind, EscapeSetKind, LookaroundKind, ModifierFlags, Node, NodeId,
    NodeKind, NodeList, RegExpFlags,
};
use crate::parser::events::EventSink;

/// Builds an [`Ast`] from the validator's event stream.
pub struct AstAssembler {
    ast: Ast,
    /// Open container nodes; the back is the cursor.
    stack: Vec<NodeId>,
    /// The flags node of a literal parse, once seen.
    flags_node: Option<NodeId>,
    /// The pattern root, once seen.
    pattern_node: Option<NodeId>,
    /// Operator subtree per open class: `(class, subtree-root)`.
    expression_buffer: Vec<(NodeId, NodeId)>,
    /// Capturing groups in emission order (1-based backreference space).
    capture_groups: Vec<NodeId>,
    /// Backreference nodes awaiting resolution.
    pending_refs: Vec<NodeId>,
    /// First internal inconsistency observed, if any.
    error: Option<RegExpSyntaxError>,
}

impl AstAssembler {
    /// Creates an assembler for one parse of `source`.
    pub fn new(source: &str) -> Self {
        Self {
            ast: Ast::new(source),
            stack: Vec::new(),
            flags_node: None,
            pattern_node: None,
            expression_buffer: Vec::new(),
            capture_groups: Vec::new(),
            pending_refs: Vec::new(),
            error: None,
        }
    }

    // ── Completion ──────────────────────────────────────────────────────────

    /// Wraps the collected pattern and flags into a `RegExpLiteral` root.
    pub fn finalize_literal(&mut self, start: usize, end: usize) {
        let (pattern, flags) = match (self.pattern_node, self.flags_node) {
            (Some(p), Some(f)) => (p, f),
            _ => {
                self.internal(start, "literal finished without pattern and flags");
                return;
            }
        };
        let literal = self.ast.push(Node {
            parent: None,
            start,
            end,
            kind: NodeKind::RegExpLiteral { pattern, flags },
        });
        self.ast.node_mut(pattern).parent = Some(literal);
        self.ast.node_mut(flags).parent = Some(literal);
        self.ast.set_root(literal);
    }

    /// Finishes the build and hands out the tree, or the first internal
    /// error if the event stream was inconsistent.
    pub fn finish(self) -> ParseResult<Ast> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.ast),
        }
    }

    // ── Internals ───────────────────────────────────────────────────────────

    fn internal(&mut self, offset: usize, message: &str) {
        if self.error.is_none() {
            self.error = Some(RegExpSyntaxError::new(
                ErrorKind::Internal,
                offset,
                message,
            ));
        }
    }

    fn poisoned(&self) -> bool {
        self.error.is_some()
    }

    fn cursor(&mut self, offset: usize) -> Option<NodeId> {
        match self.stack.last().copied() {
            Some(id) => Some(id),
            None => {
                self.internal(offset, "event outside any open node");
                None
            }
        }
    }

    /// Creates a node, appends it to the cursor's child list, and returns
    /// its id.
    fn append(&mut self, start: usize, end: usize, kind: NodeKind) -> Option<NodeId> {
        let parent = self.cursor(start)?;
        let id = self.ast.push(Node {
            parent: Some(parent),
            start,
            end,
            kind,
        });
        match &mut self.ast.node_mut(parent).kind {
            NodeKind::Pattern { alternatives }
            | NodeKind::Group { alternatives, .. }
            | NodeKind::CapturingGroup { alternatives, .. }
            | NodeKind::LookaroundAssertion { alternatives, .. }
            | NodeKind::ClassStringDisjunction { alternatives } => alternatives.push(id),
            NodeKind::Alternative { elements }
            | NodeKind::CharacterClass { elements, .. }
            | NodeKind::StringAlternative { elements } => elements.push(id),
            _ => {
                self.internal(start, "cursor node cannot hold children");
                return None;
            }
        }
        Some(id)
    }

    /// `append` + push onto the cursor stack (enter events).
    fn enter(&mut self, start: usize, kind: NodeKind) {
        if self.poisoned() {
            return;
        }
        if let Some(id) = self.append(start, start, kind) {
            self.stack.push(id);
        }
    }

    /// Finalizes the top of the stack (leave events).
    fn leave(&mut self, end: usize) -> Option<NodeId> {
        if self.poisoned() {
            return None;
        }
        match self.stack.pop() {
            Some(id) => {
                self.ast.node_mut(id).end = end;
                Some(id)
            }
            None => {
                self.internal(end, "leave event without matching enter");
                None
            }
        }
    }

    /// Removes and returns the last element of the cursor's element list.
    fn pop_element(&mut self, offset: usize) -> Option<NodeId> {
        let parent = self.cursor(offset)?;
        let popped = match &mut self.ast.node_mut(parent).kind {
            NodeKind::Alternative { elements }
            | NodeKind::CharacterClass { elements, .. }
            | NodeKind::StringAlternative { elements } => elements.pop(),
            _ => None,
        };
        if popped.is_none() {
            self.internal(offset, "no element available to restructure");
        }
        popped
    }

    fn push_element(&mut self, offset: usize, id: NodeId) {
        if let Some(parent) = self.cursor(offset) {
            match &mut self.ast.node_mut(parent).kind {
                NodeKind::Alternative { elements }
                | NodeKind::CharacterClass { elements, .. }
                | NodeKind::StringAlternative { elements } => elements.push(id),
                _ => self.internal(offset, "cursor node cannot hold elements"),
            }
        }
    }

    /// The buffered operator subtree for `class`, if any.
    fn take_buffered_expression(&mut self, class: NodeId) -> Option<NodeId> {
        let at = self
            .expression_buffer
            .iter()
            .position(|&(c, _)| c == class)?;
        Some(self.expression_buffer.remove(at).1)
    }

    /// Folds the two most recent operands of the cursor class into a
    /// binary operator node (shared by `&&` and `--`).
    fn fold_class_operator(
        &mut self,
        start: usize,
        end: usize,
        make: fn(NodeId, NodeId) -> NodeKind,
    ) {
        if self.poisoned() {
            return;
        }
        let Some(class) = self.cursor(start) else {
            return;
        };
        let Some(right) = self.pop_element(start) else {
            return;
        };
        let left = match self.take_buffered_expression(class) {
            Some(buffered) => buffered,
            None => match self.pop_element(start) {
                Some(id) => id,
                None => return,
            },
        };
        let op = self.ast.push(Node {
            parent: Some(class),
            start,
            end,
            kind: make(left, right),
        });
        self.ast.node_mut(left).parent = Some(op);
        self.ast.node_mut(right).parent = Some(op);
        self.expression_buffer.push((class, op));
    }

    // ── Backreference resolution ────────────────────────────────────────────

    fn resolve_backreferences(&mut self) {
        for i in 0..self.pending_refs.len() {
            let reference = self.pending_refs[i];
            let key = match &self.ast.node(reference).kind {
                NodeKind::Backreference { key, .. } => key.clone(),
                _ => {
                    self.internal(0, "pending reference is not a backreference");
                    return;
                }
            };
            let targets: NodeList = match &key {
                BackrefKey::Index(n) => self
                    .capture_groups
                    .get(*n as usize - 1)
                    .copied()
                    .into_iter()
                    .collect(),
                BackrefKey::Name(name) => self
                    .capture_groups
                    .iter()
                    .copied()
                    .filter(|&g| {
                        matches!(
                            &self.ast.node(g).kind,
                            NodeKind::CapturingGroup { name: Some(n), .. } if n == name
                        )
                    })
                    .collect(),
            };
            if targets.is_empty() {
                let offset = self.ast.node(reference).start;
                self.internal(offset, "backreference resolved to no group");
                return;
            }
            for &group in &targets {
                match &mut self.ast.node_mut(group).kind {
                    NodeKind::CapturingGroup { references, .. } => references.push(reference),
                    _ => {
                        self.internal(0, "backreference target is not a capturing group");
                        return;
                    }
                }
            }
            let ambiguous = targets.len() > 1;
            match &mut self.ast.node_mut(reference).kind {
                NodeKind::Backreference {
                    resolved,
                    ambiguous: amb,
                    ..
                } => {
                    *resolved = targets;
                    *amb = ambiguous;
                }
                _ => unreachable!("checked above"),
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EventSink implementation
// ─────────────────────────────────────────────────────────────────────────────

impl EventSink for AstAssembler {
    fn on_flags(&mut self, start: usize, end: usize, flags: RegExpFlags) {
        if self.poisoned() {
            return;
        }
        let id = self.ast.push(Node {
            parent: None,
            start,
            end,
            kind: NodeKind::Flags { flags },
        });
        self.flags_node = Some(id);
    }

    fn on_pattern_enter(&mut self, start: usize) {
        if self.poisoned() {
            return;
        }
        let id = self.ast.push(Node {
            parent: None,
            start,
            end: start,
            kind: NodeKind::Pattern {
                alternatives: NodeList::new(),
            },
        });
        self.pattern_node = Some(id);
        self.ast.set_root(id);
        self.stack.push(id);
    }

    fn on_pattern_leave(&mut self, _start: usize, end: usize) {
        if self.leave(end).is_some() {
            self.resolve_backreferences();
        }
    }

    fn on_alternative_enter(&mut self, start: usize, _index: usize) {
        self.enter(
            start,
            NodeKind::Alternative {
                elements: NodeList::new(),
            },
        );
    }

    fn on_alternative_leave(&mut self, _start: usize, end: usize, _index: usize) {
        self.leave(end);
    }

    fn on_group_enter(&mut self, start: usize) {
        self.enter(
            start,
            NodeKind::Group {
                modifiers: None,
                alternatives: NodeList::new(),
            },
        );
    }

    fn on_group_leave(&mut self, _start: usize, end: usize) {
        self.leave(end);
    }

    fn on_modifiers_enter(&mut self, start: usize) {
        if self.poisoned() {
            return;
        }
        let Some(group) = self.cursor(start) else {
            return;
        };
        let id = self.ast.push(Node {
            parent: Some(group),
            start,
            end: start,
            kind: NodeKind::Modifiers {
                add: ModifierFlags::empty(),
                remove: None,
            },
        });
        match &mut self.ast.node_mut(group).kind {
            NodeKind::Group { modifiers, .. } => *modifiers = Some(id),
            _ => {
                self.internal(start, "modifiers outside a group");
                return;
            }
        }
        self.stack.push(id);
    }

    fn on_modifiers_leave(&mut self, _start: usize, end: usize) {
        self.leave(end);
    }

    fn on_add_modifiers(&mut self, start: usize, _end: usize, flags: ModifierFlags) {
        if self.poisoned() {
            return;
        }
        let Some(id) = self.cursor(start) else {
            return;
        };
        match &mut self.ast.node_mut(id).kind {
            NodeKind::Modifiers { add, .. } => *add = flags,
            _ => self.internal(start, "add-modifiers outside a modifiers node"),
        }
    }

    fn on_remove_modifiers(&mut self, start: usize, _end: usize, flags: ModifierFlags) {
        if self.poisoned() {
            return;
        }
        let Some(id) = self.cursor(start) else {
            return;
        };
        match &mut self.ast.node_mut(id).kind {
            NodeKind::Modifiers { remove, .. } => *remove = Some(flags),
            _ => self.internal(start, "remove-modifiers outside a modifiers node"),
        }
    }

    fn on_capturing_group_enter(&mut self, start: usize, name: Option<&str>) {
        if self.poisoned() {
            return;
        }
        if let Some(id) = self.append(
            start,
            start,
            NodeKind::CapturingGroup {
                name: name.map(str::to_owned),
                alternatives: NodeList::new(),
                references: NodeList::new(),
            },
        ) {
            self.capture_groups.push(id);
            self.stack.push(id);
        }
    }

    fn on_capturing_group_leave(&mut self, _start: usize, end: usize, _name: Option<&str>) {
        self.leave(end);
    }

    fn on_quantifier(&mut self, start: usize, end: usize, min: u32, max: Option<u32>, greedy: bool) {
        if self.poisoned() {
            return;
        }
        let Some(element) = self.pop_element(start) else {
            return;
        };
        let element_start = self.ast.node(element).start;
        let Some(parent) = self.cursor(start) else {
            return;
        };
        let id = self.ast.push(Node {
            parent: Some(parent),
            start: element_start,
            end,
            kind: NodeKind::Quantifier {
                min,
                max,
                greedy,
                element,
            },
        });
        self.ast.node_mut(element).parent = Some(id);
        self.push_element(start, id);
    }

    fn on_lookaround_assertion_enter(&mut self, start: usize, kind: LookaroundKind, negate: bool) {
        self.enter(
            start,
            NodeKind::LookaroundAssertion {
                kind,
                negate,
                alternatives: NodeList::new(),
            },
        );
    }

    fn on_lookaround_assertion_leave(
        &mut self,
        _start: usize,
        end: usize,
        _kind: LookaroundKind,
        _negate: bool,
    ) {
        self.leave(end);
    }

    fn on_edge_assertion(&mut self, start: usize, end: usize, kind: EdgeKind) {
        if self.poisoned() {
            return;
        }
        self.append(start, end, NodeKind::EdgeAssertion { kind });
    }

    fn on_word_boundary_assertion(&mut self, start: usize, end: usize, negate: bool) {
        if self.poisoned() {
            return;
        }
        self.append(start, end, NodeKind::WordBoundaryAssertion { negate });
    }

    fn on_any_character_set(&mut self, start: usize, end: usize) {
        if self.poisoned() {
            return;
        }
        self.append(start, end, NodeKind::AnyCharacterSet);
    }

    fn on_escape_character_set(
        &mut self,
        start: usize,
        end: usize,
        kind: EscapeSetKind,
        negate: bool,
    ) {
        if self.poisoned() {
            return;
        }
        self.append(start, end, NodeKind::EscapeCharacterSet { kind, negate });
    }

    fn on_unicode_property_character_set(
        &mut self,
        start: usize,
        end: usize,
        key: &str,
        value: Option<&str>,
        negate: bool,
        strings: bool,
    ) {
        if self.poisoned() {
            return;
        }
        self.append(
            start,
            end,
            NodeKind::UnicodePropertyCharacterSet {
                key: key.to_owned(),
                value: value.map(str::to_owned),
                negate,
                strings,
            },
        );
    }

    fn on_character(&mut self, start: usize, end: usize, value: u32) {
        if self.poisoned() {
            return;
        }
        self.append(start, end, NodeKind::Character { value });
    }

    fn on_backreference(&mut self, start: usize, end: usize, key: &BackrefKey) {
        if self.poisoned() {
            return;
        }
        if let Some(id) = self.append(
            start,
            end,
            NodeKind::Backreference {
                key: key.clone(),
                resolved: NodeList::new(),
                ambiguous: false,
            },
        ) {
            self.pending_refs.push(id);
        }
    }

    fn on_character_class_enter(&mut self, start: usize, negate: bool, unicode_sets: bool) {
        self.enter(
            start,
            NodeKind::CharacterClass {
                negate,
                unicode_sets,
                elements: NodeList::new(),
            },
        );
    }

    fn on_character_class_leave(&mut self, _start: usize, end: usize, negate: bool) {
        let Some(class) = self.leave(end) else {
            return;
        };
        let Some(expression) = self.take_buffered_expression(class) else {
            return;
        };
        // All operands were folded into the operator subtree; a leftover
        // element means the validator emitted an inconsistent stream.
        let leftovers = match &self.ast.node(class).kind {
            NodeKind::CharacterClass { elements, .. } => elements.len(),
            _ => usize::MAX,
        };
        if leftovers != 0 {
            self.internal(end, "expression class with unconsumed elements");
            return;
        }
        self.ast.node_mut(class).kind = NodeKind::ExpressionCharacterClass { negate, expression };
    }

    fn on_character_class_range(&mut self, start: usize, end: usize, _min: u32, _max: u32) {
        if self.poisoned() {
            return;
        }
        let Some(class) = self.cursor(start) else {
            return;
        };
        let unicode_sets = matches!(
            &self.ast.node(class).kind,
            NodeKind::CharacterClass {
                unicode_sets: true,
                ..
            }
        );
        let Some(max_node) = self.pop_element(start) else {
            return;
        };
        // Outside `v` mode the literal hyphen was emitted as a character.
        if !unicode_sets && self.pop_element(start).is_none() {
            return;
        }
        let Some(min_node) = self.pop_element(start) else {
            return;
        };
        let id = self.ast.push(Node {
            parent: Some(class),
            start,
            end,
            kind: NodeKind::CharacterClassRange {
                min: min_node,
                max: max_node,
            },
        });
        self.ast.node_mut(min_node).parent = Some(id);
        self.ast.node_mut(max_node).parent = Some(id);
        self.push_element(start, id);
    }

    fn on_class_intersection(&mut self, start: usize, end: usize) {
        self.fold_class_operator(start, end, |left, right| NodeKind::ClassIntersection {
            left,
            right,
        });
    }

    fn on_class_subtraction(&mut self, start: usize, end: usize) {
        self.fold_class_operator(start, end, |left, right| NodeKind::ClassSubtraction {
            left,
            right,
        });
    }

    fn on_class_string_disjunction_enter(&mut self, start: usize) {
        self.enter(
            start,
            NodeKind::ClassStringDisjunction {
                alternatives: NodeList::new(),
            },
        );
    }

    fn on_class_string_disjunction_leave(&mut self, _start: usize, end: usize) {
        self.leave(end);
    }

    fn on_string_alternative_enter(&mut self, start: usize, _index: usize) {
        self.enter(
            start,
            NodeKind::StringAlternative {
                elements: NodeList::new(),
            },
        );
    }

    fn on_string_alternative_leave(&mut self, _start: usize, end: usize, _index: usize) {
        self.leave(end);
    }
}
