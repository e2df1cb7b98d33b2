//! Boolean algebra over shapes.

use crate::clip::{self, ClipOp};
use crate::error::ShapeResult;
use crate::shape::Shape;
use crate::tree::NestingTree;

/// Fill rule deciding which regions of a contour bag are "inside".
///
/// `EvenOdd` matches the classical ray-parity definition and is the
/// default for intersection, difference and xor; `NonZero` is the default
/// for union, where overlapping same-direction contours must merge rather
/// than cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillRule {
    /// A point is inside when a ray from it crosses the contours an odd
    /// number of times.
    #[default]
    EvenOdd,
    /// A point is inside when the winding numbers of the contours around
    /// it sum to a non-zero value.
    NonZero,
    /// A point is inside when the winding sum is strictly positive.
    Positive,
}

/// Selects what the shared hole walk emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoleTraversal {
    /// Emit the filled geometry, keeping only holes that contain further
    /// geometry (`remove_empty_holes`).
    KeepFilled,
    /// Emit only the holes that contain nothing (`get_empty_holes`).
    CollectEmpty,
}

impl Shape {
    /// Union of this shape's polygons with themselves, using the non-zero
    /// fill rule.
    ///
    /// Overlapping and self-touching contours merge into clean disjoint
    /// outlines with holes.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ShapeError::ClipFailed`] if the backend rejects
    /// the geometry.
    pub fn union(&self, other: &Self) -> ShapeResult<Self> {
        clip::boolean_op(ClipOp::Union, self, Some(other), FillRule::NonZero)
    }

    /// Self-union under the non-zero fill rule.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ShapeError::ClipFailed`] if the backend rejects
    /// the geometry.
    pub fn union_all(&self) -> ShapeResult<Self> {
        clip::boolean_op(ClipOp::Union, self, None, FillRule::NonZero)
    }

    /// Union with an explicit fill rule.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ShapeError::ClipFailed`] if the backend rejects
    /// the geometry.
    pub fn union_with(&self, other: &Self, fill: FillRule) -> ShapeResult<Self> {
        clip::boolean_op(ClipOp::Union, self, Some(other), fill)
    }

    /// Regions covered by both shapes (even-odd fill).
    ///
    /// # Errors
    ///
    /// Returns [`crate::ShapeError::ClipFailed`] if the backend rejects
    /// the geometry.
    pub fn intersection(&self, other: &Self) -> ShapeResult<Self> {
        clip::boolean_op(ClipOp::Intersection, self, Some(other), FillRule::EvenOdd)
    }

    /// Intersection with an explicit fill rule.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ShapeError::ClipFailed`] if the backend rejects
    /// the geometry.
    pub fn intersection_with(&self, other: &Self, fill: FillRule) -> ShapeResult<Self> {
        clip::boolean_op(ClipOp::Intersection, self, Some(other), fill)
    }

    /// Regions of this shape not covered by `other` (even-odd fill).
    ///
    /// # Errors
    ///
    /// Returns [`crate::ShapeError::ClipFailed`] if the backend rejects
    /// the geometry.
    pub fn difference(&self, other: &Self) -> ShapeResult<Self> {
        clip::boolean_op(ClipOp::Difference, self, Some(other), FillRule::EvenOdd)
    }

    /// Difference with an explicit fill rule.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ShapeError::ClipFailed`] if the backend rejects
    /// the geometry.
    pub fn difference_with(&self, other: &Self, fill: FillRule) -> ShapeResult<Self> {
        clip::boolean_op(ClipOp::Difference, self, Some(other), fill)
    }

    /// Regions covered by exactly one of the two shapes (even-odd fill).
    ///
    /// # Errors
    ///
    /// Returns [`crate::ShapeError::ClipFailed`] if the backend rejects
    /// the geometry.
    pub fn xor(&self, other: &Self) -> ShapeResult<Self> {
        clip::boolean_op(ClipOp::Xor, self, Some(other), FillRule::EvenOdd)
    }

    /// Xor with an explicit fill rule.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ShapeError::ClipFailed`] if the backend rejects
    /// the geometry.
    pub fn xor_with(&self, other: &Self, fill: FillRule) -> ShapeResult<Self> {
        clip::boolean_op(ClipOp::Xor, self, Some(other), fill)
    }

    /// Resolve self-intersections and overlaps under the given fill rule,
    /// producing clean contours with consistent winding.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ShapeError::ClipFailed`] if the backend rejects
    /// the geometry.
    pub fn simplified(&self, fill: FillRule) -> ShapeResult<Self> {
        clip::boolean_op(ClipOp::Union, self, None, fill)
    }

    /// The outermost contours only: holes and everything nested inside
    /// them are discarded.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ShapeError::ClipFailed`] if the backend rejects
    /// the geometry.
    pub fn get_outside_polygons(&self) -> ShapeResult<Self> {
        let tree = NestingTree::from_shape(self, FillRule::EvenOdd)?;
        Ok(tree
            .roots()
            .iter()
            .map(|&root| tree.node(root).contour.clone())
            .collect())
    }

    /// Remove holes that contain no further geometry, keeping everything
    /// else. A hole that surrounds an island survives, and the island with
    /// it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ShapeError::ClipFailed`] if the backend rejects
    /// the geometry.
    pub fn remove_empty_holes(&self) -> ShapeResult<Self> {
        self.walk_holes(HoleTraversal::KeepFilled)
    }

    /// The complement of [`Shape::remove_empty_holes`]: only the holes
    /// that contain nothing, returned as filled outlines.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ShapeError::ClipFailed`] if the backend rejects
    /// the geometry.
    pub fn get_empty_holes(&self) -> ShapeResult<Self> {
        self.walk_holes(HoleTraversal::CollectEmpty)
    }

    fn walk_holes(&self, policy: HoleTraversal) -> ShapeResult<Self> {
        let tree = NestingTree::from_shape(self, FillRule::EvenOdd)?;
        let mut out = Shape::new();
        for &root in tree.roots() {
            walk_outline(&tree, root, policy, &mut out);
        }
        Ok(out)
    }
}

/// Walk one outline node of the nesting tree: emit it (when keeping
/// filled geometry), then classify each hole child by whether it contains
/// further outlines.
fn walk_outline(tree: &NestingTree, outline: usize, policy: HoleTraversal, out: &mut Shape) {
    if policy == HoleTraversal::KeepFilled {
        out.push(tree.node(outline).contour.clone());
    }
    for &hole in &tree.node(outline).children {
        let hole_node = tree.node(hole);
        let has_islands = !hole_node.children.is_empty();
        if has_islands == (policy == HoleTraversal::KeepFilled) {
            out.push(hole_node.contour.clone());
            for &island in &hole_node.children {
                walk_outline(tree, island, policy, out);
            }
        }
    }
}
