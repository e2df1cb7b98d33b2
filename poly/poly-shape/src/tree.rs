//! Nesting decomposition of a contour bag.
//!
//! The clipping backend returns a flat list of non-crossing contours.
//! [`NestingTree`] recovers the containment hierarchy from that list: each
//! contour's depth is the number of other contours strictly containing
//! one of its vertices, and its parent is its deepest container. Contours
//! at even depth are outlines, odd depth are holes.
//!
//! The tree is an index arena over the contour list; nodes refer to their
//! children by index, never by pointer.

use poly_types::{Containment, Polygon};

use crate::boolean::FillRule;
use crate::clip::{self, ClipOp};
use crate::error::ShapeResult;
use crate::parts::{PartsView, SingleShape};
use crate::shape::Shape;

/// One contour in a [`NestingTree`].
#[derive(Debug, Clone)]
pub struct NestingNode {
    /// The contour itself.
    pub contour: Polygon,
    /// Indices of the contours directly nested inside this one.
    pub children: Vec<usize>,
    /// Containment depth: 0 for outermost outlines, 1 for their holes,
    /// 2 for islands inside those holes, and so on.
    pub depth: usize,
}

/// Containment hierarchy over the contours of a shape.
///
/// Built by first resolving the shape through a self-union under the
/// given fill rule, so the contours being nested are guaranteed
/// non-crossing.
#[derive(Debug, Clone, Default)]
pub struct NestingTree {
    nodes: Vec<NestingNode>,
    roots: Vec<usize>,
}

impl NestingTree {
    /// Build the nesting tree of a shape.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ShapeError::ClipFailed`] if the backend rejects
    /// the geometry during the resolving union.
    pub fn from_shape(shape: &Shape, fill: FillRule) -> ShapeResult<Self> {
        let resolved = clip::boolean_op(ClipOp::Union, shape, None, fill)?;
        Ok(Self::from_resolved_contours(resolved.into_iter().collect()))
    }

    /// Build the tree from contours already known to be non-crossing.
    #[must_use]
    pub fn from_resolved_contours(contours: Vec<Polygon>) -> Self {
        let n = contours.len();
        let mut depths = vec![0_usize; n];
        let mut parents: Vec<Option<usize>> = vec![None; n];

        for i in 0..n {
            for j in 0..n {
                if i != j && contour_contains(&contours[j], &contours[i]) {
                    depths[i] += 1;
                }
            }
        }
        for i in 0..n {
            if depths[i] == 0 {
                continue;
            }
            // The containers of a contour form a chain; the parent is the
            // one directly above it.
            parents[i] = (0..n).find(|&j| {
                j != i && depths[j] == depths[i] - 1 && contour_contains(&contours[j], &contours[i])
            });
        }

        let mut nodes: Vec<NestingNode> = contours
            .into_iter()
            .zip(&depths)
            .map(|(contour, &depth)| NestingNode {
                contour,
                children: Vec::new(),
                depth,
            })
            .collect();
        let mut roots = Vec::new();
        for (i, parent) in parents.iter().enumerate() {
            match parent {
                Some(p) => nodes[*p].children.push(i),
                None => roots.push(i),
            }
        }
        Self { nodes, roots }
    }

    /// Indices of the outermost contours.
    #[must_use]
    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    /// The node at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[must_use]
    pub fn node(&self, index: usize) -> &NestingNode {
        &self.nodes[index]
    }

    /// Number of contours in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds no contours.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all nodes in arena order.
    pub fn iter(&self) -> std::slice::Iter<'_, NestingNode> {
        self.nodes.iter()
    }
}

/// Whether `outer` contains `inner`, judged by the first vertex of
/// `inner` that is strictly inside or outside. Contours sharing all
/// vertices with the boundary count as not contained.
fn contour_contains(outer: &Polygon, inner: &Polygon) -> bool {
    for &v in inner.iter() {
        match outer.contains_point(v) {
            Containment::Inside => return true,
            Containment::Outside => return false,
            Containment::OnBoundary => {}
        }
    }
    false
}

impl Shape {
    /// Split the shape into independent parts: each part is one outline
    /// with the holes directly inside it.
    ///
    /// Islands inside holes become parts of their own and are emitted
    /// before the part enclosing them. With `union_all` the non-zero fill
    /// rule merges overlapping outlines first; otherwise even-odd parity
    /// decides hole assignment.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ShapeError::ClipFailed`] if the backend rejects
    /// the geometry.
    pub fn split_into_parts(&self, union_all: bool) -> ShapeResult<Vec<SingleShape>> {
        let fill = if union_all {
            FillRule::NonZero
        } else {
            FillRule::EvenOdd
        };
        let tree = NestingTree::from_shape(self, fill)?;
        let mut parts = Vec::new();
        for &root in tree.roots() {
            collect_part(&tree, root, &mut parts);
        }
        Ok(parts)
    }

    /// Like [`Shape::split_into_parts`], but instead of materializing
    /// parts this reorders the shape's own polygons so each part is a
    /// contiguous run, and returns the index view.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ShapeError::ClipFailed`] if the backend rejects
    /// the geometry.
    pub fn split_into_parts_view(&mut self, union_all: bool) -> ShapeResult<PartsView> {
        let fill = if union_all {
            FillRule::NonZero
        } else {
            FillRule::EvenOdd
        };
        let tree = NestingTree::from_shape(self, fill)?;
        let mut reordered = Shape::new();
        let mut view = PartsView::default();
        for &root in tree.roots() {
            collect_part_view(&tree, root, &mut reordered, &mut view);
        }
        *self = reordered;
        Ok(view)
    }

    /// Bucket the contours by containment depth: index 0 holds the
    /// outermost outlines, index 1 their holes, and so on.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ShapeError::ClipFailed`] if the backend rejects
    /// the geometry.
    pub fn sort_by_nesting(&self) -> ShapeResult<Vec<Shape>> {
        let tree = NestingTree::from_shape(self, FillRule::EvenOdd)?;
        let mut buckets: Vec<Shape> = Vec::new();
        for node in tree.iter() {
            if buckets.len() <= node.depth {
                buckets.resize(node.depth + 1, Shape::new());
            }
            buckets[node.depth].push(node.contour.clone());
        }
        Ok(buckets)
    }
}

fn collect_part(tree: &NestingTree, outline: usize, parts: &mut Vec<SingleShape>) {
    let mut part = Shape::new();
    part.push(tree.node(outline).contour.clone());
    for &hole in &tree.node(outline).children {
        part.push(tree.node(hole).contour.clone());
        for &island in &tree.node(hole).children {
            collect_part(tree, island, parts);
        }
    }
    parts.push(SingleShape::from_shape(part));
}

fn collect_part_view(
    tree: &NestingTree,
    outline: usize,
    reordered: &mut Shape,
    view: &mut PartsView,
) {
    let part = view.start_part();
    view.push_index(part, reordered.len());
    reordered.push(tree.node(outline).contour.clone());
    for &hole in &tree.node(outline).children {
        view.push_index(part, reordered.len());
        reordered.push(tree.node(hole).contour.clone());
        for &island in &tree.node(hole).children {
            collect_part_view(tree, island, reordered, view);
        }
    }
}
