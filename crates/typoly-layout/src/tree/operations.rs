//! Mutating operations on the group tree: split, close, resize.

use typoly_common::{GroupId, LayoutError, Rect, SplitDirection};

use super::LayoutNode;

impl LayoutNode {
    /// Open `new_group` next to `source`. Inside a split of the same
    /// direction the new group becomes the next sibling and takes half of
    /// the source's share; otherwise the source is replaced by a 50/50
    /// split. Returns `false` if `source` is not in the tree.
    pub fn split_group(
        &mut self,
        source: &GroupId,
        new_group: GroupId,
        direction: SplitDirection,
    ) -> bool {
        match self {
            LayoutNode::Group { id } if id == source => {
                let existing = LayoutNode::group(id.clone());
                *self = LayoutNode::split(direction, vec![existing, LayoutNode::group(new_group)]);
                true
            }
            LayoutNode::Group { .. } => false,
            LayoutNode::Split {
                direction: split_direction,
                children,
                sizes,
                ..
            } => {
                if *split_direction == direction {
                    let index = children
                        .iter()
                        .position(|c| matches!(c, LayoutNode::Group { id } if id == source));
                    if let Some(index) = index {
                        let half = sizes[index] / 2.0;
                        sizes[index] = half;
                        sizes.insert(index + 1, half);
                        children.insert(index + 1, LayoutNode::group(new_group));
                        return true;
                    }
                }
                match children.iter_mut().find(|c| c.contains_group(source)) {
                    Some(child) => child.split_group(source, new_group, direction),
                    None => false,
                }
            }
        }
    }

    /// Remove a group. Its share goes to the last remaining sibling; a split
    /// left with one child collapses into that child.
    pub fn close_group(&mut self, group: &GroupId) -> Result<(), LayoutError> {
        if !self.contains_group(group) {
            return Err(LayoutError::UnknownGroup(group.to_string()));
        }
        match self.clone().prune(group) {
            Some(node) => {
                *self = node;
                Ok(())
            }
            None => Err(LayoutError::LastGroup),
        }
    }

    fn prune(self, group: &GroupId) -> Option<LayoutNode> {
        match self {
            LayoutNode::Group { ref id } if id == group => None,
            LayoutNode::Group { .. } => Some(self),
            LayoutNode::Split {
                id,
                direction,
                children,
                sizes,
            } => {
                let mut kept = Vec::with_capacity(children.len());
                let mut kept_sizes = Vec::with_capacity(sizes.len());
                let mut removed = 0.0;
                for (child, size) in children.into_iter().zip(sizes) {
                    match child.prune(group) {
                        Some(node) => {
                            kept.push(node);
                            kept_sizes.push(size);
                        }
                        None => removed += size,
                    }
                }
                match kept.len() {
                    0 => None,
                    1 => kept.pop(),
                    _ => {
                        if let Some(last) = kept_sizes.last_mut() {
                            *last += removed;
                        }
                        Some(LayoutNode::Split {
                            id,
                            direction,
                            children: kept,
                            sizes: kept_sizes,
                        })
                    }
                }
            }
        }
    }

    /// Replace the sizes of a split. One positive, finite value per child.
    pub fn set_sizes(&mut self, split_id: &str, new_sizes: Vec<f64>) -> Result<(), LayoutError> {
        let Some(LayoutNode::Split {
            children, sizes, ..
        }) = self.find_split_mut(split_id)
        else {
            return Err(LayoutError::UnknownSplit(split_id.to_string()));
        };
        if new_sizes.len() != children.len() {
            return Err(LayoutError::InvalidSizes(format!(
                "expected {} sizes, got {}",
                children.len(),
                new_sizes.len()
            )));
        }
        if new_sizes.iter().any(|s| !s.is_finite() || *s <= 0.0) {
            return Err(LayoutError::InvalidSizes(
                "sizes must be positive and finite".into(),
            ));
        }
        *sizes = new_sizes;
        Ok(())
    }

    /// Move the boundary after child `index` of a split to `pointer`
    /// (x for horizontal splits, y for vertical). The two neighbours trade
    /// space; their combined share is unchanged and neither drops below
    /// `min_px`. `bounds` is the rect of the whole tree.
    pub fn resize_adjacent(
        &mut self,
        split_id: &str,
        index: usize,
        pointer: f64,
        bounds: Rect,
        min_px: f64,
    ) -> Result<(), LayoutError> {
        let split_rect = self
            .split_bounds(split_id, bounds)
            .ok_or_else(|| LayoutError::UnknownSplit(split_id.to_string()))?;
        let Some(LayoutNode::Split {
            direction, sizes, ..
        }) = self.find_split_mut(split_id)
        else {
            return Err(LayoutError::UnknownSplit(split_id.to_string()));
        };
        if index + 1 >= sizes.len() {
            return Err(LayoutError::InvalidSizes(format!(
                "no boundary after child {index} of {}",
                sizes.len()
            )));
        }

        let (start, span) = match direction {
            SplitDirection::Horizontal => (split_rect.x, split_rect.width),
            SplitDirection::Vertical => (split_rect.y, split_rect.height),
        };
        let min_px = if min_px.is_finite() { min_px.max(0.0) } else { 0.0 };
        let total: f64 = sizes.iter().sum();
        if total <= 0.0 || span <= 0.0 || !pointer.is_finite() {
            return Ok(());
        }

        let px_per_flex = span / total;
        let left_edge = start + sizes[..index].iter().sum::<f64>() * px_per_flex;
        let pair_flex = sizes[index] + sizes[index + 1];
        let pair_px = pair_flex * px_per_flex;

        let first_px = if pair_px <= 2.0 * min_px {
            pair_px / 2.0
        } else {
            (pointer - left_edge).clamp(min_px, pair_px - min_px)
        };
        sizes[index] = first_px / pair_px * pair_flex;
        sizes[index + 1] = pair_flex - sizes[index];
        Ok(())
    }

    pub(super) fn find_split_mut(&mut self, split_id: &str) -> Option<&mut LayoutNode> {
        if matches!(self, LayoutNode::Split { id, .. } if id == split_id) {
            return Some(self);
        }
        match self {
            LayoutNode::Split { children, .. } => children
                .iter_mut()
                .find_map(|c| c.find_split_mut(split_id)),
            LayoutNode::Group { .. } => None,
        }
    }
}
