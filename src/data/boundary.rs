use super::PointId;

/// Handle to a node of a [`Boundary`]. Handles stay valid until the node is
/// removed and are never reused.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct NodeId(usize);

impl NodeId {
  pub fn usize(self) -> usize {
    self.0
  }
}

#[derive(Copy, Clone, Debug)]
struct Node {
  point: PointId,
  prev: NodeId,
  next: NodeId,
}

/// Circular sequence of point ids that is edited in place while bridging and
/// clipping.
///
/// Nodes live in an arena and are linked by handles. The same point id may
/// appear more than once; bridging duplicates the bridge and anchor vertices.
#[derive(Debug, Clone, Default)]
pub struct Boundary {
  nodes: Vec<Node>,
  head: Option<NodeId>,
  len: usize,
}

impl Boundary {
  pub fn with_capacity(capacity: usize) -> Boundary {
    Boundary {
      nodes: Vec::with_capacity(capacity),
      head: None,
      len: 0,
    }
  }

  pub fn from_ids<I>(ids: I) -> Boundary
  where
    I: IntoIterator<Item = PointId>,
  {
    let ids = ids.into_iter();
    let mut boundary = Boundary::with_capacity(ids.size_hint().0);
    for id in ids {
      boundary.push_back(id);
    }
    boundary
  }

  /// Append before the head, i.e. at the end of the cycle.
  pub fn push_back(&mut self, point: PointId) -> NodeId {
    match self.head {
      None => {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
          point,
          prev: id,
          next: id,
        });
        self.head = Some(id);
        self.len = 1;
        id
      }
      Some(head) => self.insert_after(self.prev(head), point),
    }
  }

  /// Insert a new node directly after `node` and return its handle.
  pub fn insert_after(&mut self, node: NodeId, point: PointId) -> NodeId {
    let next = self.next(node);
    let id = NodeId(self.nodes.len());
    self.nodes.push(Node {
      point,
      prev: node,
      next,
    });
    self.nodes[node.0].next = id;
    self.nodes[next.0].prev = id;
    self.len += 1;
    id
  }

  /// Unlink `node`. If it was the head, its successor becomes the head.
  pub fn remove(&mut self, node: NodeId) {
    let Node { prev, next, .. } = self.nodes[node.0];
    self.nodes[prev.0].next = next;
    self.nodes[next.0].prev = prev;
    self.len -= 1;
    if self.len == 0 {
      self.head = None;
    } else if self.head == Some(node) {
      self.head = Some(next);
    }
  }

  pub fn prev(&self, node: NodeId) -> NodeId {
    self.nodes[node.0].prev
  }

  pub fn next(&self, node: NodeId) -> NodeId {
    self.nodes[node.0].next
  }

  pub fn point_id(&self, node: NodeId) -> PointId {
    self.nodes[node.0].point
  }

  pub fn head(&self) -> Option<NodeId> {
    self.head
  }

  pub fn len(&self) -> usize {
    self.len
  }

  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Node handles in cycle order starting at the head.
  pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
    let mut cursor = self.head;
    (0..self.len).filter_map(move |_| {
      let node = cursor?;
      cursor = Some(self.next(node));
      Some(node)
    })
  }

  /// Point ids in cycle order starting at the head.
  pub fn iter(&self) -> impl Iterator<Item = PointId> + '_ {
    self.nodes().map(move |node| self.point_id(node))
  }

  /// Directed edges `(src, dst)` in cycle order, including the closing edge.
  pub fn edges(&self) -> impl Iterator<Item = (PointId, PointId)> + '_ {
    self
      .nodes()
      .map(move |node| (self.point_id(node), self.point_id(self.next(node))))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn ids(raw: &[usize]) -> Vec<PointId> {
    raw.iter().copied().map(PointId).collect()
  }

  #[test]
  fn empty() {
    let b = Boundary::default();
    assert!(b.is_empty());
    assert_eq!(b.head(), None);
    assert_eq!(b.iter().count(), 0);
    assert_eq!(b.edges().count(), 0);
  }

  #[test]
  fn cycle_order() {
    let b = Boundary::from_ids(ids(&[0, 1, 2, 3]));
    assert_eq!(b.len(), 4);
    assert_eq!(b.iter().collect::<Vec<_>>(), ids(&[0, 1, 2, 3]));
    let head = b.head().unwrap();
    assert_eq!(b.point_id(b.prev(head)), PointId(3));
    assert_eq!(b.point_id(b.next(head)), PointId(1));
    assert_eq!(
      b.edges().last(),
      Some((PointId(3), PointId(0)))
    );
  }

  #[test]
  fn single_node_links_to_itself() {
    let b = Boundary::from_ids(ids(&[5]));
    let head = b.head().unwrap();
    assert_eq!(b.next(head), head);
    assert_eq!(b.prev(head), head);
    assert_eq!(b.edges().collect::<Vec<_>>(), vec![(PointId(5), PointId(5))]);
  }

  #[test]
  fn insert_and_remove() {
    let mut b = Boundary::from_ids(ids(&[0, 1, 2]));
    let nodes: Vec<NodeId> = b.nodes().collect();
    let x = b.insert_after(nodes[1], PointId(9));
    let y = b.insert_after(x, PointId(1));
    assert_eq!(b.iter().collect::<Vec<_>>(), ids(&[0, 1, 9, 1, 2]));
    assert_eq!(b.prev(y), x);
    b.remove(x);
    assert_eq!(b.iter().collect::<Vec<_>>(), ids(&[0, 1, 1, 2]));
    assert_eq!(b.next(nodes[1]), y);
  }

  #[test]
  fn removing_head_moves_it() {
    let mut b = Boundary::from_ids(ids(&[0, 1, 2]));
    let head = b.head().unwrap();
    b.remove(head);
    assert_eq!(b.iter().collect::<Vec<_>>(), ids(&[1, 2]));
    b.remove(b.head().unwrap());
    b.remove(b.head().unwrap());
    assert!(b.is_empty());
    assert_eq!(b.head(), None);
    // Handles are never reused.
    let n = b.push_back(PointId(7));
    assert_eq!(n.usize(), 3);
    assert_eq!(b.iter().collect::<Vec<_>>(), ids(&[7]));
  }
}
