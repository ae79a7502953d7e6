use crate::boxnode;

/// Singly linked chain of `(char, String)` nodes.
///
/// Every node is owned by the link in front of it, the first one by the chain itself.
pub struct Chain {
    head: Option<Box<Node>>,
    len: usize,
}

impl Default for Chain {
    fn default() -> Self {
        Self::new()
    }
}

impl Chain {
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Shorthand for `self.len() == 0`
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Appends a new node at the tail of the chain
    pub fn push_back<S: Into<String>>(&mut self, key: char, value: S) {
        self.push_back_boxed(boxnode!(key, value));
    }

    fn push_back_boxed(&mut self, boxed: Box<Node>) {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        *link = Some(boxed);
        self.len += 1;
    }

    pub fn find(&self, key: char) -> Option<&Node> {
        self.iter().find(|node| node.key == key)
    }

    pub fn find_mut(&mut self, key: char) -> Option<&mut Node> {
        let mut curr = self.head.as_deref_mut();
        while let Some(node) = curr {
            if node.key == key {
                return Some(node);
            }
            curr = node.next.as_deref_mut();
        }
        None
    }

    /// Unlinks the first node holding `key` and hands it back detached
    /// from the rest of the chain.
    pub fn remove(&mut self, key: char) -> Option<Node> {
        let mut link = &mut self.head;
        while link.as_ref().is_some_and(|node| node.key != key) {
            link = &mut link.as_mut()?.next;
        }

        let mut removed = link.take()?;
        *link = removed.next.take();
        self.len -= 1;
        Some(*removed)
    }

    #[inline]
    fn pop_front(&mut self) -> Option<Node> {
        let mut node = self.head.take()?;
        self.head = node.next.take();
        self.len -= 1;
        Some(*node)
    }

    // [adapters]

    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }
}

impl Drop for Chain {
    fn drop(&mut self) {
        let mut curr = self.head.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
            // node goes out of scope here, calling drop
        }
    }
}

impl std::fmt::Debug for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl IntoIterator for Chain {
    type Item = <IterOwn as Iterator>::Item;
    type IntoIter = IterOwn;

    fn into_iter(self) -> Self::IntoIter {
        IterOwn::new(self)
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a Node;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct Node {
    pub(crate) key: char,
    pub(crate) value: String,
    pub(crate) next: Option<Box<Node>>,
}

impl Node {
    pub fn key(&self) -> char {
        self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Swaps in a new value, returning the old one
    pub fn set_value<S: Into<String>>(&mut self, value: S) -> String {
        std::mem::replace(&mut self.value, value.into())
    }

    pub fn into_value(self) -> String {
        self.value
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.value == other.value
    }
}
impl Eq for Node {}

impl std::fmt::Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{:?}, {:?}>", self.key, self.value)
    }
}

// [iterators]

pub struct Iter<'a> {
    current: Option<&'a Node>,
    len: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Node;
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current.take()?;
        self.current = node.next.as_deref();
        self.len -= 1;
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a> Iter<'a> {
    pub fn new(chain: &'a Chain) -> Self {
        Self {
            current: chain.head.as_deref(),
            len: chain.len,
        }
    }
}

pub struct IterOwn(Chain);

impl Iterator for IterOwn {
    type Item = Node;
    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl IterOwn {
    pub fn new(chain: Chain) -> Self {
        Self(chain)
    }
}
