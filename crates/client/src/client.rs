//! The renderable component contract.

use std::fmt;

use vitrine_view::{CacheMeta, View};

use crate::error::RenderError;
use crate::path::ClientPath;

/// A renderable HTML component.
///
/// Components form a tree assembled at request time. The render driver
/// first walks the tree with [`prepare`](HtmlClient::prepare), letting
/// every node put its data into the view and contribute cache metadata,
/// then collects markup with [`body`](HtmlClient::body). Decorators
/// implement the same trait and forward every call to the component they
/// wrap, so callers never tell the two apart.
///
/// Concrete components own a [`ClientBase`](crate::base::ClientBase) and
/// delegate the recurring work to it: a typical `prepare` sets the node's
/// own slots and then calls `self.base.prepare(view, cache)`.
pub trait HtmlClient {
    /// The component's logical path.
    fn path(&self) -> &ClientPath;

    /// Stage one: put this node's data into the view and recurse into the
    /// sub-clients. Runs exactly once per request, before [`body`].
    ///
    /// The same cache accumulator is threaded through the whole tree, so
    /// the root ends up with the union of all tags and the earliest
    /// expiry.
    ///
    /// [`body`]: HtmlClient::body
    fn prepare(&mut self, view: &mut View, cache: &mut CacheMeta) -> Result<(), RenderError>;

    /// Stage two: produce this node's HTML fragment.
    ///
    /// `uid` disambiguates multiple placements of one logical component on
    /// a page; it is passed unchanged to every descendant. Guard-style
    /// components return an empty string when their condition is not met.
    fn body(&mut self, uid: &str, view: &mut View) -> Result<String, RenderError>;

    /// The sub-clients created so far, in creation order.
    fn subclients(&mut self) -> Vec<&mut BoxedClient>;
}

impl fmt::Debug for dyn HtmlClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HtmlClient")
            .field("path", self.path())
            .finish_non_exhaustive()
    }
}

/// Component trees are built from boxed trait objects.
///
/// Not `Send` on purpose: a tree lives and dies inside one request.
pub type BoxedClient = Box<dyn HtmlClient>;
