//! Object identity and the parent/child tree.
//!
//! Every widget embeds an [`ObjectBase`], which allocates an [`ObjectId`] in
//! the process-wide [`ObjectRegistry`] and releases it again on drop. The
//! registry only tracks structure: which object is parented to which.
//! Destroying an object removes its whole subtree.

use std::fmt;
use std::sync::OnceLock;

use parking_lot::RwLock;
use slotmap::{SlotMap, new_key_type};

use crate::logging::targets;

new_key_type! {
    /// Handle to a registered object.
    ///
    /// Ids are generational: once an object is destroyed its id never
    /// resolves again, even if the slot is reused.
    pub struct ObjectId;
}

/// Errors from object tree operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectError {
    /// The id does not name a live object.
    InvalidObjectId,
    /// The requested parent is the object itself or one of its descendants.
    CircularParentage,
    /// [`global_registry`] was called before [`init_global_registry`].
    RegistryNotInitialized,
}

impl fmt::Display for ObjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::InvalidObjectId => "invalid or destroyed object id",
            Self::CircularParentage => "an object cannot be parented to itself or a descendant",
            Self::RegistryNotInitialized => "object registry not initialized",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ObjectError {}

/// Result type for object operations.
pub type ObjectResult<T> = std::result::Result<T, ObjectError>;

#[derive(Default)]
struct Node {
    parent: Option<ObjectId>,
    children: Vec<ObjectId>,
}

/// Thread-safe store of every live object and its links.
#[derive(Default)]
pub struct ObjectRegistry {
    nodes: RwLock<SlotMap<ObjectId, Node>>,
}

impl ObjectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an id for a new root object of type `T`.
    pub fn register<T: Object>(&self) -> ObjectId {
        let id = self.nodes.write().insert(Node::default());
        tracing::trace!(
            target: targets::OBJECT,
            ?id,
            type_name = std::any::type_name::<T>(),
            "registered object"
        );
        id
    }

    /// Remove `id` and everything below it.
    pub fn destroy(&self, id: ObjectId) -> ObjectResult<()> {
        let mut nodes = self.nodes.write();
        let node = nodes.remove(id).ok_or(ObjectError::InvalidObjectId)?;

        if let Some(parent) = node.parent.and_then(|p| nodes.get_mut(p)) {
            parent.children.retain(|&child| child != id);
        }

        let mut pending = node.children;
        let mut removed = 1usize;
        while let Some(child) = pending.pop() {
            if let Some(child_node) = nodes.remove(child) {
                pending.extend(child_node.children);
                removed += 1;
            }
        }

        tracing::trace!(target: targets::OBJECT, ?id, removed, "destroyed object tree");
        Ok(())
    }

    /// Whether `id` names a live object.
    pub fn contains(&self, id: ObjectId) -> bool {
        self.nodes.read().contains_key(id)
    }

    /// Re-parent `id`, or make it a root with `None`.
    pub fn set_parent(&self, id: ObjectId, parent: Option<ObjectId>) -> ObjectResult<()> {
        let mut nodes = self.nodes.write();
        let old_parent = nodes.get(id).ok_or(ObjectError::InvalidObjectId)?.parent;

        if let Some(new_parent) = parent {
            if !nodes.contains_key(new_parent) {
                return Err(ObjectError::InvalidObjectId);
            }
            // Walking up from the new parent must never reach `id`.
            let mut cursor = Some(new_parent);
            while let Some(ancestor) = cursor {
                if ancestor == id {
                    return Err(ObjectError::CircularParentage);
                }
                cursor = nodes.get(ancestor).and_then(|n| n.parent);
            }
        }

        if old_parent == parent {
            return Ok(());
        }
        if let Some(old) = old_parent.and_then(|p| nodes.get_mut(p)) {
            old.children.retain(|&child| child != id);
        }
        if let Some(new) = parent.and_then(|p| nodes.get_mut(p)) {
            new.children.push(id);
        }
        if let Some(node) = nodes.get_mut(id) {
            node.parent = parent;
        }
        Ok(())
    }

    pub fn parent(&self, id: ObjectId) -> ObjectResult<Option<ObjectId>> {
        self.nodes
            .read()
            .get(id)
            .map(|n| n.parent)
            .ok_or(ObjectError::InvalidObjectId)
    }

    /// Direct children of `id` in the order they were attached.
    pub fn children(&self, id: ObjectId) -> ObjectResult<Vec<ObjectId>> {
        self.nodes
            .read()
            .get(id)
            .map(|n| n.children.clone())
            .ok_or(ObjectError::InvalidObjectId)
    }
}

static GLOBAL_REGISTRY: OnceLock<ObjectRegistry> = OnceLock::new();

/// Create the global registry. Later calls do nothing.
pub fn init_global_registry() {
    GLOBAL_REGISTRY.get_or_init(ObjectRegistry::new);
}

/// The global registry, if [`init_global_registry`] has run.
pub fn global_registry() -> ObjectResult<&'static ObjectRegistry> {
    GLOBAL_REGISTRY.get().ok_or(ObjectError::RegistryNotInitialized)
}

/// Implemented by every type that owns an [`ObjectBase`].
pub trait Object: Send + Sync + 'static {
    fn object_id(&self) -> ObjectId;
}

/// Registration handle embedded in objects.
///
/// # Example
///
/// ```
/// use pietimer_core::{Object, ObjectBase, ObjectId};
///
/// struct Panel {
///     base: ObjectBase,
/// }
///
/// impl Object for Panel {
///     fn object_id(&self) -> ObjectId {
///         self.base.id()
///     }
/// }
///
/// let window = Panel { base: ObjectBase::new::<Panel>() };
/// let child = Panel { base: ObjectBase::new::<Panel>() };
/// child.base.set_parent(Some(window.object_id())).unwrap();
/// assert_eq!(child.base.parent(), Some(window.object_id()));
/// ```
pub struct ObjectBase {
    id: ObjectId,
}

impl ObjectBase {
    /// Register a new object of type `T`, creating the global registry if
    /// needed.
    pub fn new<T: Object>() -> Self {
        let registry = GLOBAL_REGISTRY.get_or_init(ObjectRegistry::new);
        Self {
            id: registry.register::<T>(),
        }
    }

    #[inline]
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// The parent, or `None` for roots and for objects whose parent was
    /// already destroyed.
    pub fn parent(&self) -> Option<ObjectId> {
        global_registry()
            .and_then(|r| r.parent(self.id))
            .ok()
            .flatten()
    }

    pub fn set_parent(&self, parent: Option<ObjectId>) -> ObjectResult<()> {
        global_registry()?.set_parent(self.id, parent)
    }
}

impl Drop for ObjectBase {
    fn drop(&mut self) {
        // Already gone if an ancestor was destroyed first.
        if let Ok(registry) = global_registry() {
            let _ = registry.destroy(self.id);
        }
    }
}

impl fmt::Debug for ObjectBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ObjectBase").field(&self.id).finish()
    }
}
