//! Mounting components onto a host surface
//!
//! [`Renderer::mount`] runs a definition's render function, materializes the
//! resulting template into a [`Dom`] and attaches it to a [`Surface`]. Each
//! mount gets a handle that can be unmounted exactly once:
//!
//! ```text
//! Unmounted --mount--> Mounted --unmount--> Unmounted (terminal)
//! ```
//!
//! There is no update transition; re-rendering is a fresh mount.

pub mod config;
pub mod dom;
pub mod html;

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::component::{ComponentDefinition, ComponentError, Properties, Tag};

pub use config::HtmlConfig;
pub use dom::{materialize, Dom, DomElement, DomNode};
pub use html::{render_component_html, render_html};

/// Identifier of a single mount, unique per renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MountId(u64);

impl MountId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Handle returned by [`Renderer::mount`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountHandle {
    id: MountId,
    tag: Tag,
}

impl MountHandle {
    pub fn id(&self) -> MountId {
        self.id
    }

    pub fn tag(&self) -> &Tag {
        &self.tag
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountState {
    Mounted,
    Unmounted,
}

/// Host-side target that mounted trees are attached to
pub trait Surface {
    /// Attach a freshly materialized tree
    fn attach(&mut self, handle: &MountHandle, dom: Dom);

    /// Detach a tree, returning it if it was attached
    fn detach(&mut self, handle: &MountHandle) -> Option<Dom>;
}

/// Surface keeping attached trees in memory
#[derive(Debug, Default)]
pub struct MemorySurface {
    attached: BTreeMap<MountId, (Tag, Dom)>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tree currently attached for a handle
    pub fn get(&self, handle: &MountHandle) -> Option<&Dom> {
        self.attached.get(&handle.id).map(|(_, dom)| dom)
    }

    pub fn len(&self) -> usize {
        self.attached.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attached.is_empty()
    }
}

impl Surface for MemorySurface {
    fn attach(&mut self, handle: &MountHandle, dom: Dom) {
        self.attached.insert(handle.id, (handle.tag.clone(), dom));
    }

    fn detach(&mut self, handle: &MountHandle) -> Option<Dom> {
        self.attached.remove(&handle.id).map(|(_, dom)| dom)
    }
}

/// Mounts component definitions onto a surface and tracks their state
#[derive(Debug)]
pub struct Renderer<S = MemorySurface> {
    surface: S,
    mounts: HashMap<MountId, MountState>,
    next_id: u64,
}

impl Default for Renderer<MemorySurface> {
    fn default() -> Self {
        Self::new(MemorySurface::new())
    }
}

impl<S: Surface> Renderer<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            mounts: HashMap::new(),
            next_id: 0,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Render a definition and attach the result
    ///
    /// On failure nothing is attached and no handle is issued.
    pub fn mount(
        &mut self,
        definition: &ComponentDefinition,
        properties: &Properties,
    ) -> Result<MountHandle, ComponentError> {
        let tag = definition.tag();
        let template = definition.render(properties)?;
        let dom = materialize(&template)
            .map_err(|e| ComponentError::render(tag.as_str(), e.to_string()))?;

        let handle = MountHandle {
            id: MountId(self.next_id),
            tag: tag.clone(),
        };
        self.next_id += 1;

        self.surface.attach(&handle, dom);
        self.mounts.insert(handle.id, MountState::Mounted);
        tracing::debug!(%tag, id = %handle.id, "mounted component");
        Ok(handle)
    }

    /// Detach a mounted tree; succeeds once per handle
    pub fn unmount(&mut self, handle: &MountHandle) -> Result<Dom, ComponentError> {
        match self.mounts.get_mut(&handle.id) {
            Some(state) if *state == MountState::Mounted => {
                *state = MountState::Unmounted;
                let dom = self.surface.detach(handle).unwrap_or_default();
                tracing::debug!(tag = %handle.tag, id = %handle.id, "unmounted component");
                Ok(dom)
            }
            _ => Err(ComponentError::AlreadyUnmounted {
                tag: handle.tag.to_string(),
                id: handle.id.get(),
            }),
        }
    }

    /// Current state of a handle; handles this renderer never issued are unmounted
    pub fn state(&self, handle: &MountHandle) -> MountState {
        self.mounts
            .get(&handle.id)
            .copied()
            .unwrap_or(MountState::Unmounted)
    }

    /// Number of handles currently mounted
    pub fn mounted(&self) -> usize {
        self.mounts
            .values()
            .filter(|s| **s == MountState::Mounted)
            .count()
    }
}
