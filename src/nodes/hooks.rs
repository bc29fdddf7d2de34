//! Graph listener hooks
//!
//! The graph never talks to a user interface directly. Anything that wants
//! to react to selection changes or preview refreshes registers a
//! [`GraphHooks`] implementation with [`NodeGraph::add_hooks`](crate::nodes::NodeGraph::add_hooks).

use crate::nodes::NodeId;

/// Trait for observers of graph-level events
pub trait GraphHooks {
    /// Called after the selected node changes; `None` means deselected
    fn on_selection_changed(&mut self, _selected: Option<NodeId>) {
        // Default: no special handling
    }

    /// Called after the selected node was recomputed because one of its
    /// properties changed
    fn on_preview_refresh(&mut self, _node_id: NodeId) {
        // Default: no special handling
    }
}

/// Hooks that log every event at debug level
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingHooks;

impl GraphHooks for LoggingHooks {
    fn on_selection_changed(&mut self, selected: Option<NodeId>) {
        match selected {
            Some(id) => log::debug!("Selected node {}", id),
            None => log::debug!("Selection cleared"),
        }
    }

    fn on_preview_refresh(&mut self, node_id: NodeId) {
        log::debug!("Preview refresh for node {}", node_id);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    /// Records events into a shared log for assertions
    #[derive(Clone, Default)]
    pub struct RecordingHooks {
        pub selections: Rc<RefCell<Vec<Option<NodeId>>>>,
        pub previews: Rc<RefCell<Vec<NodeId>>>,
    }

    impl GraphHooks for RecordingHooks {
        fn on_selection_changed(&mut self, selected: Option<NodeId>) {
            self.selections.borrow_mut().push(selected);
        }

        fn on_preview_refresh(&mut self, node_id: NodeId) {
            self.previews.borrow_mut().push(node_id);
        }
    }
}
