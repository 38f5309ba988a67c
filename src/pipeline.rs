use crate::config::PipelineConfig;
use crate::error::SeqError;
use crate::node::Node;
use crate::stage_id::StageId;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Context shared by every [`Seq`](crate::Seq) built from it. It records which
/// stages were chained onto which, and carries the [`PipelineConfig`]. Element
/// data never lives here.
pub struct Pipeline {
    pub(crate) inner: Rc<RefCell<PipelineInner>>,
}

pub struct PipelineInner {
    pub next_id: u64,
    pub nodes: HashMap<StageId, Node>,
    pub edges: Vec<(StageId, StageId)>,
    pub config: PipelineConfig,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::with_config(PipelineConfig::default())
    }
}

/// Clones share the same graph.
impl Clone for Pipeline {
    fn clone(&self) -> Self {
        Pipeline {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl Pipeline {
    /// Create a pipeline with the given configuration.
    pub fn with_config(config: PipelineConfig) -> Self {
        Self {
            inner: Rc::new(RefCell::new(PipelineInner {
                next_id: 0,
                nodes: HashMap::new(),
                edges: Vec::new(),
                config,
            })),
        }
    }

    /// Current configuration (copied out).
    pub fn config(&self) -> PipelineConfig {
        self.inner.borrow().config.clone()
    }

    pub(crate) fn insert_node(&self, node: Node) -> StageId {
        let mut g = self.inner.borrow_mut();
        let id = StageId::new(g.next_id);
        g.next_id += 1;
        tracing::trace!(stage = %id, kind = %node.kind, label = %node.label, "stage added");
        g.nodes.insert(id, node);
        id
    }

    pub(crate) fn connect(&self, from: StageId, to: StageId) {
        self.inner.borrow_mut().edges.push((from, to));
    }

    /// Look up one recorded stage.
    ///
    /// # Errors
    /// Returns [`SeqError::UnknownStage`] if `id` was not issued by this pipeline.
    pub fn node(&self, id: StageId) -> Result<Node, SeqError> {
        self.inner
            .borrow()
            .nodes
            .get(&id)
            .cloned()
            .ok_or(SeqError::UnknownStage(id.raw()))
    }

    /// The stage feeding `id`, if any.
    pub(crate) fn upstream(&self, id: StageId) -> Option<StageId> {
        self.inner
            .borrow()
            .edges
            .iter()
            .find(|(_, to)| *to == id)
            .map(|(from, _)| *from)
    }

    /// Copy of the recorded graph: nodes by id and `(from, to)` edges.
    pub fn snapshot(&self) -> (HashMap<StageId, Node>, Vec<(StageId, StageId)>) {
        let g = self.inner.borrow();
        (g.nodes.clone(), g.edges.clone())
    }
}
