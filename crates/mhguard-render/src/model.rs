#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableVerdict {
    Pass,
    Attention,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableAction {
    pub header: String,
    pub details: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableResource {
    pub name: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub verdict: RenderableVerdict,
    pub warnings: Vec<String>,
    /// Expected to be sorted already.
    pub applicable_laws: Vec<String>,
    pub required_actions: Vec<RenderableAction>,
    pub recommendations: Vec<String>,
    pub resources: Vec<RenderableResource>,
}
